use clap::Parser;
use flavour_hunt::collector::parse_line;
use flavour_hunt::{build_service, interactive, SearchConfig, SearchSession};
use log::{debug, info};
use tokio::io::BufReader;

#[derive(Parser)]
#[command(author, version, about = "Find recipes from the ingredients you already have")]
struct Cli {
    /// Ingredients to search once; starts an interactive prompt when omitted
    ingredients: Vec<String>,

    /// Base URL of the recipe search API
    #[arg(long)]
    base_url: Option<String>,

    /// API key for the recipe search API
    #[arg(long)]
    api_key: Option<String>,

    /// Search timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Maximum number of recipes per search
    #[arg(long)]
    max_results: Option<u32>,
}

impl Cli {
    fn apply(&self, config: &mut SearchConfig) {
        if let Some(base_url) = &self.base_url {
            config.service.base_url = base_url.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.service.api_key = Some(api_key.clone());
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(max_results) = self.max_results {
            config.service.max_results = max_results;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = SearchConfig::load()?;
    cli.apply(&mut config);
    debug!("{:?}", config);

    let service = build_service(&config)?;
    info!("Using {} search service", service.service_name());
    let mut session = SearchSession::new(service);

    if !cli.ingredients.is_empty() {
        let list = parse_line(&cli.ingredients.join(","));
        let view = session.search(list).await;
        print!("{}", view.render());
        return Ok(());
    }

    let stdin = BufReader::new(tokio::io::stdin());
    interactive::run(&mut session, stdin, &mut std::io::stdout()).await?;

    Ok(())
}
