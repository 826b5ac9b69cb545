//! Prompt loop reading one ingredient line per submission.

use crate::collector::Command;
use crate::session::{SearchSession, Update};
use log::debug;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const PROMPT: &str = "Ingredients (comma separated, :q to quit):";

enum Step {
    Input(Option<String>),
    Update(Option<Update>),
}

/// Read submissions from `input` and redraw the screen into `out` after
/// every state change.
///
/// When `input` reaches end of file the search still in flight is awaited
/// and its outcome drawn before returning.
pub async fn run<R, W>(session: &mut SearchSession, input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    draw(session, out, true)?;

    loop {
        let step = tokio::select! {
            line = lines.next_line() => Step::Input(line?),
            update = session.next_event() => Step::Update(update),
        };

        match step {
            Step::Input(None) => {
                session.settle().await;
                draw(session, out, false)?;
                break;
            }
            Step::Input(Some(line)) => match Command::parse(&line) {
                Command::Quit => break,
                Command::Submit(list) => {
                    session.submit(list);
                }
            },
            Step::Update(None) => break,
            Step::Update(Some(update)) => debug!("{:?}", update),
        }

        draw(session, out, true)?;
    }

    Ok(())
}

fn draw<W: Write>(session: &SearchSession, out: &mut W, prompt: bool) -> io::Result<()> {
    write!(out, "{}", session.view().render())?;
    if prompt {
        writeln!(out, "{}", PROMPT)?;
    }
    out.flush()
}
