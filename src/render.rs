//! Plain-text rendering of the search screen.

use crate::model::Recipe;
use std::fmt;

pub const NO_RESULTS_MESSAGE: &str = "No Recipe Found For Given Ingredients";

/// Header shown until the first search starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub features: [&'static str; 3],
}

impl Default for Hero {
    fn default() -> Self {
        Hero {
            title: "Flavour Hunt",
            tagline: "Unleash your culinary creativity with just the ingredients you have at home. \
                      Let us show you how easy it is to create something amazing with what’s in your kitchen!",
            features: ["Check", "Hunt", "Cook"],
        }
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.tagline)?;
        let badges: Vec<String> = self.features.iter().map(|b| format!("[ {} ]", b)).collect();
        writeln!(f, "{}", badges.join("  "))
    }
}

/// Summary of one recipe, borrowed from the current results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeCard<'a> {
    recipe: &'a Recipe,
}

impl<'a> RecipeCard<'a> {
    pub fn new(recipe: &'a Recipe) -> Self {
        RecipeCard { recipe }
    }

    /// Stable identity of the card within a grid
    pub fn key(&self) -> u64 {
        self.recipe.id
    }

    pub fn recipe(&self) -> &'a Recipe {
        self.recipe
    }
}

impl fmt::Display for RecipeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.recipe.title.is_empty() {
            "Untitled recipe"
        } else {
            self.recipe.title.as_str()
        };
        write!(f, "{} (#{})", title, self.recipe.id)?;
        write!(
            f,
            " - uses {}, missing {}",
            self.recipe.used_ingredient_count, self.recipe.missed_ingredient_count
        )?;
        if let Some(image) = &self.recipe.image {
            write!(f, "\n    {}", image)?;
        }
        Ok(())
    }
}

/// Content of the area below the ingredient input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSlot<'a> {
    Empty,
    Spinner,
    Grid(Vec<RecipeCard<'a>>),
    NoResults,
    Error(String),
}

impl fmt::Display for ResultSlot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultSlot::Empty => Ok(()),
            ResultSlot::Spinner => writeln!(f, "Searching..."),
            ResultSlot::Grid(cards) => {
                for card in cards {
                    writeln!(f, "  * {}", card)?;
                }
                Ok(())
            }
            ResultSlot::NoResults => writeln!(f, "{}", NO_RESULTS_MESSAGE),
            ResultSlot::Error(message) => writeln!(f, "Error: {}", message),
        }
    }
}

/// Everything the search screen displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen<'a> {
    pub hero: Option<Hero>,
    pub results: ResultSlot<'a>,
}

impl Screen<'_> {
    pub fn card_count(&self) -> usize {
        match &self.results {
            ResultSlot::Grid(cards) => cards.len(),
            _ => 0,
        }
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(hero) = &self.hero {
            writeln!(f, "{}", hero)?;
        }
        write!(f, "{}", self.results)
    }
}
