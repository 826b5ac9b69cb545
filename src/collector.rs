//! Line based ingredient collector for the terminal front-end.

use crate::model::IngredientList;
use std::collections::HashSet;

/// What the user asked for on one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(IngredientList),
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":q" | "quit" | "exit" => Command::Quit,
            other => Command::Submit(parse_line(other)),
        }
    }
}

/// Split a free-form line into a finalized ingredient list.
///
/// Entries are comma separated. Duplicates are compared case-insensitively
/// and only the first spelling is kept.
pub fn parse_line(line: &str) -> IngredientList {
    let mut seen = HashSet::new();
    line.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter(|entry| seen.insert(entry.to_lowercase()))
        .collect()
}
