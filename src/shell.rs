//! Interactive session state
//!
//! Holds the headline list currently on screen and the selection rules
//! over it. The list is replaced wholesale on every new search.

/// Shown when the keyword prompt is submitted empty
pub const EMPTY_KEYWORD_NOTICE: &str = "Please enter a keyword.";
/// Shown when a search matched nothing
pub const NO_RESULTS_NOTICE: &str = "No news found for that keyword.";
/// Shown when the selection prompt names no listed headline
pub const BAD_SELECTION_NOTICE: &str = "Please select a news headline first.";

/// Parsed entry at the selection prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    /// Zero-based index of a listed headline
    Headline(usize),
    NewSearch,
    Quit,
    Invalid,
}

/// Headline list backing one interactive session
pub struct Session {
    headlines: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            headlines: Vec::new(),
        }
    }

    /// Swap in the results of the latest search
    pub fn replace(&mut self, headlines: Vec<String>) {
        self.headlines = headlines;
    }

    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }

    pub fn headlines(&self) -> &[String] {
        &self.headlines
    }

    /// Headline at a zero-based index
    pub fn select(&self, index: usize) -> Option<&str> {
        self.headlines.get(index).map(String::as_str)
    }

    /// Parse a selection prompt entry against the current list.
    /// Numbers are 1-based as displayed.
    pub fn parse_choice(&self, input: &str) -> Choice {
        let trimmed = input.trim();

        match trimmed {
            "q" | "quit" => return Choice::Quit,
            "s" | "search" => return Choice::NewSearch,
            _ => {}
        }

        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 && n <= self.headlines.len() => Choice::Headline(n - 1),
            _ => Choice::Invalid,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
