//! Keyword news search with sentiment-based fake news screening
//!
//! Fetches headlines for a keyword and classifies a selected headline's
//! likely veracity through a star-rating sentiment model.

pub mod client;
pub mod config;
pub mod error;
pub mod shell;
pub mod verdict;
