//! Point-free exercises over a small collection of article records.
//!
//! # Exercises
//!
//! - [`length`](exercises::length): word lengths of a sentence
//! - [`names`](exercises::names): author names, from `get`, `map` and `compose!` only
//! - [`is_author`](exercises::is_author): authorship, composing `contains` onto `names`
//! - [`average`](exercises::average): mean of a list, from `fork`, `divide`, `sum` and `size`
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin articles
//! cargo run --bin articles -- --articles samples/articles/data/articles.json --author "Foo Bar"
//! RUST_LOG=articles=debug cargo run --bin articles -- --numbers 2 4 9
//! ```

pub mod config;
pub mod error;
pub mod exercises;

use pointfree::record::Collection;

use crate::config::Settings;
use crate::exercises::{average, is_author, length, names};

/// One line of output per exercise, in the order they are printed.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Word lengths of the configured sentence.
    pub lengths: Vec<usize>,
    /// Author names of the articles.
    pub names: Collection,
    /// Each configured name with whether it authored an article.
    pub authorship: Vec<(String, bool)>,
    /// Mean of the configured numbers.
    pub average: f64,
}

impl Report {
    /// Runs every exercise against `settings` and `articles`.
    pub fn run(settings: &Settings, articles: &Collection) -> Self {
        let authorship = settings
            .authors
            .iter()
            .map(|author| (author.clone(), is_author(author, articles.clone())))
            .collect();

        Self {
            lengths: length()(settings.sentence.as_str()),
            names: names()(articles.clone()),
            authorship,
            average: average()(settings.numbers.clone()),
        }
    }

    /// Renders the report as printable lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{:?}", self.lengths),
            serde_json::Value::Array(self.names.clone()).to_string(),
        ];
        lines.extend(
            self.authorship
                .iter()
                .map(|(_, authored)| authored.to_string()),
        );
        lines.push(self.average.to_string());
        lines
    }
}
