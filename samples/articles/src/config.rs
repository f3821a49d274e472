//! Command-line configuration and input loading.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use pointfree::record::{Collection, Record};

use crate::error::SampleError;
use crate::exercises::sample_articles;

/// Runs the point-free exercises and prints their results.
#[derive(Debug, Clone, Parser)]
#[command(name = "articles", version, about)]
pub struct Settings {
    /// JSON file holding an array of article records; defaults to the built-in sample
    #[arg(long, env = "ARTICLES_FILE")]
    pub articles: Option<PathBuf>,

    /// Sentence whose word lengths are printed
    #[arg(long, default_value = "once uppon the time")]
    pub sentence: String,

    /// Names to check for authorship (repeatable)
    #[arg(long = "author", default_values_t = [String::from("random guy"), String::from("Baz Baz")])]
    pub authors: Vec<String>,

    /// Values to average
    #[arg(long, num_args = 1.., default_values_t = [1.0, 2.0, 3.0, 4.0, 5.0])]
    pub numbers: Vec<f64>,
}

impl Settings {
    /// Returns the configured articles, or the built-in sample when no file is given.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] if the file cannot be read, is not JSON, or is
    /// not an array.
    pub fn load_articles(&self) -> Result<Collection, SampleError> {
        self.articles
            .as_deref()
            .map_or_else(|| Ok(sample_articles()), load_articles)
    }
}

/// Reads a JSON array of article records from `path`.
///
/// # Errors
///
/// Returns [`SampleError`] if the file cannot be read, is not JSON, or is
/// not an array.
pub fn load_articles(path: &Path) -> Result<Collection, SampleError> {
    let contents = fs::read_to_string(path).map_err(|source| SampleError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Record =
        serde_json::from_str(&contents).map_err(|source| SampleError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    match document {
        Record::Array(articles) => {
            tracing::debug!(path = %path.display(), count = articles.len(), "loaded articles");
            Ok(articles)
        }
        other => Err(SampleError::NotACollection {
            path: path.to_path_buf(),
            found: json_type(&other),
        }),
    }
}

const fn json_type(value: &Record) -> &'static str {
    match value {
        Record::Null => "null",
        Record::Bool(_) => "a boolean",
        Record::Number(_) => "a number",
        Record::String(_) => "a string",
        Record::Array(_) => "an array",
        Record::Object(_) => "an object",
    }
}
