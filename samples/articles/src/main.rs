//! articles
//!
//! Prints the results of the point-free exercises.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use articles::Report;
use articles::config::Settings;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "articles=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::parse();
    tracing::debug!(?settings, "parsed settings");

    let articles = settings
        .load_articles()
        .context("could not load the articles to run the exercises on")?;
    tracing::info!(count = articles.len(), "running exercises");

    let report = Report::run(&settings, &articles);
    for line in report.lines() {
        println!("{line}");
    }

    Ok(())
}
