//! CLI execution

use super::commands::Cli;
use crate::client::Client;
use crate::engine::EngineConfig;
use crate::error::Result;
use crate::query::UpcomingQuery;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Runs the CLI: builds a client from the arguments and streams pages
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Stream the listing to stdout until the chain ends or Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let fallbacks: Vec<&str> = self.cli.api_key.as_deref().into_iter().collect();
        // interval_at rejects a zero period
        let cadence = Duration::from_millis(self.cli.cadence_ms.max(1));
        let client = Client::from_env(&fallbacks)?
            .with_engine_config(EngineConfig::new().with_cadence(cadence));

        let cancel = CancellationToken::new();
        let ctrl_c = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received, stopping after the current page");
                ctrl_c.cancel();
            }
        });

        let mut query = UpcomingQuery::new().cancel(cancel);
        if let Some(limit) = self.cli.page_limit {
            query = query.items_per_page(limit);
        }
        if let Some(page) = self.cli.page {
            query = query.max_page(page);
        }
        if let Some(country) = &self.cli.country {
            query = query.country(country.clone());
        }

        let mut pages = client.upcoming_movies(Some(&query))?;
        let mut page_count = 0u64;

        while let Some(item) = pages.next_page().await {
            let page = item?;
            page_count += 1;
            println!("-- page {page_count} ({} total upcoming) --", page.total);
            for movie in &page.movies {
                let date = movie
                    .release_dates
                    .get("theater")
                    .map(String::as_str)
                    .unwrap_or("TBA");
                println!("{} ({}) [{}] opens {date}", movie.title, movie.year, movie.mpaa_rating);
            }

            if self.cli.max_pages > 0 && page_count >= self.cli.max_pages {
                break;
            }
        }

        info!(pages = page_count, "listing finished");
        Ok(())
    }
}
