//! Pagination engine
//!
//! The fetch loop at the heart of the crate. Each [`PaginationEngine::start`]
//! spawns one independent task that, on a fixed cadence, fetches the current
//! URL, parses the response, emits the page on a bounded channel, and follows
//! the server's `next` link until the chain ends.
//!
//! Termination, for any reason, closes the output stream exactly once:
//! - exhaustion (no usable `next` link) closes it cleanly;
//! - a transport, status, or decode error is delivered as a final `Err` item
//!   and then closes it;
//! - cancellation closes it with no further items;
//! - a dropped consumer stops the loop.
//!
//! Pages are emitted strictly in fetch order with at most one fetch in
//! flight; the size-1 channel means the engine gets at most one page ahead of
//! the consumer.

mod types;

pub use types::{EngineConfig, EngineState, EngineStats, DEFAULT_CADENCE};

use crate::decode;
use crate::error::Result;
use crate::http::HttpClient;
use crate::model::MoviePage;
use crate::pagination::{resolve_next, NextPage};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Output channel capacity: the consumer handoff buffers a single page.
const PAGE_BUFFER: usize = 1;

pin_project! {
    /// Lazy, single-pass stream of fetched pages
    ///
    /// Yields `Ok(page)` per successful fetch; a steady-state failure arrives
    /// as one final `Err` before the stream ends. Not restartable: once the
    /// stream ends it stays ended.
    pub struct PageStream {
        #[pin]
        inner: ReceiverStream<Result<MoviePage>>,
    }
}

impl PageStream {
    /// Receive the next page, `None` once the run has stopped
    pub async fn next_page(&mut self) -> Option<Result<MoviePage>> {
        use futures::StreamExt;
        self.inner.next().await
    }
}

impl Stream for PageStream {
    type Item = Result<MoviePage>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }
}

impl std::fmt::Debug for PageStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStream").finish_non_exhaustive()
    }
}

/// Engine driving one paginated listing fetch at a time
#[derive(Debug, Clone)]
pub struct PaginationEngine {
    http: HttpClient,
    config: EngineConfig,
}

impl PaginationEngine {
    /// Create an engine over the given transport
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            config: EngineConfig::default(),
        }
    }

    /// Set the engine configuration
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Start a pagination run from the given page-1 URL
    ///
    /// Spawns the fetch loop as an independent task and returns the page
    /// stream immediately. A missing token means the run is not cancellable.
    pub fn start(&self, initial_url: impl Into<String>, cancel: Option<CancellationToken>) -> PageStream {
        let (tx, rx) = mpsc::channel(PAGE_BUFFER);
        let worker = Worker {
            http: self.http.clone(),
            config: self.config.clone(),
            cancel: cancel.unwrap_or_default(),
        };
        tokio::spawn(worker.run(initial_url.into(), tx));

        PageStream {
            inner: ReceiverStream::new(rx),
        }
    }
}

/// State owned by one spawned pagination run
struct Worker {
    http: HttpClient,
    config: EngineConfig,
    cancel: CancellationToken,
}

impl Worker {
    async fn run(self, mut url: String, tx: mpsc::Sender<Result<MoviePage>>) {
        let started = Instant::now();
        let mut stats = EngineStats::default();
        let mut state = EngineState::Idle;

        let first_tick = tokio::time::Instant::now() + self.config.cadence;
        let mut ticker = tokio::time::interval_at(first_tick, self.config.cadence);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        debug!(
            state = ?state,
            url = %url,
            cadence_ms = self.config.cadence.as_millis() as u64,
            "pagination starting"
        );
        state = EngineState::Running;

        while state == EngineState::Running {
            // Cancellation takes precedence over a due tick.
            tokio::select! {
                biased;
                () = self.cancel.cancelled() => {
                    debug!("pagination cancelled");
                    state = EngineState::Stopped;
                    continue;
                }
                _ = ticker.tick() => {}
            }

            let response = if self.config.abort_in_flight {
                tokio::select! {
                    biased;
                    () = self.cancel.cancelled() => {
                        debug!("pagination cancelled mid-fetch");
                        state = EngineState::Stopped;
                        continue;
                    }
                    response = self.http.get(&url) => response,
                }
            } else {
                self.http.get(&url).await
            };

            let page = match response {
                Ok(response) => decode::parse_page(response).await,
                Err(err) => Err(err),
            };
            let page = match page {
                Ok(page) => page,
                Err(err) => {
                    warn!(url = %url, error = %err, "pagination stopped on error");
                    // Surface the failure as the stream's final item.
                    let _ = tx.send(Err(err)).await;
                    state = EngineState::Stopped;
                    continue;
                }
            };

            stats.add_page(page.movies.len());
            let next = resolve_next(page.links.as_ref());

            // Blocks until the consumer accepts the page; a dropped
            // receiver ends the run.
            if tx.send(Ok(page)).await.is_err() {
                debug!("consumer dropped the page stream");
                state = EngineState::Stopped;
                continue;
            }

            match next {
                NextPage::Continue { url: next_url } => url = next_url,
                NextPage::Done => state = EngineState::Stopped,
            }
        }

        debug!(
            pages = stats.pages_emitted,
            movies = stats.movies_seen,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "pagination stopped"
        );
        // tx drops here, closing the stream.
    }
}
