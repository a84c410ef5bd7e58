//! CLI runner - drains the fetcher and maps the outcome to an exit status

use crate::cli::commands::Cli;
use crate::config::ExtractConfig;
use crate::error::{Error, Result, FAILURE_EXIT_CODE};
use crate::fetch::{FetchStats, PageFetcher};
use crate::http::{HttpClient, HttpClientConfig};
use crate::logging::{LogConfig, LogHandle};
use crate::pagination::OffsetPaginator;
use crate::types::Record;
use futures::TryStreamExt;
use std::io::Write;
use std::time::Instant;
use tracing::instrument::WithSubscriber;
use tracing::{debug, error, info, warn};

/// Header carrying a Socrata application token
pub const APP_TOKEN_HEADER: &str = "X-App-Token";

/// Outcome of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records kept in memory at the end of the run
    pub records: usize,
    /// Fetch statistics
    pub stats: FetchStats,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the extraction and return the process exit status.
    ///
    /// Logging is scoped to this call: the log file is opened here and
    /// flushed before returning. The extraction future carries the log
    /// handle with it, so the runtime flavor does not matter.
    pub async fn run(&self) -> i32 {
        let config = match self.config() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return FAILURE_EXIT_CODE;
            }
        };

        let log_config = LogConfig::new(&config.log_file)
            .with_console_directive(if self.cli.verbose { "debug" } else { "info" });
        let log = match LogHandle::new(&log_config) {
            Ok(log) => log,
            Err(e) => {
                eprintln!("Error: failed to open log file '{}': {e}", config.log_file.display());
                return FAILURE_EXIT_CODE;
            }
        };
        {
            let _guard = log.enter();
            debug!(log_file = %log.path().display(), "Logging to file");
        }

        let outcome = self
            .extract(&config)
            .with_subscriber(log.dispatch().clone())
            .await;

        let _guard = log.enter();
        match outcome {
            Ok(summary) => {
                info!(
                    records = summary.records,
                    pages = summary.stats.pages_fetched,
                    duration_ms = summary.stats.duration_ms,
                    "Extraction complete"
                );
                0
            }
            Err(e) if e.is_transport() => {
                error!("An error occurred while making the request. {e}");
                e.exit_code()
            }
            Err(e) => {
                error!("Extraction failed: {e}");
                eprintln!("Error: {e}");
                e.exit_code()
            }
        }
    }

    /// Resolve the configuration: defaults, then the YAML file, then flags
    pub fn config(&self) -> Result<ExtractConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ExtractConfig::from_file(path)?,
            None => ExtractConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(limit) = self.cli.limit {
            config.limit = limit;
        }
        if let Some(offset) = self.cli.offset {
            config.offset = offset;
        }
        if let Some(log_file) = &self.cli.log_file {
            config.log_file.clone_from(log_file);
        }
        if let Some(token) = &self.cli.app_token {
            config.app_token = Some(token.clone());
        }

        Ok(config)
    }

    /// Drain every page into memory, honoring `--max-records`
    async fn extract(&self, config: &ExtractConfig) -> Result<RunSummary> {
        let start = Instant::now();

        let mut http_config = HttpClientConfig::builder().timeout(config.timeout());
        if let Some(token) = &config.app_token {
            http_config = http_config.header(APP_TOKEN_HEADER, token);
        }
        let http_config = http_config.build();
        let client = HttpClient::with_config(http_config)?;
        let fetcher = PageFetcher::new(client, config.page_request())
            .with_paginator(OffsetPaginator::new(&config.limit_param, &config.offset_param));

        info!(
            url = %fetcher.request().url(),
            limit = config.limit,
            offset = config.offset,
            "Starting extraction"
        );

        let mut stored: Vec<Record> = Vec::new();
        let mut stats = FetchStats::new();

        if self.cli.max_records != Some(0) {
            let pages = fetcher.pages();
            futures::pin_mut!(pages);
            while let Some(page) = pages.try_next().await? {
                stats.add_page(page.len());
                stored.extend(page.records);

                if let Some(max) = self.cli.max_records {
                    if stored.len() >= max {
                        stored.truncate(max);
                        warn!(max, "Record limit reached, stopping before exhaustion");
                        break;
                    }
                }
            }
        }

        stats.set_duration(start.elapsed().as_millis() as u64);

        if self.cli.print {
            let stdout = std::io::stdout();
            write_records(stdout.lock(), &stored)?;
        }

        Ok(RunSummary {
            records: stored.len(),
            stats,
        })
    }
}

/// Write records as JSON lines
fn write_records(writer: impl Write, records: &[Record]) -> Result<()> {
    let mut out = std::io::BufWriter::new(writer);
    for record in records {
        serde_json::to_writer(&mut out, record).map_err(|e| Error::Io(e.into()))?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
