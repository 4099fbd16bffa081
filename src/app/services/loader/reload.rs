//! Latest-wins reload coordination
//!
//! Every reload takes a generation ticket before it starts fetching. When the
//! fetch and parse finish, the result is stored only if no newer ticket has
//! been issued in the meantime. A slow, stale fetch therefore can never replace
//! data from a newer one.

use super::source::DataSource;
use crate::app::models::TourismRecord;
use crate::app::services::record_parser::{ParseStats, RecordParser};
use crate::config::Config;
use crate::Result;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Ticket identifying one reload request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Records from one completed fetch + parse
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub generation: Generation,
    pub source: String,
    pub records: Vec<TourismRecord>,
    pub stats: ParseStats,
    pub loaded_at: DateTime<Utc>,
}

/// What happened to a finished reload
#[derive(Debug, Clone, PartialEq)]
pub enum ReloadOutcome {
    /// Dataset became the current one
    Applied(Arc<LoadedDataset>),
    /// A newer reload was started; this result was discarded
    Superseded { generation: Generation, latest: Generation },
}

impl ReloadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReloadOutcome::Applied(_))
    }

    pub fn dataset(&self) -> Option<&Arc<LoadedDataset>> {
        match self {
            ReloadOutcome::Applied(dataset) => Some(dataset),
            ReloadOutcome::Superseded { .. } => None,
        }
    }
}

/// Fetches, parses and holds the current tourism dataset
#[derive(Debug)]
pub struct RecordLoader {
    parser: RecordParser,
    client: reqwest::Client,
    latest: AtomicU64,
    current: Mutex<Option<Arc<LoadedDataset>>>,
}

impl RecordLoader {
    pub fn new(parser: RecordParser, client: reqwest::Client) -> Self {
        Self {
            parser,
            client,
            latest: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// Build a loader with parser settings and HTTP timeout from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::new(RecordParser::from_config(config), client))
    }

    /// Issue a new ticket; any older ticket can no longer commit
    pub fn begin(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn latest_generation(&self) -> Generation {
        Generation(self.latest.load(Ordering::SeqCst))
    }

    /// Store a dataset if its ticket is still the newest issued
    pub fn commit(&self, dataset: LoadedDataset) -> ReloadOutcome {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());

        let latest = self.latest_generation();
        if dataset.generation != latest {
            warn!(
                "Discarding reload {} from {}: superseded by {}",
                dataset.generation.value(),
                dataset.source,
                latest.value()
            );
            return ReloadOutcome::Superseded {
                generation: dataset.generation,
                latest,
            };
        }

        let dataset = Arc::new(dataset);
        *current = Some(Arc::clone(&dataset));
        debug!("Applied reload {}", dataset.generation.value());
        ReloadOutcome::Applied(dataset)
    }

    /// Fetch and parse a source, then commit it under a fresh ticket
    pub async fn reload(&self, source: &DataSource) -> Result<ReloadOutcome> {
        let generation = self.begin();
        info!("Reload {} started: {}", generation.value(), source);

        let bytes = source.fetch(&self.client).await?;
        let result = self.parser.parse_bytes_with_stats(&bytes)?;

        Ok(self.commit(LoadedDataset {
            generation,
            source: source.to_string(),
            records: result.records,
            stats: result.stats,
            loaded_at: Utc::now(),
        }))
    }

    /// Most recently applied dataset
    pub fn current(&self) -> Option<Arc<LoadedDataset>> {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Drop the current dataset; in-flight reloads may still commit
    pub fn clear(&self) {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn parser(&self) -> &RecordParser {
        &self.parser
    }
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::new(RecordParser::default(), reqwest::Client::new())
    }
}
