use std::path::PathBuf;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use tracing::info;

use crate::tagreport::tools::error::Result;
use crate::tagreport::tools::io::records_read;
use crate::tagreport::tools::model::Record;

/// MIME type identifying the exported artifact as a spreadsheet document.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Connection details reported by the host once the handshake completes.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSetup {
    /// Base URL of the workspace the feed serves.
    pub base_url: String,
}

/// Filter configuration registered with the host data feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    /// Record type the subscription is limited to.
    pub record_type: String,
    /// Attribute selection forwarded to the host query.
    pub attributes: Vec<String>,
    /// Whether the host may additionally render its own table view.
    pub allow_table_view: bool,
}

impl FeedConfig {
    /// Configuration requesting Application records together with their tags.
    pub fn applications() -> Self {
        Self {
            record_type: "Application".to_string(),
            attributes: vec![
                "name".to_string(),
                "tags {name tagGroup {name}}".to_string(),
            ],
            allow_table_view: false,
        }
    }
}

/// Inbound record feed. The host decides when records are delivered; one
/// subscription resolves exactly once with one batch.
pub trait RecordFeed {
    /// Performs the initial handshake with the host.
    fn init(&self) -> BoxFuture<'_, Result<FeedSetup>>;

    /// Registers the filter configuration and resolves with the matching
    /// records.
    fn subscribe(&self, config: FeedConfig) -> BoxFuture<'_, Result<Vec<Record>>>;
}

/// Outbound busy-indicator signal raised around long-running operations.
pub trait StatusSignal {
    /// Notifies the host shell that a long-running operation started.
    fn export_started(&self);

    /// Notifies the host shell that the operation ended.
    fn export_finished(&self);
}

/// Scoped busy indicator: raised on construction, cleared when dropped.
pub struct BusyScope<'a> {
    signal: &'a dyn StatusSignal,
}

impl<'a> BusyScope<'a> {
    /// Raises the busy indicator on the given signal.
    pub fn enter(signal: &'a dyn StatusSignal) -> Self {
        signal.export_started();
        Self { signal }
    }
}

impl Drop for BusyScope<'_> {
    fn drop(&mut self) {
        self.signal.export_finished();
    }
}

/// Downloadable file handed to the host's save collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct FileArtifact {
    /// File name presented to the user.
    pub name: String,
    /// MIME type of the file content.
    pub content_type: String,
    /// Opaque file bytes.
    pub bytes: Vec<u8>,
}

impl FileArtifact {
    /// Wraps workbook bytes as a named spreadsheet artifact.
    pub fn xlsx(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: XLSX_CONTENT_TYPE.to_string(),
            bytes,
        }
    }
}

/// Outbound save/download collaborator. Where the file lands is the
/// implementation's concern.
pub trait FileSink {
    /// Hands the artifact over for saving.
    fn save(&self, artifact: FileArtifact) -> Result<()>;
}

/// Record feed backed by a JSON document on disk, standing in for a live host.
#[derive(Debug, Clone)]
pub struct JsonFileFeed {
    path: PathBuf,
    base_url: String,
}

impl JsonFileFeed {
    /// Creates a feed reading its record batch from the given path.
    pub fn new(path: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            base_url: base_url.into(),
        }
    }
}

impl RecordFeed for JsonFileFeed {
    fn init(&self) -> BoxFuture<'_, Result<FeedSetup>> {
        future::ready(Ok(FeedSetup {
            base_url: self.base_url.clone(),
        }))
        .boxed()
    }

    fn subscribe(&self, _config: FeedConfig) -> BoxFuture<'_, Result<Vec<Record>>> {
        future::ready(records_read::read_records(&self.path)).boxed()
    }
}

/// Save collaborator that writes artifacts into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink saving into the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the given artifact name would be saved under.
    pub fn target_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl FileSink for DirectorySink {
    fn save(&self, artifact: FileArtifact) -> Result<()> {
        let path = self.target_path(&artifact.name);
        std::fs::write(&path, &artifact.bytes)?;
        info!(
            path = %path.display(),
            content_type = %artifact.content_type,
            "artifact saved"
        );
        Ok(())
    }
}

/// Busy indicator that reports transitions on the diagnostic channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSignal;

impl StatusSignal for LogSignal {
    fn export_started(&self) {
        info!("export started");
    }

    fn export_finished(&self) {
        info!("export finished");
    }
}
