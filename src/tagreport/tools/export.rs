use tracing::{debug, error, info, instrument};

use crate::tagreport::tools::error::Result;
use crate::tagreport::tools::host::{BusyScope, FeedConfig, FileArtifact, FileSink, RecordFeed, StatusSignal};
use crate::tagreport::tools::io::excel_write;
use crate::tagreport::tools::model::{ColumnSpec, DisplayRow, application_columns};
use crate::tagreport::tools::normalize;

/// File name of the exported workbook artifact.
pub const EXPORT_FILE_NAME: &str = "document.xlsx";

/// Mutable state threaded through the report operations.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Base URL reported by the host handshake.
    pub base_url: String,
    /// Column layout used for the export.
    pub columns: Vec<ColumnSpec>,
    /// Display rows derived from the most recent feed delivery.
    pub rows: Vec<DisplayRow>,
}

impl AppState {
    /// Creates the initial state with the Application column layout and no
    /// rows.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            columns: application_columns(),
            rows: Vec::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the host handshake and loads the current tagged records into the
/// state. Rows derived from an earlier delivery are replaced wholesale.
#[instrument(level = "info", skip_all)]
pub async fn refresh(state: &mut AppState, feed: &dyn RecordFeed) -> Result<()> {
    let setup = feed.init().await?;
    state.base_url = setup.base_url;

    let records = feed.subscribe(FeedConfig::applications()).await?;
    info!(record_count = records.len(), "records delivered by host feed");

    state.rows = normalize::normalize(&records);
    Ok(())
}

/// Serialises the columns and rows into an xlsx artifact and hands it to the
/// save collaborator. The busy indicator is raised before serialisation
/// starts and cleared on every exit path.
#[instrument(level = "info", skip_all, fields(row_count = rows.len()))]
pub fn export_to_xlsx(
    signal: &dyn StatusSignal,
    sink: &dyn FileSink,
    columns: &[ColumnSpec],
    rows: &[DisplayRow],
) -> Result<()> {
    let _busy = BusyScope::enter(signal);

    let bytes = excel_write::write_buffer(columns, rows)?;
    debug!(byte_count = bytes.len(), "workbook serialised");

    sink.save(FileArtifact::xlsx(EXPORT_FILE_NAME, bytes))
}

/// Best-effort variant of [`export_to_xlsx`]: failures are reported on the
/// diagnostic channel and swallowed.
pub fn export_best_effort(
    signal: &dyn StatusSignal,
    sink: &dyn FileSink,
    columns: &[ColumnSpec],
    rows: &[DisplayRow],
) {
    if let Err(err) = export_to_xlsx(signal, sink, columns, rows) {
        error!(error = %err, "error while exporting to excel");
    }
}
