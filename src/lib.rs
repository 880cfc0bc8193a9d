//! Core library for the tagreport-tools command line application.
//!
//! The library exposes high-level orchestration helpers that power the
//! command-line interface as well as the integration tests. The modules are
//! structured to keep responsibilities narrow and composable: host collaborator
//! seams live under [`tagreport::tools::host`], data representations inside
//! [`tagreport::tools::model`], the tag flattening logic in
//! [`tagreport::tools::normalize`], spreadsheet serialisation under
//! [`tagreport::tools::io`], and the export orchestration in
//! [`tagreport::tools::export`].

pub mod tagreport;

pub use tagreport::tools::{ExportError, Result, error, export, host, io, model, normalize};
