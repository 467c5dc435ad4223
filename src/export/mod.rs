//! Snapshot export
//!
//! Rasterizes the allocation summary to a PNG file.

pub mod snapshot;

pub use snapshot::{export_snapshot, render, snapshot_filename, ExportError, SnapshotStyle};
