//! Amidakuji Render — page layout, PDF output, and run artifacts.
//!
//! This crate builds on `amidakuji-core` to provide:
//! - Layout configuration with TOML loading
//! - Pure sheet geometry (rails, rungs, labels, footer)
//! - PDF rendering through `printpdf`
//! - JSON manifest and CSV rung table export

pub mod config;
pub mod export;
pub mod layout;
pub mod pdf;

pub use config::{ConfigError, LayoutConfig};
pub use export::{
    export_json, export_rungs_csv, import_json, load_manifest, save_artifacts, LadderManifest,
    SCHEMA_VERSION,
};
pub use layout::{compute_layout, Drawing, Segment, SegmentKind, SheetMeta, TextItem};
pub use pdf::{render_pdf, render_pdf_bytes, RenderError};
