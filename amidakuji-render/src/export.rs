//! Artifact export — JSON manifest and CSV rung table.
//!
//! The manifest records everything needed to check a printed sheet: the
//! seed, the ladder fingerprint, the rows themselves, and the permutation.
//! It carries a `schema_version`; unknown versions are rejected on load.

use std::path::{Path, PathBuf};

use amidakuji_core::labels::{bottom_labels, top_labels};
use amidakuji_core::{trace, Ladder, LadderId, Permutation};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const RUNGS_FILE: &str = "rungs.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderManifest {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub seed: Option<u64>,
    pub ladder_id: LadderId,
    pub line_count: usize,
    pub row_count: usize,
    pub rung_count: usize,
    pub ladder: Ladder,
    pub permutation: Permutation,
    pub top_labels: Vec<String>,
    pub bottom_labels: Vec<String>,
    pub uncovered_lines: Vec<usize>,
}

impl LadderManifest {
    pub fn new(ladder: &Ladder, perm: &Permutation, seed: Option<u64>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            seed,
            ladder_id: LadderId::of(ladder),
            line_count: ladder.line_count(),
            row_count: ladder.row_count(),
            rung_count: ladder.rung_count(),
            ladder: ladder.clone(),
            permutation: perm.clone(),
            top_labels: top_labels(ladder.line_count()),
            bottom_labels: bottom_labels(perm),
            uncovered_lines: ladder.uncovered_lines(),
        }
    }
}

// ─── JSON ───────────────────────────────────────────────────────────

pub fn export_json(manifest: &LadderManifest) -> Result<String> {
    serde_json::to_string_pretty(manifest).context("failed to serialize ladder manifest to JSON")
}

/// Deserialize a manifest, rejecting unknown schema versions and manifests
/// whose stored permutation does not match a fresh trace of the ladder.
pub fn import_json(json: &str) -> Result<LadderManifest> {
    let manifest: LadderManifest =
        serde_json::from_str(json).context("failed to deserialize ladder manifest from JSON")?;
    if manifest.schema_version != SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (supported: {})",
            manifest.schema_version,
            SCHEMA_VERSION
        );
    }
    let traced = trace(&manifest.ladder).context("manifest ladder is malformed")?;
    if traced != manifest.permutation {
        bail!(
            "manifest permutation {:?} does not match the traced ladder {:?}",
            manifest.permutation.as_slice(),
            traced.as_slice()
        );
    }
    Ok(manifest)
}

// ─── CSV ────────────────────────────────────────────────────────────

/// One line per rung. Columns: row, left_line, right_line.
pub fn export_rungs_csv(ladder: &Ladder) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["row", "left_line", "right_line"])?;
    for rung in ladder.rungs() {
        wtr.write_record([
            rung.row.to_string(),
            rung.left.to_string(),
            rung.right().to_string(),
        ])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Write `manifest.json` and `rungs.csv` into `dir`, creating it if needed.
pub fn save_artifacts(manifest: &LadderManifest, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create artifact dir: {}", dir.display()))?;

    let json = export_json(manifest)?;
    std::fs::write(dir.join(MANIFEST_FILE), json)
        .with_context(|| format!("failed to write {MANIFEST_FILE}"))?;

    let csv = export_rungs_csv(&manifest.ladder)?;
    std::fs::write(dir.join(RUNGS_FILE), csv)
        .with_context(|| format!("failed to write {RUNGS_FILE}"))?;

    Ok(dir.to_path_buf())
}

pub fn load_manifest(dir: &Path) -> Result<LadderManifest> {
    let path = dir.join(MANIFEST_FILE);
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    import_json(&json)
}
