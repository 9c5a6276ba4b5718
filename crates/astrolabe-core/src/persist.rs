// ─────────────────────────────────────────────────────────────────────
// Astrolabe — Append-Only Star Log
// ─────────────────────────────────────────────────────────────────────
//! Persisted atlas state: one JSON record per line, in commit order.
//!
//! Records are appended and never rewritten; replaying the log
//! reconstructs the atlas with identical ordering across process
//! restarts. Any other storage honoring append-only semantics could
//! substitute for this layout.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use astrolabe_types::{AstrolabeError, AstrolabeResult, Star};

use crate::atlas::Atlas;

/// Append one committed star to the log.
pub fn append_star(path: &Path, star: &Star) -> AstrolabeResult<()> {
    let line = serde_json::to_string(star)
        .map_err(|e| AstrolabeError::Log(format!("encode seq {}: {e}", star.seq)))?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AstrolabeError::Log(format!("open {}: {e}", path.display())))?;
    writeln!(file, "{line}")
        .map_err(|e| AstrolabeError::Log(format!("append {}: {e}", path.display())))?;
    Ok(())
}

/// Replay the log into an atlas. A missing file is an empty atlas.
pub fn load_atlas(path: &Path, falloff: f64) -> AstrolabeResult<Atlas> {
    if !path.exists() {
        return Ok(Atlas::new(falloff));
    }

    let file = File::open(path)
        .map_err(|e| AstrolabeError::Log(format!("open {}: {e}", path.display())))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line =
            line.map_err(|e| AstrolabeError::Log(format!("read {}: {e}", path.display())))?;
        if line.trim().is_empty() {
            continue;
        }
        let star: Star = serde_json::from_str(&line)
            .map_err(|e| AstrolabeError::Log(format!("line {}: {e}", lineno + 1)))?;
        records.push(star);
    }

    Atlas::from_records(records, falloff)
}
