use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a report was computed from: the command parameters and an optional run tag.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self { params, tag }
    }
}

/// Provenance document for `outputs`: code revision, callsite, tag, params.
#[track_caller]
pub fn document(payload: &Payload, outputs: &[String]) -> Value {
    let callsite = Location::caller();
    json!({
        "code_rev": code_rev(),
        "planarity_version": planarity::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "tag": payload.tag,
        "params": payload.params,
        "outputs": outputs
    })
}

/// Write the sidecar of `report` (see `sidecar_for`) and return its path.
#[track_caller]
pub fn write_sidecar(report: &Path, payload: &Payload) -> Result<PathBuf> {
    let sidecar = sidecar_for(report);
    match sidecar.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating report dir {}", dir.display()))?,
        _ => {}
    }
    let doc = document(payload, &[report.display().to_string()]);
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing provenance {}", sidecar.display()))?;
    Ok(sidecar)
}

/// `runs/k5.json` -> `runs/k5.provenance.json`; a missing extension is treated alike.
fn sidecar_for(report: &Path) -> PathBuf {
    report.with_extension("provenance.json")
}

/// Revision stamped into reports.
///
/// `GIT_COMMIT` wins when set at build time or run time; otherwise the
/// checkout's `HEAD`, and `"unknown"` outside a git work tree.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|rev| !rev.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_report() {
        assert_eq!(
            sidecar_for(Path::new("runs/k5.json")),
            Path::new("runs/k5.provenance.json")
        );
        assert_eq!(
            sidecar_for(Path::new("gnm-7")),
            Path::new("gnm-7.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_tag_and_output() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("nested").join("grid.json");
        let payload = Payload::new(json!({"family": "grid"}), Some("nightly".into()));
        let sidecar = write_sidecar(&report, &payload).unwrap();
        assert_eq!(sidecar, dir.path().join("nested").join("grid.provenance.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], report.display().to_string());
        assert_eq!(parsed["tag"], "nightly");
        assert_eq!(parsed["params"]["family"], "grid");
        assert_eq!(parsed["planarity_version"], planarity::VERSION);
    }

    #[test]
    fn document_without_outputs() {
        let doc = document(&Payload::new(json!({}), None), &[]);
        assert!(doc["tag"].is_null());
        assert_eq!(doc["outputs"].as_array().map(Vec::len), Some(0));
        assert!(doc["callsite"]["line"].as_u64().is_some());
        assert!(!doc["code_rev"].as_str().unwrap_or_default().is_empty());
    }
}
