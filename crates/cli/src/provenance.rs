//! Provenance sidecars: which build produced a hull report, and from what.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    fn new(params: Value, outputs: Vec<String>) -> Self {
        Self {
            code_rev: code_rev(),
            version: graham::VERSION,
            params,
            outputs,
        }
    }
}

/// Write `<stem>.provenance.json` beside `artifact`; returns the sidecar path.
pub fn write_sidecar(artifact: &Path, params: Value) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = Provenance::new(params, vec![artifact.to_string_lossy().into_owned()]);
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Block printed by `graham report`: no params, no outputs.
pub fn summary() -> Provenance {
    Provenance::new(Value::Object(Default::default()), Vec::new())
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` baked in at build time, else from the environment, else `"unknown"`.
fn code_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(String::from),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|s| !s.is_empty())
    .unwrap_or_else(|| "unknown".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/hull.json")),
            Path::new("/tmp/output/hull.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("report")),
            Path::new("report.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.json");
        std::fs::write(&artifact, "{}").unwrap();
        let path = write_sidecar(&artifact, json!({"input": "pts.txt", "n_hull": 4})).unwrap();
        assert_eq!(path, dir.path().join("hull.provenance.json"));
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["n_hull"], 4);
        assert_eq!(parsed["version"], graham::VERSION);
        assert!(!parsed["code_rev"].as_str().unwrap().is_empty());
    }

    #[test]
    fn summary_has_no_outputs() {
        let v = serde_json::to_value(summary()).unwrap();
        assert!(v["outputs"].as_array().unwrap().is_empty());
        assert!(v["params"].as_object().unwrap().is_empty());
    }
}
