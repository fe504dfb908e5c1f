use anyhow::{Context, Result};
use planarity::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// JSON summary of one planarity test.
#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub label: String,
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub planar: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faces: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificateReport>,
}

#[derive(Debug, Serialize)]
pub struct CertificateReport {
    pub kind: String,
    pub branch_vertices: Vec<usize>,
    pub edges: Vec<(usize, usize)>,
}

impl GraphReport {
    pub fn new(label: impl Into<String>, g: &Graph, res: &PlanarityResult) -> Result<Self> {
        let faces = match res.embedding() {
            Some(emb) => Some(emb.face_count().context("tracing faces of the embedding")?),
            None => None,
        };
        let certificate = res.certificate().map(|cert| CertificateReport {
            kind: cert.kind.to_string(),
            branch_vertices: cert.branch_vertices.iter().map(|v| v.0).collect(),
            edges: cert.edges.iter().map(|&(u, v)| (u.0, v.0)).collect(),
        });
        Ok(Self {
            label: label.into(),
            vertices: g.vertex_count(),
            edges: g.edge_count(),
            components: g.components().len(),
            planar: res.is_planar(),
            faces,
            certificate,
        })
    }
}

/// Pretty-print `value` to `out`, creating parent directories.
pub fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn planar_report_has_faces() {
        let g = families::wheel(5);
        let res = test_planarity(&g, true);
        let report = GraphReport::new("wheel", &g, &res).unwrap();
        assert!(report.planar);
        assert_eq!(report.vertices, 6);
        assert_eq!(report.edges, 10);
        // V − E + F = 2
        assert_eq!(report.faces, Some(6));
        assert!(report.certificate.is_none());
    }

    #[test]
    fn non_planar_report_carries_certificate() {
        let g = families::complete(5);
        let report = GraphReport::new("k5", &g, &test_planarity(&g, true)).unwrap();
        assert!(!report.planar);
        assert!(report.faces.is_none());
        let cert = report.certificate.unwrap();
        assert_eq!(cert.kind, "K5");
        assert_eq!(cert.edges.len(), 10);
        assert_eq!(cert.branch_vertices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn skipped_fields_are_absent() {
        let g = families::complete(5);
        let report = GraphReport::new("k5", &g, &test_planarity(&g, false)).unwrap();
        let v: Value = serde_json::to_value(&report).unwrap();
        assert_eq!(v["planar"], false);
        assert!(v.get("faces").is_none());
        assert!(v.get("certificate").is_none());
    }

    #[test]
    fn write_json_creates_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("a").join("b").join("r.json");
        write_json(&out, &vec![1, 2, 3]).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::json!([1, 2, 3]));
    }
}
