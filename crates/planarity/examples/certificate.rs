//! Print the verdict, rotations, or certificate for a few named graphs.
//!
//! Usage:
//!   cargo run -p planarity --example certificate
//!   cargo run -p planarity --example certificate -- petersen
//!
//! Planar graphs print their clockwise rotation per vertex and the face count;
//! non-planar ones print the Kuratowski kind, branch vertices, and paths.

use planarity::prelude::*;

fn main() {
    let which = std::env::args().nth(1);
    let graphs = [
        ("k4", families::complete(4)),
        ("k5", families::complete(5)),
        ("k33", families::complete_bipartite(3, 3)),
        ("petersen", families::petersen()),
        ("wheel6", families::wheel(6)),
    ];
    for (name, g) in graphs.iter() {
        if which.as_deref().is_some_and(|w| w != *name) {
            continue;
        }
        println!("== {name}: V={} E={}", g.vertex_count(), g.edge_count());
        match test_planarity(g, true) {
            PlanarityResult::Planar { embedding } => {
                for (v, rot) in embedding.rotation_system().iter().enumerate() {
                    let rot: Vec<String> = rot.iter().map(ToString::to_string).collect();
                    println!("  v{v}: [{}]", rot.join(", "));
                }
                match embedding.face_count() {
                    Ok(f) => println!("  planar, F={f}"),
                    Err(err) => println!("  planar, face tracing failed: {err}"),
                }
            }
            PlanarityResult::NonPlanar { certificate } => {
                let Some(cert) = certificate else {
                    println!("  non-planar");
                    continue;
                };
                let branch: Vec<String> =
                    cert.branch_vertices.iter().map(ToString::to_string).collect();
                println!(
                    "  non-planar: {} subdivision, {} edges, branch [{}]",
                    cert.kind,
                    cert.edges.len(),
                    branch.join(", ")
                );
                for path in &cert.paths {
                    let path: Vec<String> = path.iter().map(ToString::to_string).collect();
                    println!("    {}", path.join(" - "));
                }
            }
        }
    }
}
