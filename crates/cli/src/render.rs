//! LaTeX/graphviz export of assignment multigraphs.
//!
//! One standalone LaTeX document per run: every assignment becomes a
//! `\digraph` with the points on a circle (labelled by leg count) and one
//! undirected edge per line between each pair.

use std::f64::consts::PI;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use wicks::prelude::*;

/// Render all assignments of a spec as one LaTeX document.
pub fn assignment_sheet(all: &[Assignment], points: &PointLegs) -> String {
    let n = points.n_points();
    let mut doc = String::new();
    doc.push_str("\\documentclass{standalone}\n");
    doc.push_str("\\usepackage[pdf]{graphviz}\n\n");
    doc.push_str("\\begin{document}\n\n");

    for (graph, ass) in all.iter().enumerate() {
        let node = |i: usize| format!("N_{graph}_{i}");
        let _ = writeln!(doc, "\\digraph{{G{graph}}}{{ ");
        for i in 0..n {
            let angle = 2.0 * PI * i as f64 / n as f64;
            let _ = writeln!(
                doc,
                "{} [ label=\"{}\" pos=\"{},{}!\" shape=\"circle\"];",
                node(i),
                points.leg_count(i),
                angle.cos(),
                angle.sin()
            );
        }
        let mut cell = 0;
        for row in 0..n {
            for col in row + 1..n {
                for _ in 0..ass[cell] {
                    let _ = writeln!(doc, "{} -> {} [arrowhead=none]", node(row), node(col));
                }
                cell += 1;
            }
        }
        doc.push_str("}\n");
    }

    doc.push_str("\\end{document}\n");
    doc
}

/// Write the sheet to `path`.
pub fn write_assignment_sheet(path: &Path, all: &[Assignment], points: &PointLegs) -> Result<()> {
    std::fs::write(path, assignment_sheet(all, points))
        .with_context(|| format!("writing diagram sheet {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn triangle() -> (PointLegs, Vec<Assignment>) {
        let points = PointLegs::new(vec![2, 2, 2]).unwrap();
        let all = AssignmentsFinder::new(points.clone()).find_all_assignments();
        (points, all)
    }

    #[test]
    fn sheet_contains_one_graph_per_assignment_and_one_edge_per_line() {
        let (points, all) = triangle();
        let sheet = assignment_sheet(&all, &points);
        assert!(sheet.starts_with("\\documentclass{standalone}"));
        assert_eq!(sheet.matches("\\digraph").count(), all.len());
        // The unique triangle assignment has one line per pair.
        assert_eq!(sheet.matches("[arrowhead=none]").count(), 3);
        assert_eq!(sheet.matches("shape=\"circle\"").count(), 3);
    }

    #[test]
    fn sheet_is_written_to_disk() {
        let (points, all) = triangle();
        let dir = tempdir().unwrap();
        let path = dir.path().join("assignments.tex");
        write_assignment_sheet(&path, &all, &points).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.ends_with("\\end{document}\n"));
    }
}
