//! Multi-panel scatter figure of atomic positions.
//!
//! Reproduces the classic exploratory view of a structure model: one 3D
//! scatter of per-residue reference atoms colored by chain, flanked by three
//! 2D projections (X/Y, X/Z and Z/Y). Water molecules are pulled out of
//! their chains and overlaid on every panel as black triangles.

use crate::residues::ResidueExt;
use pdbtbx::*;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// Reference points for one chain, keyed for the legend.
struct ChainTrace {
    id: String,
    points: Vec<(f64, f64, f64)>,
}

/// One reference atom per residue: the first atom encountered, which is the
/// backbone nitrogen for amino acids and the phosphate for nucleotides.
/// Waters are split off into their own trace.
fn reference_points(pdb: &PDB) -> (Vec<ChainTrace>, Vec<(f64, f64, f64)>) {
    let mut traces: Vec<ChainTrace> = Vec::new();
    let mut waters: Vec<(f64, f64, f64)> = Vec::new();

    for model in pdb.models() {
        for chain in model.chains() {
            let mut points = Vec::new();
            for res in chain.residues() {
                let Some(atom) = res.atoms().next() else {
                    continue;
                };
                if res.is_water() {
                    waters.push(atom.pos());
                } else {
                    points.push(atom.pos());
                }
            }
            if !points.is_empty() {
                traces.push(ChainTrace {
                    id: chain.id().to_string(),
                    points,
                });
            }
        }
    }

    (traces, waters)
}

/// Padded coordinate ranges over all reference points, one per axis.
fn axis_ranges(traces: &[ChainTrace], waters: &[(f64, f64, f64)]) -> [Range<f64>; 3] {
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    let all = traces
        .iter()
        .flat_map(|t| t.points.iter())
        .chain(waters.iter());
    for &(x, y, z) in all {
        for (k, v) in [x, y, z].into_iter().enumerate() {
            min[k] = min[k].min(v);
            max[k] = max[k].max(v);
        }
    }

    [0usize, 1, 2].map(|k| {
        if min[k] > max[k] {
            return 0.0..1.0;
        }
        let pad = ((max[k] - min[k]) * 0.05).max(1.0);
        (min[k] - pad)..(max[k] + pad)
    })
}

fn project(point: &(f64, f64, f64), axis: usize) -> f64 {
    match axis {
        0 => point.0,
        1 => point.1,
        _ => point.2,
    }
}

/// Render the projection figure for a structure and save it as a PNG.
///
/// # Arguments
///
/// * `pdb` - Reference to a PDB structure
/// * `title` - Figure title, typically the model name
/// * `output` - Path of the image to write
/// * `size` - Image dimensions in pixels, e.g. `(1600, 900)`
///
/// # Example
///
/// ```no_run
/// use pdbsketch::{load_model, render_projections};
/// use std::path::Path;
///
/// let (pdb, _warnings) = load_model("path/to/structure.cif").unwrap();
/// render_projections(&pdb, "MYC - DNA Binding", Path::new("model.png"), (1600, 900)).unwrap();
/// ```
pub fn render_projections(
    pdb: &PDB,
    title: &str,
    output: &Path,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let (traces, waters) = reference_points(pdb);
    debug!(
        "Plotting {} chain trace(s) and {} water(s)",
        traces.len(),
        waters.len()
    );
    let ranges = axis_ranges(&traces, &waters);

    let root = BitMapBackend::new(output, size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 40))?;

    // Large 3D panel on the left, stacked 2D projections on the right
    let (main, side) = root.split_horizontally((size.0 as f32 * 0.7) as i32);
    let panels = side.split_evenly((3, 1));

    let mut chart3d = ChartBuilder::on(&main).margin(10).build_cartesian_3d(
        ranges[0].clone(),
        ranges[1].clone(),
        ranges[2].clone(),
    )?;
    chart3d.configure_axes().draw()?;

    for (ci, trace) in traces.iter().enumerate() {
        let color = Palette99::pick(ci).mix(0.9);
        chart3d
            .draw_series(
                trace
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, 3, color.filled())),
            )?
            .label(format!("Chain {}", trace.id))
            .legend(move |(x, y)| Circle::new((x + 8, y), 4, color.filled()));
    }
    chart3d.draw_series(
        waters
            .iter()
            .map(|&point| TriangleMarker::new(point, 7, BLACK.filled())),
    )?;
    chart3d
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    // The 2D panels are unlabeled scatter views, one per projection plane
    let views = [("X/Y", 0usize, 1usize), ("X/Z", 0, 2), ("Z/Y", 2, 1)];
    for (panel, (caption, h, v)) in panels.iter().zip(views) {
        let mut chart = ChartBuilder::on(panel)
            .caption(caption, ("sans-serif", 20))
            .margin(10)
            .build_cartesian_2d(ranges[h].clone(), ranges[v].clone())?;

        for (ci, trace) in traces.iter().enumerate() {
            let color = Palette99::pick(ci).mix(0.9);
            chart.draw_series(trace.points.iter().map(|point| {
                Circle::new((project(point, h), project(point, v)), 1, color.filled())
            }))?;
        }
        chart.draw_series(waters.iter().map(|point| {
            TriangleMarker::new((project(point, h), project(point, v)), 4, BLACK.filled())
        }))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tests::load_test_model;

    #[test]
    fn splits_waters_from_chain_traces() {
        let pdb = load_test_model();
        let (traces, waters) = reference_points(&pdb);

        // Chain W holds only waters and yields no trace of its own
        let ids: Vec<_> = traces.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(traces[0].points.len(), 3);
        assert_eq!(traces[1].points.len(), 3);
        assert_eq!(waters.len(), 3);
    }

    #[test]
    fn ranges_cover_all_points() {
        let pdb = load_test_model();
        let (traces, waters) = reference_points(&pdb);
        let ranges = axis_ranges(&traces, &waters);

        for &(x, y, z) in traces.iter().flat_map(|t| t.points.iter()) {
            assert!(ranges[0].contains(&x));
            assert!(ranges[1].contains(&y));
            assert!(ranges[2].contains(&z));
        }
    }

    #[test]
    fn empty_model_gets_default_ranges() {
        let ranges = axis_ranges(&[], &[]);
        assert_eq!(ranges[0], 0.0..1.0);
    }

    #[test]
    fn writes_a_png() {
        let pdb = load_test_model();
        let out = std::env::temp_dir().join("pdbsketch_plot_test.png");

        render_projections(&pdb, "two chains", &out, (800, 450)).unwrap();

        let meta = std::fs::metadata(&out).unwrap();
        assert!(meta.len() > 0);
        let _ = std::fs::remove_file(out);
    }
}
