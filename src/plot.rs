//! PNG output for runs and sweeps.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::life::metrics::OnCountSeries;
use crate::life::population::Population;
use crate::sweep::SweepReport;

const NIGHT: RGBColor = RGBColor(51, 24, 50);
const LIT: RGBColor = RGBColor(0xfd, 0xd3, 0x10);
const DARK: RGBColor = RGBColor(0x6a, 0x8f, 0x9c);

/// On-count over time, y axis fixed to `[0, population]`.
pub fn render_on_count(
    out_path: &Path,
    series: &OnCountSeries,
    population: usize,
) -> Result<(), Box<dyn Error>> {
    let x_max = series.len().max(1);
    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fireflies on per tick", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0usize..x_max, 0usize..population.max(1))?;

    chart
        .configure_mesh()
        .x_desc("tick")
        .y_desc("on count")
        .draw()?;

    chart.draw_series(LineSeries::new(series.points(), &BLUE))?;
    root.present()?;
    Ok(())
}

/// Mean steady-state amplitude against radius.
pub fn render_sweep(out_path: &Path, report: &SweepReport) -> Result<(), Box<dyn Error>> {
    let x_max = report
        .points
        .iter()
        .map(|p| p.radius)
        .fold(0.0f64, f64::max)
        .max(1e-3);
    let y_max = report
        .points
        .iter()
        .map(|p| p.mean_amplitude)
        .fold(0.0f64, f64::max)
        .max(1.0);

    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Mean amplitude vs neighbor radius", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..(x_max * 1.05), 0.0f64..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("radius")
        .y_desc("mean (max - min) / 2")
        .draw()?;

    chart.draw_series(
        report
            .points
            .iter()
            .map(|p| Circle::new((p.radius, p.mean_amplitude), 4, BLUE.filled())),
    )?;
    if let Some(best) = report.best() {
        chart.draw_series(std::iter::once(Circle::new(
            (best.radius, best.mean_amplitude),
            6,
            RED.filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Snapshot of the field: every firefly at its position, lit or dark.
pub fn render_field(out_path: &Path, pop: &Population) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, (700, 700)).into_drawing_area();
    root.fill(&NIGHT)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .build_cartesian_2d(0.0f64..1.0f64, 0.0f64..1.0f64)?;

    chart.draw_series(pop.oscillators().iter().map(|osc| {
        let pos = osc.position();
        let color = if osc.is_on() { LIT } else { DARK };
        Circle::new((pos.x, pos.y), 3, color.filled())
    }))?;

    root.present()?;
    Ok(())
}
