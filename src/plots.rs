//! Three-panel link quality chart (RTT, loss rate, bandwidth)

use crate::errors::{AnalyzerError, Result};
use crate::types::TimeSeries;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const METRICS_PNG: &str = "metrics.png";
pub const METRICS_SVG: &str = "metrics.svg";

/// Output resolution in dots per inch
pub const DPI: u32 = 300;
/// Figure size in inches (width, height)
pub const FIGURE_INCHES: (u32, u32) = (12, 10);
/// Pixel size of the rendered chart
pub const CHART_SIZE: (u32, u32) = (FIGURE_INCHES.0 * DPI, FIGURE_INCHES.1 * DPI);

const TITLE: &str = "5G Link Quality Metrics";

#[derive(Clone, Debug, Default)]
pub struct ChartOptions {
    /// Also write an SVG rendering next to the PNG
    pub svg: bool,
}

struct Panel<'a> {
    values: &'a [f64],
    y_desc: &'a str,
    color: RGBColor,
    caption: Option<&'a str>,
    x_desc: Option<&'a str>,
}

/// Point size for `pt` typographic points at the chart DPI
fn pt(points: u32) -> u32 {
    points * DPI / 72
}

fn plot_err<E: std::fmt::Display>(e: E) -> AnalyzerError {
    AnalyzerError::Plot(e.to_string())
}

/// Render `series` to `<outdir>/metrics.png` (and `metrics.svg` when asked).
///
/// Returns the written paths, PNG first. Existing files are overwritten.
pub fn render_metrics(
    series: &TimeSeries,
    outdir: &Path,
    options: &ChartOptions,
) -> Result<Vec<PathBuf>> {
    if series.is_empty() {
        return Err(AnalyzerError::EmptySeries("chart"));
    }
    std::fs::create_dir_all(outdir)?;

    let mut written = Vec::with_capacity(2);

    let png = outdir.join(METRICS_PNG);
    plot_metrics_png(series, &png)?;
    written.push(png);

    if options.svg {
        let svg = outdir.join(METRICS_SVG);
        plot_metrics_svg(series, &svg)?;
        written.push(svg);
    }

    Ok(written)
}

fn plot_metrics_png(series: &TimeSeries, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    draw_metrics(series, &root)?;
    root.present().map_err(plot_err)?;
    debug!("Rendered {}", path.display());
    Ok(())
}

fn plot_metrics_svg(series: &TimeSeries, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    draw_metrics(series, &root)?;
    root.present().map_err(plot_err)?;
    debug!("Rendered {}", path.display());
    Ok(())
}

fn draw_metrics<DB: DrawingBackend>(series: &TimeSeries, root: &DrawingArea<DB, Shift>) -> Result<()>
where
    <DB as plotters::prelude::DrawingBackend>::ErrorType: 'static,
{
    let loss_pct: Vec<f64> = series.loss_rate().iter().map(|v| v * 100.0).collect();

    let panels = [
        Panel {
            values: series.rtt_ms(),
            y_desc: "RTT (ms)",
            color: BLUE,
            caption: Some(TITLE),
            x_desc: None,
        },
        Panel {
            values: &loss_pct,
            y_desc: "Loss rate (%)",
            color: RED,
            caption: None,
            x_desc: None,
        },
        Panel {
            values: series.bandwidth_mbps(),
            y_desc: "Bandwidth (Mbps)",
            color: GREEN,
            caption: None,
            x_desc: Some("Time (s)"),
        },
    ];

    let areas = root.split_evenly((panels.len(), 1));
    for (area, panel) in areas.iter().zip(panels.iter()) {
        draw_panel(series.timestamps(), panel, area)?;
    }
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    xs: &[f64],
    panel: &Panel<'_>,
    area: &DrawingArea<DB, Shift>,
) -> Result<()>
where
    <DB as plotters::prelude::DrawingBackend>::ErrorType: 'static,
{
    let x_range = padded_range(xs, 0.0);
    let y_range = padded_range(panel.values, 0.05);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(pt(8))
        .x_label_area_size(pt(28))
        .y_label_area_size(pt(48));
    if let Some(caption) = panel.caption {
        builder.caption(
            caption,
            ("sans-serif", pt(14)).into_font().style(FontStyle::Bold),
        );
    }

    let mut chart = builder
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.y_desc(panel.y_desc)
        .axis_desc_style(("sans-serif", pt(12)))
        .label_style(("sans-serif", pt(10)))
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(WHITE);
    if let Some(x_desc) = panel.x_desc {
        mesh.x_desc(x_desc);
    }
    mesh.draw().map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(panel.values.iter().copied()),
            panel.color.stroke_width(pt(1)),
        ))
        .map_err(plot_err)?;

    Ok(())
}

/// `min..max` of `values`, widened by `pad` of the span; never empty
fn padded_range(values: &[f64], pad: f64) -> std::ops::Range<f64> {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }

    let span = hi - lo;
    if span <= f64::EPSILON {
        return (lo - 1.0)..(hi + 1.0);
    }
    (lo - span * pad)..(hi + span * pad)
}
