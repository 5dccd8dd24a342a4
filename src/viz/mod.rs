//! Rendering of a [`Figure`] with plotters: **SVG** or **PNG** files, or an RGB
//! buffer for the viewer.
//!
//! - Curves are clipped to the view window; NaN samples break a line
//! - Dashed black zero-axis reference lines
//! - Optional grid, legend (upper right) and π-mark ticks
//! - Tick labels and legend text need a registered font (see [`fonts`])

pub mod fonts;
pub mod geometry;
pub mod style;

use crate::models::{Axis, ViewBounds};
use crate::surface::Figure;
use anyhow::{Result, anyhow, bail};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;

use geometry::{clip_polyline, dash_segments, nice_ticks};

const MARGIN: i32 = 12;
const FONT: &str = "sans-serif";

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Render `figure` to `out_path`. The `.svg` extension selects SVG, anything else a bitmap
/// whose format follows the extension.
pub fn render_to_file<P: AsRef<Path>>(
    figure: &Figure,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    check_size(width, height)?;
    let fonts = fonts::ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    log::info!("rendering {}x{} plot to {}", width, height, out_path.display());

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_figure(root, figure, fonts)
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_figure(root, figure, fonts)
    }
}

/// Render `figure` into a packed RGB buffer (`width * height * 3` bytes).
pub fn render_to_rgb(figure: &Figure, width: u32, height: u32) -> Result<Vec<u8>> {
    check_size(width, height)?;
    let fonts = fonts::ensure_fonts_registered();
    let mut buf = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw_figure(root, figure, fonts)?;
    }
    Ok(buf)
}

fn check_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        bail!("invalid plot size {width}x{height}");
    }
    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_figure<DB>(root: DrawingArea<DB, Shift>, figure: &Figure, fonts: bool) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    let view = figure.effective_view();

    let mut builder = ChartBuilder::on(&root);
    builder.margin(MARGIN);
    if fonts {
        if !figure.title().is_empty() {
            builder.caption(figure.title(), (FONT, 20));
        }
        builder
            .set_label_area_size(LabelAreaPosition::Left, 40)
            .set_label_area_size(LabelAreaPosition::Bottom, 30);
    }
    let mut chart = builder
        .build_cartesian_2d(view.x_min..view.x_max, view.y_min..view.y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    if fonts {
        let mut mesh = chart.configure_mesh();
        mesh.x_labels(9)
            .y_labels(7)
            .max_light_lines(0)
            .bold_line_style(style::grid_style())
            .label_style((FONT, 13));
        if !figure.grid() {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(|e| anyhow!("{:?}", e))?;
    } else if figure.grid() {
        draw_grid(&mut chart, &view)?;
    }

    draw_curves(&mut chart, figure, &view)?;
    draw_reference_lines(&mut chart, figure.reference_lines(), &view)?;

    for marks in figure.marks() {
        let color = style::mark_color(marks.style);
        let visible: Vec<(f64, f64)> = marks
            .points
            .iter()
            .copied()
            .filter(|&(x, y)| view.contains(x, y))
            .collect();
        chart
            .draw_series(PointSeries::of_element(
                visible,
                style::MARK_HALF_HEIGHT,
                color.stroke_width(2),
                &|c, s, st| EmptyElement::at(c) + PathElement::new(vec![(0, -s), (0, s)], st),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    if let Some(labels) = figure.legend() {
        if !fonts {
            log::warn!("legend with {} label(s) skipped: no font available", labels.len());
        } else if !labels.is_empty() && !figure.curves().is_empty() {
            chart
                .configure_series_labels()
                .border_style(&BLACK)
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.85))
                .label_font((FONT, 14))
                .draw()
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_curves<DB>(chart: &mut Chart<'_, DB>, figure: &Figure, view: &ViewBounds) -> Result<()>
where
    DB: DrawingBackend,
{
    let labels = figure.legend().unwrap_or(&[]);
    for (idx, curve) in figure.curves().iter().enumerate() {
        let stroke = style::line_style(idx);
        let runs: Vec<PathElement<(f64, f64)>> = clip_polyline(curve.points(), view)
            .into_iter()
            .map(|run| PathElement::new(run, stroke))
            .collect();
        let anno = chart
            .draw_series(runs)
            .map_err(|e| anyhow!("{:?}", e))?;
        // Legend entries follow curve order; extra labels have no curve to describe.
        if let Some(label) = labels.get(idx) {
            let color = style::series_color(idx);
            let stroke = color.stroke_width(style::LINE_WIDTH);
            anno.label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], stroke));
        }
    }
    Ok(())
}

fn draw_reference_lines<DB>(
    chart: &mut Chart<'_, DB>,
    axes: &[Axis],
    view: &ViewBounds,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let (width_px, height_px) = chart.plotting_area().dim_in_pixel();
    for axis in axes {
        let (from, to, span_px) = match axis {
            Axis::Vertical if view.x_min <= 0.0 && 0.0 <= view.x_max => {
                ((0.0, view.y_min), (0.0, view.y_max), height_px)
            }
            Axis::Horizontal if view.y_min <= 0.0 && 0.0 <= view.y_max => {
                ((view.x_min, 0.0), (view.x_max, 0.0), width_px)
            }
            _ => continue,
        };
        let per_px = (to.0 - from.0 + to.1 - from.1).abs() / f64::from(span_px.max(1));
        let dashes = dash_segments(from, to, style::DASH_PX * per_px, style::GAP_PX * per_px);
        chart
            .draw_series(
                dashes
                    .into_iter()
                    .map(|[a, b]| PathElement::new(vec![a, b], style::reference_style())),
            )
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// Grid for the no-font path, where the mesh (and its labels) is not drawn.
fn draw_grid<DB>(chart: &mut Chart<'_, DB>, view: &ViewBounds) -> Result<()>
where
    DB: DrawingBackend,
{
    let vertical = nice_ticks(view.x_min, view.x_max, 8)
        .into_iter()
        .map(|x| vec![(x, view.y_min), (x, view.y_max)]);
    let horizontal = nice_ticks(view.y_min, view.y_max, 6)
        .into_iter()
        .map(|y| vec![(view.x_min, y), (view.x_max, y)]);
    chart
        .draw_series(
            vertical
                .chain(horizontal)
                .map(|line| PathElement::new(line, style::grid_style())),
        )
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
