//! The drawing surface curves are sent to, and [`Figure`], the surface that records them.

use crate::models::{Axis, Curve, MarkStyle, Marks, ViewBounds};
use anyhow::Result;
use std::path::Path;

/// Drawing commands a plot is built from.
///
/// `display` is terminal: it hands the finished drawing to a viewer and blocks
/// until the viewer is closed.
pub trait Surface {
    /// Connected line through `(xs[i], ys[i])`.
    fn draw_line(&mut self, xs: Vec<f64>, ys: Vec<f64>);
    fn draw_scatter(&mut self, points: Vec<(f64, f64)>, style: MarkStyle);
    fn draw_reference_line(&mut self, axis: Axis);
    fn set_view_bounds(&mut self, bounds: ViewBounds);
    /// Labels for the line curves, in the order the curves were drawn.
    fn attach_legend(&mut self, labels: &[String]);
    fn enable_grid(&mut self);
    fn display(self) -> Result<()>
    where
        Self: Sized;
}

/// An in-memory figure: remembers every command and renders on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    title: String,
    curves: Vec<Curve>,
    marks: Vec<Marks>,
    reference_lines: Vec<Axis>,
    view: Option<ViewBounds>,
    legend: Option<Vec<String>>,
    grid: bool,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn marks(&self) -> &[Marks] {
        &self.marks
    }

    pub fn reference_lines(&self) -> &[Axis] {
        &self.reference_lines
    }

    pub fn view(&self) -> Option<ViewBounds> {
        self.view
    }

    pub fn legend(&self) -> Option<&[String]> {
        self.legend.as_deref()
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    /// The window to render: explicit bounds, else the data extent, else the default view.
    pub fn effective_view(&self) -> ViewBounds {
        self.view.unwrap_or_else(|| {
            let points = self
                .curves
                .iter()
                .flat_map(|c| c.points())
                .chain(self.marks.iter().flat_map(|m| m.points.iter().copied()));
            ViewBounds::fit(points).unwrap_or(crate::models::DEFAULT_VIEW)
        })
    }

    /// Render to `path`; `.svg` selects the SVG backend, anything else is written as a bitmap.
    pub fn save<P: AsRef<Path>>(&self, path: P, width: u32, height: u32) -> Result<()> {
        crate::viz::render_to_file(self, path, width, height)
    }

    /// Render into a tightly packed RGB buffer of `width * height * 3` bytes.
    pub fn render_rgb(&self, width: u32, height: u32) -> Result<Vec<u8>> {
        crate::viz::render_to_rgb(self, width, height)
    }
}

impl Surface for Figure {
    fn draw_line(&mut self, xs: Vec<f64>, ys: Vec<f64>) {
        log::debug!("figure: line with {} points", xs.len().min(ys.len()));
        self.curves.push(Curve { xs, ys });
    }

    fn draw_scatter(&mut self, points: Vec<(f64, f64)>, style: MarkStyle) {
        self.marks.push(Marks { points, style });
    }

    fn draw_reference_line(&mut self, axis: Axis) {
        self.reference_lines.push(axis);
    }

    fn set_view_bounds(&mut self, bounds: ViewBounds) {
        self.view = Some(bounds);
    }

    fn attach_legend(&mut self, labels: &[String]) {
        self.legend = Some(labels.to_vec());
    }

    fn enable_grid(&mut self) {
        self.grid = true;
    }

    fn display(self) -> Result<()> {
        crate::viewer::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_VIEW;

    #[test]
    fn records_commands_in_order() {
        let mut fig = Figure::new();
        fig.draw_line(vec![0.0, 1.0], vec![0.0, 1.0]);
        fig.draw_line(vec![0.0], vec![2.0]);
        fig.draw_reference_line(Axis::Vertical);
        fig.attach_legend(&["a".to_string()]);
        assert_eq!(fig.curves().len(), 2);
        assert_eq!(fig.curves()[1].ys, vec![2.0]);
        assert_eq!(fig.reference_lines(), &[Axis::Vertical]);
        assert_eq!(fig.legend(), Some(&["a".to_string()][..]));
        assert!(!fig.grid());
    }

    #[test]
    fn effective_view_prefers_explicit_bounds() {
        let mut fig = Figure::new();
        assert_eq!(fig.effective_view(), DEFAULT_VIEW);
        fig.draw_line(vec![0.0, 2.0], vec![-1.0, 3.0]);
        assert_eq!(fig.effective_view(), ViewBounds::new(0.0, 2.0, -1.0, 3.0));
        fig.set_view_bounds(DEFAULT_VIEW);
        assert_eq!(fig.effective_view(), DEFAULT_VIEW);
    }
}
