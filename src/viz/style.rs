//! Colors and stroke settings shared by the renderer.

use crate::models::MarkStyle;
use plotters::prelude::*;

/// Tableau-10 series palette, in cycle order.
const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // blue    (#1F77B4)
    RGBColor(255, 127, 14),  // orange  (#FF7F0E)
    RGBColor(44, 160, 44),   // green   (#2CA02C)
    RGBColor(214, 39, 40),   // red     (#D62728)
    RGBColor(148, 103, 189), // purple  (#9467BD)
    RGBColor(140, 86, 75),   // brown   (#8C564B)
    RGBColor(227, 119, 194), // pink    (#E377C2)
    RGBColor(127, 127, 127), // gray    (#7F7F7F)
    RGBColor(188, 189, 34),  // olive   (#BCBD22)
    RGBColor(23, 190, 207),  // cyan    (#17BECF)
];

pub const LINE_WIDTH: u32 = 2;

/// Half height of a π-mark tick, in pixels.
pub const MARK_HALF_HEIGHT: i32 = 6;

/// Reference line dash pattern, in pixels.
pub const DASH_PX: f64 = 6.0;
pub const GAP_PX: f64 = 4.0;

pub const GRID_COLOR: RGBColor = RGBColor(176, 176, 176);

/// Line color for the `idx`-th curve.
#[inline]
pub fn series_color(idx: usize) -> RGBAColor {
    TAB10[idx % TAB10.len()].to_rgba()
}

pub fn line_style(idx: usize) -> ShapeStyle {
    series_color(idx).stroke_width(LINE_WIDTH)
}

/// Dashed zero-axis lines are thin and black.
pub fn reference_style() -> ShapeStyle {
    BLACK.stroke_width(1)
}

pub fn grid_style() -> ShapeStyle {
    GRID_COLOR.mix(0.6).stroke_width(1)
}

pub fn mark_color(style: MarkStyle) -> RGBColor {
    match style {
        MarkStyle::QuarterPi => RGBColor(0, 128, 0),
        MarkStyle::SixthPi => RED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(series_color(0), series_color(10));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn pi_mark_styles_are_distinct() {
        assert_ne!(mark_color(MarkStyle::QuarterPi), mark_color(MarkStyle::SixthPi));
    }
}
