/// Which zero-axis a reference line sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The line `y = 0`.
    Horizontal,
    /// The line `x = 0`.
    Vertical,
}

/// Visible window of a figure, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewBounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }

    /// Smallest window holding every finite point, padded when degenerate.
    pub fn fit<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut out: Option<Self> = None;
        for (x, y) in points {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            out = Some(match out {
                None => Self::new(x, x, y, y),
                Some(b) => Self::new(
                    b.x_min.min(x),
                    b.x_max.max(x),
                    b.y_min.min(y),
                    b.y_max.max(y),
                ),
            });
        }
        out.map(|mut b| {
            if (b.x_max - b.x_min).abs() < f64::EPSILON {
                b.x_min -= 1.0;
                b.x_max += 1.0;
            }
            if (b.y_max - b.y_min).abs() < f64::EPSILON {
                b.y_min -= 1.0;
                b.y_max += 1.0;
            }
            b
        })
    }
}

/// The fixed window `show_plot` uses: x in [-16, 16], y in [-6, 6].
pub const DEFAULT_VIEW: ViewBounds = ViewBounds::new(-16.0, 16.0, -6.0, 6.0);

/// Visual style for scatter marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkStyle {
    /// Multiples of π/4 (green ticks).
    QuarterPi,
    /// Multiples of π/6 (red ticks).
    SixthPi,
}

/// A connected line through `(xs[i], ys[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Curve {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.xs.len().min(self.ys.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unconnected marks sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Marks {
    pub points: Vec<(f64, f64)>,
    pub style: MarkStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_matches_fixed_window() {
        assert_eq!(DEFAULT_VIEW, ViewBounds::new(-16.0, 16.0, -6.0, 6.0));
    }

    #[test]
    fn fit_skips_nan_and_pads_flat_data() {
        let b = ViewBounds::fit(vec![(0.0, 2.0), (f64::NAN, 1.0), (4.0, 2.0)]).unwrap();
        assert_eq!(b, ViewBounds::new(0.0, 4.0, 1.0, 3.0));
        assert!(ViewBounds::fit(Vec::new()).is_none());
    }
}
