//! Data-space helpers: clipping to the view window, dashes, tick positions.

use crate::models::ViewBounds;

/// Clip a polyline to `view`, returning the visible runs.
///
/// Non-finite samples break the line. Runs shorter than two points are dropped.
pub fn clip_polyline<I>(points: I, view: &ViewBounds) -> Vec<Vec<(f64, f64)>>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut prev: Option<(f64, f64)> = None;
    for p in points {
        if !p.0.is_finite() || !p.1.is_finite() {
            flush(&mut runs, &mut current);
            prev = None;
            continue;
        }
        match prev {
            None => {
                if view.contains(p.0, p.1) {
                    current.push(p);
                }
            }
            Some(a) => match clip_segment(a, p, view) {
                Some((c0, c1)) => {
                    if current.last() != Some(&c0) {
                        flush(&mut runs, &mut current);
                        current.push(c0);
                    }
                    current.push(c1);
                    if c1 != p {
                        flush(&mut runs, &mut current);
                    }
                }
                None => flush(&mut runs, &mut current),
            },
        }
        prev = Some(p);
    }
    flush(&mut runs, &mut current);
    runs
}

fn flush(runs: &mut Vec<Vec<(f64, f64)>>, current: &mut Vec<(f64, f64)>) {
    if current.len() >= 2 {
        runs.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Liang-Barsky. Unclipped endpoints are returned as-is so callers can compare exactly.
fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    view: &ViewBounds,
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let edges = [
        (-dx, a.0 - view.x_min),
        (dx, view.x_max - a.0),
        (-dy, a.1 - view.y_min),
        (dy, view.y_max - a.1),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let at = |t: f64| (a.0 + t * dx, a.1 + t * dy);
    let start = if t0 <= 0.0 { a } else { at(t0) };
    let end = if t1 >= 1.0 { b } else { at(t1) };
    Some((start, end))
}

/// Split the segment `from -> to` into dashes of length `dash` separated by `gap`.
pub fn dash_segments(
    from: (f64, f64),
    to: (f64, f64),
    dash: f64,
    gap: f64,
) -> Vec<[(f64, f64); 2]> {
    let len = (to.0 - from.0).hypot(to.1 - from.1);
    if !(len > 0.0) || !(dash > 0.0) || gap < 0.0 {
        return Vec::new();
    }
    let (ux, uy) = ((to.0 - from.0) / len, (to.1 - from.1) / len);
    let at = |s: f64| (from.0 + ux * s, from.1 + uy * s);
    let mut out = Vec::new();
    let mut s = 0.0;
    while s < len {
        out.push([at(s), at((s + dash).min(len))]);
        s += dash + gap;
    }
    out
}

/// Round tick positions (steps of 1, 2 or 5 times a power of ten) inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !(span > 0.0) || target == 0 {
        return Vec::new();
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}
