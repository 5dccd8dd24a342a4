//! Named real functions and `arange`-style sampling.

use crate::error::ConfigError;
use std::borrow::Cow;

/// A real function with a display name, used for the legend when no label is given.
///
/// Any `Fn(f64) -> f64` is a `Function`. Its name is derived from the type:
/// fn items report their last path segment (`f64::sin` becomes `"sin"`), closures
/// report `"<closure>"`, and fn pointers or boxed trait objects, whose type says
/// nothing about which function they hold, report `"<function>"`. Use [`named`]
/// to pick the name explicitly.
pub trait Function {
    fn name(&self) -> Cow<'_, str>;
    fn eval(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(short_type_name(std::any::type_name::<F>()))
    }

    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A function paired with an explicit name.
#[derive(Clone)]
pub struct Named<F> {
    name: String,
    f: F,
}

/// Attach `name` to `f`.
pub fn named<F>(name: impl Into<String>, f: F) -> Named<F>
where
    F: Fn(f64) -> f64,
{
    Named {
        name: name.into(),
        f,
    }
}

impl<F> Function for Named<F>
where
    F: Fn(f64) -> f64,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Best-effort short name from `std::any::type_name` output.
fn short_type_name(full: &'static str) -> &'static str {
    if full.contains("{{closure}}") {
        return "<closure>";
    }
    // `fn(f64) -> f64`, `Box<dyn Fn(f64) -> f64>` and the like
    if full.trim_start_matches('&').starts_with("fn(") || full.contains("dyn ") {
        return "<function>";
    }
    // Drop generic arguments so `foo::<f64>` reports `foo`.
    let base = match full.find("::<") {
        Some(idx) if !full[idx..].starts_with("::<impl") => &full[..idx],
        _ => full,
    };
    base.rsplit("::").next().unwrap_or(base)
}

/// Largest number of samples a single curve may take.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Number of samples `arange` produces for the range. A float, so that ranges
/// far beyond [`MAX_SAMPLES`] can be reported without overflow.
pub fn sample_count(start: f64, stop: f64, step: f64) -> f64 {
    let n = ((stop - start) / step).ceil();
    if n.is_nan() || n <= 0.0 { 0.0 } else { n }
}

/// Fails with [`ConfigError::TooManySamples`] if the range exceeds [`MAX_SAMPLES`].
pub fn check_sample_count(start: f64, stop: f64, step: f64) -> Result<(), ConfigError> {
    let count = sample_count(start, stop, step);
    if count > MAX_SAMPLES as f64 {
        return Err(ConfigError::TooManySamples { count });
    }
    Ok(())
}

/// Half-open arithmetic sequence `start, start + step, ...` strictly below `stop`.
///
/// Element `i` is `start + i * step` and the length is `ceil((stop - start) / step)`,
/// so accumulated rounding never adds a trailing sample. The range must have passed
/// [`check_sample_count`].
pub(crate) fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = sample_count(start, stop, step) as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

fn quadratic(x: f64) -> f64 {
    x * x + x / 2.0
}

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: [&str; 8] = ["sin", "cos", "tan", "exp", "ln", "sqrt", "abs", "quadratic"];

/// Look up one of the built-in functions by name (case-insensitive).
pub fn builtin(name: &str) -> Option<Named<fn(f64) -> f64>> {
    let f: fn(f64) -> f64 = match name.to_ascii_lowercase().as_str() {
        "sin" => f64::sin,
        "cos" => f64::cos,
        "tan" => f64::tan,
        "exp" => f64::exp,
        "ln" => f64::ln,
        "sqrt" => f64::sqrt,
        "abs" => f64::abs,
        "quadratic" => quadratic,
        _ => return None,
    };
    Some(named(name.to_ascii_lowercase(), f))
}
