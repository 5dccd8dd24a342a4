//! [`PlotConfig`]: validated plot options plus the operations that feed a [`Surface`].
//!
//! Curves go straight to the surface as they are added; the config only keeps the
//! options and the legend labels. `show_plot` consumes the config, so a figure is
//! finalized exactly once.

use crate::error::ConfigError;
use crate::function::{Function, arange, check_sample_count};
use crate::models::{Axis, DEFAULT_VIEW, MarkStyle};
use crate::surface::{Figure, Surface};
use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::f64::consts::{FRAC_PI_4, FRAC_PI_6};
use std::path::{Path, PathBuf};

pub const DEFAULT_START: f64 = -20.0;
pub const DEFAULT_STOP: f64 = 20.0;
pub const DEFAULT_STEP: f64 = 0.01;

/// Legend label for raw coordinate series added without one.
pub const ARGS_LEGEND: &str = "func by args";

/// Largest number of `(+m, -m)` pairs in one π-mark sequence.
pub const MAX_MARKS: usize = 1_000_000;

/// Plot options and the surface the curves are drawn on.
#[derive(Debug, Clone)]
pub struct PlotConfig<S: Surface = Figure> {
    start_value: f64,
    stop_value: f64,
    step: f64,
    need_pi_marks: bool,
    need_grid: bool,
    need_legend: bool,
    legend: Vec<String>,
    surface: S,
}

impl PlotConfig<Figure> {
    /// A config drawing on a fresh [`Figure`], with the default range `[-20, 20)`
    /// and step `0.01`.
    pub fn new(need_pi_marks: bool, need_grid: bool, need_legend: bool) -> Self {
        Self::with_surface(Figure::new(), need_pi_marks, need_grid, need_legend)
    }

    /// Finalize like [`show_plot`](Self::show_plot) but write the figure to `path`
    /// (`.svg` or a bitmap format) instead of opening a window.
    pub fn save_plot<P: AsRef<Path>>(self, path: P, width: u32, height: u32) -> Result<()> {
        let path = path.as_ref();
        let figure = self.into_surface()?;
        figure
            .save(path, width, height)
            .with_context(|| format!("saving plot to {}", path.display()))?;
        log::info!("wrote plot to {}", path.display());
        Ok(())
    }
}

impl Default for PlotConfig<Figure> {
    fn default() -> Self {
        Self::new(false, false, false)
    }
}

impl<S: Surface> PlotConfig<S> {
    pub fn with_surface(
        surface: S,
        need_pi_marks: bool,
        need_grid: bool,
        need_legend: bool,
    ) -> Self {
        Self {
            start_value: DEFAULT_START,
            stop_value: DEFAULT_STOP,
            step: DEFAULT_STEP,
            need_pi_marks,
            need_grid,
            need_legend,
            legend: Vec::new(),
            surface,
        }
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn stop_value(&self) -> f64 {
        self.stop_value
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn need_pi_marks(&self) -> bool {
        self.need_pi_marks
    }

    pub fn need_grid(&self) -> bool {
        self.need_grid
    }

    pub fn need_legend(&self) -> bool {
        self.need_legend
    }

    /// Labels of the curves added so far, in call order.
    pub fn legend(&self) -> &[String] {
        &self.legend
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn set_need_pi_marks(&mut self, value: bool) {
        self.need_pi_marks = value;
    }

    pub fn set_need_grid(&mut self, value: bool) {
        self.need_grid = value;
    }

    pub fn set_need_legend(&mut self, value: bool) {
        self.need_legend = value;
    }

    /// Set the lower bound; it must not exceed the current stop value.
    ///
    /// To move both bounds past each other use [`set_range`](Self::set_range).
    pub fn set_start_value(&mut self, value: f64) -> Result<(), ConfigError> {
        let value = finite("start_value", value)?;
        if value > self.stop_value {
            return Err(ConfigError::StartAboveStop {
                start: value,
                stop: self.stop_value,
            });
        }
        check_sample_count(value, self.stop_value, self.step)?;
        self.start_value = value;
        Ok(())
    }

    /// Set the upper bound; it must not be below the current start value.
    pub fn set_stop_value(&mut self, value: f64) -> Result<(), ConfigError> {
        let value = finite("stop_value", value)?;
        if value < self.start_value {
            return Err(ConfigError::StopBelowStart {
                stop: value,
                start: self.start_value,
            });
        }
        check_sample_count(self.start_value, value, self.step)?;
        self.stop_value = value;
        Ok(())
    }

    pub fn set_step(&mut self, value: f64) -> Result<(), ConfigError> {
        let value = finite("step", value)?;
        if value <= 0.0 {
            return Err(ConfigError::NonPositiveStep { step: value });
        }
        check_sample_count(self.start_value, self.stop_value, value)?;
        self.step = value;
        Ok(())
    }

    /// Replace both bounds at once, checking them only against each other.
    pub fn set_range(&mut self, start: f64, stop: f64) -> Result<(), ConfigError> {
        let (start, stop) = checked_range(start, stop)?;
        check_sample_count(start, stop, self.step)?;
        self.start_value = start;
        self.stop_value = stop;
        Ok(())
    }

    /// Replace bounds and step together. Nothing changes unless all three are valid.
    pub fn set_plot_ranges(
        &mut self,
        start: f64,
        stop: f64,
        step: f64,
    ) -> Result<(), ConfigError> {
        let (start, stop) = checked_range(start, stop)?;
        let step = finite("step", step)?;
        if step <= 0.0 {
            return Err(ConfigError::NonPositiveStep { step });
        }
        check_sample_count(start, stop, step)?;
        self.start_value = start;
        self.stop_value = stop;
        self.step = step;
        log::debug!("plot range set to [{start}, {stop}) step {step}");
        Ok(())
    }

    /// Set an option by name from a dynamically typed value.
    ///
    /// Flags accept only JSON booleans, bounds and step only JSON numbers; the
    /// string `"true"` or the number `1` for a flag is an error.
    pub fn set_option(&mut self, name: &str, value: &Value) -> Result<(), ConfigError> {
        match name {
            "need_pi_marks" | "need_grid" | "need_legend" => {
                let on = boolean(name, value)?;
                self.set_flag(name, on);
                Ok(())
            }
            "start_value" => self.set_start_value(number(name, value)?),
            "stop_value" => self.set_stop_value(number(name, value)?),
            "step" => self.set_step(number(name, value)?),
            other => Err(ConfigError::UnknownOption(other.to_string())),
        }
    }

    /// Apply a settings object (as read by [`load_settings`]).
    ///
    /// Every value is type-checked before anything is applied, and the bounds and
    /// step found in the object are set as one range update, so key order does not
    /// matter.
    pub fn apply_settings(&mut self, settings: &Map<String, Value>) -> Result<(), ConfigError> {
        let (mut start, mut stop, mut step) = (self.start_value, self.stop_value, self.step);
        let mut flags = Vec::new();
        for (key, value) in settings {
            match key.as_str() {
                "start_value" => start = number(key, value)?,
                "stop_value" => stop = number(key, value)?,
                "step" => step = number(key, value)?,
                "need_pi_marks" | "need_grid" | "need_legend" => {
                    flags.push((key.as_str(), boolean(key, value)?))
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }
        self.set_plot_ranges(start, stop, step)?;
        for (key, on) in flags {
            self.set_flag(key, on);
        }
        Ok(())
    }

    fn set_flag(&mut self, name: &str, on: bool) {
        match name {
            "need_pi_marks" => self.need_pi_marks = on,
            "need_grid" => self.need_grid = on,
            "need_legend" => self.need_legend = on,
            _ => unreachable!("not a flag: {name}"),
        }
        log::debug!("{name} = {on}");
    }

    /// Sample `func` over `[start_value, stop_value)` every `step`.
    ///
    /// The setters keep the range within [`MAX_SAMPLES`](crate::function::MAX_SAMPLES)
    /// samples, so this never allocates more than that.
    pub fn get_args<F>(&self, func: &F) -> (Vec<f64>, Vec<f64>)
    where
        F: Function + ?Sized,
    {
        let xs = arange(self.start_value, self.stop_value, self.step);
        let ys = xs.iter().map(|&x| func.eval(x)).collect();
        (xs, ys)
    }

    /// Sample `func` and draw it as a line. An empty `legend` falls back to the
    /// function's name. With `inverse` the axes are swapped, plotting the inverse
    /// relation.
    pub fn add_plot_by_func<F>(&mut self, func: &F, legend: &str, inverse: bool)
    where
        F: Function + ?Sized,
    {
        let label = if legend.is_empty() {
            func.name().into_owned()
        } else {
            legend.to_string()
        };
        let (x, y) = self.get_args(func);
        self.push_curve(label, x, y, inverse);
    }

    /// Draw caller-supplied coordinates as a line. An empty `legend` becomes
    /// [`ARGS_LEGEND`].
    pub fn add_plot_by_args(
        &mut self,
        x: impl Into<Vec<f64>>,
        y: impl Into<Vec<f64>>,
        legend: &str,
        inverse: bool,
    ) -> Result<(), ConfigError> {
        let (x, y) = (x.into(), y.into());
        if x.len() != y.len() {
            return Err(ConfigError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let label = if legend.is_empty() { ARGS_LEGEND } else { legend };
        self.push_curve(label.to_string(), x, y, inverse);
        Ok(())
    }

    fn push_curve(&mut self, label: String, x: Vec<f64>, y: Vec<f64>, inverse: bool) {
        log::debug!("adding curve {label:?} ({} points, inverse={inverse})", x.len());
        self.legend.push(label);
        if inverse {
            self.surface.draw_line(y, x);
        } else {
            self.surface.draw_line(x, y);
        }
    }

    /// Positions of the π/4 and π/6 marks, as `(+m, -m)` pairs.
    ///
    /// Each sequence takes one step before comparing against `stop_value`, so it
    /// always holds at least one pair and ends with the first mark beyond the bound.
    /// A stop value needing more than [`MAX_MARKS`] pairs is an error.
    pub fn get_pi_marks(&self) -> Result<(Vec<f64>, Vec<f64>), ConfigError> {
        // π/6 is the finer sequence
        if self.stop_value / FRAC_PI_6 > MAX_MARKS as f64 {
            return Err(ConfigError::TooManyMarks {
                stop: self.stop_value,
            });
        }
        Ok((
            pi_marks(FRAC_PI_4, self.stop_value),
            pi_marks(FRAC_PI_6, self.stop_value),
        ))
    }

    /// Draw the π/4 and π/6 marks as ticks on the x axis.
    pub fn set_pi_marks(&mut self) -> Result<(), ConfigError> {
        let (quarter, sixth) = self.get_pi_marks()?;
        let on_axis =
            |marks: Vec<f64>| -> Vec<(f64, f64)> { marks.into_iter().map(|x| (x, 0.0)).collect() };
        self.surface.draw_scatter(on_axis(quarter), MarkStyle::QuarterPi);
        self.surface.draw_scatter(on_axis(sixth), MarkStyle::SixthPi);
        Ok(())
    }

    /// Apply the decorations and fixed view, and hand back the finished surface.
    ///
    /// Fails only when the π marks are requested for a stop value too large to mark.
    pub fn into_surface(mut self) -> Result<S, ConfigError> {
        self.surface.draw_reference_line(Axis::Vertical);
        self.surface.draw_reference_line(Axis::Horizontal);
        if self.need_grid {
            self.surface.enable_grid();
        }
        if self.need_legend {
            self.surface.attach_legend(&self.legend);
        }
        if self.need_pi_marks {
            self.set_pi_marks()?;
        }
        self.surface.set_view_bounds(DEFAULT_VIEW);
        Ok(self.surface)
    }

    /// Finalize the plot and display it, blocking until the viewer is closed.
    pub fn show_plot(self) -> Result<()> {
        log::info!("showing plot with {} curve(s)", self.legend.len());
        self.into_surface()?.display()
    }
}

fn pi_marks(step: f64, stop: f64) -> Vec<f64> {
    let mut marks = Vec::new();
    let mut mark = 0.0;
    loop {
        mark += step;
        marks.push(mark);
        marks.push(-mark);
        if mark > stop {
            return marks;
        }
    }
}

fn finite(option: &str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotNumeric {
            option: option.to_string(),
        })
    }
}

fn checked_range(start: f64, stop: f64) -> Result<(f64, f64), ConfigError> {
    let start = finite("start_value", start)?;
    let stop = finite("stop_value", stop)?;
    if start > stop {
        return Err(ConfigError::InvertedRange { start, stop });
    }
    Ok((start, stop))
}

fn number(option: &str, value: &Value) -> Result<f64, ConfigError> {
    let v = value.as_f64().ok_or_else(|| ConfigError::NotNumeric {
        option: option.to_string(),
    })?;
    finite(option, v)
}

fn boolean(option: &str, value: &Value) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| ConfigError::NotBoolean {
        option: option.to_string(),
    })
}

/// `<config dir>/piplot/config.json`, if the platform has a config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("piplot").join("config.json"))
}

/// Read a JSON settings object from `path`.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Map<String, Value>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings file {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing settings file {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("settings file {} must contain a JSON object", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let p = PlotConfig::default();
        assert_eq!(p.start_value(), -20.0);
        assert_eq!(p.stop_value(), 20.0);
        assert_eq!(p.step(), 0.01);
        assert!(!p.need_grid() && !p.need_legend() && !p.need_pi_marks());
        assert!(p.legend().is_empty());
    }

    #[test]
    fn start_is_checked_against_current_stop() {
        let mut p = PlotConfig::default();
        assert!(p.set_start_value(20.0).is_ok());
        let err = p.set_start_value(21.0).unwrap_err();
        assert!(matches!(err, ConfigError::StartAboveStop { .. }));
        assert_eq!(p.start_value(), 20.0);
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut p = PlotConfig::default();
        assert!(matches!(
            p.set_step(f64::NAN),
            Err(ConfigError::NotNumeric { .. })
        ));
        assert!(p.set_stop_value(f64::INFINITY).is_err());
        assert_eq!(p.stop_value(), 20.0);
    }

    #[test]
    fn set_range_moves_past_old_bounds() {
        let mut p = PlotConfig::default();
        p.set_range(30.0, 40.0).unwrap();
        assert_eq!((p.start_value(), p.stop_value()), (30.0, 40.0));
        assert!(matches!(
            p.set_range(5.0, 1.0),
            Err(ConfigError::InvertedRange { .. })
        ));
    }

    #[test]
    fn settings_apply_range_regardless_of_key_order() {
        let mut p = PlotConfig::default();
        let settings = json!({ "start_value": 30, "stop_value": 40, "need_grid": true });
        p.apply_settings(settings.as_object().unwrap()).unwrap();
        assert_eq!((p.start_value(), p.stop_value()), (30.0, 40.0));
        assert!(p.need_grid());
    }

    #[test]
    fn settings_with_bad_type_change_nothing() {
        let mut p = PlotConfig::default();
        let settings = json!({ "need_grid": true, "step": "0.5" });
        let err = p.apply_settings(settings.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::NotNumeric { .. }));
        assert!(!p.need_grid());
        assert_eq!(p.step(), 0.01);
    }

    #[test]
    fn step_is_checked_against_sample_limit() {
        let mut p = PlotConfig::default();
        let err = p.set_step(1e-9).unwrap_err();
        assert!(matches!(err, ConfigError::TooManySamples { .. }));
        assert_eq!(p.step(), 0.01);
        assert!(p.set_stop_value(1e6).is_err());
        assert_eq!(p.stop_value(), 20.0);
    }

    #[test]
    fn pi_marks_alternate_sign() {
        let p = PlotConfig::default();
        let (quarter, _) = p.get_pi_marks().unwrap();
        assert_eq!(quarter[0], FRAC_PI_4);
        assert_eq!(quarter[1], -FRAC_PI_4);
    }
}
