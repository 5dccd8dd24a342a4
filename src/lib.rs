//! piplot
//!
//! A small Rust library for quick function plots: validated axis ranges and
//! sampling step, optional gridlines and legend, and decorative tick marks at
//! multiples of π/4 and π/6. Pairs with the `piplot` CLI.
//!
//! ### Features
//! - Sample any `Fn(f64) -> f64` over a half-open range, or plot raw coordinates
//! - Plot inverse relations by swapping the axes
//! - Show the figure in a maximized window, or save it as SVG/PNG
//! - Draw on your own [`Surface`] instead of the built-in [`Figure`]
//!
//! ### Example
//! ```no_run
//! use piplot::PlotConfig;
//! use piplot::function::named;
//!
//! let mut plot = PlotConfig::new(true, true, true);
//! plot.add_plot_by_func(&f64::sin, "", false);
//! plot.add_plot_by_func(&f64::cos, "", false);
//! plot.add_plot_by_func(&named("x² + x/2", |x: f64| x * x + x / 2.0), "", false);
//! plot.show_plot()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod function;
pub mod models;
pub mod surface;
pub mod viewer;
pub mod viz;

pub use config::PlotConfig;
pub use error::ConfigError;
pub use function::{Function, named};
pub use models::{Axis, DEFAULT_VIEW, MarkStyle, ViewBounds};
pub use surface::{Figure, Surface};
