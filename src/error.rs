//! Validation errors raised by [`PlotConfig`](crate::PlotConfig) setters.

use thiserror::Error;

/// Everything that can go wrong while configuring a plot.
///
/// Setters fail synchronously and leave the configuration untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A flag option received something other than `true`/`false`.
    #[error("{option} must be a boolean value")]
    NotBoolean { option: String },

    /// A numeric option received a non-number, NaN or an infinity.
    #[error("{option} must be a finite number")]
    NotNumeric { option: String },

    #[error("start value {start} must not be greater than the stop value {stop}")]
    StartAboveStop { start: f64, stop: f64 },

    #[error("stop value {stop} must not be less than the start value {start}")]
    StopBelowStart { stop: f64, start: f64 },

    /// Both bounds were set at once, in the wrong order.
    #[error("invalid range: start {start} is greater than stop {stop}")]
    InvertedRange { start: f64, stop: f64 },

    #[error("step must be greater than zero, got {step}")]
    NonPositiveStep { step: f64 },

    /// Raw coordinate series of different lengths.
    #[error("x has {x_len} elements but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// The range would be sampled at more points than a curve may hold.
    #[error(
        "range needs {count} samples, more than the limit of {limit}",
        limit = crate::function::MAX_SAMPLES
    )]
    TooManySamples { count: f64 },

    /// The stop value is too far from zero to place π marks up to it.
    #[error(
        "cannot place π marks up to {stop}: more than {limit} marks per sequence",
        limit = crate::config::MAX_MARKS
    )]
    TooManyMarks { stop: f64 },

    #[error("unknown option: {0}")]
    UnknownOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = ConfigError::StartAboveStop {
            start: 30.0,
            stop: 20.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("30"));
        assert!(msg.contains("20"));

        let err = ConfigError::NotBoolean {
            option: "need_grid".into(),
        };
        assert!(err.to_string().contains("need_grid"));

        let err = ConfigError::TooManySamples { count: 2e20 };
        assert!(err.to_string().contains("10000000"));
    }
}
