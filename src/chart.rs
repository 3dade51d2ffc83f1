//! Core chart types and the rule capability trait.
//!
//! Defines the validated chart parameters every rule is constructed from,
//! the rendered diagnostic each fired rule produces, and the [`ControlRule`]
//! trait that the whole rule battery implements.
//!
//! # References
//!
//! - Breyfogle, F.W. (2003). *Implementing Six Sigma: Smarter Solutions
//!   Using Statistical Methods*, 2nd ed., p. 221.
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.

use std::fmt;

use crate::error::ChartError;

/// Validated control chart parameters.
///
/// Immutable for the lifetime of a chart run. Construction rejects
/// non-finite centerlines and non-positive or non-finite standard
/// deviations, so every rule built from a `ChartParameters` has
/// well-defined control limits.
///
/// # Examples
///
/// ```
/// use runchart::ChartParameters;
///
/// let params = ChartParameters::new(10.0, 2.0).unwrap();
/// assert_eq!(params.limits(3.0), (4.0, 16.0));
///
/// assert!(ChartParameters::new(10.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartParameters {
    centerline: f64,
    stdev: f64,
}

impl ChartParameters {
    /// Validates and constructs chart parameters.
    ///
    /// # Errors
    ///
    /// - [`ChartError::NonFiniteCenterline`] if `centerline` is NaN or infinite
    /// - [`ChartError::InvalidStdev`] if `stdev` is not strictly positive and finite
    pub fn new(centerline: f64, stdev: f64) -> Result<Self, ChartError> {
        if !centerline.is_finite() {
            return Err(ChartError::NonFiniteCenterline(centerline));
        }
        if !stdev.is_finite() || stdev <= 0.0 {
            return Err(ChartError::InvalidStdev(stdev));
        }
        Ok(Self { centerline, stdev })
    }

    /// Target value of the monitored process (process mean).
    pub fn centerline(&self) -> f64 {
        self.centerline
    }

    /// Process standard deviation (sigma).
    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    /// Control limits at `k` standard deviations from the centerline.
    ///
    /// Returns `(lcl, ucl)` where `lcl = centerline - k * sigma` and
    /// `ucl = centerline + k * sigma`.
    pub fn limits(&self, k: f64) -> (f64, f64) {
        (
            self.centerline - k * self.stdev,
            self.centerline + k * self.stdev,
        )
    }
}

/// A rendered rule-violation message.
///
/// Names the rule that fired and the offending value or window contents,
/// e.g. `17.2 is > 3 sigma` or `[2.5, 2.5, 0] is 2/3 points > 2 sigma`.
/// The textual form is the whole contract: the only downstream consumer
/// is a diagnostic sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
}

impl Diagnostic {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    /// The rendered diagnostic text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A stateful pattern-detection rule fed one value at a time.
///
/// Each implementor owns its own window state; rules share nothing, so the
/// order they are fed a value in has no correctness impact. One call may
/// yield zero diagnostics, one, or (for the multi-tier centerline-shift
/// rule) several.
pub trait ControlRule {
    /// Observe the next value in arrival order and report any rule firings.
    fn observe(&mut self, value: f64) -> Vec<Diagnostic>;
}
