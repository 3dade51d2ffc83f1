//! # runchart
//!
//! Streaming statistical process control (SPC) rule engine.
//!
//! Given a fixed centerline and standard deviation, [`ChartEngine`]
//! evaluates a fixed battery of control tests and centerline-shift tests
//! over sliding windows of recent values, one value at a time, and reports
//! a rendered diagnostic for every rule that fires:
//!
//! - single point beyond 3 sigma
//! - 2 of 3 points beyond 2 sigma, same side
//! - 4 of 5 points beyond 1 sigma, same side
//! - 8/8, 10/11, 12/14, 14/17, and 16/20 points on one side of the centerline
//!
//! Evaluation is single-pass with O(1) memory per rule; each rule owns its
//! own fixed-capacity rolling window and nothing is shared between rules.
//!
//! ## Example
//!
//! ```
//! use runchart::ChartEngine;
//!
//! let mut engine = ChartEngine::new(0.0, 1.0)?;
//! engine.process(2.5);
//! for diagnostic in engine.process(2.5) {
//!     // "[2.5, 2.5, 0] is 2/3 points > 2 sigma"
//!     eprintln!("{diagnostic}");
//! }
//! # Ok::<(), runchart::ChartError>(())
//! ```
//!
//! ## References
//!
//! - Breyfogle, F.W. (2003). *Implementing Six Sigma: Smarter Solutions
//!   Using Statistical Methods*, 2nd ed., p. 221.
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.

mod chart;
mod engine;
mod error;
mod rules;
mod stream;
mod window;

pub use chart::{ChartParameters, ControlRule, Diagnostic};
pub use engine::ChartEngine;
pub use error::ChartError;
pub use rules::{CenterlineShift, SigmaCluster, SigmaExcursion};
pub use stream::{StreamError, ValueLines};
pub use window::RollingWindow;
