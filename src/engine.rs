//! Chart engine: validated construction and per-value rule dispatch.
//!
//! The engine owns the full rule battery and feeds each incoming value to
//! every rule in a fixed order. It is pure dispatch: it holds no window
//! state of its own, performs no recovery, and cannot fail once
//! constructed — every well-formed float is processed exactly once, in
//! arrival order, synchronously.

use crate::chart::{ChartParameters, ControlRule, Diagnostic};
use crate::error::ChartError;
use crate::rules::{CenterlineShift, SigmaCluster, SigmaExcursion};

/// Streaming control chart over a sequence of individual measurements.
///
/// Constructed once from a centerline and standard deviation; the same
/// parameters drive every rule. Rules are evaluated in a fixed order
/// (3-sigma, 2-sigma, 1-sigma, centerline shift), which fixes the order of
/// diagnostics within one value but has no other effect since rules share
/// no state.
///
/// # Examples
///
/// ```
/// use runchart::ChartEngine;
///
/// let mut engine = ChartEngine::new(0.0, 1.0).unwrap();
/// assert!(engine.process(0.2).is_empty());
/// let fired = engine.process(4.0);
/// assert_eq!(fired[0].message(), "4 is > 3 sigma");
/// ```
pub struct ChartEngine {
    params: ChartParameters,
    rules: Vec<Box<dyn ControlRule>>,
}

impl ChartEngine {
    /// Validates the parameters and builds the rule battery.
    ///
    /// # Errors
    ///
    /// Returns a [`ChartError`] if the centerline is not finite or the
    /// standard deviation is not strictly positive and finite. Nothing is
    /// processed after a configuration error.
    pub fn new(centerline: f64, stdev: f64) -> Result<Self, ChartError> {
        let params = ChartParameters::new(centerline, stdev)?;
        let rules: Vec<Box<dyn ControlRule>> = vec![
            Box::new(SigmaExcursion::new(&params)),
            Box::new(SigmaCluster::two_sigma(&params)),
            Box::new(SigmaCluster::one_sigma(&params)),
            Box::new(CenterlineShift::new(&params)),
        ];
        Ok(Self { params, rules })
    }

    /// The validated parameters this engine was built from.
    pub fn params(&self) -> &ChartParameters {
        &self.params
    }

    /// Feeds one value to every rule and collects the fired diagnostics.
    ///
    /// Diagnostics appear in rule order; a single value can fire several
    /// rules (and several centerline-shift tiers) at once.
    pub fn process(&mut self, value: f64) -> Vec<Diagnostic> {
        let mut fired = Vec::new();
        for rule in &mut self.rules {
            fired.extend(rule.observe(value));
        }
        fired
    }

    /// Drains an in-memory sequence through [`process`](Self::process),
    /// collecting every diagnostic in order.
    pub fn process_all<I>(&mut self, values: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut fired = Vec::new();
        for value in values {
            fired.extend(self.process(value));
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(ChartEngine::new(0.0, 0.0).is_err());
        assert!(ChartEngine::new(0.0, -1.0).is_err());
        assert!(ChartEngine::new(0.0, f64::NAN).is_err());
        assert!(ChartEngine::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_in_control_stream_is_silent() {
        let mut engine = ChartEngine::new(50.0, 2.0).expect("valid params");
        // Small symmetric wobble around the centerline.
        let data = (0..40).map(|i| if i % 2 == 0 { 50.5 } else { 49.5 });
        assert!(engine.process_all(data).is_empty());
    }

    #[test]
    fn test_diagnostics_follow_rule_order() {
        let mut engine = ChartEngine::new(0.0, 1.0).expect("valid params");
        // Seven extreme values arm every window, the eighth fires the
        // excursion, both clusters, and the 8/8 shift tier together.
        for _ in 0..7 {
            engine.process(10.0);
        }
        let fired: Vec<String> = engine
            .process(10.0)
            .iter()
            .map(|d| d.message().to_string())
            .collect();
        assert_eq!(fired.len(), 4);
        assert_eq!(fired[0], "10 is > 3 sigma");
        assert!(fired[1].contains("2/3 points > 2 sigma"));
        assert!(fired[2].contains("4/5 points > 1 sigma"));
        assert!(fired[3].contains("8/8 points > centerline"));
    }

    #[test]
    fn test_multiple_shift_tiers_in_one_value() {
        let mut engine = ChartEngine::new(0.0, 1.0).expect("valid params");
        for _ in 0..10 {
            engine.process(0.5);
        }
        // The 11th qualifying point keeps 8/8 firing and reaches 10/11.
        let fired = engine.process(0.5);
        let shift_count = fired
            .iter()
            .filter(|d| d.message().contains("points > centerline"))
            .count();
        assert_eq!(shift_count, 2, "8/8 and 10/11 must both fire on the 11th point");
    }

    #[test]
    fn test_replay_is_deterministic() {
        let data: Vec<f64> = (0..120)
            .map(|i| (i as f64 * 0.7).sin() * 3.0 + if i > 60 { 2.5 } else { 0.0 })
            .collect();

        let mut first = ChartEngine::new(0.0, 1.0).expect("valid params");
        let mut second = ChartEngine::new(0.0, 1.0).expect("valid params");

        let render = |fired: Vec<Diagnostic>| -> Vec<String> {
            fired.iter().map(|d| d.to_string()).collect()
        };
        let a = render(first.process_all(data.iter().copied()));
        let b = render(second.process_all(data.iter().copied()));
        assert!(!a.is_empty(), "shifted noisy data should fire something");
        assert_eq!(a, b, "identical input must produce identical diagnostics");
    }

    #[test]
    fn test_stream_feed_skips_malformed_lines() {
        use crate::stream::ValueLines;
        use std::io::Cursor;

        let mut engine = ChartEngine::new(1.5, 10.0).expect("valid params");
        let mut processed = Vec::new();
        let mut malformed = 0;
        for item in ValueLines::new(Cursor::new("1.0\n\nabc\n2.0\n")) {
            match item {
                Ok(value) => {
                    assert!(engine.process(value).is_empty());
                    processed.push(value);
                }
                Err(_) => malformed += 1,
            }
        }
        assert_eq!(processed, vec![1.0, 2.0]);
        assert_eq!(malformed, 1, "exactly one report for the \"abc\" line");
    }

    #[test]
    fn test_each_value_processed_once() {
        // A single out-of-limits value fires the excursion exactly once.
        let mut engine = ChartEngine::new(0.0, 1.0).expect("valid params");
        let fired = engine.process_all(vec![0.0, 5.0, 0.0]);
        let excursions = fired
            .iter()
            .filter(|d| d.message() == "5 is > 3 sigma")
            .count();
        assert_eq!(excursions, 1);
    }
}
