//! The fixed rule battery: control tests and centerline-shift tests.
//!
//! Each rule detects a non-random pattern that indicates a special cause of
//! variation. The battery is fixed:
//!
//! - Single point beyond 3 sigma ([`SigmaExcursion`])
//! - 2 of the last 3 points beyond 2 sigma, same side ([`SigmaCluster::two_sigma`])
//! - 4 of the last 5 points beyond 1 sigma, same side ([`SigmaCluster::one_sigma`])
//! - Same-side centerline runs at 8/8, 10/11, 12/14, 14/17, and 16/20
//!   ([`CenterlineShift`])
//!
//! All comparisons are strict, so a value exactly on a control limit or on
//! the centerline counts toward neither side. Each rule's windows are
//! prefilled with the centerline, which lets a rule legitimately fire
//! before a full window of real observations has arrived while the
//! placeholders themselves never contribute to a count.
//!
//! # References
//!
//! - Breyfogle, F.W. (2003). *Implementing Six Sigma: Smarter Solutions
//!   Using Statistical Methods*, 2nd ed., p. 221.
//! - Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special Causes",
//!   *Journal of Quality Technology* 16(4), pp. 237-239.

use crate::chart::{ChartParameters, ControlRule, Diagnostic};
use crate::window::RollingWindow;

/// Centerline-shift tiers as `(required, window size)` pairs.
///
/// Strictness decreases as the run length grows: 8-of-8 is an immediate
/// signal, 16-of-20 tolerates two exceptions.
const SHIFT_TIERS: [(usize, usize); 5] = [(8, 8), (10, 11), (12, 14), (14, 17), (16, 20)];

// ---------------------------------------------------------------------------
// Single-point excursion
// ---------------------------------------------------------------------------

/// Single point beyond the 3-sigma control limits.
///
/// Needs no window: each value is tested on its own against
/// `centerline ± 3 sigma`. The below and above checks are mutually
/// exclusive, so a call emits at most one diagnostic.
///
/// # Examples
///
/// ```
/// use runchart::{ChartParameters, ControlRule, SigmaExcursion};
///
/// let params = ChartParameters::new(10.0, 2.0).unwrap();
/// let mut rule = SigmaExcursion::new(&params);
/// assert!(rule.observe(16.0).is_empty()); // exactly on the ucl: quiet
/// let fired = rule.observe(17.0);
/// assert_eq!(fired[0].message(), "17 is > 3 sigma");
/// ```
pub struct SigmaExcursion {
    lcl: f64,
    ucl: f64,
}

impl SigmaExcursion {
    pub fn new(params: &ChartParameters) -> Self {
        let (lcl, ucl) = params.limits(3.0);
        Self { lcl, ucl }
    }
}

impl ControlRule for SigmaExcursion {
    fn observe(&mut self, value: f64) -> Vec<Diagnostic> {
        if value < self.lcl {
            vec![Diagnostic::new(format!("{value} is < 3 sigma"))]
        } else if value > self.ucl {
            vec![Diagnostic::new(format!("{value} is > 3 sigma"))]
        } else {
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Same-side clustering beyond a sigma bound
// ---------------------------------------------------------------------------

/// K of the last N points beyond a sigma bound on the same side.
///
/// Two configurations exist: 2 of 3 beyond 2 sigma and 4 of 5 beyond
/// 1 sigma. The upper side is checked first; only if it does not fire is
/// the lower side counted, so one call emits at most one diagnostic.
///
/// With the configured thresholds both sides firing on the same window is
/// arithmetically impossible (each threshold exceeds half its window), but
/// that exclusivity is a property of these constants: any new `(required,
/// capacity)` pair must keep `required > capacity / 2` for the else-if to
/// remain sound.
pub struct SigmaCluster {
    window: RollingWindow,
    lcl: f64,
    ucl: f64,
    required: usize,
    /// Sigma multiple of the bound, used in the diagnostic text.
    multiplier: u32,
}

impl SigmaCluster {
    /// 2 of the last 3 points beyond `centerline ± 2 sigma`, same side.
    pub fn two_sigma(params: &ChartParameters) -> Self {
        Self::new(params, 3, 2, 2)
    }

    /// 4 of the last 5 points beyond `centerline ± 1 sigma`, same side.
    pub fn one_sigma(params: &ChartParameters) -> Self {
        Self::new(params, 5, 4, 1)
    }

    fn new(params: &ChartParameters, capacity: usize, required: usize, multiplier: u32) -> Self {
        let (lcl, ucl) = params.limits(f64::from(multiplier));
        Self {
            window: RollingWindow::new(capacity, params.centerline()),
            lcl,
            ucl,
            required,
            multiplier,
        }
    }
}

impl ControlRule for SigmaCluster {
    fn observe(&mut self, value: f64) -> Vec<Diagnostic> {
        self.window.push(value);

        let above = self.window.values().iter().filter(|&&x| x > self.ucl).count();
        if above >= self.required {
            return vec![Diagnostic::new(format!(
                "{} is {}/{} points > {} sigma",
                self.window,
                self.required,
                self.window.capacity(),
                self.multiplier
            ))];
        }

        let below = self.window.values().iter().filter(|&&x| x < self.lcl).count();
        if below >= self.required {
            return vec![Diagnostic::new(format!(
                "{} is {}/{} points < {} sigma",
                self.window,
                self.required,
                self.window.capacity(),
                self.multiplier
            ))];
        }

        Vec::new()
    }
}

// ---------------------------------------------------------------------------
// Centerline shift
// ---------------------------------------------------------------------------

/// Sustained shift of the process mean away from the centerline.
///
/// Five independent run-length tiers, each with its own window. Every
/// observed value is appended to every tier, and every tier is evaluated on
/// every call — tiers do not short-circuit each other, so a single value
/// can fire several tiers at once.
pub struct CenterlineShift {
    centerline: f64,
    tiers: Vec<ShiftTier>,
}

struct ShiftTier {
    required: usize,
    window: RollingWindow,
}

impl CenterlineShift {
    pub fn new(params: &ChartParameters) -> Self {
        let centerline = params.centerline();
        let tiers = SHIFT_TIERS
            .iter()
            .map(|&(required, capacity)| ShiftTier {
                required,
                window: RollingWindow::new(capacity, centerline),
            })
            .collect();
        Self { centerline, tiers }
    }
}

impl ControlRule for CenterlineShift {
    fn observe(&mut self, value: f64) -> Vec<Diagnostic> {
        let mut fired = Vec::new();
        for tier in &mut self.tiers {
            tier.window.push(value);

            let above = tier
                .window
                .values()
                .iter()
                .filter(|&&x| x > self.centerline)
                .count();
            if above >= tier.required {
                fired.push(Diagnostic::new(format!(
                    "{} is {}/{} points > centerline",
                    tier.window,
                    tier.required,
                    tier.window.capacity()
                )));
                continue;
            }

            let below = tier
                .window
                .values()
                .iter()
                .filter(|&&x| x < self.centerline)
                .count();
            if below >= tier.required {
                fired.push(Diagnostic::new(format!(
                    "{} is {}/{} points < centerline",
                    tier.window,
                    tier.required,
                    tier.window.capacity()
                )));
            }
        }
        fired
    }
}
