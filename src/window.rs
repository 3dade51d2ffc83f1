//! Fixed-capacity rolling window over the most recent observations.
//!
//! Every window rule reads only order-independent counts ("how many entries
//! are beyond a bound"), so the window stores its values in raw slot order
//! and overwrites the oldest slot in place. Appending is O(1) with no
//! shifting or copying.

use std::fmt;

/// Rolling window of the last N observed values.
///
/// The buffer always holds exactly N entries. At construction every slot is
/// prefilled with an initial value, so a rule can evaluate its predicate
/// from the very first observation; the prefill value (the centerline, for
/// every rule in this crate) sits exactly on the centerline and therefore
/// never counts as strictly above or below any bound.
///
/// # Examples
///
/// ```
/// use runchart::RollingWindow;
///
/// let mut w = RollingWindow::new(3, 0.0);
/// w.push(2.5);
/// assert_eq!(w.values(), &[2.5, 0.0, 0.0]);
/// assert_eq!(w.to_string(), "[2.5, 0, 0]");
/// ```
#[derive(Debug, Clone)]
pub struct RollingWindow {
    /// Stored values in slot order (not insertion order).
    slots: Vec<f64>,
    /// Next slot to overwrite; advances modulo capacity.
    cursor: usize,
}

impl RollingWindow {
    /// Creates a window of the given capacity with every slot set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, fill: f64) -> Self {
        assert!(capacity > 0, "window capacity must be positive");
        Self {
            slots: vec![fill; capacity],
            cursor: 0,
        }
    }

    /// Overwrites the slot at the write cursor and advances it, wrapping to
    /// the first slot past the end.
    ///
    /// The oldest entry is overwritten in place; nothing is shifted.
    pub fn push(&mut self, value: f64) {
        self.slots[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Current window contents in slot order.
    ///
    /// Slot order differs from insertion order once the cursor has wrapped;
    /// callers only count entries against threshold predicates, for which
    /// order is irrelevant.
    pub fn values(&self) -> &[f64] {
        &self.slots
    }

    /// Number of slots in the window. Constant for the window's lifetime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl fmt::Display for RollingWindow {
    /// Renders the window as `[a, b, c]` in slot order, for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_window_prefilled() {
        let w = RollingWindow::new(4, 1.5);
        assert_eq!(w.capacity(), 4);
        assert_eq!(w.values(), &[1.5, 1.5, 1.5, 1.5]);
    }

    #[test]
    fn test_push_overwrites_in_slot_order() {
        let mut w = RollingWindow::new(3, 0.0);
        w.push(1.0);
        w.push(2.0);
        assert_eq!(w.values(), &[1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_push_wraps_to_oldest_slot() {
        let mut w = RollingWindow::new(3, 0.0);
        for x in [1.0, 2.0, 3.0, 4.0] {
            w.push(x);
        }
        // The fourth push wraps and overwrites slot 0.
        assert_eq!(w.values(), &[4.0, 2.0, 3.0]);
        assert_eq!(w.capacity(), 3, "capacity must not change across pushes");
    }

    #[test]
    fn test_counting_is_order_independent() {
        let mut w = RollingWindow::new(3, 0.0);
        for x in [5.0, -5.0, 5.0, 5.0] {
            w.push(x);
        }
        let above = w.values().iter().filter(|&&x| x > 1.0).count();
        assert_eq!(above, 2, "count must be the same regardless of slot order");
    }

    #[test]
    fn test_display_renders_slot_order() {
        let mut w = RollingWindow::new(3, 0.0);
        w.push(2.5);
        assert_eq!(w.to_string(), "[2.5, 0, 0]");
        w.push(-1.25);
        assert_eq!(w.to_string(), "[2.5, -1.25, 0]");
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity_panics() {
        RollingWindow::new(0, 0.0);
    }
}
