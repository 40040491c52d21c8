//! The metric toggle: which metric is active and which refresh is current.

use crate::metric::Metric;
use crate::registry::Generation;

/// CSS class of the active toggle button.
pub const ACTIVE_CLASS: &str = "toggle-btn active";
/// CSS class of the inactive toggle button.
pub const INACTIVE_CLASS: &str = "toggle-btn";

/// Selection state with a single writer (the toggle buttons).
///
/// Every selection bumps the generation so responses from earlier
/// refreshes can be recognised and dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    metric: Metric,
    generation: Generation,
}

impl ToggleState {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            generation: 0,
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Select `metric` and start a new refresh generation. Re-selecting the
    /// active metric still refreshes.
    pub fn select(&mut self, metric: Metric) -> Generation {
        self.metric = metric;
        self.generation += 1;
        self.generation
    }

    pub fn is_active(&self, metric: Metric) -> bool {
        self.metric == metric
    }

    /// Exactly one of the two buttons gets [`ACTIVE_CLASS`].
    pub fn button_class(&self, metric: Metric) -> &'static str {
        if self.is_active(metric) {
            ACTIVE_CLASS
        } else {
            INACTIVE_CLASS
        }
    }

    /// True if `generation` is still the latest refresh.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_days() {
        let state = ToggleState::default();
        assert!(state.is_active(Metric::Days));
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn days_cost_days_ends_with_days_active() {
        let mut state = ToggleState::default();
        state.select(Metric::Cost);
        assert_eq!(state.button_class(Metric::Cost), ACTIVE_CLASS);
        assert_eq!(state.button_class(Metric::Days), INACTIVE_CLASS);

        state.select(Metric::Days);
        assert_eq!(state.button_class(Metric::Days), ACTIVE_CLASS);
        assert_eq!(state.button_class(Metric::Cost), INACTIVE_CLASS);
        let active: Vec<_> = Metric::ALL.into_iter().filter(|m| state.is_active(*m)).collect();
        assert_eq!(active, vec![Metric::Days]);
    }

    #[test]
    fn every_select_starts_a_new_generation() {
        let mut state = ToggleState::new(Metric::Cost);
        let first = state.select(Metric::Cost);
        let second = state.select(Metric::Days);
        assert_eq!((first, second), (1, 2));
        assert!(state.is_current(2));
        assert!(!state.is_current(1));
    }
}
