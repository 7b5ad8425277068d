/// Stepping model behind the animated budget counter.
///
/// The counter climbs from zero to `target` in `ceil(target / steps)` sized
/// increments and clamps on the last step, so it never overshoots. Targets at
/// or below zero are complete from the start.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    current: i64,
    target: i64,
    increment: i64,
}

impl CounterState {
    pub fn new(target_cents: i64, steps: u32) -> Self {
        let target = target_cents.max(0);
        let steps = i64::from(steps.max(1));
        let increment = target / steps + i64::from(target % steps != 0);

        Self {
            current: 0,
            target,
            increment,
        }
    }

    /// Advance one tick and return the value to display.
    pub fn advance(&mut self) -> i64 {
        if !self.is_complete() {
            self.current = self.current.saturating_add(self.increment);
            if self.current >= self.target {
                self.current = self.target;
            }
        }
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.target
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn increment(&self) -> i64 {
        self.increment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(state: &mut CounterState) -> Vec<i64> {
        let mut values = Vec::new();
        while !state.is_complete() {
            values.push(state.advance());
        }
        values
    }

    #[test]
    fn test_increment_is_ceiling_of_target_over_steps() {
        assert_eq!(CounterState::new(12345, 100).increment(), 124);
        assert_eq!(CounterState::new(10000, 100).increment(), 100);
        assert_eq!(CounterState::new(1, 100).increment(), 1);
        assert_eq!(CounterState::new(0, 100).increment(), 0);
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let mut state = CounterState::new(12345, 100);
        let values = run_to_completion(&mut state);

        assert_eq!(values.last(), Some(&12345));
        assert_eq!(values.len(), 100);
        assert_eq!(state.current(), 12345);
    }

    #[test]
    fn test_never_exceeds_target_and_is_monotonic() {
        for target in [1_i64, 7, 99, 100, 101, 12345, 999_999] {
            let mut state = CounterState::new(target, 100);
            let values = run_to_completion(&mut state);

            assert!(values.iter().all(|v| *v <= target), "overshoot for {}", target);
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "not monotonic for {}", target);
            assert!(values.len() <= 100);
        }
    }

    #[test]
    fn test_zero_and_negative_targets_complete_immediately() {
        let zero = CounterState::new(0, 100);
        assert!(zero.is_complete());
        assert_eq!(zero.current(), 0);

        let mut negative = CounterState::new(-550, 100);
        assert!(negative.is_complete());
        assert_eq!(negative.target(), 0);
        assert_eq!(negative.advance(), 0);
    }

    #[test]
    fn test_zero_steps_treated_as_single_step() {
        let mut state = CounterState::new(500, 0);
        assert_eq!(state.advance(), 500);
        assert!(state.is_complete());
    }

    #[test]
    fn test_large_target_does_not_overflow() {
        let mut state = CounterState::new(i64::MAX, 100);
        let values = run_to_completion(&mut state);
        assert_eq!(values.last(), Some(&i64::MAX));
    }
}
