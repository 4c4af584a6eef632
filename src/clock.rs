use std::time::{Duration, Instant};

/// A simple clock abstraction so delayed transitions can be driven
/// deterministically in tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Manual(Instant),
}

impl Clock {
    /// Returns a clock frozen at the current instant.
    #[must_use]
    pub fn manual() -> Self {
        Self::Manual(Instant::now())
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        match self {
            Clock::System => Instant::now(),
            Clock::Manual(t) => *t,
        }
    }

    /// If this is a manual clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Manual(t) = self {
            *t += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_only_moves_when_advanced() {
        let mut clock = Clock::manual();
        let start = clock.now();
        assert_eq!(clock.now(), start);

        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now(), start + Duration::from_millis(250));
    }

    #[test]
    fn test_system_clock_ignores_advance() {
        let mut clock = Clock::System;
        clock.advance(Duration::from_secs(3600));
        assert!(clock.now() <= Instant::now());
    }
}
