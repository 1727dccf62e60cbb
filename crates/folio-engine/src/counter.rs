use std::time::{Duration, Instant};

/// Linear count-up from `from` to `to`, started once its section is in view.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    from: f64,
    to: f64,
    duration: Duration,
    decimals: Option<usize>,
    started_at: Option<Instant>,
}

impl Counter {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            decimals: None,
            started_at: None,
        }
    }

    /// Render with a fixed number of decimals instead of rounding.
    pub fn fixed(mut self, decimals: usize) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts the animation. Later calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// A new target replays the animation from `from` if it was running.
    pub fn retarget(&mut self, to: f64, now: Instant) {
        if self.to == to {
            return;
        }
        self.to = to;
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
    }

    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.to.min(self.from + progress * (self.to - self.from))
    }

    pub fn value(&self, now: Instant) -> f64 {
        match self.started_at {
            Some(start) => self.value_at(now.saturating_duration_since(start)),
            None => self.from,
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        match self.started_at {
            Some(start) => now.saturating_duration_since(start) >= self.duration,
            None => false,
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        match self.decimals {
            Some(decimals) => format!("{:.*}", decimals, value),
            None => format!("{}", value.round() as i64),
        }
    }

    pub fn display(&self, now: Instant) -> String {
        self.format_value(self.value(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress() {
        let counter = Counter::new(0.0, 10.0, Duration::from_secs(1));
        assert_eq!(counter.value_at(Duration::ZERO), 0.0);
        assert_eq!(counter.value_at(Duration::from_millis(500)), 5.0);
        assert_eq!(counter.value_at(Duration::from_secs(1)), 10.0);
    }

    #[test]
    fn test_clamped_at_target() {
        let counter = Counter::new(0.0, 10.0, Duration::from_secs(1));
        assert_eq!(counter.value_at(Duration::from_secs(5)), 10.0);
    }

    #[test]
    fn test_fixed_decimals() {
        let counter = Counter::new(0.0, 8.2, Duration::from_millis(800)).fixed(1);
        assert_eq!(counter.format_value(8.2), "8.2");
        assert_eq!(counter.format_value(4.1), "4.1");
    }

    #[test]
    fn test_rounded_integer() {
        let counter = Counter::new(0.0, 1234.0, Duration::from_secs(1));
        assert_eq!(counter.format_value(616.7), "617");
    }

    #[test]
    fn test_not_started_shows_origin() {
        let counter = Counter::new(0.0, 42.0, Duration::from_secs(1));
        let now = Instant::now();
        assert_eq!(counter.value(now), 0.0);
        assert!(!counter.is_finished(now));
    }

    #[test]
    fn test_start_is_once() {
        let mut counter = Counter::new(0.0, 10.0, Duration::from_secs(1));
        let t0 = Instant::now();
        counter.start(t0);
        counter.start(t0 + Duration::from_millis(900));
        assert_eq!(counter.value(t0 + Duration::from_secs(1)), 10.0);
        assert!(counter.is_finished(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_retarget_restarts_running_animation() {
        let mut counter = Counter::new(0.0, 0.0, Duration::from_secs(1));
        let t0 = Instant::now();
        counter.start(t0);
        let t1 = t0 + Duration::from_secs(3);
        counter.retarget(200.0, t1);
        assert_eq!(counter.value(t1), 0.0);
        assert_eq!(counter.value(t1 + Duration::from_millis(500)), 100.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let counter = Counter::new(0.0, 3.0, Duration::ZERO);
        assert_eq!(counter.value_at(Duration::ZERO), 3.0);
    }
}
