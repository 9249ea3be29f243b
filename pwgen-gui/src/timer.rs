use std::time::Duration;
use std::time::Instant;

pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

pub struct Timer {
    start_time: Instant,
    duration: Duration,
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new(DEFAULT_DURATION)
    }
}

impl Timer {
    pub fn new(duration: Duration) -> Timer {
        Timer {
            start_time: Instant::now(),
            duration,
        }
    }

    pub fn remaining_time(&self) -> Duration {
        self.duration.saturating_sub(self.start_time.elapsed())
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_time().is_zero()
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::Timer;

    #[test]
    fn test_timer_complete() {
        let timer = Timer::new(Duration::ZERO);
        assert!(timer.is_complete());
        assert_eq!(timer.remaining_time(), Duration::ZERO);
    }

    #[test]
    fn test_timer_running() {
        let timer = Timer::new(Duration::from_secs(60));
        assert!(!timer.is_complete());
        assert!(timer.remaining_time() > Duration::from_secs(50));
    }
}
