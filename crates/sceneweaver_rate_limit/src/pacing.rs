//! Fixed delay between consecutive calls.

use std::time::Duration;

/// A fixed pause inserted between consecutive calls to the render service.
///
/// The first call is never delayed; each later call waits the full delay.
///
/// # Examples
///
/// ```
/// use sceneweaver_rate_limit::CourtesyDelay;
/// use std::time::Duration;
///
/// let delay = CourtesyDelay::new(Duration::from_millis(1500));
/// assert_eq!(delay.duration(), Duration::from_millis(1500));
/// assert!(CourtesyDelay::none().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CourtesyDelay {
    duration: Duration,
}

impl CourtesyDelay {
    /// Create a delay of the given length.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Create a delay from milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Length of the pause.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the delay is zero.
    pub fn is_zero(&self) -> bool {
        self.duration.is_zero()
    }

    /// Sleep for the delay, unless this is the first call of a run.
    pub async fn pause(&self, calls_so_far: usize) {
        if calls_so_far == 0 || self.is_zero() {
            return;
        }
        tracing::trace!(delay_ms = self.duration.as_millis() as u64, "Pausing between calls");
        tokio::time::sleep(self.duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_call_is_not_delayed() {
        let delay = CourtesyDelay::from_millis(500);
        let before = tokio::time::Instant::now();
        delay.pause(0).await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn later_calls_wait_full_delay() {
        let delay = CourtesyDelay::from_millis(500);
        let before = tokio::time::Instant::now();
        delay.pause(3).await;
        assert!(before.elapsed() >= Duration::from_millis(500));
    }
}
