use std::time::Duration;
use tokio::{
    sync::{Mutex, MutexGuard},
    time::{Instant, sleep_until},
};

/// Enforces a minimum quiet interval between consecutive requests.
///
/// The interval is measured from the end of one request to the start of the
/// next, so a slow response still gets the full pause after it. Shared
/// across every request the pipeline makes.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_done: Mutex<Option<Instant>>,
}

/// Exclusive request slot. Dropping it marks the request as finished.
#[derive(Debug)]
pub struct ThrottlePermit<'a> {
    last_done: MutexGuard<'a, Option<Instant>>,
}

impl Drop for ThrottlePermit<'_> {
    fn drop(&mut self) {
        *self.last_done = Some(Instant::now());
    }
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_done: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the previous request has been quiet for the interval.
    ///
    /// Hold the permit for the whole request, success or failure.
    pub async fn acquire(&self) -> ThrottlePermit<'_> {
        let last_done = self.last_done.lock().await;
        if let Some(previous) = *last_done {
            sleep_until(previous + self.interval).await;
        }
        ThrottlePermit { last_done }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_first_request_is_immediate() {
        let throttle = Throttle::new(Duration::from_millis(350));
        let start = Instant::now();
        let _permit = throttle.acquire().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_consecutive_requests_are_spaced() {
        let throttle = Throttle::new(Duration::from_millis(350));
        let start = Instant::now();
        for _ in 0..3 {
            drop(throttle.acquire().await);
        }
        assert!(start.elapsed() >= Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_still_gets_full_pause() {
        let throttle = Throttle::new(Duration::from_millis(350));

        let permit = throttle.acquire().await;
        sleep(Duration::from_millis(400)).await;
        drop(permit);
        let finished = Instant::now();

        let _next = throttle.acquire().await;
        assert!(finished.elapsed() >= Duration::from_millis(350));
    }
}
