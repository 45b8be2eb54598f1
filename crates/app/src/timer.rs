use chrono::{DateTime, Duration, Utc};
use log::debug;
use tokio::task::JoinHandle;

/// Periodic refresh of the elapsed time of the active workout.
///
/// The timer only reads the start time and the wall clock. Stopping or dropping it aborts the
/// underlying task.
pub struct ElapsedTimer {
    handle: Option<JoinHandle<()>>,
}

impl ElapsedTimer {
    /// Call `on_tick` immediately and then once per `period`.
    ///
    /// Must be called within a Tokio runtime.
    pub fn start(
        start: DateTime<Utc>,
        period: std::time::Duration,
        mut on_tick: impl FnMut(Duration) + Send + 'static,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                on_tick((Utc::now() - start).max(Duration::zero()));
            }
        });
        debug!("started elapsed time display");
        Self {
            handle: Some(handle),
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("stopped elapsed time display");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ElapsedTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Format as `HH:MM:SS`, truncating to whole seconds.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Duration::zero(), "00:00:00")]
    #[case(Duration::milliseconds(59_999), "00:00:59")]
    #[case(Duration::seconds(61), "00:01:01")]
    #[case(Duration::seconds(3 * 3600 + 25 * 60 + 7), "03:25:07")]
    #[case(Duration::hours(101), "101:00:00")]
    #[case(Duration::seconds(-5), "00:00:00")]
    fn test_format_elapsed(#[case] elapsed: Duration, #[case] expected: &str) {
        assert_eq!(format_elapsed(elapsed), expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_until_stopped() {
        let ticks = Arc::new(Mutex::new(vec![]));
        let mut timer = ElapsedTimer::start(Utc::now(), std::time::Duration::from_secs(1), {
            let ticks = ticks.clone();
            move |elapsed| ticks.lock().unwrap().push(elapsed)
        });
        assert!(timer.is_running());

        tokio::time::sleep(std::time::Duration::from_millis(3500)).await;
        let count = ticks.lock().unwrap().len();
        assert_eq!(count, 4);
        assert!(
            ticks
                .lock()
                .unwrap()
                .iter()
                .all(|elapsed| *elapsed >= Duration::zero())
        );

        timer.stop();
        assert!(!timer.is_running());
        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        assert_eq!(ticks.lock().unwrap().len(), count);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let ticks = Arc::new(Mutex::new(0));
        {
            let _timer = ElapsedTimer::start(Utc::now(), std::time::Duration::from_secs(1), {
                let ticks = ticks.clone();
                move |_| *ticks.lock().unwrap() += 1
            });
            tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
        }
        let count = *ticks.lock().unwrap();
        assert_eq!(count, 2);

        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        assert_eq!(*ticks.lock().unwrap(), count);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_in_future() {
        let ticks = Arc::new(Mutex::new(vec![]));
        let _timer = ElapsedTimer::start(
            Utc::now() + Duration::minutes(5),
            std::time::Duration::from_secs(1),
            {
                let ticks = ticks.clone();
                move |elapsed| ticks.lock().unwrap().push(elapsed)
            },
        );
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        assert_eq!(*ticks.lock().unwrap(), vec![Duration::zero()]);
    }
}
