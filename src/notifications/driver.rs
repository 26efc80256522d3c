// SPDX-License-Identifier: MPL-2.0
//! Async timer driver.
//!
//! Sleeps until the scheduler's next deadline, ticks the service, and
//! recomputes whenever a countdown is armed, paused, resumed or cancelled.

use super::service::ToastService;

impl ToastService {
    /// Drives auto-dismiss timers until [`ToastService::shutdown`] is called.
    ///
    /// Spawn it once per service:
    ///
    /// ```no_run
    /// # async fn demo() {
    /// use toast_queue::notifications::ToastService;
    ///
    /// let service = ToastService::default();
    /// let driver = tokio::spawn({
    ///     let service = service.clone();
    ///     async move { service.run_timers().await }
    /// });
    /// // ...
    /// service.shutdown();
    /// driver.await.ok();
    /// # }
    /// ```
    ///
    /// The service's clock must advance with real (or tokio) time; with a
    /// manual clock, call [`ToastService::tick`] directly instead.
    pub async fn run_timers(&self) {
        tracing::debug!("toast timer driver started");
        while !self.is_shut_down() {
            // Stored permits from notify_one make a wake between these two
            // lines wake the select below instead of being lost.
            let woken = self.wake().notified();
            match self.next_deadline() {
                Some(deadline) => {
                    let sleep = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline));
                    tokio::select! {
                        () = sleep => {
                            self.tick();
                        }
                        () = woken => {}
                    }
                }
                None => woken.await,
            }
        }
        tracing::debug!("toast timer driver stopped");
    }
}

#[cfg(test)]
mod tests {
    use crate::application::port::NoEffects;
    use crate::config::ToastConfig;
    use crate::infrastructure::TokioClock;
    use crate::notifications::{ToastOptions, ToastService};
    use std::sync::Arc;
    use std::time::Duration;

    fn service() -> ToastService {
        ToastService::with_ports(
            ToastConfig::default(),
            Arc::new(TokioClock),
            Arc::new(NoEffects),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn driver_dismisses_on_deadline() {
        let service = service();
        let driver = tokio::spawn({
            let service = service.clone();
            async move { service.run_timers().await }
        });

        service.success("Saved", ToastOptions::new()).unwrap();
        tokio::time::sleep(Duration::from_millis(3900)).await;
        assert_eq!(service.len(), 1);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(service.is_empty());

        service.shutdown();
        driver.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn driver_honours_pause() {
        let service = service();
        let driver = tokio::spawn({
            let service = service.clone();
            async move { service.run_timers().await }
        });

        let id = service.info("Hover me", ToastOptions::new()).unwrap();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(service.pause(&id));

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(service.len(), 1);

        assert!(service.resume(&id));
        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert_eq!(service.len(), 1);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(service.is_empty());

        service.shutdown();
        driver.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_an_idle_driver() {
        let service = service();
        let driver = tokio::spawn({
            let service = service.clone();
            async move { service.run_timers().await }
        });
        tokio::task::yield_now().await;

        service.shutdown();
        driver.await.unwrap();
        assert!(service.is_shut_down());
    }
}
