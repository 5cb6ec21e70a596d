// SPDX-License-Identifier: MPL-2.0
//! Contact transport that only waits.
//!
//! There is no backend behind the contact form. [`SimulatedTransport`]
//! sleeps for the configured delay and reports success, which is enough to
//! drive the busy state of the form.

use crate::application::port::{ContactTransport, TransportFuture};
use crate::domain::contact::FormFields;
use futures_util::FutureExt;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl ContactTransport for SimulatedTransport {
    fn send(&self, fields: FormFields) -> TransportFuture {
        let delay = self.delay;
        async move {
            tracing::debug!(email = %fields.email, ?delay, "Simulating contact delivery");
            tokio::time::sleep(delay).await;
            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn fields() -> FormFields {
        FormFields::trimmed("Jo", "a@b.co", "Hi!", "This is long enough")
    }

    #[tokio::test(start_paused = true)]
    async fn send_waits_for_the_configured_delay() {
        let transport = SimulatedTransport::new(Duration::from_millis(2_000));
        let start = Instant::now();

        let result = transport.send(fields()).await;

        assert_eq!(result, Ok(()));
        assert!(start.elapsed() >= Duration::from_millis(2_000));
    }

    #[tokio::test(start_paused = true)]
    async fn send_does_not_finish_early() {
        let transport = SimulatedTransport::new(Duration::from_millis(2_000));
        let pending = transport.send(fields());

        let early = tokio::time::timeout(Duration::from_millis(1_999), pending).await;
        assert!(early.is_err(), "submission finished before the delay");
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_completes_immediately() {
        let transport = SimulatedTransport::new(Duration::ZERO);
        assert_eq!(transport.send(fields()).await, Ok(()));
    }
}
