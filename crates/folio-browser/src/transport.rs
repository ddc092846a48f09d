//! Contact message delivery.

use folio::contact::{ContactMessage, ContactTransport, SENDING_WINDOW_MS, SubmitError, SubmitFuture};
use zoon::{Timer, println};

/// Pretends to deliver: logs the payload, waits, then reports success.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedTransport {
    delay_ms: u32,
}

impl SimulatedTransport {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::with_delay(SENDING_WINDOW_MS)
    }
}

impl ContactTransport for SimulatedTransport {
    fn send(&self, message: ContactMessage) -> SubmitFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            let payload = match message.to_json() {
                Ok(payload) => payload,
                Err(error) => return Err(SubmitError::Rejected(error.to_string())),
            };
            println!("[CONTACT] sending {} ({} bytes)", message.id, payload.len());
            Timer::sleep(delay_ms).await;
            Ok(())
        })
    }
}
