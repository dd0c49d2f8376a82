//! Operator notification.
//!
//! Notification is best-effort: a failed send is logged and never reaches
//! the caller, so it cannot undo a reservation that already succeeded.

mod telegram;

use std::future::Future;

pub use telegram::{NotifyError, TelegramConfig, TelegramNotifier};

/// Outbound message sink.
pub trait Notifier {
    /// Send `text`, logging any failure.
    fn send(&self, text: &str) -> impl Future<Output = ()>;
}

/// No notifier configured: sending does nothing.
impl<N: Notifier> Notifier for Option<N> {
    async fn send(&self, text: &str) {
        if let Some(notifier) = self {
            notifier.send(text).await;
        }
    }
}
