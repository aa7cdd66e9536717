//! Transient alerts and the confirm prompt.
//!
//! Alerts queue in insertion order and each one expires on its own timer,
//! so dismissing or expiring one never disturbs another. The confirm
//! prompt is a single slot: opening a new prompt while one is pending
//! resolves the old one as superseded rather than leaving its caller
//! hanging.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::sync::oneshot;
use uuid::Uuid;

/// How long an alert stays on screen before its timer removes it.
pub const ALERT_TTL: Duration = Duration::from_secs(5);

/// Identifier for one shown alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(Uuid);

impl AlertId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Visual weight of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Glyph shown in front of the message.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✕",
        }
    }
}

/// One queued alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub severity: Severity,
    pub message: String,
}

/// How a confirm prompt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The user accepted.
    Confirmed,
    /// The user declined, dismissed the prompt, or the prompt was dropped.
    Declined,
    /// A newer confirm prompt replaced this one before it was answered.
    Superseded,
}

struct PendingConfirm {
    message: String,
    resolver: oneshot::Sender<ConfirmOutcome>,
}

/// The alert queue and confirm slot.
///
/// Cheaply cloneable; clones share state, and the per-alert expiry tasks
/// hold a clone. Methods take `&self`, so one instance constructed at
/// startup can be passed around freely.
#[derive(Clone, Default)]
pub struct Alerts {
    inner: Arc<AlertsInner>,
}

#[derive(Default)]
struct AlertsInner {
    alerts: Mutex<Vec<Alert>>,
    confirm: Mutex<Option<PendingConfirm>>,
}

impl Alerts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an alert and start its expiry timer.
    ///
    /// The timer removes exactly this alert after [`ALERT_TTL`]; it fires
    /// as a no-op if the alert was dismissed earlier. Must be called from
    /// within a tokio runtime.
    pub fn show(&self, severity: Severity, message: impl Into<String>) -> AlertId {
        let id = AlertId::new();
        self.lock_alerts().push(Alert {
            id,
            severity,
            message: message.into(),
        });

        let expiry = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ALERT_TTL).await;
            expiry.dismiss(id);
        });

        id
    }

    pub fn info(&self, message: impl Into<String>) -> AlertId {
        self.show(Severity::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> AlertId {
        self.show(Severity::Success, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> AlertId {
        self.show(Severity::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> AlertId {
        self.show(Severity::Error, message)
    }

    /// Remove an alert if it is still shown. Unknown or already-removed
    /// ids are a no-op, which is what makes the expiry timers safe.
    pub fn dismiss(&self, id: AlertId) {
        self.lock_alerts().retain(|alert| alert.id != id);
    }

    /// Currently shown alerts in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Alert> {
        self.lock_alerts().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_alerts().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_alerts().is_empty()
    }

    /// Open a confirm prompt and return a future that resolves with the
    /// user's decision.
    ///
    /// The slot is single occupancy: if a prompt is already pending, it is
    /// resolved as [`ConfirmOutcome::Superseded`] and replaced. The prompt
    /// registers immediately; the returned future only waits.
    pub fn confirm(&self, message: impl Into<String>) -> ConfirmRequest {
        let (resolver, rx) = oneshot::channel();
        let mut slot = self.lock_confirm();
        if let Some(previous) = slot.take() {
            // The superseded caller may already be gone.
            let _ = previous.resolver.send(ConfirmOutcome::Superseded);
        }
        *slot = Some(PendingConfirm {
            message: message.into(),
            resolver,
        });
        ConfirmRequest { rx }
    }

    /// Message of the pending confirm prompt, if any.
    #[must_use]
    pub fn pending_confirm(&self) -> Option<String> {
        self.lock_confirm()
            .as_ref()
            .map(|pending| pending.message.clone())
    }

    /// Answer the pending confirm prompt. Returns false (and does
    /// nothing) when no prompt is pending.
    pub fn resolve(&self, accepted: bool) -> bool {
        match self.lock_confirm().take() {
            Some(pending) => {
                let outcome = if accepted {
                    ConfirmOutcome::Confirmed
                } else {
                    ConfirmOutcome::Declined
                };
                // The caller may have dropped the prompt future.
                let _ = pending.resolver.send(outcome);
                true
            }
            None => false,
        }
    }

    /// Close the pending confirm prompt without accepting, the backdrop
    /// click. Same no-op rule as [`Alerts::resolve`].
    pub fn dismiss_confirm(&self) -> bool {
        self.resolve(false)
    }

    fn lock_alerts(&self) -> std::sync::MutexGuard<'_, Vec<Alert>> {
        self.inner
            .alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_confirm(&self) -> std::sync::MutexGuard<'_, Option<PendingConfirm>> {
        self.inner
            .confirm
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Alerts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alerts")
            .field("alerts", &self.len())
            .field("pending_confirm", &self.pending_confirm())
            .finish_non_exhaustive()
    }
}

/// Future side of a confirm prompt. Resolves once the prompt is answered,
/// dismissed, or superseded; dropping it counts as declining.
#[must_use = "a confirm prompt resolves through this future"]
#[derive(Debug)]
pub struct ConfirmRequest {
    rx: oneshot::Receiver<ConfirmOutcome>,
}

impl Future for ConfirmRequest {
    type Output = ConfirmOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // A dropped sender can only mean the Alerts instance went away;
        // treat that like a dismissal.
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|outcome| outcome.unwrap_or(ConfirmOutcome::Declined))
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_show_appends_in_insertion_order() {
        let alerts = Alerts::new();
        let first = alerts.success("Đặt món thành công!");
        let second = alerts.info("Đang chuẩn bị đơn hàng");

        let shown = alerts.snapshot();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].id, first);
        assert_eq!(shown[0].severity, Severity::Success);
        assert_eq!(shown[1].id, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_alert_expires_after_ttl() {
        let alerts = Alerts::new();
        alerts.info("Đang tải thực đơn");
        assert_eq!(alerts.len(), 1);

        tokio::time::sleep(ALERT_TTL + Duration::from_millis(100)).await;
        assert!(alerts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_timers_are_independent() {
        let alerts = Alerts::new();
        alerts.info("first");
        tokio::time::sleep(Duration::from_secs(3)).await;
        let second = alerts.warning("second");
        assert_eq!(alerts.len(), 2);

        // Past the first window but inside the second.
        tokio::time::sleep(Duration::from_secs(3)).await;
        let shown = alerts.snapshot();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, second);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(alerts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_timer_for_dismissed_alert_is_noop() {
        let alerts = Alerts::new();
        let first = alerts.error("Không thể tải thực đơn");
        tokio::time::sleep(Duration::from_secs(2)).await;
        alerts.dismiss(first);
        let second = alerts.success("Đã kết nối lại");

        // The first alert's timer fires here on an id that is gone.
        tokio::time::sleep(Duration::from_secs(4)).await;
        let shown = alerts.snapshot();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, second);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(alerts.is_empty());
    }

    #[tokio::test]
    async fn test_dismiss_unknown_id_is_noop() {
        let alerts = Alerts::new();
        let id = alerts.info("still here");
        alerts.dismiss(id);
        alerts.dismiss(id);
        assert!(alerts.is_empty());
    }

    #[tokio::test]
    async fn test_confirm_resolves_confirmed() {
        let alerts = Alerts::new();
        let prompt = alerts.confirm("Xóa món này?");
        assert_eq!(alerts.pending_confirm().as_deref(), Some("Xóa món này?"));

        assert!(alerts.resolve(true));
        assert_eq!(prompt.await, ConfirmOutcome::Confirmed);
        assert!(alerts.pending_confirm().is_none());
    }

    #[tokio::test]
    async fn test_dismiss_confirm_declines() {
        let alerts = Alerts::new();
        let prompt = alerts.confirm("Hủy đơn hàng?");
        assert!(alerts.dismiss_confirm());
        assert_eq!(prompt.await, ConfirmOutcome::Declined);
    }

    #[tokio::test]
    async fn test_second_confirm_supersedes_first() {
        let alerts = Alerts::new();
        let first = alerts.confirm("Xóa món này?");
        let second = alerts.confirm("Xóa danh mục này?");

        // Registration happens at call time, so the slot already shows
        // the newer message and the older future is settled.
        assert_eq!(
            alerts.pending_confirm().as_deref(),
            Some("Xóa danh mục này?")
        );
        assert_eq!(first.await, ConfirmOutcome::Superseded);

        assert!(alerts.resolve(true));
        assert_eq!(second.await, ConfirmOutcome::Confirmed);
    }

    #[tokio::test]
    async fn test_resolve_without_pending_is_noop() {
        let alerts = Alerts::new();
        assert!(!alerts.resolve(true));
        assert!(!alerts.dismiss_confirm());
    }
}
