use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "page is visible" flag gating every animation step.
///
/// Clones share the same flag. The host feeds it through [`PageActivity::notifier`],
/// which accepts the host's "is hidden" signal.
#[derive(Debug, Clone)]
pub struct PageActivity {
    active: Arc<AtomicBool>,
}

impl Default for PageActivity {
    fn default() -> Self {
        Self::new()
    }
}

impl PageActivity {
    /// Pages start active.
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn set_hidden(&self, hidden: bool) {
        let was_active = self.active.swap(!hidden, Ordering::SeqCst);
        if was_active == hidden {
            tracing::debug!("Page visibility changed: active={}", !hidden);
        }
    }

    /// Callback to hand to the host's visibility-change notification.
    pub fn notifier(&self) -> impl Fn(bool) + Send + Sync + 'static {
        let activity = self.clone();
        move |hidden| activity.set_hidden(hidden)
    }
}
