use std::sync::atomic::{AtomicUsize, Ordering};

use super::{CycleOutcome, TitleAnimator};
use crate::surface::{CursorSurface, TextSurface};

/// Marks a cycle as in flight until dropped, including when the task is aborted.
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<S> TitleAnimator<S>
where
    S: TextSurface + CursorSurface,
{
    /// Delete the shown title, pause, step to the next title (wrapping) and type it.
    pub async fn advance_to_next_title(&self) -> CycleOutcome {
        if !self.is_active() {
            return CycleOutcome::Inactive;
        }

        let _in_flight = match self.begin_cycle() {
            Some(guard) => guard,
            None => {
                tracing::debug!("Title cycle still running, skipping this trigger");
                return CycleOutcome::Busy;
            }
        };

        self.delete_current_title(self.delete_delay).await;
        tokio::time::sleep(self.delete_pause).await;

        if !self.is_active() {
            return CycleOutcome::Inactive;
        }

        let next = (self.current_index() + 1) % self.titles.len();
        self.current_index.store(next, Ordering::SeqCst);
        tracing::debug!("Typing title {}: {}", next, self.titles[next]);

        self.type_new_title(&self.titles[next], self.type_delay).await;

        CycleOutcome::Completed { index: next }
    }

    fn begin_cycle(&self) -> Option<InFlight<'_>> {
        if self.overlap_guard {
            self.cycles_in_flight
                .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
                .ok()?;
        } else {
            self.cycles_in_flight.fetch_add(1, Ordering::SeqCst);
        }
        Some(InFlight(&self.cycles_in_flight))
    }
}
