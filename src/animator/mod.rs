//! Typewriter animator for the rotating job title.
//!
//! One [`TitleAnimator`] owns the title rotation, the current index and the
//! page-activity flag. The host drives it from two periodic triggers (see
//! [`crate::scheduler`]): [`TitleAnimator::advance_to_next_title`] deletes the
//! shown title, pauses, then types the next one; [`TitleAnimator::toggle_cursor`]
//! flickers the cursor element.
//!
//! Every character step re-checks [`PageActivity`] before mutating the surface,
//! so a hidden page stops an in-flight animation at the next step.

mod advance_to_next_title;
mod delete_current_title;
mod new;
mod toggle_cursor;
mod type_new_title;

pub use toggle_cursor::parse_opacity;

use rand::rngs::StdRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::delay::{DelayRange, DelaySampling};
use crate::surface::{CursorSurface, TextSurface};
use crate::visibility::PageActivity;

/// Opacity written when the cursor value cannot be read.
pub const RESET_OPACITY: &str = "1.0";

pub struct TitleAnimator<S> {
    surface: Arc<S>,
    titles: Vec<String>,
    current_index: AtomicUsize,
    activity: PageActivity,
    rng: Mutex<StdRng>,
    sampling: DelaySampling,
    type_delay: DelayRange,
    delete_delay: DelayRange,
    delete_pause: Duration,
    overlap_guard: bool,
    cycles_in_flight: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorVisibility {
    Visible,
    Hidden,
}

impl CursorVisibility {
    pub fn as_opacity(&self) -> &'static str {
        match self {
            CursorVisibility::Visible => "1",
            CursorVisibility::Hidden => "0",
        }
    }

    /// How a host should draw a raw opacity value. Unreadable values draw visible.
    pub fn from_opacity(raw: &str) -> Self {
        parse_opacity(raw).unwrap_or(CursorVisibility::Visible)
    }

    pub fn flipped(&self) -> Self {
        match self {
            CursorVisibility::Visible => CursorVisibility::Hidden,
            CursorVisibility::Hidden => CursorVisibility::Visible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorToggle {
    /// Page hidden, nothing touched.
    Inactive,
    Toggled(CursorVisibility),
    /// The stored value was unreadable and was replaced with [`RESET_OPACITY`].
    Reset { raw: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Page hidden before the cycle could finish; the index was not advanced.
    Inactive,
    /// Another cycle is still animating.
    Busy,
    Completed { index: usize },
}

impl<S> TitleAnimator<S>
where
    S: TextSurface + CursorSurface,
{
    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn current_index(&self) -> usize {
        self.current_index.load(Ordering::SeqCst)
    }

    pub fn current_title(&self) -> &str {
        &self.titles[self.current_index()]
    }

    pub fn activity(&self) -> &PageActivity {
        &self.activity
    }

    pub fn is_cycling(&self) -> bool {
        self.cycles_in_flight.load(Ordering::SeqCst) > 0
    }

    pub(crate) fn is_active(&self) -> bool {
        self.activity.is_active()
    }

    /// Wait one sampled character delay.
    pub(crate) async fn pause(&self, range: DelayRange) {
        let delay = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            range.sample(&mut *rng, self.sampling)
        };
        tokio::time::sleep(delay).await;
    }
}
