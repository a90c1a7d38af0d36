use super::TitleAnimator;
use crate::delay::DelayRange;
use crate::surface::{CursorSurface, TextSurface};

impl<S> TitleAnimator<S>
where
    S: TextSurface + CursorSurface,
{
    /// Erase the shown title from the end, one character per sampled delay.
    ///
    /// Returns how many characters were removed. Stops early once the page is hidden.
    pub async fn delete_current_title(&self, delay: DelayRange) -> usize {
        let steps = self.surface.text().chars().count();
        let mut removed = 0;

        for _ in 0..steps {
            if !self.is_active() {
                tracing::debug!("Page inactive, delete stopped after {} characters", removed);
                break;
            }

            let mut text = self.surface.text();
            if text.pop().is_none() {
                break;
            }
            self.surface.set_text(&text);
            removed += 1;

            self.pause(delay).await;
        }

        removed
    }
}
