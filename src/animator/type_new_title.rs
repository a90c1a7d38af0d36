use super::TitleAnimator;
use crate::delay::DelayRange;
use crate::surface::{CursorSurface, TextSurface};

impl<S> TitleAnimator<S>
where
    S: TextSurface + CursorSurface,
{
    /// Reveal `title` from the start, one character per sampled delay.
    ///
    /// Returns how many characters were revealed. Stops early once the page is hidden.
    pub async fn type_new_title(&self, title: &str, delay: DelayRange) -> usize {
        let mut revealed = 0;

        for (start, ch) in title.char_indices() {
            if !self.is_active() {
                tracing::debug!("Page inactive, typing stopped after {} characters", revealed);
                break;
            }

            self.surface.set_text(&title[..start + ch.len_utf8()]);
            revealed += 1;

            self.pause(delay).await;
        }

        revealed
    }
}
