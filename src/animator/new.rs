use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

use super::TitleAnimator;
use crate::config::AnimatorConfig;
use crate::error::Result;
use crate::surface::{CursorSurface, TextSurface};
use crate::visibility::PageActivity;

impl<S> TitleAnimator<S>
where
    S: TextSurface + CursorSurface,
{
    pub fn new(surface: Arc<S>, config: &AnimatorConfig, activity: PageActivity) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            surface,
            titles: config.titles.clone(),
            current_index: AtomicUsize::new(0),
            activity,
            rng: Mutex::new(StdRng::from_entropy()),
            sampling: config.sampling,
            type_delay: config.type_delay,
            delete_delay: config.delete_delay,
            delete_pause: config.delete_pause(),
            overlap_guard: config.overlap_guard,
            cycles_in_flight: AtomicUsize::new(0),
        })
    }

    /// Replace the entropy-seeded generator, e.g. with a fixed seed.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }
}
