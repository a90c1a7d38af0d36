pub mod animator;
pub mod config;
pub mod delay;
pub mod error;
pub mod scheduler;
pub mod surface;
pub mod visibility;

pub use animator::{CursorToggle, CursorVisibility, CycleOutcome, TitleAnimator};
pub use config::AnimatorConfig;
pub use delay::{DelayRange, DelaySampling};
pub use scheduler::{Scheduler, SchedulerHandle};
pub use surface::{CursorSurface, MemorySurface, TextSurface};
pub use visibility::PageActivity;
