// src/surface.rs

//! Display surfaces the animator writes to.
//!
//! The host owns the real widgets; the animator only sees these two traits.
//! [`MemorySurface`] is the in-process implementation used by the terminal
//! host and by tests.
use std::sync::Mutex;

/// Text-bearing element showing the current title.
pub trait TextSurface: Send + Sync {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// Element whose opacity-like style property drives cursor visibility.
///
/// The value is kept as raw text, so it can hold anything a host stores there.
pub trait CursorSurface: Send + Sync {
    fn opacity(&self) -> String;
    fn set_opacity(&self, opacity: &str);
}

#[derive(Debug, Default)]
struct SurfaceState {
    text: String,
    opacity: String,
    text_history: Vec<String>,
    opacity_history: Vec<String>,
}

/// Title and cursor element pair held in memory, with a log of every write.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let surface = Self::new();
        surface.lock().text = text.to_string();
        surface
    }

    pub fn with_opacity(self, opacity: &str) -> Self {
        self.lock().opacity = opacity.to_string();
        self
    }

    /// Every value written through [`TextSurface::set_text`], oldest first.
    pub fn text_history(&self) -> Vec<String> {
        self.lock().text_history.clone()
    }

    pub fn opacity_history(&self) -> Vec<String> {
        self.lock().opacity_history.clone()
    }

    pub fn clear_history(&self) {
        let mut state = self.lock();
        state.text_history.clear();
        state.opacity_history.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SurfaceState> {
        // A panic mid-write leaves plain strings behind; keep serving them
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TextSurface for MemorySurface {
    fn text(&self) -> String {
        self.lock().text.clone()
    }

    fn set_text(&self, text: &str) {
        let mut state = self.lock();
        state.text = text.to_string();
        state.text_history.push(text.to_string());
    }
}

impl CursorSurface for MemorySurface {
    fn opacity(&self) -> String {
        self.lock().opacity.clone()
    }

    fn set_opacity(&self, opacity: &str) {
        let mut state = self.lock();
        state.opacity = opacity.to_string();
        state.opacity_history.push(opacity.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_blank() {
        let surface = MemorySurface::new();
        assert_eq!(surface.text(), "");
        assert_eq!(surface.opacity(), "");
        assert!(surface.text_history().is_empty());
    }

    #[test]
    fn test_seeded_values_are_not_history() {
        let surface = MemorySurface::with_text("UI Designer").with_opacity("1");
        assert_eq!(surface.text(), "UI Designer");
        assert_eq!(surface.opacity(), "1");
        assert!(surface.text_history().is_empty());
        assert!(surface.opacity_history().is_empty());
    }

    #[test]
    fn test_writes_are_recorded() {
        let surface = MemorySurface::new();
        surface.set_text("a");
        surface.set_text("ab");
        surface.set_opacity("0");

        assert_eq!(surface.text_history(), vec!["a", "ab"]);
        assert_eq!(surface.opacity_history(), vec!["0"]);

        surface.clear_history();
        assert!(surface.text_history().is_empty());
        assert_eq!(surface.text(), "ab");
    }
}
