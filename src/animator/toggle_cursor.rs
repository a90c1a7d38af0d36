use super::{CursorToggle, CursorVisibility, TitleAnimator, RESET_OPACITY};
use crate::error::{AnimatorError, Result};
use crate::surface::{CursorSurface, TextSurface};

/// Read the integer prefix of an opacity value as a visibility: `"1.0"` is visible,
/// `"0.5"` is hidden.
///
/// Leading whitespace and a sign are accepted; anything without leading digits is an error.
/// Only zero versus nonzero matters, so arbitrarily long digit runs are fine.
pub fn parse_opacity(raw: &str) -> Result<CursorVisibility> {
    let trimmed = raw.trim_start();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(AnimatorError::InvalidOpacity(raw.to_string()));
    }

    if digits[..end].bytes().any(|b| b != b'0') {
        Ok(CursorVisibility::Visible)
    } else {
        Ok(CursorVisibility::Hidden)
    }
}

impl<S> TitleAnimator<S>
where
    S: TextSurface + CursorSurface,
{
    /// Flip the cursor between visible and hidden.
    pub fn toggle_cursor(&self) -> CursorToggle {
        if !self.is_active() {
            return CursorToggle::Inactive;
        }

        let raw = self.surface.opacity();
        match parse_opacity(&raw) {
            Ok(current) => {
                let next = current.flipped();
                self.surface.set_opacity(next.as_opacity());
                CursorToggle::Toggled(next)
            }
            Err(err) => {
                tracing::warn!("Failed to read cursor opacity as int: {}", err);
                self.surface.set_opacity(RESET_OPACITY);
                CursorToggle::Reset { raw }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::animator_with;
    use super::*;
    use crate::surface::MemorySurface;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between a test and its scoped subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
            let sink = self.clone();
            tracing_subscriber::fmt()
                .with_writer(move || sink.clone())
                .with_ansi(false)
                .finish()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_parse_opacity_integer_prefix() {
        use CursorVisibility::{Hidden, Visible};

        assert_eq!(parse_opacity("0").unwrap(), Hidden);
        assert_eq!(parse_opacity("1").unwrap(), Visible);
        assert_eq!(parse_opacity("1.0").unwrap(), Visible);
        assert_eq!(parse_opacity("0.75").unwrap(), Hidden);
        assert_eq!(parse_opacity("  12px").unwrap(), Visible);
        assert_eq!(parse_opacity("-3").unwrap(), Visible);
        assert_eq!(parse_opacity("+2").unwrap(), Visible);
        assert_eq!(parse_opacity("-0").unwrap(), Hidden);
        assert_eq!(parse_opacity("000").unwrap(), Hidden);
    }

    #[test]
    fn test_parse_opacity_long_digit_runs() {
        assert_eq!(parse_opacity("99999999999999999999").unwrap(), CursorVisibility::Visible);
        assert_eq!(
            parse_opacity("000000000000000000000000").unwrap(),
            CursorVisibility::Hidden
        );
    }

    #[test]
    fn test_huge_opacity_hides_cursor() {
        let animator = animator_with(MemorySurface::new().with_opacity("99999999999999999999"));

        assert_eq!(animator.toggle_cursor(), CursorToggle::Toggled(CursorVisibility::Hidden));
        assert_eq!(animator.surface().opacity(), "0");
    }

    #[test]
    fn test_parse_opacity_rejects_non_numeric() {
        for raw in ["", "   ", "abc", ".5", "-", "visible"] {
            assert!(
                matches!(parse_opacity(raw), Err(AnimatorError::InvalidOpacity(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_toggle_alternates() {
        let animator = animator_with(MemorySurface::new().with_opacity("1"));

        let outcomes: Vec<CursorToggle> = (0..4).map(|_| animator.toggle_cursor()).collect();

        assert_eq!(
            outcomes,
            vec![
                CursorToggle::Toggled(CursorVisibility::Hidden),
                CursorToggle::Toggled(CursorVisibility::Visible),
                CursorToggle::Toggled(CursorVisibility::Hidden),
                CursorToggle::Toggled(CursorVisibility::Visible),
            ]
        );
        assert_eq!(animator.surface().opacity_history(), vec!["0", "1", "0", "1"]);
    }

    #[test]
    fn test_non_numeric_resets_to_visible() {
        let animator = animator_with(MemorySurface::new().with_opacity("not-a-number"));

        let outcome = animator.toggle_cursor();

        assert_eq!(outcome, CursorToggle::Reset { raw: "not-a-number".to_string() });
        assert_eq!(animator.surface().opacity(), RESET_OPACITY);

        // The reset value reads as visible, so the next flicker hides
        assert_eq!(animator.toggle_cursor(), CursorToggle::Toggled(CursorVisibility::Hidden));
    }

    #[test]
    fn test_reset_logs_warning_with_raw_value() {
        let logs = CapturedLogs::default();
        let subscriber = logs.subscriber();
        let animator = animator_with(MemorySurface::new().with_opacity("not-a-number"));

        let outcome = tracing::subscriber::with_default(subscriber, || animator.toggle_cursor());

        assert!(matches!(outcome, CursorToggle::Reset { .. }));
        let output = logs.contents();
        assert!(output.contains("WARN"), "no warning in {:?}", output);
        assert!(output.contains("Failed to read cursor opacity"));
        assert!(output.contains("not-a-number"));
    }

    #[test]
    fn test_valid_toggle_logs_nothing() {
        let logs = CapturedLogs::default();
        let subscriber = logs.subscriber();
        let animator = animator_with(MemorySurface::new().with_opacity("1"));

        tracing::subscriber::with_default(subscriber, || animator.toggle_cursor());

        assert!(logs.contents().is_empty());
    }

    #[test]
    fn test_unstyled_cursor_resets() {
        let animator = animator_with(MemorySurface::new());
        assert!(matches!(animator.toggle_cursor(), CursorToggle::Reset { .. }));
        assert_eq!(animator.surface().opacity(), "1.0");
    }

    #[test]
    fn test_inactive_page_is_untouched() {
        let animator = animator_with(MemorySurface::new().with_opacity("garbage"));
        animator.activity().set_hidden(true);

        assert_eq!(animator.toggle_cursor(), CursorToggle::Inactive);
        assert_eq!(animator.surface().opacity(), "garbage");
        assert!(animator.surface().opacity_history().is_empty());
    }
}
