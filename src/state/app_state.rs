//! Shell state and navigation.

use super::PageId;

/// Routing state owned by the application root.
///
/// The current page mutates only through [`AppState::navigate`]; there is no
/// global current-page storage. A fresh `AppState` (full reload) starts on
/// `Home`.
#[derive(Debug, Default)]
pub struct AppState {
    page: PageId,
    scroll_reset: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page currently shown.
    pub fn page(&self) -> PageId {
        self.page
    }

    /// Switches to `target` and requests a scroll back to the top.
    pub fn navigate(&mut self, target: PageId) {
        tracing::debug!(from = self.page.slug(), to = target.slug(), "navigate");
        self.page = target;
        self.scroll_reset = true;
    }

    /// Consumes the pending scroll reset, if any. The shell calls this once
    /// per frame before laying out its scroll area.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let state = AppState::new();
        assert_eq!(state.page(), PageId::Home);
    }

    #[test]
    fn test_navigate_switches_page_and_resets_scroll() {
        let mut state = AppState::new();
        state.navigate(PageId::Services);
        assert_eq!(state.page(), PageId::Services);
        assert!(state.take_scroll_reset());
        // Consumed: a second take is a no-op.
        assert!(!state.take_scroll_reset());
    }

    #[test]
    fn test_navigate_to_current_page_still_resets_scroll() {
        let mut state = AppState::new();
        state.navigate(PageId::Home);
        assert_eq!(state.page(), PageId::Home);
        assert!(state.take_scroll_reset());
    }

    #[test]
    fn test_navigate_from_any_page() {
        for start in PageId::ALL {
            let mut state = AppState::new();
            state.navigate(start);
            state.take_scroll_reset();
            state.navigate(PageId::Services);
            assert_eq!(state.page(), PageId::Services);
            assert!(state.take_scroll_reset());
        }
    }
}
