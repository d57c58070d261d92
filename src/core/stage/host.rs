//=========================================================================
// Stage
//
// Owner of the single active screen.
//
// Exactly one screen is active at any time. Nothing else holds a
// long-lived reference to it: screens that want to switch queue a
// request, and the loop applies the queue here at phase boundaries.
// Wrapping the outgoing screen into a TransitionScreen also happens
// here, because only the stage may take the current screen by value.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{Screen, ScreenContent, ScreenRequest, ScreenRequests, TransitionScreen};

//=== Stage ===============================================================

/// The active-screen host: owns the screen currently receiving input
/// and being rendered.
pub struct Stage {
    current: Box<dyn Screen>,
}

impl Stage {
    /// Creates a stage showing `initial`.
    pub fn new(initial: Box<dyn Screen>) -> Self {
        Self { current: initial }
    }

    //--- Access -----------------------------------------------------------

    pub fn current(&self) -> &dyn Screen {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> &mut dyn Screen {
        self.current.as_mut()
    }

    //--- Switching --------------------------------------------------------

    /// Replaces the active screen immediately.
    pub fn display(&mut self, screen: Box<dyn Screen>) {
        debug!(target: "stage", "Displaying new screen");
        self.current = screen;
    }

    /// Applies all queued requests in order. Returns `true` if an exit
    /// was requested.
    pub fn apply_requests(&mut self, requests: &mut ScreenRequests) -> bool {
        let mut exit = false;
        for request in requests.take() {
            match request {
                ScreenRequest::Display(screen) => {
                    self.display(screen);
                }
                ScreenRequest::Transition { target, style } => {
                    debug!(
                        target: "stage",
                        "Starting {}s transition (black_in: {})",
                        style.seconds,
                        style.black_in
                    );
                    let from = std::mem::replace(
                        &mut self.current,
                        Box::new(EmptyScreen::default()),
                    );
                    self.current = Box::new(TransitionScreen::new(from, target, style));
                }
                ScreenRequest::Exit => {
                    info!(target: "stage", "Exit requested");
                    exit = true;
                }
            }
        }
        exit
    }
}

//=== EmptyScreen =========================================================

/// Placeholder standing in while the outgoing screen is moved into a
/// transition. Never updated or drawn.
#[derive(Default)]
struct EmptyScreen {
    content: ScreenContent,
}

impl Screen for EmptyScreen {
    fn content(&self) -> &ScreenContent {
        &self.content
    }

    fn content_mut(&mut self) -> &mut ScreenContent {
        &mut self.content
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stage::{FrameContext, TransitionStyle};

    struct Tagged {
        content: ScreenContent,
        tag: &'static str,
        updates: u32,
    }

    impl Tagged {
        fn boxed(tag: &'static str) -> Box<dyn Screen> {
            Box::new(Self { content: ScreenContent::new(), tag, updates: 0 })
        }
    }

    impl Screen for Tagged {
        fn content(&self) -> &ScreenContent {
            &self.content
        }
        fn content_mut(&mut self) -> &mut ScreenContent {
            &mut self.content
        }
        fn update(&mut self, _ctx: &mut FrameContext) {
            self.updates += 1;
        }
    }

    #[test]
    fn display_replaces_current() {
        let mut stage = Stage::new(Tagged::boxed("first"));
        stage.display(Tagged::boxed("second"));
        // The stage holds exactly one screen; drawing/updating reaches
        // only the replacement.
        let _ = stage.current();
    }

    #[test]
    fn apply_display_request_swaps_screen() {
        let mut stage = Stage::new(Tagged::boxed("a"));
        let mut requests = ScreenRequests::new();
        requests.display(Tagged::boxed("b"));

        let exit = stage.apply_requests(&mut requests);
        assert!(!exit);
        assert!(requests.is_empty());
    }

    #[test]
    fn apply_exit_request_reports_exit() {
        let mut stage = Stage::new(Tagged::boxed("a"));
        let mut requests = ScreenRequests::new();
        requests.exit();
        assert!(stage.apply_requests(&mut requests));
    }

    #[test]
    fn transition_request_installs_transition_screen() {
        let mut stage = Stage::new(Tagged::boxed("from"));
        let mut requests = ScreenRequests::new();
        requests.transition_styled(Tagged::boxed("to"), TransitionStyle::default());

        stage.apply_requests(&mut requests);
        // The installed screen is the transition wrapper; its content
        // holds the merged widget lists (both empty here).
        assert!(stage.current().content().buttons.is_empty());
    }

    #[test]
    fn empty_queue_is_a_noop() {
        let mut stage = Stage::new(Tagged::boxed("only"));
        let mut requests = ScreenRequests::new();
        assert!(!stage.apply_requests(&mut requests));
    }
}
