//! Header menu overlay

use lifenotes_view::messages::class;
use lifenotes_view::Element;

/// Open/closed state of the site menu overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Overlay hidden
    #[default]
    Closed,
    /// Overlay shown
    Open,
}

/// Menu overlay controller
///
/// The toggle button flips the state; the close button and a click on the
/// backdrop (the overlay itself, not its content) close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuOverlay {
    state: MenuState,
}

impl MenuOverlay {
    /// Closed overlay
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Whether the overlay is shown
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Show the overlay
    pub fn open(&mut self) {
        self.state = MenuState::Open;
    }

    /// Hide the overlay if shown
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Toggle button click
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Click inside the overlay; closes only when the backdrop itself was hit
    pub fn click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }

    /// Project onto the overlay (`open` class, `aria-hidden`) and the toggle
    /// button (`aria-expanded`)
    pub fn project(&self, overlay: &mut Element, toggle: Option<&mut Element>) {
        let open = self.is_open();
        overlay.toggle_class(class::OPEN, open);
        overlay.set_attr("aria-hidden", (!open).to_string());
        if let Some(toggle) = toggle {
            toggle.set_attr("aria-expanded", open.to_string());
        }
    }
}
