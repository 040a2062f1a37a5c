//! Mobile navigation toggle.
//!
//! The menu's `is-open` class is the source of truth; each click reads it,
//! computes the next [`NavState`], and writes the class and the toggle's
//! `aria-expanded` back.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    #[must_use]
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// State after the toggle control is activated.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// State after a menu link is activated: always closed.
    #[must_use]
    pub fn closed(self) -> Self {
        Self::Closed
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        match self {
            Self::Closed => "false",
            Self::Open => "true",
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::init_nav;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element};

    use super::NavState;
    use crate::consts::{NAV_MENU_SELECTOR, NAV_OPEN_CLASS, NAV_TOGGLE_SELECTOR};
    use crate::dom;
    use crate::error::FxError;

    /// Wire the toggle control and the menu links.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if a lookup or listener registration fails.
    pub fn init_nav(document: &Document) -> Result<(), FxError> {
        let (Some(toggle), Some(menu)) = (
            dom::query(document, NAV_TOGGLE_SELECTOR)?,
            dom::query(document, NAV_MENU_SELECTOR)?,
        ) else {
            return Ok(());
        };

        {
            let toggle_el = toggle.clone();
            let menu = menu.clone();
            dom::listen(&toggle, "click", false, move |_: web_sys::Event| {
                let next = current(&menu).toggled();
                dom::report("nav", apply(&toggle_el, &menu, next));
            })?;
        }

        let links = dom::query_all_in(&menu, "a")?;
        let link_count = links.len();
        for link in links {
            let toggle = toggle.clone();
            let menu = menu.clone();
            dom::listen(&link, "click", false, move |_: web_sys::Event| {
                let next = current(&menu).closed();
                dom::report("nav", apply(&toggle, &menu, next));
            })?;
        }

        log::debug!("nav: toggle wired with {link_count} menu links");
        Ok(())
    }

    fn current(menu: &Element) -> NavState {
        NavState::from_open(menu.class_list().contains(NAV_OPEN_CLASS))
    }

    fn apply(toggle: &Element, menu: &Element, state: NavState) -> Result<(), FxError> {
        menu.class_list().toggle_with_force(NAV_OPEN_CLASS, state.is_open())?;
        toggle.set_attribute("aria-expanded", state.aria_expanded())?;
        Ok(())
    }
}
