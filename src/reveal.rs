//! Scroll-triggered reveal.
//!
//! A single `IntersectionObserver` watches every `.reveal` element. Reveal is
//! one-way: once an element gets `is-visible` it keeps it. The observer is
//! never disconnected, so already revealed elements keep reporting; those
//! reports are no-ops.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Per-element reveal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Visible,
}

impl Reveal {
    /// Fold one intersection report into the state. Never leaves `Visible`.
    #[must_use]
    pub fn observe(self, is_intersecting: bool) -> Self {
        if is_intersecting { Self::Visible } else { self }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

#[cfg(feature = "hydrate")]
pub use browser::init_reveal;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::Reveal;
    use crate::config::FxConfig;
    use crate::consts::{REVEAL_SELECTOR, VISIBLE_CLASS};
    use crate::dom;
    use crate::error::FxError;

    /// Observe every `.reveal` element and mark it visible on first intersection.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if the lookup or observer construction fails.
    pub fn init_reveal(document: &Document, config: &FxConfig) -> Result<(), FxError> {
        let targets = dom::query_all(document, REVEAL_SELECTOR)?;
        if targets.is_empty() {
            return Ok(());
        }

        let cb = Closure::wrap(Box::new(|entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let class_list = target.class_list();
                let prior = if class_list.contains(VISIBLE_CLASS) { Reveal::Visible } else { Reveal::Hidden };
                let next = prior.observe(entry.is_intersecting());
                if next != prior {
                    dom::report("reveal", class_list.add_1(VISIBLE_CLASS).map_err(FxError::from));
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&config.reveal_threshold.into());
        let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
        cb.forget();

        for target in &targets {
            observer.observe(target);
        }

        log::debug!("reveal: observing {} elements", targets.len());
        Ok(())
    }
}
