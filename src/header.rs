//! Sticky header elevation and the footer year stamp.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Whether the header should be drawn raised at this scroll offset.
///
/// The boundary is exclusive: exactly `threshold` is still flat.
#[must_use]
pub fn is_elevated(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(feature = "hydrate")]
pub use browser::{init_header, init_year};

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, Window};

    use super::is_elevated;
    use crate::config::FxConfig;
    use crate::consts::{ELEVATED_CLASS, HEADER_SELECTOR, YEAR_SELECTOR};
    use crate::dom;
    use crate::error::FxError;

    /// Write the current calendar year into `#year`.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if the lookup fails.
    pub fn init_year(document: &Document) -> Result<(), FxError> {
        let Some(year) = dom::query(document, YEAR_SELECTOR)? else {
            return Ok(());
        };
        let now = js_sys::Date::new_0();
        year.set_text_content(Some(&now.get_full_year().to_string()));
        Ok(())
    }

    /// Keep `is-elevated` on the header in sync with the scroll offset.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if the lookup, the initial sync, or listener
    /// registration fails.
    pub fn init_header(window: &Window, document: &Document, config: &FxConfig) -> Result<(), FxError> {
        let Some(header) = dom::query(document, HEADER_SELECTOR)? else {
            return Ok(());
        };
        let threshold = config.elevation_offset;

        sync(window, &header, threshold)?;

        let win = window.clone();
        dom::listen(window, "scroll", true, move |_: web_sys::Event| {
            dom::report("header", sync(&win, &header, threshold));
        })?;

        log::debug!("header: elevation tracking active (threshold {threshold}px)");
        Ok(())
    }

    fn sync(window: &Window, header: &Element, threshold: f64) -> Result<(), FxError> {
        let elevated = is_elevated(window.scroll_y()?, threshold);
        header.class_list().toggle_with_force(ELEVATED_CLASS, elevated)?;
        Ok(())
    }
}
