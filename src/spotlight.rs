//! Cursor glow and per-card spotlight.
//!
//! Pointer movement anywhere over the window moves `#glow` and feeds every
//! `.project` card the pointer position as `--mx` / `--my` percentages, which
//! the stylesheet uses as a gradient origin.

#[cfg(test)]
#[path = "spotlight_test.rs"]
mod spotlight_test;

use crate::geometry::{Point, Rect};

/// Pointer position as a percentage of `card`'s box, unclamped.
///
/// Values fall outside `0..=100` when the pointer is outside the card.
/// Collapsed cards yield `None`.
#[must_use]
pub fn card_offset_percent(pointer: Point, card: Rect) -> Option<(f64, f64)> {
    card.fraction_of(pointer).map(|f| (f.x * 100.0, f.y * 100.0))
}

#[cfg(feature = "hydrate")]
pub use browser::init_spotlight;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, MouseEvent, Window};

    use super::card_offset_percent;
    use crate::consts::{GLOW_SELECTOR, POINTER_CLASS, PROJECT_CARD_SELECTOR};
    use crate::dom;
    use crate::error::FxError;
    use crate::geometry::{Point, Rect, percent_value, px_value};

    /// Track the pointer for the glow element and the project cards.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if a lookup or listener registration fails.
    pub fn init_spotlight(window: &Window, document: &Document) -> Result<(), FxError> {
        let glow = dom::query(document, GLOW_SELECTOR)?.and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        let cards = dom::query_all(document, PROJECT_CARD_SELECTOR)?
            .into_iter()
            .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
            .collect::<Vec<_>>();
        if glow.is_none() && cards.is_empty() {
            return Ok(());
        }
        let body = document.body();
        let card_count = cards.len();

        {
            let body = body.clone();
            dom::listen(window, "mousemove", true, move |e: MouseEvent| {
                let pointer = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
                dom::report("spotlight", on_move(body.as_ref(), glow.as_ref(), &cards, pointer));
            })?;
        }

        dom::listen(window, "mouseleave", false, move |_: MouseEvent| {
            if let Some(body) = body.as_ref() {
                dom::report("spotlight", body.class_list().remove_1(POINTER_CLASS).map_err(FxError::from));
            }
        })?;

        log::debug!("spotlight: tracking pointer for {card_count} cards");
        Ok(())
    }

    fn on_move(
        body: Option<&HtmlElement>,
        glow: Option<&HtmlElement>,
        cards: &[HtmlElement],
        pointer: Point,
    ) -> Result<(), FxError> {
        if let Some(body) = body {
            body.class_list().add_1(POINTER_CLASS)?;
        }

        if let Some(glow) = glow {
            let style = glow.style();
            style.set_property("left", &px_value(pointer.x))?;
            style.set_property("top", &px_value(pointer.y))?;
        }

        for card in cards {
            let rect = Rect::from(card.get_bounding_client_rect());
            let Some((mx, my)) = card_offset_percent(pointer, rect) else {
                continue;
            };
            let style = card.style();
            style.set_property("--mx", &percent_value(mx))?;
            style.set_property("--my", &percent_value(my))?;
        }
        Ok(())
    }
}
