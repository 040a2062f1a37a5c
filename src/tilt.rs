//! Pseudo-3D tilt for the first `.card3d` on the page.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use crate::consts::{TILT_GAIN_DEG, TILT_LIFT_PX, TILT_MAX_DEG};
use crate::geometry::{Point, Rect};

/// Rotation angles for a tilted card, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at normalized position `(x, y)` inside the card,
    /// where `(0.5, 0.5)` is the centre.
    ///
    /// Right of centre turns the card about Y; above centre turns it about X.
    #[must_use]
    pub fn from_fraction(x: f64, y: f64) -> Self {
        Self {
            rotate_x: ((0.5 - y) * TILT_GAIN_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
            rotate_y: ((x - 0.5) * TILT_GAIN_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
        }
    }

    /// The CSS `transform` value: both rotations plus a fixed lift.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) translateY({TILT_LIFT_PX}px)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Tilt for a pointer in client coordinates over `card`.
///
/// Returns `None` for a collapsed card.
#[must_use]
pub fn tilt_for(pointer: Point, card: Rect) -> Option<Tilt> {
    card.fraction_of(pointer).map(|f| Tilt::from_fraction(f.x, f.y))
}

#[cfg(feature = "hydrate")]
pub use browser::init_tilt;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, MouseEvent};

    use super::tilt_for;
    use crate::consts::TILT_CARD_SELECTOR;
    use crate::dom;
    use crate::error::FxError;
    use crate::geometry::{Point, Rect};

    /// Tilt the first `.card3d` toward the pointer while it hovers.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if the lookup or listener registration fails.
    pub fn init_tilt(document: &Document) -> Result<(), FxError> {
        let Some(card) = dom::query(document, TILT_CARD_SELECTOR)?.and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
        else {
            return Ok(());
        };

        {
            let card_el = card.clone();
            dom::listen(&card, "mousemove", false, move |e: MouseEvent| {
                let pointer = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
                let Some(tilt) = tilt_for(pointer, Rect::from(card_el.get_bounding_client_rect())) else {
                    return;
                };
                dom::report(
                    "tilt",
                    card_el.style().set_property("transform", &tilt.css_transform()).map_err(FxError::from),
                );
            })?;
        }

        {
            let card_el = card.clone();
            dom::listen(&card, "mouseleave", false, move |_: MouseEvent| {
                dom::report("tilt", card_el.style().set_property("transform", "").map_err(FxError::from));
            })?;
        }

        log::debug!("tilt: card wired");
        Ok(())
    }
}
