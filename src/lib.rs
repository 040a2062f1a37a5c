//! Interaction layer for a static portfolio page, compiled to WebAssembly.
//!
//! Every component looks up its own hooks in the host document and stays
//! inactive when they are missing. Components never talk to each other; the
//! start hook simply runs each initializer once, in any order.
//!
//! Each module splits into plain-Rust logic that is unit tested natively and a
//! browser layer behind the `hydrate` feature that does the `web_sys` wiring.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`header`] | Sticky header elevation and the footer year |
//! | [`nav`] | Mobile navigation open/close state |
//! | [`reveal`] | One-way scroll reveal |
//! | [`spotlight`] | Cursor glow and per-card gradient position |
//! | [`tilt`] | Pseudo-3D card tilt |
//! | [`particles`] | Ambient particle background |
//! | [`contact`] | Contact form to `mailto:` draft |
//! | [`config`] | Page-level overrides read from `<body data-fx-config>` |
//! | [`geometry`] | Points, boxes and viewport sizes |
//! | [`consts`] | Selectors, class names and tuning constants |
//! | [`error`] | [`error::FxError`] |
//! | `dom` | Query/listener helpers (browser only) |

pub mod config;
pub mod consts;
pub mod contact;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod geometry;
pub mod header;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod spotlight;
pub mod tilt;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Initialize logging and every component.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }

    let (Some(window), Some(document)) = (web_sys::window(), dom::document()) else {
        return;
    };

    let config = match config::FxConfig::load(&document) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config: {err}; using defaults");
            config::FxConfig::default()
        }
    };

    dom::report("year", header::init_year(&document));
    dom::report("header", header::init_header(&window, &document, &config));
    dom::report("nav", nav::init_nav(&document));
    dom::report("reveal", reveal::init_reveal(&document, &config));
    dom::report("spotlight", spotlight::init_spotlight(&window, &document));
    dom::report("tilt", tilt::init_tilt(&document));
    dom::report("particles", particles::init_particles(&window, &document));
    dom::report("contact", contact::init_contact(&window, &document, &config));
}
