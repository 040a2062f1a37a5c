//! Ambient particle background on the `#fx` canvas.
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Particle state, spawning, wrap-around and link detection |
//! | `render` | Canvas2D drawing of a field (browser only) |
//!
//! The browser side sizes the canvas to the viewport, spawns the field once,
//! and drives [`field::ParticleField::step`] from `requestAnimationFrame`
//! forever. Nothing starts when the user prefers reduced motion.


pub mod field;
#[cfg(feature = "hydrate")]
pub mod render;

pub use field::{Link, Particle, ParticleField, backing_size, capped_dpr, link_alpha, particle_count};

/// CSS colour string for an `r,g,b` triple at `alpha`.
#[must_use]
pub fn rgba(rgb: &str, alpha: f64) -> String {
    format!("rgba({rgb},{alpha})")
}

#[cfg(feature = "hydrate")]
pub use browser::init_particles;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

    use super::field::{ParticleField, backing_size, capped_dpr};
    use super::render;
    use crate::consts::{PARTICLE_CANVAS_SELECTOR, REDUCED_MOTION_QUERY};
    use crate::dom;
    use crate::error::FxError;
    use crate::geometry::{Viewport, px_value};

    type FrameCallback = Closure<dyn FnMut(f64)>;

    /// Size `#fx` to the viewport and start the animation loop.
    ///
    /// Inactive when the canvas or its 2D context is missing, or when the
    /// user prefers reduced motion.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if sizing the surface, registering the resize
    /// listener, or scheduling the first frame fails.
    pub fn init_particles(window: &Window, document: &Document) -> Result<(), FxError> {
        let Some(canvas) = dom::query(document, PARTICLE_CANVAS_SELECTOR)?
            .and_then(|el| el.dyn_ref::<HtmlCanvasElement>().cloned())
        else {
            return Ok(());
        };
        let Some(ctx) = context_2d(&canvas)? else {
            return Ok(());
        };
        if prefers_reduced_motion(window)? {
            log::debug!("particles: reduced motion preferred, staying idle");
            return Ok(());
        }

        let viewport = read_viewport(window)?;
        resize_surface(&canvas, &ctx, viewport, capped_dpr(window.device_pixel_ratio()))?;

        let mut rng = SmallRng::seed_from_u64(seed());
        let field = Rc::new(RefCell::new(ParticleField::spawn(viewport, &mut rng)));
        log::debug!(
            "particles: spawned {} for {}x{}",
            field.borrow().particles.len(),
            viewport.width,
            viewport.height
        );

        {
            let win = window.clone();
            let canvas = canvas.clone();
            let ctx = ctx.clone();
            let field = Rc::clone(&field);
            dom::listen(window, "resize", true, move |_: web_sys::Event| {
                dom::report("particles", on_resize(&win, &canvas, &ctx, &field));
            })?;
        }

        start_loop(window, ctx, field)
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> Result<Option<CanvasRenderingContext2d>, FxError> {
        Ok(canvas
            .get_context("2d")?
            .and_then(|obj| obj.dyn_ref::<CanvasRenderingContext2d>().cloned()))
    }

    fn prefers_reduced_motion(window: &Window) -> Result<bool, FxError> {
        Ok(window
            .match_media(REDUCED_MOTION_QUERY)?
            .is_some_and(|mq| mq.matches()))
    }

    fn read_viewport(window: &Window) -> Result<Viewport, FxError> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        Ok(Viewport::new(width, height))
    }

    fn resize_surface(
        canvas: &HtmlCanvasElement,
        ctx: &CanvasRenderingContext2d,
        viewport: Viewport,
        dpr: f64,
    ) -> Result<(), FxError> {
        let (w, h) = backing_size(viewport, dpr);
        canvas.set_width(w);
        canvas.set_height(h);
        let style = canvas.style();
        style.set_property("width", &px_value(viewport.width))?;
        style.set_property("height", &px_value(viewport.height))?;
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        Ok(())
    }

    fn on_resize(
        window: &Window,
        canvas: &HtmlCanvasElement,
        ctx: &CanvasRenderingContext2d,
        field: &Rc<RefCell<ParticleField>>,
    ) -> Result<(), FxError> {
        let viewport = read_viewport(window)?;
        resize_surface(canvas, ctx, viewport, capped_dpr(window.device_pixel_ratio()))?;
        field.borrow_mut().resize(viewport);
        Ok(())
    }

    /// Run step + draw on every animation frame. The callback re-arms itself
    /// through the shared holder, so the loop lives as long as the page.
    fn start_loop(
        window: &Window,
        ctx: CanvasRenderingContext2d,
        field: Rc<RefCell<ParticleField>>,
    ) -> Result<(), FxError> {
        let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let win = window.clone();

        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            {
                let mut field = field.borrow_mut();
                field.step();
                dom::report("particles", render::draw_frame(&ctx, &field).map_err(FxError::from));
            }
            if let Some(next) = holder_for_cb.borrow().as_ref() {
                dom::report("particles", request_frame(&win, next));
            }
        }) as Box<dyn FnMut(f64)>);

        request_frame(window, &cb)?;
        *holder.borrow_mut() = Some(cb);
        Ok(())
    }

    fn request_frame(window: &Window, cb: &FrameCallback) -> Result<(), FxError> {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn seed() -> u64 {
        // 2^53: the full integer precision of `Math.random()`.
        (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
    }
}
