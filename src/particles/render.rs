//! Draws a [`ParticleField`] to a 2D context.
//!
//! This is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the field and produces pixels; it never mutates simulation state.
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::field::{Link, Particle, ParticleField};
use super::rgba;
use crate::consts::{LINK_RGB, LINK_WIDTH_PX, PARTICLE_RGB};

/// Clear the surface, then draw dots and links.
///
/// Expects the context transform to already be scaled by the device pixel
/// ratio, so all coordinates are CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.viewport.width, field.viewport.height);

    for p in &field.particles {
        draw_particle(ctx, p)?;
    }
    for link in field.links() {
        draw_link(ctx, &link);
    }
    Ok(())
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(p.x, p.y, p.r, 0.0, TAU)?;
    ctx.set_fill_style_str(&rgba(PARTICLE_RGB, p.alpha));
    ctx.fill();
    Ok(())
}

fn draw_link(ctx: &CanvasRenderingContext2d, link: &Link) {
    ctx.set_stroke_style_str(&rgba(LINK_RGB, link.alpha));
    ctx.set_line_width(LINK_WIDTH_PX);
    ctx.begin_path();
    ctx.move_to(link.from.x, link.from.y);
    ctx.line_to(link.to.x, link.to.y);
    ctx.stroke();
}
