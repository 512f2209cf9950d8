//! Frame drawing for the particle backdrop.
//!
//! Drawing and motion are interleaved the same way on every frame: a particle
//! is drawn where it was, moved, and then linked to every later particle using
//! its new position against their not-yet-moved positions.

use super::particles::ParticleField;
use super::theme::{Color, ParticleStyle};

/// Anything the backdrop can be painted onto.
pub trait Surface {
	/// Sets the drawable area in CSS pixels.
	fn resize(&mut self, width: f64, height: f64);
	/// Erases the whole drawable area.
	fn clear(&mut self);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

/// Runs one frame update: clear, then draw, move, wrap and link each particle
/// in field order.
pub fn draw_frame<S: Surface + ?Sized>(field: &mut ParticleField, surface: &mut S, style: &ParticleStyle) {
	surface.clear();

	let (width, height) = (field.width(), field.height());
	let particles = field.particles_mut();

	for i in 0..particles.len() {
		let (head, tail) = particles.split_at_mut(i + 1);
		let p = &mut head[i];

		surface.fill_circle(p.x, p.y, p.size, p.color.with_alpha(style.fill_alpha));

		p.advance(width, height);

		for other in tail.iter() {
			if let Some(alpha) = style.link_opacity(p.distance_to(other)) {
				surface.stroke_line(
					(p.x, p.y),
					(other.x, other.y),
					style.link_width,
					p.color.with_alpha(alpha),
				);
			}
		}
	}
}
