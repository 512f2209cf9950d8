//! Ambient particle field: seeding, motion and edge wrapping.

use rand::Rng;

use super::theme::{Color, ParticleStyle};

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Circle radius in pixels.
	pub size: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub color: Color,
}

impl Particle {
	/// Moves the particle by one frame of velocity, then wraps it back inside
	/// a `width` x `height` surface.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x = wrap(self.x + self.speed_x, width);
		self.y = wrap(self.y + self.speed_y, height);
	}

	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Hard-resets a coordinate that left `[0, bound)`.
///
/// Past the far edge goes to 0, below zero goes to the far edge. This is a
/// reset, not a modulo: a particle that overshoots keeps none of the overshoot.
pub fn wrap(coord: f64, bound: f64) -> f64 {
	if coord >= bound {
		0.0
	} else if coord < 0.0 {
		last_inside(bound)
	} else {
		coord
	}
}

/// Largest coordinate strictly inside `[0, bound)`.
fn last_inside(bound: f64) -> f64 {
	if bound > 0.0 && bound.is_finite() {
		f64::from_bits(bound.to_bits() - 1)
	} else {
		0.0
	}
}

fn sample<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
	if low < high {
		rng.gen_range(low..high)
	} else {
		low
	}
}

/// The ordered set of particles behind the hero section.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Generates a fresh field for a `width` x `height` surface.
	pub fn seed<R: Rng + ?Sized>(style: &ParticleStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let count = style.particle_count(width);
		let mut particles = Vec::with_capacity(count);

		for i in 0..count {
			particles.push(Particle {
				x: sample(rng, 0.0, width),
				y: sample(rng, 0.0, height),
				size: sample(rng, style.size_min, style.size_max),
				speed_x: sample(rng, -style.max_speed, style.max_speed),
				speed_y: sample(rng, -style.max_speed, style.max_speed),
				color: style.color_for(i),
			});
		}

		Self {
			particles,
			width,
			height,
		}
	}

	/// Discards every particle and seeds a new field for the new bounds.
	pub fn reseed<R: Rng + ?Sized>(&mut self, style: &ParticleStyle, width: f64, height: f64, rng: &mut R) {
		*self = Self::seed(style, width, height, rng);
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::theme::{ACCENT_PURPLE, ACCENT_TEAL};

	fn particle(x: f64, y: f64, speed_x: f64, speed_y: f64) -> Particle {
		Particle {
			x,
			y,
			size: 1.0,
			speed_x,
			speed_y,
			color: ACCENT_PURPLE,
		}
	}

	#[test]
	fn seeds_one_particle_per_ten_pixels_of_width() {
		let style = ParticleStyle::default();
		let mut rng = StdRng::seed_from_u64(7);
		for (width, expected) in [(0.0, 0), (5.0, 0), (10.0, 1), (375.0, 37), (1440.0, 144)] {
			let field = ParticleField::seed(&style, width, 800.0, &mut rng);
			assert_eq!(field.len(), expected, "width {width}");
		}
	}

	#[test]
	fn seeded_values_stay_in_their_ranges() {
		let style = ParticleStyle::default();
		let mut rng = StdRng::seed_from_u64(42);
		let field = ParticleField::seed(&style, 1280.0, 720.0, &mut rng);

		assert_eq!(field.len(), 128);
		for p in field.particles() {
			assert!((0.0..1280.0).contains(&p.x));
			assert!((0.0..720.0).contains(&p.y));
			assert!((0.5..2.5).contains(&p.size));
			assert!((-0.15..0.15).contains(&p.speed_x));
			assert!((-0.15..0.15).contains(&p.speed_y));
		}
	}

	#[test]
	fn seeded_colors_follow_index() {
		let style = ParticleStyle::default();
		let mut rng = StdRng::seed_from_u64(3);
		let field = ParticleField::seed(&style, 640.0, 480.0, &mut rng);

		for (i, p) in field.particles().iter().enumerate() {
			let expected = if i % 5 == 0 { ACCENT_TEAL } else { ACCENT_PURPLE };
			assert_eq!(p.color, expected, "index {i}");
		}
	}

	#[test]
	fn tiny_spacing_seeds_a_bounded_field() {
		let style = ParticleStyle {
			spacing: 1e-300,
			..ParticleStyle::default()
		};
		let mut rng = StdRng::seed_from_u64(8);
		let field = ParticleField::seed(&style, 1280.0, 720.0, &mut rng);
		assert_eq!(field.len(), 1280);
	}

	#[test]
	fn zero_height_surface_pins_particles_to_top_edge() {
		let style = ParticleStyle::default();
		let mut rng = StdRng::seed_from_u64(1);
		let field = ParticleField::seed(&style, 100.0, 0.0, &mut rng);

		assert_eq!(field.len(), 10);
		assert!(field.particles().iter().all(|p| p.y == 0.0));
	}

	#[test]
	fn crossing_far_edge_resets_to_zero() {
		let mut p = particle(500.0 - 0.01, 10.0, 0.1, 0.0);
		p.advance(500.0, 300.0);
		assert_eq!(p.x, 0.0);
		assert_eq!(p.y, 10.0);

		let mut p = particle(10.0, 299.95, 0.0, 0.1);
		p.advance(500.0, 300.0);
		assert_eq!(p.y, 0.0);
	}

	#[test]
	fn landing_exactly_on_edge_wraps() {
		let mut p = particle(499.5, 10.0, 0.5, 0.0);
		p.advance(500.0, 300.0);
		assert_eq!(p.x, 0.0);
	}

	#[test]
	fn crossing_zero_resets_to_far_edge() {
		let mut p = particle(0.05, 0.05, -0.1, -0.1);
		p.advance(500.0, 300.0);
		assert!(p.x < 500.0 && p.x > 499.99);
		assert!(p.y < 300.0 && p.y > 299.99);
	}

	#[test]
	fn wrap_is_a_reset_not_modulo() {
		assert_eq!(wrap(537.0, 500.0), 0.0);
		assert_eq!(wrap(-42.0, 500.0), last_inside(500.0));
		assert_eq!(wrap(250.0, 500.0), 250.0);
		assert_eq!(wrap(0.0, 500.0), 0.0);
	}

	#[test]
	fn bounds_hold_over_many_frames() {
		let style = ParticleStyle {
			max_speed: 40.0,
			..ParticleStyle::default()
		};
		let mut rng = StdRng::seed_from_u64(99);
		let mut field = ParticleField::seed(&style, 320.0, 200.0, &mut rng);
		let (w, h) = (field.width(), field.height());

		for _ in 0..500 {
			for p in field.particles_mut() {
				p.advance(w, h);
				assert!(p.x >= 0.0 && p.x < w, "x = {}", p.x);
				assert!(p.y >= 0.0 && p.y < h, "y = {}", p.y);
			}
		}
	}

	#[test]
	fn reseed_replaces_the_whole_field() {
		let style = ParticleStyle::default();
		let mut rng = StdRng::seed_from_u64(5);
		let mut field = ParticleField::seed(&style, 800.0, 600.0, &mut rng);
		let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

		field.reseed(&style, 1024.0, 768.0, &mut rng);

		assert_eq!(field.len(), 102);
		assert_eq!((field.width(), field.height()), (1024.0, 768.0));
		assert!(
			field
				.particles()
				.iter()
				.all(|p| !before.contains(&(p.x, p.y)))
		);
	}

	#[test]
	fn distance_is_euclidean() {
		let a = particle(0.0, 0.0, 0.0, 0.0);
		let b = particle(3.0, 4.0, 0.0, 0.0);
		assert_eq!(a.distance_to(&b), 5.0);
		assert_eq!(b.distance_to(&a), 5.0);
	}
}
