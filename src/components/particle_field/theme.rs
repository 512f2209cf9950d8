//! Visual styling for the particle backdrop.
//!
//! Colors and simulation constants live here so a page can retune the backdrop
//! from its embedded site data without touching the simulator.

use serde::{Deserialize, Deserializer};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

/// Accent teal, given to every fifth particle.
pub const ACCENT_TEAL: Color = Color::rgb(0x14, 0xb8, 0xa6);

/// Accent purple, given to all other particles.
pub const ACCENT_PURPLE: Color = Color::rgb(0xa8, 0x55, 0xf7);

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parses `#RRGGBB` or `#RRGGBBAA`.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.strip_prefix('#')?;
		if !digits.is_ascii() {
			return None;
		}
		let channel = |at: usize| u8::from_str_radix(digits.get(at..at + 2)?, 16).ok();

		match digits.len() {
			6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
			8 => Some(Self::rgba(
				channel(0)?,
				channel(2)?,
				channel(4)?,
				channel(6)? as f64 / 255.0,
			)),
			_ => None,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl TryFrom<String> for Color {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::from_hex(&value).ok_or_else(|| format!("expected #RRGGBB color, got {value:?}"))
	}
}

/// Tunables for the ambient particle backdrop.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Pixels of viewport width per particle.
	pub spacing: f64,
	/// Smallest particle radius (inclusive).
	pub size_min: f64,
	/// Largest particle radius (exclusive).
	pub size_max: f64,
	/// Per-axis speed bound in px/frame; components are drawn from `[-max, max)`.
	pub max_speed: f64,
	/// Color for every `accent_every`-th particle, starting at index 0.
	pub accent: Color,
	/// Color for all remaining particles.
	pub base: Color,
	pub accent_every: usize,
	/// Opacity used when filling particle circles.
	pub fill_alpha: f64,
	/// Particles strictly closer than this are connected.
	pub link_distance: f64,
	pub link_width: f64,
	/// Opacity of a link between two coincident particles. Falls off linearly
	/// to zero at `link_distance`.
	pub link_alpha: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			spacing: 10.0,
			size_min: 0.5,
			size_max: 2.5,
			max_speed: 0.15,
			accent: ACCENT_TEAL,
			base: ACCENT_PURPLE,
			accent_every: 5,
			fill_alpha: 0x40 as f64 / 255.0,
			link_distance: 100.0,
			link_width: 0.3,
			link_alpha: 0.2,
		}
	}
}

/// Smallest accepted `spacing`: at most one particle per pixel of width.
pub const MIN_SPACING: f64 = 1.0;

impl ParticleStyle {
	/// Number of particles seeded for a surface `width` pixels wide.
	///
	/// Spacing below [`MIN_SPACING`] counts as [`MIN_SPACING`], so the count
	/// never exceeds the width in pixels.
	pub fn particle_count(&self, width: f64) -> usize {
		if !width.is_finite() || width <= 0.0 || self.spacing.is_nan() || self.spacing <= 0.0 {
			return 0;
		}
		(width / self.spacing.max(MIN_SPACING)).floor() as usize
	}

	/// Rejects settings the simulator cannot run with: spacing under
	/// [`MIN_SPACING`], inverted or negative ranges, non-finite numbers and
	/// opacities outside `[0, 1]`.
	pub fn validate(&self) -> Result<(), String> {
		let finite = [
			("spacing", self.spacing),
			("size_min", self.size_min),
			("size_max", self.size_max),
			("max_speed", self.max_speed),
			("link_distance", self.link_distance),
			("link_width", self.link_width),
		];
		if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
			return Err(format!("particles.{name} must be a finite number, got {value}"));
		}
		if self.spacing < MIN_SPACING {
			return Err(format!(
				"particles.spacing must be at least {MIN_SPACING}, got {}",
				self.spacing
			));
		}
		if self.size_min < 0.0 || self.size_min > self.size_max {
			return Err(format!(
				"particles.size_min..size_max must be a non-negative range, got {}..{}",
				self.size_min, self.size_max
			));
		}
		if self.max_speed < 0.0 {
			return Err(format!("particles.max_speed must not be negative, got {}", self.max_speed));
		}
		if self.link_distance < 0.0 || self.link_width < 0.0 {
			return Err("particles.link_distance and link_width must not be negative".to_string());
		}
		for (name, alpha) in [("fill_alpha", self.fill_alpha), ("link_alpha", self.link_alpha)] {
			if !(0.0..=1.0).contains(&alpha) {
				return Err(format!("particles.{name} must be within 0..=1, got {alpha}"));
			}
		}
		Ok(())
	}

	/// Deserializes a style and runs [`validate`](Self::validate) on it, for
	/// use as `#[serde(deserialize_with = ...)]`.
	pub fn deserialize_checked<'de, D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let style = Self::deserialize(deserializer)?;
		style.validate().map_err(serde::de::Error::custom)?;
		Ok(style)
	}

	pub fn color_for(&self, index: usize) -> Color {
		if self.accent_every != 0 && index % self.accent_every == 0 {
			self.accent
		} else {
			self.base
		}
	}

	/// Link opacity for two particles `distance` apart, or `None` when they are
	/// too far apart to be connected.
	pub fn link_opacity(&self, distance: f64) -> Option<f64> {
		if distance < self.link_distance {
			Some(self.link_alpha * (1.0 - distance / self.link_distance))
		} else {
			None
		}
	}
}
