//! Ambient particle backdrop for the hero section.
//!
//! Draws a field of slowly drifting points on a canvas with:
//! - One particle per ten pixels of viewport width
//! - Wrap-around at the surface edges
//! - Faint links between particles closer than 100 px
//! - A full reseed whenever the window is resized
//!
//! The simulation is independent of the browser: [`ParticleSimulator`] is
//! generic over a drawing [`Surface`] and a [`Host`] that schedules frames and
//! reports resizes, so it can be stepped frame by frame outside a page.
//!
//! # Example
//!
//! ```ignore
//! use folio::components::particle_field::ParticleBackground;
//!
//! view! {
//!     <section class="hero">
//!         <ParticleBackground />
//!     </section>
//! }
//! ```

mod canvas;
mod component;
mod host;
mod particles;
mod render;
mod simulator;
pub mod theme;
#[cfg(test)]
mod testing;

pub use canvas::CanvasSurface;
pub use component::ParticleBackground;
pub use host::{Callback, Host, Viewport, WindowHost};
pub use particles::{Particle, ParticleField, wrap};
pub use render::{Surface, draw_frame};
pub use simulator::{CanvasSimulator, ParticleSimulator};
pub use theme::{Color, ParticleStyle};
