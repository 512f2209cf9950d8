//! Page components.

pub mod nav;
pub mod particle_field;
pub mod reveal;
pub mod sections;
pub mod typewriter;
