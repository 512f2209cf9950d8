//! Leptos component wrapping the particle backdrop canvas.
//!
//! The canvas fills its positioned parent and ignores pointer input. The
//! simulator is created once the canvas is mounted and stopped when the
//! component is cleaned up.

use leptos::prelude::*;
use log::debug;
use web_sys::HtmlCanvasElement;

use super::simulator::CanvasSimulator;
use super::theme::ParticleStyle;

/// Decorative particle animation sized to the viewport. `particles` overrides
/// the default [`ParticleStyle`].
///
/// If the browser cannot provide a 2D drawing context the canvas simply
/// stays blank.
#[component]
pub fn ParticleBackground(#[prop(optional)] particles: Option<ParticleStyle>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let simulator = StoredValue::new_local(None::<CanvasSimulator>);
	let style = particles.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let Some(sim) = CanvasSimulator::attach(canvas, style.clone()) else {
			debug!("folio: no 2d context, particle backdrop disabled");
			return;
		};
		sim.start();
		simulator.update_value(|slot| {
			if let Some(previous) = slot.replace(sim) {
				previous.stop();
			}
		});
	});

	on_cleanup(move || {
		simulator.try_update_value(|slot| {
			if let Some(sim) = slot.take() {
				sim.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-backdrop"
			style="position: absolute; inset: 0; z-index: 0; opacity: 0.4; pointer-events: none;"
		/>
	}
}
