//! Reveal-on-scroll for elements marked with the `reveal` class.
//!
//! An `IntersectionObserver` adds `revealed` the first time an element enters
//! the viewport and then stops watching it; the animation itself lives in
//! `style.css` under `.reveal.revealed`.

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Marker class for elements that animate in.
pub const REVEAL_CLASS: &str = "reveal";

/// Class added once an element has been seen.
pub const REVEALED_CLASS: &str = "revealed";

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Whether an observer entry counts as "in view".
pub fn in_view(is_intersecting: bool, ratio: f64) -> bool {
	is_intersecting && ratio >= REVEAL_THRESHOLD
}

fn pending_elements(document: &Document) -> Vec<Element> {
	let selector = format!(".{REVEAL_CLASS}:not(.{REVEALED_CLASS})");
	let Ok(nodes) = document.query_selector_all(&selector) else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|i| nodes.item(i)?.dyn_into::<Element>().ok())
		.collect()
}

fn mark_revealed(element: &Element) {
	let _ = element.class_list().add_1(REVEALED_CLASS);
}

/// Watches every pending `.reveal` element in a document.
pub struct RevealObserver {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
	/// Returns `None` when the browser has no `IntersectionObserver`.
	pub fn new() -> Option<Self> {
		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			|entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if in_view(entry.is_intersecting(), entry.intersection_ratio()) {
						let target = entry.target();
						mark_revealed(&target);
						observer.unobserve(&target);
					}
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

		Some(Self {
			observer,
			_callback: callback,
		})
	}

	/// Starts watching every `.reveal` element not yet revealed.
	pub fn observe_pending(&self, document: &Document) -> usize {
		let elements = pending_elements(document);
		for element in &elements {
			self.observer.observe(element);
		}
		elements.len()
	}
}

impl Drop for RevealObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Hooks reveal-on-scroll up for the current page once it is mounted.
///
/// Without `IntersectionObserver` every element is revealed straight away so
/// nothing stays hidden.
pub fn use_reveal_on_scroll() {
	let observer = StoredValue::new_local(None::<RevealObserver>);

	Effect::new(move |_| {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		let Some(reveal) = RevealObserver::new() else {
			warn!("folio: no IntersectionObserver, revealing all sections");
			pending_elements(&document).iter().for_each(mark_revealed);
			return;
		};
		debug!("folio: watching {} reveal targets", reveal.observe_pending(&document));
		observer.set_value(Some(reveal));
	});

	on_cleanup(move || {
		observer.try_update_value(|slot| *slot = None);
	});
}
