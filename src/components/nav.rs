//! Fixed navigation bar with scroll-spy highlighting.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Page sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
	Home,
	About,
	Skills,
	Projects,
	Contact,
}

impl Section {
	pub const ALL: [Section; 5] = [
		Section::Home,
		Section::About,
		Section::Skills,
		Section::Projects,
		Section::Contact,
	];

	/// DOM id of the section element.
	pub fn id(self) -> &'static str {
		match self {
			Section::Home => "home",
			Section::About => "about",
			Section::Skills => "skills",
			Section::Projects => "projects",
			Section::Contact => "contact",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Section::Home => "Home",
			Section::About => "About",
			Section::Skills => "Skills",
			Section::Projects => "Projects",
			Section::Contact => "Contact",
		}
	}
}

/// How far below the top of the viewport a section counts as "in view".
pub const SCROLL_PROBE_OFFSET: f64 = 300.0;

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
	pub section: Section,
	pub top: f64,
	pub height: f64,
}

/// Section containing the scroll probe, preferring the last match in page
/// order. `None` means no section contains it and the current highlight
/// should stay.
pub fn active_section(bounds: &[SectionBounds], scroll_y: f64) -> Option<Section> {
	let probe = scroll_y + SCROLL_PROBE_OFFSET;
	bounds
		.iter()
		.filter(|b| probe >= b.top && probe < b.top + b.height)
		.last()
		.map(|b| b.section)
}

fn section_element(window: &Window, section: Section) -> Option<HtmlElement> {
	window
		.document()?
		.get_element_by_id(section.id())?
		.dyn_into()
		.ok()
}

fn measure_sections(window: &Window) -> Vec<SectionBounds> {
	Section::ALL
		.into_iter()
		.filter_map(|section| {
			let el = section_element(window, section)?;
			Some(SectionBounds {
				section,
				top: el.offset_top() as f64,
				height: el.offset_height() as f64,
			})
		})
		.collect()
}

/// Smooth-scrolls the page to `section`. Missing sections are ignored.
pub fn scroll_to(section: Section) {
	let Some(el) = web_sys::window().and_then(|w| section_element(&w, section)) else {
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Top navigation bar. Highlights the section currently in view and scrolls
/// to a section when its button is clicked.
#[component]
pub fn NavBar(#[prop(into)] initials: String) -> impl IntoView {
	let (active, set_active) = signal(Section::Home);

	let handle = window_event_listener(ev::scroll, move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let scroll_y = window.scroll_y().unwrap_or(0.0);
		if let Some(section) = active_section(&measure_sections(&window), scroll_y) {
			if active.get_untracked() != section {
				set_active.set(section);
			}
		}
	});
	on_cleanup(move || handle.remove());

	view! {
		<nav class="site-nav">
			<div class="site-nav-inner">
				<div class="brand gradient-text">{initials}</div>
				<div class="nav-links">
					{Section::ALL
						.into_iter()
						.map(|section| {
							view! {
								<button
									class="nav-link"
									class:active=move || active.get() == section
									on:click=move |_| scroll_to(section)
								>
									{section.label()}
								</button>
							}
						})
						.collect_view()}
				</div>
			</div>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn layout() -> Vec<SectionBounds> {
		Section::ALL
			.into_iter()
			.enumerate()
			.map(|(i, section)| SectionBounds {
				section,
				top: i as f64 * 900.0,
				height: 900.0,
			})
			.collect()
	}

	#[test]
	fn top_of_page_is_home() {
		assert_eq!(active_section(&layout(), 0.0), Some(Section::Home));
	}

	#[test]
	fn probe_sits_below_the_viewport_top() {
		let sections = layout();
		assert_eq!(active_section(&sections, 599.0), Some(Section::Home));
		assert_eq!(active_section(&sections, 600.0), Some(Section::About));
		assert_eq!(active_section(&sections, 3300.0), Some(Section::Contact));
	}

	#[test]
	fn nothing_active_past_the_last_section() {
		assert_eq!(active_section(&layout(), 4200.0), None);
		assert_eq!(active_section(&[], 0.0), None);
	}

	#[test]
	fn overlapping_sections_prefer_the_later_one() {
		let sections = [
			SectionBounds {
				section: Section::Skills,
				top: 0.0,
				height: 1000.0,
			},
			SectionBounds {
				section: Section::Projects,
				top: 200.0,
				height: 1000.0,
			},
		];
		assert_eq!(active_section(&sections, 0.0), Some(Section::Projects));
	}

	#[test]
	fn ids_and_labels_line_up() {
		for section in Section::ALL {
			assert_eq!(section.id(), section.label().to_lowercase());
		}
	}
}
