//! folio: single-page portfolio site.
//!
//! This crate provides a WASM client-rendered page with a hero section over an
//! animated particle backdrop, followed by about, skills, projects and contact
//! sections under a scroll-aware navigation bar.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;
pub mod content;

pub use components::particle_field::{ParticleBackground, ParticleSimulator, ParticleStyle};
pub use content::SiteContent;

use components::nav::NavBar;
use components::reveal::use_reveal_on_scroll;
use components::sections::{About, Contact, Footer, Hero, Projects, Skills};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio: logging initialized");
}

/// Load site content from a script element with id="site-data".
/// Falls back to the built-in content when the element is missing or invalid.
fn load_site_content() -> Option<SiteContent> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SiteContent::from_json(&json_text) {
		Ok(site) => {
			info!(
				"folio: loaded content for {} ({} projects, {} skills)",
				site.name,
				site.projects.len(),
				site.skills.len()
			);
			Some(site)
		}
		Err(e) => {
			warn!("folio: failed to parse site data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads site content from the DOM and renders the whole page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let site = load_site_content().unwrap_or_default();
	let title = format!("{} | Portfolio", site.name);
	use_reveal_on_scroll();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<NavBar initials=site.initials.clone() />
			<Hero site=site.clone() />
			<About site=site.clone() />
			<Skills skills=site.skills.clone() />
			<Projects projects=site.projects.clone() />
			<Contact site=site.clone() />
			<Footer site=site />
		</div>
	}
}
