//! Page sections: hero, about, skills, projects, contact and footer.
//!
//! Pure markup over [`SiteContent`]; styling lives in `style.css`.

use leptos::prelude::*;

use super::nav::{Section, scroll_to};
use super::particle_field::ParticleBackground;
use super::typewriter::TypewriterText;
use crate::content::{Project, SiteContent, Skill, SocialLink};

#[component]
fn SectionTitle(#[prop(into)] title: String) -> impl IntoView {
	view! {
		<div class="section-title reveal">
			<h2>
				<span class="gradient-text">{title}</span>
			</h2>
			<div class="section-title-bar"></div>
		</div>
	}
}

#[component]
fn SocialLinks(links: Vec<SocialLink>, #[prop(into)] layout: String) -> impl IntoView {
	view! {
		<div class=layout>
			{links
				.into_iter()
				.map(|link| {
					view! {
						<a href=link.url target="_blank" rel="noopener" class="social-link">
							{link.label}
						</a>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Landing section: backdrop, greeting, rotating role line and calls to action.
#[component]
pub fn Hero(site: SiteContent) -> impl IntoView {
	let mut links = site.socials.clone();
	links.push(SocialLink {
		label: "Email".to_string(),
		url: site.mailto(),
		handle: None,
	});

	view! {
		<section id=Section::Home.id() class="section hero">
			<ParticleBackground particles=site.particles />
			<div class="hero-content">
				<h1>
					"Hi, I'm " <span class="gradient-text">{site.name}</span>
				</h1>
				<h2 class="hero-role">
					<TypewriterText words=site.roles />
				</h2>
				<p class="hero-tagline">{site.tagline}</p>
				<div class="hero-actions">
					<button class="button button-primary" on:click=move |_| scroll_to(Section::Projects)>
						"View Projects"
					</button>
					<button class="button button-outline" on:click=move |_| scroll_to(Section::Contact)>
						"Contact Me"
					</button>
				</div>
				<SocialLinks links=links layout="hero-socials" />
			</div>
		</section>
	}
}

#[component]
pub fn About(site: SiteContent) -> impl IntoView {
	view! {
		<section id=Section::About.id() class="section">
			<div class="container">
				<SectionTitle title="About Me" />
				<div class="about">
					<div class="about-portrait reveal">
						<div class="about-portrait-frame"></div>
						<img src=site.portrait alt=site.name />
					</div>
					<div class="about-text reveal">
						<h3>"Who am I?"</h3>
						{site.about.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
fn SkillCard(skill: Skill, index: usize) -> impl IntoView {
	let delay = format!("animation-delay: {}ms", index * 100);
	let badge_color = format!("color: {}", skill.color);
	let initial = skill.name.chars().next().unwrap_or('?').to_string();
	view! {
		<div class="card skill-card reveal" style=delay>
			<span class="skill-badge" style=badge_color>
				{initial}
			</span>
			<span class="skill-name">{skill.name}</span>
		</div>
	}
}

/// Grid of skill tiles.
#[component]
pub fn Skills(skills: Vec<Skill>) -> impl IntoView {
	view! {
		<section id=Section::Skills.id() class="section">
			<div class="container">
				<SectionTitle title="Skills" />
				<div class="skills-grid">
					{skills
						.into_iter()
						.enumerate()
						.map(|(index, skill)| view! { <SkillCard skill=skill index=index /> })
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
	let delay = format!("animation-delay: {}ms", index * 100);
	view! {
		<div class="card project-card reveal" style=delay>
			<div class="project-image">
				<img src=project.image alt=project.title.clone() />
				<div class="project-image-shade">
					<h3>{project.title}</h3>
				</div>
			</div>
			<div class="project-body">
				<p>{project.description}</p>
				<div class="project-stack">
					{project
						.stack
						.into_iter()
						.map(|tech| view! { <span class="tag">{tech}</span> })
						.collect_view()}
				</div>
			</div>
		</div>
	}
}

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
	view! {
		<section id=Section::Projects.id() class="section">
			<div class="container">
				<SectionTitle title="Projects" />
				<div class="projects-grid">
					{projects
						.into_iter()
						.enumerate()
						.map(|(index, project)| view! { <ProjectCard project=project index=index /> })
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

#[component]
fn FormField(
	#[prop(into)] id: String,
	#[prop(into)] label: String,
	#[prop(into)] kind: String,
	#[prop(into)] placeholder: String,
) -> impl IntoView {
	view! {
		<div class="form-field">
			<label for=id.clone()>{label}</label>
			<input type=kind id=id placeholder=placeholder />
		</div>
	}
}

/// Contact links and a message form. The form is markup only: its button
/// does not submit anywhere.
#[component]
pub fn Contact(site: SiteContent) -> impl IntoView {
	let mailto = site.mailto();
	let email = site.email.clone();

	view! {
		<section id=Section::Contact.id() class="section">
			<div class="container">
				<SectionTitle title="Contact Me" />
				<div class="contact">
					<div class="contact-info reveal">
						<h3>"Get in touch"</h3>
						<p>
							"Whether you have a project in mind or just want to say hello, I'd love to hear from you!"
						</p>
						<a href=mailto target="_blank" class="contact-link">
							<h4>"Email"</h4>
							<p>{email}</p>
						</a>
						{site
							.socials
							.into_iter()
							.map(|link| {
								let handle = link.handle.clone().unwrap_or_else(|| link.url.clone());
								view! {
									<a href=link.url target="_blank" class="contact-link">
										<h4>{link.label}</h4>
										<p>{handle}</p>
									</a>
								}
							})
							.collect_view()}
					</div>
					<div class="card contact-form reveal">
						<h3>"Send me a message"</h3>
						<form>
							<div class="form-row">
								<FormField id="name" label="Name" kind="text" placeholder="Your name" />
								<FormField id="email" label="Email" kind="email" placeholder="Your email" />
							</div>
							<FormField id="subject" label="Subject" kind="text" placeholder="Subject" />
							<div class="form-field">
								<label for="message">"Message"</label>
								<textarea id="message" rows="5" placeholder="Your message"></textarea>
							</div>
							<button type="button" class="button button-gradient">
								"Send Message"
							</button>
						</form>
					</div>
				</div>
			</div>
		</section>
	}
}

/// Copyright line and profile links.
#[component]
pub fn Footer(site: SiteContent) -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<footer class="site-footer">
			<p>{format!("© {} {}. All Rights Reserved.", year, site.name)}</p>
			<SocialLinks links=site.socials layout="footer-socials" />
		</footer>
	}
}
