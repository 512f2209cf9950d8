//! Site content rendered by the page.
//!
//! Every field has a built-in default, so an embedded JSON document only needs
//! to carry what it overrides.

use serde::Deserialize;

use crate::components::particle_field::ParticleStyle;

/// A skill tile in the skills grid.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
	pub name: String,
	/// CSS color for the skill's badge.
	pub color: String,
}

/// A project card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
	pub title: String,
	pub description: String,
	#[serde(default)]
	pub stack: Vec<String>,
	/// Image URL shown at the top of the card.
	#[serde(default = "default_project_image")]
	pub image: String,
}

/// An outbound profile link.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
	/// Visible name of the network, e.g. "GitHub".
	pub label: String,
	pub url: String,
	/// Short handle shown under the label in the contact section.
	#[serde(default)]
	pub handle: Option<String>,
}

/// Everything the page shows, plus the backdrop tuning.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
	pub name: String,
	/// Brand mark in the navigation bar.
	pub initials: String,
	/// Role titles cycled by the hero typewriter.
	pub roles: Vec<String>,
	pub tagline: String,
	pub portrait: String,
	pub about: Vec<String>,
	pub skills: Vec<Skill>,
	pub projects: Vec<Project>,
	pub socials: Vec<SocialLink>,
	pub email: String,
	#[serde(deserialize_with = "ParticleStyle::deserialize_checked")]
	pub particles: ParticleStyle,
}

fn default_project_image() -> String {
	"/placeholder.svg".to_string()
}

fn skill(name: &str, color: &str) -> Skill {
	Skill {
		name: name.to_string(),
		color: color.to_string(),
	}
}

fn project(title: &str, description: &str, stack: &[&str]) -> Project {
	Project {
		title: title.to_string(),
		description: description.to_string(),
		stack: stack.iter().map(|s| s.to_string()).collect(),
		image: default_project_image(),
	}
}

impl Default for SiteContent {
	fn default() -> Self {
		Self {
			name: "Arish Khan".to_string(),
			initials: "AK".to_string(),
			roles: ["Full Stack Developer", "Student", "Problem Solver", "UI Enthusiast"]
				.into_iter()
				.map(String::from)
				.collect(),
			tagline: "I create responsive web applications with focus on both performance and design"
				.to_string(),
			portrait: "/placeholder.svg".to_string(),
			about: vec![
				"I'm a passionate full stack developer currently pursuing my degree in Computer \
				 Science. With a strong foundation in both frontend and backend technologies, I \
				 enjoy building web applications that are not only functional but also provide \
				 exceptional user experiences."
					.to_string(),
				"My journey in tech started when I built my first HTML website in school. Since \
				 then, I've expanded my skills to include modern frameworks and technologies. I'm \
				 particularly interested in creating seamless, responsive interfaces and \
				 optimizing backend performance."
					.to_string(),
				"Currently, I'm focused on deepening my knowledge in distributed systems and cloud \
				 architecture while working on side projects that challenge my abilities and help \
				 me grow as a developer."
					.to_string(),
			],
			skills: vec![
				skill("HTML", "#E34F26"),
				skill("CSS", "#1572B6"),
				skill("JavaScript", "#F7DF1E"),
				skill("TypeScript", "#3178C6"),
				skill("React", "#61DAFB"),
				skill("Next.js", "#ffffff"),
				skill("Node.js", "#339933"),
				skill("Express", "#ffffff"),
				skill("MongoDB", "#47A248"),
				skill("Tailwind", "#06B6D4"),
			],
			projects: vec![
				project(
					"E-commerce Platform",
					"A full stack e-commerce solution with payment integration and user authentication",
					&["React", "Node.js", "MongoDB", "Express"],
				),
				project(
					"Social Media Dashboard",
					"Analytics dashboard for social media metrics with interactive charts",
					&["Next.js", "TypeScript", "Tailwind CSS", "REST API"],
				),
				project(
					"Task Management App",
					"Collaborative task management application with real-time updates",
					&["React", "Firebase", "Material UI", "Redux"],
				),
			],
			socials: vec![
				SocialLink {
					label: "GitHub".to_string(),
					url: "https://github.com/arishkhann".to_string(),
					handle: Some("github.com/arishkhann".to_string()),
				},
				SocialLink {
					label: "Twitter".to_string(),
					url: "https://x.com/arish_khann".to_string(),
					handle: Some("twitter.com/arish_khann".to_string()),
				},
			],
			email: "mohdarish9448@gmail.com".to_string(),
			particles: ParticleStyle::default(),
		}
	}
}

impl SiteContent {
	/// Parses content JSON, keeping defaults for any field it leaves out.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	pub fn mailto(&self) -> String {
		format!("mailto:{}", self.email)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_document_is_the_default_site() {
		assert_eq!(SiteContent::from_json("{}").unwrap(), SiteContent::default());
	}

	#[test]
	fn defaults_match_the_published_site() {
		let site = SiteContent::default();
		assert_eq!(site.initials, "AK");
		assert_eq!(site.roles.len(), 4);
		assert_eq!(site.skills.len(), 10);
		assert_eq!(site.projects.len(), 3);
		assert_eq!(site.about.len(), 3);
		assert_eq!(site.mailto(), "mailto:mohdarish9448@gmail.com");
		assert_eq!(site.particles, ParticleStyle::default());
	}

	#[test]
	fn partial_override_keeps_other_defaults() {
		let site = SiteContent::from_json(
			r#"{
				"name": "Jo Doe",
				"roles": ["Engineer"],
				"projects": [{ "title": "Lamp", "description": "A lamp" }],
				"particles": { "spacing": 25.0 }
			}"#,
		)
		.unwrap();

		assert_eq!(site.name, "Jo Doe");
		assert_eq!(site.roles, vec!["Engineer".to_string()]);
		assert_eq!(site.projects.len(), 1);
		assert_eq!(site.projects[0].image, "/placeholder.svg");
		assert!(site.projects[0].stack.is_empty());
		assert_eq!(site.particles.spacing, 25.0);
		assert_eq!(site.particles.link_distance, 100.0);
		assert_eq!(site.initials, "AK");
		assert_eq!(site.skills.len(), 10);
	}

	#[test]
	fn malformed_document_is_rejected() {
		assert!(SiteContent::from_json("{ \"name\": 3 }").is_err());
		assert!(SiteContent::from_json("not json").is_err());
		assert!(SiteContent::from_json(r#"{ "skills": [{ "name": "Rust" }] }"#).is_err());
	}

	#[test]
	fn unusable_particle_settings_are_rejected() {
		assert!(SiteContent::from_json(r#"{ "particles": { "spacing": 1e-300 } }"#).is_err());
		assert!(SiteContent::from_json(r#"{ "particles": { "max_speed": -0.1 } }"#).is_err());
		assert!(
			SiteContent::from_json(r#"{ "particles": { "size_min": 3.0, "size_max": 0.5 } }"#)
				.is_err()
		);
	}

	#[test]
	fn default_portrait_is_a_shipped_asset() {
		let site = SiteContent::default();
		let path = format!("{}/public{}", env!("CARGO_MANIFEST_DIR"), site.portrait);
		assert!(std::path::Path::new(&path).is_file(), "missing {path}");
	}
}
