//! Looping typewriter text for the hero role line.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::warn;

/// Interval at which the component advances the typewriter.
const TICK: Duration = Duration::from_millis(50);

/// Per-step timings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
	/// Delay before each typed character.
	pub type_step: Duration,
	/// Delay before each deleted character.
	pub delete_step: Duration,
	/// Pause with the whole word shown.
	pub hold: Duration,
}

impl Default for Timing {
	fn default() -> Self {
		Self {
			type_step: Duration::from_millis(80),
			delete_step: Duration::from_millis(50),
			hold: Duration::from_millis(2000),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Typing,
	Holding,
	Deleting,
}

/// Types each word, holds it, deletes it and moves on, forever.
#[derive(Clone, Debug)]
pub struct Typewriter {
	words: Vec<String>,
	timing: Timing,
	word: usize,
	/// Characters of the current word on screen.
	shown: usize,
	phase: Phase,
	/// Time accumulated towards the next step.
	pending: Duration,
}

impl Typewriter {
	pub fn new(words: Vec<String>, timing: Timing) -> Self {
		Self {
			words,
			timing,
			word: 0,
			shown: 0,
			phase: Phase::Typing,
			pending: Duration::ZERO,
		}
	}

	/// Visible text.
	pub fn text(&self) -> &str {
		let Some(word) = self.words.get(self.word) else {
			return "";
		};
		let end = word
			.char_indices()
			.nth(self.shown)
			.map_or(word.len(), |(i, _)| i);
		&word[..end]
	}

	/// Moves the animation forward by `elapsed`, taking as many steps as fit.
	pub fn advance(&mut self, elapsed: Duration) {
		if self.words.is_empty() {
			return;
		}
		self.pending += elapsed;
		loop {
			let step = self.step_duration();
			if self.pending < step {
				break;
			}
			self.pending -= step;
			self.step();
		}
	}

	fn step_duration(&self) -> Duration {
		match self.phase {
			Phase::Typing => self.timing.type_step,
			Phase::Holding => self.timing.hold,
			Phase::Deleting => self.timing.delete_step,
		}
		.max(Duration::from_millis(1))
	}

	fn step(&mut self) {
		let len = self.words[self.word].chars().count();
		match self.phase {
			Phase::Typing => {
				self.shown = (self.shown + 1).min(len);
				if self.shown == len {
					self.phase = Phase::Holding;
				}
			}
			Phase::Holding => self.phase = Phase::Deleting,
			Phase::Deleting => {
				self.shown = self.shown.saturating_sub(1);
				if self.shown == 0 {
					self.word = (self.word + 1) % self.words.len();
					self.phase = Phase::Typing;
				}
			}
		}
	}
}

/// Renders `words` through a [`Typewriter`] with a blinking cursor.
#[component]
pub fn TypewriterText(words: Vec<String>) -> impl IntoView {
	let (text, set_text) = signal(String::new());
	let typewriter = Rc::new(RefCell::new(Typewriter::new(words, Timing::default())));

	let tick = move || {
		let mut typewriter = typewriter.borrow_mut();
		typewriter.advance(TICK);
		if text.with_untracked(|t| t != typewriter.text()) {
			set_text.set(typewriter.text().to_string());
		}
	};
	match set_interval_with_handle(tick, TICK) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("folio: typewriter interval not started: {:?}", e),
	}

	view! {
		<span class="typewriter">{text}</span>
		<span class="typewriter-cursor">"|"</span>
	}
}
