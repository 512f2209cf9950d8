//! Test doubles: a hand-stepped host and a surface that records draw calls.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::host::{Callback, Host, Viewport};
use super::render::Surface;
use super::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	Clear,
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		width: f64,
		color: Color,
	},
}

#[derive(Default)]
struct Log {
	calls: Vec<DrawCall>,
	size: Option<(f64, f64)>,
}

/// Records draw calls. Clones share one log, so a test can keep a handle
/// after moving the surface into a simulator.
#[derive(Clone, Default)]
pub struct RecordingSurface {
	log: Rc<RefCell<Log>>,
}

impl RecordingSurface {
	pub fn calls(&self) -> Vec<DrawCall> {
		self.log.borrow().calls.clone()
	}

	pub fn clears(&self) -> usize {
		self.log
			.borrow()
			.calls
			.iter()
			.filter(|c| **c == DrawCall::Clear)
			.count()
	}

	pub fn size(&self) -> Option<(f64, f64)> {
		self.log.borrow().size
	}

	/// Forgets recorded calls; the size is kept.
	pub fn reset(&self) {
		self.log.borrow_mut().calls.clear();
	}
}

impl Surface for RecordingSurface {
	fn resize(&mut self, width: f64, height: f64) {
		self.log.borrow_mut().size = Some((width, height));
	}

	fn clear(&mut self) {
		self.log.borrow_mut().calls.push(DrawCall::Clear);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.log.borrow_mut().calls.push(DrawCall::Circle {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.log.borrow_mut().calls.push(DrawCall::Line {
			from,
			to,
			width,
			color,
		});
	}
}

/// Host whose display refreshes and resizes happen only when a test says so.
pub struct ManualHost {
	viewport: Cell<Viewport>,
	frame: RefCell<Option<Callback>>,
	resize: RefCell<Option<Callback>>,
}

impl ManualHost {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			viewport: Cell::new(Viewport { width, height }),
			frame: RefCell::new(None),
			resize: RefCell::new(None),
		}
	}

	/// Fires the pending frame callback. Returns `false` if none was pending.
	pub fn step(&self) -> bool {
		let frame = self.frame.borrow_mut().take();
		match frame {
			Some(callback) => {
				callback();
				true
			}
			None => false,
		}
	}

	pub fn take_pending_frame(&self) -> Option<Callback> {
		self.frame.borrow_mut().take()
	}

	pub fn has_pending_frame(&self) -> bool {
		self.frame.borrow().is_some()
	}

	pub fn is_watching_resize(&self) -> bool {
		self.resize.borrow().is_some()
	}

	/// Changes the viewport and notifies the resize subscriber, if any.
	pub fn resize_to(&self, width: f64, height: f64) {
		self.viewport.set(Viewport { width, height });
		let callback = self.resize.borrow().clone();
		if let Some(callback) = callback {
			callback();
		}
	}
}

impl Host for ManualHost {
	fn viewport(&self) -> Viewport {
		self.viewport.get()
	}

	fn request_frame(&self, callback: Callback) {
		*self.frame.borrow_mut() = Some(callback);
	}

	fn cancel_frame(&self) {
		self.frame.borrow_mut().take();
	}

	fn watch_resize(&self, callback: Callback) {
		*self.resize.borrow_mut() = Some(callback);
	}

	fn unwatch_resize(&self) {
		self.resize.borrow_mut().take();
	}
}
