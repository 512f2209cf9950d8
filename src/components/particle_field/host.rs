//! The environment the backdrop runs in: viewport size, frame scheduling and
//! resize notification.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Callback handed to a [`Host`]. Hosts may hold it across frames.
pub type Callback = Rc<dyn Fn()>;

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// Services the particle simulator consumes from its environment.
///
/// At most one frame request and one resize callback are outstanding per host;
/// a new request replaces the previous one.
pub trait Host {
	fn viewport(&self) -> Viewport;
	/// Runs `callback` once, on the next display refresh.
	fn request_frame(&self, callback: Callback);
	/// Drops the pending frame request, if any.
	fn cancel_frame(&self);
	fn watch_resize(&self, callback: Callback);
	fn unwatch_resize(&self);
}

impl<H: Host + ?Sized> Host for Rc<H> {
	fn viewport(&self) -> Viewport {
		(**self).viewport()
	}

	fn request_frame(&self, callback: Callback) {
		(**self).request_frame(callback)
	}

	fn cancel_frame(&self) {
		(**self).cancel_frame()
	}

	fn watch_resize(&self, callback: Callback) {
		(**self).watch_resize(callback)
	}

	fn unwatch_resize(&self) {
		(**self).unwatch_resize()
	}
}

/// Browser host backed by `requestAnimationFrame` and the window `resize` event.
pub struct WindowHost {
	window: Window,
	/// Callback for the next animation frame.
	pending: Rc<RefCell<Option<Callback>>>,
	/// One long-lived JS closure that drains `pending`. It is reused for every
	/// frame so it is never dropped while running.
	trampoline: RefCell<Option<Closure<dyn FnMut()>>>,
	frame_id: Cell<Option<i32>>,
	resize: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl WindowHost {
	/// Returns `None` outside a browser window.
	pub fn new() -> Option<Self> {
		Some(Self {
			window: web_sys::window()?,
			pending: Rc::new(RefCell::new(None)),
			trampoline: RefCell::new(None),
			frame_id: Cell::new(None),
			resize: RefCell::new(None),
		})
	}
}

impl Host for WindowHost {
	fn viewport(&self) -> Viewport {
		let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		Viewport {
			width: px(self.window.inner_width()),
			height: px(self.window.inner_height()),
		}
	}

	fn request_frame(&self, callback: Callback) {
		*self.pending.borrow_mut() = Some(callback);

		let mut trampoline = self.trampoline.borrow_mut();
		let closure = trampoline.get_or_insert_with(|| {
			let pending = self.pending.clone();
			Closure::new(move || {
				let next = pending.borrow_mut().take();
				if let Some(cb) = next {
					cb();
				}
			})
		});

		match self
			.window
			.request_animation_frame(closure.as_ref().unchecked_ref())
		{
			Ok(id) => self.frame_id.set(Some(id)),
			Err(e) => warn!("folio: requestAnimationFrame failed: {:?}", e),
		}
	}

	fn cancel_frame(&self) {
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		self.pending.borrow_mut().take();
	}

	fn watch_resize(&self, callback: Callback) {
		self.unwatch_resize();

		let closure = Closure::<dyn FnMut()>::new(move || callback());
		let _ = self
			.window
			.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
		*self.resize.borrow_mut() = Some(closure);
	}

	fn unwatch_resize(&self) {
		if let Some(closure) = self.resize.borrow_mut().take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
		}
	}
}

impl Drop for WindowHost {
	fn drop(&mut self) {
		self.cancel_frame();
		self.unwatch_resize();
	}
}
