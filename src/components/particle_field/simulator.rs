//! Lifecycle of the particle backdrop: mount, frame loop, resize and teardown.
//!
//! The simulator owns the field, the surface and the random source. The host
//! only ever sees callbacks holding a `Weak` back-reference, so once the
//! simulator is dropped a late frame or resize event is a no-op.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info};
use rand::Rng;
use rand::rngs::ThreadRng;
use web_sys::HtmlCanvasElement;

use super::canvas::CanvasSurface;
use super::host::{Host, Viewport, WindowHost};
use super::particles::{Particle, ParticleField};
use super::render::{Surface, draw_frame};
use super::theme::ParticleStyle;

/// The simulator as mounted in a browser page.
pub type CanvasSimulator = ParticleSimulator<CanvasSurface, WindowHost, ThreadRng>;

/// Everything a frame update touches.
struct Scene<S, R> {
	surface: S,
	field: ParticleField,
	style: ParticleStyle,
	rng: R,
	frames: u64,
}

impl<S: Surface, R: Rng> Scene<S, R> {
	fn fit(&mut self, viewport: Viewport) {
		self.surface.resize(viewport.width, viewport.height);
		self.field
			.reseed(&self.style, viewport.width, viewport.height, &mut self.rng);
	}

	fn draw(&mut self) {
		draw_frame(&mut self.field, &mut self.surface, &self.style);
		self.frames += 1;
	}
}

struct Shared<S, H, R> {
	host: H,
	scene: RefCell<Scene<S, R>>,
	running: Cell<bool>,
}

/// Ambient particle animation bound to one drawing surface.
///
/// Construction sizes the surface to the viewport and seeds the field.
/// [`start`](Self::start) begins the frame loop and resize handling;
/// [`stop`](Self::stop) (or dropping the simulator) releases both.
pub struct ParticleSimulator<S, H, R>
where
	S: Surface + 'static,
	H: Host + 'static,
	R: Rng + 'static,
{
	shared: Rc<Shared<S, H, R>>,
}

impl CanvasSimulator {
	/// Binds a simulator to `canvas` in the current window.
	///
	/// Returns `None` if there is no window or the canvas has no 2D context;
	/// callers treat that as "no backdrop".
	pub fn attach(canvas: HtmlCanvasElement, style: ParticleStyle) -> Option<Self> {
		let surface = CanvasSurface::new(canvas)?;
		let host = WindowHost::new()?;
		Some(Self::new(surface, host, style, rand::thread_rng()))
	}
}

impl<S, H, R> ParticleSimulator<S, H, R>
where
	S: Surface + 'static,
	H: Host + 'static,
	R: Rng + 'static,
{
	pub fn new(surface: S, host: H, style: ParticleStyle, rng: R) -> Self {
		let mut scene = Scene {
			surface,
			field: ParticleField::default(),
			style,
			rng,
			frames: 0,
		};
		scene.fit(host.viewport());

		Self {
			shared: Rc::new(Shared {
				host,
				scene: RefCell::new(scene),
				running: Cell::new(false),
			}),
		}
	}

	/// Draws the first frame immediately, then keeps redrawing on every
	/// display refresh until stopped. Calling `start` on a running simulator
	/// does nothing.
	pub fn start(&self) {
		if self.shared.running.replace(true) {
			return;
		}

		let weak = Rc::downgrade(&self.shared);
		self.shared.host.watch_resize(Rc::new(move || {
			if let Some(shared) = weak.upgrade() {
				reseed(&shared);
			}
		}));

		info!(
			"folio: particle backdrop started with {} particles",
			self.particle_count()
		);
		tick(&self.shared);
	}

	/// Stops the frame loop and the resize subscription together.
	pub fn stop(&self) {
		if !self.shared.running.replace(false) {
			return;
		}
		self.shared.host.cancel_frame();
		self.shared.host.unwatch_resize();
	}

	pub fn is_running(&self) -> bool {
		self.shared.running.get()
	}

	/// Frames drawn since construction.
	pub fn frames(&self) -> u64 {
		self.shared.scene.borrow().frames
	}

	pub fn particle_count(&self) -> usize {
		self.shared.scene.borrow().field.len()
	}

	/// Copy of the current particles, in field order.
	pub fn particles(&self) -> Vec<Particle> {
		self.shared.scene.borrow().field.particles().to_vec()
	}
}

impl<S, H, R> Drop for ParticleSimulator<S, H, R>
where
	S: Surface + 'static,
	H: Host + 'static,
	R: Rng + 'static,
{
	fn drop(&mut self) {
		self.stop();
	}
}

fn tick<S, H, R>(shared: &Rc<Shared<S, H, R>>)
where
	S: Surface + 'static,
	H: Host + 'static,
	R: Rng + 'static,
{
	if !shared.running.get() {
		return;
	}
	shared.scene.borrow_mut().draw();

	let weak: Weak<Shared<S, H, R>> = Rc::downgrade(shared);
	shared.host.request_frame(Rc::new(move || {
		if let Some(shared) = weak.upgrade() {
			tick(&shared);
		}
	}));
}

fn reseed<S, H, R>(shared: &Shared<S, H, R>)
where
	S: Surface,
	H: Host,
	R: Rng,
{
	if !shared.running.get() {
		return;
	}
	let viewport = shared.host.viewport();
	let mut scene = shared.scene.borrow_mut();
	scene.fit(viewport);
	debug!(
		"folio: reseeded {} particles for {}x{}",
		scene.field.len(),
		viewport.width,
		viewport.height
	);
}
