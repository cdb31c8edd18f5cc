//! Browser host
//!
//! Frames come from `requestAnimationFrame`, the countdown from
//! `setInterval`, and drawing goes to a 2D canvas context.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::Host;
use crate::consts::COUNTDOWN_INTERVAL_MS;
use crate::engine::{Driver, Session};
use crate::renderer::{Color, PathCmd, Surface};
use crate::sim::Rect;

/// Driver bound to the browser
pub type WebDriver = Driver<BrowserHost>;

/// Called after every frame and countdown step so the shell can refresh its HUD
pub type SessionListener = Box<dyn Fn(&Session)>;

/// Canvas 2D drawing surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Acquire the canvas' 2D context; `None` if the browser refuses
    pub fn acquire(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

fn css_color(color: Color) -> String {
    let [r, g, b, a] = color;
    format!(
        "rgba({}, {}, {}, {})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        a
    )
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_path(&mut self, path: &[PathCmd], color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        for cmd in path {
            match *cmd {
                PathCmd::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathCmd::CubicTo { c1, c2, to } => self.ctx.bezier_curve_to(
                    c1.x as f64,
                    c1.y as f64,
                    c2.x as f64,
                    c2.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
            }
        }
        self.ctx.fill();
    }
}

pub struct BrowserHost {
    window: Window,
    surface: Option<CanvasSurface>,
    frame_cb: Closure<dyn FnMut(f64)>,
    countdown_cb: Closure<dyn FnMut()>,
    listener: Option<SessionListener>,
}

impl BrowserHost {
    fn new(window: Window, canvas: &HtmlCanvasElement, driver: Weak<RefCell<WebDriver>>) -> Self {
        let surface = CanvasSurface::acquire(canvas);
        if surface.is_none() {
            log::warn!("Canvas 2D context unavailable");
        }

        let frame_driver = driver.clone();
        let frame_cb = Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            if let Some(driver) = frame_driver.upgrade() {
                let mut d = driver.borrow_mut();
                d.on_frame();
                d.notify();
            }
        });

        let countdown_cb = Closure::<dyn FnMut()>::new(move || {
            if let Some(driver) = driver.upgrade() {
                let mut d = driver.borrow_mut();
                d.on_countdown();
                d.notify();
            }
        });

        Self {
            window,
            surface,
            frame_cb,
            countdown_cb,
            listener: None,
        }
    }
}

impl Host for BrowserHost {
    type Surface = CanvasSurface;
    type FrameHandle = i32;
    type TimerHandle = i32;

    fn surface(&mut self) -> Option<&mut CanvasSurface> {
        self.surface.as_mut()
    }

    fn request_frame(&mut self) -> Option<i32> {
        self.window
            .request_animation_frame(self.frame_cb.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }

    fn start_countdown(&mut self) -> Option<i32> {
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.countdown_cb.as_ref().unchecked_ref(),
                COUNTDOWN_INTERVAL_MS,
            )
            .map_err(|e| log::warn!("setInterval failed: {:?}", e))
            .ok()
    }

    fn cancel_countdown(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}

impl WebDriver {
    /// Build a driver whose callbacks hold only weak references back to it
    pub fn attach(window: Window, canvas: &HtmlCanvasElement, session: Session) -> Rc<RefCell<Self>> {
        Rc::new_cyclic(|weak| {
            RefCell::new(Driver::new(
                session,
                BrowserHost::new(window, canvas, weak.clone()),
            ))
        })
    }

    pub fn set_listener(&mut self, listener: SessionListener) {
        self.host_mut().listener = Some(listener);
    }

    /// Push the current session to the listener
    pub fn notify(&self) {
        if let Some(listener) = &self.host().listener {
            listener(self.session());
        }
    }
}
