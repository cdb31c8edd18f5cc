//! Cupid Flight entry point
//!
//! Handles platform-specific initialization and hands control to the driver.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent};

    use cupid_flight::platform::web::WebDriver;
    use cupid_flight::{GameConfig, Session};

    /// Read tuning overrides from the canvas' `data-config` attribute
    fn load_config(canvas: &HtmlCanvasElement) -> GameConfig {
        let Some(json) = canvas.get_attribute("data-config") else {
            return GameConfig::default();
        };
        match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from data-config");
                config
            }
            Err(e) => {
                log::warn!("Ignoring invalid data-config ({}), using defaults", e);
                GameConfig::default()
            }
        }
    }

    /// Update score, countdown overlay and game-over panel
    fn update_hud(document: &Document, session: &Session) {
        if let Some(el) = document.get_element_by_id("score") {
            el.set_text_content(Some(&session.score().to_string()));
        }

        if let Some(el) = document.get_element_by_id("countdown") {
            let countdown = session.countdown();
            if countdown > 0 {
                el.set_text_content(Some(&countdown.to_string()));
                let _ = el.set_attribute("class", "");
            } else {
                let _ = el.set_attribute("class", "hidden");
            }
        }

        if let Some(el) = document.get_element_by_id("game-over") {
            if session.is_game_over() {
                let _ = el.set_attribute("class", "");
                if let Some(score_el) = document.get_element_by_id("final-score") {
                    score_el.set_text_content(Some(&session.score().to_string()));
                }
            } else {
                let _ = el.set_attribute("class", "hidden");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cupid Flight starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = load_config(&canvas);
        canvas.set_width(config.width as u32);
        canvas.set_height(config.height as u32);

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Game initialized with seed: {}", seed);

        let driver = WebDriver::attach(window.clone(), &canvas, Session::new(config, seed));
        {
            let document = document.clone();
            driver
                .borrow_mut()
                .set_listener(Box::new(move |session: &Session| update_hud(&document, session)));
        }

        setup_input_handlers(&canvas, driver.clone());
        setup_play_again(&document, driver.clone());
        setup_teardown(&window, driver.clone());

        let mut d = driver.borrow_mut();
        d.reset_game();
        d.notify();

        log::info!("Cupid Flight running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, driver: Rc<RefCell<WebDriver>>) {
        // Mouse click
        {
            let driver = driver.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                driver.borrow_mut().jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tap
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                driver.borrow_mut().jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_play_again(document: &Document, driver: Rc<RefCell<WebDriver>>) {
        if let Some(btn) = document.get_element_by_id("play-again") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut d = driver.borrow_mut();
                d.reset_game();
                d.notify();
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_teardown(window: &web_sys::Window, driver: Rc<RefCell<WebDriver>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            driver.borrow_mut().teardown();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cupid_flight::engine::{Driver, FrameOutcome, Session};
    use cupid_flight::platform::HeadlessHost;
    use cupid_flight::sim::should_jump;
    use cupid_flight::GameConfig;

    /// Upper bound on frames for one demo run (~5 minutes at 60 Hz)
    const MAX_DEMO_FRAMES: u32 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Cupid Flight (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use `trunk serve` for the web version");

    let config = std::env::args()
        .nth(1)
        .map(|json| {
            GameConfig::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid config argument ({}), using defaults", e);
                GameConfig::default()
            })
        })
        .unwrap_or_default();
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Demo seed: {}", seed);

    let mut driver = Driver::new(Session::new(config, seed), HeadlessHost::new());
    driver.reset_game();
    while driver.advance_second() {}

    let mut frames = 0;
    while frames < MAX_DEMO_FRAMES {
        let session = driver.session();
        if should_jump(session.state(), session.config()) {
            driver.jump();
        }
        match driver.advance_frame() {
            Some(FrameOutcome::Continue) => frames += 1,
            _ => break,
        }
    }
    driver.teardown();

    println!("Demo finished after {} frames, score {}", frames, driver.session().score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
