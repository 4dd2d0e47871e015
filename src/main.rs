//! Road Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use road_rush::renderer::CanvasSurface;
    use road_rush::{FrameControl, Game, InputEvent, InputMode, Viewport};

    /// Browser-side state shared by every callback
    struct App {
        game: Game,
        canvas: HtmlCanvasElement,
        surface: CanvasSurface,
    }

    impl App {
        fn apply_viewport(&self, viewport: Viewport) {
            self.canvas.set_width(viewport.width);
            self.canvas.set_height(viewport.height);
        }
    }

    fn window_size(window: &web_sys::Window) -> (f64, f64) {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (w, h)
    }

    fn has_touch(window: &web_sys::Window) -> bool {
        let ontouchstart = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        ontouchstart || window.navigator().max_touch_points() > 0
    }

    fn first_touch(event: &TouchEvent) -> Option<Vec2> {
        event
            .touches()
            .get(0)
            .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Road Rush starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #gameCanvas element");
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let (w, h) = window_size(&window);
        let viewport = Viewport::from_window(w, h);
        let mode = InputMode::detect(has_touch(&window));
        let seed = js_sys::Date::now() as u64;

        let app = App {
            game: Game::new(viewport, mode, seed),
            canvas: canvas.clone(),
            surface: CanvasSurface::new(ctx),
        };
        app.apply_viewport(viewport);
        let app = Rc::new(RefCell::new(app));

        log::info!(
            "Game initialized with seed {} ({:?} input, {}x{})",
            seed,
            mode,
            viewport.width,
            viewport.height
        );

        setup_resize_handler(&window, app.clone());
        match mode {
            InputMode::Keyboard => setup_keyboard_handlers(&window, app.clone()),
            InputMode::Touch => setup_touch_handlers(&canvas, app.clone()),
        }

        game_loop(app);
    }

    fn setup_resize_handler(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (w, h) = window_size(&window);
            let mut a = app.borrow_mut();
            let viewport = a.game.resize(w, h);
            a.apply_viewport(viewport);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.push_input(InputEvent::KeyDown(event.key()));
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.push_input(InputEvent::KeyUp(event.key()));
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_touch_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Touch start
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let point = first_touch(&event);
                app.borrow_mut().game.push_input(InputEvent::TouchStart(point));
            });
            let _ = canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let point = first_touch(&event);
                app.borrow_mut().game.push_input(InputEvent::TouchMove(point));
            });
            let _ = canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().game.push_input(InputEvent::TouchEnd);
            });
            let _ = canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let control = {
            let mut a = app.borrow_mut();
            let App { game, surface, .. } = &mut *a;
            game.frame(surface)
        };

        match control {
            FrameControl::Continue => request_animation_frame(app),
            FrameControl::Halt => log::info!("Game loop stopped"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Frame cap for headless runs
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_FRAMES: u64 = 100_000;

/// Headless run: `road-rush [seed] [tuning.json]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use road_rush::renderer::NullSurface;
    use road_rush::{Game, InputMode, Tuning, Viewport};

    env_logger::init();
    log::info!("Road Rush (native) starting...");
    log::info!("Native mode runs the simulation headless - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);

    let seed = match args.next() {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                log::error!("Invalid seed {:?}: {}", arg, e);
                std::process::exit(2);
            }
        },
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    };

    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let viewport = Viewport::from_window(1280.0, 720.0);
    let mut game = Game::with_tuning(viewport, InputMode::Keyboard, seed, tuning);
    log::info!("Seed {} on a {}x{} viewport", seed, viewport.width, viewport.height);

    let frames = game.run_headless(&mut NullSurface, MAX_HEADLESS_FRAMES);

    let state = game.state();
    println!(
        "seed={} frames={} score={} speed={:.1} over={}",
        game.seed(),
        frames,
        state.score,
        state.game_speed,
        state.is_over()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
