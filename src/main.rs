//! Chase Arcade entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use chase_arcade::audio::AudioManager;
    use chase_arcade::consts::*;
    use chase_arcade::renderer::CanvasSurface;
    use chase_arcade::sim::{self, Direction, GameEvent, GameSession, InputLatch};
    use chase_arcade::{Settings, run_frame};

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        input: InputLatch,
        surface: CanvasSurface,
        audio: Option<AudioManager>,
        settings: Settings,
        /// Game over banner while it is on screen
        banner: Option<Element>,
    }

    impl Game {
        /// Run one frame and route the resulting events
        fn frame(&mut self, time: f64) {
            run_frame(&mut self.session, &self.input, time, &mut self.surface);
            for event in self.session.drain_events() {
                if let Some(audio) = &self.audio {
                    audio.handle(&event);
                }
                self.update_hud(&event);
            }
        }

        /// Update DOM elements for an event
        fn update_hud(&mut self, event: &GameEvent) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            match event {
                GameEvent::ScoreChanged(score) => {
                    if let Some(el) = document.get_element_by_id("score") {
                        el.set_text_content(Some(&score.to_string()));
                    }
                }
                GameEvent::GameOverShown { .. } => {
                    match show_banner(&document, &self.session.game_over_message()) {
                        Ok(banner) => self.banner = Some(banner),
                        Err(e) => log::warn!("Failed to show game over banner: {:?}", e),
                    }
                }
                GameEvent::GameOverDismissed => {
                    if let Some(banner) = self.banner.take() {
                        banner.remove();
                    }
                }
                _ => {}
            }
        }

        /// Flip mute, apply it to the audio elements and persist it
        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            if let Some(audio) = &mut self.audio {
                audio.apply_settings(&self.settings);
            }
            self.settings.save();
            log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
        }

        /// Drop the run (page hidden)
        fn abort(&mut self) {
            sim::abort_run(&mut self.session);
            self.input.clear();
            if let Some(audio) = &self.audio {
                audio.stop_all();
            }
            for event in self.session.drain_events() {
                self.update_hud(&event);
            }
        }
    }

    /// Centered transient box with the final score
    fn show_banner(document: &web_sys::Document, message: &str) -> Result<Element, JsValue> {
        let banner: web_sys::HtmlElement = document.create_element("div")?.dyn_into()?;
        banner.set_inner_text(message);
        let style = banner.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", "50%")?;
        style.set_property("left", "50%")?;
        style.set_property("transform", "translate(-50%, -50%)")?;
        style.set_property("background-color", "rgba(255, 255, 255, 0.9)")?;
        style.set_property("padding", "20px")?;
        style.set_property("border", "2px solid #333")?;
        style.set_property("z-index", "10")?;

        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
        body.append_child(&banner)?;
        Ok(banner.into())
    }

    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Chase Arcade starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let surface = CanvasSurface::new(&canvas, PLAYFIELD_WIDTH as u32, PLAYFIELD_HEIGHT as u32)?;

        let settings = Settings::load();
        let audio = match AudioManager::new(&settings) {
            Ok(audio) => Some(audio),
            Err(e) => {
                log::warn!("Audio disabled: {:?}", e);
                None
            }
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: GameSession::new(seed),
            input: InputLatch::new(),
            surface,
            audio,
            settings,
            banner: None,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_start_button(&document, game.clone());
        setup_dpad(&document, game.clone());
        setup_keyboard(game.clone())?;
        setup_focus_handlers(game.clone())?;

        request_animation_frame(game);

        log::info!("Chase Arcade running!");
        Ok(())
    }

    fn setup_start_button(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id("startButton") else {
            log::warn!("No start button found");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut g = game.borrow_mut();
            sim::start(&mut g.session, now());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Touch buttons: touchstart presses, touchend releases
    fn setup_dpad(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        for dir in Direction::ALL {
            let Some(btn) = document.get_element_by_id(dir.button_id()) else {
                log::warn!("No {} found", dir.button_id());
                continue;
            };

            for (event_name, held) in [("touchstart", true), ("touchend", false)] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                    game.borrow_mut().input.set(dir, held);
                });
                let _ = btn.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        for (event_name, held) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if held && (event.key() == "m" || event.key() == "M") {
                    g.toggle_mute();
                    return;
                }
                if !g.settings.keyboard_controls {
                    return;
                }
                if held && (event.key() == " " || event.key() == "Enter") {
                    sim::start(&mut g.session, now());
                    return;
                }
                if let Some(dir) = Direction::from_key(&event.key()) {
                    event.prevent_default();
                    g.input.set(dir, held);
                }
            });
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_focus_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

        // Window blur (click outside) releases held directions
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.clear();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Hidden page
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let hidden = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|d| d.visibility_state() == web_sys::VisibilityState::Hidden)
                    .unwrap_or(false);
                let mut g = game.borrow_mut();
                if hidden && g.settings.abort_on_hide && g.session.phase != sim::GamePhase::Idle {
                    log::info!("Page hidden, aborting run");
                    g.abort();
                }
            });
            document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("Chase Arcade (native) starting with seed {}...", seed);
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let summary = headless::autopilot_run(seed);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use chase_arcade::renderer::DrawRecorder;
    use chase_arcade::run_frame;
    use chase_arcade::sim::{self, GameEvent, GamePhase, GameSession, InputLatch};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after ten simulated minutes
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub score: u32,
        /// Every frame driven, including the death and game over phases
        pub frames: u64,
        /// Frames spent in `Running` before the catch
        pub gameplay_frames: u64,
        pub seconds: f64,
        pub draw_calls: u64,
    }

    /// Steer toward the first collectible
    fn steer(session: &GameSession) -> InputLatch {
        let mut input = InputLatch::default();
        let Some(target) = session.collectibles.first() else {
            return input;
        };
        let player = session.player.rect();
        let here = player.min + player.size * 0.5;
        let there = target.rect().min + target.rect().size * 0.5;
        let dead_zone = session.player.speed;

        input.right = there.x > here.x + dead_zone;
        input.left = there.x < here.x - dead_zone;
        input.down = there.y > here.y + dead_zone;
        input.up = there.y < here.y - dead_zone;
        input
    }

    /// Play one full run with the autopilot until the game returns to idle
    pub fn autopilot_run(seed: u64) -> RunSummary {
        let mut session = GameSession::new(seed);
        let mut surface = DrawRecorder::new();
        let mut now = 0.0;
        let mut frames = 0;
        let mut final_score = 0;

        sim::start(&mut session, now);
        while frames < MAX_FRAMES {
            let input = steer(&session);
            run_frame(&mut session, &input, now, &mut surface);
            for event in session.drain_events() {
                match event {
                    GameEvent::ScoreChanged(score) => log::debug!("Score: {}", score),
                    GameEvent::GameOverShown { score } => final_score = score,
                    other => log::info!("{:?}", other),
                }
            }
            frames += 1;
            now += FRAME_MS;
            if session.phase == GamePhase::Idle {
                break;
            }
        }

        RunSummary {
            seed: session.seed,
            score: final_score.max(session.score),
            frames,
            gameplay_frames: session.frame_count,
            seconds: now / 1000.0,
            draw_calls: surface.total,
        }
    }
}
