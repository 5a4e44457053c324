//! Endzone Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use endzone_dash::audio::{AudioManager, cues_for};
    use endzone_dash::consts::*;
    use endzone_dash::platform::Key;
    use endzone_dash::renderer::CanvasRenderer;
    use endzone_dash::ui::HudView;
    use endzone_dash::{Frame, Session, Tuning};

    /// Game instance holding the session and its browser collaborators
    struct Game {
        session: Session,
        renderer: CanvasRenderer,
        audio: AudioManager,
        last_time: f64,
    }

    impl Game {
        /// Advance, draw, sound and mirror the HUD for one animation frame
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            self.last_time = time;

            let frame = self.session.step(dt);
            self.present(&frame);
        }

        fn present(&self, frame: &Frame) {
            self.renderer.draw(&frame.commands);
            for cue in cues_for(&frame.events) {
                self.audio.play(cue);
            }
            update_hud(&frame.hud);
        }
    }

    /// Mirror HUD values into the status elements
    fn update_hud(hud: &HudView) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(fill) = document
            .get_element_by_id("sprintFill")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = fill
                .style()
                .set_property("width", &format!("{}%", hud.sprint_percent));
        }
        if let Some(label) = &hud.power_label {
            set_text(&document, "powerLabel", label);
        }
        set_text(&document, "statusLabel", &hud.status);
        set_text(&document, "levelLabel", &hud.level_label);
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    /// Tuning overrides from `<script id="tuning" type="application/json">`
    fn load_tuning(document: &Document) -> Tuning {
        match document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        {
            Some(json) if !json.trim().is_empty() => Tuning::from_json_or_default(&json),
            _ => Tuning::default(),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Endzone Dash starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no #gameCanvas")?
            .dyn_into()?;
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let seed = js_sys::Date::now() as u64;
        let tuning = load_tuning(&document);
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed, tuning),
            renderer: CanvasRenderer::new(&canvas)?,
            audio: AudioManager::new(),
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone())?;
        setup_restart_button(&document, game.clone())?;
        setup_fullscreen_button(&document)?;
        setup_blur(game.clone())?;

        request_animation_frame(game);

        log::info!("Endzone Dash running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_browser(&event.key(), &event.code()) else {
                    return;
                };
                if key == Key::Restart {
                    event.prevent_default();
                }
                game.borrow_mut().session.key_down(key, event.repeat());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_browser(&event.key(), &event.code()) {
                    game.borrow_mut().session.key_up(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("restartButton") else {
            log::warn!("No #restartButton, restart with Space only");
            return Ok(());
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().session.request_restart();
            log::info!("Restart requested");
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_fullscreen_button(document: &Document) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("fullscreenButton") else {
            return Ok(());
        };
        let document = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let Ok(Some(panel)) = document.query_selector(".field-panel") else {
                return;
            };
            let result = if document.fullscreen_element().is_some() {
                document.exit_fullscreen();
                Ok(())
            } else {
                panel.request_fullscreen()
            };
            if let Err(e) = result {
                log::warn!("Fullscreen failed: {:?}", e);
            }
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Key-ups are lost while unfocused; drop held keys on blur
    fn setup_blur(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().session.release_all();
        });
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
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
        // Keep drawing after the run ends so the overlay stays up and restart works
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Endzone Dash (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => endzone_dash::Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read tuning file {path}: {e}");
                endzone_dash::Tuning::default()
            }
        },
        None => endzone_dash::Tuning::default(),
    };

    demo::run(tuning);
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use endzone_dash::sim::{RunStatus, Steering, TickInput};
    use endzone_dash::{Session, Tuning};

    /// Ticks before the demo gives up (five minutes of play)
    const MAX_TICKS: u32 = 60 * 60 * 5;

    /// Straight-ahead autopilot: run upfield, sprint on a healthy tank,
    /// spend powers the moment they're picked up, spin when a defender closes in.
    pub fn run(tuning: Tuning) {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut session = Session::new(seed, tuning);
        log::info!("Demo seed: {seed}");

        for _ in 0..MAX_TICKS {
            let state = session.state();
            let player = &state.player;
            let threatened = state
                .active_defenders()
                .any(|d| d.pos.distance(player.pos) < player.radius + d.radius + 12.0);
            let input = TickInput {
                steering: Steering {
                    up: true,
                    ..Default::default()
                },
                sprint: player.sprint_energy > 30.0,
                activate_truck: true,
                activate_hurdle: threatened,
                spin: threatened,
                ..Default::default()
            };

            for event in session.tick_with(&input) {
                log::debug!("{:?}", event);
            }
            if session.state().status != RunStatus::Active {
                break;
            }
        }

        let state = session.state();
        let frame = session.frame(Vec::new(), 0);
        println!(
            "{} | level {} | {} ticks | {} draw commands",
            state.message,
            frame.hud.level_label,
            state.tick,
            frame.commands.len()
        );
    }
}
