//! Ledge Hopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlInputElement};

    use ledge_hopper::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use ledge_hopper::input::KeyMap;
    use ledge_hopper::render::CanvasRenderer;
    use ledge_hopper::score::ScoreClient;
    use ledge_hopper::sim::{GamePhase, GameState, step};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        keys: KeyMap,
        renderer: CanvasRenderer,
    }

    impl Game {
        fn new(renderer: CanvasRenderer) -> Self {
            Self {
                state: GameState::new(),
                keys: KeyMap::new(),
                renderer,
            }
        }

        /// Run one display-refresh frame: simulate, draw, refresh the HUD.
        fn frame(&mut self) {
            let input = self.keys.sample();
            step(&mut self.state, &input);
            self.renderer.draw(&self.state);
            self.update_hud();
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-lives") {
                el.set_text_content(Some(&self.state.lives.to_string()));
            }

            // Game-over panel follows the session phase
            set_hidden(&document, "game-over", self.state.phase != GamePhase::GameOver);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ledge Hopper starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context error")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(CanvasRenderer::new(ctx))));

        // The score service lives at the page origin
        let origin = window.location().origin().expect("no origin");
        let scores = ScoreClient::new(origin);

        setup_keyboard(game.clone());
        setup_submit_button(&document, game.clone(), scores);
        setup_restart_button(&document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Ledge Hopper running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().keys.press(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().keys.release(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_submit_button(document: &Document, game: Rc<RefCell<Game>>, scores: ScoreClient) {
        if let Some(btn) = document.get_element_by_id("submit-score-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();

                let name = document
                    .get_element_by_id("player-name")
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.value())
                    .unwrap_or_default();
                // An empty name silently declines to submit
                if name.is_empty() {
                    return;
                }

                set_hidden(&document, "loading", false);

                let score = game.borrow().state.score;
                let scores = scores.clone();
                spawn_local(async move {
                    match scores.submit_score(&name, score).await {
                        Ok(true) => log::info!("Score {score} accepted for {name}"),
                        Ok(false) => log::warn!("Score {score} rejected for {name}"),
                        Err(err) => log::error!("Error submitting score: {err:?}"),
                    }

                    let document = web_sys::window().unwrap().document().unwrap();
                    set_hidden(&document, "loading", true);
                });
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().state.restart();
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ledge Hopper (native) starting...");
    log::info!("Native mode has no renderer - serve the wasm build for the playable version");

    println!("\nRunning headless simulation demo...");
    demo_simulation();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_simulation() {
    use ledge_hopper::consts::{CANVAS_WIDTH, PLAYER_SIZE};
    use ledge_hopper::sim::{GameState, StepInput, step};

    let mut state = GameState::new();
    let input = StepInput {
        right: true,
        ..Default::default()
    };
    for _ in 0..160 {
        step(&mut state, &input);
    }

    assert!(!state.player.airborne, "player should be standing on the ground");
    assert_eq!(state.player.pos.x, CANVAS_WIDTH - PLAYER_SIZE.x);
    println!(
        "✓ Player ran to the right edge with {} lives left",
        state.lives
    );
}
