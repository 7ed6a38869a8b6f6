//! Steady Maze entry point
//!
//! Handles platform-specific initialization, DOM wiring and the render loop.
//! Everything here is a thin collaborator around the sim core: it maps
//! pointer events into maze pixel space, drains game events into audio/DOM
//! effects, and redraws once per animation frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

    use glam::Vec2;
    use steady_maze::Settings;
    use steady_maze::audio::{AudioManager, SoundEffect};
    use steady_maze::consts::MAZE_WIDTH;
    use steady_maze::maze_height;
    use steady_maze::platform;
    use steady_maze::renderer::CanvasRenderer;
    use steady_maze::sim::{GameEvent, GameState, MazeStyle, SessionPhase, session};

    const START_STATUS: &str = "Click PLAY to start your maze adventure!";
    const PLAYING_STATUS: &str = "Navigate to the red area to win!";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        audio: AudioManager,
        settings: Settings,
        canvas: HtmlCanvasElement,
        /// Full-screen win overlay, created lazily on first win
        overlay: Option<HtmlElement>,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, seed: u64) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_muted(settings.muted);
            Self {
                state: GameState::new(MazeStyle::Banded, seed, MAZE_WIDTH, maze_height(MAZE_WIDTH)),
                renderer: None,
                audio,
                settings,
                canvas,
                overlay: None,
            }
        }

        /// Map client coordinates into the canvas pixel space, correcting
        /// for any CSS scaling
        fn to_canvas(&self, client_x: f32, client_y: f32) -> Vec2 {
            let rect = self.canvas.get_bounding_client_rect();
            let scale_x = self.canvas.width() as f32 / rect.width() as f32;
            let scale_y = self.canvas.height() as f32 / rect.height() as f32;
            Vec2::new(
                (client_x - rect.left() as f32) * scale_x,
                (client_y - rect.top() as f32) * scale_y,
            )
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(renderer) = &self.renderer {
                renderer.draw(&self.state);
            }
        }

        /// Drain sim events into audio/DOM side effects
        fn process_events(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::AttemptStarted => {
                        self.set_start_screen_visible(false);
                        let _ = self.canvas.style().set_property("cursor", "none");
                        set_status(PLAYING_STATUS);
                    }
                    GameEvent::WallHit => {
                        self.audio.play(SoundEffect::WallBuzz);
                        self.set_start_screen_visible(true);
                        let _ = self.canvas.style().set_property("cursor", "default");
                        set_status(START_STATUS);
                        self.position_play_button();
                    }
                    GameEvent::Won => {
                        // Terminal effect: best-effort, never blocks the sim
                        self.audio.play(SoundEffect::Scream);
                        if !self.settings.reduced_motion {
                            self.show_overlay();
                        }
                        set_status("You made it... or did it make you?");
                    }
                }
            }
        }

        /// Update the optional level display (no-op when absent)
        fn update_level_display(&self) {
            if let Some(document) = document() {
                if let Some(el) = document.get_element_by_id("level-display") {
                    el.set_text_content(Some(&format!("Level {}", self.state.level)));
                }
            }
        }

        fn set_start_screen_visible(&self, visible: bool) {
            let Some(document) = document() else { return };
            if let Some(el) = document.get_element_by_id("start-screen") {
                if visible {
                    let _ = el.class_list().remove_1("hidden");
                } else {
                    let _ = el.class_list().add_1("hidden");
                }
            }
        }

        /// Anchor the play button just below the start position
        fn position_play_button(&self) {
            let Some(document) = document() else { return };
            let Some(btn) = document.get_element_by_id("play-btn") else {
                return;
            };
            let Ok(btn) = btn.dyn_into::<HtmlElement>() else {
                return;
            };
            let start = self.state.layout.start;
            let x = start.x - btn.offset_width() as f32 / 2.0;
            let y = start.y - btn.offset_height() as f32 / 2.0 + 50.0;
            let style = btn.style();
            let _ = style.set_property("left", &format!("{x}px"));
            let _ = style.set_property("top", &format!("{y}px"));
            let _ = style.set_property("transform", "none");
        }

        /// Show the full-screen win overlay, creating it on first use
        fn show_overlay(&mut self) {
            if self.overlay.is_none() {
                self.overlay = create_overlay();
            }
            if let Some(img) = &self.overlay {
                let _ = img.style().set_property("display", "block");
            } else {
                log::warn!("win overlay unavailable");
            }
        }

        fn hide_overlay(&self) {
            if let Some(img) = &self.overlay {
                let _ = img.style().set_property("display", "none");
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    /// Build the fixed-position overlay image element
    fn create_overlay() -> Option<HtmlElement> {
        let document = document()?;
        let img = document.create_element("img").ok()?;
        let img: HtmlElement = img.dyn_into().ok()?;
        let _ = img.set_attribute("src", "image.png");
        let style = img.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", "50%");
        let _ = style.set_property("left", "50%");
        let _ = style.set_property("transform", "translate(-50%, -50%)");
        let _ = style.set_property("max-width", "400px");
        let _ = style.set_property("z-index", "10000");
        let _ = style.set_property("display", "none");
        document.body()?.append_child(&img).ok()?;
        Some(img)
    }

    /// Update the optional status line (no-op when absent)
    fn set_status(text: &str) {
        if let Some(document) = document() {
            if let Some(el) = document.get_element_by_id("status") {
                el.set_text_content(Some(text));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Steady Maze starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = platform::clock_seed();
        let game = Rc::new(RefCell::new(Game::new(canvas.clone(), seed)));
        log::info!("Session initialized with seed: {}", seed);

        {
            let mut g = game.borrow_mut();
            let renderer = CanvasRenderer::new(canvas.clone());
            if let Some(renderer) = &renderer {
                renderer.resize(g.state.width, g.state.height);
            }
            g.renderer = renderer;
            set_status(START_STATUS);
            g.position_play_button();
            g.update_level_display();
        }

        setup_input_handlers(&canvas, game.clone());
        setup_play_button(game.clone());
        setup_resize(game.clone());

        request_animation_frame(game);

        log::info!("Steady Maze running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let pos = g.to_canvas(event.client_x() as f32, event.client_y() as f32);
                session::pointer_moved(&mut g.state, pos);
                g.process_events();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let pos = g.to_canvas(touch.client_x() as f32, touch.client_y() as f32);
                    session::pointer_moved(&mut g.state, pos);
                    g.process_events();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start behaves like a move so the first contact is tracked
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let pos = g.to_canvas(touch.client_x() as f32, touch.client_y() as f32);
                    session::pointer_moved(&mut g.state, pos);
                    g.process_events();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click on the canvas restarts after a win
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase == SessionPhase::Won {
                    session::restart(&mut g.state);
                    g.hide_overlay();
                    g.set_start_screen_visible(true);
                    let _ = g.canvas.style().set_property("cursor", "default");
                    set_status(START_STATUS);
                    g.position_play_button();
                    g.update_level_display();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_play_button(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else { return };
        let Some(btn) = document.get_element_by_id("play-btn") else {
            log::warn!("no play button in the document");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut g = game.borrow_mut();
            // Browsers only allow audio after a user gesture
            g.audio.resume();
            let pos = g.to_canvas(event.client_x() as f32, event.client_y() as f32);
            session::start_attempt(&mut g.state, Some(pos));
            g.process_events();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            // The maze keeps its fixed extent; resizing just re-runs
            // generation so the start anchor lands correctly
            let (w, h) = (MAZE_WIDTH, maze_height(MAZE_WIDTH));
            session::handle_resize(&mut g.state, w, h);
            if let Some(renderer) = &g.renderer {
                renderer.resize(g.state.width, g.state.height);
            }
            if g.state.phase == SessionPhase::StartScreen {
                g.position_play_button();
            }
        });
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().render();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Steady Maze (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    println!("\nRunning maze smoke checks...");
    smoke_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_check() {
    use steady_maze::consts::{CELL_SIZE, MAZE_WIDTH, PLAYER_SIZE};
    use steady_maze::sim::{MazeStyle, generate, hits_wall};

    let mut rng = {
        use rand::SeedableRng;
        rand_pcg::Pcg32::seed_from_u64(steady_maze::platform::clock_seed())
    };
    let height = steady_maze::maze_height(MAZE_WIDTH);
    let layout = generate(MazeStyle::Banded, 1, MAZE_WIDTH, height, CELL_SIZE, &mut rng);

    assert!(!hits_wall(&layout.grid, layout.start, PLAYER_SIZE / 2.0));
    assert!(!hits_wall(&layout.grid, layout.end, PLAYER_SIZE / 2.0));
    println!(
        "✓ {}x{} maze generated, start and end clear",
        layout.grid.cols(),
        layout.grid.rows()
    );
}
