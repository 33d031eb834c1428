//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use grid_snake::audio::{AudioManager, SoundEffect};
    use grid_snake::game::{FrameControl, SnakeLoop};
    use grid_snake::input;
    use grid_snake::sim::{GamePhase, Grid};
    use grid_snake::{HighScores, Settings};

    /// Game instance holding all state
    struct Game {
        snake: SnakeLoop,
        audio: AudioManager,
        scores: HighScores,
        ctx: CanvasRenderingContext2d,
        cell_px: f64,
        canvas_size: f64,
        /// True while an animation frame callback is armed
        loop_armed: bool,
        /// Guards the leaderboard insert so it runs once per run
        score_recorded: bool,
    }

    impl Game {
        /// Drive one animation frame: at most one logical tick, then a
        /// read-only render pass and HUD refresh.
        fn frame(&mut self, now_ms: f64) -> FrameControl {
            let control = self.snake.frame(now_ms);

            for event in self.snake.drain_events() {
                self.audio.play(SoundEffect::for_event(event));
            }

            if self.snake.phase() == GamePhase::GameOver && !self.score_recorded {
                self.score_recorded = true;
                self.record_score();
            }

            self.present();
            control
        }

        fn start_run(&mut self) {
            self.audio.resume();
            self.score_recorded = false;
            self.snake.start();
        }

        fn restart_run(&mut self) {
            self.score_recorded = false;
            self.snake.restart();
        }

        fn record_score(&mut self) {
            let state = self.snake.state();
            if let Some(rank) =
                self.scores
                    .add_score(state.score, state.body.len(), js_sys::Date::now())
            {
                log::info!("New high score, rank {}", rank);
                self.scores.save();
            }
        }

        fn present(&self) {
            self.render();
            self.update_hud();
        }

        /// Draw the board. Reads the simulation state, never mutates it.
        fn render(&self) {
            let size = self.canvas_size;
            self.ctx.clear_rect(0.0, 0.0, size, size);

            let state = self.snake.state();

            self.ctx.set_fill_style_str("red");
            self.fill_cell(state.food.x, state.food.y);

            self.ctx.set_fill_style_str("green");
            for cell in &state.body {
                self.fill_cell(cell.x, cell.y);
            }

            if self.snake.phase() == GamePhase::GameOver {
                self.ctx.set_fill_style_str("black");
                self.ctx.set_text_align("center");
                self.ctx.set_font("50px Arial");
                let _ = self
                    .ctx
                    .fill_text("Game Over", size / 2.0, size / 2.0 - 30.0);
                self.ctx.set_font("30px Arial");
                let _ = self.ctx.fill_text(
                    &format!("Total Score: {}", self.snake.score()),
                    size / 2.0,
                    size / 2.0 + 30.0,
                );
            }
        }

        /// One filled circle per cell, like the segments and the food.
        fn fill_cell(&self, x: i32, y: i32) {
            let r = self.cell_px / 2.0;
            let cx = x as f64 * self.cell_px + r;
            let cy = y as f64 * self.cell_px + r;
            self.ctx.begin_path();
            let _ = self.ctx.arc(cx, cy, r, 0.0, TAU);
            self.ctx.fill();
        }

        /// Update score display and button visibility in the DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("score") {
                let mut text = format!("Score: {}", self.snake.score());
                if let Some(best) = self.scores.top_score() {
                    text.push_str(&format!(" | Best: {}", best));
                }
                el.set_text_content(Some(&text));
            }

            if let Some(btn) = document.get_element_by_id("restartBtn") {
                let list = btn.class_list();
                if self.snake.phase() == GamePhase::GameOver {
                    let _ = list.remove_1("hidden");
                } else {
                    let _ = list.add_1("hidden");
                }
            }

            if let Some(btn) = document.get_element_by_id("startGameBtn") {
                let list = btn.class_list();
                if self.snake.phase() == GamePhase::Idle {
                    let _ = list.remove_1("hidden");
                } else {
                    let _ = list.add_1("hidden");
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Grid Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Square board at 90% of the window width, fixed for the session
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0)
            * 0.9;
        let size = width as u32;
        canvas.set_width(size);
        canvas.set_height(size);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context unavailable")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let grid = Grid::from_surface(size, size, settings.cell_size);
        let seed = js_sys::Date::now() as u64;

        let game = Rc::new(RefCell::new(Game {
            snake: SnakeLoop::new(grid, settings.move_interval_ms, seed),
            audio: AudioManager::new(settings.master_volume, settings.muted),
            scores: HighScores::load(),
            ctx,
            cell_px: settings.cell_size as f64,
            canvas_size: size as f64,
            loop_armed: false,
            score_recorded: false,
        }));

        log::info!(
            "Game initialized with seed {} on a {}x{} grid",
            seed,
            grid.cols,
            grid.rows
        );

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());

        // Show the idle board; the loop is armed by the start button
        game.borrow().present();

        log::info!("Grid Snake ready");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(heading) = input::heading_from_key(event.key().as_str()) {
                    game.borrow_mut().snake.request_heading(heading);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch steering by quadrant
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    let w = canvas_clone.client_width() as f32;
                    let h = canvas_clone.client_height() as f32;
                    let heading = input::heading_from_point(x, y, w, h);
                    game.borrow_mut().snake.request_heading(heading);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("startGameBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().start_run();
                ensure_loop(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().restart_run();
                ensure_loop(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Arm the animation loop unless a callback is already pending. Keeps
    /// duplicate button events from double-scheduling the loop.
    fn ensure_loop(game: &Rc<RefCell<Game>>) {
        let already_armed = {
            let mut g = game.borrow_mut();
            let armed = g.loop_armed;
            g.loop_armed = true;
            armed
        };
        if !already_armed {
            request_animation_frame(game.clone());
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let control = game.borrow_mut().frame(time);

        match control {
            FrameControl::Continue => request_animation_frame(game),
            FrameControl::Stop => {
                game.borrow_mut().loop_armed = false;
                log::info!("animation loop stopped");
            }
        }
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
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode is headless - build for wasm32-unknown-unknown for the playable game");

    demo_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the loop headless at a fixed cadence until the snake hits the wall.
#[cfg(not(target_arch = "wasm32"))]
fn demo_run() {
    use grid_snake::consts::MOVE_INTERVAL_MS;
    use grid_snake::game::{FrameControl, SnakeLoop};
    use grid_snake::sim::Grid;

    let mut snake = SnakeLoop::new(Grid::new(12, 12), MOVE_INTERVAL_MS, 42);
    snake.start();

    let mut now = 0.0;
    while snake.frame(now) == FrameControl::Continue {
        now += MOVE_INTERVAL_MS;
    }

    println!(
        "demo run over after {:.1}s, score {}",
        now / 1000.0,
        snake.score()
    );
}
