//! Canvas2D render sink
//!
//! Draws the maze, the end zone and the player once per animation frame.
//! Strictly read-only over the game state.

#[cfg(target_arch = "wasm32")]
mod canvas {
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::consts::{END_ZONE_COLOR, PLAYER_COLOR};
    use crate::sim::{Cell, GameState};

    /// Render sink bound to one canvas element
    pub struct CanvasRenderer {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl CanvasRenderer {
        /// Bind to a canvas, acquiring its 2d context
        pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()?
                .dyn_into::<CanvasRenderingContext2d>()
                .ok()?;
            Some(Self { canvas, ctx })
        }

        /// Resize the backing store and matching CSS extent
        pub fn resize(&self, width: u32, height: u32) {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            let style = self.canvas.style();
            let _ = style.set_property("width", &format!("{width}px"));
            let _ = style.set_property("height", &format!("{height}px"));
        }

        /// Draw one full frame
        pub fn draw(&self, state: &GameState) {
            let w = self.canvas.width() as f64;
            let h = self.canvas.height() as f64;

            self.ctx.set_fill_style_str("#000000");
            self.ctx.fill_rect(0.0, 0.0, w, h);

            let grid = &state.layout.grid;
            let cs = grid.cell_size() as f64;

            self.ctx.set_fill_style_str("#ffffff");
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    if grid.get(col, row) == Some(Cell::Wall) {
                        self.ctx
                            .fill_rect(col as f64 * cs, row as f64 * cs, cs, cs);
                    }
                }
            }

            // End zone disc
            let end = state.layout.end;
            self.ctx.set_fill_style_str(END_ZONE_COLOR);
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                end.x as f64,
                end.y as f64,
                cs / 2.0,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();

            // Player square with a soft glow
            let p = state.player;
            let half = p.half_extent() as f64;
            let (px, py) = (p.pos.x as f64 - half, p.pos.y as f64 - half);
            self.ctx.set_fill_style_str(PLAYER_COLOR);
            self.ctx.fill_rect(px, py, p.size as f64, p.size as f64);

            self.ctx.set_shadow_color(PLAYER_COLOR);
            self.ctx.set_shadow_blur(10.0);
            self.ctx.fill_rect(px, py, p.size as f64, p.size as f64);
            self.ctx.set_shadow_blur(0.0);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
