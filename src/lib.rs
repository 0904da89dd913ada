pub mod autoplay;
pub mod camera;
pub mod engine;
pub mod error;
pub mod grid;
pub mod life;
pub mod patterns;
pub mod session;
pub mod state;

pub mod prelude {
    use bevy::{color::Color, math::Vec2};

    pub const UPDATE_INTERVAL_MS: u64 = 500;
    pub const BG_COLOR: Color = Color::srgb(0.0, 0.1, 0.3);

    pub const BOARD_WIDTH: usize = 12;
    pub const BOARD_HEIGHT: usize = 12;
    pub const RANDOMIZE_PROBABILITY: f64 = 0.5;

    pub const BOARD_POS: Vec2 = Vec2::ZERO;
    pub const BORDER_WIDTH_PX: f32 = 8.0;
    pub const BORDER_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
    /// free space kept around the board when fitting the camera
    pub const VIEW_MARGIN_PX: f32 = 24.0;

    pub const CELL_SIZE_PX: Vec2 = Vec2::splat(48.0);
    pub const CELL_SCALE: Vec2 = Vec2::splat(0.92);
    pub const CELL_ALIVE_COLOR: Color = Color::srgb(0.2, 1.0, 0.2);
    pub const CELL_DEAD_COLOR: Color = Color::srgb(0.05, 0.15, 0.4);
    pub const CELL_HOVERED_ALIVE_COLOR: Color = Color::srgb(0.2, 0.4, 1.0);
    pub const CELL_HOVERED_DEAD_COLOR: Color = Color::srgb(0.7, 0.1, 0.1);
}
