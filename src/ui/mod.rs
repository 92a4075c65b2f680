//! Terminal UI: board with a cell cursor, move-history list, status line and
//! board-size controls.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
