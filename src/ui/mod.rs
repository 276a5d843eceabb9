// Module declarations
mod app;
mod grid;
mod help_window;
mod render;
mod router;
mod shell;
mod theme;
mod types;

// Re-export public API
pub use grid::grid_nodes;
pub use shell::Shell;
pub use theme::Theme;
