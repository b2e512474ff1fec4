pub mod app;
pub mod calendar;
pub mod config;
pub mod data;
pub mod dates;
pub mod dom;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod legend;
pub mod level;
pub mod models;
pub mod square;
pub mod state;
pub mod storage;
pub mod tooltip;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use storage::load_data;
