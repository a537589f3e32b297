pub mod app;
pub mod chart;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod popularity;
pub mod state;
pub mod storage;
pub mod summary;
pub mod ui;
pub mod weekly;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use weekly::aggregate;
