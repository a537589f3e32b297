use crate::config::Config;
use crate::models::Album;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub albums: Arc<Vec<Album>>,
}

impl AppState {
    pub fn new(config: Config, albums: Vec<Album>) -> Self {
        Self {
            config: Arc::new(config),
            albums: Arc::new(albums),
        }
    }
}
