// src/state.rs
use std::sync::Arc;
use crate::upstream::GourmetApi;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn GourmetApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn GourmetApi>) -> Self {
        Self { api }
    }
}
