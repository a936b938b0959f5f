//! Inventa Equipment Inventory Management System
//!
//! A Rust implementation of the Inventa equipment-inventory server,
//! providing a REST JSON API over interchangeable data-access backends
//! (Postgres, an upstream REST API, or an in-memory demo store), plus the
//! pure filter engine used to derive the visible record subset.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod repository;
pub mod services;
pub mod view;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
