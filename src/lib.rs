//! Warehouse Directory Library
//!
//! Listing records for warehouses: create, update, soft delete,
//! publish/unpublish, search and pagination over a SeaORM store, served
//! through an axum router.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod commands;
pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod models;
pub mod queries;
pub mod repositories;
pub mod services;
pub mod tracing;

use axum::{middleware, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};

use crate::config::AppConfig;
use crate::services::WarehouseService;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
    pub warehouses: WarehouseService,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: AppConfig) -> Self {
        Self {
            warehouses: WarehouseService::new(db.clone()),
            db,
            config: Arc::new(config),
        }
    }
}

/// Routes under `/api`, without cross-cutting layers
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/warehouses", handlers::warehouses::warehouse_routes())
        .nest("/health", handlers::health::health_routes())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.should_allow_permissive_cors() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}

/// The application router: `/api` wrapped in the tower-http layers.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        .nest("/api", api_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(&config))
        .layer(tracing::configure_http_tracing())
        .layer(middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
}
