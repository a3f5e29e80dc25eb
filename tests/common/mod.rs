#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;
use warehouse_directory::{
    build_router,
    config::AppConfig,
    db::{self, DbConfig},
    dto::WarehousePayload,
    models::{warehouse, Warehouse},
    services::WarehouseService,
    AppState,
};

/// Helper harness backed by a fresh in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );

        // in-memory SQLite is per connection, so the pool must hold exactly one
        let pool = db::establish_connection_with_config(&DbConfig::single_connection(
            cfg.database_url.clone(),
        ))
        .await
        .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = build_router(state.clone());

        Self { router, state }
    }

    pub fn service(&self) -> &WarehouseService {
        &self.state.warehouses
    }

    /// Sends a request through the full router and decodes the JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };
        (status, value)
    }

    /// Creates a listing through the service layer.
    pub async fn seed(&self, name: &str, locality: &str, city: &str, state: &str) -> Warehouse {
        let payload: WarehousePayload =
            serde_json::from_value(payload_json(name, locality, city, state))
                .expect("valid seed payload");
        self.service()
            .create(payload)
            .await
            .expect("seed warehouse")
    }

    /// Rewrites a row's creation time so ordering is deterministic.
    pub async fn set_created_at(&self, id: Uuid, at: DateTime<Utc>) {
        warehouse::ActiveModel {
            id: Set(id),
            created_at: Set(at),
            ..Default::default()
        }
        .update(self.state.db.as_ref())
        .await
        .expect("backdate warehouse");
    }
}

/// A complete create body.
pub fn payload_json(name: &str, locality: &str, city: &str, state: &str) -> Value {
    json!({
        "warehouse_name": name,
        "address1": "1 Dock Road",
        "areaLocality": locality,
        "state": state,
        "city": city,
        "pincode": "560058",
        "totalLotArea": 1200,
        "coveredArea": "800",
    })
}
