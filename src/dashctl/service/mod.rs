//! # Service Layer
//!
//! This module defines the abstraction over the remote dashboard endpoints. The
//! [`DashboardService`] trait lets the commands run against different backends.
//!
//! ## Implementations
//!
//! - [`http::HttpService`]: Production client for the REST API
//!   - `GET/POST /api/v1/dash`, `GET/PUT/DELETE /api/v1/dash/{id}`
//!   - Authenticates with `api_key` / `application_key` query parameters
//!   - Blocking calls; timeouts are the HTTP client's
//!
//! - [`memory::InMemoryService`]: In-memory service for testing
//!   - Mimics the response bodies of the real service, server-only fields included
//!   - Counts calls so tests can assert that nothing hit the network
//!
//! ## Contract
//!
//! Every method returns a classified [`Response`]. Errors the service reports in
//! the body are *not* turned into `Err` here: that is the job of
//! [`Response::report`], so warnings and errors are handled in one place.
//! `Err` from this layer means the call itself failed (transport, decoding).

use crate::error::Result;
use crate::model::DashboardDraft;
use crate::response::Response;

pub mod http;
pub mod memory;

pub trait DashboardService {
    /// Fetch one dashboard: `{"dash": {...}}`
    fn get(&self, id: &str) -> Result<Response>;

    /// List all dashboards: `{"dashes": [{"id", "title", ...}]}`
    fn get_all(&self) -> Result<Response>;

    /// Create a dashboard: `{"dash": {...}}` with the assigned id
    fn create(&mut self, draft: &DashboardDraft) -> Result<Response>;

    /// Replace title, description and graphs of an existing dashboard
    fn update(&mut self, id: &str, draft: &DashboardDraft) -> Result<Response>;

    /// Delete a dashboard
    fn delete(&mut self, id: &str) -> Result<Response>;
}
