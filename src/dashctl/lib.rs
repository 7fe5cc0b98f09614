//! # dashctl Architecture
//!
//! dashctl manages monitoring dashboards as local JSON files: pull them from the
//! service, edit them as text, push them back. It is a library that happens to
//! have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output modes, reads stdin      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Single-item operations and the pull_all / push batches   │
//! │  - File codec (codec.rs), filename deriver (naming.rs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Layer (service/)                                   │
//! │  - Abstract DashboardService trait                          │
//! │  - HttpService (production), InMemoryService (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Responses, Warnings and Errors
//!
//! Service responses are classified once into `Ok | Warnings | Errors`
//! ([`response::ResponseStatus`]). Warnings become messages in the command's
//! [`commands::CmdResult`]; errors become [`error::DashError::Remote`].
//!
//! Batch operations (`pull_all`, `push`) isolate failures per item: each
//! failure is recorded in `CmdResult::failures` and the batch carries on. Only
//! a failed listing call aborts `pull_all`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`service`]: Service abstraction and implementations
//! - [`response`]: Response classification and reporting
//! - [`codec`]: Dashboard file format
//! - [`naming`]: Title to file name derivation
//! - [`model`]: Core data types (`Dashboard`, `DashboardDraft`, `DashboardSummary`)
//! - [`config`]: Credentials and endpoint configuration
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod naming;
pub mod response;
pub mod service;
