//! Browser-facing web tier consuming the REST API.
//!
//! This module implements the site that visitors interact with. It holds no
//! database of its own beyond session storage; every park and trail it shows
//! comes from the API over HTTP via the repositories in `repository/`.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - Page and AJAX handlers
//! - **Repository Layer** (`repository/`) - Typed HTTP clients for API resources
//! - **Session** (`session`) - Typed wrapper over the visitor's server-side session
//! - **Middleware** (`middleware/`) - Session-based access guards
//! - **Error Layer** (`error`) - Web error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared HTTP client and repository constructors
//! - **Startup** (`startup`) - Session store database and session layer
//! - **Router** (`router`) - Axum route configuration
//! - **Model** (`model`) - View models returned to the browser

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod repository;
pub mod router;
pub mod session;
pub mod startup;
pub mod state;
