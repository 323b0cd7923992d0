//! # Term Service Module
//!
//! Aggregates the API endpoints for equipment-responsibility terms. Term
//! records are persisted client-side; the backend only renders them.
//!
//! ## Sub-modules:
//! - `pdf`: Renders a term record into the formatted PDF document.

mod pdf;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for all term-related API endpoints.
const API_PATH: &str = "/api/terms";

/// Configures and returns the Actix `Scope` for the term routes.
///
/// # Registered Routes:
///
/// *   **`POST /pdf`**:
///     - **Handler**: `pdf::process`
///     - **Description**: Receives a full `TermRecord` as JSON (including the
///       base64 signature images) and responds with the rendered PDF bytes
///       for inline display. Both the finalize action and the history list
///       export through this single endpoint.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/pdf", post().to(pdf::process))
}
