// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory storage and outbox.
// - Register every handler with the dispatcher and mount the HTTP routes.

pub mod api_doc;
pub mod config;
pub mod database;
pub mod http;
pub mod state;
pub mod wiring;
