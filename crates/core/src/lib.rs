//! Domain types, error taxonomy, and input validation shared by the
//! store adapters, the HTTP API, and the board client.

pub mod category;
pub mod error;
pub mod task;
pub mod types;
