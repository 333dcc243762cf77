//! Client-side board state for the kanban API.
//!
//! [`Board`] keeps a renderable copy of the categories and tasks, applies
//! moves and deletions optimistically, and reconciles with the server
//! through any [`BoardApi`] implementation (normally [`HttpBoardApi`]).

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod http;
pub mod state;

pub use api::BoardApi;
pub use board::Board;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpBoardApi;
pub use state::{BoardState, Column, TaskForm};
