//! Row models and request DTOs.

pub mod category;
pub mod task;
