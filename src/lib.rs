//! Rule-based video game recommender
//!
//! Parses a free-text self-description into an age and a set of preferred
//! genres, then ranks games from a compiled-in catalog with an additive
//! relevance heuristic. Driven interactively through a console session.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{AppError, AppResult};
