//! EduTrack portal services.
//!
//! Two binaries ship from this crate:
//!
//! - `edutrack`: the portal web server. Serves the login page at `/` on
//!   port 3000.
//! - `init-db`: the pre-installation tool. Creates the EduTrack database
//!   schema before first deployment.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`db`]: Database schema creation
//! - [`web`]: HTTP router and page handlers
//! - [`utils`]: Utility functions

pub mod config;
pub mod db;
pub mod error;
pub mod utils;
pub mod web;

pub use config::Config;
pub use error::{AppError, Result};
