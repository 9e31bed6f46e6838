//! Cold-room tracker backend.
//!
//! In-memory store of cold rooms, inventory, maintenance and reports behind an
//! async service layer, plus the derivations a dashboard renders.

pub mod db;
pub mod models;
pub mod routes;
pub mod session;
pub mod transformations;

pub use db::{ColdStoreApi, RepositoryBuilder, RepositoryError, RepositoryResult};
pub use routes::Route;
pub use session::Session;
