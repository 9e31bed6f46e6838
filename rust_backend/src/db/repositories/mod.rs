//! Repository implementations module.
//!
//! - `local`: In-memory implementation seeded from the fixture data set, used
//!   by the dashboard and by tests

pub mod local;

pub use local::LocalRepository;
