//! # Postboard Core
//!
//! The domain layer of the Postboard server.
//! This crate contains the post model and the persistence port, with no I/O of its own.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{POST_LOG_CAPACITY, Post, PostFields};
pub use error::SnapshotError;
