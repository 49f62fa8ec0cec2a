//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! The host application provides concrete implementations.

pub mod project_repository;

pub use project_repository::{ProjectId, ProjectRepository};
