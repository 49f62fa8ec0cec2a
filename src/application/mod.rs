//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain estimation formulas (those are in Domain)
//! - Owns the single external call and its validation gate
//!
//! ## Use Cases
//!
//! - `CommitUseCase` - turns a quick or pro estimate into a project-creation
//!   call against the repository port, at most one outstanding at a time

pub mod commit;

pub use commit::{
    build_pro_payload, build_quick_payload, CommitReceipt, CommitUseCase, ProCommitOptions,
    QuickCommitOptions,
};
