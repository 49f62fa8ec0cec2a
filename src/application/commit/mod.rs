//! Commit flow - estimate-to-project adapter and use case

mod options;
mod result;
mod use_case;

pub use options::{ProCommitOptions, QuickCommitOptions};
pub use result::CommitReceipt;
pub use use_case::{build_pro_payload, build_quick_payload, CommitUseCase};
