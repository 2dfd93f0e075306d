mod admin;
mod cancel_commit;
mod commit_swap;
mod execute_swap;
mod initialize;
mod verify_commit;

pub use admin::*;
pub use cancel_commit::*;
pub use commit_swap::*;
pub use execute_swap::*;
pub use initialize::*;
pub use verify_commit::*;
