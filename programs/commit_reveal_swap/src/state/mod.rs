mod config;
mod swap_commit;

pub use config::*;
pub use swap_commit::*;
