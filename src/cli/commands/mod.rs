//! One module per subcommand.

pub mod add;
#[cfg(feature = "audit-log")]
pub mod audit_cmd;
pub mod clear;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod expired;
pub mod list;
pub mod search;
pub mod show;
pub mod verify;
pub mod version;
