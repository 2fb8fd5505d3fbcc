//! Collection operations
//!
//! Single-item create-or-overwrite and delete, plus the sequential batch
//! wrappers built on top of them

pub mod upsert;
pub mod delete;
pub mod upload;

pub use upsert::*;
pub use delete::*;
pub use upload::*;

/// Comma-join a summary list, printing `None` when empty
pub(crate) fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_owned()
    } else {
        names.join(", ")
    }
}
