//! Migration module for stored task list formats
//!
//! Stored lists are read through a permissive helper and then upgraded to the
//! current in-memory [`TaskList`](crate::todo::TaskList). Saving always writes
//! the latest format, so a file is migrated the first time it is rewritten.
//!
//! ## Current Versions
//!
//! - **Version 1**: The browser layout. Tasks carry only `text` and
//!   `completed` (sometimes `priority`), no IDs and no dates. In JSON it may
//!   be a bare array of tasks rather than a document.
//! - **Version 2**: Document with `format_version`, `task_counter` and
//!   `[[tasks]]` entries carrying stable IDs and dates.

mod legacy_types;
mod migrate;
mod normalize;

pub use legacy_types::{StoredLayout, StoredTask, TaskListMigrationHelper};
pub use migrate::migrate_to_latest;
pub use normalize::normalize_string_line_endings;
