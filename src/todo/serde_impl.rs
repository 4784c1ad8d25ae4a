//! Serialization and deserialization implementations for TaskList
//!
//! Reading goes through the migration helper so every supported stored
//! version loads; writing always produces the current format.

use super::task_list::{FORMAT_VERSION, TaskList};
use crate::migration::{StoredLayout, migrate_to_latest};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let layout = StoredLayout::deserialize(deserializer)?;
        migrate_to_latest(layout).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TaskList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        // Scalars first: TOML requires them ahead of the [[tasks]] tables
        let mut state = serializer.serialize_struct("TaskList", 3)?;
        state.serialize_field("format_version", &FORMAT_VERSION)?;
        state.serialize_field("task_counter", &self.task_counter)?;
        state.serialize_field("tasks", &self.tasks)?;
        state.end()
    }
}
