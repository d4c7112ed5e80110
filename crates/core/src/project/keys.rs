//! Key generation functions for project records.
//!
//! Pure functions for generating the partition and sort keys used by the
//! storage backends. All functions are sync and have no side effects.

use uuid::Uuid;

/// Partition value shared by every project record.
///
/// All projects live under one logical collection, so listing is a single
/// partition query ordered by sort key.
pub const PARTITION_VALUE: &str = "PROJECT";

/// Generate the sort key for a project.
///
/// Pattern: `<createdAtEpochSeconds>#<project_id>`
///
/// Epoch seconds keep the same digit width until the year 2286, so
/// lexicographic order on the sort key matches chronological order for
/// records created at different seconds. Ties within the same second are
/// broken only by the random id and carry no ordering guarantee.
pub fn project_sk(created_at: i64, id: Uuid) -> String {
    format!("{created_at}#{id}")
}
