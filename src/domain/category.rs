use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::CategoryId;

/// Persisted category record.
///
/// `id` and `reg_date` are assigned by storage on insert and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub reg_date: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}
