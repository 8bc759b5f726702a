use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::CategoryId;

/// Category shape exchanged with callers of the service layer.
///
/// `category_id` and `reg_date` are assigned by storage, so they are optional
/// on input and always populated on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub category_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reg_date: Option<NaiveDateTime>,
}

impl CategoryDto {
    /// DTO for a category that does not exist in storage yet.
    pub fn new(category_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category_id: None,
            category_name: category_name.into(),
            description: description.into(),
            reg_date: None,
        }
    }

    /// Target an existing category by id.
    pub fn with_id(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Build the insertable record. Id and registration date are left to
    /// storage.
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.category_name,
            description: self.description,
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            category_id: Some(value.id),
            category_name: value.name,
            description: value.description,
            reg_date: Some(value.reg_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn copies_every_entity_field() {
        let reg_date = DateTime::from_timestamp(1_700_000_000, 0)
            .unwrap()
            .naive_utc();
        let category = Category {
            id: CategoryId::new(5).unwrap(),
            name: "Books".into(),
            description: "Printed matter".into(),
            reg_date,
        };

        let dto = CategoryDto::from(category);
        assert_eq!(dto.category_id, Some(CategoryId::new(5).unwrap()));
        assert_eq!(dto.category_name, "Books");
        assert_eq!(dto.description, "Printed matter");
        assert_eq!(dto.reg_date, Some(reg_date));
    }

    #[test]
    fn new_category_ignores_id_and_reg_date() {
        let dto = CategoryDto {
            category_id: Some(CategoryId::new(9).unwrap()),
            category_name: "Music".into(),
            description: "Records".into(),
            reg_date: DateTime::from_timestamp(0, 0).map(|d| d.naive_utc()),
        };

        let new_category = dto.into_new_category();
        assert_eq!(
            new_category,
            NewCategory {
                name: "Music".into(),
                description: "Records".into(),
            }
        );
    }

    #[test]
    fn deserializes_without_storage_fields() {
        let dto: CategoryDto =
            serde_json::from_str(r#"{"category_name":"Toys"}"#).unwrap();
        assert_eq!(dto, CategoryDto::new("Toys", ""));
    }
}
