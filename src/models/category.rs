use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub reg_date: NaiveDateTime,
}

/// Insertable form of [`Category`]. `id` and `reg_date` come from column
/// defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Columns `modify` is allowed to overwrite.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct CategoryChanges<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: category.name,
            description: category.description,
            reg_date: category.reg_date,
        })
    }
}

impl From<DomainNewCategory> for NewCategory {
    fn from(category: DomainNewCategory) -> Self {
        Self {
            name: category.name,
            description: category.description,
        }
    }
}

impl<'a> From<&'a DomainCategory> for CategoryChanges<'a> {
    fn from(category: &'a DomainCategory) -> Self {
        Self {
            name: &category.name,
            description: &category.description,
        }
    }
}
