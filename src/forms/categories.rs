use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryId, TypeConstraintError};
use crate::dto::categories::CategoryDto;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PageRequest};

/// JSON body accepted when creating or updating a category.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(length(min = 1))]
    pub category_name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category form validation failed: {0}")]
    Validation(String),
    #[error("Category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CategoryForm> for CategoryDto {
    type Error = CategoryFormError;

    fn try_from(value: CategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(CategoryDto::new(value.category_name, value.description))
    }
}

impl CategoryForm {
    /// Validate the form and target the category at `category_id`.
    pub fn into_update(self, category_id: i32) -> Result<CategoryDto, CategoryFormError> {
        let category_id = CategoryId::new(category_id)?;
        let dto: CategoryDto = self.try_into()?;
        Ok(dto.with_id(category_id))
    }
}

/// Query string of the paged listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl From<PageQuery> for PageRequest {
    fn from(value: PageQuery) -> Self {
        PageRequest::new(
            value.page.unwrap_or(0),
            value.size.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        )
    }
}
