//! Category CRUD over a repository collaborator.
//!
//! Absence is never an error here: [`CategoryService::read`] yields `None`,
//! [`CategoryService::modify`] silently does nothing and
//! [`CategoryService::remove`] reports `false`. Repository errors are returned
//! to the caller untouched.

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::pagination::{PageRequest, PageResult};
use crate::repository::{
    CategoryListQuery, CategoryReader, CategorySortField, CategoryWriter, RepositoryResult,
    SortDirection,
};

pub struct CategoryService<'a, R> {
    repo: &'a R,
}

impl<'a, R> CategoryService<'a, R>
where
    R: CategoryReader + CategoryWriter,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// One page of categories, newest id first.
    pub fn list_page(&self, request: PageRequest) -> RepositoryResult<PageResult<CategoryDto>> {
        let query = CategoryListQuery::new()
            .sort_by(CategorySortField::Id, SortDirection::Desc)
            .paginate(request.page, request.size);

        let (total, categories) = self.repo.list_categories(query)?;
        Ok(PageResult::new(categories, total, request).map(CategoryDto::from))
    }

    /// Every category in storage order.
    pub fn list_all(&self) -> RepositoryResult<Vec<CategoryDto>> {
        let (_total, categories) = self.repo.list_categories(CategoryListQuery::new())?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub fn read(&self, category_id: CategoryId) -> RepositoryResult<Option<CategoryDto>> {
        let category = self.repo.get_category_by_id(category_id)?;
        Ok(category.map(CategoryDto::from))
    }

    /// Persist a new category. Any id or registration date on `dto` is
    /// ignored.
    pub fn register(&self, dto: CategoryDto) -> RepositoryResult<Category> {
        let new_category = dto.into_new_category();
        self.repo.create_category(&new_category)
    }

    /// Overwrite name and description of the category `dto` points at.
    /// Missing ids are a no-op.
    pub fn modify(&self, dto: CategoryDto) -> RepositoryResult<()> {
        let Some(category_id) = dto.category_id else {
            log::debug!("Skipping category update without an id");
            return Ok(());
        };

        let Some(mut category) = self.repo.get_category_by_id(category_id)? else {
            log::debug!("Category {category_id} not found, nothing to update");
            return Ok(());
        };

        category.name = dto.category_name;
        category.description = dto.description;
        self.repo.update_category(&category)?;
        Ok(())
    }

    /// Delete a category, returning whether it existed.
    pub fn remove(&self, category_id: CategoryId) -> RepositoryResult<bool> {
        if self.repo.get_category_by_id(category_id)?.is_none() {
            log::debug!("Category {category_id} not found, nothing to delete");
            return Ok(false);
        }

        self.repo.delete_category(category_id)?;
        Ok(true)
    }
}
