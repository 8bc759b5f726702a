use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::types::CategoryId;
use crate::pagination::Pagination;

pub mod category;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Column a category listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySortField {
    Id,
    Name,
    RegDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySort {
    pub field: CategorySortField,
    pub direction: SortDirection,
}

/// Query parameters for listing categories.
///
/// Without pagination every row is returned; without a sort the rows come back
/// in storage order.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
    /// Ordering applied before pagination.
    pub sort: Option<CategorySort>,
}

impl CategoryListQuery {
    /// Query returning every category in storage order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the result to the zero-based `page` of `per_page` rows.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    /// Order the rows by `field` before pagination is applied.
    pub fn sort_by(mut self, field: CategorySortField, direction: SortDirection) -> Self {
        self.sort = Some(CategorySort { field, direction });
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List categories using the supplied query options, returning the total
    /// number of rows alongside the requested slice.
    fn list_categories(&self, query: CategoryListQuery)
    -> RepositoryResult<(usize, Vec<Category>)>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return it with its generated id and
    /// registration date.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Overwrite name and description of an existing category.
    fn update_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Delete a category by id, returning the number of affected rows.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Reject page sizes the offset arithmetic cannot honor.
pub(crate) fn check_pagination(pagination: &Pagination) -> RepositoryResult<()> {
    if pagination.per_page == 0 {
        return Err(RepositoryError::ValidationError(
            "page size must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
