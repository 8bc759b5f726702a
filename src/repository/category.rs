use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::CategoryId;
use crate::models::category::{
    Category as DbCategory, CategoryChanges, NewCategory as DbNewCategory,
};
use crate::repository::{
    CategoryListQuery, CategoryReader, CategorySortField, CategoryWriter, DieselRepository,
    RepositoryResult, SortDirection, check_pagination,
};

impl CategoryReader for DieselRepository {
    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)> {
        use crate::schema::categories;

        if let Some(pagination) = &query.pagination {
            check_pagination(pagination)?;
        }

        let mut conn = self.conn()?;

        let total = categories::table
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = categories::table
            .select(DbCategory::as_select())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(sort) = query.sort {
            items = match (sort.field, sort.direction) {
                (CategorySortField::Id, SortDirection::Asc) => items.order(categories::id.asc()),
                (CategorySortField::Id, SortDirection::Desc) => items.order(categories::id.desc()),
                (CategorySortField::Name, SortDirection::Asc) => {
                    items.order((categories::name.asc(), categories::id.asc()))
                }
                (CategorySortField::Name, SortDirection::Desc) => {
                    items.order((categories::name.desc(), categories::id.desc()))
                }
                (CategorySortField::RegDate, SortDirection::Asc) => {
                    items.order((categories::reg_date.asc(), categories::id.asc()))
                }
                (CategorySortField::RegDate, SortDirection::Desc) => {
                    items.order((categories::reg_date.desc(), categories::id.desc()))
                }
            };
        }

        if let Some(pagination) = &query.pagination {
            // Offsets beyond `i64` lie past the last row.
            let Some(offset) = pagination.offset() else {
                return Ok((total, Vec::new()));
            };
            items = items
                .offset(offset as i64)
                .limit(i64::try_from(pagination.per_page).unwrap_or(i64::MAX));
        }

        let items = items
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok((total, items))
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id.get()))
            .select(DbCategory::as_select())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let created = diesel::insert_into(categories::table)
            .values(db_category)
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let updated = diesel::update(categories::table.filter(categories::id.eq(category.id.get())))
            .set(CategoryChanges::from(category))
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let affected = diesel::delete(categories::table.filter(categories::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
