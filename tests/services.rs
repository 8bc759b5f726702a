use category_service::domain::types::CategoryId;
use category_service::dto::categories::CategoryDto;
use category_service::pagination::PageRequest;
use category_service::repository::DieselRepository;
use category_service::services::categories::CategoryService;

mod common;

fn ids(dtos: &[CategoryDto]) -> Vec<i32> {
    dtos.iter()
        .filter_map(|dto| dto.category_id.map(CategoryId::get))
        .collect()
}

#[test]
fn three_categories_listed_unpaged_and_paged() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let service = CategoryService::new(&repo);

    for name in ["Books", "Music", "Games"] {
        service
            .register(CategoryDto::new(name, ""))
            .expect("should register category");
    }

    let all = service.list_all().expect("should list categories");
    assert_eq!(all.len(), 3);
    let mut all_ids = ids(&all);
    all_ids.sort();
    assert_eq!(all_ids, vec![1, 2, 3]);

    let page = service
        .list_page(PageRequest::new(0, 2))
        .expect("should list first page");
    assert_eq!(ids(&page.items), vec![3, 2]);
    assert_eq!(page.total, 3);
    assert_eq!(page.page, 0);
    assert_eq!(page.total_pages, 2);

    let second = service
        .list_page(PageRequest::new(1, 2))
        .expect("should list second page");
    assert_eq!(ids(&second.items), vec![1]);
}

#[test]
fn register_then_read_returns_persisted_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let service = CategoryService::new(&repo);

    let created = service
        .register(CategoryDto::new("Garden", "Seeds and tools"))
        .expect("should register category");
    let read = service
        .read(created.id)
        .expect("should read category")
        .expect("category should exist");

    assert_eq!(read.category_name, "Garden");
    assert_eq!(read.description, "Seeds and tools");
    assert_eq!(read.reg_date, Some(created.reg_date));
}

#[test]
fn modify_updates_existing_and_ignores_missing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let service = CategoryService::new(&repo);

    let created = service
        .register(CategoryDto::new("Books", "Paper"))
        .expect("should register category");

    service
        .modify(CategoryDto::new("Ghost", "").with_id(CategoryId::new(99).unwrap()))
        .expect("modifying a missing category should not fail");
    assert_eq!(service.list_all().expect("should list").len(), 1);

    service
        .modify(CategoryDto::new("Comics", "Panels").with_id(created.id))
        .expect("should modify category");
    let read = service
        .read(created.id)
        .expect("should read category")
        .expect("category should exist");
    assert_eq!(read.category_id, Some(created.id));
    assert_eq!(read.category_name, "Comics");
    assert_eq!(read.description, "Panels");
    assert_eq!(read.reg_date, Some(created.reg_date));
}

#[test]
fn remove_reports_whether_category_existed() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let service = CategoryService::new(&repo);

    let created = service
        .register(CategoryDto::new("Books", ""))
        .expect("should register category");

    assert!(!service.remove(CategoryId::new(50).unwrap()).expect("should succeed"));
    assert_eq!(service.list_all().expect("should list").len(), 1);

    assert!(service.remove(created.id).expect("should remove category"));
    assert!(service.read(created.id).expect("should read").is_none());
}
