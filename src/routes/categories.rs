use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::{CategoryForm, PageQuery};
use crate::repository::DieselRepository;
use crate::routes::repository_error_response;
use crate::services::categories::CategoryService;

#[get("/categories")]
pub async fn list_categories(
    query: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let service = CategoryService::new(repo.get_ref());
    match service.list_page(query.into_inner().into()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => repository_error_response("list categories", err),
    }
}

#[get("/categories/all")]
pub async fn list_all_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    let service = CategoryService::new(repo.get_ref());
    match service.list_all() {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => repository_error_response("list all categories", err),
    }
}

#[get("/categories/{category_id}")]
pub async fn read_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(category_id) = CategoryId::new(category_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    let service = CategoryService::new(repo.get_ref());
    match service.read(category_id) {
        Ok(Some(category)) => HttpResponse::Ok().json(category),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => repository_error_response("read category", err),
    }
}

#[post("/categories")]
pub async fn register_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let dto: CategoryDto = match form.try_into() {
        Ok(dto) => dto,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };

    let service = CategoryService::new(repo.get_ref());
    match service.register(dto) {
        Ok(category) => HttpResponse::Created().json(CategoryDto::from(category)),
        Err(err) => repository_error_response("register category", err),
    }
}

#[put("/categories/{category_id}")]
pub async fn modify_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let dto = match form.into_update(category_id.into_inner()) {
        Ok(dto) => dto,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };

    let service = CategoryService::new(repo.get_ref());
    match service.modify(dto) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => repository_error_response("modify category", err),
    }
}

#[delete("/categories/{category_id}")]
pub async fn remove_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(category_id) = CategoryId::new(category_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    let service = CategoryService::new(repo.get_ref());
    match service.remove(category_id) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().finish(),
        Err(err) => repository_error_response("remove category", err),
    }
}
