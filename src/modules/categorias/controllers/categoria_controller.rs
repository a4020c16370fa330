use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::pagination::PageRequest;
use crate::modules::categorias::models::Categoria;
use crate::modules::categorias::services::CategoriaService;

/// Query parameters for the paginated listing
#[derive(Debug, Deserialize)]
pub struct ListCategoriasQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_size() -> i64 {
    10
}

/// List categorías, paginated
/// GET /categorias
pub async fn list_categorias(
    service: web::Data<Arc<CategoriaService>>,
    query: web::Query<ListCategoriasQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service
        .find_all(PageRequest::of(query.page, query.size))
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Get a categoría by id
/// GET /categorias/{id}
pub async fn get_categoria(
    service: web::Data<Arc<CategoriaService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match service.find_by_id(id).await? {
        Some(categoria) => Ok(HttpResponse::Ok().json(categoria)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Create a new categoría
/// POST /categorias
pub async fn create_categoria(
    service: web::Data<Arc<CategoriaService>>,
    body: web::Json<Categoria>,
) -> Result<HttpResponse, AppError> {
    let mut nueva = body.into_inner();
    nueva.validate()?;

    // The store assigns the id; any client-supplied one is discarded
    nueva.id = None;
    let creada = service.save(nueva).await?;

    Ok(HttpResponse::Created().json(creada))
}

/// Update an existing categoría
/// PUT /categorias/{id}
pub async fn update_categoria(
    service: web::Data<Arc<CategoriaService>>,
    path: web::Path<i64>,
    body: web::Json<Categoria>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let mut categoria = body.into_inner();
    categoria.validate()?;

    if !service.exists_by_id(id).await? {
        return Ok(HttpResponse::NotFound().finish());
    }

    // The path id wins over whatever the body carries
    categoria.id = Some(id);
    let actualizada = service.save(categoria).await?;

    Ok(HttpResponse::Ok().json(actualizada))
}

/// Delete a categoría by id
/// DELETE /categorias/{id}
pub async fn delete_categoria(
    service: web::Data<Arc<CategoriaService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    if !service.exists_by_id(id).await? {
        return Ok(HttpResponse::NotFound().finish());
    }

    service.delete_by_id(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure categoría routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categorias")
            .route("", web::get().to(list_categorias))
            .route("", web::post().to(create_categoria))
            .route("/{id}", web::get().to(get_categoria))
            .route("/{id}", web::put().to(update_categoria))
            .route("/{id}", web::delete().to(delete_categoria)),
    );
}
