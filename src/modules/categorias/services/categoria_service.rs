use std::sync::Arc;

use crate::core::{Page, PageRequest, Result};
use crate::modules::categorias::models::Categoria;
use crate::modules::categorias::repositories::CategoriaRepository;

/// Delegation layer between the HTTP handlers and the repository.
///
/// Keeps the controllers decoupled from the concrete store; every operation
/// forwards to the repository unchanged.
pub struct CategoriaService {
    repository: Arc<dyn CategoriaRepository>,
}

impl CategoriaService {
    pub fn new(repository: Arc<dyn CategoriaRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self, request: PageRequest) -> Result<Page<Categoria>> {
        self.repository.find_all(request).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Categoria>> {
        self.repository.find_by_id(id).await
    }

    pub async fn save(&self, categoria: Categoria) -> Result<Categoria> {
        self.repository.save(categoria).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool> {
        self.repository.exists_by_id(id).await
    }
}
