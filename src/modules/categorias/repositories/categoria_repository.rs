use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{Page, PageRequest, Result};
use crate::modules::categorias::models::Categoria;

/// Persistence contract for categorías.
///
/// `save` is an upsert keyed on the entity id: a categoría without an id is
/// inserted and returned with the store-assigned id, one with an id is
/// updated in place. Callers are responsible for pre-checking existence
/// before `delete_by_id`.
#[async_trait]
pub trait CategoriaRepository: Send + Sync {
    async fn find_all(&self, request: PageRequest) -> Result<Page<Categoria>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Categoria>>;

    async fn save(&self, categoria: Categoria) -> Result<Categoria>;

    async fn delete_by_id(&self, id: i64) -> Result<()>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;
}

/// MySQL-backed repository for categorías
pub struct MySqlCategoriaRepository {
    pool: MySqlPool,
}

impl MySqlCategoriaRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoriaRepository for MySqlCategoriaRepository {
    async fn find_all(&self, request: PageRequest) -> Result<Page<Categoria>> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM categorias
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let content = sqlx::query_as::<_, Categoria>(
            r#"
            SELECT id, nombre, descripcion
            FROM categorias
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(request.size())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(content, request, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Categoria>> {
        let categoria = sqlx::query_as::<_, Categoria>(
            r#"
            SELECT id, nombre, descripcion
            FROM categorias
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(categoria)
    }

    async fn save(&self, categoria: Categoria) -> Result<Categoria> {
        match categoria.id {
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO categorias (nombre, descripcion)
                    VALUES (?, ?)
                    "#,
                )
                .bind(&categoria.nombre)
                .bind(&categoria.descripcion)
                .execute(&self.pool)
                .await?;

                Ok(Categoria {
                    id: Some(result.last_insert_id() as i64),
                    ..categoria
                })
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE categorias
                    SET nombre = ?, descripcion = ?
                    WHERE id = ?
                    "#,
                )
                .bind(&categoria.nombre)
                .bind(&categoria.descripcion)
                .bind(id)
                .execute(&self.pool)
                .await?;

                Ok(categoria)
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM categorias
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM categorias
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}
