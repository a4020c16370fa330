use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

const MAX_NOMBRE_CHARS: usize = 100;
const MAX_DESCRIPCION_CHARS: usize = 500;

/// A catalog category.
///
/// `id` is assigned by the store on first insert. Clients may send one in a
/// create payload but it is discarded; on update the id always comes from the
/// request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Categoria {
    pub id: Option<i64>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

impl Categoria {
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
            descripcion: None,
        }
    }

    /// Field-presence and length checks applied before any save
    pub fn validate(&self) -> Result<()> {
        if self.nombre.trim().is_empty() {
            return Err(AppError::validation("nombre must not be blank"));
        }

        if self.nombre.chars().count() > MAX_NOMBRE_CHARS {
            return Err(AppError::validation(format!(
                "nombre must be at most {} characters",
                MAX_NOMBRE_CHARS
            )));
        }

        if let Some(descripcion) = &self.descripcion {
            if descripcion.chars().count() > MAX_DESCRIPCION_CHARS {
                return Err(AppError::validation(format!(
                    "descripcion must be at most {} characters",
                    MAX_DESCRIPCION_CHARS
                )));
            }
        }

        Ok(())
    }
}
