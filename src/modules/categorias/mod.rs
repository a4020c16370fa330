pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Categoria;
pub use repositories::{CategoriaRepository, MySqlCategoriaRepository};
pub use services::CategoriaService;
