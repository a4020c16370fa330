pub mod categoria_repository;

pub use categoria_repository::{CategoriaRepository, MySqlCategoriaRepository};
