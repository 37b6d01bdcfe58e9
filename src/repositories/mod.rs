//! Repositorios de acceso a datos (PostgreSQL vía sqlx)

pub mod catalogo_repository;
pub mod cliente_repository;
pub mod lavada_repository;
pub mod lavador_repository;
