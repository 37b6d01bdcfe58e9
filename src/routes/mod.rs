//! Routers de la API

pub mod catalogo_routes;
pub mod cliente_routes;
pub mod lavada_routes;
pub mod lavador_routes;
