//! Controllers: orquestan servicios y repositorios por detrás de las rutas

pub mod catalogo_controller;
pub mod cliente_controller;
pub mod lavada_controller;
pub mod lavador_controller;
