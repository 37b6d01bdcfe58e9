//! Reglas de negocio puras
//!
//! Los servicios no tocan la base de datos: reciben los modelos, calculan
//! y devuelven el resultado. La persistencia es responsabilidad de los
//! controllers a través de los repositorios.

pub mod completion_service;
pub mod lifecycle_service;
pub mod payroll_service;
pub mod pricing_service;
pub mod reconciliation_service;
