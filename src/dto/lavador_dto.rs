//! DTOs de lavadores

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CrearLavadorRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    pub telefono: Option<String>,
    #[validate(range(min = 0, max = 100, message = "El porcentaje debe estar entre 0 y 100"))]
    pub porcentaje_pago: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarLavadorRequest {
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    #[validate(range(min = 0, max = 100, message = "El porcentaje debe estar entre 0 y 100"))]
    pub porcentaje_pago: Option<i32>,
    pub activo: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct FiltrosLavador {
    #[serde(default)]
    pub solo_activos: bool,
}

#[derive(Debug, Deserialize)]
pub struct VentanaResumenPago {
    pub desde: NaiveDate,
    pub hasta: NaiveDate,
}
