//! DTOs del catálogo

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CrearTipoLavadoRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    #[validate(range(min = 0, message = "El precio no puede ser negativo"))]
    pub precio: i64,
    #[serde(default)]
    pub es_base: bool,
    #[serde(default)]
    pub adicionales_incluidos: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarTipoLavadoRequest {
    pub nombre: Option<String>,
    #[validate(range(min = 0, message = "El precio no puede ser negativo"))]
    pub precio: Option<i64>,
    pub es_base: Option<bool>,
    pub adicionales_incluidos: Option<Vec<Uuid>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CrearAdicionalRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    #[validate(range(min = 0, message = "El precio no puede ser negativo"))]
    pub precio: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarAdicionalRequest {
    pub nombre: Option<String>,
    #[validate(range(min = 0, message = "El precio no puede ser negativo"))]
    pub precio: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CrearMetodoPagoRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarMetodoPagoRequest {
    #[validate(length(min = 1, message = "El nombre no puede quedar vacío"))]
    pub nombre: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actualizar_metodo_pago_rechaza_nombre_vacio() {
        let request = ActualizarMetodoPagoRequest {
            nombre: String::new(),
        };
        assert!(request.validate().is_err());

        let request = ActualizarMetodoPagoRequest {
            nombre: "Transferencia".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
