//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

use crate::services::reconciliation_service::TOLERANCIA_PAGO_DEFECTO;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Tolerancia en pesos para dar por cuadrados los pagos de una lavada
    pub tolerancia_pago: i64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            tolerancia_pago: env::var("TOLERANCIA_PAGO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(TOLERANCIA_PAGO_DEFECTO),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_de_prueba(environment: &str) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: environment.to_string(),
            port: 8080,
            host: "127.0.0.1".to_string(),
            cors_origins: vec!["http://localhost:5173".to_string()],
            tolerancia_pago: TOLERANCIA_PAGO_DEFECTO,
        }
    }

    #[test]
    fn test_is_development() {
        assert!(config_de_prueba("development").is_development());
        assert!(!config_de_prueba("production").is_development());
    }

    #[test]
    fn test_server_url() {
        assert_eq!(config_de_prueba("development").server_url(), "127.0.0.1:8080");
    }
}
