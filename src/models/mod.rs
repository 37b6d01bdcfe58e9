//! Modelos del dominio

pub mod adicional;
pub mod cliente;
pub mod lavada;
pub mod lavador;
pub mod metodo_pago;
pub mod tipo_lavado;
