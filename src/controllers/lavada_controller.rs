//! Orquestación de las lavadas
//!
//! Aquí viven los manejadores del piso de lavado: cambio de estado con
//! sus cronómetros, selección de tipo y adicionales con recálculo de
//! valor, asignaciones y edición de pagos. Cada mutación persiste primero
//! y solo devuelve el registro ya confirmado por la base de datos; no hay
//! actualización optimista ni reintentos.

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::lavada_dto::{
    ActualizarPagosRequest, CrearLavadaRequest, FiltrosLavada, LavadaResponse,
};
use crate::dto::ApiResponse;
use crate::models::cliente::Cliente;
use crate::models::lavada::{AdicionalSnapshot, EstadoLavada, Lavada, Pago};
use crate::repositories::catalogo_repository::CatalogoRepository;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::lavada_repository::LavadaRepository;
use crate::repositories::lavador_repository::LavadorRepository;
use crate::services::completion_service::verificar_entrega;
use crate::services::lifecycle_service::aplicar_transicion;
use crate::services::pricing_service::{agregar_adicionales_incluidos, valor_para_cliente};
use crate::utils::errors::AppError;

pub struct LavadaController {
    repo: LavadaRepository,
    catalogo: CatalogoRepository,
    clientes: ClienteRepository,
    lavadores: LavadorRepository,
    tolerancia: i64,
}

impl LavadaController {
    pub fn new(pool: PgPool, tolerancia: i64) -> Self {
        Self {
            repo: LavadaRepository::new(pool.clone()),
            catalogo: CatalogoRepository::new(pool.clone()),
            clientes: ClienteRepository::new(pool.clone()),
            lavadores: LavadorRepository::new(pool),
            tolerancia,
        }
    }

    fn respuesta(&self, lavada: Lavada) -> LavadaResponse {
        LavadaResponse::from_lavada(lavada, self.tolerancia)
    }

    /// Cliente de la lavada, si tiene uno asignado
    async fn cliente_de(&self, lavada: &Lavada) -> Result<Option<Cliente>, AppError> {
        match lavada.cliente_id {
            Some(id) => self.clientes.find_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn buscar(&self, id: Uuid) -> Result<Lavada, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lavada no encontrada".to_string()))
    }

    pub async fn crear(
        &self,
        request: CrearLavadaRequest,
    ) -> Result<ApiResponse<LavadaResponse>, AppError> {
        // Todas las referencias se verifican antes del INSERT: un id
        // inexistente responde 404 sin dejar fila creada.
        let cliente = match request.cliente_id {
            Some(id) => self.clientes.find_by_id(id).await?,
            None => None,
        };
        verificar_referencia(request.cliente_id, cliente.as_ref(), "Cliente")?;

        let tipo = match request.tipo_lavado_id {
            Some(id) => self.catalogo.find_tipo(id).await?,
            None => None,
        };
        verificar_referencia(request.tipo_lavado_id, tipo.as_ref(), "Tipo de lavado")?;

        let lavador = match request.lavador_id {
            Some(id) => self.lavadores.find_by_id(id).await?,
            None => None,
        };
        verificar_referencia(request.lavador_id, lavador.as_ref(), "Lavador")?;

        let mut lavada = self.repo.create(request.cliente_id, Utc::now()).await?;
        info!("🏍️ Lavada {} creada en EN ESPERA", lavada.id);

        // Tipo y lavador iniciales son opcionales; se aplican por los
        // mismos caminos que las ediciones posteriores.
        if tipo.is_some() {
            lavada = self.aplicar_tipo(lavada, request.tipo_lavado_id).await?;
        }
        if lavador.is_some() {
            lavada = self.aplicar_lavador(lavada.id, request.lavador_id).await?;
        }

        Ok(ApiResponse::success_with_message(
            self.respuesta(lavada),
            "Lavada creada exitosamente".to_string(),
        ))
    }

    pub async fn obtener(&self, id: Uuid) -> Result<LavadaResponse, AppError> {
        Ok(self.respuesta(self.buscar(id).await?))
    }

    pub async fn listar(&self, filtros: FiltrosLavada) -> Result<Vec<LavadaResponse>, AppError> {
        let estado = match filtros.estado.as_deref() {
            Some(s) => Some(
                EstadoLavada::parse(s)
                    .ok_or_else(|| AppError::BadRequest(format!("Estado inválido: '{}'", s)))?,
            ),
            None => None,
        };

        let lavadas = self.repo.list(filtros.fecha, estado).await?;
        Ok(lavadas.into_iter().map(|l| self.respuesta(l)).collect())
    }

    /// Transición del ciclo de vida. La entrada a ENTREGADO pasa por la
    /// verificación de entrega; los demás estados se alcanzan libremente.
    pub async fn cambiar_estado(
        &self,
        id: Uuid,
        destino: EstadoLavada,
    ) -> Result<LavadaResponse, AppError> {
        let lavada = self.buscar(id).await?;

        if destino == EstadoLavada::Entregado && lavada.estado != EstadoLavada::Entregado {
            let verificacion = verificar_entrega(&lavada, self.tolerancia);
            if !verificacion.permitido {
                info!(
                    "🚫 Entrega bloqueada para lavada {}: tipo={} lavador={} pagos={}",
                    id,
                    verificacion.falta_tipo,
                    verificacion.falta_lavador,
                    verificacion.pagos_incompletos
                );
                return Err(AppError::EntregaBloqueada(verificacion));
            }
        }

        match aplicar_transicion(&lavada, destino, Utc::now()) {
            // Mismo estado: no se re-valida ni se re-transiciona
            None => Ok(self.respuesta(lavada)),
            Some(cambio) => {
                let actualizada = self.repo.update_estado(id, &cambio).await?;
                info!(
                    "🔄 Lavada {} pasó a {}",
                    id,
                    actualizada.estado.as_str()
                );
                Ok(self.respuesta(actualizada))
            }
        }
    }

    pub async fn cambiar_tipo_lavado(
        &self,
        id: Uuid,
        tipo_lavado_id: Option<Uuid>,
    ) -> Result<LavadaResponse, AppError> {
        let lavada = self.buscar(id).await?;
        let actualizada = self.aplicar_tipo(lavada, tipo_lavado_id).await?;
        Ok(self.respuesta(actualizada))
    }

    async fn aplicar_tipo(
        &self,
        lavada: Lavada,
        tipo_lavado_id: Option<Uuid>,
    ) -> Result<Lavada, AppError> {
        let tipo = match tipo_lavado_id {
            Some(tipo_id) => Some(
                self.catalogo
                    .find_tipo(tipo_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Tipo de lavado no encontrado".to_string()))?,
            ),
            None => None,
        };

        // Al elegir un paquete se agregan los adicionales incluidos que
        // falten, como snapshots con el precio vigente del catálogo.
        let adicionales = match &tipo {
            Some(t) => {
                let catalogo = self.catalogo.list_adicionales().await?;
                agregar_adicionales_incluidos(t, &lavada.adicionales, &catalogo)
            }
            None => lavada.adicionales.clone(),
        };

        let cliente = self.cliente_de(&lavada).await?;
        let valor = valor_para_cliente(
            cliente.as_ref(),
            tipo.as_ref(),
            &adicionales,
            Utc::now().date_naive(),
        );

        self.repo
            .update_tipo(lavada.id, tipo.map(|t| t.id), &adicionales, valor)
            .await
    }

    /// Agrega el adicional si no está, lo quita si ya estaba. El valor se
    /// recalcula por el camino que respeta la membresía.
    pub async fn toggle_adicional(
        &self,
        id: Uuid,
        adicional_id: Uuid,
    ) -> Result<LavadaResponse, AppError> {
        let lavada = self.buscar(id).await?;

        let mut adicionales: Vec<AdicionalSnapshot> = lavada.adicionales.clone();
        if lavada.tiene_adicional(adicional_id) {
            adicionales.retain(|a| a.id != adicional_id);
        } else {
            let adicional = self
                .catalogo
                .find_adicional(adicional_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Adicional no encontrado".to_string()))?;
            adicionales.push(AdicionalSnapshot {
                id: adicional.id,
                nombre: adicional.nombre,
                precio: adicional.precio,
            });
        }

        let tipo = match lavada.tipo_lavado_id {
            Some(tipo_id) => self.catalogo.find_tipo(tipo_id).await?,
            None => None,
        };
        let cliente = self.cliente_de(&lavada).await?;
        let valor = valor_para_cliente(
            cliente.as_ref(),
            tipo.as_ref(),
            &adicionales,
            Utc::now().date_naive(),
        );

        let actualizada = self.repo.update_adicionales(id, &adicionales, valor).await?;
        Ok(self.respuesta(actualizada))
    }

    pub async fn asignar_lavador(
        &self,
        id: Uuid,
        lavador_id: Option<Uuid>,
    ) -> Result<LavadaResponse, AppError> {
        self.buscar(id).await?;
        let actualizada = self.aplicar_lavador(id, lavador_id).await?;
        Ok(self.respuesta(actualizada))
    }

    async fn aplicar_lavador(
        &self,
        id: Uuid,
        lavador_id: Option<Uuid>,
    ) -> Result<Lavada, AppError> {
        if let Some(lavador_id) = lavador_id {
            if self.lavadores.find_by_id(lavador_id).await?.is_none() {
                return Err(AppError::NotFound("Lavador no encontrado".to_string()));
            }
        }
        self.repo.update_lavador(id, lavador_id).await
    }

    /// Cambia el cliente y recalcula el valor: asignar un miembro activo
    /// deja la lavada en 0, quitarlo vuelve a cobrar el catálogo.
    pub async fn asignar_cliente(
        &self,
        id: Uuid,
        cliente_id: Option<Uuid>,
    ) -> Result<LavadaResponse, AppError> {
        let lavada = self.buscar(id).await?;

        let cliente = match cliente_id {
            Some(cid) => Some(
                self.clientes
                    .find_by_id(cid)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?,
            ),
            None => None,
        };

        let tipo = match lavada.tipo_lavado_id {
            Some(tipo_id) => self.catalogo.find_tipo(tipo_id).await?,
            None => None,
        };
        let valor = valor_para_cliente(
            cliente.as_ref(),
            tipo.as_ref(),
            &lavada.adicionales,
            Utc::now().date_naive(),
        );

        let actualizada = self.repo.update_cliente(id, cliente_id, valor).await?;
        Ok(self.respuesta(actualizada))
    }

    /// Reemplaza el arreglo de pagos completo y devuelve la lavada con la
    /// conciliación recalculada.
    pub async fn actualizar_pagos(
        &self,
        id: Uuid,
        request: ActualizarPagosRequest,
    ) -> Result<LavadaResponse, AppError> {
        self.buscar(id).await?;

        let mut pagos: Vec<Pago> = Vec::with_capacity(request.pagos.len());
        for entrada in request.pagos {
            if entrada.valor < 0.0 {
                return Err(AppError::BadRequest(
                    "El valor de un abono no puede ser negativo".to_string(),
                ));
            }
            let mut pago: Pago = entrada.into();
            // El nombre del método se denormaliza dentro del abono
            if pago.nombre.is_none() {
                if let Some(metodo_id) = pago.metodo_pago_id {
                    pago.nombre = self
                        .catalogo
                        .find_metodo_pago(metodo_id)
                        .await?
                        .map(|m| m.nombre);
                }
            }
            pagos.push(pago);
        }

        let actualizada = self.repo.update_pagos(id, &pagos).await?;
        Ok(self.respuesta(actualizada))
    }

    pub async fn eliminar(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        info!("🗑️ Lavada {} eliminada", id);
        Ok(())
    }
}

/// Falla con 404 si se pidió una referencia que la base de datos no tiene
fn verificar_referencia<T>(
    solicitado: Option<Uuid>,
    encontrado: Option<&T>,
    nombre: &str,
) -> Result<(), AppError> {
    if solicitado.is_some() && encontrado.is_none() {
        return Err(AppError::NotFound(format!("{nombre} no encontrado")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referencia_inexistente_es_not_found() {
        let resultado = verificar_referencia::<()>(Some(Uuid::new_v4()), None, "Tipo de lavado");
        assert!(matches!(resultado, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_referencia_encontrada_pasa() {
        let tipo = ();
        assert!(verificar_referencia(Some(Uuid::new_v4()), Some(&tipo), "Tipo de lavado").is_ok());
    }

    #[test]
    fn test_referencia_no_solicitada_pasa() {
        assert!(verificar_referencia::<()>(None, None, "Lavador").is_ok());
    }
}
