use actix_web::web;
use common::model::ativo::Ativo;

use crate::inventory::state::InventoryState;

/// `PUT /api/ativos/{ativo_id}` — replaces the asset wholesale, keeping its
/// position in the list.
pub async fn process(
    state: web::Data<InventoryState>,
    ativo_id: web::Path<u32>,
    payload: web::Json<Ativo>,
) -> impl actix_web::Responder {
    let mut ativos = state.ativos.write().await;
    match ativos.iter_mut().find(|a| a.id == *ativo_id) {
        Some(slot) => {
            *slot = payload.into_inner();
            actix_web::HttpResponse::Ok().json(&*slot)
        }
        None => actix_web::HttpResponse::NotFound().body("Ativo não encontrado"),
    }
}
