use actix_web::web;
use common::model::ativo::Ativo;

use crate::inventory::state::InventoryState;

/// `POST /api/ativos` — registers a new asset. Ids are chosen by the caller
/// and must be unique; a duplicate is rejected with `400`.
pub async fn process(
    state: web::Data<InventoryState>,
    payload: web::Json<Ativo>,
) -> impl actix_web::Responder {
    let mut ativos = state.ativos.write().await;
    if ativos.iter().any(|a| a.id == payload.id) {
        return actix_web::HttpResponse::BadRequest().body("Já existe um ativo com esse ID.");
    }
    let ativo = payload.into_inner();
    ativos.push(ativo.clone());
    actix_web::HttpResponse::Ok().json(ativo)
}
