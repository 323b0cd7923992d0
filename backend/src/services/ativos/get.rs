use actix_web::web;

use crate::inventory::state::InventoryState;

/// `GET /api/ativos/{ativo_id}` — a single asset, or `404`.
pub async fn process(
    state: web::Data<InventoryState>,
    ativo_id: web::Path<u32>,
) -> impl actix_web::Responder {
    let ativos = state.ativos.read().await;
    match ativos.iter().find(|a| a.id == *ativo_id) {
        Some(ativo) => actix_web::HttpResponse::Ok().json(ativo),
        None => actix_web::HttpResponse::NotFound().body("Ativo não encontrado"),
    }
}
