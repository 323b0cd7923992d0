use actix_web::web;

use crate::inventory::state::InventoryState;

/// `GET /api/ativos` — every registered asset, in registration order.
pub async fn process(state: web::Data<InventoryState>) -> impl actix_web::Responder {
    let ativos = state.ativos.read().await;
    actix_web::HttpResponse::Ok().json(&*ativos)
}
