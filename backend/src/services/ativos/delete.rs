use actix_web::web;

use crate::inventory::state::InventoryState;

/// `DELETE /api/ativos/{ativo_id}` — removes the asset, or `404`.
pub async fn process(
    state: web::Data<InventoryState>,
    ativo_id: web::Path<u32>,
) -> impl actix_web::Responder {
    let mut ativos = state.ativos.write().await;
    match ativos.iter().position(|a| a.id == *ativo_id) {
        Some(idx) => {
            ativos.remove(idx);
            actix_web::HttpResponse::Ok()
                .json(serde_json::json!({ "detail": "Ativo removido com sucesso" }))
        }
        None => actix_web::HttpResponse::NotFound().body("Ativo não encontrado"),
    }
}
