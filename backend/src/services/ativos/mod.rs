//! # Asset Inventory Service Module
//!
//! CRUD endpoints for the IT asset inventory (`Ativo` records). The
//! inventory lives in the shared [`InventoryState`](crate::inventory::state::InventoryState)
//! and is scoped to the server's lifetime.
//!
//! ## Sub-modules:
//! - `list`: Returns every asset.
//! - `create`: Registers a new asset, rejecting duplicate ids.
//! - `get`: Returns a single asset by id.
//! - `update`: Replaces an asset by id.
//! - `delete`: Removes an asset by id.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all inventory API endpoints.
const API_PATH: &str = "/api/ativos";

/// Configures and returns the Actix `Scope` for the inventory routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{ativo_id}", get().to(get::process))
        .route("/{ativo_id}", put().to(update::process))
        .route("/{ativo_id}", delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::state::InventoryState;
    use actix_web::{test, web, App};
    use common::model::ativo::Ativo;

    fn ativo(id: u32) -> Ativo {
        Ativo {
            id,
            localidade: "São Luís".to_string(),
            numero_serie: format!("SN-{}", id),
            patrimonio: format!("PAT-{}", id),
            status: "ativo".to_string(),
            data: None,
            no_posto: None,
            fabricante: None,
            marca_modelo: None,
            ramal_servidor: None,
            ip: None,
            observacao: None,
            termo_assinado: false,
        }
    }

    macro_rules! service {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_then_fetch_round_trips() {
        let app = service!(InventoryState::new());

        let req = test::TestRequest::post()
            .uri("/api/ativos")
            .set_json(ativo(1))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::get().uri("/api/ativos/1").to_request();
        let fetched: Ativo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.numero_serie, "SN-1");
    }

    #[actix_web::test]
    async fn duplicate_ids_are_rejected() {
        let app = service!(InventoryState::new());

        for expected_ok in [true, false] {
            let req = test::TestRequest::post()
                .uri("/api/ativos")
                .set_json(ativo(7))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().is_success(), expected_ok);
        }
    }

    #[actix_web::test]
    async fn missing_asset_is_not_found() {
        let app = service!(InventoryState::new());

        let req = test::TestRequest::get().uri("/api/ativos/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_removes_the_asset() {
        let state = InventoryState::new();
        state.ativos.write().await.push(ativo(3));
        let app = service!(state.clone());

        let req = test::TestRequest::delete().uri("/api/ativos/3").to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
        assert!(state.ativos.read().await.is_empty());
    }
}
