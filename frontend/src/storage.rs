//! Browser-backed implementation of the record store.
//!
//! Terms live in `window.localStorage` under two keys: `"termos"` holds the
//! JSON-encoded record array, `"nextId"` the decimal counter for the next id
//! to allocate (read-increment-write). All storage access goes through this
//! module; no other code touches localStorage directly.

use common::model::term::TermRecord;
use common::workflow::{RecordStore, StoreError};
use wasm_bindgen::JsValue;

const RECORDS_KEY: &str = "termos";
const NEXT_ID_KEY: &str = "nextId";

pub struct LocalRecordStore;

fn js_err(e: JsValue) -> StoreError {
    StoreError(format!("{:?}", e))
}

fn storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError("janela do navegador indisponível".to_string()))?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| StoreError("localStorage indisponível".to_string()))
}

impl RecordStore for LocalRecordStore {
    fn load(&self) -> Result<Vec<TermRecord>, StoreError> {
        match storage()?.get_item(RECORDS_KEY).map_err(js_err)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| StoreError(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, records: &[TermRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records).map_err(|e| StoreError(e.to_string()))?;
        storage()?.set_item(RECORDS_KEY, &json).map_err(js_err)
    }

    fn next_id(&mut self) -> Result<u32, StoreError> {
        let storage = storage()?;
        let id = storage
            .get_item(NEXT_ID_KEY)
            .map_err(js_err)?
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);
        storage
            .set_item(NEXT_ID_KEY, &(id + 1).to_string())
            .map_err(js_err)?;
        Ok(id)
    }
}
