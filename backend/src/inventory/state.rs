//! Shared state for the asset-inventory API.
//!
//! The inventory is an in-memory list, intentionally not durable: it backs
//! the equipment screens during a session and is rebuilt on restart. The
//! `Arc<RwLock<…>>` allows concurrent reads from the list endpoint while
//! mutations take the write lock.

use common::model::ativo::Ativo;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InventoryState {
    pub ativos: Arc<RwLock<Vec<Ativo>>>,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }
}
