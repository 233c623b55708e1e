use axum::extract::FromRef;

use crate::directory_store::DirectoryStore;
use std::sync::Arc;

use super::ServerConfig;

pub type GuardedDirectoryStore = Arc<dyn DirectoryStore>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub directory_store: GuardedDirectoryStore,
}

impl FromRef<ServerState> for GuardedDirectoryStore {
    fn from_ref(input: &ServerState) -> Self {
        input.directory_store.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
