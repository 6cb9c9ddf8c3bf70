use infra::db::Db;

/// Per-request handle to the store, injected into every GraphQL context.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}
