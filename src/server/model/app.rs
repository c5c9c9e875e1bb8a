use sea_orm::DatabaseConnection;

/// State shared by every HTTP handler; the connection is the store's storage handle.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
