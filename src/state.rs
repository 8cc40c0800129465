use crate::auth::TokenService;
use crate::repository::{TaskRepository, UserRepository};
use std::sync::Arc;

/// Shared application state handed to every handler.
///
/// Handlers see only the repository traits and the token service; which
/// storage adapter backs them is decided at assembly time.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub tokens: TokenService,
}
