//! 共享状态

use medsuggest_database::DatabaseQueries;
use medsuggest_engine::SuggestionEngine;
use std::sync::Arc;

/// API状态，每个请求克隆一份
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<DatabaseQueries>,
    pub engine: SuggestionEngine<DatabaseQueries>,
}

impl ApiState {
    pub fn new(store: DatabaseQueries) -> Self {
        let store = Arc::new(store);
        Self {
            engine: SuggestionEngine::new(Arc::clone(&store)),
            store,
        }
    }
}
