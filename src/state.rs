use std::sync::Arc;

use crate::db::DbPool;
use crate::features::media::ObjectStorage;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub storage: Arc<dyn ObjectStorage>,
    pub bcrypt_cost: u32,
}
