use dataloader::BatchFn;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::error;

use crate::common::UserId;
use crate::domains::users::models::User;
use crate::server::graphql::loaders::LoadResult;

/// Batches User lookups by ID.
pub struct UserLoader {
    pub db: Arc<PgPool>,
}

impl UserLoader {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }
}

impl BatchFn<UserId, LoadResult<Option<User>>> for UserLoader {
    fn load(
        &mut self,
        keys: &[UserId],
    ) -> impl std::future::Future<Output = HashMap<UserId, LoadResult<Option<User>>>> {
        let db = self.db.clone();
        let keys = keys.to_vec();
        async move {
            match User::find_by_ids(&keys, db.as_ref()).await {
                Ok(users) => {
                    let mut map: HashMap<UserId, LoadResult<Option<User>>> =
                        users.into_iter().map(|u| (u.id, Ok(Some(u)))).collect();
                    for id in &keys {
                        map.entry(*id).or_insert(Ok(None));
                    }
                    map
                }
                Err(e) => {
                    error!(error = %e, "Failed to batch-load users");
                    let e = Arc::new(e);
                    keys.iter().map(|id| (*id, Err(e.clone()))).collect()
                }
            }
        }
    }
}
