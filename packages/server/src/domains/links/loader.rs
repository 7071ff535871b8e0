use dataloader::BatchFn;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::error;

use crate::common::LinkId;
use crate::domains::links::models::{Link, Vote};
use crate::server::graphql::loaders::LoadResult;

/// Batches Link lookups by ID.
pub struct LinkLoader {
    pub db: Arc<PgPool>,
}

impl LinkLoader {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }
}

impl BatchFn<LinkId, LoadResult<Option<Link>>> for LinkLoader {
    fn load(
        &mut self,
        keys: &[LinkId],
    ) -> impl std::future::Future<Output = HashMap<LinkId, LoadResult<Option<Link>>>> {
        let db = self.db.clone();
        let keys = keys.to_vec();
        async move {
            match Link::find_by_ids(&keys, db.as_ref()).await {
                Ok(links) => {
                    let mut map: HashMap<LinkId, LoadResult<Option<Link>>> =
                        links.into_iter().map(|l| (l.id, Ok(Some(l)))).collect();
                    for id in &keys {
                        map.entry(*id).or_insert(Ok(None));
                    }
                    map
                }
                Err(e) => {
                    error!(error = %e, "Failed to batch-load links");
                    let e = Arc::new(e);
                    keys.iter().map(|id| (*id, Err(e.clone()))).collect()
                }
            }
        }
    }
}

/// Batches vote lookups by link ID.
pub struct LinkVotesLoader {
    pub db: Arc<PgPool>,
}

impl LinkVotesLoader {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }
}

impl BatchFn<LinkId, LoadResult<Vec<Vote>>> for LinkVotesLoader {
    fn load(
        &mut self,
        keys: &[LinkId],
    ) -> impl std::future::Future<Output = HashMap<LinkId, LoadResult<Vec<Vote>>>> {
        let db = self.db.clone();
        let keys = keys.to_vec();
        async move {
            let fetched = match Vote::find_for_link_ids(&keys, db.as_ref()).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    error!(error = %e, "Failed to batch-load votes");
                    let e = Arc::new(e);
                    return keys.iter().map(|id| (*id, Err(e.clone()))).collect();
                }
            };

            let mut votes_by_link: HashMap<LinkId, Vec<Vote>> = HashMap::new();
            for vote in fetched {
                votes_by_link.entry(vote.link_id).or_default().push(vote);
            }
            // Every requested key gets an entry, empty when the link has no votes
            keys.iter()
                .map(|id| (*id, Ok(votes_by_link.remove(id).unwrap_or_default())))
                .collect()
        }
    }
}
