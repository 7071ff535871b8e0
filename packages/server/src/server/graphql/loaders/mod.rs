use dataloader::non_cached::Loader;
use sqlx::PgPool;
use std::sync::Arc;

use crate::common::{LinkId, UserId};
use crate::domains::links::loader::{LinkLoader, LinkVotesLoader};
use crate::domains::links::models::{Link, Vote};
use crate::domains::users::loader::UserLoader;
use crate::domains::users::models::User;

/// Value handed out by a loader. A failed batch hands the same error to
/// every key in it.
pub type LoadResult<T> = Result<T, Arc<anyhow::Error>>;

pub struct DataLoaders {
    pub user: Loader<UserId, LoadResult<Option<User>>, UserLoader>,
    pub link: Loader<LinkId, LoadResult<Option<Link>>, LinkLoader>,
    pub link_votes: Loader<LinkId, LoadResult<Vec<Vote>>, LinkVotesLoader>,
}

impl DataLoaders {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self {
            user: Loader::new(UserLoader::new(db.clone())),
            link: Loader::new(LinkLoader::new(db.clone())),
            link_votes: Loader::new(LinkVotesLoader::new(db)),
        }
    }
}
