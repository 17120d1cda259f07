//! Page-level reads and mutations over the API client.
use std::sync::Arc;

use thiserror::Error;

use client_api::models::{
    Group, GroupMember, GroupWithMembers, UserProfile, Wish, WishListResponse, WishQuery,
    WishStatus,
};
use client_api::{ApiClient, ApiError};

use crate::form::{GroupForm, ValidationError, WishForm};
use crate::query::{QueryCache, QueryFamily, QueryKey};

/// Number of wishes previewed on the home page.
pub const RECENT_WISHES_LIMIT: u32 = 3;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl ServiceError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_unauthorized())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Reads go through the shared [`QueryCache`]; successful mutations invalidate
/// the keys whose pages display the changed data.
#[derive(Clone)]
pub struct WishlistService {
    api: ApiClient,
    cache: Arc<QueryCache>,
}

impl WishlistService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cache: Arc::new(QueryCache::new()),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub async fn profile(&self) -> Result<UserProfile> {
        self.cache
            .fetch_with(QueryKey::Profile, || async {
                Ok::<_, ServiceError>(self.api.users().get_profile().await?.data()?)
            })
            .await
    }

    /// First page of the user's wishes, [`RECENT_WISHES_LIMIT`] entries.
    pub async fn recent_wishes(&self) -> Result<WishListResponse> {
        let query = WishQuery::new().page(1).page_size(RECENT_WISHES_LIMIT);
        self.cache
            .fetch_with(QueryKey::RecentWishes, || async {
                Ok::<_, ServiceError>(self.api.wishes().list(&query).await?.data()?)
            })
            .await
    }

    pub async fn wishes(
        &self,
        status: Option<WishStatus>,
        search: &str,
    ) -> Result<WishListResponse> {
        let mut query = WishQuery::new().search(search);
        query.status = status;

        let key = QueryKey::Wishes {
            status,
            search: query.search.clone(),
        };
        self.cache
            .fetch_with(key, || async {
                Ok::<_, ServiceError>(self.api.wishes().list(&query).await?.data()?)
            })
            .await
    }

    pub async fn wish(&self, wish_id: i64) -> Result<Wish> {
        self.cache
            .fetch_with(QueryKey::Wish(wish_id), || async {
                Ok::<_, ServiceError>(self.api.wishes().get(wish_id).await?.data()?)
            })
            .await
    }

    pub async fn groups(&self) -> Result<Vec<GroupWithMembers>> {
        self.cache
            .fetch_with(QueryKey::Groups, || async {
                Ok::<_, ServiceError>(self.api.groups().list().await?.data()?)
            })
            .await
    }

    pub async fn group(&self, group_id: i64) -> Result<Group> {
        self.cache
            .fetch_with(QueryKey::Group(group_id), || async {
                Ok::<_, ServiceError>(self.api.groups().get(group_id).await?.data()?)
            })
            .await
    }

    pub async fn group_wishes(&self, group_id: i64) -> Result<Vec<Wish>> {
        self.cache
            .fetch_with(QueryKey::GroupWishes(group_id), || async {
                Ok::<_, ServiceError>(self.api.groups().wishes(group_id).await?.data()?)
            })
            .await
    }

    /// Validate and submit a new wish. Nothing is sent if validation fails.
    pub async fn create_wish(&self, form: &WishForm) -> Result<Wish> {
        let body = form.validate()?;
        let wish = self.api.wishes().create(&body).await?.data()?;

        tracing::info!("Wish created: id={} title={}", wish.id, wish.title);
        self.cache.invalidate(QueryFamily::Wishes);
        self.cache.invalidate(QueryFamily::Profile);
        Ok(wish)
    }

    pub async fn complete_wish(&self, wish_id: i64) -> Result<Wish> {
        let wish = self.api.wishes().complete(wish_id).await?.data()?;

        tracing::info!("Wish completed: id={}", wish_id);
        self.cache.invalidate_key(&QueryKey::Wish(wish_id));
        self.cache.invalidate(QueryFamily::Wishes);
        Ok(wish)
    }

    pub async fn delete_wish(&self, wish_id: i64) -> Result<()> {
        self.api.wishes().delete(wish_id).await?;

        tracing::info!("Wish deleted: id={}", wish_id);
        self.cache.invalidate(QueryFamily::Wishes);
        Ok(())
    }

    pub async fn create_group(&self, form: &GroupForm) -> Result<Group> {
        let body = form.validate()?;
        let group = self.api.groups().create(&body).await?.data()?;

        tracing::info!("Group created: id={} name={}", group.id, group.name);
        self.cache.invalidate(QueryFamily::Groups);
        Ok(group)
    }

    pub async fn join_group(&self, group_id: i64, invite_code: &str) -> Result<GroupMember> {
        let invite_code = invite_code.trim();
        if invite_code.is_empty() {
            return Err(ValidationError::Required("invite_code").into());
        }

        let member = self.api.groups().join(group_id, invite_code).await?.data()?;

        tracing::info!("Joined group {} as {}", group_id, member.role);
        self.cache.invalidate(QueryFamily::Groups);
        Ok(member)
    }
}
