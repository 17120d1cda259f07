//! Query keys and the response cache behind them.
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::{Display, EnumString};

use client_api::models::WishStatus;

use crate::service::ServiceError;

/// Identifies one cached read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Profile,
    /// Home page preview: the first few wishes.
    RecentWishes,
    Wishes {
        status: Option<WishStatus>,
        search: Option<String>,
    },
    Wish(i64),
    Groups,
    Group(i64),
    GroupWishes(i64),
}

impl QueryKey {
    pub fn family(&self) -> QueryFamily {
        match self {
            Self::Profile => QueryFamily::Profile,
            Self::RecentWishes => QueryFamily::RecentWishes,
            Self::Wishes { .. } => QueryFamily::Wishes,
            Self::Wish(_) => QueryFamily::Wish,
            Self::Groups => QueryFamily::Groups,
            Self::Group(_) => QueryFamily::Group,
            Self::GroupWishes(_) => QueryFamily::GroupWishes,
        }
    }
}

/// Group of keys invalidated together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum QueryFamily {
    Profile,
    RecentWishes,
    Wishes,
    Wish,
    Groups,
    Group,
    GroupWishes,
}

/// Decoded responses stored as JSON values.
///
/// Entries live until invalidated; there is no expiry. A failed load leaves
/// the key empty so the next read tries again.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or run `loader` and store its result.
    pub async fn fetch_with<T, F, Fut>(&self, key: QueryKey, loader: F) -> Result<T, ServiceError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ServiceError>>,
    {
        let cached = self.entries().get(&key).cloned();
        if let Some(value) = cached {
            match serde_json::from_value(value) {
                Ok(data) => {
                    tracing::debug!("query cache hit: {:?}", key);
                    return Ok(data);
                }
                Err(e) => {
                    tracing::warn!("discarding cached {:?}: {}", key, e);
                    self.invalidate_key(&key);
                }
            }
        }

        tracing::debug!("query cache miss: {:?}", key);
        let data = loader().await?;

        match serde_json::to_value(&data) {
            Ok(value) => {
                self.entries().insert(key, value);
            }
            Err(e) => tracing::warn!("not caching {:?}: {}", key, e),
        }

        Ok(data)
    }

    /// Drop every entry of `family`.
    pub fn invalidate(&self, family: QueryFamily) {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|key, _| key.family() != family);
        tracing::debug!(
            "invalidated {} ({} entries)",
            family,
            before - entries.len()
        );
    }

    pub fn invalidate_key(&self, key: &QueryKey) {
        self.entries().remove(key);
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, Value>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use client_api::{ApiError, Method};

    use super::*;

    fn unauthorized() -> ServiceError {
        ServiceError::Api(ApiError::Unauthorized {
            method: Method::GET,
            path: "/api/user/profile/".to_string(),
        })
    }

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let cache = QueryCache::new();
        let loads = AtomicUsize::new(0);

        for _ in 0..2 {
            let value: Vec<i64> = cache
                .fetch_with(QueryKey::Groups, || async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1, 2, 3])
                })
                .await
                .unwrap();
            assert_eq!(value, vec![1, 2, 3]);
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(cache.contains(&QueryKey::Groups));
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let cache = QueryCache::new();

        let err = cache
            .fetch_with::<String, _, _>(QueryKey::Profile, || async { Err(unauthorized()) })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Api(ref e) if e.is_unauthorized()));
        assert!(cache.is_empty());

        let name: String = cache
            .fetch_with(QueryKey::Profile, || async { Ok("Anna".to_string()) })
            .await
            .unwrap();
        assert_eq!(name, "Anna");
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_invalidate_family() {
        let cache = QueryCache::new();
        let keys = [
            QueryKey::Wishes {
                status: Some(WishStatus::Active),
                search: None,
            },
            QueryKey::Wishes {
                status: Some(WishStatus::Active),
                search: Some("bike".into()),
            },
            QueryKey::Wish(4),
            QueryKey::RecentWishes,
        ];
        for key in keys.iter().cloned() {
            cache.fetch_with(key, || async { Ok(0u8) }).await.unwrap();
        }

        cache.invalidate(QueryFamily::Wishes);

        assert!(!cache.contains(&keys[0]));
        assert!(!cache.contains(&keys[1]));
        assert!(cache.contains(&QueryKey::Wish(4)));
        assert!(cache.contains(&QueryKey::RecentWishes));

        cache.invalidate_key(&QueryKey::Wish(4));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_mismatched_entry_is_reloaded() {
        let cache = QueryCache::new();
        cache
            .fetch_with(QueryKey::Group(1), || async { Ok("text".to_string()) })
            .await
            .unwrap();

        let number: u32 = cache
            .fetch_with(QueryKey::Group(1), || async { Ok(7) })
            .await
            .unwrap();
        assert_eq!(number, 7);
    }

    #[test]
    fn test_family_names() {
        assert_eq!(QueryFamily::RecentWishes.to_string(), "recent-wishes");
        assert_eq!(QueryKey::GroupWishes(2).family().to_string(), "group-wishes");
        assert_eq!("wish".parse::<QueryFamily>().unwrap(), QueryFamily::Wish);
    }
}
