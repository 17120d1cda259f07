use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Wish, WishCreate, WishListResponse, WishQuery, WishUpdate};
use crate::response::ApiResponse;

/// `/api/wishes/*` endpoints.
pub struct WishesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> WishesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Current user's wishes; only the set query parameters are sent.
    pub async fn list(&self, query: &WishQuery) -> Result<ApiResponse<WishListResponse>> {
        self.client.get_with("/api/wishes/", query).await
    }

    pub async fn get(&self, wish_id: i64) -> Result<ApiResponse<Wish>> {
        self.client.get(&format!("/api/wishes/{}/", wish_id)).await
    }

    pub async fn create(&self, wish: &WishCreate) -> Result<ApiResponse<Wish>> {
        self.client.post("/api/wishes/", wish).await
    }

    pub async fn update(&self, wish_id: i64, update: &WishUpdate) -> Result<ApiResponse<Wish>> {
        self.client
            .put(&format!("/api/wishes/{}/", wish_id), update)
            .await
    }

    pub async fn delete(&self, wish_id: i64) -> Result<ApiResponse<()>> {
        self.client
            .delete(&format!("/api/wishes/{}/", wish_id))
            .await
    }

    /// Mark a wish as fulfilled.
    pub async fn complete(&self, wish_id: i64) -> Result<ApiResponse<Wish>> {
        self.client
            .patch(&format!("/api/wishes/{}/complete/", wish_id))
            .await
    }
}
