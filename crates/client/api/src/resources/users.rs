use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{User, UserProfile, UserUpdate, Wish};
use crate::response::ApiResponse;

/// `/api/user/*` endpoints.
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Profile of the user identified by the init-data token.
    pub async fn get_profile(&self) -> Result<ApiResponse<UserProfile>> {
        self.client.get("/api/user/profile/").await
    }

    pub async fn update_profile(&self, update: &UserUpdate) -> Result<ApiResponse<User>> {
        self.client.put("/api/user/profile/", update).await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<ApiResponse<User>> {
        self.client.get(&format!("/api/user/{}/", user_id)).await
    }

    /// Public, active wishes of another user.
    pub async fn get_user_wishes(&self, user_id: i64) -> Result<ApiResponse<Vec<Wish>>> {
        self.client
            .get(&format!("/api/user/{}/wishes/", user_id))
            .await
    }
}
