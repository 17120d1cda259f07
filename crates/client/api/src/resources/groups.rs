use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    Group, GroupCreate, GroupMember, GroupUpdate, GroupWithMembers, JoinGroupRequest, Wish,
};
use crate::response::ApiResponse;

/// `/api/groups/*` endpoints.
pub struct GroupsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> GroupsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<GroupWithMembers>>> {
        self.client.get("/api/groups/").await
    }

    pub async fn get(&self, group_id: i64) -> Result<ApiResponse<Group>> {
        self.client.get(&format!("/api/groups/{}/", group_id)).await
    }

    pub async fn create(&self, group: &GroupCreate) -> Result<ApiResponse<Group>> {
        self.client.post("/api/groups/", group).await
    }

    pub async fn update(&self, group_id: i64, update: &GroupUpdate) -> Result<ApiResponse<Group>> {
        self.client
            .put(&format!("/api/groups/{}/", group_id), update)
            .await
    }

    pub async fn join(
        &self,
        group_id: i64,
        invite_code: &str,
    ) -> Result<ApiResponse<GroupMember>> {
        let body = JoinGroupRequest {
            invite_code: invite_code.to_string(),
        };
        self.client
            .post(&format!("/api/groups/{}/join/", group_id), &body)
            .await
    }

    pub async fn members(&self, group_id: i64) -> Result<ApiResponse<Vec<GroupMember>>> {
        self.client
            .get(&format!("/api/groups/{}/members/", group_id))
            .await
    }

    /// Public, active wishes of every group member.
    pub async fn wishes(&self, group_id: i64) -> Result<ApiResponse<Vec<Wish>>> {
        self.client
            .get(&format!("/api/groups/{}/wishes/", group_id))
            .await
    }
}
