use crate::error::AppError;
use crate::model::requests::ProfileUpdate;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the user management endpoints
///
/// Both operations attach `token` as the bearer token before calling, and it
/// stays attached for the calls that follow.
#[async_trait]
pub trait UserManagementService: Send + Sync {
    /// Gets the profile of the token's owner (`GET /api/users/profile`)
    async fn get_profile(&self, token: &str) -> Result<ApiResponse, AppError>;

    /// Updates the profile of the token's owner (`PUT /api/users/profile`)
    async fn update_profile(
        &self,
        update: &ProfileUpdate,
        token: &str,
    ) -> Result<ApiResponse, AppError>;
}
