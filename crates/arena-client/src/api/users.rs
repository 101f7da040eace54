use super::*;

impl ArenaClient {
    /// Get the currently authenticated user.
    pub async fn get_current_user(&self) -> Result<User, ArenaError> {
        self.get("/v2/me", &[]).await
    }

    /// Get one page of channels owned by a user.
    pub async fn get_user_channels(&self, user_id: u64, page: u32) -> Result<Channels, ArenaError> {
        let path = format!("/v2/users/{user_id}/channels");
        self.get(&path, &[("page", page.to_string())]).await
    }
}
