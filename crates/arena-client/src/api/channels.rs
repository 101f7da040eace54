use super::*;

impl ArenaClient {
    /// Get a single channel by ID.
    pub async fn get_channel(&self, id: u64) -> Result<Channel, ArenaError> {
        let path = format!("/v2/channels/{id}");
        self.get(&path, &[]).await
    }

    /// Get one page of a channel's blocks.
    pub async fn get_channel_contents(
        &self,
        channel_id: u64,
        page: u32,
        sort: Sort,
        direction: Direction,
    ) -> Result<ChannelContents, ArenaError> {
        let path = format!("/v2/channels/{channel_id}/contents");
        let query = [
            ("page", page.to_string()),
            ("sort", sort.to_string()),
            ("direction", direction.to_string()),
        ];
        self.get(&path, &query).await
    }

    /// Get the thumbnail blocks of a channel.
    pub async fn get_channel_thumbnails(
        &self,
        channel_id: u64,
    ) -> Result<ChannelContents, ArenaError> {
        let path = format!("/v2/channels/{channel_id}/thumb");
        self.get(&path, &[]).await
    }
}
