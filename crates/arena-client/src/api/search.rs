use super::*;

impl ArenaClient {
    /// Search channels by term.
    pub async fn search_channels(&self, query: &str, page: u32) -> Result<Channels, ArenaError> {
        let params = [("q", query.to_string()), ("page", page.to_string())];
        self.get("/v2/search/channels", &params).await
    }
}
