// Repository trait for site score access
use crate::domain::site_score::SiteScore;
use async_trait::async_trait;

#[async_trait]
pub trait SiteScoreRepository: Send + Sync {
    /// All audited sites, in display order
    async fn list_sites(&self) -> anyhow::Result<Vec<SiteScore>>;
}
