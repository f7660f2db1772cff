// In-memory repository implementation
use crate::application::site_repository::SiteScoreRepository;
use crate::domain::site_score::{sample_sites, SiteScore};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct InMemorySiteRepository {
    sites: Vec<SiteScore>,
}

impl InMemorySiteRepository {
    pub fn new(sites: Vec<SiteScore>) -> Self {
        Self { sites }
    }

    /// Use the configured sites, or the built-in sample when none are given.
    pub fn from_configured(sites: Vec<SiteScore>) -> Self {
        if sites.is_empty() {
            tracing::info!("No sites configured, using built-in sample");
            Self::new(sample_sites())
        } else {
            Self::new(sites)
        }
    }
}

#[async_trait]
impl SiteScoreRepository for InMemorySiteRepository {
    async fn list_sites(&self) -> anyhow::Result<Vec<SiteScore>> {
        Ok(self.sites.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_falls_back_to_sample() {
        let repo = InMemorySiteRepository::from_configured(Vec::new());
        let sites = repo.list_sites().await.unwrap();
        assert_eq!(sites, sample_sites());
    }

    #[tokio::test]
    async fn test_configured_sites_win() {
        let configured = vec![SiteScore::new("https://only.example", 10, 20, 30, 40, 50)];
        let repo = InMemorySiteRepository::from_configured(configured.clone());
        assert_eq!(repo.list_sites().await.unwrap(), configured);
    }
}
