// Dashboard service - Use case for building the dashboard view
use crate::application::site_repository::SiteScoreRepository;
use crate::domain::chart::ChartData;
use crate::domain::dashboard::{Dashboard, DashboardState};
use crate::domain::error::DashboardError;
use crate::domain::site_score::SiteScore;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    title: String,
    sites: Arc<[SiteScore]>,
}

impl DashboardService {
    /// Seed the service once from the repository. The list is fixed afterwards.
    pub async fn load(
        repository: Arc<dyn SiteScoreRepository>,
        title: String,
    ) -> anyhow::Result<Self> {
        let sites = repository.list_sites().await?;

        for site in sites.iter().filter(|s| !s.is_in_range()) {
            tracing::warn!(
                "Scores for {} fall outside 0..=100 and will be shown as-is",
                site.url
            );
        }
        tracing::info!("Dashboard seeded with {} sites", sites.len());

        Ok(Self {
            title,
            sites: sites.into(),
        })
    }

    pub fn sites(&self) -> &[SiteScore] {
        &self.sites
    }

    /// State for a request; `expanded` comes from the previous render.
    pub fn state(&self, expanded: Option<usize>) -> Result<DashboardState, DashboardError> {
        DashboardState::new(Arc::clone(&self.sites)).with_expanded(expanded)
    }

    pub fn dashboard(&self, state: &DashboardState) -> Dashboard {
        Dashboard::new(self.title.clone(), state)
    }

    pub fn chart(&self) -> ChartData {
        ChartData::from_sites(&self.sites)
    }
}
