// Dashboard domain model - view state and the static detail panel
use super::chart::ChartData;
use super::error::DashboardError;
use super::site_score::SiteScore;
use std::sync::Arc;

/// Explanatory list shown in every expanded row, as (category, description).
pub const METRIC_DETAILS: [(&str, &str); 5] = [
    ("Accessibility", "ARIA tags, color contrast, alt texts"),
    ("Performance", "Page speed, Lighthouse metrics"),
    ("UX", "Navigation, mobile responsiveness, user flow"),
    ("SEO", "Meta tags, structured data, links"),
    ("Security", "HTTPS, headers, CSP"),
];

/// View-local dashboard state.
///
/// `sites` is shared read-only; every transition produces a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    sites: Arc<[SiteScore]>,
    expanded: Option<usize>,
}

impl DashboardState {
    /// Initial state: nothing expanded.
    pub fn new(sites: Arc<[SiteScore]>) -> Self {
        Self {
            sites,
            expanded: None,
        }
    }

    /// Restore a state from a previously rendered expanded index.
    pub fn with_expanded(self, expanded: Option<usize>) -> Result<Self, DashboardError> {
        if let Some(index) = expanded {
            self.check_index(index)?;
        }
        Ok(Self { expanded, ..self })
    }

    pub fn sites(&self) -> &[SiteScore] {
        &self.sites
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    fn toggled(&self, index: usize) -> Option<usize> {
        if self.is_expanded(index) {
            None
        } else {
            Some(index)
        }
    }

    /// Click on row `index`: collapse it if it is open, otherwise open it.
    pub fn toggle_expand(&self, index: usize) -> Result<Self, DashboardError> {
        self.check_index(index)?;
        Ok(Self {
            sites: Arc::clone(&self.sites),
            expanded: self.toggled(index),
        })
    }

    fn check_index(&self, index: usize) -> Result<(), DashboardError> {
        if index < self.sites.len() {
            Ok(())
        } else {
            Err(DashboardError::RowOutOfRange {
                index,
                len: self.sites.len(),
            })
        }
    }
}

/// One table row as rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub index: usize,
    pub site: SiteScore,
    pub overall: i32,
    pub expanded: bool,
}

/// Everything the view renders for one state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub expanded: Option<usize>,
    pub chart: ChartData,
    pub rows: Vec<TableRow>,
}

impl Dashboard {
    pub fn new(title: String, state: &DashboardState) -> Self {
        let rows = state
            .sites()
            .iter()
            .enumerate()
            .map(|(index, site)| TableRow {
                index,
                site: site.clone(),
                overall: site.overall(),
                expanded: state.is_expanded(index),
            })
            .collect();

        Self {
            title,
            expanded: state.expanded(),
            chart: ChartData::from_sites(state.sites()),
            rows,
        }
    }
}
