// Domain layer - Site scores, chart data and view state
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod site_score;
