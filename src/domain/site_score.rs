// Site score domain model
use serde::{Deserialize, Serialize};

/// One audited website and its five raw quality metrics.
///
/// Metrics are expected in `0..=100` but are not validated; out-of-range
/// values flow through to the view unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteScore {
    pub url: String,
    pub accessibility: i32,
    pub performance: i32,
    pub ux: i32,
    pub seo: i32,
    pub security: i32,
}

/// Chart axes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Accessibility,
    Performance,
    Ux,
    Seo,
    Security,
    Overall,
}

impl Metric {
    pub const AXES: [Metric; 6] = [
        Metric::Accessibility,
        Metric::Performance,
        Metric::Ux,
        Metric::Seo,
        Metric::Security,
        Metric::Overall,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Accessibility => "Accessibility",
            Metric::Performance => "Performance",
            Metric::Ux => "UX",
            Metric::Seo => "SEO",
            Metric::Security => "Security",
            Metric::Overall => "Overall",
        }
    }
}

impl SiteScore {
    pub fn new(
        url: impl Into<String>,
        accessibility: i32,
        performance: i32,
        ux: i32,
        seo: i32,
        security: i32,
    ) -> Self {
        Self {
            url: url.into(),
            accessibility,
            performance,
            ux,
            seo,
            security,
        }
    }

    /// The five raw metrics in axis order.
    pub fn raw_scores(&self) -> [i32; 5] {
        [
            self.accessibility,
            self.performance,
            self.ux,
            self.seo,
            self.security,
        ]
    }

    /// Mean of the five metrics, rounded half away from zero.
    pub fn overall(&self) -> i32 {
        let sum: i64 = self.raw_scores().iter().map(|&v| i64::from(v)).sum();
        (sum as f64 / 5.0).round() as i32
    }

    pub fn value(&self, metric: Metric) -> i32 {
        match metric {
            Metric::Accessibility => self.accessibility,
            Metric::Performance => self.performance,
            Metric::Ux => self.ux,
            Metric::Seo => self.seo,
            Metric::Security => self.security,
            Metric::Overall => self.overall(),
        }
    }

    /// All six axis values, overall last.
    pub fn axis_values(&self) -> [i32; 6] {
        Metric::AXES.map(|m| self.value(m))
    }

    /// True when every raw metric lies in `0..=100`.
    pub fn is_in_range(&self) -> bool {
        self.raw_scores().iter().all(|v| (0..=100).contains(v))
    }
}

/// Built-in sample used when no sites are configured.
pub fn sample_sites() -> Vec<SiteScore> {
    vec![
        SiteScore::new("https://example.com", 85, 78, 92, 80, 70),
        SiteScore::new("https://another.com", 90, 65, 88, 75, 80),
    ]
}
