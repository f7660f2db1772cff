// Radar chart domain models
use super::site_score::{Metric, SiteScore};
use serde::{Serialize, Serializer};
use std::fmt;

const FILL_ALPHA: f32 = 0.2;
const LINE_ALPHA: f32 = 1.0;
const RED_STEP: usize = 50;
const RED_SHADES: usize = 6;
const GREEN_BASE: usize = 99;
const GREEN_STEP: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Series color: the red channel steps through six shades by list
    /// position; every further block of six shifts the green channel.
    ///
    /// The first 24 series differ by at least 50 in red or green.
    pub fn for_series(index: usize, a: f32) -> Self {
        let shade = index % RED_SHADES;
        let block = index / RED_SHADES;
        Self {
            r: (shade * RED_STEP) as u8,
            g: ((GREEN_BASE + block * GREEN_STEP) % 256) as u8,
            b: 132,
            a,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One polygon on the radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<i32>,
    pub fill: bool,
    pub background_color: Rgba,
    pub border_color: Rgba,
    pub point_background_color: Rgba,
}

impl ChartSeries {
    pub fn from_site(index: usize, site: &SiteScore) -> Self {
        let line = Rgba::for_series(index, LINE_ALPHA);
        Self {
            label: site.url.clone(),
            data: site.axis_values().to_vec(),
            fill: true,
            background_color: Rgba::for_series(index, FILL_ALPHA),
            border_color: line,
            point_background_color: line,
        }
    }
}

/// Labels plus one series per site, in the shape a radar widget consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<ChartSeries>,
}

impl ChartData {
    pub fn from_sites(sites: &[SiteScore]) -> Self {
        Self {
            labels: Metric::AXES.iter().map(|m| m.label()).collect(),
            datasets: sites
                .iter()
                .enumerate()
                .map(|(idx, site)| ChartSeries::from_site(idx, site))
                .collect(),
        }
    }
}
