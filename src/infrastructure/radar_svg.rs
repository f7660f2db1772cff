// Inline SVG radar chart rendering
use crate::domain::chart::{ChartData, ChartSeries};
use std::f64::consts::PI;

use super::html_response::html_escape;

const SIZE: f64 = 420.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 150.0;
const SCALE_MAX: f64 = 100.0;
const RINGS: [i32; 5] = [20, 40, 60, 80, 100];
const LABEL_OFFSET: f64 = 22.0;

/// Angle of spoke `axis`; the first spoke points up and the rest follow clockwise.
fn spoke_angle(axis: usize, axes: usize) -> f64 {
    -PI / 2.0 + 2.0 * PI * axis as f64 / axes as f64
}

/// Position of `value` on spoke `axis`. Values are not clamped.
fn point(axis: usize, axes: usize, value: f64) -> (f64, f64) {
    let angle = spoke_angle(axis, axes);
    let r = RADIUS * value / SCALE_MAX;
    (CENTER + r * angle.cos(), CENTER + r * angle.sin())
}

fn polygon_points(values: impl Iterator<Item = f64>, axes: usize) -> String {
    values
        .enumerate()
        .map(|(axis, v)| {
            let (x, y) = point(axis, axes, v);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_grid(out: &mut String, labels: &[&str]) {
    let axes = labels.len();

    for ring in RINGS {
        let points = polygon_points(std::iter::repeat_n(f64::from(ring), axes), axes);
        out.push_str(&format!(
            "  <polygon class=\"grid\" points=\"{}\" />\n",
            points
        ));
    }

    for (axis, label) in labels.iter().enumerate() {
        let (x, y) = point(axis, axes, SCALE_MAX);
        out.push_str(&format!(
            "  <line class=\"spoke\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" />\n",
            CENTER, CENTER, x, y
        ));

        let angle = spoke_angle(axis, axes);
        let (lx, ly) = (
            x + LABEL_OFFSET * angle.cos(),
            y + LABEL_OFFSET * angle.sin(),
        );
        let anchor = if angle.cos().abs() < 0.1 {
            "middle"
        } else if angle.cos() > 0.0 {
            "start"
        } else {
            "end"
        };
        out.push_str(&format!(
            "  <text class=\"axis-label\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"{}\">{}</text>\n",
            lx,
            ly,
            anchor,
            html_escape(label)
        ));
    }
}

fn render_series(out: &mut String, series: &ChartSeries, axes: usize) {
    let points = polygon_points(series.data.iter().map(|&v| f64::from(v)), axes);
    let fill = if series.fill {
        series.background_color.to_string()
    } else {
        "none".to_string()
    };

    out.push_str(&format!(
        "  <polygon class=\"series\" points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"><title>{}</title></polygon>\n",
        points,
        fill,
        series.border_color,
        html_escape(&series.label)
    ));

    for (axis, &value) in series.data.iter().enumerate() {
        let (x, y) = point(axis, axes, f64::from(value));
        out.push_str(&format!(
            "  <circle class=\"point\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"{}\" />\n",
            x, y, series.point_background_color
        ));
    }
}

fn render_legend(chart: &ChartData) -> String {
    let items: String = chart
        .datasets
        .iter()
        .map(|s| {
            format!(
                r#"<li><span class="swatch" style="background: {}"></span>{}</li>"#,
                s.border_color,
                html_escape(&s.label)
            )
        })
        .collect();

    format!(r#"<ul class="legend">{}</ul>"#, items)
}

/// Render the chart as an inline SVG followed by its legend.
pub fn render_radar(chart: &ChartData) -> String {
    let axes = chart.labels.len();
    let mut svg = format!(
        "<svg class=\"radar-chart\" viewBox=\"0 0 {size} {size}\" width=\"{size}\" height=\"{size}\" role=\"img\" aria-label=\"Website scores radar chart\">\n",
        size = SIZE
    );
    if axes >= 3 {
        render_grid(&mut svg, &chart.labels);
        for series in &chart.datasets {
            render_series(&mut svg, series, axes);
        }
    }
    svg.push_str("</svg>\n");
    svg.push_str(&render_legend(chart));
    svg
}
