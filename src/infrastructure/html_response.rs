// HTML page rendering for the dashboard view
use crate::domain::dashboard::{Dashboard, TableRow, METRIC_DETAILS};
use crate::domain::error::DashboardError;

use super::radar_svg::render_radar;

const TABLE_COLUMNS: usize = 7;

/// Render the full dashboard page.
///
/// The chart dataset is also embedded as JSON (`#chart-data`) so a client-side
/// chart widget can pick it up.
pub fn render_dashboard_page(dashboard: &Dashboard) -> Result<String, DashboardError> {
    let chart_json = serde_json::to_string(&dashboard.chart)?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="App">
        <header>
            <h1>{title}</h1>
        </header>
        <section class="chart-section">
{chart}
        </section>
        <section class="table-section">
{table}
        </section>
    </div>
    <script type="application/json" id="chart-data">{chart_json}</script>
</body>
</html>"#,
        title = html_escape(&dashboard.title),
        css = inline_css(),
        chart = render_radar(&dashboard.chart),
        table = render_table(&dashboard.rows, dashboard.expanded),
        chart_json = chart_json,
    ))
}

/// Link that toggles row `index`, carrying the currently expanded row.
pub fn toggle_href(index: usize, expanded: Option<usize>) -> String {
    match expanded {
        Some(current) => format!("/rows/{}/toggle?expanded={}", index, current),
        None => format!("/rows/{}/toggle", index),
    }
}

/// Page location for a given expanded row.
pub fn dashboard_href(expanded: Option<usize>) -> String {
    match expanded {
        Some(index) => format!("/?expanded={}", index),
        None => "/".to_string(),
    }
}

fn render_table(rows: &[TableRow], expanded: Option<usize>) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            let mut html = render_row(row, expanded);
            if row.expanded {
                html.push_str(&render_details_row());
            }
            html
        })
        .collect();

    format!(
        r#"<table>
    <thead>
        <tr>
            <th>Website</th>
            <th>Accessibility</th>
            <th>Performance</th>
            <th>UX</th>
            <th>SEO</th>
            <th>Security</th>
            <th>Overall</th>
        </tr>
    </thead>
    <tbody>
{body}    </tbody>
</table>"#,
        body = body,
    )
}

fn render_row(row: &TableRow, expanded: Option<usize>) -> String {
    let href = toggle_href(row.index, expanded);
    let site = &row.site;

    format!(
        r#"        <tr class="site-row{active}" data-index="{index}" onclick="window.location.href='{href}'" style="cursor: pointer">
            <td><a href="{href}">{url}</a></td>
            <td>{accessibility}</td>
            <td>{performance}</td>
            <td>{ux}</td>
            <td>{seo}</td>
            <td>{security}</td>
            <td>{overall}</td>
        </tr>
"#,
        active = if row.expanded { " expanded" } else { "" },
        index = row.index,
        href = href,
        url = html_escape(&site.url),
        accessibility = site.accessibility,
        performance = site.performance,
        ux = site.ux,
        seo = site.seo,
        security = site.security,
        overall = row.overall,
    )
}

fn render_details_row() -> String {
    let items: String = METRIC_DETAILS
        .iter()
        .map(|(category, description)| {
            format!("                    <li>{}: {}</li>\n", category, description)
        })
        .collect();

    format!(
        r#"        <tr class="details-row">
            <td colspan="{columns}">
                <div>
                <strong>Details:</strong>
                <ul>
{items}                </ul>
                </div>
            </td>
        </tr>
"#,
        columns = TABLE_COLUMNS,
        items = items,
    )
}

fn inline_css() -> &'static str {
    r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 0; background: #f7f8fa; color: #222; }
.App { max-width: 960px; margin: 0 auto; padding: 24px; }
header h1 { margin: 0 0 24px; }
.chart-section { display: flex; align-items: center; gap: 24px; margin-bottom: 32px; }
.radar-chart .grid { fill: none; stroke: #d0d4da; }
.radar-chart .spoke { stroke: #d0d4da; }
.radar-chart .axis-label { font-size: 12px; fill: #555; dominant-baseline: middle; }
.legend { list-style: none; padding: 0; }
.legend li { margin: 4px 0; }
.legend .swatch { display: inline-block; width: 12px; height: 12px; margin-right: 8px; vertical-align: middle; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { padding: 8px 12px; border-bottom: 1px solid #e3e6ea; text-align: left; }
.site-row:hover, .site-row.expanded { background: #eef3f8; }
.site-row a { color: inherit; text-decoration: none; }
.details-row td { background: #fafbfc; }
"#
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::DashboardState;
    use crate::domain::site_score::{sample_sites, SiteScore};

    fn page(expanded: Option<usize>) -> String {
        let state = DashboardState::new(sample_sites().into())
            .with_expanded(expanded)
            .unwrap();
        render_dashboard_page(&Dashboard::new("Navi Dashboard".to_string(), &state)).unwrap()
    }

    #[test]
    fn test_collapsed_page_has_rows_and_no_details() {
        let html = page(None);
        assert!(html.contains("<h1>Navi Dashboard</h1>"));
        assert_eq!(html.matches(r#"<tr class="site-row"#).count(), 2);
        assert!(!html.contains("details-row\">"));
        assert!(html.contains(r#"<a href="/rows/0/toggle">https://example.com</a>"#));
        assert!(html.contains(r#"<a href="/rows/1/toggle">https://another.com</a>"#));
        assert!(html.contains("<td>81</td>"));
        assert!(html.contains("<td>80</td>"));
    }

    #[test]
    fn test_details_follow_expanded_row_only() {
        let html = page(Some(0));
        assert_eq!(html.matches(r#"<tr class="details-row">"#).count(), 1);

        let first = html.find(r#"data-index="0""#).unwrap();
        let details = html.find(r#"<tr class="details-row">"#).unwrap();
        let second = html.find(r#"data-index="1""#).unwrap();
        assert!(first < details && details < second);

        assert!(html.contains(r#"<a href="/rows/0/toggle?expanded=0">https://example.com</a>"#));
        assert!(html.contains(r#"<a href="/rows/1/toggle?expanded=0">https://another.com</a>"#));
        assert!(html.contains("<li>Security: HTTPS, headers, CSP</li>"));
        assert!(html.contains(r#"<td colspan="7">"#));
    }

    #[test]
    fn test_details_after_last_row() {
        let html = page(Some(1));
        let second = html.find(r#"data-index="1""#).unwrap();
        let details = html.find(r#"<tr class="details-row">"#).unwrap();
        assert!(second < details);
        assert!(html.contains(r#"class="site-row expanded" data-index="1""#));
    }

    #[test]
    fn test_chart_json_is_embedded_and_escaped() {
        let sites = vec![SiteScore::new("https://x.example/</script>", 1, 2, 3, 4, 5)];
        let state = DashboardState::new(sites.into());
        let html =
            render_dashboard_page(&Dashboard::new("t".to_string(), &state)).unwrap();

        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains(r#""labels":["Accessibility","Performance","UX","SEO","Security","Overall"]"#));
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(toggle_href(3, None), "/rows/3/toggle");
        assert_eq!(toggle_href(3, Some(1)), "/rows/3/toggle?expanded=1");
        assert_eq!(dashboard_href(None), "/");
        assert_eq!(dashboard_href(Some(2)), "/?expanded=2");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
