use super::{escape, page, Nav};
use crate::analytics::{AnalyticsSnapshot, ProgressRow};
use crate::config::AppConfig;

fn progress_list(title: &str, rows: &[ProgressRow]) -> String {
    let mut html = format!(
        "    <section class=\"breakdown\">\n      <h2>{}</h2>\n",
        escape(title)
    );
    for row in rows {
        html.push_str(&format!(
            "      <div class=\"bar-row\"><span>{}</span><span>{}</span><div class=\"bar\"><div class=\"fill\" style=\"width: {:.2}%\"></div></div></div>\n",
            escape(&row.label),
            row.count,
            row.percent
        ));
    }
    html.push_str("    </section>\n");
    html
}

pub fn render(config: &AppConfig, snapshot: &AnalyticsSnapshot) -> String {
    let summary = &snapshot.summary;
    let mut body = String::from("    <h1>Collection Analytics</h1>\n");

    body.push_str(&format!(
        "    <section class=\"summary\">\n      <div class=\"stat\"><h3>Total Cards</h3><p id=\"total-cards\">{}</p></div>\n      <div class=\"stat\"><h3>Total Value</h3><p id=\"total-value\">${:.2}</p></div>\n      <div class=\"stat\"><h3>Average Card Value</h3><p id=\"average-value\">${:.2}</p></div>\n    </section>\n",
        summary.total_cards,
        summary.total_value,
        summary.average_value()
    ));

    body.push_str(&progress_list("Cards by Category", &snapshot.by_category));
    body.push_str(&progress_list("Cards by Condition", &snapshot.by_condition));

    body.push_str("    <section class=\"activity\">\n      <h2>Recent Activity</h2>\n      <ul>\n");
    for entry in &snapshot.recent_activity {
        body.push_str(&format!(
            "        <li><strong>{}</strong> {} <em>{}</em></li>\n",
            escape(entry.action),
            escape(entry.detail),
            escape(entry.when)
        ));
    }
    body.push_str("      </ul>\n    </section>");

    page(config, "Analytics", Some(Nav::Analytics), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{FixedMetrics, RandomMetrics};

    #[test]
    fn test_summary_numbers() {
        let config = AppConfig::default();
        let snapshot = AnalyticsSnapshot::collect(&config, &FixedMetrics::uniform(0));
        let html = render(&config, &snapshot);

        assert!(html.contains("<p id=\"total-cards\">150</p>"));
        assert!(html.contains("<p id=\"total-value\">$2500.00</p>"));
        assert!(html.contains("<p id=\"average-value\">$16.67</p>"));
    }

    #[test]
    fn test_bar_widths_from_fixed_metrics() {
        let config = AppConfig::default();
        let metrics = FixedMetrics::uniform(15).with_category("sports", 30);
        let snapshot = AnalyticsSnapshot::collect(&config, &metrics);
        let html = render(&config, &snapshot);

        assert!(html.contains("<span>Sports</span><span>30</span><div class=\"bar\"><div class=\"fill\" style=\"width: 20.00%\">"));
        assert!(html.contains("<span>Mint</span><span>15</span><div class=\"bar\"><div class=\"fill\" style=\"width: 10.00%\">"));
        assert_eq!(html.matches("class=\"bar-row\"").count(), 9);
    }

    #[test]
    fn test_average_stable_across_random_renders() {
        let config = AppConfig::default();
        let metrics = RandomMetrics::new();

        for _ in 0..10 {
            let html = render(&config, &AnalyticsSnapshot::collect(&config, &metrics));
            assert!(html.contains("<p id=\"average-value\">$16.67</p>"));
        }
    }

    #[test]
    fn test_recent_activity_rendered() {
        let config = AppConfig::default();
        let snapshot = AnalyticsSnapshot::collect(&config, &FixedMetrics::uniform(1));
        let html = render(&config, &snapshot);

        let start = html.find("<section class=\"activity\">").unwrap();
        assert_eq!(html[start..].matches("<li>").count(), 3);
    }
}
