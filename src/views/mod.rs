// 🖼️ HTML Views - server-rendered pages
//
// Every view is a pure function of the config (plus form or analytics
// state) returning a complete HTML document.

pub mod add_card;
pub mod analytics;
pub mod collections;
pub mod home;

use crate::config::AppConfig;
use crate::entities::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Collections,
    AddCard,
    Analytics,
}

impl Nav {
    pub const ALL: [Nav; 4] = [Nav::Home, Nav::Collections, Nav::AddCard, Nav::Analytics];

    pub fn path(&self) -> &'static str {
        match self {
            Nav::Home => "/",
            Nav::Collections => "/collections",
            Nav::AddCard => "/cards/add",
            Nav::Analytics => "/analytics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Nav::Home => "Home",
            Nav::Collections => "My Collections",
            Nav::AddCard => "Add Card",
            Nav::Analytics => "Analytics",
        }
    }
}

/// Route of the per-category page
pub fn category_path(category: &Category) -> String {
    format!("/collections/{}", category.id)
}

/// Minimal HTML escaping for text and attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a body in the shared layout (head, nav bar, footer)
pub fn page(config: &AppConfig, title: &str, active: Option<Nav>, body: &str) -> String {
    let nav_links: String = Nav::ALL
        .iter()
        .map(|nav| {
            let class = if Some(*nav) == active { " class=\"active\"" } else { "" };
            format!(
                "<a href=\"{}\"{}>{}</a>",
                nav.path(),
                class,
                escape(nav.label())
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | {app_name}</title>
  <meta name="description" content="{description}">
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <header>
    <nav>
      {nav_links}
    </nav>
  </header>
  <main>
{body}
  </main>
  <footer><small>API: {api_base_url}</small></footer>
</body>
</html>
"#,
        title = escape(title),
        app_name = escape(&config.app_name),
        description = escape(&config.description),
        nav_links = nav_links,
        body = body,
        api_base_url = escape(&config.api_base_url),
    )
}

pub fn not_found(config: &AppConfig, path: &str) -> String {
    let body = format!(
        "    <h1>Page not found</h1>\n    <p>Nothing lives at <code>{}</code>.</p>\n    <p><a href=\"/\">Back to home</a></p>",
        escape(path)
    );
    page(config, "Not Found", None, &body)
}

/// Per-category page: the route exists, the page does not yet
pub fn category_unavailable(config: &AppConfig, category: &Category) -> String {
    let body = format!(
        "    <h1>{}</h1>\n    <p>The per-category view is not available yet.</p>\n    <p><a href=\"{}\">Back to collections</a></p>",
        escape(&category.display_name()),
        Nav::Collections.path()
    );
    page(config, &category.name, Some(Nav::Collections), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Magic: The Gathering"), "Magic: The Gathering");
        assert_eq!(
            escape("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_page_marks_active_nav() {
        let config = AppConfig::default();
        let html = page(&config, "Analytics", Some(Nav::Analytics), "<p>x</p>");

        assert!(html.contains("<a href=\"/analytics\" class=\"active\">Analytics</a>"));
        assert!(html.contains("<a href=\"/collections\">My Collections</a>"));
        assert!(html.contains("<title>Analytics | Card Collector</title>"));
        assert!(html.contains(&config.api_base_url));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let config = AppConfig::default();
        let html = not_found(&config, "/<script>");

        assert!(html.contains("/&lt;script&gt;"));
        assert!(!html.contains("/<script>"));
    }

    #[test]
    fn test_category_path() {
        let config = AppConfig::default();
        let sports = config.categories.find_by_id("sports").unwrap();

        assert_eq!(category_path(sports), "/collections/sports");
    }
}
