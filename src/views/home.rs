use super::{escape, page, Nav};
use crate::config::AppConfig;

/// Home screen: app intro plus one card per destination
pub fn render(config: &AppConfig) -> String {
    let targets = [
        (Nav::Collections, "Browse your cards by category"),
        (Nav::AddCard, "Record a new card in your collection"),
        (Nav::Analytics, "See what your collection is worth"),
    ];

    let links: String = targets
        .iter()
        .map(|(nav, blurb)| {
            format!(
                "      <li><a href=\"{}\"><h2>{}</h2><p>{}</p></a></li>\n",
                nav.path(),
                escape(nav.label()),
                escape(blurb)
            )
        })
        .collect();

    let body = format!(
        "    <h1>{}</h1>\n    <p>{}</p>\n    <ul class=\"home-links\">\n{}    </ul>",
        escape(&config.app_name),
        escape(&config.description),
        links
    );

    page(config, "Home", Some(Nav::Home), &body)
}
