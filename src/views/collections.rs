use super::{category_path, escape, page, Nav};
use crate::config::AppConfig;

/// Count shown next to every subcategory until cards are stored somewhere
pub const PLACEHOLDER_COUNT: u32 = 0;

pub fn count_label(count: u32) -> String {
    if count == 1 {
        "1 card".to_string()
    } else {
        format!("{} cards", count)
    }
}

/// One section per category, one row per subcategory
pub fn render(config: &AppConfig) -> String {
    let mut body = String::from("    <h1>My Collections</h1>\n");

    for category in config.categories.all() {
        body.push_str(&format!(
            "    <section class=\"category\" id=\"{}\">\n      <h2><a href=\"{}\">{}</a></h2>\n      <ul>\n",
            escape(&category.id),
            category_path(category),
            escape(&category.display_name())
        ));

        for subcategory in &category.subcategories {
            body.push_str(&format!(
                "        <li><span class=\"name\">{}</span> <span class=\"count\">{}</span></li>\n",
                escape(subcategory),
                count_label(PLACEHOLDER_COUNT)
            ));
        }

        body.push_str("      </ul>\n    </section>\n");
    }

    page(config, "My Collections", Some(Nav::Collections), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section<'a>(html: &'a str, id: &str) -> &'a str {
        let start = html
            .find(&format!("<section class=\"category\" id=\"{}\">", id))
            .unwrap();
        let end = start + html[start..].find("</section>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_every_category_lists_its_subcategories() {
        let config = AppConfig::default();
        let html = render(&config);

        for category in config.categories.all() {
            let section = section(&html, &category.id);

            assert_eq!(
                section.matches("<li>").count(),
                category.subcategories.len(),
                "wrong row count for {}",
                category.id
            );
            for subcategory in &category.subcategories {
                let row = format!(
                    "<li><span class=\"name\">{}</span> <span class=\"count\">0 cards</span></li>",
                    escape(subcategory)
                );
                assert!(section.contains(&row), "missing {} in {}", subcategory, category.id);
            }
        }
    }

    #[test]
    fn test_category_links_to_detail_route() {
        let config = AppConfig::default();
        let html = render(&config);

        assert!(html.contains("<a href=\"/collections/pokemon\">"));
        assert!(html.contains("<a href=\"/collections/mtg\">"));
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 cards");
        assert_eq!(count_label(1), "1 card");
        assert_eq!(count_label(12), "12 cards");
    }
}
