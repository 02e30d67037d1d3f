use super::{escape, page, Nav};
use crate::form::{AddCardForm, CardField};

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>",
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    )
}

fn select(field: CardField, placeholder: &str, options: Vec<String>, disabled: bool) -> String {
    let mut html = format!(
        "<select id=\"{key}\" name=\"{key}\"{extra}>",
        key = field.key(),
        extra = if field == CardField::Category {
            " onchange=\"document.getElementById('refresh').click()\""
        } else if disabled {
            " disabled"
        } else {
            ""
        }
    );
    html.push_str(&option("", placeholder, false));
    for opt in options {
        html.push_str(&opt);
    }
    html.push_str("</select>");
    html
}

fn control(form: &AddCardForm<'_>, field: CardField) -> String {
    let config = form.config();
    let value = form.value(field);

    match field {
        CardField::Category => select(
            field,
            "Select a category",
            config
                .categories
                .all()
                .iter()
                .map(|c| option(&c.id, &c.name, c.id == value))
                .collect(),
            false,
        ),
        CardField::Subcategory => {
            let options = form.subcategory_options();
            select(
                field,
                "Select a subcategory",
                options.iter().map(|s| option(s, s, s == value)).collect(),
                options.is_empty(),
            )
        }
        CardField::Condition => select(
            field,
            "Select a condition",
            config
                .conditions
                .all()
                .iter()
                .map(|g| option(&g.id, &format!("{} - {}", g.name, g.description), g.id == value))
                .collect(),
            false,
        ),
        CardField::PurchasePrice => format!(
            "<input id=\"{key}\" name=\"{key}\" type=\"number\" min=\"0\" step=\"0.01\" value=\"{value}\">",
            key = field.key(),
            value = escape(value)
        ),
        CardField::PurchaseDate => format!(
            "<input id=\"{key}\" name=\"{key}\" type=\"date\" value=\"{value}\">",
            key = field.key(),
            value = escape(value)
        ),
        CardField::Notes => format!(
            "<textarea id=\"{key}\" name=\"{key}\" rows=\"3\">{value}</textarea>",
            key = field.key(),
            value = escape(value)
        ),
        CardField::Name => format!(
            "<input id=\"{key}\" name=\"{key}\" type=\"text\" value=\"{value}\">",
            key = field.key(),
            value = escape(value)
        ),
    }
}

/// Inline error markup for one field (empty when the field is fine)
pub fn field_error(form: &AddCardForm<'_>, field: CardField) -> String {
    match form.error_for(field) {
        Some(message) => format!(
            "<p class=\"field-error\" id=\"{}-error\">{}</p>",
            field.key(),
            escape(message)
        ),
        None => String::new(),
    }
}

/// The add-card form, with any inline errors and an optional notice
pub fn render(form: &AddCardForm<'_>, notice: Option<&str>) -> String {
    let mut body = String::from("    <h1>Add Card</h1>\n");

    if let Some(notice) = notice {
        body.push_str(&format!("    <p class=\"notice\">{}</p>\n", escape(notice)));
    }

    body.push_str(&format!(
        "    <form method=\"post\" action=\"{}\">\n",
        Nav::AddCard.path()
    ));

    for field in CardField::ALL {
        body.push_str(&format!(
            "      <div class=\"field\">\n        <label for=\"{}\">{}</label>\n        {}\n        {}\n      </div>\n",
            field.key(),
            field.label(),
            control(form, field),
            field_error(form, field)
        ));
    }

    body.push_str(&format!(
        "      <button type=\"submit\" id=\"refresh\" formmethod=\"get\" formaction=\"{}\" formnovalidate>Update subcategories</button>\n",
        Nav::AddCard.path()
    ));
    body.push_str("      <button type=\"submit\">Add Card</button>\n    </form>");

    page(form.config(), "Add Card", Some(Nav::AddCard), &body)
}
