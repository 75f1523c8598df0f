//! Page view models and the renderers that turn them into response bodies.
//!
//! Handlers build a [`PageViewModel`] and hand it to the [`PageRenderer`] in
//! [`AppState`](crate::state::AppState) together with a template id. Escaping
//! is the renderer's job; view models carry raw values.

use std::fmt::Write;

use serde::Serialize;
use slimshop_core::error::CoreError;
use slimshop_core::validation::{ErrorMessages, PTYPE, PTYPE_LABEL};
use slimshop_db::models::product_category::ProductCategory;

/// Template id of the product category page.
pub const CATEGORY_PAGE_TEMPLATE: &str = "dbslimdemoMain.html";

/// Data bag for the product category page.
///
/// The category list is always present. A successful submission sets
/// `status_message`; a rejected one sets `ptype` and `error_messages`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageViewModel {
    pub page_array: Vec<ProductCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// The value the user submitted, echoed back for correction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_messages: Option<ErrorMessages>,
}

impl PageViewModel {
    /// Plain listing, as shown after a GET.
    pub fn listing(page_array: Vec<ProductCategory>) -> Self {
        Self {
            page_array,
            status_message: None,
            ptype: None,
            error_messages: None,
        }
    }

    /// Listing after a successful insert.
    pub fn added(status_message: String, page_array: Vec<ProductCategory>) -> Self {
        Self {
            status_message: Some(status_message),
            ..Self::listing(page_array)
        }
    }

    /// Listing after a rejected submission.
    pub fn rejected(
        submitted: String,
        errors: ErrorMessages,
        page_array: Vec<ProductCategory>,
    ) -> Self {
        Self {
            ptype: Some(submitted),
            error_messages: Some(errors),
            ..Self::listing(page_array)
        }
    }
}

/// Renders a view model with a named template.
pub trait PageRenderer: Send + Sync {
    /// `Content-Type` of the rendered output.
    fn content_type(&self) -> &'static str;

    fn render(&self, template: &str, model: &PageViewModel) -> Result<String, CoreError>;
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

/// Server-side HTML renderer for the product category page.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl PageRenderer for HtmlRenderer {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(&self, template: &str, model: &PageViewModel) -> Result<String, CoreError> {
        match template {
            CATEGORY_PAGE_TEMPLATE => render_category_page(model)
                .map_err(|e| CoreError::Internal(format!("Failed to render {template}: {e}"))),
            other => Err(CoreError::NotFound {
                entity: "Template",
                id: other.to_string(),
            }),
        }
    }
}

fn render_category_page(model: &PageViewModel) -> Result<String, std::fmt::Error> {
    let mut out = String::with_capacity(2048);

    out.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n<title>Product Categories</title>\n\
         </head>\n<body>\n<h1>Product Categories</h1>\n",
    );

    if let Some(status) = &model.status_message {
        writeln!(out, "<p class=\"status\">{}</p>", escape_html(status))?;
    }

    let field_error = model
        .error_messages
        .as_ref()
        .and_then(|errors| errors.get(PTYPE));
    let value = model.ptype.as_deref().unwrap_or_default();

    writeln!(out, "<form method=\"post\">")?;
    writeln!(out, "<label for=\"{PTYPE}\">{PTYPE_LABEL}</label>")?;
    writeln!(
        out,
        "<input type=\"text\" name=\"{PTYPE}\" id=\"{PTYPE}\" value=\"{}\">",
        escape_html(value)
    )?;
    if let Some(message) = field_error {
        writeln!(out, "<span class=\"error\">{}</span>", escape_html(message))?;
    }
    writeln!(out, "<button type=\"submit\">Add</button>\n</form>")?;

    out.push_str("<table>\n<tr><th>ID</th><th>Name</th></tr>\n");
    for category in &model.page_array {
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td></tr>",
            category.id,
            escape_html(&category.name)
        )?;
    }
    out.push_str("</table>\n</body>\n</html>\n");

    Ok(out)
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Emits the view model itself as JSON. Any template id is accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl PageRenderer for JsonRenderer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, _template: &str, model: &PageViewModel) -> Result<String, CoreError> {
        serde_json::to_string(model).map_err(|e| CoreError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slimshop_core::validation::validate_category_name;

    fn categories() -> Vec<ProductCategory> {
        vec![
            ProductCategory {
                id: 1,
                name: "Books".to_string(),
            },
            ProductCategory {
                id: 2,
                name: "<Toys>".to_string(),
            },
        ]
    }

    #[test]
    fn html_lists_categories_escaped() {
        let html = HtmlRenderer
            .render(CATEGORY_PAGE_TEMPLATE, &PageViewModel::listing(categories()))
            .unwrap();

        assert!(html.contains("<td>1</td><td>Books</td>"));
        assert!(html.contains("<td>2</td><td>&lt;Toys&gt;</td>"));
        assert!(!html.contains("class=\"status\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn html_shows_status_message() {
        let model = PageViewModel::added("Product Category Toys added".into(), categories());
        let html = HtmlRenderer.render(CATEGORY_PAGE_TEMPLATE, &model).unwrap();

        assert!(html.contains("<p class=\"status\">Product Category Toys added</p>"));
    }

    #[test]
    fn html_echoes_submitted_value_and_error() {
        let errors = validate_category_name("Home \"Goods\"").unwrap_err();
        let model = PageViewModel::rejected("Home \"Goods\"".into(), errors, categories());
        let html = HtmlRenderer.render(CATEGORY_PAGE_TEMPLATE, &model).unwrap();

        assert!(html.contains("value=\"Home &quot;Goods&quot;\""));
        assert!(html.contains(
            "<span class=\"error\">Please enter a Product Category as a Single Word.</span>"
        ));
    }

    #[test]
    fn unknown_template_is_not_found() {
        let err = HtmlRenderer
            .render("missing.html", &PageViewModel::listing(Vec::new()))
            .unwrap_err();

        assert!(matches!(err, CoreError::NotFound { entity: "Template", .. }));
    }

    #[test]
    fn json_bag_uses_page_keys() {
        let errors = validate_category_name("").unwrap_err();
        let model = PageViewModel::rejected(String::new(), errors, categories());
        let json: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(CATEGORY_PAGE_TEMPLATE, &model).unwrap())
                .unwrap();

        assert_eq!(json["ptype"], "");
        assert_eq!(
            json["errorMessages"]["ptype"],
            "Please enter a Product Category."
        );
        assert_eq!(json["pageArray"][0]["product_category_name"], "Books");
        assert!(json.get("statusMessage").is_none());
    }

    #[test]
    fn escape_html_handles_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
