use axum::extract::{rejection::QueryRejection, Query};
use axum::response::Html;
use picform_core::Operation;
use serde::Deserialize;

/// Error messages echoed back by the operation redirects
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuery {
    upload_error: Option<String>,
    resize_error: Option<String>,
    convert_error: Option<String>,
    crop_error: Option<String>,
}

impl IndexQuery {
    fn error_for(&self, operation: Operation) -> Option<&str> {
        let message = match operation {
            Operation::Upload => &self.upload_error,
            Operation::Resize => &self.resize_error,
            Operation::Convert => &self.convert_error,
            Operation::Crop => &self.crop_error,
        };
        message.as_deref().filter(|m| !m.is_empty())
    }
}

struct FormSpec {
    operation: Operation,
    title: &'static str,
    button: &'static str,
    text_fields: &'static [(&'static str, &'static str)],
}

const FORMS: [FormSpec; 4] = [
    FormSpec {
        operation: Operation::Upload,
        title: "Upload Image",
        button: "Upload",
        text_fields: &[],
    },
    FormSpec {
        operation: Operation::Resize,
        title: "Resize Image",
        button: "Resize",
        text_fields: &[("Width", "width"), ("Height", "height")],
    },
    FormSpec {
        operation: Operation::Convert,
        title: "Convert Image Format",
        button: "Convert",
        text_fields: &[("Format", "format")],
    },
    FormSpec {
        operation: Operation::Crop,
        title: "Crop Image",
        button: "Crop",
        text_fields: &[("X", "x"), ("Y", "y"), ("Width", "width"), ("Height", "height")],
    },
];

/// Index page handler
///
/// Renders one form per operation. A malformed query string is treated as if
/// no errors were reported.
pub async fn index(query: Result<Query<IndexQuery>, QueryRejection>) -> Html<String> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    Html(render_index(&query))
}

fn render_index(query: &IndexQuery) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Image Processing</title>\n</head>\n<body>\n<h1>Image Processing API</h1>\n",
    );

    for (i, form) in FORMS.iter().enumerate() {
        if i > 0 {
            page.push_str("<br>\n");
        }

        page.push_str(&format!(
            "<form action=\"{}\" method=\"post\" enctype=\"multipart/form-data\">\n<h2>{}</h2>\n<input type=\"file\" name=\"file\" required><br>\n",
            form.operation.route(),
            form.title
        ));
        for (label, name) in form.text_fields {
            page.push_str(&format!(
                "{}: <input type=\"text\" name=\"{}\" required><br>\n",
                label, name
            ));
        }
        page.push_str(&format!(
            "<button type=\"submit\">{}</button>\n</form>\n",
            form.button
        ));

        if let Some(message) = query.error_for(form.operation) {
            page.push_str(&format!(
                "<p style=\"color:red;\">{}</p>\n",
                escape_html(message)
            ));
        }
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &#34;y&#34;&lt;/script&gt;"
        );
        assert_eq!(escape_html("Invalid width"), "Invalid width");
    }

    #[test]
    fn test_render_without_errors() {
        let page = render_index(&IndexQuery::default());

        for route in ["/upload", "/resize", "/convert", "/crop"] {
            assert!(page.contains(&format!("action=\"{}\"", route)), "missing {}", route);
        }
        assert_eq!(page.matches("enctype=\"multipart/form-data\"").count(), 4);
        assert!(page.contains("name=\"format\""));
        assert!(!page.contains("color:red"));
    }

    #[test]
    fn test_render_shows_error_under_its_form() {
        let query = IndexQuery {
            resize_error: Some("Invalid width".to_string()),
            crop_error: Some(String::new()),
            ..IndexQuery::default()
        };
        let page = render_index(&query);

        assert_eq!(page.matches("color:red").count(), 1);
        let error_at = page.find("Invalid width").unwrap();
        let resize_form = page.find("action=\"/resize\"").unwrap();
        let convert_form = page.find("action=\"/convert\"").unwrap();
        assert!(resize_form < error_at && error_at < convert_form);
    }

    #[test]
    fn test_render_escapes_messages() {
        let query = IndexQuery {
            upload_error: Some("<b>bad</b>".to_string()),
            ..IndexQuery::default()
        };
        let page = render_index(&query);
        assert!(page.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(!page.contains("<b>bad</b>"));
    }
}
