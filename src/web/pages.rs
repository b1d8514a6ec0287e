//! Server-rendered HTML pages built with plain format! templates.

use crate::core::render::{detail_lines, format_currency, missing_lines};
use crate::core::RequestResult;

const CSS: &str = r#"
body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
label { font-weight: bold; }
textarea, input { font-size: 1rem; margin-top: 0.25rem; }
button { font-size: 1rem; padding: 0.4rem 1rem; margin-top: 0.5rem; }
.error { color: #b00020; font-weight: bold; }
.results { border-top: 1px solid #ccc; margin-top: 1.5rem; padding-top: 0.5rem; }
"#;

/// The form page, optionally carrying a validation message and/or a
/// computed result below the form.
pub fn home_page(error: Option<&str>, result: Option<&RequestResult>) -> String {
    let mut extra = String::new();

    if let Some(message) = error {
        extra.push_str(&format!(
            r#"<p class="error">{}</p>"#,
            escape_html(message)
        ));
    }

    if let Some(result) = result {
        extra.push_str(&results_section(result));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Grocery Price Calculator</title>
    <style>{css}</style>
</head>
<body>
    <h1>Grocery Price Calculator</h1>
    <form method="POST">
        <label>Which store are you shopping at?</label><br>
        <input name="store" required placeholder="e.g., Winco"><br><br>

        <label>Enter grocery list (one item per line, format: item, quantity):</label><br>
        <textarea name="grocery_list" rows="10" cols="40" placeholder="chicken breast, 2
broccoli, 1.5
bacon, 1" required></textarea><br><br>

        <button type="submit">Calculate Total</button>
    </form>
{extra}
</body>
</html>"#,
        css = CSS,
        extra = extra,
    )
}

fn results_section(result: &RequestResult) -> String {
    let details: String = detail_lines(result)
        .iter()
        .map(|line| format!("        <li>{}</li>\n", escape_html(line)))
        .collect();

    let mut section = format!(
        r#"    <div class="results">
    <h2>Results for {store}</h2>
    <ul>
{details}    </ul>
    <p><strong>Total cost: {total}</strong></p>
"#,
        store = escape_html(&result.store),
        details = details,
        total = format_currency(result.total),
    );

    let missing = missing_lines(result);
    if !missing.is_empty() {
        let items: String = missing
            .iter()
            .map(|line| format!("        <li>{}</li>\n", escape_html(line)))
            .collect();
        section.push_str(&format!(
            r#"    <p><em>Missing items (not found):</em></p>
    <ul>
{items}    </ul>
"#,
        ));
    }

    section.push_str("    </div>\n");
    section
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
