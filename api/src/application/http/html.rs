/// Escapes the five HTML-special characters so model output and corpus text
/// can be placed inside element bodies and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
    output
}

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
    .container { margin-top: 20px; }
    .recipe { border: 1px solid #ddd; padding: 15px; margin: 10px 0; border-radius: 5px; }
    .recipe-title { font-size: 1.2em; font-weight: bold; }
    img { max-width: 100%; height: auto; margin: 20px 0; }
    .section { margin: 20px 0; }
    .section-title { font-weight: bold; margin-bottom: 10px; }
"#;

/// Wraps `body` in the shared page chrome. `body` must already be escaped.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}
