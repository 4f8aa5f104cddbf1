//! Companion CSS and HTML outputs shown next to the generated component

use crate::GeneratorConfig;

/// Tailwind stylesheet scaffold for the generated component
pub fn generate_css() -> String {
    [
        "/* Generated Tailwind CSS styles */",
        "@tailwind base;",
        "@tailwind components;",
        "@tailwind utilities;",
        "",
        "/* Custom component styles */",
        ".component-container {",
        "  @apply p-4 space-y-4;",
        "}",
    ]
    .join("\n")
}

/// HTML host page that loads Tailwind and React from public CDNs
pub fn generate_html(config: &GeneratorConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{}</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
  <div id="root"></div>
  <script src="https://unpkg.com/react@18/umd/react.development.js"></script>
  <script src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
  <!-- Your component code would be included here -->
</body>
</html>"#,
        config.page_title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_scaffold() {
        let css = generate_css();
        assert!(css.starts_with("/* Generated Tailwind CSS styles */"));
        assert!(css.contains("@tailwind utilities;"));
        assert!(css.ends_with("}"));
    }

    #[test]
    fn test_html_uses_page_title() {
        let config = GeneratorConfig::new().with_page_title("Landing Page");
        let html = generate_html(&config);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Landing Page</title>"));
        assert!(html.contains("react-dom@18"));
    }
}
