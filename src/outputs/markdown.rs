//! Markdown rendering of headline lists and article details.

use crate::models::Article;
use std::fmt::Write;

/// Render a numbered list of articles under a `# heading`.
///
/// ```text
/// # Tecnología
///
/// ## 1. Title
///
/// ![](image)
///
/// Description
///
/// [Leer más](url)
/// ```
pub fn articles_to_markdown(heading: &str, articles: &[Article]) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# {heading}\n");
    if articles.is_empty() {
        md.push_str("_No hay noticias disponibles._\n");
        return md;
    }
    for (i, article) in articles.iter().enumerate() {
        let _ = writeln!(md, "## {}. {}\n", i + 1, article.title);
        let _ = writeln!(md, "![]({})\n", article.url_to_image);
        let _ = writeln!(md, "{}\n", article.description);
        if !article.url.is_empty() {
            let _ = writeln!(md, "[Leer más]({})\n", article.url);
        }
    }
    md
}

/// Render a single article the way the detail view shows it: image, title,
/// body (content, else description) and a link when the article has one.
pub fn article_to_markdown(article: &Article) -> String {
    let mut md = String::new();
    if !article.url_to_image.is_empty() {
        let _ = writeln!(md, "![]({})\n", article.url_to_image);
    }
    let _ = writeln!(md, "# {}\n", article.title);
    let _ = writeln!(md, "{}\n", article.body());
    if !article.url.is_empty() {
        let _ = writeln!(md, "[Read more]({})", article.url);
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(url: &str, content: &str) -> Article {
        Article {
            title: "Titular de prueba".to_string(),
            description: "Una descripción suficiente".to_string(),
            url: url.to_string(),
            url_to_image: "https://example.com/a.png".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_list_numbers_articles() {
        let md = articles_to_markdown(
            "General",
            &[article("https://a", "x"), article("https://b", "y")],
        );
        assert!(md.starts_with("# General\n"));
        assert!(md.contains("## 1. Titular de prueba"));
        assert!(md.contains("## 2. Titular de prueba"));
        assert!(md.contains("[Leer más](https://b)"));
    }

    #[test]
    fn test_list_empty() {
        let md = articles_to_markdown("Salud", &[]);
        assert!(md.contains("No hay noticias disponibles"));
    }

    #[test]
    fn test_detail_uses_content_then_description() {
        let md = article_to_markdown(&article("https://a", "Cuerpo completo"));
        assert!(md.contains("Cuerpo completo"));
        assert!(md.contains("[Read more](https://a)"));

        let md = article_to_markdown(&article("", ""));
        assert!(md.contains("Una descripción suficiente"));
        assert!(!md.contains("Read more"));
    }
}
