//! Class-based syntax highlighting.
//!
//! Instead of inlining colors in every span, code is tagged with classes and the colors live in a
//! single stylesheet generated from a syntect theme, which the shell registers for every page.
use std::sync::OnceLock;

use maud::{Markup, PreEscaped, html};
use syntect::{
    highlighting::ThemeSet,
    html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

use crate::errors::HighlightError;

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

fn find_syntax<'a>(ss: &'a SyntaxSet, language: &str, content: &str) -> &'a SyntaxReference {
    ss.find_syntax_by_token(language)
        .or_else(|| ss.find_syntax_by_name(language))
        .or_else(|| ss.find_syntax_by_extension(language))
        .or_else(|| ss.find_syntax_by_first_line(content))
        .unwrap_or_else(|| ss.find_syntax_plain_text())
}

/// Generate the stylesheet matching the classes emitted by [`highlight_code`] for one of syntect's default themes.
pub fn stylesheet(theme_name: &str) -> Result<String, HighlightError> {
    let theme = get_theme_set()
        .themes
        .get(theme_name)
        .ok_or_else(|| HighlightError::UnknownTheme(theme_name.to_string()))?;

    Ok(css_for_theme_with_class_style(theme, CLASS_STYLE)?)
}

/// Highlight a snippet of code.
///
/// The language can be anything syntect knows a syntax by: a token (`rs`), a name (`Rust`) or an extension.
/// Unknown languages are rendered as plain text.
pub fn highlight_code(language: &str, code: &str) -> Result<Markup, HighlightError> {
    let ss = get_syntax_set();
    let syntax = find_syntax(ss, language, code);

    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, ss, CLASS_STYLE);
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }

    Ok(html! {
        pre.code data-language=(language) {
            code data-language=(language) { (PreEscaped(generator.finalize())) }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_for_default_theme() {
        let css = stylesheet("InspiredGitHub").unwrap();

        assert!(css.contains(".code"));
        assert!(css.contains("color"));
    }

    #[test]
    fn test_stylesheet_unknown_theme() {
        let result = stylesheet("definitely-not-a-theme");

        assert!(matches!(result, Err(HighlightError::UnknownTheme(name)) if name == "definitely-not-a-theme"));
    }

    #[test]
    fn test_highlight_rust() {
        let markup = highlight_code("rs", "fn main() {}\n").unwrap().into_string();

        assert!(markup.starts_with(r#"<pre class="code" data-language="rs"><code data-language="rs">"#));
        assert!(markup.contains(r#"<span class="source rust">"#));
        assert!(markup.ends_with("</code></pre>"));
    }

    #[test]
    fn test_unknown_language_is_plain_text() {
        let markup = highlight_code("nope", "<b>hi</b>\n").unwrap().into_string();

        assert!(markup.contains("text plain"));
        // Code is escaped, never injected as HTML
        assert!(markup.contains("&lt;b&gt;"));
    }
}
