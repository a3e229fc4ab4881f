//! Running the shell inside Maudit routes.
use maud::{DOCTYPE, Markup, html};
use maudit::maud::generator;
use maudit::route::PageContext;

use crate::{
    errors::VitrineError, page::Renderable, props::PageProps, shell::AppShell,
    styles::materialized_styles,
};

/// Include every stylesheet of the global registry in the page being rendered.
///
/// Maudit takes care of bundling and hashing them, the generated ones are written to disk on the first call.
pub fn include_registered_styles(ctx: &mut PageContext) -> Result<(), VitrineError> {
    for path in materialized_styles()? {
        ctx.assets.include_style(path)?;
    }

    Ok(())
}

/// Render a full HTML document whose body is `page` composed by `shell`.
///
/// ## Example
/// ```rs
/// use maud::html;
/// use maudit::route::prelude::*;
/// use vitrine::{AppShell, PageProps, host::document};
///
/// #[route("/")]
/// pub struct Index;
///
/// impl Route for Index {
///   fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
///     let shell = AppShell::new()?;
///     let page = |_: &PageProps| html! { h1 { "Hello" } };
///
///     Ok::<_, Box<dyn std::error::Error>>(document(ctx, &shell, &page, &PageProps::new(), "Home")?)
///   }
/// }
/// ```
pub fn document<P: Renderable + ?Sized>(
    ctx: &mut PageContext,
    shell: &AppShell,
    page: &P,
    props: &PageProps,
    title: &str,
) -> Result<Markup, VitrineError> {
    include_registered_styles(ctx)?;

    Ok(html_document(title, shell.compose(page, props)))
}

/// The HTML document around an already composed body.
pub fn html_document(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                title { (title) }
            }
            body {
                (body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maudit::GENERATOR;

    #[test]
    fn test_html_document_shape() {
        let output = html_document("Post A - Vitrine", html! { article { "Hello" } }).into_string();

        assert!(output.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(output.contains("<meta charset=\"utf-8\">"));
        assert!(output.contains(&format!("<meta name=\"generator\" content=\"{}\">", GENERATOR)));
        assert!(output.contains("<title>Post A - Vitrine</title>"));
        assert!(output.ends_with("<body><article>Hello</article></body></html>"));
    }

    #[test]
    fn test_html_document_escapes_title() {
        let output = html_document("<script>", html! {}).into_string();

        assert!(output.contains("<title>&lt;script&gt;</title>"));
    }
}
