use maud::{Markup, PreEscaped};

use crate::props::PageProps;

/// Anything that can be rendered as the content of a page given its properties.
///
/// Closures taking `&PageProps` are renderable, which covers most pages:
/// ```rust
/// use maud::html;
/// use vitrine::{page::Renderable, props::PageProps};
///
/// let page = |props: &PageProps| html! { h1 { (props.get_str("title").unwrap_or_default()) } };
/// let props: PageProps = [("title", "Post A")].into_iter().collect();
///
/// assert_eq!(page.render(&props).into_string(), "<h1>Post A</h1>");
/// ```
pub trait Renderable {
    fn render(&self, props: &PageProps) -> Markup;
}

impl<F> Renderable for F
where
    F: Fn(&PageProps) -> Markup,
{
    fn render(&self, props: &PageProps) -> Markup {
        self(props)
    }
}

/// Already rendered content, properties are ignored.
impl Renderable for PreEscaped<String> {
    fn render(&self, _props: &PageProps) -> Markup {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    #[test]
    fn test_markup_ignores_props() {
        let page = html! { p { "Static" } };
        let props: PageProps = [("title", "ignored")].into_iter().collect();

        assert_eq!(page.render(&props).into_string(), "<p>Static</p>");
    }

    #[test]
    fn test_boxed_trait_object() {
        let pages: Vec<Box<dyn Renderable>> = vec![
            Box::new(html! { "a" }),
            Box::new(|props: &PageProps| html! { (props.len()) }),
        ];

        let rendered = pages
            .iter()
            .map(|page| page.render(&PageProps::new()).into_string())
            .collect::<Vec<_>>();

        assert_eq!(rendered, vec!["a", "0"]);
    }
}
