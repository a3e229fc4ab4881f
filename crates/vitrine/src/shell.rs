use maud::{Markup, html};

use crate::{
    errors::StyleError, options::ShellOptions, page::Renderable, props::PageProps,
    styles::register_default_styles,
};

/// A page and the properties it should be rendered with, as handed over by a route.
pub struct Composition<'a, P: Renderable + ?Sized> {
    pub page: &'a P,
    pub props: &'a PageProps,
}

impl<'a, P: Renderable + ?Sized> Composition<'a, P> {
    pub fn new(page: &'a P, props: &'a PageProps) -> Self {
        Self { page, props }
    }
}

/// Frame shared by every page of the site: an `<article>` of limited width, centered, in a default font.
///
/// Creating the first shell of the process registers the site's stylesheets in the
/// [global style registry](crate::styles::StyleRegistry::global). Creating more shells or composing pages never registers them again.
///
/// ## Example
/// ```rust
/// use maud::html;
/// use vitrine::{props::PageProps, shell::AppShell};
///
/// let shell = AppShell::new().unwrap();
/// let page = |_: &PageProps| html! { "Hello" };
///
/// assert_eq!(
///     shell.compose(&page, &PageProps::new()).into_string(),
///     r#"<article style="max-width: 768px; margin: 0 auto; font-family: sans-serif">Hello</article>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AppShell {
    options: ShellOptions,
    style: String,
}

impl AppShell {
    pub fn new() -> Result<Self, StyleError> {
        Self::with_options(ShellOptions::default())
    }

    pub fn with_options(options: ShellOptions) -> Result<Self, StyleError> {
        register_default_styles(&options)?;

        Ok(Self {
            style: options.container_style(),
            options,
        })
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// Wrap `page`, rendered with `props` as is, in the article container.
    pub fn compose<P: Renderable + ?Sized>(&self, page: &P, props: &PageProps) -> Markup {
        self.render(Composition::new(page, props))
    }

    pub fn render<P: Renderable + ?Sized>(&self, composition: Composition<'_, P>) -> Markup {
        html! {
            article style=(self.style) {
                (composition.page.render(composition.props))
            }
        }
    }
}
