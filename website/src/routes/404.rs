use maud::{Markup, html};
use maudit::route::prelude::*;
use vitrine::PageProps;

use crate::layout::layout;

#[route("404.html")]
pub struct NotFound;

impl Route for NotFound {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let page = |props: &PageProps| -> Markup {
            html! {
                h1 { (props.get_str("title").unwrap_or_default()) }
                p { "All the site's a stage, but this page plays not its part." }
                a href="/" { "Go back to safety" }
            }
        };
        let props: PageProps = [("title", "404 - Not Found")].into_iter().collect();

        layout(ctx, &page, &props)
    }
}
