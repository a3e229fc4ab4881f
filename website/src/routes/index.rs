use maud::{Markup, html};
use maudit::route::prelude::*;
use vitrine::{PageProps, highlight::highlight_code};

use crate::{
    content::PostContent,
    layout::layout,
    routes::{PostPage, PostParams},
};

const SAMPLE: &str = r#"let shell = AppShell::new()?;
let page = |props: &PageProps| html! { h1 { (props.get_str("title").unwrap_or_default()) } };

shell.compose(&page, &props)"#;

#[route("/")]
pub struct Index;

impl Route for Index {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_index(ctx)
    }
}

fn render_index(ctx: &mut PageContext) -> Result<Markup, Box<dyn std::error::Error>> {
    let mut posts = ctx
        .content::<PostContent>("posts")
        .entries()
        .collect::<Vec<_>>();

    // Newest first
    posts.sort_by(|a, b| b.data(ctx).date.cmp(&a.data(ctx).date));

    let sample = highlight_code("rs", SAMPLE)?;

    let page = html! {
        h1 { "Hello" }
        p { "Every page of this site is framed by the same shell:" }
        (sample)

        h2 { "Posts" }
        ul {
            @for post in &posts {
                li {
                    a href=(&PostPage.url(PostParams { slug: post.id.clone() })) {
                        (post.data(ctx).title)
                    }
                    " "
                    small { (post.data(ctx).date) }
                }
            }
        }
    };

    layout(ctx, &page, &PageProps::new())
}
