use maud::{Markup, PreEscaped, html};
use maudit::route::prelude::*;
use vitrine::PageProps;

use crate::{content::PostContent, layout::layout};

#[route("/posts/[slug]")]
pub struct PostPage;

#[derive(Params, Clone)]
pub struct PostParams {
    pub slug: String,
}

impl Route<PostParams> for PostPage {
    fn pages(&self, ctx: &mut DynamicRouteContext) -> Pages<PostParams> {
        let posts = ctx.content::<PostContent>("posts");

        posts.into_pages(|entry| {
            Page::from_params(PostParams {
                slug: entry.id.clone(),
            })
        })
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_post(ctx)
    }
}

fn post_page(props: &PageProps, body: &str) -> Markup {
    html! {
        header {
            h1 { (props.get_str("title").unwrap_or_default()) }
            @if let Some(date) = props.get_str("date") {
                p { small { (date) } }
            }
            @if let Some(description) = props.get_str("description") {
                p { em { (description) } }
            }
        }
        (PreEscaped(body))
        footer {
            a href="/" { "All posts" }
        }
    }
}

fn render_post(ctx: &mut PageContext) -> Result<Markup, Box<dyn std::error::Error>> {
    let slug = ctx.params::<PostParams>().slug;
    let post = ctx.content::<PostContent>("posts").get_entry(&slug);

    let props = post.data(ctx).props();
    let body = post.render(ctx);
    let page = |props: &PageProps| post_page(props, &body);

    layout(ctx, &page, &props)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_page_uses_front_matter() {
        let props: PageProps = [
            ("title", "Post A"),
            ("date", "March 3, 2025"),
            ("description", "The first one"),
        ]
        .into_iter()
        .collect();

        let output = post_page(&props, "<p>Body</p>").into_string();

        assert!(output.starts_with("<header><h1>Post A</h1><p><small>March 3, 2025</small></p><p><em>The first one</em></p></header>"));
        assert!(output.contains("<p>Body</p><footer>"));
    }

    #[test]
    fn test_post_page_without_description() {
        let props: PageProps = [("title", "Post B")].into_iter().collect();

        let output = post_page(&props, "").into_string();

        assert!(!output.contains("<em>"));
    }
}
