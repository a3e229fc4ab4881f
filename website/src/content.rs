use chrono::NaiveDate;
use maudit::content::{ContentSources, glob_markdown, markdown_entry};
use maudit::content_sources;
use vitrine::PageProps;

#[markdown_entry]
pub struct PostContent {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl PostContent {
    /// Front matter of the post, as the properties of its page.
    pub fn props(&self) -> PageProps {
        let mut props = PageProps::new();
        props.insert("title", self.title.as_str());
        props.insert("date", self.date.format("%B %-d, %Y").to_string());
        if let Some(description) = &self.description {
            props.insert("description", description.as_str());
        }

        props
    }
}

pub fn content_sources() -> ContentSources {
    content_sources!["posts" => glob_markdown::<PostContent>("content/posts/*.md")]
}
