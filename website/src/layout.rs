use std::sync::OnceLock;

use maud::Markup;
use maudit::route::PageContext;
use vitrine::{AppShell, PageProps, Renderable, ShellOptions, errors::VitrineError, host::document};

const SITE_NAME: &str = "Vitrine";

static SHELL: OnceLock<AppShell> = OnceLock::new();

fn shell() -> Result<&'static AppShell, VitrineError> {
    if let Some(shell) = SHELL.get() {
        return Ok(shell);
    }

    let shell = AppShell::with_options(ShellOptions::from_env()?)?;
    Ok(SHELL.get_or_init(|| shell))
}

fn page_title(title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{} - {}", title, SITE_NAME),
        None => SITE_NAME.to_string(),
    }
}

pub fn layout<P: Renderable + ?Sized>(
    ctx: &mut PageContext,
    page: &P,
    props: &PageProps,
) -> Result<Markup, Box<dyn std::error::Error>> {
    let title = page_title(props.get_str("title"));

    Ok(document(ctx, shell()?, page, props, &title)?)
}
