use maud::html;
use maudit::assets::RouteAssets;
use maudit::content::ContentSources;
use maudit::route::PageContext;
use vitrine::{AppShell, PageProps, ShellOptions, host::document};

#[test]
fn test_document_includes_registered_styles() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("global.css");
    std::fs::write(&global, "body { margin: 0; }").unwrap();

    let shell = AppShell::with_options(ShellOptions {
        global_stylesheet: global,
        generated_styles_dir: dir.path().join("generated"),
        ..Default::default()
    })
    .unwrap();

    let content = ContentSources::new(vec![]);
    let mut assets = RouteAssets::default();
    let current_path = "/posts/post-a".to_string();
    let base_url = None;
    let mut ctx = PageContext::from_static_route(&content, &mut assets, &current_path, &base_url, None);

    let page = |props: &PageProps| html! { h1 { (props.get_str("title").unwrap_or_default()) } };
    let props: PageProps = [("title", "Post A")].into_iter().collect();

    let output = document(&mut ctx, &shell, &page, &props, "Post A - Vitrine")
        .unwrap()
        .into_string();
    drop(ctx);

    assert!(output.contains("<title>Post A - Vitrine</title>"));
    assert!(output.ends_with(
        r#"<body><article style="max-width: 768px; margin: 0 auto; font-family: sans-serif"><h1>Post A</h1></article></body></html>"#
    ));

    // The generated code stylesheet and the global one
    assert_eq!(assets.included_styles().count(), 2);
    assert!(dir.path().join("generated/code.css").exists());
}
