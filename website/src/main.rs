use content::content_sources;
use maudit::{BuildOptions, BuildOutput, coronate, routes};

mod content;
mod layout;
mod routes;

use routes::*;

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    coronate(
        routes![Index, PostPage, NotFound],
        content_sources(),
        BuildOptions::default(),
    )
}
