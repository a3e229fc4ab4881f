mod index;
pub use index::Index;

mod posts;
pub use posts::{PostPage, PostParams};

#[path = "404.rs"]
mod not_found;
pub use not_found::NotFound;
