#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod errors;
pub mod highlight;
pub mod host;
pub mod logging;
pub mod options;
pub mod page;
pub mod props;
pub mod shell;
pub mod styles;

// Exports for end-users
pub use options::ShellOptions;
pub use page::Renderable;
pub use props::PageProps;
pub use shell::{AppShell, Composition};
