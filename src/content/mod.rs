//! Content module - articles, front-matter schema, loading and rendering

mod article;
mod collection;
mod error;
mod frontmatter;
pub mod loader;
mod markdown;
pub mod schema;

pub use article::{derive_id, Article};
pub use collection::ArticleCollection;
pub use error::ContentError;
pub use frontmatter::{FrontMatter, FrontMatterError};
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
