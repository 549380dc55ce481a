//! Types shared between the catalog, the search engine and the CLI.

mod criteria;
mod post;
mod project;
mod record;

pub use criteria::{CategoryFilter, Criteria, ParseSortKeyError, SortKey};
pub use post::BlogPost;
pub use project::Project;
pub use record::Record;
