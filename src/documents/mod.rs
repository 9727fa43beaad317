//! Folder/document hierarchy as seen by the documents page.
//!
//! Entities are fetched wholesale from the backend; everything here only
//! reads the caller's slices and returns borrowed views into them.

mod model;
mod tree;
mod view;

pub use model::{Document, Folder};
pub use tree::{Crumb, FolderIndex, TreeError};
pub use view::{categories, CategoryFilter, DocumentQuery, DocumentTree, SortKey, TreeView};
