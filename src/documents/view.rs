//! Listing of one folder: breadcrumb, sub-folders and filtered documents.

use std::collections::HashSet;

use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::model::{Document, Folder};
use super::tree::{Crumb, FolderIndex, TreeError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Type(String),
}

impl CategoryFilter {
    /// Sentinel the UI uses for "no filtering by type".
    pub const ALL: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Type(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Type(t) => t,
        }
    }

    fn matches(&self, document_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Type(t) => t == document_type,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    Title,
    CreatedAt,
    #[default]
    UpdatedAt,
}

impl SortKey {
    /// Unrecognized keys fall back to `UpdatedAt`.
    pub fn parse(value: &str) -> Self {
        match value {
            "title" => Self::Title,
            "createdAt" => Self::CreatedAt,
            _ => Self::UpdatedAt,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    pub current_folder: Option<String>,
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl DocumentQuery {
    pub fn in_folder(folder: Option<&str>) -> Self {
        Self {
            current_folder: folder.map(str::to_string),
            ..Self::default()
        }
    }

    // "" is treated as the root, same as for documents.
    fn folder(&self) -> Option<&str> {
        self.current_folder.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeView<'a> {
    pub breadcrumb_path: Vec<Crumb<'a>>,
    pub visible_folders: Vec<&'a Folder>,
    pub visible_documents: Vec<&'a Document>,
}

/// Read-only view over the page's document and folder lists.
#[derive(Debug, Clone)]
pub struct DocumentTree<'a> {
    documents: &'a [Document],
    index: FolderIndex<'a>,
}

impl<'a> DocumentTree<'a> {
    pub fn new(documents: &'a [Document], folders: &'a [Folder]) -> Self {
        Self {
            documents,
            index: FolderIndex::new(folders),
        }
    }

    pub fn folders(&self) -> &FolderIndex<'a> {
        &self.index
    }

    /// Computes what the documents page shows for `query`.
    ///
    /// Folders keep listing order; only documents are sorted.
    pub fn view(&self, query: &DocumentQuery) -> Result<TreeView<'a>, TreeError> {
        let current = query.folder();
        let breadcrumb_path = self.index.breadcrumb(current)?;
        let visible_folders = self.index.children(current);

        let needle = query.search_term.to_lowercase();
        let mut visible_documents: Vec<&'a Document> = self
            .documents
            .iter()
            .filter(|d| d.is_in(current))
            .filter(|d| d.title.to_lowercase().contains(&needle))
            .filter(|d| query.category.matches(&d.document_type))
            .collect();
        sort_documents(&mut visible_documents, query.sort);

        Ok(TreeView {
            breadcrumb_path,
            visible_folders,
            visible_documents,
        })
    }

    pub fn categories(&self) -> Vec<&'a str> {
        categories(self.documents)
    }
}

fn sort_documents(documents: &mut [&Document], key: SortKey) {
    match key {
        SortKey::Title => documents.sort_by_cached_key(|d| title_collation_key(&d.title)),
        SortKey::CreatedAt => documents.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::UpdatedAt => documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
}

/// Collation key for titles: base letters first, then accents, then case.
///
/// "Ação" sorts with "Acao", before "Acordo", and "Ávila" sorts among the
/// A's rather than after "Z".
fn title_collation_key(title: &str) -> (String, String, String) {
    let lowered = title.to_lowercase();
    let base = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    (base, lowered, title.to_string())
}

/// The "all" sentinel followed by every distinct document type across the
/// whole list, in first-seen order.
pub fn categories(documents: &[Document]) -> Vec<&str> {
    let mut seen = HashSet::new();
    std::iter::once(CategoryFilter::ALL)
        .chain(
            documents
                .iter()
                .map(|d| d.document_type.as_str())
                .filter(|t| seen.insert(*t)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()
    }

    fn doc(id: &str, title: &str, kind: &str, folder: Option<&str>, created: u32, updated: u32) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            document_type: kind.to_string(),
            folder_path: folder.map(str::to_string),
            created_at: at(created),
            updated_at: at(updated),
        }
    }

    fn folder(id: &str, name: &str, parent: Option<&str>) -> Folder {
        Folder {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: parent.map(str::to_string),
        }
    }

    fn titles<'a>(view: &TreeView<'a>) -> Vec<&'a str> {
        view.visible_documents.iter().map(|&d| d.title.as_str()).collect()
    }

    #[test]
    fn test_root_shows_only_root_documents() {
        let documents = vec![
            doc("1", "Contract Draft", "contract", None, 1, 1),
            doc("2", "NDA", "contract", Some("F1"), 1, 1),
        ];
        let folders = vec![folder("F1", "Clients", None)];
        let tree = DocumentTree::new(&documents, &folders);

        let view = tree.view(&DocumentQuery::default()).unwrap();
        assert_eq!(titles(&view), vec!["Contract Draft"]);
        assert!(view.breadcrumb_path.is_empty());
        assert_eq!(view.visible_folders.len(), 1);
    }

    #[test]
    fn test_empty_current_folder_is_root() {
        let documents = vec![doc("1", "Memo", "memo", None, 1, 1)];
        let tree = DocumentTree::new(&documents, &[]);

        let view = tree.view(&DocumentQuery::in_folder(Some(""))).unwrap();
        assert_eq!(titles(&view), vec!["Memo"]);
    }

    #[test]
    fn test_subfolder_view() {
        let documents = vec![
            doc("1", "Lease", "contract", Some("B"), 1, 1),
            doc("2", "Invoice", "billing", Some("A"), 1, 1),
        ];
        let folders = vec![
            folder("A", "Clients", None),
            folder("B", "Acme", Some("A")),
            folder("C", "Archive", Some("B")),
        ];
        let tree = DocumentTree::new(&documents, &folders);

        let view = tree.view(&DocumentQuery::in_folder(Some("B"))).unwrap();
        let crumbs: Vec<&str> = view.breadcrumb_path.iter().map(|c| c.name).collect();
        assert_eq!(crumbs, vec!["Clients", "Acme"]);
        assert_eq!(view.visible_folders, vec![&folders[2]]);
        assert_eq!(titles(&view), vec!["Lease"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let documents = vec![
            doc("1", "Power of Attorney", "mandate", None, 1, 1),
            doc("2", "Lease", "contract", None, 1, 2),
        ];
        let tree = DocumentTree::new(&documents, &[]);

        let query = DocumentQuery {
            search_term: "ATTORNEY".to_string(),
            ..DocumentQuery::default()
        };
        assert_eq!(titles(&tree.view(&query).unwrap()), vec!["Power of Attorney"]);
    }

    #[test]
    fn test_category_filter() {
        let documents = vec![
            doc("1", "Lease", "contract", None, 1, 3),
            doc("2", "Appeal", "petition", None, 1, 2),
            doc("3", "NDA", "contract", None, 1, 1),
        ];
        let tree = DocumentTree::new(&documents, &[]);

        let query = DocumentQuery {
            category: CategoryFilter::parse("contract"),
            ..DocumentQuery::default()
        };
        assert_eq!(titles(&tree.view(&query).unwrap()), vec!["Lease", "NDA"]);

        let all = DocumentQuery {
            category: CategoryFilter::parse("all"),
            ..DocumentQuery::default()
        };
        assert_eq!(tree.view(&all).unwrap().visible_documents.len(), 3);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let documents = vec![
            doc("1", "Beta", "memo", None, 1, 1),
            doc("2", "alpha", "memo", None, 1, 1),
        ];
        let tree = DocumentTree::new(&documents, &[]);

        let query = DocumentQuery {
            sort: SortKey::parse("title"),
            ..DocumentQuery::default()
        };
        assert_eq!(titles(&tree.view(&query).unwrap()), vec!["alpha", "Beta"]);
    }

    #[test]
    fn test_sort_by_title_folds_accents() {
        let documents = vec![
            doc("1", "Zeta", "memo", None, 1, 1),
            doc("2", "Ávila", "memo", None, 1, 1),
            doc("3", "Ação", "memo", None, 1, 1),
            doc("4", "Acordo", "memo", None, 1, 1),
        ];
        let tree = DocumentTree::new(&documents, &[]);

        let query = DocumentQuery {
            sort: SortKey::Title,
            ..DocumentQuery::default()
        };
        assert_eq!(
            titles(&tree.view(&query).unwrap()),
            vec!["Ação", "Acordo", "Ávila", "Zeta"]
        );
    }

    #[test]
    fn test_title_collation_key_orders_base_then_accent() {
        assert!(title_collation_key("Acao") < title_collation_key("Ação"));
        assert!(title_collation_key("Ação") < title_collation_key("acordo"));
    }

    #[test]
    fn test_sort_by_dates_descending() {
        let documents = vec![
            doc("1", "Old", "memo", None, 1, 9),
            doc("2", "New", "memo", None, 5, 2),
        ];
        let tree = DocumentTree::new(&documents, &[]);

        let by_created = DocumentQuery {
            sort: SortKey::CreatedAt,
            ..DocumentQuery::default()
        };
        assert_eq!(titles(&tree.view(&by_created).unwrap()), vec!["New", "Old"]);

        let by_default = DocumentQuery {
            sort: SortKey::parse("size"),
            ..DocumentQuery::default()
        };
        assert_eq!(titles(&tree.view(&by_default).unwrap()), vec!["Old", "New"]);
    }

    #[test]
    fn test_folder_with_blank_parent_listed_at_root() {
        let folders: Vec<Folder> = serde_json::from_value(serde_json::json!([
            {"id": "A", "name": "Clients", "parentId": ""},
            {"id": "B", "name": "Acme", "parentId": "A"}
        ]))
        .unwrap();
        let tree = DocumentTree::new(&[], &folders);

        let view = tree.view(&DocumentQuery::default()).unwrap();
        assert_eq!(view.visible_folders, vec![&folders[0]]);

        let nested = tree.view(&DocumentQuery::in_folder(Some("B"))).unwrap();
        let crumbs: Vec<&str> = nested.breadcrumb_path.iter().map(|c| c.id).collect();
        assert_eq!(crumbs, vec!["A", "B"]);
    }

    #[test]
    fn test_view_reports_cycle() {
        let folders = vec![folder("X", "X", Some("Y")), folder("Y", "Y", Some("X"))];
        let tree = DocumentTree::new(&[], &folders);

        let err = tree.view(&DocumentQuery::in_folder(Some("X"))).unwrap_err();
        assert!(matches!(err, TreeError::FolderCycle { .. }));
    }

    #[test]
    fn test_categories_first_seen_across_all_folders() {
        let documents = vec![
            doc("1", "a", "contract", Some("F1"), 1, 1),
            doc("2", "b", "petition", None, 1, 1),
            doc("3", "c", "contract", None, 1, 1),
            doc("4", "d", "memo", Some("F2"), 1, 1),
        ];
        assert_eq!(categories(&documents), vec!["all", "contract", "petition", "memo"]);
        assert_eq!(categories(&[]), vec!["all"]);
    }

    #[test]
    fn test_category_filter_round_trip_str() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("memo").as_str(), "memo");
    }
}
