//! Id-indexed folder arena with cycle-guarded traversal.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;
use thiserror::Error;

use super::model::Folder;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A folder is its own ancestor.
    #[error("Folder hierarchy contains a cycle through folder {folder_id}")]
    FolderCycle { folder_id: String },
}

impl TreeError {
    fn cycle(folder_id: &str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::error!("Folder cycle detected at {}", folder_id);
        Self::FolderCycle {
            folder_id: folder_id.to_string(),
        }
    }
}

/// One step of a breadcrumb path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Crumb<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

/// Folders indexed by id, built once per listing.
///
/// The first folder wins when the backend returns a duplicated id.
#[derive(Debug, Clone)]
pub struct FolderIndex<'a> {
    folders: &'a [Folder],
    by_id: HashMap<&'a str, &'a Folder>,
}

impl<'a> FolderIndex<'a> {
    pub fn new(folders: &'a [Folder]) -> Self {
        let mut by_id = HashMap::with_capacity(folders.len());
        for folder in folders {
            by_id.entry(folder.id.as_str()).or_insert(folder);
        }
        Self { folders, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Folder> {
        self.by_id.get(id).copied()
    }

    /// Ancestor chain of `current`, root first and ending at `current`.
    ///
    /// A `parentId` that points at an unknown folder ends the walk, so the
    /// path starts at the highest folder that could be resolved.
    pub fn breadcrumb(&self, current: Option<&str>) -> Result<Vec<Crumb<'a>>, TreeError> {
        let mut path = Vec::new();
        let mut visited = HashSet::new();
        let mut cursor = current;

        while let Some(id) = cursor {
            let Some(folder) = self.get(id) else {
                break;
            };
            if !visited.insert(folder.id.as_str()) {
                return Err(TreeError::cycle(&folder.id));
            }
            path.push(Crumb {
                id: &folder.id,
                name: &folder.name,
            });
            cursor = folder.parent_id.as_deref();
        }

        path.reverse();
        Ok(path)
    }

    /// Direct sub-folders of `parent` in listing order.
    pub fn children(&self, parent: Option<&str>) -> Vec<&'a Folder> {
        self.folders
            .iter()
            .filter(|f| f.parent_id.as_deref() == parent)
            .collect()
    }

    /// Ids of every folder below `id`, breadth first. `id` itself is excluded.
    pub fn descendant_ids(&self, id: &str) -> Result<Vec<&'a str>, TreeError> {
        let mut children_of: HashMap<&str, Vec<&'a Folder>> = HashMap::new();
        for folder in self.folders {
            if let Some(parent) = folder.parent_id.as_deref() {
                children_of.entry(parent).or_default().push(folder);
            }
        }

        let mut visited: HashSet<&str> = HashSet::from([id]);
        let mut queue = VecDeque::from([id]);
        let mut out = Vec::new();

        while let Some(next) = queue.pop_front() {
            for &child in children_of.get(next).into_iter().flatten() {
                if !visited.insert(child.id.as_str()) {
                    return Err(TreeError::cycle(&child.id));
                }
                out.push(child.id.as_str());
                queue.push_back(child.id.as_str());
            }
        }

        Ok(out)
    }

    /// Whether `folder_id` can be re-parented under `new_parent` without
    /// creating a cycle.
    pub fn can_move(&self, folder_id: &str, new_parent: Option<&str>) -> Result<bool, TreeError> {
        let Some(target) = new_parent else {
            return Ok(true);
        };
        if target == folder_id {
            return Ok(false);
        }
        Ok(!self.descendant_ids(folder_id)?.contains(&target))
    }
}
