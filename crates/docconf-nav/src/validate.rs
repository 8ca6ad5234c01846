//! Structural validation of a navigation tree declaration.

use std::collections::HashMap;

use crate::error::NavError;
use crate::node::NavNode;

/// Validate the top-level sections of a navigation tree.
///
/// Visits every node exactly once and checks, at every node (not only
/// leaves):
///
/// - the title is not blank or whitespace-only
/// - an external link is not flagged as a directory
/// - a node has either a destination or children (no dead-end groups)
/// - internal paths are unique across the whole tree
///
/// Internal-path uniqueness is keyed on the path together with the
/// directory flag: a directory entry and a document leaf may share a path
/// (the directory's landing document), but two entries with the same flag
/// may not. The first duplicate encountered is reported with both
/// offending titles.
///
/// # Errors
///
/// Returns the first [`NavError`] found; the caller must reject the whole
/// configuration rather than emit it partially.
pub fn validate(nodes: &[NavNode]) -> Result<(), NavError> {
    let mut seen: HashMap<(String, bool), String> = HashMap::new();
    let mut visited = 0usize;
    for node in nodes {
        validate_node(node, "the root", &mut seen, &mut visited)?;
    }
    tracing::debug!(nodes = visited, "navigation tree validated");
    Ok(())
}

fn validate_node(
    node: &NavNode,
    parent: &str,
    seen: &mut HashMap<(String, bool), String>,
    visited: &mut usize,
) -> Result<(), NavError> {
    *visited += 1;

    if node.title.trim().is_empty() {
        let location = match node.path.as_deref() {
            Some(path) => format!("\"{path}\""),
            None => format!("a group under {parent}"),
        };
        return Err(NavError::EmptyTitle { location });
    }

    if node.is_external() && node.directory {
        return Err(NavError::InvalidNode {
            title: node.title.clone(),
            reason: "an external link cannot be a directory".to_owned(),
        });
    }

    if node.path.is_none() && node.children.is_empty() {
        return Err(NavError::InvalidNode {
            title: node.title.clone(),
            reason: "has neither a path nor children".to_owned(),
        });
    }

    if let Some(path) = node.internal_path() {
        let key = (path.to_owned(), node.directory);
        if let Some(first) = seen.get(&key) {
            return Err(NavError::DuplicatePath {
                path: path.to_owned(),
                first: first.clone(),
                second: node.title.clone(),
            });
        }
        seen.insert(key, node.title.clone());
    }

    let parent_label = format!("\"{}\"", node.title);
    for child in &node.children {
        validate_node(child, &parent_label, seen, visited)?;
    }

    Ok(())
}
