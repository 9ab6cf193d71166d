//! Resource catalog state: bookmarks, completion marks, client-side filter.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use crate::notify::{Notifier, Topic};
use crate::storage::{Identity, LocalStore, RecordKind};

/// One entry in the learning-resource catalog.
///
/// The catalog ships with the client; only the per-user bookmark/completed
/// marks are persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceItem {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub kind: &'static str,
    pub url: &'static str,
}

/// The built-in catalog.
pub fn catalog() -> Vec<ResourceItem> {
    vec![
        ResourceItem { id: "dsa-primer", title: "Data Structures Primer", category: "dsa", kind: "course", url: "https://example.com/dsa-primer" },
        ResourceItem { id: "big-o-guide", title: "Big-O Complexity Guide", category: "dsa", kind: "article", url: "https://example.com/big-o" },
        ResourceItem { id: "dp-patterns", title: "Dynamic Programming Patterns", category: "dsa", kind: "article", url: "https://example.com/dp-patterns" },
        ResourceItem { id: "react-hooks", title: "React Hooks in Depth", category: "web-dev", kind: "video", url: "https://example.com/react-hooks" },
        ResourceItem { id: "css-layout", title: "Modern CSS Layout", category: "web-dev", kind: "course", url: "https://example.com/css-layout" },
        ResourceItem { id: "http-basics", title: "HTTP from First Principles", category: "web-dev", kind: "article", url: "https://example.com/http" },
        ResourceItem { id: "sql-joins", title: "SQL Joins Explained", category: "databases", kind: "article", url: "https://example.com/sql-joins" },
        ResourceItem { id: "indexing", title: "Database Indexing Strategies", category: "databases", kind: "video", url: "https://example.com/indexing" },
        ResourceItem { id: "system-design-intro", title: "System Design Interview Intro", category: "system-design", kind: "course", url: "https://example.com/system-design" },
        ResourceItem { id: "caching-layers", title: "Caching Layers and Invalidation", category: "system-design", kind: "article", url: "https://example.com/caching" },
        ResourceItem { id: "behavioral-prep", title: "Behavioral Interview Prep", category: "career", kind: "video", url: "https://example.com/behavioral" },
        ResourceItem { id: "resume-checklist", title: "Engineering Resume Checklist", category: "career", kind: "article", url: "https://example.com/resume" },
    ]
}

/// Toggle `id` in a mark list. Returns `true` when the id is now present.
pub fn toggle_id(list: &mut Vec<String>, id: &str) -> bool {
    if let Some(pos) = list.iter().position(|x| x == id) {
        list.remove(pos);
        false
    } else {
        list.push(id.to_owned());
        true
    }
}

/// Case-insensitive title search plus optional category filter.
pub fn filter_resources<'a>(
    items: &'a [ResourceItem],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a ResourceItem> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .filter(|item| needle.is_empty() || item.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn load_bookmarks(store: &LocalStore, identity: &Identity) -> Vec<String> {
    store.load(RecordKind::ResourceBookmarks, identity, Vec::new())
}

pub fn save_bookmarks(
    store: &LocalStore,
    notifier: &Notifier,
    identity: &Identity,
    bookmarks: &[String],
) {
    store.save(RecordKind::ResourceBookmarks, identity, &bookmarks);
    notifier.notify(Topic::Resources);
}

pub fn load_completed(store: &LocalStore, identity: &Identity) -> Vec<String> {
    store.load(RecordKind::CompletedResources, identity, Vec::new())
}

pub fn save_completed(
    store: &LocalStore,
    notifier: &Notifier,
    identity: &Identity,
    completed: &[String],
) {
    store.save(RecordKind::CompletedResources, identity, &completed);
    notifier.notify(Topic::Resources);
}
