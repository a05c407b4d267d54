//! Built-in class catalog.
//!
//! The identity backend serves no class data, so the browsable classes are a
//! fixed list. Enrollment still accepts any id reached by URL.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogClass {
    pub id: &'static str,
    pub title: &'static str,
    pub teacher_name: &'static str,
}

const CLASSES: &[CatalogClass] = &[
    CatalogClass { id: "1", title: "Shakespeare's Tragedies", teacher_name: "Dr. Anne Rowe" },
    CatalogClass { id: "2", title: "Victorian Literature", teacher_name: "Prof. John Davis" },
    CatalogClass { id: "3", title: "Modernist Poetry", teacher_name: "Sarah Johnson" },
    CatalogClass { id: "4", title: "American Literature", teacher_name: "Dr. Jane Smith" },
];

pub fn find(class_id: &str) -> Option<&'static CatalogClass> {
    CLASSES.iter().find(|class| class.id == class_id)
}

/// Display title for `class_id`, falling back to `Class <id>` for ids
/// outside the catalog.
pub fn title(class_id: &str) -> String {
    find(class_id).map_or_else(|| format!("Class {class_id}"), |class| class.title.to_owned())
}

/// Catalog classes not yet in `enrolled`, in catalog order.
pub fn available(enrolled: &[String]) -> Vec<&'static CatalogClass> {
    CLASSES.iter().filter(|class| !enrolled.iter().any(|id| id == class.id)).collect()
}
