//! The comps document model: groups, categories, environments, package
//! references, language-mapped strings, blacklist/whiteout entries, and
//! langpack matches.
//!
//! Entities are created once (during `preprocess` of their opening tag)
//! and never removed; the document owns the full transitive closure, so
//! dropping it releases everything.

use indexmap::IndexMap;

use crate::classify::PackageKind;

/// A scalar property that tracks whether it has already been set once,
/// so the dispatcher can emit `ElemAlreadySet` on a second assignment
/// (invariants) without needing a separate "seen" side table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScalarProp<T> {
    pub value: T,
    pub set: bool,
}

impl<T: Default> ScalarProp<T> {
    pub fn new() -> Self {
        Self {
            value: T::default(),
            set: false,
        }
    }
}

/// Properties recognized on a `<group>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupProperties {
    pub id: Option<String>,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub def: ScalarProp<bool>,
    pub uservisible: ScalarProp<bool>,
    pub display_order: ScalarProp<i64>,
    pub lang_only: Option<String>,
}

/// Properties recognized on a `<category>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryProperties {
    pub id: Option<String>,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub display_order: ScalarProp<i64>,
}

/// Properties recognized on an `<environment>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvProperties {
    pub id: Option<String>,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub display_order: ScalarProp<i64>,
}

/// A package reference inside a group's `<packagelist>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRef {
    pub name: String,
    pub kind: PackageKind,
    pub requires: Option<String>,
}

impl Default for PackageKind {
    fn default() -> Self {
        PackageKind::Unknown
    }
}

/// A reference into the groups collection from a category or environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupId {
    pub name: String,
    pub default: bool,
}

/// A group: a named, user-selectable collection of packages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub properties: GroupProperties,
    pub name_by_lang: IndexMap<String, String>,
    pub desc_by_lang: IndexMap<String, String>,
    pub packages: Vec<PackageRef>,
    /// Whether a `<packagelist>` element was ever opened for this group,
    /// independent of whether it ended up non-empty.
    pub packagelist_opened: bool,
}

/// A category: a named collection of group identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub properties: CategoryProperties,
    pub name_by_lang: IndexMap<String, String>,
    pub desc_by_lang: IndexMap<String, String>,
    pub group_ids: Vec<GroupId>,
    pub grouplist_opened: bool,
}

/// An environment: a named collection of mandatory group identifiers
/// plus optional group identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub properties: EnvProperties,
    pub name_by_lang: IndexMap<String, String>,
    pub desc_by_lang: IndexMap<String, String>,
    pub group_list: Vec<GroupId>,
    pub option_list: Vec<GroupId>,
    pub grouplist_opened: bool,
    pub optionlist_opened: bool,
}

/// A language pack install-template mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangpackMatch {
    pub name: Option<String>,
    pub install: Option<String>,
}

/// A document-scope exclusion directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlacklistEntry {
    pub name: Option<String>,
    pub arch: Option<String>,
}

/// A document-scope dependency-override directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhiteoutEntry {
    pub requires: Option<String>,
    pub package: Option<String>,
}

/// The parsed comps document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub encoding: String,
    pub groups: Vec<Group>,
    pub categories: Vec<Category>,
    pub environments: Vec<Environment>,
    pub langpacks: Vec<LangpackMatch>,
    pub blacklist: Vec<BlacklistEntry>,
    pub whiteout: Vec<WhiteoutEntry>,
}

impl Document {
    pub fn new(encoding: impl Into<String>) -> Self {
        Self {
            encoding: encoding.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_prop_defaults_unset() {
        let prop: ScalarProp<bool> = ScalarProp::new();
        assert!(!prop.set);
        assert!(!prop.value);
    }

    #[test]
    fn document_starts_empty() {
        let doc = Document::new("UTF-8");
        assert_eq!(doc.encoding, "UTF-8");
        assert!(doc.groups.is_empty());
        assert!(doc.categories.is_empty());
        assert!(doc.environments.is_empty());
    }
}
