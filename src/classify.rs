//! Element classifier: a total function from tag name to [`ElementKind`],
//! plus classification of the `packagereq` `type` attribute.

/// The recognized comps grammar element kinds, plus `Unknown` for
/// anything else. `classify` is total: every `&str` maps to exactly one
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Doc,
    Group,
    Category,
    Env,
    Id,
    Name,
    Desc,
    Default,
    UserVisible,
    DisplayOrder,
    LangOnly,
    PackageList,
    PackageReq,
    GroupList,
    OptList,
    GroupId,
    LangPacks,
    Match,
    Blacklist,
    Whiteout,
    IgnoreDep,
    Package,
    Unknown,
}

/// Classify an XML element's local tag name into an [`ElementKind`].
pub fn classify(tag: &str) -> ElementKind {
    match tag {
        "comps" => ElementKind::Doc,
        "group" => ElementKind::Group,
        "category" => ElementKind::Category,
        "environment" => ElementKind::Env,
        "id" => ElementKind::Id,
        "name" => ElementKind::Name,
        "description" => ElementKind::Desc,
        "default" => ElementKind::Default,
        "uservisible" => ElementKind::UserVisible,
        "display_order" => ElementKind::DisplayOrder,
        "langonly" => ElementKind::LangOnly,
        "packagelist" => ElementKind::PackageList,
        "packagereq" => ElementKind::PackageReq,
        "grouplist" => ElementKind::GroupList,
        "optionlist" => ElementKind::OptList,
        "groupid" => ElementKind::GroupId,
        "langpacks" => ElementKind::LangPacks,
        "match" => ElementKind::Match,
        "blacklist" => ElementKind::Blacklist,
        "whiteout" => ElementKind::Whiteout,
        "ignoredep" => ElementKind::IgnoreDep,
        "package" => ElementKind::Package,
        _ => ElementKind::Unknown,
    }
}

/// The kind of a `packagereq`'s `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    Default,
    Optional,
    Mandatory,
    Conditional,
    Unknown,
}

/// Classify a `packagereq` `type` attribute value. Absent or unrecognized
/// values map to `Unknown`.
pub fn classify_package(attr: Option<&str>) -> PackageKind {
    match attr {
        Some("default") => PackageKind::Default,
        Some("optional") => PackageKind::Optional,
        Some("mandatory") => PackageKind::Mandatory,
        Some("conditional") => PackageKind::Conditional,
        _ => PackageKind::Unknown,
    }
}
