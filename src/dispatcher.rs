//! The element dispatcher: `on_start`/`on_text`/`on_end` plus the
//! internal `preprocess`/`postprocess` routines that encode the comps
//! grammar.

use indexmap::IndexMap;

use crate::classify::{classify, classify_package, ElementKind};
use crate::context::{OpenElement, ParseContext, TextSink};
use crate::log::Code;
use crate::model::{
    BlacklistEntry, Category, Environment, Group, GroupId, LangpackMatch, PackageRef,
    WhiteoutEntry,
};

/// Where a freshly-created `GroupId` was actually appended during
/// `preprocess`, so `postprocess` can assign its name without having to
/// re-derive the routing (and so it can tell "discarded" apart from
/// "appended" without re-running the parent/grandparent logic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupIdTarget {
    CategoryGroupIds(usize),
    EnvGroupList(usize),
    EnvOptionList(usize),
}

fn is_whitespace_only(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_whitespace())
}

/// Handle a start-element event.
pub fn on_start(ctx: &mut ParseContext, tag: &str, attrs: IndexMap<String, String>, line: u64, column: u64) {
    let kind = classify(tag);

    if !ctx.text_buffer.is_empty() {
        let subject = ctx.text_buffer[0].clone();
        ctx.log.error(Some(&subject), Code::TextBetween, line, column);
        ctx.text_buffer.clear();
        ctx.text_buffer_len = 0;
    }

    ctx.elem_stack.push(OpenElement {
        tag: tag.to_owned(),
        kind,
        attrs,
    });

    preprocess(ctx, line, column);
}

/// Handle a character-data event. Whitespace-only chunks are discarded
/// without being buffered.
pub fn on_text(ctx: &mut ParseContext, chunk: &str) {
    if is_whitespace_only(chunk) {
        return;
    }
    ctx.text_buffer.push(chunk.to_owned());
    ctx.text_buffer_len += chunk.len();
}

/// Handle an end-element event.
pub fn on_end(ctx: &mut ParseContext, tag: &str, line: u64, column: u64) {
    if ctx.text_sink.is_some() {
        let joined: String = ctx.text_buffer.concat();
        if ctx.text_buffer_len == 0 {
            ctx.log.error(Some(tag), Code::NoContent, line, column);
        }
        ctx.tmp_buffer = joined;
    } else {
        if !ctx.text_buffer.is_empty() {
            let subject = ctx.text_buffer[0].clone();
            ctx.log.error(Some(&subject), Code::TextBetween, line, column);
        }
        ctx.tmp_buffer.clear();
    }
    ctx.text_buffer.clear();
    ctx.text_buffer_len = 0;
    ctx.text_sink = None;

    let top_kind = ctx.top().map(|e| e.kind);
    if top_kind == Some(classify(tag)) {
        postprocess(ctx, line, column);
        ctx.elem_stack.pop();
    }
}

fn preprocess(ctx: &mut ParseContext, line: u64, column: u64) {
    let kind = ctx.top().expect("just pushed").kind;
    let tag = ctx.top().expect("just pushed").tag.clone();

    if kind != ElementKind::Doc && ctx.elem_stack.len() < 2 {
        ctx.log.error(Some(&tag), Code::NoParent, line, column);
        return;
    }
    if matches!(kind, ElementKind::GroupId | ElementKind::PackageReq) && ctx.elem_stack.len() < 3 {
        ctx.log.error(Some(&tag), Code::NoParent, line, column);
        return;
    }

    let parent = ctx.parent_kind();
    let grandparent = ctx.grandparent_kind();

    match kind {
        ElementKind::Doc => {
            // The document is already constructed in `ParseContext::new`
            // with the parser's encoding; nothing further to create.
        }
        ElementKind::Group => {
            if parent != Some(ElementKind::Doc) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
                return;
            }
            ctx.document.groups.push(Group::default());
            ctx.current_group = Some(ctx.document.groups.len() - 1);
            ctx.current_category = None;
            ctx.current_env = None;
        }
        ElementKind::Category => {
            if parent != Some(ElementKind::Doc) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
                return;
            }
            ctx.document.categories.push(Category::default());
            ctx.current_category = Some(ctx.document.categories.len() - 1);
            ctx.current_group = None;
            ctx.current_env = None;
        }
        ElementKind::Env => {
            if parent != Some(ElementKind::Doc) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
                return;
            }
            ctx.document.environments.push(Environment::default());
            ctx.current_env = Some(ctx.document.environments.len() - 1);
            ctx.current_group = None;
            ctx.current_category = None;
        }
        ElementKind::GroupList => {
            match parent {
                Some(ElementKind::Category) => {
                    if let Some(idx) = ctx.current_category {
                        ctx.document.categories[idx].grouplist_opened = true;
                    }
                }
                Some(ElementKind::Env) => {
                    if let Some(idx) = ctx.current_env {
                        ctx.document.environments[idx].grouplist_opened = true;
                    }
                }
                _ => ctx.log.error(Some(&tag), Code::NoParent, line, column),
            }
        }
        ElementKind::OptList => {
            if parent == Some(ElementKind::Env) {
                if let Some(idx) = ctx.current_env {
                    ctx.document.environments[idx].optionlist_opened = true;
                }
            } else {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::PackageList => {
            if parent == Some(ElementKind::Group) {
                if let Some(idx) = ctx.current_group {
                    ctx.document.groups[idx].packagelist_opened = true;
                }
            } else {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::Id => {
            ctx.text_sink = Some(TextSink::Id);
            if !matches!(
                parent,
                Some(ElementKind::Group) | Some(ElementKind::Category) | Some(ElementKind::Env)
            ) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::Name => {
            ctx.text_sink = Some(TextSink::Name);
            if !matches!(
                parent,
                Some(ElementKind::Group) | Some(ElementKind::Category) | Some(ElementKind::Env)
            ) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::Desc => {
            ctx.text_sink = Some(TextSink::Desc);
            if !matches!(
                parent,
                Some(ElementKind::Group) | Some(ElementKind::Category) | Some(ElementKind::Env)
            ) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::Default => {
            ctx.text_sink = Some(TextSink::Default);
            if parent != Some(ElementKind::Group) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::UserVisible => {
            ctx.text_sink = Some(TextSink::UserVisible);
            if parent != Some(ElementKind::Group) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::LangOnly => {
            ctx.text_sink = Some(TextSink::LangOnly);
            if parent != Some(ElementKind::Group) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::DisplayOrder => {
            ctx.text_sink = Some(TextSink::DisplayOrder);
            if !matches!(
                parent,
                Some(ElementKind::Group) | Some(ElementKind::Category) | Some(ElementKind::Env)
            ) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::PackageReq => {
            ctx.text_sink = Some(TextSink::PackageReqName);
            if grandparent != Some(ElementKind::Group) || parent != Some(ElementKind::PackageList) {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
                return;
            }
            let type_attr = ctx.top().unwrap().attrs.get("type").cloned();
            let requires = ctx.top().unwrap().attrs.get("requires").cloned();
            let pkg_kind = classify_package(type_attr.as_deref());
            if pkg_kind == crate::classify::PackageKind::Unknown && type_attr.is_some() {
                ctx.log
                    .warning(type_attr.as_deref(), Code::PackageUnknown, line, column);
            }
            if let Some(idx) = ctx.current_group {
                ctx.document.groups[idx].packages.push(PackageRef {
                    name: String::new(),
                    kind: pkg_kind,
                    requires,
                });
            }
        }
        ElementKind::GroupId => {
            ctx.text_sink = Some(TextSink::GroupIdName);
            let is_default = ctx.top().unwrap().attrs.get("default").map(String::as_str) == Some("true");
            // `target` is `None` either because the container (current
            // Category/Env) wasn't open even though the parent/grandparent
            // shape was otherwise valid, or because the shape itself was
            // wrong. Only the former should warn in postprocess — the
            // latter already logged `NoParent` here, and comps_parse.c's
            // grandparent `switch` produces no additional warning for it.
            let mut missing_container = None;
            let target = match parent {
                Some(ElementKind::GroupList) => match grandparent {
                    Some(ElementKind::Category) => match ctx.current_category {
                        Some(idx) => {
                            ctx.document.categories[idx]
                                .group_ids
                                .push(GroupId { name: String::new(), default: is_default });
                            Some(GroupIdTarget::CategoryGroupIds(
                                ctx.document.categories[idx].group_ids.len() - 1,
                            ))
                        }
                        None => {
                            missing_container = Some(Code::GroupListNotSet);
                            None
                        }
                    },
                    Some(ElementKind::Env) => match ctx.current_env {
                        Some(idx) => {
                            ctx.document.environments[idx]
                                .group_list
                                .push(GroupId { name: String::new(), default: is_default });
                            Some(GroupIdTarget::EnvGroupList(
                                ctx.document.environments[idx].group_list.len() - 1,
                            ))
                        }
                        None => {
                            missing_container = Some(Code::GroupListNotSet);
                            None
                        }
                    },
                    _ => {
                        ctx.log.error(Some(&tag), Code::NoParent, line, column);
                        None
                    }
                },
                Some(ElementKind::OptList) => match grandparent {
                    Some(ElementKind::Env) => match ctx.current_env {
                        Some(idx) => {
                            ctx.document.environments[idx]
                                .option_list
                                .push(GroupId { name: String::new(), default: is_default });
                            Some(GroupIdTarget::EnvOptionList(
                                ctx.document.environments[idx].option_list.len() - 1,
                            ))
                        }
                        None => {
                            missing_container = Some(Code::OptionListNotSet);
                            None
                        }
                    },
                    _ => {
                        ctx.log.error(Some(&tag), Code::NoParent, line, column);
                        None
                    }
                },
                _ => {
                    ctx.log.error(Some(&tag), Code::NoParent, line, column);
                    None
                }
            };
            ctx.pending_group_id = target;
            ctx.pending_group_id_missing_container = missing_container;
        }
        ElementKind::Match => {
            if parent == Some(ElementKind::LangPacks) {
                let name = ctx.top().unwrap().attrs.get("name").cloned();
                let install = ctx.top().unwrap().attrs.get("install").cloned();
                ctx.document.langpacks.push(LangpackMatch { name, install });
            } else {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::Package => {
            if parent == Some(ElementKind::Blacklist) {
                let name = ctx.top().unwrap().attrs.get("name").cloned();
                let arch = ctx.top().unwrap().attrs.get("arch").cloned();
                ctx.document.blacklist.push(BlacklistEntry { name, arch });
            } else {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::IgnoreDep => {
            if parent == Some(ElementKind::Whiteout) {
                let requires = ctx.top().unwrap().attrs.get("requires").cloned();
                let package = ctx.top().unwrap().attrs.get("package").cloned();
                ctx.document.whiteout.push(WhiteoutEntry { requires, package });
            } else {
                ctx.log.error(Some(&tag), Code::NoParent, line, column);
            }
        }
        ElementKind::LangPacks | ElementKind::Blacklist | ElementKind::Whiteout => {
            // No model object to create; children validate their own parent.
        }
        ElementKind::Unknown => {
            ctx.log.warning(Some(&tag), Code::ElemUnknown, line, column);
        }
    }
}

fn postprocess(ctx: &mut ParseContext, line: u64, column: u64) {
    let kind = ctx.top().expect("matching close").kind;
    let tag = ctx.top().expect("matching close").tag.clone();
    let lang = ctx.top().unwrap().attrs.get("xml:lang").cloned();

    if kind != ElementKind::Doc && ctx.elem_stack.len() < 2 {
        ctx.tmp_buffer.clear();
        return;
    }
    if matches!(kind, ElementKind::GroupId | ElementKind::PackageReq) && ctx.elem_stack.len() < 3 {
        ctx.tmp_buffer.clear();
        return;
    }

    let parent = ctx.parent_kind();

    match kind {
        ElementKind::Doc | ElementKind::Unknown => {}
        ElementKind::Group => {
            if let Some(idx) = ctx.current_group {
                let group = &ctx.document.groups[idx];
                if group.properties.id.is_none() {
                    ctx.log.error(Some("id"), Code::ElemRequired, line, column);
                }
                if group.properties.name.is_none() {
                    ctx.log.error(Some("name"), Code::ElemRequired, line, column);
                }
                if group.properties.desc.is_none() {
                    ctx.log
                        .error(Some("description"), Code::ElemRequired, line, column);
                }
                if !group.packagelist_opened {
                    ctx.log
                        .error(Some("packagelist"), Code::ElemRequired, line, column);
                }
            }
        }
        ElementKind::Category => {
            if let Some(idx) = ctx.current_category {
                let category = &ctx.document.categories[idx];
                if category.properties.id.is_none() {
                    ctx.log.error(Some("id"), Code::ElemRequired, line, column);
                }
                if category.properties.name.is_none() {
                    ctx.log.error(Some("name"), Code::ElemRequired, line, column);
                }
                if category.properties.desc.is_none() {
                    ctx.log
                        .error(Some("description"), Code::ElemRequired, line, column);
                }
                if !category.grouplist_opened {
                    ctx.log
                        .error(Some("grouplist"), Code::ElemRequired, line, column);
                }
            }
        }
        ElementKind::Env => {
            if let Some(idx) = ctx.current_env {
                let env = &ctx.document.environments[idx];
                if env.properties.id.is_none() {
                    ctx.log.error(Some("id"), Code::ElemRequired, line, column);
                }
                if env.properties.name.is_none() {
                    ctx.log.error(Some("name"), Code::ElemRequired, line, column);
                }
                if env.properties.desc.is_none() {
                    ctx.log
                        .error(Some("description"), Code::ElemRequired, line, column);
                }
                if !env.grouplist_opened {
                    ctx.log
                        .error(Some("grouplist"), Code::ElemRequired, line, column);
                }
                if !env.optionlist_opened {
                    ctx.log
                        .error(Some("optionlist"), Code::ElemRequired, line, column);
                }
            }
        }
        ElementKind::Id => match parent {
            Some(ElementKind::Group) => {
                let idx = ctx.current_group.unwrap();
                set_scalar_string(
                    &mut ctx.document.groups[idx].properties.id,
                    &ctx.tmp_buffer,
                    &mut ctx.log,
                    &tag,
                    line,
                    column,
                );
            }
            Some(ElementKind::Category) => {
                let idx = ctx.current_category.unwrap();
                set_scalar_string(
                    &mut ctx.document.categories[idx].properties.id,
                    &ctx.tmp_buffer,
                    &mut ctx.log,
                    &tag,
                    line,
                    column,
                );
            }
            Some(ElementKind::Env) => {
                let idx = ctx.current_env.unwrap();
                set_scalar_string(
                    &mut ctx.document.environments[idx].properties.id,
                    &ctx.tmp_buffer,
                    &mut ctx.log,
                    &tag,
                    line,
                    column,
                );
            }
            _ => {}
        },
        ElementKind::Name => match parent {
            Some(ElementKind::Group) => {
                let idx = ctx.current_group.unwrap();
                let g = &mut ctx.document.groups[idx];
                commit_translated(
                    &mut g.properties.name,
                    &mut g.name_by_lang,
                    lang.as_deref(),
                    &ctx.tmp_buffer,
                    &mut ctx.log,
                    &tag,
                    line,
                    column,
                );
            }
            Some(ElementKind::Category) => {
                let idx = ctx.current_category.unwrap();
                let c = &mut ctx.document.categories[idx];
                commit_translated(
                    &mut c.properties.name,
                    &mut c.name_by_lang,
                    lang.as_deref(),
                    &ctx.tmp_buffer,
                    &mut ctx.log,
                    &tag,
                    line,
                    column,
                );
            }
            Some(ElementKind::Env) => {
                let idx = ctx.current_env.unwrap();
                let e = &mut ctx.document.environments[idx];
                commit_translated(
                    &mut e.properties.name,
                    &mut e.name_by_lang,
                    lang.as_deref(),
                    &ctx.tmp_buffer,
                    &mut ctx.log,
                    &tag,
                    line,
                    column,
                );
            }
            _ => {}
        },
        ElementKind::Desc => match parent {
            Some(ElementKind::Group) => {
                let idx = ctx.current_group.unwrap();
                let g = &mut ctx.document.groups[idx];
                commit_translated(
                    &mut g.properties.desc,
                    &mut g.desc_by_lang,
                    lang.as_deref(),
                    &ctx.tmp_buffer,
                    &mut ctx.log,
                    &tag,
                    line,
                    column,
                );
            }
            Some(ElementKind::Category) => {
                let idx = ctx.current_category.unwrap();
                let c = &mut ctx.document.categories[idx];
                commit_translated(
                    &mut c.properties.desc,
                    &mut c.desc_by_lang,
                    lang.as_deref(),
                    &ctx.tmp_buffer,
                    &mut ctx.log,
                    &tag,
                    line,
                    column,
                );
            }
            Some(ElementKind::Env) => {
                let idx = ctx.current_env.unwrap();
                let e = &mut ctx.document.environments[idx];
                commit_translated(
                    &mut e.properties.desc,
                    &mut e.desc_by_lang,
                    lang.as_deref(),
                    &ctx.tmp_buffer,
                    &mut ctx.log,
                    &tag,
                    line,
                    column,
                );
            }
            _ => {}
        },
        ElementKind::Default => {
            if parent == Some(ElementKind::Group) {
                let idx = ctx.current_group.unwrap();
                let prop = &mut ctx.document.groups[idx].properties.def;
                if prop.set {
                    ctx.log.warning(Some(&tag), Code::ElemAlreadySet, line, column);
                } else {
                    prop.set = true;
                }
                match ctx.tmp_buffer.as_str() {
                    "true" => prop.value = true,
                    "false" => prop.value = false,
                    _ => ctx
                        .log
                        .warning(Some(&ctx.tmp_buffer.clone()), Code::DefaultParam, line, column),
                }
            }
        }
        ElementKind::UserVisible => {
            if parent == Some(ElementKind::Group) {
                let idx = ctx.current_group.unwrap();
                let prop = &mut ctx.document.groups[idx].properties.uservisible;
                if prop.set {
                    ctx.log.warning(Some(&tag), Code::ElemAlreadySet, line, column);
                } else {
                    prop.set = true;
                }
                match ctx.tmp_buffer.as_str() {
                    "true" => prop.value = true,
                    "false" => prop.value = false,
                    _ => ctx.log.warning(
                        Some(&ctx.tmp_buffer.clone()),
                        Code::UserVisibleParam,
                        line,
                        column,
                    ),
                }
            }
        }
        ElementKind::LangOnly => {
            if parent == Some(ElementKind::Group) {
                let idx = ctx.current_group.unwrap();
                let already_set =
                    !ctx.lang_only_compat && ctx.document.groups[idx].properties.lang_only.is_some();
                if already_set {
                    ctx.log.warning(Some(&tag), Code::ElemAlreadySet, line, column);
                }
                ctx.document.groups[idx].properties.lang_only = Some(ctx.tmp_buffer.clone());
            }
        }
        ElementKind::DisplayOrder => {
            let prop = match parent {
                Some(ElementKind::Group) => ctx
                    .current_group
                    .map(|idx| &mut ctx.document.groups[idx].properties.display_order),
                Some(ElementKind::Category) => ctx
                    .current_category
                    .map(|idx| &mut ctx.document.categories[idx].properties.display_order),
                Some(ElementKind::Env) => ctx
                    .current_env
                    .map(|idx| &mut ctx.document.environments[idx].properties.display_order),
                _ => None,
            };
            if let Some(prop) = prop {
                if prop.set {
                    ctx.log.warning(Some(&tag), Code::ElemAlreadySet, line, column);
                } else {
                    prop.set = true;
                }
                if let Some(value) = parse_leading_i64(&ctx.tmp_buffer) {
                    prop.value = value;
                }
            }
        }
        ElementKind::PackageReq => {
            if let Some(idx) = ctx.current_group {
                if let Some(pkg) = ctx.document.groups[idx].packages.last_mut() {
                    pkg.name = ctx.tmp_buffer.clone();
                }
            }
        }
        ElementKind::GroupId => {
            match ctx.pending_group_id.take() {
                Some(GroupIdTarget::CategoryGroupIds(idx)) => {
                    if let Some(cat_idx) = ctx.current_category {
                        if let Some(entry) = ctx.document.categories[cat_idx].group_ids.get_mut(idx) {
                            entry.name = ctx.tmp_buffer.clone();
                        }
                    }
                }
                Some(GroupIdTarget::EnvGroupList(idx)) => {
                    if let Some(env_idx) = ctx.current_env {
                        if let Some(entry) = ctx.document.environments[env_idx].group_list.get_mut(idx) {
                            entry.name = ctx.tmp_buffer.clone();
                        }
                    }
                }
                Some(GroupIdTarget::EnvOptionList(idx)) => {
                    if let Some(env_idx) = ctx.current_env {
                        if let Some(entry) = ctx.document.environments[env_idx].option_list.get_mut(idx) {
                            entry.name = ctx.tmp_buffer.clone();
                        }
                    }
                }
                None => {
                    // Only warn when `preprocess` found the parent/grandparent
                    // shape valid but the container itself wasn't open; a
                    // shape mismatch already logged `NoParent` there and
                    // should not also warn here.
                    if let Some(code) = ctx.pending_group_id_missing_container.take() {
                        ctx.log.warning(Some(&ctx.tmp_buffer.clone()), code, line, column);
                    }
                }
            }
        }
        ElementKind::PackageList => {
            if parent == Some(ElementKind::Group) {
                if let Some(idx) = ctx.current_group {
                    if ctx.document.groups[idx].packages.is_empty() {
                        ctx.log
                            .error(Some("packagelist"), Code::ListEmpty, line, column);
                    }
                }
            }
        }
        ElementKind::GroupList => match parent {
            Some(ElementKind::Category) => {
                if let Some(idx) = ctx.current_category {
                    if ctx.document.categories[idx].group_ids.is_empty() {
                        ctx.log.error(Some("grouplist"), Code::ListEmpty, line, column);
                    }
                }
            }
            Some(ElementKind::Env) => {
                if let Some(idx) = ctx.current_env {
                    if ctx.document.environments[idx].group_list.is_empty() {
                        ctx.log.error(Some("grouplist"), Code::ListEmpty, line, column);
                    }
                }
            }
            _ => {}
        },
        ElementKind::OptList => {
            if parent == Some(ElementKind::Env) {
                if let Some(idx) = ctx.current_env {
                    if ctx.document.environments[idx].option_list.is_empty() {
                        ctx.log
                            .error(Some("optionlist"), Code::ListEmpty, line, column);
                    }
                }
            }
        }
        ElementKind::Match
        | ElementKind::Package
        | ElementKind::IgnoreDep
        | ElementKind::Blacklist
        | ElementKind::Whiteout
        | ElementKind::LangPacks => {}
    }

    ctx.tmp_buffer.clear();
}

/// Parse a leading signed decimal prefix, ignoring any trailing
/// characters, mirroring `sscanf(buf, "%d", &val)` in the ground-truth C
/// parser (`"5 extra"` parses as `5` rather than being rejected outright).
/// Leading whitespace is skipped the way `%d` skips it. Returns `None`
/// only when no digits are present at all.
fn parse_leading_i64(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    trimmed[..end].parse::<i64>().ok()
}

fn set_scalar_string(
    slot: &mut Option<String>,
    value: &str,
    log: &mut crate::log::ParseLog,
    tag: &str,
    line: u64,
    column: u64,
) {
    if slot.is_some() {
        log.warning(Some(tag), Code::ElemAlreadySet, line, column);
    }
    *slot = Some(value.to_owned());
}

#[allow(clippy::too_many_arguments)]
fn commit_translated(
    primary: &mut Option<String>,
    by_lang: &mut IndexMap<String, String>,
    lang: Option<&str>,
    value: &str,
    log: &mut crate::log::ParseLog,
    tag: &str,
    line: u64,
    column: u64,
) {
    if let Some(lang) = lang {
        by_lang.insert(lang.to_owned(), value.to_owned());
    } else {
        set_scalar_string(primary, value, log, tag, line, column);
    }
}
