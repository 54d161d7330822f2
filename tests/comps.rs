use std::fs;

use pretty_assertions::assert_eq;
use tempdir::TempDir;

use rpmrepo_comps::*;

static EMPTY_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<comps>
</comps>
"#;

static MINIMAL_GROUP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<comps>
  <group>
    <id>core</id>
    <name>Core</name>
    <description>The smallest set of installed packages.</description>
    <default>true</default>
    <uservisible>false</uservisible>
    <packagelist>
      <packagereq type="mandatory">bash</packagereq>
      <packagereq type="default" requires="bash">coreutils</packagereq>
    </packagelist>
  </group>
</comps>
"#;

static TRANSLATED_CATEGORY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<comps>
  <category>
    <id>base-system</id>
    <name>Base System</name>
    <name xml:lang="fr">Système de base</name>
    <description>Core system components.</description>
    <grouplist>
      <groupid>core</groupid>
      <groupid default="true">standard</groupid>
    </grouplist>
  </category>
</comps>
"#;

static UNKNOWN_PACKAGE_TYPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<comps>
  <group>
    <id>extras</id>
    <name>Extras</name>
    <description>Extra packages.</description>
    <packagelist>
      <packagereq type="surprising">vim</packagereq>
    </packagelist>
  </group>
</comps>
"#;

static MISSING_REQUIREDS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<comps>
  <group>
  </group>
</comps>
"#;

static TEXT_BETWEEN_ELEMENTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<comps>
  stray text
  <group>
    <id>core</id>
  </group>
</comps>
"#;

static MINIMAL_ENVIRONMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<comps>
  <environment>
    <id>minimal-env</id>
    <name>Minimal Install</name>
    <description>Basic functionality.</description>
    <grouplist>
      <groupid>core</groupid>
    </grouplist>
    <optionlist>
      <groupid default="true">standard</groupid>
    </optionlist>
  </environment>
</comps>
"#;

static LANGPACKS_BLACKLIST_WHITEOUT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<comps>
  <langpacks>
    <match name="foo" install="foo-%s"/>
  </langpacks>
  <blacklist>
    <package name="bad-package" arch="i686"/>
  </blacklist>
  <whiteout>
    <ignoredep requires="libfoo" package="foo"/>
  </whiteout>
</comps>
"#;

static GROUP_WITH_LANGONLY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<comps>
  <group>
    <id>core</id>
    <name>Core</name>
    <description>The smallest set of installed packages.</description>
    <langonly>en</langonly>
    <packagelist>
      <packagereq type="mandatory">bash</packagereq>
    </packagelist>
  </group>
</comps>
"#;

static MIXED_DOCUMENT_SOURCE_ORDER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<comps>
  <group>
    <id>group-a</id>
    <name>Group A</name>
    <description>First group.</description>
    <packagelist>
      <packagereq type="mandatory">pkg-a</packagereq>
    </packagelist>
  </group>
  <group>
    <id>group-b</id>
    <name>Group B</name>
    <description>Second group.</description>
    <packagelist>
      <packagereq type="mandatory">pkg-b</packagereq>
    </packagelist>
  </group>
  <category>
    <id>cat-a</id>
    <name>Category A</name>
    <description>A category.</description>
    <grouplist>
      <groupid>group-a</groupid>
      <groupid>group-b</groupid>
    </grouplist>
  </category>
  <environment>
    <id>env-a</id>
    <name>Environment A</name>
    <description>An environment.</description>
    <grouplist>
      <groupid>group-a</groupid>
    </grouplist>
    <optionlist>
      <groupid>group-b</groupid>
    </optionlist>
  </environment>
</comps>
"#;

#[test]
fn empty_document_parses_clean_with_no_entities() {
    let mut parser = CompsParser::new();
    let outcome = parser.parse_bytes(EMPTY_DOC.as_bytes()).unwrap();

    assert_eq!(outcome, ParseOutcome::Clean);
    assert!(parser.log().is_empty());
    assert!(parser.document().groups.is_empty());
    assert!(parser.document().categories.is_empty());
    assert!(parser.document().environments.is_empty());
}

#[test]
fn minimal_group_captures_properties_and_packages() {
    let mut parser = CompsParser::new();
    let outcome = parser.parse_bytes(MINIMAL_GROUP.as_bytes()).unwrap();

    assert_eq!(outcome, ParseOutcome::Clean);
    assert_eq!(parser.document().groups.len(), 1);

    let group = &parser.document().groups[0];
    assert_eq!(group.properties.id.as_deref(), Some("core"));
    assert_eq!(group.properties.name.as_deref(), Some("Core"));
    assert!(group.properties.def.set);
    assert!(group.properties.def.value);
    assert!(group.properties.uservisible.set);
    assert!(!group.properties.uservisible.value);

    assert_eq!(group.packages.len(), 2);
    assert_eq!(group.packages[0].name, "bash");
    assert_eq!(group.packages[0].kind, PackageKind::Mandatory);
    assert_eq!(group.packages[1].name, "coreutils");
    assert_eq!(group.packages[1].requires.as_deref(), Some("bash"));
}

#[test]
fn translation_overlay_does_not_replace_primary_name() {
    let mut parser = CompsParser::new();
    let outcome = parser.parse_bytes(TRANSLATED_CATEGORY.as_bytes()).unwrap();

    assert_eq!(outcome, ParseOutcome::Clean);
    let category = &parser.document().categories[0];
    assert_eq!(category.properties.name.as_deref(), Some("Base System"));
    assert_eq!(
        category.name_by_lang.get("fr").map(String::as_str),
        Some("Système de base")
    );
    assert_eq!(category.group_ids.len(), 2);
    assert_eq!(category.group_ids[0].name, "core");
    assert_eq!(category.group_ids[1].name, "standard");
    assert!(category.group_ids[1].default);
}

#[test]
fn unknown_package_type_warns_but_still_records_the_package() {
    let mut parser = CompsParser::new();
    let outcome = parser.parse_bytes(UNKNOWN_PACKAGE_TYPE.as_bytes()).unwrap();

    assert_eq!(outcome, ParseOutcome::Warnings);
    let group = &parser.document().groups[0];
    assert_eq!(group.packages[0].name, "vim");
    assert_eq!(group.packages[0].kind, PackageKind::Unknown);

    let warning = parser
        .log()
        .records()
        .iter()
        .find(|r| r.code == Code::PackageUnknown)
        .expect("expected a PackageUnknown warning");
    assert_eq!(warning.subject.as_deref(), Some("surprising"));
}

#[test]
fn missing_requireds_are_each_reported_once() {
    let mut parser = CompsParser::new();
    let outcome = parser.parse_bytes(MISSING_REQUIREDS.as_bytes()).unwrap();

    assert_eq!(outcome, ParseOutcome::Warnings);
    let subjects: Vec<_> = parser
        .log()
        .records()
        .iter()
        .filter(|r| r.code == Code::ElemRequired)
        .map(|r| r.subject.clone().unwrap())
        .collect();
    assert_eq!(subjects, vec!["id", "name", "description", "packagelist"]);
}

#[test]
fn text_between_elements_is_flagged_and_the_sibling_group_still_parses() {
    let mut parser = CompsParser::new();
    let outcome = parser.parse_bytes(TEXT_BETWEEN_ELEMENTS.as_bytes()).unwrap();

    assert_eq!(outcome, ParseOutcome::Warnings);
    assert!(parser
        .log()
        .records()
        .iter()
        .any(|r| r.code == Code::TextBetween));
    assert_eq!(parser.document().groups.len(), 1);
    assert_eq!(parser.document().groups[0].properties.id.as_deref(), Some("core"));
}

#[test]
fn parse_file_reads_a_document_from_disk() {
    let dir = TempDir::new("rpmrepo_comps-tests").expect("create temp dir");
    let path = dir.path().join("comps.xml");
    fs::write(&path, MINIMAL_GROUP).expect("write fixture");

    let mut parser = CompsParser::new();
    let outcome = parser.parse_file(&path).expect("parse_file should succeed");

    assert_eq!(outcome, ParseOutcome::Clean);
    assert_eq!(parser.document().groups.len(), 1);
    assert_eq!(parser.document().groups[0].properties.id.as_deref(), Some("core"));
}

#[test]
fn reinit_allows_reusing_a_parser_for_a_second_document() {
    let mut parser = CompsParser::new();
    parser.parse_bytes(MINIMAL_GROUP.as_bytes()).unwrap();
    assert_eq!(parser.document().groups.len(), 1);

    parser.reinit();
    parser.parse_bytes(EMPTY_DOC.as_bytes()).unwrap();
    assert!(parser.document().groups.is_empty());
    assert!(parser.log().is_empty());
}

#[test]
fn environment_captures_grouplist_and_optionlist() {
    let mut parser = CompsParser::new();
    let outcome = parser.parse_bytes(MINIMAL_ENVIRONMENT.as_bytes()).unwrap();

    assert_eq!(outcome, ParseOutcome::Clean);
    assert_eq!(parser.document().environments.len(), 1);

    let env = &parser.document().environments[0];
    assert_eq!(env.properties.id.as_deref(), Some("minimal-env"));
    assert_eq!(env.properties.name.as_deref(), Some("Minimal Install"));
    assert_eq!(env.group_list.len(), 1);
    assert_eq!(env.group_list[0].name, "core");
    assert!(!env.group_list[0].default);
    assert_eq!(env.option_list.len(), 1);
    assert_eq!(env.option_list[0].name, "standard");
    assert!(env.option_list[0].default);
}

#[test]
fn langpacks_blacklist_and_whiteout_are_captured_at_document_scope() {
    let mut parser = CompsParser::new();
    let outcome = parser
        .parse_bytes(LANGPACKS_BLACKLIST_WHITEOUT.as_bytes())
        .unwrap();

    assert_eq!(outcome, ParseOutcome::Clean);

    assert_eq!(parser.document().langpacks.len(), 1);
    assert_eq!(parser.document().langpacks[0].name.as_deref(), Some("foo"));
    assert_eq!(parser.document().langpacks[0].install.as_deref(), Some("foo-%s"));

    assert_eq!(parser.document().blacklist.len(), 1);
    assert_eq!(parser.document().blacklist[0].name.as_deref(), Some("bad-package"));
    assert_eq!(parser.document().blacklist[0].arch.as_deref(), Some("i686"));

    assert_eq!(parser.document().whiteout.len(), 1);
    assert_eq!(parser.document().whiteout[0].requires.as_deref(), Some("libfoo"));
    assert_eq!(parser.document().whiteout[0].package.as_deref(), Some("foo"));
}

#[test]
fn langonly_sets_the_group_property() {
    let mut parser = CompsParser::new();
    let outcome = parser.parse_bytes(GROUP_WITH_LANGONLY.as_bytes()).unwrap();

    assert_eq!(outcome, ParseOutcome::Clean);
    assert_eq!(
        parser.document().groups[0].properties.lang_only.as_deref(),
        Some("en")
    );
}

#[test]
fn lang_only_compat_flag_suppresses_already_set_warning_on_repeat() {
    let repeated = GROUP_WITH_LANGONLY.replace(
        "<langonly>en</langonly>",
        "<langonly>en</langonly><langonly>fr</langonly>",
    );

    let mut default_parser = CompsParser::new();
    default_parser.parse_bytes(repeated.as_bytes()).unwrap();
    assert!(default_parser
        .log()
        .records()
        .iter()
        .any(|r| r.code == Code::ElemAlreadySet));
    assert_eq!(
        default_parser.document().groups[0].properties.lang_only.as_deref(),
        Some("fr")
    );

    let mut compat_parser = CompsParser::new().with_lang_only_compat();
    compat_parser.parse_bytes(repeated.as_bytes()).unwrap();
    assert!(!compat_parser
        .log()
        .records()
        .iter()
        .any(|r| r.code == Code::ElemAlreadySet));
    assert_eq!(
        compat_parser.document().groups[0].properties.lang_only.as_deref(),
        Some("fr")
    );
}

#[test]
fn mixed_document_preserves_source_order_across_entity_kinds() {
    let mut parser = CompsParser::new();
    let outcome = parser
        .parse_bytes(MIXED_DOCUMENT_SOURCE_ORDER.as_bytes())
        .unwrap();

    assert_eq!(outcome, ParseOutcome::Clean);

    let doc = parser.document();
    assert_eq!(doc.groups.len(), 2);
    assert_eq!(doc.groups[0].properties.id.as_deref(), Some("group-a"));
    assert_eq!(doc.groups[1].properties.id.as_deref(), Some("group-b"));

    assert_eq!(doc.categories.len(), 1);
    assert_eq!(doc.categories[0].properties.id.as_deref(), Some("cat-a"));
    assert_eq!(doc.categories[0].group_ids.len(), 2);
    assert_eq!(doc.categories[0].group_ids[0].name, "group-a");
    assert_eq!(doc.categories[0].group_ids[1].name, "group-b");

    assert_eq!(doc.environments.len(), 1);
    assert_eq!(doc.environments[0].properties.id.as_deref(), Some("env-a"));
    assert_eq!(doc.environments[0].group_list[0].name, "group-a");
    assert_eq!(doc.environments[0].option_list[0].name, "group-b");
}
