//! Integration Tests for Filter Translator
//!
//! End-to-end scenarios through the public API: a table loaded from its
//! JSON form, realistic directory filters, and the two entry points.
//!
//! # Running Tests
//! ```bash
//! cargo test --test integration
//! ```

use filter_translator::{
    filter_map, try_filter_map, CompileError, FilterBuilder, FilterCompiler, FilterNode,
    SubstringPart, TranslationRecord, TranslationTable, TranslationType, TranslatorConfig,
    DEFAULT_MAX_DEPTH,
};

// =============================================================================
// Helpers
// =============================================================================

fn directory_table() -> TranslationTable {
    TranslationTable::from_json_str(
        r#"{
            "uid":          { "name": "userId",     "type": "string" },
            "uidNumber":    { "name": "uidNumber",  "type": "int" },
            "gidNumber":    { "name": "gids",       "type": "int",    "isArray": true },
            "memberOf":     { "name": "groups",     "type": "string", "isArray": true },
            "loginShell":   { "name": "shell",      "type": "String" },
            "quota":        { "name": "quotaGb",    "type": "float" }
        }"#,
    )
    .expect("table should load")
}

/// Right-nested And chain: depth 1 is a bare leaf.
fn and_chain(depth: usize) -> FilterNode {
    let mut node = FilterNode::equality("uid", "alice");
    for _ in 1..depth {
        node = FilterNode::And(vec![FilterNode::present("mail"), node]);
    }
    node
}

// =============================================================================
// Happy path
// =============================================================================

#[test]
fn happy_single_translated_equality() {
    let table = directory_table();
    let filter = FilterNode::equality("uid", "alice");

    assert_eq!(filter_map(&filter, &table, false), r#""userId":{"$eq": "alice"}"#);
    assert_eq!(filter_map(&filter, &table, true), r#"{ "userId":{"$eq": "alice"} }"#);
}

#[test]
fn happy_untranslated_equality_passes_through() {
    let table = directory_table();
    let filter = FilterNode::equality("cn", "bob");
    assert_eq!(filter_map(&filter, &table, false), r#""cn":{"$eq": "bob"}"#);
}

#[test]
fn happy_int_array_membership() {
    let table = directory_table();
    let filter = FilterNode::equality("gidNumber", "5");
    assert_eq!(filter_map(&filter, &table, false), r#""gids":{"$in": [5]}"#);
}

#[test]
fn happy_posix_account_search() {
    // (&(objectClass=posixAccount)(uidNumber>=1000)(memberOf=admins)(|(loginShell=/bin/bash)(mail=*)))
    let table = directory_table();
    let filter = FilterBuilder::new()
        .equality("objectClass", "posixAccount")
        .range("uidNumber", Some("1000"), None)
        .equality("memberOf", "admins")
        .node(
            FilterBuilder::new()
                .equality("loginShell", "/bin/bash")
                .present("mail")
                .build_or(),
        )
        .build_and();

    assert_eq!(
        filter_map(&filter, &table, true),
        concat!(
            r#"{ "objectClass":{"$eq": "posixAccount"}, "#,
            r#""uidNumber":{"$gte": 1000}, "#,
            r#""groups":{"$in": ["admins"]}, "#,
            r#""$or": [{"shell":{"$eq": "/bin/bash"}}, {"mail":{"$exists": true}}] }"#
        )
    );
}

#[test]
fn happy_quota_range() {
    let table = directory_table();
    let filter = FilterBuilder::new()
        .range("quota", Some("0.5"), Some("10"))
        .build_and();
    assert_eq!(
        filter_map(&filter, &table, false),
        r#""quotaGb":{"$gte": 0.5}, "quotaGb":{"$lte": 10}"#
    );
}

#[test]
fn happy_substring_search() {
    // (cn=Jo*hn*) with the Final part's legacy rendering pinned separately
    let table = directory_table();
    let filter = FilterNode::substrings(
        "cn",
        vec![
            SubstringPart::Initial("Jo".into()),
            SubstringPart::Any("hn".into()),
        ],
    );
    assert_eq!(filter_map(&filter, &table, false), r#""cn":"/^Jo*/""/*hn*/""#);
}

#[test]
fn happy_table_built_in_code_matches_loaded() {
    let mut table = TranslationTable::new();
    table.insert("uid", TranslationRecord::new("userId", TranslationType::String));
    let loaded = TranslationTable::from_json_str(r#"{ "uid": { "name": "userId", "type": "string" } }"#)
        .unwrap();
    assert_eq!(table, loaded);
}

// =============================================================================
// Known quirks (pinned legacy output)
// =============================================================================

#[test]
fn quirk_not_key_contains_colon() {
    let table = directory_table();
    let filter = FilterNode::equality("uid", "mallory").negate();
    assert_eq!(
        filter_map(&filter, &table, true),
        r#"{ { "$not:" "userId":{"$eq": "mallory"}} }"#
    );
}

#[test]
fn quirk_substring_final_part() {
    let table = directory_table();
    let filter = FilterNode::substrings(
        "mail",
        vec![
            SubstringPart::Initial("admin".into()),
            SubstringPart::Final("example.org".into()),
        ],
    );
    assert_eq!(
        filter_map(&filter, &table, false),
        r#""mail":"/^admin*/""/$s/"%!(EXTRA string=*example.org)"#
    );
}

// =============================================================================
// Failure scenarios
// =============================================================================

#[test]
fn failure_unsupported_node_yields_empty_string() {
    let table = directory_table();
    let filter = FilterNode::Or(vec![
        FilterNode::equality("uid", "alice"),
        FilterNode::extensible(Some("2.5.13.5".into()), Some("cn".into()), "Alice"),
    ]);

    assert_eq!(filter_map(&filter, &table, true), "");
    assert!(matches!(
        try_filter_map(&filter, &table, true),
        Err(CompileError::Internal(_))
    ));
}

#[test]
fn failure_depth_bound_is_documented_default() {
    let table = directory_table();

    let at_bound = and_chain(DEFAULT_MAX_DEPTH);
    assert_eq!(at_bound.depth(), DEFAULT_MAX_DEPTH);
    assert!(try_filter_map(&at_bound, &table, false).is_ok());

    let beyond = and_chain(DEFAULT_MAX_DEPTH + 1);
    assert!(try_filter_map(&beyond, &table, false).is_err());
    assert_eq!(filter_map(&beyond, &table, true), "");
}

#[test]
fn failure_pathological_depth_degrades_gracefully() {
    let table = directory_table();
    let filter = and_chain(1_000);
    assert_eq!(filter_map(&filter, &table, true), "");
}

#[test]
fn failure_configured_depth_bound() {
    let table = directory_table();
    let config = TranslatorConfig::from_json_str(r#"{ "max_depth": 4 }"#).unwrap();
    let compiler = FilterCompiler::with_config(&table, config);

    assert!(compiler.compile(&and_chain(4)).is_ok());
    assert_eq!(
        compiler.compile(&and_chain(5)),
        Err(CompileError::Internal("filter nesting exceeds 4 levels".into()))
    );
}

#[test]
fn failure_bad_table_document() {
    let err = TranslationTable::from_json_str(r#"{ "uid": { "name": "userId", "type": "uuid" } }"#)
        .unwrap_err();
    assert!(err.to_string().contains("Invalid Translation Type: [uuid]"));
}
