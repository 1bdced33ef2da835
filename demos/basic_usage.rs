// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Basic filter-translator usage example.
//!
//! Demonstrates:
//! 1. Loading a translation table from JSON
//! 2. Building a directory filter
//! 3. Compiling it with both entry points
//! 4. What a failed compilation looks like
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example basic_usage
//! ```

use filter_translator::{
    filter_map, try_filter_map, FilterBuilder, FilterNode, SubstringPart, TranslationTable,
};
use tracing_subscriber::EnvFilter;

const TABLE: &str = r#"{
    "uid":       { "name": "userId",    "type": "string" },
    "uidNumber": { "name": "uidNumber", "type": "int" },
    "memberOf":  { "name": "groups",    "type": "string", "isArray": true }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let table = TranslationTable::from_json_str(TABLE)?;
    println!("Loaded {} translations", table.len());

    // (&(uid=alice)(uidNumber>=1000)(|(memberOf=admins)(cn=Ali*)))
    let filter = FilterBuilder::new()
        .equality("uid", "alice")
        .range("uidNumber", Some("1000"), None)
        .node(
            FilterNode::equality("memberOf", "admins").or(FilterNode::substrings(
                "cn",
                vec![SubstringPart::Initial("Ali".into())],
            )),
        )
        .build_and();

    println!("fragment: {}", try_filter_map(&filter, &table, false)?);
    println!("document: {}", filter_map(&filter, &table, true));

    // Extensible matches have no query-document form
    let unsupported = FilterNode::extensible(Some("caseExactMatch".into()), Some("cn".into()), "Alice");
    match try_filter_map(&unsupported, &table, true) {
        Ok(query) => println!("unexpected: {query}"),
        Err(e) => println!("error: {e}"),
    }
    println!("lenient: {:?}", filter_map(&unsupported, &table, true));

    Ok(())
}
