//! Integration tests for tablesift
//!
//! Exercises full search flows from raw query strings through predicate
//! construction and storage execution, against both the SQL translator and
//! the in-memory adapter.

use tablesift::dashboard::loader;
use tablesift::storage::memory::{MemoryCollection, MemoryRow};
use tablesift::storage::sql::{to_sql, AnsiDialect};
use tablesift::{
    run, Attribute, Dashboard, Join, MatchOp, SearchEngine, SearchMode, ScopedCollection,
};

/// Helper: a user table with one scalar searchable attribute
fn users_dashboard() -> Dashboard<MemoryCollection> {
    Dashboard::new("users")
        .attribute(Attribute::scalar("name"))
        .filter("active", |c: MemoryCollection| {
            c.retain(|row| row.get("active") == Some("true"))
        })
}

fn users() -> MemoryCollection {
    let mut collection = MemoryCollection::new("users");
    collection.insert(MemoryRow::new("a").set("name", "foo").set("active", "true"));
    collection.insert(MemoryRow::new("b").set("name", "foo").set("active", "false"));
    collection.insert(MemoryRow::new("c").set("name", "bar").set("active", "true"));
    collection
}

// =============================================================================
// Scenario A: strict search over one scalar attribute
// =============================================================================

#[test]
fn test_strict_scalar_generates_single_equality_clause() {
    let dashboard: Dashboard<MemoryCollection> = Dashboard::new("users")
        .attribute(Attribute::scalar("name"))
        .mode(SearchMode::Strict);

    let engine = SearchEngine::new(&dashboard, "abc");
    let resource = MemoryCollection::new("users");
    let predicate = tablesift::search::predicate::PredicateBuilder::new(
        &dashboard.attributes,
        dashboard.search_mode,
        engine.query().terms(),
    )
    .build(&resource);

    assert_eq!(predicate.fields_count(), 1);
    assert_eq!(predicate.comparisons[0].op, MatchOp::Equals);
    assert_eq!(predicate.values(), ["abc"]);

    let (template, values) = to_sql(&predicate, &AnsiDialect);
    assert_eq!(template, "\"users\".\"name\" = ?");
    assert_eq!(values, ["abc"]);
}

// =============================================================================
// Scenario B: fuzzy search across an association
// =============================================================================

#[test]
fn test_fuzzy_association_searches_related_fields() {
    let dashboard: Dashboard<MemoryCollection> = Dashboard::new("pets").attribute(
        Attribute::association("owner", ["first_name", "last_name"]).related_table("owners"),
    );

    let mut pets = MemoryCollection::new("pets");
    pets.insert(
        MemoryRow::new("p1")
            .set("name", "Rex")
            .related("owners", [("first_name", "Joan"), ("last_name", "Smith")]),
    );
    pets.insert(
        MemoryRow::new("p2")
            .set("name", "Milo")
            .related("owners", [("first_name", "Anna"), ("last_name", "Jones")]),
    );
    pets.insert(
        MemoryRow::new("p3")
            .set("name", "Hss")
            .related("owners", [("first_name", "Mina"), ("last_name", "Park")]),
    );

    // "Jo" hits Joan via first_name and Jones via last_name, case folded
    let result = run(pets, &dashboard, "Jo");
    assert_eq!(result.ids(), ["p1", "p2"]);
}

#[test]
fn test_fuzzy_association_sql_template() {
    let dashboard: Dashboard<MemoryCollection> =
        Dashboard::new("pets").attribute(Attribute::association(
            "owner",
            ["first_name", "last_name"],
        ));

    let resource = MemoryCollection::new("pets");
    let predicate = tablesift::search::predicate::PredicateBuilder::new(
        &dashboard.attributes,
        dashboard.search_mode,
        "Jo",
    )
    .build(&resource);

    assert_eq!(predicate.joins, [Join::new("owner", "owners")]);

    let (template, values) = to_sql(&predicate, &AnsiDialect);
    assert_eq!(
        template,
        "LOWER(CAST(\"owners\".\"first_name\" AS CHAR(256))) LIKE ? \
         OR LOWER(CAST(\"owners\".\"last_name\" AS CHAR(256))) LIKE ?"
    );
    assert_eq!(values, ["%jo%", "%jo%"]);
}

#[test]
fn test_related_table_override_flows_through_join() {
    // the override names a table that no pluralization of "owner" produces
    let dashboard: Dashboard<MemoryCollection> = Dashboard::new("pets").attribute(
        Attribute::association("owner", ["first_name"]).related_table("people"),
    );

    let mut pets = MemoryCollection::new("pets");
    pets.insert(
        MemoryRow::new("p1")
            .set("name", "Rex")
            .related("people", [("first_name", "Joan")]),
    );
    pets.insert(
        MemoryRow::new("p2")
            .set("name", "Milo")
            .related("people", [("first_name", "Anna")]),
    );

    let result = run(pets, &dashboard, "jo");
    assert_eq!(result.ids(), ["p1"]);
}

// =============================================================================
// Scenario C: search then named filter
// =============================================================================

#[test]
fn test_filter_token_narrows_matches() {
    let result = run(users(), &users_dashboard(), "foo active:");
    assert_eq!(result.ids(), ["a"]);
}

// =============================================================================
// Scenario D: unknown filter name is a no-op
// =============================================================================

#[test]
fn test_unregistered_filter_equals_plain_search() {
    let with_bogus = run(users(), &users_dashboard(), "bogus: foo");
    let plain = run(users(), &users_dashboard(), "foo");
    assert_eq!(with_bogus.ids(), plain.ids());
    assert_eq!(with_bogus.ids(), ["a", "b"]);
}

// =============================================================================
// Scenario E: blank query bypasses everything
// =============================================================================

#[test]
fn test_blank_query_returns_unfiltered_collection() {
    for raw in ["", "   ", " \t\n "] {
        let result = run(users(), &users_dashboard(), raw);
        assert_eq!(result.ids(), ["a", "b", "c"]);
    }
}

// =============================================================================
// Mixed flows
// =============================================================================

#[test]
fn test_scalar_and_association_combined() {
    let dashboard: Dashboard<MemoryCollection> = Dashboard::new("pets")
        .attribute(Attribute::scalar("name"))
        .attribute(Attribute::association("owner", ["first_name"]));

    let mut pets = MemoryCollection::new("pets");
    pets.insert(
        MemoryRow::new("p1")
            .set("name", "Rex")
            .related("owners", [("first_name", "Joan")]),
    );
    // matched by its own name even though the owner does not match
    pets.insert(
        MemoryRow::new("p2")
            .set("name", "Joy")
            .related("owners", [("first_name", "Anna")]),
    );
    // no owner rows at all: the join drops it before matching
    pets.insert(MemoryRow::new("p3").set("name", "Jojo"));

    let result = run(pets, &dashboard, "jo");
    assert_eq!(result.ids(), ["p1", "p2"]);
}

#[test]
fn test_duplicate_filter_tokens_reapply() {
    let dashboard = users_dashboard().filter("pop", |c: MemoryCollection| c.drop_first());

    let once = run(users(), &dashboard, "foo pop:");
    assert_eq!(once.ids(), ["b"]);

    let twice = run(users(), &dashboard, "pop: foo pop:");
    assert!(twice.ids().is_empty());
}

#[test]
fn test_strict_mode_from_loaded_definition() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("users.yaml");
    std::fs::write(
        &path,
        "name: users\nsearch_mode: strict\nattributes:\n  - name: name\n",
    )?;

    let dashboard: Dashboard<MemoryCollection> = loader::load_dashboard(&path)?;
    assert_eq!(dashboard.search_mode, SearchMode::Strict);

    let mut collection = MemoryCollection::new("users");
    collection.insert(MemoryRow::new("a").set("name", "Foo"));
    collection.insert(MemoryRow::new("b").set("name", "foo"));

    let result = run(collection, &dashboard, "foo");
    assert_eq!(result.ids(), ["b"]);
    Ok(())
}

#[test]
fn test_unsearchable_attribute_never_matches() {
    let dashboard: Dashboard<MemoryCollection> = Dashboard::new("users")
        .attribute(Attribute::scalar("name"))
        .attribute(Attribute::scalar("secret").searchable(false));

    let mut collection = MemoryCollection::new("users");
    collection.insert(MemoryRow::new("a").set("name", "x").set("secret", "needle"));

    let result = run(collection, &dashboard, "needle");
    assert!(result.ids().is_empty());
}

#[test]
fn test_multi_word_terms_search_as_one_string() {
    let dashboard: Dashboard<MemoryCollection> =
        Dashboard::new("users").attribute(Attribute::scalar("name"));

    let mut collection = MemoryCollection::new("users");
    collection.insert(MemoryRow::new("a").set("name", "Mary Jane Watson"));
    collection.insert(MemoryRow::new("b").set("name", "Mary"));

    // terms are rejoined with single spaces and matched as one substring
    let result = run(collection, &dashboard, "mary   jane");
    assert_eq!(result.ids(), ["a"]);
}

#[test]
fn test_pluralize_override_resolves_join_tables() {
    struct Legacy(MemoryCollection);

    impl ScopedCollection for Legacy {
        fn table_name(&self) -> &str {
            self.0.table_name()
        }
        fn pluralize(&self, name: &str) -> String {
            format!("{}_records", name)
        }
        fn join(self, relations: &[Join]) -> Self {
            Legacy(self.0.join(relations))
        }
        fn matching(self, predicate: &tablesift::Predicate) -> Self {
            Legacy(self.0.matching(predicate))
        }
    }

    // no related_table override, so the collection's own pluralization
    // decides which table the association joins and searches
    let dashboard: Dashboard<Legacy> =
        Dashboard::new("pets").attribute(Attribute::association("owner", ["first_name"]));

    let mut pets = MemoryCollection::new("pets");
    pets.insert(
        MemoryRow::new("p1")
            .set("name", "Rex")
            .related("owner_records", [("first_name", "Joan")]),
    );
    pets.insert(
        MemoryRow::new("p2")
            .set("name", "Milo")
            .related("owner_records", [("first_name", "Anna")]),
    );
    pets.insert(MemoryRow::new("p3").set("name", "Stray"));

    let result = run(Legacy(pets), &dashboard, "jo");
    assert_eq!(result.0.ids(), ["p1"]);
}
