use crate::codec::from_json;
use crate::models::requests::{Column, Dimension, Metric, Source};
use crate::models::responses::{NodeResponse, SqlResponse};
use crate::models::NodeMode;
use crate::payload::{inspect, PayloadKind};
use rstest::rstest;
use serde_json::{json, Value};

fn with_extra_keys(payload: &str) -> String {
    let mut value: Value = serde_json::from_str(payload).unwrap();
    add_extra_keys(&mut value);
    value.to_string()
}

// Adds unrecognized keys to every object, nested objects and list elements included.
fn add_extra_keys(value: &mut Value) {
    match value {
        Value::Object(object) => {
            for child in object.values_mut() {
                add_extra_keys(child);
            }
            object.insert("unrecognized_scalar".to_string(), json!(42));
            object.insert("unrecognized_object".to_string(), json!({"a": [1, 2, 3]}));
            object.insert("unrecognized_null".to_string(), Value::Null);
        }
        Value::Array(items) => items.iter_mut().for_each(add_extra_keys),
        _ => {}
    }
}

#[rstest]
#[case::catalog(PayloadKind::Catalog, r#"{"name": "warehouse", "engines": [{"name": "spark", "version": "3.5"}]}"#)]
#[case::catalogs(PayloadKind::Catalogs, r#"[{"name": "warehouse", "engines": [{"name": "trino", "dialect": "trino"}]}]"#)]
#[case::engine(PayloadKind::Engine, r#"{"name": "trino", "version": "451", "uri": "trino://localhost", "dialect": "trino"}"#)]
#[case::common_dimensions(PayloadKind::CommonDimensions, r#"{"dimensions": [{"name": "default.hard_hat.state", "path": ["default.hard_hat"], "filter_only": true}]}"#)]
#[case::common_dimensions_list(PayloadKind::CommonDimensions, r#"[{"name": "default.dispatcher.company_name", "type": "string"}]"#)]
#[case::namespace(PayloadKind::Namespace, r#"{"message": "ok"}"#)]
#[case::node(
    PayloadKind::Node,
    r#"{
        "name": "default.repair_orders",
        "schema_": "roads",
        "node_revision_id": 3,
        "catalog": {"name": "warehouse", "engines": [{"name": "spark", "version": "3.5"}]},
        "columns": [{"name": "repair_order_id", "type": "int"}, {"name": "order_date", "display_name": "Order Date"}],
        "parents": [{"name": "default.raw_repair_orders"}],
        "created_by": {"username": "dj"}
    }"#
)]
#[case::nodes(PayloadKind::Nodes, r#"[{"name": "default.a", "parents": [{"name": "default.b"}]}]"#)]
#[case::sql(
    PayloadKind::Sql,
    r#"{
        "sql": "SELECT 1",
        "columns": [{"name": "one", "type": "int", "node": "default.one", "semantic_type": "metric"}],
        "upstream_tables": []
    }"#
)]
fn test_response_ignores_unknown_keys(#[case] kind: PayloadKind, #[case] payload: &str) {
    let plain = inspect(kind, payload).unwrap();
    let extended = inspect(kind, &with_extra_keys(payload)).unwrap();
    assert_eq!(plain, extended);
    assert!(!extended.contains("unrecognized"));
}

#[test]
fn test_extra_keys_reach_nested_elements() {
    let extended: Value = serde_json::from_str(&with_extra_keys(
        r#"{"columns": [{"name": "one"}], "catalog": {"engines": [{"name": "spark"}]}}"#,
    ))
    .unwrap();
    assert_eq!(extended.pointer("/columns/0/unrecognized_scalar"), Some(&json!(42)));
    assert_eq!(
        extended.pointer("/catalog/engines/0/unrecognized_scalar"),
        Some(&json!(42))
    );
}

#[rstest]
#[case::schema(PayloadKind::Node, r#"{"schema_": "roads"}"#, "/schema_")]
#[case::node_revision_id(PayloadKind::Node, r#"{"node_revision_id": 4}"#, "/node_revision_id")]
#[case::node_type(PayloadKind::Node, r#"{"type": "metric"}"#, "/type")]
#[case::created_by(PayloadKind::Node, r#"{"created_by": {"username": "dj"}}"#, "/created_by/username")]
#[case::sql_column_type(PayloadKind::Sql, r#"{"columns": [{"type": "bigint"}]}"#, "/columns/0/type")]
#[case::semantic_entity(PayloadKind::Sql, r#"{"columns": [{"semantic_entity": "default.hard_hat.state"}]}"#, "/columns/0/semantic_entity")]
#[case::upstream_tables(PayloadKind::Sql, r#"{"upstream_tables": ["roads.repair_orders"]}"#, "/upstream_tables")]
#[case::node_display_name(PayloadKind::CommonDimensions, r#"{"dimensions": [{"node_display_name": "Hard Hat"}]}"#, "/dimensions/0/node_display_name")]
fn test_response_override_keys_survive(
    #[case] kind: PayloadKind,
    #[case] payload: &str,
    #[case] pointer: &str,
) {
    let sent: Value = serde_json::from_str(payload).unwrap();
    let output: Value = serde_json::from_str(&inspect(kind, payload).unwrap()).unwrap();
    assert!(sent.pointer(pointer).is_some());
    assert_eq!(output.pointer(pointer), sent.pointer(pointer));
}

#[rstest]
#[case::display_name("display_name")]
#[case::primary_key("primary_key")]
#[case::update_if_exists("update_if_exists")]
#[case::schema("schema_")]
fn test_source_request_override_keys(#[case] key: &str) {
    let source = Source::new(
        "default.hard_hats",
        "warehouse",
        "roads",
        "hard_hats",
        Some("Hard Hats".to_string()),
        Some("Field workers".to_string()),
        vec![Column::new("hard_hat_id", "int")],
        vec!["hard_hat_id".to_string()],
        NodeMode::Draft,
        true,
    );
    let value = serde_json::to_value(&source).unwrap();
    assert!(value.get(key).is_some());

    let decoded: Source = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, source);
}

#[test]
fn test_requests_reject_missing_required_fields() {
    let dimension = from_json::<Dimension>(r#"{"name": "default.hard_hat"}"#);
    assert!(dimension.is_err());

    let metric = from_json::<Metric>(
        r#"{"name": "default.num_repair_orders", "display_name": null, "description": null,
            "mode": "published", "query": "SELECT 1", "updateIfExists": false}"#,
    );
    assert!(metric.is_err());
}

#[test]
fn test_nested_lists_keep_order() {
    let node: NodeResponse = from_json(
        r#"{"parents": [{"name": "default.a"}, {"name": "default.b"}, {"name": "default.c"}],
            "tags": ["z", "a"]}"#,
    )
    .unwrap();
    let parents: Vec<&str> = node
        .parents
        .iter()
        .flatten()
        .filter_map(|parent| parent.name.as_deref())
        .collect();
    assert_eq!(parents, ["default.a", "default.b", "default.c"]);
    assert_eq!(node.tags, Some(vec!["z".to_string(), "a".to_string()]));
}

#[test]
fn test_null_nested_values_are_unset() {
    let sql: SqlResponse =
        from_json(r#"{"sql": "SELECT 1", "columns": null, "dialect": null}"#).unwrap();
    assert_eq!(sql.columns, None);
    assert_eq!(sql.dialect, None);

    let node: NodeResponse = from_json(r#"{"catalog": null, "created_by": null}"#).unwrap();
    assert_eq!(node.catalog, None);
    assert_eq!(node.created_by, None);
}
