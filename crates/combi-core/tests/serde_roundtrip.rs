use combi_core::{CombiError, ErrorInfo, ForestEdge, Partition, StirlingPermutation};

#[test]
fn partition_serialises_as_nested_arrays() {
    let part = Partition::new(vec![vec![0, 2, -2], vec![1], vec![-1]]);
    let json = serde_json::to_string(&part).unwrap();
    assert_eq!(json, "[[0,2,-2],[1],[-1]]");
    let restored: Partition = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, part);
}

#[test]
fn permutation_and_edges_serialise() {
    let perm = StirlingPermutation::new(vec![1, 2, 2, 1]);
    assert_eq!(serde_json::to_string(&perm).unwrap(), "[1,2,2,1]");
    let edge = ForestEdge {
        parent: None,
        child: 1,
    };
    let json = serde_json::to_string(&edge).unwrap();
    assert_eq!(json, r#"{"parent":null,"child":1}"#);
}

#[test]
fn errors_roundtrip_with_family_tag() {
    let err = CombiError::Structure(
        ErrorInfo::new("unpaired-block", "block has no opposite")
            .with_context("block", "[1, 2]")
            .with_hint("pass a complete type-B partition"),
    );
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "Structure");
    assert_eq!(json["detail"]["code"], "unpaired-block");
    let restored: CombiError = serde_json::from_value(json).unwrap();
    assert_eq!(restored, err);
    let rendered = err.to_string();
    assert!(rendered.starts_with("structure error: block has no opposite (code: unpaired-block)"));
    assert!(rendered.contains("block=[1, 2]"));
    assert!(rendered.ends_with("| hint: pass a complete type-B partition"));
}
