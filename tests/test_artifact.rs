use solmap::{Artifact, DecodeError, Position};
use std::collections::BTreeMap;

#[test]
fn test_artifact_decode() {
    let mut buf = br#"{
        "contractName": "C",
        "sourceMap": "0:37:0:-",
        "deployedSourceMap": "13:22:0:-;;0:37:0:-",
        "source": "contract C { function f() public {} }",
        "sourcePath": "contracts/C.sol",
        "bytecode": "0x6080604052"
    }"#
    .to_vec();
    let artifact = Artifact::from_slice(&mut buf).unwrap();

    let indices = BTreeMap::from([(0u32, 0u32), (2, 1), (4, 2)]);
    let decoded = artifact
        .decoder()
        .decode(artifact.runtime_source_map().unwrap(), &indices)
        .unwrap();

    let range = decoded.range_at(0).unwrap();
    assert_eq!(range.file_name, "contracts/C.sol");
    assert_eq!(range.start, Position::new(1, 13));
    assert_eq!(range.end, Position::new(1, 35));
    assert_eq!(decoded.range_at(2), decoded.range_at(0));
    assert_eq!(decoded.range_at(4).unwrap().start, Position::new(1, 0));
}

#[test]
fn test_artifact_without_source_decodes_unmapped() {
    let mut buf = br#"{"contractName": "C", "deployedSourceMap": "0:5:0:-"}"#.to_vec();
    let artifact = Artifact::from_slice(&mut buf).unwrap();

    let indices = BTreeMap::from([(0u32, 0u32)]);
    let decoded = artifact
        .decoder()
        .decode(artifact.runtime_source_map().unwrap(), &indices)
        .unwrap();
    // no text registered for file 0, so the entry is silently unmapped
    assert_eq!(decoded.entry_at(0), Some(None));
}

#[test]
fn test_artifact_syntax_error() {
    let mut buf = b"{\"contractName\": ".to_vec();
    assert!(matches!(
        Artifact::from_slice(&mut buf),
        Err(DecodeError::Syntax(..))
    ));
}
