//! Interchange tests: parsed trees survive a trip through the
//! `Kind`-discriminated JSON format unchanged.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};
use tsdecl_ast::interchange::{from_json, from_value, to_json, to_value};
use tsdecl_ast::node::*;
use tsdecl_ast::Node;
use tsdecl_ast::syntax_kind::SyntaxKind;
use tsdecl_parser::parse_source_file;

fn fixture_paths() -> Vec<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .expect("fixture directory")
        .map(|entry| entry.expect("fixture entry").path())
        .filter(|path| path.to_string_lossy().ends_with(".d.ts"))
        .collect();
    paths.sort();
    paths
}

fn encode(source: &str) -> Value {
    let file = parse_source_file(source).expect("source should parse");
    to_value(&file).expect("tree should encode")
}

#[test]
fn test_fixtures_round_trip() {
    let paths = fixture_paths();
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).expect("fixture should be readable");
        let file = parse_source_file(&source).unwrap_or_else(|err| panic!("{}{}", path.display(), err));
        assert!(!file.statements.is_empty(), "{}", path.display());

        let json = to_json(&file).expect("tree should encode");
        let decoded: SourceFile = from_json(&json).expect("tree should decode");
        assert_eq!(decoded, file, "{}", path.display());
    }
}

/// Every `Kind` appearing anywhere in an encoded tree.
fn collect_kinds(value: &Value, kinds: &mut BTreeSet<u16>) {
    match value {
        Value::Object(fields) => {
            if let Some(kind) = fields.get("Kind").and_then(Value::as_u64) {
                kinds.insert(kind as u16);
            }
            fields.values().for_each(|field| collect_kinds(field, kinds));
        }
        Value::Array(items) => items.iter().for_each(|item| collect_kinds(item, kinds)),
        _ => {}
    }
}

#[test]
fn test_fixtures_cover_every_node_variant() {
    let mut kinds = BTreeSet::new();
    for path in fixture_paths() {
        let source = fs::read_to_string(&path).expect("fixture should be readable");
        collect_kinds(&encode(&source), &mut kinds);
    }

    let seen: BTreeSet<&str> = kinds
        .iter()
        .filter_map(|&kind| SyntaxKind::from_u16(kind))
        .flat_map(Node::variants_accepting)
        .collect();
    let all: BTreeSet<&str> = SyntaxKind::ALL.iter().flat_map(|&kind| Node::variants_accepting(kind)).collect();
    let missing: Vec<&&str> = all.difference(&seen).collect();
    assert!(missing.is_empty(), "no fixture produces {:?}", missing);
}

#[test]
fn test_shapes_fixture_details() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shapes.d.ts");
    let value = encode(&fs::read_to_string(path).expect("fixture should be readable"));
    let statements = &value["Statements"];

    let default_and_named = &statements[0]["ImportClause"];
    assert_eq!(default_and_named["Name"]["Text"], json!("Shape"));
    assert_eq!(default_and_named["NamedBindings"]["Elements"][0]["IsTypeOnly"], json!(true));
    assert_eq!(statements[1]["ImportClause"]["Name"]["Text"], json!("Defaults"));
    assert!(statements[1]["ImportClause"].get("NamedBindings").is_none());

    let star = &statements[2];
    assert_eq!(star["Kind"], json!(SyntaxKind::ExportDeclaration as u16));
    assert!(star.get("ExportClause").is_none());
    assert_eq!(star["ModuleSpecifier"]["Text"], json!("./geometry"));
    assert_eq!(statements[3]["ExportClause"]["Elements"][0]["PropertyName"]["Text"], json!("Edge"));

    let tuple = &statements[4]["Type"]["Elements"];
    assert_eq!(tuple[2]["Kind"], json!(SyntaxKind::OptionalType as u16));
    assert_eq!(tuple[3]["Kind"], json!(SyntaxKind::RestType as u16));
    assert_eq!(tuple[3]["Type"]["Kind"], json!(SyntaxKind::ArrayType as u16));

    let tagged = &statements[5]["Type"];
    assert_eq!(tagged["Kind"], json!(SyntaxKind::IntersectionType as u16));
    assert_eq!(tagged["Types"][0]["Kind"], json!(SyntaxKind::ParenthesizedType as u16));

    let class = &statements[7];
    assert_eq!(class["Members"][0]["Kind"], json!(SyntaxKind::IndexSignature as u16));
}

#[test]
fn test_source_file_shape() {
    let value = encode("class Foo {}");
    assert_eq!(
        value,
        json!({
            "Kind": 312,
            "Statements": [{
                "Kind": 263,
                "Name": { "Kind": 80, "Text": "Foo" },
                "Members": []
            }]
        })
    );
}

#[test]
fn test_comment_is_encoded_on_name() {
    let value = encode("/** Docs. */\ninterface A {}");
    let name = &value["Statements"][0]["Name"];
    assert_eq!(name["Comment"], json!("Docs."));
    assert_eq!(value["Statements"][0]["Kind"], json!(264));
}

#[test]
fn test_modifiers_and_types_are_encoded() {
    let value = encode("export declare type A = string | number;");
    let alias = &value["Statements"][0];
    assert_eq!(
        alias["Modifiers"],
        json!([
            { "Kind": SyntaxKind::ExportKeyword as u16 },
            { "Kind": SyntaxKind::DeclareKeyword as u16 }
        ])
    );
    assert_eq!(alias["Type"]["Kind"], json!(SyntaxKind::UnionType as u16));
    assert_eq!(
        alias["Type"]["Types"],
        json!([
            { "Kind": SyntaxKind::StringKeyword as u16 },
            { "Kind": SyntaxKind::NumberKeyword as u16 }
        ])
    );
}

#[test]
fn test_enum_initializers_are_encoded() {
    let value = encode("declare enum E { A = 1, B = 'b' }");
    let members = &value["Statements"][0]["Members"];
    assert_eq!(members[0]["Kind"], json!(306));
    assert_eq!(
        members[0]["Initializer"],
        json!({ "Kind": SyntaxKind::NumericLiteral as u16, "Text": "1" })
    );
    assert_eq!(
        members[1]["Initializer"],
        json!({ "Kind": SyntaxKind::StringLiteral as u16, "Text": "b" })
    );
}

#[test]
fn test_decoded_tree_matches_parsed_tree() {
    let document = json!({
        "Kind": 312,
        "Statements": [{
            "Kind": 264,
            "Name": { "Kind": 80, "Text": "Point" },
            "Members": [{
                "Kind": SyntaxKind::PropertySignature as u16,
                "Name": { "Kind": 80, "Text": "x" },
                "Type": { "Kind": SyntaxKind::NumberKeyword as u16 }
            }]
        }]
    });
    let decoded: SourceFile = from_value(document).expect("document should decode");
    let parsed = parse_source_file("interface Point { x: number }").expect("source should parse");
    assert_eq!(decoded, parsed);
}

#[test]
fn test_members_keep_their_kind() {
    let file = parse_source_file("interface I { x: number }\ndeclare class C { x: number }").expect("source should parse");
    let decoded: SourceFile = from_json(&to_json(&file).expect("encode")).expect("decode");

    let Statement::InterfaceDeclaration(interface) = &decoded.statements[0] else {
        panic!("expected an interface");
    };
    assert!(matches!(interface.members[0], TypeElement::PropertySignature(_)));

    let Statement::ClassDeclaration(class) = &decoded.statements[1] else {
        panic!("expected a class");
    };
    assert!(matches!(class.members[0], ClassElement::PropertyDeclaration(_)));
}

/// `type T = (a: (a: ... string) => void) => void;` with `levels` function types.
fn nested_function_types(levels: usize) -> String {
    format!("type T = {}string{};", "(a: ".repeat(levels), ") => void".repeat(levels))
}

#[test]
fn test_deepest_default_tree_round_trips_on_a_small_stack() {
    let worker = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| {
            assert!(parse_source_file(&nested_function_types(199)).is_err());

            let file = parse_source_file(&nested_function_types(198)).expect("source should parse");
            let json = to_json(&file).expect("tree should encode");
            let decoded: SourceFile = from_json(&json).expect("tree should decode");
            assert!(decoded == file);
        })
        .expect("spawn");
    worker.join().expect("deep tree should not overflow the stack");
}

#[test]
fn test_deep_generic_arguments_round_trip() {
    let source = format!("type T = {}string{};", "Array<".repeat(198), ">".repeat(198));
    let file = parse_source_file(&source).expect("source should parse");
    let decoded: SourceFile = from_json(&to_json(&file).expect("encode")).expect("decode");
    assert!(decoded == file);
}
