use sift::{
    stmt::{Value, ValueRecord},
    view::{FieldTy, ViewKind},
    View,
};

use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq, View)]
struct TagView {
    label: String,
}

#[derive(Debug, PartialEq, View)]
struct PostView {
    id: i64,
    #[view(remap = "headline")]
    title: String,
    r#type: String,
    score: Option<f64>,
    tags: Vec<TagView>,
    primary_tag: Option<TagView>,
}

fn kind_of(ty: &FieldTy) -> String {
    match ty {
        FieldTy::Value => "value".to_string(),
        FieldTy::View(descriptor) => format!("view {}", descriptor().name),
        FieldTy::List(item) => format!("list of {}", kind_of(item)),
    }
}

#[test]
fn descriptor_lists_fields_in_declaration_order() {
    let descriptor = PostView::descriptor();

    assert_eq!(descriptor.name, "PostView");
    assert_eq!(
        descriptor
            .fields()
            .iter()
            .map(|field| (field.name, kind_of(&field.ty), field.optional))
            .collect::<Vec<_>>(),
        [
            ("id", "value".to_string(), false),
            ("title", "value".to_string(), false),
            ("type", "value".to_string(), false),
            ("score", "value".to_string(), true),
            ("tags", "list of view TagView".to_string(), false),
            ("primary_tag", "view TagView".to_string(), true),
        ]
    );
}

#[test]
fn descriptor_carries_declared_remap() {
    let ViewKind::Struct { remap, .. } = &PostView::descriptor().kind else {
        panic!("expected a struct view");
    };
    let remap = remap.as_ref().unwrap();

    assert_eq!(remap.source_for("title"), Some("headline"));
    assert_eq!(remap.source_for("id"), None);
}

#[test]
fn descriptor_without_remap_has_none() {
    let ViewKind::Struct { remap, .. } = &TagView::descriptor().kind else {
        panic!("expected a struct view");
    };

    assert!(remap.is_none());
}

#[test]
fn descriptor_is_built_once() {
    assert!(std::ptr::eq(PostView::descriptor(), PostView::descriptor()));
}

#[test]
fn load_builds_view_from_ordered_values() {
    let record = ValueRecord::from_vec(vec![
        Value::I64(3),
        Value::from("Hello"),
        Value::from("note"),
        Value::Null,
        Value::List(vec![Value::record_from_vec(vec![Value::from("rust")])]),
        Value::record_from_vec(vec![Value::from("intro")]),
    ]);

    assert_eq!(
        PostView::load(record).unwrap(),
        PostView {
            id: 3,
            title: "Hello".to_string(),
            r#type: "note".to_string(),
            score: None,
            tags: vec![TagView {
                label: "rust".to_string()
            }],
            primary_tag: Some(TagView {
                label: "intro".to_string()
            }),
        }
    );
}

#[test]
fn load_rejects_wrong_arity() {
    let record = ValueRecord::from_vec(vec![Value::from("a"), Value::from("b")]);

    let err = TagView::load(record).unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn load_reports_failing_field() {
    let record = ValueRecord::from_vec(vec![
        Value::from("not a number"),
        Value::from("Hello"),
        Value::from("note"),
        Value::Null,
        Value::List(vec![]),
        Value::Null,
    ]);

    let err = PostView::load(record).unwrap_err();
    assert_eq!(
        err.to_string(),
        "loading field `id` of `PostView`: cannot convert String to i64"
    );
}
