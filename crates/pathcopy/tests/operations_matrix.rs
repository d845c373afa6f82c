use pathcopy::{ops, Class, GlobalCtor, Key, Value};
use serde_json::{json, Value as JsonValue};

fn v(json: JsonValue) -> Value {
    Value::from(json)
}

#[test]
fn set_returns_new_root_and_shares_off_path_branches() {
    let doc = v(json!({
        "a": {"b": {"c": 1}, "side": [1, 2]},
        "other": {"deep": {"x": true}}
    }));
    let updated = ops::set("a.b.c", 2, &doc);

    assert!(!updated.ptr_eq(&doc));
    assert!(!ops::get("a", &updated).ptr_eq(&ops::get("a", &doc)));
    assert!(!ops::get("a.b", &updated).ptr_eq(&ops::get("a.b", &doc)));
    assert!(ops::get("a.side", &updated).ptr_eq(&ops::get("a.side", &doc)));
    assert!(ops::get("other", &updated).ptr_eq(&ops::get("other", &doc)));
    assert_eq!(doc.to_json()["a"]["b"]["c"], json!(1));
    assert_eq!(updated.to_json()["a"]["b"]["c"], json!(2));
}

#[test]
fn get_after_set_returns_the_value_itself() {
    let doc = v(json!({"a": [{"b": 1}]}));
    let cases = ["a[0].b", "a[3]", "x.y.z", "a[0].c[2].d", "a.0", "weird key"];

    for path in cases {
        let marker = Value::object([("marker", Value::from(path))]);
        let updated = ops::set(path, marker.clone(), &doc);
        assert!(
            ops::get(path, &updated).ptr_eq(&marker),
            "round trip failed for {path}"
        );
    }
}

#[test]
fn empty_path_matrix() {
    let doc = v(json!({"a": 1}));
    let value = v(json!([1, 2]));

    assert!(ops::get((), &doc).ptr_eq(&doc));
    assert!(ops::get(None::<&str>, &doc).ptr_eq(&doc));
    assert!(ops::set((), value.clone(), &doc).ptr_eq(&value));
    assert!(!ops::has((), &Value::Null));
    assert!(!ops::has((), &Value::Undefined));
    assert!(ops::has((), &Value::empty_object()));
    assert!(ops::has((), &Value::from(0)));
    assert_eq!(ops::remove((), &value), Value::empty_array());
    assert_eq!(ops::remove((), &doc), Value::empty_object());
}

#[test]
fn single_key_paths_are_never_the_root() {
    let doc = v(json!({"": "empty", "0": "zero"}));
    assert_eq!(ops::get("", &doc), Value::from("empty"));
    assert_eq!(ops::get(0usize, &doc), Value::from("zero"));
    assert_eq!(ops::get("0", &doc), Value::from("zero"));

    let list = v(json!(["a", "b"]));
    assert_eq!(ops::set(0usize, "z", &list).to_json(), json!(["z", "b"]));
}

#[test]
fn remove_is_identity_when_nothing_is_there() {
    let doc = v(json!({"a": {"b": null}, "n": 0, "list": [1]}));
    for path in ["missing", "a.c", "a.b.c", "n.x", "list[4]", "list[0].x"] {
        assert!(!ops::has(path, &doc), "{path} should be absent");
        assert!(ops::remove(path, &doc).ptr_eq(&doc), "{path} should be a no-op");
    }

    // null is a value: removing it produces a new root.
    let removed = ops::remove("a.b", &doc);
    assert!(!removed.ptr_eq(&doc));
    assert_eq!(removed.to_json()["a"], json!({}));
}

#[test]
fn remove_splices_arrays() {
    let list = v(json!(["a", "b", "c"]));
    let removed = ops::remove(0usize, &list);
    assert_eq!(removed.to_json(), json!(["b", "c"]));
    assert!(!removed.ptr_eq(&list));
    assert_eq!(list.to_json(), json!(["a", "b", "c"]));

    let doc = v(json!({"items": [{"id": 1}, {"id": 2}, {"id": 3}]}));
    let removed = ops::remove("items[1]", &doc);
    assert_eq!(removed.to_json(), json!({"items": [{"id": 1}, {"id": 3}]}));
    assert!(ops::get("items[0]", &removed).ptr_eq(&ops::get("items[0]", &doc)));
}

#[test]
fn merge_and_assign_laws() {
    let base = v(json!({"a": 0, "b": 2}));
    assert_eq!(
        ops::assign((), v(json!({"a": 1})), &base).to_json(),
        json!({"a": 1, "b": 2})
    );

    let left = v(json!({"cfg": {"x": 1, "list": [1]}}));
    let right = v(json!({"cfg": {"y": 2, "list": [2]}}));
    assert_eq!(
        ops::merge((), right.clone(), &left).to_json(),
        json!({"cfg": {"x": 1, "list": [1, 2], "y": 2}})
    );
    assert_eq!(
        ops::assign((), right, &left).to_json(),
        json!({"cfg": {"y": 2, "list": [2]}})
    );

    assert_eq!(
        ops::merge((), v(json!([2])), &v(json!([1]))).to_json(),
        json!([1, 2])
    );

    let patch = v(json!(["x"]));
    let merged = ops::merge((), patch.clone(), &v(json!({"a": 1})));
    assert_eq!(merged.to_json(), json!(["x"]));
    assert!(!merged.ptr_eq(&patch));
}

#[test]
fn merge_at_path_creates_and_merges() {
    let doc = v(json!({"settings": {"ui": {"theme": "dark"}}, "users": []}));

    let merged = ops::merge("settings.ui", v(json!({"size": 12})), &doc);
    assert_eq!(
        merged.to_json()["settings"],
        json!({"ui": {"theme": "dark", "size": 12}})
    );
    assert!(ops::get("users", &merged).ptr_eq(&ops::get("users", &doc)));

    let created = ops::merge("fresh[0]", v(json!({"a": 1})), &doc);
    assert_eq!(created.to_json()["fresh"], json!([{"a": 1}]));

    let concatenated = ops::merge("users", v(json!([{"name": "ada"}])), &doc);
    assert_eq!(concatenated.to_json()["users"], json!([{"name": "ada"}]));
}

#[test]
fn add_appends_only_to_existing_arrays() {
    assert_eq!(
        ops::add("arr", "x", &v(json!({"arr": ["a"]}))).to_json(),
        json!({"arr": ["a", "x"]})
    );
    assert_eq!(
        ops::add((), "x", &v(json!(["a"]))).to_json(),
        json!(["a", "x"])
    );
    assert_eq!(ops::add((), "x", &v(json!({"a": 1}))), Value::from("x"));
    assert_eq!(
        ops::add("arr", "x", &v(json!({"arr": "a"}))).to_json(),
        json!({"arr": "x"})
    );
    assert_eq!(
        ops::add("arr", "x", &v(json!({}))).to_json(),
        json!({"arr": "x"})
    );
    assert_eq!(
        ops::add("a.list", 3, &v(json!({"a": {"list": [1, 2]}}))).to_json(),
        json!({"a": {"list": [1, 2, 3]}})
    );
}

#[test]
fn deep_create_on_write_follows_key_types() {
    assert_eq!(
        ops::set("a[0].b", "v", &Value::empty_object()).to_json(),
        json!({"a": [{"b": "v"}]})
    );
    assert_eq!(
        ops::set("a.b[1]", "v", &Value::Undefined).to_json(),
        json!({"a": {"b": [null, "v"]}})
    );
    assert_eq!(
        ops::set(&[Key::name("0"), Key::Index(0)][..], "v", &Value::Null).to_json(),
        json!({"0": ["v"]})
    );
}

#[test]
fn integers_past_the_index_limit_are_property_names() {
    assert_eq!(
        ops::set("list[18446744073709551615]", 1, &Value::empty_object()).to_json(),
        json!({"list": {"18446744073709551615": 1}})
    );

    let doc = v(json!({"arr": [1, 2]}));
    let far = ops::set("arr[4294967296]", "x", &doc);
    assert_eq!(ops::get("arr.length", &far), Value::from(2));
    assert_eq!(ops::get("arr[4294967296]", &far), Value::from("x"));
    assert_eq!(far.to_json(), json!({"arr": [1, 2]}));
}

#[test]
fn invalid_array_lengths_leave_the_array_alone() {
    let doc = v(json!({"arr": [1, 2]}));
    for len in [1e300, 4294967295.0, -1.0, 0.5] {
        assert_eq!(
            ops::set("arr.length", len, &doc).to_json(),
            json!({"arr": [1, 2]}),
            "length {len}"
        );
    }
    assert_eq!(
        ops::set("arr.length", 1, &doc).to_json(),
        json!({"arr": [1]})
    );
}

#[test]
fn set_replaces_non_cloneable_branches() {
    let doc = Value::object([
        ("when", Value::date(0.0)),
        ("pattern", Value::regexp("^a").unwrap()),
        ("count", Value::from(3)),
    ]);

    assert_eq!(
        ops::set("when.year", 2020, &doc).to_json()["when"],
        json!({"year": 2020})
    );
    assert_eq!(
        ops::set("pattern[0]", "x", &doc).to_json()["pattern"],
        json!(["x"])
    );
    assert_eq!(
        ops::set("count.n", 1, &doc).to_json()["count"],
        json!({"n": 1})
    );
}

#[test]
fn container_kinds_survive_writes() {
    let point = Class::new("Point").member("dims", 2).build();
    let doc = Value::object([
        ("origin", Value::instance(&point, [("x", Value::from(0))])),
        (
            "lookup",
            Value::global(GlobalCtor::Map, [("size", Value::from(3))]),
        ),
    ]);

    let moved = ops::set("origin.x", 5, &doc);
    let origin = ops::get("origin", &moved);
    assert_eq!(
        origin,
        Value::instance(&point, [("x", Value::from(5))]),
        "class must be preserved"
    );
    assert_eq!(ops::get("origin.dims", &moved), Value::from(2));

    let touched = ops::set("lookup.extra", true, &doc);
    assert_eq!(
        ops::get("lookup", &touched),
        Value::object([("extra", Value::from(true))]),
        "global instances clone to plain objects"
    );
}

#[test]
fn is_uses_same_value_zero() {
    let shared = Value::empty_object();
    let doc = Value::object([
        ("nan", Value::from(f64::NAN)),
        ("zero", Value::from(-0.0)),
        ("obj", shared.clone()),
    ]);

    assert!(ops::is("nan", f64::NAN, &doc));
    assert!(ops::is("zero", 0.0, &doc));
    assert!(ops::is("obj", shared, &doc));
    assert!(!ops::is("obj", Value::empty_object(), &doc));
    assert!(ops::is("missing", Value::Undefined, &doc));
}

#[test]
fn reads_stop_at_falsy_links() {
    let doc = v(json!({"zero": 0, "empty": "", "text": "hey", "f": false}));
    for path in ["zero.x", "empty.length", "f.x", "missing.x"] {
        assert!(ops::get(path, &doc).is_undefined(), "{path}");
        assert_eq!(
            ops::get_or(Value::from("fallback"), path, &doc),
            Value::from("fallback")
        );
    }
    assert_eq!(ops::get("text.length", &doc), Value::from(3));
    assert_eq!(ops::get("text[0]", &doc), Value::from("h"));
}

#[test]
fn with_variants_see_the_current_value() {
    let doc = v(json!({"count": 1, "tags": ["a"]}));
    let incr = |current: &Value| Value::from(current.as_f64().unwrap_or_default() + 1.0);

    assert_eq!(ops::set_with(incr, "count", &doc).to_json()["count"], json!(2));
    assert_eq!(ops::set_with(incr, "new", &doc).to_json()["new"], json!(1));
    assert_eq!(ops::get_with(incr, "count", &doc), Value::from(2));
    assert!(ops::get_with(incr, "new", &doc).is_undefined());
    assert!(ops::is_with(incr, "count", 2, &doc));
    assert!(ops::has_with(|tags| tags.is_array(), "tags", &doc));

    let tagged = ops::add_with(
        |tags| Value::from(format!("#{}", tags.as_array().map_or(0, |a| a.len()))),
        "tags",
        &doc,
    );
    assert_eq!(tagged.to_json()["tags"], json!(["a", "#1"]));

    let kept = ops::remove_with(|count| count.as_f64() == Some(5.0), "count", &doc);
    assert!(kept.ptr_eq(&doc));
}

#[test]
fn call_uses_root_as_default_context() {
    let doc = Value::object([
        ("name", Value::from("root")),
        (
            "greet",
            Value::function(|context, args| {
                let name = context.property(&Key::name("name")).to_display_string();
                let suffix = args.first().map(Value::to_display_string).unwrap_or_default();
                Value::from(format!("hi {name}{suffix}"))
            }),
        ),
    ]);

    assert_eq!(ops::call("greet", &[Value::from("!")], &doc), Value::from("hi root!"));
    assert_eq!(
        ops::call_on(
            "greet",
            &[],
            &doc,
            &Value::object([("name", Value::from("ctx"))])
        ),
        Value::from("hi ctx")
    );
    assert!(ops::call("name", &[], &doc).is_undefined());
    assert!(ops::call_with(|_| false, "greet", &[], &doc).is_undefined());
}

#[test]
fn inputs_are_never_mutated() {
    let original = json!({"a": {"b": [1, 2, {"c": 3}]}, "d": "e"});
    let doc = v(original.clone());

    let _ = ops::set("a.b[2].c", 4, &doc);
    let _ = ops::add("a.b", 5, &doc);
    let _ = ops::remove("a.b[0]", &doc);
    let _ = ops::merge("a", v(json!({"x": 1})), &doc);
    let _ = ops::assign((), v(json!({"d": "f"})), &doc);

    assert_eq!(doc.to_json(), original);
}
