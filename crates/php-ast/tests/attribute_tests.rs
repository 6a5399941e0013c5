use php_ast::{AttrValue, AttributeBag, Comment, Name};

#[test]
fn test_set_and_get() {
    let mut bag = AttributeBag::new();
    bag.set("startLine", 3);
    assert_eq!(bag.get("startLine"), Some(&AttrValue::Int(3)));
    assert_eq!(bag.len(), 1);
}

#[test]
fn test_set_overwrites() {
    let mut bag = AttributeBag::new();
    bag.set("kind", 1);
    bag.set("kind", "heredoc");
    assert_eq!(bag.get("kind").and_then(AttrValue::as_str), Some("heredoc"));
    assert_eq!(bag.len(), 1);
}

#[test]
fn test_get_or_default() {
    let bag = AttributeBag::new();
    assert_eq!(bag.get_or("startLine", -1), AttrValue::Int(-1));
    assert_eq!(bag.get_or("missing", AttrValue::Null), AttrValue::Null);
}

#[test]
fn test_get_or_prefers_stored_null() {
    let mut bag = AttributeBag::new();
    bag.set("docLabel", AttrValue::Null);
    assert_eq!(bag.get_or("docLabel", "EOT"), AttrValue::Null);
}

#[test]
fn test_has_and_is_set() {
    let mut bag = AttributeBag::new();
    assert!(!bag.has("a"));
    assert!(!bag.is_set("a"));

    bag.set("a", AttrValue::Null);
    assert!(bag.has("a"));
    assert!(!bag.is_set("a"));

    bag.set("a", false);
    assert!(bag.has("a"));
    assert!(bag.is_set("a"));
}

#[test]
fn test_remove() {
    let mut bag = AttributeBag::new();
    bag.set("a", 1);
    assert_eq!(bag.remove("a"), Some(AttrValue::Int(1)));
    assert_eq!(bag.remove("a"), None);
    assert!(bag.is_empty());
}

#[test]
fn test_get_mut_edits_stored_value() {
    let mut bag = AttributeBag::new();
    bag.set("comments", vec![Comment::new("// a")]);

    if let Some(comments) = bag.get_mut("comments").and_then(AttrValue::as_comments_mut) {
        comments.push(Comment::new("// b"));
    }

    assert_eq!(bag.get("comments").and_then(AttrValue::as_comments).map(<[Comment]>::len), Some(2));
}

#[test]
fn test_entry_or_keeps_existing_value() {
    let mut bag = AttributeBag::new();
    bag.set("count", 1);
    *bag.entry_or("count", 100) = AttrValue::Int(2);
    assert_eq!(bag["count"], AttrValue::Int(2));

    let fresh = bag.entry_or("fresh", 100);
    assert_eq!(*fresh, AttrValue::Int(100));
}

#[test]
fn test_all_lists_every_pair() {
    let bag: AttributeBag = [("b", 2), ("a", 1)].into_iter().collect();
    let pairs: Vec<_> = bag.all().collect();
    assert_eq!(pairs, vec![("a", &AttrValue::Int(1)), ("b", &AttrValue::Int(2))]);
    assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_extend() {
    let mut bag = AttributeBag::new();
    bag.extend([("a", 1), ("b", 2)]);
    bag.extend([("a", 3)]);
    assert_eq!(bag["a"], AttrValue::Int(3));
    assert_eq!(bag.len(), 2);
}

#[test]
fn test_clone_is_deep() {
    let mut bag = AttributeBag::new();
    bag.set("comments", vec![Comment::new("// a")]);

    let mut copy = bag.clone();
    if let Some(comments) = copy.get_mut("comments").and_then(AttrValue::as_comments_mut) {
        comments.clear();
    }

    assert_eq!(bag.get("comments").and_then(AttrValue::as_comments).map(<[Comment]>::len), Some(1));
}

#[test]
fn test_clear() {
    let mut bag: AttributeBag = [("a", 1)].into_iter().collect();
    bag.clear();
    assert!(bag.is_empty());
}

#[test]
fn test_value_accessors() {
    assert_eq!(AttrValue::from(true).as_bool(), Some(true));
    assert_eq!(AttrValue::from(3usize).as_usize(), Some(3));
    assert_eq!(AttrValue::from(1.5).as_float(), Some(1.5));
    assert_eq!(AttrValue::Int(2).as_float(), Some(2.0));
    assert_eq!(AttrValue::from("x").as_str(), Some("x"));
    assert_eq!(AttrValue::from(vec![AttrValue::Int(1)]).as_list().map(<[AttrValue]>::len), Some(1));
    assert!(AttrValue::Int(1).as_str().is_none());
    assert!(AttrValue::default().is_null());
}

#[test]
fn test_name_value() {
    let value = AttrValue::from(Name::fully_qualified("Foo\\Bar").unwrap());
    let name = value.as_name().unwrap();
    assert!(name.is_fully_qualified());
    assert_eq!(name.last(), "Bar");
}
