use php_ast::{Comment, CommentKind, Position};

#[test]
fn test_plain_comment() {
    let comment = Comment::new("// hello");
    assert_eq!(comment.kind, CommentKind::Plain);
    assert_eq!(comment.text(), "// hello");
    assert!(!comment.is_doc());
    assert!(comment.start_position().is_unknown());
}

#[test]
fn test_doc_comment() {
    let comment = Comment::doc("/** @var int */").at_line(4);
    assert!(comment.is_doc());
    assert_eq!(comment.line, Some(4));
    assert_eq!(comment.start_position().line, Some(4));
    assert_eq!(comment.start_position().file_pos, None);
}

#[test]
fn test_comment_at_position() {
    let comment = Comment::new("# x").at(Position::new(2, 15, 6));
    assert_eq!(comment.start_position(), Position::new(2, 15, 6));
}

#[test]
fn test_comment_display() {
    let comment = Comment::with_kind(CommentKind::Doc, "/** doc */");
    assert_eq!(format!("{}", comment), "/** doc */");
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(3, 40, 7).to_string(), "line 3, offset 40");
    assert_eq!(Position::unknown().to_string(), "unknown position");
    let line_only = Position { line: Some(9), ..Position::unknown() };
    assert_eq!(line_only.to_string(), "line 9");
}
