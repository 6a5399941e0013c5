use php_ast::visit::{for_each_node, walk_all};
use php_ast::{walk, AstNode, Encapsed, EncapsedStringPart, InlineHtml, Name, Node, Visitor};

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Visitor for Recorder {
    fn enter(&mut self, node: &Node) {
        self.events.push(format!("enter {}", node.node_type()));
    }

    fn leave(&mut self, node: &Node) {
        self.events.push(format!("leave {}", node.node_type()));
    }
}

fn tree() -> Node {
    Encapsed::new(vec![
        EncapsedStringPart::new("Hello ").into(),
        Encapsed::new(vec![Name::fully_qualified("World").unwrap().into()]).into(),
    ])
    .into()
}

#[test]
fn test_walk_order() {
    let mut recorder = Recorder::default();
    walk(&tree(), &mut recorder);
    assert_eq!(
        recorder.events,
        vec![
            "enter Scalar_Encapsed",
            "enter Scalar_EncapsedStringPart",
            "leave Scalar_EncapsedStringPart",
            "enter Scalar_Encapsed",
            "enter Name_FullyQualified",
            "leave Name_FullyQualified",
            "leave Scalar_Encapsed",
            "leave Scalar_Encapsed",
        ]
    );
}

#[test]
fn test_walk_all() {
    let nodes = vec![Node::from(InlineHtml::new("<p>")), Node::from(Name::new("A").unwrap())];
    let mut recorder = Recorder::default();
    walk_all(&nodes, &mut recorder);
    assert_eq!(recorder.events.len(), 4);
}

#[test]
fn test_for_each_node_collects_names() {
    let mut names = Vec::new();
    for_each_node(&tree(), |node| {
        if let Some(name) = node.as_name() {
            names.push(name.to_code_string());
        }
    });
    assert_eq!(names, vec!["\\World"]);
}

#[test]
fn test_default_visitor_is_noop() {
    struct Nothing;
    impl Visitor for Nothing {}
    walk(&tree(), &mut Nothing);
}
