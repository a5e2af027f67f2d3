//! Documentation navigation tree: decoding, validation, traversal, encoding

use polycalc::domain::{DomainError, NavChildren, NavNode, NavTree, SYNC_OFF_MSG, SYNC_ON_MSG};

const VIEWER_SCRIPT: &str = include_str!("fixtures/navtreedata.js");

#[test]
fn given_viewer_script_when_decoding_then_matches_project_tree() {
    let tree = NavTree::from_script(VIEWER_SCRIPT).unwrap();
    assert_eq!(tree, NavTree::project());
}

#[test]
fn given_project_tree_when_validating_then_well_formed() {
    assert!(NavTree::project().validate().is_ok());
}

#[test]
fn given_project_tree_when_inspecting_then_expected_shape() {
    let tree = NavTree::project();

    assert_eq!(tree.roots.len(), 1);
    assert_eq!(tree.roots[0].label, "Polynomial Calculator");
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.index, vec!["annotated.html".to_string()]);
    assert_eq!(tree.sync_on_msg, SYNC_ON_MSG);
    assert_eq!(tree.sync_off_msg, SYNC_OFF_MSG);

    let sections: Vec<_> = tree.roots[0]
        .child_nodes()
        .iter()
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(sections, ["README", "Классы", "Файлы"]);
}

#[test]
fn given_project_tree_when_walking_then_preorder_with_depths() {
    let tree = NavTree::project();
    let first: Vec<_> = tree
        .iter()
        .take(4)
        .map(|(depth, n)| (depth, n.label.as_str()))
        .collect();

    assert_eq!(
        first,
        [
            (0, "Polynomial Calculator"),
            (1, "README"),
            (2, "Polynomial_calc"),
            (3, "Getting started"),
        ]
    );
    assert_eq!(tree.iter().count(), 38);
}

#[test]
fn given_project_tree_when_collecting_leaves_then_deferred_entries_excluded() {
    let tree = NavTree::project();
    let links = tree.leaf_links();

    assert!(links.contains(&"classes.html"));
    assert!(links.contains(&"md__r_e_a_d_m_e.html#autotoc_md21"));
    assert!(!links.contains(&"index.html"));
    assert!(!links.contains(&"files.html"));
}

#[test]
fn given_link_when_searching_then_first_entry_in_preorder() {
    let tree = NavTree::project();

    let node = tree.find_by_link("annotated.html").unwrap();
    assert_eq!(node.label, "Классы");
    assert!(!node.is_leaf());
    assert!(matches!(node.children, NavChildren::Nodes(_)));

    assert!(tree.find_by_link("missing.html").is_none());
}

#[test]
fn given_project_tree_when_encoding_then_script_round_trips() {
    let tree = NavTree::project();
    let script = tree.to_script();

    assert!(script.starts_with("var NAVTREE =\n[\n"));
    assert!(script.contains("[ \"Классы\", \"annotated.html\", \"annotated_dup\" ]"));
    assert!(script.contains(&format!("var SYNCONMSG = '{SYNC_ON_MSG}';")));
    assert_eq!(NavTree::from_script(&script).unwrap(), tree);
}

#[test]
fn given_messages_with_quotes_when_encoding_then_escaped_and_restored() {
    let mut tree = NavTree::new(vec![NavNode::leaf("Home", "index.html")], vec![]);
    tree.sync_on_msg = "it's on".to_string();

    let decoded = NavTree::from_script(&tree.to_script()).unwrap();

    assert_eq!(decoded.sync_on_msg, "it's on");
    assert!(decoded.index.is_empty());
}

#[test]
fn given_minified_script_when_decoding_then_all_assignments_read() {
    let script = concat!(
        r#"var NAVTREE=[["Home","index.html",[["A; B","a.html",null]]]];"#,
        r#"var NAVTREEINDEX=["a.html"];var SYNCONMSG='on';var SYNCOFFMSG='off';"#
    );

    let tree = NavTree::from_script(script).unwrap();

    assert_eq!(
        tree.roots,
        vec![NavNode::branch(
            "Home",
            "index.html",
            vec![NavNode::leaf("A; B", "a.html")]
        )]
    );
    assert_eq!(tree.index, vec!["a.html".to_string()]);
    assert_eq!(tree.sync_on_msg, "on");
    assert_eq!(tree.sync_off_msg, "off");
}

#[test]
fn given_project_tree_when_encoding_minified_then_decodes_same_tree() {
    let tree = NavTree::project();
    let minified = tree.to_script().replace('\n', "");

    assert_eq!(NavTree::from_script(&minified).unwrap(), tree);
}

#[test]
fn given_multiline_message_when_encoding_then_restored() {
    let mut tree = NavTree::new(vec![NavNode::leaf("Home", "index.html")], vec![]);
    tree.sync_off_msg = "click to\nsync panels".to_string();

    let script = tree.to_script();
    let decoded = NavTree::from_script(&script).unwrap();

    assert!(script.contains(r"var SYNCOFFMSG = 'click to\nsync panels';"));
    assert_eq!(decoded.sync_off_msg, "click to\nsync panels");
}

#[test]
fn given_script_without_optional_parts_when_decoding_then_defaults() {
    let script = r#"var NAVTREE = [ [ "Home", "index.html", null ] ];"#;

    let tree = NavTree::from_script(script).unwrap();

    assert_eq!(tree.roots, vec![NavNode::leaf("Home", "index.html")]);
    assert!(tree.index.is_empty());
    assert_eq!(tree.sync_off_msg, SYNC_OFF_MSG);
}

#[test]
fn given_script_without_navtree_when_decoding_then_malformed_script() {
    let result = NavTree::from_script("var NAVTREEINDEX = [];");
    assert!(matches!(
        result,
        Err(DomainError::MalformedNavScript { .. })
    ));
}

#[test]
fn given_entry_with_wrong_arity_when_decoding_then_malformed_script() {
    let result = NavTree::from_script(r#"var NAVTREE = [ [ "Home", "index.html" ] ];"#);
    assert!(matches!(
        result,
        Err(DomainError::MalformedNavScript { .. })
    ));
}

#[test]
fn given_empty_tree_when_validating_then_malformed_entry() {
    let tree = NavTree::new(vec![], vec![]);
    assert!(matches!(
        tree.validate(),
        Err(DomainError::MalformedNavEntry { .. })
    ));
    assert_eq!(tree.depth(), 0);
}

#[test]
fn given_blank_label_when_validating_then_reports_parent_path() {
    let tree = NavTree::new(
        vec![NavNode::branch(
            "Root",
            "index.html",
            vec![NavNode::leaf(" ", "x.html")],
        )],
        vec![],
    );
    match tree.validate() {
        Err(DomainError::MalformedNavEntry { path, message }) => {
            assert_eq!(path, "Root >  ");
            assert_eq!(message, "empty label");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn given_project_tree_when_rendering_then_termtree_lists_entries() {
    let rendered = NavTree::project().to_termtree()[0].to_string();

    assert!(rendered.starts_with("Polynomial Calculator (index.html)"));
    assert!(rendered.contains("Файлы (files.html) [files_dup]"));
    assert!(rendered.contains("Getting started (md__r_e_a_d_m_e.html#autotoc_md1)"));
}
