use tree_sitter::Node;

/// Visit every node reachable from `root` in pre-order, children in
/// declaration order.
///
/// Uses the tree-sitter cursor rather than native recursion, so deeply
/// nested markup cannot exhaust the call stack. The tree is acyclic by
/// construction; no cycle detection is needed.
pub fn visit_all<'tree, F>(root: Node<'tree>, visit: &mut F)
where
    F: FnMut(Node<'tree>),
{
    let mut cursor = root.walk();
    'descend: loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.node() == root {
                return;
            }
            if cursor.goto_next_sibling() {
                continue 'descend;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// Extract a node's text from the original source. Total: an out-of-range or
/// misaligned byte range yields the empty string instead of panicking.
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}
