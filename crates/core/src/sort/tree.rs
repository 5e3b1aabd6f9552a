/// Binary search tree stored in an index arena.
///
/// Values less than or equal to a node go left, strictly greater go right,
/// so an in-order walk yields ascending order with duplicates kept.
#[derive(Debug, Default)]
struct Tree {
    nodes: Vec<Node>,
}

#[derive(Debug)]
struct Node {
    value: char,
    left: Option<usize>,
    right: Option<usize>,
}

impl Tree {
    fn insert(&mut self, value: char) {
        let id = self.nodes.len();
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
        });

        if id == 0 {
            return;
        }

        let mut current = 0;
        loop {
            let node = &mut self.nodes[current];
            let slot = if value <= node.value {
                &mut node.left
            } else {
                &mut node.right
            };

            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(id);
                    return;
                }
            }
        }
    }

    fn in_order(&self) -> String {
        let mut out = String::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = if self.nodes.is_empty() { None } else { Some(0) };

        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }

            if let Some(id) = stack.pop() {
                out.push(self.nodes[id].value);
                current = self.nodes[id].right;
            }
        }

        out
    }
}

/// Sort by inserting every character into a BST and walking it in order.
pub fn tree_sort(input: &str) -> String {
    let mut tree = Tree::default();
    for c in input.chars() {
        tree.insert(c);
    }
    tree.in_order()
}
