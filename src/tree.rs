use std::fmt::{Display, Formatter};

/// A labelled node with ordered children, rendered as an indented list.
///
/// ```text
/// root:
///   - child:
///       - grandchild
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.push(child);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }
}

impl Display for TreeNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut stack = vec![(self, 0)];
        let mut first = true;
        while let Some((node, depth)) = stack.pop() {
            if !first {
                writeln!(f)?;
            }
            first = false;

            if depth > 0 {
                let indent = " ".repeat(2 + (depth - 1) * 4);
                write!(f, "{indent}- ")?;
            }
            f.write_str(&node.label)?;
            if !node.children.is_empty() {
                f.write_str(":")?;
            }

            // Reversed, so children pop off the stack in order
            stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
        }

        Ok(())
    }
}
