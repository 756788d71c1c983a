// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_cascade::TextStyle;

/// A layout tree node carrying a sparse style.
#[derive(Clone, Debug)]
pub(crate) struct StyleNode {
    pub(crate) style: TextStyle,
    pub(crate) children: Vec<StyleNode>,
}

pub(crate) fn node(style: TextStyle, children: impl IntoIterator<Item = StyleNode>) -> StyleNode {
    StyleNode {
        style,
        children: children.into_iter().collect(),
    }
}

pub(crate) fn leaf(style: TextStyle) -> StyleNode {
    node(style, [])
}

impl StyleNode {
    /// Resolves the whole tree top-down against `root`, like a layout pass would.
    pub(crate) fn resolve(&mut self, root: &TextStyle) {
        self.style.apply_global_style(root);
        let Self { style, children } = self;
        for child in children {
            child.resolve(style);
        }
    }

    /// Returns the node reached by following `path` as child indices.
    pub(crate) fn at(&self, path: &[usize]) -> &Self {
        path.iter().fold(self, |node, &index| &node.children[index])
    }
}
