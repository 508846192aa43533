// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tree nodes, rotations and the splay step.
//!
//! Every node exclusively owns its children through `Option<Box<_>>` links.
//! Rotations move boxes between slots and never clone keys or values, so the
//! tree stays a strictly single-parent structure at every step.

use std::cmp::Ordering;

/// Owning link to an optional subtree
pub(crate) type Link<K, V> = Option<Box<SplayNode<K, V>>>;

/// A single key/value node of a [`SplayCache`](super::SplayCache)
#[derive(Debug)]
pub struct SplayNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> SplayNode<K, V> {
    /// Creates a leaf node
    pub(crate) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored in this node
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Right rotation: promote the left child over `node`.
///
/// ```text
///     node          pivot
///     /    \        /    \
///  pivot    c  →   a     node
///  /   \                 /   \
/// a     b               b     c
/// ```
///
/// Reassigns `pivot.right`, `node.left` and the subtree root. A node without
/// a left child is returned unchanged.
pub(crate) fn rotate_right<K, V>(
    mut node: Box<SplayNode<K, V>>,
    rotations: &mut u64,
) -> Box<SplayNode<K, V>> {
    match node.left.take() {
        Some(mut pivot) => {
            node.left = pivot.right.take();
            pivot.right = Some(node);
            *rotations += 1;
            pivot
        }
        None => node,
    }
}

/// Left rotation: promote the right child over `node`.
///
/// Mirror image of [`rotate_right`].
pub(crate) fn rotate_left<K, V>(
    mut node: Box<SplayNode<K, V>>,
    rotations: &mut u64,
) -> Box<SplayNode<K, V>> {
    match node.right.take() {
        Some(mut pivot) => {
            node.right = pivot.left.take();
            pivot.left = Some(node);
            *rotations += 1;
            pivot
        }
        None => node,
    }
}

/// Which grandchild a pending splay step descended into
#[derive(Debug, Clone, Copy)]
enum Step {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

/// A grandparent and parent detached while descending toward the key
struct Frame<K, V> {
    root: Box<SplayNode<K, V>>,
    child: Box<SplayNode<K, V>>,
    step: Step,
}

/// Splays `key` toward the root of the subtree rooted at `root`.
///
/// Returns the new subtree root: the node holding `key` if present, otherwise
/// the last node reached while searching for it. Each step handles two levels
/// of the search path at once:
///
/// - zig-zig: the key lies in the grandchild on the same side, rotate the
///   grandparent first and then the parent
/// - zig-zag: the key lies in the grandchild on the opposite side, rotate the
///   child toward the grandparent, then the grandparent
/// - zig: a final single rotation when only one step remains
///
/// The descent detaches each grandparent/parent pair onto a heap-allocated
/// stack and the rotations are applied while unwinding it, so degenerate
/// trees of any height are splayed without growing the call stack.
pub(crate) fn splay<K: Ord, V>(
    root: Box<SplayNode<K, V>>,
    key: &K,
    rotations: &mut u64,
) -> Box<SplayNode<K, V>> {
    let mut pending: Vec<Frame<K, V>> = Vec::new();
    let mut current = root;

    // Descend until the key, a missing child, or a single remaining step
    let mut subtree = loop {
        match key.cmp(&current.key) {
            Ordering::Equal => break current,
            Ordering::Less => {
                let Some(mut left) = current.left.take() else {
                    break current;
                };
                match key.cmp(&left.key) {
                    Ordering::Less => {
                        if let Some(grandchild) = left.left.take() {
                            pending.push(Frame {
                                root: current,
                                child: left,
                                step: Step::LeftLeft,
                            });
                            current = grandchild;
                            continue;
                        }
                    }
                    Ordering::Greater => {
                        if let Some(grandchild) = left.right.take() {
                            pending.push(Frame {
                                root: current,
                                child: left,
                                step: Step::LeftRight,
                            });
                            current = grandchild;
                            continue;
                        }
                    }
                    Ordering::Equal => {}
                }
                current.left = Some(left);
                break rotate_right(current, rotations);
            }
            Ordering::Greater => {
                let Some(mut right) = current.right.take() else {
                    break current;
                };
                match key.cmp(&right.key) {
                    Ordering::Greater => {
                        if let Some(grandchild) = right.right.take() {
                            pending.push(Frame {
                                root: current,
                                child: right,
                                step: Step::RightRight,
                            });
                            current = grandchild;
                            continue;
                        }
                    }
                    Ordering::Less => {
                        if let Some(grandchild) = right.left.take() {
                            pending.push(Frame {
                                root: current,
                                child: right,
                                step: Step::RightLeft,
                            });
                            current = grandchild;
                            continue;
                        }
                    }
                    Ordering::Equal => {}
                }
                current.right = Some(right);
                break rotate_left(current, rotations);
            }
        }
    };

    while let Some(Frame {
        mut root,
        mut child,
        step,
    }) = pending.pop()
    {
        subtree = match step {
            // zig-zig
            Step::LeftLeft => {
                child.left = Some(subtree);
                root.left = Some(child);
                let root = rotate_right(root, rotations);
                rotate_right(root, rotations)
            }
            // zig-zag
            Step::LeftRight => {
                child.right = Some(subtree);
                root.left = Some(rotate_left(child, rotations));
                rotate_right(root, rotations)
            }
            Step::RightRight => {
                child.right = Some(subtree);
                root.right = Some(child);
                let root = rotate_left(root, rotations);
                rotate_left(root, rotations)
            }
            Step::RightLeft => {
                child.left = Some(subtree);
                root.right = Some(rotate_right(child, rotations));
                rotate_left(root, rotations)
            }
        };
    }

    subtree
}
