// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Streaming DAWG construction from sorted input.
//!
//! Words arrive in ascending order. After each insert, the tail of the
//! previous word that the new word doesn't share can never gain another
//! edge, so it is "checked": walked bottom-up and each node swapped for an
//! already-registered twin with the same finality and the same outgoing
//! edges, if one exists. Because children are settled before their parents,
//! comparing edge targets by id is enough to compare whole subtrees.
//!
//! ```text
//! insert "cat", then "cats", then "dog":
//!
//!   unchecked after "cats":  root ─c─ 1 ─a─ 2 ─t─ 3 ─s─ 4
//!   common prefix with "dog": 0  → minimize 4, 3, 2, 1, then add d─o─g
//! ```

use std::collections::HashMap;

use super::automaton::{Automaton, Node, NodeId, ROOT};
use crate::error::ConstraintViolation;

/// Finality plus outgoing edges. Edge lists come out of a `BTreeMap`, so
/// they are already sorted by character.
type Signature = (bool, Vec<(char, NodeId)>);

/// Edge still open for minimization.
#[derive(Debug, Clone, Copy)]
struct UncheckedEdge {
    parent: NodeId,
    ch: char,
    child: NodeId,
}

#[derive(Debug)]
pub struct Builder {
    nodes: Vec<Node>,
    previous_word: String,
    unchecked: Vec<UncheckedEdge>,
    minimized: HashMap<Signature, NodeId>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            previous_word: String::new(),
            unchecked: Vec::new(),
            minimized: HashMap::new(),
        }
    }

    /// Add the next word. It must not sort before the previous one.
    pub fn insert(&mut self, word: &str) -> Result<(), ConstraintViolation> {
        if word < self.previous_word.as_str() {
            return Err(ConstraintViolation::UnsortedInput {
                previous: self.previous_word.clone(),
                word: word.to_string(),
            });
        }
        self.insert_sorted(word);
        Ok(())
    }

    /// [`insert`](Self::insert) for callers that already sorted their input.
    pub(crate) fn insert_sorted(&mut self, word: &str) {
        let common_prefix = word
            .chars()
            .zip(self.previous_word.chars())
            .take_while(|(a, b)| a == b)
            .count();

        self.minimize(common_prefix);

        let mut node = self.unchecked.last().map_or(ROOT, |edge| edge.child);
        for ch in word.chars().skip(common_prefix) {
            let next = self.nodes.len();
            self.nodes.push(Node::default());
            self.nodes[node].edges.insert(ch, next);
            self.unchecked.push(UncheckedEdge {
                parent: node,
                ch,
                child: next,
            });
            node = next;
        }

        self.nodes[node].is_final = true;
        self.previous_word.clear();
        self.previous_word.push_str(word);
    }

    /// Settle the remaining tail and return the compacted automaton.
    pub fn finish(mut self) -> Automaton {
        self.minimize(0);
        Automaton::from_nodes(compact(self.nodes))
    }

    fn minimize(&mut self, down_to: usize) {
        while self.unchecked.len() > down_to {
            let Some(edge) = self.unchecked.pop() else {
                break;
            };
            let child = &self.nodes[edge.child];
            let signature: Signature = (
                child.is_final,
                child.edges.iter().map(|(&c, &id)| (c, id)).collect(),
            );

            match self.minimized.get(&signature) {
                Some(&twin) => {
                    self.nodes[edge.parent].edges.insert(edge.ch, twin);
                }
                None => {
                    self.minimized.insert(signature, edge.child);
                }
            }
        }
    }
}

/// Renumber reachable nodes from 0, dropping the ones minimization orphaned.
fn compact(nodes: Vec<Node>) -> Vec<Node> {
    let mut remap: Vec<Option<NodeId>> = vec![None; nodes.len()];
    let mut order = Vec::with_capacity(nodes.len());
    let mut stack = vec![ROOT];
    remap[ROOT] = Some(0);
    order.push(ROOT);

    while let Some(id) = stack.pop() {
        for &child in nodes[id].edges.values() {
            if remap[child].is_none() {
                remap[child] = Some(order.len());
                order.push(child);
                stack.push(child);
            }
        }
    }

    order
        .iter()
        .map(|&old| Node {
            is_final: nodes[old].is_final,
            edges: nodes[old]
                .edges
                .iter()
                .filter_map(|(&ch, &child)| remap[child].map(|new| (ch, new)))
                .collect(),
        })
        .collect()
}
