// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arena-backed acyclic automaton.
//!
//! Nodes live in one `Vec` and refer to each other by index, so shared
//! suffixes are just two edges holding the same [`NodeId`]. Node 0 is always
//! the root. Edges are kept in a `BTreeMap`, which gives deterministic
//! traversal order and a ready-sorted edge list for the builder's node
//! signatures.

use std::collections::{BTreeMap, HashMap};

use super::builder::Builder;
use super::TokenSet;
use crate::error::ConstraintViolation;

pub type NodeId = usize;

/// Root of every automaton.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub is_final: bool,
    pub edges: BTreeMap<char, NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    nodes: Vec<Node>,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::empty()
    }
}

impl Automaton {
    /// Accepts nothing: a lone non-final root.
    pub fn empty() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        if nodes.is_empty() {
            Self::empty()
        } else {
            Self { nodes }
        }
    }

    /// A single chain accepting exactly `word`.
    pub fn from_word(word: &str) -> Self {
        let mut nodes = vec![Node::default()];
        for ch in word.chars() {
            let next = nodes.len();
            if let Some(last) = nodes.last_mut() {
                last.edges.insert(ch, next);
            }
            nodes.push(Node::default());
        }
        if let Some(last) = nodes.last_mut() {
            last.is_final = true;
        }
        Self { nodes }
    }

    /// Minimized automaton over an ascending word list.
    ///
    /// Repeated words are fine; a word smaller than its predecessor is not.
    pub fn from_array<S: AsRef<str>>(words: &[S]) -> Result<Self, ConstraintViolation> {
        let mut builder = Builder::new();
        for word in words {
            builder.insert(word.as_ref())?;
        }
        Ok(builder.finish())
    }

    /// Sorts and deduplicates first, so it cannot fail.
    pub(crate) fn from_unsorted(mut words: Vec<String>) -> Self {
        words.sort_unstable();
        words.dedup();
        let mut builder = Builder::new();
        for word in &words {
            builder.insert_sorted(word);
        }
        builder.finish()
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.nodes[ROOT].is_final && self.nodes[ROOT].edges.is_empty()
    }

    /// Exact membership.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = ROOT;
        for ch in word.chars() {
            match self.nodes[node].edges.get(&ch) {
                Some(&next) => node = next,
                None => return false,
            }
        }
        self.nodes[node].is_final
    }

    /// Every accepted word, collected depth-first with an explicit stack.
    ///
    /// Traversal order is not sorted order; callers that care sort.
    pub fn to_array(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut stack = vec![(ROOT, String::new())];

        while let Some((id, prefix)) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_final {
                words.push(prefix.clone());
            }
            for (&ch, &child) in &node.edges {
                let mut next = prefix.clone();
                next.push(ch);
                stack.push((child, next));
            }
        }

        words
    }

    /// Vocabulary terms that `other` accepts.
    pub fn intersect(&self, other: &TokenSet) -> Automaton {
        match other {
            TokenSet::Automaton(other) => self.product(other),
            TokenSet::Wildcard(pattern) => Self::from_unsorted(
                self.to_array()
                    .into_iter()
                    .filter(|term| pattern.matches(term))
                    .collect(),
            ),
            TokenSet::Fuzzy(fuzzy) => Self::from_unsorted(
                self.to_array()
                    .into_iter()
                    .filter(|term| fuzzy.matches(term))
                    .collect(),
            ),
        }
    }

    /// Product construction: walk both automata in lockstep along shared
    /// edge labels. Each `(self, other)` node pair maps to one output node,
    /// so shared subtrees are visited once.
    fn product(&self, other: &Automaton) -> Automaton {
        let mut output = vec![Node::default()];
        let mut seen: HashMap<(NodeId, NodeId), NodeId> = HashMap::new();
        seen.insert((ROOT, ROOT), ROOT);
        let mut stack = vec![(ROOT, ROOT, ROOT)];

        while let Some((a, b, out)) = stack.pop() {
            let (left, right) = (&self.nodes[a], &other.nodes[b]);
            output[out].is_final = left.is_final && right.is_final;

            // Iterate the smaller edge map and probe the other
            let (small, large, flipped) = if left.edges.len() <= right.edges.len() {
                (&left.edges, &right.edges, false)
            } else {
                (&right.edges, &left.edges, true)
            };

            for (&ch, &small_child) in small {
                let Some(&large_child) = large.get(&ch) else {
                    continue;
                };
                let pair = if flipped {
                    (large_child, small_child)
                } else {
                    (small_child, large_child)
                };

                let target = match seen.get(&pair) {
                    Some(&existing) => existing,
                    None => {
                        let id = output.len();
                        output.push(Node::default());
                        seen.insert(pair, id);
                        stack.push((pair.0, pair.1, id));
                        id
                    }
                };
                output[out].edges.insert(ch, target);
            }
        }

        Automaton { nodes: output }.pruned()
    }

    /// Drop nodes that cannot reach a final node.
    ///
    /// A product can leave dead branches behind (shared prefix, no shared
    /// word). They accept nothing, but they'd inflate `node_count`.
    fn pruned(self) -> Automaton {
        // Acyclic, so a reverse topological pass settles liveness.
        let order = self.topological_order();
        let mut live = vec![false; self.nodes.len()];
        for &id in order.iter().rev() {
            let node = &self.nodes[id];
            live[id] = node.is_final || node.edges.values().any(|&child| live[child]);
        }

        if !live[ROOT] {
            return Automaton::empty();
        }

        let mut remap: HashMap<NodeId, NodeId> = HashMap::new();
        for &id in &order {
            if live[id] {
                let next = remap.len();
                remap.insert(id, next);
            }
        }

        let mut nodes = vec![Node::default(); remap.len()];
        for (&old, &new) in &remap {
            let source = &self.nodes[old];
            nodes[new].is_final = source.is_final;
            nodes[new].edges = source
                .edges
                .iter()
                .filter_map(|(&ch, child)| remap.get(child).map(|&c| (ch, c)))
                .collect();
        }

        Automaton { nodes }
    }

    /// Reachable nodes, parents before children, root first.
    fn topological_order(&self) -> Vec<NodeId> {
        let mut visited = vec![false; self.nodes.len()];
        let mut post_order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(NodeId, bool)> = vec![(ROOT, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                post_order.push(id);
                continue;
            }
            if visited[id] {
                continue;
            }
            visited[id] = true;
            stack.push((id, true));
            for &child in self.nodes[id].edges.values() {
                if !visited[child] {
                    stack.push((child, false));
                }
            }
        }

        post_order.reverse();
        post_order
    }
}
