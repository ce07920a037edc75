//! Prompt chain ordering.
//!
//! Prompts link to their parent through `parent_prompt_id`. The tree view
//! needs them in chain order (root first, then child, grandchild, ...),
//! which is not necessarily id order once prompts are inserted after the
//! initial seed.

use std::collections::{BTreeMap, HashSet};

use crate::types::DbId;

/// The id and parent link of a single prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptLink {
    pub id: DbId,
    pub parent_id: Option<DbId>,
}

/// Order prompt ids by walking parent -> child links.
///
/// A prompt is a root when it has no parent or its parent is not part of
/// `links`. Roots are walked in ascending id order, and siblings (which the
/// chain invariant forbids, but old data may contain) are visited in
/// ascending id order as well. Prompts that cannot be reached from any root
/// (only possible through a cycle) are appended in id order so every input
/// id appears exactly once in the output.
pub fn chain_order(links: &[PromptLink]) -> Vec<DbId> {
    let known: HashSet<DbId> = links.iter().map(|l| l.id).collect();

    let mut children: BTreeMap<DbId, Vec<DbId>> = BTreeMap::new();
    let mut roots: Vec<DbId> = Vec::new();
    for link in links {
        match link.parent_id {
            Some(parent) if known.contains(&parent) => {
                children.entry(parent).or_default().push(link.id)
            }
            _ => roots.push(link.id),
        }
    }
    roots.sort_unstable();
    for siblings in children.values_mut() {
        siblings.sort_unstable();
    }

    let mut ordered = Vec::with_capacity(links.len());
    let mut visited = HashSet::with_capacity(links.len());

    for root in roots {
        // Depth-first, so a chain is emitted contiguously.
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            ordered.push(id);
            if let Some(siblings) = children.get(&id) {
                stack.extend(siblings.iter().rev().copied());
            }
        }
    }

    if ordered.len() < known.len() {
        let mut rest: Vec<DbId> = known.into_iter().filter(|id| !visited.contains(id)).collect();
        rest.sort_unstable();
        ordered.extend(rest);
    }

    ordered
}
