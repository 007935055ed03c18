//! Breadth-first search in the style of
//! [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
//! Discovered nodes live in an insertion-ordered map whose values are the index of their parent,
//! so the search tree is shared by all branches and a path is only materialised once the goal
//! is reached.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::debug;
use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const ROOT: usize = usize::MAX;

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut ix = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(ix).map(|(node, &parent)| {
            ix = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Searches outward from `start` and returns the path to the first node satisfying `success`,
/// inclusive of both ends. Nodes are marked as visited when they are enqueued and tested for
/// success when they are dequeued, so the returned path has the minimal number of edges.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut to_see: VecDeque<usize> = VecDeque::new();
    to_see.push_back(0);
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), ROOT);
    let mut expanded = 0;
    while let Some(index) = to_see.pop_front() {
        let successors = {
            let (node, _) = parents.get_index(index)?;
            if success(node) {
                debug!(
                    "Goal dequeued after {} expansions, {} nodes discovered",
                    expanded,
                    parents.len()
                );
                return Some(reverse_path(&parents, index));
            }
            expanded += 1;
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                let n = e.index();
                e.insert(index);
                to_see.push_back(n);
            }
        }
    }
    debug!(
        "Frontier exhausted after {} expansions without reaching a goal",
        expanded
    );
    None
}

/// Edge distances from `start` to every node it can reach, in discovery order.
pub fn bfs_reach<N, FN, IN>(start: &N, mut successors: FN) -> Vec<(N, usize)>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    let mut to_see: VecDeque<(N, usize)> = VecDeque::new();
    let mut seen: FxIndexMap<N, usize> = FxIndexMap::default();
    seen.insert(start.clone(), 0);
    to_see.push_back((start.clone(), 0));
    while let Some((node, depth)) = to_see.pop_front() {
        for successor in successors(&node) {
            if let Vacant(e) = seen.entry(successor) {
                to_see.push_back((e.key().clone(), depth + 1));
                e.insert(depth + 1);
            }
        }
    }
    seen.into_iter().collect()
}
