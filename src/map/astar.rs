//! Shortest-path search used by the enemies to chase the player.
//!
//! The search is plain A* over a [`Navigable`] board with unit step costs and a
//! Manhattan-distance heuristic. Stale frontier entries are left in the heap and
//! skipped when popped instead of being decreased in place.
//!
//! Each call costs `O(V log V)` for `V` reachable cells, and the pursuit loop runs
//! one search per enemy per pursuit tick. That is comfortable on the default
//! 20x20 board; much larger boards or enemy counts would want a shared distance
//! field instead of independent searches.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::map::grid::{Cell, Navigable};

/// Something that can produce a path between two cells.
pub trait PathFinder {
    /// Returns a shortest path from `start` to `goal`, both endpoints included,
    /// or `None` if `goal` cannot be reached.
    fn find_path<N: Navigable + ?Sized>(&self, start: Cell, goal: Cell, board: &N) -> Option<Vec<Cell>>;
}

/// Classic A* with a Manhattan heuristic.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl PathFinder for AStar {
    fn find_path<N: Navigable + ?Sized>(&self, start: Cell, goal: Cell, board: &N) -> Option<Vec<Cell>> {
        find_path(start, goal, board)
    }
}

/// A frontier entry in the open set.
#[derive(Clone, Copy, Debug)]
struct Node {
    cell: Cell,
    /// Steps taken from the start when this entry was pushed
    cost: u32,
    /// `cost` plus the heuristic estimate to the goal
    estimate: u32,
    /// Push order, used to break ties between equal estimates
    sequence: u64,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.estimate == other.estimate && self.sequence == other.sequence
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior: lowest estimate first, then earliest push.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Runs A* from `start` to `goal` over `board`.
pub fn find_path<N: Navigable + ?Sized>(start: Cell, goal: Cell, board: &N) -> Option<Vec<Cell>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut open_set = BinaryHeap::new();
    let mut best_cost: HashMap<Cell, u32> = HashMap::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut sequence = 0u64;

    best_cost.insert(start, 0);
    open_set.push(Node {
        cell: start,
        cost: 0,
        estimate: start.manhattan(goal),
        sequence,
    });

    let mut expanded = 0usize;
    while let Some(current) = open_set.pop() {
        if current.cell == goal {
            trace!(%start, %goal, cost = current.cost, expanded, "Path found");
            return Some(reconstruct_path(&came_from, start, goal));
        }

        // Superseded by a cheaper push of the same cell.
        if best_cost.get(&current.cell).is_some_and(|best| current.cost > *best) {
            continue;
        }
        expanded += 1;

        let tentative = current.cost + 1;
        for neighbor in board.neighbors(current.cell) {
            match best_cost.entry(neighbor) {
                Entry::Occupied(mut entry) => {
                    if tentative >= *entry.get() {
                        continue;
                    }
                    entry.insert(tentative);
                }
                Entry::Vacant(entry) => {
                    entry.insert(tentative);
                }
            }

            came_from.insert(neighbor, current.cell);
            sequence += 1;
            open_set.push(Node {
                cell: neighbor,
                cost: tentative,
                estimate: tentative + neighbor.manhattan(goal),
                sequence,
            });
        }
    }

    trace!(%start, %goal, expanded, "Frontier exhausted without reaching goal");
    None
}

/// Walks predecessor links from `goal` back to `start`.
fn reconstruct_path(came_from: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(previous) => {
                current = *previous;
                path.push(current);
            }
            None => break,
        }
    }
    path.reverse();
    path
}
