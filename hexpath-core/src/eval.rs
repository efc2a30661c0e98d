//! Position evaluation by shortest connection distance

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::board::{Cell, Position};
use crate::game::GameState;

/// Score of a position where the active player can no longer connect.
/// Larger than any real distance difference on a supported board.
pub const WIN_VALUE: i32 = 100_000;

/// Minimum number of empty cells `color` still has to fill to join its two
/// sides, or `None` when the opponent has already cut every path.
///
/// Own cells cost 0 to enter, empty cells 1, opponent cells are walls. Runs
/// Dijkstra from every cell of row 0 in `color`'s view and stops at the first
/// cell of the last row taken off the queue; with non-negative costs that
/// cell is already at its final distance.
pub fn path_distance(state: &GameState, color: Cell) -> Option<u32> {
    debug_assert!(!color.is_empty(), "path distance needs a player colour");

    let view = state.view_for(color);
    let size = view.size();
    let step_cost = |cell: Cell| -> Option<u32> {
        if cell == color {
            Some(0)
        } else if cell.is_empty() {
            Some(1)
        } else {
            None
        }
    };

    let mut dist = vec![u32::MAX; size * size];
    let mut heap = BinaryHeap::new();

    for col in 0..size {
        if let Some(cost) = step_cost(view.get(0, col)) {
            dist[col] = cost;
            heap.push(Reverse((cost, col)));
        }
    }

    while let Some(Reverse((d, idx))) = heap.pop() {
        if d > dist[idx] {
            continue;
        }
        let pos = Position::new(idx / size, idx % size);
        if pos.row == size - 1 {
            return Some(d);
        }

        for next in pos.neighbors(size) {
            let Some(cost) = step_cost(view.at(next)) else {
                continue;
            };
            let next_idx = next.row * size + next.col;
            let candidate = d + cost;
            if candidate < dist[next_idx] {
                dist[next_idx] = candidate;
                heap.push(Reverse((candidate, next_idx)));
            }
        }
    }

    None
}

/// Static evaluation from the active player's point of view:
/// opponent distance minus own distance.
///
/// A side with no remaining path scores as `WIN_VALUE` away, so a position
/// the opponent has already won evaluates to about `-WIN_VALUE`.
pub fn evaluate(state: &GameState) -> i32 {
    let me = state.active_color();
    let mine = distance_score(path_distance(state, me));
    let theirs = distance_score(path_distance(state, me.opposite()));
    theirs - mine
}

fn distance_score(distance: Option<u32>) -> i32 {
    distance.map_or(WIN_VALUE, |d| d as i32)
}
