//! Swap-based reordering of sibling records.
//!
//! Siblings share a parent and are ordered by a sparse integer sort key
//! (assigned in increments of 10 so records can be inserted without
//! renumbering). Moving a record swaps its sort key with the neighbor in
//! the requested direction; all other siblings keep their keys.

use serde::{Deserialize, Serialize};

/// Direction to move a sibling within its ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// The two sort-key writes a move requires: `(record id, new sort_order)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSwap {
    pub first: (i32, i32),
    pub second: (i32, i32),
}

/// Plan a sibling move over `(id, sort_order)` pairs already sorted the way
/// the store lists them.
///
/// Returns `None` when the target is absent or the move would cross either
/// boundary (moving the first item up or the last item down is a no-op).
#[must_use]
pub fn plan_move(siblings: &[(i32, i32)], id: i32, direction: Direction) -> Option<SortSwap> {
    let pos = siblings.iter().position(|&(sib_id, _)| sib_id == id)?;

    let neighbor_pos = match direction {
        Direction::Up => pos.checked_sub(1)?,
        Direction::Down => {
            let next = pos + 1;
            if next >= siblings.len() {
                return None;
            }
            next
        }
    };

    let &(target_id, target_order) = siblings.get(pos)?;
    let &(neighbor_id, neighbor_order) = siblings.get(neighbor_pos)?;

    Some(SortSwap {
        first: (target_id, neighbor_order),
        second: (neighbor_id, target_order),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIBLINGS: &[(i32, i32)] = &[(1, 10), (2, 20), (3, 30)];

    #[test]
    fn test_move_middle_up() {
        let swap = plan_move(SIBLINGS, 2, Direction::Up).expect("valid move");
        assert_eq!(swap.first, (2, 10));
        assert_eq!(swap.second, (1, 20));
    }

    #[test]
    fn test_move_middle_down() {
        let swap = plan_move(SIBLINGS, 2, Direction::Down).expect("valid move");
        assert_eq!(swap.first, (2, 30));
        assert_eq!(swap.second, (3, 20));
    }

    #[test]
    fn test_first_up_is_noop() {
        assert_eq!(plan_move(SIBLINGS, 1, Direction::Up), None);
    }

    #[test]
    fn test_last_down_is_noop() {
        assert_eq!(plan_move(SIBLINGS, 3, Direction::Down), None);
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(plan_move(SIBLINGS, 99, Direction::Up), None);
    }

    #[test]
    fn test_single_sibling() {
        let one = &[(7, 10)];
        assert_eq!(plan_move(one, 7, Direction::Up), None);
        assert_eq!(plan_move(one, 7, Direction::Down), None);
    }

    #[test]
    fn test_duplicate_sort_orders_still_swap() {
        // Caller-assigned keys can collide; the swap is still well-defined
        // over list positions.
        let dup = &[(1, 10), (2, 10), (3, 30)];
        let swap = plan_move(dup, 2, Direction::Up).expect("valid move");
        assert_eq!(swap.first, (2, 10));
        assert_eq!(swap.second, (1, 10));
    }
}
