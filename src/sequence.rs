//! Linked-sequence ordering
//!
//! Lists on a board and cards within a list are held flat; each row carries
//! the id of the row before it (0 = head). `LinkedOrder` indexes one such
//! slice and walks it head-to-tail. The same code serves both entity kinds,
//! parameterized by accessor closures.
//!
//! Server data is occasionally corrupt (dangling pointers after races,
//! duplicated prev claims). Iteration never loops or panics on such input:
//! the walk is capped at the indexed count and the finding is recorded and
//! logged.

use std::cell::Cell;
use std::collections::HashMap;

/// Sentinel previous-id marking the head of a chain.
pub const HEAD: u32 = 0;

/// Structural defect found while indexing or walking a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    /// No item claims prev = 0 (also the shape of a full cycle).
    MissingHead,
    /// Two items claim the same previous entry; prev = 0 means two heads.
    DuplicatePrev { prev: u32 },
    /// The walk ended with items never reached from the head.
    Unreachable { count: usize },
    /// The walk exceeded the indexed count without terminating.
    Cycle,
}

pub struct LinkedOrder<'a, T> {
    by_id: HashMap<u32, &'a T>,
    /// id (or HEAD) -> id of the item that follows it
    next: HashMap<u32, u32>,
    corruption: Cell<Option<Corruption>>,
}

impl<'a, T> LinkedOrder<'a, T> {
    pub fn new<I, Id, Prev>(items: I, id_of: Id, prev_of: Prev) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        Id: Fn(&T) -> u32,
        Prev: Fn(&T) -> u32,
    {
        let mut by_id = HashMap::new();
        let mut next = HashMap::new();
        let corruption = Cell::new(None);
        for item in items {
            let id = id_of(item);
            let prev = prev_of(item);
            by_id.insert(id, item);
            if next.insert(prev, id).is_some() {
                flag(&corruption, Corruption::DuplicatePrev { prev });
            }
        }
        Self { by_id, next, corruption }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&'a T> {
        self.by_id.get(&id).copied()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Head-to-tail walk. Restartable: each call starts over from the head.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter { order: self, cursor: HEAD, yielded: 0 }
    }

    /// The first structural defect seen so far, if any.
    pub fn corruption(&self) -> Option<Corruption> {
        self.corruption.get()
    }

    fn flag(&self, c: Corruption) {
        flag(&self.corruption, c);
    }
}

fn flag(cell: &Cell<Option<Corruption>>, c: Corruption) {
    if cell.get().is_none() {
        leptos::logging::warn!("linked sequence corrupt: {c:?}");
        cell.set(Some(c));
    }
}

pub struct Iter<'o, 'a, T> {
    order: &'o LinkedOrder<'a, T>,
    cursor: u32,
    yielded: usize,
}

impl<'o, 'a, T> Iterator for Iter<'o, 'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let order = self.order;
        let Some(&id) = order.next.get(&self.cursor) else {
            // Terminal. Anything not yet yielded hangs off a dangling prev.
            if self.cursor == HEAD && self.yielded == 0 && !order.is_empty() {
                order.flag(Corruption::MissingHead);
            } else if self.yielded < order.len() {
                order.flag(Corruption::Unreachable { count: order.len() - self.yielded });
            }
            return None;
        };
        if self.yielded >= order.len() {
            order.flag(Corruption::Cycle);
            return None;
        }
        let Some(item) = order.get(id) else {
            order.flag(Corruption::Unreachable { count: order.len() - self.yielded });
            return None;
        };
        self.cursor = id;
        self.yielded += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (id, prev) pairs stand in for lists or cards alike.
    fn order(rows: &[(u32, u32)]) -> LinkedOrder<'_, (u32, u32)> {
        LinkedOrder::new(rows, |r| r.0, |r| r.1)
    }

    fn ids(rows: &[(u32, u32)]) -> (Vec<u32>, Option<Corruption>) {
        let order = order(rows);
        let ids: Vec<u32> = order.iter().map(|r| r.0).collect();
        (ids, order.corruption())
    }

    #[test]
    fn yields_head_to_tail_exactly_once() {
        // declared out of order on purpose
        let rows = [(3, 2), (1, 0), (2, 1), (4, 3)];
        let (walked, corruption) = ids(&rows);
        assert_eq!(walked, vec![1, 2, 3, 4]);
        assert_eq!(corruption, None);
    }

    #[test]
    fn restartable_from_the_raw_rows() {
        let rows = [(2, 1), (1, 0)];
        let order = order(&rows);
        let first: Vec<u32> = order.iter().map(|r| r.0).collect();
        let second: Vec<u32> = order.iter().map(|r| r.0).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_is_fine() {
        let (walked, corruption) = ids(&[]);
        assert!(walked.is_empty());
        assert_eq!(corruption, None);
    }

    #[test]
    fn single_head_only() {
        let (walked, corruption) = ids(&[(7, 0)]);
        assert_eq!(walked, vec![7]);
        assert_eq!(corruption, None);
    }

    #[test]
    fn no_head_terminates_and_signals() {
        // 1 <-> 2 cycle, nothing claims prev = 0
        let (walked, corruption) = ids(&[(1, 2), (2, 1)]);
        assert!(walked.is_empty());
        assert_eq!(corruption, Some(Corruption::MissingHead));
    }

    #[test]
    fn multiple_heads_signal_duplicate_prev() {
        let rows = [(1, 0), (2, 0), (3, 1)];
        let order = order(&rows);
        let walked: Vec<u32> = order.iter().map(|r| r.0).collect();
        assert!(walked.len() <= rows.len());
        assert_eq!(order.corruption(), Some(Corruption::DuplicatePrev { prev: 0 }));
    }

    #[test]
    fn dangling_prev_leaves_items_unreachable() {
        // 3 points at a prev that does not exist
        let (walked, corruption) = ids(&[(1, 0), (2, 1), (3, 99)]);
        assert_eq!(walked, vec![1, 2]);
        assert_eq!(corruption, Some(Corruption::Unreachable { count: 1 }));
    }

    #[test]
    fn never_yields_more_than_indexed_count() {
        // duplicate prev claims plus a self-loop
        let rows = [(1, 0), (2, 1), (3, 1), (4, 4)];
        let order = order(&rows);
        let walked: Vec<u32> = order.iter().map(|r| r.0).collect();
        assert!(walked.len() <= rows.len());
        assert!(order.corruption().is_some());
    }

    #[test]
    fn lookup_by_id() {
        let rows = [(1, 0), (2, 1)];
        let order = order(&rows);
        assert_eq!(order.get(2), Some(&(2, 1)));
        assert_eq!(order.get(9), None);
        assert!(order.contains(1));
    }
}
