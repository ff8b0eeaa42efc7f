//! Recency order for the track cache.
//!
//! A doubly linked list whose nodes live in a slot arena and link to each
//! other by index. Cache entries keep the [`Slot`] of their node so that a
//! touch is an O(1) unlink + relink at the front.
//!
//! ```text
//!   front (MRU) ─► [slot 2] ◄──► [slot 0] ◄──► [slot 1] ◄── back (LRU)
//! ```

use crate::types::TrackId;

/// Stable handle to a node in a [`RecencyList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(usize);

#[derive(Debug, Clone)]
struct Node {
    id: TrackId,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Most-recently-used ordering over cached track ids.
#[derive(Debug, Clone, Default)]
pub struct RecencyList {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl RecencyList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns the number of linked ids.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no ids are linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the id at the front (most recently used).
    pub fn front(&self) -> Option<TrackId> {
        self.head.and_then(|idx| self.node(idx)).map(|node| node.id)
    }

    /// Returns the id at the back (least recently used).
    pub fn back(&self) -> Option<TrackId> {
        self.tail.and_then(|idx| self.node(idx)).map(|node| node.id)
    }

    /// Links `id` at the front and returns its slot.
    pub fn push_front(&mut self, id: TrackId) -> Slot {
        let node = Node {
            id,
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        self.len += 1;
        self.attach_front(idx);
        Slot(idx)
    }

    /// Moves the node at `slot` to the front.
    ///
    /// Returns false if `slot` is not linked.
    pub fn touch(&mut self, slot: Slot) -> bool {
        if self.node(slot.0).is_none() {
            return false;
        }
        if self.head != Some(slot.0) {
            self.detach(slot.0);
            self.attach_front(slot.0);
        }
        true
    }

    /// Unlinks and returns the id at the back.
    pub fn pop_back(&mut self) -> Option<TrackId> {
        let tail = self.tail?;
        self.remove(Slot(tail))
    }

    /// Unlinks the node at `slot`, returning its id.
    pub fn remove(&mut self, slot: Slot) -> Option<TrackId> {
        self.node(slot.0)?;
        self.detach(slot.0);
        let node = self.nodes[slot.0].take()?;
        self.free.push(slot.0);
        self.len -= 1;
        Some(node.id)
    }

    /// Unlinks every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates ids from front (MRU) to back (LRU).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx).and_then(|slot| slot.as_ref())
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node> {
        self.nodes.get_mut(idx).and_then(|slot| slot.as_mut())
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(h) => {
                if let Some(node) = self.node_mut(h) {
                    node.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }
}

/// Iterator over a [`RecencyList`] from front to back.
pub struct Iter<'a> {
    list: &'a RecencyList,
    current: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = TrackId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.current?)?;
        self.current = node.next;
        Some(node.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &RecencyList) -> Vec<u64> {
        list.iter().map(TrackId::get).collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn push_front_orders_mru_first() {
        let mut list = RecencyList::with_capacity(4);
        list.push_front(TrackId(1));
        list.push_front(TrackId(2));
        list.push_front(TrackId(3));

        assert_eq!(ids(&list), vec![3, 2, 1]);
        assert_eq!(list.front(), Some(TrackId(3)));
        assert_eq!(list.back(), Some(TrackId(1)));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn touch_moves_to_front() {
        let mut list = RecencyList::new();
        let a = list.push_front(TrackId(1));
        list.push_front(TrackId(2));
        list.push_front(TrackId(3));

        assert!(list.touch(a));
        assert_eq!(ids(&list), vec![1, 3, 2]);
        assert_eq!(list.back(), Some(TrackId(2)));

        // Touching the head is a no-op.
        assert!(list.touch(a));
        assert_eq!(ids(&list), vec![1, 3, 2]);
    }

    #[test]
    fn touch_middle_node_keeps_links() {
        let mut list = RecencyList::new();
        list.push_front(TrackId(1));
        let b = list.push_front(TrackId(2));
        list.push_front(TrackId(3));

        list.touch(b);
        assert_eq!(ids(&list), vec![2, 3, 1]);
        assert_eq!(list.pop_back(), Some(TrackId(1)));
        assert_eq!(list.pop_back(), Some(TrackId(3)));
        assert_eq!(list.pop_back(), Some(TrackId(2)));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_frees_slot_for_reuse() {
        let mut list = RecencyList::new();
        list.push_front(TrackId(1));
        let b = list.push_front(TrackId(2));
        list.push_front(TrackId(3));

        assert_eq!(list.remove(b), Some(TrackId(2)));
        assert_eq!(list.remove(b), None);
        assert!(!list.touch(b));
        assert_eq!(ids(&list), vec![3, 1]);

        let d = list.push_front(TrackId(4));
        assert_eq!(d, b);
        assert_eq!(ids(&list), vec![4, 3, 1]);
    }

    #[test]
    fn clear_unlinks_everything() {
        let mut list = RecencyList::new();
        list.push_front(TrackId(1));
        list.push_front(TrackId(2));
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        list.push_front(TrackId(5));
        assert_eq!(ids(&list), vec![5]);
    }
}
