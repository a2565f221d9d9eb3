//! A generic doubly linked list with user-supplied value-ownership
//! callbacks, backed by a slot arena instead of intrusive pointers.
//!
//! `Vec<Slot<T>>` plus a free list keeps every node reachable only
//! through a [`NodeId`] handle — no raw pointers, no `Rc<RefCell<_>>`
//! reference counting for the structure itself. Only the optional
//! callback record uses `Rc`, since those closures are genuinely shared
//! capability objects in this crate's single-threaded cooperative model.

use std::rc::Rc;

enum Slot<T> {
    Occupied(Node<T>),
    Free { next_free: Option<usize> },
}

struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A handle to a node in a [`List`]. Stable across insertions and
/// removals of other nodes; invalidated only by removing the node it
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Which way an iterator walks the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HeadToTail,
    TailToHead,
}

/// The caller-supplied capability record controlling value duplication,
/// custom teardown, and key matching. `Rc`-shared (not boxed per-list)
/// so [`List::duplicate`] can copy the record without cloning closures.
#[derive(Clone)]
struct Callbacks<T> {
    dup: Option<Rc<dyn Fn(&T) -> Option<T>>>,
    free: Option<Rc<std::cell::RefCell<dyn FnMut(&T)>>>,
    matches: Option<Rc<dyn Fn(&T, &T) -> bool>>,
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self {
            dup: None,
            free: None,
            matches: None,
        }
    }
}

/// A doubly linked list of `T`, addressed by [`NodeId`] handles rather
/// than pointers.
pub struct List<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    callbacks: Callbacks<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches the original's `listRelease` = `listEmpty` + free the list
/// itself: the `free` callback runs exactly once per remaining value even
/// when the list is simply dropped, not explicitly `empty()`-ed first.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        if self.callbacks.free.is_some() {
            self.empty();
        }
    }
}

impl<T> List<T> {
    /// An empty list with no callbacks set. O(1).
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
            callbacks: Callbacks::default(),
        }
    }

    /// Sets the duplication callback used by [`List::duplicate`]. Absent
    /// a callback, duplication falls back to `T: Clone`.
    pub fn set_dup<F>(&mut self, f: F)
    where
        F: Fn(&T) -> Option<T> + 'static,
    {
        self.callbacks.dup = Some(Rc::new(f));
    }

    /// Sets the teardown callback invoked exactly once per value on
    /// [`List::delete`] and [`List::empty`].
    pub fn set_free<F>(&mut self, f: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.callbacks.free = Some(Rc::new(std::cell::RefCell::new(f)));
    }

    /// Sets the comparison callback used by [`List::search_key`]. Absent
    /// a callback, search falls back to `T: PartialEq`.
    pub fn set_match<F>(&mut self, f: F)
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        self.callbacks.matches = Some(Rc::new(f));
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(&node.value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(&mut node.value),
            _ => None,
        }
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => node.next,
            _ => None,
        }
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => node.prev,
            _ => None,
        }
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        if let Some(idx) = self.free_head {
            let next_free = match &self.slots[idx] {
                Slot::Free { next_free } => *next_free,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            };
            self.free_head = next_free;
            self.slots[idx] = Slot::Occupied(node);
            NodeId(idx)
        } else {
            self.slots.push(Slot::Occupied(node));
            NodeId(self.slots.len() - 1)
        }
    }

    fn dealloc(&mut self, id: NodeId) -> T {
        let old = std::mem::replace(
            &mut self.slots[id.0],
            Slot::Free {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        match old {
            Slot::Occupied(node) => node.value,
            Slot::Free { .. } => unreachable!("dealloc called on an already-free slot"),
        }
    }

    /// Inserts `value` at the head. O(1).
    pub fn prepend(&mut self, value: T) -> NodeId {
        let id = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.set_prev(old_head, Some(id)),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Inserts `value` at the tail. O(1).
    pub fn append(&mut self, value: T) -> NodeId {
        let id = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.set_next(old_tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(Slot::Occupied(node)) = self.slots.get_mut(id.0) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Some(Slot::Occupied(node)) = self.slots.get_mut(id.0) {
            node.prev = prev;
        }
    }

    /// Splices `value` before or after `anchor`. O(1).
    ///
    /// Returns `None` if `anchor` does not name a live node.
    pub fn insert(&mut self, anchor: NodeId, value: T, after: bool) -> Option<NodeId> {
        if self.get(anchor).is_none() {
            return None;
        }
        if after {
            let next = self.next(anchor);
            let id = self.alloc(Node {
                value,
                prev: Some(anchor),
                next,
            });
            self.set_next(anchor, Some(id));
            match next {
                Some(n) => self.set_prev(n, Some(id)),
                None => self.tail = Some(id),
            }
            self.len += 1;
            Some(id)
        } else {
            let prev = self.prev(anchor);
            let id = self.alloc(Node {
                value,
                prev,
                next: Some(anchor),
            });
            self.set_prev(anchor, Some(id));
            match prev {
                Some(p) => self.set_next(p, Some(id)),
                None => self.head = Some(id),
            }
            self.len += 1;
            Some(id)
        }
    }

    /// Unlinks and frees `id`, invoking the `free` callback if set.
    /// O(1). Does nothing if `id` does not name a live node.
    pub fn delete(&mut self, id: NodeId) {
        let (prev, next) = match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => (node.prev, node.next),
            _ => return,
        };

        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }

        let value = self.dealloc(id);
        self.len -= 1;
        if let Some(free) = &self.callbacks.free {
            (free.borrow_mut())(&value);
        }
    }

    /// Removes every node, invoking `free` per value if set. Leaves the
    /// list reusable with length 0. O(n).
    pub fn empty(&mut self) {
        let mut cur = self.head;
        while let Some(id) = cur {
            cur = self.next(id);
            self.delete(id);
        }
        self.slots.clear();
        self.free_head = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Detaches the tail and prepends it as the new head. No-op for
    /// length <= 1. O(1).
    pub fn rotate(&mut self) {
        if self.len <= 1 {
            return;
        }
        let old_tail = self.tail.expect("len > 1 implies a tail");
        let new_tail = self.prev(old_tail).expect("len > 1 implies two nodes");

        self.set_next(new_tail, None);
        self.tail = Some(new_tail);

        self.set_prev(old_tail, None);
        self.set_next(old_tail, self.head);
        if let Some(old_head) = self.head {
            self.set_prev(old_head, Some(old_tail));
        }
        self.head = Some(old_tail);
    }

    /// `i >= 0` counts from head, `i < 0` counts from tail (`-1` = last).
    pub fn index(&self, i: isize) -> Option<NodeId> {
        if i >= 0 {
            let mut cur = self.head;
            for _ in 0..i {
                cur = cur.and_then(|id| self.next(id));
            }
            cur
        } else {
            let mut cur = self.tail;
            for _ in 0..(-i - 1) {
                cur = cur.and_then(|id| self.prev(id));
            }
            cur
        }
    }

    /// Linear scan from head for the first value matching `key` via the
    /// `match` callback, or `PartialEq` if unset. O(n).
    pub fn search_key(&self, key: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        while let Some(id) = cur {
            let value = self.get(id).expect("cur always names a live node");
            let is_match = match &self.callbacks.matches {
                Some(m) => m(value, key),
                None => value == key,
            };
            if is_match {
                return Some(id);
            }
            cur = self.next(id);
        }
        None
    }

    /// Deep copy via the `dup` callback if set, else a shallow clone of
    /// each value. Copies callbacks. Returns `None` if any `dup` call
    /// fails, having released any partially built copy.
    pub fn duplicate(&self) -> Option<List<T>>
    where
        T: Clone,
    {
        let mut out = List {
            slots: Vec::with_capacity(self.slots.len()),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
            callbacks: self.callbacks.clone(),
        };

        let mut cur = self.head;
        while let Some(id) = cur {
            let value = self.get(id).expect("cur always names a live node");
            let copied = match &self.callbacks.dup {
                Some(dup) => match dup(value) {
                    Some(v) => v,
                    None => {
                        out.empty();
                        return None;
                    }
                },
                None => value.clone(),
            };
            out.append(copied);
            cur = self.next(id);
        }

        Some(out)
    }

    /// Splices every node of `other` onto the end of `self`; `other`
    /// becomes empty but reusable, callbacks preserved.
    pub fn join(&mut self, other: &mut List<T>) {
        let mut cur = other.head;
        while let Some(id) = cur {
            cur = other.next(id);
            let value = other.dealloc(id);
            self.append(value);
        }
        other.slots.clear();
        other.free_head = None;
        other.head = None;
        other.tail = None;
        other.len = 0;
    }

    /// An iterator walking the list in `direction`. Caches the next node
    /// before yielding the current one, so deleting the node just
    /// returned via [`List::delete`] is permitted mid-iteration; deleting
    /// any other node is a logic error (never memory-unsafe, since
    /// [`NodeId`] is an arena index, not a pointer).
    pub fn iter(&self, direction: Direction) -> ListIter {
        let start = match direction {
            Direction::HeadToTail => self.head,
            Direction::TailToHead => self.tail,
        };
        ListIter {
            direction,
            next: start,
        }
    }
}

/// Produced by [`List::iter`]. Does not borrow the list, so `next` takes
/// it by reference each call — this is what permits calling
/// `list.delete(id)` on the just-yielded node between calls.
pub struct ListIter {
    direction: Direction,
    next: Option<NodeId>,
}

impl ListIter {
    pub fn next<T>(&mut self, list: &List<T>) -> Option<NodeId> {
        let current = self.next?;
        self.next = match self.direction {
            Direction::HeadToTail => list.next(current),
            Direction::TailToHead => list.prev(current),
        };
        Some(current)
    }

    /// Resets the cursor to the head, still walking head-to-tail.
    pub fn rewind<T>(&mut self, list: &List<T>) {
        self.direction = Direction::HeadToTail;
        self.next = list.head;
    }

    /// Resets the cursor to the tail, now walking tail-to-head.
    pub fn rewind_tail<T>(&mut self, list: &List<T>) {
        self.direction = Direction::TailToHead;
        self.next = list.tail;
    }
}
