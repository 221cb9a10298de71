//! Fixed-capacity pool of reusable entity slots.
//!
//! Every slot is allocated once in [`Pool::new`] and toggled active/inactive
//! for the rest of the session.  Acquiring a slot is a linear scan in index
//! order, which keeps iteration order (and therefore collision resolution)
//! deterministic.

/// An entity that can live in a [`Pool`].
pub trait Poolable {
    /// `true` while the slot is in use.  Inactive slots hold stale state.
    fn is_active(&self) -> bool;
}

/// Fixed-capacity arena of `T` slots.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Poolable> Pool<T> {
    /// Allocate `capacity` slots, building each one from its index.
    pub fn new(capacity: usize, mut make: impl FnMut(usize) -> T) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        for index in 0..capacity {
            slots.push(make(index));
        }
        Self { slots }
    }

    /// First inactive slot in index order, or `None` when every slot is in use.
    ///
    /// Exhaustion is expected steady-state behaviour under load; callers treat
    /// `None` as "skip this spawn/shot".
    pub fn acquire_free(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|slot| !slot.is_active())
    }

    /// Run `f` on every active slot in index order.
    pub fn for_each_active(&mut self, mut f: impl FnMut(&mut T)) {
        for slot in self.slots.iter_mut().filter(|slot| slot.is_active()) {
            f(slot);
        }
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|slot| slot.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|slot| slot.is_active())
    }

    /// Every slot, active or not.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut()
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }
}
