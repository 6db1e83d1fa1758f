//! Pull-based memoized derived values.
//!
//! Stand-in for a host framework's computed references: a [`Signal`] is a
//! mutable source carrying a monotonically increasing revision, and a
//! [`Computed`] caches its last result keyed on a fingerprint of the source
//! revisions it transitively reads. Reads are lazy; a node recomputes only
//! when one of its own sources moved, never because an unrelated node did.
//!
//! Everything here is single-threaded by construction (`Rc`/`Cell`), matching
//! the synchronous cooperative model chart hosts run this code under.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;
use tracing::trace;

/// Shared revision counter bumped on every source write.
pub(crate) type RevisionCell = Rc<Cell<u64>>;

type Fingerprint = SmallVec<[u64; 2]>;

/// Mutable source value observable by derived nodes. Cheap to clone; clones
/// share the same value and revision.
#[derive(Debug)]
pub struct Signal<T> {
    value: Rc<RefCell<T>>,
    revision: RevisionCell,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            revision: Rc::clone(&self.revision),
        }
    }
}

impl<T> Signal<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            revision: Rc::new(Cell::new(0)),
        }
    }

    /// Replaces the value and marks every dependent derived node stale.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.revision.set(self.revision.get() + 1);
    }

    /// Mutates the value in place and marks dependents stale.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        mutate(&mut self.value.borrow_mut());
        self.revision.set(self.revision.get() + 1);
    }

    /// Reads through a borrow without cloning.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.value.borrow())
    }

    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Current revision; advances by one on every `set`/`update`.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    pub(crate) fn revision_cell(&self) -> RevisionCell {
        Rc::clone(&self.revision)
    }
}

struct ComputedState<T> {
    label: &'static str,
    dependencies: SmallVec<[RevisionCell; 2]>,
    compute: Box<dyn Fn() -> T>,
    cache: RefCell<Option<(Fingerprint, T)>>,
    recomputes: Cell<u64>,
}

/// Lazily recomputed derived value. Cheap to clone; clones share one cache.
pub struct Computed<T> {
    state: Rc<ComputedState<T>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed")
            .field("label", &self.state.label)
            .field("recomputes", &self.state.recomputes.get())
            .finish_non_exhaustive()
    }
}

impl<T: Clone> Computed<T> {
    pub(crate) fn new(
        label: &'static str,
        dependencies: impl IntoIterator<Item = RevisionCell>,
        compute: impl Fn() -> T + 'static,
    ) -> Self {
        Self {
            state: Rc::new(ComputedState {
                label,
                dependencies: dependencies.into_iter().collect(),
                compute: Box::new(compute),
                cache: RefCell::new(None),
                recomputes: Cell::new(0),
            }),
        }
    }

    /// Current value; recomputes only when a dependency revision moved since
    /// the cached result was produced.
    #[must_use]
    pub fn get(&self) -> T {
        let fingerprint: Fingerprint = self
            .state
            .dependencies
            .iter()
            .map(|revision| revision.get())
            .collect();

        if let Some((cached, value)) = self.state.cache.borrow().as_ref() {
            if *cached == fingerprint {
                return value.clone();
            }
        }

        let value = (self.state.compute)();
        self.state.recomputes.set(self.state.recomputes.get() + 1);
        trace!(
            node = self.state.label,
            recomputes = self.state.recomputes.get(),
            "recomputed derived value"
        );
        *self.state.cache.borrow_mut() = Some((fingerprint, value.clone()));
        value
    }

    /// How many times the compute closure has run so far.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.state.recomputes.get()
    }

    /// Diagnostic name of this node.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.state.label
    }
}

#[cfg(test)]
mod tests {
    use super::{Computed, Signal};

    #[test]
    fn second_read_is_served_from_cache() {
        let source = Signal::new(3_u64);
        let doubled = {
            let source = source.clone();
            Computed::new("doubled", [source.revision_cell()], move || source.get() * 2)
        };

        assert_eq!(doubled.get(), 6);
        assert_eq!(doubled.get(), 6);
        assert_eq!(doubled.recompute_count(), 1);
    }

    #[test]
    fn source_write_marks_node_stale() {
        let source = Signal::new(3_u64);
        let doubled = {
            let source = source.clone();
            Computed::new("doubled", [source.revision_cell()], move || source.get() * 2)
        };

        assert_eq!(doubled.get(), 6);
        source.set(5);
        assert_eq!(doubled.get(), 10);
        assert_eq!(doubled.recompute_count(), 2);
    }

    #[test]
    fn unrelated_source_does_not_invalidate() {
        let watched = Signal::new(1_u64);
        let unrelated = Signal::new(1_u64);
        let node = {
            let watched = watched.clone();
            Computed::new("watched", [watched.revision_cell()], move || watched.get())
        };

        assert_eq!(node.get(), 1);
        unrelated.set(99);
        assert_eq!(node.get(), 1);
        assert_eq!(node.recompute_count(), 1);
    }

    #[test]
    fn update_bumps_revision_once() {
        let source = Signal::new(vec![1_u64]);
        let before = source.revision();
        source.update(|values| values.push(2));
        assert_eq!(source.revision(), before + 1);
        assert_eq!(source.with(Vec::len), 2);
    }

    #[test]
    fn dependency_free_node_computes_once() {
        let constant = Computed::new("constant", [], || 42_u64);
        assert_eq!(constant.get(), 42);
        assert_eq!(constant.get(), 42);
        assert_eq!(constant.recompute_count(), 1);
    }
}
