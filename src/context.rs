//! The single source of truth the presentation layer reads from, and the sole
//! entry point for mutation.
//!
//! A [`SchoolContext`] is constructed explicitly around a store and handed to
//! consumers by reference; there is no ambient global instance. Its lifecycle
//! is `uninitialized -> ready`, with [`SchoolContext::initialize`] as the only
//! transition. Reads and merges before that transition fail fast with
//! [`Error::Uninitialized`].

use crate::error::{Error, Result};
use crate::models::{SchoolData, SchoolUpdate};
use crate::store::SchoolStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

struct Inner {
    store: SchoolStore,
    state: Option<Arc<SchoolData>>,
}

/// In-memory aggregator over the full table set, kept consistent with the
/// backing [`SchoolStore`].
///
/// One mutex serializes the whole read-modify-persist-publish sequence, so
/// overlapping merges on the same tables apply one at a time, in call order,
/// and cannot lose updates. Snapshots are `Arc`s: readers keep whatever
/// version they were handed while the context publishes fresh ones.
pub struct SchoolContext {
    inner: Mutex<Inner>,
}

impl SchoolContext {
    /// Wraps a store; the context stays uninitialized until
    /// [`initialize`](Self::initialize) is called.
    pub fn new(store: SchoolStore) -> Self {
        Self {
            inner: Mutex::new(Inner { store, state: None }),
        }
    }

    /// Seeds the store with `fixtures` if it is empty, then loads every table
    /// into memory and publishes the result as the current snapshot.
    ///
    /// Idempotent: a second call reloads from the store but never re-seeds
    /// (the store's emptiness check decides) and never duplicates rows.
    pub fn initialize(&self, fixtures: &SchoolData) -> Result<Arc<SchoolData>> {
        let mut inner = self.lock();
        let seeded = inner.store.seed_if_empty(fixtures)?;
        let snapshot = Arc::new(inner.store.load_all()?);
        inner.state = Some(Arc::clone(&snapshot));
        info!(seeded, students = snapshot.students.len(), "school context ready");
        Ok(snapshot)
    }

    /// Returns the current snapshot. Readers must treat it as immutable; the
    /// context is the only writer.
    pub fn snapshot(&self) -> Result<Arc<SchoolData>> {
        self.lock().state.clone().ok_or(Error::Uninitialized)
    }

    /// Shallow-merges `update` into the current state, persisting the changed
    /// tables to the store before the new snapshot becomes visible.
    ///
    /// Persist-then-publish: if the store transaction fails, the in-memory
    /// state keeps its pre-merge value, so memory and disk never diverge.
    /// After an `Ok` return, every subsequent [`snapshot`](Self::snapshot)
    /// reflects the update (read-your-writes).
    pub fn merge(&self, update: SchoolUpdate) -> Result<Arc<SchoolData>> {
        let mut inner = self.lock();
        let current = inner.state.clone().ok_or(Error::Uninitialized)?;
        if update.is_empty() {
            return Ok(current);
        }

        let next = Arc::new(current.merged(&update));
        if let Err(e) = inner.store.replace_tables(&update) {
            warn!(error = %e, "merge not persisted, keeping previous snapshot");
            return Err(e);
        }
        inner.state = Some(Arc::clone(&next));
        Ok(next)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means another thread panicked mid-merge; its
        // update was never published, so the guarded state is still coherent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_data;
    use crate::models::*;

    fn ready_context() -> SchoolContext {
        let ctx = SchoolContext::new(SchoolStore::open_in_memory().expect("store"));
        ctx.initialize(&sample_data()).expect("initialize");
        ctx
    }

    fn four_classes() -> Vec<Class> {
        let mut classes = sample_data().classes;
        classes.push(Class { id: 4, name: "Class 4".into(), amount: 7000 });
        classes
    }

    #[test]
    fn access_before_initialize_fails_fast() {
        let ctx = SchoolContext::new(SchoolStore::open_in_memory().expect("store"));
        assert!(matches!(ctx.snapshot(), Err(Error::Uninitialized)));
        let update = SchoolUpdate::default().with_classes(four_classes());
        assert!(matches!(ctx.merge(update), Err(Error::Uninitialized)));
    }

    #[test]
    fn initialize_twice_does_not_duplicate_rows() {
        let ctx = ready_context();
        let first = ctx.snapshot().expect("snapshot");
        ctx.initialize(&sample_data()).expect("second initialize");
        let second = ctx.snapshot().expect("snapshot");
        assert_eq!(*first, *second);
        assert_eq!(second.classes.len(), sample_data().classes.len());
    }

    #[test]
    fn merge_gives_read_your_writes() {
        let ctx = ready_context();
        let before = ctx.snapshot().expect("snapshot");

        let update = SchoolUpdate::default().with_classes(four_classes());
        ctx.merge(update).expect("merge");

        let after = ctx.snapshot().expect("snapshot");
        assert_eq!(after.classes.len(), 4);
        assert_eq!(after.classes[3].amount, 7000);
        // Tables not mentioned by the update are untouched.
        assert_eq!(after.students, before.students);
        assert_eq!(after.timetable, before.timetable);
    }

    #[test]
    fn merge_survives_restart() {
        let file = tempfile::NamedTempFile::new().expect("temp db file");
        let path = file.path().to_str().expect("utf8 path").to_owned();

        {
            let ctx = SchoolContext::new(SchoolStore::open(&path).expect("store"));
            ctx.initialize(&sample_data()).expect("initialize");
            let update = SchoolUpdate::default().with_classes(four_classes());
            ctx.merge(update).expect("merge");
        }

        let ctx = SchoolContext::new(SchoolStore::open(&path).expect("store"));
        let snapshot = ctx.initialize(&sample_data()).expect("initialize");
        assert_eq!(snapshot.classes.len(), 4);
    }

    #[test]
    fn failed_merge_rolls_back_memory_and_disk() {
        let ctx = ready_context();
        let before = ctx.snapshot().expect("snapshot");

        // Duplicate primary key aborts the store transaction mid-replace.
        let broken = SchoolUpdate::default().with_classes(vec![
            Class { id: 9, name: "Class 9".into(), amount: 100 },
            Class { id: 9, name: "Class 9 again".into(), amount: 200 },
        ]);
        assert!(matches!(ctx.merge(broken), Err(Error::Transaction(_))));

        let after = ctx.snapshot().expect("snapshot");
        assert_eq!(*after, *before, "in-memory state must match the store");
        ctx.initialize(&sample_data()).expect("reload");
        assert_eq!(*ctx.snapshot().expect("snapshot"), *before);
    }

    #[test]
    fn overlapping_merges_lose_neither_update() {
        let ctx = std::sync::Arc::new(ready_context());

        let new_student = Student {
            id: 3,
            name: "Ravi Kumar".into(),
            d_birth: "2012-09-01".into(),
            gender: Gender::Male,
            phone: None,
            join_date: "2025-06-01".into(),
            email: None,
            class_id: 2,
            sub_class_id: 3,
        };
        let mut students = sample_data().students;
        students.push(new_student);

        std::thread::scope(|scope| {
            let class_ctx = Arc::clone(&ctx);
            let student_ctx = Arc::clone(&ctx);
            let students = students.clone();
            scope.spawn(move || {
                let update = SchoolUpdate::default().with_classes(four_classes());
                class_ctx.merge(update).expect("class merge");
            });
            scope.spawn(move || {
                let update = SchoolUpdate::default().with_students(students);
                student_ctx.merge(update).expect("student merge");
            });
        });

        let snapshot = ctx.snapshot().expect("snapshot");
        assert_eq!(snapshot.classes.len(), 4, "class update must not be lost");
        assert_eq!(snapshot.students.len(), 3, "student update must not be lost");
    }

    #[test]
    fn empty_merge_is_a_no_op() {
        let ctx = ready_context();
        let before = ctx.snapshot().expect("snapshot");
        let after = ctx.merge(SchoolUpdate::default()).expect("empty merge");
        assert_eq!(*before, *after);
    }
}
