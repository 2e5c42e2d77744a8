//! Reference registry (spec §4.10): global, thread-local and process-local
//! handle pools that keep native-bridge references alive independent of
//! the interpreter's own operand stacks and locals.

use ahash::AHashMap;
use parking_lot::Mutex;

use crate::object::ObjectRef;
use crate::thread::ThreadId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlobalRef(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalRef(u64);

#[derive(Default)]
struct Pool {
    next_id: u64,
    entries: AHashMap<u64, ObjectRef>,
}

impl Pool {
    fn insert(&mut self, obj: ObjectRef) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, obj);
        id
    }
}

/// Holds every reference pool: one process-wide global pool plus one
/// thread-local pool per live thread (spec §4.10 distinguishes the two so
/// native code can hand a reference back to the VM without pinning it to
/// the calling thread).
#[derive(Default)]
pub struct ReferenceRegistry {
    global: Mutex<Pool>,
    locals: Mutex<AHashMap<ThreadId, Pool>>,
}

impl ReferenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_global(&self, obj: ObjectRef) -> GlobalRef {
        GlobalRef(self.global.lock().insert(obj))
    }

    pub fn resolve_global(&self, r: GlobalRef) -> Option<ObjectRef> {
        self.global.lock().entries.get(&r.0).copied()
    }

    pub fn delete_global(&self, r: GlobalRef) {
        self.global.lock().entries.remove(&r.0);
    }

    pub fn new_local(&self, thread: ThreadId, obj: ObjectRef) -> LocalRef {
        let mut locals = self.locals.lock();
        LocalRef(locals.entry(thread).or_default().insert(obj))
    }

    pub fn resolve_local(&self, thread: ThreadId, r: LocalRef) -> Option<ObjectRef> {
        self.locals.lock().get(&thread).and_then(|p| p.entries.get(&r.0).copied())
    }

    /// Drops every local reference belonging to a thread, e.g. when a
    /// native frame returns or the thread exits.
    pub fn clear_locals(&self, thread: ThreadId) {
        self.locals.lock().remove(&thread);
    }

    /// Every reference currently held, across all pools — a GC root set
    /// contributor (spec §4.12).
    pub fn roots(&self) -> Vec<ObjectRef> {
        let mut out: Vec<ObjectRef> = self.global.lock().entries.values().copied().collect();
        for pool in self.locals.lock().values() {
            out.extend(pool.entries.values().copied());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectRef;

    #[test]
    fn global_ref_roundtrip() {
        let reg = ReferenceRegistry::new();
        let obj = ObjectRef(7);
        let g = reg.new_global(obj);
        assert_eq!(reg.resolve_global(g), Some(obj));
        reg.delete_global(g);
        assert_eq!(reg.resolve_global(g), None);
    }

    #[test]
    fn local_refs_scoped_per_thread() {
        let reg = ReferenceRegistry::new();
        let t1 = ThreadId(1);
        let obj = ObjectRef(3);
        let l = reg.new_local(t1, obj);
        assert_eq!(reg.resolve_local(t1, l), Some(obj));
        reg.clear_locals(t1);
        assert_eq!(reg.resolve_local(t1, l), None);
    }
}
