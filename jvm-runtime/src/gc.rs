//! Stop-the-world mark-and-sweep collector (spec §4.12).
//!
//! The teacher's own GC (`vm/collector/`, `nugc/`, `old/`) never reached a
//! single working, stable-Rust state across its several rewrites — the
//! most complete one depends on nightly-only compiler intrinsics for its
//! `GcRef` pointer tagging and an unfinished custom allocator. This module
//! keeps the teacher's conceptual shape (a `Mark` enum, mark-then-sweep
//! over a heap of traced objects, a thread handshake before collecting)
//! without resurrecting any of that unsafe machinery; see `DESIGN.md`.

use tracing::debug;

use crate::object::{Heap, ObjectRef};
use crate::thread::ThreadHandle;
use std::sync::Arc;

pub struct GcStats {
    /// Objects actually freed this cycle (released from last cycle's
    /// finalizer outbox).
    pub swept: usize,
    /// Objects newly found unreachable this cycle and moved to the
    /// finalizer inbox; not yet freed.
    pub queued_for_finalization: usize,
    pub live: usize,
}

/// Runs one full collection cycle: suspend every VM thread at its next
/// safepoint, mark everything reachable from `roots`, sweep the rest, then
/// resume the world.
pub fn collect(
    heap: &mut Heap,
    threads: &[Arc<ThreadHandle>],
    roots: impl IntoIterator<Item = ObjectRef>,
) -> GcStats {
    let span = tracing::trace_span!("gc_cycle");
    let _enter = span.enter();

    suspend(threads);

    heap.unmark_all();
    let mut worklist: Vec<ObjectRef> = roots.into_iter().collect();
    let mut marked = 0usize;
    while let Some(r) = worklist.pop() {
        if heap.mark_live(r) {
            marked += 1;
            worklist.extend(heap.references_of(r));
        }
    }
    debug!(marked, "mark phase complete");

    let sweep_stats = heap.sweep();
    debug!(released = sweep_stats.released, queued = sweep_stats.queued, "sweep phase complete");

    resume(threads);

    GcStats {
        swept: sweep_stats.released,
        queued_for_finalization: sweep_stats.queued,
        live: heap.len(),
    }
}

fn suspend(threads: &[Arc<ThreadHandle>]) {
    for t in threads {
        t.request_block();
    }
    // Threads cooperatively park at their own next safepoint poll; give
    // them a chance to do so before marking starts.
    while threads.iter().any(|t| !t.is_blocked()) {
        std::thread::yield_now();
    }
}

fn resume(threads: &[Arc<ThreadHandle>]) {
    for t in threads {
        t.resume();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{Class, ClassKind, ClassState, LoaderId};
    use jvm_class_file::item::constant_pool::ConstantPool;
    use parking_lot::{Mutex, RwLock};
    use std::sync::atomic::AtomicU32;

    fn dummy_class(name: &str) -> crate::class::ClassRef {
        Arc::new(Class {
            name: name.to_string(),
            source_file: None,
            defining_loader: LoaderId::Bootstrap,
            access_flags: jvm_class_file::item::file::ClassAccessFlags::ACC_PUBLIC,
            kind: ClassKind::Ordinary,
            super_class: RwLock::new(None),
            interfaces: RwLock::new(Vec::new()),
            constant_pool: ConstantPool { entries: Vec::new() },
            runtime_constant_pool: RwLock::new(Vec::new()),
            declared_fields: Vec::new(),
            declared_methods: Vec::new(),
            static_storage: RwLock::new(Vec::new()),
            instance_size: AtomicU32::new(0),
            state: RwLock::new(ClassState::Initialized),
            init_lock: Mutex::new(()),
        })
    }

    #[test]
    fn unreachable_objects_move_to_finalizer_then_release_next_cycle() {
        let mut heap = Heap::new();
        let class = dummy_class("java/lang/Object");
        let reachable = heap.allocate_object(class.clone());
        let _garbage = heap.allocate_object(class);
        assert_eq!(heap.len(), 2);

        let stats = collect(&mut heap, &[], [reachable]);
        assert_eq!(stats.swept, 0);
        assert_eq!(stats.queued_for_finalization, 1);
        assert_eq!(heap.len(), 2, "queued object isn't freed yet");

        let inbox = heap.take_inbox();
        assert_eq!(inbox.len(), 1);
        for obj in inbox {
            heap.move_to_outbox(obj);
        }

        let stats = collect(&mut heap, &[], [reachable]);
        assert_eq!(stats.swept, 1);
        assert_eq!(stats.queued_for_finalization, 0);
        assert_eq!(stats.live, 1);
        assert_eq!(heap.len(), 1);
    }
}
