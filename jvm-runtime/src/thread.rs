//! Thread core (spec §4.11): identity, kind, and the block-mutex/safepoint
//! handshake the collector uses to stop the world.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreadId(pub u64);

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

impl ThreadId {
    pub fn next() -> Self {
        Self(NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadKind {
    /// An ordinary Java thread running interpreted bytecode.
    Vm,
    /// The collector thread driving stop-the-world mark/sweep (§4.12).
    Gc,
    /// Runs finalizers handed off by the collector after sweep.
    Finalizer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafepointState {
    Running,
    /// Parked at a safepoint, waiting for the GC's resume signal.
    Blocked,
}

/// Per-thread bookkeeping the collector needs to implement "suspend the
/// world": every VM thread polls `should_block` at safepoints (loop back
/// edges and method entry, per spec §4.11) and parks itself on `condvar`
/// until the GC thread clears the flag.
pub struct ThreadHandle {
    pub id: ThreadId,
    pub name: String,
    pub kind: ThreadKind,
    state: Mutex<SafepointState>,
    should_block: Mutex<bool>,
    condvar: Condvar,
}

impl ThreadHandle {
    pub fn new(name: impl Into<String>, kind: ThreadKind) -> Arc<Self> {
        Arc::new(Self {
            id: ThreadId::next(),
            name: name.into(),
            kind,
            state: Mutex::new(SafepointState::Running),
            should_block: Mutex::new(false),
            condvar: Condvar::new(),
        })
    }

    /// Called by the GC thread before marking: requests every VM thread
    /// park itself next time it polls a safepoint.
    pub fn request_block(&self) {
        *self.should_block.lock() = true;
    }

    /// Called by the GC thread after sweep: releases parked threads.
    pub fn resume(&self) {
        *self.should_block.lock() = false;
        *self.state.lock() = SafepointState::Running;
        self.condvar.notify_all();
    }

    /// Polled by the interpreter loop at safepoints. Blocks the calling
    /// thread on its own condvar until `resume` clears the flag.
    pub fn poll_safepoint(&self) {
        if !*self.should_block.lock() {
            return;
        }
        let mut state = self.state.lock();
        *state = SafepointState::Blocked;
        while *self.should_block.lock() {
            self.condvar.wait(&mut state);
        }
        *state = SafepointState::Running;
    }

    pub fn is_blocked(&self) -> bool {
        *self.state.lock() == SafepointState::Blocked
    }
}
