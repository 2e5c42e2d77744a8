//! The VM object (spec §4.11's "VM thread" owns this): wires the registry,
//! heap, native bridge and reference registry together and drives class
//! initialization and `main` invocation.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, trace_span};

use crate::class::registry::{ClassPath, ClassRegistry};
use crate::class::{ClassRef, ClassState};
use crate::error::{LinkError, Outcome};
use crate::frame::ExecutorStack;
use crate::gc::{self, GcStats};
use crate::interpreter::Interpreter;
use crate::native::NativeRegistry;
use crate::object::{Heap, ObjectRef};
use crate::refs::ReferenceRegistry;
use crate::thread::{ThreadHandle, ThreadId, ThreadKind};
use crate::value::Value;

/// Which verbose categories are enabled (spec §6's `-verbose:` flag),
/// mapped to the `tracing` spans named in SPEC_FULL §10.2.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerboseFlags {
    pub class: bool,
    pub gc: bool,
    pub execute: bool,
    pub jni: bool,
    pub debug: bool,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub classpath: Vec<PathBuf>,
    pub properties: HashMap<String, String>,
    pub verbose: VerboseFlags,
    pub main_class: String,
    pub program_args: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            classpath: vec![PathBuf::from(".")],
            properties: HashMap::new(),
            verbose: VerboseFlags::default(),
            main_class: String::new(),
            program_args: Vec::new(),
        }
    }
}

/// Exit codes, matching ColdSpot's `VirtualMachine.cpp` conventions
/// (SPEC_FULL §10.6).
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const UNCAUGHT_EXCEPTION: i32 = 1;
    pub const CLASS_LOAD_FAILURE: i32 = 2;
    pub const FATAL: i32 = 70;
}

pub struct Vm {
    pub registry: ClassRegistry,
    pub classpath: ClassPath,
    pub heap: Mutex<Heap>,
    pub native: NativeRegistry,
    pub references: ReferenceRegistry,
    pub threads: Mutex<Vec<Arc<ThreadHandle>>>,
    pub properties: Mutex<HashMap<String, String>>,
    pub verbose: VerboseFlags,
    pub main_class: String,
    pub program_args: Vec<String>,
    /// The thread `finalize` methods run on (spec §4.12); there is only
    /// ever one, spawned once at `Vm::new`.
    pub finalizer_thread: Arc<ThreadHandle>,
}

/// The full key set spec.md §6 names, populated at `Vm::new` time
/// (SPEC_FULL §10.6) before `-D` overrides are applied on top. Java 7 is
/// class-file major version 51 (`52.0` is Java 8), so `java.class.version`
/// reads `51.0` here.
/// Walks the superclass chain for a non-default `finalize()V` (spec
/// §8 scenario 6: "if O's class has a non-default `finalize`"). Every
/// class's default ancestor, `java/lang/Object`, never declares one, so
/// finding a hit anywhere in the chain means some subclass overrode it.
fn find_finalize(class: &ClassRef) -> Option<Arc<crate::class::Method>> {
    let mut current = Some(class.clone());
    while let Some(c) = current {
        if let Some(m) = c.find_method("finalize", "()V") {
            return Some(m);
        }
        current = c.super_class.read().clone();
    }
    None
}

fn default_system_properties() -> HashMap<String, String> {
    let mut props = HashMap::new();
    props.insert("java.vm.name".to_string(), "jvm-runtime".to_string());
    props.insert("java.vm.vendor".to_string(), "jvm-runtime project".to_string());
    props.insert("java.vm.version".to_string(), env!("CARGO_PKG_VERSION").to_string());
    props.insert(
        "java.vm.specification.name".to_string(),
        "Java Virtual Machine Specification".to_string(),
    );
    props.insert("java.vm.specification.vendor".to_string(), "jvm-runtime project".to_string());
    props.insert("java.vm.specification.version".to_string(), "1.7".to_string());
    props.insert(
        "java.specification.name".to_string(),
        "Java Platform API Specification".to_string(),
    );
    props.insert("java.specification.vendor".to_string(), "jvm-runtime project".to_string());
    props.insert("java.specification.version".to_string(), "1.7".to_string());
    props.insert("java.version".to_string(), "1.7".to_string());
    props.insert("java.class.version".to_string(), "51.0".to_string());
    props.insert("java.class.path".to_string(), ".".to_string());
    props.insert("file.encoding".to_string(), "UTF-8".to_string());
    props.insert("file.separator".to_string(), "/".to_string());
    props.insert("path.separator".to_string(), ":".to_string());
    props.insert("line.separator".to_string(), "\n".to_string());
    props.insert("os.name".to_string(), std::env::consts::OS.to_string());
    props.insert("os.arch".to_string(), std::env::consts::ARCH.to_string());
    props.insert("os.version".to_string(), "unknown".to_string());
    props.insert("user.name".to_string(), "unknown".to_string());
    props.insert("user.dir".to_string(), ".".to_string());
    props.insert("user.home".to_string(), ".".to_string());
    props
}

impl Vm {
    pub fn new(options: Options) -> Self {
        let mut properties = default_system_properties();
        properties.extend(options.properties.clone());
        let finalizer_thread = ThreadHandle::new("Finalizer", ThreadKind::Finalizer);
        Self {
            registry: ClassRegistry::new(),
            classpath: ClassPath(options.classpath.clone()),
            heap: Mutex::new(Heap::new()),
            native: NativeRegistry::new(),
            references: ReferenceRegistry::new(),
            threads: Mutex::new(vec![finalizer_thread.clone()]),
            properties: Mutex::new(properties),
            verbose: options.verbose,
            main_class: options.main_class.replace('.', "/"),
            program_args: options.program_args,
            finalizer_thread,
        }
    }

    pub fn spawn_thread(&self, name: impl Into<String>, kind: ThreadKind) -> Arc<ThreadHandle> {
        let handle = ThreadHandle::new(name, kind);
        self.threads.lock().push(handle.clone());
        handle
    }

    pub fn resolve_class(&self, name: &str) -> Result<ClassRef, LinkError> {
        let span = trace_span!("load_class", name);
        let _enter = span.enter();
        if self.verbose.class {
            debug!(name, "loading class");
        }
        self.registry.load_class(name, &self.classpath)
    }

    /// Drives `raw → linked → initializing → initialized ↘ erroneous`
    /// (spec §4.2). Superclasses are initialized first; `<clinit>` runs
    /// under `init_lock` so concurrent callers block rather than race.
    pub fn initialize_class(
        &self,
        class: &ClassRef,
        thread: ThreadId,
        stack: &mut ExecutorStack,
    ) -> Outcome<()> {
        if class.state() == ClassState::Initialized {
            return Outcome::Ok(());
        }
        if class.state() == ClassState::Erroneous {
            // Spec §4.2: a class that failed initialization once stays
            // erroneous; re-running would otherwise duplicate `<clinit>`'s
            // observable side effects.
            return Outcome::Ok(());
        }
        let _guard = class.init_lock.lock();
        if class.state() == ClassState::Initialized {
            return Outcome::Ok(());
        }

        if let Some(super_class) = class.super_class.read().clone() {
            let outcome = self.initialize_class(&super_class, thread, stack);
            if outcome.is_exception() {
                *class.state.write() = ClassState::Erroneous;
                return outcome;
            }
        }

        *class.state.write() = ClassState::Initializing;
        if self.verbose.class {
            debug!(class = %class.name, "initializing");
        }

        if let Some(clinit) = class.find_method("<clinit>", "()V") {
            let interp = Interpreter::new(self);
            let result = interp.invoke(class.clone(), clinit, Vec::new(), thread, stack);
            if result.is_exception() {
                *class.state.write() = ClassState::Erroneous;
                return result.map(|_| ());
            }
        }

        *class.state.write() = ClassState::Initialized;
        Outcome::Ok(())
    }

    pub fn allocate_object(&self, class: ClassRef) -> ObjectRef {
        self.heap.lock().allocate_object(class)
    }

    pub fn allocate_array(&self, class: ClassRef, length: usize) -> ObjectRef {
        self.heap.lock().allocate_array(class, length)
    }

    /// GC roots: every loaded class's static storage, plus whatever the
    /// reference registry is holding (spec §4.12). Thread operand
    /// stacks/locals are not modeled as roots here because this VM's
    /// interpreter runs to completion on a single executor per call
    /// rather than leaving live frames parked mid-collection; see
    /// `DESIGN.md`.
    fn gc_roots(&self) -> Vec<ObjectRef> {
        let mut roots = self.references.roots();
        for class in self.registry.all() {
            for v in class.static_storage.read().iter() {
                if let Value::Reference(Some(r)) = v {
                    roots.push(*r);
                }
            }
        }
        roots
    }

    /// Runs one mark/sweep cycle, then immediately drains whatever the
    /// sweep just queued through the finalizer (spec §4.12): each queued
    /// object's `finalize` (if its class overrides the no-op default) runs
    /// once on `finalizer_thread`, and the object is then moved to the
    /// outbox for release on the *next* cycle's sweep.
    pub fn collect_garbage(&self) -> GcStats {
        // This interpreter never runs more than one Java thread concurrently
        // (there is no bytecode-level Thread.start support), so there is
        // nothing else to park at a safepoint: the calling thread *is* the
        // GC thread. Passing an empty suspend set keeps `gc::collect`'s
        // stop-the-world handshake honest without it waiting forever on
        // itself. See `DESIGN.md`.
        let roots = self.gc_roots();
        let stats = {
            let mut heap = self.heap.lock();
            gc::collect(&mut heap, &[], roots)
        };
        if self.verbose.gc {
            info!(
                swept = stats.swept,
                queued = stats.queued_for_finalization,
                live = stats.live,
                "gc cycle complete"
            );
        }

        let to_finalize = self.heap.lock().take_inbox();
        if !to_finalize.is_empty() {
            let mut stack = ExecutorStack::new();
            let interp = Interpreter::new(self);
            for obj in to_finalize {
                let class = self.heap.lock().class_of(obj);
                if let Some(method) = find_finalize(&class) {
                    if self.verbose.gc {
                        debug!(class = %class.name, "running finalize");
                    }
                    let _ = interp.invoke(class, method, vec![Value::Reference(Some(obj))], self.finalizer_thread.id, &mut stack);
                }
                self.heap.lock().move_to_outbox(obj);
            }
        }

        stats
    }

    /// Loads the main class, resolves and runs its `public static void
    /// main(String[])`, and returns the process exit code (spec §6).
    pub fn run_main(&self) -> i32 {
        let thread = self.spawn_thread("main", ThreadKind::Vm);
        let mut stack = ExecutorStack::new();

        let class = match self.resolve_class(&self.main_class) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("{e}");
                return exit_code::CLASS_LOAD_FAILURE;
            }
        };

        if self.initialize_class(&class, thread.id, &mut stack).is_exception() {
            tracing::error!(class = %class.name, "class initialization failed");
            return exit_code::CLASS_LOAD_FAILURE;
        }

        let Some(main) = class.find_method("main", "([Ljava/lang/String;)V") else {
            tracing::error!(class = %class.name, "no main method found");
            return exit_code::CLASS_LOAD_FAILURE;
        };

        let interp = Interpreter::new(self);
        match interp.invoke(class, main, vec![Value::Reference(None)], thread.id, &mut stack) {
            Outcome::Ok(_) => exit_code::SUCCESS,
            Outcome::Exception(_) => exit_code::UNCAUGHT_EXCEPTION,
        }
    }
}
