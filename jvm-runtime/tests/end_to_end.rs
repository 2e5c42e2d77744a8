//! End-to-end scenarios from spec.md §8, run against hand-assembled class
//! files (see `support/mod.rs`) rather than a `javac` dependency.

mod support;

use std::sync::Arc;

use jvm_runtime::class::registry::ClassPath;
use jvm_runtime::error::Outcome;
use jvm_runtime::frame::ExecutorStack;
use jvm_runtime::interpreter::Interpreter;
use jvm_runtime::thread::ThreadKind;
use jvm_runtime::value::Value;
use jvm_runtime::vm::{Options, Vm};
use support::{build_class, build_class_with_fields, ConstantPoolBuilder, FieldSpec, MethodSpec};

fn vm_with_class(bytes: Vec<u8>) -> (Vm, Arc<jvm_runtime::class::Class>) {
    let vm = Vm::new(Options::default());
    let class = vm.registry.define_class(&bytes, &ClassPath(Vec::new())).expect("class should decode and link");
    (vm, class)
}

/// Scenario 1: a `main` that just returns exits 0 with no uncaught exception.
#[test]
fn static_main_returns_cleanly() {
    let mut cp = ConstantPoolBuilder::new();
    let name_index = cp.utf8("main");
    let descriptor_index = cp.utf8("()V");
    let bytes = build_class(
        cp,
        "Hello",
        vec![MethodSpec {
            access_flags: 0x0009, // ACC_PUBLIC | ACC_STATIC
            name_index,
            descriptor_index,
            max_stack: 0,
            max_locals: 1,
            code: vec![0xb1], // return
            exception_table: Vec::new(),
        }],
    );

    let (vm, class) = vm_with_class(bytes);
    let thread = vm.spawn_thread("main", ThreadKind::Vm);
    let mut stack = ExecutorStack::new();
    let method = class.find_method("main", "()V").unwrap();
    let interp = Interpreter::new(&vm);
    let outcome = interp.invoke(class, method, vec![Value::Reference(None)], thread.id, &mut stack);
    assert!(matches!(outcome, Outcome::Ok(Value::Void)));
}

/// Scenario 2: `(5 + 3) * 2 / 4` via `iconst_5, iconst_3, iadd, iconst_2,
/// imul, iconst_4, idiv, ireturn` returns 4.
#[test]
fn arithmetic_evaluates_left_to_right() {
    let mut cp = ConstantPoolBuilder::new();
    let name_index = cp.utf8("compute");
    let descriptor_index = cp.utf8("()I");
    let code = vec![
        0x08, // iconst_5
        0x06, // iconst_3
        0x60, // iadd
        0x05, // iconst_2
        0x68, // imul
        0x07, // iconst_4
        0x6c, // idiv
        0xac, // ireturn
    ];
    let bytes = build_class(
        cp,
        "Arith",
        vec![MethodSpec {
            access_flags: 0x0009,
            name_index,
            descriptor_index,
            max_stack: 2,
            max_locals: 0,
            code,
            exception_table: Vec::new(),
        }],
    );

    let (vm, class) = vm_with_class(bytes);
    let thread = vm.spawn_thread("main", ThreadKind::Vm);
    let mut stack = ExecutorStack::new();
    let method = class.find_method("compute", "()I").unwrap();
    let interp = Interpreter::new(&vm);
    let outcome = interp.invoke(class, method, Vec::new(), thread.id, &mut stack);
    assert!(matches!(outcome, Outcome::Ok(Value::Int(4))));
}

/// Scenario 3: `aconst_null, invokevirtual <toString>` throws
/// `NullPointerException`, delivered as the thread's uncaught exception
/// when no handler exists.
#[test]
fn null_receiver_virtual_call_throws_npe() {
    let mut cp = ConstantPoolBuilder::new();
    let to_string_name = cp.utf8("toString");
    let to_string_descriptor = cp.utf8("()Ljava/lang/String;");
    let class_name_index = cp.utf8("Caller");
    let class_index = cp.class(class_name_index);
    let nat_index = cp.name_and_type(to_string_name, to_string_descriptor);
    let methodref_index = cp.methodref(class_index, nat_index);

    let caller_name = cp.utf8("caller");
    let caller_descriptor = cp.utf8("()V");
    let callee_name = to_string_name;
    let callee_descriptor = to_string_descriptor;

    let caller_code = vec![
        0x01, // aconst_null
        0xb6, (methodref_index >> 8) as u8, methodref_index as u8, // invokevirtual
        0xb1, // return (unreached)
    ];
    let to_string_code = vec![0x01, 0xb0]; // aconst_null, areturn

    let bytes = build_class(
        cp,
        "Caller",
        vec![
            MethodSpec {
                access_flags: 0x0009,
                name_index: caller_name,
                descriptor_index: caller_descriptor,
                max_stack: 1,
                max_locals: 1,
                code: caller_code,
                exception_table: Vec::new(),
            },
            MethodSpec {
                access_flags: 0x0001, // ACC_PUBLIC instance method
                name_index: callee_name,
                descriptor_index: callee_descriptor,
                max_stack: 1,
                max_locals: 1,
                code: to_string_code,
                exception_table: Vec::new(),
            },
        ],
    );

    let (vm, class) = vm_with_class(bytes);
    let thread = vm.spawn_thread("main", ThreadKind::Vm);
    let mut stack = ExecutorStack::new();
    let method = class.find_method("caller", "()V").unwrap();
    let interp = Interpreter::new(&vm);
    let outcome = interp.invoke(class.clone(), method, vec![Value::Reference(None)], thread.id, &mut stack);
    match outcome {
        Outcome::Exception(obj) => {
            let thrown_class = vm.heap.lock().class_of(obj);
            assert_eq!(thrown_class.name, "java/lang/NullPointerException");
        }
        Outcome::Ok(_) => panic!("expected NullPointerException, got normal return"),
    }
}

/// Scenario 4: a try region `[0,4)` catching `ArithmeticException` at
/// `pc=20`; after `idiv` by zero, control reaches the handler with exactly
/// the exception object on the operand stack.
#[test]
fn exception_handler_match_delivers_to_correct_pc() {
    let mut cp = ConstantPoolBuilder::new();
    let name_index = cp.utf8("divByZero");
    let descriptor_index = cp.utf8("()Ljava/lang/Object;");
    let catch_class = cp.class_named("java/lang/ArithmeticException");

    let mut code = vec![
        0x08, // 0: iconst_5
        0x03, // 1: iconst_0
        0x6c, // 2: idiv
        0xac, // 3: ireturn (unreached)
    ];
    while code.len() < 20 {
        code.push(0x00); // nop padding out to the handler's byte offset
    }
    code.push(0xb0); // 20: areturn — hands back the caught exception object

    let bytes = build_class(
        cp,
        "Handler",
        vec![MethodSpec {
            access_flags: 0x0009,
            name_index,
            descriptor_index,
            max_stack: 2,
            max_locals: 0,
            code,
            exception_table: vec![(0, 4, 20, catch_class)],
        }],
    );

    let (vm, class) = vm_with_class(bytes);
    let thread = vm.spawn_thread("main", ThreadKind::Vm);
    let mut stack = ExecutorStack::new();
    let method = class.find_method("divByZero", "()Ljava/lang/Object;").unwrap();
    let interp = Interpreter::new(&vm);
    let outcome = interp.invoke(class, method, Vec::new(), thread.id, &mut stack);
    match outcome {
        Outcome::Ok(Value::Reference(Some(obj))) => {
            let thrown_class = vm.heap.lock().class_of(obj);
            assert_eq!(thrown_class.name, "java/lang/ArithmeticException");
        }
        other => panic!("expected the caught exception object, got {other:?}"),
    }
}

// Scenario 5 (reentrant monitor, cross-thread exclusion) is already
// covered by the unit tests in `src/monitor.rs` — no need to duplicate it
// here with a second class-file-shaped harness.

/// Scenario 6: an unreachable object with a non-default `finalize` moves
/// through the finalizer inbox/outbox handoff (spec §4.12) — queued and
/// finalized on the cycle that first finds it unreachable, released only
/// on the next cycle's sweep.
#[test]
fn gc_sweeps_unreachable_objects() {
    let mut cp = ConstantPoolBuilder::new();
    let field_name = cp.utf8("finalized");
    let field_descriptor = cp.utf8("I");
    let class_index = cp.class_named("Scratch");
    let nat_index = cp.name_and_type(field_name, field_descriptor);
    let fieldref_index = cp.fieldref(class_index, nat_index);
    let method_name = cp.utf8("finalize");
    let method_descriptor = cp.utf8("()V");

    let finalize_code = vec![
        0x04, // iconst_1
        0xb3, (fieldref_index >> 8) as u8, fieldref_index as u8, // putstatic
        0xb1, // return
    ];

    let bytes = build_class_with_fields(
        cp,
        "Scratch",
        vec![FieldSpec {
            access_flags: 0x0008, // ACC_STATIC
            name_index: field_name,
            descriptor_index: field_descriptor,
        }],
        vec![MethodSpec {
            access_flags: 0x0001, // ACC_PUBLIC, instance method overriding Object.finalize
            name_index: method_name,
            descriptor_index: method_descriptor,
            max_stack: 1,
            max_locals: 1,
            code: finalize_code,
            exception_table: Vec::new(),
        }],
    );

    let vm = Vm::new(Options::default());
    let class = vm.registry.define_class(&bytes, &ClassPath(Vec::new())).expect("class should decode and link");
    let _garbage = vm.allocate_object(class.clone());
    assert_eq!(vm.heap.lock().len(), 1);

    // No roots reference `_garbage`; the first cycle queues it for
    // finalization and runs `finalize`, but does not free it yet.
    let stats = vm.collect_garbage();
    assert_eq!(stats.swept, 0);
    assert_eq!(stats.queued_for_finalization, 1);
    assert_eq!(vm.heap.lock().len(), 1, "finalizer-queued object isn't freed yet");
    assert_eq!(class.static_storage.read()[0], Value::Int(1), "finalize() should have run");

    // The second cycle releases it from the outbox.
    let stats = vm.collect_garbage();
    assert_eq!(stats.swept, 1);
    assert_eq!(vm.heap.lock().len(), 0);
}
