//! Frame and operand stack (spec §4.7): a single contiguous slot buffer
//! per executor shared by every frame pushed during a thread's call chain,
//! with a `StackOverflowError` raised once headroom drops below 1KiB.

use std::sync::Arc;

use crate::class::{ClassRef, Method};
use crate::value::Value;

/// Total buffer size per executor: 256KiB of slots, matching spec §4.7.
pub const STACK_CAPACITY_BYTES: usize = 256 * 1024;
const SLOT_SIZE: usize = std::mem::size_of::<Value>();
pub const STACK_CAPACITY_SLOTS: usize = STACK_CAPACITY_BYTES / SLOT_SIZE;
/// Below this many free slots (roughly 1KiB), a new frame push raises
/// `StackOverflowError` instead of growing further.
const LOW_WATER_SLOTS: usize = 1024 / SLOT_SIZE;

#[derive(Debug, thiserror::Error)]
#[error("stack overflow")]
pub struct StackOverflow;

/// A single activation record: its locals and operand stack both live as
/// windows into the executor's shared buffer.
pub struct Frame {
    pub class: ClassRef,
    pub method: Arc<Method>,
    locals_start: usize,
    operand_start: usize,
    operand_top: usize,
    pub pc: usize,
}

impl Frame {
    pub fn local(&self, stack: &ExecutorStack, index: usize) -> Value {
        stack.buffer[self.locals_start + index]
    }

    pub fn set_local(&mut self, stack: &mut ExecutorStack, index: usize, value: Value) {
        stack.buffer[self.locals_start + index] = value;
    }

    pub fn push(&mut self, stack: &mut ExecutorStack, value: Value) {
        let idx = self.operand_start + self.operand_top;
        stack.buffer[idx] = value;
        self.operand_top += 1;
    }

    pub fn pop(&mut self, stack: &mut ExecutorStack) -> Value {
        self.operand_top -= 1;
        stack.buffer[self.operand_start + self.operand_top]
    }

    pub fn peek(&self, stack: &ExecutorStack) -> Value {
        stack.buffer[self.operand_start + self.operand_top - 1]
    }

    pub fn operand_depth(&self) -> usize {
        self.operand_top
    }

    pub fn clear_operands(&mut self) {
        self.operand_top = 0;
    }
}

/// Per-thread executor buffer. Every `Frame` pushed by `call` borrows a
/// disjoint window of `buffer`; frames are popped in LIFO order so the
/// high-water mark is simply `locals_start + locals_len + operand reach`.
pub struct ExecutorStack {
    buffer: Vec<Value>,
    high_water: usize,
}

impl ExecutorStack {
    pub fn new() -> Self {
        Self {
            buffer: vec![Value::Void; STACK_CAPACITY_SLOTS],
            high_water: 0,
        }
    }

    /// Reserves a new frame's locals + operand-stack window. `max_locals`
    /// and `max_stack` come straight from the method's `Code` attribute.
    pub fn push_frame(
        &mut self,
        class: ClassRef,
        method: Arc<Method>,
        max_locals: u16,
        max_stack: u16,
    ) -> Result<Frame, StackOverflow> {
        let needed = max_locals as usize + max_stack as usize;
        if self.buffer.len() - self.high_water < needed + LOW_WATER_SLOTS {
            return Err(StackOverflow);
        }
        let locals_start = self.high_water;
        let operand_start = locals_start + max_locals as usize;
        self.high_water += needed;
        Ok(Frame {
            class,
            method,
            locals_start,
            operand_start,
            operand_top: 0,
            pc: 0,
        })
    }

    pub fn pop_frame(&mut self, frame: &Frame) {
        self.high_water = frame.locals_start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{ClassKind, ClassState, ExceptionHandler, Field, FieldKind, LoaderId};
    use jvm_class_file::item::{
        constant_pool::ConstantPool, fields::FieldAccessFlags, methods::MethodAccessFlags,
    };
    use parking_lot::{Mutex, RwLock};
    use std::sync::atomic::AtomicU32;

    fn dummy_class() -> ClassRef {
        Arc::new(crate::class::Class {
            name: "Test".into(),
            source_file: None,
            defining_loader: LoaderId::Bootstrap,
            access_flags: jvm_class_file::item::file::ClassAccessFlags::ACC_PUBLIC,
            kind: ClassKind::Ordinary,
            super_class: RwLock::new(None),
            interfaces: RwLock::new(Vec::new()),
            constant_pool: ConstantPool { entries: Vec::new() },
            runtime_constant_pool: RwLock::new(Vec::new()),
            declared_fields: vec![Field {
                name: "x".into(),
                descriptor: jvm_class_file::item::ids::field::FieldType::BaseType(
                    jvm_class_file::item::ids::field::BaseType::Int,
                ),
                kind: FieldKind::Int,
                access_flags: FieldAccessFlags::empty(),
                slot: 0,
                constant_value: None,
            }],
            declared_methods: Vec::new(),
            static_storage: RwLock::new(Vec::new()),
            instance_size: AtomicU32::new(1),
            state: RwLock::new(ClassState::Initialized),
            init_lock: Mutex::new(()),
        })
    }

    fn dummy_method() -> Arc<Method> {
        Arc::new(Method {
            name: "m".into(),
            descriptor_raw: "()V".into(),
            parameter_kinds: Vec::new(),
            return_kind: None,
            access_flags: MethodAccessFlags::ACC_STATIC,
            max_stack: 4,
            max_locals: 2,
            code: None,
            exception_table: Vec::<ExceptionHandler>::new(),
            native_shape: Mutex::new(None),
        })
    }

    #[test]
    fn push_pop_round_trips_locals_and_operands() {
        let mut stack = ExecutorStack::new();
        let mut frame = stack.push_frame(dummy_class(), dummy_method(), 2, 4).unwrap();
        frame.set_local(&mut stack, 0, Value::Int(42));
        assert_eq!(frame.local(&stack, 0), Value::Int(42));
        frame.push(&mut stack, Value::Int(7));
        frame.push(&mut stack, Value::Int(8));
        assert_eq!(frame.pop(&mut stack), Value::Int(8));
        assert_eq!(frame.pop(&mut stack), Value::Int(7));
        stack.pop_frame(&frame);
    }

    #[test]
    fn overflow_when_buffer_exhausted() {
        let mut stack = ExecutorStack::new();
        let class = dummy_class();
        let method = dummy_method();
        let mut frames = Vec::new();
        loop {
            match stack.push_frame(class.clone(), method.clone(), 2, 4) {
                Ok(f) => frames.push(f),
                Err(StackOverflow) => break,
            }
        }
        assert!(!frames.is_empty());
    }
}
