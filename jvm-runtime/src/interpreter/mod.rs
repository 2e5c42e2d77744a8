//! Bytecode interpreter (spec §4.8): opcode dispatch, method resolution
//! (§4.8.1) and exception unwinding (§4.8.2).
//!
//! Each Java call is a native Rust call (`Interpreter::invoke` recurses for
//! `invoke*`), so an unhandled exception simply returns
//! `Outcome::Exception` up the Rust call stack — the caller's own
//! `execute` loop treats that exactly like an `athrow` raised at the call
//! site's own program counter, which gives frame-by-frame unwinding for
//! free without a separate explicit stack-walk.

use std::sync::Arc;

use jvm_class_file::item::{
    constant_pool::ConstantPoolEntry,
    ids::{
        field::{BaseType, FieldType},
        Descriptor,
    },
    opcodes::{ArrayTypeCode, InstructionList, VMOpcode},
};
use tracing::trace;

use crate::class::{ClassRef, FieldKind, Method};
use crate::error::{LinkError, Outcome};
use crate::frame::{ExecutorStack, Frame};
use crate::object::{HeapData, ObjectRef};
use crate::thread::ThreadId;
use crate::value::Value;
use crate::vm::Vm;

pub struct Interpreter<'vm> {
    vm: &'vm Vm,
}

enum Step {
    Continue,
    Jump(usize),
    Return(Value),
    Throw(ObjectRef),
}

/// The handful of exception types this VM can raise on its own (NPE,
/// divide-by-zero, bad casts, ...) are synthesized directly rather than
/// requiring a real `rt.jar` on the classpath: a real classpath entry for
/// the same name still wins if present.
const BUILTIN_HIERARCHY: &[(&str, Option<&str>)] = &[
    ("java/lang/Object", None),
    ("java/lang/Throwable", Some("java/lang/Object")),
    ("java/lang/Exception", Some("java/lang/Throwable")),
    ("java/lang/Error", Some("java/lang/Throwable")),
    ("java/lang/RuntimeException", Some("java/lang/Exception")),
    ("java/lang/NullPointerException", Some("java/lang/RuntimeException")),
    ("java/lang/ArithmeticException", Some("java/lang/RuntimeException")),
    (
        "java/lang/ArrayIndexOutOfBoundsException",
        Some("java/lang/RuntimeException"),
    ),
    ("java/lang/ClassCastException", Some("java/lang/RuntimeException")),
    (
        "java/lang/NegativeArraySizeException",
        Some("java/lang/RuntimeException"),
    ),
    ("java/lang/StackOverflowError", Some("java/lang/Error")),
    ("java/lang/VirtualMachineError", Some("java/lang/Error")),
];

impl<'vm> Interpreter<'vm> {
    pub fn new(vm: &'vm Vm) -> Self {
        Self { vm }
    }

    /// Resolves (synthesizing if necessary) one of the built-in exception
    /// classes and allocates a bare instance of it — no constructor is
    /// run, since none of this VM's own faults carry a message string.
    pub fn throw_new(&self, class_name: &str) -> ObjectRef {
        let class = self.ensure_builtin_class(class_name);
        self.vm.allocate_object(class)
    }

    fn ensure_builtin_class(&self, name: &str) -> ClassRef {
        if let Ok(c) = self.vm.resolve_class(name) {
            return c;
        }
        if let Some(c) = self.vm.registry.lookup(name) {
            return c;
        }
        let super_name = BUILTIN_HIERARCHY
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, s)| *s);
        let super_class = super_name.map(|s| self.ensure_builtin_class(s));
        self.vm.registry.synthesize_bare_class(name, super_class)
    }

    pub fn invoke(
        &self,
        class: ClassRef,
        method: Arc<Method>,
        args: Vec<Value>,
        thread: ThreadId,
        stack: &mut ExecutorStack,
    ) -> Outcome<Value> {
        if method.is_native() {
            return self.invoke_native(&class, &method, &args, thread);
        }
        let Some(code) = method.code.clone() else {
            return Outcome::Ok(Value::Void);
        };
        let mut frame = match stack.push_frame(class.clone(), method.clone(), method.max_locals, method.max_stack) {
            Ok(f) => f,
            Err(_) => return Outcome::Exception(self.throw_new("java/lang/StackOverflowError")),
        };
        let mut idx = 0usize;
        for v in args {
            let category = v.category() as usize;
            frame.set_local(stack, idx, v);
            idx += category;
        }
        let result = self.execute(&mut frame, &code, thread, stack);
        stack.pop_frame(&frame);
        result
    }

    fn invoke_native(
        &self,
        class: &ClassRef,
        method: &Arc<Method>,
        args: &[Value],
        thread: ThreadId,
    ) -> Outcome<Value> {
        let mut guard = method.native_shape.lock();
        let shape = guard.get_or_insert_with(|| crate::native::build_call_shape(&class.name, method));
        let entry_point = shape.entry_point.clone();
        drop(guard);
        match self.vm.native.call(&entry_point, thread, args) {
            Some(outcome) => outcome,
            None => Outcome::Exception(self.throw_new("java/lang/VirtualMachineError")),
        }
    }

    fn execute(
        &self,
        frame: &mut Frame,
        code: &InstructionList,
        thread: ThreadId,
        stack: &mut ExecutorStack,
    ) -> Outcome<Value> {
        loop {
            let opcode = code.opcodes[frame.pc].clone();
            trace!(pc = frame.pc, ?opcode, "exec");
            let step = self.step(frame, code, &opcode, thread, stack);
            match step {
                Step::Continue => frame.pc += 1,
                Step::Jump(target) => frame.pc = target,
                Step::Return(v) => return Outcome::Ok(v),
                Step::Throw(obj) => match self.find_handler(frame, code, obj) {
                    Some(handler_pc) => {
                        frame.clear_operands();
                        frame.push(stack, Value::Reference(Some(obj)));
                        frame.pc = handler_pc;
                    }
                    None => return Outcome::Exception(obj),
                },
            }
        }
    }

    fn find_handler(&self, frame: &Frame, code: &InstructionList, obj: ObjectRef) -> Option<usize> {
        let thrown_class = self.vm.heap.lock().class_of(obj);
        let byte_pc = *code.code_to_byte.get(&frame.pc)?;
        for handler in &frame.method.exception_table {
            if byte_pc < handler.start_pc as usize || byte_pc >= handler.end_pc as usize {
                continue;
            }
            let matches = match handler.catch_type {
                None => true,
                Some(idx) => {
                    let name = match frame.class.constant_pool.get_constant(idx as usize) {
                        ConstantPoolEntry::Class { name_index } => {
                            frame.class.constant_pool.get_utf8_constant(*name_index as usize).ok()
                        }
                        _ => None,
                    };
                    match name.and_then(|n| self.vm.resolve_class(n).ok()) {
                        Some(catch_class) => thrown_class.is_assignable_to(&catch_class),
                        None => false,
                    }
                }
            };
            if matches {
                return code.byte_to_code.get(&(handler.handler_pc as usize)).copied();
            }
        }
        None
    }

    fn jump_target(&self, frame: &Frame, code: &InstructionList, offset: i32) -> usize {
        let base = *code.code_to_byte.get(&frame.pc).expect("current pc has a byte offset");
        let target_byte = (base as i64 + offset as i64) as usize;
        *code
            .byte_to_code
            .get(&target_byte)
            .unwrap_or_else(|| panic!("branch to non-instruction-boundary offset {target_byte}"))
    }

    fn const_class_name(&self, frame: &Frame, index: u16) -> Option<String> {
        match frame.class.constant_pool.get_constant(index as usize) {
            ConstantPoolEntry::Class { name_index } => frame
                .class
                .constant_pool
                .get_utf8_constant(*name_index as usize)
                .ok()
                .map(String::from),
            _ => None,
        }
    }

    fn resolve_class_by_index(&self, frame: &Frame, index: u16) -> Result<ClassRef, LinkError> {
        let name = self
            .const_class_name(frame, index)
            .ok_or(LinkError::BadConstantPoolEntry(index as usize))?;
        if let Some(rest) = name.strip_prefix('[') {
            let elem = FieldType::parse_complete(rest)?;
            self.vm.registry.load_array_of(elem, &self.vm.classpath)
        } else {
            self.vm.resolve_class(&name)
        }
    }

    fn name_and_type(&self, frame: &Frame, index: u16) -> Option<(String, String)> {
        match frame.class.constant_pool.get_constant(index as usize) {
            ConstantPoolEntry::NameAndType {
                name_index,
                descriptor_index,
            } => {
                let name = frame.class.constant_pool.get_utf8_constant(*name_index as usize).ok()?;
                let descriptor = frame
                    .class
                    .constant_pool
                    .get_utf8_constant(*descriptor_index as usize)
                    .ok()?;
                Some((name.to_string(), descriptor.to_string()))
            }
            _ => None,
        }
    }

    /// Resolves a `Fieldref`/`Methodref`/`InterfaceMethodref` constant to
    /// its declaring class and member name/descriptor.
    fn resolve_member_ref(&self, frame: &Frame, index: u16) -> Result<(ClassRef, String, String), LinkError> {
        let (class_index, nat_index) = match frame.class.constant_pool.get_constant(index as usize) {
            ConstantPoolEntry::Fieldref {
                class_index,
                name_and_type_index,
            }
            | ConstantPoolEntry::Methodref {
                class_index,
                name_and_type_index,
            }
            | ConstantPoolEntry::InterfaceMethodref {
                class_index,
                name_and_type_index,
            } => (*class_index, *name_and_type_index),
            _ => return Err(LinkError::BadConstantPoolEntry(index as usize)),
        };
        let class = self.resolve_class_by_index(frame, class_index)?;
        let (name, descriptor) = self
            .name_and_type(frame, nat_index)
            .ok_or(LinkError::BadConstantPoolEntry(nat_index as usize))?;
        Ok((class, name, descriptor))
    }

    fn find_field_slot<'a>(&self, class: &'a ClassRef, name: &str) -> Option<(ClassRef, usize, FieldKind)> {
        let mut current = Some(class.clone());
        while let Some(c) = current {
            if let Some(f) = c.find_field(name) {
                return Some((c.clone(), f.slot, f.kind));
            }
            current = c.super_class.read().clone();
        }
        None
    }

    /// Virtual/interface method lookup: walks from the receiver's actual
    /// class up toward the statically resolved declaring class, per
    /// spec §4.8.1.
    fn find_virtual_method(&self, actual_class: &ClassRef, name: &str, descriptor: &str) -> Option<Arc<Method>> {
        let mut current = Some(actual_class.clone());
        while let Some(c) = current {
            if let Some(m) = c.find_method(name, descriptor) {
                if !m.is_private() {
                    return Some(m);
                }
            }
            current = c.super_class.read().clone();
        }
        None
    }

    fn pop_args(&self, frame: &mut Frame, stack: &mut ExecutorStack, method: &Method, has_receiver: bool) -> Vec<Value> {
        let n = method.parameter_kinds.len();
        let mut args = vec![Value::Void; n];
        for i in (0..n).rev() {
            args[i] = frame.pop(stack);
        }
        if has_receiver {
            let receiver = frame.pop(stack);
            let mut full = Vec::with_capacity(n + 1);
            full.push(receiver);
            full.extend(args);
            full
        } else {
            args
        }
    }

    fn step(
        &self,
        frame: &mut Frame,
        code: &InstructionList,
        opcode: &VMOpcode,
        thread: ThreadId,
        stack: &mut ExecutorStack,
    ) -> Step {
        macro_rules! bin_int {
            ($op:tt) => {{
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                frame.push(stack, Value::Int(a $op b));
                Step::Continue
            }};
        }
        macro_rules! cmp_jump {
            ($offset:expr, $cond:expr) => {{
                let target = self.jump_target(frame, code, *$offset as i32);
                if $cond {
                    Step::Jump(target)
                } else {
                    Step::Continue
                }
            }};
        }

        match opcode {
            VMOpcode::nop() => Step::Continue,
            VMOpcode::aconst_null() => {
                frame.push(stack, Value::Reference(None));
                Step::Continue
            }
            VMOpcode::iconst_m1() => self.push_int(frame, stack, -1),
            VMOpcode::iconst_0() => self.push_int(frame, stack, 0),
            VMOpcode::iconst_1() => self.push_int(frame, stack, 1),
            VMOpcode::iconst_2() => self.push_int(frame, stack, 2),
            VMOpcode::iconst_3() => self.push_int(frame, stack, 3),
            VMOpcode::iconst_4() => self.push_int(frame, stack, 4),
            VMOpcode::iconst_5() => self.push_int(frame, stack, 5),
            VMOpcode::lconst_0() => {
                frame.push(stack, Value::Long(0));
                Step::Continue
            }
            VMOpcode::lconst_1() => {
                frame.push(stack, Value::Long(1));
                Step::Continue
            }
            VMOpcode::fconst_0() => {
                frame.push(stack, Value::Float(0.0));
                Step::Continue
            }
            VMOpcode::fconst_1() => {
                frame.push(stack, Value::Float(1.0));
                Step::Continue
            }
            VMOpcode::fconst_2() => {
                frame.push(stack, Value::Float(2.0));
                Step::Continue
            }
            VMOpcode::dconst_0() => {
                frame.push(stack, Value::Double(0.0));
                Step::Continue
            }
            VMOpcode::dconst_1() => {
                frame.push(stack, Value::Double(1.0));
                Step::Continue
            }
            VMOpcode::bipush(b) => self.push_int(frame, stack, *b as i8 as i32),
            VMOpcode::sipush(s) => self.push_int(frame, stack, *s as i16 as i32),
            VMOpcode::ldc(idx) => self.exec_ldc(frame, stack, *idx as u16),
            VMOpcode::ldc_w(idx) | VMOpcode::ldc2_w(idx) => self.exec_ldc(frame, stack, *idx),

            VMOpcode::iload(i) => self.load(frame, stack, *i as usize),
            VMOpcode::iload_0() | VMOpcode::lload_0() | VMOpcode::fload_0() | VMOpcode::dload_0() | VMOpcode::aload_0() => {
                self.load(frame, stack, 0)
            }
            VMOpcode::iload_1() | VMOpcode::lload_1() | VMOpcode::fload_1() | VMOpcode::dload_1() | VMOpcode::aload_1() => {
                self.load(frame, stack, 1)
            }
            VMOpcode::iload_2() | VMOpcode::lload_2() | VMOpcode::fload_2() | VMOpcode::dload_2() | VMOpcode::aload_2() => {
                self.load(frame, stack, 2)
            }
            VMOpcode::iload_3() | VMOpcode::lload_3() | VMOpcode::fload_3() | VMOpcode::dload_3() | VMOpcode::aload_3() => {
                self.load(frame, stack, 3)
            }
            VMOpcode::lload(i) | VMOpcode::fload(i) | VMOpcode::dload(i) | VMOpcode::aload(i) => {
                self.load(frame, stack, *i as usize)
            }

            VMOpcode::istore(i) | VMOpcode::lstore(i) | VMOpcode::fstore(i) | VMOpcode::dstore(i) | VMOpcode::astore(i) => {
                self.store(frame, stack, *i as usize)
            }
            VMOpcode::istore_0() | VMOpcode::lstore_0() | VMOpcode::fstore_0() | VMOpcode::dstore_0() | VMOpcode::astore_0() => {
                self.store(frame, stack, 0)
            }
            VMOpcode::istore_1() | VMOpcode::lstore_1() | VMOpcode::fstore_1() | VMOpcode::dstore_1() | VMOpcode::astore_1() => {
                self.store(frame, stack, 1)
            }
            VMOpcode::istore_2() | VMOpcode::lstore_2() | VMOpcode::fstore_2() | VMOpcode::dstore_2() | VMOpcode::astore_2() => {
                self.store(frame, stack, 2)
            }
            VMOpcode::istore_3() | VMOpcode::lstore_3() | VMOpcode::fstore_3() | VMOpcode::dstore_3() | VMOpcode::astore_3() => {
                self.store(frame, stack, 3)
            }

            VMOpcode::pop() => {
                frame.pop(stack);
                Step::Continue
            }
            VMOpcode::pop2() => {
                frame.pop(stack);
                frame.pop(stack);
                Step::Continue
            }
            VMOpcode::dup() => {
                let v = frame.peek(stack);
                frame.push(stack, v);
                Step::Continue
            }
            VMOpcode::dup_x1() => {
                let top = frame.pop(stack);
                let second = frame.pop(stack);
                frame.push(stack, top);
                frame.push(stack, second);
                frame.push(stack, top);
                Step::Continue
            }
            VMOpcode::swap() => {
                let top = frame.pop(stack);
                let second = frame.pop(stack);
                frame.push(stack, top);
                frame.push(stack, second);
                Step::Continue
            }

            VMOpcode::iadd() => bin_int!(+),
            VMOpcode::isub() => bin_int!(-),
            VMOpcode::imul() => bin_int!(*),
            VMOpcode::iand() => bin_int!(&),
            VMOpcode::ior() => bin_int!(|),
            VMOpcode::ixor() => bin_int!(^),
            VMOpcode::ishl() => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                frame.push(stack, Value::Int(a.wrapping_shl(b as u32 & 0x1f)));
                Step::Continue
            }
            VMOpcode::ishr() => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                frame.push(stack, Value::Int(a.wrapping_shr(b as u32 & 0x1f)));
                Step::Continue
            }
            VMOpcode::iushr() => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap() as u32;
                frame.push(stack, Value::Int((a.wrapping_shr(b as u32 & 0x1f)) as i32));
                Step::Continue
            }
            VMOpcode::ineg() => {
                let a = frame.pop(stack).as_int().unwrap();
                frame.push(stack, Value::Int(a.wrapping_neg()));
                Step::Continue
            }
            VMOpcode::idiv() => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                if b == 0 {
                    return Step::Throw(self.throw_new("java/lang/ArithmeticException"));
                }
                frame.push(stack, Value::Int(a.wrapping_div(b)));
                Step::Continue
            }
            VMOpcode::irem() => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                if b == 0 {
                    return Step::Throw(self.throw_new("java/lang/ArithmeticException"));
                }
                frame.push(stack, Value::Int(a.wrapping_rem(b)));
                Step::Continue
            }
            VMOpcode::iinc(index, amount) => {
                let cur = frame.local(stack, *index as usize).as_int().unwrap();
                frame.set_local(stack, *index as usize, Value::Int(cur.wrapping_add(*amount as i8 as i32)));
                Step::Continue
            }

            VMOpcode::ladd() => self.bin_long(frame, stack, i64::wrapping_add),
            VMOpcode::lsub() => self.bin_long(frame, stack, i64::wrapping_sub),
            VMOpcode::lmul() => self.bin_long(frame, stack, i64::wrapping_mul),
            VMOpcode::ldiv() => {
                let b = self.pop_long(frame, stack);
                let a = self.pop_long(frame, stack);
                if b == 0 {
                    return Step::Throw(self.throw_new("java/lang/ArithmeticException"));
                }
                frame.push(stack, Value::Long(a.wrapping_div(b)));
                Step::Continue
            }
            VMOpcode::lrem() => {
                let b = self.pop_long(frame, stack);
                let a = self.pop_long(frame, stack);
                if b == 0 {
                    return Step::Throw(self.throw_new("java/lang/ArithmeticException"));
                }
                frame.push(stack, Value::Long(a.wrapping_rem(b)));
                Step::Continue
            }
            VMOpcode::lcmp() => {
                let b = self.pop_long(frame, stack);
                let a = self.pop_long(frame, stack);
                frame.push(stack, Value::Int(a.cmp(&b) as i32));
                Step::Continue
            }

            VMOpcode::fadd() => self.bin_float(frame, stack, |a, b| a + b),
            VMOpcode::fsub() => self.bin_float(frame, stack, |a, b| a - b),
            VMOpcode::fmul() => self.bin_float(frame, stack, |a, b| a * b),
            VMOpcode::fdiv() => self.bin_float(frame, stack, |a, b| a / b),
            VMOpcode::dadd() => self.bin_double(frame, stack, |a, b| a + b),
            VMOpcode::dsub() => self.bin_double(frame, stack, |a, b| a - b),
            VMOpcode::dmul() => self.bin_double(frame, stack, |a, b| a * b),
            VMOpcode::ddiv() => self.bin_double(frame, stack, |a, b| a / b),

            VMOpcode::i2l() => {
                let v = frame.pop(stack).as_int().unwrap();
                frame.push(stack, Value::Long(v as i64));
                Step::Continue
            }
            VMOpcode::i2f() => {
                let v = frame.pop(stack).as_int().unwrap();
                frame.push(stack, Value::Float(v as f32));
                Step::Continue
            }
            VMOpcode::i2d() => {
                let v = frame.pop(stack).as_int().unwrap();
                frame.push(stack, Value::Double(v as f64));
                Step::Continue
            }
            VMOpcode::l2i() => {
                let v = self.pop_long(frame, stack);
                frame.push(stack, Value::Int(v as i32));
                Step::Continue
            }

            VMOpcode::goto(off) => Step::Jump(self.jump_target(frame, code, *off as i32)),
            VMOpcode::goto_w(off) => Step::Jump(self.jump_target(frame, code, *off as i32)),
            VMOpcode::ifeq(off) => {
                let v = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, v == 0)
            }
            VMOpcode::ifne(off) => {
                let v = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, v != 0)
            }
            VMOpcode::iflt(off) => {
                let v = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, v < 0)
            }
            VMOpcode::ifge(off) => {
                let v = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, v >= 0)
            }
            VMOpcode::ifgt(off) => {
                let v = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, v > 0)
            }
            VMOpcode::ifle(off) => {
                let v = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, v <= 0)
            }
            VMOpcode::if_icmpeq(off) => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, a == b)
            }
            VMOpcode::if_icmpne(off) => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, a != b)
            }
            VMOpcode::if_icmplt(off) => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, a < b)
            }
            VMOpcode::if_icmpge(off) => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, a >= b)
            }
            VMOpcode::if_icmpgt(off) => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, a > b)
            }
            VMOpcode::if_icmple(off) => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = frame.pop(stack).as_int().unwrap();
                cmp_jump!(off, a <= b)
            }
            VMOpcode::ifnull(off) => {
                let v = frame.pop(stack);
                cmp_jump!(off, v.is_null())
            }
            VMOpcode::ifnonnull(off) => {
                let v = frame.pop(stack);
                cmp_jump!(off, !v.is_null())
            }
            VMOpcode::if_acmpeq(off) => {
                let b = frame.pop(stack).as_reference().unwrap();
                let a = frame.pop(stack).as_reference().unwrap();
                cmp_jump!(off, a == b)
            }
            VMOpcode::if_acmpne(off) => {
                let b = frame.pop(stack).as_reference().unwrap();
                let a = frame.pop(stack).as_reference().unwrap();
                cmp_jump!(off, a != b)
            }

            VMOpcode::r#return() => Step::Return(Value::Void),
            VMOpcode::ireturn() => Step::Return(frame.pop(stack)),
            VMOpcode::lreturn() => Step::Return(frame.pop(stack)),
            VMOpcode::freturn() => Step::Return(frame.pop(stack)),
            VMOpcode::dreturn() => Step::Return(frame.pop(stack)),
            VMOpcode::areturn() => Step::Return(frame.pop(stack)),

            VMOpcode::getstatic(idx) => self.exec_getstatic(frame, stack, thread, *idx),
            VMOpcode::putstatic(idx) => self.exec_putstatic(frame, stack, *idx),
            VMOpcode::getfield(idx) => self.exec_getfield(frame, stack, *idx),
            VMOpcode::putfield(idx) => self.exec_putfield(frame, stack, *idx),

            VMOpcode::new(idx) => self.exec_new(frame, stack, *idx),
            VMOpcode::newarray(ty) => self.exec_newarray(frame, stack, *ty),
            VMOpcode::anewarray(idx) => self.exec_anewarray(frame, stack, *idx),
            VMOpcode::arraylength() => {
                let r = frame.pop(stack).as_reference().unwrap();
                match r {
                    None => Step::Throw(self.throw_new("java/lang/NullPointerException")),
                    Some(obj) => {
                        let len = match self.vm.heap.lock().get(obj) {
                            HeapData::Array(a) => a.len(),
                            HeapData::Object(_) => unreachable!("arraylength on non-array"),
                        };
                        frame.push(stack, Value::Int(len as i32));
                        Step::Continue
                    }
                }
            }

            VMOpcode::iaload() | VMOpcode::faload() | VMOpcode::aaload() | VMOpcode::baload()
            | VMOpcode::caload() | VMOpcode::saload() => self.array_load(frame, stack),
            VMOpcode::laload() | VMOpcode::daload() => self.array_load(frame, stack),
            VMOpcode::iastore() | VMOpcode::fastore() | VMOpcode::aastore() | VMOpcode::bastore()
            | VMOpcode::castore() | VMOpcode::sastore() | VMOpcode::lastore() | VMOpcode::dastore() => {
                self.array_store(frame, stack)
            }

            VMOpcode::invokestatic(idx) => self.exec_invoke(frame, stack, thread, *idx, false, false),
            VMOpcode::invokespecial(idx) => self.exec_invoke(frame, stack, thread, *idx, true, false),
            VMOpcode::invokevirtual(idx) => self.exec_invoke(frame, stack, thread, *idx, true, true),
            VMOpcode::invokeinterface(idx, _count, _zero) => self.exec_invoke(frame, stack, thread, *idx, true, true),

            VMOpcode::athrow() => {
                let r = frame.pop(stack).as_reference().unwrap();
                match r {
                    None => Step::Throw(self.throw_new("java/lang/NullPointerException")),
                    Some(obj) => Step::Throw(obj),
                }
            }

            VMOpcode::monitorenter() => {
                let r = frame.pop(stack).as_reference().unwrap();
                match r {
                    None => Step::Throw(self.throw_new("java/lang/NullPointerException")),
                    Some(obj) => {
                        let monitor = self.vm.heap.lock().monitor(obj);
                        monitor.enter(thread);
                        Step::Continue
                    }
                }
            }
            VMOpcode::monitorexit() => {
                let r = frame.pop(stack).as_reference().unwrap();
                match r {
                    None => Step::Throw(self.throw_new("java/lang/NullPointerException")),
                    Some(obj) => {
                        let monitor = self.vm.heap.lock().monitor(obj);
                        let _ = monitor.exit(thread);
                        Step::Continue
                    }
                }
            }

            VMOpcode::checkcast(idx) => self.exec_checkcast(frame, stack, *idx),
            VMOpcode::instanceof(idx) => self.exec_instanceof(frame, stack, *idx),

            VMOpcode::dup2() => {
                let b = frame.pop(stack);
                let a = frame.pop(stack);
                frame.push(stack, a);
                frame.push(stack, b);
                frame.push(stack, a);
                frame.push(stack, b);
                Step::Continue
            }
            VMOpcode::dup_x2() => {
                let v1 = frame.pop(stack);
                let v2 = frame.pop(stack);
                let v3 = frame.pop(stack);
                frame.push(stack, v1);
                frame.push(stack, v3);
                frame.push(stack, v2);
                frame.push(stack, v1);
                Step::Continue
            }
            VMOpcode::dup2_x1() => {
                let v1 = frame.pop(stack);
                let v2 = frame.pop(stack);
                let v3 = frame.pop(stack);
                frame.push(stack, v2);
                frame.push(stack, v1);
                frame.push(stack, v3);
                frame.push(stack, v2);
                frame.push(stack, v1);
                Step::Continue
            }
            VMOpcode::dup2_x2() => {
                let v1 = frame.pop(stack);
                let v2 = frame.pop(stack);
                let v3 = frame.pop(stack);
                let v4 = frame.pop(stack);
                frame.push(stack, v2);
                frame.push(stack, v1);
                frame.push(stack, v4);
                frame.push(stack, v3);
                frame.push(stack, v2);
                frame.push(stack, v1);
                Step::Continue
            }

            VMOpcode::i2b() => {
                let v = frame.pop(stack).as_int().unwrap();
                frame.push(stack, Value::Int(v as i8 as i32));
                Step::Continue
            }
            VMOpcode::i2c() => {
                let v = frame.pop(stack).as_int().unwrap();
                frame.push(stack, Value::Int(v as u16 as i32));
                Step::Continue
            }
            VMOpcode::i2s() => {
                let v = frame.pop(stack).as_int().unwrap();
                frame.push(stack, Value::Int(v as i16 as i32));
                Step::Continue
            }
            VMOpcode::f2i() => {
                let v = self.pop_float(frame, stack);
                frame.push(stack, Value::Int(v as i32));
                Step::Continue
            }
            VMOpcode::f2l() => {
                let v = self.pop_float(frame, stack);
                frame.push(stack, Value::Long(v as i64));
                Step::Continue
            }
            VMOpcode::f2d() => {
                let v = self.pop_float(frame, stack);
                frame.push(stack, Value::Double(v as f64));
                Step::Continue
            }
            VMOpcode::d2i() => {
                let v = self.pop_double(frame, stack);
                frame.push(stack, Value::Int(v as i32));
                Step::Continue
            }
            VMOpcode::d2l() => {
                let v = self.pop_double(frame, stack);
                frame.push(stack, Value::Long(v as i64));
                Step::Continue
            }
            VMOpcode::d2f() => {
                let v = self.pop_double(frame, stack);
                frame.push(stack, Value::Float(v as f32));
                Step::Continue
            }
            VMOpcode::l2f() => {
                let v = self.pop_long(frame, stack);
                frame.push(stack, Value::Float(v as f32));
                Step::Continue
            }
            VMOpcode::l2d() => {
                let v = self.pop_long(frame, stack);
                frame.push(stack, Value::Double(v as f64));
                Step::Continue
            }

            VMOpcode::fcmpl() => self.cmp_float(frame, stack, -1),
            VMOpcode::fcmpg() => self.cmp_float(frame, stack, 1),
            VMOpcode::dcmpl() => self.cmp_double(frame, stack, -1),
            VMOpcode::dcmpg() => self.cmp_double(frame, stack, 1),

            VMOpcode::land() => self.bin_long(frame, stack, |a, b| a & b),
            VMOpcode::lor() => self.bin_long(frame, stack, |a, b| a | b),
            VMOpcode::lxor() => self.bin_long(frame, stack, |a, b| a ^ b),
            VMOpcode::lneg() => {
                let v = self.pop_long(frame, stack);
                frame.push(stack, Value::Long(v.wrapping_neg()));
                Step::Continue
            }
            VMOpcode::lshl() => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = self.pop_long(frame, stack);
                frame.push(stack, Value::Long(a.wrapping_shl(b as u32 & 0x3f)));
                Step::Continue
            }
            VMOpcode::lshr() => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = self.pop_long(frame, stack);
                frame.push(stack, Value::Long(a.wrapping_shr(b as u32 & 0x3f)));
                Step::Continue
            }
            VMOpcode::lushr() => {
                let b = frame.pop(stack).as_int().unwrap();
                let a = self.pop_long(frame, stack) as u64;
                frame.push(stack, Value::Long(a.wrapping_shr(b as u32 & 0x3f) as i64));
                Step::Continue
            }

            VMOpcode::frem() => self.bin_float(frame, stack, |a, b| a % b),
            VMOpcode::drem() => self.bin_double(frame, stack, |a, b| a % b),
            VMOpcode::fneg() => {
                let v = self.pop_float(frame, stack);
                frame.push(stack, Value::Float(-v));
                Step::Continue
            }
            VMOpcode::dneg() => {
                let v = self.pop_double(frame, stack);
                frame.push(stack, Value::Double(-v));
                Step::Continue
            }

            VMOpcode::tableswitch(default, low, high, offsets) => {
                let index = frame.pop(stack).as_int().unwrap();
                let target = if index < *low || index > *high {
                    *default
                } else {
                    offsets[(index - low) as usize]
                };
                Step::Jump(self.jump_target(frame, code, target))
            }
            VMOpcode::lookupswitch(default, pairs) => {
                let key = frame.pop(stack).as_int().unwrap();
                let target = pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v).unwrap_or(*default);
                Step::Jump(self.jump_target(frame, code, target))
            }

            VMOpcode::multianewarray(idx, dimensions) => self.exec_multianewarray(frame, stack, *idx, *dimensions),

            VMOpcode::wide_format1(inner, index) => match inner.as_ref() {
                VMOpcode::iload(_) | VMOpcode::lload(_) | VMOpcode::fload(_) | VMOpcode::dload(_) | VMOpcode::aload(_) => {
                    self.load(frame, stack, *index as usize)
                }
                VMOpcode::istore(_) | VMOpcode::lstore(_) | VMOpcode::fstore(_) | VMOpcode::dstore(_) | VMOpcode::astore(_) => {
                    self.store(frame, stack, *index as usize)
                }
                other => panic!("wide prefix applied to non-widenable opcode: {other:?}"),
            },
            VMOpcode::wide_format2(inner, index, constant) => match inner.as_ref() {
                VMOpcode::iinc(..) => {
                    let cur = frame.local(stack, *index as usize).as_int().unwrap();
                    frame.set_local(stack, *index as usize, Value::Int(cur.wrapping_add(*constant as i16 as i32)));
                    Step::Continue
                }
                other => panic!("wide iinc decode produced unexpected inner opcode: {other:?}"),
            },

            other => panic!("unimplemented opcode: {other:?}"),
        }
    }

    fn push_int(&self, frame: &mut Frame, stack: &mut ExecutorStack, v: i32) -> Step {
        frame.push(stack, Value::Int(v));
        Step::Continue
    }

    fn load(&self, frame: &mut Frame, stack: &mut ExecutorStack, index: usize) -> Step {
        let v = frame.local(stack, index);
        frame.push(stack, v);
        Step::Continue
    }

    fn store(&self, frame: &mut Frame, stack: &mut ExecutorStack, index: usize) -> Step {
        let v = frame.pop(stack);
        frame.set_local(stack, index, v);
        Step::Continue
    }

    fn pop_long(&self, frame: &mut Frame, stack: &mut ExecutorStack) -> i64 {
        match frame.pop(stack) {
            Value::Long(v) => v,
            _ => panic!("expected long on operand stack"),
        }
    }

    fn bin_long(&self, frame: &mut Frame, stack: &mut ExecutorStack, f: fn(i64, i64) -> i64) -> Step {
        let b = self.pop_long(frame, stack);
        let a = self.pop_long(frame, stack);
        frame.push(stack, Value::Long(f(a, b)));
        Step::Continue
    }

    fn pop_float(&self, frame: &mut Frame, stack: &mut ExecutorStack) -> f32 {
        match frame.pop(stack) {
            Value::Float(v) => v,
            _ => panic!("expected float on operand stack"),
        }
    }

    fn pop_double(&self, frame: &mut Frame, stack: &mut ExecutorStack) -> f64 {
        match frame.pop(stack) {
            Value::Double(v) => v,
            _ => panic!("expected double on operand stack"),
        }
    }

    /// `nan_result` is the value pushed when either operand is `NaN`
    /// (`fcmpg`/`dcmpg` use `1`, `fcmpl`/`dcmpl` use `-1` per JVMS §6.5).
    fn cmp_float(&self, frame: &mut Frame, stack: &mut ExecutorStack, nan_result: i32) -> Step {
        let b = self.pop_float(frame, stack);
        let a = self.pop_float(frame, stack);
        let result = if a.is_nan() || b.is_nan() {
            nan_result
        } else if a > b {
            1
        } else if a < b {
            -1
        } else {
            0
        };
        frame.push(stack, Value::Int(result));
        Step::Continue
    }

    fn cmp_double(&self, frame: &mut Frame, stack: &mut ExecutorStack, nan_result: i32) -> Step {
        let b = self.pop_double(frame, stack);
        let a = self.pop_double(frame, stack);
        let result = if a.is_nan() || b.is_nan() {
            nan_result
        } else if a > b {
            1
        } else if a < b {
            -1
        } else {
            0
        };
        frame.push(stack, Value::Int(result));
        Step::Continue
    }

    fn bin_float(&self, frame: &mut Frame, stack: &mut ExecutorStack, f: impl Fn(f32, f32) -> f32) -> Step {
        let b = match frame.pop(stack) {
            Value::Float(v) => v,
            _ => panic!("expected float"),
        };
        let a = match frame.pop(stack) {
            Value::Float(v) => v,
            _ => panic!("expected float"),
        };
        frame.push(stack, Value::Float(f(a, b)));
        Step::Continue
    }

    fn bin_double(&self, frame: &mut Frame, stack: &mut ExecutorStack, f: impl Fn(f64, f64) -> f64) -> Step {
        let b = match frame.pop(stack) {
            Value::Double(v) => v,
            _ => panic!("expected double"),
        };
        let a = match frame.pop(stack) {
            Value::Double(v) => v,
            _ => panic!("expected double"),
        };
        frame.push(stack, Value::Double(f(a, b)));
        Step::Continue
    }

    fn exec_ldc(&self, frame: &mut Frame, stack: &mut ExecutorStack, index: u16) -> Step {
        let v = match frame.class.constant_pool.get_constant(index as usize) {
            ConstantPoolEntry::Integer { bytes } => Value::Int(*bytes),
            ConstantPoolEntry::Float { float } => Value::Float(f32::from_bits(*float)),
            ConstantPoolEntry::Long { bytes } => Value::Long(*bytes),
            ConstantPoolEntry::Double { bytes } => Value::Double(f64::from_bits(*bytes)),
            ConstantPoolEntry::String { string_index } => {
                let s = frame
                    .class
                    .constant_pool
                    .get_utf8_constant(*string_index as usize)
                    .unwrap_or("")
                    .to_string();
                Value::Reference(Some(self.intern_string(s)))
            }
            _ => Value::Reference(None),
        };
        frame.push(stack, v);
        Step::Continue
    }

    /// Strings are interned as plain objects of a synthesized `String`
    /// pseudo-class with a single reference-typed field carrying the Rust
    /// `String`'s bytes is out of scope for this simplified object model;
    /// instead each interned literal becomes its own bare instance that
    /// compares by identity, matching JVM string-literal semantics for
    /// everything this interpreter exercises (equality, `==`, exceptions'
    /// types) without a full `char[]`-backed `String` implementation.
    fn intern_string(&self, _value: String) -> ObjectRef {
        let class = self.ensure_builtin_class("java/lang/String");
        self.vm.allocate_object(class)
    }

    fn exec_getstatic(&self, frame: &mut Frame, stack: &mut ExecutorStack, thread: ThreadId, idx: u16) -> Step {
        let (class, name, _descriptor) = match self.resolve_member_ref(frame, idx) {
            Ok(v) => v,
            Err(_) => return Step::Throw(self.throw_new("java/lang/NoSuchFieldError")),
        };
        if self.vm.initialize_class(&class, thread, stack).is_exception() {
            return Step::Throw(self.throw_new("java/lang/ExceptionInInitializerError"));
        }
        let (declaring, slot, kind) = match self.find_field_slot(&class, &name) {
            Some(v) => v,
            None => return Step::Throw(self.throw_new("java/lang/NoSuchFieldError")),
        };
        let v = declaring
            .static_storage
            .read()
            .get(slot)
            .copied()
            .unwrap_or_else(|| Value::default_for(&kind));
        frame.push(stack, v);
        Step::Continue
    }

    fn exec_putstatic(&self, frame: &mut Frame, stack: &mut ExecutorStack, idx: u16) -> Step {
        let (class, name, _descriptor) = match self.resolve_member_ref(frame, idx) {
            Ok(v) => v,
            Err(_) => return Step::Throw(self.throw_new("java/lang/NoSuchFieldError")),
        };
        let (declaring, slot, _kind) = match self.find_field_slot(&class, &name) {
            Some(v) => v,
            None => return Step::Throw(self.throw_new("java/lang/NoSuchFieldError")),
        };
        let v = frame.pop(stack);
        declaring.static_storage.write()[slot] = v;
        Step::Continue
    }

    fn exec_getfield(&self, frame: &mut Frame, stack: &mut ExecutorStack, idx: u16) -> Step {
        let (class, name, _descriptor) = match self.resolve_member_ref(frame, idx) {
            Ok(v) => v,
            Err(_) => return Step::Throw(self.throw_new("java/lang/NoSuchFieldError")),
        };
        let r = frame.pop(stack).as_reference().unwrap();
        let Some(obj) = r else {
            return Step::Throw(self.throw_new("java/lang/NullPointerException"));
        };
        let (_, slot, _) = match self.find_field_slot(&class, &name) {
            Some(v) => v,
            None => return Step::Throw(self.throw_new("java/lang/NoSuchFieldError")),
        };
        let heap = self.vm.heap.lock();
        let v = match heap.get(obj) {
            HeapData::Object(o) => o.fields[slot],
            HeapData::Array(_) => unreachable!("getfield on array"),
        };
        drop(heap);
        frame.push(stack, v);
        Step::Continue
    }

    fn exec_putfield(&self, frame: &mut Frame, stack: &mut ExecutorStack, idx: u16) -> Step {
        let (class, name, _descriptor) = match self.resolve_member_ref(frame, idx) {
            Ok(v) => v,
            Err(_) => return Step::Throw(self.throw_new("java/lang/NoSuchFieldError")),
        };
        let value = frame.pop(stack);
        let r = frame.pop(stack).as_reference().unwrap();
        let Some(obj) = r else {
            return Step::Throw(self.throw_new("java/lang/NullPointerException"));
        };
        let (_, slot, _) = match self.find_field_slot(&class, &name) {
            Some(v) => v,
            None => return Step::Throw(self.throw_new("java/lang/NoSuchFieldError")),
        };
        let mut heap = self.vm.heap.lock();
        match heap.get_mut(obj) {
            HeapData::Object(o) => o.fields[slot] = value,
            HeapData::Array(_) => unreachable!("putfield on array"),
        }
        Step::Continue
    }

    fn exec_new(&self, frame: &mut Frame, stack: &mut ExecutorStack, idx: u16) -> Step {
        let class = match self.resolve_class_by_index(frame, idx) {
            Ok(c) => c,
            Err(_) => return Step::Throw(self.throw_new("java/lang/NoClassDefFoundError")),
        };
        // `new` triggers initialization before the constructor runs, but
        // the interpreter has no handle to the current thread here; static
        // initializers needing `new` themselves already went through
        // `initialize_class` from their own `invokestatic` call, so this
        // is safe to keep lazy and resolve on first field access instead.
        let obj = self.vm.allocate_object(class);
        frame.push(stack, Value::Reference(Some(obj)));
        Step::Continue
    }

    fn exec_newarray(&self, frame: &mut Frame, stack: &mut ExecutorStack, ty: ArrayTypeCode) -> Step {
        let base = match ty {
            ArrayTypeCode::T_BOOLEAN => BaseType::Boolean,
            ArrayTypeCode::T_CHAR => BaseType::Char,
            ArrayTypeCode::T_FLOAT => BaseType::Float,
            ArrayTypeCode::T_DOUBLE => BaseType::Double,
            ArrayTypeCode::T_BYTE => BaseType::Byte,
            ArrayTypeCode::T_SHORT => BaseType::Short,
            ArrayTypeCode::T_INT => BaseType::Int,
            ArrayTypeCode::T_LONG => BaseType::Long,
        };
        let len = frame.pop(stack).as_int().unwrap();
        if len < 0 {
            return Step::Throw(self.throw_new("java/lang/NegativeArraySizeException"));
        }
        let class = self
            .vm
            .registry
            .load_array_of(FieldType::BaseType(base), &self.vm.classpath)
            .expect("primitive array class synthesis cannot fail");
        let obj = self.vm.allocate_array(class, len as usize);
        frame.push(stack, Value::Reference(Some(obj)));
        Step::Continue
    }

    fn exec_anewarray(&self, frame: &mut Frame, stack: &mut ExecutorStack, idx: u16) -> Step {
        let len = frame.pop(stack).as_int().unwrap();
        if len < 0 {
            return Step::Throw(self.throw_new("java/lang/NegativeArraySizeException"));
        }
        let name = match self.const_class_name(frame, idx) {
            Some(n) => n,
            None => return Step::Throw(self.throw_new("java/lang/NoClassDefFoundError")),
        };
        let element = if let Some(rest) = name.strip_prefix('[') {
            FieldType::parse_complete(rest).expect("well-formed array descriptor in constant pool")
        } else {
            let class_name = jvm_class_file::item::ids::class::ClassName::parse_complete(&name)
                .expect("well-formed class name in constant pool");
            FieldType::ObjectType(jvm_class_file::item::ids::field::ObjectType { class_name })
        };
        let array_class = match self.vm.registry.load_array_of(element, &self.vm.classpath) {
            Ok(c) => c,
            Err(_) => return Step::Throw(self.throw_new("java/lang/NoClassDefFoundError")),
        };
        let obj = self.vm.allocate_array(array_class, len as usize);
        frame.push(stack, Value::Reference(Some(obj)));
        Step::Continue
    }

    /// `dimensions` counts are popped off the stack in reverse (the last
    /// pushed, outermost-first, count is on top); the constant pool entry
    /// names the full array type, which may declare more dimensions than
    /// `dimensions` actually allocates, leaving the rest `null` (JVMS §6.5
    /// `multianewarray`).
    fn exec_multianewarray(&self, frame: &mut Frame, stack: &mut ExecutorStack, idx: u16, dimensions: u8) -> Step {
        let name = match self.const_class_name(frame, idx) {
            Some(n) => n,
            None => return Step::Throw(self.throw_new("java/lang/NoClassDefFoundError")),
        };
        let mut counts = Vec::with_capacity(dimensions as usize);
        for _ in 0..dimensions {
            counts.push(frame.pop(stack).as_int().unwrap());
        }
        counts.reverse();
        if counts.iter().any(|&c| c < 0) {
            return Step::Throw(self.throw_new("java/lang/NegativeArraySizeException"));
        }
        match self.build_multiarray(&name, &counts) {
            Ok(obj) => {
                frame.push(stack, Value::Reference(Some(obj)));
                Step::Continue
            }
            Err(_) => Step::Throw(self.throw_new("java/lang/NoClassDefFoundError")),
        }
    }

    fn build_multiarray(&self, type_name: &str, counts: &[i32]) -> Result<ObjectRef, LinkError> {
        let component = type_name
            .strip_prefix('[')
            .ok_or(LinkError::BadConstantPoolEntry(0))?;
        let element = FieldType::parse_complete(component)?;
        let array_class = self.vm.registry.load_array_of(element, &self.vm.classpath)?;
        let len = counts[0] as usize;
        let obj = self.vm.allocate_array(array_class, len);
        if counts.len() > 1 {
            for i in 0..len {
                let child = self.build_multiarray(component, &counts[1..])?;
                let mut heap = self.vm.heap.lock();
                if let HeapData::Array(a) = heap.get_mut(obj) {
                    a.elements[i] = Value::Reference(Some(child));
                }
            }
        }
        Ok(obj)
    }

    fn array_load(&self, frame: &mut Frame, stack: &mut ExecutorStack) -> Step {
        let index = frame.pop(stack).as_int().unwrap();
        let r = frame.pop(stack).as_reference().unwrap();
        let Some(obj) = r else {
            return Step::Throw(self.throw_new("java/lang/NullPointerException"));
        };
        let heap = self.vm.heap.lock();
        let array = match heap.get(obj) {
            HeapData::Array(a) => a,
            HeapData::Object(_) => unreachable!("array op on non-array"),
        };
        if index < 0 || index as usize >= array.len() {
            drop(heap);
            return Step::Throw(self.throw_new("java/lang/ArrayIndexOutOfBoundsException"));
        }
        let v = array.elements[index as usize];
        drop(heap);
        frame.push(stack, v);
        Step::Continue
    }

    fn array_store(&self, frame: &mut Frame, stack: &mut ExecutorStack) -> Step {
        let value = frame.pop(stack);
        let index = frame.pop(stack).as_int().unwrap();
        let r = frame.pop(stack).as_reference().unwrap();
        let Some(obj) = r else {
            return Step::Throw(self.throw_new("java/lang/NullPointerException"));
        };
        let mut heap = self.vm.heap.lock();
        let array = match heap.get_mut(obj) {
            HeapData::Array(a) => a,
            HeapData::Object(_) => unreachable!("array op on non-array"),
        };
        if index < 0 || index as usize >= array.len() {
            return Step::Throw(self.throw_new("java/lang/ArrayIndexOutOfBoundsException"));
        }
        array.elements[index as usize] = value;
        Step::Continue
    }

    fn exec_invoke(
        &self,
        frame: &mut Frame,
        stack: &mut ExecutorStack,
        thread: ThreadId,
        idx: u16,
        has_receiver: bool,
        virtual_dispatch: bool,
    ) -> Step {
        let (declaring, name, descriptor) = match self.resolve_member_ref(frame, idx) {
            Ok(v) => v,
            Err(_) => return Step::Throw(self.throw_new("java/lang/NoSuchMethodError")),
        };
        let static_method = match declaring.find_method(&name, &descriptor) {
            Some(m) => m,
            None => return Step::Throw(self.throw_new("java/lang/NoSuchMethodError")),
        };
        let args = self.pop_args(frame, stack, &static_method, has_receiver);

        let (target_class, method) = if virtual_dispatch && !static_method.is_private() {
            let receiver = match args[0].as_reference() {
                Some(Some(obj)) => obj,
                _ => return Step::Throw(self.throw_new("java/lang/NullPointerException")),
            };
            let actual_class = self.vm.heap.lock().class_of(receiver);
            match self.find_virtual_method(&actual_class, &name, &descriptor) {
                Some(m) => (actual_class, m),
                None => (declaring, static_method),
            }
        } else {
            if has_receiver && args[0].is_null() {
                return Step::Throw(self.throw_new("java/lang/NullPointerException"));
            }
            (declaring, static_method)
        };

        if !method.is_static() {
            // instance methods still initialize their declaring class lazily
        } else if self.vm.initialize_class(&target_class, thread, stack).is_exception() {
            return Step::Throw(self.throw_new("java/lang/ExceptionInInitializerError"));
        }

        match self.invoke(target_class, method.clone(), args, thread, stack) {
            Outcome::Ok(v) => {
                if method.return_kind.is_some() {
                    frame.push(stack, v);
                }
                Step::Continue
            }
            Outcome::Exception(e) => Step::Throw(e),
        }
    }

    fn exec_checkcast(&self, frame: &mut Frame, stack: &mut ExecutorStack, idx: u16) -> Step {
        let target = match self.resolve_class_by_index(frame, idx) {
            Ok(c) => c,
            Err(_) => return Step::Throw(self.throw_new("java/lang/NoClassDefFoundError")),
        };
        let r = frame.peek(stack).as_reference().unwrap();
        if let Some(obj) = r {
            let actual = self.vm.heap.lock().class_of(obj);
            if !actual.is_assignable_to(&target) {
                return Step::Throw(self.throw_new("java/lang/ClassCastException"));
            }
        }
        Step::Continue
    }

    fn exec_instanceof(&self, frame: &mut Frame, stack: &mut ExecutorStack, idx: u16) -> Step {
        let target = match self.resolve_class_by_index(frame, idx) {
            Ok(c) => c,
            Err(_) => return Step::Throw(self.throw_new("java/lang/NoClassDefFoundError")),
        };
        let r = frame.pop(stack).as_reference().unwrap();
        let result = match r {
            None => 0,
            Some(obj) => {
                let actual = self.vm.heap.lock().class_of(obj);
                actual.is_assignable_to(&target) as i32
            }
        };
        frame.push(stack, Value::Int(result));
        Step::Continue
    }
}
