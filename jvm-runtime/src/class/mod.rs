//! Type registry data model: `Class`, its members, and the resolved
//! constant pool cache (spec §3, §4.2, §4.4).

pub mod registry;

use std::sync::atomic::{AtomicU32, Ordering};

use jvm_class_file::item::{
    constant_pool::ConstantPool,
    fields::FieldAccessFlags,
    ids::field::{BaseType, FieldType},
    methods::MethodAccessFlags,
    opcodes::InstructionList,
};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use crate::object::ObjectRef;
use crate::value::Value;

pub type ClassRef = Arc<Class>;

/// Identifies the class loader that defined a class; bootstrap is the only
/// loader this VM implements (spec's scope excludes user-defined loaders),
/// but the field exists so the registry key matches spec §4.2's
/// `(defining_loader, name)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoaderId {
    Bootstrap,
}

/// The primitive element kind stored in a field/array slot, derived from a
/// field descriptor. Kept separate from `jvm_class_file`'s `FieldType` (which
/// also carries class/array names) because value storage only needs to know
/// the slot shape, not the exact reference type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Reference,
}

impl FieldKind {
    pub fn category(&self) -> u8 {
        match self {
            FieldKind::Long | FieldKind::Double => 2,
            _ => 1,
        }
    }

    pub fn from_field_type(ty: &FieldType) -> Self {
        match ty {
            FieldType::BaseType(BaseType::Boolean) => FieldKind::Boolean,
            FieldType::BaseType(BaseType::Byte) => FieldKind::Byte,
            FieldType::BaseType(BaseType::Char) => FieldKind::Char,
            FieldType::BaseType(BaseType::Short) => FieldKind::Short,
            FieldType::BaseType(BaseType::Int) => FieldKind::Int,
            FieldType::BaseType(BaseType::Long) => FieldKind::Long,
            FieldType::BaseType(BaseType::Float) => FieldKind::Float,
            FieldType::BaseType(BaseType::Double) => FieldKind::Double,
            FieldType::ObjectType(_) | FieldType::ArrayType(_) => FieldKind::Reference,
        }
    }
}

/// A declared field, assigned a stable slot index within the defining
/// class's instance or static storage (spec §3: "Offset ... assigned during
/// preparation").
#[derive(Debug)]
pub struct Field {
    pub name: String,
    pub descriptor: FieldType,
    pub kind: FieldKind,
    pub access_flags: FieldAccessFlags,
    pub slot: usize,
    pub constant_value: Option<Value>,
}

impl Field {
    pub fn is_static(&self) -> bool {
        self.access_flags.contains(FieldAccessFlags::ACC_STATIC)
    }
}

/// A declared method. `code` is `None` for abstract and native methods.
#[derive(Debug)]
pub struct Method {
    pub name: String,
    pub descriptor_raw: String,
    pub parameter_kinds: Vec<FieldKind>,
    pub return_kind: Option<FieldKind>,
    pub access_flags: MethodAccessFlags,
    pub max_stack: u16,
    pub max_locals: u16,
    pub code: Option<InstructionList>,
    pub exception_table: Vec<ExceptionHandler>,
    /// Populated on first successful native-call-interface build (§4.9);
    /// `None` until then even for native methods.
    pub native_shape: Mutex<Option<crate::native::CallShape>>,
}

impl Method {
    pub fn is_static(&self) -> bool {
        self.access_flags.contains(MethodAccessFlags::ACC_STATIC)
    }
    pub fn is_native(&self) -> bool {
        self.access_flags.contains(MethodAccessFlags::ACC_NATIVE)
    }
    pub fn is_abstract(&self) -> bool {
        self.access_flags.contains(MethodAccessFlags::ACC_ABSTRACT)
    }
    pub fn is_private(&self) -> bool {
        self.access_flags.contains(MethodAccessFlags::ACC_PRIVATE)
    }
    pub fn argument_slots(&self) -> usize {
        self.parameter_kinds.iter().map(|k| k.category() as usize).sum()
    }
}

#[derive(Debug, Clone)]
pub struct ExceptionHandler {
    pub start_pc: u16,
    pub end_pc: u16,
    pub handler_pc: u16,
    pub catch_type: Option<u16>,
}

/// What `allocate`/`resolve` needs to know about a class at large: whether
/// it's an ordinary class, an interface (no instances), a primitive
/// "pseudo-class" used as the element type of a primitive array, or an
/// array class synthesized on demand (spec §4.2's array/primitive
/// synthesis paths).
#[derive(Debug)]
pub enum ClassKind {
    Ordinary,
    Interface,
    Primitive,
    Array { element: FieldType },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassState {
    Raw,
    Linked,
    Initializing,
    Initialized,
    Erroneous,
}

/// A loaded type. Everything that can change after `Class` is first built
/// (linkage results, static storage, the resolved constant-pool cache,
/// lifecycle state) lives behind a lock; the rest is fixed at decode time.
pub struct Class {
    pub name: String,
    pub source_file: Option<String>,
    pub defining_loader: LoaderId,
    pub access_flags: jvm_class_file::item::file::ClassAccessFlags,
    pub kind: ClassKind,
    pub super_class: RwLock<Option<ClassRef>>,
    pub interfaces: RwLock<Vec<ClassRef>>,
    pub constant_pool: ConstantPool,
    pub runtime_constant_pool: RwLock<Vec<Option<ResolvedConstant>>>,
    pub declared_fields: Vec<Field>,
    pub declared_methods: Vec<Arc<Method>>,
    pub static_storage: RwLock<Vec<Value>>,
    pub instance_size: AtomicU32,
    pub state: RwLock<ClassState>,
    /// Guards the `Initializing` transition so concurrent `initialize`
    /// callers block rather than race (spec §4.2).
    pub init_lock: Mutex<()>,
}

impl std::fmt::Debug for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("state", &*self.state.read())
            .finish()
    }
}

impl Class {
    pub fn state(&self) -> ClassState {
        *self.state.read()
    }

    pub fn instance_size(&self) -> usize {
        self.instance_size.load(Ordering::Acquire) as usize
    }

    pub fn find_method(&self, name: &str, descriptor: &str) -> Option<Arc<Method>> {
        self.declared_methods
            .iter()
            .find(|m| m.name == name && m.descriptor_raw == descriptor)
            .cloned()
    }

    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.declared_fields.iter().find(|f| f.name == name)
    }

    pub fn is_subclass_of(self: &ClassRef, other: &ClassRef) -> bool {
        let mut current = Some(self.clone());
        while let Some(c) = current {
            if Arc::ptr_eq(&c, other) {
                return true;
            }
            current = c.super_class.read().clone();
        }
        false
    }

    pub fn implements(self: &ClassRef, iface: &ClassRef) -> bool {
        let mut current = Some(self.clone());
        while let Some(c) = current {
            for i in c.interfaces.read().iter() {
                if Arc::ptr_eq(i, iface) || i.implements(iface) {
                    return true;
                }
            }
            current = c.super_class.read().clone();
        }
        false
    }

    pub fn is_assignable_to(self: &ClassRef, other: &ClassRef) -> bool {
        if Arc::ptr_eq(self, other) {
            return true;
        }
        if matches!(other.kind, ClassKind::Interface) {
            self.implements(other)
        } else {
            self.is_subclass_of(other)
        }
    }
}

/// The lazily-materialized form of a constant pool entry (spec §4.4): the
/// raw class-file entry is resolved into a pointer, interned string, or
/// typed value on first use and memoized here.
#[derive(Debug, Clone)]
pub enum ResolvedConstant {
    Class(ClassRef),
    Field { class: ClassRef, field_slot: usize },
    Method { class: ClassRef, method: Arc<Method> },
    InterfaceMethod { class: ClassRef, method: Arc<Method> },
    String(ObjectRef),
    Integer(i32),
    Float(f32),
    Long(i64),
    Double(f64),
    Utf8(String),
}
