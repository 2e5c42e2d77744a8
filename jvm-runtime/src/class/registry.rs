//! Type registry / class loader (spec §4.2): turns class bytes into a
//! `Class`, resolves the `raw → linked` transition (superclass and
//! interfaces, then field/static layout), and synthesizes array and
//! primitive pseudo-classes on demand. Initialization (`linked →
//! initializing → initialized`) is driven by `Vm`, which is the first
//! piece of this crate that also knows how to run bytecode for `<clinit>`.

use std::path::PathBuf;
use std::sync::atomic::AtomicU32;
use std::sync::Arc;

use ahash::AHashMap;
use jvm_class_file::item::{
    attribute_info::Attributes,
    constant_pool::ConstantPoolEntry,
    file::ClassFile,
    ids::{
        field::{BaseType, FieldType},
        method::{MethodDescriptor, ReturnDescriptor},
        Descriptor,
    },
    opcodes::InstructionList,
    ClassFileItem,
};
use parking_lot::{Mutex, RwLock};

use crate::class::{
    Class, ClassKind, ClassRef, ClassState, ExceptionHandler, Field, FieldKind, LoaderId, Method,
};
use crate::error::LinkError;

/// Where `.class` files are looked up by binary name (spec §6's
/// `-classpath`): an ordered list of directories, JVMS-style, searched in
/// order. No jar support — this VM only ever reads exploded class trees.
#[derive(Debug, Clone, Default)]
pub struct ClassPath(pub Vec<PathBuf>);

impl ClassPath {
    pub fn find(&self, binary_name: &str) -> Option<PathBuf> {
        for dir in &self.0 {
            let candidate = dir.join(format!("{binary_name}.class"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }
}

#[derive(Default)]
pub struct ClassRegistry {
    classes: RwLock<AHashMap<String, ClassRef>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<ClassRef> {
        self.classes.read().get(name).cloned()
    }

    pub fn all(&self) -> Vec<ClassRef> {
        self.classes.read().values().cloned().collect()
    }

    /// Loads, links and returns the class named `name`, or the already
    /// registered one if a previous call completed first (spec §4.2: the
    /// registry is keyed by `(defining_loader, name)`, and this VM only
    /// has the bootstrap loader).
    pub fn load_class(&self, name: &str, classpath: &ClassPath) -> Result<ClassRef, LinkError> {
        if let Some(c) = self.lookup(name) {
            return Ok(c);
        }
        if name.starts_with('[') {
            let element = FieldType::parse_complete(&name[1..])
                .map_err(LinkError::ClassFile)?;
            return self.load_array_of(element, classpath);
        }
        match classpath.find(name) {
            Some(path) => {
                let bytes = std::fs::read(&path).map_err(|e| LinkError::ClassFile(e.into()))?;
                self.define_class(&bytes, classpath)
            }
            // `java/lang/Object` is the one class every other class transitively
            // needs (every superclass chain terminates there) but this VM
            // ships no real `rt.jar`; synthesize it rather than fail every
            // program that doesn't bundle its own copy.
            None if name == "java/lang/Object" => Ok(self.synthesize_bare_class(name, None)),
            None => Err(LinkError::ClassNotFound(name.to_string())),
        }
    }

    pub fn define_class(&self, bytes: &[u8], classpath: &ClassPath) -> Result<ClassRef, LinkError> {
        let mut cursor = std::io::Cursor::new(bytes);
        let mut stream = jvm_class_file::stream::ClassFileStream::new(&mut cursor);
        let file = ClassFile::read_from_stream(&mut stream, None)?;

        let name = file.constant_pool.get_utf8_constant(class_name_index(
            &file.constant_pool,
            file.this_class,
        ))?
        .to_string();

        if self.lookup(&name).is_some() {
            return Err(LinkError::DuplicateClass(name));
        }

        let kind = if file.access_flags.contains(
            jvm_class_file::item::file::ClassAccessFlags::ACC_INTERFACE,
        ) {
            ClassKind::Interface
        } else {
            ClassKind::Ordinary
        };

        let super_class = if file.super_class == 0 {
            None
        } else {
            let super_name = file
                .constant_pool
                .get_utf8_constant(class_name_index(&file.constant_pool, file.super_class))?;
            let super_class = self.load_class(super_name, classpath)?;
            if super_class
                .access_flags
                .contains(jvm_class_file::item::file::ClassAccessFlags::ACC_FINAL)
            {
                return Err(LinkError::FinalSuperclass {
                    class: name,
                    super_name: super_name.to_string(),
                });
            }
            Some(super_class)
        };
        if super_class.is_none() && name != "java/lang/Object" {
            return Err(LinkError::MissingSuperclass { class: name });
        }

        let mut interfaces = Vec::with_capacity(file.interfaces.len());
        for idx in &file.interfaces {
            let iface_name = file
                .constant_pool
                .get_utf8_constant(class_name_index(&file.constant_pool, *idx))?;
            interfaces.push(self.load_class(iface_name, classpath)?);
        }

        let source_file = find_source_file(&file.attributes, &file.constant_pool)?;

        let mut instance_slot = super_class
            .as_ref()
            .map(|c| instance_field_count(c))
            .unwrap_or(0);
        let mut static_slot = 0usize;
        let mut static_defaults = Vec::new();
        let mut declared_fields = Vec::with_capacity(file.fields.len());
        for f in &file.fields {
            let fname = file.constant_pool.get_utf8_constant(f.name_index as usize)?.to_string();
            let descriptor_raw = file
                .constant_pool
                .get_utf8_constant(f.descriptor_index as usize)?;
            let descriptor =
                FieldType::parse_complete(descriptor_raw).map_err(LinkError::ClassFile)?;
            let kind = FieldKind::from_field_type(&descriptor);
            let is_static = f
                .access_flags
                .contains(jvm_class_file::item::fields::FieldAccessFlags::ACC_STATIC);
            let slot = if is_static {
                let s = static_slot;
                static_slot += 1;
                static_defaults.push(crate::value::Value::default_for(&kind));
                s
            } else {
                let s = instance_slot;
                instance_slot += 1;
                s
            };
            let constant_value = find_constant_value(&f.attributes, &file.constant_pool, kind)?;
            if is_static {
                if let Some(v) = constant_value {
                    static_defaults[slot] = v;
                }
            }
            declared_fields.push(Field {
                name: fname,
                descriptor,
                kind,
                access_flags: f.access_flags,
                slot,
                constant_value,
            });
        }

        let mut declared_methods = Vec::with_capacity(file.methods.len());
        for m in &file.methods {
            let mname = file.constant_pool.get_utf8_constant(m.name_index as usize)?.to_string();
            let descriptor_raw = file
                .constant_pool
                .get_utf8_constant(m.descriptor_index as usize)?
                .to_string();
            let descriptor = MethodDescriptor::parse_complete(&descriptor_raw)
                .map_err(LinkError::ClassFile)?;
            let parameter_kinds = descriptor
                .parameters
                .iter()
                .map(FieldKind::from_field_type)
                .collect();
            let return_kind = match descriptor.return_desc {
                ReturnDescriptor::Void => None,
                ReturnDescriptor::Field(ref ty) => Some(FieldKind::from_field_type(ty)),
            };
            let (max_stack, max_locals, code, exception_table) =
                find_code(&m.attributes)?;
            declared_methods.push(Arc::new(Method {
                name: mname,
                descriptor_raw,
                parameter_kinds,
                return_kind,
                access_flags: m.access_flags,
                max_stack,
                max_locals,
                code,
                exception_table,
                native_shape: Mutex::new(None),
            }));
        }

        let class = Arc::new(Class {
            name: name.clone(),
            source_file,
            defining_loader: LoaderId::Bootstrap,
            access_flags: file.access_flags,
            kind,
            super_class: RwLock::new(super_class),
            interfaces: RwLock::new(interfaces),
            constant_pool: file.constant_pool,
            runtime_constant_pool: RwLock::new(Vec::new()),
            declared_fields,
            declared_methods,
            static_storage: RwLock::new(static_defaults),
            instance_size: AtomicU32::new(instance_slot as u32),
            state: RwLock::new(ClassState::Linked),
            init_lock: Mutex::new(()),
        });

        self.classes.write().insert(name, class.clone());
        Ok(class)
    }

    /// Synthesizes the pseudo-class for a primitive type, used as the
    /// `Class` object backing e.g. `int.class` and as an array's element
    /// class when the element is primitive.
    pub fn load_primitive(&self, base: BaseType) -> ClassRef {
        let name = primitive_name(base).to_string();
        if let Some(c) = self.lookup(&name) {
            return c;
        }
        let class = Arc::new(Class {
            name: name.clone(),
            source_file: None,
            defining_loader: LoaderId::Bootstrap,
            access_flags: jvm_class_file::item::file::ClassAccessFlags::ACC_PUBLIC
                | jvm_class_file::item::file::ClassAccessFlags::ACC_FINAL,
            kind: ClassKind::Primitive,
            super_class: RwLock::new(None),
            interfaces: RwLock::new(Vec::new()),
            constant_pool: jvm_class_file::item::constant_pool::ConstantPool { entries: Vec::new() },
            runtime_constant_pool: RwLock::new(Vec::new()),
            declared_fields: Vec::new(),
            declared_methods: Vec::new(),
            static_storage: RwLock::new(Vec::new()),
            instance_size: AtomicU32::new(0),
            state: RwLock::new(ClassState::Initialized),
            init_lock: Mutex::new(()),
        });
        self.classes.write().insert(name, class.clone());
        class
    }

    /// Synthesizes an array class `[<element descriptor>` on demand. Array
    /// classes are always immediately `Initialized` (spec §4.2: no
    /// `<clinit>` to run) and have `java/lang/Object` as their superclass.
    pub fn load_array_of(&self, element: FieldType, classpath: &ClassPath) -> Result<ClassRef, LinkError> {
        let name = array_descriptor(&element);
        if let Some(c) = self.lookup(&name) {
            return Ok(c);
        }
        let object_class = self.load_class("java/lang/Object", classpath)?;
        let class = Arc::new(Class {
            name: name.clone(),
            source_file: None,
            defining_loader: LoaderId::Bootstrap,
            access_flags: jvm_class_file::item::file::ClassAccessFlags::ACC_PUBLIC,
            kind: ClassKind::Array { element },
            super_class: RwLock::new(Some(object_class)),
            interfaces: RwLock::new(Vec::new()),
            constant_pool: jvm_class_file::item::constant_pool::ConstantPool { entries: Vec::new() },
            runtime_constant_pool: RwLock::new(Vec::new()),
            declared_fields: Vec::new(),
            declared_methods: Vec::new(),
            static_storage: RwLock::new(Vec::new()),
            instance_size: AtomicU32::new(0),
            state: RwLock::new(ClassState::Initialized),
            init_lock: Mutex::new(()),
        });
        self.classes.write().insert(name, class.clone());
        Ok(class)
    }

    /// Synthesizes a bare class with a no-op `<init>()V` and no other
    /// declared members, used for the handful of JDK exception types this
    /// VM can raise on its own when no real classpath entry defines them
    /// (spec §4.8.2's NPE/divide-by-zero/cast faults need *some*
    /// instantiable class to carry) and as a stand-in `java/lang/Object`
    /// when no real one is on the classpath.
    pub fn synthesize_bare_class(&self, name: &str, super_class: Option<ClassRef>) -> ClassRef {
        if let Some(c) = self.lookup(name) {
            return c;
        }
        let mut init_opcodes = InstructionList {
            opcodes: vec![jvm_class_file::item::opcodes::VMOpcode::r#return()],
            byte_to_code: Default::default(),
            code_to_byte: Default::default(),
        };
        init_opcodes.byte_to_code.insert(0, 0);
        init_opcodes.code_to_byte.insert(0, 0);
        let init = Arc::new(Method {
            name: "<init>".to_string(),
            descriptor_raw: "()V".to_string(),
            parameter_kinds: Vec::new(),
            return_kind: None,
            access_flags: jvm_class_file::item::methods::MethodAccessFlags::ACC_PUBLIC,
            max_stack: 0,
            max_locals: 1,
            code: Some(init_opcodes),
            exception_table: Vec::new(),
            native_shape: Mutex::new(None),
        });
        let class = Arc::new(Class {
            name: name.to_string(),
            source_file: None,
            defining_loader: LoaderId::Bootstrap,
            access_flags: jvm_class_file::item::file::ClassAccessFlags::ACC_PUBLIC,
            kind: ClassKind::Ordinary,
            super_class: RwLock::new(super_class),
            interfaces: RwLock::new(Vec::new()),
            constant_pool: jvm_class_file::item::constant_pool::ConstantPool { entries: Vec::new() },
            runtime_constant_pool: RwLock::new(Vec::new()),
            declared_fields: Vec::new(),
            declared_methods: vec![init],
            static_storage: RwLock::new(Vec::new()),
            instance_size: AtomicU32::new(0),
            state: RwLock::new(ClassState::Initialized),
            init_lock: Mutex::new(()),
        });
        self.classes.write().insert(name.to_string(), class.clone());
        class
    }
}

fn instance_field_count(class: &ClassRef) -> usize {
    class.instance_size()
}

fn class_name_index(
    cp: &jvm_class_file::item::constant_pool::ConstantPool,
    index: u16,
) -> usize {
    match cp.get_constant(index as usize) {
        ConstantPoolEntry::Class { name_index } => *name_index as usize,
        _ => index as usize,
    }
}

fn primitive_name(base: BaseType) -> &'static str {
    match base {
        BaseType::Byte => "byte",
        BaseType::Char => "char",
        BaseType::Double => "double",
        BaseType::Float => "float",
        BaseType::Int => "int",
        BaseType::Long => "long",
        BaseType::Short => "short",
        BaseType::Boolean => "boolean",
    }
}

fn class_name_to_internal(name: &jvm_class_file::item::ids::class::ClassName) -> String {
    let mut out = String::new();
    for seg in &name.package {
        out.push_str(seg);
        out.push('/');
    }
    out.push_str(&name.class_name);
    let mut inner = name.inner_class.as_deref();
    while let Some(i) = inner {
        out.push('$');
        out.push_str(&i.class_name);
        inner = i.inner_class.as_deref();
    }
    out
}

fn array_descriptor(element: &FieldType) -> String {
    fn write(ty: &FieldType, out: &mut String) {
        match ty {
            FieldType::BaseType(b) => out.push(match b {
                BaseType::Byte => 'B',
                BaseType::Char => 'C',
                BaseType::Double => 'D',
                BaseType::Float => 'F',
                BaseType::Int => 'I',
                BaseType::Long => 'J',
                BaseType::Short => 'S',
                BaseType::Boolean => 'Z',
            }),
            FieldType::ObjectType(o) => {
                out.push('L');
                out.push_str(&class_name_to_internal(&o.class_name));
                out.push(';');
            }
            FieldType::ArrayType(inner) => {
                out.push('[');
                write(&inner.0, out);
            }
        }
    }
    let mut out = String::from("[");
    write(element, &mut out);
    out
}

fn find_source_file(
    attrs: &jvm_class_file::item::attribute_info::AttributesCollection,
    cp: &jvm_class_file::item::constant_pool::ConstantPool,
) -> Result<Option<String>, LinkError> {
    for a in attrs.collection.values().flatten() {
        if let Attributes::SourceFile { sourcefile_index } = a {
            return Ok(Some(cp.get_utf8_constant(*sourcefile_index as usize)?.to_string()));
        }
    }
    Ok(None)
}

fn find_constant_value(
    attrs: &jvm_class_file::item::attribute_info::AttributesCollection,
    cp: &jvm_class_file::item::constant_pool::ConstantPool,
    kind: FieldKind,
) -> Result<Option<crate::value::Value>, LinkError> {
    for a in attrs.collection.values().flatten() {
        if let Attributes::ConstantValue { constantvalue_index } = a {
            let v = match cp.get_constant(*constantvalue_index as usize) {
                ConstantPoolEntry::Integer { bytes } => match kind {
                    FieldKind::Boolean => crate::value::Value::Boolean(*bytes != 0),
                    FieldKind::Byte => crate::value::Value::Byte(*bytes as i8),
                    FieldKind::Char => crate::value::Value::Char(*bytes as u16),
                    FieldKind::Short => crate::value::Value::Short(*bytes as i16),
                    _ => crate::value::Value::Int(*bytes),
                },
                ConstantPoolEntry::Long { bytes } => crate::value::Value::Long(*bytes),
                ConstantPoolEntry::Float { float } => crate::value::Value::Float(f32::from_bits(*float)),
                ConstantPoolEntry::Double { bytes } => crate::value::Value::Double(f64::from_bits(*bytes)),
                ConstantPoolEntry::String { .. } => return Ok(None), // interned lazily, not at link time
                _ => return Err(LinkError::BadConstantPoolEntry(*constantvalue_index as usize)),
            };
            return Ok(Some(v));
        }
    }
    Ok(None)
}

fn find_code(
    attrs: &jvm_class_file::item::attribute_info::AttributesCollection,
) -> Result<(u16, u16, Option<InstructionList>, Vec<ExceptionHandler>), LinkError> {
    for a in attrs.collection.values().flatten() {
        if let Attributes::Code {
            max_stack,
            max_locals,
            code,
            exception_table,
            ..
        } = a
        {
            let handlers = exception_table
                .iter()
                .map(|e| ExceptionHandler {
                    start_pc: *e.pc_range.start(),
                    end_pc: *e.pc_range.end(),
                    handler_pc: e.handler_pc,
                    catch_type: if e.catch_type == 0 { None } else { Some(e.catch_type) },
                })
                .collect();
            return Ok((*max_stack, *max_locals, Some(code.clone()), handlers));
        }
    }
    Ok((0, 0, None, Vec::new()))
}
