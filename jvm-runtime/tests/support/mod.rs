//! Hand-assembled class file bytes for the end-to-end scenarios in
//! spec.md §8. No `javac` dependency: every fixture is built byte by byte
//! against the JVMS §4 layout so these tests stay hermetic.

/// A constant pool under construction. Entries are pushed in order and the
/// 1-based index of each push is handed back so callers can wire up
/// `Methodref`/`NameAndType`/`Class` cross-references.
pub struct ConstantPoolBuilder {
    entries: Vec<u8>,
    count: u16,
    pub code_index: u16,
}

impl ConstantPoolBuilder {
    pub fn new() -> Self {
        let mut b = Self { entries: Vec::new(), count: 0, code_index: 0 };
        b.code_index = b.utf8("Code");
        b
    }

    fn push(&mut self, bytes: Vec<u8>) -> u16 {
        self.count += 1;
        self.entries.extend(bytes);
        self.count
    }

    pub fn utf8(&mut self, s: &str) -> u16 {
        let mut bytes = vec![1u8]; // CONSTANT_Utf8
        bytes.extend((s.len() as u16).to_be_bytes());
        bytes.extend(s.as_bytes());
        self.push(bytes)
    }

    pub fn class(&mut self, name_index: u16) -> u16 {
        let mut bytes = vec![7u8]; // CONSTANT_Class
        bytes.extend(name_index.to_be_bytes());
        self.push(bytes)
    }

    pub fn class_named(&mut self, name: &str) -> u16 {
        let name_index = self.utf8(name);
        self.class(name_index)
    }

    pub fn name_and_type(&mut self, name_index: u16, descriptor_index: u16) -> u16 {
        let mut bytes = vec![12u8]; // CONSTANT_NameAndType
        bytes.extend(name_index.to_be_bytes());
        bytes.extend(descriptor_index.to_be_bytes());
        self.push(bytes)
    }

    pub fn methodref(&mut self, class_index: u16, name_and_type_index: u16) -> u16 {
        let mut bytes = vec![10u8]; // CONSTANT_Methodref
        bytes.extend(class_index.to_be_bytes());
        bytes.extend(name_and_type_index.to_be_bytes());
        self.push(bytes)
    }

    pub fn fieldref(&mut self, class_index: u16, name_and_type_index: u16) -> u16 {
        let mut bytes = vec![9u8]; // CONSTANT_Fieldref
        bytes.extend(class_index.to_be_bytes());
        bytes.extend(name_and_type_index.to_be_bytes());
        self.push(bytes)
    }

    fn finish(self) -> (u16, Vec<u8>) {
        (self.count + 1, self.entries) // constant_pool_count is entries + 1
    }
}

pub struct MethodSpec {
    pub access_flags: u16,
    pub name_index: u16,
    pub descriptor_index: u16,
    pub max_stack: u16,
    pub max_locals: u16,
    pub code: Vec<u8>,
    /// (start_pc, end_pc, handler_pc, catch_type); catch_type 0 = catch-all.
    pub exception_table: Vec<(u16, u16, u16, u16)>,
}

pub struct FieldSpec {
    pub access_flags: u16,
    pub name_index: u16,
    pub descriptor_index: u16,
}

/// Builds a minimal one-class class file: no superinterfaces, super class
/// always `java/lang/Object` (the registry's bootstrap loader synthesizes a
/// bare one when no real classpath entry provides it).
pub fn build_class(cp: ConstantPoolBuilder, class_name: &str, methods: Vec<MethodSpec>) -> Vec<u8> {
    build_class_with_fields(cp, class_name, Vec::new(), methods)
}

pub fn build_class_with_fields(
    mut cp: ConstantPoolBuilder,
    class_name: &str,
    fields: Vec<FieldSpec>,
    methods: Vec<MethodSpec>,
) -> Vec<u8> {
    let code_index = cp.code_index;
    let this_class = cp.class_named(class_name);
    let super_class = cp.class_named("java/lang/Object");

    let mut out = Vec::new();
    out.extend(0xCAFEBABEu32.to_be_bytes());
    out.extend(0u16.to_be_bytes()); // minor
    out.extend(52u16.to_be_bytes()); // major

    let (cp_count, cp_bytes) = cp.finish();
    out.extend(cp_count.to_be_bytes());
    out.extend(cp_bytes);

    out.extend(0x0021u16.to_be_bytes()); // ACC_PUBLIC | ACC_SUPER
    out.extend(this_class.to_be_bytes());
    out.extend(super_class.to_be_bytes());
    out.extend(0u16.to_be_bytes()); // interfaces_count

    out.extend((fields.len() as u16).to_be_bytes());
    for f in &fields {
        out.extend(f.access_flags.to_be_bytes());
        out.extend(f.name_index.to_be_bytes());
        out.extend(f.descriptor_index.to_be_bytes());
        out.extend(0u16.to_be_bytes()); // attributes_count
    }

    out.extend((methods.len() as u16).to_be_bytes());
    for m in &methods {
        out.extend(m.access_flags.to_be_bytes());
        out.extend(m.name_index.to_be_bytes());
        out.extend(m.descriptor_index.to_be_bytes());
        out.extend(1u16.to_be_bytes()); // attributes_count: just Code

        let mut info = Vec::new();
        info.extend(m.max_stack.to_be_bytes());
        info.extend(m.max_locals.to_be_bytes());
        info.extend((m.code.len() as u32).to_be_bytes());
        info.extend(&m.code);
        info.extend((m.exception_table.len() as u16).to_be_bytes());
        for (start, end, handler, catch) in &m.exception_table {
            info.extend(start.to_be_bytes());
            info.extend(end.to_be_bytes());
            info.extend(handler.to_be_bytes());
            info.extend(catch.to_be_bytes());
        }
        info.extend(0u16.to_be_bytes()); // Code's own attributes_count

        out.extend(code_index.to_be_bytes());
        out.extend((info.len() as u32).to_be_bytes());
        out.extend(info);
    }

    out.extend(0u16.to_be_bytes()); // class attributes_count
    out
}
