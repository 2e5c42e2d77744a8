//! Native-call bridge (spec §4.9): maps a native method's descriptor to an
//! ABI call shape, derives its escaped native entry-point name, and caches
//! that shape on the `Method` the first time it's called (§10.6, grounded
//! on ColdSpot's `NativeCall.cpp`).

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::class::{FieldKind, Method};
use crate::error::Outcome;
use crate::thread::ThreadId;
use crate::value::Value;

/// The plain-C type a `Value` maps to across the native boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiType {
    Jboolean,
    Jbyte,
    Jchar,
    Jshort,
    Jint,
    Jlong,
    Jfloat,
    Jdouble,
    Jobject,
    Void,
}

impl From<FieldKind> for AbiType {
    fn from(k: FieldKind) -> Self {
        match k {
            FieldKind::Boolean => AbiType::Jboolean,
            FieldKind::Byte => AbiType::Jbyte,
            FieldKind::Char => AbiType::Jchar,
            FieldKind::Short => AbiType::Jshort,
            FieldKind::Int => AbiType::Jint,
            FieldKind::Long => AbiType::Jlong,
            FieldKind::Float => AbiType::Jfloat,
            FieldKind::Double => AbiType::Jdouble,
            FieldKind::Reference => AbiType::Jobject,
        }
    }
}

/// The call shape built once per method and memoized on `Method`
/// (`Method::native_shape`): the ABI parameter list plus the derived
/// native entry-point name.
#[derive(Debug, Clone)]
pub struct CallShape {
    pub entry_point: String,
    pub parameters: Vec<AbiType>,
    pub return_type: AbiType,
}

/// Escapes a class/method/descriptor triple into a JNI-style native symbol
/// name: `/` becomes `_`, `_` is doubled, unicode escapes to `_0xxxx`,
/// everything else is kept as-is. Overload-disambiguating descriptor
/// suffixes are out of scope (this VM does not overload natives).
pub fn derive_native_name(class_name: &str, method_name: &str) -> String {
    fn escape(into: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '/' => into.push('_'),
                '_' => into.push_str("_1"),
                ';' => into.push_str("_2"),
                '[' => into.push_str("_3"),
                c if c.is_ascii_alphanumeric() => into.push(c),
                c => into.push_str(&format!("_0{:04x}", c as u32)),
            }
        }
    }
    let mut out = String::from("Java_");
    escape(&mut out, class_name);
    out.push('_');
    escape(&mut out, method_name);
    out
}

pub fn build_call_shape(class_name: &str, method: &Method) -> CallShape {
    CallShape {
        entry_point: derive_native_name(class_name, &method.name),
        parameters: method.parameter_kinds.iter().map(|k| AbiType::from(*k)).collect(),
        return_type: method
            .return_kind
            .map(AbiType::from)
            .unwrap_or(AbiType::Void),
    }
}

pub type NativeFn = Box<dyn Fn(ThreadId, &[Value]) -> Outcome<Value> + Send + Sync>;

/// Holds the Rust closures that back registered native entry points.
/// Nothing in this VM dynamically loads `.so`/`.dll` files (no Non-goal
/// demands it and there's no linker step to hook into here) — embedders
/// register native implementations directly by entry-point name.
#[derive(Default)]
pub struct NativeRegistry {
    entries: RwLock<AHashMap<String, NativeFn>>,
}

impl NativeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, entry_point: impl Into<String>, f: NativeFn) {
        self.entries.write().insert(entry_point.into(), f);
    }

    pub fn call(&self, entry_point: &str, thread: ThreadId, args: &[Value]) -> Option<Outcome<Value>> {
        let entries = self.entries.read();
        entries.get(entry_point).map(|f| f(thread, args))
    }

    pub fn is_registered(&self, entry_point: &str) -> bool {
        self.entries.read().contains_key(entry_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_package_separators_and_underscores() {
        assert_eq!(
            derive_native_name("java/lang/Foo_Bar", "do_it"),
            "Java_java_lang_Foo_1Bar_do_1it"
        );
    }

    #[test]
    fn registry_roundtrip() {
        let reg = NativeRegistry::new();
        reg.register(
            "Java_Test_add",
            Box::new(|_t, args| {
                let a = args[0].as_int().unwrap();
                let b = args[1].as_int().unwrap();
                Outcome::Ok(Value::Int(a + b))
            }),
        );
        let result = reg.call("Java_Test_add", ThreadId(1), &[Value::Int(1), Value::Int(2)]);
        match result {
            Some(Outcome::Ok(Value::Int(3))) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
