//! The two error families named in spec §7: `LinkError` for link-time
//! failures that never reach a running thread, and `Outcome` for the
//! ok/exception trichotomy every interpreter-callable operation returns
//! once a thread is actually executing bytecode.

use crate::object::ObjectRef;
use jvm_class_file::error::ClassFileError;

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("class file error: {0}")]
    ClassFile(#[from] ClassFileError),
    #[error("class not found: {0}")]
    ClassNotFound(String),
    #[error("class {class} has no superclass but is not java/lang/Object")]
    MissingSuperclass { class: String },
    #[error("class {class} attempts to extend final class {super_name}")]
    FinalSuperclass { class: String, super_name: String },
    #[error("class {class} has no member {name}:{descriptor}")]
    NoSuchMember {
        class: String,
        name: String,
        descriptor: String,
    },
    #[error("unsupported or unrecognized constant pool entry at index {0}")]
    BadConstantPoolEntry(usize),
    #[error("method {class}.{name}{descriptor} is native but no entry point was registered")]
    MissingNativeEntryPoint {
        class: String,
        name: String,
        descriptor: String,
    },
    #[error("class {0} is already defined by this loader")]
    DuplicateClass(String),
    #[error("circular class initialization detected for {0}")]
    CircularInitialization(String),
    #[error("class {0} failed to initialize in a previous attempt")]
    ErroneousClass(String),
}

/// The result of any operation that may instead raise a Java-level
/// exception. This mirrors spec §7's `ok | error | exception` split: Rust's
/// `Result<T, LinkError>` carries `error` (unrecoverable outside the VM),
/// while `Outcome` carries the `exception` leg once the VM is far enough
/// along to materialize the matching heap object.
#[derive(Debug, Clone, Copy)]
pub enum Outcome<T> {
    Ok(T),
    Exception(ObjectRef),
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(f(v)),
            Outcome::Exception(e) => Outcome::Exception(e),
        }
    }

    pub fn is_exception(&self) -> bool {
        matches!(self, Outcome::Exception(_))
    }
}

/// Propagates an `Outcome::Exception` out of a function returning
/// `Outcome<T>`, analogous to `?` over `Result`.
#[macro_export]
macro_rules! propagate {
    ($e:expr) => {
        match $e {
            $crate::error::Outcome::Ok(v) => v,
            $crate::error::Outcome::Exception(e) => return $crate::error::Outcome::Exception(e),
        }
    };
}
