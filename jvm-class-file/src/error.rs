use std::string::FromUtf8Error;

use thiserror::Error;

/// An error which can occur on deserialization of a class file.
#[derive(Debug, Error)]
pub enum ClassFileError {
    /// A generic I/O error.
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),

    /// Returned when a class file has a bad magic number.
    #[error("bad magic number: {0:#x}")]
    BadMagicNumber(u32),

    /// Returned when an unknown constant pool tag is found.
    #[error("unknown constant pool tag: {0}")]
    UnknownConstantPoolTag(u8),

    /// Returned when invalid (modified) UTF-8 is found.
    #[error("invalid utf-8 in constant pool: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// Returned when an unknown reference kind is found.
    #[error("unknown method handle reference kind: {0}")]
    UnknownReferenceKind(u8),

    /// Returned when bad class access flags are found.
    #[error("bad class access flags")]
    BadClassAccessFlags,

    /// Returned when an unknown verification type info tag is found.
    #[error("unknown verification type info tag")]
    UnknownVerificationTypeInfo,

    /// Returned when an unknown stack map frame tag is found.
    #[error("unknown stack map frame tag: {0}")]
    UnknownStackMapFrameTag(u8),

    /// Returned when an unknown element value type is found.
    #[error("unknown annotation element value type: {0:?}")]
    UnknownElementValueType(char),

    /// Returned when an unknown target type value is found.
    #[error("unknown type annotation target type: {0}")]
    UnknownTargetTypeValue(u8),

    /// Returned when an unknown type path kind value is found.
    #[error("unknown type annotation path kind: {0}")]
    UnknownTypePathKind(u8),

    /// Returned when bad formal parameter access flags are found.
    #[error("bad formal parameter access flags")]
    BadFormalParameterAccessFlags,

    /// Returned when a string constant was expected.
    #[error("expected a UTF-8 constant")]
    ExpectedString,

    /// Returned when an unknown attribute is found. The core fails closed on
    /// unrecognized attributes rather than skipping them, to catch malformed
    /// input that a verifier would otherwise reject.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// Returned when bad field access flags are found.
    #[error("bad field access flags")]
    BadFieldAccessFlags,

    /// Returned when bad method access flags are found.
    #[error("bad method access flags")]
    BadMethodAccessFlags,

    /// Returned when an unknown opcode is found.
    #[error("unknown opcode: {0:#x}")]
    UnknownOpcodeError(u8),

    /// Returned when an unknown enum variant is found.
    #[error("unknown variant {1} for enum {0}")]
    UnknownEnumVariant(&'static str, i32),

    /// Returned when a size computation overflows or underflows (e.g. a
    /// `tableswitch` with `high < low`).
    #[error("arithmetic error while decoding class file structure")]
    ArithmeticError,

    /// Returned when a type or method descriptor does not parse.
    #[error("malformed descriptor {descriptor:?}: {reason}")]
    BadDescriptor { descriptor: String, reason: &'static str },

    /// Returned when a constant pool index refers to an entry of the wrong
    /// kind (e.g. a `Fieldref`'s class_index pointing at a `Utf8`).
    #[error("constant pool entry at index {0} has the wrong kind")]
    WrongConstantPoolEntryKind(u16),

    /// Returned when a constant pool index is zero or out of bounds.
    #[error("constant pool index {0} out of bounds")]
    BadConstantPoolIndex(u16),
}

pub type Result<T> = std::result::Result<T, ClassFileError>;
