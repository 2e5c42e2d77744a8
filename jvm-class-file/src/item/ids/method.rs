use crate::error;

use super::{field::FieldType, Cursor, Descriptor, UnqualifiedName};

pub type ParameterDescriptor = FieldType;

/// Return descriptor: either a field type or `V` for void.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReturnDescriptor {
    Field(FieldType),
    Void,
}

impl Descriptor for ReturnDescriptor {
    fn parse(c: &mut Cursor) -> error::Result<Self> {
        if c.peek() == Some('V') {
            c.bump();
            Ok(Self::Void)
        } else {
            Ok(Self::Field(FieldType::parse(c)?))
        }
    }
}

/// A method descriptor contains zero or more parameter descriptors,
/// representing the types of parameters that the method takes, and a
/// return descriptor, representing the type of the value (if any) that
/// the method returns.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodDescriptor {
    pub parameters: Vec<ParameterDescriptor>,
    pub return_desc: ReturnDescriptor,
}

impl Descriptor for MethodDescriptor {
    fn parse(c: &mut Cursor) -> error::Result<Self> {
        c.expect('(', "expected method descriptor to start with '('")?;
        let mut parameters = vec![];
        while c.peek() != Some(')') {
            if c.peek().is_none() {
                return Err(c.err("unterminated method descriptor parameter list"));
            }
            parameters.push(ParameterDescriptor::parse(c)?);
        }
        c.expect(')', "expected ')' after method descriptor parameters")?;
        Ok(Self {
            parameters,
            return_desc: ReturnDescriptor::parse(c)?,
        })
    }
}

/// Method name: either a special name (`<init>`, `<clinit>`) or a generic unqualified name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MethodName {
    Clinit,
    Init,
    Generic(UnqualifiedName),
}

impl Descriptor for MethodName {
    fn parse(c: &mut Cursor) -> error::Result<Self> {
        if c.peek() == Some('<') {
            c.bump();
            let name = UnqualifiedName::parse(c)?;
            c.expect('>', "expected '>' to close special method name")?;
            match name.0.as_str() {
                "clinit" => Ok(Self::Clinit),
                "init" => Ok(Self::Init),
                _ => Err(c.err("unknown special method name")),
            }
        } else {
            Ok(Self::Generic(UnqualifiedName::parse(c)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_method_descriptor() {
        let d = MethodDescriptor::parse_complete("(IDLjava/lang/Thread;)Ljava/lang/Object;").unwrap();
        assert_eq!(d.parameters.len(), 3);
        assert!(matches!(d.return_desc, ReturnDescriptor::Field(FieldType::ObjectType(_))));
    }

    #[test]
    fn parses_void_method_descriptor() {
        let d = MethodDescriptor::parse_complete("()V").unwrap();
        assert!(d.parameters.is_empty());
        assert_eq!(d.return_desc, ReturnDescriptor::Void);
    }

    #[test]
    fn parses_special_method_names() {
        assert_eq!(MethodName::parse_complete("<init>").unwrap(), MethodName::Init);
        assert_eq!(MethodName::parse_complete("<clinit>").unwrap(), MethodName::Clinit);
        assert_eq!(MethodName::parse_complete("run").unwrap(), MethodName::Generic(UnqualifiedName("run".to_string())));
    }
}
