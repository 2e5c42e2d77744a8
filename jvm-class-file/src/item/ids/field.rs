use crate::error;

use super::{class::ClassName, Cursor, Descriptor};

/// Base types (JVMS §4.3.2).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum BaseType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
}

impl Descriptor for BaseType {
    fn parse(c: &mut Cursor) -> error::Result<Self> {
        Ok(match c.bump() {
            Some('B') => Self::Byte,
            Some('C') => Self::Char,
            Some('D') => Self::Double,
            Some('F') => Self::Float,
            Some('I') => Self::Int,
            Some('J') => Self::Long,
            Some('S') => Self::Short,
            Some('Z') => Self::Boolean,
            _ => return Err(c.err("unknown base type tag")),
        })
    }
}

/// Object type: `L` *ClassName* `;`.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObjectType {
    pub class_name: ClassName,
}

impl Descriptor for ObjectType {
    fn parse(c: &mut Cursor) -> error::Result<Self> {
        c.expect('L', "expected object type to start with 'L'")?;
        let class_name = ClassName::parse(c)?;
        c.expect(';', "expected object type to end with ';'")?;
        Ok(Self { class_name })
    }
}

/// Array type: `[` *ComponentType*.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArrayType(pub ComponentType);

impl Descriptor for ArrayType {
    fn parse(c: &mut Cursor) -> error::Result<Self> {
        c.expect('[', "expected array type to start with '['")?;
        Ok(Self(Box::new(FieldType::parse(c)?)))
    }
}

pub type ComponentType = Box<FieldType>;

/// Field type (JVMS §4.3.2).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldType {
    BaseType(BaseType),
    ObjectType(ObjectType),
    ArrayType(ArrayType),
}

impl Descriptor for FieldType {
    fn parse(c: &mut Cursor) -> error::Result<Self> {
        match c.peek() {
            Some('L') => Ok(Self::ObjectType(ObjectType::parse(c)?)),
            Some('[') => Ok(Self::ArrayType(ArrayType::parse(c)?)),
            Some(_) => Ok(Self::BaseType(BaseType::parse(c)?)),
            None => Err(c.err("unexpected end of field descriptor")),
        }
    }
}

/// A field descriptor represents the type of a class, instance, or local variable.
pub type FieldDescriptor = FieldType;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_object() {
        let desc = FieldDescriptor::parse_complete("[Lcom/exopteron/Balls$Cool;").unwrap();
        match desc {
            FieldType::ArrayType(ArrayType(component)) => match *component {
                FieldType::ObjectType(obj) => {
                    assert_eq!(obj.class_name.class_name, "Balls");
                    assert_eq!(obj.class_name.inner_class.unwrap().class_name, "Cool");
                }
                _ => panic!("expected object component"),
            },
            _ => panic!("expected array type"),
        }
    }

    #[test]
    fn parses_primitive() {
        assert_eq!(FieldDescriptor::parse_complete("I").unwrap(), FieldType::BaseType(BaseType::Int));
    }
}
