use crate::error;

use super::{field::FieldDescriptor, Cursor, Descriptor, BANNED_IDENT_CHARS};

/// A binary class or interface name (JVMS §4.2.1), e.g. `com/exopteron/Exo$Inner`.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct ClassName {
    /// The package of this class.
    pub package: Vec<String>,

    /// This class's name.
    pub class_name: String,

    /// Inner class, if any.
    pub inner_class: Option<Box<ClassName>>,
}

impl Descriptor for ClassName {
    fn parse(c: &mut Cursor) -> error::Result<Self> {
        let mut segments = vec![parse_segment(c)];
        while c.peek() == Some('/') {
            c.bump();
            segments.push(parse_segment(c));
        }

        let inner_class = if c.peek() == Some('$') {
            c.bump();
            Some(Box::new(ClassName::parse(c)?))
        } else {
            None
        };

        let class_name = segments.pop().ok_or_else(|| c.err("empty class name"))?;
        Ok(Self {
            class_name,
            package: segments,
            inner_class,
        })
    }
}

/// Reads a single `/`- and `$`-delimited segment of a class name.
fn parse_segment(c: &mut Cursor) -> String {
    let mut buf = String::new();
    while let Some(ch) = c.peek() {
        if ch.is_whitespace() || ch == '$' || BANNED_IDENT_CHARS.contains(&ch) {
            break;
        }
        buf.push(ch);
        c.bump();
    }
    buf
}

/// Either a plain class reference or an array type, as found in `new`/`anewarray`-like contexts.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClassRefName {
    Class(ClassName),
    Array(FieldDescriptor),
}

impl Descriptor for ClassRefName {
    fn parse(c: &mut Cursor) -> error::Result<Self> {
        if c.peek() == Some('[') {
            Ok(Self::Array(FieldDescriptor::parse(c)?))
        } else {
            Ok(Self::Class(ClassName::parse(c)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_class_name() {
        let cln = ClassName::parse_complete("com/exopteron/Exo").unwrap();
        assert_eq!(cln.package, vec!["com".to_string(), "exopteron".to_string()]);
        assert_eq!(cln.class_name, "Exo");
        assert!(cln.inner_class.is_none());
    }

    #[test]
    fn parses_inner_class_name() {
        let cln = ClassName::parse_complete("com/exopteron/Exo$Inner").unwrap();
        assert_eq!(cln.class_name, "Exo");
        let inner = cln.inner_class.unwrap();
        assert_eq!(inner.class_name, "Inner");
        assert!(inner.package.is_empty());
    }
}
