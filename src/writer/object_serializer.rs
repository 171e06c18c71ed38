//! PDF object serialization.
//!
//! Objects are written in one compact form only: single spaces between
//! tokens, dictionary keys in sorted order. Two equal object graphs always
//! produce equal bytes.

use crate::object::{Object, ObjectRef};
use std::collections::HashMap;
use std::io::{self, Write};

/// Writes [`Object`]s in PDF syntax (ISO 32000-1 §7.3).
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer;

impl ObjectSerializer {
    /// Create a serializer.
    pub fn new() -> Self {
        Self
    }

    /// Write `{id} 0 obj\n{object}\nendobj\n`.
    ///
    /// Every object this crate emits is generation 0.
    pub fn write_indirect<W: Write>(&self, w: &mut W, id: u32, obj: &Object) -> io::Result<()> {
        writeln!(w, "{} 0 obj", id)?;
        self.write(w, obj)?;
        w.write_all(b"\nendobj\n")
    }

    /// Write a direct object.
    pub fn write<W: Write>(&self, w: &mut W, obj: &Object) -> io::Result<()> {
        match obj {
            Object::Null => w.write_all(b"null"),
            Object::Boolean(true) => w.write_all(b"true"),
            Object::Boolean(false) => w.write_all(b"false"),
            Object::Integer(i) => write!(w, "{}", i),
            Object::Real(r) => write_real(w, *r),
            Object::String(s) => write_string(w, s),
            Object::Name(n) => write_name(w, n),
            Object::Array(items) => {
                w.write_all(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        w.write_all(b" ")?;
                    }
                    self.write(w, item)?;
                }
                w.write_all(b"]")
            },
            Object::Dictionary(dict) => self.write_dict(w, dict, None),
            Object::Stream { dict, data } => {
                let length = (!dict.contains_key("Length")).then_some(data.len());
                self.write_dict(w, dict, length)?;
                w.write_all(b"\nstream\n")?;
                w.write_all(data)?;
                w.write_all(b"\nendstream")
            },
            Object::Reference(r) => write!(w, "{}", r),
        }
    }

    /// `<< /A 1 /B 2 >>`, with an optional `/Length` merged in key order.
    fn write_dict<W: Write>(
        &self,
        w: &mut W,
        dict: &HashMap<String, Object>,
        length: Option<usize>,
    ) -> io::Result<()> {
        let length = length.map(|n| Object::Integer(n as i64));
        let mut entries: Vec<(&str, &Object)> =
            dict.iter().map(|(k, v)| (k.as_str(), v)).collect();
        if let Some(length) = &length {
            entries.push(("Length", length));
        }
        entries.sort_by_key(|(k, _)| *k);

        w.write_all(b"<<")?;
        for (key, value) in &entries {
            w.write_all(b" ")?;
            write_name(w, key)?;
            w.write_all(b" ")?;
            self.write(w, value)?;
        }
        if !entries.is_empty() {
            w.write_all(b" ")?;
        }
        w.write_all(b">>")
    }
}

/// Integers print bare; other values keep at most five decimals.
fn write_real<W: Write>(w: &mut W, value: f64) -> io::Result<()> {
    if value.fract() == 0.0 {
        return write!(w, "{}", value as i64);
    }
    let formatted = format!("{:.5}", value);
    w.write_all(formatted.trim_end_matches('0').trim_end_matches('.').as_bytes())
}

/// Literal `( )` string when printable, hex `< >` otherwise.
fn write_string<W: Write>(w: &mut W, data: &[u8]) -> io::Result<()> {
    let printable = data
        .iter()
        .all(|&b| matches!(b, b'\n' | b'\r' | b'\t' | 0x20..=0x7E));
    if !printable {
        w.write_all(b"<")?;
        for byte in data {
            write!(w, "{:02X}", byte)?;
        }
        return w.write_all(b">");
    }

    w.write_all(b"(")?;
    for &byte in data {
        let escaped: &[u8] = match byte {
            b'(' => b"\\(",
            b')' => b"\\)",
            b'\\' => b"\\\\",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            _ => {
                w.write_all(&[byte])?;
                continue;
            },
        };
        w.write_all(escaped)?;
    }
    w.write_all(b")")
}

/// `/Name`, with delimiters, whitespace and non-ASCII bytes as `#xx`.
fn write_name<W: Write>(w: &mut W, name: &str) -> io::Result<()> {
    w.write_all(b"/")?;
    for byte in name.bytes() {
        let regular = byte.is_ascii_graphic()
            && !matches!(byte, b'#' | b'%' | b'(' | b')' | b'/' | b'<' | b'>' | b'[' | b']' | b'{' | b'}');
        if regular {
            w.write_all(&[byte])?;
        } else {
            write!(w, "#{:02X}", byte)?;
        }
    }
    Ok(())
}

/// Constructors for the objects the document writer assembles.
impl ObjectSerializer {
    /// `/s`
    pub fn name(s: &str) -> Object {
        Object::Name(s.to_string())
    }

    /// Literal string from UTF-8 text.
    pub fn string(s: &str) -> Object {
        Object::String(s.as_bytes().to_vec())
    }

    /// Integer object.
    pub fn integer(i: i64) -> Object {
        Object::Integer(i)
    }

    /// Dictionary from `(key, value)` pairs.
    pub fn dict(entries: Vec<(&str, Object)>) -> Object {
        Object::Dictionary(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    /// Indirect reference `id 0 R`.
    pub fn reference(id: u32) -> Object {
        Object::Reference(ObjectRef::new(id, 0))
    }

    /// `[0 0 width height]`
    pub fn media_box(width: f32, height: f32) -> Object {
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width as f64),
            Object::Real(height as f64),
        ])
    }
}
