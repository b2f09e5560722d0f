//! Field packing for storyboard lines.
//!
//! Every field is written as `,` followed by its text. A line is the indentation, the type code,
//! then its packed fields in declaration order.

use crate::{
    foundation::core::TimeMs,
    foundation::error::{OsbError, OsbResult},
    storyboard::enums::FormatCode,
};

/// A single field value, tagged by how it is written.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Fixed format code, written verbatim.
    Enum(&'static str),
    /// Free text; quoted when it contains a space.
    Text(String),
    /// Number in shortest round-trip decimal form.
    Number(f64),
}

impl Value {
    /// Value for an enum's format code.
    pub fn code(c: impl FormatCode) -> Self {
        Self::Enum(c.code())
    }

    /// Text value.
    pub fn text(t: impl Into<String>) -> Self {
        Self::Text(t.into())
    }

    /// Packed representation of this value, including the leading comma.
    pub fn pack(&self) -> OsbResult<String> {
        match self {
            Self::Enum(code) => Ok(pack_enum(code)),
            Self::Text(text) => Ok(pack_text(text)),
            Self::Number(v) => pack_number(*v),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<TimeMs> for Value {
    fn from(t: TimeMs) -> Self {
        Self::Number(f64::from(t.0))
    }
}

/// `,` + the code, verbatim.
pub fn pack_enum(code: &str) -> String {
    format!(",{code}")
}

/// `,` + the text, wrapped in double quotes when it contains a space.
///
/// Embedded quotes and commas pass through unchanged.
pub fn pack_text(text: &str) -> String {
    if text.contains(' ') {
        format!(",\"{text}\"")
    } else {
        format!(",{text}")
    }
}

/// `,` + the shortest decimal text that round-trips `v` (`1.0` packs as `,1`).
pub fn pack_number(v: f64) -> OsbResult<String> {
    if !v.is_finite() {
        return Err(OsbError::invalid_value(format!(
            "{v} cannot be written as a number field"
        )));
    }
    // f64's Display is shortest round-trip and never switches to exponent notation.
    Ok(format!(",{v}"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    Start,
    End,
    Payload(&'static str),
}

#[derive(Clone, Debug)]
pub(crate) struct Slot {
    role: Role,
    value: Option<Value>,
}

/// Ordered fields of one output line.
///
/// Unset start/end slots are filled from the defaults handed down by the owning container when
/// the line is packed.
#[derive(Clone, Debug)]
pub(crate) struct Record {
    code: &'static str,
    slots: Vec<Slot>,
}

impl Record {
    pub(crate) fn new(code: &'static str) -> Self {
        Self {
            code,
            slots: Vec::new(),
        }
    }

    pub(crate) fn slot(mut self, role: Role, value: Option<Value>) -> Self {
        self.slots.push(Slot { role, value });
        self
    }

    pub(crate) fn start(self, t: Option<TimeMs>) -> Self {
        self.slot(Role::Start, t.map(Value::from))
    }

    pub(crate) fn end(self, t: Option<TimeMs>) -> Self {
        self.slot(Role::End, t.map(Value::from))
    }

    pub(crate) fn field(self, name: &'static str, value: impl Into<Value>) -> Self {
        self.slot(Role::Payload(name), Some(value.into()))
    }

    /// Pack into one newline-terminated line at indentation `level`.
    pub(crate) fn to_line(
        &self,
        level: usize,
        default_start: TimeMs,
        default_end: TimeMs,
    ) -> OsbResult<String> {
        let mut line = String::with_capacity(level + self.code.len() + 8 * self.slots.len());
        line.extend(std::iter::repeat_n(' ', level));
        line.push_str(self.code);

        for slot in &self.slots {
            let packed = match (&slot.value, slot.role) {
                (Some(v), _) => v.pack()?,
                (None, Role::Start) => Value::from(default_start).pack()?,
                (None, Role::End) => Value::from(default_end).pack()?,
                (None, Role::Payload(name)) => {
                    return Err(OsbError::invalid_field(format!(
                        "field '{name}' of '{}' has no value",
                        self.code
                    )));
                }
            };
            line.push_str(&packed);
        }

        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/pack.rs"]
mod tests;
