use crate::{
    traits::{MessageKind, WireEnum},
    tribool::TriBool,
};

///
/// FieldFormatter
///
/// Uniform `key=value` rendering in field declaration order. Absent
/// optional values are omitted, mirroring wire omission: what you log is
/// what would serialize. Rendering never fails, whatever is unset.
///

#[derive(Debug)]
pub struct FieldFormatter {
    out: String,
    empty: bool,
}

impl Default for FieldFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            out: String::new(),
            empty: true,
        }
    }

    fn key(&mut self, name: &str) {
        if !self.empty {
            self.out.push_str(", ");
        }
        self.empty = false;
        self.out.push_str(name);
        self.out.push('=');
    }

    /// Append a string field.
    pub fn str_field(&mut self, name: &str, value: &str) {
        self.key(name);
        self.out.push_str(value);
    }

    /// Append an optional string field; `None` is omitted.
    pub fn opt_str(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.str_field(name, value);
        }
    }

    /// Append an integer field.
    pub fn i64_field(&mut self, name: &str, value: i64) {
        self.key(name);
        self.out.push_str(&value.to_string());
    }

    /// Append an optional integer field; `None` is omitted.
    pub fn opt_i64(&mut self, name: &str, value: Option<i64>) {
        if let Some(value) = value {
            self.i64_field(name, value);
        }
    }

    /// Append a tri-state boolean in wire form; `Unset` is omitted.
    pub fn tribool(&mut self, name: &str, value: TriBool) {
        if let Some(token) = value.encode() {
            self.str_field(name, token);
        }
    }

    /// Append a strict boolean in wire form.
    pub fn bool_field(&mut self, name: &str, value: bool) {
        self.tribool(name, TriBool::from(value));
    }

    /// Append an enum token field.
    pub fn enum_field<E: WireEnum>(&mut self, name: &str, value: E) {
        self.str_field(name, value.as_token());
    }

    /// Append an optional enum token field; `None` is omitted.
    pub fn opt_enum<E: WireEnum>(&mut self, name: &str, value: Option<E>) {
        if let Some(value) = value {
            self.enum_field(name, value);
        }
    }

    /// Append a nested record as `name={...}`.
    pub fn record<T: DebugFields>(&mut self, name: &str, value: &T) {
        self.key(name);
        self.out.push('{');
        self.out.push_str(&format_fields(value));
        self.out.push('}');
    }

    /// Append an optional nested record; `None` is omitted.
    pub fn opt_record<T: DebugFields>(&mut self, name: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.record(name, value);
        }
    }

    /// Append a collection as `name=[{...}, {...}]` in element order;
    /// empty collections are omitted.
    pub fn list<T: DebugFields>(&mut self, name: &str, items: &[T]) {
        if items.is_empty() {
            return;
        }

        self.key(name);
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push('{');
            self.out.push_str(&format_fields(item));
            self.out.push('}');
        }
        self.out.push(']');
    }

    /// Finish and take the rendered fields.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

///
/// DebugFields
///
/// Implemented by every record; appends fields in declaration order so
/// two renders of equal values are byte-identical.
///

pub trait DebugFields {
    fn fmt_fields(&self, f: &mut FieldFormatter);
}

/// Render a record's fields without the shape-name prefix.
#[must_use]
pub fn format_fields<T: DebugFields>(value: &T) -> String {
    let mut f = FieldFormatter::new();
    value.fmt_fields(&mut f);
    f.finish()
}

/// Render a full record as `ShapeName{key=value, ...}`.
#[must_use]
pub fn format_record<T: MessageKind + DebugFields>(value: &T) -> String {
    format!("{}{{{}}}", T::SHAPE.name, format_fields(value))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        name: String,
        quota: Option<i64>,
        active: TriBool,
    }

    impl DebugFields for Entry {
        fn fmt_fields(&self, f: &mut FieldFormatter) {
            f.str_field("name", &self.name);
            f.opt_i64("quota", self.quota);
            f.tribool("active", self.active);
        }
    }

    struct Roster {
        entries: Vec<Entry>,
    }

    impl DebugFields for Roster {
        fn fmt_fields(&self, f: &mut FieldFormatter) {
            f.list("entry", &self.entries);
        }
    }

    #[test]
    fn fields_render_in_declaration_order() {
        let entry = Entry {
            name: "ada".to_string(),
            quota: Some(512),
            active: TriBool::True,
        };

        assert_eq!(format_fields(&entry), "name=ada, quota=512, active=1");
    }

    #[test]
    fn absent_values_are_omitted_not_rendered_as_none() {
        let entry = Entry {
            name: "ada".to_string(),
            quota: None,
            active: TriBool::Unset,
        };

        assert_eq!(format_fields(&entry), "name=ada");
    }

    #[test]
    fn nested_lists_render_in_element_order() {
        let roster = Roster {
            entries: vec![
                Entry {
                    name: "z".to_string(),
                    quota: None,
                    active: TriBool::Unset,
                },
                Entry {
                    name: "a".to_string(),
                    quota: None,
                    active: TriBool::False,
                },
            ],
        };

        assert_eq!(format_fields(&roster), "entry=[{name=z}, {name=a, active=0}]");
    }

    #[test]
    fn empty_lists_are_omitted() {
        let roster = Roster { entries: vec![] };
        assert_eq!(format_fields(&roster), "");
    }

    #[test]
    fn rendering_is_deterministic() {
        let entry = Entry {
            name: "ada".to_string(),
            quota: Some(1),
            active: TriBool::False,
        };

        assert_eq!(format_fields(&entry), format_fields(&entry));
    }
}
