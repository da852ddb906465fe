//! Rendering styles for [`FieldList`] objects.

use crate::FieldList;

/// Controls how an object's field list is turned into a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToStringStyle {
    content_start: String,
    content_end: String,
    field_separator: String,
    field_separator_at_start: bool,
    field_separator_at_end: bool,
    field_name_value_separator: String,
    use_field_names: bool,
    use_short_type_name: bool,
}

impl Default for ToStringStyle {
    fn default() -> Self {
        Self::short_prefix()
    }
}

impl ToStringStyle {
    /// Full type name followed by the bracketed fields on one line.
    pub fn default_style() -> Self {
        Self {
            content_start: "[".to_string(),
            content_end: "]".to_string(),
            field_separator: ",".to_string(),
            field_separator_at_start: false,
            field_separator_at_end: false,
            field_name_value_separator: "=".to_string(),
            use_field_names: true,
            use_short_type_name: false,
        }
    }

    /// `Type[a=1,b=2]`
    pub fn short_prefix() -> Self {
        Self::default_style().with_short_type_name(true)
    }

    /// One field per line, indented by two spaces:
    ///
    /// ```text
    /// Type[
    ///   a=1,
    ///   b=2
    /// ]
    /// ```
    pub fn multiline_no_address() -> Self {
        Self::short_prefix()
            .with_content_start("[\n  ")
            .with_field_separator(",\n  ")
            .with_content_end("\n]")
    }

    pub fn with_content_start(mut self, value: impl Into<String>) -> Self {
        self.content_start = value.into();
        self
    }

    pub fn with_content_end(mut self, value: impl Into<String>) -> Self {
        self.content_end = value.into();
        self
    }

    pub fn with_field_separator(mut self, value: impl Into<String>) -> Self {
        self.field_separator = value.into();
        self
    }

    pub fn with_field_separator_at_start(mut self, enabled: bool) -> Self {
        self.field_separator_at_start = enabled;
        self
    }

    pub fn with_field_separator_at_end(mut self, enabled: bool) -> Self {
        self.field_separator_at_end = enabled;
        self
    }

    pub fn with_field_name_value_separator(mut self, value: impl Into<String>) -> Self {
        self.field_name_value_separator = value.into();
        self
    }

    pub fn with_field_names(mut self, enabled: bool) -> Self {
        self.use_field_names = enabled;
        self
    }

    pub fn with_short_type_name(mut self, enabled: bool) -> Self {
        self.use_short_type_name = enabled;
        self
    }

    /// Render an object using this style.
    pub fn render(&self, object: &dyn FieldList) -> String {
        let type_name = object.type_name();
        let fields = object.fields();

        let mut out = String::new();
        if self.use_short_type_name {
            out.push_str(short_type_name(type_name));
        } else {
            out.push_str(type_name);
        }
        out.push_str(&self.content_start);

        if self.field_separator_at_start && !fields.is_empty() {
            out.push_str(&self.field_separator);
        }
        for (index, (name, value)) in fields.iter().enumerate() {
            if index > 0 {
                out.push_str(&self.field_separator);
            }
            if self.use_field_names {
                out.push_str(name);
                out.push_str(&self.field_name_value_separator);
            }
            out.push_str(&format!("{:?}", value));
        }
        if self.field_separator_at_end && !fields.is_empty() {
            out.push_str(&self.field_separator);
        }

        out.push_str(&self.content_end);
        out
    }

    /// Render an optional object; an absent object renders as the empty string.
    pub fn render_optional(&self, object: Option<&dyn FieldList>) -> String {
        object.map(|o| self.render(o)).unwrap_or_default()
    }
}

/// Strip generic arguments and the module path from a type name.
fn short_type_name(full: &str) -> &str {
    let without_generics = match full.find('<') {
        Some(index) => &full[..index],
        None => full,
    };
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}
