use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;

/// A value assigned to a schema field before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    List(Vec<String>),
    Complex(ComplexValue),
}

impl ParamValue {
    /// Short label used in error messages.
    pub fn kind_label(&self) -> &'static str {
        match self {
            ParamValue::Str(_) => "string",
            ParamValue::Bool(_) => "boolean",
            ParamValue::Timestamp(_) => "timestamp",
            ParamValue::List(_) => "list",
            ParamValue::Complex(_) => "complex",
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        ParamValue::Timestamp(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::List(value.into_iter().map(String::from).collect())
    }
}

impl From<ComplexList> for ParamValue {
    fn from(value: ComplexList) -> Self {
        ParamValue::Complex(ComplexValue::List(value))
    }
}

impl From<ComplexObject> for ParamValue {
    fn from(value: ComplexObject) -> Self {
        ParamValue::Complex(ComplexValue::Object(value))
    }
}

/// MWS timestamps travel as ISO-8601 with millisecond precision and a `Z`
/// suffix, e.g. `2015-05-01T00:00:00.000Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComplexValue {
    List(ComplexList),
    Object(ComplexObject),
}

impl ComplexValue {
    pub fn append_to(&self, out: &mut BTreeMap<String, String>) {
        match self {
            ComplexValue::List(list) => list.append_to(out),
            ComplexValue::Object(object) => object.append_to(out),
        }
    }
}

/// Repeated nested structure, flattened to indexed query parameters per the
/// MWS complex-list convention: `Base.N.Field=value` with N starting at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexList {
    base: String,
    members: Vec<BTreeMap<String, String>>,
}

impl ComplexList {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            members: Vec::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn push_member(&mut self, member: BTreeMap<String, String>) {
        self.members.push(member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn append_to(&self, out: &mut BTreeMap<String, String>) {
        for (index, member) in self.members.iter().enumerate() {
            for (key, value) in member {
                out.insert(format!("{}.{}.{}", self.base, index + 1, key), value.clone());
            }
        }
    }
}

/// Singular nested structure, flattened as `Prefix.Field=value`. Nested lists
/// carry their own absolute base names and flatten themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexObject {
    prefix: String,
    fields: BTreeMap<String, String>,
    lists: Vec<ComplexList>,
}

impl ComplexObject {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            fields: BTreeMap::new(),
            lists: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn push_list(&mut self, list: ComplexList) {
        self.lists.push(list);
    }

    pub fn append_to(&self, out: &mut BTreeMap<String, String>) {
        for (key, value) in &self.fields {
            out.insert(format!("{}.{}", self.prefix, key), value.clone());
        }
        for list in &self.lists {
            list.append_to(out);
        }
    }
}
