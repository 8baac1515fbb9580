use crate::core::schema::{ParamKind, ParamSpec};
use crate::core::value::{format_timestamp, ParamValue};
use crate::utils::error::{MwsError, Result};
use crate::utils::validation::validate_enum_value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Static endpoint metadata for one operation: which API section it belongs
/// to and how the external invocation client should address it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RequestInfo {
    pub api: &'static str,
    pub group: &'static str,
    pub path: &'static str,
    pub version: &'static str,
    pub legacy: bool,
    pub action: &'static str,
}

/// Serializable description of an operation, for tooling.
#[derive(Debug, Clone, Serialize)]
pub struct OperationDescription {
    pub api: &'static str,
    pub group: &'static str,
    pub path: &'static str,
    pub version: &'static str,
    pub action: &'static str,
    pub params: Vec<ParamSpec>,
}

/// One invocable MWS operation: endpoint metadata, the parameter schema, and
/// the values assigned so far. Values are validated against the schema at
/// assignment; required-field checks happen when the query is rendered.
#[derive(Debug, Clone)]
pub struct Request {
    info: RequestInfo,
    schema: &'static [ParamSpec],
    values: BTreeMap<&'static str, ParamValue>,
}

impl Request {
    pub fn new(info: RequestInfo, schema: &'static [ParamSpec]) -> Self {
        Self {
            info,
            schema,
            values: BTreeMap::new(),
        }
    }

    pub fn info(&self) -> &RequestInfo {
        &self.info
    }

    pub fn action(&self) -> &'static str {
        self.info.action
    }

    pub fn path(&self) -> &'static str {
        self.info.path
    }

    pub fn version(&self) -> &'static str {
        self.info.version
    }

    pub fn schema(&self) -> &'static [ParamSpec] {
        self.schema
    }

    fn spec(&self, field: &str) -> Result<&'static ParamSpec> {
        self.schema
            .iter()
            .find(|spec| spec.field == field)
            .ok_or_else(|| MwsError::UnknownParameter {
                action: self.info.action.to_string(),
                field: field.to_string(),
            })
    }

    /// Assign a value to a schema field. Rejects fields the schema does not
    /// declare, kind mismatches, and enum values outside the allowed set.
    pub fn set(&mut self, field: &str, value: impl Into<ParamValue>) -> Result<&mut Self> {
        let spec = self.spec(field)?;
        let value = value.into();
        check_value(self.info.action, spec, &value)?;

        tracing::debug!(action = self.info.action, field = spec.field, "parameter set");
        self.values.insert(spec.field, value);
        Ok(self)
    }

    /// Builder-style variant of [`Request::set`].
    pub fn with(mut self, field: &str, value: impl Into<ParamValue>) -> Result<Self> {
        self.set(field, value)?;
        Ok(self)
    }

    pub fn get(&self, field: &str) -> Option<&ParamValue> {
        self.values.get(field)
    }

    /// Every required schema entry must have a value.
    pub fn validate(&self) -> Result<()> {
        for spec in self.schema {
            if spec.required && !self.values.contains_key(spec.field) {
                return Err(MwsError::MissingParameter {
                    action: self.info.action.to_string(),
                    field: spec.field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Render the flat query-parameter map the invocation client signs and
    /// sends: `Action`, `Version`, then every assigned value under its wire
    /// name. Lists get 1-based index suffixes, complex values flatten
    /// themselves, timestamps render in the MWS ISO-8601 form.
    pub fn to_query(&self) -> Result<BTreeMap<String, String>> {
        self.validate()?;

        let mut out = BTreeMap::new();
        out.insert("Action".to_string(), self.info.action.to_string());
        out.insert("Version".to_string(), self.info.version.to_string());

        for spec in self.schema {
            let Some(value) = self.values.get(spec.field) else {
                continue;
            };

            match value {
                ParamValue::Str(s) => {
                    out.insert(spec.name.to_string(), s.clone());
                }
                ParamValue::Bool(b) => {
                    out.insert(spec.name.to_string(), b.to_string());
                }
                ParamValue::Timestamp(ts) => {
                    out.insert(spec.name.to_string(), format_timestamp(ts));
                }
                ParamValue::List(items) => {
                    for (index, item) in items.iter().enumerate() {
                        out.insert(format!("{}.{}", spec.name, index + 1), item.clone());
                    }
                }
                ParamValue::Complex(complex) => {
                    complex.append_to(&mut out);
                }
            }
        }

        tracing::debug!(
            action = self.info.action,
            params = out.len(),
            "assembled query parameters"
        );
        Ok(out)
    }

    pub fn describe(&self) -> OperationDescription {
        OperationDescription {
            api: self.info.api,
            group: self.info.group,
            path: self.info.path,
            version: self.info.version,
            action: self.info.action,
            params: self.schema.to_vec(),
        }
    }
}

fn check_value(action: &str, spec: &ParamSpec, value: &ParamValue) -> Result<()> {
    match (spec.kind, value) {
        (ParamKind::String, ParamValue::Str(_)) if !spec.list => Ok(()),
        (ParamKind::String, ParamValue::List(_)) if spec.list => Ok(()),
        (ParamKind::Boolean, ParamValue::Bool(_)) => Ok(()),
        (ParamKind::Timestamp, ParamValue::Timestamp(_)) => Ok(()),
        (ParamKind::Complex, ParamValue::Complex(_)) => Ok(()),
        (ParamKind::Enum(allowed), ParamValue::Str(v)) if !spec.list => {
            validate_enum_value(spec.field, v, allowed)
        }
        (ParamKind::Enum(allowed), ParamValue::List(items)) if spec.list => {
            for item in items {
                validate_enum_value(spec.field, item, allowed)?;
            }
            Ok(())
        }
        _ => Err(MwsError::InvalidParameterValue {
            field: spec.field.to_string(),
            value: value.kind_label().to_string(),
            reason: format!(
                "{} expects {}{:?} for action {}",
                spec.field,
                if spec.list { "a list of " } else { "" },
                spec.kind,
                action
            ),
        }),
    }
}
