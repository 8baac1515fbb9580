use serde::Serialize;

/// Type tag of a request parameter. MWS serializes everything as strings on
/// the wire; the tag controls validation and rendering of the assigned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamKind {
    String,
    Boolean,
    Timestamp,
    /// Closed value set. Values outside the set are rejected at assignment.
    Enum(&'static [&'static str]),
    /// Nested structure built through a complex-value constructor.
    Complex,
}

/// One entry of an operation's parameter schema: the friendly field key used
/// by callers, the wire name MWS expects, and the serialization flags.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParamSpec {
    pub field: &'static str,
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    /// Repeated values, rendered as `Name.1`, `Name.2`, ...
    pub list: bool,
}

impl ParamSpec {
    pub const fn required(field: &'static str, name: &'static str) -> Self {
        Self {
            field,
            name,
            kind: ParamKind::String,
            required: true,
            list: false,
        }
    }

    pub const fn optional(field: &'static str, name: &'static str) -> Self {
        Self {
            field,
            name,
            kind: ParamKind::String,
            required: false,
            list: false,
        }
    }

    pub const fn boolean(field: &'static str, name: &'static str, required: bool) -> Self {
        Self {
            field,
            name,
            kind: ParamKind::Boolean,
            required,
            list: false,
        }
    }

    pub const fn timestamp(field: &'static str, name: &'static str, required: bool) -> Self {
        Self {
            field,
            name,
            kind: ParamKind::Timestamp,
            required,
            list: false,
        }
    }

    pub const fn list(field: &'static str, name: &'static str, required: bool) -> Self {
        Self {
            field,
            name,
            kind: ParamKind::String,
            required,
            list: true,
        }
    }

    pub const fn enumerated(
        field: &'static str,
        name: &'static str,
        values: &'static [&'static str],
        required: bool,
    ) -> Self {
        Self {
            field,
            name,
            kind: ParamKind::Enum(values),
            required,
            list: false,
        }
    }

    pub const fn enum_list(
        field: &'static str,
        name: &'static str,
        values: &'static [&'static str],
        required: bool,
    ) -> Self {
        Self {
            field,
            name,
            kind: ParamKind::Enum(values),
            required,
            list: true,
        }
    }

    pub const fn complex(field: &'static str, name: &'static str, required: bool) -> Self {
        Self {
            field,
            name,
            kind: ParamKind::Complex,
            required,
            list: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_constructors_set_flags() {
        let spec = ParamSpec::required("ShipmentId", "ShipmentId");
        assert!(spec.required);
        assert!(!spec.list);
        assert_eq!(spec.kind, ParamKind::String);

        let spec = ParamSpec::list("ShipmentIds", "ShipmentIdList.member", false);
        assert!(spec.list);
        assert!(!spec.required);

        let spec = ParamSpec::enumerated("ResponseGroup", "ResponseGroup", &["Basic", "Detailed"], false);
        assert_eq!(spec.kind, ParamKind::Enum(&["Basic", "Detailed"]));
    }

    #[test]
    fn test_spec_serializes_for_introspection() {
        let spec = ParamSpec::timestamp("LastUpdatedAfter", "LastUpdatedAfter", false);
        let json = serde_json::to_value(spec).unwrap();
        assert_eq!(json["field"], "LastUpdatedAfter");
        assert_eq!(json["kind"], "Timestamp");
        assert_eq!(json["required"], false);
    }
}
