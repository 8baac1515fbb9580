//! Finances API request catalog (version 2015-05-01).

use crate::core::{ParamSpec, Request, RequestInfo};

pub const FULFILLMENT_CHANNELS: &[&str] = &["AFN", "MFN"];
pub const ORDER_STATUSES: &[&str] = &[
    "Pending",
    "Unshipped",
    "PartiallyShipped",
    "Shipped",
    "Canceled",
    "Unfulfillable",
];
pub const PAYMENT_METHODS: &[&str] = &["COD", "CVS", "Other"];

/// Brief definitions of the `GetServiceStatus` response codes, e.g. for
/// surfacing to users in tooltips.
pub const SERVICE_STATUS_CODES: &[(&str, &str)] = &[
    ("GREEN", "The service is operating normally."),
    (
        "GREEN_I",
        "The service is operating normally + additional info provided",
    ),
    (
        "YELLOW",
        "The service is experiencing higher than normal error rates or degraded performance.",
    ),
    (
        "RED",
        "The service is unavailable or experiencing extremely high error rates.",
    ),
];

pub fn service_status_description(code: &str) -> Option<&'static str> {
    SERVICE_STATUS_CODES
        .iter()
        .find(|(status, _)| *status == code)
        .map(|(_, description)| *description)
}

fn finances_request(action: &'static str, schema: &'static [ParamSpec]) -> Request {
    Request::new(
        RequestInfo {
            api: "Finances",
            group: "Finances Retrieval",
            path: "/Finances/2015-05-01",
            version: "2015-05-01",
            legacy: false,
            action,
        },
        schema,
    )
}

pub fn get_service_status() -> Request {
    finances_request("GetServiceStatus", &[])
}

const LIST_FINANCIAL_EVENTS: &[ParamSpec] = &[
    ParamSpec::timestamp("PostedAfter", "PostedAfter", false),
    ParamSpec::timestamp("PostedBefore", "PostedBefore", false),
    ParamSpec::optional("FinancialEventGroupId", "FinancialEventGroupId"),
    ParamSpec::optional("AmazonOrderId", "AmazonOrderId"),
    ParamSpec::optional("MaxResultsPerPage", "MaxResultsPerPage"),
];

/// Financial events created or updated in a time frame, or for one order or
/// event group.
pub fn list_financial_events() -> Request {
    finances_request("ListFinancialEvents", LIST_FINANCIAL_EVENTS)
}

const NEXT_TOKEN_ONLY: &[ParamSpec] = &[ParamSpec::required("NextToken", "NextToken")];

pub fn list_financial_events_by_next_token() -> Request {
    finances_request("ListFinancialEventsByNextToken", NEXT_TOKEN_ONLY)
}

const LIST_FINANCIAL_EVENT_GROUPS: &[ParamSpec] = &[
    ParamSpec::timestamp("StartedAfter", "FinancialEventGroupStartedAfter", true),
    ParamSpec::timestamp("StartedBefore", "FinancialEventGroupStartedBefore", false),
    ParamSpec::optional("MaxResultsPerPage", "MaxResultsPerPage"),
];

pub fn list_financial_event_groups() -> Request {
    finances_request("ListFinancialEventGroups", LIST_FINANCIAL_EVENT_GROUPS)
}

pub fn list_financial_event_groups_by_next_token() -> Request {
    finances_request("ListFinancialEventGroupsByNextToken", NEXT_TOKEN_ONLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_status_lookup() {
        assert_eq!(
            service_status_description("GREEN"),
            Some("The service is operating normally.")
        );
        assert!(service_status_description("BLUE").is_none());
    }

    #[test]
    fn test_list_financial_event_groups_requires_started_after() {
        let req = list_financial_event_groups();
        assert!(req.to_query().is_err());

        let spec = req
            .schema()
            .iter()
            .find(|spec| spec.field == "StartedAfter")
            .unwrap();
        assert_eq!(spec.name, "FinancialEventGroupStartedAfter");
        assert!(spec.required);
    }

    #[test]
    fn test_group_pagination_has_its_own_action() {
        assert_eq!(
            list_financial_event_groups_by_next_token().action(),
            "ListFinancialEventGroupsByNextToken"
        );
    }
}
