use anyhow::Result;
use chrono::{TimeZone, Utc};
use mws_requests::finances;
use mws_requests::MwsError;

#[test]
fn test_list_financial_events_render() -> Result<()> {
    let after = Utc.with_ymd_and_hms(2017, 3, 1, 0, 0, 0).unwrap();
    let before = Utc.with_ymd_and_hms(2017, 4, 1, 0, 0, 0).unwrap();

    let query = finances::list_financial_events()
        .with("PostedAfter", after)?
        .with("PostedBefore", before)?
        .with("AmazonOrderId", "902-3159896-1390916")?
        .with("MaxResultsPerPage", "50")?
        .to_query()?;

    assert_eq!(query.get("Action").map(String::as_str), Some("ListFinancialEvents"));
    assert_eq!(query.get("Version").map(String::as_str), Some("2015-05-01"));
    assert_eq!(
        query.get("PostedAfter").map(String::as_str),
        Some("2017-03-01T00:00:00.000Z")
    );
    assert_eq!(
        query.get("AmazonOrderId").map(String::as_str),
        Some("902-3159896-1390916")
    );
    Ok(())
}

#[test]
fn test_list_financial_events_all_parameters_optional() -> Result<()> {
    let query = finances::list_financial_events().to_query()?;
    assert_eq!(query.len(), 2); // Action + Version
    Ok(())
}

#[test]
fn test_list_financial_event_groups_render() -> Result<()> {
    let after = Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap();

    let query = finances::list_financial_event_groups()
        .with("StartedAfter", after)?
        .with("MaxResultsPerPage", "10")?
        .to_query()?;

    // Friendly key differs from the wire name here.
    assert_eq!(
        query
            .get("FinancialEventGroupStartedAfter")
            .map(String::as_str),
        Some("2017-01-01T00:00:00.000Z")
    );
    assert!(!query.contains_key("StartedAfter"));
    Ok(())
}

#[test]
fn test_list_financial_event_groups_requires_started_after() {
    let err = finances::list_financial_event_groups().to_query().unwrap_err();
    match err {
        MwsError::MissingParameter { field, .. } => assert_eq!(field, "StartedAfter"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_pagination_operations() -> Result<()> {
    let query = finances::list_financial_events_by_next_token()
        .with("NextToken", "token-events")?
        .to_query()?;
    assert_eq!(
        query.get("Action").map(String::as_str),
        Some("ListFinancialEventsByNextToken")
    );

    let query = finances::list_financial_event_groups_by_next_token()
        .with("NextToken", "token-groups")?
        .to_query()?;
    assert_eq!(
        query.get("Action").map(String::as_str),
        Some("ListFinancialEventGroupsByNextToken")
    );
    assert_eq!(query.get("NextToken").map(String::as_str), Some("token-groups"));
    Ok(())
}

#[test]
fn test_enum_value_sets() {
    assert!(finances::FULFILLMENT_CHANNELS.contains(&"AFN"));
    assert!(finances::ORDER_STATUSES.contains(&"PartiallyShipped"));
    assert_eq!(finances::PAYMENT_METHODS.len(), 3);
}
