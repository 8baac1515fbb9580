//! Inventory operations.

use super::inventory_request;
use crate::core::{ParamSpec, Request};

pub fn get_service_status() -> Request {
    inventory_request("GetServiceStatus", &[])
}

const LIST_INVENTORY_SUPPLY: &[ParamSpec] = &[
    ParamSpec::list("SellerSkus", "SellerSkus.member", false),
    ParamSpec::timestamp("QueryStartDateTime", "QueryStartDateTime", false),
    ParamSpec::optional("ResponseGroup", "ResponseGroup"),
];

pub fn list_inventory_supply() -> Request {
    inventory_request("ListInventorySupply", LIST_INVENTORY_SUPPLY)
}

const LIST_INVENTORY_SUPPLY_BY_NEXT_TOKEN: &[ParamSpec] =
    &[ParamSpec::required("NextToken", "NextToken")];

pub fn list_inventory_supply_by_next_token() -> Request {
    inventory_request(
        "ListInventorySupplyByNextToken",
        LIST_INVENTORY_SUPPLY_BY_NEXT_TOKEN,
    )
}
