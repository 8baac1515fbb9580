//! Fulfillment-by-Amazon request catalogs (version 2010-10-01), split the way
//! MWS splits the API: inbound shipments, inventory, outbound shipments.

pub mod complex;
pub mod inbound;
pub mod inventory;
pub mod outbound;

use crate::core::{ParamSpec, Request, RequestInfo};

pub const RESPONSE_GROUPS: &[&str] = &["Basic", "Detailed"];
pub const SHIPPING_SPEED_CATEGORIES: &[&str] = &["Standard", "Expedited", "Priority"];
pub const FULFILLMENT_POLICIES: &[&str] = &["FillOrKill", "FillAll", "FillAllAvailable"];

const API_NAME: &str = "Fulfillment";
const VERSION: &str = "2010-10-01";

fn fulfillment_request(
    group: &'static str,
    path: &'static str,
    action: &'static str,
    schema: &'static [ParamSpec],
) -> Request {
    Request::new(
        RequestInfo {
            api: API_NAME,
            group,
            path,
            version: VERSION,
            legacy: false,
            action,
        },
        schema,
    )
}

pub(crate) fn inbound_request(action: &'static str, schema: &'static [ParamSpec]) -> Request {
    fulfillment_request(
        "Inbound Shipments",
        "/FulfillmentInboundShipment/2010-10-01",
        action,
        schema,
    )
}

pub(crate) fn inventory_request(action: &'static str, schema: &'static [ParamSpec]) -> Request {
    fulfillment_request("Inventory", "/FulfillmentInventory/2010-10-01", action, schema)
}

pub(crate) fn outbound_request(action: &'static str, schema: &'static [ParamSpec]) -> Request {
    fulfillment_request(
        "Outbound Shipments",
        "/FulfillmentOutboundShipment/2010-10-01",
        action,
        schema,
    )
}
