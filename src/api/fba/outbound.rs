//! Outbound shipment operations. `CreateFulfillmentOrder` takes line items
//! from [`super::complex::CreateLineItems`], `GetFulfillmentPreview` from
//! [`super::complex::PreviewLineItems`].

use super::{outbound_request, FULFILLMENT_POLICIES, SHIPPING_SPEED_CATEGORIES};
use crate::core::{ParamSpec, Request};

pub fn get_service_status() -> Request {
    outbound_request("GetServiceStatus", &[])
}

const CANCEL_FULFILLMENT_ORDER: &[ParamSpec] = &[ParamSpec::required(
    "SellerFulfillmentOrderId",
    "SellerFulfillmentOrderId",
)];

pub fn cancel_fulfillment_order() -> Request {
    outbound_request("CancelFulfillmentOrder", CANCEL_FULFILLMENT_ORDER)
}

const CREATE_FULFILLMENT_ORDER: &[ParamSpec] = &[
    ParamSpec::required("SellerFulfillmentOrderId", "SellerFulfillmentOrderId"),
    ParamSpec::enumerated(
        "ShippingSpeedCategory",
        "ShippingSpeedCategory",
        SHIPPING_SPEED_CATEGORIES,
        true,
    ),
    ParamSpec::required("DisplayableOrderId", "DisplayableOrderId"),
    ParamSpec::timestamp("DisplayableOrderDateTime", "DisplayableOrderDateTime", false),
    ParamSpec::optional("DisplayableOrderComment", "DisplayableOrderComment"),
    ParamSpec::enumerated("FulfillmentPolicy", "FulfillmentPolicy", FULFILLMENT_POLICIES, false),
    ParamSpec::optional("FulfillmentMethod", "FulfillmentMethod"),
    ParamSpec::list("NotificationEmails", "NotificationEmailList.member", false),
    ParamSpec::optional("DestName", "DestinationAddress.Name"),
    ParamSpec::optional("DestAddressLine1", "DestinationAddress.Line1"),
    ParamSpec::optional("DestAddressLine2", "DestinationAddress.Line2"),
    ParamSpec::optional("DestAddressLine3", "DestinationAddress.Line3"),
    ParamSpec::optional("DestCity", "DestinationAddress.City"),
    ParamSpec::optional("DestStateOrProvince", "DestinationAddress.StateOrProvinceCode"),
    ParamSpec::optional("DestPostalCode", "DestinationAddress.PostalCode"),
    ParamSpec::optional("DestCountryCode", "DestinationAddress.CountryCode"),
    ParamSpec::optional("DestDistrictOrCounty", "DestinationAddress.DistrictOrCounty"),
    ParamSpec::optional("DestPhoneNumber", "DestinationAddress.PhoneNumber"),
    ParamSpec::complex("LineItems", "Items", true),
];

pub fn create_fulfillment_order() -> Request {
    outbound_request("CreateFulfillmentOrder", CREATE_FULFILLMENT_ORDER)
}

const GET_FULFILLMENT_ORDER: &[ParamSpec] = &[ParamSpec::required(
    "SellerFulfillmentOrderId",
    "SellerFulfillmentOrderId",
)];

pub fn get_fulfillment_order() -> Request {
    outbound_request("GetFulfillmentOrder", GET_FULFILLMENT_ORDER)
}

const GET_FULFILLMENT_PREVIEW: &[ParamSpec] = &[
    ParamSpec::optional("ToName", "Address.Name"),
    ParamSpec::optional("ToAddressLine1", "Address.Line1"),
    ParamSpec::optional("ToAddressLine2", "Address.Line2"),
    ParamSpec::optional("ToAddressLine3", "Address.Line3"),
    ParamSpec::optional("ToCity", "Address.City"),
    ParamSpec::optional("ToStateOrProvince", "Address.StateOrProvinceCode"),
    ParamSpec::optional("ToPostalCode", "Address.PostalCode"),
    ParamSpec::optional("ToCountry", "Address.CountryCode"),
    ParamSpec::optional("ToDistrictOrCounty", "Address.DistrictOrCounty"),
    ParamSpec::optional("ToPhoneNumber", "Address.PhoneNumber"),
    ParamSpec::complex("LineItems", "Items", true),
    ParamSpec::enum_list(
        "ShippingSpeeds",
        "ShippingSpeedCategories.member",
        SHIPPING_SPEED_CATEGORIES,
        false,
    ),
];

pub fn get_fulfillment_preview() -> Request {
    outbound_request("GetFulfillmentPreview", GET_FULFILLMENT_PREVIEW)
}

const LIST_ALL_FULFILLMENT_ORDERS: &[ParamSpec] = &[
    ParamSpec::timestamp("QueryStartDateTime", "QueryStartDateTime", true),
    ParamSpec::list("FulfillmentMethods", "FulfillmentMethod.member", false),
];

pub fn list_all_fulfillment_orders() -> Request {
    outbound_request("ListAllFulfillmentOrders", LIST_ALL_FULFILLMENT_ORDERS)
}

const NEXT_TOKEN_ONLY: &[ParamSpec] = &[ParamSpec::required("NextToken", "NextToken")];

pub fn list_all_fulfillment_orders_by_next_token() -> Request {
    outbound_request("ListAllFulfillmentOrdersByNextToken", NEXT_TOKEN_ONLY)
}
