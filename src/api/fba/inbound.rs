//! Inbound shipment operations. Complex fields pair with the constructors in
//! [`super::complex`]: `InboundShipmentItems` for create/update shipment,
//! `InboundShipmentPlanRequestItems` for shipment plans, and the four
//! transport-detail builders for `PutTransportContent`.

use super::inbound_request;
use crate::core::{ParamSpec, Request};

pub fn get_service_status() -> Request {
    inbound_request("GetServiceStatus", &[])
}

const CREATE_INBOUND_SHIPMENT: &[ParamSpec] = &[
    ParamSpec::required("ShipmentId", "ShipmentId"),
    ParamSpec::required("ShipmentName", "InboundShipmentHeader.ShipmentName"),
    ParamSpec::required("ShipFromName", "InboundShipmentHeader.ShipFromAddress.Name"),
    ParamSpec::required(
        "ShipFromAddressLine1",
        "InboundShipmentHeader.ShipFromAddress.AddressLine1",
    ),
    ParamSpec::optional(
        "ShipFromAddressLine2",
        "InboundShipmentHeader.ShipFromAddress.AddressLine2",
    ),
    ParamSpec::required("ShipFromAddressCity", "InboundShipmentHeader.ShipFromAddress.City"),
    ParamSpec::optional(
        "ShipFromDistrictOrCounty",
        "InboundShipmentHeader.ShipFromAddress.DistrictOrCounty",
    ),
    ParamSpec::required(
        "ShipFromStateOrProvince",
        "InboundShipmentHeader.ShipFromAddress.StateOrProvinceCode",
    ),
    ParamSpec::required(
        "ShipFromPostalCode",
        "InboundShipmentHeader.ShipFromAddress.PostalCode",
    ),
    ParamSpec::required(
        "ShipFromCountryCode",
        "InboundShipmentHeader.ShipFromAddress.CountryCode",
    ),
    ParamSpec::required(
        "DestinationFulfillmentCenterId",
        "InboundShipmentHeader.DestinationFulfillmentCenterId",
    ),
    ParamSpec::optional("AreCasesRequired", "InboundShipmentHeader.AreCasesRequired"),
    ParamSpec::required("ShipmentStatus", "InboundShipmentHeader.ShipmentStatus"),
    ParamSpec::optional(
        "IntendedBoxContentsSource",
        "InboundShipmentHeader.IntendedBoxContentsSource",
    ),
    ParamSpec::optional("LabelPrepPreference", "InboundShipmentHeader.LabelPrepPreference"),
    ParamSpec::complex("InboundShipmentItems", "InboundShipmentItems", true),
];

pub fn create_inbound_shipment() -> Request {
    inbound_request("CreateInboundShipment", CREATE_INBOUND_SHIPMENT)
}

const CREATE_INBOUND_SHIPMENT_PLAN: &[ParamSpec] = &[
    ParamSpec::required("LabelPrepPreference", "LabelPrepPreference"),
    ParamSpec::optional("ShipFromName", "ShipFromAddress.Name"),
    ParamSpec::optional("ShipFromAddressLine1", "ShipFromAddress.AddressLine1"),
    ParamSpec::optional("ShipFromCity", "ShipFromAddress.City"),
    ParamSpec::optional("ShipFromStateOrProvince", "ShipFromAddress.StateOrProvinceCode"),
    ParamSpec::optional("ShipFromPostalCode", "ShipFromAddress.PostalCode"),
    ParamSpec::optional("ShipFromCountryCode", "ShipFromAddress.CountryCode"),
    ParamSpec::optional("ShipFromAddressLine2", "ShipFromAddress.AddressLine2"),
    ParamSpec::optional("ShipFromDistrictOrCounty", "ShipFromAddress.DistrictOrCounty"),
    ParamSpec::complex(
        "InboundShipmentPlanRequestItems",
        "InboundShipmentPlanRequestItems",
        true,
    ),
];

pub fn create_inbound_shipment_plan() -> Request {
    inbound_request("CreateInboundShipmentPlan", CREATE_INBOUND_SHIPMENT_PLAN)
}

const LIST_INBOUND_SHIPMENT_ITEMS: &[ParamSpec] = &[
    ParamSpec::required("ShipmentId", "ShipmentId"),
    ParamSpec::timestamp("LastUpdatedAfter", "LastUpdatedAfter", false),
    ParamSpec::timestamp("LastUpdatedBefore", "LastUpdatedBefore", false),
];

pub fn list_inbound_shipment_items() -> Request {
    inbound_request("ListInboundShipmentItems", LIST_INBOUND_SHIPMENT_ITEMS)
}

const NEXT_TOKEN_ONLY: &[ParamSpec] = &[ParamSpec::required("NextToken", "NextToken")];

pub fn list_inbound_shipment_items_by_next_token() -> Request {
    inbound_request("ListInboundShipmentItemsByNextToken", NEXT_TOKEN_ONLY)
}

const LIST_INBOUND_SHIPMENTS: &[ParamSpec] = &[
    ParamSpec::list("ShipmentStatuses", "ShipmentStatusList.member", false),
    ParamSpec::list("ShipmentIds", "ShipmentIdList.member", false),
    ParamSpec::timestamp("LastUpdatedAfter", "LastUpdatedAfter", false),
    ParamSpec::timestamp("LastUpdatedBefore", "LastUpdatedBefore", false),
];

pub fn list_inbound_shipments() -> Request {
    inbound_request("ListInboundShipments", LIST_INBOUND_SHIPMENTS)
}

pub fn list_inbound_shipments_by_next_token() -> Request {
    inbound_request("ListInboundShipmentsByNextToken", NEXT_TOKEN_ONLY)
}

const UPDATE_INBOUND_SHIPMENT: &[ParamSpec] = &[
    ParamSpec::required("ShipmentId", "ShipmentId"),
    ParamSpec::required("ShipmentName", "InboundShipmentHeader.ShipmentName"),
    ParamSpec::required("ShipFromName", "InboundShipmentHeader.ShipFromAddress.Name"),
    ParamSpec::required(
        "ShipFromAddressLine1",
        "InboundShipmentHeader.ShipFromAddress.AddressLine1",
    ),
    ParamSpec::optional(
        "ShipFromAddressLine2",
        "InboundShipmentHeader.ShipFromAddress.AddressLine2",
    ),
    ParamSpec::required("ShipFromAddressCity", "InboundShipmentHeader.ShipFromAddress.City"),
    ParamSpec::optional(
        "ShipFromDistrictOrCounty",
        "InboundShipmentHeader.ShipFromAddress.DistrictOrCounty",
    ),
    ParamSpec::required(
        "ShipFromStateOrProvince",
        "InboundShipmentHeader.ShipFromAddress.StateOrProvinceCode",
    ),
    ParamSpec::required(
        "ShipFromPostalCode",
        "InboundShipmentHeader.ShipFromAddress.PostalCode",
    ),
    ParamSpec::required(
        "ShipFromCountryCode",
        "InboundShipmentHeader.ShipFromAddress.CountryCode",
    ),
    ParamSpec::required(
        "DestinationFulfillmentCenterId",
        "InboundShipmentHeader.DestinationFulfillmentCenterId",
    ),
    ParamSpec::optional("ShipmentStatus", "InboundShipmentHeader.ShipmentStatus"),
    ParamSpec::optional("LabelPrepPreference", "InboundShipmentHeader.LabelPrepPreference"),
    ParamSpec::complex("InboundShipmentItems", "InboundShipmentItems", true),
];

pub fn update_inbound_shipment() -> Request {
    inbound_request("UpdateInboundShipment", UPDATE_INBOUND_SHIPMENT)
}

const PUT_TRANSPORT_CONTENT: &[ParamSpec] = &[
    ParamSpec::required("ShipmentId", "ShipmentId"),
    ParamSpec::boolean("IsPartnered", "IsPartnered", true),
    ParamSpec::required("ShipmentType", "ShipmentType"),
    ParamSpec::complex(
        "PartneredSmallParcelData",
        "TransportDetails.PartneredSmallParcelData",
        true,
    ),
    ParamSpec::complex(
        "NonPartneredSmallParcelData",
        "TransportDetails.NonPartneredSmallParcelData",
        false,
    ),
    ParamSpec::complex("PartneredLtlData", "TransportDetails.PartneredLtlData", false),
    ParamSpec::complex(
        "NonPartneredLtlData",
        "TransportDetails.NonPartneredLtlData",
        false,
    ),
];

pub fn put_transport_content() -> Request {
    inbound_request("PutTransportContent", PUT_TRANSPORT_CONTENT)
}
