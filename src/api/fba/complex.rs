//! Typed constructors for the complex (nested) parameter structures the FBA
//! operations accept. Each builder owns the wire base name and flattens into
//! the indexed query-parameter form when the request renders.

use crate::core::value::format_timestamp;
use crate::core::{ComplexList, ComplexObject, ParamValue};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Item dimensions for parcel packages and pallets.
#[derive(Debug, Clone)]
pub struct Dimensions {
    pub length: String,
    pub width: String,
    pub height: String,
    pub unit: String,
}

/// Weight value plus unit (e.g. `pounds`, `kilograms`).
#[derive(Debug, Clone)]
pub struct Weight {
    pub value: String,
    pub unit: String,
}

/// Monetary amount kept as a decimal string, the way MWS expects it.
#[derive(Debug, Clone)]
pub struct CurrencyAmount {
    pub value: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub fax: Option<String>,
}

/// Line items for `CreateInboundShipment` and `UpdateInboundShipment`.
#[derive(Debug, Clone)]
pub struct InboundShipmentItems {
    list: ComplexList,
}

impl InboundShipmentItems {
    pub fn new() -> Self {
        Self {
            list: ComplexList::new("InboundShipmentItems.member"),
        }
    }

    pub fn add(mut self, quantity_shipped: u32, seller_sku: &str) -> Self {
        let mut member = BTreeMap::new();
        member.insert("QuantityShipped".to_string(), quantity_shipped.to_string());
        member.insert("SellerSKU".to_string(), seller_sku.to_string());
        self.list.push_member(member);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Default for InboundShipmentItems {
    fn default() -> Self {
        Self::new()
    }
}

impl From<InboundShipmentItems> for ParamValue {
    fn from(items: InboundShipmentItems) -> Self {
        items.list.into()
    }
}

/// Requested items for `CreateInboundShipmentPlan`.
#[derive(Debug, Clone)]
pub struct InboundShipmentPlanRequestItems {
    list: ComplexList,
}

impl InboundShipmentPlanRequestItems {
    pub fn new() -> Self {
        Self {
            list: ComplexList::new("InboundShipmentPlanRequestItems.member"),
        }
    }

    pub fn add(mut self, seller_sku: &str, asin: &str, quantity: u32, condition: &str) -> Self {
        let mut member = BTreeMap::new();
        member.insert("SellerSKU".to_string(), seller_sku.to_string());
        member.insert("ASIN".to_string(), asin.to_string());
        member.insert("Quantity".to_string(), quantity.to_string());
        member.insert("Condition".to_string(), condition.to_string());
        self.list.push_member(member);
        self
    }
}

impl Default for InboundShipmentPlanRequestItems {
    fn default() -> Self {
        Self::new()
    }
}

impl From<InboundShipmentPlanRequestItems> for ParamValue {
    fn from(items: InboundShipmentPlanRequestItems) -> Self {
        items.list.into()
    }
}

/// One line of a `CreateFulfillmentOrder` request.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub displayable_comment: String,
    pub gift_message: String,
    pub per_unit_declared_value: CurrencyAmount,
    pub quantity: u32,
    pub seller_fulfillment_order_item_id: String,
    pub seller_sku: String,
}

/// Line items for `CreateFulfillmentOrder`, the widest of the complex lists.
#[derive(Debug, Clone)]
pub struct CreateLineItems {
    list: ComplexList,
}

impl CreateLineItems {
    pub fn new() -> Self {
        Self {
            list: ComplexList::new("Items.member"),
        }
    }

    pub fn add(mut self, item: LineItem) -> Self {
        let mut member = BTreeMap::new();
        member.insert("DisplayableComment".to_string(), item.displayable_comment);
        member.insert("GiftMessage".to_string(), item.gift_message);
        member.insert(
            "PerUnitDeclaredValue.Value".to_string(),
            item.per_unit_declared_value.value,
        );
        member.insert(
            "PerUnitDeclaredValue.CurrencyCode".to_string(),
            item.per_unit_declared_value.currency_code,
        );
        member.insert("Quantity".to_string(), item.quantity.to_string());
        member.insert(
            "SellerFulfillmentOrderItemId".to_string(),
            item.seller_fulfillment_order_item_id,
        );
        member.insert("SellerSKU".to_string(), item.seller_sku);
        self.list.push_member(member);
        self
    }
}

impl Default for CreateLineItems {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CreateLineItems> for ParamValue {
    fn from(items: CreateLineItems) -> Self {
        items.list.into()
    }
}

/// One line of a `GetFulfillmentPreview` request. Shipping-weight fields are
/// only emitted when present.
#[derive(Debug, Clone)]
pub struct PreviewLineItem {
    pub quantity: u32,
    pub seller_fulfillment_order_item_id: String,
    pub seller_sku: String,
    pub estimated_shipping_weight: Option<String>,
    pub shipping_weight_calculation_method: Option<String>,
}

/// Line items for `GetFulfillmentPreview`.
#[derive(Debug, Clone)]
pub struct PreviewLineItems {
    list: ComplexList,
}

impl PreviewLineItems {
    pub fn new() -> Self {
        Self {
            list: ComplexList::new("Items.member"),
        }
    }

    pub fn add(mut self, item: PreviewLineItem) -> Self {
        let mut member = BTreeMap::new();
        member.insert("Quantity".to_string(), item.quantity.to_string());
        member.insert(
            "SellerFulfillmentOrderItemId".to_string(),
            item.seller_fulfillment_order_item_id,
        );
        member.insert("SellerSKU".to_string(), item.seller_sku);
        if let Some(weight) = item.estimated_shipping_weight {
            member.insert("EstimatedShippingWeight".to_string(), weight);
        }
        if let Some(method) = item.shipping_weight_calculation_method {
            member.insert("ShippingWeightCalculationMethod".to_string(), method);
        }
        self.list.push_member(member);
        self
    }
}

impl Default for PreviewLineItems {
    fn default() -> Self {
        Self::new()
    }
}

impl From<PreviewLineItems> for ParamValue {
    fn from(items: PreviewLineItems) -> Self {
        items.list.into()
    }
}

/// Parcel described by dimensions and weight, for partnered small-parcel
/// transport.
#[derive(Debug, Clone)]
pub struct ParcelPackage {
    pub dimensions: Dimensions,
    pub weight: Weight,
}

fn package_member(package: &ParcelPackage) -> BTreeMap<String, String> {
    let mut member = BTreeMap::new();
    member.insert("Dimensions.Length".to_string(), package.dimensions.length.clone());
    member.insert("Dimensions.Width".to_string(), package.dimensions.width.clone());
    member.insert("Dimensions.Height".to_string(), package.dimensions.height.clone());
    member.insert("Dimensions.Unit".to_string(), package.dimensions.unit.clone());
    member.insert("Weight.Value".to_string(), package.weight.value.clone());
    member.insert("Weight.Unit".to_string(), package.weight.unit.clone());
    member
}

/// `TransportDetails.PartneredSmallParcelData` for `PutTransportContent`.
pub fn partnered_small_parcel_data(
    carrier_name: Option<&str>,
    packages: &[ParcelPackage],
) -> ComplexObject {
    let mut object = ComplexObject::new("TransportDetails.PartneredSmallParcelData");

    if let Some(carrier) = carrier_name {
        object.set_field("CarrierName", carrier);
    }

    if !packages.is_empty() {
        let mut list =
            ComplexList::new("TransportDetails.PartneredSmallParcelData.PackageList.member");
        for package in packages {
            list.push_member(package_member(package));
        }
        object.push_list(list);
    }

    object
}

/// `TransportDetails.NonPartneredSmallParcelData` for `PutTransportContent`.
/// Packages here carry only tracking identifiers.
pub fn non_partnered_small_parcel_data(
    carrier_name: Option<&str>,
    tracking_ids: &[&str],
) -> ComplexObject {
    let mut object = ComplexObject::new("TransportDetails.NonPartneredSmallParcelData");

    if let Some(carrier) = carrier_name {
        object.set_field("CarrierName", carrier);
    }

    if !tracking_ids.is_empty() {
        let mut list =
            ComplexList::new("TransportDetails.NonPartneredSmallParcelData.PackageList.member");
        for tracking_id in tracking_ids {
            let mut member = BTreeMap::new();
            member.insert("TrackingId".to_string(), tracking_id.to_string());
            list.push_member(member);
        }
        object.push_list(list);
    }

    object
}

/// Pallet entry for partnered LTL transport.
#[derive(Debug, Clone)]
pub struct Pallet {
    pub dimensions: Dimensions,
    pub weight: Weight,
    pub is_stacked: bool,
}

/// Inputs for `TransportDetails.PartneredLtlData`. Everything optional is
/// omitted from the wire form when unset.
#[derive(Debug, Clone, Default)]
pub struct PartneredLtlData {
    pub contact: Option<Contact>,
    pub box_count: Option<u32>,
    pub seller_freight_class: Option<String>,
    pub freight_ready_date: Option<DateTime<Utc>>,
    pub pallets: Vec<Pallet>,
    pub total_weight: Option<Weight>,
    pub seller_declared_value: Option<CurrencyAmount>,
}

/// `TransportDetails.PartneredLtlData` for `PutTransportContent`.
pub fn partnered_ltl_data(data: &PartneredLtlData) -> ComplexObject {
    let mut object = ComplexObject::new("TransportDetails.PartneredLtlData");

    if let Some(contact) = &data.contact {
        if let Some(name) = &contact.name {
            object.set_field("Contact.Name", name);
        }
        if let Some(phone) = &contact.phone {
            object.set_field("Contact.Phone", phone);
        }
        if let Some(email) = &contact.email {
            object.set_field("Contact.Email", email);
        }
        if let Some(fax) = &contact.fax {
            object.set_field("Contact.Fax", fax);
        }
    }

    if let Some(box_count) = data.box_count {
        object.set_field("BoxCount", box_count.to_string());
    }
    if let Some(freight_class) = &data.seller_freight_class {
        object.set_field("SellerFreightClass", freight_class);
    }
    if let Some(ready_date) = &data.freight_ready_date {
        object.set_field("FreightReadyDate", format_timestamp(ready_date));
    }

    if !data.pallets.is_empty() {
        let mut list = ComplexList::new("TransportDetails.PartneredLtlData.PalletList.member");
        for pallet in &data.pallets {
            let mut member = package_member(&ParcelPackage {
                dimensions: pallet.dimensions.clone(),
                weight: pallet.weight.clone(),
            });
            member.insert("IsStacked".to_string(), pallet.is_stacked.to_string());
            list.push_member(member);
        }
        object.push_list(list);
    }

    if let Some(total_weight) = &data.total_weight {
        object.set_field("TotalWeight.Value", &total_weight.value);
        object.set_field("TotalWeight.Unit", &total_weight.unit);
    }

    if let Some(declared) = &data.seller_declared_value {
        object.set_field("SellerDeclaredValue.CurrencyCode", &declared.currency_code);
        object.set_field("SellerDeclaredValue.Value", &declared.value);
    }

    object
}

/// `TransportDetails.NonPartneredLtlData` for `PutTransportContent`.
pub fn non_partnered_ltl_data(
    carrier_name: Option<&str>,
    pro_number: Option<&str>,
) -> ComplexObject {
    let mut object = ComplexObject::new("TransportDetails.NonPartneredLtlData");

    if let Some(carrier) = carrier_name {
        object.set_field("CarrierName", carrier);
    }
    if let Some(pro) = pro_number {
        object.set_field("ProNumber", pro);
    }

    object
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn flatten(object: &ComplexObject) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        object.append_to(&mut out);
        out
    }

    #[test]
    fn test_inbound_shipment_items_members() {
        let items = InboundShipmentItems::new().add(10, "SKU-A").add(5, "SKU-B");
        assert_eq!(items.len(), 2);

        let value = ParamValue::from(items);
        let ParamValue::Complex(complex) = value else {
            panic!("expected complex value");
        };
        let mut out = BTreeMap::new();
        complex.append_to(&mut out);

        assert_eq!(
            out.get("InboundShipmentItems.member.1.QuantityShipped"),
            Some(&"10".to_string())
        );
        assert_eq!(
            out.get("InboundShipmentItems.member.2.SellerSKU"),
            Some(&"SKU-B".to_string())
        );
    }

    #[test]
    fn test_plan_request_items_carry_condition() {
        let items = InboundShipmentPlanRequestItems::new().add("SKU-A", "B000TEST00", 4, "NewItem");

        let ParamValue::Complex(complex) = ParamValue::from(items) else {
            panic!("expected complex value");
        };
        let mut out = BTreeMap::new();
        complex.append_to(&mut out);

        assert_eq!(
            out.get("InboundShipmentPlanRequestItems.member.1.ASIN"),
            Some(&"B000TEST00".to_string())
        );
        assert_eq!(
            out.get("InboundShipmentPlanRequestItems.member.1.Condition"),
            Some(&"NewItem".to_string())
        );
    }

    #[test]
    fn test_preview_line_items_skip_absent_weight_fields() {
        let items = PreviewLineItems::new().add(PreviewLineItem {
            quantity: 1,
            seller_fulfillment_order_item_id: "item-1".to_string(),
            seller_sku: "SKU-A".to_string(),
            estimated_shipping_weight: None,
            shipping_weight_calculation_method: None,
        });

        let ParamValue::Complex(complex) = ParamValue::from(items) else {
            panic!("expected complex value");
        };
        let mut out = BTreeMap::new();
        complex.append_to(&mut out);

        assert_eq!(out.get("Items.member.1.SellerSKU"), Some(&"SKU-A".to_string()));
        assert!(!out.contains_key("Items.member.1.EstimatedShippingWeight"));
    }

    #[test]
    fn test_partnered_small_parcel_data_shape() {
        let packages = [ParcelPackage {
            dimensions: Dimensions {
                length: "10".to_string(),
                width: "8".to_string(),
                height: "6".to_string(),
                unit: "inches".to_string(),
            },
            weight: Weight {
                value: "40".to_string(),
                unit: "pounds".to_string(),
            },
        }];

        let out = flatten(&partnered_small_parcel_data(Some("UPS"), &packages));

        assert_eq!(
            out.get("TransportDetails.PartneredSmallParcelData.CarrierName"),
            Some(&"UPS".to_string())
        );
        assert_eq!(
            out.get(
                "TransportDetails.PartneredSmallParcelData.PackageList.member.1.Dimensions.Length"
            ),
            Some(&"10".to_string())
        );
        assert_eq!(
            out.get("TransportDetails.PartneredSmallParcelData.PackageList.member.1.Weight.Unit"),
            Some(&"pounds".to_string())
        );
    }

    #[test]
    fn test_partnered_small_parcel_data_without_packages() {
        let out = flatten(&partnered_small_parcel_data(None, &[]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_non_partnered_small_parcel_tracking_ids() {
        let out = flatten(&non_partnered_small_parcel_data(
            Some("DHL"),
            &["1Z999AA1", "1Z999AA2"],
        ));

        assert_eq!(
            out.get("TransportDetails.NonPartneredSmallParcelData.PackageList.member.2.TrackingId"),
            Some(&"1Z999AA2".to_string())
        );
    }

    #[test]
    fn test_partnered_ltl_data_full_shape() {
        let data = PartneredLtlData {
            contact: Some(Contact {
                name: Some("Jordan".to_string()),
                phone: Some("555-0100".to_string()),
                email: None,
                fax: None,
            }),
            box_count: Some(12),
            seller_freight_class: Some("55".to_string()),
            freight_ready_date: Some(Utc.with_ymd_and_hms(2016, 8, 1, 0, 0, 0).unwrap()),
            pallets: vec![Pallet {
                dimensions: Dimensions {
                    length: "48".to_string(),
                    width: "40".to_string(),
                    height: "60".to_string(),
                    unit: "inches".to_string(),
                },
                weight: Weight {
                    value: "500".to_string(),
                    unit: "pounds".to_string(),
                },
                is_stacked: true,
            }],
            total_weight: Some(Weight {
                value: "500".to_string(),
                unit: "pounds".to_string(),
            }),
            seller_declared_value: Some(CurrencyAmount {
                value: "1200.00".to_string(),
                currency_code: "USD".to_string(),
            }),
        };

        let out = flatten(&partnered_ltl_data(&data));

        assert_eq!(
            out.get("TransportDetails.PartneredLtlData.Contact.Name"),
            Some(&"Jordan".to_string())
        );
        assert!(!out.contains_key("TransportDetails.PartneredLtlData.Contact.Email"));
        assert_eq!(
            out.get("TransportDetails.PartneredLtlData.BoxCount"),
            Some(&"12".to_string())
        );
        assert_eq!(
            out.get("TransportDetails.PartneredLtlData.FreightReadyDate"),
            Some(&"2016-08-01T00:00:00.000Z".to_string())
        );
        assert_eq!(
            out.get("TransportDetails.PartneredLtlData.PalletList.member.1.IsStacked"),
            Some(&"true".to_string())
        );
        assert_eq!(
            out.get("TransportDetails.PartneredLtlData.SellerDeclaredValue.CurrencyCode"),
            Some(&"USD".to_string())
        );
    }

    #[test]
    fn test_non_partnered_ltl_data() {
        let out = flatten(&non_partnered_ltl_data(Some("XPO"), Some("PRO-123")));
        assert_eq!(
            out.get("TransportDetails.NonPartneredLtlData.CarrierName"),
            Some(&"XPO".to_string())
        );
        assert_eq!(
            out.get("TransportDetails.NonPartneredLtlData.ProNumber"),
            Some(&"PRO-123".to_string())
        );
    }
}
