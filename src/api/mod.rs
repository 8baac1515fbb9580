pub mod fba;
pub mod finances;

use crate::core::Request;

/// Every operation this crate can construct, in catalog order. Used by the
/// describe tool; handy for callers that want to enumerate support.
pub fn catalog() -> Vec<Request> {
    vec![
        fba::inbound::get_service_status(),
        fba::inbound::create_inbound_shipment(),
        fba::inbound::create_inbound_shipment_plan(),
        fba::inbound::list_inbound_shipment_items(),
        fba::inbound::list_inbound_shipment_items_by_next_token(),
        fba::inbound::list_inbound_shipments(),
        fba::inbound::list_inbound_shipments_by_next_token(),
        fba::inbound::update_inbound_shipment(),
        fba::inbound::put_transport_content(),
        fba::inventory::get_service_status(),
        fba::inventory::list_inventory_supply(),
        fba::inventory::list_inventory_supply_by_next_token(),
        fba::outbound::get_service_status(),
        fba::outbound::cancel_fulfillment_order(),
        fba::outbound::create_fulfillment_order(),
        fba::outbound::get_fulfillment_order(),
        fba::outbound::get_fulfillment_preview(),
        fba::outbound::list_all_fulfillment_orders(),
        fba::outbound::list_all_fulfillment_orders_by_next_token(),
        finances::get_service_status(),
        finances::list_financial_events(),
        finances::list_financial_events_by_next_token(),
        finances::list_financial_event_groups(),
        finances::list_financial_event_groups_by_next_token(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_actions_are_unique_per_path() {
        let ops = catalog();
        let mut seen = HashSet::new();
        for op in &ops {
            assert!(
                seen.insert((op.path(), op.action())),
                "duplicate operation {} at {}",
                op.action(),
                op.path()
            );
        }
        assert_eq!(ops.len(), 24);
    }
}
