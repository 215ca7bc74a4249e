use std::collections::HashMap;

use crate::model::{Order, Zone};

/// Applies per-zone demand factors to a set of orders, returning the scaled
/// volume of each order in input order. Zones without a factor keep their
/// volume unchanged; results are rounded to the nearest unit.
///
/// Pairs with re-invoking the network builder on adjusted volumes to answer
/// what-if questions such as "does the fleet still cover a 30% surge in one
/// zone".
pub fn scale_volumes(orders: &[Order], factors: &HashMap<Zone, f64>) -> Vec<i64> {
    orders
        .iter()
        .map(|order| {
            let factor = factors.get(order.zone()).copied().unwrap_or(1.0);
            (order.volume as f64 * factor).round() as i64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Client;

    fn order(volume: i64, zone_id: &str) -> Order {
        let zone = Zone::new(zone_id).unwrap();
        let client = Client::new(0, "client", zone);
        Order::new(0, client, volume, 1).unwrap()
    }

    #[test]
    fn test_scale_volumes_applies_zone_factor() {
        let orders = vec![order(10, "Z1"), order(20, "Z2")];
        let mut factors = HashMap::new();
        factors.insert(Zone::new("Z1").unwrap(), 1.3);

        assert_eq!(scale_volumes(&orders, &factors), vec![13, 20]);
    }

    #[test]
    fn test_scale_volumes_rounds_to_nearest() {
        let orders = vec![order(3, "Z1")];
        let mut factors = HashMap::new();
        factors.insert(Zone::new("Z1").unwrap(), 1.5);

        assert_eq!(scale_volumes(&orders, &factors), vec![5]);
    }

    #[test]
    fn test_scale_volumes_without_factors_is_identity() {
        let orders = vec![order(7, "Z1"), order(0, "Z2")];
        assert_eq!(scale_volumes(&orders, &HashMap::new()), vec![7, 0]);
    }
}
