//! Aggregated per-building figures, recomputed on every read.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildingOccupancy {
    #[serde(rename = "buildingID")]
    pub building_id: i32,
    pub building_no: String,
    /// Sum of room capacities
    pub total_capacity: i64,
    /// Students assigned to any room of the building
    pub occupied_beds: i64,
    /// Percent, two decimals
    pub occupancy_rate: f64,
}

impl BuildingOccupancy {
    pub fn new(building_id: i32, building_no: String, total_capacity: i64, occupied_beds: i64) -> Self {
        Self {
            building_id,
            building_no,
            total_capacity,
            occupied_beds,
            occupancy_rate: occupancy_rate(occupied_beds, total_capacity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildingPaymentSummary {
    #[serde(rename = "buildingID")]
    pub building_id: i32,
    pub building_no: String,
    pub total_amount: f64,
}

/// `occupied * 100 / total` rounded to two decimals; 0 for an empty building.
pub fn occupancy_rate(occupied: i64, total_capacity: i64) -> f64 {
    if total_capacity <= 0 {
        return 0.0;
    }
    let percent = occupied as f64 * 100.0 / total_capacity as f64;
    (percent * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_zero_rate() {
        assert_eq!(occupancy_rate(0, 0), 0.0);
        assert_eq!(occupancy_rate(3, 0), 0.0);
    }

    #[test]
    fn rate_is_rounded_to_two_decimals() {
        // 1/3 = 33.333…%
        assert_eq!(occupancy_rate(1, 3), 33.33);
        // 2/3 = 66.666…%
        assert_eq!(occupancy_rate(2, 3), 66.67);
        assert_eq!(occupancy_rate(50, 200), 25.0);
        assert_eq!(occupancy_rate(4, 4), 100.0);
    }

    #[test]
    fn new_derives_rate() {
        let o = BuildingOccupancy::new(1, "A1".into(), 8, 3);
        assert_eq!(o.occupancy_rate, 37.5);
    }
}
