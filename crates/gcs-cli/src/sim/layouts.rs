//! Pre-defined takeoff layouts with UAVs waiting to be assigned to slots.

use gcs_core::geometry::polar_to_cartesian;
use gcs_core::spatial::offset_position;
use gcs_core::{GeoPoint, Orientation};
use rand::Rng;

/// A named layout: UAV positions plus the takeoff slots they must fill.
pub struct ShowLayout {
    pub name: String,
    pub uavs: Vec<(String, GeoPoint)>,
    pub slots: Vec<GeoPoint>,
}

/// Rectangular grid of takeoff slots centred on `center`.
///
/// Slots are listed row by row from the south-west corner.
pub fn takeoff_grid(center: GeoPoint, rows: usize, columns: usize, spacing_m: f64) -> Vec<GeoPoint> {
    let half_width = (columns.saturating_sub(1)) as f64 * spacing_m / 2.0;
    let half_height = (rows.saturating_sub(1)) as f64 * spacing_m / 2.0;

    (0..rows)
        .flat_map(|row| (0..columns).map(move |column| (row, column)))
        .map(|(row, column)| {
            let north_m = row as f64 * spacing_m - half_height;
            let east_m = column as f64 * spacing_m - half_width;
            offset_position(center, north_m, east_m)
        })
        .collect()
}

/// UAVs scattered uniformly over a disc of `radius_m` around the grid.
pub fn create_scattered_layout(
    center: GeoPoint,
    rows: usize,
    columns: usize,
    spacing_m: f64,
    radius_m: f64,
    rng: &mut impl Rng,
) -> ShowLayout {
    let slots = takeoff_grid(center, rows, columns, spacing_m);
    let uavs = (0..slots.len())
        .map(|i| {
            let bearing_deg = rng.random_range(0.0..360.0);
            let distance_m = radius_m * rng.random_range(0.0_f64..1.0).sqrt();
            (uav_id(i), place(center, bearing_deg, distance_m))
        })
        .collect();

    ShowLayout {
        name: "scattered".to_string(),
        uavs,
        slots,
    }
}

/// UAVs parked evenly on a ring of `radius_m` around the grid, e.g. after
/// landing on the perimeter of the show area.
pub fn create_ring_layout(
    center: GeoPoint,
    rows: usize,
    columns: usize,
    spacing_m: f64,
    radius_m: f64,
) -> ShowLayout {
    let slots = takeoff_grid(center, rows, columns, spacing_m);
    let count = slots.len().max(1);
    let uavs = (0..slots.len())
        .map(|i| {
            let bearing_deg = 360.0 * i as f64 / count as f64;
            (uav_id(i), place(center, bearing_deg, radius_m))
        })
        .collect();

    ShowLayout {
        name: "ring".to_string(),
        uavs,
        slots,
    }
}

fn place(center: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let [east_m, north_m] =
        polar_to_cartesian([0.0, 0.0], bearing_deg, distance_m, Orientation::ClockwiseFromNorth);
    offset_position(center, north_m, east_m)
}

fn uav_id(index: usize) -> String {
    format!("UAV{:03}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcs_core::haversine_distance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CENTER: GeoPoint = GeoPoint {
        lat: 47.4979,
        lon: 19.0402,
    };

    #[test]
    fn grid_has_requested_size_and_spacing() {
        let slots = takeoff_grid(CENTER, 3, 4, 5.0);
        assert_eq!(slots.len(), 12);

        let step = haversine_distance(slots[0], slots[1]);
        assert!((step - 5.0).abs() < 0.01, "got {step}");
        assert!(slots[4].lat > slots[0].lat);
    }

    #[test]
    fn scattered_layout_stays_inside_radius() {
        let mut rng = StdRng::seed_from_u64(1);
        let layout = create_scattered_layout(CENTER, 2, 5, 3.0, 80.0, &mut rng);
        assert_eq!(layout.uavs.len(), 10);
        assert_eq!(layout.slots.len(), 10);
        for (_, uav) in &layout.uavs {
            let d = haversine_distance(CENTER, *uav);
            assert!(d <= 80.0 + 1e-6);
        }
    }

    #[test]
    fn ring_layout_starts_north() {
        let layout = create_ring_layout(CENTER, 2, 2, 3.0, 100.0);
        assert_eq!(layout.uavs[0].0, "UAV001");
        let first = layout.uavs[0].1;
        assert!(first.lat > CENTER.lat);
        assert!((first.lon - CENTER.lon).abs() < 1e-9);
    }
}
