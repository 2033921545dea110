//! Geographic coordinates and slippy-map tile math.

use serde::{Deserialize, Serialize};

/// A point on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A map tile address in the standard slippy-map scheme: `x`/`y` are the
/// column and row at zoom `z`, both in `[0, 2^z)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoordinates {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

/// Number of tiles along one axis at `zoom`.
pub fn tiles_per_axis(zoom: u8) -> u32 {
    1u32 << zoom
}

/// The Web Mercator tile containing a point. Indices are clamped into the
/// valid range so pole-adjacent and antimeridian input stays addressable.
pub fn lat_lon_to_tile(lat: f64, lon: f64, zoom: u8) -> TileCoordinates {
    let n = f64::from(tiles_per_axis(zoom));
    let max = n - 1.0;

    let x = ((lon + 180.0) / 360.0 * n).floor();

    let lat_rad = lat.to_radians();
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * n)
        .floor();

    TileCoordinates {
        x: x.clamp(0.0, max) as u32,
        y: y.clamp(0.0, max) as u32,
        z: zoom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paris_tile_at_zoom_14() {
        let tile = lat_lon_to_tile(48.8566, 2.3522, 14);
        assert_eq!((tile.x, tile.y, tile.z), (8299, 5636, 14));
    }

    #[test]
    fn test_world_origin() {
        assert_eq!(
            lat_lon_to_tile(0.0, 0.0, 0),
            TileCoordinates { x: 0, y: 0, z: 0 }
        );
        // At zoom 1 the equator/meridian point is the south-east corner of
        // the north-west quadrant boundary.
        assert_eq!(
            lat_lon_to_tile(0.0, 0.0, 1),
            TileCoordinates { x: 1, y: 1, z: 1 }
        );
    }

    #[test]
    fn test_indices_stay_in_range() {
        let lats = [-90.0, -85.0511, -45.0, 0.0, 45.0, 85.0511, 90.0];
        let lons = [-180.0, -179.9, -90.0, 0.0, 90.0, 179.9, 180.0];
        for zoom in [0u8, 1, 5, 10, 14, 19] {
            let per_axis = tiles_per_axis(zoom);
            for &lat in &lats {
                for &lon in &lons {
                    let tile = lat_lon_to_tile(lat, lon, zoom);
                    assert!(tile.x < per_axis, "x out of range at z{zoom} ({lat},{lon})");
                    assert!(tile.y < per_axis, "y out of range at z{zoom} ({lat},{lon})");
                }
            }
        }
    }

    #[test]
    fn test_poles_clamp_to_edge_rows() {
        let north = lat_lon_to_tile(89.9, 0.0, 10);
        let south = lat_lon_to_tile(-89.9, 0.0, 10);
        assert_eq!(north.y, 0);
        assert_eq!(south.y, tiles_per_axis(10) - 1);
    }
}
