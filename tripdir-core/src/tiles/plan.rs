//! Deciding which tiles to pre-cache.

use crate::geo::{Coordinates, TileCoordinates, lat_lon_to_tile, tiles_per_axis};

/// Default neighborhood radius for a zoom level. Coarse zooms get a wider
/// radius, fine zooms a tighter one, which keeps the tile count roughly
/// level across the zoom range.
pub fn default_radius(zoom: u8) -> u32 {
    let radius = (3.0 - (f64::from(zoom) - 10.0) / 3.0).floor();
    radius.max(1.0) as u32
}

/// Enumerate the square neighborhoods around `center` at each zoom level.
///
/// Out-of-range tile indices are dropped, and enumeration stops the moment
/// `max_tiles` tiles have been collected, even mid-level. The order is
/// deterministic (zoom levels as given, row-major within each level), so
/// the cap always drops the same tiles for the same input.
pub fn tiles_to_cache(
    center: Coordinates,
    zoom_levels: &[u8],
    radius: Option<u32>,
    max_tiles: usize,
) -> Vec<TileCoordinates> {
    let mut tiles = Vec::new();

    for &zoom in zoom_levels {
        let center_tile = lat_lon_to_tile(center.lat, center.lon, zoom);
        let r = i64::from(radius.unwrap_or_else(|| default_radius(zoom)));
        let per_axis = i64::from(tiles_per_axis(zoom));

        for dy in -r..=r {
            for dx in -r..=r {
                if tiles.len() >= max_tiles {
                    return tiles;
                }
                let x = i64::from(center_tile.x) + dx;
                let y = i64::from(center_tile.y) + dy;
                if x < 0 || y < 0 || x >= per_axis || y >= per_axis {
                    continue;
                }
                tiles.push(TileCoordinates {
                    x: x as u32,
                    y: y as u32,
                    z: zoom,
                });
            }
        }
    }

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: Coordinates = Coordinates {
        lat: 48.8566,
        lon: 2.3522,
    };

    #[test]
    fn test_default_radius_shrinks_with_zoom() {
        assert_eq!(default_radius(8), 3);
        assert_eq!(default_radius(10), 3);
        assert_eq!(default_radius(13), 2);
        assert_eq!(default_radius(16), 1);
        // Never below one, however deep the zoom.
        assert_eq!(default_radius(19), 1);
    }

    #[test]
    fn test_three_by_three_neighborhood() {
        let tiles = tiles_to_cache(PARIS, &[14], Some(1), 200);
        assert_eq!(tiles.len(), 9);
        assert!(tiles.iter().all(|t| t.z == 14));
        for t in &tiles {
            assert!((8298..=8300).contains(&t.x));
            assert!((5635..=5637).contains(&t.y));
        }
    }

    #[test]
    fn test_global_cap_cuts_mid_level() {
        let uncapped = tiles_to_cache(PARIS, &[12, 14], None, usize::MAX);
        let capped = tiles_to_cache(PARIS, &[12, 14], None, 30);
        assert!(uncapped.len() > 30);
        assert_eq!(capped.len(), 30);
        // The cap drops the tail, never reorders the front.
        assert_eq!(&uncapped[..30], &capped[..]);
    }

    #[test]
    fn test_never_exceeds_max_tiles() {
        for max in [0, 1, 9, 200] {
            let tiles = tiles_to_cache(PARIS, &[10, 12, 14, 16], None, max);
            assert!(tiles.len() <= max);
        }
    }

    #[test]
    fn test_out_of_range_tiles_are_dropped() {
        // Zoom 0 has a single tile; the whole neighborhood collapses to it.
        let tiles = tiles_to_cache(PARIS, &[0], Some(3), 200);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0], TileCoordinates { x: 0, y: 0, z: 0 });

        // Near the north pole the rows above the edge are filtered out.
        let arctic = Coordinates { lat: 89.9, lon: 0.0 };
        let tiles = tiles_to_cache(arctic, &[3], Some(1), 200);
        assert!(tiles.len() < 9);
        assert!(tiles.iter().all(|t| t.y < tiles_per_axis(3)));
    }

    #[test]
    fn test_zoom_levels_keep_given_order() {
        let tiles = tiles_to_cache(PARIS, &[16, 14], Some(1), 200);
        assert_eq!(tiles.len(), 18);
        assert!(tiles[..9].iter().all(|t| t.z == 16));
        assert!(tiles[9..].iter().all(|t| t.z == 14));
    }
}
