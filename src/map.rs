//! Map Geometry
//!
//! Marker placement and Web-Mercator projection for the requests map.

use std::f64::consts::PI;

use crate::models::Solicitacao;
use crate::status::Status;

pub const TILE_SIZE: f64 = 256.0;

/// Half-width, in degrees, of the area used for requests without coordinates
const PLACEHOLDER_SPREAD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// splitmix64 step, used to spread markers deterministically
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn unit(z: u64) -> f64 {
    (z >> 11) as f64 / (1u64 << 53) as f64
}

/// Real coordinates when the request has both, otherwise a stable spot near `center`
pub fn marker_location(solicitacao: &Solicitacao, center: LatLng) -> LatLng {
    if let (Some(lat), Some(lng)) = (solicitacao.latitude, solicitacao.longitude) {
        return LatLng { lat, lng };
    }
    let a = mix(solicitacao.id as u64);
    let b = mix(a);
    LatLng {
        lat: center.lat + (unit(a) - 0.5) * 2.0 * PLACEHOLDER_SPREAD,
        lng: center.lng + (unit(b) - 0.5) * 2.0 * PLACEHOLDER_SPREAD,
    }
}

/// Global pixel coordinates at `zoom`
fn world_pixel(point: LatLng, zoom: u8) -> (f64, f64) {
    let scale = TILE_SIZE * f64::from(1u32 << zoom);
    let x = (point.lng + 180.0) / 360.0 * scale;
    let sin_lat = (point.lat * PI / 180.0).sin().clamp(-0.9999, 0.9999);
    let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * scale;
    (x, y)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    /// Position of the tile's top-left corner inside the viewport
    pub left: f64,
    pub top: f64,
}

impl Tile {
    pub fn url(&self) -> String {
        format!("https://tile.openstreetmap.org/{}/{}/{}.png", self.z, self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub id: u32,
    pub status: Status,
    pub x: f64,
    pub y: f64,
}

/// Fixed-size window onto the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    fn origin(&self) -> (f64, f64) {
        let (cx, cy) = world_pixel(self.center, self.zoom);
        (cx - self.width / 2.0, cy - self.height / 2.0)
    }

    /// Viewport pixel coordinates of a point
    pub fn project(&self, point: LatLng) -> (f64, f64) {
        let (ox, oy) = self.origin();
        let (x, y) = world_pixel(point, self.zoom);
        (x - ox, y - oy)
    }

    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    /// Tiles covering the viewport, left to right, top to bottom
    pub fn tiles(&self) -> Vec<Tile> {
        let (ox, oy) = self.origin();
        let count = 1i64 << self.zoom;
        let first_x = (ox / TILE_SIZE).floor() as i64;
        let last_x = ((ox + self.width) / TILE_SIZE).floor() as i64;
        let first_y = (oy / TILE_SIZE).floor() as i64;
        let last_y = ((oy + self.height) / TILE_SIZE).floor() as i64;

        let mut tiles = Vec::new();
        for ty in first_y.max(0)..=last_y.min(count - 1) {
            for tx in first_x..=last_x {
                tiles.push(Tile {
                    x: tx.rem_euclid(count) as u32,
                    y: ty as u32,
                    z: self.zoom,
                    left: tx as f64 * TILE_SIZE - ox,
                    top: ty as f64 * TILE_SIZE - oy,
                });
            }
        }
        tiles
    }

    /// One marker per request that falls inside the viewport
    pub fn place(&self, solicitacoes: &[Solicitacao]) -> Vec<PlacedMarker> {
        solicitacoes
            .iter()
            .filter_map(|s| {
                let (x, y) = self.project(marker_location(s, self.center));
                self.contains((x, y)).then_some(PlacedMarker { id: s.id, status: s.status, x, y })
            })
            .collect()
    }
}

/// Popup contents for `id`: the freshly fetched copy when it matches, else the listed one
pub fn popup_details(id: u32, fresh: Option<&Solicitacao>, listed: &[Solicitacao]) -> Option<Solicitacao> {
    fresh
        .filter(|s| s.id == id)
        .or_else(|| listed.iter().find(|s| s.id == id))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    const SAO_PAULO: LatLng = LatLng { lat: -23.5505, lng: -46.6333 };

    fn viewport() -> Viewport {
        Viewport { center: SAO_PAULO, zoom: 13, width: 800.0, height: 400.0 }
    }

    #[test]
    fn test_center_projects_to_middle() {
        let (x, y) = viewport().project(SAO_PAULO);
        assert!((x - 400.0).abs() < 1e-6);
        assert!((y - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_real_coordinates_are_used() {
        let mut s = mock::fallback_solicitacoes().remove(0);
        s.latitude = Some(-23.56);
        s.longitude = Some(-46.64);
        assert_eq!(marker_location(&s, SAO_PAULO), LatLng { lat: -23.56, lng: -46.64 });

        s.longitude = None;
        assert_ne!(marker_location(&s, SAO_PAULO).lat, -23.56);
    }

    #[test]
    fn test_placeholder_is_stable_and_near_center() {
        for s in mock::fallback_solicitacoes() {
            let first = marker_location(&s, SAO_PAULO);
            let second = marker_location(&s, SAO_PAULO);
            assert_eq!(first, second);
            assert!((first.lat - SAO_PAULO.lat).abs() <= PLACEHOLDER_SPREAD);
            assert!((first.lng - SAO_PAULO.lng).abs() <= PLACEHOLDER_SPREAD);
        }
    }

    #[test]
    fn test_distinct_ids_get_distinct_spots() {
        let list = mock::fallback_solicitacoes();
        assert_ne!(marker_location(&list[0], SAO_PAULO), marker_location(&list[1], SAO_PAULO));
    }

    #[test]
    fn test_placeholder_markers_are_visible() {
        let markers = viewport().place(&mock::fallback_solicitacoes());
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[1].status, Status::EmAndamento);
    }

    #[test]
    fn test_far_away_marker_is_dropped() {
        let mut s = mock::fallback_solicitacoes().remove(0);
        s.latitude = Some(-22.9068);
        s.longitude = Some(-43.1729);
        assert!(viewport().place(&[s]).is_empty());
    }

    #[test]
    fn test_popup_prefers_fresh_copy() {
        let listed = mock::fallback_solicitacoes();
        let mut fresh = listed[0].clone();
        fresh.status = Status::Resolvida;

        assert_eq!(popup_details(1, Some(&fresh), &listed).map(|s| s.status), Some(Status::Resolvida));
        assert_eq!(popup_details(2, Some(&fresh), &listed).map(|s| s.id), Some(2));
        assert_eq!(popup_details(1, None, &listed).map(|s| s.status), Some(Status::Aberta));
        assert!(popup_details(9, None, &listed).is_none());
    }

    #[test]
    fn test_tiles_cover_viewport() {
        let vp = viewport();
        let tiles = vp.tiles();
        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|t| t.z == 13));
        assert!(tiles.iter().any(|t| t.left <= 0.0 && t.top <= 0.0));
        assert!(tiles
            .iter()
            .any(|t| t.left + TILE_SIZE >= vp.width && t.top + TILE_SIZE >= vp.height));
        assert!(tiles[0].url().starts_with("https://tile.openstreetmap.org/13/"));
    }
}
