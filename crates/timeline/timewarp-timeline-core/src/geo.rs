//! Globe placement helpers for event markers.

use serde::{Deserialize, Serialize};

use crate::event::GeoPoint;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Map latitude/longitude (degrees) onto a sphere of `radius`, y-up, with
/// longitude 0 facing +x after the 180° seam offset used by equirectangular
/// globe textures.
pub fn lat_lon_to_vec3(lat: f64, lon: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    Vec3 {
        x: -radius * phi.sin() * theta.cos(),
        y: radius * phi.cos(),
        z: radius * phi.sin() * theta.sin(),
    }
}

impl GeoPoint {
    pub fn to_vec3(&self, radius: f64) -> Vec3 {
        lat_lon_to_vec3(self.lat, self.lon, radius)
    }
}
