//! Rows of a material-property mesh.

/// Speed conversion from m/s to km/s.
const M_PER_KM: f64 = 1000.0;

/// One row of a mesh file: a lattice point and its material properties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshRecord {
    /// Longitude (degrees east)
    pub lon: f64,
    /// Latitude (degrees north)
    pub lat: f64,
    /// Elevation or depth in meters
    pub elev: f64,
    /// P-wave velocity (m/s)
    pub vp: f64,
    /// S-wave velocity (m/s)
    pub vs: f64,
    /// Density (kg/m^3)
    pub rho: f64,
}

impl MeshRecord {
    pub fn new(lon: f64, lat: f64, elev: f64, vp: f64, vs: f64, rho: f64) -> Self {
        Self {
            lon,
            lat,
            elev,
            vp,
            vs,
            rho,
        }
    }

    /// The query tool reports "no data" as vp = vs = 0.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.vp == 0.0 && self.vs == 0.0
    }

    /// Depth coordinate in km.
    #[inline]
    pub fn depth_km(&self) -> f64 {
        self.elev / M_PER_KM
    }

    /// vp in km/s.
    #[inline]
    pub fn vp_km_s(&self) -> f64 {
        self.vp / M_PER_KM
    }

    /// vs in km/s.
    #[inline]
    pub fn vs_km_s(&self) -> f64 {
        self.vs / M_PER_KM
    }
}
