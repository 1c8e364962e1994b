use std::fmt;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// A growable geographic rectangle used to fit a map viewport to a set of
/// points. Starts empty; extending with the first point collapses the
/// rectangle onto it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLngBounds {
    extent: Option<(LatLng, LatLng)>, // (south-west, north-east)
}

impl LatLngBounds {
    pub fn new() -> Self {
        LatLngBounds { extent: None }
    }

    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    /// Grow the rectangle to include `point`.
    pub fn extend(&mut self, point: LatLng) {
        match &mut self.extent {
            None => self.extent = Some((point, point)),
            Some((sw, ne)) => {
                sw.lat = sw.lat.min(point.lat);
                sw.lng = sw.lng.min(point.lng);
                ne.lat = ne.lat.max(point.lat);
                ne.lng = ne.lng.max(point.lng);
            }
        }
    }

    pub fn south_west(&self) -> Option<LatLng> {
        self.extent.map(|(sw, _)| sw)
    }

    pub fn north_east(&self) -> Option<LatLng> {
        self.extent.map(|(_, ne)| ne)
    }

    pub fn contains(&self, point: LatLng) -> bool {
        match self.extent {
            None => false,
            Some((sw, ne)) => {
                point.lat >= sw.lat
                    && point.lat <= ne.lat
                    && point.lng >= sw.lng
                    && point.lng <= ne.lng
            }
        }
    }
}
