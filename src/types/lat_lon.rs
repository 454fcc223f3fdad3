/// A geographic coordinate as latitude and longitude in degrees (EPSG:4326).
///
/// Latitude is the first element, longitude the second.
///
/// # Examples
///
/// ```
/// use pvgis_nuts::LatLon;
///
/// let stuttgart = LatLon(48.7758, 9.1829);
/// assert_eq!(stuttgart.0, 48.7758); // Latitude
/// assert_eq!(stuttgart.1, 9.1829); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);
