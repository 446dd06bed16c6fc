//! Flat per-kilometre fares.

/// Maps a distance to a price at a fixed rate.
///
/// Prices are unrounded; rounding for display belongs to whoever renders
/// them.
///
/// # Examples
///
/// ```
/// use route_server::planner::FareCalculator;
///
/// let fares = FareCalculator::new(1.25);
/// assert_eq!(fares.price(250.0), 312.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareCalculator {
    rate_per_km: f64,
}

impl FareCalculator {
    /// Create a calculator charging `rate_per_km` per kilometre.
    pub fn new(rate_per_km: f64) -> Self {
        Self { rate_per_km }
    }

    /// Price of travelling `distance_km`.
    pub fn price(&self, distance_km: f64) -> f64 {
        distance_km * self.rate_per_km
    }
}
