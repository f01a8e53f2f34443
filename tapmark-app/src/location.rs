use instant::Instant;
use std::time::Duration;
use tapmark::LatLng;

/// Stand-in for a GPS provider: reports a fixed position once the
/// configured warm-up delay has passed.
#[derive(Debug, Clone)]
pub struct SimulatedLocation {
    position: LatLng,
    started_at: Instant,
    delay: Duration,
}

impl SimulatedLocation {
    pub fn new(position: LatLng, delay: Duration) -> Self {
        Self {
            position,
            started_at: Instant::now(),
            delay,
        }
    }

    pub fn fix(&self) -> Option<LatLng> {
        self.fix_at(Instant::now())
    }

    pub fn fix_at(&self, now: Instant) -> Option<LatLng> {
        if now >= self.started_at && now.duration_since(self.started_at) >= self.delay {
            Some(self.position)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fix_before_delay() {
        let location = SimulatedLocation::new(LatLng::new(1.0, 2.0), Duration::from_secs(3));
        let start = location.started_at;
        assert_eq!(location.fix_at(start + Duration::from_secs(1)), None);
        assert_eq!(
            location.fix_at(start + Duration::from_secs(3)),
            Some(LatLng::new(1.0, 2.0))
        );
    }
}
