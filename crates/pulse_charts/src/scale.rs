/// Linear mapping from a numeric domain onto an output range.
///
/// Degenerate domains (zero span) map everything to the range start rather
/// than dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    pub fn new(domain_min: f32, domain_max: f32, range_min: f32, range_max: f32) -> Self {
        Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        }
    }

    pub fn map(&self, value: f32) -> f32 {
        let span = self.domain_max - self.domain_min;
        if span.abs() < 1e-12 {
            return self.range_min;
        }
        let t = (value - self.domain_min) / span;
        self.range_min + t * (self.range_max - self.range_min)
    }

    pub fn invert(&self, mapped: f32) -> f32 {
        let span = self.range_max - self.range_min;
        if span.abs() < 1e-12 {
            return self.domain_min;
        }
        let t = (mapped - self.range_min) / span;
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Evenly spaced domain values including both endpoints.
    pub fn ticks(&self, count: usize) -> Vec<f32> {
        let n = count.max(2);
        let span = self.domain_max - self.domain_min;
        (0..n)
            .map(|i| self.domain_min + span * (i as f32 / (n - 1) as f32))
            .collect()
    }
}

/// Equal-width bands across a range, with inner padding between bands and
/// outer padding at the edges. Paddings are fractions of the band step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f32,
    step: f32,
    band_width: f32,
}

impl BandScale {
    pub fn new(
        count: usize,
        range_min: f32,
        range_max: f32,
        padding_inner: f32,
        padding_outer: f32,
    ) -> Self {
        if count == 0 {
            return Self {
                count: 0,
                start: range_min,
                step: 0.0,
                band_width: 0.0,
            };
        }
        let span = (range_max - range_min).max(0.0);
        let denom = (count as f32 - padding_inner + 2.0 * padding_outer).max(1e-6);
        let step = span / denom;
        Self {
            count,
            start: range_min + step * padding_outer,
            step,
            band_width: step * (1.0 - padding_inner).max(0.0),
        }
    }

    pub fn band_width(&self) -> f32 {
        self.band_width
    }

    pub fn band_start(&self, idx: usize) -> Option<f32> {
        (idx < self.count).then(|| self.start + self.step * idx as f32)
    }

    pub fn center(&self, idx: usize) -> Option<f32> {
        self.band_start(idx).map(|x| x + self.band_width * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_and_inverts() {
        let s = LinearScale::new(0.0, 100.0, 100.0, 0.0);
        assert!((s.map(25.0) - 75.0).abs() < 1e-5);
        assert!((s.invert(75.0) - 25.0).abs() < 1e-5);
    }

    #[test]
    fn linear_degenerate_domain_maps_to_range_start() {
        let s = LinearScale::new(5.0, 5.0, 0.0, 10.0);
        assert_eq!(s.map(5.0), 0.0);
        assert_eq!(s.map(99.0), 0.0);
    }

    #[test]
    fn ticks_include_endpoints() {
        let s = LinearScale::new(10.0, 20.0, 0.0, 1.0);
        let t = s.ticks(5);
        assert_eq!(t.len(), 5);
        assert_eq!(t[0], 10.0);
        assert_eq!(t[4], 20.0);
    }

    #[test]
    fn bands_stay_inside_the_range() {
        let b = BandScale::new(6, 0.0, 100.0, 0.3, 0.15);
        for i in 0..6 {
            let x = b.band_start(i).unwrap();
            assert!(x >= 0.0);
            assert!(x + b.band_width() <= 100.0 + 1e-4);
        }
        assert!(b.band_start(6).is_none());
    }

    #[test]
    fn empty_band_scale_has_no_bands() {
        let b = BandScale::new(0, 0.0, 100.0, 0.1, 0.1);
        assert_eq!(b.band_width(), 0.0);
        assert!(b.band_start(0).is_none());
    }
}
