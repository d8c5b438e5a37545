use std::cmp::Ordering;
use std::fmt::Display;

///Length or amount compared through [`float_cmp::approx_eq!()`].
///A tile that is a rounding error too large for the sheet still fits.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::FPA;

    #[test]
    fn accumulated_rounding_counts_as_equal() {
        let summed = 0.1 + 0.2;
        assert_ne!(summed, 0.3);
        assert!(FPA(summed) == FPA(0.3));
        assert!(FPA(summed) <= FPA(0.3));
        assert!(FPA(summed) >= FPA(0.3));
    }

    #[test]
    fn distinct_values_keep_their_order() {
        assert!(FPA(1.0) < FPA(1.001));
        assert!(FPA(31.5) > FPA(7.0));
    }
}
