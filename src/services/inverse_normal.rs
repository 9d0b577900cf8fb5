/// Inverse standard normal CDF (probit).
///
/// Rational approximation from Abramowitz & Stegun 26.2.23, accurate to
/// about 4.5e-4 over (0, 1).
///
/// - `p` outside (0, 1), including NaN => `0.0`. The fallback keeps duration
///   sweeps total; boundary values carry no meaning.
/// - `p < 0.5` is mapped through the symmetry `inverse_cdf(p) = -inverse_cdf(1 - p)`.
pub fn inverse_cdf(p: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return 0.0;
    }

    let (sign, q) = if p < 0.5 { (-1.0, 1.0 - p) } else { (1.0, p) };

    const C0: f64 = 2.515517;
    const C1: f64 = 0.802853;
    const C2: f64 = 0.010328;
    const D1: f64 = 1.432788;
    const D2: f64 = 0.189269;
    const D3: f64 = 0.001308;

    let t = (-2.0 * (1.0 - q).ln()).sqrt();
    let z = t - (C0 + C1 * t + C2 * t * t) / (1.0 + D1 * t + D2 * t * t + D3 * t * t * t);

    sign * z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_cdf_is_zero_at_the_median() {
        assert!(inverse_cdf(0.5).abs() < 1e-3);
    }

    #[test]
    fn inverse_cdf_matches_known_quantiles() {
        // Reference values: z(0.975) = 1.9600, z(0.95) = 1.6449, z(0.80) = 0.8416
        assert!((inverse_cdf(0.975) - 1.9600).abs() < 2e-3);
        assert!((inverse_cdf(0.95) - 1.6449).abs() < 2e-3);
        assert!((inverse_cdf(0.80) - 0.8416).abs() < 2e-3);
    }

    #[test]
    fn inverse_cdf_is_antisymmetric() {
        for p in [0.01, 0.1, 0.25, 0.4, 0.6, 0.75, 0.9, 0.99] {
            let left = inverse_cdf(p);
            let right = -inverse_cdf(1.0 - p);
            assert!(
                (left - right).abs() < 1e-12,
                "expected antisymmetry at p={p}, got {left} vs {right}"
            );
        }
    }

    #[test]
    fn inverse_cdf_is_monotone() {
        assert!(inverse_cdf(0.6) < inverse_cdf(0.9));
        assert!(inverse_cdf(0.9) < inverse_cdf(0.99));
    }

    #[test]
    fn inverse_cdf_returns_zero_outside_the_open_interval() {
        assert_eq!(inverse_cdf(0.0), 0.0);
        assert_eq!(inverse_cdf(1.0), 0.0);
        assert_eq!(inverse_cdf(-0.2), 0.0);
        assert_eq!(inverse_cdf(1.7), 0.0);
        assert_eq!(inverse_cdf(f64::NAN), 0.0);
    }
}
