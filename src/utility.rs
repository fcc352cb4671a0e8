use std::f64::consts::{PI, TAU};

use num::Float;

/// Evaluate a polynomial
pub(crate) fn polyval<T: Float>(p: &[T], x: T) -> T {
    p
        .iter()
        .fold(T::zero(), |acc, &val| acc*x + val)
}

/// Evaluate the coefficient table `table`, laid out as consecutive blocks of
/// `order + 1` polynomial coefficients (highest power first) followed by a
/// divisor, at `x`.
pub(crate) fn series_coefficients<const N: usize>(table: &[f64], order: usize, x: f64) -> [f64; N] {
    let mut out = [0_f64; N];

    for (coeff, block) in out.iter_mut().zip(table.chunks_exact(order + 2)) {
        *coeff = polyval(&block[..=order], x) / block[order + 1];
    }

    out
}

pub(crate) trait GeoMath {
    fn eps_eq(&self, other: Self) -> bool;
    fn ang_normalize(&self) -> Self;
    fn remainder(&self, denom: Self) -> Self;
}

impl GeoMath for f64 {
    fn eps_eq(&self, other: f64) -> bool {
        (*self - other).abs() < f64::EPSILON
    }

    /// Reduce an angle in radians into `(-pi, pi]`
    fn ang_normalize(&self) -> f64 {
        let value = self.remainder(TAU);

        if value < -PI || value.eps_eq(-PI) {
            PI
        }
        else {
            value
        }
    }

    fn remainder(&self, denom: Self) -> Self {
        *self - (*self / denom).round() * denom
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn polyval_uses_horner_order() {
        // 2x^2 + 3x + 4 at x = 2
        assert_relative_eq!(polyval(&[2., 3., 4.], 2.), 18.);
        assert_relative_eq!(polyval::<f64>(&[], 2.), 0.);
    }

    #[test]
    fn series_coefficients_split_blocks() {
        // (x + 1) / 2 and (3x) / 4 at x = 3
        let coeffs: [f64; 2] = series_coefficients(&[1., 1., 2., 3., 0., 4.], 1, 3.);
        assert_relative_eq!(coeffs[0], 2.);
        assert_relative_eq!(coeffs[1], 2.25);
    }

    #[test]
    fn normalize_into_half_open_range() {
        assert_relative_eq!((3.5 * PI).ang_normalize(), -FRAC_PI_2, epsilon = 1e-15);
        assert_relative_eq!((-PI).ang_normalize(), PI);
        assert_relative_eq!(PI.ang_normalize(), PI);
        assert_relative_eq!((-3. * FRAC_PI_2).ang_normalize(), FRAC_PI_2, epsilon = 1e-15);
        assert_relative_eq!((1.5 * PI).ang_normalize(), -FRAC_PI_2, epsilon = 1e-15);
        assert_relative_eq!(0.25_f64.ang_normalize(), 0.25);
    }
}
