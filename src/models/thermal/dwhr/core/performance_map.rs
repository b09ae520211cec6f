//! Empirical performance maps for generic vertical DWHR devices.
//!
//! A map returns a correction factor: the device's effectiveness at the given
//! flows as a fraction of its rated effectiveness at 2.51 gal/min. A factor of
//! 1.1 on a 0.456 rated device means an effectiveness of 0.5016.
//!
//! Two map shapes exist:
//!
//! - [`QuarticMap`]: equal-flow factor as a quartic in the flow rate.
//! - [`SurfaceMap`]: unequal-flow factor as a 2-D polynomial in the drain-side
//!   and cold-side flow rates.
//!
//! Neither map clamps its inputs; callers clamp to [`EffectivenessBounds`]
//! first.
//!
//! [`EffectivenessBounds`]: super::EffectivenessBounds

use thiserror::Error;

/// Errors from building or evaluating a performance map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// A surface needs a perfect-square, non-zero number of coefficients.
    #[error("surface map needs a perfect-square coefficient count, got {len}")]
    MalformedCoefficients {
        /// Number of coefficients supplied.
        len: usize,
    },

    /// A quartic needs exactly five coefficients.
    #[error("quartic map needs 5 coefficients, got {len}")]
    QuarticLength {
        /// Number of coefficients supplied.
        len: usize,
    },

    /// Paired inputs of a vectorized surface evaluation differ in length.
    #[error("input lengths differ: x has {x}, y has {y}")]
    LengthMismatch {
        /// Length of the drain-side flows.
        x: usize,
        /// Length of the cold-side flows.
        y: usize,
    },
}

/// Selects the map that supplies equal-flow effectiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EqualFlowCorrelation {
    /// Evaluate the unequal-flow surface with both axes at the same flow.
    #[default]
    Surface,

    /// Evaluate the dedicated equal-flow quartic.
    Quartic,
}

/// Evaluates `c0·x⁴ + c1·x³ + c2·x² + c3·x + c4`.
#[must_use]
pub fn evaluate_quartic(coefficients: &[f64; 5], x: f64) -> f64 {
    let [c0, c1, c2, c3, c4] = *coefficients;
    c0 * x.powi(4) + c1 * x.powi(3) + c2 * x.powi(2) + c3 * x + c4
}

/// Evaluates `Σ c_ij · xⁱ · yʲ` for `i, j` in `0..=p`, where `p = √N − 1`.
///
/// Coefficients are ordered row-major over `(i, j)`: index `i·(p+1) + j`
/// multiplies `xⁱ·yʲ`.
///
/// # Errors
///
/// Returns [`MapError::MalformedCoefficients`] if the coefficient count is
/// zero or not a perfect square.
pub fn evaluate_surface(coefficients: &[f64], x: f64, y: f64) -> Result<f64, MapError> {
    let n = surface_size(coefficients.len())?;
    Ok(surface(coefficients, n, x, y))
}

fn surface_size(len: usize) -> Result<usize, MapError> {
    let n = len.isqrt();
    if n == 0 || n * n != len {
        return Err(MapError::MalformedCoefficients { len });
    }
    Ok(n)
}

fn surface(coefficients: &[f64], n: usize, x: f64, y: f64) -> f64 {
    let mut z = 0.0;
    let mut x_pow = 1.0;
    for row in coefficients.chunks_exact(n) {
        let mut y_pow = 1.0;
        for c in row {
            z += c * x_pow * y_pow;
            y_pow *= y;
        }
        x_pow *= x;
    }
    z
}

/// Equal-flow correction factor as a quartic in flow rate (gal/min).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarticMap {
    coefficients: [f64; 5],
}

impl QuarticMap {
    /// Creates a quartic map from its five coefficients, highest power first.
    #[must_use]
    pub fn new(coefficients: [f64; 5]) -> Self {
        Self { coefficients }
    }

    /// Creates a quartic map from a loaded coefficient array.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::QuarticLength`] unless exactly five values are given.
    pub fn from_slice(coefficients: &[f64]) -> Result<Self, MapError> {
        let coefficients = coefficients
            .try_into()
            .map_err(|_| MapError::QuarticLength {
                len: coefficients.len(),
            })?;
        Ok(Self { coefficients })
    }

    /// Returns the coefficients, highest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64; 5] {
        &self.coefficients
    }

    /// Evaluates the correction factor at a flow rate.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate_quartic(&self.coefficients, x)
    }

    /// Evaluates the correction factor elementwise.
    #[must_use]
    pub fn evaluate_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// Unequal-flow correction factor as a 2-D polynomial surface.
///
/// The first axis is the drain-side flow and the second the cold-side flow,
/// both in gal/min.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMap {
    coefficients: Vec<f64>,
    size: usize,
}

impl SurfaceMap {
    /// Creates a surface from row-major coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MalformedCoefficients`] if the coefficient count is
    /// zero or not a perfect square.
    pub fn new(coefficients: Vec<f64>) -> Result<Self, MapError> {
        let size = surface_size(coefficients.len())?;
        Ok(Self { coefficients, size })
    }

    /// Returns the polynomial order in each variable.
    #[must_use]
    pub fn order(&self) -> usize {
        self.size - 1
    }

    /// Returns the row-major coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluates the correction factor at a flow pair.
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        surface(&self.coefficients, self.size, x, y)
    }

    /// Evaluates the correction factor elementwise over paired flows.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::LengthMismatch`] if `xs` and `ys` differ in length.
    pub fn evaluate_all(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<f64>, MapError> {
        if xs.len() != ys.len() {
            return Err(MapError::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }
        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| self.evaluate(x, y))
            .collect())
    }
}

/// The two coefficient sets describing a device family.
///
/// Loaded once and shared, read-only, by every draw and configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceCoefficients {
    /// Equal-flow quartic.
    pub equal_flow: QuarticMap,

    /// Unequal-flow surface.
    pub unequal_flow: SurfaceMap,
}

impl PerformanceCoefficients {
    /// Validates both coefficient arrays as loaded from a coefficient store.
    ///
    /// # Errors
    ///
    /// Returns a [`MapError`] if either array has the wrong shape.
    pub fn from_arrays(equal_flow: &[f64], unequal_flow: Vec<f64>) -> Result<Self, MapError> {
        Ok(Self {
            equal_flow: QuarticMap::from_slice(equal_flow)?,
            unequal_flow: SurfaceMap::new(unequal_flow)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn constant_quartic_is_exact() {
        let map = QuarticMap::new([0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(map.evaluate(2.51), 1.0);
        assert_eq!(map.evaluate(7.5), 1.0);
    }

    #[test]
    fn quartic_powers() {
        let map = QuarticMap::new([1.0, 2.0, 3.0, 4.0, 5.0]);
        // 16 + 16 + 12 + 8 + 5
        assert_relative_eq!(map.evaluate(2.0), 57.0);
        assert_eq!(map.evaluate_all(&[0.0, 2.0]), vec![5.0, 57.0]);
    }

    #[test]
    fn quartic_rejects_wrong_length() {
        assert_eq!(
            QuarticMap::from_slice(&[1.0, 2.0]),
            Err(MapError::QuarticLength { len: 2 })
        );
    }

    #[test]
    fn surface_coefficient_order_is_row_major() {
        // Order 1: [c00, c01, c10, c11] multiply [1, y, x, xy].
        let map = SurfaceMap::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(map.order(), 1);

        let (x, y) = (2.0, 5.0);
        assert_relative_eq!(map.evaluate(x, y), 1.0 + 2.0 * y + 3.0 * x + 4.0 * x * y);

        // Swapping the axes must change the result.
        assert!((map.evaluate(y, x) - map.evaluate(x, y)).abs() > 1.0);
    }

    #[test]
    fn second_order_surface() {
        let mut coefficients = vec![0.0; 9];
        coefficients[2 * 3 + 1] = 1.0; // x² · y
        let map = SurfaceMap::new(coefficients).unwrap();
        assert_eq!(map.order(), 2);
        assert_relative_eq!(map.evaluate(3.0, 2.0), 18.0);
    }

    #[test]
    fn surface_rejects_non_square() {
        assert_eq!(
            SurfaceMap::new(vec![0.0; 10]),
            Err(MapError::MalformedCoefficients { len: 10 })
        );
        assert_eq!(
            evaluate_surface(&[], 1.0, 1.0),
            Err(MapError::MalformedCoefficients { len: 0 })
        );
    }

    #[test]
    fn free_function_matches_map() {
        let coefficients = vec![1.1, -0.02, -0.03, 0.001];
        let map = SurfaceMap::new(coefficients.clone()).unwrap();
        for (x, y) in [(0.5, 0.5), (2.51, 1.2), (7.5, 3.3)] {
            assert_eq!(evaluate_surface(&coefficients, x, y).unwrap(), map.evaluate(x, y));
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let map = SurfaceMap::new(vec![0.9, 0.05, 0.04, -0.01]).unwrap();
        let xs = [0.5, 1.0, 2.51, 5.0, 7.5];
        let first = map.evaluate_all(&xs, &xs).unwrap();
        let second = map.evaluate_all(&xs, &xs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn vectorized_surface_checks_lengths() {
        let map = SurfaceMap::new(vec![1.0]).unwrap();
        assert_eq!(
            map.evaluate_all(&[1.0, 2.0], &[1.0]),
            Err(MapError::LengthMismatch { x: 2, y: 1 })
        );
    }
}
