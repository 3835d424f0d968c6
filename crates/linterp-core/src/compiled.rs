//! The compiled curve handle and its builder.

use std::fmt;
use std::sync::OnceLock;

use crate::error::{EvalResult, ValidationError, ValidationResult};
use crate::options::{Algorithm, CompileOptions, EdgePolicy};
use crate::segment::Segment;
use crate::tree::DecisionNode;
use crate::validate::{validate, RawValue, MIN_POINTS};

/// An immutable, compiled piecewise function.
///
/// Construction validates the points, builds segments, applies the edge
/// policy and folds everything into a balanced [`DecisionNode`] tree.
/// Evaluation only walks that tree, so the handle can be shared freely
/// across threads.
///
/// # Example
///
/// ```rust
/// use linterp_core::{CompiledInterpolation, CompileOptions};
///
/// let curve = CompiledInterpolation::from_points(
///     &[(0.0, 0.0), (1.0, 1.0)],
///     CompileOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(curve.evaluate(-1.0).unwrap(), Some(0.0));
/// assert_eq!(curve.evaluate(0.5).unwrap(), Some(0.5));
/// assert_eq!(curve.evaluate(2.0).unwrap(), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct CompiledInterpolation {
    domain: Vec<f64>,
    range: Vec<f64>,
    options: CompileOptions,
    root: DecisionNode,
    rendered: OnceLock<String>,
}

impl CompiledInterpolation {
    /// Compiles a curve from parallel domain and range values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the options are inconsistent or the
    /// points are malformed. Nothing usable is built in that case.
    pub fn new<D, R>(domain: D, range: R, options: CompileOptions) -> ValidationResult<Self>
    where
        D: IntoIterator,
        D::Item: Into<RawValue>,
        R: IntoIterator,
        R::Item: Into<RawValue>,
    {
        let domain: Vec<RawValue> = domain.into_iter().map(Into::into).collect();
        let range: Vec<RawValue> = range.into_iter().map(Into::into).collect();
        Self::compile(&domain, &range, options)
    }

    /// Compiles a curve from `(x, y)` pairs, keeping their order.
    pub fn from_points<X, Y>(points: &[(X, Y)], options: CompileOptions) -> ValidationResult<Self>
    where
        X: Clone + Into<RawValue>,
        Y: Clone + Into<RawValue>,
    {
        let (domain, range): (Vec<RawValue>, Vec<RawValue>) = points
            .iter()
            .map(|(x, y)| (x.clone().into(), y.clone().into()))
            .unzip();
        Self::compile(&domain, &range, options)
    }

    /// Compiles already-converted raw values.
    pub fn compile(
        domain: &[RawValue],
        range: &[RawValue],
        options: CompileOptions,
    ) -> ValidationResult<Self> {
        options.check()?;
        let points = validate(domain, range, options.sanitize)?;

        let segments = options
            .algorithm
            .build_with_edges(&points.domain, &points.range, options.edge_policy);
        let segment_count = segments.len();

        let root = DecisionNode::compile(segments)
            .ok_or_else(|| ValidationError::insufficient_points(MIN_POINTS, points.domain.len()))?;

        tracing::debug!(
            points = points.domain.len(),
            segments = segment_count,
            depth = root.depth(),
            algorithm = %options.algorithm,
            edge_policy = %options.edge_policy,
            "compiled interpolation"
        );

        Ok(Self {
            domain: points.domain,
            range: points.range,
            options,
            root,
            rendered: OnceLock::new(),
        })
    }

    /// Returns a builder with default options.
    #[must_use]
    pub fn builder() -> InterpolationBuilder {
        InterpolationBuilder::new()
    }

    /// Evaluates the curve at `x`.
    ///
    /// Returns `Ok(None)` where the `undef` policy leaves the curve
    /// undefined.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`](crate::DomainError) only under the `die`
    /// policy, for inputs outside the domain.
    #[inline]
    pub fn evaluate(&self, x: f64) -> EvalResult<Option<f64>> {
        self.root.evaluate(x)
    }

    /// Borrows the curve as a plain closure.
    pub fn as_fn(&self) -> impl Fn(f64) -> EvalResult<Option<f64>> + Send + Sync + '_ {
        move |x| self.evaluate(x)
    }

    /// The validated domain.
    #[must_use]
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    /// The validated range.
    #[must_use]
    pub fn range(&self) -> &[f64] {
        &self.range
    }

    /// The options the curve was compiled with.
    #[must_use]
    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// The root of the decision tree.
    #[must_use]
    pub fn root(&self) -> &DecisionNode {
        &self.root
    }

    /// Compiled segments in ascending order, boundary segments included.
    #[must_use]
    pub fn segments(&self) -> Vec<&Segment> {
        self.root.leaves()
    }

    /// Number of compiled segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.root.leaves().len()
    }

    /// Comparisons needed for the deepest evaluation.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Smallest domain value.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.domain[0]
    }

    /// Largest domain value.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.domain[self.domain.len() - 1]
    }

    /// Checks if x is within the sampled domain.
    #[must_use]
    pub fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }

    /// Nested if/else rendering of the tree, built on first use.
    pub fn render(&self) -> &str {
        self.rendered.get_or_init(|| self.root.render())
    }
}

impl fmt::Display for CompiledInterpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

/// Step-by-step construction of a [`CompiledInterpolation`].
///
/// ```rust
/// use linterp_core::{CompiledInterpolation, EdgePolicy};
///
/// let curve = CompiledInterpolation::builder()
///     .domain([1.0, 2.0, 3.0])
///     .range([1.0, 1.0, 0.0])
///     .edge_policy(EdgePolicy::Extrapolate)
///     .compile()
///     .unwrap();
///
/// assert_eq!(curve.evaluate(5.0).unwrap(), Some(-2.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InterpolationBuilder {
    domain: Vec<RawValue>,
    range: Vec<RawValue>,
    options: CompileOptions,
}

impl InterpolationBuilder {
    /// Creates a builder with no points and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the x values.
    #[must_use]
    pub fn domain<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RawValue>,
    {
        self.domain = values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the y values.
    #[must_use]
    pub fn range<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RawValue>,
    {
        self.range = values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets both domain and range from `(x, y)` pairs.
    #[must_use]
    pub fn points<I, X, Y>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = (X, Y)>,
        X: Into<RawValue>,
        Y: Into<RawValue>,
    {
        let (domain, range): (Vec<RawValue>, Vec<RawValue>) = points
            .into_iter()
            .map(|(x, y)| (x.into(), y.into()))
            .unzip();
        self.domain = domain;
        self.range = range;
        self
    }

    /// Replaces all options.
    #[must_use]
    pub fn options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the algorithm.
    #[must_use]
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.options.algorithm = algorithm;
        self
    }

    /// Sets the edge policy.
    #[must_use]
    pub fn edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.options.edge_policy = edge_policy;
        self
    }

    /// Enables or disables numeral validation.
    #[must_use]
    pub fn sanitize(mut self, sanitize: bool) -> Self {
        self.options.sanitize = sanitize;
        self
    }

    /// Validates and compiles.
    pub fn compile(&self) -> ValidationResult<CompiledInterpolation> {
        CompiledInterpolation::compile(&self.domain, &self.range, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BoundSide, DomainError};
    use approx::assert_relative_eq;

    fn curve(points: &[(f64, f64)], policy: EdgePolicy) -> CompiledInterpolation {
        CompiledInterpolation::from_points(points, CompileOptions::default().with_edge_policy(policy))
            .unwrap()
    }

    #[test]
    fn test_clamp_default() {
        let c = curve(&[(0.0, 0.0), (1.0, 1.0)], EdgePolicy::Clamp);
        assert_eq!(c.evaluate(-1.0), Ok(Some(0.0)));
        assert_relative_eq!(c.evaluate(0.5).unwrap().unwrap(), 0.5, epsilon = 1e-12);
        assert_eq!(c.evaluate(2.0), Ok(Some(1.0)));
        assert_eq!(c.segment_count(), 3);
        assert_eq!(c.depth(), 2);
    }

    #[test]
    fn test_die_errors() {
        let c = curve(&[(5.0, 1.0), (5.0, 2.0), (6.0, 2.0), (6.0, 1.0)], EdgePolicy::Die);
        assert_eq!(
            c.evaluate(4.0),
            Err(DomainError::out_of_bounds(BoundSide::Low, 4.0, 5.0))
        );
        assert_eq!(
            c.evaluate(7.0),
            Err(DomainError::out_of_bounds(BoundSide::High, 7.0, 6.0))
        );
        assert_eq!(c.evaluate(6.0), Ok(Some(1.0)));
    }

    #[test]
    fn test_invalid_points_fail() {
        let err = CompiledInterpolation::new([0.0, 1.0], [0.0], CompileOptions::default()).unwrap_err();
        assert!(matches!(err, ValidationError::LengthMismatch { .. }));
    }

    #[test]
    fn test_accessors() {
        let c = curve(&[(1.0, 10.0), (2.0, 20.0), (4.0, 0.0)], EdgePolicy::Clamp);
        assert_eq!(c.domain(), &[1.0, 2.0, 4.0]);
        assert_eq!(c.range(), &[10.0, 20.0, 0.0]);
        assert_eq!(c.min_x(), 1.0);
        assert_eq!(c.max_x(), 4.0);
        assert!(c.in_range(3.0));
        assert!(!c.in_range(4.5));
        assert_eq!(c.options(), CompileOptions::default());
    }

    #[test]
    fn test_render_is_memoized() {
        let c = curve(&[(0.0, 0.0), (1.0, 2.0)], EdgePolicy::Undef);
        let first = c.render();
        assert!(first.contains("if x < 0"));
        assert!(first.contains("undef"));
        assert!(std::ptr::eq(first, c.render()));
        assert_eq!(c.to_string(), first);
    }

    #[test]
    fn test_as_fn() {
        let c = curve(&[(0.0, 0.0), (2.0, 4.0)], EdgePolicy::Extrapolate);
        let f = c.as_fn();
        let ys: Vec<f64> = [-1.0, 1.0, 3.0]
            .into_iter()
            .map(|x| f(x).unwrap().unwrap())
            .collect();
        assert_eq!(ys, vec![-2.0, 2.0, 6.0]);
    }

    #[test]
    fn test_builder_points() {
        let c = InterpolationBuilder::new()
            .points([("0", "0"), ("10", "100")])
            .edge_policy(EdgePolicy::Undef)
            .compile()
            .unwrap();
        assert_eq!(c.evaluate(5.0), Ok(Some(50.0)));
        assert_eq!(c.evaluate(10.5), Ok(None));
    }

    #[test]
    fn test_builder_sanitize_off() {
        let result = InterpolationBuilder::new()
            .domain(["0", "1"])
            .range(["0", "n/a"])
            .sanitize(false)
            .compile();
        assert!(result.is_ok());

        let err = InterpolationBuilder::new()
            .domain(["0", "1"])
            .range(["0", "n/a"])
            .compile()
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber(v) if v == "n/a"));
    }
}
