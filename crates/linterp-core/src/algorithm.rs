//! Algorithm dispatch.
//!
//! Each [`Algorithm`] maps to a dedicated segment builder and declares which
//! edge policies it can honor. New interpolation schemes plug in here by
//! adding a variant and its builder.

use crate::edge::apply_edge_policy;
use crate::options::{Algorithm, EdgePolicy};
use crate::segment::{linear_segments, Segment};

impl Algorithm {
    /// Returns true if this algorithm can apply `policy`.
    #[must_use]
    pub fn supports(self, policy: EdgePolicy) -> bool {
        match self {
            Self::Linear => matches!(
                policy,
                EdgePolicy::Clamp | EdgePolicy::Extrapolate | EdgePolicy::Undef | EdgePolicy::Die
            ),
        }
    }

    /// Builds the interior segments for validated points.
    #[must_use]
    pub fn build_segments(self, domain: &[f64], range: &[f64]) -> Vec<Segment> {
        match self {
            Self::Linear => linear_segments(domain, range),
        }
    }

    /// Builds interior segments and wraps them with boundary segments.
    ///
    /// The caller checks [`supports`](Self::supports) first.
    #[must_use]
    pub fn build_with_edges(self, domain: &[f64], range: &[f64], policy: EdgePolicy) -> Vec<Segment> {
        let segments = self.build_segments(domain, range);
        match self {
            Self::Linear => apply_edge_policy(segments, domain, range, policy),
        }
    }
}
