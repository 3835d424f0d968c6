//! Balanced decision tree over ordered segments.
//!
//! Segments are merged pairwise, round after round, until one root remains.
//! Each merge compares against the threshold of the right-hand subtree's
//! first segment, so a tree over `m` segments has depth `ceil(log2 m)` and
//! evaluation costs that many comparisons plus one multiply-add.

use std::fmt;

use crate::error::EvalResult;
use crate::segment::Segment;

/// A node of the compiled decision tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionNode {
    /// A single segment.
    Leaf(Segment),
    /// `x < split_x` goes `low`, everything else goes `high`.
    Interior {
        /// Split point; always a domain value.
        split_x: f64,
        /// Subtree for `x < split_x`.
        low: Box<DecisionNode>,
        /// Subtree for `x >= split_x`.
        high: Box<DecisionNode>,
    },
}

impl DecisionNode {
    /// Compiles ordered segments into a balanced tree.
    ///
    /// Returns `None` for an empty list. An odd segment out carries over
    /// unmerged into the next round.
    #[must_use]
    pub fn compile(segments: Vec<Segment>) -> Option<Self> {
        let mut level: Vec<(Option<f64>, DecisionNode)> = segments
            .into_iter()
            .map(|segment| (segment.threshold, DecisionNode::Leaf(segment)))
            .collect();

        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut nodes = level.into_iter();

            while let Some((threshold, low)) = nodes.next() {
                let node = match nodes.next() {
                    Some((split, high)) => DecisionNode::Interior {
                        // Only the leftmost segment is unthresholded, and it
                        // never lands on the high side of a merge.
                        split_x: split.unwrap_or(f64::NEG_INFINITY),
                        low: Box::new(low),
                        high: Box::new(high),
                    },
                    None => low,
                };
                next.push((threshold, node));
            }

            level = next;
        }

        level.pop().map(|(_, root)| root)
    }

    /// Walks the tree for `x` and evaluates the selected segment.
    #[inline]
    pub fn evaluate(&self, x: f64) -> EvalResult<Option<f64>> {
        let mut node = self;
        loop {
            match node {
                DecisionNode::Leaf(segment) => return segment.evaluate(x),
                DecisionNode::Interior { split_x, low, high } => {
                    node = if x < *split_x { low } else { high };
                }
            }
        }
    }

    /// Number of comparisons on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            DecisionNode::Leaf(_) => 0,
            DecisionNode::Interior { low, high, .. } => 1 + low.depth().max(high.depth()),
        }
    }

    /// Segments in left-to-right order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Segment> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Segment>) {
        match self {
            DecisionNode::Leaf(segment) => out.push(segment),
            DecisionNode::Interior { low, high, .. } => {
                low.collect_leaves(out);
                high.collect_leaves(out);
            }
        }
    }

    /// Split points in in-order sequence.
    #[must_use]
    pub fn splits(&self) -> Vec<f64> {
        let mut out = Vec::new();
        self.collect_splits(&mut out);
        out
    }

    fn collect_splits(&self, out: &mut Vec<f64>) {
        if let DecisionNode::Interior { split_x, low, high } = self {
            low.collect_splits(out);
            out.push(*split_x);
            high.collect_splits(out);
        }
    }

    /// Renders the tree as nested if/else blocks.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn render_into(&self, out: &mut impl fmt::Write, indent: usize) -> fmt::Result {
        let pad = "    ".repeat(indent);
        match self {
            DecisionNode::Leaf(segment) => writeln!(out, "{pad}{}", segment.kind),
            DecisionNode::Interior { split_x, low, high } => {
                writeln!(out, "{pad}if x < {split_x} {{")?;
                low.render_into(out, indent + 1)?;
                writeln!(out, "{pad}}} else {{")?;
                high.render_into(out, indent + 1)?;
                writeln!(out, "{pad}}}")
            }
        }
    }
}

impl fmt::Display for DecisionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;

    fn constants(m: usize) -> Vec<Segment> {
        (0..m)
            .map(|i| {
                let threshold = (i > 0).then_some(i as f64);
                Segment::constant(threshold, i as f64 * 10.0)
            })
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(DecisionNode::compile(Vec::new()).is_none());
    }

    #[test]
    fn test_single_leaf() {
        let root = DecisionNode::compile(constants(1)).unwrap();
        assert!(matches!(root, DecisionNode::Leaf(_)));
        assert_eq!(root.depth(), 0);
        assert_eq!(root.evaluate(-1e9), Ok(Some(0.0)));
    }

    #[test]
    fn test_depth_is_logarithmic() {
        for m in 1..=40 {
            let root = DecisionNode::compile(constants(m)).unwrap();
            let expected = (m as f64).log2().ceil() as usize;
            assert_eq!(root.depth(), expected, "m = {m}");
        }
    }

    #[test]
    fn test_leaves_preserve_order() {
        for m in 1..=17 {
            let segments = constants(m);
            let root = DecisionNode::compile(segments.clone()).unwrap();
            let leaves: Vec<Segment> = root.leaves().into_iter().copied().collect();
            assert_eq!(leaves, segments);
            assert_eq!(root.splits(), (1..m).map(|i| i as f64).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_evaluate_selects_interval() {
        let root = DecisionNode::compile(constants(5)).unwrap();
        assert_eq!(root.evaluate(-3.0), Ok(Some(0.0)));
        assert_eq!(root.evaluate(0.99), Ok(Some(0.0)));
        assert_eq!(root.evaluate(1.0), Ok(Some(10.0)));
        assert_eq!(root.evaluate(2.5), Ok(Some(20.0)));
        assert_eq!(root.evaluate(4.0), Ok(Some(40.0)));
        assert_eq!(root.evaluate(400.0), Ok(Some(40.0)));
    }

    #[test]
    fn test_render() {
        let root = DecisionNode::compile(constants(2)).unwrap();
        assert_eq!(root.render(), "if x < 1 {\n    0\n} else {\n    10\n}\n");
        assert_eq!(root.to_string(), root.render());
    }

    #[test]
    fn test_render_nested() {
        let root = DecisionNode::compile(constants(3)).unwrap();
        let expected = "\
if x < 2 {
    if x < 1 {
        0
    } else {
        10
    }
} else {
    20
}
";
        assert_eq!(root.render(), expected);
    }

    /// Accepts a fixed number of writes, then fails.
    struct Budget(usize);

    impl fmt::Write for Budget {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            self.0 = self.0.checked_sub(1).ok_or(fmt::Error)?;
            Ok(())
        }
    }

    #[test]
    fn test_render_propagates_write_errors() {
        let root = DecisionNode::compile(constants(4)).unwrap();
        assert!(root.render_into(&mut Budget(0), 0).is_err());
        assert!(root.render_into(&mut Budget(3), 0).is_err());
        assert!(root.render_into(&mut Budget(usize::MAX), 0).is_ok());
    }
}
