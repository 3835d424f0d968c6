//! Integration tests: reference curves under every edge policy.
//!
//! | Curve | Points | Policy |
//! |-------|--------|--------|
//! | ramp | (0,0) (1,1) | clamp |
//! | step | (0,0) (1,0.5) (1,1.5) (2,2) | clamp |
//! | knee | (1,1) (2,1) (3,0) | extrapolate |
//! | box | (5,1) (5,2) (6,2) (6,1) | undef / die |

use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;
use linterp_core::prelude::*;

fn compile(points: &[(f64, f64)], policy: EdgePolicy) -> CompiledInterpolation {
    CompiledInterpolation::from_points(points, CompileOptions::default().with_edge_policy(policy))
        .unwrap()
}

fn value(curve: &CompiledInterpolation, x: f64) -> f64 {
    curve
        .evaluate(x)
        .unwrap()
        .unwrap_or_else(|| panic!("no value at {x}"))
}

const BOX: [(f64, f64); 4] = [(5.0, 1.0), (5.0, 2.0), (6.0, 2.0), (6.0, 1.0)];

#[test]
fn test_clamp_ramp() {
    let curve = CompiledInterpolation::from_points(&[(0.0, 0.0), (1.0, 1.0)], CompileOptions::default())
        .unwrap();

    assert_relative_eq!(value(&curve, -1.0), 0.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 0.5), 0.5, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 2.0), 1.0, epsilon = 1e-12);
}

#[test]
fn test_discontinuity_right_hand_wins() {
    let curve = compile(&[(0.0, 0.0), (1.0, 0.5), (1.0, 1.5), (2.0, 2.0)], EdgePolicy::Clamp);

    assert_relative_eq!(value(&curve, 0.9), 0.45, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 1.0), 1.5, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 2.0), 2.0, epsilon = 1e-12);
    // Just below the jump still follows the left-hand line.
    assert_relative_eq!(value(&curve, 0.999_999), 0.499_999_5, epsilon = 1e-9);
}

#[test]
fn test_extrapolate_knee() {
    let curve = compile(&[(1.0, 1.0), (2.0, 1.0), (3.0, 0.0)], EdgePolicy::Extrapolate);

    assert_relative_eq!(value(&curve, 0.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 5.0), -2.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 2.5), 0.5, epsilon = 1e-12);
}

#[test]
fn test_extrapolate_edge_discontinuity_is_flat() {
    let curve = compile(&BOX, EdgePolicy::Extrapolate);

    assert_relative_eq!(value(&curve, 4.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 5.0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 5.5), 2.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 6.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 100.0), 1.0, epsilon = 1e-12);
}

#[test]
fn test_undef_box() {
    let curve = compile(&BOX, EdgePolicy::Undef);

    assert_eq!(curve.evaluate(4.9999).unwrap(), None);
    assert_relative_eq!(value(&curve, 5.0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 6.0), 1.0, epsilon = 1e-12);
    assert_eq!(curve.evaluate(6.0001).unwrap(), None);
}

#[test]
fn test_die_box() {
    let curve = compile(&BOX, EdgePolicy::Die);

    let low = curve.evaluate(4.9999).unwrap_err();
    assert_eq!(low.side(), BoundSide::Low);
    assert_eq!(low.bound(), 5.0);
    let msg = low.to_string();
    assert!(msg.contains("bounds"));
    assert!(msg.contains("(<5)"));

    let high = curve.evaluate(6.0001).unwrap_err();
    assert_eq!(high.side(), BoundSide::High);
    assert_eq!(high.bound(), 6.0);
    let msg = high.to_string();
    assert!(msg.contains("bounds"));
    assert!(msg.contains("(>6)"));

    assert_relative_eq!(value(&curve, 5.0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 6.0), 1.0, epsilon = 1e-12);
}

#[test]
fn test_clamp_box() {
    let curve = compile(&BOX, EdgePolicy::Clamp);

    assert_relative_eq!(value(&curve, 4.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 5.0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 6.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(value(&curve, 7.0), 1.0, epsilon = 1e-12);
}

#[test]
fn test_validation_messages() {
    let err = CompiledInterpolation::new(["0", "1", "abc"], ["0", "1", "2"], CompileOptions::default())
        .unwrap_err();
    assert!(err.to_string().to_lowercase().contains("not a number"));

    let err = CompiledInterpolation::new([0.0, 2.0, 1.0], [0.0, 1.0, 2.0], CompileOptions::default())
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("domain") && msg.contains("sorted"), "{msg}");
}

#[test]
fn test_unknown_names() {
    assert!(matches!(
        CompileOptions::parse("spline", "clamp"),
        Err(ValidationError::UnknownAlgorithm(_))
    ));
    assert!(matches!(
        CompileOptions::parse("linear", "reflect"),
        Err(ValidationError::UnsupportedEdgePolicy { .. })
    ));
}

#[test]
fn test_lookup_table_many_points() {
    // A 1000-point gain curve: y = x^2 sampled on [0, 10].
    let xs: Vec<f64> = (0..1000).map(|i| f64::from(i) / 99.9).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
    let curve = CompiledInterpolation::new(xs.clone(), ys.clone(), CompileOptions::default()).unwrap();

    // 999 interior segments plus two clamps.
    assert_eq!(curve.segment_count(), 1001);
    assert_eq!(curve.depth(), 10);

    for (x, y) in xs.iter().zip(&ys) {
        assert_relative_eq!(value(&curve, *x), *y, epsilon = 1e-9);
    }
    let mid = (xs[500] + xs[501]) / 2.0;
    assert_relative_eq!(value(&curve, mid), (ys[500] + ys[501]) / 2.0, epsilon = 1e-9);
}

#[test]
fn test_shared_across_threads() {
    let curve = Arc::new(compile(&[(0.0, 0.0), (10.0, 100.0)], EdgePolicy::Clamp));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let curve = Arc::clone(&curve);
            thread::spawn(move || {
                (0..100)
                    .map(|i| value(&curve, f64::from(t * 100 + i) / 40.0))
                    .sum::<f64>()
            })
        })
        .collect();

    let total: f64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
    let expected: f64 = (0..400)
        .map(|i| (f64::from(i) / 40.0 * 10.0).min(100.0))
        .sum();
    assert_relative_eq!(total, expected, epsilon = 1e-6);
}
