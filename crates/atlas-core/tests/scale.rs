// File: crates/atlas-core/tests/scale.rs
// Purpose: Linear scale mapping, inversion and extents.

use atlas_core::scale::extent;
use atlas_core::LinearScale;

#[test]
fn maps_domain_onto_range() {
    let s = LinearScale::new((0.0, 10.0), (50.0, 150.0));
    assert_eq!(s.map(0.0), 50.0);
    assert_eq!(s.map(5.0), 100.0);
    assert_eq!(s.map(10.0), 150.0);
    // values outside the domain extrapolate
    assert_eq!(s.map(20.0), 250.0);
}

#[test]
fn degenerate_domain_lands_mid_range() {
    let s = LinearScale::new((3.0, 3.0), (10.0, 90.0));
    assert!(s.is_degenerate());
    assert_eq!(s.map(3.0), 50.0);
    assert_eq!(s.map(-100.0), 50.0);
}

#[test]
fn invert_round_trips_pixels() {
    let s = LinearScale::new((-2.0, 6.0), (0.0, 800.0));
    let px = s.map(1.5);
    assert!((s.invert(px) - 1.5).abs() < 1e-9);
}

#[test]
fn extent_skips_non_finite() {
    assert_eq!(extent([3.0, f64::NAN, -1.0, f64::INFINITY, 7.5]), Some((-1.0, 7.5)));
    assert_eq!(extent(std::iter::empty()), None);
    assert_eq!(extent([f64::NAN]), None);
}

#[test]
fn union_domain_widens_both_ends() {
    let s = LinearScale::from_values([2.0, 4.0], (0.0, 1.0)).expect("values");
    let wide = s.union_domain((0.0, 3.0));
    assert_eq!(wide.domain, (0.0, 4.0));
}
