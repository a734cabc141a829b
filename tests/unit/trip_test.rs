//! Tests for the Trip value object

use wheelhouse::core::models::Trip;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn accessors_return_constructor_values() {
    let trip = Trip::new(3000.0, 1.08);
    assert_eq!(trip.price(), 3000.0);
    assert_eq!(trip.tax(), 1.08);
}

#[test]
fn trip_price_applies_tax() {
    assert!(approx(Trip::new(3000.0, 1.08).trip_price(), 3240.0));
    assert!(approx(Trip::new(5000.0, 1.08).trip_price(), 5400.0));
}

#[test]
fn unit_tax_leaves_price_unchanged() {
    assert_eq!(Trip::new(1234.5, 1.0).trip_price(), 1234.5);
}

#[test]
fn trip_price_in_const_context() {
    const PRICE: f64 = Trip::new(2000.0, 1.5).trip_price();
    assert_eq!(PRICE, 3000.0);
}

#[test]
fn zero_price_is_free() {
    assert_eq!(Trip::new(0.0, 1.5).trip_price(), 0.0);
}
