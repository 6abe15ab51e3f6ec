//! Withers needs named fields to name the generated methods.

use design_patterns_derive::Withers;

#[derive(Clone, Withers)]
struct Meters(f64);

fn main() {
    let meters = Meters(1.0);
    let _ = meters.0;
}
