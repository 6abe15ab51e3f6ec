//! Withers cannot be derived for enums.

use design_patterns_derive::Withers;

#[derive(Clone, Withers)]
enum Shape {
    Circle,
}

fn main() {
    let _ = Shape::Circle;
}
