//! Derive macros for design-patterns records.
//!
//! # Available Derive Macros
//!
//! - [`Withers`]: Generates `with_<field>` derivation methods for struct fields
//!
//! # Example
//!
//! ```rust,ignore
//! use design_patterns_derive::Withers;
//!
//! #[derive(Clone, Withers)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::with_x(&self, i32) -> Point
//! // - Point::with_y(&self, i32) -> Point
//!
//! let point = Point { x: 10, y: 20 };
//! let moved = point.with_x(15);
//! assert_eq!(moved.x, 15);
//! assert_eq!(point.x, 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod withers;

use proc_macro::TokenStream;

/// Derive macro for generating derivation ("with changed field") methods.
///
/// For each named field `foo` of type `T`, generates a method
/// `with_foo(&self, value: T) -> Self` that returns a new value identical
/// to `self` except for `foo`. The source is left untouched.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct)
/// - The methods are only available where the struct implements `Clone`;
///   the untouched fields of the result are produced by `Clone::clone`, so
///   any owned collections they hold are copied rather than shared
///
/// # Generated Code
///
/// ```rust,ignore
/// impl StructName {
///     pub fn with_foo(&self, value: T) -> Self { ... }
/// }
/// ```
///
/// # Generics
///
/// Generic structs are supported:
///
/// ```rust,ignore
/// #[derive(Clone, Withers)]
/// struct Labelled<T> {
///     value: T,
///     label: String,
/// }
///
/// let labelled = Labelled { value: 42, label: "answer".to_string() };
/// let renamed = labelled.with_label("other".to_string());
/// assert_eq!(renamed.value, 42);
/// ```
#[proc_macro_derive(Withers)]
pub fn derive_withers(input: TokenStream) -> TokenStream {
    withers::derive_withers_impl(input)
}
