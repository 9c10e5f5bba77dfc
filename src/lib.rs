//! # sovran-anybox
//!
//! A single-value, type-safe, type-erased container.
//!
//! `sovran-anybox` provides [`AnyBox`], a container that holds one value
//! of any concrete type chosen at the call site, remembers that type's
//! identity, and hands the value back only to a caller who names the
//! exact original type. Wrong-type access is always safe: it is either
//! an ordinary empty result or an explicit error, never a
//! misinterpreted value.
//!
//! ## Key Features
//!
//! - **Type-safe**: retrieval is checked at runtime against the exact
//!   stored type
//! - **Deep-copying**: cloning a box clones the contained value, so
//!   copies are fully independent
//! - **Two access styles**: a never-failing probe (`try_get`) and a
//!   failure-signaling accessor (`cast`)
//! - **No macros**: a pure runtime solution built on `std::any`
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_anybox::{AnyBox, AnyError};
//!
//! fn main() -> Result<(), AnyError> {
//!     // Store a value of any type
//!     let mut slot = AnyBox::of("Hello world");
//!     println!("{}", slot.cast::<&str>()?);
//!
//!     // Replace it with a value of a different type
//!     slot.set(5i32);
//!     let number: i32 = slot.cast()?;
//!     println!("Number: {}", number);
//!
//!     // Handle mismatches properly
//!     match slot.cast::<String>() {
//!         Ok(text) => println!("Text: {}", text),
//!         Err(AnyError::TypeMismatch { requested, stored }) => {
//!             println!("Asked for {} but the box holds {}", requested, stored)
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Probing Without Errors
//!
//! ```rust
//! use sovran_anybox::AnyBox;
//!
//! let mut slot = AnyBox::of(vec![1, 2, 3]);
//!
//! // try_get never fails; absence is an ordinary None
//! if let Some(numbers) = slot.try_get::<Vec<i32>>() {
//!     println!("Sum: {}", numbers.iter().sum::<i32>());
//! }
//! assert!(slot.try_get::<String>().is_none());
//!
//! // Mutate in place through the same exact-type check
//! if let Some(numbers) = slot.try_get_mut::<Vec<i32>>() {
//!     numbers.push(4);
//! }
//! assert_eq!(slot.try_get::<Vec<i32>>().map(|v| v.len()), Some(4));
//! ```
//!
//! ### Copies Are Independent
//!
//! ```rust
//! use sovran_anybox::AnyBox;
//!
//! let original = AnyBox::of(String::from("shared?"));
//! let mut copy = original.clone();
//!
//! copy.try_get_mut::<String>().unwrap().push_str(" no.");
//!
//! assert_eq!(original.try_get::<String>().unwrap(), "shared?");
//! assert_eq!(copy.try_get::<String>().unwrap(), "shared? no.");
//! ```
//!
//! ### Emptying and Refilling
//!
//! ```rust
//! use sovran_anybox::{AnyBox, TypeId};
//!
//! let mut slot = AnyBox::of(4.2f64);
//! assert_eq!(slot.type_id(), Some(TypeId::of::<f64>()));
//!
//! slot.reset();
//! assert!(!slot.has_value());
//! assert_eq!(slot.type_id(), None);
//!
//! slot.set(String::from("QWERTY"));
//! assert_eq!(slot.cast::<String>().unwrap(), "QWERTY");
//! ```

mod boxed;
mod cell;
mod error;

pub use boxed::AnyBox;
pub use error::AnyError;

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
