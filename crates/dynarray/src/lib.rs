//! Growable generic array with persistent list operations.
//!
//! [`DynamicArray`] is a resizable sequence whose backing storage grows by
//! a configurable factor. On top of it, [`ops`] provides a functional
//! operation set in which every call returns a new array (or a scalar)
//! and leaves its inputs untouched.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── Box<[Option<T>]>   backing slots; data.len() is the capacity
//! ├── len                populated prefix; slots past it are spare
//! └── ArrayConfig        initial capacity + growth factor
//!
//! ops    cons, remove, size, is_member, reverse, intersection,
//!        to_list, from_list, find, filter, map, reduce,
//!        iterator (-> Cursor), empty, concat
//! ```
//!
//! # Mutation
//!
//! Only [`DynamicArray::append`] (and `Extend`, which appends) and
//! [`DynamicArray::set`] mutate in place.
//! The operations in [`ops`] take shared references and build their
//! results through `append` on a fresh array.
//!
//! # Absence
//!
//! Slot occupancy is positional. A `DynamicArray<Option<U>>` may hold
//! `None` as an ordinary element; it renders as `None` and is never
//! skipped by `map`, `filter`, `find`, or `remove`.
//!
//! ```
//! use dynarray::ops::{cons, empty};
//!
//! let xs = cons(None, &cons(Some(1), &empty::<Option<i32>>()));
//! assert_eq!(xs.to_string(), "[None, 1]");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod cursor;
pub mod error;
pub mod ops;
pub mod render;

// Public re-exports for the primary API surface.
pub use array::{DynamicArray, IntoIter, Iter};
pub use config::ArrayConfig;
pub use cursor::Cursor;
pub use error::ArrayError;
pub use render::Render;
