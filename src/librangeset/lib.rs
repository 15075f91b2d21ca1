// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This library provides ranges over any domain ordered by a comparator, and range sets keeping their ranges disjoint, sorted and coalesced. Each bound of a range is independently closed, open or unbounded, so that `[1, 5)`, `(-∞, 3]` or `(2, +∞)` are all representable.
//!
//! Ranges and sets carry the comparator they were built with instead of relying on `Ord`, which allows several orders over the same type. Combining values built with different comparators is reported as an error.
//!
//! Two range sets are provided: [TreeRangeSet](tree_range_set/index.html), mutated in place, and [ImmutableRangeSet](immutable_range_set/index.html), a frozen set whose operations return new sets. Both expose their read operations through [RangeSet](ops/trait.RangeSet.html); only the mutable one implements [RangeSetMut](ops/trait.RangeSetMut.html). The set algebra (union, intersection, difference, complement) is expressed with the `gcollections` operation traits.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use range_set::ops::*;
//! use range_set::{Comparator, Range, TreeRangeSet};
//!
//! let natural = Comparator::natural();
//! let a = TreeRangeSet::from_ranges(&natural, vec![Range::closed_open(1, 10).unwrap()]).unwrap();
//! let b = TreeRangeSet::from_ranges(&natural, vec![Range::closed_open(5, 15).unwrap()]).unwrap();
//! assert_eq!(a.intersection(&b).unwrap().to_string(), "{[5, 10)}");
//! assert_eq!(a.difference(&b).unwrap().to_string(), "{[1, 5)}");
//! assert!(a.union(&b).unwrap().contains(&14));
//! ```
//!
//! # References
//! * [Guava RangeSet](https://github.com/google/guava/wiki/NewCollectionTypesExplained#rangeset)
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//!

pub mod bound;
pub mod comparator;
pub mod error;
pub mod immutable_range_set;
pub mod ops;
pub mod range;
mod span;
pub mod tree_range_set;

#[cfg(test)]
mod properties;

pub use crate::bound::{Bound, BoundType};
pub use crate::comparator::Comparator;
pub use crate::error::RangeError;
pub use crate::immutable_range_set::ImmutableRangeSet;
pub use crate::range::Range;
pub use crate::tree_range_set::TreeRangeSet;
