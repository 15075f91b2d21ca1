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

//! Operations on ranges and range sets.
//!
//! The set algebra itself (`Intersection`, `Union`, `Difference`, `Complement`, `Contains`, `IsEmpty`) comes from `gcollections`. The traits below cover what is specific to ranges: hulls, discrete domains, and the read and write capabilities of range sets.

use crate::comparator::Comparator;
use crate::error::RangeError;
use crate::range::Range;
use num_traits::{CheckedAdd, One};
use trilean::SKleene;

pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// The value covering the whole domain under the natural order.
pub trait Whole
{
  fn whole() -> Self;
}

/// Domains in which every value has a well-defined next value.
///
/// Ranges over such domains can be rewritten in a closed-open canonical form, in which `[1, 4]` and `[5, 8]` become connected.
pub trait Discrete : Ord + Clone
{
  /// `None` on the maximal value.
  fn successor(&self) -> Option<Self>;
}

macro_rules! discrete_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Discrete for $t
    {
      fn successor(&self) -> Option<$t> {
        <$t as CheckedAdd>::checked_add(self, &<$t as One>::one())
      }
    }
  )*}
}

discrete_impl!(i8,u8,i16,u16,i32,u32,i64,u64,i128,u128,isize,usize);

/// Read capability of a range set.
///
/// Implemented by both the mutable and the immutable sets, so that code only reading ranges can accept either.
pub trait RangeSet<T>
{
  fn comparator(&self) -> &Comparator<T>;

  /// Number of disjoint ranges.
  fn len(&self) -> usize;

  fn contains_value(&self, value: &T) -> bool;

  /// `true` if a single range of the set encloses `range`. Always `true` for an empty `range`.
  fn contains_range(&self, range: &Range<T>) -> Result<bool, RangeError>;

  /// `true` if every range of `other` is enclosed in this set.
  fn encloses<S: RangeSet<T>>(&self, other: &S) -> Result<bool, RangeError>;

  /// `true` if at least one value of `range` belongs to the set.
  fn intersects(&self, range: &Range<T>) -> Result<bool, RangeError>;

  /// Whether `range` is entirely covered (`True`), disjoint from the set (`False`) or partially covered (`Unknown`).
  fn coverage(&self, range: &Range<T>) -> Result<SKleene, RangeError> {
    if self.contains_range(range)? {
      Ok(SKleene::True)
    }
    else if self.intersects(range)? {
      Ok(SKleene::Unknown)
    }
    else {
      Ok(SKleene::False)
    }
  }

  fn range_containing(&self, value: &T) -> Option<Range<T>>;

  /// The smallest range enclosing the whole set, empty for an empty set.
  fn span(&self) -> Range<T>;

  /// Copy of the ranges in increasing order.
  fn as_ranges(&self) -> Vec<Range<T>>;
}

/// Write capability of a range set. Every method leaves the set canonical.
pub trait RangeSetMut<T> : RangeSet<T>
{
  /// Adds `range`, coalescing it with the ranges it overlaps or touches.
  fn add(&mut self, range: Range<T>) -> Result<(), RangeError>;

  /// Removes the values of `range`, splitting the ranges it cuts through.
  fn remove(&mut self, range: &Range<T>) -> Result<(), RangeError>;

  fn clear(&mut self);

  /// Adds all `ranges` or none of them if one was built with another comparator.
  fn add_all<I>(&mut self, ranges: I) -> Result<(), RangeError> where
   I: IntoIterator<Item=Range<T>>
  {
    let ranges: Vec<Range<T>> = ranges.into_iter().collect();
    check_all(self.comparator(), &ranges)?;
    for range in ranges {
      self.add(range)?;
    }
    Ok(())
  }

  /// Removes all `ranges` or none of them if one was built with another comparator.
  fn remove_all<I>(&mut self, ranges: I) -> Result<(), RangeError> where
   I: IntoIterator<Item=Range<T>>
  {
    let ranges: Vec<Range<T>> = ranges.into_iter().collect();
    check_all(self.comparator(), &ranges)?;
    for range in &ranges {
      self.remove(range)?;
    }
    Ok(())
  }
}

fn check_all<T>(comparator: &Comparator<T>, ranges: &[Range<T>]) -> Result<(), RangeError> {
  ranges.iter().try_for_each(|r| comparator.check(r.comparator()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn successor_stops_at_max() {
    assert_eq!(3i32.successor(), Some(4));
    assert_eq!(u8::max_value().successor(), None);
    assert_eq!(i64::max_value().successor(), None);
    assert_eq!((-1isize).successor(), Some(0));
  }
}
