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

//! Persistent range set.
//!
//! An `ImmutableRangeSet` is a frozen canonical sequence of ranges. It offers the read operations of every range set, but no method mutating it: each `with_*` operation copies the ranges into a fresh [`TreeRangeSet`](../tree_range_set/struct.TreeRangeSet.html), applies one operation there and freezes the result into a new set. Frozen sets can be shared freely, including across threads.
//!
//! # Examples
//!
//! ```rust
//! use range_set::ops::*;
//! use range_set::{Comparator, ImmutableRangeSet, Range};
//!
//! let empty = ImmutableRangeSet::empty(&Comparator::natural());
//! let set = empty.with_add(Range::closed_open(1, 10).unwrap()).unwrap();
//! let holed = set.with_remove(&Range::closed_open(3, 7).unwrap()).unwrap();
//! assert_eq!(holed.to_string(), "{[1, 3), [7, 10)}");
//! assert_eq!(set.to_string(), "{[1, 10)}");
//! assert_eq!(empty.len(), 0);
//! ```
//!
//! There is no way to mutate a frozen set in place:
//!
//! ```compile_fail
//! use range_set::ops::*;
//! use range_set::{Comparator, ImmutableRangeSet, Range};
//!
//! let mut set = ImmutableRangeSet::empty(&Comparator::natural());
//! set.add(Range::closed(1, 2).unwrap());
//! ```

use crate::comparator::Comparator;
use crate::error::RangeError;
use crate::ops::*;
use crate::range::Range;
use crate::span::{self, Span};
use crate::tree_range_set::{self, TreeRangeSet};
use gcollections::kind::*;
use gcollections::ops::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

#[derive(Clone)]
pub struct ImmutableRangeSet<T> {
  spans: Arc<[Span<T>]>,
  comparator: Comparator<T>
}

impl<T> ImmutableRangeSet<T>
{
  pub fn empty(comparator: &Comparator<T>) -> ImmutableRangeSet<T> {
    ImmutableRangeSet {
      spans: Arc::from(Vec::new()),
      comparator: comparator.clone()
    }
  }

  /// A set sharing the comparator of this one but without any range.
  pub fn with_clear(&self) -> ImmutableRangeSet<T> {
    ImmutableRangeSet::empty(&self.comparator)
  }
}

impl<T: Clone> ImmutableRangeSet<T>
{
  /// Canonicalizes `ranges` through a temporary `TreeRangeSet`.
  pub fn from_ranges<I>(comparator: &Comparator<T>, ranges: I) -> Result<ImmutableRangeSet<T>, RangeError> where
   I: IntoIterator<Item=Range<T>>
  {
    TreeRangeSet::from_ranges(comparator, ranges).map(ImmutableRangeSet::from)
  }

  /// Mutable copy of this set.
  pub fn to_mutable(&self) -> TreeRangeSet<T> {
    tracing::trace!(ranges = self.spans.len(), "thawing frozen range set");
    TreeRangeSet::from_canonical(self.spans.to_vec(), self.comparator.clone())
  }

  fn with<F>(&self, op: F) -> Result<ImmutableRangeSet<T>, RangeError> where
   F: FnOnce(&mut TreeRangeSet<T>) -> Result<(), RangeError>
  {
    let mut set = self.to_mutable();
    op(&mut set)?;
    Ok(ImmutableRangeSet::from(set))
  }

  pub fn with_add(&self, range: Range<T>) -> Result<ImmutableRangeSet<T>, RangeError> {
    self.with(|set| set.add(range))
  }

  pub fn with_add_all<I>(&self, ranges: I) -> Result<ImmutableRangeSet<T>, RangeError> where
   I: IntoIterator<Item=Range<T>>
  {
    self.with(|set| set.add_all(ranges))
  }

  pub fn with_remove(&self, range: &Range<T>) -> Result<ImmutableRangeSet<T>, RangeError> {
    self.with(|set| set.remove(range))
  }

  pub fn with_remove_all<I>(&self, ranges: I) -> Result<ImmutableRangeSet<T>, RangeError> where
   I: IntoIterator<Item=Range<T>>
  {
    self.with(|set| set.remove_all(ranges))
  }

  /// Ranges in increasing order.
  pub fn iter<'a>(&'a self) -> impl Iterator<Item=Range<T>> + 'a {
    let comparator = &self.comparator;
    self.spans.iter().map(move |s| Range::from_span(Some(s.clone()), comparator.clone()))
  }

  pub fn sub_range_set(&self, range: &Range<T>) -> Result<ImmutableRangeSet<T>, RangeError> {
    self.to_mutable().sub_range_set(range).map(ImmutableRangeSet::from)
  }
}

impl<T: Discrete + 'static> ImmutableRangeSet<T>
{
  pub fn canonical(&self) -> Result<ImmutableRangeSet<T>, RangeError> {
    self.to_mutable().canonical().map(ImmutableRangeSet::from)
  }
}

impl<T> From<TreeRangeSet<T>> for ImmutableRangeSet<T>
{
  fn from(set: TreeRangeSet<T>) -> ImmutableRangeSet<T> {
    let (spans, comparator) = set.into_parts();
    ImmutableRangeSet {
      spans: Arc::from(spans),
      comparator: comparator
    }
  }
}

impl<T: Ord + 'static> Default for ImmutableRangeSet<T>
{
  fn default() -> ImmutableRangeSet<T> {
    ImmutableRangeSet::empty(&Comparator::natural())
  }
}

impl<T: Ord + 'static> Whole for ImmutableRangeSet<T>
{
  fn whole() -> ImmutableRangeSet<T> {
    ImmutableRangeSet::from(TreeRangeSet::whole())
  }
}

impl<T: Clone> RangeSet<T> for ImmutableRangeSet<T>
{
  fn comparator(&self) -> &Comparator<T> {
    &self.comparator
  }

  fn len(&self) -> usize {
    self.spans.len()
  }

  fn contains_value(&self, value: &T) -> bool {
    span::position_of(&self.spans[..], value, &self.comparator).is_some()
  }

  fn contains_range(&self, range: &Range<T>) -> Result<bool, RangeError> {
    self.comparator.check(range.comparator())?;
    Ok(range.as_span().map_or(true, |s| span::enclosing(&self.spans[..], s, &self.comparator).is_some()))
  }

  fn encloses<S: RangeSet<T>>(&self, other: &S) -> Result<bool, RangeError> {
    self.comparator.check(other.comparator())?;
    let others: Vec<Span<T>> = other.as_ranges().into_iter().filter_map(Range::into_span).collect();
    Ok(span::encloses_all(&self.spans[..], &others, &self.comparator))
  }

  fn intersects(&self, range: &Range<T>) -> Result<bool, RangeError> {
    self.comparator.check(range.comparator())?;
    Ok(range.as_span().map_or(false, |s| span::intersects(&self.spans[..], s, &self.comparator)))
  }

  fn range_containing(&self, value: &T) -> Option<Range<T>> {
    span::position_of(&self.spans[..], value, &self.comparator)
      .map(|i| Range::from_span(Some(self.spans[i].clone()), self.comparator.clone()))
  }

  fn span(&self) -> Range<T> {
    Range::from_span(span::hull_of(&self.spans[..]), self.comparator.clone())
  }

  fn as_ranges(&self) -> Vec<Range<T>> {
    self.iter().collect()
  }
}

impl<T> Collection for ImmutableRangeSet<T>
{
  type Item = T;
}

impl<T: Clone> Contains for ImmutableRangeSet<T>
{
  fn contains(&self, value: &T) -> bool {
    self.contains_value(value)
  }
}

impl<T> IsEmpty for ImmutableRangeSet<T>
{
  fn is_empty(&self) -> bool {
    self.spans.is_empty()
  }
}

impl<T: Clone> Union for ImmutableRangeSet<T>
{
  type Output = Result<ImmutableRangeSet<T>, RangeError>;

  fn union(&self, rhs: &ImmutableRangeSet<T>) -> Result<ImmutableRangeSet<T>, RangeError> {
    self.comparator.check(&rhs.comparator)?;
    self.with(|set| set.add_all(rhs.iter()))
  }
}

impl<T: Clone> Intersection for ImmutableRangeSet<T>
{
  type Output = Result<ImmutableRangeSet<T>, RangeError>;

  fn intersection(&self, rhs: &ImmutableRangeSet<T>) -> Result<ImmutableRangeSet<T>, RangeError> {
    self.to_mutable().intersection(&rhs.to_mutable()).map(ImmutableRangeSet::from)
  }
}

impl<T: Clone> Difference for ImmutableRangeSet<T>
{
  type Output = Result<ImmutableRangeSet<T>, RangeError>;

  fn difference(&self, rhs: &ImmutableRangeSet<T>) -> Result<ImmutableRangeSet<T>, RangeError> {
    self.comparator.check(&rhs.comparator)?;
    self.with(|set| set.remove_all(rhs.iter()))
  }
}

impl<T: Clone> Complement for ImmutableRangeSet<T>
{
  fn complement(&self) -> ImmutableRangeSet<T> {
    ImmutableRangeSet::from(self.to_mutable().complement())
  }
}

impl<T: PartialEq> PartialEq for ImmutableRangeSet<T>
{
  fn eq(&self, other: &ImmutableRangeSet<T>) -> bool {
    self.comparator.same_as(&other.comparator) && self.spans == other.spans
  }
}

impl<T: Eq> Eq for ImmutableRangeSet<T> {}

impl<T: Display> Display for ImmutableRangeSet<T>
{
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    span::write_spans(f, &self.spans[..], &<T as Display>::fmt)
  }
}

impl<T: Debug> Debug for ImmutableRangeSet<T>
{
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    span::write_spans(f, &self.spans[..], &<T as Debug>::fmt)
  }
}

impl<T: Serialize> Serialize for ImmutableRangeSet<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    tree_range_set::serialize_spans(&self.spans[..], serializer)
  }
}

impl<'de, T> Deserialize<'de> for ImmutableRangeSet<T> where
 T: Deserialize<'de> + Ord + Clone + 'static
{
  fn deserialize<D>(deserializer: D) -> Result<ImmutableRangeSet<T>, D::Error> where
   D: Deserializer<'de>
  {
    tree_range_set::deserialize_natural(deserializer).map(ImmutableRangeSet::from)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bound::Bound::{self, *};
  use serde_test::{assert_tokens, Token};
  use std::thread;

  fn range(lower: Bound<i32>, upper: Bound<i32>) -> Range<i32> {
    Range::new(lower, upper, &Comparator::natural()).unwrap()
  }

  fn make_range_set(ranges: Vec<Range<i32>>) -> ImmutableRangeSet<i32> {
    ImmutableRangeSet::from_ranges(&Comparator::natural(), ranges).unwrap()
  }

  #[test]
  fn with_operations_leave_receiver_untouched() {
    let base = make_range_set(vec![range(Closed(1), Open(10))]);
    let added = base.with_add(range(Closed(10), Closed(12))).unwrap();
    let removed = base.with_remove(&range(Closed(3), Open(7))).unwrap();
    let cleared = base.with_clear();
    assert_eq!(base.as_ranges(), vec![range(Closed(1), Open(10))]);
    assert_eq!(added.as_ranges(), vec![range(Closed(1), Closed(12))]);
    assert_eq!(removed.as_ranges(), vec![range(Closed(1), Open(3)), range(Closed(7), Open(10))]);
    assert!(cleared.is_empty());
    assert!(cleared.comparator().same_as(base.comparator()));
  }

  #[test]
  fn batch_operations() {
    let base = ImmutableRangeSet::default();
    let set = base.with_add_all(vec![range(Open(1), Open(5)), range(Open(5), Open(10)), range(Closed(20), Closed(30))]).unwrap();
    assert_eq!(set.len(), 3);
    let set = set.with_remove_all(vec![range(Closed(3), Closed(7)), range(Unbounded, Closed(20))]).unwrap();
    assert_eq!(set.to_string(), "{(20, 30]}");
  }

  #[test]
  fn from_ranges_canonicalizes() {
    let set = make_range_set(vec![range(Closed(5), Open(10)), range(Closed(1), Open(5)), range(Closed(20), Open(25))]);
    assert_eq!(set.as_ranges(), vec![range(Closed(1), Open(10)), range(Closed(20), Open(25))]);
  }

  #[test]
  fn read_operations() {
    let set = make_range_set(vec![range(Closed(1), Open(5)), range(Closed(10), Closed(15))]);
    assert!(set.contains(&1) && set.contains_value(&15));
    assert!(!set.contains(&5) && !set.contains_value(&9));
    assert_eq!(set.contains_range(&range(Closed(11), Open(15))), Ok(true));
    assert_eq!(set.intersects(&range(Closed(5), Open(10))), Ok(false));
    assert_eq!(set.range_containing(&12), Some(range(Closed(10), Closed(15))));
    assert_eq!(set.span(), range(Closed(1), Closed(15)));
    let inner = make_range_set(vec![range(Closed(2), Closed(3))]);
    assert_eq!(set.encloses(&inner), Ok(true));
    assert_eq!(set.encloses(&inner.to_mutable()), Ok(true));
    assert_eq!(inner.encloses(&set), Ok(false));
  }

  #[test]
  fn set_algebra_matches_mutable_set() {
    let a = make_range_set(vec![range(Closed(1), Open(10))]);
    let b = make_range_set(vec![range(Closed(5), Open(15))]);
    assert_eq!(a.union(&b).unwrap().as_ranges(), vec![range(Closed(1), Open(15))]);
    assert_eq!(a.intersection(&b).unwrap().as_ranges(), vec![range(Closed(5), Open(10))]);
    assert_eq!(a.difference(&b).unwrap().as_ranges(), vec![range(Closed(1), Open(5))]);
    assert_eq!(a.complement().as_ranges(), vec![range(Unbounded, Open(1)), range(Closed(10), Unbounded)]);
    let (ta, tb) = (a.to_mutable(), b.to_mutable());
    assert_eq!(a.union(&b).unwrap().to_mutable(), ta.union(&tb).unwrap());
    assert_eq!(a.difference(&b).unwrap().to_mutable(), ta.difference(&tb).unwrap());
    assert_eq!(ImmutableRangeSet::from(ta.complement()), a.complement());
  }

  #[test]
  fn comparator_mismatch() {
    let custom = Comparator::new(|a: &i32, b: &i32| a.cmp(b));
    let a = make_range_set(vec![range(Closed(1), Open(10))]);
    let b = ImmutableRangeSet::from_ranges(&custom, vec![Range::new(Closed(1), Closed(2), &custom).unwrap()]).unwrap();
    assert_eq!(a.union(&b), Err(RangeError::ComparatorMismatch));
    assert_eq!(a.intersection(&b), Err(RangeError::ComparatorMismatch));
    assert_eq!(a.difference(&b), Err(RangeError::ComparatorMismatch));
    assert_eq!(a.with_add(b.span()), Err(RangeError::ComparatorMismatch));
  }

  #[test]
  fn discrete_canonical_form() {
    let set = make_range_set(vec![range(Closed(1), Closed(4)), range(Closed(5), Closed(8))]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.canonical().unwrap().as_ranges(), vec![range(Closed(1), Open(9))]);
  }

  #[test]
  fn shared_across_threads() {
    let set = Arc::new(make_range_set(vec![range(Closed(0), Open(100))]));
    let handles: Vec<_> = (0..4).map(|i| {
      let set = Arc::clone(&set);
      thread::spawn(move || set.contains(&(i * 30)))
    }).collect();
    let found: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(found, vec![true, true, true, true]);
    let wider = set.with_add(range(Closed(100), Closed(120))).unwrap();
    assert!(!set.contains(&100) && wider.contains(&100));
  }

  #[test]
  fn whole_and_textual_form() {
    assert_eq!(ImmutableRangeSet::<i32>::whole().to_string(), "{(-\u{221e}, +\u{221e})}");
    assert_eq!(ImmutableRangeSet::<i32>::default().to_string(), "{}");
  }

  #[test]
  fn test_ser_de_immutable_range_set() {
    let set = make_range_set(vec![range(Closed(1), Closed(2))]);
    assert_tokens(&set, &[
      Token::Seq { len: Some(1) },
      Token::Tuple { len: 2 },
      Token::NewtypeVariant { name: "Bound", variant: "Included" },
      Token::I32(1),
      Token::NewtypeVariant { name: "Bound", variant: "Included" },
      Token::I32(2),
      Token::TupleEnd,
      Token::SeqEnd
    ]);
  }
}
