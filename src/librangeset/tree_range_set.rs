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

//! Mutable canonical range set.
//!
//! It stores disjoint ranges sorted by lower bound. The set is kept as small as possible by coalescing ranges that overlap or touch: adding `[1, 5)` then `[5, 10)` stores `{[1, 10)}`, whereas `(1, 5)` and `(5, 10)` stay apart since `5` belongs to neither. Removing a range splits the ranges it cuts through.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use range_set::ops::*;
//! use range_set::{Comparator, Range, TreeRangeSet};
//!
//! let mut set = TreeRangeSet::new(&Comparator::natural());
//! set.add(Range::closed_open(1, 5).unwrap()).unwrap();
//! set.add(Range::closed_open(5, 10).unwrap()).unwrap();
//! set.remove(&Range::closed_open(3, 7).unwrap()).unwrap();
//! assert_eq!(set.to_string(), "{[1, 3), [7, 10)}");
//! assert_eq!(set.complement().to_string(), "{(-\u{221e}, 1), [3, 7), [10, +\u{221e})}");
//! ```
//!
//! # See also
//! [immutable range set](../immutable_range_set/index.html)

use crate::bound::*;
use crate::comparator::Comparator;
use crate::error::RangeError;
use crate::ops::*;
use crate::range::Range;
use crate::span::{self, Span};
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Bound as StdBound;

#[derive(Clone)]
pub struct TreeRangeSet<T> {
  spans: Vec<Span<T>>,
  comparator: Comparator<T>
}

impl<T> TreeRangeSet<T>
{
  pub fn new(comparator: &Comparator<T>) -> TreeRangeSet<T> {
    TreeRangeSet {
      spans: vec![],
      comparator: comparator.clone()
    }
  }

  pub(crate) fn from_canonical(spans: Vec<Span<T>>, comparator: Comparator<T>) -> TreeRangeSet<T> {
    debug_assert!(span::is_canonical(&spans, &comparator),
      "The spans must be ordered and must not be connected. To build a set from arbitrary ranges, use `add`.");
    TreeRangeSet {
      spans: spans,
      comparator: comparator
    }
  }

  pub(crate) fn into_parts(self) -> (Vec<Span<T>>, Comparator<T>) {
    (self.spans, self.comparator)
  }
}

impl<T: Clone> TreeRangeSet<T>
{
  /// Builds the canonical set covering all `ranges`.
  pub fn from_ranges<I>(comparator: &Comparator<T>, ranges: I) -> Result<TreeRangeSet<T>, RangeError> where
   I: IntoIterator<Item=Range<T>>
  {
    let mut set = TreeRangeSet::new(comparator);
    set.add_all(ranges)?;
    Ok(set)
  }

  /// Ranges in increasing order.
  pub fn iter<'a>(&'a self) -> impl Iterator<Item=Range<T>> + 'a {
    let comparator = &self.comparator;
    self.spans.iter().map(move |s| Range::from_span(Some(s.clone()), comparator.clone()))
  }

  /// The part of this set lying inside `range`.
  pub fn sub_range_set(&self, range: &Range<T>) -> Result<TreeRangeSet<T>, RangeError> {
    self.comparator.check(range.comparator())?;
    let spans = match range.as_span() {
      Some(s) => span::intersection(&self.spans, std::slice::from_ref(s), &self.comparator),
      None => vec![]
    };
    Ok(TreeRangeSet::from_canonical(spans, self.comparator.clone()))
  }

  // Replaces the run of spans connected to `span` by their hull.
  fn add_span(&mut self, span: Span<T>) {
    let cmp = &self.comparator;
    let start = self.spans.partition_point(|s| !touches(&s.upper, &span.lower, cmp));
    let mut end = start;
    while end < self.spans.len() && touches(&span.upper, &self.spans[end].lower, cmp) {
      end += 1;
    }
    let joint =
      if start < end {
        span.hull(&self.spans[start], cmp).hull(&self.spans[end - 1], cmp)
      }
      else {
        span
      };
    self.spans.splice(start..end, Some(joint));
    tracing::trace!(coalesced = end - start, ranges = self.spans.len(), "added range");
  }

  // Replaces the run of spans overlapping `span` by what is left on both of its sides.
  fn remove_span(&mut self, span: &Span<T>) {
    let cmp = &self.comparator;
    let start = self.spans.partition_point(|s| !overlaps(&s.upper, &span.lower, cmp));
    let mut end = start;
    while end < self.spans.len() && overlaps(&span.upper, &self.spans[end].lower, cmp) {
      end += 1;
    }
    if start == end {
      return;
    }
    let mut residuals = Vec::with_capacity(2);
    let first = &self.spans[start];
    if cmp_lower(&first.lower, &span.lower, cmp) == Ordering::Less {
      residuals.extend(Span::checked(first.lower.clone(), span.lower.clone().complement(), cmp));
    }
    let last = &self.spans[end - 1];
    if cmp_upper(&last.upper, &span.upper, cmp) == Ordering::Greater {
      residuals.extend(Span::checked(span.upper.clone().complement(), last.upper.clone(), cmp));
    }
    let kept = residuals.len();
    self.spans.splice(start..end, residuals);
    tracing::trace!(overlapped = end - start, kept = kept, ranges = self.spans.len(), "removed range");
  }
}

impl<T: Discrete + 'static> TreeRangeSet<T>
{
  /// Rewrites every range in closed-open form and coalesces the ranges this makes adjacent, e.g. `{[1, 4], [5, 8]}` becomes `{[1, 9)}`.
  pub fn canonical(&self) -> Result<TreeRangeSet<T>, RangeError> {
    self.comparator.check(&Comparator::natural())?;
    let mut res = TreeRangeSet::new(&self.comparator);
    for s in &self.spans {
      if let Some(c) = s.canonical(&self.comparator) {
        res.add_span(c);
      }
    }
    Ok(res)
  }
}

impl<T: Ord + 'static> Default for TreeRangeSet<T>
{
  fn default() -> TreeRangeSet<T> {
    TreeRangeSet::new(&Comparator::natural())
  }
}

impl<T: Ord + 'static> Whole for TreeRangeSet<T>
{
  fn whole() -> TreeRangeSet<T> {
    let all = Span { lower: Bound::Unbounded, upper: Bound::Unbounded };
    TreeRangeSet::from_canonical(vec![all], Comparator::natural())
  }
}

impl<T: Clone> RangeSet<T> for TreeRangeSet<T>
{
  fn comparator(&self) -> &Comparator<T> {
    &self.comparator
  }

  fn len(&self) -> usize {
    self.spans.len()
  }

  fn contains_value(&self, value: &T) -> bool {
    span::position_of(&self.spans, value, &self.comparator).is_some()
  }

  fn contains_range(&self, range: &Range<T>) -> Result<bool, RangeError> {
    self.comparator.check(range.comparator())?;
    Ok(match range.as_span() {
      Some(s) => span::enclosing(&self.spans, s, &self.comparator).is_some(),
      None => true
    })
  }

  fn encloses<S: RangeSet<T>>(&self, other: &S) -> Result<bool, RangeError> {
    self.comparator.check(other.comparator())?;
    let others: Vec<Span<T>> = other.as_ranges().into_iter().filter_map(Range::into_span).collect();
    Ok(span::encloses_all(&self.spans, &others, &self.comparator))
  }

  fn intersects(&self, range: &Range<T>) -> Result<bool, RangeError> {
    self.comparator.check(range.comparator())?;
    Ok(match range.as_span() {
      Some(s) => span::intersects(&self.spans, s, &self.comparator),
      None => false
    })
  }

  fn range_containing(&self, value: &T) -> Option<Range<T>> {
    span::position_of(&self.spans, value, &self.comparator)
      .map(|i| Range::from_span(Some(self.spans[i].clone()), self.comparator.clone()))
  }

  fn span(&self) -> Range<T> {
    Range::from_span(span::hull_of(&self.spans), self.comparator.clone())
  }

  fn as_ranges(&self) -> Vec<Range<T>> {
    self.iter().collect()
  }
}

impl<T: Clone> RangeSetMut<T> for TreeRangeSet<T>
{
  fn add(&mut self, range: Range<T>) -> Result<(), RangeError> {
    self.comparator.check(range.comparator())?;
    if let Some(s) = range.into_span() {
      self.add_span(s);
    }
    Ok(())
  }

  fn remove(&mut self, range: &Range<T>) -> Result<(), RangeError> {
    self.comparator.check(range.comparator())?;
    if let Some(s) = range.as_span() {
      self.remove_span(s);
    }
    Ok(())
  }

  fn clear(&mut self) {
    self.spans.clear();
  }
}

impl<T> Collection for TreeRangeSet<T>
{
  type Item = T;
}

impl<T: Clone> Contains for TreeRangeSet<T>
{
  fn contains(&self, value: &T) -> bool {
    self.contains_value(value)
  }
}

impl<T> IsEmpty for TreeRangeSet<T>
{
  fn is_empty(&self) -> bool {
    self.spans.is_empty()
  }
}

impl<T: Clone> Union for TreeRangeSet<T>
{
  type Output = Result<TreeRangeSet<T>, RangeError>;

  fn union(&self, rhs: &TreeRangeSet<T>) -> Result<TreeRangeSet<T>, RangeError> {
    self.comparator.check(&rhs.comparator)?;
    let mut res = self.clone();
    for s in &rhs.spans {
      res.add_span(s.clone());
    }
    Ok(res)
  }
}

impl<T: Clone> Intersection for TreeRangeSet<T>
{
  type Output = Result<TreeRangeSet<T>, RangeError>;

  fn intersection(&self, rhs: &TreeRangeSet<T>) -> Result<TreeRangeSet<T>, RangeError> {
    self.comparator.check(&rhs.comparator)?;
    let spans = span::intersection(&self.spans, &rhs.spans, &self.comparator);
    Ok(TreeRangeSet::from_canonical(spans, self.comparator.clone()))
  }
}

impl<T: Clone> Difference for TreeRangeSet<T>
{
  type Output = Result<TreeRangeSet<T>, RangeError>;

  fn difference(&self, rhs: &TreeRangeSet<T>) -> Result<TreeRangeSet<T>, RangeError> {
    self.comparator.check(&rhs.comparator)?;
    let mut res = self.clone();
    for s in &rhs.spans {
      res.remove_span(s);
    }
    Ok(res)
  }
}

impl<T: Clone> Complement for TreeRangeSet<T>
{
  fn complement(&self) -> TreeRangeSet<T> {
    let spans = span::complement(&self.spans, &self.comparator);
    TreeRangeSet::from_canonical(spans, self.comparator.clone())
  }
}

impl<T: PartialEq> PartialEq for TreeRangeSet<T>
{
  fn eq(&self, other: &TreeRangeSet<T>) -> bool {
    self.comparator.same_as(&other.comparator) && self.spans == other.spans
  }
}

impl<T: Eq> Eq for TreeRangeSet<T> {}

impl<T: Display> Display for TreeRangeSet<T>
{
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    span::write_spans(f, &self.spans, &<T as Display>::fmt)
  }
}

impl<T: Debug> Debug for TreeRangeSet<T>
{
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    span::write_spans(f, &self.spans, &<T as Debug>::fmt)
  }
}

pub(crate) fn serialize_spans<T, S>(spans: &[Span<T>], serializer: S) -> Result<S::Ok, S::Error> where
 T: Serialize,
 S: Serializer
{
  serializer.collect_seq(spans.iter().map(|s| (s.lower.as_std(), s.upper.as_std())))
}

/// Reads a sequence of `(lower, upper)` pairs in any order and canonicalizes them under the natural order.
pub(crate) fn deserialize_natural<'de, T, D>(deserializer: D) -> Result<TreeRangeSet<T>, D::Error> where
 T: Deserialize<'de> + Ord + Clone + 'static,
 D: Deserializer<'de>
{
  let comparator = Comparator::natural();
  let mut set = TreeRangeSet::new(&comparator);
  for (lower, upper) in Vec::<(StdBound<T>, StdBound<T>)>::deserialize(deserializer)? {
    let range = Range::new(lower.into(), upper.into(), &comparator).map_err(D::Error::custom)?;
    if let Some(s) = range.into_span() {
      set.add_span(s);
    }
  }
  Ok(set)
}

impl<T: Serialize> Serialize for TreeRangeSet<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serialize_spans(&self.spans, serializer)
  }
}

impl<'de, T> Deserialize<'de> for TreeRangeSet<T> where
 T: Deserialize<'de> + Ord + Clone + 'static
{
  fn deserialize<D>(deserializer: D) -> Result<TreeRangeSet<T>, D::Error> where
   D: Deserializer<'de>
  {
    deserialize_natural(deserializer)
  }
}
