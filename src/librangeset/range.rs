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

//! Ranges over a domain ordered by an injected comparator.
//!
//! Each side of a range is independently closed, open or unbounded. A range is a value: every operation returns a new range and never modifies its operands.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use range_set::{Bound, Comparator, Range};
//!
//! let a = Range::closed_open(1, 10).unwrap();
//! let b = Range::new(Bound::Open(5), Bound::Unbounded, &Comparator::natural()).unwrap();
//! let i = a.intersection(&b).unwrap();
//! assert!(i.contains(&6) && !i.contains(&5) && !i.contains(&10));
//! assert_eq!(i.to_string(), "(5, 10)");
//! assert_eq!(b.to_string(), "(5, +\u{221e})");
//! ```
//!
//! # See also
//! [range set](../tree_range_set/index.html)

use crate::bound::*;
use crate::comparator::Comparator;
use crate::error::RangeError;
use crate::ops::*;
use crate::span::{self, Span};
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Bound as StdBound;

#[derive(Clone)]
pub struct Range<T> {
  span: Option<Span<T>>,
  comparator: Comparator<T>
}

impl<T> Range<T>
{
  /// Builds the range delimited by `lower` and `upper`.
  ///
  /// Equal values are accepted when both bounds are closed (a single point) or when exactly one is open (the empty range). Open bounds on both sides of a single value, or a lower value above the upper one, are rejected.
  pub fn new(lower: Bound<T>, upper: Bound<T>, comparator: &Comparator<T>) -> Result<Range<T>, RangeError> {
    if let (Some(l), Some(u)) = (lower.value(), upper.value()) {
      match comparator.compare(l, u) {
        Ordering::Greater => return Err(RangeError::InvalidBounds),
        Ordering::Equal => match (lower.bound_type(), upper.bound_type()) {
          (BoundType::Closed, BoundType::Closed) => (),
          (BoundType::Open, BoundType::Open) => return Err(RangeError::DegenerateBounds),
          _ => return Ok(Range::empty(comparator))
        },
        Ordering::Less => ()
      }
    }
    Ok(Range {
      span: Some(Span { lower: lower, upper: upper }),
      comparator: comparator.clone()
    })
  }

  pub fn empty(comparator: &Comparator<T>) -> Range<T> {
    Range::from_span(None, comparator.clone())
  }

  pub fn all(comparator: &Comparator<T>) -> Range<T> {
    Range::from_span(Some(Span { lower: Bound::Unbounded, upper: Bound::Unbounded }), comparator.clone())
  }

  pub(crate) fn from_span(span: Option<Span<T>>, comparator: Comparator<T>) -> Range<T> {
    Range {
      span: span,
      comparator: comparator
    }
  }

  pub(crate) fn as_span(&self) -> Option<&Span<T>> {
    self.span.as_ref()
  }

  pub(crate) fn into_span(self) -> Option<Span<T>> {
    self.span
  }

  /// `None` for the empty range.
  pub fn lower_bound(&self) -> Option<&Bound<T>> {
    self.span.as_ref().map(|s| &s.lower)
  }

  /// `None` for the empty range.
  pub fn upper_bound(&self) -> Option<&Bound<T>> {
    self.span.as_ref().map(|s| &s.upper)
  }

  pub fn comparator(&self) -> &Comparator<T> {
    &self.comparator
  }

  /// `true` if every value of `other` belongs to this range. The empty range is enclosed by any range.
  pub fn encloses(&self, other: &Range<T>) -> Result<bool, RangeError> {
    self.comparator.check(&other.comparator)?;
    Ok(match (&self.span, &other.span) {
      (_, None) => true,
      (None, Some(_)) => false,
      (Some(a), Some(b)) => a.encloses(b, &self.comparator)
    })
  }

  /// `true` if no value lies strictly between both ranges, e.g. `[1, 5)` and `[5, 9)`, but not `(1, 5)` and `(5, 9)`. An empty range is connected to nothing.
  pub fn is_connected(&self, other: &Range<T>) -> Result<bool, RangeError> {
    self.comparator.check(&other.comparator)?;
    Ok(match (&self.span, &other.span) {
      (Some(a), Some(b)) => a.is_connected(b, &self.comparator),
      _ => false
    })
  }
}

impl<T: Ord + 'static> Range<T>
{
  pub fn closed(lower: T, upper: T) -> Result<Range<T>, RangeError> {
    Range::new(Bound::Closed(lower), Bound::Closed(upper), &Comparator::natural())
  }

  pub fn open(lower: T, upper: T) -> Result<Range<T>, RangeError> {
    Range::new(Bound::Open(lower), Bound::Open(upper), &Comparator::natural())
  }

  pub fn closed_open(lower: T, upper: T) -> Result<Range<T>, RangeError> {
    Range::new(Bound::Closed(lower), Bound::Open(upper), &Comparator::natural())
  }

  pub fn open_closed(lower: T, upper: T) -> Result<Range<T>, RangeError> {
    Range::new(Bound::Open(lower), Bound::Closed(upper), &Comparator::natural())
  }

  pub fn at_least(lower: T) -> Range<T> {
    Range::natural(Bound::Closed(lower), Bound::Unbounded)
  }

  pub fn greater_than(lower: T) -> Range<T> {
    Range::natural(Bound::Open(lower), Bound::Unbounded)
  }

  pub fn at_most(upper: T) -> Range<T> {
    Range::natural(Bound::Unbounded, Bound::Closed(upper))
  }

  pub fn less_than(upper: T) -> Range<T> {
    Range::natural(Bound::Unbounded, Bound::Open(upper))
  }

  fn natural(lower: Bound<T>, upper: Bound<T>) -> Range<T> {
    Range::from_span(Some(Span { lower: lower, upper: upper }), Comparator::natural())
  }
}

impl<T: Ord + Clone + 'static> Range<T>
{
  pub fn singleton(value: T) -> Range<T> {
    Range::natural(Bound::Closed(value.clone()), Bound::Closed(value))
  }
}

impl<T: Discrete + 'static> Range<T>
{
  /// Closed-open form of the range over a discrete domain: `(1, 4]` becomes `[2, 5)`.
  ///
  /// Only defined for the natural order; a range built with another comparator is rejected.
  pub fn canonical(&self) -> Result<Range<T>, RangeError> {
    self.comparator.check(&Comparator::natural())?;
    let span = self.span.as_ref().and_then(|s| s.canonical(&self.comparator));
    Ok(Range::from_span(span, self.comparator.clone()))
  }
}

impl<T: Ord + 'static> Whole for Range<T>
{
  fn whole() -> Range<T> {
    Range::all(&Comparator::natural())
  }
}

impl<T> Collection for Range<T>
{
  type Item = T;
}

impl<T> Contains for Range<T>
{
  fn contains(&self, value: &T) -> bool {
    self.span.as_ref().map_or(false, |s| s.contains(value, &self.comparator))
  }
}

impl<T> IsEmpty for Range<T>
{
  fn is_empty(&self) -> bool {
    self.span.is_none()
  }
}

impl<T: Clone> Intersection for Range<T>
{
  type Output = Result<Range<T>, RangeError>;

  fn intersection(&self, other: &Range<T>) -> Result<Range<T>, RangeError> {
    self.comparator.check(&other.comparator)?;
    let span = match (&self.span, &other.span) {
      (Some(a), Some(b)) => a.intersection(b, &self.comparator),
      _ => None
    };
    Ok(Range::from_span(span, self.comparator.clone()))
  }
}

impl<T: Clone> Hull for Range<T>
{
  type Output = Result<Range<T>, RangeError>;

  /// Smallest range enclosing both ranges, ignoring an empty operand.
  fn hull(&self, other: &Range<T>) -> Result<Range<T>, RangeError> {
    self.comparator.check(&other.comparator)?;
    Ok(match (&self.span, &other.span) {
      (Some(a), Some(b)) => Range::from_span(Some(a.hull(b, &self.comparator)), self.comparator.clone()),
      (None, _) => other.clone(),
      (_, None) => self.clone()
    })
  }
}

impl<T: PartialEq> PartialEq for Range<T>
{
  fn eq(&self, other: &Range<T>) -> bool {
    self.comparator.same_as(&other.comparator) && self.span == other.span
  }
}

impl<T: Eq> Eq for Range<T> {}

impl<T: Display> Display for Range<T>
{
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.span {
      None => f.write_str("{}"),
      Some(s) => span::write_span(f, s, &<T as Display>::fmt)
    }
  }
}

impl<T: Debug> Debug for Range<T>
{
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.span {
      None => f.write_str("{}"),
      Some(s) => span::write_span(f, s, &<T as Debug>::fmt)
    }
  }
}

impl<T: Serialize> Serialize for Range<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    match &self.span {
      None => serializer.serialize_none(),
      Some(s) => serializer.serialize_some(&(s.lower.as_std(), s.upper.as_std()))
    }
  }
}

impl<'de, T> Deserialize<'de> for Range<T> where
 T: Deserialize<'de> + Ord + 'static
{
  /// Deserialized ranges are ordered naturally.
  fn deserialize<D>(deserializer: D) -> Result<Range<T>, D::Error> where
   D: Deserializer<'de>
  {
    let comparator = Comparator::natural();
    match Option::<(StdBound<T>, StdBound<T>)>::deserialize(deserializer)? {
      None => Ok(Range::empty(&comparator)),
      Some((lower, upper)) => Range::new(lower.into(), upper.into(), &comparator).map_err(D::Error::custom)
    }
  }
}
