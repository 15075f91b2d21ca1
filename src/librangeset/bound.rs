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

//! Bounds of a range and their ordering.
//!
//! A lower and an upper bound holding the same value do not compare the same way: `[5` starts before `(5` but `5)` ends before `5]`. The functions of this module encode these rules once so that ranges and range sets never compare raw values directly.

use crate::comparator::Comparator;
use std::cmp::Ordering;
use std::ops::Bound as StdBound;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BoundType {
  Closed,
  Open,
  Unbounded
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Bound<T> {
  /// The value is included.
  Closed(T),
  /// The value is excluded.
  Open(T),
  Unbounded
}

impl<T> Bound<T>
{
  pub fn bound_type(&self) -> BoundType {
    match self {
      Bound::Closed(_) => BoundType::Closed,
      Bound::Open(_) => BoundType::Open,
      Bound::Unbounded => BoundType::Unbounded
    }
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      Bound::Closed(v) | Bound::Open(v) => Some(v),
      Bound::Unbounded => None
    }
  }

  pub fn is_unbounded(&self) -> bool {
    match self {
      Bound::Unbounded => true,
      _ => false
    }
  }

  pub fn as_ref(&self) -> Bound<&T> {
    match self {
      Bound::Closed(v) => Bound::Closed(v),
      Bound::Open(v) => Bound::Open(v),
      Bound::Unbounded => Bound::Unbounded
    }
  }

  pub fn map<U, F>(self, f: F) -> Bound<U> where
   F: FnOnce(T) -> U
  {
    match self {
      Bound::Closed(v) => Bound::Closed(f(v)),
      Bound::Open(v) => Bound::Open(f(v)),
      Bound::Unbounded => Bound::Unbounded
    }
  }

  /// The bound delimiting the other side of this one: the values excluded by `[v` are exactly those of `v)`.
  pub fn complement(self) -> Bound<T> {
    match self {
      Bound::Closed(v) => Bound::Open(v),
      Bound::Open(v) => Bound::Closed(v),
      Bound::Unbounded => Bound::Unbounded
    }
  }

  pub fn as_std(&self) -> StdBound<&T> {
    match self {
      Bound::Closed(v) => StdBound::Included(v),
      Bound::Open(v) => StdBound::Excluded(v),
      Bound::Unbounded => StdBound::Unbounded
    }
  }
}

impl<T> From<StdBound<T>> for Bound<T>
{
  fn from(bound: StdBound<T>) -> Bound<T> {
    match bound {
      StdBound::Included(v) => Bound::Closed(v),
      StdBound::Excluded(v) => Bound::Open(v),
      StdBound::Unbounded => Bound::Unbounded
    }
  }
}

impl<T> From<Bound<T>> for StdBound<T>
{
  fn from(bound: Bound<T>) -> StdBound<T> {
    match bound {
      Bound::Closed(v) => StdBound::Included(v),
      Bound::Open(v) => StdBound::Excluded(v),
      Bound::Unbounded => StdBound::Unbounded
    }
  }
}

/// Orders two lower bounds: `Unbounded` comes first and `[v` comes before `(v`.
pub fn cmp_lower<T>(a: &Bound<T>, b: &Bound<T>, cmp: &Comparator<T>) -> Ordering {
  match (a, b) {
    (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
    (Bound::Unbounded, _) => Ordering::Less,
    (_, Bound::Unbounded) => Ordering::Greater,
    (Bound::Closed(x), Bound::Closed(y))
  | (Bound::Open(x), Bound::Open(y)) => cmp.compare(x, y),
    (Bound::Closed(x), Bound::Open(y)) => cmp.compare(x, y).then(Ordering::Less),
    (Bound::Open(x), Bound::Closed(y)) => cmp.compare(x, y).then(Ordering::Greater)
  }
}

/// Orders two upper bounds: `Unbounded` comes last and `v)` comes before `v]`.
pub fn cmp_upper<T>(a: &Bound<T>, b: &Bound<T>, cmp: &Comparator<T>) -> Ordering {
  match (a, b) {
    (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
    (Bound::Unbounded, _) => Ordering::Greater,
    (_, Bound::Unbounded) => Ordering::Less,
    (Bound::Closed(x), Bound::Closed(y))
  | (Bound::Open(x), Bound::Open(y)) => cmp.compare(x, y),
    (Bound::Closed(x), Bound::Open(y)) => cmp.compare(x, y).then(Ordering::Greater),
    (Bound::Open(x), Bound::Closed(y)) => cmp.compare(x, y).then(Ordering::Less)
  }
}

pub fn lower_admits<T>(lower: &Bound<T>, value: &T, cmp: &Comparator<T>) -> bool {
  match lower {
    Bound::Closed(l) => cmp.compare(l, value) != Ordering::Greater,
    Bound::Open(l) => cmp.compare(l, value) == Ordering::Less,
    Bound::Unbounded => true
  }
}

pub fn upper_admits<T>(upper: &Bound<T>, value: &T, cmp: &Comparator<T>) -> bool {
  match upper {
    Bound::Closed(u) => cmp.compare(value, u) != Ordering::Greater,
    Bound::Open(u) => cmp.compare(value, u) == Ordering::Less,
    Bound::Unbounded => true
  }
}

/// `true` if no value lies strictly between the upper bound of a range and the lower bound of another one, i.e. they overlap or touch.
pub fn touches<T>(upper: &Bound<T>, lower: &Bound<T>, cmp: &Comparator<T>) -> bool {
  match (upper, lower) {
    (Bound::Unbounded, _) | (_, Bound::Unbounded) => true,
    (Bound::Open(u), Bound::Open(l)) => cmp.compare(u, l) == Ordering::Greater,
    (Bound::Closed(u), Bound::Closed(l))
  | (Bound::Closed(u), Bound::Open(l))
  | (Bound::Open(u), Bound::Closed(l)) => cmp.compare(u, l) != Ordering::Less
  }
}

/// `true` if at least one value is admitted by both the upper bound of a range and the lower bound of another one.
pub fn overlaps<T>(upper: &Bound<T>, lower: &Bound<T>, cmp: &Comparator<T>) -> bool {
  match (upper, lower) {
    (Bound::Unbounded, _) | (_, Bound::Unbounded) => true,
    (Bound::Closed(u), Bound::Closed(l)) => cmp.compare(u, l) != Ordering::Less,
    (Bound::Closed(u), Bound::Open(l))
  | (Bound::Open(u), Bound::Closed(l))
  | (Bound::Open(u), Bound::Open(l)) => cmp.compare(u, l) == Ordering::Greater
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::Bound::*;

  fn natural() -> Comparator<i32> {
    Comparator::natural()
  }

  #[test]
  fn lower_bound_order() {
    let cmp = natural();
    let cases = vec![
      (Unbounded, Unbounded, Ordering::Equal),
      (Unbounded, Closed(-100), Ordering::Less),
      (Open(3), Unbounded, Ordering::Greater),
      (Closed(3), Open(3), Ordering::Less),
      (Open(3), Closed(3), Ordering::Greater),
      (Open(3), Closed(4), Ordering::Less),
      (Closed(4), Closed(4), Ordering::Equal)
    ];
    for (a, b, expected) in cases {
      assert_eq!(cmp_lower(&a, &b, &cmp), expected, "lower {:?} vs {:?}", a, b);
    }
  }

  #[test]
  fn upper_bound_order() {
    let cmp = natural();
    let cases = vec![
      (Unbounded, Unbounded, Ordering::Equal),
      (Unbounded, Closed(100), Ordering::Greater),
      (Open(3), Unbounded, Ordering::Less),
      (Closed(3), Open(3), Ordering::Greater),
      (Open(3), Closed(3), Ordering::Less),
      (Closed(2), Open(3), Ordering::Less)
    ];
    for (a, b, expected) in cases {
      assert_eq!(cmp_upper(&a, &b, &cmp), expected, "upper {:?} vs {:?}", a, b);
    }
  }

  #[test]
  fn admission() {
    let cmp = natural();
    assert!(lower_admits(&Closed(1), &1, &cmp));
    assert!(!lower_admits(&Open(1), &1, &cmp));
    assert!(lower_admits(&Unbounded, &i32::min_value(), &cmp));
    assert!(upper_admits(&Closed(1), &1, &cmp));
    assert!(!upper_admits(&Open(1), &1, &cmp));
    assert!(!upper_admits(&Closed(1), &2, &cmp));
  }

  #[test]
  fn touching_and_overlapping() {
    let cmp = natural();
    // (a, 5) then [5, b)
    assert!(touches(&Open(5), &Closed(5), &cmp));
    assert!(!overlaps(&Open(5), &Closed(5), &cmp));
    // (a, 5) then (5, b)
    assert!(!touches(&Open(5), &Open(5), &cmp));
    // [a, 5] then [5, b]
    assert!(touches(&Closed(5), &Closed(5), &cmp));
    assert!(overlaps(&Closed(5), &Closed(5), &cmp));
    assert!(!touches(&Closed(4), &Closed(5), &cmp));
    assert!(overlaps(&Unbounded, &Open(5), &cmp));
  }

  #[test]
  fn complement_and_std_conversion() {
    assert_eq!(Closed(1).complement(), Open(1));
    assert_eq!(Open(1).complement(), Closed(1));
    assert_eq!(Bound::<i32>::Unbounded.complement(), Unbounded);
    assert_eq!(Bound::from(StdBound::Excluded(2)), Open(2));
    assert_eq!(StdBound::from(Closed(2)), StdBound::Included(2));
    assert_eq!(Closed(7).bound_type(), BoundType::Closed);
    assert_eq!(Open(7).value(), Some(&7));
    assert_eq!(Bound::<i32>::Unbounded.value(), None);
  }
}
