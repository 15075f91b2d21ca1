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

//! Non-empty spans and the read-only algorithms shared by the range sets.
//!
//! Every function taking a slice of spans expects it to be canonical: sorted by lower bound, pairwise disjoint and without two connected neighbours.

use crate::bound::*;
use crate::comparator::Comparator;
use crate::ops::Discrete;
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Span<T> {
  pub lower: Bound<T>,
  pub upper: Bound<T>
}

impl<T> Span<T>
{
  /// `None` when the bounds delimit no value.
  pub fn checked(lower: Bound<T>, upper: Bound<T>, cmp: &Comparator<T>) -> Option<Span<T>> {
    if overlaps(&upper, &lower, cmp) {
      Some(Span { lower: lower, upper: upper })
    }
    else {
      None
    }
  }

  pub fn contains(&self, value: &T, cmp: &Comparator<T>) -> bool {
    lower_admits(&self.lower, value, cmp) && upper_admits(&self.upper, value, cmp)
  }

  pub fn encloses(&self, other: &Span<T>, cmp: &Comparator<T>) -> bool {
    cmp_lower(&self.lower, &other.lower, cmp) != Ordering::Greater
      && cmp_upper(&self.upper, &other.upper, cmp) != Ordering::Less
  }

  pub fn is_connected(&self, other: &Span<T>, cmp: &Comparator<T>) -> bool {
    touches(&self.upper, &other.lower, cmp) && touches(&other.upper, &self.lower, cmp)
  }
}

impl<T: Clone> Span<T>
{
  /// The most restrictive bounds of both sides; on a tie the open bound wins.
  pub fn intersection(&self, other: &Span<T>, cmp: &Comparator<T>) -> Option<Span<T>> {
    let lower =
      if cmp_lower(&self.lower, &other.lower, cmp) == Ordering::Less { &other.lower }
      else { &self.lower };
    let upper =
      if cmp_upper(&self.upper, &other.upper, cmp) == Ordering::Greater { &other.upper }
      else { &self.upper };
    Span::checked(lower.clone(), upper.clone(), cmp)
  }

  /// The most inclusive bounds of both sides; on a tie the closed bound wins.
  pub fn hull(&self, other: &Span<T>, cmp: &Comparator<T>) -> Span<T> {
    let lower =
      if cmp_lower(&other.lower, &self.lower, cmp) == Ordering::Less { &other.lower }
      else { &self.lower };
    let upper =
      if cmp_upper(&other.upper, &self.upper, cmp) == Ordering::Greater { &other.upper }
      else { &self.upper };
    Span { lower: lower.clone(), upper: upper.clone() }
  }
}

impl<T: Discrete> Span<T>
{
  /// Closed-open rewriting. A closed upper bound on the maximal value becomes unbounded.
  pub fn canonical(&self, cmp: &Comparator<T>) -> Option<Span<T>> {
    let lower = match &self.lower {
      Bound::Open(v) => Bound::Closed(v.successor()?),
      b => b.clone()
    };
    let upper = match &self.upper {
      Bound::Closed(v) => v.successor().map_or(Bound::Unbounded, Bound::Open),
      b => b.clone()
    };
    Span::checked(lower, upper, cmp)
  }
}

/// Sorted by lower bound and no two neighbours connected, which also makes them disjoint.
pub fn is_canonical<T>(spans: &[Span<T>], cmp: &Comparator<T>) -> bool {
  spans.windows(2).all(|w|
    cmp_lower(&w[0].lower, &w[1].lower, cmp) == Ordering::Less
      && !touches(&w[0].upper, &w[1].lower, cmp))
}

/// Index of the span admitting `value`.
pub fn position_of<T>(spans: &[Span<T>], value: &T, cmp: &Comparator<T>) -> Option<usize> {
  // Upper bounds are sorted too, so the spans ending before `value` form a prefix.
  let idx = spans.partition_point(|s| !upper_admits(&s.upper, value, cmp));
  if idx < spans.len() && lower_admits(&spans[idx].lower, value, cmp) {
    Some(idx)
  }
  else {
    None
  }
}

/// Index of the span enclosing `span`. Only the last span starting before `span` can.
pub fn enclosing<T>(spans: &[Span<T>], span: &Span<T>, cmp: &Comparator<T>) -> Option<usize> {
  let idx = spans.partition_point(|s| cmp_lower(&s.lower, &span.lower, cmp) != Ordering::Greater);
  if idx > 0 && spans[idx - 1].encloses(span, cmp) {
    Some(idx - 1)
  }
  else {
    None
  }
}

pub fn encloses_all<T>(spans: &[Span<T>], others: &[Span<T>], cmp: &Comparator<T>) -> bool {
  others.iter().all(|o| enclosing(spans, o, cmp).is_some())
}

pub fn intersects<T>(spans: &[Span<T>], span: &Span<T>, cmp: &Comparator<T>) -> bool {
  let idx = spans.partition_point(|s| !overlaps(&s.upper, &span.lower, cmp));
  idx < spans.len() && overlaps(&span.upper, &spans[idx].lower, cmp)
}

pub fn hull_of<T: Clone>(spans: &[Span<T>]) -> Option<Span<T>> {
  match (spans.first(), spans.last()) {
    (Some(first), Some(last)) => Some(Span {
      lower: first.lower.clone(),
      upper: last.upper.clone()
    }),
    _ => None
  }
}

pub fn complement<T: Clone>(spans: &[Span<T>], cmp: &Comparator<T>) -> Vec<Span<T>> {
  let mut gaps = Vec::with_capacity(spans.len() + 1);
  // Lower bound of the gap being built, `None` once a span reaches `+∞`.
  let mut lower = Some(Bound::Unbounded);
  for span in spans {
    if !span.lower.is_unbounded() {
      if let Some(l) = lower.take() {
        gaps.extend(Span::checked(l, span.lower.clone().complement(), cmp));
      }
    }
    lower =
      if span.upper.is_unbounded() { None }
      else { Some(span.upper.clone().complement()) };
  }
  if let Some(l) = lower {
    gaps.extend(Span::checked(l, Bound::Unbounded, cmp));
  }
  gaps
}

/// Merge-style intersection of two canonical sequences, linear in their total length.
pub fn intersection<T: Clone>(a: &[Span<T>], b: &[Span<T>], cmp: &Comparator<T>) -> Vec<Span<T>> {
  let mut res = vec![];
  let (mut i, mut j) = (0, 0);
  while i < a.len() && j < b.len() {
    res.extend(a[i].intersection(&b[j], cmp));
    // Advance the one ending first, the other may still overlap the next span.
    if cmp_upper(&a[i].upper, &b[j].upper, cmp) == Ordering::Less {
      i += 1;
    }
    else {
      j += 1;
    }
  }
  res
}

pub fn write_span<T, W>(f: &mut fmt::Formatter<'_>, span: &Span<T>, write: &W) -> fmt::Result where
 W: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result
{
  match &span.lower {
    Bound::Closed(v) => { f.write_str("[")?; write(v, f)?; }
    Bound::Open(v) => { f.write_str("(")?; write(v, f)?; }
    Bound::Unbounded => f.write_str("(-\u{221e}")?
  }
  f.write_str(", ")?;
  match &span.upper {
    Bound::Closed(v) => { write(v, f)?; f.write_str("]") }
    Bound::Open(v) => { write(v, f)?; f.write_str(")") }
    Bound::Unbounded => f.write_str("+\u{221e})")
  }
}

pub fn write_spans<T, W>(f: &mut fmt::Formatter<'_>, spans: &[Span<T>], write: &W) -> fmt::Result where
 W: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result
{
  f.write_str("{")?;
  for (i, span) in spans.iter().enumerate() {
    if i > 0 {
      f.write_str(", ")?;
    }
    write_span(f, span, write)?;
  }
  f.write_str("}")
}
