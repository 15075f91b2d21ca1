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

//! Algebraic laws of range sets checked on random sets.
//!
//! Bounds are drawn on even values only and membership is probed on every integer, so odd values stand for the points lying strictly between two bounds.

use crate::bound::Bound;
use crate::comparator::Comparator;
use crate::immutable_range_set::ImmutableRangeSet;
use crate::ops::*;
use crate::range::Range;
use crate::span;
use crate::tree_range_set::TreeRangeSet;
use gcollections::ops::*;
use proptest::prelude::*;

const PROBES: std::ops::RangeInclusive<i32> = -24..=24;

fn bound() -> impl Strategy<Value=Bound<i32>> {
  prop_oneof![
    4 => (-10i32..10).prop_map(|v| Bound::Closed(v * 2)),
    4 => (-10i32..10).prop_map(|v| Bound::Open(v * 2)),
    1 => Just(Bound::Unbounded)
  ]
}

fn range() -> impl Strategy<Value=Range<i32>> {
  (bound(), bound()).prop_filter_map("invalid bounds", |(lower, upper)|
    Range::new(lower, upper, &Comparator::natural()).ok())
}

fn ranges() -> impl Strategy<Value=Vec<Range<i32>>> {
  prop::collection::vec(range(), 0..8)
}

fn make_range_set(ranges: Vec<Range<i32>>) -> TreeRangeSet<i32> {
  TreeRangeSet::from_ranges(&Comparator::natural(), ranges).unwrap()
}

fn is_canonical(set: &TreeRangeSet<i32>) -> bool {
  let (spans, comparator) = set.clone().into_parts();
  span::is_canonical(&spans, &comparator)
}

proptest! {
  #[test]
  fn adding_keeps_set_canonical(ranges in ranges()) {
    let mut set = TreeRangeSet::new(&Comparator::natural());
    for r in ranges {
      set.add(r).unwrap();
      prop_assert!(is_canonical(&set), "{:?} is not canonical", set);
    }
  }

  #[test]
  fn adding_order_is_irrelevant(ranges in ranges()) {
    let forward = make_range_set(ranges.clone());
    let backward = make_range_set(ranges.into_iter().rev().collect());
    prop_assert_eq!(forward, backward);
  }

  #[test]
  fn adding_covers_exactly_the_ranges(ranges in ranges()) {
    let set = make_range_set(ranges.clone());
    for v in PROBES {
      prop_assert_eq!(set.contains(&v), ranges.iter().any(|r| r.contains(&v)), "probe {}", v);
    }
  }

  #[test]
  fn removing_what_was_added_empties(r in range()) {
    let mut set = TreeRangeSet::new(&Comparator::natural());
    set.add(r.clone()).unwrap();
    set.remove(&r).unwrap();
    prop_assert!(set.is_empty());
  }

  #[test]
  fn removing_keeps_set_canonical(a in ranges(), b in ranges()) {
    let mut set = make_range_set(a);
    for r in &b {
      set.remove(r).unwrap();
      prop_assert!(is_canonical(&set), "{:?} is not canonical", set);
    }
  }

  #[test]
  fn set_algebra_membership(a in ranges(), b in ranges()) {
    let a = make_range_set(a);
    let b = make_range_set(b);
    let union = a.union(&b).unwrap();
    let intersection = a.intersection(&b).unwrap();
    let difference = a.difference(&b).unwrap();
    let complement = a.complement();
    for set in &[&union, &intersection, &difference, &complement] {
      prop_assert!(is_canonical(set), "{:?} is not canonical", set);
    }
    for v in PROBES {
      prop_assert_eq!(union.contains(&v), a.contains(&v) || b.contains(&v), "union, probe {}", v);
      prop_assert_eq!(intersection.contains(&v), a.contains(&v) && b.contains(&v), "intersection, probe {}", v);
      prop_assert_eq!(difference.contains(&v), a.contains(&v) && !b.contains(&v), "difference, probe {}", v);
      prop_assert_eq!(complement.contains(&v), !a.contains(&v), "complement, probe {}", v);
    }
  }

  #[test]
  fn complement_is_an_involution(a in ranges()) {
    let a = make_range_set(a);
    prop_assert_eq!(a.complement().complement(), a);
  }

  #[test]
  fn enclosure_implies_empty_difference(a in ranges(), b in ranges()) {
    let a = make_range_set(a);
    let b = make_range_set(b);
    if a.encloses(&b).unwrap() {
      prop_assert!(b.difference(&a).unwrap().is_empty());
    }
    // `a ∪ b` always encloses both operands.
    let union = a.union(&b).unwrap();
    prop_assert!(union.encloses(&a).unwrap() && union.encloses(&b).unwrap());
  }

  #[test]
  fn immutable_set_agrees_with_mutable_set(a in ranges(), b in ranges()) {
    let ta = make_range_set(a.clone());
    let tb = make_range_set(b.clone());
    let ia = ImmutableRangeSet::from_ranges(&Comparator::natural(), a).unwrap();
    let ib = ImmutableRangeSet::from_ranges(&Comparator::natural(), b).unwrap();
    prop_assert_eq!(ia.union(&ib).unwrap().to_mutable(), ta.union(&tb).unwrap());
    prop_assert_eq!(ia.intersection(&ib).unwrap().to_mutable(), ta.intersection(&tb).unwrap());
    prop_assert_eq!(ia.difference(&ib).unwrap().to_mutable(), ta.difference(&tb).unwrap());
    prop_assert_eq!(ia.complement().to_mutable(), ta.complement());
  }
}
