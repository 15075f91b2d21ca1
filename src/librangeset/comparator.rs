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

//! Total orders injected into ranges and range sets.
//!
//! Ranges never rely on `Ord` directly: each value carries the comparator it was built with. Two comparators are considered the same when they have the same identity, so that combining ranges ordered differently is reported instead of silently computed.
//!
//! ```rust
//! use range_set::Comparator;
//! use std::cmp::Ordering;
//!
//! let by_len = Comparator::by_key(|s: &String| s.len());
//! assert_eq!(by_len.compare(&"ab".to_string(), &"c".to_string()), Ordering::Greater);
//! assert!(by_len.same_as(&by_len.clone()));
//! assert!(!by_len.same_as(&Comparator::by_key(|s: &String| s.len())));
//! assert!(Comparator::<i32>::natural().same_as(&Comparator::natural()));
//! ```

use crate::error::RangeError;
use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

static NEXT_CUSTOM: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Identity {
  Natural,
  Reverse,
  Custom(usize)
}

pub struct Comparator<T> {
  identity: Identity,
  compare: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>
}

impl<T> Comparator<T>
{
  /// Wraps a custom total order. Every call yields a new identity, clones share it.
  pub fn new<F>(compare: F) -> Comparator<T> where
   F: Fn(&T, &T) -> Ordering + Send + Sync + 'static
  {
    let id = NEXT_CUSTOM.fetch_add(1, AtomicOrdering::Relaxed);
    Comparator {
      identity: Identity::Custom(id),
      compare: Arc::new(compare)
    }
  }

  pub fn by_key<K, F>(key: F) -> Comparator<T> where
   K: Ord,
   F: Fn(&T) -> K + Send + Sync + 'static
  {
    Comparator::new(move |a, b| key(a).cmp(&key(b)))
  }

  pub fn compare(&self, a: &T, b: &T) -> Ordering {
    (self.compare)(a, b)
  }

  pub fn same_as(&self, other: &Comparator<T>) -> bool {
    self.identity == other.identity
  }

  pub(crate) fn check(&self, other: &Comparator<T>) -> Result<(), RangeError> {
    if self.same_as(other) {
      Ok(())
    }
    else {
      tracing::debug!(expected = ?self, found = ?other, "comparator mismatch");
      Err(RangeError::ComparatorMismatch)
    }
  }
}

impl<T: Ord + 'static> Comparator<T>
{
  /// The order given by `Ord`. All natural comparators share one identity.
  pub fn natural() -> Comparator<T> {
    Comparator {
      identity: Identity::Natural,
      compare: Arc::new(<T as Ord>::cmp)
    }
  }

  pub fn reverse() -> Comparator<T> {
    Comparator {
      identity: Identity::Reverse,
      compare: Arc::new(|a: &T, b: &T| b.cmp(a))
    }
  }
}

impl<T> Clone for Comparator<T>
{
  fn clone(&self) -> Comparator<T> {
    Comparator {
      identity: self.identity,
      compare: Arc::clone(&self.compare)
    }
  }
}

impl<T> fmt::Debug for Comparator<T>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.identity {
      Identity::Natural => write!(f, "Comparator(natural)"),
      Identity::Reverse => write!(f, "Comparator(reverse)"),
      Identity::Custom(id) => write!(f, "Comparator(#{})", id)
    }
  }
}
