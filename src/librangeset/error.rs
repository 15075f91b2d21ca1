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

//! Errors reported by range and range set operations.

use thiserror::Error;

/// Every condition reported here is local to the call that produced it: the receiver is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
  /// The two operands were built with different comparators.
  #[error("operands were built with different comparators")]
  ComparatorMismatch,
  /// The lower bound is greater than the upper bound under the comparator.
  #[error("lower bound is greater than upper bound")]
  InvalidBounds,
  /// Both bounds are open on the same value, e.g. `(5, 5)`.
  #[error("open bounds on both sides of a single value")]
  DegenerateBounds,
}
