use std::str::FromStr;

use derive_more::Display;

use crate::contiguous::error::UnsupportedPolicy;

/// Selects the growth and shrink behavior of a [`Vector`](super::Vector).
///
/// A policy answers two questions: when an insertion finds the buffer full, how much capacity
/// should the replacement buffer have, and when a removal leaves the buffer under-utilized,
/// should a smaller buffer be adopted. The set is closed; parsing an unknown name fails with
/// [`UnsupportedPolicy`] rather than falling back to the default.
///
/// | Policy | First allocation | Growth | Shrink floor |
/// |-|-|-|-|
/// | `Balanced` | 8 | ~1.5x | 8 |
/// | `Spacious` | 32 | 2x | 32 |
/// | `Trimmed` | 1 | +1 | exact length |
///
/// Shrink thresholds sit deliberately below the growth boundaries, so a workload alternating
/// insertions and removals around one boundary never reallocates back and forth. The exact
/// capacity functions are [`grow_cap`](ResizePolicy::grow_cap) and
/// [`shrink_cap`](ResizePolicy::shrink_cap); their constants are load-bearing for callers that
/// depend on exact capacity sequences and won't be adjusted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ResizePolicy {
    /// Grows by roughly 1.5x and shrinks to 3/4 of capacity once the length falls far enough
    /// below that target. The default: amortized O(1) appends with moderate spare memory.
    #[default]
    #[display("balanced")]
    Balanced,
    /// Grows by 2x and shrinks to 1/2 of capacity. Fewer reallocations than `Balanced` at the
    /// cost of more spare memory.
    #[display("spacious")]
    Spacious,
    /// Never over-allocates: grows by exactly one element and shrinks to the exact length.
    /// Appends are O(n); useful when memory is at a premium and mutations are rare.
    #[display("trimmed")]
    Trimmed
}

impl ResizePolicy {
    /// Returns the capacity a full buffer of `len` elements should grow to in order to admit
    /// one more element.
    ///
    /// Growth is only consulted when the buffer is full, so `len` is also the current
    /// capacity. The result is always greater than `len`.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::ResizePolicy;
    /// assert_eq!(ResizePolicy::Balanced.grow_cap(0), 8);
    /// assert_eq!(ResizePolicy::Balanced.grow_cap(8), 12);
    /// assert_eq!(ResizePolicy::Spacious.grow_cap(32), 64);
    /// assert_eq!(ResizePolicy::Trimmed.grow_cap(5), 6);
    /// ```
    pub const fn grow_cap(self, len: usize) -> usize {
        match self {
            ResizePolicy::Balanced => {
                if len == 0 {
                    8
                } else {
                    // 1.5x growth in integer arithmetic.
                    (len << 1) - (len >> 1)
                }
            },
            ResizePolicy::Spacious => {
                if len == 0 {
                    32
                } else {
                    len << 1
                }
            },
            ResizePolicy::Trimmed => len + 1,
        }
    }

    /// Returns the capacity a buffer of `cap` cells holding `len` elements should shrink to,
    /// or [`None`] when the current buffer should be kept.
    ///
    /// A returned capacity is always at least `len` and strictly less than `cap`. `Balanced`
    /// and `Spacious` only shrink once capacity reaches 13 and 40 respectively, and never
    /// below their floors of 8 and 32 (except to 0 when the collection is empty), leaving a
    /// deliberate gap below the growth thresholds to avoid reallocation thrashing.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::ResizePolicy;
    /// assert_eq!(ResizePolicy::Balanced.shrink_cap(5, 16), Some(12));
    /// assert_eq!(ResizePolicy::Balanced.shrink_cap(10, 16), None);
    /// assert_eq!(ResizePolicy::Balanced.shrink_cap(5, 12), None);
    /// assert_eq!(ResizePolicy::Trimmed.shrink_cap(3, 10), Some(3));
    /// ```
    pub const fn shrink_cap(self, len: usize, cap: usize) -> Option<usize> {
        match self {
            ResizePolicy::Balanced => {
                if len == 0 {
                    if cap == 0 { None } else { Some(0) }
                } else if cap < 13 {
                    None
                } else {
                    // Target 3/4 of capacity, with a slack band below it so that the shrunk
                    // buffer still has room to take insertions without growing straight back.
                    let target = (cap >> 1) + (cap >> 2);
                    let slack = if cap >> 3 > 3 { cap >> 3 } else { 3 };

                    if len <= target - slack {
                        Some(if target > 8 { target } else { 8 })
                    } else {
                        None
                    }
                }
            },
            ResizePolicy::Spacious => {
                if len == 0 {
                    if cap == 0 { None } else { Some(0) }
                } else if cap < 40 {
                    None
                } else {
                    let target = cap >> 1;
                    let slack = if cap >> 3 > 15 { cap >> 3 } else { 15 };

                    if len <= target - slack {
                        Some(if target > 32 { target } else { 32 })
                    } else {
                        None
                    }
                }
            },
            ResizePolicy::Trimmed => {
                if len == cap {
                    None
                } else {
                    Some(len)
                }
            },
        }
    }
}

impl FromStr for ResizePolicy {
    type Err = UnsupportedPolicy;

    /// Parses a policy from its lowercase name, the same form [`Display`](std::fmt::Display)
    /// produces.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::ResizePolicy;
    /// assert_eq!("spacious".parse(), Ok(ResizePolicy::Spacious));
    /// assert!("eager".parse::<ResizePolicy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balanced" => Ok(ResizePolicy::Balanced),
            "spacious" => Ok(ResizePolicy::Spacious),
            "trimmed" => Ok(ResizePolicy::Trimmed),
            _ => Err(UnsupportedPolicy { name: s.to_string() }),
        }
    }
}
