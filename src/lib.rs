//! Counting sort and bucket sort for non-negative integer keys.
//!
//! - [`max_key`], [`count_keys`] and [`cumsum`] are the building blocks: the
//!   largest key, the histogram of keys, and the block offsets derived from
//!   it.
//! - [`CountSort`] sorts bare keys.
//! - [`BucketSort`] stably sorts key-value pairs into a new vector, and
//!   [`BucketOrder`] returns the same order as a permutation.
//! - [`InplaceBucketSort`] sorts pairs within their storage, without
//!   stability.
//!
//! Keys may be of any primitive integer type. Negative keys are rejected
//! with [`InvalidKeyError`] before anything is written.
//!
//! ```
//! use bsort::{BucketSort, InplaceBucketSort};
//!
//! let a = [(1_u32, "a"), (2, "b"), (1, "c"), (2, "d"), (4, "e")];
//! assert_eq!(
//!     a.bucket_sort().unwrap(),
//!     [(1, "a"), (1, "c"), (2, "b"), (2, "d"), (4, "e")]
//! );
//!
//! let mut b = a;
//! b.forward_bucket_sort().unwrap();
//! assert!(b.windows(2).all(|w| w[0].0 <= w[1].0));
//! ```

use inner::doc_inline_reexport;

doc_inline_reexport! {
    uslice,
}
