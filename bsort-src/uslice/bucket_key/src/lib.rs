//! Keys for non-comparison sorting.
//!
//! A key is a non-negative integer that doubles as a bucket index. Keys of
//! signed types are checked when they are converted; a negative key is
//! reported as [`InvalidKeyError`] rather than left to fault on indexing.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("invalid key {key} at position {position}: keys must be non-negative and fit in usize")]
pub struct InvalidKeyError {
    pub position: usize,
    pub key: i128,
}

pub trait Key: Copy {
    /// The bucket this key falls into, or `None` if the key is negative or
    /// too large to index with.
    fn to_index(self) -> Option<usize>;
    /// Inverse of [`Key::to_index`] for indices that came from a key.
    fn from_index(index: usize) -> Self;
    fn widen(self) -> i128;
}

macro_rules! impl_key {
    ( $($ty:ty)* ) => { $(
        impl Key for $ty {
            fn to_index(self) -> Option<usize> { usize::try_from(self).ok() }
            fn from_index(index: usize) -> $ty { index as $ty }
            fn widen(self) -> i128 { self as i128 }
        }
    )* }
}

impl_key! { u8 u16 u32 u64 usize i8 i16 i32 i64 isize }

pub fn checked_index<K: Key>(position: usize, key: K) -> Result<usize, InvalidKeyError> {
    key.to_index()
        .ok_or(InvalidKeyError { position, key: key.widen() })
}

/// Returns the largest key, or `None` for an empty sequence.
///
/// Every key is validated on the way, so a successful call also proves that
/// the whole sequence is indexable.
///
/// ```
/// use bucket_key::max_key;
///
/// assert_eq!(max_key([1_u32, 2, 2, 1, 4]), Ok(Some(4)));
/// assert_eq!(max_key(Vec::<u32>::new()), Ok(None));
/// assert!(max_key([3_i32, -1]).is_err());
/// ```
pub fn max_key<I>(keys: I) -> Result<Option<usize>, InvalidKeyError>
where
    I: IntoIterator,
    I::Item: Key,
{
    let mut max = None;
    for (i, k) in keys.into_iter().enumerate() {
        max = max.max(Some(checked_index(i, k)?));
    }
    Ok(max)
}

/// Number of buckets needed to index every key: `max + 1`, or `0` if there
/// are no keys.
pub fn bucket_count<I>(keys: I) -> Result<usize, InvalidKeyError>
where
    I: IntoIterator,
    I::Item: Key,
{
    Ok(max_key(keys)?.map_or(0, |m| m + 1))
}

#[test]
fn sanity_check() {
    assert_eq!(max_key([3_usize, 1, 4, 1, 5, 9, 2]), Ok(Some(9)));
    assert_eq!(max_key([0_u8]), Ok(Some(0)));
    assert_eq!(max_key(Vec::<usize>::new()), Ok(None));

    assert_eq!(bucket_count([3_u16, 1, 4]), Ok(5));
    assert_eq!(bucket_count(Vec::<u16>::new()), Ok(0));
}

#[test]
fn negative_key() {
    let err = max_key([1_i64, 2, -7, 3]).unwrap_err();
    assert_eq!(err, InvalidKeyError { position: 2, key: -7 });
    assert_eq!(
        err.to_string(),
        "invalid key -7 at position 2: keys must be non-negative and fit in usize"
    );

    assert_eq!(bucket_count([-1_i8]).unwrap_err().position, 0);
}

#[test]
fn conversion() {
    assert_eq!(5_i32.to_index(), Some(5));
    assert_eq!((-5_i32).to_index(), None);
    assert_eq!(i8::from_index(127), 127);
    assert_eq!(u64::MAX.widen(), u64::MAX as i128);
}
