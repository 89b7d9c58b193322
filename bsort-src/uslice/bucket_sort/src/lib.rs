//! Stable bucket sort of key-value pairs.
//!
//! The keys are counted into a histogram, the histogram is turned into block
//! offsets in place, and then every pair is dropped into the next free slot
//! of its block. Visiting the input front to back is what keeps equal keys in
//! their original order.

use bucket_key::{checked_index, InvalidKeyError, Key};
use cumsum::cumsum_in_place;
use key_count::count_keys;

pub trait BucketSort {
    type Item;
    fn bucket_sort(&self) -> Result<Vec<Self::Item>, InvalidKeyError>;
}

/// The stable sorting permutation of a key sequence.
pub trait BucketOrder {
    /// Returns `order` such that `order[i]` is the index of the element that
    /// comes `i`-th after a stable sort.
    fn bucket_order(&self) -> Result<Vec<usize>, InvalidKeyError>;
}

impl<K: Key, V: Clone> BucketSort for [(K, V)] {
    type Item = (K, V);

    fn bucket_sort(&self) -> Result<Vec<(K, V)>, InvalidKeyError> {
        let mut bucket = count_keys(self.iter().map(|&(k, _)| k))?;
        cumsum_in_place(&mut bucket);

        let mut res: Vec<Option<(K, V)>> = (0..self.len()).map(|_| None).collect();
        for (i, (k, v)) in self.iter().enumerate() {
            let next = &mut bucket[checked_index(i, *k)?];
            res[*next] = Some((*k, v.clone()));
            *next += 1;
        }
        Ok(res.into_iter().flatten().collect())
    }
}

impl<K: Key> BucketOrder for [K] {
    fn bucket_order(&self) -> Result<Vec<usize>, InvalidKeyError> {
        let mut bucket = count_keys(self.iter().copied())?;
        cumsum_in_place(&mut bucket);

        let mut order = vec![0; self.len()];
        for (i, &k) in self.iter().enumerate() {
            let next = &mut bucket[checked_index(i, k)?];
            order[*next] = i;
            *next += 1;
        }
        Ok(order)
    }
}

#[test]
fn sanity_check() {
    let empty: [(u32, char); 0] = [];
    assert_eq!(empty.bucket_sort(), Ok(vec![]));

    let a = [(1_u32, "a"), (2, "b"), (1, "c"), (2, "d"), (4, "e")];
    assert_eq!(
        a.bucket_sort(),
        Ok(vec![(1, "a"), (1, "c"), (2, "b"), (2, "d"), (4, "e")])
    );

    assert_eq!([1_u32, 2, 1, 2, 4].bucket_order(), Ok(vec![0, 2, 1, 3, 4]));
    assert_eq!(Vec::<u32>::new().bucket_order(), Ok(vec![]));
}

#[test]
fn payload_is_not_inspected() {
    #[derive(Clone, Debug, PartialEq)]
    struct Opaque(Vec<u8>);

    let a = vec![(2_u8, Opaque(vec![2])), (0, Opaque(vec![])), (2, Opaque(vec![1]))];
    let sorted = a.bucket_sort().unwrap();
    assert_eq!(
        sorted,
        [(0, Opaque(vec![])), (2, Opaque(vec![2])), (2, Opaque(vec![1]))]
    );
}

#[test]
fn negative_key() {
    let a = [(0_i32, 'x'), (-3, 'y')];
    let err = a.bucket_sort().unwrap_err();
    assert_eq!((err.position, err.key), (1, -3));

    assert_eq!([5_i8, 0, -1].bucket_order().unwrap_err().position, 2);
}

#[test]
fn stable_against_std() {
    use permutation::Reorder;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::seed_from_u64(0x6273_6F72_74);
    for _ in 0..100 {
        let n = rng.gen_range(0..=60);
        let keys: Vec<u32> = (0..n).map(|_| rng.gen_range(0..10)).collect();
        let a: Vec<(u32, usize)> = keys.iter().copied().zip(0..).collect();

        let mut expected = a.clone();
        expected.sort_by_key(|&(k, _)| k);
        assert_eq!(a.bucket_sort().unwrap(), expected);

        let order = keys.bucket_order().unwrap();
        let expected_order: Vec<_> = expected.iter().map(|&(_, i)| i).collect();
        assert_eq!(order, expected_order);

        let mut reordered = keys.clone();
        reordered.reorder(&order);
        assert!(reordered.windows(2).all(|w| w[0] <= w[1]));
    }
}
