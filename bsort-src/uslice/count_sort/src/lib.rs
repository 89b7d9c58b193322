use std::iter;

use bucket_key::{InvalidKeyError, Key};
use key_count::count_keys;

/// Sorting bare keys by counting them.
///
/// Both methods run in $O(n + m)$ time where $m$ is the largest key.
pub trait CountSort {
    type Item;
    fn count_sort(&self) -> Result<Vec<Self::Item>, InvalidKeyError>;
    fn count_sort_in_place(&mut self) -> Result<(), InvalidKeyError>;
}

impl<K: Key> CountSort for [K] {
    type Item = K;

    fn count_sort(&self) -> Result<Vec<K>, InvalidKeyError> {
        let count = count_keys(self.iter().copied())?;
        let mut res = Vec::with_capacity(self.len());
        for (j, &c) in count.iter().enumerate() {
            res.extend(iter::repeat(K::from_index(j)).take(c));
        }
        Ok(res)
    }

    fn count_sort_in_place(&mut self) -> Result<(), InvalidKeyError> {
        let count = count_keys(self.iter().copied())?;
        let mut i = 0;
        for (j, &c) in count.iter().enumerate() {
            for _ in 0..c {
                self[i] = K::from_index(j);
                i += 1;
            }
        }
        Ok(())
    }
}

#[test]
fn sanity_check() {
    let empty: [u32; 0] = [];
    assert_eq!(empty.count_sort(), Ok(vec![]));

    assert_eq!([1_u32, 2, 1, 2, 4].count_sort(), Ok(vec![1, 1, 2, 2, 4]));

    let mut a = vec![3_u8, 1, 4, 1, 5, 9, 2];
    a.count_sort_in_place().unwrap();
    assert_eq!(a, [1, 1, 2, 3, 4, 5, 9]);
}

#[test]
fn negative_key() {
    let mut a = vec![3_i32, 1, -4, 1];
    let err = a.count_sort_in_place().unwrap_err();
    assert_eq!((err.position, err.key), (2, -4));
    assert_eq!(a, [3, 1, -4, 1]);

    assert!([-1_isize].count_sort().is_err());
}

#[test]
fn random_keys() {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::seed_from_u64(0x636F_756E_74);
    for _ in 0..100 {
        let n = rng.gen_range(0..=50);
        let a: Vec<u16> = (0..n).map(|_| rng.gen_range(0..100)).collect();
        let mut expected = a.clone();
        expected.sort_unstable();

        assert_eq!(a.count_sort().unwrap(), expected);
        assert_eq!(expected.count_sort().unwrap(), expected);
    }
}
