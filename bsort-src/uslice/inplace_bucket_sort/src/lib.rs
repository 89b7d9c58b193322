//! Bucket sort of key-value pairs within their own storage.
//!
//! Both variants need only the $O(m)$ offset tables, $m$ being the largest
//! key, and move each pair with swaps. Neither is stable: pairs with equal
//! keys may come out in any order.

use bucket_key::{checked_index, InvalidKeyError, Key};
use cumsum::cumsum_in_place;
use key_count::count_keys;

pub trait InplaceBucketSort {
    /// Sorts by following displacement cycles.
    ///
    /// Keeps the start of every block next to a cursor to its first unfilled
    /// slot. The pair at position `i` stays once `i` lies in the filled part
    /// of its own block; until then it is swapped into its block's next free
    /// slot and whatever comes back is examined in turn.
    fn cyclic_bucket_sort(&mut self) -> Result<(), InvalidKeyError>;

    /// Sorts with a single table of cursors and forward swaps only.
    ///
    /// A pair at `i` whose block cursor is still ahead of `i` is left where
    /// it is for now. Otherwise the pair is swapped down to the cursor, which
    /// then advances, and the pair that came back to `i` is examined. Every
    /// pair left behind is eventually fetched by the cursor of its block.
    fn forward_bucket_sort(&mut self) -> Result<(), InvalidKeyError>;
}

impl<K: Key, V> InplaceBucketSort for [(K, V)] {
    fn cyclic_bucket_sort(&mut self) -> Result<(), InvalidKeyError> {
        let mut start = count_keys(self.iter().map(|&(k, _)| k))?;
        cumsum_in_place(&mut start);
        let mut next = start.clone();

        for i in 0..self.len() {
            loop {
                let k = checked_index(i, self[i].0)?;
                if (start[k]..next[k]).contains(&i) {
                    break;
                }
                self.swap(i, next[k]);
                next[k] += 1;
            }
        }
        Ok(())
    }

    fn forward_bucket_sort(&mut self) -> Result<(), InvalidKeyError> {
        let mut next = count_keys(self.iter().map(|&(k, _)| k))?;
        cumsum_in_place(&mut next);

        for i in 0..self.len() {
            loop {
                let k = checked_index(i, self[i].0)?;
                if next[k] > i {
                    break;
                }
                self.swap(i, next[k]);
                next[k] += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    type Sort = fn(&mut [(u32, usize)]) -> Result<(), InvalidKeyError>;

    const SORTS: [(&str, Sort); 2] = [
        ("cyclic", <[(u32, usize)] as InplaceBucketSort>::cyclic_bucket_sort),
        ("forward", <[(u32, usize)] as InplaceBucketSort>::forward_bucket_sort),
    ];

    fn keys<V>(a: &[(u32, V)]) -> Vec<u32> {
        a.iter().map(|&(k, _)| k).collect()
    }

    fn check(name: &str, sort: Sort, input: &[u32]) {
        let mut a: Vec<(u32, usize)> = input.iter().copied().zip(0..).collect();
        sort(&mut a).unwrap();

        let mut expected = input.to_vec();
        expected.sort_unstable();
        assert_eq!(keys(&a), expected, "{name}: {input:?}");

        // every payload is still attached to its own key
        for &(k, i) in &a {
            assert_eq!(input[i], k, "{name}: {input:?}");
        }
    }

    #[test]
    fn sanity_check() {
        for (name, sort) in SORTS {
            check(name, sort, &[]);
            check(name, sort, &[0]);
            check(name, sort, &[1, 2, 1, 2, 4]);
            check(name, sort, &[2, 2, 0, 1]);
            check(name, sort, &[1, 0, 0]);
            check(name, sort, &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
            check(name, sort, &[7, 7, 7, 7]);
            check(name, sort, &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        }
    }

    #[test]
    fn string_payload() {
        let mut a = [(1_u8, "a"), (2, "b"), (1, "c"), (2, "d"), (4, "e")];
        a.cyclic_bucket_sort().unwrap();
        assert_eq!(keys_u8(&a), [1, 1, 2, 2, 4]);

        let mut a = [(1_u8, "a"), (2, "b"), (1, "c"), (2, "d"), (4, "e")];
        a.forward_bucket_sort().unwrap();
        assert_eq!(keys_u8(&a), [1, 1, 2, 2, 4]);

        fn keys_u8(a: &[(u8, &str)]) -> Vec<u8> {
            a.iter().map(|&(k, _)| k).collect()
        }
    }

    #[test]
    fn sorted_input_is_unchanged() {
        let sorted = [0_u32, 0, 1, 3, 3, 3, 4, 8];
        for (name, sort) in SORTS {
            let mut a: Vec<(u32, usize)> = sorted.iter().copied().zip(0..).collect();
            let before = a.clone();
            sort(&mut a).unwrap();
            assert_eq!(keys(&a), keys(&before), "{name}");
        }
    }

    #[test]
    fn negative_key_leaves_input_untouched() {
        let input = [(3_i64, 'a'), (1, 'b'), (-2, 'c'), (0, 'd')];

        let mut a = input;
        let err = a.cyclic_bucket_sort().unwrap_err();
        assert_eq!((err.position, err.key), (2, -2));
        assert_eq!(a, input);

        let mut a = input;
        assert_eq!(a.forward_bucket_sort().unwrap_err().position, 2);
        assert_eq!(a, input);
    }

    #[test]
    fn random_keys() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x696E_706C_6163_65);
        for (name, sort) in SORTS {
            for _ in 0..200 {
                let n = rng.gen_range(0..=80);
                let bound = rng.gen_range(1..=20);
                let input: Vec<u32> =
                    (0..n).map(|_| rng.gen_range(0..bound)).collect();
                check(name, sort, &input);
            }
        }
    }
}
