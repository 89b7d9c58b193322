use bucket_key::{checked_index, max_key, InvalidKeyError, Key};

/// Builds the histogram of `keys`: `counts[k]` is the number of times `k`
/// occurs, for every `k` in `0..=max`. Empty input gives an empty histogram.
///
/// The source is scanned twice, once for the maximum and once for the
/// counts, so its iterator has to be `Clone`. A projection such as
/// `entries.iter().map(|&(k, _)| k)` works without collecting the keys.
///
/// ```
/// use key_count::count_keys;
///
/// assert_eq!(count_keys([1_u32, 2, 2, 1, 4]), Ok(vec![0, 2, 2, 0, 1]));
/// ```
pub fn count_keys<I>(keys: I) -> Result<Vec<usize>, InvalidKeyError>
where
    I: IntoIterator,
    I::Item: Key,
    I::IntoIter: Clone,
{
    let keys = keys.into_iter();
    let len = max_key(keys.clone())?.map_or(0, |m| m + 1);
    let mut counts = vec![0; len];
    for (i, k) in keys.enumerate() {
        counts[checked_index(i, k)?] += 1;
    }
    Ok(counts)
}

#[test]
fn sanity_check() {
    assert_eq!(count_keys(Vec::<usize>::new()), Ok(vec![]));
    assert_eq!(count_keys([0_usize]), Ok(vec![1]));
    assert_eq!(count_keys([3_i32, 3, 0]), Ok(vec![1, 0, 0, 2]));

    let pairs = [(1, 'a'), (2, 'b'), (1, 'c')];
    assert_eq!(count_keys(pairs.iter().map(|&(k, _)| k as u8)), Ok(vec![0, 2, 1]));

    let err = count_keys([0_i16, 1, -2]).unwrap_err();
    assert_eq!(err.position, 2);
    assert_eq!(err.key, -2);
}

#[test]
fn random_keys() {
    use std::collections::BTreeMap;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::seed_from_u64(0x6B65_7973);
    for _ in 0..100 {
        let n = rng.gen_range(1..=50);
        let keys: Vec<usize> = (0..n).map(|_| rng.gen_range(0..100)).collect();
        let counts = count_keys(keys.iter().copied()).unwrap();

        let mut naive = BTreeMap::new();
        for &k in &keys {
            *naive.entry(k).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), naive.keys().last().unwrap() + 1);
        assert_eq!(counts.iter().sum::<usize>(), n);
        for (k, &c) in counts.iter().enumerate() {
            assert_eq!(c, naive.get(&k).copied().unwrap_or(0));
        }
    }
}
