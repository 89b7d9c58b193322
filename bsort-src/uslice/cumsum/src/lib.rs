//! Exclusive prefix sums: turns a histogram into the offset at which each
//! key's block starts.

/// Returns the offsets for `counts` as a new vector.
///
/// ```
/// use cumsum::cumsum;
///
/// assert_eq!(cumsum(&[1, 2, 3]), [0, 1, 3]);
/// assert_eq!(cumsum(&[0, 2, 2, 0, 1]), [0, 0, 2, 4, 4]);
/// ```
pub fn cumsum(counts: &[usize]) -> Vec<usize> {
    counts
        .iter()
        .scan(0, |acc, &c| {
            let start = *acc;
            *acc += c;
            Some(start)
        })
        .collect()
}

/// Overwrites `counts` with its offsets. Returns the total, i.e. the end of
/// the last block.
pub fn cumsum_in_place(counts: &mut [usize]) -> usize {
    let mut sum = 0;
    for c in counts.iter_mut() {
        let tmp = *c;
        *c = sum;
        sum += tmp;
    }
    sum
}

#[test]
fn sanity_check() {
    assert!(cumsum(&[]).is_empty());
    assert_eq!(cumsum(&[5]), [0]);
    assert_eq!(cumsum(&[1, 2, 3]), [0, 1, 3]);

    let mut a = vec![0, 2, 2, 0, 1];
    assert_eq!(cumsum_in_place(&mut a), 5);
    assert_eq!(a, [0, 0, 2, 4, 4]);

    let mut empty: Vec<usize> = vec![];
    assert_eq!(cumsum_in_place(&mut empty), 0);
}

#[test]
fn blocks_partition_output() {
    use key_count::count_keys;

    let keys = [3_usize, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    let counts = count_keys(keys).unwrap();
    let offsets = cumsum(&counts);

    // [offsets[k], offsets[k] + counts[k]) are consecutive and cover 0..n.
    let mut end = 0;
    for (k, (&start, &count)) in offsets.iter().zip(&counts).enumerate() {
        assert_eq!(start, end, "block {k}");
        end = start + count;
    }
    assert_eq!(end, keys.len());

    for &k in &keys {
        assert!(offsets[k] < keys.len());
        assert!(counts[k] > 0);
    }
}
