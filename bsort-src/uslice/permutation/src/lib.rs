pub trait Permutation {
    fn inv(&self) -> Vec<usize>;
    fn is_permutation(&self) -> bool;
}

impl Permutation for [usize] {
    fn inv(&self) -> Vec<usize> {
        let n = self.len();
        let mut res = vec![0; n];
        for i in 0..n {
            res[self[i]] = i;
        }
        res
    }

    fn is_permutation(&self) -> bool {
        let n = self.len();
        let mut seen = vec![false; n];
        for &i in self {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}

pub trait Reorder {
    /// Rearranges the elements so that `self[i]` becomes the element that
    /// was at `order[i]`, one permutation cycle at a time.
    ///
    /// # Panics
    /// Panics if `order` is not a permutation of `0..self.len()`.
    fn reorder(&mut self, order: &[usize]);
}

impl<T> Reorder for [T] {
    fn reorder(&mut self, order: &[usize]) {
        let n = self.len();
        assert_eq!(order.len(), n);
        assert!(order.is_permutation());

        let mut done = vec![false; n];
        for s in 0..n {
            if done[s] {
                continue;
            }
            let mut j = s;
            loop {
                done[j] = true;
                let k = order[j];
                if k == s {
                    break;
                }
                self.swap(j, k);
                j = k;
            }
        }
    }
}

#[test]
fn sanity_check() {
    let a = [1, 5, 2, 3, 6, 0, 4];
    assert_eq!(a.inv(), [5, 0, 2, 3, 6, 1, 4]);
    assert!(a.is_permutation());
    assert!(![0, 0].is_permutation());
    assert!(![0, 2].is_permutation());

    let mut b = ['b', 'f', 'c', 'd', 'g', 'a', 'e'];
    b.reorder(&a);
    assert_eq!(b, ['f', 'a', 'c', 'd', 'e', 'b', 'g']);

    let mut c = b;
    c.reorder(&a.inv());
    assert_eq!(c, ['b', 'f', 'c', 'd', 'g', 'a', 'e']);

    let mut empty: [u8; 0] = [];
    empty.reorder(&[]);
}

#[test]
#[should_panic]
fn reorder_rejects_non_permutation() {
    let mut a = [1, 2, 3];
    a.reorder(&[0, 0, 1]);
}
