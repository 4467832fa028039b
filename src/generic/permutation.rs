/*!
Permutations of a slice.

Permutations are generated in lexicographic order of position, i.e. the first permutation is the slice itself and each permutation beginning with the element at position *i* precedes every permutation beginning with the element at position *i* + 1.

```rust
# use kripke_guess::generic::permutation::permutations;
let perms = permutations(&['x', 'y', 'z']);
assert_eq!(perms.len(), 6);
assert_eq!(perms[0], vec!['x', 'y', 'z']);
assert_eq!(perms[1], vec!['x', 'z', 'y']);
assert_eq!(perms[5], vec!['z', 'y', 'x']);
```
*/

/// Every permutation of `items`.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.is_empty() {
        return vec![Vec::default()];
    }

    let mut permutations = Vec::default();
    for (position, item) in items.iter().enumerate() {
        let mut remaining = items.to_vec();
        remaining.remove(position);

        for mut tail in self::permutations(&remaining) {
            tail.insert(0, item.clone());
            permutations.push(tail);
        }
    }
    permutations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counts() {
        assert_eq!(permutations::<u8>(&[]).len(), 1);
        assert_eq!(permutations(&[1]).len(), 1);
        assert_eq!(permutations(&[1, 2, 3, 4]).len(), 24);
    }

    #[test]
    fn distinct() {
        let perms = permutations(&[1, 2, 3, 4, 5]);
        let distinct = perms.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), 120);
        for perm in perms {
            let mut sorted = perm.clone();
            sorted.sort();
            assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        }
    }
}
