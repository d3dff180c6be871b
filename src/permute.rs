use rand::{seq::SliceRandom, Rng};

/// Shuffle consecutive groups of `group` items in place, the last group
/// may be shorter. Applied to sorted input this gives nearly-sorted data,
/// every item ends up less than `group` places from its sorted position.
///
/// Panics if `group` is zero.
pub fn permute_groups<T, R>(items: &mut [T], group: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    assert!(group > 0, "permute_groups(): group size is zero");
    for chunk in items.chunks_mut(group) {
        chunk.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use rand::{prelude::random, rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn test_permute_groups() {
        let seed: u64 = random();
        println!("test_permute_groups seed {}", seed);
        let mut rng = SmallRng::seed_from_u64(seed);

        let sorted: Vec<u32> = (0..1003).collect();
        let mut items = sorted.clone();
        permute_groups(&mut items, 5, &mut rng);

        for (i, (chunk, refs)) in items.chunks(5).zip(sorted.chunks(5)).enumerate() {
            let mut chunk = chunk.to_vec();
            chunk.sort_unstable();
            assert_eq!(chunk, refs.to_vec(), "group {}", i);
        }
    }

    #[test]
    fn test_permute_repeatable() {
        let mut a: Vec<u32> = (0..100).collect();
        let mut b = a.clone();
        permute_groups(&mut a, 7, &mut SmallRng::seed_from_u64(42));
        permute_groups(&mut b, 7, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);

        let mut c: Vec<u32> = (0..100).collect();
        permute_groups(&mut c, 1, &mut SmallRng::seed_from_u64(42));
        assert_eq!(c, (0..100).collect::<Vec<u32>>());
    }

    #[test]
    #[should_panic(expected = "permute_groups(): group size is zero")]
    fn test_permute_zero_group() {
        let mut items = vec![1, 2, 3];
        permute_groups(&mut items, 0, &mut SmallRng::seed_from_u64(1));
    }
}
