use crate::core::rng::Rng;

/// Fisher–Yates shuffle of a word's characters.
///
/// Every permutation is reachable; the result may equal the input.
pub fn scramble(word: &str, rng: &mut Rng) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    shuffle(&mut chars, rng);
    chars.into_iter().collect()
}

/// In-place Fisher–Yates: for i from len-1 down to 1, swap i with j in [0, i].
pub fn shuffle<T>(items: &mut [T], rng: &mut Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

/// Draw up to `count` distinct items uniformly without replacement.
/// Returns every item (in random order) when the pool is smaller than `count`.
pub fn sample_without_replacement<T: Clone>(pool: &[T], count: usize, rng: &mut Rng) -> Vec<T> {
    let mut indices: Vec<usize> = (0..pool.len()).collect();
    let take = count.min(indices.len());
    // Partial shuffle: only the first `take` slots need to be settled
    for i in 0..take {
        let j = i + rng.next_below(indices.len() - i);
        indices.swap(i, j);
    }
    indices[..take].iter().map(|&i| pool[i].clone()).collect()
}
