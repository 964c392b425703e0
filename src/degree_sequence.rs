//! Degree sequences independent of any particular graph.

/// True if the sequence is non-increasing.
pub fn is_degree_sequence(sequence: &[usize]) -> bool {
    sequence.windows(2).all(|pair| pair[0] >= pair[1])
}

/// Erdős–Gallai test: a non-increasing sequence with even sum is graphic iff for every
/// `k` the `k` largest degrees sum to at most `k(k-1) + Σ_{i>=k} min(d_i, k)`.
pub fn erdoes_gallai(sequence: &[usize]) -> bool {
    if sequence.iter().sum::<usize>() % 2 == 1 {
        return false;
    }
    if !is_degree_sequence(sequence) {
        return false;
    }
    let mut left = 0;
    for k in 1..=sequence.len() {
        left += sequence[k - 1];
        let right = k * (k - 1) + sequence[k..].iter().map(|d| (*d).min(k)).sum::<usize>();
        if left > right {
            return false;
        }
    }
    true
}
