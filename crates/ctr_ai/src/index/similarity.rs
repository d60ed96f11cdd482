pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity, or `None` when either side has zero norm.
pub fn cosine(a: &[f32], b: &[f32]) -> Option<f32> {
    let a_norm = l2_norm(a);
    let b_norm = l2_norm(b);
    if a_norm == 0.0 || b_norm == 0.0 {
        return None;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    Some(dot / (a_norm * b_norm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_of_parallel_vectors_is_one() {
        let s = cosine(&[1.0, 2.0], &[2.0, 4.0]).unwrap();
        assert!((s - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_with_zero_vector_is_undefined() {
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 0.0]), None);
    }
}
