//! Vector math shared by the lexical and semantic indexes.

/// Best-scoring row of an index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch {
    /// Knowledge base position
    pub index: usize,
    /// Cosine similarity in [0, 1]
    pub score: f64,
}

pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity clamped to [0, 1]; 0 when either vector has zero norm
/// or any component is not finite.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let denom = norm(a) * norm(b);
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let sim = dot / denom;
    if sim.is_finite() {
        sim.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// True when every component is a finite number
pub fn is_finite(v: &[f64]) -> bool {
    v.iter().all(|x| x.is_finite())
}

/// Arg-max over rows; ties go to the lowest index. None only for an empty matrix.
pub fn best_match<'a, I>(query: &[f64], rows: I) -> Option<ScoredMatch>
where
    I: IntoIterator<Item = &'a Vec<f64>>,
{
    let mut best: Option<ScoredMatch> = None;
    for (index, row) in rows.into_iter().enumerate() {
        let score = cosine(query, row);
        match best {
            Some(b) if score <= b.score => {}
            _ => best = Some(ScoredMatch { index, score }),
        }
    }
    best
}
