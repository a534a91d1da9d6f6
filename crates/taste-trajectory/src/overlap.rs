use std::collections::BTreeSet;

/// Case-insensitive Jaccard index |A ∩ B| / |A ∪ B| over two tag lists.
///
/// Two empty lists are identical (1.0).
pub fn jaccard_overlap(a: &[String], b: &[String]) -> f64 {
    let a: BTreeSet<String> = a.iter().map(|t| t.to_lowercase()).collect();
    let b: BTreeSet<String> = b.iter().map(|t| t.to_lowercase()).collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 1.0;
    }
    let intersection = a.intersection(&b).count();
    intersection as f64 / union as f64
}
