//! Group a signal window by domain and extract each domain's dominant pattern.

use std::collections::{BTreeMap, HashSet};

use taste_core::models::DomainCluster;
use taste_core::{Domain, Signal};

/// Cluster signals by domain, keeping the `top_n` highest-confidence distinct tags.
///
/// Ranking is confidence descending, ties broken by tag so the result does not
/// depend on input order. Tags are de-duplicated case-insensitively; the
/// first-ranked spelling wins.
pub fn cluster_signals(signals: &[Signal], top_n: usize) -> BTreeMap<Domain, DomainCluster> {
    let mut by_domain: BTreeMap<Domain, Vec<&Signal>> = BTreeMap::new();
    for signal in signals {
        by_domain.entry(signal.domain).or_default().push(signal);
    }

    by_domain
        .into_iter()
        .map(|(domain, members)| (domain, build_cluster(domain, members, top_n)))
        .collect()
}

fn build_cluster(domain: Domain, mut members: Vec<&Signal>, top_n: usize) -> DomainCluster {
    members.sort_by(|a, b| {
        b.confidence
            .value()
            .total_cmp(&a.confidence.value())
            .then_with(|| a.tag.to_lowercase().cmp(&b.tag.to_lowercase()))
            .then_with(|| a.tag.cmp(&b.tag))
    });

    let mut seen = HashSet::new();
    let top_tags: Vec<String> = members
        .iter()
        .filter(|s| seen.insert(s.tag.to_lowercase()))
        .take(top_n)
        .map(|s| s.tag.clone())
        .collect();

    let mut confidences: Vec<f64> = members.iter().map(|s| s.confidence.value()).collect();
    confidences.sort_by(f64::total_cmp);
    let avg_confidence = confidences.iter().sum::<f64>() / confidences.len() as f64;

    DomainCluster {
        domain,
        top_tags,
        avg_confidence,
        signal_count: members.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sig(domain: Domain, tag: &str, confidence: f64) -> Signal {
        Signal::new(
            domain,
            tag,
            confidence,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn keeps_top_three_by_confidence() {
        let signals = vec![
            sig(Domain::Design, "terrazzo", 0.4),
            sig(Domain::Design, "brutalism", 0.9),
            sig(Domain::Design, "mid_century", 0.7),
            sig(Domain::Design, "wabi_sabi", 0.8),
        ];
        let clusters = cluster_signals(&signals, 3);
        let design = &clusters[&Domain::Design];
        assert_eq!(design.top_tags, vec!["brutalism", "wabi_sabi", "mid_century"]);
        assert_eq!(design.signal_count, 4);
        assert!((design.avg_confidence - 0.7).abs() < 1e-12);
    }

    #[test]
    fn duplicate_tags_collapse_case_insensitively() {
        let signals = vec![
            sig(Domain::Food, "Omakase", 0.9),
            sig(Domain::Food, "omakase", 0.8),
            sig(Domain::Food, "izakaya", 0.5),
        ];
        let clusters = cluster_signals(&signals, 3);
        assert_eq!(clusters[&Domain::Food].top_tags, vec!["Omakase", "izakaya"]);
        assert_eq!(clusters[&Domain::Food].signal_count, 3);
    }

    #[test]
    fn ties_break_by_tag() {
        let a = vec![sig(Domain::Food, "b", 0.5), sig(Domain::Food, "a", 0.5)];
        let b = vec![sig(Domain::Food, "a", 0.5), sig(Domain::Food, "b", 0.5)];
        assert_eq!(cluster_signals(&a, 1), cluster_signals(&b, 1));
        assert_eq!(cluster_signals(&a, 1)[&Domain::Food].top_tags, vec!["a"]);
    }

    #[test]
    fn empty_window_has_no_clusters() {
        assert!(cluster_signals(&[], 3).is_empty());
    }
}
