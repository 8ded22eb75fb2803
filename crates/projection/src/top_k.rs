//! Top-k label selection.

/// Labels of the `k` most probable classes, most probable first.
///
/// Ties keep the original label order (the sort is stable), so the result
/// is deterministic for a given classifier. Fewer than `k` labels yields all
/// of them. `labels` and `probabilities` must be aligned by index; the
/// longer one is truncated to the shorter.
pub fn top_k<S: AsRef<str>>(labels: &[S], probabilities: &[f64], k: usize) -> Vec<String> {
    let n = labels.len().min(probabilities.len());
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| probabilities[b].total_cmp(&probabilities[a]));

    order
        .into_iter()
        .take(k)
        .map(|i| labels[i].as_ref().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ties_are_broken_by_original_index() {
        let labels = ["A", "B", "C", "D"];
        let probs = [0.1, 0.4, 0.4, 0.1];
        assert_eq!(top_k(&labels, &probs, 3), vec!["B", "C", "A"]);
    }

    #[test]
    fn fewer_labels_than_k_returns_all() {
        assert_eq!(top_k(&["x", "y"], &[0.3, 0.7], 3), vec!["y", "x"]);
        assert!(top_k::<&str>(&[], &[], 3).is_empty());
    }

    #[test]
    fn k_zero_selects_nothing() {
        assert!(top_k(&["x"], &[1.0], 0).is_empty());
    }

    proptest! {
        #[test]
        fn selection_is_sorted_and_bounded(
            probs in prop::collection::vec(0.0f64..1.0, 0..20),
            k in 0usize..6,
        ) {
            let labels: Vec<String> = (0..probs.len()).map(|i| format!("L{i}")).collect();
            let picked = top_k(&labels, &probs, k);

            prop_assert_eq!(picked.len(), k.min(labels.len()));

            let picked_probs: Vec<f64> = picked
                .iter()
                .map(|l| probs[l[1..].parse::<usize>().unwrap()])
                .collect();
            prop_assert!(picked_probs.windows(2).all(|w| w[0] >= w[1]));

            // nothing left behind beats the weakest pick
            if let Some(min) = picked_probs.last() {
                let beaten = labels
                    .iter()
                    .zip(&probs)
                    .filter(|(l, _)| !picked.contains(*l))
                    .all(|(_, p)| p <= min);
                prop_assert!(beaten);
            }
        }
    }
}
