//! Cross-respondent aggregation.

use super::record::{Method, RespondentRecord};
use std::collections::BTreeMap;

/// Which utilities feed the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UtilitySource {
    /// Only the given method's utilities.
    Method(Method),

    /// Every method's utilities pooled together.
    Average,
}

impl UtilitySource {
    fn includes(self, method: Method) -> bool {
        match self {
            UtilitySource::Method(m) => m == method,
            UtilitySource::Average => true,
        }
    }
}

/// Arithmetic mean utility per device over every matching method block.
///
/// Devices absent from a block do not count towards that device's mean.
pub fn mean_utilities(
    records: &[RespondentRecord],
    source: UtilitySource,
) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for record in records {
        for (&method, block) in &record.methods {
            if !source.includes(method) {
                continue;
            }
            for (device, utility) in block.utility.iter() {
                let entry = sums.entry(device.to_string()).or_insert((0.0, 0));
                entry.0 += utility;
                entry.1 += 1;
            }
        }
    }
    sums.into_iter()
        .map(|(device, (sum, count))| (device, sum / count as f64))
        .collect()
}

/// How often each device is the top choice of a (respondent, method) pair.
///
/// Every device in `devices` appears in the result, with zero if it never
/// came first. Top devices outside `devices` are counted as well.
pub fn top_choice_counts(
    records: &[RespondentRecord],
    devices: &[String],
) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> =
        devices.iter().map(|d| (d.clone(), 0)).collect();
    for record in records {
        for block in record.methods.values() {
            if let Some(top) = block.utility.top_device() {
                *counts.entry(top.to_string()).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// The device most often ranked first under `method`.
///
/// Ties resolve to the lexically first device. `None` when no respondent
/// answered with that method.
pub fn method_winner(records: &[RespondentRecord], method: Method) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        if let Some(top) = record.utility(method).and_then(|u| u.top_device()) {
            *counts.entry(top).or_insert(0) += 1;
        }
    }

    let mut winner: Option<(&str, usize)> = None;
    for (device, count) in counts {
        if winner.is_none_or(|(_, best)| count > best) {
            winner = Some((device, count));
        }
    }
    winner.map(|(device, _)| device.to_string())
}

/// Devices ordered by mean utility under `method`, highest first.
///
/// Used to compare the orderings the two methods produce.
pub fn mean_rank_order(records: &[RespondentRecord], method: Method) -> Vec<String> {
    let mut means: Vec<(String, f64)> =
        mean_utilities(records, UtilitySource::Method(method))
            .into_iter()
            .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means.into_iter().map(|(device, _)| device).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utility::UtilityRecord;

    fn record(id: &str, pc: &[(&str, f64)], sg: &[(&str, f64)]) -> RespondentRecord {
        RespondentRecord::new(id)
            .with_method(
                Method::PairwiseComparison,
                pc.iter().map(|&(d, u)| (d, u)).collect::<UtilityRecord>(),
            )
            .with_method(
                Method::StandardGamble,
                sg.iter().map(|&(d, u)| (d, u)).collect::<UtilityRecord>(),
            )
    }

    fn panel() -> Vec<RespondentRecord> {
        vec![
            record(
                "r1",
                &[("Lamp", 100.0), ("Fridge", 50.05), ("Pots", 0.1)],
                &[("Lamp", 60.0), ("Fridge", 90.0), ("Pots", 10.0)],
            ),
            record(
                "r2",
                &[("Fridge", 100.0), ("Lamp", 50.05), ("Pots", 0.1)],
                &[("Lamp", 70.0), ("Fridge", 80.0), ("Pots", 20.0)],
            ),
        ]
    }

    #[test]
    fn test_mean_per_method() {
        let means = mean_utilities(&panel(), UtilitySource::Method(Method::StandardGamble));
        assert!((means["Lamp"] - 65.0).abs() < 1e-9);
        assert!((means["Fridge"] - 85.0).abs() < 1e-9);
        assert!((means["Pots"] - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_mean_average_pools_methods() {
        let means = mean_utilities(&panel(), UtilitySource::Average);
        let expected_lamp = (100.0 + 60.0 + 50.05 + 70.0) / 4.0;
        assert!((means["Lamp"] - expected_lamp).abs() < 1e-9);
    }

    #[test]
    fn test_mean_of_nothing_is_empty() {
        assert!(mean_utilities(&[], UtilitySource::Average).is_empty());
    }

    #[test]
    fn test_top_choice_counts_zero_filled() {
        let devices = vec![
            "Lamp".to_string(),
            "Fridge".to_string(),
            "Pots".to_string(),
            "Cooker".to_string(),
        ];
        let counts = top_choice_counts(&panel(), &devices);
        assert_eq!(counts["Lamp"], 1);
        assert_eq!(counts["Fridge"], 3);
        assert_eq!(counts["Pots"], 0);
        assert_eq!(counts["Cooker"], 0);
    }

    #[test]
    fn test_method_winner() {
        let records = panel();
        assert_eq!(
            method_winner(&records, Method::StandardGamble).as_deref(),
            Some("Fridge")
        );
        // PC: one vote each for Lamp and Fridge; lexical tie-break.
        assert_eq!(
            method_winner(&records, Method::PairwiseComparison).as_deref(),
            Some("Fridge")
        );
        assert_eq!(method_winner(&[], Method::StandardGamble), None);
    }

    #[test]
    fn test_mean_rank_order() {
        let order = mean_rank_order(&panel(), Method::StandardGamble);
        assert_eq!(order, vec!["Fridge", "Lamp", "Pots"]);
    }
}
