// File: crates/chart-core/src/percent.rs
// Summary: Largest-remainder normalization of percentages to integers summing to 100.

use std::collections::BTreeMap;

const TARGET_PERCENT: i64 = 100;

/// Round every share to an integer so that the shares sum to exactly 100.
///
/// Values are truncated, then the share with the largest remainder is bumped up (or the one with
/// the smallest remainder bumped down) until the total is 100. Ties go to the lowest index. Once
/// the chosen share has no remainder left it would be chosen for every further point, so the rest
/// of the difference lands on it at once. Non-finite inputs count as 0. Empty input and all-zero
/// input are returned as-is (empty and all 0% respectively).
pub fn normalize_percents(percents: &BTreeMap<usize, f64>) -> BTreeMap<usize, i64> {
    let keys: Vec<usize> = percents.keys().copied().collect();
    let values: Vec<f64> = percents.values().map(|&v| if v.is_finite() { v } else { 0.0 }).collect();
    if values.iter().all(|&v| v == 0.0) {
        return keys.into_iter().map(|k| (k, 0)).collect();
    }

    // Integer parts saturate at the i64 bounds; sums are taken in i128.
    let mut ints: Vec<i64> = values.iter().map(|v| v.trunc() as i64).collect();
    let mut remainders: Vec<f64> = values.iter().map(|v| v - v.trunc()).collect();
    let mut diff = TARGET_PERCENT as i128 - ints.iter().map(|&v| v as i128).sum::<i128>();

    while diff != 0 {
        let increase = diff > 0;
        let Some(k) = pick_by_remainder(&remainders, increase) else {
            break;
        };
        if remainders[k] == 0.0 {
            ints[k] = saturating_add(ints[k], diff);
            break;
        }
        let step = if increase { 1 } else { -1 };
        ints[k] = saturating_add(ints[k], step);
        remainders[k] = 0.0;
        diff -= step;
    }
    keys.into_iter().zip(ints).collect()
}

fn saturating_add(value: i64, delta: i128) -> i64 {
    (value as i128 + delta).clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Position with the largest (`largest == true`) or smallest remainder, lowest position on ties.
fn pick_by_remainder(remainders: &[f64], largest: bool) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (k, &rem) in remainders.iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, b)) if largest => rem > b,
            Some((_, b)) => rem < b,
        };
        if better {
            best = Some((k, rem));
        }
    }
    best.map(|(k, _)| k)
}

/// Percent share of each value in the total. A zero total yields 0% everywhere.
pub fn percents_of(values: &[i64]) -> BTreeMap<usize, f64> {
    let total: i64 = values.iter().sum();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i, if total != 0 { v as f64 / total as f64 * 100.0 } else { 0.0 }))
        .collect()
}

/// Integer shares of `values`, in order, summing to 100 unless every value is zero.
pub fn normalized_percents_of(values: &[i64]) -> Vec<i64> {
    let normalized = normalize_percents(&percents_of(values));
    (0..values.len()).map(|i| normalized.get(&i).copied().unwrap_or(0)).collect()
}
