//! Weighted pattern selection with a soft bias against repeats.

use rand::Rng;

use colossus_core::config::PatternWeights;
use colossus_core::constants::MAX_SELECTION_ATTEMPTS;
use colossus_core::enums::Pattern;

/// One cumulative-weight roll over the fixed pattern order.
/// Zero total weight falls back to FanBurst.
pub fn roll<R: Rng + ?Sized>(weights: &PatternWeights, rng: &mut R) -> Pattern {
    let total = weights.total();
    if total <= 0.0 {
        return Pattern::FanBurst;
    }

    let mut remainder = rng.gen::<f32>() * total;
    let mut last_positive = Pattern::FanBurst;
    for pattern in Pattern::ALL {
        let weight = weights.weight(pattern);
        if weight <= 0.0 {
            continue;
        }
        last_positive = pattern;
        remainder -= weight;
        if remainder <= 0.0 {
            return pattern;
        }
    }
    // Rounding can leave a sliver of remainder after the last weight.
    last_positive
}

/// Pick the next pattern, re-rolling up to the attempt budget while the roll
/// repeats `previous` and some other pattern is available. The final attempt
/// is accepted even if it is a repeat.
pub fn select<R: Rng + ?Sized>(
    weights: &PatternWeights,
    previous: Option<Pattern>,
    rng: &mut R,
) -> Pattern {
    let can_avoid_repeat = weights.positive_count() > 1;
    let mut choice = roll(weights, rng);
    let mut attempts = 1;

    while can_avoid_repeat && Some(choice) == previous && attempts < MAX_SELECTION_ATTEMPTS {
        choice = roll(weights, rng);
        attempts += 1;
    }
    choice
}
