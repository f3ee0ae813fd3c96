use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's strength.
///
/// Always derived from an [`Evaluator`], never stored alongside cards. The
/// Ranking decides first and the kicker ranks break ties, which yields a
/// total order over every 5 to 7 card hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

/// Share of random 7-card hands falling in each Ranking category.
const CATEGORY_FREQUENCY: [f32; 9] = [
    0.1741, // high card
    0.4382, // one pair
    0.2350, // two pair
    0.0483, // three of a kind
    0.0462, // straight
    0.0303, // flush
    0.0260, // full house
    0.0017, // four of a kind
    0.0002, // straight flush
];

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
    /// Packed numeric score, consistent with `Ord`.
    ///
    /// category (4 bits) | primary rank (4 bits) | secondary rank (4 bits) | kickers (13 bits)
    pub fn score(&self) -> u32 {
        let (hi, lo) = self.value.ranks();
        let category = self.value.category() as u32;
        let hi = u8::from(hi) as u32;
        let lo = lo.map(|r| u8::from(r) as u32 + 1).unwrap_or(0);
        category << 24 | hi << 20 | lo << 16 | u16::from(self.kicks) as u32
    }
    /// Approximate percentile of this made hand among random 7-card hands.
    ///
    /// Categories below contribute their full frequency; within the category
    /// the defining rank interpolates linearly.
    pub fn percentile(&self) -> f32 {
        let category = self.value.category() as usize;
        let below = CATEGORY_FREQUENCY[..category].iter().sum::<f32>();
        let (hi, _) = self.value.ranks();
        let within = u8::from(hi) as f32 / 12.;
        (below + within * CATEGORY_FREQUENCY[category]).clamp(0., 1.)
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::*;

    fn strength(s: &str) -> Strength {
        evaluate(Hand::try_from(s).unwrap()).unwrap()
    }

    #[test]
    fn quads_beat_any_full_house() {
        assert!(strength("2s 2h 2d 2c 3s") > strength("As Ah Ad Kc Ks"));
    }

    #[test]
    fn full_house_beats_flush() {
        assert!(strength("2s 2h 2d 3c 3s") > strength("As Ks Qs Js 9s"));
    }

    #[test]
    fn flush_kickers_break_ties() {
        assert!(strength("Ah Kh 9h 5h 2h") > strength("As Qs Js 9s 8s"));
    }

    #[test]
    fn kicker_breaks_pair_tie() {
        assert!(strength("As Ah Kd 7c 3s") > strength("Ac Ad Qd Jc Ts"));
    }

    #[test]
    fn exact_tie_across_suits() {
        assert_eq!(strength("As Kh Qd Jc 9s"), strength("Ah Kd Qc Js 9h"));
    }

    #[test]
    fn score_is_monotone_with_order() {
        let hands = [
            "As Kh Qd Jc 9s",
            "2s 2h 4d 5c 6s",
            "2s 2h 3d 3c 6s",
            "7s 7h 7d 3c 6s",
            "As 2h 3d 4c 5s",
            "2h 4h 6h 8h Th",
            "3s 3h 3d 2c 2s",
            "5s 5h 5d 5c 2s",
            "9s Ts Js Qs Ks",
        ];
        let strengths = hands.iter().map(|h| strength(h)).collect::<Vec<_>>();
        for pair in strengths.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].score() < pair[1].score());
            assert!(pair[0].percentile() <= pair[1].percentile());
        }
    }
}
