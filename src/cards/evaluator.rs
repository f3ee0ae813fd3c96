use super::card::Card;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;
use crate::Error;

const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// A lazy evaluator for a hand's strength.
///
/// Using the compact bitset representation of the Hand, we search for
/// the highest Ranking with bitwise operations instead of a lookup table.
/// Only 5, 6 or 7 card hands can be evaluated.
pub struct Evaluator(Hand);

impl TryFrom<Hand> for Evaluator {
    type Error = Error;
    fn try_from(h: Hand) -> Result<Self, Self::Error> {
        match h.size() {
            5..=7 => Ok(Self(h)),
            n => Err(Error::InvalidHandSize(n)),
        }
    }
}

/// Strength of the best five cards among 5, 6 or 7.
pub fn evaluate(hand: Hand) -> Result<Strength, Error> {
    Evaluator::try_from(hand).map(Strength::from)
}

/// The best 5-card subset of 5, 6 or 7 cards, in descending card order.
pub fn best_of(cards: &[Card]) -> Result<[Card; 5], Error> {
    let hand = Hand::from(cards);
    let cards = Vec::<Card>::from(hand);
    Evaluator::try_from(hand)?;
    let n = cards.len();
    let best = (0u32..(1 << n))
        .filter(|bits| bits.count_ones() == 5)
        .map(|bits| {
            cards
                .iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, &c)| c)
                .collect::<Vec<Card>>()
        })
        .map(|five| (Strength::from(Evaluator(Hand::from(five.as_slice()))), five))
        .fold(None::<(Strength, Vec<Card>)>, |best, (strength, five)| match best {
            Some((top, _)) if top >= strength => best,
            _ => Some((strength, five)),
        })
        .map(|(_, five)| five)
        .unwrap_or_default();
    let mut five = [cards[0]; 5];
    for (slot, card) in five.iter_mut().zip(best.into_iter().rev()) {
        *slot = card;
    }
    Ok(five)
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .unwrap_or_else(|| Ranking::HighCard(Rank::from(u16::from(self.0))))
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::default(),
            n => {
                let ranks = match ranking {
                    Ranking::Flush(_) => self
                        .find_suit_of_flush()
                        .map(|suit| u16::from(self.0.of(&suit)))
                        .unwrap_or_default(),
                    _ => u16::from(self.0),
                };
                let mut rank = ranks & ranking.mask();
                while n < rank.count_ones() as usize {
                    rank &= !(1 << rank.trailing_zeros());
                }
                Kickers::from(rank)
            }
        }
    }

    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(u16::from(self.0)).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| Rank::from(u16::from(self.0.of(&suit))))
            .map(Ranking::Flush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| Self::find_rank_of_straight(u16::from(self.0.of(&suit))))
            .map(Ranking::StraightFlush)
    }

    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(LOWEST_STRAIGHT_RANK)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| Some(*r) != skip)
            .find(|&r| self.0.count_of(r) >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::try_from(Hand::try_from(s).unwrap()).unwrap();
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        (ranking, kickers)
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let (ranking, kickers) = eval("As Kh Qd Jc 9s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn one_pair() {
        let (ranking, kickers) = eval("As Ah Kd Qc Js");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = eval("As Ah Ad Kc Qs");
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = eval("Ts Jh Qd Kc As");
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::default());
    }

    #[test]
    fn flush() {
        let (ranking, kickers) = eval("As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn full_house() {
        let (ranking, _) = eval("2s 2h 2d 3c 3s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, _) = eval("As 2s 3s 4s 5s");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn seven_card_hand() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Jh 9d");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, _) = eval("4h 6h 7h 8h 9h Ts");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn two_three_oak() {
        let (ranking, _) = eval("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn flush_kickers_ignore_offsuit_cards() {
        let (ranking, kickers) = eval("Ah 9h 7h 5h 2h Kd Qc");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::Nine, Rank::Seven, Rank::Five, Rank::Two]));
    }

    #[test]
    fn invalid_sizes() {
        for s in ["", "As", "As Kd Qh Jc", "As Kd Qh Jc Ts 9s 8s 7s"] {
            let hand = Hand::try_from(s).unwrap();
            assert_eq!(evaluate(hand), Err(Error::InvalidHandSize(hand.size())));
        }
    }

    #[test]
    fn best_five_of_seven() {
        let cards = Card::parse("2c 7d As Ks Qs Js Ts").unwrap();
        let best = best_of(&cards).unwrap();
        assert_eq!(best.to_vec(), Card::parse("As Ks Qs Js Ts").unwrap());
    }

    #[test]
    fn best_of_rejects_four() {
        let cards = Card::parse("2c 7d As Ks").unwrap();
        assert_eq!(best_of(&cards), Err(Error::InvalidHandSize(4)));
    }
}
