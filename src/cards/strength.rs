use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

/// A hand's strength.
///
/// Ordered by Ranking first and Kickers second, which is the
/// lexicographic (category, tiebreaks) order of poker hands.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    /// 0 for high card through 8 for straight flush
    pub fn category(&self) -> u8 {
        self.ranking.category()
    }
    pub fn primary(&self) -> Rank {
        self.ranking.primary()
    }
    /// every tiebreak rank, most significant first
    pub fn tiebreaks(&self) -> Vec<Rank> {
        let mut ranks = self.ranking.ranks();
        ranks.extend(Vec::<Rank>::from(self.kicks));
        ranks
    }
    /// the strength of exactly five cards
    pub fn classify(hand: Hand) -> Self {
        assert!(hand.size() == 5);
        Self::from(hand)
    }
    /// the strongest five-card hand among all subsets of a larger hand
    pub fn best(hand: Hand) -> Self {
        match hand.size() {
            0..=5 => Self::from(hand),
            _ => hand
                .subsets(5)
                .map(Self::classify)
                .max()
                .expect("at least one five-card subset"),
        }
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        let eval = Evaluator::from(hand);
        let ranking = eval.find_ranking();
        let kicks = eval.find_kickers(ranking);
        Self::from((ranking, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kicks): (Ranking, Kickers)) -> Self {
        Self { ranking, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.ranking, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn best(s: &str) -> Strength {
        Strength::best(Hand::try_from(s).unwrap())
    }

    #[rustfmt::skip]
    #[test]
    fn textbook_ladder() {
        let ladder = [
            best("2c 5d 8h Js Kd 3h 9c"), // high card
            best("2c 2d 8h Js Kd 3h 9c"), // pair
            best("2c 2d 8h 8s Kd 3h 9c"), // two pair
            best("2c 2d 2h 8s Kd 3h 9c"), // trips
            best("As 2d 3h 4s 5d Jh 9c"), // wheel
            best("6s 2d 3h 4s 5d Jh 9c"), // six-high straight
            best("2c 5c 8c Jc Kd 3h 9c"), // flush
            best("2c 2d 2h 8s 8d 3h 9c"), // full house
            best("2c 2d 2h 2s Kd 3h 9c"), // quads
            best("9c Tc Jc Qc Kc 3h 2d"), // straight flush
            best("Tc Jc Qc Kc Ac 3h 2d"), // royal flush
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn wheel_is_five_high_straight() {
        let wheel = best("As 2d 3h 4s 5d");
        assert_eq!(wheel.category(), 4);
        assert_eq!(wheel.tiebreaks(), vec![Rank::Five]);
        assert!(wheel < best("2s 3d 4h 5s 6d"));
        assert!(wheel > best("As Ah Ad Kh Qd"));
        assert!(wheel > best("Ad Kd Qh Js 9d"));
    }

    #[test]
    fn two_pair_compares_high_then_low_then_kicker() {
        let aak = best("As Ah 9s 9h 2d");
        assert!(aak > best("Ks Kh Qs Qh Jd"));
        assert!(aak > best("Ac Ad 8s 8h Kd"));
        assert!(best("As Ah 9s 9h 3d") > aak);
        assert_eq!(aak, best("Ac Ad 9c 9d 2c"));
    }

    #[test]
    fn one_pair_compares_three_kickers() {
        let a = best("Js Jh Ad 9c 4s");
        let b = best("Jd Jc Ah 9s 3d");
        assert!(a > b);
        assert_eq!(a.tiebreaks(), vec![Rank::Jack, Rank::Ace, Rank::Nine, Rank::Four]);
    }

    #[test]
    fn flush_tiebreaks_use_all_five_ranks() {
        let flush = best("Ah Th 7h 4h 2h Kd Qc");
        assert_eq!(
            flush.tiebreaks(),
            vec![Rank::Ace, Rank::Ten, Rank::Seven, Rank::Four, Rank::Two]
        );
    }

    #[test]
    fn full_house_tiebreaks() {
        let boat = best("Qs Qh Qd 3c 3s 9h 2d");
        assert_eq!(boat.tiebreaks(), vec![Rank::Queen, Rank::Three]);
    }

    #[test]
    fn best_of_seven_matches_direct_evaluation() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..2000 {
            let hand = Deck::new().deal(7, &mut rng);
            assert_eq!(Strength::best(hand), Strength::from(hand), "{}", hand);
        }
    }

    #[test]
    fn total_order_is_consistent() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..500 {
            let a = Strength::best(Deck::new().deal(7, &mut rng));
            let b = Strength::best(Deck::new().deal(7, &mut rng));
            let relations = [a > b, a < b, a == b];
            assert_eq!(relations.iter().filter(|r| **r).count(), 1);
        }
    }
}
