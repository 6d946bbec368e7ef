use super::deal::Deal;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::HandIterator;
use crate::cards::Hole;
use rand::Rng;
use rand::seq::SliceRandom;

/// Draws the hidden information for each iteration: an opponent holding
/// from a fixed pool and, when the board is short, a random run-out.
///
/// The pool is every two-card holding that avoids the hero's cards and
/// the known board, cut down to a random subset when it exceeds the
/// opponent-sample budget. It is drawn once per solve.
#[derive(Debug, Clone)]
pub struct Sampler {
    hero: Hole,
    board: Board,
    pool: Vec<Hole>,
}

impl Sampler {
    pub fn new<R: Rng>(hero: Hole, board: Board, budget: usize, rng: &mut R) -> anyhow::Result<Self> {
        if budget == 0 {
            return Err(anyhow::anyhow!("opponent sample budget must be positive"));
        }
        let dead = Hand::add(Hand::from(hero), Hand::from(board));
        let mut pool = HandIterator::from((2, dead))
            .map(Hole::try_from)
            .collect::<anyhow::Result<Vec<Hole>>>()?;
        if pool.len() > budget {
            pool.shuffle(rng);
            pool.truncate(budget);
        }
        Ok(Self { hero, board, pool })
    }
    pub fn pool(&self) -> &[Hole] {
        &self.pool
    }
    /// a uniform opponent from the pool and a uniform completion of the board
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Deal {
        let villain = self.pool[rng.random_range(0..self.pool.len())];
        let mut deck = Deck::new();
        deck.exclude(Hand::from(self.hero));
        deck.exclude(Hand::from(villain));
        deck.exclude(Hand::from(self.board));
        let runout = deck.deal(self.board.missing(), rng);
        Deal::from((self.hero, villain, self.board.complete(runout)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sampler(hero: &str, board: &str, budget: usize) -> Sampler {
        let ref mut rng = SmallRng::seed_from_u64(0);
        Sampler::new(
            Hole::try_from(hero).unwrap(),
            Board::try_from(board).unwrap(),
            budget,
            rng,
        )
        .unwrap()
    }

    #[test]
    fn full_range_under_budget() {
        assert_eq!(sampler("As Ah", "2c 7d 9h Jc Kc", 4000).pool().len(), 45 * 44 / 2);
        assert_eq!(sampler("As Ah", "", 4000).pool().len(), 50 * 49 / 2);
    }

    #[test]
    fn budget_caps_pool() {
        assert_eq!(sampler("As Ah", "2c 7d 9h", 100).pool().len(), 100);
    }

    #[test]
    fn zero_budget_rejected() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let hero = Hole::try_from("As Ah").unwrap();
        assert!(Sampler::new(hero, Board::empty(), 0, rng).is_err());
    }

    #[test]
    fn deals_never_collide() {
        let sampler = sampler("As Ah", "2c 7d", 4000);
        let ref mut rng = SmallRng::seed_from_u64(3);
        let known = Hand::try_from("2c 7d").unwrap();
        for _ in 0..500 {
            let deal = sampler.sample(rng);
            let hero = Hand::from(deal.hero());
            let villain = Hand::from(deal.villain());
            let board = Hand::from(deal.board());
            assert_eq!(board.size(), 5);
            assert_eq!(u64::from(board) & u64::from(known), u64::from(known));
            let all = Hand::add(Hand::add(hero, villain), board);
            assert_eq!(all.size(), 9);
        }
    }

    #[test]
    fn complete_board_is_kept() {
        let sampler = sampler("As Ah", "2c 7d 9h Jc Kc", 4000);
        let ref mut rng = SmallRng::seed_from_u64(5);
        let board = Board::try_from("2c 7d 9h Jc Kc").unwrap();
        for _ in 0..50 {
            assert_eq!(sampler.sample(rng).board(), board);
        }
    }
}
