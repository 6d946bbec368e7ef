use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Showdown;

/// One sampled instance of the hidden information: both holdings and a
/// complete board. Everything random about a traversal is fixed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    hero: Hole,
    villain: Hole,
    board: Board,
}

impl Deal {
    pub fn hero(&self) -> Hole {
        self.hero
    }
    pub fn villain(&self) -> Hole {
        self.villain
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn showdown(&self) -> Showdown {
        let board = Hand::from(self.board);
        Showdown::from((
            Hand::add(Hand::from(self.hero), board),
            Hand::add(Hand::from(self.villain), board),
        ))
    }
}

impl From<(Hole, Hole, Board)> for Deal {
    fn from((hero, villain, board): (Hole, Hole, Board)) -> Self {
        assert!(board.is_complete());
        Self {
            hero,
            villain,
            board,
        }
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {} on {}", self.hero, self.villain, self.board)
    }
}
