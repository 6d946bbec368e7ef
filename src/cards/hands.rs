use super::hand::Hand;

/// Gosper's hack: the next larger integer with the same number of set bits.
pub fn permute(x: u64) -> u64 {
    let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
    let  b = /* 001_000 <-                    */ a + 1;
    let  c = /* 111_000 <-                    */ !   a;
    let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
    let  e = /* 000_111 <-                    */ d - 1;
    let  f = /*         << xxx                */ 1 + x.trailing_zeros();
    let  g = /* 000_000 <-                    */ e >> f;
    let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
    h
}

/// HandIterator visits every n-card hand that avoids a blocked mask.
/// - n is fixed at construction
/// - blocked cards (hero's hole cards, the known board) never appear
/// - iteration order is deterministic, lowest card indices first
///
/// The solver uses it with n = 2 to enumerate the opponent's range.
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    /// number of hands this iterator yields from its starting point
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = Hand::from(self.next).size();
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }
    fn exhausted(&self) -> bool {
        self.next == 0 || (64 - 52) > self.next.leading_zeros()
    }
    fn advance(&mut self) {
        loop {
            self.next = permute(self.next);
            if self.next & self.mask == 0 {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mut this = Self {
            next: (1 << n) - 1,
            mask: u64::from(mask),
        };
        while this.next != 0 && this.next & this.mask > 0 {
            this.next = permute(this.next);
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = HandIterator::from((3, Hand::from(!0b11111u64)));
        assert!(iter.next() == Some(Hand::from(0b00111)));
        assert!(iter.next() == Some(Hand::from(0b01011)));
        assert!(iter.next() == Some(Hand::from(0b01101)));
        assert!(iter.next() == Some(Hand::from(0b01110)));
        assert!(iter.next() == Some(Hand::from(0b10011)));
        assert!(iter.next() == Some(Hand::from(0b10101)));
        assert!(iter.next() == Some(Hand::from(0b10110)));
        assert!(iter.next() == Some(Hand::from(0b11001)));
        assert!(iter.next() == Some(Hand::from(0b11010)));
        assert!(iter.next() == Some(Hand::from(0b11100)));
        assert!(iter.next() == None);
    }

    #[test]
    fn five_choose_three_with_mask() {
        let mask = Hand::from(0b______________________11_0);
        let mut iter = HandIterator::from((3, mask));
        assert!(iter.next() == Some(Hand::from(0b0011_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0101_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0110_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0111_00_0)));
    }

    #[test]
    fn holdings_avoid_dead_cards() {
        let dead = Hand::try_from("As Ah 2c 7d 9h Jc Kc").unwrap();
        let iter = HandIterator::from((2, dead));
        assert_eq!(iter.combinations(), 45 * 44 / 2);
        let holdings = iter.collect::<Vec<Hand>>();
        assert_eq!(holdings.len(), 45 * 44 / 2);
        assert!(holdings.iter().all(|h| h.size() == 2));
        assert!(holdings.iter().all(|h| u64::from(*h) & u64::from(dead) == 0));
    }

    #[test]
    fn permute_keeps_popcount() {
        let mut x = 0b111u64;
        for _ in 0..100 {
            let y = permute(x);
            assert!(y > x);
            assert_eq!(y.count_ones(), 3);
            x = y;
        }
    }
}
