/// Slide index of a wrapping carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range values are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        let mut c = CarouselState::new(3);
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut c = CarouselState::new(3);
        c.prev();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = CarouselState::new(3);
        c.go_to(1);
        c.go_to(9);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut c = CarouselState::new(0);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
        assert!(c.is_empty());
    }
}
