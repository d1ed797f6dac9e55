//! Test that measuring distance with a forward-only cursor produces a
//! compile error.

use lazyrange::cursor::{Cursor, RandomAccess};

#[derive(Clone)]
struct Countup(u32);

impl Cursor for Countup {
    type Item = u32;

    fn deref(&self) -> u32 {
        self.0
    }

    fn inc(&mut self) {
        self.0 += 1;
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

fn main() {
    let begin = &Countup(0);
    let end = &Countup(3);
    let _ = RandomAccess::distance_to(begin, end);
}
