//! Test that reversing a forward-only range produces a compile error.

use lazyrange::cursor::Cursor;
use lazyrange::range::Range;
use lazyrange::seq::reversed;

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
    let range = Range::new(Countup(0), Countup(3));
    let _ = reversed(range);
}
