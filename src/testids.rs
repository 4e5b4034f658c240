//! The test-identity map.
//!
//! A test in STDF is named by the pair of its test number and its text
//! label — the number alone is not unique, because test programs reuse
//! numbers across differently-labelled steps. The consumer thread gives
//! each distinct pair a dense integer id, which is its insertion index, so
//! the ids double as row numbers for whatever table the host indexes the
//! tests into.
//!
//! Lookup is a linear scan. A test program has hundreds of tests, maybe a
//! few thousand, and each incoming result record costs one scan; a smarter
//! structure has nothing to win here.


const INITIAL_CAPACITY: usize = 256;


/// An append-only map from `(test number, test name)` pairs to dense ids.
#[derive(Debug, Clone, Default)]
pub struct TestIdMap {
    tests: Vec<(u32, String)>,
}

impl TestIdMap {

    /// Creates an empty map.
    pub fn new() -> Self {
        Self { tests: Vec::with_capacity(INITIAL_CAPACITY) }
    }

    /// How many distinct tests have been seen.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether no tests have been seen yet.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Looks up the id of a test, without inserting it.
    pub fn id_of(&self, num: u32, name: &str) -> Option<u32> {
        self.tests.iter()
            .position(|(n, s)| *n == num && s == name)
            .map(|index| u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Returns the id of a test, appending it with the next id if this is
    /// the first time the pair has been seen.
    pub fn insert(&mut self, num: u32, name: &str) -> u32 {
        if let Some(id) = self.id_of(num, name) {
            return id;
        }

        if self.tests.len() == self.tests.capacity() {
            // half-again growth keeps the worst-case copy smaller than
            // the doubling Vec would do on its own
            self.tests.reserve_exact((self.tests.capacity() / 2).max(1));
        }

        self.tests.push((num, name.to_owned()));
        u32::try_from(self.tests.len() - 1).unwrap_or(u32::MAX)
    }

    /// Visits every test in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.tests.iter().map(|(num, name)| (*num, name.as_str()))
    }
}
