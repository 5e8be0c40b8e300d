use num_bigint::BigUint;
use std::collections::HashMap;

/// Cache of previously computed Fibonacci values, keyed by input.
///
/// Once a key is present its value never changes. Rebinding a key to a
/// different value is a logic error and panics.
#[derive(Debug)]
pub struct Memo {
    entries: HashMap<u64, BigUint>,
}

impl Memo {
    pub fn new() -> Self {
        Memo {
            entries: HashMap::new(),
        }
    }

    pub fn lookup(&self, n: u64) -> Option<&BigUint> {
        self.entries.get(&n)
    }

    pub fn contains(&self, n: u64) -> bool {
        self.entries.contains_key(&n)
    }

    pub fn insert(&mut self, n: u64, value: BigUint) {
        match self.entries.get(&n) {
            Some(old) if *old != value => {
                panic!("Memo Error: key {} rebound to a different value", n)
            }
            _ => {
                self.entries.insert(n, value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
