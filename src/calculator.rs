use crate::memo::Memo;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;
use std::mem::replace;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Strategy {
    Naive,
    Memoized,
    Iterative,
}

#[derive(Debug, PartialEq)]
pub enum FibError {
    NegativeInput(i64),
}

impl fmt::Display for FibError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FibError::NegativeInput(n) => {
                write!(f, "fibonacci is undefined for negative input -- {}", n)
            }
        }
    }
}

impl std::error::Error for FibError {}

/// Recomputes both subproblems on every call. Exponential; impractical
/// beyond roughly n = 35.
pub fn fib_naive(n: u64) -> BigUint {
    match n {
        0 => BigUint::zero(),
        1 => BigUint::one(),
        n => fib_naive(n - 1) + fib_naive(n - 2),
    }
}

/// Each distinct n is derived at most once; the memo must be shared across
/// the whole recursion for the linear bound to hold.
pub fn fib_memoized(n: u64, memo: &mut Memo) -> BigUint {
    if let Some(hit) = memo.lookup(n) {
        return hit.clone();
    }
    let value = match n {
        0 => BigUint::zero(),
        1 => BigUint::one(),
        n => fib_memoized(n - 1, memo) + fib_memoized(n - 2, memo),
    };
    memo.insert(n, value.clone());
    value
}

/// Bottom-up, O(n) time, constant stack depth.
pub fn fib_iterative(n: u64) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = replace(&mut b, next);
    }
    a
}

/// Fibonacci calculator owning its memo, so cached values survive across
/// `compute` calls within a session.
pub struct Calculator {
    memo: Memo,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator { memo: Memo::new() }
    }

    pub fn compute(&mut self, strategy: Strategy, n: i64) -> Result<BigUint, FibError> {
        if n < 0 {
            return Err(FibError::NegativeInput(n));
        }
        let n = n as u64;
        Ok(match strategy {
            Strategy::Naive => fib_naive(n),
            Strategy::Memoized => fib_memoized(n, &mut self.memo),
            Strategy::Iterative => fib_iterative(n),
        })
    }

    pub fn memo(&self) -> &Memo {
        &self.memo
    }
}
