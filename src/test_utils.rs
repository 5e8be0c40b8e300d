use crate::memo::Memo;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Same recursion as `fib_naive`, incrementing `calls` once per invocation.
pub fn fib_naive_counted(n: u64, calls: &mut u64) -> BigUint {
    *calls += 1;
    match n {
        0 => BigUint::zero(),
        1 => BigUint::one(),
        n => fib_naive_counted(n - 1, calls) + fib_naive_counted(n - 2, calls),
    }
}

/// Same recursion as `fib_memoized`, incrementing `derivations` once per
/// cache miss. Cache hits leave the counter untouched.
pub fn fib_memoized_counted(n: u64, memo: &mut Memo, derivations: &mut u64) -> BigUint {
    if let Some(hit) = memo.lookup(n) {
        return hit.clone();
    }
    *derivations += 1;
    let value = match n {
        0 => BigUint::zero(),
        1 => BigUint::one(),
        n => {
            fib_memoized_counted(n - 1, memo, derivations)
                + fib_memoized_counted(n - 2, memo, derivations)
        }
    };
    memo.insert(n, value.clone());
    value
}
