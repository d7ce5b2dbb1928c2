//! Pure numeric helpers.
//!
//! Each sub-module covers one operation family as free functions,
//! keeping `Dispatcher` itself thin (struct + routing only).

mod divisors;
mod fibonacci;
mod prime;

pub use divisors::{fold_gcd, fold_lcm};
pub use fibonacci::fibonacci;
pub use prime::{filter_primes, is_prime};
