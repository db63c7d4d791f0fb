/// Module for `Showdown` that deals and settles one round.
mod showdown;
/// Export `Showdown` and its `Outcome`
pub use self::showdown::{Outcome, Showdown};
