/*!
 * Random Source Traits
 */

/// A reproducible source of random integers
///
/// Implementations expose their seed so a failing run can be replayed.
pub trait RandomSource {
    /// Next value of the sequence
    fn random(&mut self) -> u64;

    /// Seed that fully determines the sequence
    fn seed(&self) -> i32;
}
