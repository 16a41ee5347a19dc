/// The 25 canonical dollar amounts that fill cases in a normal game.
///
/// There is one fewer denomination than there are cases, so generation has to
/// draw from a second copy for the last case.
pub const CATALOG: [Money; 25] = [
    1, 5, 10, 25, 50, 75, 100, 200, 300, 400, 500, 750, 1_000, 5_000, 10_000, 25_000, 50_000,
    75_000, 100_000, 200_000, 300_000, 400_000, 500_000, 750_000, 1_000_000,
];

/// Fresh working multiset of the canonical denominations.
pub fn denominations() -> Vec<Money> {
    CATALOG.to_vec()
}

use crate::Money;
