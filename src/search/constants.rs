//! Search constants.

/// Score of a forced win for White (negated for Black).
///
/// Far outside any reachable material and placement total, so a decided
/// game always dominates an ordinary evaluation.
pub const MAX_VAL: i32 = 100_000;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier.

/// Multiplier on the captured piece's material value
pub const CAPTURE_MULTIPLIER: i32 = 10;

/// Landing on d4, e4, d5 or e5
pub const CENTER_BONUS: i32 = 30;

/// Opening king pawn advance (e2e4 / e7e5)
pub const KING_PAWN_BONUS: i32 = 50;

/// Opening minor piece development
pub const DEVELOPMENT_BONUS: i32 = 30;
