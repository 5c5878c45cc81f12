//! Evaluation constants and tables.
//!
//! Placement tables are written from White's point of view with rank 8 on
//! the first row, so a literal reads like a diagram of the board.

use once_cell::sync::Lazy;
use shakmaty::{Color, Role};

// ============================================================================
// MATERIAL
// ============================================================================

/// Material value per piece type, indexed by [`role_index`].
pub const MATERIAL: [i32; 6] = [
    100, // Pawn
    300, // Knight
    300, // Bishop
    500, // Rook
    900, // Queen
    0,   // King
];

/// Fixed table slot for a piece type.
#[must_use]
pub const fn role_index(role: Role) -> usize {
    match role {
        Role::Pawn => 0,
        Role::Knight => 1,
        Role::Bishop => 2,
        Role::Rook => 3,
        Role::Queen => 4,
        Role::King => 5,
    }
}

/// Material value of a piece type in centipawns.
#[must_use]
pub const fn material(role: Role) -> i32 {
    MATERIAL[role_index(role)]
}

// ============================================================================
// TERM WEIGHTS
// ============================================================================

/// Centipawns per legal move of mobility difference
pub const MOBILITY_WEIGHT: i32 = 10;

/// Penalty per pawn-unit of hostile material near a king
pub const KING_PROXIMITY_WEIGHT: i32 = 50;

/// Enemy pieces at or within this Manhattan distance count as near the king
pub const KING_PROXIMITY_RADIUS: u32 = 2;

/// Penalty per extra pawn on a file
pub const DOUBLED_PAWN_PENALTY: i32 = 20;

/// Penalty per pawn with no own pawn on an adjacent file
pub const ISOLATED_PAWN_PENALTY: i32 = 30;

// ============================================================================
// PLACEMENT TABLES
// ============================================================================

#[rustfmt::skip]
const PLACEMENT_WHITE_VIEW: [[i32; 64]; 6] = [
    // Pawn
    [
          0,   0,   0,   0,   0,   0,   0,   0,
         50,  50,  50,  50,  50,  50,  50,  50,
         10,  10,  20,  30,  30,  20,  10,  10,
          5,   5,  10,  25,  25,  10,   5,   5,
          0,   0,   0,  20,  20,   0,   0,   0,
          5,  -5, -10,   0,   0, -10,  -5,   5,
          5,  10,  10, -20, -20,  10,  10,   5,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
    // Knight
    [
        -50, -40, -30, -30, -30, -30, -40, -50,
        -40, -20,   0,   0,   0,   0, -20, -40,
        -30,   0,  10,  15,  15,  10,   0, -30,
        -30,   5,  15,  20,  20,  15,   5, -30,
        -30,   0,  15,  20,  20,  15,   0, -30,
        -30,   5,  10,  15,  15,  10,   5, -30,
        -40, -20,   0,   5,   5,   0, -20, -40,
        -50, -40, -30, -30, -30, -30, -40, -50,
    ],
    // Bishop
    [
        -20, -10, -10, -10, -10, -10, -10, -20,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -10,   0,   5,  10,  10,   5,   0, -10,
        -10,   5,   5,  10,  10,   5,   5, -10,
        -10,   0,  10,  10,  10,  10,   0, -10,
        -10,  10,  10,  10,  10,  10,  10, -10,
        -10,   5,   0,   0,   0,   0,   5, -10,
        -20, -10, -10, -10, -10, -10, -10, -20,
    ],
    // Rook
    [
          0,   0,   0,   0,   0,   0,   0,   0,
          5,  10,  10,  10,  10,  10,  10,   5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
          0,   0,   0,   5,   5,   0,   0,   0,
    ],
    // Queen
    [
        -20, -10, -10,  -5,  -5, -10, -10, -20,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -10,   0,   5,   5,   5,   5,   0, -10,
         -5,   0,   5,   5,   5,   5,   0,  -5,
          0,   0,   5,   5,   5,   5,   0,  -5,
        -10,   5,   5,   5,   5,   5,   0, -10,
        -10,   0,   5,   0,   0,   0,   0, -10,
        -20, -10, -10,  -5,  -5, -10, -10, -20,
    ],
    // King
    [
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -20, -30, -30, -40, -40, -30, -30, -20,
        -10, -20, -20, -20, -20, -20, -20, -10,
         20,  20,   0,   0,   0,   0,  20,  20,
         20,  30,  10,   0,   0,  10,  30,  20,
    ],
];

/// Placement bonus per `[color][piece][square]`, squares indexed a1 = 0.
///
/// White reads the diagram vertically mirrored (its a1 sits on the last
/// row); Black reads it as written, which is White's view mirrored.
pub static PLACEMENT: Lazy<[[[i32; 64]; 6]; 2]> = Lazy::new(|| {
    let mut tables = [[[0; 64]; 6]; 2];
    for (piece, diagram) in PLACEMENT_WHITE_VIEW.iter().enumerate() {
        for sq in 0..64 {
            tables[color_index(Color::White)][piece][sq] = diagram[sq ^ 56];
            tables[color_index(Color::Black)][piece][sq] = diagram[sq];
        }
    }
    tables
});

#[must_use]
pub const fn color_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

/// +1 for White, -1 for Black.
#[must_use]
pub const fn sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}
