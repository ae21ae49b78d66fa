// Scores are in tenths of a man.
pub const VAL_MAN: i32 = 10;
pub const VAL_KING: i32 = 30;

// Per row advanced towards the promotion row
pub const ADVANCE_BONUS: i32 = 1;

// Returned when the side to search has no legal moves
pub const TERMINAL_SCORE: i32 = 10_000;

// Bound of the alpha-beta window. Terminal scores stay strictly inside it.
pub const SCORE_INFINITY: i32 = 1_000_000;

pub const DEPTH_EASY: u8 = 2;
pub const DEPTH_MEDIUM: u8 = 3;
pub const DEPTH_HARD: u8 = 4;
