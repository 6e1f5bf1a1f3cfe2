//! Game constants and tuning parameters.
//!
//! Random ranges are `(low, high)` pairs, inclusive on both ends.

// --- Course ---

/// Distance to travel before the chase is won (miles).
pub const FINISH_LINE: i32 = 200;

/// Player start position (miles).
pub const PLAYER_START: i32 = 0;

/// Pursuer start position (miles). Negative means behind the player.
pub const ENEMY_START: i32 = -20;

/// Pursuer advance after every resolved turn (miles).
pub const ENEMY_ADVANCE: (i32, i32) = (7, 13);

// --- Canteen ---

/// Canteen capacity, and the number of drinks at game start.
pub const MAXIMUM_DRINKS: u32 = 3;

// --- Travel ---

/// Distance covered at moderate speed (miles).
pub const MODERATE_SPEED_DISTANCE: (i32, i32) = (5, 11);

/// Distance covered at full speed (miles).
pub const FULL_SPEED_DISTANCE: (i32, i32) = (10, 19);

/// Tiredness gained at moderate speed.
pub const MODERATE_SPEED_TIREDNESS: u32 = 1;

/// Tiredness gained at full speed.
pub const FULL_SPEED_TIREDNESS: (i32, i32) = (1, 2);

/// Thirst gained by any movement, regardless of distance.
pub const TRAVEL_THIRST: u32 = 1;

// --- State check thresholds ---

/// Tiredness above this kills the camel.
pub const TIREDNESS_LIMIT: u32 = 8;

/// Tiredness above this (and at most the limit) prints a warning.
pub const TIREDNESS_WARNING: u32 = 5;

/// Thirst above this kills the player. Travel reports are suppressed past it.
pub const THIRST_LIMIT: u32 = 6;

/// Thirst above this (and at most the limit) prints a warning.
pub const THIRST_WARNING: u32 = 4;

/// Margin below this prints a "getting close" warning (miles).
pub const NATIVES_WARNING_MARGIN: i32 = 15;

// --- Oasis ---

/// Roll range for the oasis event (1 in 19).
pub const OASIS_ROLL: (i32, i32) = (1, 19);

/// The roll that finds an oasis.
pub const OASIS_HIT: i32 = 10;
