//! Lineup domain models.
//!
//! Plain value records supplied by the caller (players, positions) and
//! the result handed back (lineup). The surrounding application owns
//! persistence; these types only need to round-trip through `serde`.
//!
//! # Domain Mappings
//!
//! | u-lineup | Sports club | Shift rota | Volunteering |
//! |----------|-------------|------------|--------------|
//! | Player | Squad member | Employee | Volunteer |
//! | Position | Field position | Station | Task post |
//! | Lineup | Match lineup | Shift plan | Duty sheet |

mod lineup;
mod player;
mod position;

pub use lineup::{Lineup, LineupEntry};
pub use player::Player;
pub use position::Position;
