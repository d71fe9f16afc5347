//! Record types consumed by the presentation layer.

mod channel;
mod emoji;
mod team;
mod user;

pub use channel::Channel;
pub use emoji::{EmojiSection, EMOJI_SECTIONS};
pub use team::Team;
pub use user::User;
