//! Page components for Tempo.

mod channel;
mod channel_list;
mod clear_after;

pub use channel::ChannelScreen;
pub use channel_list::ChannelListScreen;
pub use clear_after::ClearAfterModal;
