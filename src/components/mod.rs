//! UI components for Tempo.

pub mod channel_list;
pub mod emoji_picker;
mod channel_view;
mod team_sidebar;

pub use channel_list::ChannelList;
pub use channel_view::ChannelView;
pub use team_sidebar::TeamSidebar;
