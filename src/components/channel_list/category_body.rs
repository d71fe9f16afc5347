//! Category body: the channel rows of one category.

use dioxus::prelude::*;
use tempo_core::theme::Theme;
use tempo_core::types::Channel;

use super::ChannelItem;

/// Row props in render order: `(key, name, highlight)` per channel.
fn row_props(channels: &[Channel]) -> Vec<(String, String, bool)> {
    channels
        .iter()
        .map(|channel| (channel.id.clone(), channel.name.clone(), channel.highlight))
        .collect()
}

/// Renders one [`ChannelItem`] per record, in input order. An empty
/// input renders an empty list.
#[component]
pub fn CategoryBody(channels: Vec<Channel>, theme: Theme) -> Element {
    rsx! {
        div { class: "category-body",
            for (key, name, highlight) in row_props(&channels) {
                ChannelItem {
                    key: "{key}",
                    name,
                    highlight,
                    theme: theme.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_channel_in_order() {
        let channels = vec![
            Channel::new("town-square", true),
            Channel::new("off-topic", false),
            Channel::new("random", false),
        ];

        let rows = row_props(&channels);
        assert_eq!(rows.len(), channels.len());
        for (row, channel) in rows.iter().zip(&channels) {
            assert_eq!(row.0, channel.id);
            assert_eq!(row.1, channel.name);
            assert_eq!(row.2, channel.highlight);
        }
    }

    #[test]
    fn test_empty_input_renders_no_rows() {
        assert!(row_props(&[]).is_empty());
    }
}
