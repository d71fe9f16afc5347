//! Category heading row.

use dioxus::prelude::*;
use tempo_core::theme::{change_opacity, typography, Theme, TypeKind};

/// Upper-cased category heading.
#[component]
pub fn CategoryHeader(heading: String, theme: Theme) -> Element {
    let color = change_opacity(&theme.sidebar_text, 0.64);
    let type_css = typography(TypeKind::Heading, 75).css();
    let heading = heading.to_uppercase();

    rsx! {
        div { class: "category-header",
            span {
                style: "color: {color}; {type_css}",
                "{heading}"
            }
        }
    }
}
