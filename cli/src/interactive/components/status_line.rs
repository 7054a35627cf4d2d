//! Status line component
//!
//! Shows the latest notice (missing assets, unknown pages, failed renders)
//! above the key hints. Notices never stop the app.

use iocraft::prelude::*;

pub const KEY_HINTS: &str =
    "↑/↓ move · Enter open · 1-9 jump · PgUp/PgDn scroll · b back · q quit";

#[derive(Default, Props)]
pub struct StatusLineProps {
    /// Notices for the page on screen
    pub notices: Vec<String>,
}

#[component]
pub fn StatusLine(props: &StatusLineProps) -> impl Into<AnyElement<'static>> {
    let notice = match props.notices.as_slice() {
        [] => None,
        [only] => Some(format!("⚠ {}", only)),
        [first, rest @ ..] => Some(format!("⚠ {} (+{} more)", first, rest.len())),
    };

    element! {
        View(flex_direction: FlexDirection::Column, padding_left: 1, padding_right: 1) {
            #(notice.map(|text| element! {
                Text(content: text, color: Color::Yellow, weight: Weight::Bold)
            }))
            Text(content: KEY_HINTS, color: Color::DarkGrey)
        }
    }
}
