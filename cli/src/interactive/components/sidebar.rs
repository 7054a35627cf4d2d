//! Navigation sidebar

use crate::interactive::router::NavEntry;
use crate::interactive::text_utils::fit_to_width;
use iocraft::prelude::*;
use suraksha_core::config::icon_glyph;

/// Inner width of the sidebar in columns
pub const SIDEBAR_WIDTH: u32 = 30;

#[derive(Default, Props)]
pub struct SidebarProps {
    pub entries: Vec<NavEntry>,
    /// Row under the keyboard cursor
    pub cursor: usize,
    /// Row of the page on screen
    pub active: usize,
}

/// Label of one sidebar row: number, icon and name
pub fn entry_label(index: usize, entry: &NavEntry) -> String {
    let glyph = entry.icon.as_deref().map(icon_glyph).unwrap_or("•");
    format!("{} {} {}", index + 1, glyph, entry.name)
}

#[component]
pub fn Sidebar(props: &SidebarProps) -> impl Into<AnyElement<'static>> {
    let rows = props.entries.iter().enumerate().map(|(i, entry)| {
        let label = fit_to_width(&entry_label(i, entry), SIDEBAR_WIDTH as usize - 2);
        let (color, background) = if i == props.cursor {
            (Color::Black, Some(Color::Rgb { r: 255, g: 75, b: 75 }))
        } else {
            (Color::White, None)
        };
        let weight = if i == props.active {
            Weight::Bold
        } else {
            Weight::Normal
        };

        element! {
            View(key: i as u64, background_color: background) {
                Text(content: label, color: color, weight: weight)
            }
        }
    });

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: SIDEBAR_WIDTH,
            border_style: BorderStyle::Round,
            border_color: Color::DarkGrey,
            padding_left: 1,
        ) {
            Text(content: "Navigation", weight: Weight::Bold, color: Color::Grey)
            View(height: 1)
            #(rows)
        }
    }
}
