//! Suraksha logo component
//!
//! This module provides the Suraksha ASCII art logo component with gradient colors.

use iocraft::prelude::*;

pub const SURAKSHA_LOGO_LINES: &[&str] = &[
    "╔═╗╦ ╦╦═╗╔═╗╦╔═╔═╗╦ ╦╔═╗",
    "╚═╗║ ║╠╦╝╠═╣╠╩╗╚═╗╠═╣╠═╣",
    "╚═╝╚═╝╩╚═╩ ╩╩ ╩╚═╝╩ ╩╩ ╩",
];

// Gradient from alert red to warm orange
pub const LOGO_COLORS: &[(u8, u8, u8)] = &[(255, 75, 75), (255, 110, 64), (255, 145, 53)];

#[derive(Default, Props)]
pub struct SurakshaLogoProps {
    /// Site title shown next to the logo
    pub title: String,
}

/// Suraksha ASCII Art Logo Component with gradient colors
#[component]
pub fn SurakshaLogo(props: &SurakshaLogoProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(key: "logo-content", flex_direction: FlexDirection::Row, align_items: AlignItems::Center) {
            View(flex_direction: FlexDirection::Column, margin_right: 2) {
                #(SURAKSHA_LOGO_LINES.iter().enumerate().map(|(i, line)| {
                    let color = LOGO_COLORS.get(i).unwrap_or(&(255, 75, 75));
                    element! {
                        Text(
                            content: *line,
                            color: Color::Rgb { r: color.0, g: color.1, b: color.2 },
                            weight: Weight::Bold,
                        )
                    }
                }).collect::<Vec<_>>())
            }
            Text(content: props.title.clone(), color: Color::Grey)
        }
    }
}
