//! Scrollable view of the rendered page

use crate::output::{LineStyle, StyledLine};
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct PageViewProps {
    /// Lines already laid out for the view width
    pub lines: Vec<StyledLine>,
    /// First visible line
    pub scroll: usize,
    /// Number of visible lines
    pub height: usize,
}

fn line_color(style: LineStyle) -> (Option<Color>, Weight) {
    match style {
        LineStyle::Title => (Some(Color::Cyan), Weight::Bold),
        LineStyle::Subheader => (Some(Color::Yellow), Weight::Bold),
        LineStyle::Heading => (Some(Color::Green), Weight::Bold),
        LineStyle::Code | LineStyle::Divider | LineStyle::Caption => {
            (Some(Color::DarkGrey), Weight::Normal)
        }
        LineStyle::Link => (Some(Color::Blue), Weight::Normal),
        LineStyle::Placeholder => (Some(Color::Red), Weight::Normal),
        LineStyle::Body | LineStyle::Blank => (None, Weight::Normal),
    }
}

/// Highest useful scroll offset for `total` lines in a view `height` tall
pub fn max_scroll(total: usize, height: usize) -> usize {
    total.saturating_sub(height.max(1))
}

#[component]
pub fn PageView(props: &PageViewProps) -> impl Into<AnyElement<'static>> {
    let start = props.scroll.min(max_scroll(props.lines.len(), props.height));
    let visible = props
        .lines
        .iter()
        .enumerate()
        .skip(start)
        .take(props.height.max(1))
        .map(|(i, line)| {
            let (color, weight) = line_color(line.style);
            element! {
                Text(key: i as u64, content: line.text.clone(), color: color, weight: weight)
            }
        });

    let position = if props.lines.len() > props.height {
        format!(
            "{}-{} of {}",
            start + 1,
            (start + props.height).min(props.lines.len()),
            props.lines.len()
        )
    } else {
        String::new()
    };

    element! {
        View(
            flex_direction: FlexDirection::Column,
            flex_grow: 1.0,
            border_style: BorderStyle::Round,
            border_color: Color::DarkGrey,
            padding_left: 1,
            padding_right: 1,
        ) {
            #(visible)
            View(flex_grow: 1.0)
            Text(content: position, color: Color::DarkGrey)
        }
    }
}
