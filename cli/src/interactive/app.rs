//! Interactive documentation viewer using iocraft

use crate::interactive::components::logo::SURAKSHA_LOGO_LINES;
use crate::interactive::components::page_view::max_scroll;
use crate::interactive::components::sidebar::SIDEBAR_WIDTH;
use crate::interactive::components::{PageView, Sidebar, StatusLine, SurakshaLogo};
use crate::interactive::router::RouterHandle;
use crate::output::page_lines;
use anyhow::Result;
use iocraft::prelude::*;
use suraksha_core::{Notice, RenderContext, RenderedPage};
use tracing::debug;

/// Everything the app needs from the command that starts it
#[derive(Clone)]
pub struct DocsContext {
    pub handle: RouterHandle,
    pub render_ctx: RenderContext,
    pub title: String,
    /// Shown until the first navigation, e.g. an unknown `--page`
    pub initial_notice: Option<Notice>,
}

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    Open,
    Jump(usize),
    ScrollUp,
    ScrollDown,
    Back,
    Quit,
}

/// Map a key to an action
pub fn key_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Enter | KeyCode::Tab | KeyCode::Right => Some(Action::Open),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::ScrollDown),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => Some(Action::Back),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::Jump(digit as usize - 1)),
        _ => None,
    }
}

/// Page area size in (columns, rows)
fn viewport() -> (usize, usize) {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((100, 30));
    // sidebar, page borders and padding
    let width = (cols as usize).saturating_sub(SIDEBAR_WIDTH as usize + 6);
    // logo, status line, page borders and position line
    let height = (rows as usize).saturating_sub(SURAKSHA_LOGO_LINES.len() + 8);
    (width.max(20), height.max(3))
}

#[derive(Default, Props)]
pub struct DocsAppProps {
    pub context: Option<DocsContext>,
}

/// Main application component: logo header, sidebar, page and status line
#[component]
pub fn DocsApp(mut hooks: Hooks, props: &DocsAppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let context = props.context.clone();

    let page = hooks.use_state(|| {
        context
            .as_ref()
            .map(|c| c.handle.render(&c.render_ctx))
    });
    let cursor = hooks.use_state(|| context.as_ref().map_or(0, |c| c.handle.current_index()));
    let scroll = hooks.use_state(|| 0usize);
    let extra_notice = hooks.use_state(|| {
        context
            .as_ref()
            .and_then(|c| c.initial_notice.as_ref())
            .map(ToString::to_string)
    });
    let should_exit = hooks.use_state(|| false);

    let entries = context
        .as_ref()
        .map(|c| c.handle.entries())
        .unwrap_or_default();

    // Handle terminal events
    hooks.use_terminal_events({
        let context = context.clone();
        let count = entries.len();
        let mut page = page;
        let mut cursor = cursor;
        let mut scroll = scroll;
        let mut extra_notice = extra_notice;
        let mut should_exit = should_exit;
        move |event| {
            let TerminalEvent::Key(KeyEvent { code, kind, .. }) = event else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }
            let Some(action) = key_action(code) else {
                return;
            };
            let Some(context) = &context else {
                if action == Action::Quit {
                    should_exit.set(true);
                }
                return;
            };

            let mut show = move |rendered: RenderedPage, index: usize| {
                debug!("Showing page '{}'", rendered.name);
                page.set(Some(rendered));
                cursor.set(index);
                scroll.set(0);
                extra_notice.set(None);
            };

            match action {
                Action::Quit => should_exit.set(true),
                Action::CursorUp if count > 0 => cursor.set((cursor.get() + count - 1) % count),
                Action::CursorDown if count > 0 => cursor.set((cursor.get() + 1) % count),
                Action::Open | Action::Jump(_) => {
                    let index = match action {
                        Action::Jump(index) => index,
                        _ => cursor.get(),
                    };
                    match context.handle.select_index(index) {
                        Ok(()) => show(context.handle.render(&context.render_ctx), index),
                        Err(e) => extra_notice.set(Some(e.to_string())),
                    }
                }
                Action::Back => {
                    if context.handle.go_back() {
                        let index = context.handle.current_index();
                        show(context.handle.render(&context.render_ctx), index);
                    } else {
                        extra_notice.set(Some("No earlier page in history".to_string()));
                    }
                }
                Action::ScrollUp => {
                    let (_, height) = viewport();
                    scroll.set(scroll.get().saturating_sub(height));
                }
                Action::ScrollDown => {
                    let (width, height) = viewport();
                    let total = page
                        .read()
                        .as_ref()
                        .map_or(0, |p| page_lines(p, width).len());
                    scroll.set((scroll.get() + height).min(max_scroll(total, height)));
                }
                Action::CursorUp | Action::CursorDown => {}
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let (width, height) = viewport();
    let current = page.read().clone();
    let lines = current
        .as_ref()
        .map(|p| page_lines(p, width))
        .unwrap_or_default();
    let notices: Vec<String> = extra_notice
        .read()
        .iter()
        .cloned()
        .chain(
            current
                .iter()
                .flat_map(|p| p.notices.iter().map(ToString::to_string)),
        )
        .collect();
    let active = context.as_ref().map_or(0, |c| c.handle.current_index());
    let title = context.as_ref().map(|c| c.title.clone()).unwrap_or_default();

    element! {
        View(
            key: "docs-app",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(margin_bottom: 1) {
                SurakshaLogo(title: title)
            }
            View(flex_direction: FlexDirection::Row, flex_grow: 1.0) {
                Sidebar(entries: entries, cursor: cursor.get(), active: active)
                PageView(lines: lines, scroll: scroll.get(), height: height)
            }
            StatusLine(notices: notices)
        }
    }
}

/// Run the full-screen viewer until the user quits
pub async fn run_docs_app(context: DocsContext) -> Result<()> {
    element!(DocsApp(context: Some(context))).fullscreen().await?;
    Ok(())
}
