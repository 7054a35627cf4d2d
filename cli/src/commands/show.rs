//! Single page rendering command

use super::Site;
use crate::config::CliConfigLoader;
use crate::interactive::text_utils::get_terminal_width;
use crate::output::{format_notice, write_page, Console};
use anyhow::Result;
use suraksha_core::SessionManager;

/// Render one page to stdout. Unknown names show the first page.
pub async fn show_command(
    config_loader: CliConfigLoader,
    page: String,
    plain: bool,
    width: Option<usize>,
) -> Result<()> {
    let site = Site::load(&config_loader).await?;
    let sessions = SessionManager::new(site.registry.clone());

    let (session, selection_notice) = sessions.create_session_at(&page);
    let rendered = sessions.render(session, &site.render_ctx)?;
    sessions.remove(session);

    let colors = !plain;
    for notice in selection_notice.iter().chain(&rendered.notices) {
        eprintln!("{}", format_notice(&notice.message, colors));
    }

    let width = width.unwrap_or_else(get_terminal_width);
    write_page(&Console, &rendered, width, colors);
    Ok(())
}
