//! User Directory TUI - actor-based random-user manager
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - reducer-driven state processing events
//! - Network Layer (Tokio) - async user fetches

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use userdir_tui::app::{AppActor, AppState, EditSession};
use userdir_tui::constants::{APP_NAME, APP_VERSION, DRAWER_WIDTH, NAV_ITEMS};
use userdir_tui::messages::ui_events::key_to_ui_event;
use userdir_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use userdir_tui::models::EditField;
use userdir_tui::network::{create_client, FetchSettings, NetworkActor};
use userdir_tui::theme::{self, Palette};
use userdir_tui::ui::{self, LayoutMode};
use userdir_tui::Config;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    tracing::info!(version = APP_VERSION, api_url = %config.api_url, "Starting");

    // Host preference is sampled once, before the terminal is taken over
    let theme_mode = config.theme.resolve(theme::detect_host_preference());
    tracing::info!(preference = ?config.theme, mode = theme_mode.as_str(), "Theme selected");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(
        create_client(config.timeout()),
        FetchSettings::from(&config),
        net_resp_tx,
    );
    let network_handle = tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(
        AppState::new(theme_mode, config.initial_count),
        net_cmd_tx,
        render_tx,
    );
    let app_handle = tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    let result = run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await;

    // Give the actors a moment to cancel in-flight fetches
    let _ = tokio::time::timeout(Duration::from_millis(500), async {
        let _ = app_handle.await;
        let _ = network_handle.await;
    })
    .await;
    tracing::info!("Stopped");

    result
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.dialog_open(),
                    current_state.drawer_open,
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    if ui_tx.send(event).is_err() || quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let palette = Palette::for_mode(state.theme);
    let layout = LayoutMode::for_width(area.width);

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let banner_height = if state.notification.is_some() { 1 } else { 0 };
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // App bar
            Constraint::Length(banner_height), // Notification
            Constraint::Min(0),                // Grid
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    draw_app_bar(f, state, &palette, main_chunks[0]);
    draw_notification(f, state, &palette, main_chunks[1]);
    draw_grid(f, state, &palette, layout, main_chunks[2]);
    draw_status_bar(f, state, &palette, main_chunks[3]);

    // Overlays
    if state.drawer_open {
        draw_drawer(f, &palette, area);
    }

    if let Some(session) = &state.dialog {
        draw_edit_dialog(f, session, &palette, area);
    }

    if state.show_help {
        draw_help_popup(f, &palette, area);
    }
}

fn draw_app_bar(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let bar_style = Style::default().bg(palette.app_bar_bg).fg(palette.app_bar_fg);
    f.render_widget(Block::default().style(bar_style), area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(" ≡ ", bar_style.bold()),
        Span::styled(format!(" {} ", APP_NAME), bar_style.bold()),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let mut switch = ui::render_switch(state.theme.is_dark(), palette);
    switch.spans.push(Span::styled(" t ", bar_style));
    f.render_widget(Paragraph::new(switch).alignment(Alignment::Right), chunks[1]);
}

fn draw_notification(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    if let Some(note) = &state.notification {
        let text = format!(
            " [{}] {}  (x to dismiss)",
            note.raised_at.format("%H:%M:%S"),
            note.message
        );
        let banner = Paragraph::new(text)
            .style(Style::default().bg(palette.error_bg).fg(palette.error_fg).bold());
        f.render_widget(banner, area);
    }
}

fn draw_grid(f: &mut Frame, state: &RenderState, palette: &Palette, layout: LayoutMode, area: Rect) {
    let spacing = layout.spacing();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(spacing)
        .constraints([
            Constraint::Min(3),           // Table
            Constraint::Length(spacing),  // Gap
            Constraint::Length(1),        // Add User button
        ])
        .split(area);

    draw_user_table(f, state, palette, chunks[0]);

    let button = ui::gradient_button(" + Add User (a) ", palette.accent_start, palette.accent_end, Color::White);
    f.render_widget(Paragraph::new(button).alignment(Alignment::Right), chunks[2]);
}

fn draw_user_table(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" Users ({}) ", state.users.len()));

    if state.users.is_empty() {
        let hint = if state.is_loading() {
            "Loading users..."
        } else {
            "No users. Press 'a' to add one."
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Name", "City", "Gender", "Delete", "Edit"])
        .style(Style::default().fg(palette.header_fg).bold());

    let rows = state.users.iter().map(|user| {
        Row::new(vec![
            Cell::from(user.display_name()),
            Cell::from(user.location.city.clone()),
            Cell::from(user.gender.clone()),
            Cell::from(Line::from(ui::button(" Delete d ", palette.secondary, palette.background))),
            Cell::from(Line::from(ui::button(" Edit e ", palette.primary, palette.background))),
        ])
        .style(Style::default().fg(palette.text))
    });

    let widths = [
        Constraint::Percentage(35),
        Constraint::Percentage(25),
        Constraint::Percentage(14),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.highlight_bg)
                .bold(),
        )
        .highlight_symbol("▶ ")
        .column_spacing(1);

    let mut table_state = TableState::default();
    table_state.select(Some(state.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let status = if state.is_loading() {
        String::from(" Loading users... | Ctrl+X:cancel ")
    } else if state.dialog_open() {
        String::from(" Tab:next field | Enter:save | Esc:cancel ")
    } else {
        let timing = state
            .last_fetch_ms
            .map(|ms| format!(" | last fetch {}ms", ms))
            .unwrap_or_default();
        format!(" ↑↓:select | a:add | e:edit | d:delete | t:theme | m:menu | ?:help | q:quit{} ", timing)
    };

    let bar = Paragraph::new(status).style(Style::default().fg(palette.muted));
    f.render_widget(bar, area);
}

fn draw_drawer(f: &mut Frame, palette: &Palette, area: Rect) {
    let drawer_area = Rect::new(area.x, area.y, DRAWER_WIDTH.min(area.width), area.height);

    let items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .map(|label| ListItem::new(format!("  {}", label)))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(palette.text).bg(palette.background))
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(palette.border))
                .title(" Menu ")
                .title_bottom(Line::from(" any key closes ").style(Style::default().fg(palette.muted))),
        );

    f.render_widget(Clear, drawer_area);
    f.render_widget(list, drawer_area);
}

fn draw_edit_dialog(f: &mut Frame, session: &EditSession, palette: &Palette, area: Rect) {
    let popup_area = ui::centered_fixed(50, 17, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.focus))
        .title(" Edit User ")
        .style(Style::default().bg(palette.background).fg(palette.text));
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (field, chunk) in EditField::ALL.iter().zip(chunks.iter()) {
        let is_focused = *field == session.focused;
        let input = ui::render_input(session.scratch.field(*field), field.label(), is_focused, palette);
        f.render_widget(input, *chunk);

        if is_focused {
            let cursor_x = ui::cursor_column(*chunk, session.scratch.field(*field), session.cursor);
            f.set_cursor_position(Position::new(cursor_x, chunk.y.saturating_add(1)));
        }
    }

    let actions = Line::from(vec![
        ui::button(" Cancel Esc ", palette.muted, palette.background),
        Span::raw("  "),
        ui::button(" Save Enter ", palette.primary, palette.background),
    ]);
    f.render_widget(Paragraph::new(actions).alignment(Alignment::Right), chunks[4]);
}

fn draw_help_popup(f: &mut Frame, palette: &Palette, area: Rect) {
    let popup_area = ui::centered_rect(60, 70, area);

    let help_text = r#"
 USER DIRECTORY - Keyboard Shortcuts

 TABLE
   ↑ / k, ↓ / j       Select user
   a                  Add a random user
   e / Enter          Edit selected user
   d / Delete         Delete selected user
   Ctrl+X             Cancel pending fetches

 EDIT DIALOG
   Tab / ↓            Next field
   Shift+Tab / ↑      Previous field
   ← / →              Move cursor
   Enter              Save
   Esc                Cancel

 GENERAL
   t                  Toggle light/dark theme
   m                  Toggle menu drawer
   x / Esc            Dismiss notification
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(palette.background).fg(palette.text));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
