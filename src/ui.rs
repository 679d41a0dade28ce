use ratatui::{prelude::*, widgets::*};

use crate::constants::WIDE_LAYOUT_MIN_COLS;
use crate::theme::Palette;

/// Layout variant picked from the terminal width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Wide,
}

impl LayoutMode {
    pub fn for_width(width: u16) -> LayoutMode {
        if width >= WIDE_LAYOUT_MIN_COLS {
            LayoutMode::Wide
        } else {
            LayoutMode::Compact
        }
    }

    /// Grid spacing in cells
    pub fn spacing(&self) -> u16 {
        match self {
            LayoutMode::Compact => 0,
            LayoutMode::Wide => 1,
        }
    }
}

/// Renders a labelled text input
pub fn render_input<'a>(
    content: &'a str,
    title: &'a str,
    is_focused: bool,
    palette: &Palette,
) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(palette.focus)
    } else {
        Style::default().fg(palette.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content)
        .style(Style::default().fg(palette.text))
        .block(block)
}

/// On/off switch glyph, e.g. `☾ (●──)`
pub fn render_switch(on: bool, palette: &Palette) -> Line<'static> {
    let (icon, track) = if on { ("☾", "(──●)") } else { ("☀", "(●──)") };
    Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(palette.app_bar_fg).bold()),
        Span::styled(track, Style::default().fg(palette.app_bar_fg)),
    ])
}

/// A button label drawn as a filled chip
pub fn button<'a>(label: &'a str, bg: Color, fg: Color) -> Span<'a> {
    Span::styled(label, Style::default().fg(fg).bg(bg).bold())
}

/// Label split across two colours, approximating a horizontal gradient
pub fn gradient_button(label: &str, start: Color, end: Color, fg: Color) -> Line<'static> {
    let chars: Vec<char> = label.chars().collect();
    let split = chars.len() * 3 / 10;
    let left: String = chars[..split].iter().collect();
    let right: String = chars[split..].iter().collect();
    Line::from(vec![
        Span::styled(left, Style::default().fg(fg).bg(start).bold()),
        Span::styled(right, Style::default().fg(fg).bg(end).bold()),
    ])
}

/// Terminal column of the text cursor inside a bordered input, clamped to its inner edge
pub fn cursor_column(area: Rect, text: &str, cursor: usize) -> u16 {
    let mut end = cursor.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let offset = u16::try_from(text[..end].chars().count()).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(offset).saturating_add(1).min(max_x)
}

/// A rect of `percent_x` × `percent_y` centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A rect of fixed `width` × `height` centered in `r`, clipped to it
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Palette, ThemeMode};

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(LayoutMode::for_width(74), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(75), LayoutMode::Wide);
        assert_eq!(LayoutMode::Compact.spacing(), 0);
        assert_eq!(LayoutMode::Wide.spacing(), 1);
    }

    #[test]
    fn test_centered_fixed_clips_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_fixed(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_fixed(100, 100, area), area);
    }

    #[test]
    fn test_cursor_column_tracks_chars() {
        let area = Rect::new(4, 2, 20, 3);
        assert_eq!(cursor_column(area, "", 0), 5);
        assert_eq!(cursor_column(area, "héllo", 3), 7);
        assert_eq!(cursor_column(area, "héllo", 99), 10);
    }

    #[test]
    fn test_cursor_column_clamps_long_input() {
        let area = Rect::new(u16::MAX - 10, 0, 10, 3);
        let text = "x".repeat(usize::from(u16::MAX) + 5);
        assert_eq!(cursor_column(area, &text, text.len()), u16::MAX - 2);
    }

    #[test]
    fn test_gradient_button_keeps_label() {
        let palette = Palette::for_mode(ThemeMode::Dark);
        let line = gradient_button(" Add User ", palette.accent_start, palette.accent_end, Color::White);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Add User ");
        assert_eq!(line.spans[0].style.bg, Some(palette.accent_start));
    }

    #[test]
    fn test_switch_reflects_state() {
        let palette = Palette::for_mode(ThemeMode::Light);
        let on: String = render_switch(true, &palette).spans.iter().map(|s| s.content.as_ref()).collect();
        let off: String = render_switch(false, &palette).spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(on.starts_with('☾'));
        assert!(off.starts_with('☀'));
    }
}
