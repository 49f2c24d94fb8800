//! Overlay rendering (error notification, gist, help popup, input prompt)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{InputMode, UiState, SPEED_PRESETS};
use super::utils::{centered_rect, wrapped_height};

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(2) as usize;

        // Height: top border (1) + error lines + bottom border (1)
        let popup_height = 2 + wrapped_height(error_msg, inner_width);
        let popup_area = centered_rect(area, popup_width, popup_height);

        // Clear the area behind the popup first
        frame.render_widget(Clear, popup_area);

        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(error_widget, popup_area);
    }
}

pub fn render_summary(frame: &mut Frame, summary: &[String]) {
    let area = frame.area();
    let popup_width = 72.min(area.width.saturating_sub(4));
    // borders + the "NN. " prefix
    let inner_width = popup_width.saturating_sub(6) as usize;

    let lines: Vec<Line> = summary
        .iter()
        .enumerate()
        .flat_map(|(i, sentence)| {
            [
                Line::from(vec![
                    Span::styled(
                        format!("{:>2}. ", i + 1),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(sentence.clone(), Style::default().fg(Color::White)),
                ]),
                Line::from(""),
            ]
        })
        .collect();

    let body_height: u16 = summary
        .iter()
        .map(|s| wrapped_height(s, inner_width) + 1)
        .sum();
    let popup_area = centered_rect(area, popup_width, body_height + 2);

    frame.render_widget(Clear, popup_area);

    let gist = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Gist View (S or Esc to close) ")
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(gist, popup_area);
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let presets = SPEED_PRESETS.map(|wpm| wpm.to_string()).join(" / ");
    let keybindings = [
        ("", "── Reading ──"),
        ("Space", "Play / Pause"),
        ("Enter / P", "Play / Pause"),
        ("R", "Restart from the first word"),
        ("→ / ↑ / +", "Faster (+50 wpm)"),
        ("← / ↓ / -", "Slower (-50 wpm)"),
        ("1 - 6", presets.as_str()),
        ("", ""),
        ("", "── Text ──"),
        ("T", "Edit text (Ctrl+S to read)"),
        ("U / O", "Open a .txt or .md file"),
        ("S", "Gist view"),
        ("", ""),
        ("", "── General ──"),
        ("H / I", "Toggle this help"),
        ("Esc", "Close overlay"),
        ("Q", "Quit"),
        ("", ""),
        ("", "The red letter is the anchor. Keep your eyes on the"),
        ("", "tick marks and let the words come to you."),
    ];

    let popup_area = centered_rect(area, 62, keybindings.len() as u16 + 2);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header, note or empty line
                Line::from(Span::styled(
                    format!("{:^58}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}

pub fn render_input_prompt(frame: &mut Frame, mode: InputMode, buffer: &str) {
    let area = frame.area();

    let (title, popup_height) = match mode {
        InputMode::Text => (
            " Edit text (Ctrl+Enter or Ctrl+S to read, Ctrl+U to clear, Esc to cancel) ",
            area.height / 2,
        ),
        InputMode::FilePath => (" Open file (path, Enter to open) ", 3),
    };
    let popup_area = centered_rect(area, 72, popup_height.max(3));

    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = buffer
        .split('\n')
        .map(|line| Line::from(Span::styled(line.replace('\t', "    "), Style::default().fg(Color::White))))
        .collect();
    // Cursor marker at the end of the buffer
    if let Some(last) = lines.last_mut() {
        last.push_span(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }

    // Keep the tail of a long paste in view
    let inner_width = popup_area.width.saturating_sub(2) as usize;
    let inner_height = popup_area.height.saturating_sub(2);
    let scroll = wrapped_height(buffer, inner_width).saturating_sub(inner_height);

    let prompt = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title)
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(prompt, popup_area);
}
