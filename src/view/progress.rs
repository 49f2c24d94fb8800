//! Status bar and progress bar rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::ReaderView;
use super::utils::format_duration;

pub fn render_status_bar(frame: &mut Frame, area: Rect, view: &ReaderView) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Title and source
            Constraint::Length(16), // Speed
        ])
        .split(area);

    let state_text = if view.playback.is_running {
        "▶ reading"
    } else if view.playback.finished {
        "■ finished"
    } else {
        "⏸ paused"
    };

    let title = Paragraph::new(format!("{}  ·  {}", view.source_label, state_text))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" staccato ")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(title, chunks[0]);

    let speed = Paragraph::new(format!("{} wpm", view.playback.speed))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Speed ").padding(Padding::horizontal(1)));
    frame.render_widget(speed, chunks[1]);
}

pub fn render_progress_bar(frame: &mut Frame, area: Rect, view: &ReaderView) {
    let playback = &view.playback;

    let position = if playback.total_words == 0 {
        0
    } else {
        playback.current_index + 1
    };
    let title = format!(" Word {} / {} ", position, playback.total_words);
    let label = format!(
        "{:.0}%  ·  {} left",
        playback.progress,
        format_duration(view.remaining_ms.round() as u64)
    );
    let hints = " Space play/pause | ←/→ speed | R restart | S gist | H help ";

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(Line::from(hints).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .ratio((playback.progress / 100.0).clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, area);
}
