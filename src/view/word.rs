//! RSVP word rendering
//!
//! The anchor letter always lands on the middle column of the area so the
//! eye never has to move between words.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{AnchorSplit, ReaderView};

const GUIDE_TICK: &str = "│";

pub fn render_word(frame: &mut Frame, area: Rect, view: &ReaderView) {
    let block = Block::default().borders(Borders::LEFT | Borders::RIGHT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let center = inner.width as usize / 2;
    let word_row = inner.y + inner.height / 2;

    let lines: Vec<Line> = if view.playback.total_words == 0 {
        vec![Line::from(Span::styled(
            "Nothing to read. Press T to paste text or U to open a file.",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center)]
    } else {
        vec![
            guide_line(center),
            Line::from(""),
            anchored_line(&view.word, center),
            Line::from(""),
            guide_line(center),
        ]
    };

    let height = (lines.len() as u16).min(inner.height);
    let top = word_row.saturating_sub(height / 2).max(inner.y);
    let word_area = Rect {
        x: inner.x,
        y: top,
        width: inner.width,
        height,
    };

    frame.render_widget(Paragraph::new(lines), word_area);
}

fn guide_line(center: usize) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(center)),
        Span::styled(GUIDE_TICK, Style::default().fg(Color::DarkGray)),
    ])
}

/// Pad the left part so the anchor character sits at `center`.
fn anchored_line(word: &AnchorSplit, center: usize) -> Line<'static> {
    let before_width = word.before.chars().count();
    let padding = center.saturating_sub(before_width);
    // Clip the head of very long words rather than shift the anchor
    let before: String = word.before.chars().skip(before_width.saturating_sub(center)).collect();

    Line::from(vec![
        Span::raw(" ".repeat(padding)),
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled(
            word.anchor.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(word.after.clone(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_anchor_lands_on_center_column() {
        let line = anchored_line(&AnchorSplit::new("reading"), 10);
        let text = plain(&line);
        assert_eq!(text.chars().nth(10), Some('a'));
        assert_eq!(text.trim(), "reading");
    }

    #[test]
    fn test_long_head_is_clipped() {
        let line = anchored_line(&AnchorSplit::new("incomprehensibilities"), 3);
        let text = plain(&line);
        assert_eq!(text.chars().nth(3), Some('e'));
    }

    #[test]
    fn test_guide_sits_on_center() {
        let text = plain(&guide_line(4));
        assert_eq!(text, "    │");
    }
}
