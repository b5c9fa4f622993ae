use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{celebration::Celebration, round::Outcome, snapshot::Snapshot};

const TITLE: &str = "Field of Wonders";
const LEGEND: &str = "type letters to guess / (tab) mode / (space) new round / (esc)ape";
const HORIZONTAL_MARGIN: u16 = 2;
const LOW_TIME_SECS: u64 = 10;

/// Whole-screen view of one snapshot, with the win celebration on top
pub struct Board<'a> {
    pub snapshot: &'a Snapshot,
    pub celebration: &'a Celebration,
}

impl<'a> Board<'a> {
    pub fn new(snapshot: &'a Snapshot, celebration: &'a Celebration) -> Self {
        Self {
            snapshot,
            celebration,
        }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.snapshot;
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // padding
                Constraint::Length(2), // question
                Constraint::Min(5),    // board
                Constraint::Length(2), // end-of-round message
                Constraint::Length(1), // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(TITLE, bold_style.fg(Color::Cyan)))
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Question: ", bold_style),
            Span::styled(snap.question.as_str(), Style::default().fg(Color::LightBlue)),
        ]))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(rows[2], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ])
            .split(rows[3]);

        render_status(snap, columns[0], buf);
        render_word(snap, columns[1], buf);
        render_history(snap, columns[2], buf);

        if let Some(message) = &snap.message {
            let color = match snap.outcome {
                Outcome::Won => Color::Green,
                _ => Color::Red,
            };
            Paragraph::new(Span::styled(message.as_str(), bold_style.fg(color)))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(rows[4], buf);
        }

        Paragraph::new(Span::styled(LEGEND, italic_style.patch(dim_style)))
            .alignment(Alignment::Center)
            .render(rows[5], buf);

        if self.celebration.is_active() {
            render_celebration(self.celebration, area, buf);
        }
    }
}

fn render_status(snap: &Snapshot, area: Rect, buf: &mut Buffer) {
    let attempts_style = if snap.attempts_left <= 2 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Attempts left: {}", snap.attempts_left),
            attempts_style,
        )),
        Line::from(Span::styled(
            snap.wrong_letters_text(),
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(format!("Mode: {}", snap.difficulty_label())),
        Line::from(format!("Score: {}", snap.total_score)),
    ];

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Round"))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_word(snap: &Snapshot, area: Rect, buf: &mut Buffer) {
    let word_style = Style::default()
        .add_modifier(Modifier::BOLD)
        .fg(match snap.outcome {
            Outcome::Playing => Color::White,
            Outcome::Won => Color::Green,
            Outcome::Lost | Outcome::TimedOut => Color::Red,
        });

    // rows needed when the word is wider than the column
    let width = area.width.max(1) as usize;
    let word_lines = snap.masked_word.width().div_ceil(width).max(1) as u16;
    let top = area.height.saturating_sub(word_lines) / 2;
    let word_area = Rect {
        y: area.y + top,
        height: word_lines.min(area.height),
        ..area
    };

    Paragraph::new(Span::styled(snap.masked_word.as_str(), word_style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(word_area, buf);
}

fn render_history(snap: &Snapshot, area: Rect, buf: &mut Buffer) {
    let block = Block::default().borders(Borders::ALL).title("Session");
    let inner = block.inner(area);
    block.render(area, buf);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let timer_style = if snap.outcome == Outcome::Playing && snap.remaining_secs <= LOW_TIME_SECS
    {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Paragraph::new(Span::styled(
        format!("Time: {} s", snap.remaining_secs),
        timer_style,
    ))
    .render(parts[0], buf);

    let mut lines = vec![Line::from(Span::styled(
        "Guessed words:",
        Style::default().add_modifier(Modifier::UNDERLINED),
    ))];
    lines.extend(
        snap.guessed_words
            .iter()
            .map(|w| Line::from(Span::styled(w.as_str(), Style::default().fg(Color::LightBlue)))),
    );

    // keep the newest words visible once the list outgrows the panel
    let scroll = lines.len().saturating_sub(parts[1].height as usize) as u16;
    Paragraph::new(lines)
        .scroll((scroll, 0))
        .render(parts[1], buf);
}

fn render_celebration(celebration: &Celebration, area: Rect, buf: &mut Buffer) {
    let colors = [
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::LightYellow,
    ];

    for particle in &celebration.particles {
        if particle.x < 0.0 || particle.y < 0.0 {
            continue;
        }
        let (x, y) = (particle.x as u16, particle.y as u16);
        if x >= area.width || y >= area.height {
            continue;
        }

        let color = colors[particle.color_index % colors.len()];
        let style = if particle.is_letter() {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else if particle.age / particle.max_age > 0.7 {
            Style::default().fg(color).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(color)
        };

        if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
            cell.set_symbol(&particle.symbol.to_string());
            cell.set_style(style);
        }
    }
}
