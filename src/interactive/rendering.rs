//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use crate::helper::Mode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(6), // Messages
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_knowledge(f, app, main_chunks[0]);
    render_suggestions(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE HELPER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Guess tiles on top, derived constraints below
fn render_knowledge(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let history = app.session.history();
    let lines: Vec<Line> = if history.is_empty() {
        vec![Line::from("No guesses yet")]
    } else {
        history
            .all()
            .iter()
            .enumerate()
            .map(|(i, guess)| {
                let mut spans = vec![Span::raw(format!("{}. ", i + 1))];
                for (&letter, mark) in guess.word().chars().iter().zip(guess.feedback().marks()) {
                    let bg = match mark {
                        Mark::Green => Color::Green,
                        Mark::Yellow => Color::Yellow,
                        Mark::Black => Color::DarkGray,
                    };
                    spans.push(Span::styled(
                        format!(" {} ", char::from(letter).to_ascii_uppercase()),
                        Style::default()
                            .fg(Color::Black)
                            .bg(bg)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };

    let guesses = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(guesses, chunks[0]);

    let constraints = app.session.constraints().to_string();
    let known = Paragraph::new(constraints)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Known ").borders(Borders::ALL));
    f.render_widget(known, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_suggestion_list(f, app, Mode::Solve, &app.solve_suggestions, chunks[0]);
    render_suggestion_list(f, app, Mode::Info, &app.info_suggestions, chunks[1]);
}

fn render_suggestion_list(
    f: &mut Frame,
    app: &App,
    mode: Mode,
    suggestions: &[(String, f64)],
    area: Rect,
) {
    let title = match mode {
        Mode::Solve => format!(" Likely answers ({} candidates) ", app.candidates),
        Mode::Info => " Information probes ".to_string(),
    };
    let border_color = if app.focus == mode {
        Color::Yellow
    } else {
        Color::Gray
    };

    let items: Vec<ListItem> = suggestions
        .iter()
        .map(|(word, score)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", word.to_uppercase()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{score:>9.3}"), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match &app.input_mode {
        InputMode::Command => (" Command (type 'help') ".to_string(), Color::Yellow),
        InputMode::AddWord => (" Word you guessed | ESC to cancel ".to_string(), Color::Cyan),
        InputMode::AddFeedback(word) => (
            format!(" Feedback for {} (G/Y/B) | ESC to cancel ", word.to_uppercase()),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = format!(
        "Dictionary: {} words | Guesses: {} | Candidates: {} | Enter: submit  Esc: cancel  Ctrl-C: quit",
        app.session.dictionary().len(),
        app.session.history().len(),
        app.candidates
    );
    let bar = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ReplConfig;
    use crate::core::Word;
    use crate::helper::Session;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_panels_and_guesses() {
        let words = ["plane", "sleek", "sleep", "slept", "crane"];
        let session = Session::new(words.iter().map(|w| Word::new(*w).unwrap()).collect());
        let mut app = App::new(session, ReplConfig::default());
        app.input_buffer = "add slate ggbby".to_string();
        app.submit();

        let text = screen(&app);
        assert!(text.contains("Likely answers (2 candidates)"));
        assert!(text.contains("Information probes"));
        assert!(text.contains("SLEEK"));
        assert!(text.contains("s in position 1"));
    }
}
