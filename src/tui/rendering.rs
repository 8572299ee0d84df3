use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, Outcome, StatusMessage};
use super::layout::{AppLayout, dialog_area};
use super::theme::{Palette, Theme, band_color};
use crate::converter::ScaleReading;
use crate::models::{ConversionDirection, HistoryLog};
use crate::utils::sanitize_label;

/// Everything the renderer needs from the app, borrowed for one frame
pub struct RenderState<'a> {
    pub input: &'a str,
    pub direction: ConversionDirection,
    pub outcome: &'a Outcome,
    pub scale: ScaleReading,
    pub history: &'a HistoryLog,
    pub theme: Theme,
    /// Open confirmation prompt, if any
    pub prompt: Option<&'a str>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let palette = state.theme.palette();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let layout = AppLayout::new(area);
    render_header(frame, layout.header_area, state.theme, &palette);
    render_input(frame, layout.input_area, state.input, state.direction, &palette);
    render_result(frame, layout.result_area, state.outcome, &palette);
    render_scale(frame, layout.scale_area, state.scale, &palette);
    render_history(frame, layout.history_area, state.history, &palette);
    render_status_bar(frame, layout.status_area, state.status_message, &palette);

    if let Some(prompt) = state.prompt {
        render_prompt(frame, area, prompt, &palette);
    }
}

fn bordered<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .title(title)
}

fn render_header(frame: &mut Frame, area: Rect, theme: Theme, palette: &Palette) {
    let line = Line::from(vec![
        Span::styled(
            " 🌡 Temperature Converter ",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", theme.switch_label()), Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    direction: ConversionDirection,
    palette: &Palette,
) {
    let line = Line::from(vec![
        Span::raw(format!(" {}", input)),
        Span::styled("▏", Style::default().fg(palette.accent)),
        Span::styled(
            format!(" {}", direction.source_unit()),
            Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
        ),
    ]);
    let title = format!(" Temperature ({}) ", direction);
    frame.render_widget(Paragraph::new(line).block(bordered(&title, palette)), area);
}

fn render_result(frame: &mut Frame, area: Rect, outcome: &Outcome, palette: &Palette) {
    let (text, style) = match outcome {
        Outcome::Idle => {
            ("Enter a temperature and press Enter".to_string(), Style::default().fg(palette.muted))
        }
        Outcome::Converted(conversion) => (
            format!("{} = {}", conversion.from_label(), conversion.to_label()),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Outcome::Invalid(e) => (e.hint(), Style::default().fg(palette.error)),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(bordered(" Result ", palette));
    frame.render_widget(paragraph, area);
}

fn render_scale(frame: &mut Frame, area: Rect, scale: ScaleReading, palette: &Palette) {
    let gauge = Gauge::default()
        .block(bordered(" Scale ", palette))
        .gauge_style(Style::default().fg(band_color(scale.band)).bg(palette.background))
        .ratio(scale.ratio())
        .label(format!("{:.0}%", scale.percent));
    frame.render_widget(gauge, area);
}

fn render_history(frame: &mut Frame, area: Rect, history: &HistoryLog, palette: &Palette) {
    let block = bordered(" History ", palette);

    if history.is_empty() {
        let empty = Paragraph::new("No conversion history yet")
            .style(Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = history
        .iter()
        .map(|record| {
            // Labels come from disk and may have been tampered with
            let conversion = format!(
                "{} → {}",
                sanitize_label(record.from_label()),
                sanitize_label(record.to_label())
            );
            let stamp = format!(
                "  {} • {}",
                sanitize_label(record.timestamp()),
                sanitize_label(record.date())
            );
            ListItem::new(Line::from(vec![
                Span::styled(conversion, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(stamp, Style::default().fg(palette.muted)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_message: Option<&StatusMessage>,
    palette: &Palette,
) {
    let (text, style) = match status_message {
        Some(message) => {
            let color = match message.message_type {
                MessageType::Success => palette.accent,
                MessageType::Info => palette.text,
            };
            (format!(" {} ", message.text), Style::default().fg(color))
        }
        None => (
            " Enter: convert | Tab: direction | F1-F5: quick values | Ctrl+L: clear history | \
             Esc: clear | Ctrl+C: quit "
                .to_string(),
            Style::default().fg(palette.muted),
        ),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str, palette: &Palette) {
    let dialog = dialog_area(area, 50, 6);
    let text = Text::from(vec![
        Line::from(prompt.to_string()),
        Line::from(""),
        Line::from(Span::styled("y: yes    n: no", Style::default().fg(palette.muted))),
    ]);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(palette.background).fg(palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Confirm "),
        );

    frame.render_widget(Clear, dialog);
    frame.render_widget(paragraph, dialog);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::converter::convert_value;
    use crate::error::ValidationError;
    use crate::models::{Conversion, HistoryRecord};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn draw(outcome: &Outcome, history: &HistoryLog, prompt: Option<&str>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let state = RenderState {
            input: "100",
            direction: ConversionDirection::CelsiusToFahrenheit,
            outcome,
            scale: ScaleReading::default(),
            history,
            theme: Theme::Dark,
            prompt,
            status_message: None,
        };
        terminal.draw(|f| render_ui(f, &state)).unwrap();
        buffer_text(&terminal)
    }

    fn conversion() -> Conversion {
        let direction = ConversionDirection::CelsiusToFahrenheit;
        Conversion { input: 100.0, direction, result: convert_value(100.0, direction) }
    }

    #[test]
    fn test_render_idle_with_empty_history() {
        let text = draw(&Outcome::Idle, &HistoryLog::new(), None);
        assert!(text.contains("No conversion history yet"));
        assert!(text.contains("Enter a temperature"));
    }

    #[test]
    fn test_render_conversion_and_history() {
        let mut history = HistoryLog::new();
        history.push_front(HistoryRecord::new("100°C", "212°F"));

        let text = draw(&Outcome::Converted(conversion()), &history, None);
        assert!(text.contains("100°C = 212°F"));
        assert!(text.contains("100°C → 212°F"));
    }

    #[test]
    fn test_render_validation_error() {
        let text = draw(&Outcome::Invalid(ValidationError::NotANumber), &HistoryLog::new(), None);
        assert!(text.contains("Please enter a valid number"));
    }

    #[test]
    fn test_render_prompt_dialog() {
        let text = draw(&Outcome::Idle, &HistoryLog::new(), Some("Clear everything?"));
        assert!(text.contains("Clear everything?"));
        assert!(text.contains("Confirm"));
    }

    #[test]
    fn test_render_history_strips_escape_codes() {
        let mut history = HistoryLog::new();
        history.push_front(HistoryRecord::new("\x1b[31m5°C", "41°F"));

        let text = draw(&Outcome::Idle, &history, None);
        assert!(text.contains("5°C → 41°F"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_render_status_message() {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        let message = StatusMessage {
            text: "✓ History cleared".to_string(),
            message_type: MessageType::Success,
            expires_at: std::time::Instant::now(),
        };
        terminal
            .draw(|f| {
                let area = f.area();
                render_status_bar(f, area, Some(&message), &Theme::Light.palette());
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("History cleared"));
    }

    #[test]
    fn test_render_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        let history = HistoryLog::new();
        let state = RenderState {
            input: "",
            direction: ConversionDirection::FahrenheitToCelsius,
            outcome: &Outcome::Idle,
            scale: ScaleReading::default(),
            history: &history,
            theme: Theme::Light,
            prompt: Some(CONFIRM_PROMPT),
            status_message: None,
        };
        // Just verify it doesn't panic
        terminal.draw(|f| render_ui(f, &state)).unwrap();
    }

    const CONFIRM_PROMPT: &str = "This temperature seems unusually high. Continue anyway?";
}
