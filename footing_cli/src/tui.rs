//! Terminal form: edit any field and the results recompute on each keystroke.
//!
//! Keys: Up/Down (or Tab) select, digits `.` `-` `e` edit, Backspace deletes,
//! Left/Right change the concrete grade, `r` resets, Esc or `q` quits.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use footing_core::format::to_fixed;
use footing_core::{CheckStatus, DesignForm, FieldValue, FootingInput, FormField};

/// Row 0 is the grade selector, rows 1.. are the numeric fields
const ROW_COUNT: usize = FormField::ALL.len() + 1;

const LABEL_WIDTH: usize = 32;

pub struct App {
    form: DesignForm,
    selected: usize,
    buffers: Vec<String>,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(input: &FootingInput) -> Self {
        let form = DesignForm::from_input(input);
        let buffers = field_texts(&form);
        App {
            form,
            selected: 0,
            buffers,
            message: None,
            should_quit: false,
        }
    }

    fn selected_field(&self) -> Option<(usize, FormField)> {
        self.selected
            .checked_sub(1)
            .map(|idx| (idx, FormField::ALL[idx]))
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::BackTab => self.selected = (self.selected + ROW_COUNT - 1) % ROW_COUNT,
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => self.selected = (self.selected + 1) % ROW_COUNT,
            KeyCode::Left if self.selected == 0 => {
                let grade = self.form.inputs().fck.previous();
                self.form.set_grade(grade);
            }
            KeyCode::Right if self.selected == 0 => {
                let grade = self.form.inputs().fck.next();
                self.form.set_grade(grade);
            }
            KeyCode::Char('r') => {
                self.form.reset();
                self.buffers = field_texts(&self.form);
                self.message = None;
            }
            KeyCode::Backspace => {
                if let Some((idx, field)) = self.selected_field() {
                    self.buffers[idx].pop();
                    self.commit(idx, field);
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E') => {
                if let Some((idx, field)) = self.selected_field() {
                    self.buffers[idx].push(c);
                    self.commit(idx, field);
                }
            }
            _ => {}
        }
    }

    /// Push the edit buffer into the form.
    ///
    /// Text that does not parse yet ("-", "1e") counts as an empty field, the
    /// same way a number input reports a blank value for it.
    fn commit(&mut self, idx: usize, field: FormField) {
        match self.form.apply_text(field, &self.buffers[idx]) {
            Ok(()) => self.message = None,
            Err(err) => {
                self.form.set(field, FieldValue::Empty);
                self.message = Some(err.to_string());
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [body, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        let [inputs, results] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);

        self.draw_inputs(frame, inputs);
        self.draw_results(frame, results);

        let help = "↑/↓ select  ←/→ grade  type to edit  ⌫ delete  r reset  q quit";
        frame.render_widget(Paragraph::new(help).style(Style::new().fg(Color::DarkGray)), footer);
    }

    fn draw_inputs(&self, frame: &mut Frame, area: Rect) {
        let highlight = Style::new().fg(Color::Black).bg(Color::Cyan);
        let grade = self.form.inputs().fck;

        let mut lines = vec![
            row_line(
                "Concrete Grade (fck) [MPa]",
                format!("◀ {} ▶", grade),
                self.selected == 0,
                highlight,
            ),
            Line::from(Span::styled(
                format!(
                    "  Design Strength (fcd): {} MPa",
                    to_fixed(grade.design_strength_with_alpha().0, 2)
                ),
                Style::new().fg(Color::DarkGray),
            )),
        ];

        for (idx, field) in FormField::ALL.iter().enumerate() {
            let text = if self.buffers[idx].is_empty() {
                "(empty)".to_string()
            } else {
                self.buffers[idx].clone()
            };
            lines.push(row_line(field.label(), text, self.selected == idx + 1, highlight));
        }

        if let Some(message) = &self.message {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(message.clone(), Style::new().fg(Color::Yellow))));
        }

        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title(" Design Inputs ")),
            area,
        );
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();

        match self.form.result() {
            Some(result) => {
                lines.push(Line::from(format!("Effective Depth (d):  {} mm", result.d)));
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Required Steel Area",
                    Style::new().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!("  As (X-Direction):  {} mm²", result.as_x)));
                lines.push(Line::from(format!("  As (Y-Direction):  {} mm²", result.as_y)));
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Safety Checks",
                    Style::new().add_modifier(Modifier::BOLD),
                )));
                lines.push(check_line("  Wide Beam Shear Check  ", result.wide_beam_status));
                lines.push(check_line("  Punching Shear Check   ", result.punching_status));
            }
            None => lines.push(Line::from("No result yet")),
        }

        if let Some(field) = self.form.inputs().first_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("{} is empty: showing the previous result", field.key()),
                Style::new().fg(Color::Yellow),
            )));
        } else if let Ok(input) = self.form.inputs().to_input() {
            let warnings = input.warnings();
            if !warnings.is_empty() {
                lines.push(Line::default());
            }
            for warning in warnings {
                lines.push(Line::from(Span::styled(
                    format!("! {}", warning),
                    Style::new().fg(Color::Yellow),
                )));
            }
        }

        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title(" Analysis Results ")),
            area,
        );
    }
}

fn field_texts(form: &DesignForm) -> Vec<String> {
    FormField::ALL
        .iter()
        .map(|field| form.inputs().get(*field).to_string())
        .collect()
}

fn row_line(label: &str, value: String, selected: bool, highlight: Style) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let text = format!("{}{:<width$}{}", marker, label, value, width = LABEL_WIDTH);
    if selected {
        Line::from(Span::styled(text, highlight))
    } else {
        Line::from(text)
    }
}

fn check_line(label: &'static str, status: CheckStatus) -> Line<'static> {
    let (badge, color) = match status {
        CheckStatus::Safe => ("SAFE ✅", Color::Green),
        CheckStatus::Unsafe => ("UNSAFE ❌", Color::Red),
    };
    Line::from(vec![
        Span::raw(label),
        Span::styled(badge, Style::new().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

fn run_loop(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| app.draw(frame))?;
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}

/// Run the form until the user quits.
pub fn run(input: &FootingInput) -> io::Result<()> {
    let mut app = App::new(input);
    let mut terminal = ratatui::init();
    let outcome = run_loop(&mut terminal, &mut app);
    ratatui::restore();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn select(app: &mut App, field: FormField) {
        let idx = FormField::ALL.iter().position(|f| *f == field).unwrap();
        app.selected = idx + 1;
    }

    #[test]
    fn test_buffers_start_with_values() {
        let app = App::new(&FootingInput::default());
        assert_eq!(app.buffers[0], "326.11");
        assert_eq!(app.buffers[4], "600");
    }

    #[test]
    fn test_clearing_field_keeps_result() {
        let mut app = App::new(&FootingInput::default());
        select(&mut app, FormField::Vsd);
        let before = app.form.result().cloned();

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert!(app.form.inputs().vsd.is_empty());
        assert_eq!(app.form.result().cloned(), before);

        for c in "400".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.form.inputs().vsd, FieldValue::Number(400.0));
        assert_eq!(app.form.result().unwrap().wide_beam_status, CheckStatus::Unsafe);
    }

    #[test]
    fn test_partial_number_counts_as_empty() {
        let mut app = App::new(&FootingInput::default());
        select(&mut app, FormField::Msdy);
        for _ in 0..6 {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Char('-'));
        assert!(app.form.inputs().msdy.is_empty());
        assert!(app.message.is_some());

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.form.inputs().msdy, FieldValue::Number(-5.0));
        assert!(app.message.is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = App::new(&FootingInput {
            vsd: 400.0,
            ..FootingInput::default()
        });
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.buffers[8], "50");
        assert_eq!(app.form, DesignForm::new());
    }

    #[test]
    fn test_grade_row_cycles() {
        let mut app = App::new(&FootingInput::default());
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.inputs().fck.display_name(), "C30/37");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.form.inputs().fck.display_name(), "C20/25");
    }

    #[test]
    fn test_selection_wraps_and_quits() {
        let mut app = App::new(&FootingInput::default());
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, ROW_COUNT - 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_draw_renders_results() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let app = App::new(&FootingInput::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Effective Depth (d):  542 mm"));
        assert!(text.contains("1414.28"));
        assert!(text.contains("C25/30"));
    }
}
