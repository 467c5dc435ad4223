//! Main UI application
//!
//! One screen: a budget header, four slot panels, and a key-hint
//! footer. A character picker and a pool editor open as overlays.
//! Every keypress maps to a planner transition; refusals land in the
//! status line instead of mutating anything.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::path::Path;

use crate::export::{export_snapshot, SnapshotStyle};
use crate::session::{BudgetMode, Outcome, Planner, Slot, SKILL_SLOTS};

/// Main UI application
pub struct App {
    /// Selected slot: 0 = main, 1..=3 = skill slots
    selected: usize,
    /// Character picker overlay open
    picker_open: bool,
    /// Picker cursor into the catalog
    picker_cursor: usize,
    /// Pool edit buffer, Some while editing
    pool_input: Option<String>,
    /// Transient status line
    status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            selected: 0,
            picker_open: false,
            picker_cursor: 0,
            pool_input: None,
            status: None,
        }
    }

    fn selected_slot(&self) -> Slot {
        if self.selected == 0 {
            Slot::Main
        } else {
            Slot::Skill(self.selected - 1)
        }
    }

    fn note_outcome(&mut self, outcome: Outcome) {
        if let Outcome::Refused(reason) = outcome {
            self.status = Some(reason.to_string());
        } else {
            self.status = None;
        }
    }

    /// Handle keyboard input, returns true if the app should quit
    pub fn handle_input(&mut self, key: KeyEvent, planner: &mut Planner) -> Result<bool> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }
        if self.pool_input.is_some() {
            self.handle_pool_input(key, planner);
            return Ok(false);
        }
        if self.picker_open {
            self.handle_picker_input(key, planner);
            return Ok(false);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.selected = (self.selected + 1) % (SKILL_SLOTS + 1);
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.selected = (self.selected + SKILL_SLOTS) % (SKILL_SLOTS + 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let outcome = planner.raise(self.selected_slot());
                self.note_outcome(outcome);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let outcome = planner.lower(self.selected_slot());
                self.note_outcome(outcome);
            }
            KeyCode::Char('c') => {
                self.picker_open = true;
                self.picker_cursor = 0;
            }
            KeyCode::Char('x') => {
                let outcome = planner.clear_character(self.selected_slot());
                self.note_outcome(outcome);
            }
            KeyCode::Char('m') => {
                let mode = match planner.state().budget.mode {
                    BudgetMode::Free => BudgetMode::Bounded,
                    BudgetMode::Bounded => BudgetMode::Free,
                };
                let outcome = planner.set_mode(mode);
                self.note_outcome(outcome);
            }
            KeyCode::Char('p') => {
                if planner.state().budget.mode == BudgetMode::Bounded {
                    self.pool_input = Some(planner.state().budget.pool.to_string());
                } else {
                    self.status = Some("Pool is derived in free mode".to_string());
                }
            }
            KeyCode::Char('e') => {
                match export_snapshot(
                    &planner.summarize(),
                    Path::new("."),
                    &SnapshotStyle::default(),
                ) {
                    Ok(path) => self.status = Some(format!("Exported {}", path.display())),
                    Err(e) => {
                        log::warn!("Snapshot export failed: {}", e);
                        self.status = Some(format!("Export failed: {}", e));
                    }
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_pool_input(&mut self, key: KeyEvent, planner: &mut Planner) {
        let Some(buffer) = self.pool_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() && buffer.len() < 7 => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                // Non-numeric or empty input keeps the prior pool
                match buffer.parse::<u32>() {
                    Ok(pool) => {
                        let outcome = planner.set_pool(pool);
                        self.note_outcome(outcome);
                    }
                    Err(_) => self.status = Some("Invalid pool value, keeping previous".to_string()),
                }
                self.pool_input = None;
            }
            KeyCode::Esc => self.pool_input = None,
            _ => {}
        }
    }

    fn handle_picker_input(&mut self, key: KeyEvent, planner: &mut Planner) {
        let roster_len = planner.data().characters.characters.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.picker_cursor > 0 {
                    self.picker_cursor -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.picker_cursor + 1 < roster_len {
                    self.picker_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = planner
                    .data()
                    .characters
                    .characters
                    .get(self.picker_cursor)
                    .map(|c| c.id.clone());
                if let Some(id) = id {
                    let outcome = planner.assign_character(self.selected_slot(), &id);
                    self.note_outcome(outcome);
                }
                self.picker_open = false;
            }
            KeyCode::Char('x') => {
                let outcome = planner.clear_character(self.selected_slot());
                self.note_outcome(outcome);
                self.picker_open = false;
            }
            KeyCode::Esc => self.picker_open = false,
            _ => {}
        }
    }

    /// Render the whole screen
    pub fn render(&self, frame: &mut Frame, planner: &Planner) {
        let summary = planner.summarize();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(10),
                Constraint::Length(2),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0], planner, &summary);
        self.render_slots(frame, chunks[1], planner, &summary);
        self.render_footer(frame, chunks[2]);

        if self.picker_open {
            self.render_picker(frame, planner);
        }
        if let Some(buffer) = &self.pool_input {
            self.render_pool_editor(frame, buffer);
        }
    }

    fn render_header(
        &self,
        frame: &mut Frame,
        area: Rect,
        planner: &Planner,
        summary: &crate::session::Summary,
    ) {
        let budget = &summary.budget;
        let remaining_style = if budget.overspent() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("Total multiplier: {}%", summary.total_multiplier),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("[{} mode]", planner.state().budget.mode.name()),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("Main {} ", budget.consumed_main),
                    Style::default().fg(Color::Rgb(245, 158, 11)),
                ),
                Span::styled(
                    format!("Skill {} ", budget.consumed_skill),
                    Style::default().fg(Color::Rgb(96, 165, 250)),
                ),
                Span::styled(format!("Pool {} ", budget.pool), Style::default().fg(Color::Gray)),
                Span::styled(format!("Remaining {}", budget.remaining), remaining_style),
            ]),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Shard Allocation ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_slots(
        &self,
        frame: &mut Frame,
        area: Rect,
        planner: &Planner,
        summary: &crate::session::Summary,
    ) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        self.render_main_panel(frame, columns[0], planner, summary);
        for i in 0..SKILL_SLOTS {
            self.render_skill_panel(frame, columns[i + 1], planner, summary, i);
        }
    }

    fn panel_block(&self, index: usize, title: &str) -> Block<'static> {
        let style = if self.selected == index {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(format!(" {} ", title))
    }

    fn character_line(&self, planner: &Planner, slot: Slot) -> Line<'static> {
        match planner.character_for(slot) {
            Some(c) => {
                let (r, g, b) = c.color;
                Line::from(Span::styled(
                    format!("[{}] {}", c.icon, c.name),
                    Style::default().fg(Color::Rgb(r, g, b)),
                ))
            }
            None => Line::from(Span::styled("(no character)", Style::default().fg(Color::DarkGray))),
        }
    }

    fn cost_lines(control: &crate::session::SlotControl) -> Vec<Line<'static>> {
        let next = match control.next_cost {
            Some(cost) => {
                let style = if control.can_raise {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Red)
                };
                Span::styled(format!("Next: {}", cost), style)
            }
            None => Span::styled("MAX", Style::default().fg(Color::DarkGray)),
        };
        vec![
            Line::from(Span::styled(
                format!("Spent: {}", control.consumed),
                Style::default().fg(Color::Gray),
            )),
            Line::from(next),
        ]
    }

    fn render_main_panel(
        &self,
        frame: &mut Frame,
        area: Rect,
        planner: &Planner,
        summary: &crate::session::Summary,
    ) {
        let main = &summary.main;
        let mut lines = vec![
            self.character_line(planner, Slot::Main),
            Line::from(Span::styled(
                main.label.clone(),
                Style::default()
                    .fg(Color::Rgb(245, 158, 11))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("x {}%", main.multiplier),
                Style::default().fg(Color::White),
            )),
        ];
        lines.extend(Self::cost_lines(&main.control));
        frame.render_widget(
            Paragraph::new(lines).block(self.panel_block(0, "MAIN")),
            area,
        );
    }

    fn render_skill_panel(
        &self,
        frame: &mut Frame,
        area: Rect,
        planner: &Planner,
        summary: &crate::session::Summary,
        index: usize,
    ) {
        let skill = &summary.skills[index];
        let mut level_spans = vec![Span::styled(
            skill.label.clone(),
            Style::default()
                .fg(Color::Rgb(96, 165, 250))
                .add_modifier(Modifier::BOLD),
        )];
        if skill.bonuses.eternal {
            level_spans.push(Span::styled(" +1", Style::default().fg(Color::Green)));
        }
        if skill.bonuses.synergy > 0 {
            level_spans.push(Span::styled(
                format!(" +{}", skill.bonuses.synergy),
                Style::default().fg(Color::Yellow),
            ));
        }
        if skill.independent {
            level_spans.push(Span::styled(" (ind)", Style::default().fg(Color::DarkGray)));
        }

        let mut lines = vec![
            self.character_line(planner, Slot::Skill(index)),
            Line::from(level_spans),
            Line::from(Span::styled(
                format!("x {}%", skill.multiplier),
                Style::default().fg(Color::White),
            )),
        ];
        lines.extend(Self::cost_lines(&skill.control));
        frame.render_widget(
            Paragraph::new(lines).block(self.panel_block(index + 1, &format!("SKILL {}", index + 1))),
            area,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.status {
            Some(status) => Line::from(Span::styled(
                status.clone(),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(
                "←/→ slot  ↑/↓ level  [c]haracter  [x] clear  [m]ode  [p]ool  [e]xport  [q]uit",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
    }

    fn render_picker(&self, frame: &mut Frame, planner: &Planner) {
        let area = centered_rect(40, 60, frame.area());
        frame.render_widget(Clear, area);

        let lines: Vec<Line> = planner
            .data()
            .characters
            .characters
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let (r, g, b) = c.color;
                let marker = if i == self.picker_cursor { "> " } else { "  " };
                let suffix = if c.independent { " (independent)" } else { "" };
                let mut style = Style::default().fg(Color::Rgb(r, g, b));
                if i == self.picker_cursor {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::from(Span::styled(
                    format!("{}[{}] {}{}", marker, c.icon, c.name, suffix),
                    style,
                ))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Assign character (Enter select, x clear, Esc cancel) ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_pool_editor(&self, frame: &mut Frame, buffer: &str) {
        let area = centered_rect(30, 12, frame.area());
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Shard pool (Enter apply, Esc cancel) ");
        let line = Line::from(Span::styled(
            format!("{}_", buffer),
            Style::default().fg(Color::White),
        ));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Centered overlay rectangle as a percentage of the frame
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
