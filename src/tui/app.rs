//! TUI application state, rendering, and key handling.

use std::io::Stdout;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use crate::controller::{App, RefreshPayload, View, fetch_payload};
use crate::error::Result;
use crate::model::{GoalPatch, NewGoal, PLATFORMS, ProgressStatus, ResourceType, SkillRecord};
use crate::views::filter::{self, StatusFilter};

/// Action to take after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Continue,
}

/// Result of a background refresh, delivered to the UI loop.
enum UiEvent {
    Refreshed {
        generation: u64,
        result: Result<RefreshPayload>,
    },
}

/// Modal overlay currently shown, if any.
enum Modal {
    Add(AddForm),
    Update(UpdateForm),
    ConfirmDelete { id: i64, name: String },
    Help,
}

/// TUI application state.
pub struct SksTui {
    app: App,
    list_state: ListState,
    timeline_scroll: u16,
    modal: Option<Modal>,
    tx: Sender<UiEvent>,
    rx: Receiver<UiEvent>,
}

impl SksTui {
    #[must_use]
    pub fn new(app: App) -> Self {
        let (tx, rx) = unbounded();
        Self {
            app,
            list_state: ListState::default(),
            timeline_scroll: 0,
            modal: None,
            tx,
            rx,
        }
    }

    /// Run the TUI main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        // Initial load on mount.
        self.spawn_refresh();

        loop {
            self.drain_ui_events();
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_key(key.code, key.modifiers) == Action::Quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    // --- background refreshes ---

    fn spawn_refresh(&mut self) {
        let generation = self.app.begin_refresh();
        self.dispatch_refresh(generation);
    }

    fn dispatch_refresh(&self, generation: u64) {
        let store = self.app.store();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = fetch_payload(store.as_ref());
            let _ = tx.send(UiEvent::Refreshed { generation, result });
        });
    }

    fn drain_ui_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            match event {
                UiEvent::Refreshed { generation, result } => {
                    self.app.apply_refresh(generation, result);
                    self.clamp_selection();
                }
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.app.visible_skills().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let selected = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(selected));
        }
    }

    // --- input ---

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.modal.is_some() {
            self.handle_modal_key(key);
            return Action::Continue;
        }

        match key {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('?') => self.modal = Some(Modal::Help),
            KeyCode::Char('a') => self.open_add_form(),
            KeyCode::Char('r') => self.spawn_refresh(),
            KeyCode::Char('1') => self.app.navigate(View::Home),
            KeyCode::Char('2') => self.app.navigate(View::Dashboard),
            KeyCode::Char('3') => self.app.navigate(View::Skills),
            KeyCode::Char('4') => self.app.navigate(View::Timeline),
            KeyCode::Char('5') => self.app.navigate(View::Insights),
            KeyCode::Tab => self.next_view(),
            _ => match self.app.view() {
                View::Skills => self.handle_skills_key(key),
                View::Timeline => self.handle_timeline_key(key),
                _ => {}
            },
        }
        Action::Continue
    }

    fn next_view(&mut self) {
        let current = View::ALL
            .iter()
            .position(|v| *v == self.app.view())
            .unwrap_or(0);
        let next = View::ALL[(current + 1) % View::ALL.len()];
        self.app.navigate(next);
    }

    fn handle_skills_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Char('g') => {
                if !self.app.visible_skills().is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Char('G') => {
                let len = self.app.visible_skills().len();
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
            }
            KeyCode::Char('f') => {
                self.app.cycle_filter();
                self.clamp_selection();
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(skill) = self.selected_skill() {
                    self.modal = Some(Modal::Update(UpdateForm::for_skill(&skill)));
                }
            }
            KeyCode::Char('d') => {
                if let Some(skill) = self.selected_skill() {
                    self.modal = Some(Modal::ConfirmDelete {
                        id: skill.id,
                        name: skill.skill_name,
                    });
                }
            }
            _ => {}
        }
    }

    fn handle_timeline_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
                self.timeline_scroll = self.timeline_scroll.saturating_add(3);
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => {
                self.timeline_scroll = self.timeline_scroll.saturating_sub(3);
            }
            KeyCode::Char('g') => self.timeline_scroll = 0,
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyCode) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        match modal {
            Modal::Help => match key {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => {}
                _ => self.modal = Some(Modal::Help),
            },
            Modal::ConfirmDelete { id, .. } => match key {
                KeyCode::Char('y') | KeyCode::Enter => {
                    if let Ok(generation) = self.app.submit_delete(id) {
                        self.dispatch_refresh(generation);
                    }
                }
                _ => {}
            },
            Modal::Add(mut form) => match key {
                KeyCode::Esc => self.app.close_add_form(),
                KeyCode::Enter => match form.to_goal() {
                    Ok(goal) => match self.app.submit_add(&goal) {
                        Ok(generation) => self.dispatch_refresh(generation),
                        Err(err) => {
                            form.error = Some(err.to_string());
                            self.modal = Some(Modal::Add(form));
                        }
                    },
                    Err(err) => {
                        form.error = Some(err.to_string());
                        self.modal = Some(Modal::Add(form));
                    }
                },
                other => {
                    form.handle_key(other);
                    self.modal = Some(Modal::Add(form));
                }
            },
            Modal::Update(mut form) => match key {
                KeyCode::Esc => {}
                KeyCode::Enter => match form.to_patch() {
                    Ok(patch) => match self.app.submit_update(form.id, &patch) {
                        Ok(generation) => self.dispatch_refresh(generation),
                        Err(err) => {
                            form.error = Some(err.to_string());
                            self.modal = Some(Modal::Update(form));
                        }
                    },
                    Err(err) => {
                        form.error = Some(err.to_string());
                        self.modal = Some(Modal::Update(form));
                    }
                },
                other => {
                    form.handle_key(other);
                    self.modal = Some(Modal::Update(form));
                }
            },
        }
    }

    fn open_add_form(&mut self) {
        self.app.open_add_form();
        self.modal = Some(Modal::Add(AddForm::default()));
    }

    fn select_next(&mut self) {
        let len = self.app.visible_skills().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn select_prev(&mut self) {
        let len = self.app.visible_skills().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn selected_skill(&self) -> Option<SkillRecord> {
        let visible = self.app.visible_skills();
        self.list_state.selected().and_then(|i| visible.get(i).cloned())
    }

    // --- rendering ---

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title bar
                Constraint::Length(1), // nav tabs
                Constraint::Min(8),    // content
                Constraint::Length(1), // help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0]);
        self.draw_tabs(f, chunks[1]);
        match self.app.view() {
            View::Home => self.draw_home(f, chunks[2]),
            View::Dashboard => self.draw_dashboard(f, chunks[2]),
            View::Skills => self.draw_skills(f, chunks[2]),
            View::Timeline => self.draw_timeline(f, chunks[2]),
            View::Insights => self.draw_insights(f, chunks[2]),
        }
        self.draw_help_bar(f, chunks[3]);

        match &self.modal {
            Some(Modal::Add(form)) => draw_add_form(f, form),
            Some(Modal::Update(form)) => draw_update_form(f, form),
            Some(Modal::ConfirmDelete { id, name }) => draw_confirm_delete(f, *id, name),
            Some(Modal::Help) => draw_help_overlay(f),
            None => {}
        }
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("SkillStack", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" | {} skills", self.app.skills().len())),
        ];
        if self.app.loading() {
            spans.push(Span::styled(" | Loading...", Style::default().fg(Color::Yellow)));
        }
        if let Some(status) = self.app.status() {
            let color = if status.is_error { Color::Red } else { Color::Green };
            spans.push(Span::styled(
                format!(" | {}", status.text),
                Style::default().fg(color),
            ));
        }
        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Cyan));
        f.render_widget(paragraph, area);
    }

    fn draw_tabs(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<Line> = View::ALL
            .iter()
            .enumerate()
            .map(|(i, v)| Line::from(format!("{} {}", i + 1, v.title())))
            .collect();
        let selected = View::ALL
            .iter()
            .position(|v| *v == self.app.view())
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");
        f.render_widget(tabs, area);
    }

    fn draw_home(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Master Your Skills with SkillStack",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Track your learning journey, set goals, and watch your skills grow."),
            Line::from(""),
            Line::from("  Track progress   - monitor your learning with detailed analytics"),
            Line::from("  Stay motivated   - set goals and celebrate achievements"),
            Line::from("  Achieve goals    - turn learning into measurable improvements"),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("a", Style::default().fg(Color::Yellow)),
                Span::raw(" to add a skill, "),
                Span::styled("2", Style::default().fg(Color::Yellow)),
                Span::raw(" for the dashboard, "),
                Span::styled("?", Style::default().fg(Color::Yellow)),
                Span::raw(" for help."),
            ]),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn draw_dashboard(&self, f: &mut Frame, area: Rect) {
        let stats = self.app.dashboard_stats();
        let streak = self.app.insights().analytics.streak_days;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(4)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(rows[0]);

        draw_stat_card(f, cards[0], "Total Skills", &stats.total.to_string(), Color::Cyan);
        draw_stat_card(
            f,
            cards[1],
            "Completed",
            &format!("{} ({}%)", stats.completed, stats.completion_rate_pct),
            Color::Green,
        );
        draw_stat_card(f, cards[2], "Hours Learned", &stats.total_hours.to_string(), Color::Blue);
        draw_stat_card(f, cards[3], "Streak", &format!("{streak} days"), Color::Magenta);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        let mut category_lines: Vec<Line> = Vec::new();
        if stats.category_breakdown.is_empty() {
            category_lines.push(Line::from(Span::styled(
                "No skills yet",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for category in &stats.category_breakdown {
            category_lines.push(Line::from(format!("{:14} {}", category.name, category.count)));
        }
        let categories = Paragraph::new(category_lines)
            .block(Block::default().borders(Borders::ALL).title(" By resource type "));
        f.render_widget(categories, columns[0]);

        let mut recent_lines: Vec<Line> = Vec::new();
        if stats.recent.is_empty() {
            recent_lines.push(Line::from(Span::styled(
                "Start your learning journey by adding your first skill!",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for skill in &stats.recent {
            recent_lines.push(Line::from(vec![
                Span::styled(
                    skill.skill_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  {} | {} | {:.1}h  ",
                    skill.platform, skill.resource_type, skill.hours_spent
                )),
                Span::styled(
                    progress_bar(skill.progress_status),
                    Style::default().fg(status_color(skill.progress_status)),
                ),
            ]));
        }
        let recent = Paragraph::new(recent_lines)
            .block(Block::default().borders(Borders::ALL).title(" Recently added "))
            .wrap(Wrap { trim: false });
        f.render_widget(recent, columns[1]);
    }

    fn draw_skills(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(4)])
            .split(area);

        let all = self.app.skills();
        let filter_line = Line::from(vec![
            Span::raw("Filter [f]: "),
            Span::styled(
                self.app.filter().label(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  (all {} | started {} | in-progress {} | completed {})",
                all.len(),
                filter::count(all, StatusFilter::Only(ProgressStatus::Started)),
                filter::count(all, StatusFilter::Only(ProgressStatus::InProgress)),
                filter::count(all, StatusFilter::Only(ProgressStatus::Completed)),
            )),
        ]);
        f.render_widget(Paragraph::new(filter_line), chunks[0]);

        let visible = self.app.visible_skills();
        let items: Vec<ListItem> = visible
            .iter()
            .map(|skill| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{:11}] ", skill.progress_status),
                        Style::default().fg(status_color(skill.progress_status)),
                    ),
                    Span::raw(format!("{:28} ", truncate(&skill.skill_name, 28))),
                    Span::styled(
                        format!("{:14} ", truncate(&skill.platform, 14)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!(
                        "{:13} {:>5.1}h {} ",
                        skill.resource_type,
                        skill.hours_spent,
                        "*".repeat(skill.difficulty_rating as usize)
                    )),
                    Span::styled(
                        progress_bar(skill.progress_status),
                        Style::default().fg(status_color(skill.progress_status)),
                    ),
                ]))
            })
            .collect();

        let title = format!(" My Skills ({}) ", visible.len());
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    fn draw_timeline(&self, f: &mut Frame, area: Rect) {
        let buckets = self.app.timeline();
        let mut lines: Vec<Line> = Vec::new();

        if buckets.is_empty() {
            lines.push(Line::from(Span::styled(
                "No learning activities yet - add skills to see your timeline!",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for bucket in &buckets {
            let count = bucket.skills.len();
            let plural = if count == 1 { "skill" } else { "skills" };
            lines.push(Line::from(Span::styled(
                format!("{} ({count} {plural})", bucket.date.format("%A, %B %d, %Y")),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for skill in &bucket.skills {
                lines.push(Line::from(format!(
                    "  {} - {} | {} | {} | {:.1}h",
                    skill.skill_name,
                    skill.platform,
                    skill.resource_type,
                    skill.progress_status,
                    skill.hours_spent
                )));
            }
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Learning Timeline "))
            .wrap(Wrap { trim: false })
            .scroll((self.timeline_scroll, 0));
        f.render_widget(paragraph, area);
    }

    fn draw_insights(&self, f: &mut Frame, area: Rect) {
        let insights = self.app.insights();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let recommendation_lines: Vec<Line> = insights
            .recommendations
            .iter()
            .map(|r| Line::from(format!("  - {r}")))
            .collect();
        let recommendations = Paragraph::new(recommendation_lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Personalized Recommendations "),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(recommendations, columns[0]);

        let analytics = &insights.analytics;
        let analytics_lines = vec![
            Line::from(format!("Total learning hours    {:.1}", analytics.total_hours)),
            Line::from(format!(
                "Average difficulty      {}",
                analytics.avg_difficulty_display()
            )),
            Line::from(format!("Most active category    {}", analytics.category_display())),
            Line::from(format!("Learning streak         {} days", analytics.streak_days)),
        ];
        let panel = Paragraph::new(analytics_lines)
            .block(Block::default().borders(Borders::ALL).title(" Learning Analytics "));
        f.render_widget(panel, columns[1]);
    }

    fn draw_help_bar(&self, f: &mut Frame, area: Rect) {
        let text = match (&self.modal, self.app.view()) {
            (Some(_), _) => "Enter: confirm  Esc: cancel",
            (None, View::Skills) => {
                "1-5: views  j/k: navigate  f: filter  a: add  e: edit  d: delete  r: refresh  q: quit"
            }
            _ => "1-5: views  Tab: next view  a: add  r: refresh  ?: help  q: quit",
        };
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    // --- test hooks ---

    #[cfg(test)]
    pub fn controller(&self) -> &App {
        &self.app
    }

    #[cfg(test)]
    pub fn press(&mut self, key: KeyCode) -> Action {
        self.handle_key(key, KeyModifiers::NONE)
    }

    #[cfg(test)]
    pub fn drain(&mut self) {
        // Block until the in-flight refresh lands, then apply it.
        if let Ok(event) = self.rx.recv_timeout(Duration::from_secs(5)) {
            match event {
                UiEvent::Refreshed { generation, result } => {
                    self.app.apply_refresh(generation, result);
                    self.clamp_selection();
                }
            }
        }
        self.drain_ui_events();
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }
}

// --- modal forms ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddField {
    Name,
    Resource,
    Platform,
    Status,
    Hours,
    Difficulty,
    Notes,
}

impl AddField {
    const ORDER: [Self; 7] = [
        Self::Name,
        Self::Resource,
        Self::Platform,
        Self::Status,
        Self::Hours,
        Self::Difficulty,
        Self::Notes,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State of the add-goal form.
pub struct AddForm {
    name: String,
    resource_idx: usize,
    platform_idx: usize,
    status: ProgressStatus,
    hours: String,
    difficulty: u8,
    notes: String,
    focus: AddField,
    error: Option<String>,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            resource_idx: 0,
            platform_idx: 0,
            status: ProgressStatus::Started,
            hours: String::new(),
            difficulty: 1,
            notes: String::new(),
            focus: AddField::Name,
            error: None,
        }
    }
}

impl AddForm {
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Down | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Up | KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Left | KeyCode::Right => self.cycle(key == KeyCode::Right),
            KeyCode::Char(c) => match self.focus {
                AddField::Name => self.name.push(c),
                AddField::Hours => {
                    if c.is_ascii_digit() || c == '.' {
                        self.hours.push(c);
                    }
                }
                AddField::Notes => self.notes.push(c),
                _ => {}
            },
            KeyCode::Backspace => match self.focus {
                AddField::Name => {
                    self.name.pop();
                }
                AddField::Hours => {
                    self.hours.pop();
                }
                AddField::Notes => {
                    self.notes.pop();
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn cycle(&mut self, forward: bool) {
        match self.focus {
            AddField::Resource => {
                let n = ResourceType::ALL.len();
                self.resource_idx = if forward {
                    (self.resource_idx + 1) % n
                } else {
                    (self.resource_idx + n - 1) % n
                };
            }
            AddField::Platform => {
                let n = PLATFORMS.len();
                self.platform_idx = if forward {
                    (self.platform_idx + 1) % n
                } else {
                    (self.platform_idx + n - 1) % n
                };
            }
            AddField::Status => self.status = self.status.next(),
            AddField::Difficulty => {
                self.difficulty = if forward {
                    (self.difficulty % 5) + 1
                } else if self.difficulty == 1 {
                    5
                } else {
                    self.difficulty - 1
                };
            }
            _ => {}
        }
    }

    fn to_goal(&self) -> Result<NewGoal> {
        let hours_spent = if self.hours.trim().is_empty() {
            0.0
        } else {
            self.hours.trim().parse::<f64>().map_err(|_| {
                crate::error::SksError::InvalidGoal(format!("invalid hours: {}", self.hours))
            })?
        };
        let goal = NewGoal {
            skill_name: self.name.clone(),
            resource_type: ResourceType::ALL[self.resource_idx],
            platform: PLATFORMS[self.platform_idx].to_string(),
            progress_status: self.status,
            hours_spent,
            notes: self.notes.clone(),
            difficulty_rating: self.difficulty,
        };
        goal.validate()?;
        Ok(goal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateField {
    Status,
    Hours,
    Difficulty,
    Notes,
}

impl UpdateField {
    const ORDER: [Self; 4] = [Self::Status, Self::Hours, Self::Difficulty, Self::Notes];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State of the update-progress form, pre-filled from the selected
/// skill like the original progress tracker.
pub struct UpdateForm {
    id: i64,
    skill_name: String,
    status: ProgressStatus,
    hours: String,
    difficulty: u8,
    notes: String,
    focus: UpdateField,
    error: Option<String>,
}

impl UpdateForm {
    fn for_skill(skill: &SkillRecord) -> Self {
        Self {
            id: skill.id,
            skill_name: skill.skill_name.clone(),
            status: skill.progress_status,
            hours: format!("{}", skill.hours_spent),
            difficulty: skill.difficulty_rating,
            notes: skill.notes.clone(),
            focus: UpdateField::Status,
            error: None,
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Down | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Up | KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Left | KeyCode::Right => match self.focus {
                UpdateField::Status => self.status = self.status.next(),
                UpdateField::Difficulty => {
                    self.difficulty = if key == KeyCode::Right {
                        (self.difficulty % 5) + 1
                    } else if self.difficulty == 1 {
                        5
                    } else {
                        self.difficulty - 1
                    };
                }
                _ => {}
            },
            KeyCode::Char(c) => match self.focus {
                UpdateField::Hours => {
                    if c.is_ascii_digit() || c == '.' {
                        self.hours.push(c);
                    }
                }
                UpdateField::Notes => self.notes.push(c),
                _ => {}
            },
            KeyCode::Backspace => match self.focus {
                UpdateField::Hours => {
                    self.hours.pop();
                }
                UpdateField::Notes => {
                    self.notes.pop();
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn to_patch(&self) -> Result<GoalPatch> {
        let hours = if self.hours.trim().is_empty() {
            0.0
        } else {
            self.hours.trim().parse::<f64>().map_err(|_| {
                crate::error::SksError::InvalidGoal(format!("invalid hours: {}", self.hours))
            })?
        };
        let patch = GoalPatch {
            progress_status: Some(self.status),
            hours_spent: Some(hours),
            notes: Some(self.notes.clone()),
            difficulty_rating: Some(self.difficulty),
        };
        patch.validate()?;
        Ok(patch)
    }
}

// --- modal rendering helpers ---

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{marker}{label:12}"), style),
        Span::raw(value),
    ])
}

fn draw_add_form(f: &mut Frame, form: &AddForm) {
    let area = centered_rect(f.area(), 56, 14);
    f.render_widget(Clear, area);

    let mut lines = vec![
        field_line("Skill name", form.name.clone(), form.focus == AddField::Name),
        field_line(
            "Type",
            format!("< {} >", ResourceType::ALL[form.resource_idx]),
            form.focus == AddField::Resource,
        ),
        field_line(
            "Platform",
            format!("< {} >", PLATFORMS[form.platform_idx]),
            form.focus == AddField::Platform,
        ),
        field_line(
            "Status",
            format!("< {} >", form.status),
            form.focus == AddField::Status,
        ),
        field_line("Hours", form.hours.clone(), form.focus == AddField::Hours),
        field_line(
            "Difficulty",
            format!("< {} >", "*".repeat(form.difficulty as usize)),
            form.focus == AddField::Difficulty,
        ),
        field_line("Notes", form.notes.clone(), form.focus == AddField::Notes),
        Line::from(""),
        Line::from(Span::styled(
            "Up/Down: field  Left/Right: choose  Enter: save  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(ref error) = form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Add New Skill Goal "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_update_form(f: &mut Frame, form: &UpdateForm) {
    let area = centered_rect(f.area(), 56, 11);
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            form.skill_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line(
            "Status",
            format!("< {} >", form.status),
            form.focus == UpdateField::Status,
        ),
        field_line("Hours", form.hours.clone(), form.focus == UpdateField::Hours),
        field_line(
            "Difficulty",
            format!("< {} >", "*".repeat(form.difficulty as usize)),
            form.focus == UpdateField::Difficulty,
        ),
        field_line("Notes", form.notes.clone(), form.focus == UpdateField::Notes),
        Line::from(""),
        Line::from(Span::styled(
            "Up/Down: field  Left/Right: choose  Enter: save  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(ref error) = form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Update Progress "),
    );
    f.render_widget(paragraph, area);
}

fn draw_confirm_delete(f: &mut Frame, id: i64, name: &str) {
    let area = centered_rect(f.area(), 50, 5);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(format!("Delete \"{name}\" (id {id})?")),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter: delete  any other key: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Confirm Delete "),
    );
    f.render_widget(paragraph, area);
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(f.area(), 56, 16);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  1-5          Switch view (Home, Dashboard, ...)"),
        Line::from("  Tab          Next view"),
        Line::from("  j/k          Move in the skills list"),
        Line::from("  g / G        Jump to first / last"),
        Line::from(""),
        Line::from("Actions:"),
        Line::from("  a            Add a new skill goal"),
        Line::from("  e / Enter    Update the selected skill"),
        Line::from("  d            Delete the selected skill"),
        Line::from("  f            Cycle the status filter"),
        Line::from("  r            Refresh from the server"),
        Line::from(""),
        Line::from("Press ? or Esc to close this help"),
    ];
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

// --- small display helpers ---

fn draw_stat_card(f: &mut Frame, area: Rect, label: &str, value: &str, color: Color) {
    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let card = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(card, area);
}

const fn status_color(status: ProgressStatus) -> Color {
    match status {
        ProgressStatus::Started => Color::Yellow,
        ProgressStatus::InProgress => Color::Cyan,
        ProgressStatus::Completed => Color::Green,
    }
}

/// Display percentage per status, kept from the original progress bars.
const fn status_percent(status: ProgressStatus) -> u16 {
    match status {
        ProgressStatus::Started => 25,
        ProgressStatus::InProgress => 75,
        ProgressStatus::Completed => 100,
    }
}

fn progress_bar(status: ProgressStatus) -> String {
    let percent = status_percent(status);
    let filled = usize::from(percent / 10);
    format!("{}{} {percent:>3}%", "█".repeat(filled), "░".repeat(10 - filled))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}
