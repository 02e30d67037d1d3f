use anyhow::Result;
use card_collector::form::{log_submission, AddCardForm, CardField};
use card_collector::views::collections::{count_label, PLACEHOLDER_COUNT};
use card_collector::{AnalyticsSnapshot, AppConfig, Category, MetricsProvider, ProgressRow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Collections,
    AddCard,
    Analytics,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Collections, Page::AddCard, Page::Analytics];

    pub fn next(&self) -> Self {
        match self {
            Page::Home => Page::Collections,
            Page::Collections => Page::AddCard,
            Page::AddCard => Page::Analytics,
            Page::Analytics => Page::Home,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Home => Page::Analytics,
            Page::Collections => Page::Home,
            Page::AddCard => Page::Collections,
            Page::Analytics => Page::AddCard,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Home => "Home",
            Page::Collections => "My Collections",
            Page::AddCard => "Add Card",
            Page::Analytics => "Analytics",
        }
    }
}

/// Destinations offered on the home page, in order
const HOME_TARGETS: [(Page, &str); 3] = [
    (Page::Collections, "Browse your cards by category"),
    (Page::AddCard, "Record a new card in your collection"),
    (Page::Analytics, "See what your collection is worth"),
];

pub struct App<'a> {
    pub config: &'a AppConfig,
    metrics: Box<dyn MetricsProvider>,
    pub current_page: Page,
    pub home_state: TableState,
    pub collections_state: TableState,
    pub form: AddCardForm<'a>,
    pub focus: usize,
    pub snapshot: AnalyticsSnapshot,
    pub status: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(config: &'a AppConfig, metrics: Box<dyn MetricsProvider>) -> Self {
        let mut home_state = TableState::default();
        home_state.select(Some(0));

        let mut collections_state = TableState::default();
        if config.categories.count() > 0 {
            collections_state.select(Some(0));
        }

        let snapshot = AnalyticsSnapshot::collect(config, metrics.as_ref());

        Self {
            config,
            metrics,
            current_page: Page::Home,
            home_state,
            collections_state,
            form: AddCardForm::new(config),
            focus: 0,
            snapshot,
            status: None,
        }
    }

    pub fn go_to(&mut self, page: Page) {
        self.current_page = page;
        self.status = None;
        if page == Page::Analytics {
            self.refresh_analytics();
        }
    }

    pub fn next_page(&mut self) {
        self.go_to(self.current_page.next());
    }

    pub fn previous_page(&mut self) {
        self.go_to(self.current_page.previous());
    }

    /// New placeholder numbers; summary totals stay the same
    pub fn refresh_analytics(&mut self) {
        self.snapshot = AnalyticsSnapshot::collect(self.config, self.metrics.as_ref());
    }

    pub fn focused_field(&self) -> CardField {
        CardField::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % CardField::ALL.len();
    }

    pub fn focus_previous(&mut self) {
        let len = CardField::ALL.len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn selected_category(&self) -> Option<&'a Category> {
        let config = self.config;
        self.collections_state
            .selected()
            .and_then(move |i| config.categories.all().get(i))
    }

    fn select_options(&self, field: CardField) -> Vec<String> {
        match field {
            CardField::Category => self
                .config
                .categories
                .all()
                .iter()
                .map(|c| c.id.clone())
                .collect(),
            CardField::Subcategory => self.form.subcategory_options().to_vec(),
            CardField::Condition => self
                .config
                .conditions
                .all()
                .iter()
                .map(|g| g.id.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Step a select field through its options, wrapping at both ends
    pub fn cycle_option(&mut self, forward: bool) {
        let field = self.focused_field();
        let options = self.select_options(field);
        if options.is_empty() {
            return;
        }

        let len = options.len();
        let current = options.iter().position(|o| o == self.form.value(field));
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };

        self.form.set_field(field, options[index].clone());
    }

    pub fn type_char(&mut self, c: char) {
        let field = self.focused_field();
        if !field.is_select() {
            self.form.field_mut(field).push(c);
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field();
        if field.is_select() {
            self.form.set_field(field, "");
        } else {
            self.form.field_mut(field).pop();
        }
    }

    pub fn submit_form(&mut self) {
        match self.form.submit(log_submission) {
            Ok(submission) => {
                self.status = Some(format!("\"{}\" was recorded in the log.", submission.name));
                self.form.reset();
                self.focus = 0;
            }
            Err(errors) => {
                self.status = Some(format!("{} field(s) need attention", errors.len()));
                if let Some(first) = errors.first() {
                    if let Some(i) = CardField::ALL.iter().position(|f| *f == first.field) {
                        self.focus = i;
                    }
                }
            }
        }
    }

    /// Apply one key press; returns true when the app should exit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return true;
        }

        match key.code {
            KeyCode::Tab => {
                self.next_page();
                return false;
            }
            KeyCode::BackTab => {
                self.previous_page();
                return false;
            }
            _ => {}
        }

        match self.current_page {
            Page::Home => self.handle_home_key(key),
            Page::Collections => self.handle_collections_key(key),
            Page::AddCard => {
                self.handle_form_key(key);
                false
            }
            Page::Analytics => self.handle_analytics_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        let len = HOME_TARGETS.len();
        let selected = self.home_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Down | KeyCode::Char('j') => self.home_state.select(Some((selected + 1) % len)),
            KeyCode::Up | KeyCode::Char('k') => {
                self.home_state.select(Some((selected + len - 1) % len))
            }
            KeyCode::Enter => self.go_to(HOME_TARGETS[selected].0),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.go_to(HOME_TARGETS[index].0);
            }
            _ => {}
        }
        false
    }

    fn handle_collections_key(&mut self, key: KeyEvent) -> bool {
        let len = self.config.categories.count();
        if len == 0 {
            return key.code == KeyCode::Char('q');
        }
        let selected = self.collections_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Down | KeyCode::Char('j') => {
                self.collections_state.select(Some((selected + 1) % len))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.collections_state.select(Some((selected + len - 1) % len))
            }
            KeyCode::Enter => {
                if let Some(category) = self.selected_category() {
                    self.status = Some(format!(
                        "The {} view is not available yet",
                        category.name
                    ));
                }
            }
            _ => {}
        }
        false
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        self.status = None;
        match key.code {
            KeyCode::Down => self.focus_next(),
            KeyCode::Up => self.focus_previous(),
            KeyCode::Right => self.cycle_option(true),
            KeyCode::Left => self.cycle_option(false),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => self.type_char(c),
            _ => {}
        }
    }

    fn handle_analytics_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('r') => self.refresh_analytics(),
            _ => {}
        }
        false
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal UI stopped with an error");
        return Err(err.into());
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Home => render_home(f, chunks[1], app),
        Page::Collections => render_collections(f, chunks[1], app),
        Page::AddCard => render_add_card(f, chunks[1], app),
        Page::Analytics => render_analytics(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![Span::styled(
        format!("{}  ", app.config.app_name),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];

    for (i, page) in Page::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_home(f: &mut Frame, area: Rect, app: &mut App) {
    let rows = HOME_TARGETS.iter().enumerate().map(|(i, (page, blurb))| {
        Row::new(vec![
            Cell::from(format!("{}", i + 1)).style(Style::default().fg(Color::Yellow)),
            Cell::from(page.title().to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(*blurb).style(Style::default().fg(Color::DarkGray)),
        ])
    });

    let table = Table::new(
        rows,
        [Constraint::Length(3), Constraint::Length(18), Constraint::Min(20)],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} - {} ", app.config.app_name, app.config.description)),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.home_state);
}

fn render_collections(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let rows = app.config.categories.all().iter().map(|c| {
        Row::new(vec![
            Cell::from(c.display_name()),
            Cell::from(format!("{} subcategories", c.subcategories.len()))
                .style(Style::default().fg(Color::DarkGray)),
        ])
    });

    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(18)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Categories "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, columns[0], &mut app.collections_state);

    let (title, lines) = match app.selected_category() {
        Some(category) => (
            format!(" {} ", category.name),
            category
                .subcategories
                .iter()
                .map(|s| {
                    Line::from(vec![
                        Span::raw(format!("  {:<24}", s)),
                        Span::styled(count_label(PLACEHOLDER_COUNT), Style::default().fg(Color::DarkGray)),
                    ])
                })
                .collect(),
        ),
        None => (" Subcategories ".to_string(), vec![Line::from("  No category selected")]),
    };

    let detail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title),
    );
    f.render_widget(detail, columns[1]);
}

/// Human-readable value of a form field (names instead of ids for selects)
fn display_value(app: &App, field: CardField) -> String {
    let value = app.form.value(field);
    match field {
        CardField::Category => app
            .config
            .categories
            .find_by_id(value)
            .map(|c| c.name.clone())
            .unwrap_or_default(),
        CardField::Condition => app
            .config
            .conditions
            .find_by_id(value)
            .map(|g| format!("{} - {}", g.name, g.description))
            .unwrap_or_default(),
        _ => value.to_string(),
    }
}

fn render_add_card(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    for (i, field) in CardField::ALL.iter().enumerate() {
        let focused = i == app.focus;
        let marker = if focused { "→ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut value = display_value(app, *field);
        if value.is_empty() && field.is_select() {
            value = if *field == CardField::Subcategory && app.form.subcategory_options().is_empty() {
                "(choose a category first)".to_string()
            } else {
                "(◀ ▶ to choose)".to_string()
            };
        } else if focused && !field.is_select() {
            value.push('▏');
        }

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<16}", field.label()), label_style),
            Span::raw(value),
        ]));

        if let Some(message) = app.form.error_for(*field) {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(18)),
                Span::styled(message.to_string(), Style::default().fg(Color::Red)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Enter to add the card",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Add Card "),
    );
    f.render_widget(form, area);
}

/// Text progress bar `width` cells wide for a 0-100 percentage
pub fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn progress_lines(title: &str, rows: &[ProgressRow]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];
    for row in rows {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<22}{:>4}  ", row.label, row.count)),
            Span::styled(bar(row.percent, BAR_WIDTH), Style::default().fg(Color::Blue)),
            Span::raw(format!(" {:>6.2}%", row.percent)),
        ]));
    }
    lines
}

fn render_analytics(f: &mut Frame, area: Rect, app: &App) {
    let summary = &app.snapshot.summary;

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Total Cards: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(format!("{}", summary.total_cards)),
            Span::styled("    Total Value: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(format!("${:.2}", summary.total_value), Style::default().fg(Color::Green)),
            Span::styled("    Average Card Value: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(format!("${:.2}", summary.average_value()), Style::default().fg(Color::Green)),
        ]),
    ];

    lines.extend(progress_lines("Cards by Category", &app.snapshot.by_category));
    lines.extend(progress_lines("Cards by Condition", &app.snapshot.by_condition));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Recent Activity",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for entry in &app.snapshot.recent_activity {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<8}", entry.action), Style::default().fg(Color::Yellow)),
            Span::raw(entry.detail),
            Span::styled(format!("  {}", entry.when), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Collection Analytics "),
    );
    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = Vec::new();

    if let Some(status) = &app.status {
        status_spans.push(Span::styled(format!(" {} ", status), Style::default().fg(Color::Green)));
        status_spans.push(Span::raw("|"));
    }

    let hints: &[(&str, &str)] = match app.current_page {
        Page::Home => &[("↑/↓", "Select"), ("Enter", "Open")],
        Page::Collections => &[("↑/↓", "Category"), ("Enter", "Open")],
        Page::AddCard => &[("↑/↓", "Field"), ("◀/▶", "Choose"), ("Enter", "Submit")],
        Page::Analytics => &[("r", "Refresh")],
    };

    for (key, action) in hints.iter().chain([("Tab", "Page")].iter()) {
        status_spans.push(Span::raw(" "));
        status_spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(format!(" {} |", action)));
    }
    status_spans.push(Span::raw(" "));
    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_collector::FixedMetrics;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_page_cycle() {
        let mut page = Page::Home;
        for _ in 0..4 {
            page = page.next();
        }
        assert_eq!(page, Page::Home);
        assert_eq!(Page::Home.previous(), Page::Analytics);
    }

    #[test]
    fn test_home_enter_navigates() {
        let config = AppConfig::default();
        let mut app = App::new(&config, Box::new(FixedMetrics::uniform(1)));

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.current_page, Page::AddCard);

        app.go_to(Page::Home);
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.current_page, Page::Analytics);
    }

    #[test]
    fn test_quit_keys() {
        let config = AppConfig::default();
        let mut app = App::new(&config, Box::new(FixedMetrics::uniform(1)));

        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert!(app.handle_key(key(KeyCode::Esc)));

        // 'q' is text on the form page
        app.go_to(Page::AddCard);
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.form.value(CardField::Name), "q");
    }

    #[test]
    fn test_form_category_cycle_resets_subcategory() {
        let config = AppConfig::default();
        let mut app = App::new(&config, Box::new(FixedMetrics::uniform(1)));
        app.go_to(Page::AddCard);

        app.handle_key(key(KeyCode::Down)); // Category
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.form.value(CardField::Category), "sports");

        app.handle_key(key(KeyCode::Down)); // Subcategory
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.form.value(CardField::Subcategory), "Baseball");

        app.handle_key(key(KeyCode::Up)); // Category
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.form.value(CardField::Category), "pokemon");
        assert_eq!(app.form.value(CardField::Subcategory), "");
        assert_eq!(app.form.subcategory_options(), config.categories.subcategories_of("pokemon"));
    }

    #[test]
    fn test_form_cycle_wraps_backwards() {
        let config = AppConfig::default();
        let mut app = App::new(&config, Box::new(FixedMetrics::uniform(1)));
        app.go_to(Page::AddCard);
        app.focus = 3; // Condition

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.form.value(CardField::Condition), "poor");
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.form.value(CardField::Condition), "mint");
    }

    #[test]
    fn test_form_submit_empty_name_shows_error() {
        let config = AppConfig::default();
        let mut app = App::new(&config, Box::new(FixedMetrics::uniform(1)));
        app.go_to(Page::AddCard);

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.focused_field(), CardField::Name);
        assert!(screen(&mut app).contains("Card name is required"));
    }

    #[test]
    fn test_form_submit_valid_resets() {
        let config = AppConfig::default();
        let mut app = App::new(&config, Box::new(FixedMetrics::uniform(1)));
        app.go_to(Page::AddCard);

        type_str(&mut app, "Ohtani");
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Right)); // sports
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Right)); // Baseball
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Right)); // mint
        app.handle_key(key(KeyCode::Down));
        type_str(&mut app, "-3");

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.focused_field(), CardField::PurchasePrice);
        assert_eq!(
            app.form.error_for(CardField::PurchasePrice),
            Some("Purchase price must be at least 0")
        );

        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Backspace));
        type_str(&mut app, "3");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.status.as_deref(), Some("\"Ohtani\" was recorded in the log."));
        assert_eq!(app.form.value(CardField::Name), "");
        assert_eq!(app.focus, 0);
    }

    #[test]
    fn test_collections_screen_lists_zero_counts() {
        let config = AppConfig::default();
        let mut app = App::new(&config, Box::new(FixedMetrics::uniform(1)));
        app.go_to(Page::Collections);
        app.handle_key(key(KeyCode::Down));

        let category = app.selected_category().unwrap().clone();
        assert_eq!(category.id, "pokemon");

        let text = screen(&mut app);
        for subcategory in &category.subcategories {
            assert!(text.contains(subcategory.as_str()));
        }
        assert_eq!(text.matches("0 cards").count(), category.subcategories.len());
    }

    #[test]
    fn test_analytics_screen() {
        let config = AppConfig::default();
        let mut app = App::new(&config, Box::new(FixedMetrics::uniform(15)));
        app.go_to(Page::Analytics);

        let text = screen(&mut app);
        assert!(text.contains("$16.67"));
        assert!(text.contains("10.00%"));
        assert!(text.contains("Recent Activity"));
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0.0, 4), "░░░░");
        assert_eq!(bar(50.0, 4), "██░░");
        assert_eq!(bar(100.0, 4), "████");
        assert_eq!(bar(250.0, 4), "████");
    }
}
