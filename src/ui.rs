use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use goods_catalog::{CatalogSession, CategorySelection, Good, OwnerFilter, RecordStore, Sex};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

pub struct App {
    pub session: CatalogSession,
    /// Owner tab labels in fixture order (position 0 is "All")
    pub owners: Vec<String>,
    /// Category button labels in fixture order
    pub category_titles: Vec<String>,
    pub state: TableState,
    /// True while keystrokes go to the search field
    pub search_focused: bool,
}

impl App {
    pub fn new(store: &RecordStore, goods: Vec<Good>) -> Self {
        let session = CatalogSession::new(goods);

        let mut state = TableState::default();
        if session.has_matches() {
            state.select(Some(0));
        }

        Self {
            owners: store.user_names().iter().map(|s| s.to_string()).collect(),
            category_titles: store
                .category_titles()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            session,
            state,
            search_focused: false,
        }
    }

    /// Position of the active owner tab: 0 = All, 1.. = user index + 1
    pub fn owner_position(&self) -> usize {
        match self.session.state().owner {
            OwnerFilter::All => 0,
            OwnerFilter::Name(ref name) => self
                .owners
                .iter()
                .position(|owner| owner == name)
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    fn set_owner_position(&mut self, position: usize) {
        let owner = if position == 0 {
            OwnerFilter::All
        } else {
            OwnerFilter::Name(self.owners[position - 1].clone())
        };
        self.session.set_owner(owner);
        self.reset_cursor();
    }

    pub fn next_owner(&mut self) {
        let position = (self.owner_position() + 1) % (self.owners.len() + 1);
        self.set_owner_position(position);
    }

    pub fn previous_owner(&mut self) {
        let tabs = self.owners.len() + 1;
        let position = (self.owner_position() + tabs - 1) % tabs;
        self.set_owner_position(position);
    }

    /// Toggle the Nth category button (1-based, as on the key row)
    pub fn toggle_category_number(&mut self, number: usize) {
        if number == 0 || number > self.category_titles.len() {
            return;
        }
        let title = self.category_titles[number - 1].clone();
        self.session.toggle_category(&title);
        self.reset_cursor();
    }

    pub fn select_all_categories(&mut self) {
        self.session.select_all_categories();
        self.reset_cursor();
    }

    pub fn reset_filters(&mut self) {
        self.session.reset_filters();
        self.search_focused = false;
        self.reset_cursor();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.session.push_query_char(c);
        self.reset_cursor();
    }

    pub fn pop_query_char(&mut self) {
        self.session.pop_query_char();
        self.reset_cursor();
    }

    pub fn clear_query(&mut self) {
        self.session.clear_query();
        self.reset_cursor();
    }

    // Put the cursor back on the first row after the visible list changed
    fn reset_cursor(&mut self) {
        if self.session.has_matches() {
            self.state.select(Some(0));
        } else {
            self.state.select(None);
        }
    }

    pub fn next(&mut self) {
        let len = self.session.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.session.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
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
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Search field swallows keystrokes while focused
            if app.search_focused {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter => app.search_focused = false,
                    KeyCode::Backspace => app.pop_query_char(),
                    KeyCode::Char(c) => app.push_query_char(c),
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('/') => app.search_focused = true,
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_owner();
                    } else {
                        app.next_owner();
                    }
                }
                KeyCode::BackTab => app.previous_owner(),
                KeyCode::Char('a') => app.select_all_categories(),
                KeyCode::Char('r') => app.reset_filters(),
                KeyCode::Char('c') => app.clear_query(),
                KeyCode::Char(c @ '1'..='9') => {
                    app.toggle_category_number(c as usize - '0' as usize);
                }
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Home => {
                    if app.session.has_matches() {
                        app.state.select(Some(0));
                    }
                }
                KeyCode::End => {
                    if app.session.has_matches() {
                        app.state.select(Some(app.session.visible().len() - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with owner tabs
            Constraint::Length(4), // Filter panel (search + categories)
            Constraint::Min(0),    // Goods table
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_filter_panel(f, chunks[1], app);

    if app.session.has_matches() {
        render_table(f, chunks[2], app);
    } else {
        render_no_matches(f, chunks[2]);
    }

    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let active = app.owner_position();

    let mut tab_spans = vec![
        Span::styled(
            "Product Categories",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
    ];

    for (i, name) in std::iter::once("All")
        .chain(app.owners.iter().map(String::as_str))
        .enumerate()
    {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if i == active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(name, style));
    }

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_filter_panel(f: &mut Frame, area: Rect, app: &App) {
    // Search line
    let mut search_spans = vec![Span::styled(
        " Search: ",
        Style::default().fg(Color::Cyan),
    )];
    if app.search_focused {
        search_spans.push(Span::styled(
            format!("{}█", app.session.state().query),
            Style::default().fg(Color::White),
        ));
    } else if app.session.state().query.is_empty() {
        search_spans.push(Span::styled(
            "(press / to type)",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        search_spans.push(Span::styled(
            app.session.state().query.clone(),
            Style::default().fg(Color::White),
        ));
    }

    // Category buttons: [All] then one numbered button per category
    let selection = &app.session.state().categories;
    let mut category_spans = vec![Span::raw(" ")];

    let all_style = if selection.is_all() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    category_spans.push(Span::styled("[All]", all_style));

    for (i, title) in app.category_titles.iter().enumerate() {
        category_spans.push(Span::raw(" "));

        let style = if selection.contains(title) {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        category_spans.push(Span::styled(format!("[{} {}]", i + 1, title), style));
    }

    let panel = Paragraph::new(vec![Line::from(search_spans), Line::from(category_spans)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Filters "),
        );

    f.render_widget(panel, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    // "⇅" markers are decorative only; sorting is not wired up
    let header_cells = ["ID ⇅", "Product ⇅", "Category ⇅", "User ⇅"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.session.visible().iter().map(|good| {
        let user_color = match good.user.as_ref().map(|user| user.sex) {
            Some(Sex::Male) => Color::Blue,
            Some(Sex::Female) => Color::Red,
            None => Color::DarkGray,
        };

        let cells = vec![
            Cell::from(good.id.to_string())
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(good.name.clone()),
            Cell::from(good.category_label()),
            Cell::from(good.user_name().to_string()).style(Style::default().fg(user_color)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(20),
            Constraint::Length(24),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Products "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_no_matches(f: &mut Frame, area: Rect) {
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  No products matching selected criteria",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Products "),
    );

    f.render_widget(message, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.session.visible().len();

    let mut status_spans = vec![Span::styled(
        format!(" Row: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    // Show a summary while any filter is active
    if !app.session.state().is_default() {
        let state = app.session.state();
        let mut parts = Vec::new();

        if let OwnerFilter::Name(ref name) = state.owner {
            parts.push(format!("owner {}", name));
        }
        if !state.query.is_empty() {
            parts.push(format!("\"{}\"", state.query));
        }
        if let CategorySelection::Titles(titles) = &state.categories {
            parts.push(format!("{} categories", titles.len()));
        }

        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            format!("Filter: {}", parts.join(", ")),
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw(" ("));
        status_spans.push(Span::styled("r", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" reset)"));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("/", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Search | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Owner | "));
    status_spans.push(Span::styled("1-9", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Category | "));
    status_spans.push(Span::styled("a", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" All | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Nav | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}
