use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use jakal::calendar::month_name;
use jakal::{CalendarEngine, JavaneseDate, MonthData};
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
    engine: CalendarEngine,
    pub today: NaiveDate,
    pub month: MonthData,
    pub state: TableState,
    pub show_detail: bool,
}

impl App {
    pub fn new(engine: CalendarEngine, today: NaiveDate) -> Result<Self> {
        let month = engine.month_data(today.year(), today.month())?;
        let mut state = TableState::default();
        state.select(Some(today.day0() as usize));

        Ok(Self {
            engine,
            today,
            month,
            state,
            show_detail: false,
        })
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn selected_date(&self) -> Option<&JavaneseDate> {
        self.state.selected().and_then(|i| self.month.dates.get(i))
    }

    /// Load `year`/`month`, keeping the selected row where the new month allows.
    fn load(&mut self, year: i32, month: u32) -> Result<()> {
        let data = self.engine.month_data(year, month)?;
        let last = data.dates.len().saturating_sub(1);
        let selected = self.state.selected().unwrap_or(0).min(last);

        self.month = data;
        self.state.select(Some(selected));
        Ok(())
    }

    pub fn next_month(&mut self) -> Result<()> {
        let (year, month) = match self.month.month {
            12 => (self.month.year + 1, 1),
            m => (self.month.year, m + 1),
        };
        self.load(year, month)
    }

    pub fn previous_month(&mut self) -> Result<()> {
        let (year, month) = match self.month.month {
            1 => (self.month.year - 1, 12),
            m => (self.month.year, m - 1),
        };
        self.load(year, month)
    }

    pub fn jump_today(&mut self) -> Result<()> {
        self.load(self.today.year(), self.today.month())?;
        self.state.select(Some(self.today.day0() as usize));
        Ok(())
    }

    pub fn next(&mut self) {
        let len = self.month.dates.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => len - 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month.month), self.month.year)
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Right | KeyCode::Char('l') => app.next_month()?,
                KeyCode::Left | KeyCode::Char('h') => app.previous_month()?,
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Char('t') => app.jump_today()?,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Month header
            Constraint::Min(0),    // Day grid
            Constraint::Length(3), // Key help
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        render_table(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        render_table(f, chunks[1], app);
    }

    render_status_bar(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let javanese_year = app.month.dates.first().map(|d| d.javanese_year).unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            app.title(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Tahun Jawa {}", javanese_year),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Hari ini: {}", app.engine.convert(app.today).weton),
            Style::default().fg(Color::Green),
        ),
    ]);

    let header = Paragraph::new(vec![line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" jakal "),
    );

    f.render_widget(header, area);
}

fn neptu_color(neptu: u8) -> Color {
    match neptu {
        0..=9 => Color::Blue,
        10..=13 => Color::White,
        14..=16 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Tanggal", "Hari", "Pasaran", "Neptu"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let today = app.today;
    let rows = app.month.dates.iter().map(|jd| {
        let date_style = if jd.gregorian_date == today {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(jd.gregorian_date.format("%Y-%m-%d").to_string()).style(date_style),
            Cell::from(jd.day.name()),
            Cell::from(jd.pasaran.name()),
            Cell::from(jd.neptu.to_string()).style(Style::default().fg(neptu_color(jd.neptu))),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} ", app.title())),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Detail Weton ");

    let jd = match app.selected_date() {
        Some(jd) => jd,
        None => {
            f.render_widget(Paragraph::new("Tidak ada tanggal dipilih").block(block), area);
            return;
        }
    };

    let next = app.engine.next_occurrence(app.today, &jd.weton.to_string());
    let next_text = match next {
        Some(occ) if occ.days_until == 0 => "hari ini".to_string(),
        Some(occ) => format!("{} ({} hari lagi)", occ.date.format("%Y-%m-%d"), occ.days_until),
        None => "-".to_string(),
    };

    let content = vec![
        Line::from(""),
        Line::from(vec![label("  Tanggal: "), Span::raw(jd.gregorian_date.format("%Y-%m-%d").to_string())]),
        Line::from(vec![label("  Weton: "), Span::raw(jd.weton.to_string())]),
        Line::from(vec![label("  Tahun Jawa: "), Span::raw(jd.javanese_year.to_string())]),
        Line::from(""),
        Line::from("  ─────────────────────────────"),
        Line::from(""),
        Line::from(vec![
            label("  Neptu hari: "),
            Span::raw(format!("{} ({})", jd.day.neptu(), jd.day.name())),
        ]),
        Line::from(vec![
            label("  Neptu pasaran: "),
            Span::raw(format!("{} ({})", jd.pasaran.neptu(), jd.pasaran.name())),
        ]),
        Line::from(vec![
            label("  Total neptu: "),
            Span::styled(
                jd.neptu.to_string(),
                Style::default().fg(neptu_color(jd.neptu)).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![label("  Berikutnya dari hari ini: "), Span::raw(next_text)]),
    ];

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(" bulan  "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" hari  "),
        Span::styled("t", Style::default().fg(Color::Yellow)),
        Span::raw(" hari ini  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" detail  "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" keluar"),
    ];

    let status_bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}
