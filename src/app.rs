//! Main application state and event handling.
//!
//! The app follows an update/view split: [`App::update`] applies one terminal
//! event and drains the message queue, and [`App::view`] draws the current
//! state. Table handlers never touch the app directly. They post an
//! [`AppMessage`] through a channel that `update` drains afterwards.

use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};
use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::error::Result;
use crate::events::{Event, KeyContext};
use crate::fixtures::{self, Dataset, RegistrationSource};
use crate::table::{Column, ExternalPagination, RowId, TableOptions, TableRow, TableView};
use crate::ui::{render_context_help, theme, DataTable, DetailView};

/// Messages posted by table handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A row was activated with Enter.
    RowActivated { dataset: Dataset, id: RowId },
    /// The registrations table asked for another page.
    PageRequested(usize),
    /// The registrations table asked for another page size.
    PageSizeRequested(usize),
}

/// Type-erased access to one tab's table.
trait TabContent {
    fn on_key(&mut self, key: KeyEvent) -> bool;
    fn searching(&self) -> bool;
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);
    /// Fill `detail` with the activated row `id`. Returns false if no loaded
    /// row has it.
    fn open_detail(&self, title: String, id: &RowId, detail: &mut DetailView) -> bool;
}

impl<T: TableRow> TabContent for DataTable<T> {
    fn on_key(&mut self, key: KeyEvent) -> bool {
        self.handle_input(key)
    }

    fn searching(&self) -> bool {
        self.is_searching()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        self.render(frame, area, focused);
    }

    fn open_detail(&self, title: String, id: &RowId, detail: &mut DetailView) -> bool {
        let view = self.view();
        // Enter activates the row under the cursor, so prefer it over the
        // first id match when ids repeat.
        let activated = self
            .selected_row()
            .filter(|row| &row.id() == id)
            .or_else(|| view.rows().iter().find(|row| &row.id() == id));
        match activated {
            Some(row) => {
                detail.show(title, row, view.columns());
                true
            }
            None => false,
        }
    }
}

/// One table per dataset.
struct Tables {
    events: DataTable<fixtures::Event>,
    speakers: DataTable<fixtures::Speaker>,
    sponsors: DataTable<fixtures::Sponsor>,
    venues: DataTable<fixtures::Venue>,
    registrations: DataTable<fixtures::Registration>,
    agents: DataTable<fixtures::Agent>,
    tasks: DataTable<fixtures::Task>,
}

impl Tables {
    fn get(&self, dataset: Dataset) -> &dyn TabContent {
        match dataset {
            Dataset::Events => &self.events,
            Dataset::Speakers => &self.speakers,
            Dataset::Sponsors => &self.sponsors,
            Dataset::Venues => &self.venues,
            Dataset::Registrations => &self.registrations,
            Dataset::Agents => &self.agents,
            Dataset::Tasks => &self.tasks,
        }
    }

    fn get_mut(&mut self, dataset: Dataset) -> &mut dyn TabContent {
        match dataset {
            Dataset::Events => &mut self.events,
            Dataset::Speakers => &mut self.speakers,
            Dataset::Sponsors => &mut self.sponsors,
            Dataset::Venues => &mut self.venues,
            Dataset::Registrations => &mut self.registrations,
            Dataset::Agents => &mut self.agents,
            Dataset::Tasks => &mut self.tasks,
        }
    }
}

/// The dashboard.
pub struct App {
    /// The tab on screen.
    current: Dataset,
    tables: Tables,
    /// Popup for the last activated row.
    detail: DetailView,
    /// Paginated source behind the registrations tab.
    source: RegistrationSource,
    receiver: Receiver<AppMessage>,
    should_quit: bool,
}

impl App {
    /// Create the app with the configured default dataset.
    ///
    /// # Errors
    ///
    /// Fails if a bundled fixture cannot be parsed or a table cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_dataset(config, config.settings.dataset())
    }

    /// Create the app with `dataset` on screen.
    pub fn with_dataset(config: &Config, dataset: Dataset) -> Result<Self> {
        let settings = &config.settings;
        let (sender, receiver) = mpsc::channel();
        let page_size = settings.page_size;
        let vim = settings.vim_mode;

        let source = RegistrationSource::new();
        let first = source.fetch(1, page_size);
        let pagination = ExternalPagination::new(
            first.page,
            first.page_size,
            first.total,
            notify(&sender, AppMessage::PageRequested),
            notify(&sender, AppMessage::PageSizeRequested),
        );
        let registrations = TableView::new(
            first.rows,
            fixtures::registration_columns(),
            activation_options(Dataset::Registrations, &sender)
                .external_pagination(pagination),
        )?;

        let tables = Tables {
            events: local_table(
                Dataset::Events,
                fixtures::events()?,
                fixtures::event_columns(),
                page_size,
                &sender,
            )?
            .with_vim_keys(vim),
            speakers: local_table(
                Dataset::Speakers,
                fixtures::speakers()?,
                fixtures::speaker_columns(),
                page_size,
                &sender,
            )?
            .with_vim_keys(vim),
            sponsors: local_table(
                Dataset::Sponsors,
                fixtures::sponsors()?,
                fixtures::sponsor_columns(),
                page_size,
                &sender,
            )?
            .with_vim_keys(vim),
            venues: local_table(
                Dataset::Venues,
                fixtures::venues()?,
                fixtures::venue_columns(),
                page_size,
                &sender,
            )?
            .with_vim_keys(vim),
            registrations: DataTable::new(registrations).with_vim_keys(vim),
            agents: local_table(
                Dataset::Agents,
                fixtures::agents()?,
                fixtures::agent_columns(),
                page_size,
                &sender,
            )?
            .with_vim_keys(vim),
            tasks: local_table(
                Dataset::Tasks,
                fixtures::tasks()?,
                fixtures::task_columns(),
                page_size,
                &sender,
            )?
            .with_vim_keys(vim),
        };

        info!(%dataset, page_size, "Dashboard created");

        Ok(Self {
            current: dataset,
            tables,
            detail: DetailView::new(),
            source,
            receiver,
            should_quit: false,
        })
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The tab on screen.
    pub fn current(&self) -> Dataset {
        self.current
    }

    /// The row detail popup.
    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    /// The registrations table.
    pub fn registrations(&self) -> &DataTable<fixtures::Registration> {
        &self.tables.registrations
    }

    /// Switch to another tab.
    pub fn select(&mut self, dataset: Dataset) {
        if dataset != self.current {
            debug!(from = %self.current, to = %dataset, "Switching tab");
            self.current = dataset;
        }
    }

    /// The key context for the help bar.
    pub fn key_context(&self) -> KeyContext {
        if self.detail.is_visible() {
            KeyContext::Detail
        } else if self.tables.get(self.current).searching() {
            KeyContext::Search
        } else {
            KeyContext::Table
        }
    }

    /// Apply one event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                trace!(key = ?key.code, modifiers = ?key.modifiers, "Key event");
                self.handle_key_event(key);
                self.process_messages();
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.detail.is_visible() {
            if key.code == KeyCode::Char('q') {
                self.quit();
            } else {
                self.detail.handle_input(key);
            }
            return;
        }

        // The search bar owns every key while it is open.
        let table = self.tables.get_mut(self.current);
        if table.searching() {
            table.on_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.select(self.current.next()),
            KeyCode::BackTab => self.select(self.current.previous()),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(&dataset) = Dataset::ALL.get(index) {
                    self.select(dataset);
                }
            }
            _ => {
                table.on_key(key);
            }
        }
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }

    /// Handle every queued message.
    pub fn process_messages(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.handle_message(message);
        }
    }

    fn handle_message(&mut self, message: AppMessage) {
        debug!(?message, "Handling message");
        match message {
            AppMessage::RowActivated { dataset, id } => {
                let title = format!("{} {}", dataset.title(), id);
                if !self.tables.get(dataset).open_detail(title, &id, &mut self.detail) {
                    warn!(%dataset, %id, "Activated row is no longer loaded");
                }
            }
            AppMessage::PageRequested(page) => {
                let page_size = self
                    .tables
                    .registrations
                    .view()
                    .page_info()
                    .map_or(1, |info| info.page_size);
                self.load_registrations(page, page_size);
            }
            AppMessage::PageSizeRequested(page_size) => self.load_registrations(1, page_size),
        }
    }

    fn load_registrations(&mut self, page: usize, page_size: usize) {
        let loaded = self.source.fetch(page, page_size);
        info!(
            page = loaded.page,
            page_size = loaded.page_size,
            "Loaded registrations page"
        );
        let view = self.tables.registrations.view_mut();
        view.set_rows(loaded.rows);
        view.set_external_page(loaded.page, loaded.page_size, loaded.total);
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_tabs(frame, chunks[0]);
        let focused = !self.detail.is_visible();
        self.tables
            .get_mut(self.current)
            .draw(frame, chunks[1], focused);
        render_context_help(frame, chunks[2], self.key_context());

        self.detail.render(frame, area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let titles: Vec<Line> = Dataset::ALL
            .iter()
            .enumerate()
            .map(|(i, dataset)| {
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), t.muted_style()),
                    Span::raw(dataset.title()),
                ])
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.current.index())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(t.muted_style())
                    .title(Span::styled(
                        " confdeck ",
                        Style::default().fg(t.highlight).add_modifier(Modifier::BOLD),
                    )),
            )
            .highlight_style(t.selected_style());
        frame.render_widget(tabs, area);
    }
}

/// A handler that wraps the value it receives in a message and posts it.
fn notify(
    sender: &Sender<AppMessage>,
    wrap: fn(usize) -> AppMessage,
) -> impl FnMut(usize) + 'static {
    let sender = sender.clone();
    move |value| {
        if sender.send(wrap(value)).is_err() {
            warn!("App message channel closed");
        }
    }
}

/// Searchable options whose row handler posts [`AppMessage::RowActivated`].
fn activation_options<T: TableRow>(dataset: Dataset, sender: &Sender<AppMessage>) -> TableOptions<T> {
    let sender = sender.clone();
    TableOptions::default()
        .title(dataset.title())
        .searchable()
        .on_row_activate(move |row: &T| {
            let message = AppMessage::RowActivated {
                dataset,
                id: row.id(),
            };
            if sender.send(message).is_err() {
                warn!("App message channel closed");
            }
        })
}

fn local_table<T: TableRow>(
    dataset: Dataset,
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    page_size: usize,
    sender: &Sender<AppMessage>,
) -> Result<DataTable<T>> {
    let options = activation_options(dataset, sender).page_size(page_size);
    Ok(DataTable::new(TableView::new(rows, columns, options)?))
}
