//! Command-line interface.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::config::{Config, ConfigError, Settings};
use crate::error::{AppError, Result};
use crate::fixtures::{self, Dataset};
use crate::table::{Column, SortDirection, TableOptions, TableRow, TableView};

/// Browse conference planning data in the terminal.
#[derive(Parser, Debug)]
#[command(name = "confdeck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Rows per page, overriding the config file
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive dashboard (default)
    Tui {
        /// Dataset to show first
        #[arg(long)]
        dataset: Option<Dataset>,
    },

    /// Print one page of a dataset as tab-separated text
    List(ListArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// events, speakers, sponsors, venues, registrations, agents or tasks
    pub dataset: Dataset,

    /// Keep rows containing this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,

    /// Column key to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to print, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl Cli {
    /// The subcommand, with `tui` as the default.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Tui { dataset: None })
    }

    /// Apply command-line overrides on top of the loaded config.
    ///
    /// # Errors
    ///
    /// Returns a validation error if an override is out of range.
    pub fn apply_overrides(&self, config: &mut Config) -> std::result::Result<(), ConfigError> {
        if let Some(page_size) = self.page_size {
            config.settings.page_size = page_size;
        }
        if let Some(Command::Tui {
            dataset: Some(dataset),
        }) = &self.command
        {
            config.settings.default_dataset = dataset.name().to_string();
        }
        config.validate()
    }
}

/// Run `confdeck list`, writing to `out`.
pub fn run_list(args: &ListArgs, settings: &Settings, out: &mut impl Write) -> Result<()> {
    debug!(dataset = %args.dataset, page = args.page, "Listing dataset");
    match args.dataset {
        Dataset::Events => print_table(
            fixtures::events()?,
            fixtures::event_columns(),
            args,
            settings,
            out,
        ),
        Dataset::Speakers => print_table(
            fixtures::speakers()?,
            fixtures::speaker_columns(),
            args,
            settings,
            out,
        ),
        Dataset::Sponsors => print_table(
            fixtures::sponsors()?,
            fixtures::sponsor_columns(),
            args,
            settings,
            out,
        ),
        Dataset::Venues => print_table(
            fixtures::venues()?,
            fixtures::venue_columns(),
            args,
            settings,
            out,
        ),
        Dataset::Registrations => print_table(
            fixtures::registrations(),
            fixtures::registration_columns(),
            args,
            settings,
            out,
        ),
        Dataset::Agents => print_table(
            fixtures::agents()?,
            fixtures::agent_columns(),
            args,
            settings,
            out,
        ),
        Dataset::Tasks => print_table(
            fixtures::tasks()?,
            fixtures::task_columns(),
            args,
            settings,
            out,
        ),
    }
}

fn print_table<T: TableRow>(
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    args: &ListArgs,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<()> {
    let options = TableOptions::default()
        .searchable()
        .page_size(settings.page_size);
    let mut view = TableView::new(rows, columns, options)?;

    if let Some(filter) = &args.filter {
        view.set_filter_text(filter.as_str());
    }
    if let Some(key) = &args.sort {
        if !view.toggle_sort(key) {
            return Err(AppError::other(format!(
                "Cannot sort {} by '{}'",
                args.dataset, key
            )));
        }
        if args.desc && view.sort().direction != SortDirection::Descending {
            view.toggle_sort(key);
        }
    }
    view.request_page(args.page);

    let header: Vec<&str> = view.columns().iter().map(|c| c.header.as_str()).collect();
    writeln!(out, "{}", header.join("\t"))?;

    for row in view.page_rows() {
        let cells: Vec<String> = view
            .columns()
            .iter()
            .map(|column| row.cell(column.key).to_string())
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }

    if let Some(info) = view.page_info() {
        writeln!(out, "{}", info)?;
    }
    Ok(())
}
