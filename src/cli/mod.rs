//! Command-line inspection of scheduled item snapshots.

pub mod output;
pub mod render;
pub mod table;

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::calendar::{MonthGrid, WeekStart};
use crate::config::{Config, ConfigManager};
use crate::costs::summarize_month;
use crate::errors::{Result, ScheduleError};
use crate::filter::{apply_filters_with_report, FilterState, FilterWarning, ThresholdMetric};
use crate::records::{ItemSource, JsonFileSource, Snapshot};
use crate::schedule::{CalendarMonth, Category};
use crate::utils::build_info;

use self::output::{is_muted, set_preferences, styled, MessageKind, OutputPreferences};
use self::render::{render_grid, render_items, render_totals, Money};

/// Inspect campaign calendar snapshots
#[derive(Debug, Parser)]
#[command(name = "campaign_calendar_cli", version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding an array of item records (overrides the configured path)
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Application directory containing config.json
    #[arg(long, global = true, env = "CAMPAIGN_CALENDAR_HOME")]
    pub home: Option<PathBuf>,

    /// ASCII-only output without colour
    #[arg(long, global = true)]
    pub plain: bool,

    /// Suppress informational lines
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the six-week grid for a month
    Grid {
        #[command(flatten)]
        period: PeriodArgs,
        /// First day of the week (overrides config)
        #[arg(long)]
        week_start: Option<WeekStart>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Budget totals for a month, by category
    Totals {
        #[command(flatten)]
        period: PeriodArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List the items that pass the given filters
    Filter {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print build information
    Version,
}

#[derive(Debug, Args)]
pub struct PeriodArgs {
    #[arg(long)]
    pub year: i32,
    /// Month number, 1-12
    #[arg(long)]
    pub month: u32,
}

impl PeriodArgs {
    fn month(&self) -> Result<CalendarMonth> {
        CalendarMonth::new(self.year, self.month)
    }
}

#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive text matched against name and description
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub category: Option<Category>,
    /// Minimum audience reach, e.g. 100K or 1.5M
    #[arg(long, conflicts_with = "min_budget")]
    pub min_reach: Option<String>,
    /// Minimum budget in whole currency units, e.g. 5K
    #[arg(long)]
    pub min_budget: Option<String>,
    /// Tag to match; repeat for any-of matching
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl FilterArgs {
    pub fn to_state(&self) -> FilterState {
        let mut state = FilterState::default();
        if let Some(search) = &self.search {
            state = state.with_search(search.clone());
        }
        if let Some(category) = self.category {
            state = state.with_category(category);
        }
        if let Some(raw) = &self.min_reach {
            state = state.with_threshold(ThresholdMetric::Reach, raw.clone());
        } else if let Some(raw) = &self.min_budget {
            state = state.with_threshold(ThresholdMetric::Budget, raw.clone());
        }
        for tag in &self.tags {
            state = state.with_tag(tag.clone());
        }
        state
    }
}

pub fn describe_warning(warning: &FilterWarning) -> String {
    match warning {
        FilterWarning::UnparseableThreshold { input } => {
            format!("could not read threshold `{input}`; showing results without it")
        }
    }
}

/// Parses process arguments and runs the selected command against stdout.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    execute(&cli, &mut handle)
}

fn load_config(cli: &Cli) -> Result<(Config, ConfigManager)> {
    let manager = match &cli.home {
        Some(home) => ConfigManager::with_base_dir(home.clone())?,
        None => ConfigManager::new()?,
    };
    Ok((manager.load()?, manager))
}

fn load_snapshot(cli: &Cli, config: &Config) -> Result<Snapshot> {
    let path = cli
        .snapshot
        .clone()
        .or_else(|| config.snapshot_path.clone())
        .ok_or_else(|| {
            ScheduleError::Config("no snapshot file given; pass --snapshot <FILE>".into())
        })?;
    let snapshot = JsonFileSource::new(path).load_snapshot()?;
    if !snapshot.quarantined.is_empty() {
        tracing::warn!(count = snapshot.quarantined.len(), "snapshot has rejected records");
    }
    Ok(snapshot)
}

fn write_quarantine(out: &mut impl Write, snapshot: &Snapshot) -> Result<()> {
    for rejected in &snapshot.quarantined {
        let id = rejected.record.id.as_deref().unwrap_or("<missing>");
        writeln!(
            out,
            "{}",
            styled(
                MessageKind::Warning,
                format!("skipped record {id}: {}", rejected.reason)
            )
        )?;
    }
    Ok(())
}

/// Runs `cli` and writes the rendered result to `out`.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<()> {
    set_preferences(OutputPreferences {
        plain_mode: cli.plain,
        quiet_mode: cli.quiet,
    });
    if cli.plain {
        colored::control::set_override(false);
    }

    if let Command::Version = cli.command {
        writeln!(out, "{}", build_info::current().summary())?;
        return Ok(());
    }

    let (config, _manager) = load_config(cli)?;
    let snapshot = load_snapshot(cli, &config)?;
    let currency = config.currency_code();
    let locale = config.locale_config();
    let money = Money {
        currency: &currency,
        locale: &locale,
    };

    match &cli.command {
        Command::Grid {
            period,
            week_start,
            filters,
        } => {
            let outcome = apply_filters_with_report(&snapshot.items, &filters.to_state());
            let week_start = week_start.unwrap_or(config.week_start);
            let grid = MonthGrid::build(period.month()?, week_start, &outcome.items);
            writeln!(out, "{}", render_grid(&grid))?;
            for warning in &outcome.warnings {
                writeln!(out, "{}", styled(MessageKind::Warning, describe_warning(warning)))?;
            }
        }
        Command::Totals { period, filters } => {
            let summary = summarize_month(&snapshot.items, period.month()?, &filters.to_state());
            writeln!(out, "{}", render_totals(&summary, &money))?;
        }
        Command::Filter { filters } => {
            let outcome = apply_filters_with_report(&snapshot.items, &filters.to_state());
            writeln!(out, "{}", render_items(&outcome.items, &money))?;
            for warning in &outcome.warnings {
                writeln!(out, "{}", styled(MessageKind::Warning, describe_warning(warning)))?;
            }
        }
        Command::Version => {}
    }

    write_quarantine(out, &snapshot)?;
    if !is_muted(MessageKind::Info) {
        writeln!(
            out,
            "{}",
            styled(
                MessageKind::Info,
                format!("{} item(s) loaded", snapshot.items.len())
            )
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn filter_args_map_to_state() {
        let args = FilterArgs {
            search: Some("launch".into()),
            category: Some(Category::Email),
            min_reach: Some("10K".into()),
            min_budget: None,
            tags: vec!["instagram".into()],
        };
        let state = args.to_state();
        assert_eq!(state.search_text, "launch");
        assert_eq!(state.min_threshold.unwrap().metric, ThresholdMetric::Reach);
        assert!(state.tags.contains("instagram"));
    }
}
