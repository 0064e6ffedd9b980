//! # CLI Layer
//!
//! This module is **one possible UI client** for tally. It is not the application itself.
//!
//! The CLI layer is the **only** place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Sets up logging
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: convert shell arguments into typed commands via clap
//! 2. **Context Setup**: resolve the data directory, load config, build the API
//! 3. **API Dispatch**: call the matching `TallyApi` method
//! 4. **Output Formatting**: turn the `CmdResult` into terminal output
//!
//! Errors bubble up to `main`, which prints them and exits with status 1.

use super::render::{
    render_choices, render_entries, render_history, render_messages, render_presets, render_stats,
    render_theme, render_winner,
};
use super::setup::{
    ChoiceCommands, Cli, Commands, DataCommands, EditArgs, FilterArgs, LogCommands, MiscCommands,
    PickerCommands, PresetCommands, ThemeArg,
};
use anyhow::{Context, Result};
use clap::Parser;
use tallyapp::api::TallyApi;
use tallyapp::commands::CmdResult;
use tallyapp::config::TallyConfig;
use tallyapp::init::initialize;
use tallyapp::model::{Choice, EntryPatch, ExerciseEntry, Theme};
use tallyapp::query::EntryFilter;
use tallyapp::store::fs_backend::FsBackend;
use tallyapp::transfer::export_filename;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct AppContext {
    api: TallyApi<FsBackend, StdRng>,
    config: TallyConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None => handle_log(&ctx, FilterArgs::default()),
        Some(Commands::Log(cmd)) => match cmd {
            LogCommands::Add(args) => {
                let date = args.date.unwrap_or_else(|| ctx.api.today());
                let mut entry = ExerciseEntry::new(date, &args.activity, args.category, args.duration);
                entry.sets = args.sets;
                entry.reps = args.reps;
                entry.weight = args.weight;
                entry.notes = args.notes;
                let result = ctx.api.add_entry(entry)?;
                print_messages(&result);
                Ok(())
            }
            LogCommands::Log(filter) => handle_log(&ctx, filter),
            LogCommands::Edit(args) => handle_edit(&ctx, args),
            LogCommands::Delete { id } => {
                let result = ctx.api.delete_entry(&id)?;
                print_messages(&result);
                Ok(())
            }
            LogCommands::Stats { days } => {
                let days = days.unwrap_or(ctx.config.stats_days);
                let result = ctx.api.stats(days)?;
                let theme = current_theme(&ctx)?;
                if let Some(report) = &result.stats {
                    print!("{}", render_stats(report, ctx.api.today(), theme));
                }
                print_messages(&result);
                Ok(())
            }
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Export { output } => {
                let path = match output {
                    Some(path) => path,
                    None => {
                        let cwd = std::env::current_dir().context("Cannot read current directory")?;
                        ctx.config
                            .export_dir(&cwd)
                            .join(export_filename(ctx.api.today()))
                    }
                };
                let result = ctx.api.export_entries(&path)?;
                print_messages(&result);
                Ok(())
            }
            DataCommands::Import { path } => {
                let result = ctx.api.import_entries(&path)?;
                print_messages(&result);
                Ok(())
            }
        },
        Some(Commands::Picker(cmd)) => match cmd {
            PickerCommands::Choices { action } => handle_choices(&ctx, action),
            PickerCommands::Spin => {
                let result = ctx.api.spin()?;
                if let Some(winner) = &result.winner {
                    print!("{}", render_winner(winner));
                }
                Ok(())
            }
            PickerCommands::History { limit } => {
                let limit = limit.unwrap_or(ctx.config.history_limit);
                let result = ctx.api.history(limit)?;
                print!("{}", render_history(&result.history));
                print_messages(&result);
                Ok(())
            }
            PickerCommands::Presets { action } => match action {
                None | Some(PresetCommands::List) => {
                    let result = ctx.api.list_presets()?;
                    print_messages(&result);
                    print!("{}", render_presets(&result.presets));
                    Ok(())
                }
                Some(PresetCommands::Use { name }) => {
                    let result = ctx.api.use_preset(&name.join(" "))?;
                    print_messages(&result);
                    print!("{}", render_choices(&result.choices));
                    Ok(())
                }
            },
        },
        Some(Commands::Misc(MiscCommands::Theme { value })) => {
            let result = match value {
                None => ctx.api.theme()?,
                Some(ThemeArg::Light) => ctx.api.set_theme(Theme::Light)?,
                Some(ThemeArg::Dark) => ctx.api.set_theme(Theme::Dark)?,
                Some(ThemeArg::Toggle) => ctx.api.toggle_theme()?,
            };
            if value.is_none() {
                if let Some(theme) = result.theme {
                    print!("{}", render_theme(theme));
                }
            }
            print_messages(&result);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout only carries rendered results.
/// `RUST_LOG` wins over the default filter; `-v` raises the default to debug.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "tally=debug,tallyapp=debug"
    } else {
        "tally=warn,tallyapp=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data.clone()).context("Failed to initialize tally")?;
    debug!(data_dir = %ctx.data_dir.display(), "using data directory");
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

fn current_theme(ctx: &AppContext) -> Result<Theme> {
    Ok(ctx.api.theme()?.theme.unwrap_or_default())
}

fn print_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}

fn handle_log(ctx: &AppContext, args: FilterArgs) -> Result<()> {
    let mut filter = EntryFilter::default();
    if let Some(term) = args.search {
        filter = filter.with_search(term);
    }
    if let Some(category) = args.category {
        filter = filter.with_category(category);
    }
    if let Some(from) = args.from {
        filter = filter.with_date_from(from);
    }
    if let Some(to) = args.to {
        filter = filter.with_date_to(to);
    }

    let result = ctx.api.list_entries(&filter)?;
    let theme = current_theme(ctx)?;
    print!("{}", render_entries(&result.listed_entries, theme));
    print_messages(&result);
    Ok(())
}

fn handle_edit(ctx: &AppContext, args: EditArgs) -> Result<()> {
    let patch = EntryPatch {
        date: args.date,
        activity: args.activity,
        category: args.category,
        duration_min: args.duration,
        sets: nullable(args.sets, args.clear_sets),
        reps: nullable(args.reps, args.clear_reps),
        weight: nullable(args.weight, args.clear_weight),
        notes: nullable(args.notes, args.clear_notes),
    };
    let result = ctx.api.edit_entry(&args.id, patch)?;
    let theme = current_theme(ctx)?;
    print!("{}", render_entries(&result.affected_entries, theme));
    print_messages(&result);
    Ok(())
}

/// `--x VALUE` sets, `--clear-x` unsets, neither leaves the field alone.
fn nullable<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

fn handle_choices(ctx: &AppContext, action: Option<ChoiceCommands>) -> Result<()> {
    let result = match action {
        None | Some(ChoiceCommands::List) => ctx.api.list_choices()?,
        Some(ChoiceCommands::Add { label, weight }) => ctx.api.add_choice(&label, weight)?,
        Some(ChoiceCommands::Remove { position }) => ctx.api.remove_choice(position)?,
        Some(ChoiceCommands::Save { pairs }) => {
            let edited = pairs.iter().map(|pair| parse_pair(pair)).collect();
            ctx.api.save_choices(edited)?
        }
        Some(ChoiceCommands::Clear) => ctx.api.clear_choices()?,
    };
    print!("{}", render_choices(&result.choices));
    print_messages(&result);
    Ok(())
}

/// `LABEL=WEIGHT`, splitting on the last `=`. A missing or unreadable weight
/// becomes 0, which makes the row ineligible and drops it on save.
fn parse_pair(pair: &str) -> Choice {
    match pair.rsplit_once('=') {
        Some((label, weight)) => Choice::new(label.trim(), weight.trim().parse().unwrap_or(0.0)),
        None => Choice::new(pair.trim(), 0.0),
    }
}
