mod config;

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use scribe_editor_core::{
    EditorSelection, FormatAction, FormatOptions, FormatResult, Range, dispatch, format_heading,
    formatting_actions, utf16_len,
};

#[derive(Parser)]
#[command(version, about = "Scribe - apply markdown formatting actions to text", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a KDL config file
    #[arg(long, global = true, env = "SCRIBE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a formatting action by id (see `scribe actions`)
    Apply {
        /// Action id, e.g. bold or bullet-list
        id: String,

        #[command(flatten)]
        target: Target,
    },
    /// Toggle a heading of the given level on the cursor's line
    Heading {
        /// Heading level, clamped to 1..=6
        #[arg(allow_negative_numbers = true)]
        level: i64,

        #[command(flatten)]
        target: Target,
    },
    /// List the registered formatting actions
    Actions {
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where to read text from, what to select, and where the result goes.
#[derive(Args)]
struct Target {
    /// Selection start in UTF-16 code units (default: end of text)
    #[arg(long)]
    start: Option<usize>,

    /// Selection end in UTF-16 code units (default: same as start)
    #[arg(long)]
    end: Option<usize>,

    /// Read text from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the formatted text back to the input file
    #[arg(long, requires = "input")]
    in_place: bool,

    /// Print the full result (text, cursor, selection) as JSON
    #[arg(long, conflicts_with = "in_place")]
    json: bool,

    /// Strip markers from an already wrapped selection
    #[arg(long)]
    toggle_wrap: bool,
}

impl Target {
    fn read_text(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path).into_diagnostic(),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .into_diagnostic()?;
                Ok(text)
            }
        }
    }

    fn selection(&self, text: &str) -> EditorSelection {
        match self.start {
            Some(start) => Range::new(start, self.end.unwrap_or(start)).into(),
            None => EditorSelection::caret(utf16_len(text)),
        }
    }

    fn options(&self, mut options: FormatOptions) -> FormatOptions {
        if self.toggle_wrap {
            options.toggle_wrap = true;
        }
        options
    }

    fn write_result(&self, result: &FormatResult) -> Result<()> {
        if self.in_place {
            if let Some(path) = &self.input {
                std::fs::write(path, &result.formatted_text).into_diagnostic()?;
                tracing::info!(path = %path.display(), "wrote formatted text");
            }
            return Ok(());
        }

        let mut stdout = std::io::stdout().lock();
        if self.json {
            let json = serde_json::to_string_pretty(result).into_diagnostic()?;
            writeln!(stdout, "{json}").into_diagnostic()?;
        } else {
            write!(stdout, "{}", result.formatted_text).into_diagnostic()?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    init_miette()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Apply { id, target } => {
            let options = target.options(config::load_options(cli.config.as_deref())?);
            let text = target.read_text()?;
            let result = apply_action(&id, &text, target.selection(&text), &options)?;
            target.write_result(&result)?;
        }
        Commands::Heading { level, target } => {
            let text = target.read_text()?;
            let cursor = target.selection(&text).to_range().start;
            let result = format_heading(&text, cursor, level);
            target.write_result(&result)?;
        }
        Commands::Actions { json } => {
            if json {
                let json = serde_json::to_string_pretty(formatting_actions()).into_diagnostic()?;
                println!("{json}");
            } else {
                print!("{}", actions_table());
            }
        }
    }

    Ok(())
}

fn apply_action(
    id: &str,
    text: &str,
    selection: EditorSelection,
    options: &FormatOptions,
) -> Result<FormatResult> {
    if let Some(action) = FormatAction::from_id(id) {
        if action.is_line_anchored() && selection.has_selection() {
            tracing::debug!(id, "line action uses the selection start only");
        }
    }

    dispatch(id, text, selection, options).map_err(|err| {
        miette::miette!(
            help = "run `scribe actions` to list the available ids",
            "{err}"
        )
    })
}

fn actions_table() -> String {
    let mut table = String::new();
    for action in formatting_actions() {
        let line = format!(
            "{:<16} {:<16} {}",
            action.id, action.label, action.shortcut_hint
        );
        table.push_str(line.trim_end());
        table.push('\n');
    }
    table
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    let filter = match level {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_miette() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();
    Ok(())
}
