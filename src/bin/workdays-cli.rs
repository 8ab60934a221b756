#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};
use workday_calendar::{
    config::{self, EngineConfig},
    io, DateInterval, WorkdayEngine, WorkingDays,
};

/// Jours ouvrés et calendrier des fermetures sur un intervalle
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration
    #[arg(long, global = true)]
    config: Option<String>,

    /// CSV de fermetures ponctuelles (`date,event[,options]`)
    #[arg(long, global = true)]
    closures: Option<String>,

    /// Jours travaillés, 0=dimanche..6=samedi, ex. "1,2,3,4,5"
    #[arg(long, global = true)]
    days: Option<String>,

    /// Ne pas ajouter Pâques / lundi de Pâques
    #[arg(long, global = true)]
    no_easter: bool,

    /// Format strftime des dates en sortie
    #[arg(long, global = true)]
    format: Option<String>,

    /// Fuseau IANA, ex. "Europe/Rome"
    #[arg(long, global = true)]
    timezone: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct Range {
    /// Date de début (YYYY-MM-DD)
    start: String,
    /// Date de fin incluse (YYYY-MM-DD)
    end: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compter les jours travaillés
    Count {
        #[command(flatten)]
        range: Range,
    },

    /// Lister les fermetures et optionnellement exporter
    Calendar {
        #[command(flatten)]
        range: Range,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let config = build_config(&cli)?;

    let engine = match &cli.cmd {
        Commands::Count { range } | Commands::Calendar { range, .. } => {
            let interval = DateInterval::parse(&range.start, &range.end)?;
            WorkdayEngine::with_config(interval, config)?
        }
    };

    match cli.cmd {
        Commands::Count { .. } => {
            println!("{}", engine.workday_count());
        }
        Commands::Calendar {
            out_json, out_csv, ..
        } => {
            if let Some(path) = out_json {
                io::export_calendar_json(path, engine.calendar())?;
            }
            if let Some(path) = out_csv {
                io::export_calendar_csv(path, engine.calendar())?;
            }
            for entry in engine.calendar().values() {
                println!("{} | {} | {}", entry.date, entry.event, entry.kind.as_str());
            }
        }
    }

    let diagnostics = engine.diagnostics();
    let code = if diagnostics.is_empty() {
        0
    } else {
        eprintln!("Skipped {} malformed entr(y/ies)", diagnostics.len());
        for err in diagnostics {
            eprintln!("warning: {err}");
        }
        // Code 2 = WARNING/INCOMPLETE
        2
    };

    std::process::exit(code);
}

fn build_config(cli: &Cli) -> Result<EngineConfig> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_config_from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(path) = &cli.closures {
        cfg.custom_closures.extend(io::import_closures_csv(path)?);
    }
    if let Some(list) = &cli.days {
        let days = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u8>()
                    .map_err(|_| anyhow::anyhow!("invalid weekday: {s}"))
            })
            .collect::<Result<Vec<u8>>>()?;
        cfg.working_days = WorkingDays::new(days)?;
    }
    if cli.no_easter {
        cfg.calculate_easter = false;
    }
    if let Some(format) = &cli.format {
        cfg.output_format = format.clone();
    }
    if let Some(name) = &cli.timezone {
        cfg.timezone = config::parse_timezone(name)?;
    }
    Ok(cfg)
}
