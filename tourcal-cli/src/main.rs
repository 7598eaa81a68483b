mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tourcal_core::calendar::Granularity;
use tourcal_core::date_range::DateRange;
use tourcal_core::settings::Settings;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tourcal")]
#[command(about = "Browse and manage tour bookings on a calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Month {
        /// Any date in the month (YYYY-MM-DD or e.g. "next month"); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Step this many months forward (or back, if negative)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    /// Show a Monday-to-Sunday week
    Week {
        /// Any date in the week; defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Step this many weeks forward (or back, if negative)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    /// Show one day by hour
    Day {
        /// The day to show; defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Step this many days forward (or back, if negative)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    /// Booking counts for this month, week and today
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a booking (prompts for anything not given)
    Add {
        /// Customer name
        #[arg(short, long)]
        customer: Option<String>,

        /// Tour name
        #[arg(short, long)]
        tour: Option<String>,

        /// Tour category (paragliding, atv, jeep_safari, diving, horse_riding, boat, other)
        #[arg(long)]
        category: Option<String>,

        /// Tour date (YYYY-MM-DD or e.g. "next friday")
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        adults: Option<u32>,

        #[arg(long)]
        children: Option<u32>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Sales channel (website, phone, walk-in, ...)
        #[arg(long, default_value = "cli")]
        channel: String,
    },
    /// Change a booking's status
    Status {
        id: String,

        /// pending, confirmed, completed or cancelled
        status: String,
    },
    /// Export confirmed bookings as .ics files
    Export {
        /// Target directory; defaults to export_dir from the config
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,

        /// Only bookings on or after this date (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Only bookings on or before this date (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Show what would be exported without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show or set the display language
    Lang {
        /// en or tr
        language: Option<String>,
    },
    /// Log in as admin
    Login,
    /// Show session state
    Session,
    /// Clear session state
    Logout,
    /// Show config and data paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if let Commands::Config = cli.command {
        return commands::config::run();
    }

    let settings = Settings::load()?;

    match cli.command {
        Commands::Month { date, offset } => {
            commands::view::run(&settings, Granularity::Month, date.as_deref(), offset)
        }
        Commands::Week { date, offset } => {
            commands::view::run(&settings, Granularity::Week, date.as_deref(), offset)
        }
        Commands::Day { date, offset } => {
            commands::view::run(&settings, Granularity::Day, date.as_deref(), offset)
        }
        Commands::Stats { json } => commands::stats::run(&settings, json),
        Commands::Add {
            customer,
            tour,
            category,
            date,
            time,
            adults,
            children,
            email,
            phone,
            channel,
        } => commands::add::run(
            &settings,
            commands::add::AddArgs {
                customer,
                tour,
                category,
                date,
                time,
                adults,
                children,
                email,
                phone,
                channel,
            },
        ),
        Commands::Status { id, status } => commands::status::run(&settings, &id, &status),
        Commands::Export {
            out,
            from,
            to,
            dry_run,
        } => {
            let range = match (from.as_deref(), to.as_deref()) {
                (Some(from), Some(to)) => Some(DateRange::from_args(from, to)?),
                _ => None,
            };
            commands::export::run(&settings, out, range, dry_run)
        }
        Commands::Lang { language } => commands::lang::run(&settings, language.as_deref()),
        Commands::Login => commands::login::run(&settings),
        Commands::Session => commands::session::run(&settings),
        Commands::Logout => commands::logout::run(&settings),
        Commands::Config => commands::config::run(),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
