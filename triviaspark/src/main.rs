//! triviaspark - CLI for TriviaSpark event tools
//!
//! This tool provides commands for:
//! - Showing the organizer dashboard (insights plus upcoming/recent lists)
//! - Listing upcoming, recent, and currently active events
//! - Building and validating participant join URLs and QR links
//!
//! Uses XDG Base Directory specification for file locations:
//! - Config: $XDG_CONFIG_HOME/triviaspark/config.toml (~/.config/triviaspark/config.toml)
//! - Logs: $XDG_STATE_HOME/triviaspark/triviaspark.log

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use triviaspark_core::analytics::{partition_events, DashboardStats};
use triviaspark_core::api::EventSnapshot;
use triviaspark_core::{format, join, Config, EventRecord, EventsClient};

#[derive(Parser)]
#[command(name = "triviaspark")]
#[command(about = "TriviaSpark event tools")]
#[command(version)]
struct Args {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print event lists as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show API configuration and backend reachability
    Status,

    /// Show the organizer dashboard (insights, stats, upcoming/recent events)
    Dashboard,

    /// List upcoming events, soonest first
    Upcoming {
        /// Number of events to show (default: from config)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List recent events, most recent first
    Recent {
        /// Number of events to show (default: from config)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List currently active events
    Active,

    /// Build a participant join URL and QR image link
    Join {
        /// Join code (trivia-xxxxxxxx); generates a new one when omitted
        code: Option<String>,

        /// Origin for the join URL (default: api.base_url from config)
        #[arg(short, long)]
        origin: Option<String>,

        /// QR image size in pixels
        #[arg(short, long, default_value_t = 200)]
        size: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;

    // Initialize logging if verbose
    let _log_guard = if args.verbose {
        Some(
            triviaspark_core::logging::init(&config.logging)
                .context("failed to initialize logging")?,
        )
    } else {
        None
    };

    match args.command {
        Command::Status => cmd_status(&config).await,
        Command::Dashboard => cmd_dashboard(&config).await,
        Command::Upcoming { limit } => cmd_upcoming(&config, limit, args.json).await,
        Command::Recent { limit } => cmd_recent(&config, limit, args.json).await,
        Command::Active => cmd_active(&config, args.json).await,
        Command::Join { code, origin, size } => cmd_join(&config, code, origin, size),
    }
}

async fn cmd_status(config: &Config) -> Result<()> {
    println!("TriviaSpark API Configuration");
    println!("=============================");
    println!();

    let api = &config.api;

    println!(
        "Base URL:        {}",
        api.base_url.as_deref().unwrap_or("<not set>")
    );
    println!(
        "Session Cookie:  {}",
        if api.session_cookie.is_some() {
            "<set>"
        } else {
            "<not set>"
        }
    );
    println!("Timeout:         {}s", api.timeout_secs);
    println!("Max Retries:     {}", api.max_retries);
    println!("Display Limit:   {}", config.display.display_limit);

    println!();
    if !api.is_ready() {
        println!("Status: Not configured. Set the backend in config.toml:");
        println!();
        println!("  [api]");
        println!("  base_url = \"https://your-triviaspark-server.com\"");
        println!("  session_cookie = \"connect.sid=s%3Axxxxxxxx\"");
        return Ok(());
    }

    let client = EventsClient::new(api.clone()).context("failed to create API client")?;
    if client.health_check().await? {
        println!("Status: Backend reachable");
    } else {
        println!("Status: Backend unreachable");
    }

    Ok(())
}

async fn cmd_dashboard(config: &Config) -> Result<()> {
    let client = EventsClient::new(config.api.clone()).context("failed to create API client")?;
    let now = Utc::now();

    let insights = client
        .dashboard_insights()
        .await
        .context("failed to fetch dashboard insights")?;
    let snapshot = client
        .list_events()
        .await
        .context("failed to fetch events")?;

    println!("TriviaSpark Dashboard");
    println!("=====================");
    println!();
    println!("Total Events:        {}", insights.total_events);
    println!("Upcoming Events:     {}", insights.upcoming_events);
    println!("Total Participants:  {}", insights.total_participants);
    println!("Questions Generated: {}", insights.total_questions);

    let stats = DashboardStats::compute(&snapshot.events, now);
    println!();
    println!(
        "Snapshot: {} event(s) ({} upcoming, {} past, {} unscheduled)",
        stats.event_count, stats.upcoming_count, stats.past_count, stats.unscheduled_count
    );
    println!("Next Event:          {}", stats.format_next_event(now));

    let lists = partition_events(&snapshot.events, now, config.display.display_limit);

    println!();
    println!("Upcoming");
    println!("--------");
    print_events(&lists.upcoming, now, true);

    println!();
    println!("Recent");
    println!("------");
    print_events(&lists.recent, now, false);

    report_warnings(&snapshot);

    Ok(())
}

async fn cmd_upcoming(config: &Config, limit: Option<usize>, json: bool) -> Result<()> {
    let client = EventsClient::new(config.api.clone()).context("failed to create API client")?;
    let now = Utc::now();

    let snapshot = client
        .list_events()
        .await
        .context("failed to fetch events")?;
    tracing::info!(total = snapshot.events.len(), "fetched events");
    let limit = limit.unwrap_or(config.display.display_limit);
    let lists = partition_events(&snapshot.events, now, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&lists.upcoming)?);
        return Ok(());
    }

    print_events(&lists.upcoming, now, true);
    report_warnings(&snapshot);

    Ok(())
}

async fn cmd_recent(config: &Config, limit: Option<usize>, json: bool) -> Result<()> {
    let client = EventsClient::new(config.api.clone()).context("failed to create API client")?;
    let now = Utc::now();

    let snapshot = client
        .list_events()
        .await
        .context("failed to fetch events")?;
    tracing::info!(total = snapshot.events.len(), "fetched events");
    let limit = limit.unwrap_or(config.display.display_limit);
    let lists = partition_events(&snapshot.events, now, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&lists.recent)?);
        return Ok(());
    }

    print_events(&lists.recent, now, false);
    report_warnings(&snapshot);

    Ok(())
}

async fn cmd_active(config: &Config, json: bool) -> Result<()> {
    let client = EventsClient::new(config.api.clone()).context("failed to create API client")?;
    let now = Utc::now();

    let snapshot = client
        .active_events()
        .await
        .context("failed to fetch active events")?;
    tracing::info!(active = snapshot.events.len(), "fetched active events");

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot.events)?);
        return Ok(());
    }

    if snapshot.events.is_empty() {
        println!("No active events.");
    } else {
        print_events(&snapshot.events, now, true);
    }
    report_warnings(&snapshot);

    Ok(())
}

fn cmd_join(
    config: &Config,
    code: Option<String>,
    origin: Option<String>,
    size: u32,
) -> Result<()> {
    let code = match code {
        Some(code) => code,
        None => {
            let code = join::generate_join_code();
            println!("Generated join code: {}", code);
            code
        }
    };

    let origin = origin
        .or_else(|| config.api.base_url.clone())
        .context("no origin given; pass --origin or set api.base_url in config.toml")?;

    let url = join::join_url(&origin, &code).context("join code is not valid")?;
    let image = join::qr_image_url(&url, size);

    println!("Join URL: {}", url);
    println!("QR Image: {}", image);

    Ok(())
}

/// Print one line per event: relative label, absolute date, title, details.
fn print_events(events: &[EventRecord], now: DateTime<Utc>, upcoming: bool) {
    if events.is_empty() {
        println!("(none)");
        return;
    }

    for event in events {
        let (when, absolute) = match event.event_date {
            Some(date) => {
                let when = if upcoming {
                    format::format_upcoming(date, now)
                } else {
                    format::format_recent(date, now)
                };
                (when, format::format_event_date_time(date))
            }
            None => ("Unscheduled".to_string(), "-".to_string()),
        };

        let mut details = vec![event.event_type.as_str().to_string()];
        if let Some(max) = event.max_participants {
            details.push(format!("max {}", max));
        }
        if let Some(difficulty) = &event.difficulty {
            details.push(difficulty.clone());
        }

        println!(
            "{:<14} {:<20} {} ({})",
            when,
            absolute,
            event.title,
            details.join(", ")
        );
    }
}

fn report_warnings(snapshot: &EventSnapshot) {
    if snapshot.warnings.is_empty() {
        return;
    }

    println!();
    println!("{} record(s) dropped:", snapshot.warnings.len());
    for warning in &snapshot.warnings {
        println!("  {}", warning);
    }
}
