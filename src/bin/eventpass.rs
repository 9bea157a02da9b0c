use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use eventpass::{CheckinService, EventConfig, VariantName};

#[derive(Parser, Debug)]
#[command(name = "eventpass", version)]
struct Cli {
    /// Event configuration JSON.
    #[arg(long, global = true, default_value = "eventpass.json")]
    config: PathBuf,

    /// Log filter (overrides `RUST_LOG`), e.g. `debug` or `eventpass=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a participant's badge as a PNG.
    Card(CardArgs),
    /// Confirm a participant's attendance.
    Attend(AttendArgs),
    /// List roster participants.
    List(ListArgs),
}

#[derive(Parser, Debug)]
struct CardArgs {
    /// Participant identifier.
    #[arg(long)]
    id: String,

    /// Output PNG path (default: `card-<id>.png` in the current directory).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Badge style, overriding the configuration.
    #[arg(long, value_enum)]
    variant: Option<VariantName>,

    /// Print the laid-out scene as JSON instead of rendering.
    #[arg(long, default_value_t = false)]
    dump_scene: bool,
}

#[derive(Parser, Debug)]
struct AttendArgs {
    /// Participant identifier.
    #[arg(long)]
    id: String,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Emit JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let mut cfg = if cli.config.is_file() {
        EventConfig::from_path(&cli.config)?
    } else {
        tracing::debug!(path = %cli.config.display(), "no config file; using defaults");
        EventConfig::default()
    };
    cfg.apply_env()?;

    match cli.cmd {
        Command::Card(args) => cmd_card(cfg, args),
        Command::Attend(args) => cmd_attend(&cfg, args),
        Command::List(args) => cmd_list(&cfg, args),
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(l) => tracing_subscriber::EnvFilter::new(l),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_card(mut cfg: EventConfig, args: CardArgs) -> anyhow::Result<()> {
    if let Some(variant) = args.variant {
        cfg.variant = variant;
    }
    let svc = CheckinService::from_config(&cfg)?;

    if args.dump_scene {
        let scene = svc.badge_scene(&args.id, &cfg.public_base_url)?;
        let json = serde_json::to_string_pretty(&scene).context("serialize scene")?;
        println!("{json}");
        return Ok(());
    }

    let png = svc.render_badge(&args.id)?;
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(eventpass::card_file_name(&args.id)));
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&out, png).with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_attend(cfg: &EventConfig, args: AttendArgs) -> anyhow::Result<()> {
    let svc = CheckinService::from_config(cfg)?;
    let c = svc.confirm_attendance(&args.id)?;
    if c.already_marked {
        println!("{} ({}) was already checked in", c.display_name, c.identifier);
    } else {
        println!("checked in {} ({})", c.display_name, c.identifier);
    }
    Ok(())
}

fn cmd_list(cfg: &EventConfig, args: ListArgs) -> anyhow::Result<()> {
    let svc = CheckinService::from_config(cfg)?;
    let participants = svc.list_participants()?;

    if args.json {
        let json = serde_json::to_string_pretty(&participants).context("serialize participants")?;
        println!("{json}");
        return Ok(());
    }

    for p in &participants {
        let mark = if p.attendance_marked { "x" } else { " " };
        println!("[{mark}] {}\t{}", p.identifier, p.display_name);
    }
    Ok(())
}
