use std::time::Duration;

use bushgate_core::mode::{classify, DriveMode, RefreshDriver, TimeOfDay, WINDOWS};
use bushgate_core::{Config, Event};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ModeAction {
    /// Classify the current local time
    Now {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a given clock time
    At {
        /// Clock time as HH:MM
        time: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the drive-mode window table
    Table,
    /// Re-evaluate the mode on a fixed period and print updates
    Watch {
        /// Seconds between evaluations (default from config)
        #[arg(long)]
        period_secs: Option<u64>,
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ModeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ModeAction::Now { json } => print_mode(TimeOfDay::now(), json),
        ModeAction::At { time, json } => print_mode(time.parse()?, json),
        ModeAction::Table => {
            print_table();
            Ok(())
        }
        ModeAction::Watch { period_secs, json } => watch(period_secs, json),
    }
}

fn print_mode(time: TimeOfDay, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mode = classify(time);
    if json {
        let out = serde_json::json!({
            "time": time.to_string(),
            "minutes": time.minutes(),
            "mode": mode,
            "label": mode.label(),
            "tip": mode.tip(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", mode.label());
        println!("{}", mode.tip());
    }
    Ok(())
}

fn print_table() {
    for (i, window) in WINDOWS.iter().enumerate() {
        let start = TimeOfDay::wrapping(window.start as i64);
        let end = TimeOfDay::wrapping(window.end as i64);
        println!(
            "{}. {start}-{end}  [{:4}-{:4}]  {}",
            i + 1,
            window.start,
            window.end,
            window.mode.label()
        );
    }
    println!("4. otherwise             {}", DriveMode::General.label());
}

/// Refresh loop. The driver owns the 60 s cadence; the loop just polls it
/// every second, mirroring a caller-driven tick model. Runs until the
/// process is interrupted.
fn watch(period_secs: Option<u64>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let period_ms = match period_secs {
        Some(secs) => secs.max(1) * 1000,
        None => config.period_ms(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let result: Result<(), Box<dyn std::error::Error>> = runtime.block_on(async {
        let mut driver = RefreshDriver::with_period_ms(period_ms);
        let mut poll = tokio::time::interval(Duration::from_millis(250u64.min(period_ms)));
        loop {
            poll.tick().await;
            if let Some(event) = driver.tick() {
                render_event(&event, json)?;
            }
        }
    });
    result
}

fn render_event(event: &Event, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }
    let stamp = chrono::Local::now().format("%H:%M:%S");
    match event {
        Event::ModeRefreshed { mode, .. } => {
            println!("[{stamp}] {}", mode.label());
            println!("         {}", mode.tip());
        }
        Event::ModeChanged { from, to, .. } => {
            println!("[{stamp}] {} -> {}", from.label(), to.label());
            println!("         {}", to.tip());
        }
        other => println!("[{stamp}] {other:?}"),
    }
    Ok(())
}
