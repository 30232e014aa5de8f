mod grid;
mod tui;

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use slotbook_core::{
    build_template, Clock, FileScheduleRepository, FixedClock, ScheduleController, SystemClock,
    WeekSchedule, WeekView, WindowPolicy, DEFAULT_END_HOUR, DEFAULT_HORIZON_DAYS,
    DEFAULT_START_HOUR,
};

#[derive(Parser)]
#[command(name = "slotbook")]
#[command(about = "Weekly availability schedules for club trainers and members", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a week's availability grid
    Show {
        #[command(flatten)]
        opts: ScheduleOpts,
        /// Weeks to page forward from the current week
        #[arg(long, default_value_t = 0)]
        week: u32,
    },
    /// Toggle one slot and save (SLOT is an id like "slot-3" or a time like "09:00")
    Toggle {
        #[command(flatten)]
        opts: ScheduleOpts,
        /// Day within the current week, 0 = today
        day_index: usize,
        slot: String,
    },
    /// Open the interactive weekly grid
    Tui {
        #[command(flatten)]
        opts: ScheduleOpts,
    },
}

#[derive(Args)]
struct ScheduleOpts {
    /// Schedule owner, e.g. "trainer:alice"
    #[arg(long, default_value = "me")]
    owner: String,

    /// Editable window length in days
    #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
    horizon: u64,

    /// First bookable hour of the day
    #[arg(long, default_value_t = DEFAULT_START_HOUR)]
    start_hour: u32,

    /// Last bookable hour of the day, inclusive
    #[arg(long, default_value_t = DEFAULT_END_HOUR)]
    end_hour: u32,

    /// Override "today" (YYYY-MM-DD), e.g. to preview a future window
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Data directory (defaults to ~/.slotbook)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

impl ScheduleOpts {
    fn controller(&self) -> Result<ScheduleController<FileScheduleRepository>> {
        if self.start_hour > self.end_hour || self.end_hour > 23 {
            bail!(
                "invalid slot range: {:02}:00 to {:02}:00",
                self.start_hour,
                self.end_hour
            );
        }
        let repo = FileScheduleRepository::new(self.data_dir.clone())?;
        let policy = WindowPolicy::new(self.horizon);
        let template = build_template(self.start_hour, self.end_hour);
        let today = match self.today {
            Some(date) => date,
            None => SystemClock.today(),
        };
        let controller = ScheduleController::new(
            repo,
            self.owner.clone(),
            &FixedClock(today),
            policy,
            template,
        )?;
        Ok(controller)
    }
}

/// Lets `toggle` address a slot by its display time as well as by id.
fn resolve_slot_id(week: &WeekSchedule, day_index: usize, slot: &str) -> String {
    week.day(day_index)
        .and_then(|d| d.time_slots.iter().find(|s| s.id == slot || s.time == slot))
        .map(|s| s.id.clone())
        .unwrap_or_else(|| slot.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { opts, week } => {
            let mut controller = opts.controller()?;
            for _ in 0..week {
                controller.next_week()?;
            }
            let view = WeekView::build(controller.week(), controller.policy(), controller.today());
            println!("{}", grid::render(&opts.owner, &view));
        }
        Commands::Toggle {
            opts,
            day_index,
            slot,
        } => {
            let mut controller = opts.controller()?;
            let slot_id = resolve_slot_id(controller.week(), day_index, &slot);
            controller.toggle_slot(day_index, &slot_id)?;
            let record = controller.save()?;

            if let Some(day) = controller.week().day(day_index) {
                if let Some(toggled) = day.slot(&slot_id) {
                    println!(
                        "{} {} is now {}",
                        day.date,
                        toggled.time,
                        if toggled.is_available {
                            "available"
                        } else {
                            "unavailable"
                        }
                    );
                }
            }
            println!("Saved schedule for {} (record {})", record.owner, record.id);
        }
        Commands::Tui { opts } => {
            let controller = opts.controller()?;
            tui::run(controller)?;
        }
    }

    Ok(())
}
