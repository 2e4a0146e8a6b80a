use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_appender::rolling;

use attendance_desk::api::ApiClient;
use attendance_desk::attendance::{MarkingSheet, SubmitOutcome};
use attendance_desk::calendar::{HolidayMap, YearCalendar};
use attendance_desk::config::Config;
use attendance_desk::model::attendance::Status;
use attendance_desk::model::stats::{StatsPeriod, gender_shares};
use attendance_desk::roster::{RosterScope, filter_students};
use attendance_desk::utils::clock::InstitutionClock;

#[derive(Parser)]
#[command(name = "attendance-desk", about = "Attendance desk for the institution's attendance service")]
struct Cli {
    #[arg(long, env = "ATTENDANCE_EMAIL")]
    email: String,

    #[arg(long, env = "ATTENDANCE_PASSWORD", hide_env_values = true)]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a day's attendance and, for today, mark and submit it
    Mark {
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        all_present: bool,
        /// Student id to mark absent (repeatable)
        #[arg(long)]
        absent: Vec<String>,
        /// Student id to mark on leave (repeatable)
        #[arg(long)]
        leave: Vec<String>,
        #[arg(long)]
        submit: bool,
    },
    /// Year calendar with holidays
    Calendar {
        #[arg(long)]
        year: Option<i32>,
    },
    Students {
        #[arg(long, default_value = "")]
        search: String,
        /// Only students I registered
        #[arg(long)]
        mine: bool,
    },
    Staff,
    Holidays,
    Stats {
        #[arg(long)]
        yearly: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("loading configuration")?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "attendance-desk.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(base_url = %config.api_base_url, offset = %config.utc_offset, "attendance desk starting");

    let client = ApiClient::new(&config)?;
    let session = client
        .login(&cli.email, &cli.password)
        .await
        .context("signing in")?;
    let client = client.with_session(session);
    let clock = InstitutionClock::system(config.utc_offset);

    match cli.command {
        Command::Mark {
            date,
            all_present,
            absent,
            leave,
            submit,
        } => {
            let mut sheet = MarkingSheet::new(clock, Arc::new(client))
                .with_policy(config.record_fetch);
            sheet.open_for_date(date).await?;

            if all_present {
                sheet.mark_all_present();
            }
            let changes = absent
                .iter()
                .map(|id| (id, Status::Absent))
                .chain(leave.iter().map(|id| (id, Status::Leave)));
            for (id, status) in changes {
                if !sheet.set_status(id, status) {
                    eprintln!("could not mark {id} {status}");
                }
            }

            if let Some(date) = sheet.target_date() {
                println!("Attendance for {}", date.format("%A, %-d %B %Y"));
            }
            if let Some(name) = sheet.marked_by() {
                println!("Marked by {name}");
            }
            if let Some(message) = sheet.lock_reason().message() {
                println!("Read only: {message}");
            }
            for (student, status) in sheet.rows() {
                let status = status.map_or("-".to_string(), |s| s.to_string());
                println!("{:>6}  {:<30} {}", student.roll_id, student.name, status);
            }

            if submit {
                match sheet.submit().await? {
                    SubmitOutcome::Submitted(entries) => {
                        println!("Saved attendance for {} students", entries.len())
                    }
                    SubmitOutcome::NotPermitted(reason) => {
                        println!("Not saved: {}", reason.message().unwrap_or("not editable"))
                    }
                }
            }
        }
        Command::Calendar { year } => {
            let today = clock.today();
            let holidays = HolidayMap::from_holidays(&client.list_holidays().await?);
            let calendar = YearCalendar::build(year.unwrap_or(today.year()), &holidays, today);
            for month in &calendar.months {
                println!("\n{} {}", month.name, calendar.year);
                println!(" M  T  W  T  F  S  S");
                let mut line = "   ".repeat(month.leading_blanks as usize);
                for (i, cell) in month.days.iter().enumerate() {
                    let mark = if cell.is_today {
                        '*'
                    } else if cell.is_holiday {
                        'h'
                    } else {
                        ' '
                    };
                    line.push_str(&format!("{:>2}{}", cell.date.day(), mark));
                    if (month.leading_blanks as usize + i + 1) % 7 == 0 {
                        println!("{}", line.trim_end());
                        line.clear();
                    }
                }
                if !line.is_empty() {
                    println!("{}", line.trim_end());
                }
            }
        }
        Command::Students { search, mine } => {
            let students = client.list_students().await?;
            let scope = if mine {
                RosterScope::RegisteredBy(client.session()?.user_id())
            } else {
                RosterScope::All
            };
            let shown = filter_students(&students, &search, scope);
            println!("Showing {} results", shown.len());
            for s in shown {
                println!("{:>6}  {:<30} {}", s.roll_id, s.name, s.course.as_deref().unwrap_or(""));
            }
        }
        Command::Staff => {
            for member in client.list_staff().await? {
                let state = if member.is_active { "active" } else { "inactive" };
                println!("{:<30} {:<8} {:<8} {}", member.name, member.role, state, member.email);
            }
        }
        Command::Holidays => {
            for h in client.list_holidays().await? {
                println!("{}  {:<10} {}", h.date, h.kind, h.name);
            }
        }
        Command::Stats { yearly } => {
            let period = if yearly {
                StatsPeriod::Yearly
            } else {
                StatsPeriod::Monthly
            };
            let dashboard = client.dashboard(period).await?;
            for tile in &dashboard.tiles {
                println!("{:<24} {}", tile.title, tile.value);
            }
            println!("\nAttendance ({})", period.as_ref());
            for point in &dashboard.attendance {
                println!("  {:<10} {:>5.1}%", point.label, point.value);
            }
            println!("\nAbsences this week");
            for point in &dashboard.weekly_absent {
                println!("  {:<10} {}", point.day, point.value);
            }
            println!("\nStudents by gender");
            for (label, pct) in gender_shares(&dashboard.genders) {
                println!("  {label:<10} {pct:>5.1}%");
            }
            println!("\nTop attendants");
            for a in &dashboard.top_attendants {
                println!("  {:<30} {:>5.1}% ({} days)", a.name, a.percentage, a.days);
            }
        }
    }

    Ok(())
}
