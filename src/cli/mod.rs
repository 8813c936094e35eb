//! The `focus` command line.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password, Select};
use focus_models::schedule::{
    filter_by_subject, schedule_summary, teacher_schedule, weekly_schedule,
};
use focus_models::{ScheduleSlot, StudentId, TeacherId, UserRole};
use focus_session::SessionPhase;

use crate::state::AppContext;

#[derive(Parser, Debug)]
#[command(name = "focus")]
#[command(about = "Focus - School dashboard client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and choose the role to act as
    Login {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Role to act as (prompted if not provided)
        #[arg(short = 'r', long)]
        role: Option<UserRole>,
    },
    /// Forget the current session
    Logout,
    /// Show the logged in user
    Whoami,
    /// Switch the role of the logged in user
    Role { role: UserRole },
    /// List students
    Students {
        #[arg(short = 'q', long)]
        query: Option<String>,
    },
    /// Show one student
    Student { id: String },
    /// List teachers
    Teachers {
        #[arg(short = 'q', long)]
        query: Option<String>,
    },
    /// List classes
    Classes {
        #[arg(short = 'q', long)]
        query: Option<String>,

        /// Exact subject name
        #[arg(short = 's', long)]
        subject: Option<String>,
    },
    /// Show the weekly timetable, or one teacher's
    Schedule {
        #[arg(short = 't', long)]
        teacher: Option<String>,
    },
    /// Show dashboard statistics
    Stats,
    /// Show the recent activity feed
    Activity {
        #[arg(short = 'l', long)]
        limit: Option<usize>,
    },
}

pub async fn run(command: Commands, ctx: &AppContext) -> anyhow::Result<()> {
    ctx.session.restore();

    match command {
        Commands::Login {
            email,
            password,
            role,
        } => handle_login(ctx, email, password, role).await,
        Commands::Logout => {
            ctx.session.logout();
            println!("Logged out.");
            Ok(())
        }
        Commands::Whoami => handle_whoami(ctx),
        Commands::Role { role } => handle_role(ctx, role),
        Commands::Students { query } => handle_students(ctx, query.as_deref()).await,
        Commands::Student { id } => handle_student(ctx, id).await,
        Commands::Teachers { query } => handle_teachers(ctx, query.as_deref()).await,
        Commands::Classes { query, subject } => {
            handle_classes(ctx, query.as_deref(), subject.as_deref()).await
        }
        Commands::Schedule { teacher } => handle_schedule(ctx, teacher).await,
        Commands::Stats => handle_stats(ctx).await,
        Commands::Activity { limit } => handle_activity(ctx, limit).await,
    }
}

async fn handle_login(
    ctx: &AppContext,
    email: Option<String>,
    password: Option<String>,
    role: Option<UserRole>,
) -> anyhow::Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password")?,
    };

    let user = ctx.session.login(&email, &password).await?;
    println!("Welcome, {}.", user.name);

    let role = match role {
        Some(role) => role,
        None => prompt_role(user.role)?,
    };
    ctx.session.update_role(role);
    println!("Signed in as {}.", role.label());
    Ok(())
}

fn prompt_role(current: UserRole) -> anyhow::Result<UserRole> {
    let items: Vec<String> = UserRole::ALL
        .iter()
        .map(|role| format!("{} - {}", role.label(), role.description()))
        .collect();
    let default = UserRole::ALL
        .iter()
        .position(|role| *role == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Continue as")
        .items(&items)
        .default(default)
        .interact()
        .context("Failed to read role")?;

    Ok(UserRole::ALL[selection])
}

fn handle_whoami(ctx: &AppContext) -> anyhow::Result<()> {
    let session = ctx.session.snapshot();
    match (&session.user, session.phase) {
        (Some(user), SessionPhase::AwaitingRole) => {
            println!("{} <{}> (role not chosen yet)", user.name, user.email);
        }
        (Some(user), _) => {
            println!("{} <{}> as {}", user.name, user.email, user.role.label());
        }
        (None, _) => println!("Not logged in. Data comes from the offline dataset."),
    }
    Ok(())
}

fn handle_role(ctx: &AppContext, role: UserRole) -> anyhow::Result<()> {
    if !ctx.session.update_role(role) {
        bail!("Not logged in");
    }
    println!("Now acting as {}.", role.label());
    Ok(())
}

async fn handle_students(ctx: &AppContext, query: Option<&str>) -> anyhow::Result<()> {
    let credential = ctx.credential();
    let students = ctx.client.get_students(credential.as_ref(), query).await?;

    for student in &students {
        println!(
            "{:>4}  {:<20} {:<6} {:<24} {}",
            student.id,
            student.name,
            student.grade,
            student.email,
            percent(student.attendance)
        );
    }
    println!("{} student(s)", students.len());
    Ok(())
}

async fn handle_student(ctx: &AppContext, id: String) -> anyhow::Result<()> {
    let credential = ctx.credential();
    let id = StudentId::from(id);
    let Some(student) = ctx
        .client
        .get_student_by_id(&id, credential.as_ref())
        .await?
    else {
        bail!("Student not found: {id}");
    };

    println!("{} ({})", student.name, student.id);
    println!("  Email:       {}", student.email);
    println!("  Grade:       {}", student.grade);
    println!("  Enrolled:    {}", student.enrollment_date);
    println!("  Attendance:  {}", percent(student.attendance));
    println!("  Avg. grade:  {}", percent(student.average_grade));
    if let Some(phone) = &student.phone_number {
        println!("  Phone:       {phone}");
    }
    if let Some(address) = &student.address {
        println!("  Address:     {address}");
    }
    Ok(())
}

async fn handle_teachers(ctx: &AppContext, query: Option<&str>) -> anyhow::Result<()> {
    let credential = ctx.credential();
    let teachers = ctx.client.get_teachers(credential.as_ref(), query).await?;

    for teacher in &teachers {
        println!(
            "{:>4}  {:<20} {:<14} {}",
            teacher.id,
            teacher.name,
            teacher.subject,
            teacher.department.as_deref().unwrap_or("-")
        );
    }
    println!("{} teacher(s)", teachers.len());
    Ok(())
}

async fn handle_classes(
    ctx: &AppContext,
    query: Option<&str>,
    subject: Option<&str>,
) -> anyhow::Result<()> {
    let credential = ctx.credential();
    let classes = ctx.client.get_classes(credential.as_ref(), query).await?;
    let shown = filter_by_subject(&classes, subject);

    for class in &shown {
        println!(
            "{:>4}  {:<22} {:<12} {:<16} {:>3} students  {}",
            class.id,
            class.name,
            class.subject,
            class.teacher_name,
            class.student_count,
            schedule_summary(class)
        );
    }
    println!("{} class(es)", shown.len());
    Ok(())
}

async fn handle_schedule(ctx: &AppContext, teacher: Option<String>) -> anyhow::Result<()> {
    let credential = ctx.credential();
    let classes = ctx.client.get_classes(credential.as_ref(), None).await?;

    match teacher {
        Some(teacher) => {
            let slots = teacher_schedule(&classes, &TeacherId::from(teacher));
            if slots.is_empty() {
                println!("No classes scheduled.");
            }
            for slot in &slots {
                println!("{:<10} {}", slot.day.as_str(), format_slot(slot));
            }
        }
        None => {
            for (day, slots) in weekly_schedule(&classes) {
                println!("{day}");
                for slot in &slots {
                    println!("  {}", format_slot(slot));
                }
            }
        }
    }
    Ok(())
}

async fn handle_stats(ctx: &AppContext) -> anyhow::Result<()> {
    let credential = ctx.credential();
    let stats = ctx.client.get_dashboard_stats(credential.as_ref()).await?;

    println!("Students:            {}", stats.total_students);
    println!("Teachers:            {}", stats.total_teachers);
    println!("Average attendance:  {}%", stats.average_attendance);
    println!("Average grade:       {}%", stats.average_grade);
    println!("Pending payments:    {}", stats.pending_payments);
    println!("Upcoming events:     {}", stats.upcoming_events);
    Ok(())
}

async fn handle_activity(ctx: &AppContext, limit: Option<usize>) -> anyhow::Result<()> {
    let credential = ctx.credential();
    let items = ctx
        .client
        .get_recent_activity(credential.as_ref(), limit)
        .await?;

    for item in &items {
        println!("{}  {}", item.date.format("%Y-%m-%d %H:%M"), item.summary());
    }
    Ok(())
}

fn format_slot(slot: &ScheduleSlot) -> String {
    format!(
        "{}-{}  {:<22} {:<16} {}",
        slot.start_time.format("%H:%M"),
        slot.end_time.format("%H:%M"),
        slot.class_name,
        slot.teacher_name,
        slot.room
    )
}

fn percent(value: Option<u8>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v}%"))
}
