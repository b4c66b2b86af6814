use anyhow::{Result, anyhow};
use clap::Parser;
use registrar::cli::{Cli, Command};
use registrar::context::SchoolContext;
use registrar::models::{Class, Payment, SchoolUpdate, Student};
use registrar::{display, fixtures, search};
use tracing_subscriber::EnvFilter;

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

/// Submits a whole-table update; on failure the context has already kept its
/// pre-merge snapshot, so the only thing left to do is tell the user.
fn apply(ctx: &SchoolContext, update: SchoolUpdate, what: &str) -> Result<()> {
    match ctx.merge(update) {
        Ok(_) => {
            println!("Saved {what}.");
            Ok(())
        }
        Err(e) => Err(anyhow!("the change was not saved: {e}")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // An unusable store must abort here: running on empty in-memory data
    // would silently violate the durability the user expects.
    let ctx = registrar::create_default_context()?;
    ctx.initialize(&fixtures::sample_data())?;

    match cli.command {
        Command::Dashboard => display::show_dashboard(&*ctx.snapshot()?),
        Command::Students { class } => display::show_students(&*ctx.snapshot()?, class),
        Command::Staff => display::show_staff(&*ctx.snapshot()?),
        Command::Payments { month } => {
            display::show_payments(&*ctx.snapshot()?, month.as_deref())
        }
        Command::Expenses => display::show_expenses(&*ctx.snapshot()?),
        Command::Transport => display::show_transport(&*ctx.snapshot()?),
        Command::Timetable { class, sub_class } => {
            display::show_timetable(&*ctx.snapshot()?, class, sub_class)
        }
        Command::Search { term } => {
            let today = chrono::Local::now().date_naive();
            let hits = search::global_search(&*ctx.snapshot()?, &term, today);
            display::show_search_results(&hits);
        }
        Command::AddClass { name, amount } => {
            let mut classes = ctx.snapshot()?.classes.clone();
            let id = next_id(classes.iter().map(|c| c.id));
            classes.push(Class { id, name, amount });
            apply(&ctx, SchoolUpdate::default().with_classes(classes), &format!("class {id}"))?;
        }
        Command::AddStudent {
            name,
            d_birth,
            gender,
            class,
            sub_class,
            phone,
            email,
        } => {
            let mut students = ctx.snapshot()?.students.clone();
            let id = next_id(students.iter().map(|s| s.id));
            students.push(Student {
                id,
                name,
                d_birth,
                gender,
                phone,
                join_date: chrono::Local::now().date_naive().to_string(),
                email,
                class_id: class,
                sub_class_id: sub_class,
            });
            apply(
                &ctx,
                SchoolUpdate::default().with_students(students),
                &format!("student {id}"),
            )?;
        }
        Command::RecordPayment {
            student,
            amount,
            date,
            description,
            payment_for,
            mode,
        } => {
            let mut payments = ctx.snapshot()?.payments.clone();
            let id = next_id(payments.iter().map(|p| p.id));
            payments.push(Payment {
                id,
                student_id: student,
                amount,
                date,
                description,
                payment_for,
                mode,
            });
            apply(
                &ctx,
                SchoolUpdate::default().with_payments(payments),
                &format!("payment {id}"),
            )?;
        }
    }

    Ok(())
}
