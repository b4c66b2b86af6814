//! This module contains the command-line interface [`Cli`] parser for the
//! school records dashboard.

use clap::{Parser, Subcommand};

use crate::models::{Gender, PaymentFor};

/// The command line configuration struct, where the command-line interface
/// parser is automatically derived by [`clap::Parser`].
#[derive(Parser, Debug)]
#[command(name = "registrar", about = "School records over an embedded sqlite store")]
pub struct Cli {
    /// The different commands available for browsing and updating records.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the headline dashboard numbers.
    Dashboard,

    /// List students, optionally limited to one class.
    Students {
        #[arg(long)]
        class: Option<i64>,
    },

    /// List staff with their roles and payroll.
    Staff,

    /// List payments, optionally for one month (YYYY-MM).
    Payments {
        #[arg(long)]
        month: Option<String>,
    },

    /// List expenses with the payroll/general split.
    Expenses,

    /// Show buses, routes, and stops with rider counts.
    Transport,

    /// Show the timetable for a class, optionally one section.
    Timetable {
        #[arg(long)]
        class: i64,
        #[arg(long)]
        sub_class: Option<i64>,
    },

    /// Search students and staff by name, contact, age, or role.
    Search { term: String },

    /// Add a new class.
    AddClass {
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: i64,
    },

    /// Enroll a new student.
    AddStudent {
        #[arg(long)]
        name: String,
        #[arg(long)]
        d_birth: String,
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        class: i64,
        #[arg(long)]
        sub_class: i64,
        #[arg(long)]
        phone: Option<i64>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Record a payment.
    RecordPayment {
        #[arg(long)]
        student: Option<i64>,
        #[arg(long)]
        amount: i64,
        #[arg(long)]
        date: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "Student Fee")]
        payment_for: PaymentFor,
        #[arg(long)]
        mode: i64,
    },
}
