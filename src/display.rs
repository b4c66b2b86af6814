//! Table renderers for the command line. Each view is a read over one
//! snapshot; dangling references come out as placeholders, never as errors.

use crate::models::SchoolData;
use crate::queries;
use crate::search::SearchHit;
use tabled::{Table, Tabled, settings::Style};

/// Pretty prints the headline numbers the dashboard cards show.
pub fn show_dashboard(data: &SchoolData) {
    #[derive(Tabled)]
    struct Stat {
        metric: &'static str,
        value: String,
    }

    let stats = vec![
        Stat { metric: "Total Students", value: queries::student_count(data).to_string() },
        Stat { metric: "Total Classes", value: queries::class_count(data).to_string() },
        Stat { metric: "Transport Buses", value: queries::bus_count(data).to_string() },
        Stat { metric: "Total Revenue", value: format!("₹{}", queries::total_revenue(data)) },
        Stat { metric: "Total Expenses", value: format!("₹{}", queries::total_expenses(data)) },
        Stat { metric: "Staff Salaries", value: format!("₹{}", queries::total_staff_salary(data)) },
    ];

    let mut table = Table::new(stats);
    table.with(Style::modern());
    println!("Dashboard:\n{table}");
}

/// Pretty prints the student roster, optionally limited to one class.
pub fn show_students(data: &SchoolData, class_filter: Option<i64>) {
    #[derive(Tabled)]
    struct Row {
        id: i64,
        name: String,
        class: String,
        section: String,
        guardian: String,
        phone: String,
    }

    let rows: Vec<Row> = data
        .students
        .iter()
        .filter(|s| class_filter.is_none_or(|c| s.class_id == c))
        .map(|s| Row {
            id: s.id,
            name: s.name.clone(),
            class: queries::class_name(data, s.class_id),
            section: queries::find_sub_class(data, s.sub_class_id)
                .map(|sc| sc.label.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            guardian: queries::guardian_for_student(data, s.id)
                .map(|g| format!("{} ({})", g.name, g.relation))
                .unwrap_or_else(|| "-".to_string()),
            phone: s.phone.map_or_else(|| "-".to_string(), |p| p.to_string()),
        })
        .collect();

    let count = rows.len();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("Students ({count}):\n{table}");
}

/// Pretty prints the staff list with role and payroll details.
pub fn show_staff(data: &SchoolData) {
    #[derive(Tabled)]
    struct Row {
        id: i64,
        name: String,
        role: String,
        net_salary: String,
        email: String,
    }

    let rows: Vec<Row> = data
        .staff
        .iter()
        .map(|s| Row {
            id: s.id,
            name: s.name.clone(),
            role: queries::role_for_staff(data, s)
                .map(|r| r.title.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            net_salary: queries::payroll_for_staff(data, s.id)
                .map(|p| format!("₹{}", p.net_salary))
                .unwrap_or_else(|| "-".to_string()),
            email: s.email.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("Staff:\n{table}");
}

/// Pretty prints payments, optionally limited to a `YYYY-MM` month.
pub fn show_payments(data: &SchoolData, month: Option<&str>) {
    #[derive(Tabled)]
    struct Row {
        id: i64,
        date: String,
        student: String,
        purpose: String,
        mode: String,
        amount: String,
    }

    let rows: Vec<Row> = data
        .payments
        .iter()
        .filter(|p| month.is_none_or(|m| p.date.starts_with(m)))
        .map(|p| Row {
            id: p.id,
            date: p.date.clone(),
            student: queries::student_name(data, p.student_id),
            purpose: p.payment_for.to_string(),
            mode: queries::payment_mode_name(data, p.mode),
            amount: format!("₹{}", p.amount),
        })
        .collect();

    let total = match month {
        Some(m) => queries::revenue_for_month(data, m),
        None => queries::total_revenue(data),
    };

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("Payments (total ₹{total}):\n{table}");
}

/// Pretty prints expenses with the payroll/general split.
pub fn show_expenses(data: &SchoolData) {
    #[derive(Tabled)]
    struct Row {
        id: i64,
        date: String,
        description: String,
        mode: String,
        amount: String,
    }

    let rows: Vec<Row> = data
        .expenses
        .iter()
        .map(|e| Row {
            id: e.id,
            date: e.date.clone(),
            description: e.description.clone(),
            mode: queries::payment_mode_name(data, e.mode),
            amount: format!("₹{}", e.amount),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!(
        "Expenses (payroll ₹{}, general ₹{}):\n{table}",
        queries::payroll_expenses(data),
        queries::general_expenses(data),
    );
}

/// Pretty prints the bus/route/stop tree with rider counts.
pub fn show_transport(data: &SchoolData) {
    #[derive(Tabled)]
    struct Row {
        bus: String,
        driver: String,
        route: String,
        stop: String,
        time: String,
        riders: usize,
    }

    let mut rows = Vec::new();
    for bus in &data.buses {
        for route in queries::routes_for_bus(data, bus.id) {
            for stop in queries::stops_for_route(data, route.id) {
                rows.push(Row {
                    bus: bus.bus_no.clone(),
                    driver: queries::staff_name(data, bus.bus_driver),
                    route: route.route_name.clone(),
                    stop: stop.stop_name.clone(),
                    time: stop.stop_time.clone(),
                    riders: queries::students_at_stop(data, stop.id).len(),
                });
            }
        }
    }

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("Transport:\n{table}");
}

/// Pretty prints the timetable for one class (optionally one section).
pub fn show_timetable(data: &SchoolData, class_id: i64, sub_class_id: Option<i64>) {
    #[derive(Tabled)]
    struct Row {
        day: String,
        period: i64,
        time: String,
        subject: String,
        teacher: String,
    }

    let rows: Vec<Row> = queries::timetable_for(data, class_id, sub_class_id)
        .into_iter()
        .map(|slot| Row {
            day: slot.day.to_string(),
            period: slot.period,
            time: format!("{}-{}", slot.start_time, slot.end_time),
            subject: queries::subject_name(data, slot.subject_id),
            teacher: queries::staff_name(data, Some(slot.teacher_id)),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!(
        "Timetable for {}:\n{table}",
        queries::class_name(data, class_id)
    );
}

/// Pretty prints global search hits.
pub fn show_search_results(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No matches.");
        return;
    }

    #[derive(Tabled)]
    struct Row {
        kind: &'static str,
        name: String,
        detail: String,
        page: &'static str,
    }

    let rows: Vec<Row> = hits
        .iter()
        .map(|hit| Row {
            kind: match hit {
                SearchHit::Student { .. } => "Student",
                SearchHit::Staff { .. } => "Staff",
            },
            name: hit.label().to_string(),
            detail: hit.detail().to_string(),
            page: hit.target_route(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("Search results:\n{table}");
}
