//! Named query functions over a [`SchoolData`] snapshot.
//!
//! These are pure linear scans recomputed on every call; at this scale no
//! caching is warranted. Lookups return `Option` as the explicit not-found
//! sentinel — a dangling foreign key is "unknown", never a panic — and the
//! `*_name` helpers turn that sentinel into a display placeholder.

use crate::models::*;

pub fn student_count(data: &SchoolData) -> usize {
    data.students.len()
}

pub fn class_count(data: &SchoolData) -> usize {
    data.classes.len()
}

pub fn bus_count(data: &SchoolData) -> usize {
    data.buses.len()
}

/// Sum of all recorded payments.
pub fn total_revenue(data: &SchoolData) -> i64 {
    data.payments.iter().map(|p| p.amount).sum()
}

/// Sum of payments whose date falls in the given `YYYY-MM` month.
pub fn revenue_for_month(data: &SchoolData, month: &str) -> i64 {
    data.payments
        .iter()
        .filter(|p| p.date.starts_with(month))
        .map(|p| p.amount)
        .sum()
}

pub fn total_expenses(data: &SchoolData) -> i64 {
    data.expenses.iter().map(|e| e.amount).sum()
}

pub fn expenses_for_month(data: &SchoolData, month: &str) -> i64 {
    data.expenses
        .iter()
        .filter(|e| e.date.starts_with(month))
        .map(|e| e.amount)
        .sum()
}

/// Expenses tied to a payroll entry (salary runs).
pub fn payroll_expenses(data: &SchoolData) -> i64 {
    data.expenses
        .iter()
        .filter(|e| e.staff_payroll_id.is_some())
        .map(|e| e.amount)
        .sum()
}

/// Expenses with no payroll reference (utilities, supplies, and the like).
pub fn general_expenses(data: &SchoolData) -> i64 {
    data.expenses
        .iter()
        .filter(|e| e.staff_payroll_id.is_none())
        .map(|e| e.amount)
        .sum()
}

/// Sum of net salaries across the payroll table.
pub fn total_staff_salary(data: &SchoolData) -> i64 {
    data.staff_payroll.iter().map(|p| p.net_salary).sum()
}

pub fn find_class(data: &SchoolData, id: i64) -> Option<&Class> {
    data.classes.iter().find(|c| c.id == id)
}

pub fn find_sub_class(data: &SchoolData, id: i64) -> Option<&SubClass> {
    data.sub_classes.iter().find(|sc| sc.id == id)
}

pub fn find_subject(data: &SchoolData, id: i64) -> Option<&Subject> {
    data.subjects.iter().find(|s| s.id == id)
}

pub fn find_student(data: &SchoolData, id: i64) -> Option<&Student> {
    data.students.iter().find(|s| s.id == id)
}

pub fn find_staff(data: &SchoolData, id: i64) -> Option<&Staff> {
    data.staff.iter().find(|s| s.id == id)
}

pub fn find_payment_mode(data: &SchoolData, id: i64) -> Option<&PaymentMode> {
    data.payment_modes.iter().find(|m| m.id == id)
}

pub fn find_payroll(data: &SchoolData, id: i64) -> Option<&StaffPayroll> {
    data.staff_payroll.iter().find(|p| p.id == id)
}

pub fn address_for_student(data: &SchoolData, student_id: i64) -> Option<&StudentAddress> {
    data.addresses.iter().find(|a| a.student_id == student_id)
}

pub fn guardian_for_student(data: &SchoolData, student_id: i64) -> Option<&Guardian> {
    data.guardians.iter().find(|g| g.student_id == student_id)
}

pub fn fee_for_student(data: &SchoolData, student_id: i64) -> Option<&StudentFee> {
    data.student_fees.iter().find(|f| f.student_id == student_id)
}

pub fn payroll_for_staff(data: &SchoolData, staff_id: i64) -> Option<&StaffPayroll> {
    data.staff_payroll.iter().find(|p| p.staff_id == staff_id)
}

pub fn role_for_staff<'a>(data: &'a SchoolData, staff: &Staff) -> Option<&'a StaffRole> {
    staff
        .job_title_id
        .and_then(|role_id| data.staff_roles.iter().find(|r| r.id == role_id))
}

pub fn students_in_class(data: &SchoolData, class_id: i64) -> Vec<&Student> {
    data.students.iter().filter(|s| s.class_id == class_id).collect()
}

pub fn subjects_for_class(data: &SchoolData, class_id: i64) -> Vec<&Subject> {
    data.subjects.iter().filter(|s| s.class_id == class_id).collect()
}

pub fn sub_classes_for_class(data: &SchoolData, class_id: i64) -> Vec<&SubClass> {
    data.sub_classes.iter().filter(|sc| sc.class_id == class_id).collect()
}

pub fn books_for_class(data: &SchoolData, class_id: i64) -> Vec<&Book> {
    data.books.iter().filter(|b| b.class_id == class_id).collect()
}

pub fn staff_count_for_role(data: &SchoolData, role_id: i64) -> usize {
    data.staff
        .iter()
        .filter(|s| s.job_title_id == Some(role_id))
        .count()
}

pub fn routes_for_bus(data: &SchoolData, bus_id: i64) -> Vec<&Route> {
    data.routes.iter().filter(|r| r.bus_id == bus_id).collect()
}

pub fn stops_for_route(data: &SchoolData, route_id: i64) -> Vec<&Stop> {
    data.stops.iter().filter(|s| s.route_id == route_id).collect()
}

/// Students assigned to a stop. Transport rows pointing at a student that no
/// longer exists are skipped.
pub fn students_at_stop(data: &SchoolData, stop_id: i64) -> Vec<&Student> {
    data.student_transport
        .iter()
        .filter(|st| st.stop_id == stop_id)
        .filter_map(|st| find_student(data, st.student_id))
        .collect()
}

/// Timetable slots for a class (optionally one section), in school-week then
/// period order.
pub fn timetable_for(
    data: &SchoolData,
    class_id: i64,
    sub_class_id: Option<i64>,
) -> Vec<&TimeSlot> {
    let mut slots: Vec<&TimeSlot> = data
        .timetable
        .iter()
        .filter(|t| t.class_id == class_id)
        .filter(|t| sub_class_id.is_none_or(|sc| t.sub_class_id == sc))
        .collect();
    slots.sort_by_key(|t| (t.day.index(), t.period));
    slots
}

pub fn slot_at(
    data: &SchoolData,
    class_id: i64,
    sub_class_id: i64,
    day: Weekday,
    period: i64,
) -> Option<&TimeSlot> {
    data.timetable.iter().find(|t| {
        t.class_id == class_id && t.sub_class_id == sub_class_id && t.day == day && t.period == period
    })
}

/// Display name for a payment's student; dangling or absent references read
/// as "Unknown Student".
pub fn student_name(data: &SchoolData, student_id: Option<i64>) -> String {
    student_id
        .and_then(|id| find_student(data, id))
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "Unknown Student".to_string())
}

/// Display name for a staff reference; unassigned and dangling references
/// both read as "Not Assigned".
pub fn staff_name(data: &SchoolData, staff_id: Option<i64>) -> String {
    staff_id
        .and_then(|id| find_staff(data, id))
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "Not Assigned".to_string())
}

pub fn payment_mode_name(data: &SchoolData, mode_id: i64) -> String {
    find_payment_mode(data, mode_id)
        .map(|m| m.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn class_name(data: &SchoolData, class_id: i64) -> String {
    find_class(data, class_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn subject_name(data: &SchoolData, subject_id: i64) -> String {
    find_subject(data, subject_id)
        .map(|s| s.subject_name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_data;

    #[test]
    fn dashboard_aggregates_over_fixtures() {
        let data = sample_data();
        assert_eq!(student_count(&data), 2);
        assert_eq!(class_count(&data), 3);
        assert_eq!(bus_count(&data), 1);
        assert_eq!(total_revenue(&data), 5000);
        assert_eq!(total_expenses(&data), 15000);
        assert_eq!(total_staff_salary(&data), 17200);
    }

    #[test]
    fn monthly_sums_filter_on_date_prefix() {
        let data = sample_data();
        assert_eq!(revenue_for_month(&data, "2024-01"), 5000);
        assert_eq!(revenue_for_month(&data, "2024-02"), 0);
        assert_eq!(expenses_for_month(&data, "2024-01"), 15000);
    }

    #[test]
    fn expense_split_follows_payroll_reference() {
        let data = sample_data();
        assert_eq!(payroll_expenses(&data), 15000);
        assert_eq!(general_expenses(&data), 0);
    }

    #[test]
    fn dangling_references_resolve_to_none_and_placeholders() {
        let data = sample_data();

        // The fixture bus names a driver that is not on the staff table.
        let bus = &data.buses[0];
        assert_eq!(find_staff(&data, bus.bus_driver.expect("driver set")), None);
        assert_eq!(staff_name(&data, bus.bus_driver), "Not Assigned");
        assert_eq!(staff_name(&data, None), "Not Assigned");

        // A payment pointing at a missing student renders a placeholder.
        assert_eq!(find_student(&data, 999), None);
        assert_eq!(student_name(&data, Some(999)), "Unknown Student");
        assert_eq!(payment_mode_name(&data, 42), "Unknown");
    }

    #[test]
    fn class_relations_scan_the_snapshot() {
        let data = sample_data();
        assert_eq!(students_in_class(&data, 1).len(), 2);
        assert_eq!(students_in_class(&data, 3).len(), 0);
        assert_eq!(subjects_for_class(&data, 1).len(), 3);
        assert_eq!(sub_classes_for_class(&data, 1).len(), 2);
        assert_eq!(books_for_class(&data, 1).len(), 1);
        assert_eq!(staff_count_for_role(&data, 1), 1);
        assert_eq!(staff_count_for_role(&data, 2), 0);
    }

    #[test]
    fn transport_chain_resolves_students_per_stop() {
        let data = sample_data();
        let routes = routes_for_bus(&data, 1);
        assert_eq!(routes.len(), 1);
        let stops = stops_for_route(&data, routes[0].id);
        assert_eq!(stops.len(), 1);
        let riders = students_at_stop(&data, stops[0].id);
        assert_eq!(riders.len(), 1);
        assert_eq!(riders[0].name, "John Doe");
    }

    #[test]
    fn timetable_sorts_by_day_then_period() {
        let data = sample_data();
        let slots = timetable_for(&data, 1, Some(1));
        let order: Vec<(Weekday, i64)> = slots.iter().map(|s| (s.day, s.period)).collect();
        assert_eq!(
            order,
            vec![
                (Weekday::Monday, 1),
                (Weekday::Monday, 2),
                (Weekday::Tuesday, 1),
            ]
        );
        assert!(slot_at(&data, 1, 1, Weekday::Wednesday, 1).is_none());
    }
}
