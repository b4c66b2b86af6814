//! The baked-in dataset used to populate an empty store on first run.
//!
//! Ids are explicit and inserted as-is; seeding never renumbers rows. Some
//! references are intentionally left dangling (the demo buses name a driver
//! and attendant that are not on the staff table) so readers exercise their
//! placeholder paths.

use crate::models::*;

/// The demonstration dataset for a freshly installed school.
pub fn sample_data() -> SchoolData {
    SchoolData {
        classes: vec![
            Class { id: 1, name: "Class 1".into(), amount: 5000 },
            Class { id: 2, name: "Class 2".into(), amount: 5500 },
            Class { id: 3, name: "Class 3".into(), amount: 6000 },
        ],
        sub_classes: vec![
            SubClass { id: 1, class_id: 1, label: "A".into(), class_teacher: Some(1) },
            SubClass { id: 2, class_id: 1, label: "B".into(), class_teacher: Some(2) },
            SubClass { id: 3, class_id: 2, label: "A".into(), class_teacher: Some(3) },
        ],
        subjects: vec![
            Subject { id: 1, class_id: 1, subject_name: "Mathematics".into() },
            Subject { id: 2, class_id: 1, subject_name: "English".into() },
            Subject { id: 3, class_id: 1, subject_name: "Science".into() },
        ],
        students: vec![
            Student {
                id: 1,
                name: "John Doe".into(),
                d_birth: "2010-05-15".into(),
                gender: Gender::Male,
                phone: Some(1234567890),
                join_date: "2024-01-15".into(),
                email: Some("john.doe@email.com".into()),
                class_id: 1,
                sub_class_id: 1,
            },
            Student {
                id: 2,
                name: "Jane Smith".into(),
                d_birth: "2011-03-20".into(),
                gender: Gender::Female,
                phone: Some(9876543210),
                join_date: "2024-01-15".into(),
                email: Some("jane.smith@email.com".into()),
                class_id: 1,
                sub_class_id: 2,
            },
        ],
        guardians: vec![Guardian {
            id: 1,
            name: "Mr. Doe".into(),
            phone_no: 1234567890,
            email: Some("mr.doe@email.com".into()),
            student_id: 1,
            relation: "Father".into(),
        }],
        addresses: vec![StudentAddress {
            student_id: 1,
            line_one: "123 Main St".into(),
            line_2: Some("Apt 4B".into()),
            line_3: None,
            city: "New York".into(),
            pin: 10001,
            state: "NY".into(),
            country: "USA".into(),
        }],
        payment_modes: vec![
            PaymentMode { id: 1, name: "Cash".into() },
            PaymentMode { id: 2, name: "Card".into() },
            PaymentMode { id: 3, name: "Bank Transfer".into() },
        ],
        payments: vec![Payment {
            id: 1,
            student_id: Some(1),
            amount: 5000,
            date: "2024-01-15".into(),
            description: "Monthly fee".into(),
            payment_for: PaymentFor::StudentFee,
            mode: 1,
        }],
        expenses: vec![Expense {
            id: 1,
            amount: 15000,
            date: "2024-01-15".into(),
            description: "Teacher salary".into(),
            mode: 3,
            staff_payroll_id: Some(1),
        }],
        student_fees: vec![StudentFee {
            id: 1,
            student_id: 1,
            amount: 5000,
            frequency: FeeFrequency::Monthly,
        }],
        buses: vec![Bus {
            id: 1,
            bus_no: "BUS001".into(),
            bus_driver: Some(4),
            bus_attendant: Some(5),
        }],
        routes: vec![Route {
            id: 1,
            bus_id: 1,
            route_name: "Downtown Route".into(),
        }],
        stops: vec![Stop {
            id: 1,
            route_id: 1,
            stop_name: "Main Square".into(),
            stop_time: "08:00".into(),
            stop_fee: 200,
        }],
        student_transport: vec![StudentTransport { student_id: 1, stop_id: 1 }],
        books: vec![Book {
            id: 1,
            name: "Math Textbook Grade 1".into(),
            amount: 450,
            class_id: 1,
        }],
        staff_roles: vec![
            StaffRole { id: 1, title: "Teacher".into(), salary: 15000 },
            StaffRole { id: 2, title: "Driver".into(), salary: 10000 },
            StaffRole { id: 3, title: "Attendant".into(), salary: 8000 },
        ],
        staff: vec![Staff {
            id: 1,
            name: "Mrs. Johnson".into(),
            gender: Gender::Female,
            d_birth: Some("1985-07-10".into()),
            phone: Some(5551234567),
            email: Some("johnson@school.edu".into()),
            join_date: "2020-08-15".into(),
            job_title_id: Some(1),
        }],
        staff_payroll: vec![StaffPayroll {
            id: 1,
            staff_id: 1,
            base_salary: 15000,
            allowances: 2000,
            overtime: 1000,
            bonus: 500,
            deductions: 1500,
            advance: 0,
            reimbursements: 200,
            net_salary: 17200,
        }],
        discounts: vec![],
        timetable: vec![
            TimeSlot {
                id: 1,
                day: Weekday::Monday,
                period: 1,
                start_time: "09:00".into(),
                end_time: "10:00".into(),
                subject_id: 1,
                teacher_id: 1,
                class_id: 1,
                sub_class_id: 1,
            },
            TimeSlot {
                id: 2,
                day: Weekday::Monday,
                period: 2,
                start_time: "10:00".into(),
                end_time: "11:00".into(),
                subject_id: 2,
                teacher_id: 1,
                class_id: 1,
                sub_class_id: 1,
            },
            TimeSlot {
                id: 3,
                day: Weekday::Tuesday,
                period: 1,
                start_time: "09:00".into(),
                end_time: "10:00".into(),
                subject_id: 3,
                teacher_id: 1,
                class_id: 1,
                sub_class_id: 1,
            },
        ],
    }
}
