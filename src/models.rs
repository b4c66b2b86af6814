//! Row types for every table in the school database, plus the [`SchoolData`]
//! snapshot and the [`SchoolUpdate`] partial update that the store and the
//! [`crate::context::SchoolContext`] exchange.
//!
//! Foreign keys are by convention only: a reference that does not resolve to
//! an existing row is treated as "unknown" by readers, never as an error.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};

/// Declares an enum stored as `TEXT`, with the exact strings the database
/// (and the serde representation) uses for each variant.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            AsExpression, FromSqlRow, Serialize, Deserialize,
        )]
        #[diesel(sql_type = Text)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!(
                        concat!("unknown ", stringify!($name), " value: {}"),
                        other
                    )),
                }
            }
        }

        impl ToSql<Text, Sqlite> for $name {
            fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
                out.set_value(self.as_str());
                Ok(IsNull::No)
            }
        }

        impl FromSql<Text, Sqlite> for $name {
            fn from_sql(
                bytes: <Sqlite as diesel::backend::Backend>::RawValue<'_>,
            ) -> deserialize::Result<Self> {
                let s = <String as FromSql<Text, Sqlite>>::from_sql(bytes)?;
                s.parse().map_err(|e: String| e.into())
            }
        }
    };
}

text_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

text_enum!(PaymentFor {
    StudentFee => "Student Fee",
    Donation => "Donation",
    Event => "Event",
    Sponsorship => "Sponsorship",
    Other => "Other",
});

text_enum!(FeeFrequency {
    Monthly => "Monthly",
    Yearly => "Yearly",
    OneTime => "One-Time",
});

text_enum!(DiscountType {
    Fixed => "Fixed",
    Percentage => "Percentage",
});

text_enum!(
    /// School days, in timetable display order.
    Weekday {
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
    }
);

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Position within the school week, for sorting timetable slots.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|d| d == self).unwrap_or(0)
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::classes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub amount: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::sub_classes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubClass {
    pub id: i64,
    pub class_id: i64,
    pub label: String,
    pub class_teacher: Option<i64>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::subjects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Subject {
    pub id: i64,
    pub class_id: i64,
    pub subject_name: String,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub d_birth: String,
    pub gender: Gender,
    pub phone: Option<i64>,
    pub join_date: String,
    pub email: Option<String>,
    pub class_id: i64,
    pub sub_class_id: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::guardians)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Guardian {
    pub id: i64,
    pub name: String,
    pub phone_no: i64,
    pub email: Option<String>,
    pub student_id: i64,
    pub relation: String,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::addresses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentAddress {
    pub student_id: i64,
    pub line_one: String,
    pub line_2: Option<String>,
    pub line_3: Option<String>,
    pub city: String,
    pub pin: i64,
    pub state: String,
    pub country: String,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::payment_modes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentMode {
    pub id: i64,
    pub name: String,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Payment {
    pub id: i64,
    pub student_id: Option<i64>,
    pub amount: i64,
    pub date: String,
    pub description: String,
    pub payment_for: PaymentFor,
    pub mode: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Expense {
    pub id: i64,
    pub amount: i64,
    pub date: String,
    pub description: String,
    pub mode: i64,
    pub staff_payroll_id: Option<i64>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::student_fees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentFee {
    pub id: i64,
    pub student_id: i64,
    pub amount: i64,
    pub frequency: FeeFrequency,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::buses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Bus {
    pub id: i64,
    pub bus_no: String,
    pub bus_driver: Option<i64>,
    pub bus_attendant: Option<i64>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::routes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Route {
    pub id: i64,
    pub bus_id: i64,
    pub route_name: String,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::stops)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Stop {
    pub id: i64,
    pub route_id: i64,
    pub stop_name: String,
    pub stop_time: String,
    pub stop_fee: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::student_transport)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentTransport {
    pub student_id: i64,
    pub stop_id: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::books)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub amount: i64,
    pub class_id: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::staff_roles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StaffRole {
    pub id: i64,
    pub title: String,
    pub salary: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::staff)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub d_birth: Option<String>,
    pub phone: Option<i64>,
    pub email: Option<String>,
    pub join_date: String,
    pub job_title_id: Option<i64>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::staff_payroll)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StaffPayroll {
    pub id: i64,
    pub staff_id: i64,
    pub base_salary: i64,
    pub allowances: i64,
    pub overtime: i64,
    pub bonus: i64,
    pub deductions: i64,
    pub advance: i64,
    pub reimbursements: i64,
    pub net_salary: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::discounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Discount {
    pub id: i64,
    pub student_id: i64,
    pub payment_id: i64,
    pub discount_type: DiscountType,
    pub amount: i64,
    pub description: String,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::timetable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TimeSlot {
    pub id: i64,
    pub day: Weekday,
    pub period: i64,
    pub start_time: String,
    pub end_time: String,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub class_id: i64,
    pub sub_class_id: i64,
}

/// Generates the snapshot and partial-update types over the full table set.
macro_rules! school_tables {
    ($($field:ident: $row:ty => $with:ident),+ $(,)?) => {
        /// The complete in-memory copy of every table, in primary-key order.
        ///
        /// Consumers treat a snapshot as immutable; the context is the only
        /// writer and publishes a fresh snapshot per merge.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct SchoolData {
            $(pub $field: Vec<$row>,)+
        }

        /// A partial, table-keyed update. Tables left as `None` are untouched
        /// both in memory and in the store.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct SchoolUpdate {
            $(pub $field: Option<Vec<$row>>,)+
        }

        impl SchoolData {
            /// Shallow-merges `update` into a copy of this snapshot. Every
            /// table present in the update replaces its counterpart wholesale.
            pub fn merged(&self, update: &SchoolUpdate) -> SchoolData {
                let mut next = self.clone();
                $(
                    if let Some(rows) = &update.$field {
                        next.$field = rows.clone();
                    }
                )+
                next
            }
        }

        impl SchoolUpdate {
            $(
                pub fn $with(mut self, rows: Vec<$row>) -> Self {
                    self.$field = Some(rows);
                    self
                }
            )+

            /// True when no table is mentioned at all.
            pub fn is_empty(&self) -> bool {
                $(self.$field.is_none())&&+
            }
        }
    };
}

school_tables! {
    classes: Class => with_classes,
    sub_classes: SubClass => with_sub_classes,
    subjects: Subject => with_subjects,
    students: Student => with_students,
    guardians: Guardian => with_guardians,
    addresses: StudentAddress => with_addresses,
    payment_modes: PaymentMode => with_payment_modes,
    payments: Payment => with_payments,
    expenses: Expense => with_expenses,
    student_fees: StudentFee => with_student_fees,
    buses: Bus => with_buses,
    routes: Route => with_routes,
    stops: Stop => with_stops,
    student_transport: StudentTransport => with_student_transport,
    books: Book => with_books,
    staff_roles: StaffRole => with_staff_roles,
    staff: Staff => with_staff,
    staff_payroll: StaffPayroll => with_staff_payroll,
    discounts: Discount => with_discounts,
    timetable: TimeSlot => with_timetable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_enums_round_trip_their_stored_strings() {
        assert_eq!(PaymentFor::StudentFee.as_str(), "Student Fee");
        assert_eq!("Student Fee".parse::<PaymentFor>(), Ok(PaymentFor::StudentFee));
        assert_eq!("One-Time".parse::<FeeFrequency>(), Ok(FeeFrequency::OneTime));
        assert!("Fortnightly".parse::<FeeFrequency>().is_err());
    }

    #[test]
    fn weekday_ordering_follows_the_school_week() {
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Saturday.index(), 5);
        assert!(Weekday::Tuesday.index() < Weekday::Friday.index());
    }

    #[test]
    fn merged_replaces_only_the_tables_present_in_the_update() {
        let base = SchoolData {
            classes: vec![Class { id: 1, name: "Class 1".into(), amount: 5000 }],
            payment_modes: vec![PaymentMode { id: 1, name: "Cash".into() }],
            ..SchoolData::default()
        };

        let update = SchoolUpdate::default().with_classes(vec![
            Class { id: 1, name: "Class 1".into(), amount: 5000 },
            Class { id: 2, name: "Class 2".into(), amount: 5500 },
        ]);

        let next = base.merged(&update);
        assert_eq!(next.classes.len(), 2);
        assert_eq!(next.payment_modes, base.payment_modes);
    }

    #[test]
    fn empty_update_reports_empty() {
        assert!(SchoolUpdate::default().is_empty());
        assert!(!SchoolUpdate::default().with_buses(vec![]).is_empty());
    }
}
