//! Reports built on header-layout extraction.
//!
//! - [`attendance`]: employee time sheets keyed by employee, sub-column and date
//! - [`sales`]: monthly daily-sales sheets merged with delivery-platform sales
//! - [`group`]: grouping, filtering and sorting of extracted records

pub mod attendance;
pub mod group;
pub mod sales;

// === Record Helpers ===
pub use group::{group_by_key, retain_with_key, sort_by_key};

// === Attendance ===
pub use attendance::{AttendanceEntry, attendance_entries, attendance_specs, extract_attendance};

// === Sales ===
pub use sales::{
    DEFAULT_GRAB_SHEET, DailySalesSummary, GrabSales, GrossProfit, Sales, SimpleSummary,
    daily_sales_specs, extract_daily_sales, extract_grab_sales, grab_sales_specs,
    summarize_workbook,
};
