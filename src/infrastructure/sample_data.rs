// Seeded demo data set for the operations dashboard
use crate::domain::records::{Booking, FinancialSample, GuestRequest, Metrics, StaffTask};
use anyhow::Context;
use chrono::NaiveDate;

pub struct SampleRecords {
    pub bookings: Vec<Booking>,
    pub staff_tasks: Vec<StaffTask>,
    pub financial_samples: Vec<FinancialSample>,
    pub guest_requests: Vec<GuestRequest>,
    pub metrics: Metrics,
}

fn date(iso: &str) -> anyhow::Result<NaiveDate> {
    iso.parse::<NaiveDate>()
        .with_context(|| format!("invalid sample date {iso:?}"))
}

fn booking(
    guest_name: &str,
    room: &str,
    check_in: &str,
    check_out: &str,
    status: &str,
) -> anyhow::Result<Booking> {
    Ok(Booking {
        guest_name: guest_name.to_string(),
        room: room.to_string(),
        check_in: date(check_in)?,
        check_out: date(check_out)?,
        status: status.to_string(),
    })
}

fn task(staff_name: &str, role: &str, priority: &str, description: &str) -> StaffTask {
    StaffTask {
        staff_name: staff_name.to_string(),
        role: role.to_string(),
        priority: priority.to_string(),
        description: description.to_string(),
    }
}

fn sample(day: &str, bookings: u32, expenditure: f64, food: u32) -> FinancialSample {
    FinancialSample {
        day: day.to_string(),
        bookings,
        expenditure,
        food,
    }
}

fn request(guest_name: &str, room: &str, text: &str) -> GuestRequest {
    GuestRequest {
        guest_name: guest_name.to_string(),
        room: room.to_string(),
        request: text.to_string(),
    }
}

/// The demo record set: five bookings covering all three statuses, four staff
/// tasks spanning the three priorities, a seven-day financial window and five
/// guest requests.
pub fn seed() -> anyhow::Result<SampleRecords> {
    let bookings = vec![
        booking("Alice Johnson", "402", "2025-11-15", "2025-11-18", "Checked-in")?,
        booking("Michael Chen", "305", "2025-11-16", "2025-11-19", "Pre-booked")?,
        booking("Priya Nair", "1201", "2025-11-14", "2025-11-17", "Checked-in")?,
        booking("Diego Rivera", "708", "2025-11-13", "2025-11-16", "Checked-out")?,
        booking("Emma Wilson", "214", "2025-11-12", "2025-11-15", "Checked-out")?,
    ];

    let staff_tasks = vec![
        task("Sofia Gomez", "Front Desk", "High", "VIP check-in at 3 PM"),
        task("James Lee", "Housekeeping", "Medium", "Prepare rooms 210-220"),
        task("Aisha Khan", "F&B", "Low", "Inventory check"),
        task("Tom Müller", "Maintenance", "High", "Fix AC in 904"),
    ];

    let financial_samples = vec![
        sample("Mon", 24, 9800.0, 42),
        sample("Tue", 31, 10400.0, 55),
        sample("Wed", 28, 9100.0, 48),
        sample("Thu", 36, 11200.0, 61),
        sample("Fri", 47, 13900.0, 78),
        sample("Sat", 52, 15100.0, 83),
        sample("Sun", 29, 9700.0, 50),
    ];

    let guest_requests = vec![
        request("Liam Brown", "512", "Extra pillows and blanket"),
        request("Olivia Davis", "803", "Airport pickup at 6 PM"),
        request("Noah Wilson", "1102", "Vegan dinner for two"),
        request("Ava Martinez", "221", "Late checkout (2 PM)"),
        request("Ethan Taylor", "917", "Baby crib in room"),
    ];

    let metrics = Metrics {
        vacancy_count: 42,
        booked_count: 128,
        pending_checkout_count: 9,
        guest_count: 276,
        staff_count: 58,
        total_expenditure: 82450.0,
    };

    Ok(SampleRecords {
        bookings,
        staff_tasks,
        financial_samples,
        guest_requests,
        metrics,
    })
}
