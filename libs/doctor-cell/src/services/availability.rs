// libs/doctor-cell/src/services/availability.rs

use chrono::{Datelike, Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::models::{AvailabilityPolicy, DateOption, TimeSlot};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Today's date in the device's local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// One `DateOption` per day offset `0..horizon_days`, starting at `today`.
pub fn generate_date_options(
    today: NaiveDate,
    horizon_days: u32,
    policy: &AvailabilityPolicy,
) -> Vec<DateOption> {
    debug!("Generating {} date options from {}", horizon_days, today);

    (0..horizon_days)
        .filter_map(|offset| {
            let calendar_date = today.checked_add_signed(Duration::days(offset as i64))?;
            Some(DateOption {
                id: offset.to_string(),
                day: WEEKDAYS[calendar_date.weekday().num_days_from_monday() as usize].to_string(),
                date: calendar_date.day(),
                month: MONTHS[calendar_date.month0() as usize].to_string(),
                available: is_date_available(policy, calendar_date, offset),
                calendar_date,
            })
        })
        .collect()
}

pub fn is_date_available(policy: &AvailabilityPolicy, date: NaiveDate, offset: u32) -> bool {
    match policy {
        AvailabilityPolicy::AllAvailable => true,
        AvailabilityPolicy::Seeded { seed, unavailable_ratio } => {
            if !unavailable_ratio.is_finite() {
                warn!("Unavailable ratio {} is not finite, treating every date as open", unavailable_ratio);
                return true;
            }
            // Keyed on the calendar day, not the offset, so a date keeps its flag as "today" moves.
            let day_key = date.num_days_from_ce() as u64;
            let mut rng = StdRng::seed_from_u64(seed ^ day_key.wrapping_mul(0x9E37_79B9_7F4A_7C15));
            !rng.gen_bool(unavailable_ratio.clamp(0.0, 1.0))
        }
        AvailabilityPolicy::Unavailable(offsets) => !offsets.contains(&offset),
    }
}

/// The fixed daily slot grid.
pub fn standard_time_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::new("1", "09:00 AM", true),
        TimeSlot::new("2", "10:00 AM", true),
        TimeSlot::new("3", "11:00 AM", false),
        TimeSlot::new("4", "12:00 PM", true),
        TimeSlot::new("5", "01:00 PM", false),
        TimeSlot::new("6", "02:00 PM", true),
        TimeSlot::new("7", "03:00 PM", true),
        TimeSlot::new("8", "04:00 PM", true),
    ]
}
