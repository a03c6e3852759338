use crate::domain::model::Slot;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// Lists every playable (date, time) in `[start, end]`, indexed in emission order.
///
/// Dates are walked ascending; a date whose weekday is in `days` yields one slot per
/// entry of `times`, in the order given.
pub fn enumerate_slots(
    start: NaiveDate,
    end: NaiveDate,
    days: &[Weekday],
    times: &[NaiveTime],
) -> Vec<Slot> {
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| days.contains(&date.weekday()))
        .flat_map(|date| times.iter().map(move |&time| (date, time)))
        .enumerate()
        .map(|(index, (date, time))| Slot { date, time, index })
        .collect()
}
