use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

// Indexed by days from Sunday.
const RU_DAYS: [&str; 7] = [
    "Воскресенье",
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
];

const RU_MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const EN_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Locale {
    pub fn title(self) -> &'static str {
        match self {
            Locale::Ru => "СПОРТИВНЫЙ КАЛЕНДАРЬ",
            Locale::En => "SPORTS CALENDAR",
        }
    }

    pub fn period_label(self) -> &'static str {
        match self {
            Locale::Ru => "Период",
            Locale::En => "Period",
        }
    }

    pub fn total_label(self) -> &'static str {
        match self {
            Locale::Ru => "Всего игр",
            Locale::En => "Total games",
        }
    }

    pub fn success_message(self, output_path: &str) -> String {
        match self {
            Locale::Ru => format!("Календарь успешно создан в файле {}", output_path),
            Locale::En => format!("Calendar written to {}", output_path),
        }
    }

    /// Long date header, e.g. "Пятница, 4 сентября 2026".
    pub fn format_date_full(self, date: NaiveDate) -> String {
        let (days, months) = match self {
            Locale::Ru => (&RU_DAYS, &RU_MONTHS),
            Locale::En => (&EN_DAYS, &EN_MONTHS),
        };
        format!(
            "{}, {} {} {}",
            days[date.weekday().num_days_from_sunday() as usize],
            date.day(),
            months[date.month0() as usize],
            date.year()
        )
    }
}
