use crate::adapters::report::Locale;
use crate::domain::model::Calendar;
use crate::utils::validation::format_date;

const TEAM_COLUMN: usize = 30;

/// Plain-text calendar: banner, games grouped by date, total footer.
pub fn render_text(calendar: &Calendar, locale: Locale, width: usize) -> String {
    let banner = "=".repeat(width);
    let rule = "-".repeat(width);
    let center = |text: &str| format!("{:^width$}", text, width = width);

    let mut lines = vec![
        banner.clone(),
        center(locale.title()),
        center(&format!(
            "{}: {} - {}",
            locale.period_label(),
            format_date(calendar.window.start),
            format_date(calendar.window.end)
        )),
        banner.clone(),
        String::new(),
    ];

    let mut current_date = None;
    for scheduled in calendar.sorted_games() {
        if current_date != Some(scheduled.date) {
            current_date = Some(scheduled.date);
            lines.push(String::new());
            lines.push(rule.clone());
            lines.push(locale.format_date_full(scheduled.date));
            lines.push(rule.clone());
        }

        lines.push(format!(
            "  {} | {:<col$} vs {:<col$}",
            scheduled.time.format("%H:%M"),
            scheduled.game.home.to_string(),
            scheduled.game.away.to_string(),
            col = TEAM_COLUMN
        ));
    }

    lines.push(String::new());
    lines.push(banner.clone());
    lines.push(center(&format!(
        "{}: {}",
        locale.total_label(),
        calendar.games.len()
    )));
    lines.push(banner);

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
