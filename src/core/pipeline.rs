use crate::adapters::{report, roster};
use crate::core::assign::assign_slots;
use crate::core::matches::generate_matches;
use crate::core::slots::enumerate_slots;
use crate::core::{Calendar, ConfigProvider, Pipeline, Storage, Team};
use crate::domain::model::MIN_TEAMS;
use crate::utils::error::Result;

pub struct CalendarPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CalendarPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CalendarPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Team>> {
        tracing::debug!("Reading roster from: {}", self.config.roster_path());
        let content = self.storage.read_to_string(self.config.roster_path())?;

        let teams = roster::parse_roster(&content)?;
        roster::require_teams(&teams, MIN_TEAMS)?;
        Ok(teams)
    }

    fn transform(&self, teams: Vec<Team>) -> Result<Calendar> {
        let policy = self.config.policy();
        let window = self.config.window();

        let matches = generate_matches(&teams);
        tracing::info!("Games to schedule: {}", matches.len());

        let slots = enumerate_slots(
            window.start,
            window.end,
            &policy.game_days,
            &policy.game_times,
        );
        tracing::debug!(
            "Found {} slots between {} and {}",
            slots.len(),
            window.start,
            window.end
        );

        let games = assign_slots(&matches, &slots, policy.max_simultaneous_games)?;

        Ok(Calendar {
            window,
            team_count: teams.len(),
            slot_count: slots.len(),
            games,
        })
    }

    fn load(&self, calendar: Calendar) -> Result<String> {
        let options = self.config.report();
        tracing::debug!(
            "Rendering {} games as {:?} ({:?})",
            calendar.games.len(),
            options.format,
            options.locale
        );

        let rendered = report::render(&calendar, options)?;
        let output_path = self.config.output_path().to_string();
        self.storage.write_file(&output_path, rendered.as_bytes())?;

        Ok(output_path)
    }
}
