use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct CalendarEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CalendarEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs roster loading, scheduling and report writing; returns the output path.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Building calendar...");

        let teams = self.pipeline.extract()?;
        tracing::info!("Loaded {} teams", teams.len());

        let calendar = self.pipeline.transform(teams)?;
        tracing::info!(
            "Scheduled {} games across {} available slots",
            calendar.games.len(),
            calendar.slot_count
        );

        let output_path = self.pipeline.load(calendar)?;
        tracing::info!("Calendar saved to: {}", output_path);

        Ok(output_path)
    }
}
