use crate::{
    AppConfig, PartsSummary, Vehicle, VehicleError, factories::FactoryRegistry, ports::Prompter,
    services::Showroom,
};
use colored::Colorize;
use std::io::Write;
use tracing::{info, warn};

/// Everything a session selected and produced, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub vehicles: Vec<String>,
    pub parts: PartsSummary,
    pub built: Vec<Vehicle>,
    pub games: Vec<String>,
}

/// Interactive console flow: pick vehicles and list their parts, show the
/// assembled demo vehicles, then pick a game.
pub struct Session<'a, P, W>
where
    P: Prompter,
    W: Write,
{
    config: &'a AppConfig,
    showroom: Showroom<'a>,
    prompter: P,
    out: W,
}

impl<'a, P, W> Session<'a, P, W>
where
    P: Prompter,
    W: Write,
{
    pub fn new(config: &'a AppConfig, registry: &'a FactoryRegistry, prompter: P, out: W) -> Self {
        Self {
            config,
            showroom: Showroom::new(registry),
            prompter,
            out,
        }
    }

    pub fn run(&mut self) -> Result<SessionReport, VehicleError> {
        writeln!(self.out, "{}", self.config.greeting.blue().bold())?;
        writeln!(self.out, "{}", self.config.intro.yellow())?;

        let (vehicles, parts) = self.vehicle_parts_step()?;
        let built = self.builder_step()?;
        let games = self.game_step()?;

        info!(
            vehicles = vehicles.len(),
            games = games.len(),
            "session finished"
        );

        Ok(SessionReport {
            vehicles,
            parts,
            built,
            games,
        })
    }

    fn vehicle_parts_step(&mut self) -> Result<(Vec<String>, PartsSummary), VehicleError> {
        let config = self.config;
        let prompt = &config.vehicle_prompt;
        let choices = self.showroom.vehicle_names();
        let vehicles = self.select(&prompt.title, &choices, prompt.page_size)?;

        writeln!(
            self.out,
            "Selected vehicle: {}",
            vehicles.join(", ").cyan()
        )?;

        let parts = self.showroom.parts_for(vehicles.as_slice())?;
        writeln!(self.out, "{}", parts.bodies.join(", ").red().bold())?;

        Ok((vehicles, parts))
    }

    fn builder_step(&mut self) -> Result<Vec<Vehicle>, VehicleError> {
        let built = self.showroom.assemble_demo_vehicles()?;
        for vehicle in &built {
            writeln!(self.out, "{vehicle}")?;
        }
        Ok(built)
    }

    fn game_step(&mut self) -> Result<Vec<String>, VehicleError> {
        let config = self.config;
        let prompt = &config.game_prompt;
        let games = self.select(&prompt.title, &prompt.choices, prompt.page_size)?;

        writeln!(self.out, "Selected Game: {}", games.join(", ").cyan())?;
        writeln!(self.out, "{}", config.closing_message.yellow())?;

        Ok(games)
    }

    fn select(
        &mut self,
        title: &str,
        choices: &[String],
        page_size: usize,
    ) -> Result<Vec<String>, VehicleError> {
        let selected = self.prompter.multi_select(title, choices, page_size)?;

        if selected.is_empty() {
            warn!(title, "prompt returned no selection");
            return Err(VehicleError::validation(format!(
                "at least one choice is required for '{title}'"
            )));
        }

        if let Some(unknown) = selected.iter().find(|s| !choices.contains(*s)) {
            return Err(VehicleError::validation(format!(
                "'{unknown}' is not one of the offered choices"
            )));
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Answers prompts from a fixed script.
    struct ScriptedPrompter {
        answers: VecDeque<Vec<String>>,
        titles: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&[&str]]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .map(|a| a.iter().map(|s| s.to_string()).collect())
                    .collect(),
                titles: Vec::new(),
            }
        }
    }

    impl Prompter for &mut ScriptedPrompter {
        fn multi_select(
            &mut self,
            title: &str,
            _choices: &[String],
            _page_size: usize,
        ) -> Result<Vec<String>, VehicleError> {
            self.titles.push(title.to_string());
            self.answers.pop_front().ok_or(VehicleError::PromptAborted)
        }
    }

    #[test]
    fn test_full_session() {
        let config = AppConfig::default();
        let registry = FactoryRegistry::new();
        let mut prompter = ScriptedPrompter::new(&[&["Car", "Van"], &["Chess"]]);
        let mut out = Vec::new();

        let report = Session::new(&config, &registry, &mut prompter, &mut out)
            .run()
            .unwrap();

        assert_eq!(report.vehicles, vec!["Car", "Van"]);
        assert_eq!(report.parts.bodies, vec!["Car Body Parts", "Van Body Parts"]);
        assert_eq!(report.built.len(), 2);
        assert_eq!(report.games, vec!["Chess"]);
        assert_eq!(
            prompter.titles,
            vec![
                config.vehicle_prompt.title.clone(),
                config.game_prompt.title.clone()
            ]
        );

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Hello Mike!"));
        assert!(transcript.contains("Example 1: Text Prompt"));
        assert!(transcript.contains("Selected vehicle: "));
        assert!(transcript.contains("Car Body Parts, Van Body Parts"));
        assert!(transcript.contains(
            "Car with features: Car Body Built, Car Chassis Built, Car Boot Built, \
             Car Passenger Area Built, Car Reinforced Storage Built, Car Windows Built"
        ));
        assert!(transcript.contains("Van with features: Van Body Built"));
        assert!(transcript.contains("Selected Game: "));
        assert!(transcript.contains(&config.closing_message));
    }

    #[test]
    fn test_empty_selection_rejected() {
        let config = AppConfig::default();
        let registry = FactoryRegistry::new();
        let mut prompter = ScriptedPrompter::new(&[&[]]);

        let result = Session::new(&config, &registry, &mut prompter, Vec::new()).run();
        assert!(matches!(result, Err(VehicleError::ValidationError(_))));
    }

    #[test]
    fn test_unoffered_choice_rejected() {
        let config = AppConfig::default();
        let registry = FactoryRegistry::new();
        let mut prompter = ScriptedPrompter::new(&[&["Car"], &["Poker"]]);

        let result = Session::new(&config, &registry, &mut prompter, Vec::new()).run();
        assert!(matches!(result, Err(VehicleError::ValidationError(msg)) if msg.contains("Poker")));
    }

    #[test]
    fn test_aborted_prompt() {
        let config = AppConfig::default();
        let registry = FactoryRegistry::new();
        let mut prompter = ScriptedPrompter::new(&[&["Truck"]]);

        let result = Session::new(&config, &registry, &mut prompter, Vec::new()).run();
        assert!(matches!(result, Err(VehicleError::PromptAborted)));
    }
}
