pub mod config;
pub mod prompt;

use std::io::Write;
use std::process::ExitCode;

use color_print::cformat;
use eyre::Result;
use prompt::{classify, generate_prompt, FormLine, CITY_LABEL, INTERESTS_LABEL};
use rustyline::error::ReadlineError;
use tracing::{error, info};

use crate::planner::{plan_trip, CompletionClient, CompletionConfig, ConversationState, PlannerError};

const WELCOME_TEXT: &str = "Enter a city and your interests to generate a personalized day trip itinerary.

/help         Show the help dialogue
/quit         Quit the application
";

const HELP_TEXT: &str = "
Travel Itinerary Planner

Answer the two questions and a day trip itinerary is generated for you.
Interests are separated by commas, e.g. museums, food, parks

/help         Show this help dialogue
/quit         Quit the application
";

/// Drives one or more planning sessions and renders their results.
///
/// Every session builds its own [`ConversationState`]; nothing is kept
/// between two itineraries.
pub struct PlannerContext {
    output: Box<dyn Write>,
    client: Box<dyn CompletionClient>,
    config: CompletionConfig,
    show_transcript: bool,
}

impl PlannerContext {
    pub fn new(
        output: Box<dyn Write>,
        client: Box<dyn CompletionClient>,
        config: CompletionConfig,
        show_transcript: bool,
    ) -> Self {
        Self {
            output,
            client,
            config,
            show_transcript,
        }
    }

    /// Plan a single trip from values given up front.
    pub async fn run_once(
        &mut self,
        city: Option<String>,
        interests: Option<String>,
    ) -> Result<ExitCode> {
        if self.plan_once(city, interests).await? {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::FAILURE)
        }
    }

    async fn plan_once(&mut self, city: Option<String>, interests: Option<String>) -> Result<bool> {
        let form = require(city, "a city").and_then(|city| {
            require(interests, "your interests").map(|interests| (city, interests))
        });

        match form {
            Ok((city, interests)) => self.plan_and_render(&city, &interests).await,
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                Ok(false)
            }
        }
    }

    /// Ask for city and interests at the terminal until the user quits.
    pub async fn run_interactive(&mut self) -> Result<ExitCode> {
        self.print_welcome()?;
        let mut rl = prompt::rl()?;

        loop {
            let Some(city) = self.read_field(&mut rl, CITY_LABEL)? else {
                break;
            };
            let Some(interests) = self.read_field(&mut rl, INTERESTS_LABEL)? else {
                break;
            };

            self.plan_and_render(&city, &interests).await?;
        }

        Ok(ExitCode::SUCCESS)
    }

    fn print_welcome(&mut self) -> Result<()> {
        writeln!(self.output, "{}", cformat!("\n<bold>Travel Itinerary Planner</bold>"))?;
        writeln!(self.output, "{}", WELCOME_TEXT)?;
        Ok(())
    }

    /// Returns `None` once the user asks to quit or closes the input.
    fn read_field(
        &mut self,
        rl: &mut rustyline::Editor<()>,
        label: &str,
    ) -> Result<Option<String>> {
        loop {
            match rl.readline(&generate_prompt(label)) {
                Ok(line) => match classify(&line) {
                    None => continue,
                    Some(FormLine::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                    Some(FormLine::Quit) => return Ok(None),
                    Some(FormLine::Value(value)) => return Ok(Some(value)),
                },
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
                Err(e) => {
                    writeln!(self.output, "Error: {}", e)?;
                    return Ok(None);
                }
            }
        }
    }

    /// Run the pipeline and print the itinerary, or the error in its place.
    ///
    /// Returns whether an itinerary was produced.
    async fn plan_and_render(&mut self, city: &str, interests: &str) -> Result<bool> {
        info!("Planning day trip for {:?}", city);

        match plan_trip(city, interests, self.client.as_ref(), &self.config).await {
            Ok((_, state)) => {
                self.render_itinerary(state.itinerary())?;
                if self.show_transcript {
                    self.render_transcript(&state)?;
                }
                Ok(true)
            }
            Err(e) => {
                error!("Itinerary generation failed: {}", e);
                writeln!(self.output, "Error: {}", e)?;
                Ok(false)
            }
        }
    }

    fn render_itinerary(&mut self, itinerary: &str) -> Result<()> {
        writeln!(self.output, "{}", cformat!("\n<bold>Generated Itinerary</bold>"))?;
        writeln!(self.output, "{}\n", itinerary)?;
        self.output.flush()?;
        Ok(())
    }

    fn render_transcript(&mut self, state: &ConversationState) -> Result<()> {
        writeln!(self.output, "{}", cformat!("<dim>Transcript</dim>"))?;
        writeln!(self.output, "{}", serde_json::to_string_pretty(state.turns())?)?;
        Ok(())
    }
}

fn require(value: Option<String>, field: &'static str) -> Result<String, PlannerError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(PlannerError::MissingInput { field })
}
