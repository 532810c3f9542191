// UI layer: runs one itinerary session from start to finish. Prompting
// goes through `Prompter` so the flow can be driven without a terminal;
// everything the user reads is written to `out`.

use crate::api::OllamaClient;
use crate::error::ApiError;
use crate::itinerary::{
    extract_response, model_or_default, wants_save, GenerateRequest, Preferences,
    DEFAULT_FILENAME, ITINERARY_BANNER,
};
use anyhow::{Context, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, IsTerminal, Write};
use std::time::Duration;

/// Source of answers to the session's questions.
pub trait Prompter {
    /// Show `prompt` and block until the user answers. Empty answers are
    /// returned as empty strings.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Reads answers with `dialoguer` on a terminal, or line by line when
/// stdin is piped.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        if !std::io::stdin().is_terminal() {
            let stdin = std::io::stdin();
            return read_answer(prompt, &mut stdin.lock(), &mut std::io::stdout());
        }
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read answer from terminal")?;
        Ok(answer)
    }
}

/// Print `prompt: ` and read one line from `input`, without its line
/// ending. End of input reads as an empty answer.
pub fn read_answer<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "{}: ", prompt)?;
    out.flush()?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read answer from stdin")?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server was not reachable; nothing was asked.
    Unreachable,
    /// The session ran to the closing message, whether or not the
    /// itinerary was generated.
    Finished,
}

pub struct Session<'a, P, W> {
    api: &'a OllamaClient,
    prompter: P,
    out: W,
}

impl<'a, P: Prompter, W: Write> Session<'a, P, W> {
    pub fn new(api: &'a OllamaClient, prompter: P, out: W) -> Self {
        Session { api, prompter, out }
    }

    /// Give back the prompter and the output sink, mostly for inspection.
    pub fn into_parts(self) -> (P, W) {
        (self.prompter, self.out)
    }

    pub fn run(&mut self) -> Result<Outcome> {
        if let Err(e) = self.api.check_connection() {
            tracing::debug!("{}", e);
            writeln!(self.out, "Error: Cannot connect to Ollama server at {}", self.api.base_url())?;
            writeln!(self.out, "Please make sure Ollama is running. You can start it with 'ollama serve'")?;
            return Ok(Outcome::Unreachable);
        }

        writeln!(self.out, "\n===== BALI TWO-DAY ITINERARY GENERATOR =====")?;
        writeln!(self.out, "Let's create your personalized Bali itinerary!")?;
        writeln!(self.out, "\nPlease answer the following questions about your preferences:")?;

        let prefs = self.collect_preferences()?;
        let prompt = prefs.to_prompt();

        writeln!(self.out)?;
        let model = model_or_default(
            &self.prompter.ask("Which Ollama model would you like to use? (default: llama3.2:1b)")?,
        );
        let req = GenerateRequest::new(&model, prompt);

        writeln!(self.out, "\nGenerating your Bali itinerary using the {} model...", model)?;
        writeln!(self.out, "This may take a moment...\n")?;

        match self.generate(&req) {
            Ok(itinerary) => {
                writeln!(self.out, "\n{}\n", ITINERARY_BANNER)?;
                writeln!(self.out, "{}", itinerary)?;
                self.offer_save(&prefs, &itinerary)?;
            }
            Err(e) => self.report_failure(&e)?,
        }

        writeln!(self.out, "\nThank you for using the Bali Itinerary Generator!")?;
        self.out.flush()?;
        Ok(Outcome::Finished)
    }

    fn collect_preferences(&mut self) -> Result<Preferences> {
        writeln!(self.out)?;
        let travel_style = self
            .prompter
            .ask("What's your travel style? (adventure, relaxation, cultural, mix)")?;
        let interests = self.prompter.ask(
            "What are your main interests in Bali? (beaches, temples, food, shopping, nature, etc.)",
        )?;
        let accommodation = self
            .prompter
            .ask("Where are you staying in Bali? (Ubud, Seminyak, Kuta, Canggu, etc.)")?;
        let budget = self
            .prompter
            .ask("What's your budget level? (budget, mid-range, luxury)")?;
        let special_requests = self
            .prompter
            .ask("Any special requests or dietary requirements?")?;
        Ok(Preferences {
            travel_style,
            interests,
            accommodation,
            budget,
            special_requests,
        })
    }

    /// Single blocking call with a spinner on stderr while it runs.
    fn generate(&self, req: &GenerateRequest) -> Result<String, ApiError> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Waiting for the model...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        let result = self.api.generate(req);
        spinner.finish_and_clear();
        result.map(|body| extract_response(&body))
    }

    fn report_failure(&mut self, err: &ApiError) -> Result<()> {
        tracing::error!("generate request failed: {}", err);
        writeln!(self.out, "Error communicating with Ollama: {}", err)?;
        for line in err.detail_lines() {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn offer_save(&mut self, prefs: &Preferences, itinerary: &str) -> Result<()> {
        writeln!(self.out)?;
        let answer = self
            .prompter
            .ask("Would you like to save this itinerary to a file? (y/n)")?;
        if !wants_save(&answer) {
            return Ok(());
        }
        let filename = self
            .prompter
            .ask("Enter filename (default: bali_itinerary.txt)")?;
        let filename = if filename.is_empty() {
            DEFAULT_FILENAME.to_string()
        } else {
            filename
        };
        tracing::debug!("saving itinerary to {}", filename);
        match std::fs::write(&filename, prefs.render_saved(itinerary)) {
            Ok(()) => writeln!(self.out, "Itinerary saved to {}", filename)?,
            Err(e) => {
                tracing::error!("failed to write {}: {}", filename, e);
                writeln!(self.out, "Error saving itinerary to {}: {}", filename, e)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn piped_answer_keeps_inner_whitespace() {
        let mut input = Cursor::new("  mistral \r\nnext\n");
        let mut out = Vec::new();
        let answer = read_answer("Model", &mut input, &mut out).unwrap();
        assert_eq!(answer, "  mistral ");
        assert_eq!(String::from_utf8(out).unwrap(), "Model: ");
        assert_eq!(read_answer("Again", &mut input, &mut Vec::new()).unwrap(), "next");
    }

    #[test]
    fn end_of_input_is_an_empty_answer() {
        let mut input = Cursor::new("");
        assert_eq!(read_answer("Budget", &mut input, &mut Vec::new()).unwrap(), "");
    }
}
