//! Interactive console session
//!
//! One request at a time: read a self-description, echo the parse results,
//! render ranked recommendations, then offer alternatives and continuation.
//! Errors inside an iteration are reported and the loop re-prompts; nothing
//! here is fatal.

use std::io::{self, BufRead, Write};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Genre, ParsedPreferences, RecommendationSet, ValidationReport};
use crate::services::extractor::PreferenceExtractor;
use crate::services::recommender::Recommender;

const EXIT_KEYWORDS: [&str; 4] = ["exit", "quit", "q", "выход"];
const YES_TOKENS: [&str; 4] = ["yes", "y", "да", "д"];
const NO_TOKENS: [&str; 4] = ["no", "n", "нет", "н"];

/// Console I/O boundary
///
/// The session only ever reads one prompted line and writes whole lines, so
/// the seam stays narrow enough to mock in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Reads one line after showing `prompt`; None signals end of input
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Stdin/stdout-backed console
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}

/// Interactive recommendation session over a console
pub struct Session<'a, C: Console> {
    catalog: &'a Catalog,
    extractor: PreferenceExtractor,
    recommender: Recommender<'a>,
    console: C,
    config: Config,
}

impl<'a, C: Console> Session<'a, C> {
    pub fn new(catalog: &'a Catalog, config: Config, console: C) -> Self {
        Self {
            catalog,
            extractor: PreferenceExtractor::new(),
            recommender: Recommender::new(catalog),
            console,
            config,
        }
    }

    /// Runs the session until the user exits
    pub fn run(&mut self) -> AppResult<()> {
        self.print_welcome()?;
        self.print_examples()?;

        loop {
            let Some(input) = self.read_description()? else {
                break;
            };

            match self.serve(&input) {
                Ok(Served::Rendered) => {
                    if !self.confirm("Would you like fresh recommendations?")? {
                        self.console
                            .write_line("Thank you for using the advisor.")?;
                        break;
                    }
                    self.console.write_line(&format!("\n{}\n", "=".repeat(60)))?;
                }
                Ok(Served::InvalidInput) => {}
                Err(error) => {
                    // Recoverable: report and return to the prompt
                    tracing::error!(error = %error, "session iteration failed");
                    let _ = self
                        .console
                        .write_line(&format!("Something went wrong: {}", error));
                    let _ = self.console.write_line("Please try again.");
                }
            }
        }

        self.console.write_line("Goodbye!")?;
        Ok(())
    }

    fn print_welcome(&mut self) -> AppResult<()> {
        let banner = "=".repeat(60);
        self.console.write_line(&banner)?;
        self.console.write_line("GAME RECOMMENDATION ADVISOR")?;
        self.console.write_line(&banner)?;
        self.console
            .write_line("I will suggest video games based on your age and")?;
        self.console.write_line("your preferred genres.")?;
        self.console.write_line("")?;

        let genres: Vec<&str> = self
            .catalog
            .all_genres()
            .into_iter()
            .map(|genre| genre.label())
            .collect();
        self.console
            .write_line(&format!("Available genres: {}", genres.join(", ")))?;
        self.console.write_line("")?;
        Ok(())
    }

    fn print_examples(&mut self) -> AppResult<()> {
        self.console.write_line("EXAMPLES OF VALID INPUT:")?;
        self.console.write_line(&"-".repeat(40))?;
        for (index, example) in self.extractor.parsing_examples().iter().enumerate() {
            self.console
                .write_line(&format!("{}. {}", index + 1, example))?;
        }
        self.console.write_line("")?;
        Ok(())
    }

    /// Prompts until a usable line arrives; None means exit
    fn read_description(&mut self) -> AppResult<Option<String>> {
        self.console
            .write_line("Tell me about yourself (age and preferred genres):")?;

        loop {
            let Some(line) = self.console.read_line(">>> ")? else {
                return Ok(None);
            };

            let line = line.trim().to_string();
            if line.is_empty() {
                self.console.write_line("Please enter a non-empty line.")?;
                continue;
            }
            if EXIT_KEYWORDS.contains(&line.to_lowercase().as_str()) {
                return Ok(None);
            }
            return Ok(Some(line));
        }
    }

    fn serve(&mut self, input: &str) -> AppResult<Served> {
        self.console.write_line("Analyzing your input...")?;

        let parsed = self.extractor.extract(input);
        let report = parsed.validate();
        self.print_analysis(&parsed, &report)?;

        if !report.is_valid() {
            self.console
                .write_line("Could not process the input. Please try again.")?;
            self.console
                .write_line("The examples above show the expected format.")?;
            self.console.write_line("")?;
            return Ok(Served::InvalidInput);
        }
        let Some(age) = parsed.age else {
            return Ok(Served::InvalidInput);
        };

        let result = self.recommender.recommend(age, &parsed.genres);
        self.print_recommendations(&result)?;

        if self.confirm("Would you like alternative recommendations? (games from other genres)")? {
            self.print_alternatives(age, &parsed.genres)?;
        }

        Ok(Served::Rendered)
    }

    fn print_analysis(
        &mut self,
        parsed: &ParsedPreferences,
        report: &ValidationReport,
    ) -> AppResult<()> {
        self.console.write_line("ANALYSIS RESULTS:")?;

        let age = parsed
            .age
            .map_or_else(|| "not found".to_string(), |age| age.to_string());
        self.console.write_line(&format!("   Age: {}", age))?;

        let genres = if parsed.genres.is_empty() {
            "not found".to_string()
        } else {
            let mut labels: Vec<&str> = parsed.genres.iter().map(Genre::label).collect();
            labels.sort_unstable();
            labels.join(", ")
        };
        self.console.write_line(&format!("   Genres: {}", genres))?;

        if report.is_valid() {
            self.console.write_line("Input processed successfully!")?;
        } else {
            self.console.write_line("Problems:")?;
            for message in [&report.age_error, &report.genres_error].into_iter().flatten() {
                self.console.write_line(&format!("   - {}", message))?;
            }
        }
        self.console.write_line("")?;
        Ok(())
    }

    fn print_recommendations(&mut self, result: &RecommendationSet) -> AppResult<()> {
        self.console.write_line("GAME RECOMMENDATIONS:")?;
        self.console.write_line(&"=".repeat(50))?;

        if result.recommendations.is_empty() {
            self.console
                .write_line("Unfortunately, no suitable games were found.")?;
            self.console.write_line("Try different search criteria.")?;
            self.console.write_line("")?;
            return Ok(());
        }

        let shown = result
            .recommendations
            .iter()
            .take(self.config.max_recommendations);
        for (index, rec) in shown.enumerate() {
            self.console
                .write_line(&format!("{}. {}", index + 1, rec.name))?;
            let genre = rec.genre.map_or("unknown", |g| g.label());
            self.console.write_line(&format!("   Genre: {}", genre))?;
            self.console
                .write_line(&format!("   Age rating: {}+", rec.age_rating))?;
            self.console
                .write_line(&format!("   Relevance: {:.2}", rec.relevance))?;
            let platforms: Vec<&str> = rec.platforms.iter().map(|p| p.label()).collect();
            self.console
                .write_line(&format!("   Platforms: {}", platforms.join(", ")))?;
            self.console.write_line("")?;
        }

        self.console.write_line("WHY THESE GAMES:")?;
        self.console.write_line(&"-".repeat(40))?;
        self.console.write_line(&result.rationale)?;
        self.console.write_line("")?;
        Ok(())
    }

    fn print_alternatives(&mut self, age: u8, used_genres: &std::collections::HashSet<Genre>) -> AppResult<()> {
        self.console.write_line("Searching for alternatives...")?;

        let result = self.recommender.alternatives(age, used_genres);
        if result.recommendations.is_empty() {
            self.console
                .write_line("No alternative recommendations found.")?;
            self.console.write_line("")?;
            return Ok(());
        }

        self.console.write_line("ALTERNATIVE RECOMMENDATIONS:")?;
        self.console.write_line(&"=".repeat(50))?;
        let shown = result.recommendations.iter().take(self.config.max_alternatives);
        for (index, rec) in shown.enumerate() {
            self.console
                .write_line(&format!("{}. {}", index + 1, rec.name))?;
            let genre = rec.genre.map_or("unknown", |g| g.label());
            self.console.write_line(&format!("   Genre: {}", genre))?;
            self.console
                .write_line(&format!("   Age rating: {}+", rec.age_rating))?;
            self.console
                .write_line(&format!("   Relevance: {:.2}", rec.relevance))?;
            self.console.write_line("")?;
        }
        Ok(())
    }

    /// Asks a yes/no question; end of input counts as "no"
    fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        self.console.write_line(prompt)?;

        loop {
            let Some(line) = self.console.read_line(">>> ")? else {
                return Ok(false);
            };
            let token = line.trim().to_lowercase();
            if YES_TOKENS.contains(&token.as_str()) {
                return Ok(true);
            }
            if NO_TOKENS.contains(&token.as_str()) {
                return Ok(false);
            }
            self.console.write_line("Please answer 'yes' or 'no'.")?;
        }
    }
}

/// Outcome of one serviced input
enum Served {
    Rendered,
    InvalidInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    fn scripted(lines: &[&str], sink: Arc<Mutex<Vec<String>>>) -> MockConsole {
        let mut queue: VecDeque<String> = lines.iter().map(|l| l.to_string()).collect();
        let mut console = MockConsole::new();
        console
            .expect_read_line()
            .returning(move |_| Ok(queue.pop_front()));
        console.expect_write_line().returning(move |line| {
            sink.lock().unwrap().push(line.to_string());
            Ok(())
        });
        console
    }

    fn run_session(lines: &[&str]) -> Vec<String> {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let console = scripted(lines, Arc::clone(&sink));
        let catalog = Catalog::with_default_library().unwrap();
        let mut session = Session::new(&catalog, Config::default(), console);
        session.run().unwrap();

        let output = sink.lock().unwrap().clone();
        output
    }

    #[test]
    fn test_exit_keyword_terminates() {
        let output = run_session(&["exit"]);
        assert!(output.iter().any(|l| l.contains("Goodbye!")));
        assert!(!output.iter().any(|l| l.contains("GAME RECOMMENDATIONS")));
    }

    #[test]
    fn test_localized_exit_keyword_terminates() {
        let output = run_session(&["выход"]);
        assert!(output.iter().any(|l| l.contains("Goodbye!")));
    }

    #[test]
    fn test_end_of_input_terminates() {
        let output = run_session(&[]);
        assert!(output.iter().any(|l| l.contains("Goodbye!")));
    }

    #[test]
    fn test_welcome_lists_genres() {
        let output = run_session(&["exit"]);
        let genres_line = output
            .iter()
            .find(|l| l.starts_with("Available genres:"))
            .unwrap();
        assert!(genres_line.contains("RPG"));
        assert!(genres_line.contains("Sports"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let output = run_session(&["Hello, how are you?", "exit"]);
        assert!(output
            .iter()
            .any(|l| l.contains("Could not process the input")));
        assert!(output.iter().any(|l| l.contains("no age found")));
        assert!(output.iter().any(|l| l.contains("Goodbye!")));
    }

    #[test]
    fn test_empty_line_reprompts() {
        let output = run_session(&["", "   ", "exit"]);
        let nags = output
            .iter()
            .filter(|l| l.contains("Please enter a non-empty line."))
            .count();
        assert_eq!(nags, 2);
    }

    #[test]
    fn test_full_recommendation_flow() {
        let output = run_session(&["I am 13 years old, I like: RPG, indie", "no", "no"]);
        assert!(output.iter().any(|l| l.contains("Input processed successfully!")));
        assert!(output.iter().any(|l| l.contains("GAME RECOMMENDATIONS:")));
        assert!(output.iter().any(|l| l.contains("Top pick:")));
        assert!(output.iter().any(|l| l.contains("Thank you for using the advisor.")));
    }

    #[test]
    fn test_alternatives_flow_excludes_used_genres() {
        let output = run_session(&["Age: 25, I love Action and Strategy", "yes", "no"]);
        assert!(output
            .iter()
            .any(|l| l.contains("ALTERNATIVE RECOMMENDATIONS:")));

        // Alternatives must come from other genres entirely
        let alternatives_start = output
            .iter()
            .position(|l| l.contains("ALTERNATIVE RECOMMENDATIONS:"))
            .unwrap();
        for line in &output[alternatives_start..] {
            if let Some(genre) = line.strip_prefix("   Genre: ") {
                assert_ne!(genre, "Action");
                assert_ne!(genre, "Strategy");
            }
        }
    }

    #[test]
    fn test_unrecognized_confirmation_reasks() {
        let output = run_session(&["Age 16, I like Racing and Sports", "maybe", "no", "no"]);
        assert!(output.iter().any(|l| l.contains("Please answer 'yes' or 'no'.")));
        assert!(output.iter().any(|l| l.contains("Goodbye!")));
    }

    #[test]
    fn test_continue_starts_new_round() {
        let output = run_session(&[
            "I am 13 years old, I like: RPG, indie",
            "no",
            "yes",
            "Age 16, I like Racing and Sports",
            "no",
            "no",
        ]);
        let rounds = output
            .iter()
            .filter(|l| l.contains("GAME RECOMMENDATIONS:"))
            .count();
        assert_eq!(rounds, 2);
    }
}
