//! REPL (Read-Eval-Print Loop) for terminal quiz play

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use trivia_application::{
    CategoryStore, ListCategoriesUseCase, NextQuestionInput, NextQuestionUseCase, QuestionStore,
};
use trivia_domain::{Question, QuizOutcome, QuizScope, QuizSession, QuizSessionState};

/// Interactive quiz REPL
pub struct QuizRepl {
    questions: Arc<dyn QuestionStore>,
    categories: Arc<dyn CategoryStore>,
    scope: QuizScope,
}

impl QuizRepl {
    /// Create a new QuizRepl playing across the full catalog
    pub fn new(questions: Arc<dyn QuestionStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            questions,
            categories,
            scope: QuizScope::All,
        }
    }

    /// Restrict play to one category
    pub fn with_scope(mut self, scope: QuizScope) -> Self {
        self.scope = scope;
        self
    }

    /// Run the interactive quiz
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("trivia-server").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome().await;

        let draw = NextQuestionUseCase::new(self.questions.clone());
        let mut session = QuizSession::new(self.scope);

        'game: while !session.is_over() {
            let input = NextQuestionInput::new(session.asked().to_vec(), session.scope());
            let question = match draw.execute(input).await {
                Ok(QuizOutcome::Next(question)) => question,
                Ok(QuizOutcome::Exhausted) => {
                    session.mark_exhausted();
                    break;
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    break;
                }
            };

            session.record_asked(question.id());
            print_question(session.answered(), &question);

            // Prompt until this question gets an answer or the game ends
            loop {
                let readline = rl.readline("answer> ");

                match readline {
                    Ok(line) => {
                        let line = line.trim();

                        if line.is_empty() {
                            continue;
                        }

                        if line.starts_with('/') {
                            if self.handle_command(line, &session) {
                                session.end_by_user();
                                break 'game;
                            }
                            continue;
                        }

                        let _ = rl.add_history_entry(line);

                        if answers_match(line, question.answer_text()) {
                            println!("{}", "Correct!".green().bold());
                            session.record_correct();
                        } else {
                            println!(
                                "{} The answer was: {}",
                                "Not quite.".red(),
                                question.answer_text().bold()
                            );
                        }
                        println!();
                        break;
                    }
                    Err(ReadlineError::Interrupted) => {
                        println!("^C");
                        continue;
                    }
                    Err(ReadlineError::Eof) => {
                        session.end_by_user();
                        break 'game;
                    }
                    Err(err) => {
                        eprintln!("Error: {:?}", err);
                        session.end_by_user();
                        break 'game;
                    }
                }
            }
        }

        print_summary(&session);

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    async fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           Trivia - Quiz Play Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();

        match ListCategoriesUseCase::new(self.categories.clone())
            .execute()
            .await
        {
            Ok(listing) => {
                println!("Categories:");
                for (id, label) in &listing.categories {
                    println!("  {} - {}", id, label);
                }
            }
            Err(_) => println!("No categories configured."),
        }
        match self.scope {
            QuizScope::All => println!("Playing: all categories"),
            QuizScope::Category(id) => println!("Playing: category {}", id),
        }
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /score    - Show the running score");
        println!("  /quit     - End the quiz");
        println!();
    }

    /// Handle slash commands. Returns true if the game should end.
    fn handle_command(&self, cmd: &str, session: &QuizSession) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => true,
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?   - Show this help");
                println!("  /score          - Show the running score");
                println!("  /quit, /exit, /q - End the quiz");
                println!();
                false
            }
            "/score" => {
                println!(
                    "Score: {} correct out of {} asked",
                    session.correct(),
                    session.answered()
                );
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }
}

fn print_question(number: u32, question: &Question) {
    println!(
        "{} {}",
        format!("Q{}.", number).cyan().bold(),
        question.question_text()
    );
    println!(
        "{}",
        format!("    (difficulty {})", question.difficulty()).dimmed()
    );
}

fn print_summary(session: &QuizSession) {
    println!();
    println!("{}", "━".repeat(50).dimmed());
    match session.state() {
        QuizSessionState::Exhausted => println!("{}", "No questions left to ask.".yellow()),
        QuizSessionState::UserEnded => println!("Quiz ended."),
        QuizSessionState::Active => {}
    }
    println!(
        "Final score: {} correct out of {} asked",
        session.correct().to_string().green().bold(),
        session.answered()
    );
    println!();
}

/// Whitespace-trimmed, case-insensitive answer comparison.
fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_match_ignores_case() {
        assert!(answers_match("mars", "Mars"));
        assert!(answers_match("MARS", "mars"));
    }

    #[test]
    fn test_answers_match_trims_whitespace() {
        assert!(answers_match("  Mars  ", "Mars"));
        assert!(answers_match("Mars", "\tMars\n"));
    }

    #[test]
    fn test_answers_match_rejects_wrong_answer() {
        assert!(!answers_match("Venus", "Mars"));
    }

    #[test]
    fn test_answers_match_requires_the_whole_answer() {
        assert!(!answers_match("Mars", "Mars Bar"));
        assert!(!answers_match("Mars Bar", "Mars"));
    }
}
