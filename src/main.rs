//! Terminal runner for the intake wizard.
//!
//! Wires the file-backed answer store and the logging submission gateway to
//! the command handlers and drives one session over stdin. Intended for
//! manual walkthroughs of the question flow, not as a client UI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use nutri_intake::adapters::storage::FileAnswerStore;
use nutri_intake::adapters::submission::LoggingSubmissionGateway;
use nutri_intake::application::handlers::wizard::{
    AdvanceQuestionCommand, AdvanceQuestionHandler, AnswerEntry, ChooseBranchCommand,
    ChooseBranchHandler, RecordAnswerCommand, RecordAnswerHandler, ResumeWizardCommand,
    ResumeWizardHandler, RetreatQuestionCommand, RetreatQuestionHandler, StartWizardCommand,
    StartWizardHandler, SubmitIntakeCommand, SubmitIntakeHandler,
};
use nutri_intake::config::AppConfig;
use nutri_intake::domain::foundation::SessionId;
use nutri_intake::domain::questionnaire::{AnswerValue, DietBranch, WizardView};

struct Handlers {
    start: StartWizardHandler,
    resume: ResumeWizardHandler,
    record: RecordAnswerHandler,
    branch: ChooseBranchHandler,
    advance: AdvanceQuestionHandler,
    retreat: RetreatQuestionHandler,
    submit: SubmitIntakeHandler,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let store = Arc::new(FileAnswerStore::new(&config.storage.data_dir));
    let gateway = Arc::new(LoggingSubmissionGateway::new());

    let handlers = Handlers {
        start: StartWizardHandler::new(store.clone()),
        resume: ResumeWizardHandler::new(store.clone()),
        record: RecordAnswerHandler::new(store.clone()),
        branch: ChooseBranchHandler::new(store.clone()),
        advance: AdvanceQuestionHandler::new(store.clone()),
        retreat: RetreatQuestionHandler::new(store.clone()),
        submit: SubmitIntakeHandler::new(
            store.clone(),
            gateway,
            config.submission.min_indicator_window(),
        ),
    };

    let session_id = match std::env::args().nth(1) {
        Some(raw) => raw.parse::<SessionId>()?,
        None => SessionId::new(),
    };
    println!("Session {session_id}");
    println!("Commands: start | back | next | answer <text> | branch <style> | food <n> <text> | consent <yes|no> | submit | quit");

    let view = handlers
        .resume
        .handle(ResumeWizardCommand { session_id })
        .await
        .view;
    render(&view);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let outcome = dispatch(&handlers, session_id, command, rest).await;
        match outcome {
            Ok(Some(view)) => render(&view),
            Ok(None) => break,
            Err(message) => println!("! {message}"),
        }
    }

    Ok(())
}

/// Runs one command; `Ok(None)` means quit.
async fn dispatch(
    handlers: &Handlers,
    session_id: SessionId,
    command: &str,
    rest: &str,
) -> Result<Option<WizardView>, String> {
    let current_display = || async {
        let view = handlers
            .resume
            .handle(ResumeWizardCommand { session_id })
            .await
            .view;
        view.as_question().map(|q| q.display_number - 1)
    };

    match command {
        "start" => handlers
            .start
            .handle(StartWizardCommand { session_id })
            .await
            .map(|r| Some(r.view))
            .map_err(|e| e.to_string()),
        "next" => handlers
            .advance
            .handle(AdvanceQuestionCommand { session_id })
            .await
            .map(|r| Some(r.view))
            .map_err(|e| e.to_string()),
        "back" => handlers
            .retreat
            .handle(RetreatQuestionCommand { session_id })
            .await
            .map(|r| Some(r.view))
            .map_err(|e| e.to_string()),
        "answer" => {
            let display_index = current_display().await.ok_or("Not at a question")?;
            handlers
                .record
                .handle(RecordAnswerCommand {
                    session_id,
                    display_index,
                    entry: AnswerEntry::Value(AnswerValue::Text(rest.to_string())),
                })
                .await
                .map(|r| Some(r.view))
                .map_err(|e| e.to_string())
        }
        "branch" => {
            let choice: DietBranch = rest.parse().map_err(|_| {
                "Expected one of: omnivore, vegetarian, vegan".to_string()
            })?;
            handlers
                .branch
                .handle(ChooseBranchCommand { session_id, choice })
                .await
                .map(|r| Some(r.view))
                .map_err(|e| e.to_string())
        }
        "food" => {
            let (index, text) = rest
                .split_once(' ')
                .ok_or("Usage: food <category-number> <text>")?;
            let sub_index: usize = index.parse().map_err(|_| "Bad category number")?;
            let display_index = current_display().await.ok_or("Not at a question")?;
            handlers
                .record
                .handle(RecordAnswerCommand {
                    session_id,
                    display_index,
                    entry: AnswerEntry::ExcludedFood {
                        sub_index,
                        text: text.to_string(),
                    },
                })
                .await
                .map(|r| Some(r.view))
                .map_err(|e| e.to_string())
        }
        "consent" => {
            let flag = matches!(rest, "yes" | "y" | "true");
            let display_index = current_display().await.ok_or("Not at a question")?;
            handlers
                .record
                .handle(RecordAnswerCommand {
                    session_id,
                    display_index,
                    entry: AnswerEntry::Value(AnswerValue::Flag(flag)),
                })
                .await
                .map(|r| Some(r.view))
                .map_err(|e| e.to_string())
        }
        "submit" => {
            let result = handlers
                .submit
                .handle(SubmitIntakeCommand { session_id })
                .await
                .map_err(|e| e.to_string())?;
            while result.indicator.is_active() {
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            }
            Ok(Some(result.view))
        }
        "quit" | "exit" => Ok(None),
        other => Err(format!("Unknown command: {other}")),
    }
}

fn render(view: &WizardView) {
    match view {
        WizardView::Intro { total, .. } => {
            println!("Intake questionnaire, {total} questions. Type 'start' to begin.");
        }
        WizardView::Submitted => {
            println!("Intake submitted. Thank you.");
        }
        WizardView::Question(question) => {
            println!(
                "[{}] Question {} of {} ({})",
                question.section, question.display_number, question.total, question.progress
            );
            println!("{}", question.markup);
            let mut hints = Vec::new();
            if question.can_advance {
                hints.push("next");
            }
            if question.can_submit {
                hints.push("submit");
            }
            if !hints.is_empty() {
                println!("Available: {}", hints.join(", "));
            }
        }
    }
}
