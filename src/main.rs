use book_digger::cli::{Cli, Command};
use book_digger::config;
use book_digger::config::log::set_global_logging_config;
use book_digger::pagination::Cursor;
use book_digger::provider::api::google;
use book_digger::session::{Completion, SearchSession, Ticket};
use clap::Parser;
use std::io::BufRead;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    config::load_dotenv();
    let mut app_config = match config::load_config() {
        Ok(c) => c,
        Err(err) => {
            eprintln!("Cannot load config: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Some(base_url) = &cli.base_url {
        app_config.api_mut().set_base_url(base_url.clone());
    }

    let mut logger = app_config.logger().clone();
    if let Some(level) = &cli.log_level {
        logger = logger.with_level(level);
    }
    let _guard = match set_global_logging_config(&logger) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let client = google::Client::from_config(app_config.api());
    let mut session = SearchSession::new();

    let ticket = session.search_at(&cli.query, Cursor::containing(cli.start_index));
    let succeeded = run_and_print(&mut session, &client, ticket, cli.json);
    if !cli.interactive {
        return if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!(error = %err, "cannot read stdin");
                return ExitCode::FAILURE;
            }
        };

        let ticket = match Command::parse(&line) {
            Command::Quit => break,
            Command::Next => session.next_page(),
            Command::Previous => session.previous_page(),
            Command::Search(term) => Ok(session.search(&term)),
            Command::Unknown(input) => {
                println!("Unknown command: {} (n, p, s <term>, q)", input);
                continue;
            }
        };

        match ticket {
            Ok(ticket) => {
                run_and_print(&mut session, &client, ticket, cli.json);
            }
            Err(refused) => println!("{}", refused),
        }
    }

    ExitCode::SUCCESS
}

fn run_and_print(session: &mut SearchSession, client: &google::Client, ticket: Ticket, json: bool) -> bool {
    match session.run(client, ticket) {
        Completion::Displayed => {
            print_page(session, json);
            true
        }
        Completion::Stale => true,
        Completion::Failed(err) => {
            eprintln!("Search failed: {}", err);
            false
        }
    }
}

fn print_page(session: &SearchSession, json: bool) {
    let Some(result) = session.current() else {
        return;
    };

    if json {
        match serde_json::to_string_pretty(result) {
            Ok(text) => println!("{}", text),
            Err(err) => error!(error = %err, "cannot serialize result"),
        }
        return;
    }

    if result.is_empty() {
        println!("No books found");
        return;
    }

    for book in result.books() {
        println!("{} / {}", book.title(), book.author());
        if let Some(url) = book.thumbnail_url() {
            println!("    {}", url);
        }
    }
    if let Some(label) = session.range_label() {
        println!("{}", label);
    }
}
