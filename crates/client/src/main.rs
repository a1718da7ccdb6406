//! Interactive terminal client for the Marquee movie record server.
//!
//! Renders the current records as a table, collects form input for one draft
//! record at a time, and reflects server responses into the local view
//! without a full reload. Commands: `list`, `add`, `edit <row>`,
//! `delete <row>`, `quit`.

use clap::Parser;
use console::style;
use marquee_api_shared::MovieRes;
use marquee_client::api::ApiClient;
use marquee_client::session::{NoticeLevel, Session, SubmitReq};
use std::io::{self, Write};

const DEFAULT_SERVER: &str = "http://localhost:5000";

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Terminal client for the Marquee movie record server")]
struct Cli {
    /// Base URL of the Marquee server (falls back to MARQUEE_SERVER)
    #[arg(long)]
    server: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let server = cli
        .server
        .or_else(|| std::env::var("MARQUEE_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_owned());

    let api = ApiClient::new(&server);
    let mut session = Session::new();

    println!("Connected to {server}");
    session.apply_list(api.list());
    print_notice(&mut session);

    loop {
        render_table(session.records());
        print!("{} ", style("marquee>").cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let row = parts.next().and_then(|s| s.parse::<usize>().ok());

        match (command, row) {
            ("list", _) => session.apply_list(api.list()),
            ("add", _) => {
                session.reset_draft();
                fill_draft(&mut session)?;
                submit(&api, &mut session);
            }
            ("edit", Some(row)) => {
                if session.begin_edit(row) {
                    print_notice(&mut session);
                    fill_draft(&mut session)?;
                    submit(&api, &mut session);
                }
            }
            ("delete", Some(row)) => {
                if let Some(id) = session.delete_target(row) {
                    session.apply_delete(&id, api.delete(&id));
                }
            }
            ("edit", None) | ("delete", None) => {
                println!("Give a row number, e.g. '{command} 0'.");
            }
            ("quit", _) | ("exit", _) => break,
            ("help", _) | ("", _) => print_help(),
            _ => println!("Unknown command. Type 'help' for commands."),
        }

        print_notice(&mut session);
    }

    Ok(())
}

/// Runs the submit flow: resolve the draft into a request, issue it, and
/// apply the response. A re-entrant or invalid submit resolves to no request.
fn submit(api: &ApiClient, session: &mut Session) {
    if let Some(req) = session.begin_submit() {
        let result = match &req {
            SubmitReq::Create {
                name,
                image,
                summary,
            } => api.create(name, image, summary),
            SubmitReq::Update {
                id,
                name,
                image,
                summary,
            } => api.update(id, name, image, summary),
        };
        session.finish_submit(result);
    }
}

/// Prompts for the three draft fields. An empty answer keeps the current
/// value, so editing only what changed is one keystroke per field.
fn fill_draft(session: &mut Session) -> io::Result<()> {
    let name = prompt("Name", &session.draft().name)?;
    let image = prompt("Image", &session.draft().image)?;
    let summary = prompt("Summary", &session.draft().summary)?;

    let draft = session.draft_mut();
    draft.name = name;
    draft.image = image;
    draft.summary = summary;
    Ok(())
}

fn prompt(label: &str, current: &str) -> io::Result<String> {
    if current.is_empty() {
        print!("{}: ", style(label).bold());
    } else {
        print!("{} [{}]: ", style(label).bold(), current);
    }
    io::stdout().flush()?;

    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    let entered = buf.trim();
    Ok(if entered.is_empty() {
        current.to_owned()
    } else {
        entered.to_owned()
    })
}

fn render_table(records: &[MovieRes]) {
    println!();
    if records.is_empty() {
        println!("{}", style("No movies yet.").dim());
        return;
    }
    println!(
        "{}",
        style(format!(
            "{:<5} {:<28} {:<24} Summary",
            "#", "Name", "Image"
        ))
        .bold()
    );
    for (row, movie) in records.iter().enumerate() {
        println!(
            "{:<5} {:<28} {:<24} {}",
            row, movie.name, movie.image, movie.summary
        );
    }
}

fn print_notice(session: &mut Session) {
    if let Some(notice) = session.take_notice() {
        let styled = match notice.level {
            NoticeLevel::Info => style(notice.text).cyan(),
            NoticeLevel::Success => style(notice.text).green(),
            NoticeLevel::Error => style(notice.text).red(),
        };
        println!("{styled}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list          refresh the table from the server");
    println!("  add           create a new movie record");
    println!("  edit <row>    edit the record at <row>");
    println!("  delete <row>  delete the record at <row>");
    println!("  quit          exit");
}
