// crates/cli/src/main.rs

use anyhow::Result;
use clap::{Arg, Command};
use smartshelf_library::Library;

mod commands;

fn build_cli() -> Command {
    Command::new("smartshelf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personal book collection tracker, online or off")
        .subcommand(Command::new("list").about("List all books in the collection"))
        .subcommand(
            Command::new("add")
                .about("Add a book to the collection")
                .arg(Arg::new("title").required(true).value_name("TITLE").help("Book title"))
                .arg(
                    Arg::new("author")
                        .short('a')
                        .long("author")
                        .required(true)
                        .value_name("AUTHOR")
                        .help("Author name"),
                )
                .arg(
                    Arg::new("genre")
                        .short('g')
                        .long("genre")
                        .required(true)
                        .value_name("GENRE")
                        .help("Genre (free-form; see 'genres' for suggestions)"),
                )
                .arg(
                    Arg::new("year")
                        .short('y')
                        .long("year")
                        .required(true)
                        .value_name("YEAR")
                        .value_parser(clap::value_parser!(i32))
                        .help("Publication year"),
                )
                .arg(
                    Arg::new("rating")
                        .short('r')
                        .long("rating")
                        .value_name("RATING")
                        .value_parser(clap::value_parser!(u8).range(0..=5))
                        .default_value("0")
                        .help("Star rating, 0 to 5"),
                )
                .arg(
                    Arg::new("status")
                        .short('s')
                        .long("status")
                        .value_name("STATUS")
                        .value_parser(["Unread", "Reading", "Read"])
                        .default_value("Unread")
                        .help("Reading status"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Update fields of an existing book")
                .arg(Arg::new("id").required(true).value_name("BOOK_ID").value_parser(clap::value_parser!(i64)).help("Numeric book id"))
                .arg(Arg::new("title").short('t').long("title").value_name("TITLE").help("New title"))
                .arg(Arg::new("author").short('a').long("author").value_name("AUTHOR").help("New author"))
                .arg(Arg::new("genre").short('g').long("genre").value_name("GENRE").help("New genre"))
                .arg(Arg::new("year").short('y').long("year").value_name("YEAR").value_parser(clap::value_parser!(i32)).help("New publication year"))
                .arg(Arg::new("rating").short('r').long("rating").value_name("RATING").value_parser(clap::value_parser!(u8).range(0..=5)).help("New rating"))
                .arg(Arg::new("status").short('s').long("status").value_name("STATUS").value_parser(["Unread", "Reading", "Read"]).help("New status")),
        )
        .subcommand(
            Command::new("delete")
                .about("Remove a book from the collection")
                .arg(Arg::new("id").required(true).value_name("BOOK_ID").value_parser(clap::value_parser!(i64)).help("Numeric book id")),
        )
        .subcommand(Command::new("recommend").about("Suggest a book based on your dominant genre"))
        .subcommand(Command::new("status").about("Show connectivity mode and collection statistics"))
        .subcommand(Command::new("genres").about("List the suggested genres"))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let matches = build_cli().get_matches();

    let mut library = Library::new()?;

    match matches.subcommand() {
        Some(("list", _)) => commands::list_books(&mut library).await,
        Some(("add", sub_matches)) => commands::add_book(&mut library, sub_matches).await,
        Some(("update", sub_matches)) => commands::update_book(&mut library, sub_matches).await,
        Some(("delete", sub_matches)) => commands::delete_book(&mut library, sub_matches).await,
        Some(("recommend", _)) => commands::recommend(&mut library).await,
        Some(("status", _)) => commands::show_status(&mut library).await,
        Some(("genres", _)) => {
            commands::list_genres();
            Ok(())
        }
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
