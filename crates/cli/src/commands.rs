// crates/cli/src/commands.rs

use anyhow::{Context, Result};
use clap::ArgMatches;
use console::style;
use smartshelf_core::{Book, BookDraft, BookId, BookStatus, GENRES};
use smartshelf_library::Library;

/// List the collection, newest first
pub async fn list_books(library: &mut Library) -> Result<()> {
    let books = library.list().await.context("Failed to load collection")?;
    print_mode(library);

    if books.is_empty() {
        println!("No books yet. Use 'add' to start your collection.");
        return Ok(());
    }

    println!("\n{} book(s)", style(books.len()).bold().cyan());
    println!("{}", "=".repeat(72));
    for book in &books {
        print_book(book);
    }

    Ok(())
}

/// Add a book from command-line arguments
pub async fn add_book(library: &mut Library, matches: &ArgMatches) -> Result<()> {
    let draft = BookDraft::new(
        required(matches, "title")?,
        required(matches, "author")?,
        required(matches, "genre")?,
        *matches
            .get_one::<i32>("year")
            .context("Publication year is required")?,
        required(matches, "status")?
            .parse::<BookStatus>()
            .map_err(anyhow::Error::msg)?,
    )
    .with_rating(*matches.get_one::<u8>("rating").unwrap_or(&0));

    let book = library.add(draft).await.context("Failed to add book")?;
    print_mode(library);
    println!(
        "{} Added '{}' with id {}",
        style("✓").green().bold(),
        book.title,
        book.id
    );
    Ok(())
}

/// Apply field overrides to an existing book
pub async fn update_book(library: &mut Library, matches: &ArgMatches) -> Result<()> {
    let id = BookId::new(
        *matches
            .get_one::<i64>("id")
            .context("Book id is required")?,
    );

    let mut book = library
        .list()
        .await
        .context("Failed to load collection")?
        .into_iter()
        .find(|b| b.id == id)
        .with_context(|| format!("No book with id {id}"))?;

    if let Some(title) = matches.get_one::<String>("title") {
        book.title = title.clone();
    }
    if let Some(author) = matches.get_one::<String>("author") {
        book.author = author.clone();
    }
    if let Some(genre) = matches.get_one::<String>("genre") {
        book.genre = genre.clone();
    }
    if let Some(year) = matches.get_one::<i32>("year") {
        book.year = *year;
    }
    if let Some(rating) = matches.get_one::<u8>("rating") {
        book.rating = *rating;
    }
    if let Some(status) = matches.get_one::<String>("status") {
        book.status = status.parse::<BookStatus>().map_err(anyhow::Error::msg)?;
    }

    let title = book.title.clone();
    library.update(book).await.context("Failed to update book")?;
    println!("{} Updated '{}'", style("✓").green().bold(), title);
    Ok(())
}

/// Delete a book by id
pub async fn delete_book(library: &mut Library, matches: &ArgMatches) -> Result<()> {
    let id = BookId::new(
        *matches
            .get_one::<i64>("id")
            .context("Book id is required")?,
    );

    library.delete(id).await.context("Failed to delete book")?;
    println!("{} Deleted book {}", style("✓").green().bold(), id);
    Ok(())
}

/// Print a recommendation for the current collection
pub async fn recommend(library: &mut Library) -> Result<()> {
    let rec = library
        .recommend()
        .await
        .context("Failed to get a recommendation")?;
    print_mode(library);

    println!("{}", rec.message);
    if let Some(book) = rec.book {
        println!(
            "  {} by {}",
            style(book.title).bold().cyan(),
            style(book.author).italic()
        );
    }
    Ok(())
}

/// Show connectivity mode and per-status counts
pub async fn show_status(library: &mut Library) -> Result<()> {
    library.list().await.context("Failed to load collection")?;
    let stats = library.stats();

    println!("Mode:    {}", style(library.mode()).bold());
    println!("Total:   {}", stats.total);
    println!("Read:    {}", stats.read);
    println!("Reading: {}", stats.reading);
    println!("Unread:  {}", stats.unread);
    Ok(())
}

/// Print the genre suggestion set
pub fn list_genres() {
    for genre in GENRES {
        println!("{genre}");
    }
}

fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("{name} is required"))
}

fn print_mode(library: &Library) {
    if library.is_offline() {
        println!(
            "{}",
            style("(offline — serving from local storage)").yellow()
        );
    }
}

fn print_book(book: &Book) {
    let stars = "★".repeat(book.rating as usize);
    println!(
        "[{}] {} — {} ({}, {}) {} {}",
        book.id,
        style(&book.title).bold(),
        book.author,
        book.genre,
        book.year,
        style(stars).yellow(),
        style(book.status).dim()
    );
}
