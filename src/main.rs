//! Binary entry point that glues configuration, logging and the verse store to
//! the operator console. Without a subcommand the Ratatui console runs; `list`
//! and `show` answer one question on stdout and exit.
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use bible_projector::config::{self, Config};
use bible_projector::{logging, run_app, App, BookCatalog, Session};

#[derive(Parser, Debug)]
#[command(name = "bible-projector", version, about = "Project Bible verses from local SQLite translations")]
struct Cli {
    /// Configuration file (defaults to ~/.bible-projector/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the installed `.SQLite3` translations
    #[arg(long, value_name = "DIR")]
    books_dir: Option<PathBuf>,

    /// Translation to open first
    #[arg(short, long, value_name = "ID")]
    translation: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the installed translations
    List,
    /// Print a chapter, or a single verse, of a translation
    Show {
        translation: String,
        /// Book number as stored in the database (10 = Genesis in MyBible packs)
        book: i64,
        chapter: u32,
        verse: Option<usize>,
    },
}

/// Load settings, start logging, and dispatch to the console or a subcommand.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = config::data_dir()?;
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| config::default_config_path(&data_dir));
    let config = Config::load(&config_path)?;

    let filter = logging::build_filter(config.log_filter.as_deref(), cli.verbose)
        .unwrap_or_else(|err| {
            eprintln!("warning: {err:#}, using the default log filter");
            logging::default_filter(cli.verbose)
        });
    if let Err(err) = logging::init(&config::log_dir(&data_dir), filter) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    let books_dir = cli
        .books_dir
        .clone()
        .unwrap_or_else(|| config.resolve_books_dir(&data_dir));
    info!(books_dir = %books_dir.display(), config = %config_path.display(), "starting");

    let mut session = Session::new(books_dir, BookCatalog::builtin());

    match cli.command {
        Some(Command::List) => list_installed(&session),
        Some(Command::Show {
            translation,
            book,
            chapter,
            verse,
        }) => show_chapter(&mut session, &translation, book, chapter, verse),
        None => {
            let preferred = cli.translation.or(config.default_translation);
            run_console(session, preferred.as_deref())
        }
    }
}

fn run_console(mut session: Session, preferred: Option<&str>) -> Result<()> {
    let startup_error = match session.open_initial(preferred) {
        Ok(_) => None,
        Err(err) => {
            warn!(error = ?err, "could not open a translation at start-up");
            Some(format!("{err:#}"))
        }
    };

    let mut app = App::new(session);
    if let Some(message) = startup_error {
        app.notify_error(message);
    }
    run_app(&mut app)
}

fn list_installed(session: &Session) -> Result<()> {
    let installed = session.installed()?;
    if installed.is_empty() {
        println!(
            "No translations installed in {}.",
            session.store().books_dir().display()
        );
        return Ok(());
    }
    for identifier in &installed {
        println!(
            "{identifier:<8} {}",
            session.catalog().resolve_display_name(identifier)
        );
    }
    Ok(())
}

fn show_chapter(
    session: &mut Session,
    translation: &str,
    book: i64,
    chapter: u32,
    verse: Option<usize>,
) -> Result<()> {
    session.switch_translation(translation)?;

    session.select_book(book)?;
    if session.current_book().is_none() {
        bail!("book {book} is not part of {translation}");
    }
    session.select_chapter(chapter)?;
    if session.navigation().chapter() != Some(chapter) {
        bail!("chapter {chapter} does not exist in book {book}");
    }

    match verse {
        Some(number) => {
            if number == 0 || number > session.verses().len() {
                bail!("verse {number} does not exist in chapter {chapter}");
            }
            session.select_verse(number - 1);
            let projector = session.projector();
            println!("{}", projector.main_text());
            if let Some(footer) = projector.footer() {
                println!("{footer}");
            }
        }
        None => {
            if let Some(caption) = session.caption() {
                println!("{caption}");
            }
            for verse in session.verses() {
                println!("{}", verse.display_line());
            }
        }
    }
    Ok(())
}
