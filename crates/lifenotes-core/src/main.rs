//! `lifenotes` command-line front end

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use lifenotes_content::Category;
use lifenotes_core::{
    logging, DiscoverPage, GenerationsPage, KnowledgeNotesPage, LifeStoriesPage, NotesConfig,
    SiteShell, UserNotesPage,
};
use lifenotes_index::CategoryFilter;
use lifenotes_tracker::{EntryInput, FileStore, TrackerKind};
use lifenotes_view::{to_html, to_text, Element};
use std::path::PathBuf;
use std::sync::Arc;

/// `--open N`, a 1-based card position
fn open_arg() -> Arg {
    Arg::new("open")
        .long("open")
        .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
        .help("Open the card at this position (1-based)")
}

fn cli() -> Command {
    Command::new("lifenotes")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Life-notes site pages and personal trackers")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("content")
                .long("content")
                .global(true)
                .help("Content directory or http(s) base URL"),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Tracker store file"),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print HTML instead of a text outline"),
        )
        .subcommand(
            Command::new("notes")
                .about("Knowledge-notes category tab")
                .arg(Arg::new("category").required(true).help("mind, relation, work, habit or future"))
                .arg(Arg::new("search").long("search").help("Keyword"))
                .arg(Arg::new("tag").long("tag").help("Tag button to activate"))
                .arg(open_arg()),
        )
        .subcommand(
            Command::new("discover")
                .about("Search across every category")
                .arg(Arg::new("category").long("category").default_value("all"))
                .arg(Arg::new("search").long("search").help("Keyword"))
                .arg(Arg::new("tag").long("tag").help("Tag button to activate"))
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for the unfiltered sample"),
                ),
        )
        .subcommand(
            Command::new("stage")
                .about("Generations page")
                .arg(Arg::new("id").help("Stage id; the life map when omitted")),
        )
        .subcommand(
            Command::new("patterns")
                .about("Life-pattern catalogue")
                .arg(open_arg()),
        )
        .subcommand(
            Command::new("jobs")
                .about("Job directory")
                .arg(Arg::new("job").long("job").help("Job id to show")),
        )
        .subcommand(
            Command::new("tracker")
                .about("Personal trackers")
                .arg(Arg::new("kind").required(true).help("quotes, chat, items, skills, money or network"))
                .subcommand_required(true)
                .subcommand(Command::new("list").about("Show entries"))
                .subcommand(
                    Command::new("add")
                        .about("Add an entry")
                        .arg(Arg::new("text").required(true))
                        .arg(Arg::new("type").long("type").help("Entry type"))
                        .arg(
                            Arg::new("level")
                                .long("level")
                                .value_parser(value_parser!(u32))
                                .help("Skill level"),
                        )
                        .arg(Arg::new("note").long("note").help("Contact note")),
                )
                .subcommand(
                    Command::new("delete").about("Delete an entry").arg(
                        Arg::new("index")
                            .required(true)
                            .value_parser(value_parser!(usize)),
                    ),
                ),
        )
        .subcommand(
            Command::new("chat")
                .about("Send a chat message and wait for the reply")
                .arg(Arg::new("message").required(true)),
        )
        .subcommand(
            Command::new("page")
                .about("Navigate to a page with a markdown section")
                .arg(Arg::new("id").required(true)),
        )
}

fn config_from(matches: &ArgMatches) -> anyhow::Result<NotesConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => NotesConfig::load(path)?,
        None => NotesConfig::new(),
    };
    if let Some(root) = matches.get_one::<String>("content") {
        config = config.with_content_root(root.as_str());
    }
    if let Some(store) = matches.get_one::<PathBuf>("store") {
        config = config.with_store_path(store.clone());
    }
    config.validate()?;
    Ok(config)
}

struct Output {
    html: bool,
}

impl Output {
    fn print(&self, element: &Element) {
        if self.html {
            println!("{}", to_html(element));
        } else {
            print!("{}", to_text(element));
        }
    }
}

async fn notes(config: &NotesConfig, args: &ArgMatches, out: &Output) -> anyhow::Result<()> {
    let category: Category = args
        .get_one::<String>("category")
        .map_or("", String::as_str)
        .parse()?;
    let mut page =
        KnowledgeNotesPage::new(config.loader()?, &config.paths, config.knowledge_expansion);
    page.show(category.as_str()).await;
    if let Some(search) = args.get_one::<String>("search") {
        page.set_search(category, search);
    }
    if let Some(tag) = args.get_one::<String>("tag") {
        page.toggle_tag(category, tag);
    }
    if let Some(&index) = args.get_one::<usize>("open") {
        page.toggle_card(category, index - 1);
    }
    out.print(&page.render());
    Ok(())
}

async fn discover(config: &NotesConfig, args: &ArgMatches, out: &Output) -> anyhow::Result<()> {
    let category: CategoryFilter = args
        .get_one::<String>("category")
        .map_or("all", String::as_str)
        .parse()?;
    let mut page = DiscoverPage::new(
        config.loader()?,
        config.paths.clone(),
        config.discover_sample,
        config.knowledge_expansion,
    );
    if let Some(&seed) = args.get_one::<u64>("seed") {
        page = page.with_seed(seed);
    }
    page.load().await;
    page.set_category(category);
    if let Some(search) = args.get_one::<String>("search") {
        page.set_search(search);
    }
    if let Some(tag) = args.get_one::<String>("tag") {
        page.toggle_tag(tag);
    }
    out.print(&page.render());
    Ok(())
}

async fn stage(config: &NotesConfig, args: &ArgMatches, out: &Output) -> anyhow::Result<()> {
    let query = args
        .get_one::<String>("id")
        .map(|id| format!("?stage={id}"))
        .unwrap_or_default();
    let (mut page, transition) =
        GenerationsPage::open(config.loader()?, &config.paths, &config.generations_base, &query);
    page.run(&transition).await;
    tracing::info!(location = %page.location(), "stage shown");
    out.print(&page.render());
    Ok(())
}

async fn stories(
    config: &NotesConfig,
    open: Option<usize>,
    job: Option<&str>,
) -> anyhow::Result<LifeStoriesPage> {
    let mut page =
        LifeStoriesPage::new(config.loader()?, config.paths.clone(), config.pattern_expansion);
    page.load().await;
    if let Some(index) = open {
        page.toggle_pattern(index - 1);
    }
    if let Some(job) = job {
        page.select_job(job);
    }
    Ok(page)
}

async fn trackers(config: &NotesConfig, args: &ArgMatches, out: &Output) -> anyhow::Result<()> {
    let kind: TrackerKind = args
        .get_one::<String>("kind")
        .map_or("", String::as_str)
        .parse()?;
    let mut page = open_store(config)?;

    match args.subcommand() {
        Some(("add", add)) => {
            let mut input = EntryInput::new(add.get_one::<String>("text").map_or("", String::as_str));
            if let Some(entry_type) = add.get_one::<String>("type") {
                input = input.with_kind(entry_type.as_str());
            }
            if let Some(&level) = add.get_one::<u32>("level") {
                input = input.with_level(level);
            }
            if let Some(note) = add.get_one::<String>("note") {
                input = input.with_note(note.as_str());
            }
            if !page.submit(kind, &input).await? {
                eprintln!("nothing added: text is empty");
            }
        }
        Some(("delete", delete)) => {
            let index = delete.get_one::<usize>("index").copied().unwrap_or_default();
            if !page.delete(kind, index)? {
                eprintln!("no {kind} entry at {index}");
            }
        }
        _ => {}
    }
    out.print(&page.render_kind(kind));
    Ok(())
}

fn open_store(config: &NotesConfig) -> anyhow::Result<UserNotesPage<Arc<FileStore>>> {
    let store = FileStore::open(&config.store_path)
        .with_context(|| format!("opening store {}", config.store_path.display()))?;
    Ok(UserNotesPage::open(Arc::new(store), config.chat_reply_delay()))
}

async fn page(config: &NotesConfig, args: &ArgMatches, out: &Output) -> anyhow::Result<()> {
    let id = args.get_one::<String>("id").map_or("", String::as_str);
    let mut shell = SiteShell::new(config.loader()?, &config.paths);
    shell.go(id).await;
    out.print(&shell.render());
    if let Some(section) = shell.section(id) {
        println!("{}", section.html);
    }
    Ok(())
}

async fn run(matches: ArgMatches) -> anyhow::Result<()> {
    let config = config_from(&matches)?;
    logging::init(&config)?;
    let out = Output {
        html: matches.get_flag("html"),
    };

    match matches.subcommand() {
        Some(("notes", args)) => notes(&config, args, &out).await?,
        Some(("discover", args)) => discover(&config, args, &out).await?,
        Some(("stage", args)) => stage(&config, args, &out).await?,
        Some(("patterns", args)) => {
            let page = stories(&config, args.get_one::<usize>("open").copied(), None).await?;
            out.print(&page.render_patterns());
        }
        Some(("jobs", args)) => {
            let job = args.get_one::<String>("job").map(String::as_str);
            let page = stories(&config, None, job).await?;
            for element in page.render_jobs() {
                out.print(&element);
            }
        }
        Some(("tracker", args)) => trackers(&config, args, &out).await?,
        Some(("chat", args)) => {
            let mut page = open_store(&config)?;
            let message = args.get_one::<String>("message").map_or("", String::as_str);
            page.submit(TrackerKind::Chat, &EntryInput::new(message)).await?;
            out.print(&page.render_kind(TrackerKind::Chat));
        }
        Some(("page", args)) => page(&config, args, &out).await?,
        _ => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let matches = cli().get_matches();
    if let Err(error) = run(matches).await {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["lifenotes", "stage", "high", "--html", "--content", "site"])
            .unwrap();
        assert!(matches.get_flag("html"));
        let config = config_from(&matches).unwrap();
        assert_eq!(config.content_root, "site");
    }

    #[test]
    fn tracker_add_parses_options() {
        let matches = cli()
            .try_get_matches_from(["lifenotes", "tracker", "skills", "add", "Rust", "--level", "3"])
            .unwrap();
        let (_, tracker) = matches.subcommand().unwrap();
        assert_eq!(tracker.get_one::<String>("kind").map(String::as_str), Some("skills"));
        let (name, add) = tracker.subcommand().unwrap();
        assert_eq!(name, "add");
        assert_eq!(add.get_one::<u32>("level"), Some(&3));
    }

    #[test]
    fn open_position_is_one_based() {
        let matches = cli()
            .try_get_matches_from(["lifenotes", "notes", "mind", "--open", "1"])
            .unwrap();
        let (_, notes) = matches.subcommand().unwrap();
        assert_eq!(notes.get_one::<usize>("open"), Some(&1));

        assert!(cli()
            .try_get_matches_from(["lifenotes", "notes", "mind", "--open", "0"])
            .is_err());
        assert!(cli()
            .try_get_matches_from(["lifenotes", "patterns", "--open", "0"])
            .is_err());
    }
}
