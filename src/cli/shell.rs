//! Line-oriented interactive shell over the store.

use std::str::FromStr;

use thiserror::Error;

use crate::api::{Breed, BreedGateway};
use crate::detail::{self, DetailError};
use crate::state::collections::{CollectionType, ParseCollectionError};
use crate::state::{SearchInput, Store};

use super::render::{render_breed_detail, render_home};

pub const HELP: &str = "\
Commands:
  list                         show the current view
  page N | next | prev         browse catalog pages
  search [TEXT]                search now (empty text reloads page 1)
  type [TEXT]                  search after a short pause, like typing
  clear                        forget the search text
  tab all|wishlist|readyToAdopt|owned
  add COLLECTION ID            add a breed to a collection
  remove COLLECTION ID         remove a breed from a collection
  toggle COLLECTION ID         add or remove
  adopt                        adopt everything ready to adopt
  show ID                      breed details
  help | quit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unknown command '{0}'. Type `help` for a list of commands.")]
    UnknownCommand(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error(transparent)]
    Collection(#[from] ParseCollectionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    List,
    /// One-based page number as typed.
    Page(i64),
    Next,
    Prev,
    Search(String),
    Type(String),
    Clear,
    Tab(Option<CollectionType>),
    Add { collection: CollectionType, id: u32 },
    Remove { collection: CollectionType, id: u32 },
    Toggle { collection: CollectionType, id: u32 },
    Adopt,
    Show(String),
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(ShellCommand::Empty),
            "list" | "ls" => Ok(ShellCommand::List),
            "page" => Ok(ShellCommand::Page(parse_number(rest, "page", "a page number")?)),
            "next" | "n" => Ok(ShellCommand::Next),
            "prev" | "p" => Ok(ShellCommand::Prev),
            "search" => Ok(ShellCommand::Search(rest.to_string())),
            "type" => Ok(ShellCommand::Type(rest.to_string())),
            "clear" => Ok(ShellCommand::Clear),
            "tab" => match rest {
                "" => Err(ShellError::MissingArgument {
                    command: "tab",
                    argument: "a collection or `all`",
                }),
                r if r.eq_ignore_ascii_case("all") => Ok(ShellCommand::Tab(None)),
                r => Ok(ShellCommand::Tab(Some(r.parse()?))),
            },
            "add" => {
                let (collection, id) = collection_and_id(rest, "add")?;
                Ok(ShellCommand::Add { collection, id })
            }
            "remove" | "rm" => {
                let (collection, id) = collection_and_id(rest, "remove")?;
                Ok(ShellCommand::Remove { collection, id })
            }
            "toggle" => {
                let (collection, id) = collection_and_id(rest, "toggle")?;
                Ok(ShellCommand::Toggle { collection, id })
            }
            "adopt" => Ok(ShellCommand::Adopt),
            "show" => Ok(ShellCommand::Show(rest.to_string())),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_number<T: FromStr>(
    raw: &str,
    command: &'static str,
    argument: &'static str,
) -> Result<T, ShellError> {
    if raw.is_empty() {
        return Err(ShellError::MissingArgument { command, argument });
    }
    raw.parse()
        .map_err(|_| ShellError::InvalidNumber(raw.to_string()))
}

fn collection_and_id(rest: &str, command: &'static str) -> Result<(CollectionType, u32), ShellError> {
    let mut parts = rest.split_whitespace();
    let (Some(collection), Some(id)) = (parts.next(), parts.next()) else {
        return Err(ShellError::MissingArgument {
            command,
            argument: "a collection and a breed id",
        });
    };
    Ok((collection.parse()?, parse_number(id, command, "a breed id")?))
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print this and read the next line.
    Continue(String),
    Quit,
}

/// Executes shell commands against a store.
pub struct Shell<G: BreedGateway> {
    store: Store<G>,
    search: SearchInput<G>,
    image_cdn_url: String,
}

impl<G: BreedGateway> Shell<G> {
    pub fn new(store: Store<G>, search: SearchInput<G>, image_cdn_url: impl Into<String>) -> Self {
        Self {
            store,
            search,
            image_cdn_url: image_cdn_url.into(),
        }
    }

    pub fn store(&self) -> &Store<G> {
        &self.store
    }

    /// Load the first page if needed and render the home screen.
    pub async fn start(&self) -> String {
        self.store.ensure_loaded().await;
        self.home()
    }

    fn home(&self) -> String {
        self.store.read(render_home)
    }

    /// Parse and run one input line.
    pub async fn execute_line(&self, line: &str) -> Flow {
        match line.parse::<ShellCommand>() {
            Ok(command) => self.execute(command).await,
            Err(e) => Flow::Continue(e.to_string()),
        }
    }

    pub async fn execute(&self, command: ShellCommand) -> Flow {
        let output = match command {
            ShellCommand::Empty => String::new(),
            ShellCommand::List => self.home(),
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Flow::Quit,
            ShellCommand::Page(page) => self.go_to(page.saturating_sub(1)).await,
            ShellCommand::Next => {
                let current = self.store.read(|s| i64::from(s.catalog.current_page));
                self.go_to(current + 1).await
            }
            ShellCommand::Prev => {
                let current = self.store.read(|s| i64::from(s.catalog.current_page));
                self.go_to(current - 1).await
            }
            ShellCommand::Search(text) => {
                self.store.search(&text).await;
                self.home()
            }
            ShellCommand::Type(text) => {
                self.search.on_input(text);
                "Searching after a short pause; type `list` to see the results.".to_string()
            }
            ShellCommand::Clear => {
                self.store.clear_search();
                "Search cleared.".to_string()
            }
            ShellCommand::Tab(collection) => {
                self.store.set_active_collection(collection);
                self.store.ensure_loaded().await;
                self.home()
            }
            ShellCommand::Add { collection, id } => match self.resolve_breed(id).await {
                Ok(breed) => {
                    self.store.add_breed(collection, &breed);
                    format!("Added {} to {}.", breed.name, collection.label())
                }
                Err(e) => e.to_string(),
            },
            ShellCommand::Remove { collection, id } => {
                if self.store.is_in_collection(collection, id) {
                    self.store.remove_from_collection(collection, id);
                    format!("Removed #{} from {}.", id, collection.label())
                } else {
                    format!("#{} is not in {}.", id, collection.label())
                }
            }
            ShellCommand::Toggle { collection, id } => match self.resolve_breed(id).await {
                Ok(breed) => {
                    if self.store.toggle_collection(collection, &breed) {
                        format!("Added {} to {}.", breed.name, collection.label())
                    } else {
                        format!("Removed {} from {}.", breed.name, collection.label())
                    }
                }
                Err(e) => e.to_string(),
            },
            ShellCommand::Adopt => {
                if self.store.read(|s| s.collections.ready_to_adopt.is_empty()) {
                    "Nothing is ready to adopt.".to_string()
                } else {
                    let count = self.store.adopt_breeds();
                    format!("Adopted {} breeds. It's a big commitment!", count)
                }
            }
            ShellCommand::Show(raw) => self.show(&raw).await,
        };
        Flow::Continue(output)
    }

    async fn go_to(&self, page: i64) -> String {
        if self.store.go_to_page(page).await {
            return self.home();
        }
        let total = self.store.read(|s| s.catalog.total_pages);
        if total == 0 {
            "No pages loaded yet.".to_string()
        } else {
            format!("Page out of range (1-{}).", total)
        }
    }

    async fn show(&self, raw: &str) -> String {
        let result = match detail::parse_breed_id(raw) {
            Ok(id) => detail::load_breed_detail(self.store.gateway(), id).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(breed) => {
                self.store
                    .read(|s| render_breed_detail(&breed, &s.collections, &self.image_cdn_url))
            }
            Err(e) => e.to_string(),
        }
    }

    /// Breed from the current page, or fetched by id when not on it.
    async fn resolve_breed(&self, id: u32) -> Result<Breed, DetailError> {
        if let Some(breed) = self.store.read(|s| s.catalog.find(id).cloned()) {
            return Ok(breed);
        }
        self.store
            .gateway()
            .fetch_breed(id)
            .await
            .map_err(DetailError::from)
    }
}
