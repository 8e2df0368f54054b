//! Line-oriented front-end driving the page controllers from stdin.

use std::{
    io::Write,
    str::FromStr,
    sync::{Arc, Mutex},
};

use anyhow::{Context, bail};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines},
    sync::Mutex as AsyncMutex,
};

use heroes_app::HeroService;
use heroes_types::hero::Hero;
use heroes_web::{
    AppState, ConfirmDialogData, Confirmer, Navigator, Notification, NotificationKind, Notifier,
    Route,
    forms::{HeroForm, HeroSubmission},
    pages::{HeroAction, HeroCreatePage, HeroEditPage, HeroListPage, HeroViewPage, PageDirection},
};

type Input = Arc<AsyncMutex<Lines<Box<dyn AsyncBufRead + Unpin + Send>>>>;

const HELP: &str = "\
Commands:
  list               show the current page
  search <term>      filter by name or real name
  clear              clear the search
  next | prev        move between pages
  size <n>           set the page size
  view <id>          show a hero
  create             add a hero
  edit <id>          change a hero
  delete <id>        delete a hero
  help               show this help
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Search(String),
    Clear,
    Next,
    Prev,
    Size(usize),
    View(String),
    Create,
    Edit(String),
    Delete(String),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let required = |what: &str| -> anyhow::Result<String> {
            if arg.is_empty() {
                bail!("usage: {name} <{what}>");
            }
            Ok(arg.to_string())
        };

        let command = match name.to_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "search" => Command::Search(arg.to_string()),
            "clear" => Command::Clear,
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "size" => {
                let size = required("n")?
                    .parse::<usize>()
                    .context("page size must be a positive number")?;
                if size == 0 {
                    bail!("page size must be a positive number");
                }
                Command::Size(size)
            }
            "view" => Command::View(required("id")?),
            "create" | "new" => Command::Create,
            "edit" => Command::Edit(required("id")?),
            "delete" | "rm" => Command::Delete(required("id")?),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command '{other}', type 'help'"),
        };
        Ok(command)
    }
}

/// Prints notifications on stdout.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let marker = match notification.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };
        println!("[{marker}] {}", notification.message);
    }
}

/// Asks on stdout and reads the answer from the shared input.
struct ConsoleConfirmer {
    input: Input,
}

#[async_trait::async_trait]
impl Confirmer for ConsoleConfirmer {
    async fn confirm(&self, data: ConfirmDialogData) -> bool {
        print!(
            "{}: {} [{}/{}] (y/N) ",
            data.title, data.message, data.confirm_text, data.cancel_text
        );
        if let Err(e) = std::io::stdout().flush() {
            tracing::warn!(error = %e, "Failed to flush confirmation prompt");
        }

        match self.input.lock().await.next_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

/// Remembers where the pages asked to go.
#[derive(Default)]
struct ConsoleNavigator {
    current: Mutex<Option<Route>>,
}

impl ConsoleNavigator {
    fn take(&self) -> Option<Route> {
        self.current.lock().ok().and_then(|mut route| route.take())
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "Navigate");
        if let Ok(mut current) = self.current.lock() {
            *current = Some(route);
        }
    }
}

pub struct Console {
    input: Input,
    navigator: Arc<ConsoleNavigator>,
    list: HeroListPage,
    create: HeroCreatePage,
    edit: HeroEditPage,
    view: HeroViewPage,
}

impl Console {
    pub fn stdio(hero_service: Arc<HeroService>) -> Self {
        Self::new(hero_service, Box::new(BufReader::new(tokio::io::stdin())))
    }

    fn new(hero_service: Arc<HeroService>, reader: Box<dyn AsyncBufRead + Unpin + Send>) -> Self {
        let input: Input = Arc::new(AsyncMutex::new(reader.lines()));
        let navigator = Arc::new(ConsoleNavigator::default());
        let state = AppState::new(
            hero_service,
            Arc::new(ConsoleNotifier),
            Arc::new(ConsoleConfirmer {
                input: input.clone(),
            }),
            navigator.clone(),
        );

        Self {
            input,
            navigator,
            list: HeroListPage::new(state.clone()),
            create: HeroCreatePage::new(state.clone()),
            edit: HeroEditPage::new(state.clone()),
            view: HeroViewPage::new(state),
        }
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run(&self) -> anyhow::Result<()> {
        println!("Heroes roster. Type 'help' for commands.");
        self.list.activate().await;
        self.render_list();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = self.read_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            if let Err(e) = self.dispatch(command).await {
                println!("{e:#}");
            }
            if self.navigator.take() == Some(Route::List) {
                self.render_list();
            }
        }

        tracing::info!("Console closed");
        Ok(())
    }

    async fn dispatch(&self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::List => self.render_list(),
            Command::Search(term) => {
                self.list.on_search_change(&term);
                self.render_list();
            }
            Command::Clear => {
                self.list.on_clear_search();
                self.render_list();
            }
            Command::Next => {
                self.list.on_page_change(PageDirection::Next);
                self.render_list();
            }
            Command::Prev => {
                self.list.on_page_change(PageDirection::Previous);
                self.render_list();
            }
            Command::Size(size) => {
                self.list.on_page_size_change(size);
                self.render_list();
            }
            Command::View(id) => {
                if let Some(hero) = self.view.activate(&id).await {
                    println!("{}", serde_json::to_string_pretty(&hero)?);
                } else {
                    println!("No hero with id {id}");
                }
            }
            Command::Create => {
                let form = self.fill_form(HeroForm::new()).await?;
                if let Some(HeroSubmission::Create(request)) = form {
                    self.create.submit(request).await;
                }
            }
            Command::Edit(id) => {
                self.edit.activate(&id).await;
                let Some(form) = self.edit.form() else {
                    return Ok(());
                };
                if let Some(HeroSubmission::Update(request)) = self.fill_form(form).await? {
                    self.edit.submit(request).await;
                }
            }
            Command::Delete(id) => {
                if self.list.on_hero_action(HeroAction::Delete(id)).await {
                    self.render_list();
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => {}
        }
        Ok(())
    }

    /// Prompts for every field, keeping the current value on an empty answer.
    async fn fill_form(&self, mut form: HeroForm) -> anyhow::Result<Option<HeroSubmission>> {
        form.name = self.prompt("Name", &form.name).await?;
        form.real_name = self.prompt("Real name", &form.real_name).await?;
        form.image_url = self.prompt("Image URL", &form.image_url).await?;

        let effectiveness = self
            .prompt("Effectiveness (1-100)", &form.effectiveness.to_string())
            .await?;
        form.effectiveness = effectiveness
            .parse()
            .context("effectiveness must be a number")?;

        let alive = self
            .prompt("Alive (y/n)", if form.is_alive { "y" } else { "n" })
            .await?;
        form.is_alive = !matches!(alive.to_lowercase().as_str(), "n" | "no");

        let powers = self.prompt("Powers (comma separated)", &form.powers().join(", ")).await?;
        while !form.powers().is_empty() {
            form.remove_power(0);
        }
        for power in powers.split(',') {
            if let Err(e) = form.add_power(power) {
                println!("{e}");
            }
        }

        let weaknesses = self
            .prompt("Weaknesses (comma separated)", &form.weaknesses().join(", "))
            .await?;
        while !form.weaknesses().is_empty() {
            form.remove_weakness(0);
        }
        for weakness in weaknesses.split(',') {
            if let Err(e) = form.add_weakness(weakness) {
                println!("{e}");
            }
        }

        match form.submit() {
            Ok(submission) => Ok(Some(submission)),
            Err(errors) => {
                for (field, error) in errors {
                    println!("  {field}: {error}");
                }
                Ok(None)
            }
        }
    }

    async fn prompt(&self, label: &str, current: &str) -> anyhow::Result<String> {
        if current.is_empty() {
            print!("{label}: ");
        } else {
            print!("{label} [{current}]: ");
        }
        std::io::stdout().flush()?;

        let answer = self.read_line().await?.context("input closed")?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer.to_string()
        })
    }

    async fn read_line(&self) -> anyhow::Result<Option<String>> {
        Ok(self.input.lock().await.next_line().await?)
    }

    fn render_list(&self) {
        if let Some(error) = self.list.error() {
            println!("[error] {error}");
        }

        let page = self.list.page();
        if page.data.is_empty() {
            if self.list.has_active_filters() {
                println!("No heroes match the search.");
            } else {
                println!("No heroes yet.");
            }
            return;
        }

        for hero in &page.data {
            println!("{}", hero_row(hero));
        }
        let range = self.list.results_range();
        println!(
            "Showing {}-{} of {} | page {}/{}",
            range.start,
            range.end,
            page.pagination.total_items,
            page.pagination.page,
            page.pagination.total_pages
        );
    }
}

fn hero_row(hero: &Hero) -> String {
    let status = if hero.is_alive { "alive" } else { "deceased" };
    format!(
        "{:<36}  {:<20}  {:>3}  {:<8}  {}",
        hero.id,
        hero.name,
        hero.effectiveness.value(),
        status,
        hero.powers.join(", ")
    )
}
