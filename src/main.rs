use std::cell::Cell;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dialoguer::{Confirm as Prompt, Password};

use ticketdesk::cli::{new_ticket, prefilled_update, Cli, Command};
use ticketdesk::config::Config;
use ticketdesk::gateway::{Gateway, HttpGateway};
use ticketdesk::logging::init_tracing;
use ticketdesk::model::{Credentials, NewComment, TicketId};
use ticketdesk::navigation::{Navigator, Route};
use ticketdesk::session::{FileTokenStore, TokenStore};
use ticketdesk::store::{AssumeYes, Notification, Store};
use ticketdesk::ui::{
    format_notification, render_placeholder, render_ticket_detail, render_ticket_list,
    take_notification,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the action reported an error notification.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(url) = cli.api_url.clone() {
        config
            .apply_api_url(url)
            .context("Invalid --api-url")?;
    }

    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::from_config(&config.session));
    let gateway = HttpGateway::new(&config.api, Arc::clone(&tokens))?;
    let store = Store::new(gateway, tokens);
    let mut navigator = Navigator::new(store.clone());
    let view = View {
        store,
        color: !cli.no_color,
    };

    if !matches!(cli.command, Command::Logout) {
        view.store.verify_token().await;
    }

    let route = navigator.mount(&cli.command.route().path());
    if cli.command.requires_session() && route == Route::Login {
        eprintln!("Not logged in. Run `ticketdesk login` first.");
        return Ok(false);
    }

    let ok = match cli.command {
        Command::Login { username, password } => {
            let credentials = Credentials::new(username, password_or_prompt(password)?);
            view.store.login(&credentials).await;
            view.report_auth()
        }
        Command::Register { username, password } => {
            let credentials = Credentials::new(username, password_or_prompt(password)?);
            view.store.register(&credentials).await;
            view.report_auth()
        }
        Command::Logout => {
            view.store.logout();
            let ok = view.report();
            if ok {
                println!("Logged out.");
            }
            ok
        }
        Command::Whoami => view.report_auth(),
        Command::List => {
            view.store.fetch_tickets().await;
            view.show_list()
        }
        Command::Show { id } => view.show_ticket(id).await,
        Command::New { title, description } => {
            let body = new_ticket(&title, description.as_deref());
            let mut destination = None;
            view.store
                .create_ticket(&body, |path| destination = Some(path))
                .await;
            let ok = view.report();
            match destination {
                Some(path) => ok && view.follow(&mut navigator, &path).await,
                None => ok,
            }
        }
        Command::Edit {
            id,
            title,
            description,
        } => {
            view.store.fetch_ticket_by_id(id).await;
            let Some(current) = view.store.snapshot().current_ticket else {
                view.report();
                return Ok(false);
            };
            let update = prefilled_update(
                title,
                description,
                &current.title,
                current.description.as_deref(),
            );
            let mut destination = None;
            view.store
                .update_ticket(id, &update, |path| destination = Some(path))
                .await;
            let ok = view.report();
            match destination {
                Some(path) => ok && view.follow(&mut navigator, &path).await,
                None => ok,
            }
        }
        Command::Close { id } => {
            view.store.close_ticket(id).await;
            view.report() && view.show_list()
        }
        Command::Open { id } => {
            view.store.open_ticket(id).await;
            view.report() && view.show_list()
        }
        Command::Delete { id, yes } => {
            if yes {
                view.store.delete_ticket(id, &AssumeYes).await;
                view.report()
            } else {
                let prompt_failed = Cell::new(false);
                let ask = |prompt: &str| {
                    match Prompt::new().with_prompt(prompt).default(false).interact() {
                        Ok(answer) => answer,
                        Err(err) => {
                            eprintln!(
                                "Cannot ask for confirmation ({}). Pass --yes to delete without prompting.",
                                err
                            );
                            prompt_failed.set(true);
                            false
                        }
                    }
                };
                view.store.delete_ticket(id, &ask).await;
                view.report() && !prompt_failed.get()
            }
        }
        Command::Comment { id, text } => {
            view.store
                .comment_on_ticket(id, &NewComment::new(text))
                .await;
            let ok = view.report();
            println!("{}", render_ticket_detail(&view.store.snapshot()));
            ok
        }
    };

    Ok(ok)
}

fn password_or_prompt(password: Option<String>) -> anyhow::Result<String> {
    match password {
        Some(password) => Ok(password),
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password"),
    }
}

/// Terminal rendering of store state.
struct View<G> {
    store: Store<G>,
    color: bool,
}

impl<G: Gateway> View<G> {
    /// Print and acknowledge the pending notification. Returns false for errors.
    fn report(&self) -> bool {
        match take_notification(&self.store) {
            Some(notification) => {
                let line = format_notification(&notification, self.color);
                match notification {
                    Notification::Error(_) => {
                        eprintln!("{}", line);
                        false
                    }
                    Notification::Success(_) => {
                        println!("{}", line);
                        true
                    }
                }
            }
            None => true,
        }
    }

    fn report_auth(&self) -> bool {
        let ok = self.report();
        if self.store.snapshot().is_authenticated {
            println!("Authenticated.");
        } else {
            println!("Not authenticated.");
        }
        ok
    }

    fn show_list(&self) -> bool {
        let ok = self.report();
        if ok {
            println!("{}", render_ticket_list(&self.store.snapshot()));
        }
        ok
    }

    async fn show_ticket(&self, id: TicketId) -> bool {
        self.store.fetch_ticket_by_id(id).await;
        let ok = self.report();
        if ok {
            println!("{}", render_ticket_detail(&self.store.snapshot()));
        }
        ok
    }

    /// Navigate to `path` the way the view layer would after a create/update.
    async fn follow(&self, navigator: &mut Navigator<G>, path: &str) -> bool {
        match navigator.navigate(path) {
            Route::Ticket(id) => self.show_ticket(id).await,
            other => {
                println!("{}", render_placeholder(other));
                true
            }
        }
    }
}
