//! eventy CLI entry point.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eventy_client::cli::{Cli, Commands, OutputFormat};
use eventy_client::client::EventyClient;
use eventy_client::error::ClientError;
use eventy_client::join::{JoinCoordinator, JoinOutcome};
use eventy_client::lifecycle::{CreateOutcome, DeleteOutcome, LifecycleCoordinator, UpdateOutcome};
use eventy_client::notify::TerminalNotify;
use eventy_client::output::{format_output, pretty};
use eventy_client::session::SessionStore;
use eventy_core::auth::{
    validate_credentials, validate_registration, LoginRequest, RegisterRequest, Session,
};
use eventy_core::event::{
    events_created_by, filter_events, sort_events_by_start, CreateEventRequest, Event, EventFilter,
    UpdateEventRequest,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventy=warn,eventy_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = EventyClient::new(&cli.base_url);
    let store = SessionStore::open_default();
    // The session is restored before any command dispatch.
    let session = store.load();

    match cli.command {
        Commands::Auth(auth_cmd) => {
            use eventy_client::cli::auth::AuthAction;
            match auth_cmd.action {
                AuthAction::Register {
                    name,
                    email,
                    password,
                    photo_url,
                } => {
                    let mut request = RegisterRequest::new(name, email, password);
                    if let Some(photo_url) = photo_url {
                        request = request.with_photo_url(photo_url);
                    }
                    if let Err(errors) = validate_registration(&request) {
                        for error in &errors {
                            eprintln!("{}: {}", error.field(), error);
                        }
                        std::process::exit(1);
                    }
                    match client.register(&request.with_default_photo()).await {
                        Ok(user) => {
                            store.save(&Session::new(user.clone()))?;
                            match cli.format {
                                OutputFormat::Json => {
                                    println!("{}", format_output(&user, cli.format))
                                }
                                OutputFormat::Pretty => {
                                    if !cli.quiet {
                                        println!(
                                            "Account Created! Welcome to Eventy, you are now logged in."
                                        );
                                    }
                                    println!("{}", pretty::format_user(&user));
                                }
                            }
                        }
                        Err(ClientError::Api { error, .. }) => fail("Registration Failed", &error),
                        Err(err) => {
                            tracing::debug!(%err, "register request did not complete");
                            fail(
                                "Registration Failed",
                                "An unexpected error occurred. Please try again.",
                            );
                        }
                    }
                }
                AuthAction::Login { email, password } => {
                    let request = LoginRequest::new(email, password);
                    if let Err(errors) = validate_credentials(&request) {
                        for error in &errors {
                            eprintln!("{error}");
                        }
                        std::process::exit(1);
                    }
                    match client.login(&request).await {
                        Ok(user) => {
                            store.save(&Session::new(user.clone()))?;
                            match cli.format {
                                OutputFormat::Json => {
                                    println!("{}", format_output(&user, cli.format))
                                }
                                OutputFormat::Pretty => {
                                    if !cli.quiet {
                                        println!("Welcome back, {}!", user.name);
                                    }
                                    println!("{}", pretty::format_user(&user));
                                }
                            }
                        }
                        Err(ClientError::Api { error, .. }) => fail("Login Failed", &error),
                        Err(err) => {
                            tracing::debug!(%err, "login request did not complete");
                            fail("Login Failed", "Login failed. Please try again.");
                        }
                    }
                }
                AuthAction::Logout => {
                    store.clear()?;
                    if !cli.quiet {
                        println!("Logged out.");
                    }
                }
                AuthAction::Whoami => match session {
                    Some(session) => match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&session.user, cli.format))
                        }
                        OutputFormat::Pretty => println!("{}", pretty::format_user(&session.user)),
                    },
                    None => println!("Not logged in."),
                },
            }
        }
        Commands::Events(events_cmd) => {
            use eventy_client::cli::events::EventsAction;
            let today = Local::now().date_naive();
            let json = cli.format == OutputFormat::Json;

            match events_cmd.action {
                EventsAction::List { search, filter } => {
                    let mut events = client.events().await?;
                    sort_events_by_start(&mut events);
                    let event_filter = EventFilter::new()
                        .with_search(search.unwrap_or_default())
                        .with_bucket(filter.into());
                    let filtered = filter_events(&events, &event_filter, today);
                    let viewer = session.as_ref().map(|session| session.user_id().to_string());
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&filtered, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_events(&filtered, viewer.as_deref()))
                        }
                    }
                }
                EventsAction::Mine => {
                    let session = require_session(session)?;
                    let mut events = client.events().await?;
                    sort_events_by_start(&mut events);
                    let mine = events_created_by(&events, session.user_id());
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&mine, cli.format)),
                        OutputFormat::Pretty => {
                            if mine.is_empty() {
                                println!(
                                    "No events created yet. Start by creating your first event."
                                );
                            } else {
                                println!(
                                    "{}",
                                    pretty::format_events(&mine, Some(session.user_id()))
                                );
                            }
                        }
                    }
                }
                EventsAction::Create {
                    title,
                    date,
                    time,
                    location,
                    description,
                } => {
                    let session = require_session(session)?;
                    let request = CreateEventRequest::new(title, date, time, location, description)
                        .with_organizer(session.user.name.clone(), session.user.id.clone());
                    let mut notify = TerminalNotify::new(false, cli.quiet || json);
                    let outcome = LifecycleCoordinator::new(&client, &mut notify)
                        .create(request, today)
                        .await;
                    match outcome {
                        CreateOutcome::Created(event) => match cli.format {
                            OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                            OutputFormat::Pretty => {
                                println!("{}", pretty::format_event(&event, Some(session.user_id())))
                            }
                        },
                        CreateOutcome::Invalid(_)
                        | CreateOutcome::Failed { .. }
                        | CreateOutcome::NetworkError(_) => std::process::exit(1),
                    }
                }
                EventsAction::Join { id, yes } => {
                    let session = require_session(session)?;
                    let mut events = client.events().await?;
                    sort_events_by_start(&mut events);
                    let event = find_event(&events, &id)?;
                    let mut notify = TerminalNotify::new(yes, cli.quiet || json);
                    let outcome = JoinCoordinator::new(&client, &mut notify)
                        .join(event, &session.user)
                        .await?;
                    match outcome {
                        JoinOutcome::Joined { event, .. } => {
                            if json {
                                println!("{}", format_output(&event, cli.format));
                            }
                        }
                        JoinOutcome::AlreadyJoined | JoinOutcome::Cancelled => {}
                        JoinOutcome::Rejected(_) | JoinOutcome::NetworkError(_) => {
                            std::process::exit(1)
                        }
                    }
                }
                EventsAction::Update {
                    id,
                    title,
                    date,
                    time,
                    location,
                    description,
                } => {
                    let session = require_session(session)?;
                    let events = client.events().await?;
                    let event = find_event(&events, &id)?;
                    // Presentation-layer gate only; the server enforces
                    // ownership on its side.
                    if !event.is_created_by(session.user_id()) {
                        fail("Update Failed", "You can only update events you created.");
                    }
                    let mut changes = UpdateEventRequest::from_event(event);
                    if let Some(title) = title {
                        changes = changes.with_title(title);
                    }
                    if let Some(date) = date {
                        changes = changes.with_date(date);
                    }
                    if let Some(time) = time {
                        changes = changes.with_time(time);
                    }
                    if let Some(location) = location {
                        changes = changes.with_location(location);
                    }
                    if let Some(description) = description {
                        changes = changes.with_description(description);
                    }
                    let mut notify = TerminalNotify::new(false, cli.quiet || json);
                    let outcome = LifecycleCoordinator::new(&client, &mut notify)
                        .update(event, changes, &session.user)
                        .await;
                    match outcome {
                        UpdateOutcome::Updated { events } => {
                            if let Some(events) = events {
                                print_owned(&events, &session, cli.format);
                            }
                        }
                        UpdateOutcome::Failed { .. } | UpdateOutcome::NetworkError(_) => {
                            std::process::exit(1)
                        }
                    }
                }
                EventsAction::Delete { id, yes } => {
                    let session = require_session(session)?;
                    let events = client.events().await?;
                    let event = find_event(&events, &id)?;
                    if !event.is_created_by(session.user_id()) {
                        fail("Deletion Failed", "You can only delete events you created.");
                    }
                    let mut notify = TerminalNotify::new(yes, cli.quiet || json);
                    let outcome = LifecycleCoordinator::new(&client, &mut notify)
                        .delete(event, &session.user)
                        .await;
                    match outcome {
                        DeleteOutcome::Deleted { events, .. } => {
                            if let Some(events) = events {
                                print_owned(&events, &session, cli.format);
                            }
                        }
                        DeleteOutcome::Cancelled => {}
                        DeleteOutcome::Failed { .. } | DeleteOutcome::NetworkError(_) => {
                            std::process::exit(1)
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Print a user-facing failure notice and exit nonzero.
fn fail(title: &str, text: &str) -> ! {
    eprintln!("{title}: {text}");
    std::process::exit(1);
}

fn require_session(session: Option<Session>) -> Result<Session, ClientError> {
    session.ok_or(ClientError::NotAuthenticated)
}

fn find_event<'a>(events: &'a [Event], id: &str) -> Result<&'a Event> {
    events
        .iter()
        .find(|event| event.id == id)
        .ok_or_else(|| anyhow::anyhow!("no event with id {id} in the current listing"))
}

/// Show the owner's refreshed list after a mutation.
fn print_owned(events: &[Event], session: &Session, format: OutputFormat) {
    let refs: Vec<&Event> = events.iter().collect();
    match format {
        OutputFormat::Json => println!("{}", format_output(&refs, format)),
        OutputFormat::Pretty => {
            println!("{}", pretty::format_events(&refs, Some(session.user_id())))
        }
    }
}
