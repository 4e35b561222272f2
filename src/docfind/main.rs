use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use docfind::api::{CmdMessage, DocfindApi, MessageLevel};
use docfind::config::DocfindConfig;
use docfind::error::{DocfindError, Result};
use docfind::model::{ConsultationType, Doctor, FilterState, SortDirection, SortKey};
use docfind::source::RemoteSource;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: DocfindApi<RemoteSource>,
    config: DocfindConfig,
    config_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            search,
            consultation,
            specialties,
            sort_by,
            sort_order,
            query,
            show_query,
        }) => handle_list(
            &ctx,
            ListRequest {
                search,
                consultation,
                specialties,
                sort_by,
                sort_order,
                query,
                show_query,
            },
        ),
        Some(Commands::Suggest { term }) => handle_suggest(&ctx, term),
        Some(Commands::Specialties) => handle_specialties(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, ListRequest::default()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs =
        ProjectDirs::from("com", "docfind", "docfind").expect("Could not determine config dir");
    let config_dir = proj_dirs.config_dir().to_path_buf();

    let config = DocfindConfig::load(&config_dir).unwrap_or_default();
    let endpoint = cli
        .endpoint
        .clone()
        .unwrap_or_else(|| config.endpoint.clone());

    let api = DocfindApi::new(RemoteSource::new(endpoint));

    Ok(AppContext {
        api,
        config,
        config_dir,
    })
}

#[derive(Default)]
struct ListRequest {
    search: Option<String>,
    consultation: Option<String>,
    specialties: Vec<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    query: Option<String>,
    show_query: bool,
}

fn handle_list(ctx: &AppContext, request: ListRequest) -> Result<()> {
    // Validate flags before paying for the fetch.
    let state = match &request.query {
        Some(_) => FilterState::default(),
        None => state_from_flags(&request)?,
    };

    let result = ctx.api.load(ctx.config.debounce_delay())?;
    print_messages(&result.messages);

    let mut session = result.session;
    match request.query {
        Some(query) => session.apply_query(&query),
        None => session.replace_state(state),
    }

    print_doctors(&session.visible());

    if request.show_query {
        let query_string = session.query_string();
        if query_string.is_empty() {
            println!("{}", "(default view)".dimmed());
        } else {
            println!("{}", format!("?{}", query_string).dimmed());
        }
    }
    Ok(())
}

fn state_from_flags(request: &ListRequest) -> Result<FilterState> {
    let mut state = FilterState::default();

    state.search_query = request.search.clone().unwrap_or_default();
    state.specialties = request.specialties.clone();

    if let Some(raw) = &request.consultation {
        state.consultation_type = Some(parse_consultation(raw)?);
    }
    if let Some(raw) = &request.sort_by {
        state.sort_key = Some(SortKey::parse(raw).ok_or_else(|| {
            DocfindError::Api(format!(
                "Invalid sort key: {} (expected \"fees\" or \"experience\")",
                raw
            ))
        })?);
    }
    if let Some(raw) = &request.sort_order {
        state.sort_direction = Some(SortDirection::parse(raw).ok_or_else(|| {
            DocfindError::Api(format!(
                "Invalid sort order: {} (expected \"asc\" or \"desc\")",
                raw
            ))
        })?);
    }

    Ok(state)
}

fn parse_consultation(raw: &str) -> Result<ConsultationType> {
    match raw {
        "video" => Ok(ConsultationType::VideoConsult),
        "clinic" => Ok(ConsultationType::InClinic),
        other => ConsultationType::parse(other).ok_or_else(|| {
            DocfindError::Api(format!(
                "Invalid consultation mode: {} (expected \"video\" or \"clinic\")",
                other
            ))
        }),
    }
}

fn handle_suggest(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.load(ctx.config.debounce_delay())?;
    print_messages(&result.messages);

    let mut session = result.session;
    session.set_search(term);

    let suggestions = session.suggestions();
    if suggestions.is_empty() {
        println!("No matching doctors.");
        return Ok(());
    }
    for name in suggestions {
        println!("{}", name);
    }
    Ok(())
}

fn handle_specialties(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.load(ctx.config.debounce_delay())?;
    print_messages(&result.messages);

    let options = result.session.specialty_options();
    for specialty in &options {
        println!("{}", specialty);
    }
    println!("{}", format!("{} specialties", options.len()).dimmed());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = ctx.config.clone();

    match (key.as_deref(), value) {
        (None, _) => {
            println!("endpoint = {}", config.endpoint);
            println!("debounce-ms = {}", config.debounce_ms);
        }
        (Some("endpoint"), None) => println!("endpoint = {}", config.endpoint),
        (Some("endpoint"), Some(v)) => {
            config.endpoint = v;
            config.save(&ctx.config_dir)?;
            println!("endpoint = {}", config.endpoint);
        }
        (Some("debounce-ms"), None) => println!("debounce-ms = {}", config.debounce_ms),
        (Some("debounce-ms"), Some(v)) => {
            config.debounce_ms = v
                .parse()
                .map_err(|_| DocfindError::Api(format!("Invalid debounce-ms value: {}", v)))?;
            config.save(&ctx.config_dir)?;
            println!("debounce-ms = {}", config.debounce_ms);
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 26;
const SPECIALTY_WIDTH: usize = 32;
const MODE_WIDTH: usize = 14;

fn print_doctors(doctors: &[Doctor]) {
    if doctors.is_empty() {
        println!("No doctors found.");
        return;
    }

    for doctor in doctors {
        let name = pad_to_width(&doctor.name, NAME_WIDTH);
        let specialties = pad_to_width(&doctor.specialties.join(", "), SPECIALTY_WIDTH);
        let mode = pad_to_width(doctor.consultation_type.as_str(), MODE_WIDTH);
        let experience = format!("{:>2} yrs", doctor.experience);
        let fees = format!("{:>6}", format!("₹{}", doctor.fees));

        println!(
            "{}  {}  {}  {}  {}",
            name.bold(),
            specialties,
            mode.dimmed(),
            experience,
            fees.green()
        );
    }
    println!("{}", format!("{} doctor(s)", doctors.len()).dimmed());
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
