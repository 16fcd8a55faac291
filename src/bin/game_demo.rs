//! Interactive terminal shell for the pass-the-phone role dealer.
//!
//! Drives the whole loop through `GameController` only: language toggle,
//! counts, role names, scenario management, deal, reveal/acknowledge,
//! restart.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mafia_night::engine::session::{Phase, Side};
use mafia_night::i18n::Language;
use mafia_night::storage::{FileStore, InMemoryStore, KvStore};
use mafia_night::GameController;

#[derive(Parser)]
#[command(name = "game_demo", about = "Pass-the-phone mafia role dealer")]
struct Args {
    /// File backing scenarios and the language preference; volatile when omitted
    #[arg(long, env = "MAFIA_NIGHT_DATA")]
    data_file: Option<PathBuf>,

    /// Override the saved language for this run (en|fa)
    #[arg(long)]
    lang: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let store: Arc<dyn KvStore> = match &args.data_file {
        Some(path) => Arc::new(FileStore::open(path)),
        None => Arc::new(InMemoryStore::new()),
    };

    let mut game = GameController::new(store);
    if let Some(code) = args.lang.as_deref() {
        match Language::from_code(code) {
            Some(language) => game.set_language(language),
            None => eprintln!(
                "unknown language '{code}', keeping '{}'",
                game.language().code()
            ),
        }
    }

    loop {
        let keep_going = match game.session().phase {
            Phase::Setup => setup_screen(&mut game)?,
            Phase::Dealt => table_screen(&mut game)?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

/// Setup phase: counts, role names, scenarios. Returns false on quit.
fn setup_screen(game: &mut GameController) -> Result<bool> {
    let loc = game.localizer().clone();
    let t = |key: &'static str| loc.translate(key);

    println!("\n=== {} ===", t("title"));
    println!(
        "{}: {}   {}: {}",
        t("mafiasCount"),
        loc.format_number(game.setup().mafia_count),
        t("citizensCount"),
        loc.format_number(game.setup().citizen_count),
    );
    print_roles(game);
    print_suggestions(game);

    println!();
    println!("  m <n> / c <n>        set mafia / citizen count");
    println!("  role m|c <i> <text>  name a role slot (1-based)");
    println!("  save <name>          {}", t("saveScenario"));
    println!("  load|rename|delete <k> [...]   manage suggested scenarios");
    println!("  lang en|fa           switch language");
    println!("  start                {}", t("start"));
    println!("  reset                {}", t("reset"));
    println!("  quit");

    let line = prompt("> ")?;
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("m") => game.set_mafia_count(parse_count(parts.next())),
        Some("c") => game.set_citizen_count(parse_count(parts.next())),
        Some("role") => {
            let side = match parts.next() {
                Some("m") => Side::Mafia,
                Some("c") => Side::Citizen,
                _ => {
                    println!("expected: role m|c <i> <text>");
                    return Ok(true);
                }
            };
            let index = parse_count(parts.next());
            let text = parts.collect::<Vec<_>>().join(" ");
            if index == 0 || index > game.setup().roles(side).len() {
                println!("no such role slot");
            } else {
                game.edit_role_name(side, index - 1, text);
            }
        }
        Some("save") => {
            let name = parts.collect::<Vec<_>>().join(" ");
            match game.save_scenario(&name) {
                Ok(saved) => println!("saved '{}'", saved.name),
                Err(err) => println!("{err} ({})", t("scenarioName")),
            }
        }
        Some("load") => with_suggested(game, parts.next(), |game, id| game.load_scenario(&id)),
        Some("rename") => {
            let pick = parts.next();
            let name = parts.collect::<Vec<_>>().join(" ");
            with_suggested(game, pick, |game, id| game.rename_scenario(&id, &name));
        }
        Some("delete") => with_suggested(game, parts.next(), |game, id| game.delete_scenario(&id)),
        Some("lang") => match parts.next().and_then(Language::from_code) {
            Some(language) => game.set_language(language),
            None => println!("expected: lang en|fa"),
        },
        Some("start") => {
            if game.setup().total() == 0 {
                println!("add at least one role first");
            } else {
                game.deal_new_game();
            }
        }
        Some("reset") => game.reset_setup(),
        Some("quit") | Some("q") => return Ok(false),
        _ => {}
    }
    Ok(true)
}

/// Dealt phase: sequential reveals until every card is seen. Returns false
/// on quit.
fn table_screen(game: &mut GameController) -> Result<bool> {
    let loc = game.localizer().clone();
    let t = |key: &'static str| loc.translate(key);
    let snapshot = game.snapshot();

    if snapshot.remaining == 0 {
        println!("\n{}: {}", t("cardsRemaining"), loc.format_number(0));
        let line = prompt(&format!("{}? [y/n] ", t("restart")))?;
        if line.trim().eq_ignore_ascii_case("y") {
            game.restart();
            return Ok(true);
        }
        return Ok(false);
    }

    println!("\n=== {} ===", t("roles"));
    for card in &snapshot.deck {
        let label = loc.format_number(card.id + 1);
        if card.is_seen {
            println!("  [{label}] ({})", t("seen"));
        } else {
            println!("  [{label}] {}", t("tapToReveal"));
        }
    }
    println!(
        "{}: {}",
        t("cardsRemaining"),
        loc.format_number(snapshot.remaining)
    );
    println!("pick a card number, or: restart, quit");

    let line = prompt("> ")?;
    match line.trim() {
        "restart" => {
            game.restart();
            return Ok(true);
        }
        "quit" | "q" => return Ok(false),
        picked => {
            let Ok(number) = picked.parse::<usize>() else {
                return Ok(true);
            };
            let Some(id) = number.checked_sub(1) else {
                return Ok(true);
            };
            game.reveal(id);
            if game.session().active_card != Some(id) {
                // seen already, or the id does not exist
                return Ok(true);
            }
            let role = game
                .session()
                .card(id)
                .map(|card| card.role.clone())
                .unwrap_or_default();
            println!("\n  >>> {role} <<<\n");
            let _ = prompt(&format!("{} [enter] ", t("seen")))?;
            game.acknowledge(id);
        }
    }
    Ok(true)
}

fn print_roles(game: &GameController) {
    let localizer = game.localizer();
    let sides = [
        (Side::Mafia, "mafiaRole", "defaultMafia"),
        (Side::Citizen, "citizenRole", "defaultCitizen"),
    ];
    for (side, label_key, default_key) in sides {
        for (index, role) in game.setup().roles(side).iter().enumerate() {
            let shown = if role.trim().is_empty() {
                format!("({})", localizer.translate(default_key))
            } else {
                role.clone()
            };
            println!(
                "  {} {}: {shown}",
                localizer.translate(label_key),
                localizer.format_number(index + 1),
            );
        }
    }
}

fn print_suggestions(game: &GameController) {
    let suggested = game.suggested_scenarios();
    if suggested.is_empty() {
        return;
    }
    println!("{}:", game.localizer().translate("suggestedScenarios"));
    for (index, scenario) in suggested.iter().enumerate() {
        println!(
            "  [{}] {}",
            game.localizer().format_number(index + 1),
            scenario.name
        );
    }
}

/// Map a 1-based pick from the suggested list to its scenario id.
fn with_suggested(
    game: &mut GameController,
    pick: Option<&str>,
    apply: impl FnOnce(&mut GameController, String),
) {
    let number = parse_count(pick);
    let suggested = game.suggested_scenarios();
    let Some(scenario) = number.checked_sub(1).and_then(|i| suggested.get(i)) else {
        println!("no such scenario");
        return;
    };
    let id = scenario.id.clone();
    apply(game, id);
}

fn parse_count(raw: Option<&str>) -> usize {
    // bad input reads as zero, mirroring the original number field
    raw.and_then(|value| value.parse().ok()).unwrap_or(0)
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}
