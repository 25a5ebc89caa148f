//! LAYUP — preference card lookup demo CLI.
//!
//! Queries the embedded Royal London reference data through the real library
//! components (card store, consultant directory, tariff catalog, profile
//! book).
//!
//! Usage:
//!   cargo run -p demo -- consultant-cards "James Anderson"
//!   cargo run -p demo -- card "James Anderson" W371
//!   cargo run -p demo -- consultants-for W371

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use layup_contracts::{card::PreferenceCard, error::LayupResult};
use layup_core::{CardService, CardStore};
use layup_profiles::TomlProfileBook;
use layup_ref_royal_london::{dataset, RoyalLondonDirectory, TariffCatalog};

// ── CLI definition ────────────────────────────────────────────────────────────

/// LAYUP — surgical preference card lookup over the Royal London dataset.
#[derive(Parser)]
#[command(
    name = "layup",
    about = "Theatre preference card lookup demo",
    long_about = "Looks up authored preference cards, synthesizes specialty defaults\n\
                  when no card exists, and lists consultants for a procedure code."
)]
struct Cli {
    /// Optional setup profile TOML overriding the shipped defaults.
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every authored card for a consultant.
    ConsultantCards {
        /// Consultant name (case-insensitive), e.g. "James Anderson".
        name: String,
    },
    /// Resolve a card for a consultant and OPCS-4 code, synthesizing
    /// specialty defaults if no authored card exists.
    Card {
        /// Consultant name, e.g. "James Anderson".
        name: String,
        /// OPCS-4 code, e.g. "W371".
        code: String,
    },
    /// List the consultants associated with an OPCS-4 code.
    ConsultantsFor {
        /// OPCS-4 code, e.g. "W371".
        code: String,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Structured logging; set RUST_LOG=debug to watch resolution decisions.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let service = match build_service(cli.profiles.as_deref()) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Failed to initialize reference data: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::ConsultantCards { name } => run_consultant_cards(&service, &name),
        Command::Card { name, code } => run_card(&service, &name, &code),
        Command::ConsultantsFor { code } => run_consultants_for(&service, &code),
    }
}

/// Wire the embedded Royal London data, optionally with a trust-specific
/// profile document instead of the shipped defaults.
fn build_service(profiles: Option<&std::path::Path>) -> LayupResult<CardService> {
    let book = match profiles {
        Some(path) => TomlProfileBook::from_file(path)?,
        None => TomlProfileBook::embedded()?,
    };

    Ok(CardService::new(
        CardStore::new(dataset::load_cards()?)?,
        Box::new(RoyalLondonDirectory::load()?),
        Box::new(TariffCatalog::load()?),
        Box::new(book),
    ))
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_consultant_cards(service: &CardService, name: &str) {
    let cards = service.cards_by_consultant(name);
    if cards.is_empty() {
        println!("No authored cards for '{}'.", name);
        return;
    }

    println!("{} card(s) for '{}':", cards.len(), name);
    for card in cards {
        println!(
            "  {:8} {:6} {}",
            card.id,
            card.procedure_opcs4_codes.join(","),
            card.procedure_name.as_deref().unwrap_or("-")
        );
    }
}

fn run_card(service: &CardService, name: &str, code: &str) {
    match service.preference_card(name, code, None) {
        Some(card) => print_card(&card),
        None => println!(
            "No card for '{}' and {}: consultant not found in the dataset or directory.",
            name, code
        ),
    }
}

fn run_consultants_for(service: &CardService, code: &str) {
    let names = service.consultants_for_procedure(code);
    if names.is_empty() {
        println!("No consultants associated with {}.", code);
        return;
    }
    println!("Consultants for {}:", code);
    for name in names {
        println!("  {}", name);
    }
}

// ── Card rendering ────────────────────────────────────────────────────────────

fn print_card(card: &PreferenceCard) {
    println!("{} — {} {}", card.id, card.consultant_title, card.consultant_name);
    println!("  Specialty:  {}", card.specialty);
    if let Some(name) = &card.procedure_name {
        println!("  Procedure:  {} ({})", name, card.procedure_opcs4_codes.join(","));
    } else {
        println!("  Codes:      {}", card.procedure_opcs4_codes.join(","));
    }
    println!("  Updated:    {}", card.last_updated);

    if let Some(info) = &card.general_info {
        println!("  Setup:      {} | {} | {}",
            info.positioning, info.anaesthetic_type, info.operating_table);
    }

    print_list("Positioning", card.positioning_equipment.as_deref());
    print_list("Prep", card.cleaning_prep.as_deref());
    print_list("Drapes", card.drapes_consumables.as_deref());
    if let Some(sets) = &card.instrument_sets {
        println!("  Instrument sets:");
        for set in sets {
            let ownership = set
                .ownership
                .map(|o| format!(" [{:?}]", o).to_lowercase())
                .unwrap_or_default();
            println!("    - {}{}", set.name, ownership);
        }
    }
    print_list("Equipment", card.equipment.as_deref());
    print_list("Sutures", card.sutures_closure.as_deref());
    if let Some(implants) = &card.implants {
        println!("  Implants:");
        for line in implants {
            println!("    - {}", line.description);
        }
    }
    print_list("Medications", card.medications_fluids.as_deref());
    print_list("Dressing", card.wound_dressing.as_deref());
    print_list("Misc", card.miscellaneous.as_deref());
    if let Some(counts) = &card.counts_notes {
        println!("  Counts:     {}", counts);
    }
    print_list("Special", card.special_instructions.as_deref());

    if !card.items.is_empty() {
        println!("  Items:");
        for item in &card.items {
            let notes = item
                .notes
                .as_deref()
                .map(|n| format!(" — {}", n))
                .unwrap_or_default();
            println!("    - {} x{}{}", item.inventory_id, item.quantity, notes);
        }
    }
    if let Some(notes) = &card.notes {
        println!("  Notes:      {}", notes);
    }
    if let Some(instructions) = &card.instructions {
        println!("  Directions: {}", instructions);
    }
}

fn print_list(label: &str, values: Option<&[String]>) {
    if let Some(values) = values {
        if !values.is_empty() {
            println!("  {}:", label);
            for value in values {
                println!("    - {}", value);
            }
        }
    }
}
