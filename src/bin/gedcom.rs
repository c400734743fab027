//! Command-line interface for gedcom
//! This binary parses a GEDCOM file and answers relationship queries over it.
//!
//! Usage:
//!   gedcom `<path>` show [--format `<format>`]          - Print the parsed document
//!   gedcom `<path>` parents `<id>` [--biological]       - List an individual's parents
//!   gedcom `<path>` ancestors `<id>` [--biological]     - List all ancestors
//!   gedcom `<path>` path `<descendant>` `<ancestor>`    - Biological line between two people
//!   gedcom `<path>` --help                              - Everything else

use clap::{Parser, Subcommand, ValueEnum};
use gedcom::gedcom::config::{GedcomConfig, Loader, OutputFormat};
use gedcom::gedcom::facts::Criteria;
use gedcom::gedcom::formats;
use gedcom::gedcom::query::Marriage;
use gedcom::{Document, DocumentLoader, FamilyLink, Individual, MemberRole, ParentMode};
use log::debug;
use std::path::PathBuf;
use std::process;

/// Picked up from the working directory when no `--config` is given
const LOCAL_CONFIG: &str = "gedcom.toml";

#[derive(Debug, Parser)]
#[command(
    name = "gedcom",
    version,
    about = "A tool for inspecting and querying GEDCOM files"
)]
struct Cli {
    /// Path to the GEDCOM file
    path: PathBuf,

    /// Configuration file layered over the built-in defaults [default: ./gedcom.toml, if present]
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Reject documents that declare an identifier twice
    #[arg(long, global = true)]
    strict: bool,

    /// Increase log output (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the parsed document
    Show {
        #[arg(long, short = 'f', value_enum)]
        format: Option<Format>,
    },
    /// Print the record declaring an identifier
    Lookup { identifier: String },
    /// Families an individual belongs to
    Families {
        identifier: String,
        /// Families where the individual is a child instead of a spouse
        #[arg(long)]
        child: bool,
    },
    /// Members of a family
    Members {
        identifier: String,
        #[arg(long, value_enum, default_value = "all")]
        role: Role,
    },
    /// Parents of an individual
    Parents {
        identifier: String,
        #[arg(long)]
        biological: bool,
    },
    /// All ancestors of an individual
    Ancestors {
        identifier: String,
        #[arg(long)]
        biological: bool,
    },
    /// Biological line from a descendant up to an ancestor
    Path { descendant: String, ancestor: String },
    /// Marriage dates and places of an individual
    Marriages { identifier: String },
    /// Individuals matching criteria such as `surname=Stone:birthrange=1800-1900`
    Find { criteria: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Lines,
    Treeviz,
    Json,
    Yaml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Lines => OutputFormat::Lines,
            Format::Treeviz => OutputFormat::Treeviz,
            Format::Json => OutputFormat::Json,
            Format::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Role {
    All,
    Parents,
    Husband,
    Wife,
    Children,
}

impl From<Role> for MemberRole {
    fn from(role: Role) -> Self {
        match role {
            Role::All => MemberRole::All,
            Role::Parents => MemberRole::Parents,
            Role::Husband => MemberRole::Husband,
            Role::Wife => MemberRole::Wife,
            Role::Children => MemberRole::Children,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(message) = run(cli) {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_config(cli: &Cli) -> Result<GedcomConfig, String> {
    let mut loader = Loader::new();
    loader = match &cli.config {
        Some(path) => loader.with_file(path),
        None => loader.with_optional_file(LOCAL_CONFIG),
    };
    if cli.strict {
        loader = loader
            .set_override("parsing.duplicate_identifiers", "reject")
            .map_err(|e| e.to_string())?;
    }
    loader.build().map_err(|e| format!("invalid configuration: {}", e))
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli)?;
    debug!("Configuration: {:?}", config);

    let document = DocumentLoader::from_path(&cli.path)
        .and_then(|loader| loader.parse_with(&config.parsing))
        .map_err(|e| e.to_string())?;
    let query = document.query().with_cycle_policy(config.query.cycles);

    match cli.command {
        Command::Show { format } => {
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
            let output = formats::render(&document, format).map_err(|e| e.to_string())?;
            print!("{}", output);
        }
        Command::Lookup { identifier } => {
            let record = document
                .lookup(&identifier)
                .ok_or_else(|| format!("no record declares identifier {}", identifier))?;
            let mut output = String::new();
            write_subtree(record, &mut output);
            print!("{}", output);
        }
        Command::Families { identifier, child } => {
            let individual = find_individual(&document, &identifier)?;
            let link = if child {
                FamilyLink::Child
            } else {
                FamilyLink::Spouse
            };
            for family in query.families(individual, link) {
                println!("{}", family.identifier().unwrap_or_default());
            }
        }
        Command::Members { identifier, role } => {
            let family = document.family(&identifier).map_err(|e| e.to_string())?;
            print_people(&query.family_members(family, role.into()));
        }
        Command::Parents {
            identifier,
            biological,
        } => {
            let individual = find_individual(&document, &identifier)?;
            print_people(&query.parents(individual, parent_mode(biological)));
        }
        Command::Ancestors {
            identifier,
            biological,
        } => {
            let individual = find_individual(&document, &identifier)?;
            let ancestors = query
                .ancestors(individual, parent_mode(biological))
                .map_err(|e| e.to_string())?;
            print_people(&ancestors);
        }
        Command::Path {
            descendant,
            ancestor,
        } => {
            let descendant = find_individual(&document, &descendant)?;
            let ancestor = find_individual(&document, &ancestor)?;
            match query
                .find_path_to_ancestor(descendant, ancestor)
                .map_err(|e| e.to_string())?
            {
                Some(path) => print_people(&path),
                None => return Err("no biological line connects the two individuals".into()),
            }
        }
        Command::Marriages { identifier } => {
            let individual = find_individual(&document, &identifier)?;
            for Marriage { date, place } in query.marriages(individual) {
                println!(
                    "{}\t{}",
                    date.unwrap_or_default(),
                    place.unwrap_or_default()
                );
            }
        }
        Command::Find { criteria } => {
            let criteria: Criteria = criteria
                .parse()
                .map_err(|e: gedcom::QueryError| e.to_string())?;
            let matches: Vec<_> = document
                .individuals()
                .filter(|individual| individual.matches(&criteria))
                .collect();
            print_people(&matches);
        }
    }
    Ok(())
}

fn find_individual<'doc>(
    document: &'doc Document,
    identifier: &str,
) -> Result<Individual<'doc>, String> {
    document.individual(identifier).map_err(|e| e.to_string())
}

fn parent_mode(biological: bool) -> ParentMode {
    if biological {
        ParentMode::Biological
    } else {
        ParentMode::All
    }
}

fn print_people(people: &[Individual<'_>]) {
    for person in people {
        let (given, surname) = person.name();
        let name = format!("{} {}", given, surname);
        println!("{}\t{}", person.identifier().unwrap_or_default(), name.trim());
    }
}

fn write_subtree(record: gedcom::RecordRef<'_>, output: &mut String) {
    output.push_str(&format!("{}\n", record));
    for child in record.children() {
        write_subtree(child, output);
    }
}
