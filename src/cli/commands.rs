//! CLI command implementations
//!
//! Every invocation follows the same sequence:
//! 1. Load configuration (defaults if absent)
//! 2. Load the roster from the data file (empty if absent)
//! 3. Execute one command against the in-memory store
//! 4. Save the whole store if the command mutated it
//! 5. Write one JSON response

use std::path::PathBuf;

use serde_json::{json, Value};

use crate::analytics::compute_statistics;
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::record::{FieldUpdate, NewStudent, Scores, StudentRecord, Subject};
use crate::roster::{RecordHandle, RosterStore};
use crate::sorter::{RosterSorter, SortSpec};
use crate::storage::{RosterReader, RosterWriter};

use super::args::{AddArgs, Cli, Command, FieldArg};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Result of executing one command against a store
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Response payload
    pub data: Value,
    /// Whether the store must be saved
    pub mutated: bool,
}

impl Outcome {
    fn read(data: Value) -> Self {
        Self {
            data,
            mutated: false,
        }
    }

    fn write(data: Value) -> Self {
        Self {
            data,
            mutated: true,
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    Logger::set_min_severity(match cli.verbose {
        0 => Severity::Warn,
        1 => Severity::Info,
        _ => Severity::Trace,
    });

    let result = run_command(&cli);
    if let Err(ref e) = result {
        write_error(e.code_str(), e.message())?;
    }
    result
}

/// Runs one parsed command end to end: load, execute, save, respond
pub fn run_command(cli: &Cli) -> CliResult<()> {
    let config = Config::load(&cli.config)?;
    let data_file: PathBuf = cli
        .data_file
        .clone()
        .unwrap_or_else(|| config.data_file.clone());

    let mut store = RosterReader::new(&data_file, config.capacity).load()?;
    let outcome = execute(&cli.command, &mut store)?;

    if outcome.mutated {
        RosterWriter::new(&data_file).save(&store)?;
    }

    write_response(outcome.data)
}

/// Executes a command against an in-memory store
pub fn execute(command: &Command, store: &mut RosterStore) -> CliResult<Outcome> {
    match command {
        Command::Add(args) => add(store, args),
        Command::Delete { id } => delete(store, id),
        Command::Update { id, field, value } => update(store, id, *field, value),
        Command::List => Ok(Outcome::read(list(store))),
        Command::Find { id: Some(id), .. } => find_by_id(store, id),
        Command::Find {
            name: Some(name), ..
        } => Ok(Outcome::read(find_by_name(store, name))),
        Command::Find { .. } => Err(CliError::invalid_argument("find requires --id or --name")),
        Command::Sort { key, direction } => {
            let spec = SortSpec {
                key: (*key).into(),
                direction: (*direction).into(),
            };
            Ok(Outcome::write(sort(store, &spec)))
        }
        Command::Stats => stats(store),
    }
}

fn record_json(handle: RecordHandle, record: &StudentRecord) -> Value {
    json!({
        "position": handle.index(),
        "record": record,
    })
}

fn records_json<'a>(records: impl Iterator<Item = (RecordHandle, &'a StudentRecord)>) -> Value {
    Value::Array(records.map(|(h, r)| record_json(h, r)).collect())
}

fn add(store: &mut RosterStore, args: &AddArgs) -> CliResult<Outcome> {
    let candidate = NewStudent::new(
        args.id.as_str(),
        args.name.as_str(),
        args.age,
        Scores::new(args.math, args.english, args.chinese),
    );

    let handle = store.create(candidate)?;
    let record = store.get(handle)?;
    log_event_with_fields(Event::RecordCreated, &[("id", record.id())]);

    Ok(Outcome::write(record_json(handle, record)))
}

fn delete(store: &mut RosterStore, id: &str) -> CliResult<Outcome> {
    let removed = store.delete_by_id(id)?;
    log_event_with_fields(Event::RecordDeleted, &[("id", id)]);

    Ok(Outcome::write(json!({ "deleted": removed })))
}

/// Parses the raw value for a field into a typed update
pub fn parse_update(field: FieldArg, value: &str) -> CliResult<FieldUpdate> {
    let score = |subject: Subject| -> CliResult<FieldUpdate> {
        value
            .trim()
            .parse::<f32>()
            .map(|v| FieldUpdate::Score(subject, v))
            .map_err(|_| {
                CliError::invalid_argument(format!("{} must be a number, got '{}'", subject, value))
            })
    };

    match field {
        FieldArg::Name => Ok(FieldUpdate::Name(value.to_string())),
        FieldArg::Age => value
            .trim()
            .parse::<i32>()
            .map(FieldUpdate::Age)
            .map_err(|_| {
                CliError::invalid_argument(format!("age must be an integer, got '{}'", value))
            }),
        FieldArg::Math => score(Subject::Math),
        FieldArg::English => score(Subject::English),
        FieldArg::Chinese => score(Subject::Chinese),
    }
}

fn update(store: &mut RosterStore, id: &str, field: FieldArg, value: &str) -> CliResult<Outcome> {
    // Resolve the id first so an unknown id reports NotFound, not a parse error.
    let handle = store.find_by_id(id)?;
    let update = parse_update(field, value)?;
    let field_name = update.field().as_str();

    store.update_field(handle, update)?;
    log_event_with_fields(Event::RecordUpdated, &[("field", field_name), ("id", id)]);

    let record = store.get(handle)?;
    Ok(Outcome::write(record_json(handle, record)))
}

fn list(store: &RosterStore) -> Value {
    json!({
        "count": store.len(),
        "capacity": store.capacity(),
        "records": records_json(
            store
                .iter()
                .enumerate()
                .map(|(i, r)| (RecordHandle::new(i), r))
        ),
    })
}

fn find_by_id(store: &RosterStore, id: &str) -> CliResult<Outcome> {
    let handle = store.find_by_id(id)?;
    let record = store.get(handle)?;
    Ok(Outcome::read(record_json(handle, record)))
}

/// Name matches are reported as a possibly empty list.
fn find_by_name(store: &RosterStore, name: &str) -> Value {
    let matches = store
        .find_by_name(name)
        .filter_map(|h| store.get(h).ok().map(|r| (h, r)));
    json!({ "records": records_json(matches) })
}

fn sort(store: &mut RosterStore, spec: &SortSpec) -> Value {
    RosterSorter::sort(store, spec);
    let direction = format!("{:?}", spec.direction).to_lowercase();
    log_event_with_fields(
        Event::RosterSorted,
        &[("direction", direction.as_str()), ("key", spec.key.as_str())],
    );
    list(store)
}

fn stats(store: &RosterStore) -> CliResult<Outcome> {
    let stats = compute_statistics(store)?;
    let max = store.get(stats.max_average_holder)?;
    let min = store.get(stats.min_average_holder)?;

    let count = stats.count.to_string();
    log_event_with_fields(Event::StatisticsComputed, &[("records", count.as_str())]);

    let mut subject_means = serde_json::Map::new();
    for subject in Subject::ALL {
        subject_means.insert(subject.as_str().to_string(), json!(stats.subject_mean(subject)));
    }

    Ok(Outcome::read(json!({
        "count": stats.count,
        "subject_means": subject_means,
        "overall_mean": stats.overall_mean,
        "max_average": {
            "position": stats.max_average_holder.index(),
            "id": max.id(),
            "name": max.name(),
            "average": stats.max_average,
        },
        "min_average": {
            "position": stats.min_average_holder.index(),
            "id": min.id(),
            "name": min.name(),
            "average": stats.min_average,
        },
    })))
}
