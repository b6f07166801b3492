//! Integration tests for the patron registry and file ingestion
//!
//! These tests exercise the public API end to end: files on disk, the event
//! sink boundary and ID uniqueness across removals.

use patron_registry::core::events::{EventLog, RegistryEvent};
use patron_registry::core::ingest::LineRejection;
use patron_registry::core::registry::PatronRegistry;
use patron_registry::domain::{Patron, PatronId, RegistryError, MAX_PATRON_ID, MIN_PATRON_ID};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

fn seeded_registry(seed: u64) -> (PatronRegistry, EventLog) {
    let events = EventLog::new();
    let registry = PatronRegistry::builder()
        .rng(StdRng::seed_from_u64(seed))
        .sink(events.clone())
        .build();
    (registry, events)
}

fn patron_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_five_valid_and_two_invalid_lines() {
    let (mut registry, events) = seeded_registry(1);
    registry
        .add_new_patron("Existing", "Patron", "0 Old Rd", 1.0)
        .unwrap();
    events.clear();

    let file = patron_file(
        "Alice,Smith,1 Main St,12.50\n\
         Bob,Jones,2 Oak Ave,300\n\
         Carol,White,3 Elm St,0\n\
         Dan,Brown,4 Pine Rd,250\n\
         Carl,3,Elm St,10\n\
         Eve,Green,5 Birch Ln,99.99\n\
         Frank,Black,6 Cedar Ct,1\n",
    );

    let report = registry.add_patrons_from_file(file.path()).unwrap();

    assert_eq!(report.loaded, 5);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(registry.len(), 6);

    let names: Vec<String> = registry.patrons().iter().map(|p| p.full_name()).collect();
    assert_eq!(
        names,
        vec![
            "Existing Patron",
            "Alice Smith",
            "Carol White",
            "Dan Brown",
            "Eve Green",
            "Frank Black"
        ]
    );

    assert_eq!(
        events.messages().last().unwrap(),
        "5 patrons loaded successfully."
    );
    let skipped: Vec<usize> = events
        .events()
        .iter()
        .filter_map(|e| match e {
            RegistryEvent::LineSkipped { line_number, .. } => Some(*line_number),
            _ => None,
        })
        .collect();
    assert_eq!(skipped, vec![2, 5]);
}

#[test]
fn test_each_rejection_reason_is_reported() {
    let (mut registry, events) = seeded_registry(2);
    let file = patron_file(
        "Only,Three,Fields\n\
         Ann,Lee,1 Rd,twelve\n\
         Ann,L3e,1 Rd,12\n\
         Ann,Lee,1 Rd,-3\n\
         Ann,Lee,1 Rd,250.01\n",
    );

    let report = registry.add_patrons_from_file(file.path()).unwrap();
    assert_eq!(report.loaded, 0);
    assert!(registry.is_empty());

    let reasons: Vec<&LineRejection> = report.skipped.iter().map(|s| &s.reason).collect();
    assert!(matches!(reasons[0], LineRejection::FieldCount { found: 3 }));
    assert!(matches!(reasons[1], LineRejection::InvalidFine { .. }));
    assert!(matches!(reasons[2], LineRejection::Invalid(_)));
    assert_eq!(
        reasons[3],
        &LineRejection::Invalid("Overdue fine must be a non-negative number.".to_string())
    );
    assert!(matches!(reasons[4], LineRejection::FineOutOfRange { .. }));
    assert_eq!(report.format_errors(), 2);

    // One message per skipped line plus the summary
    assert_eq!(events.len(), 6);
    assert_eq!(events.messages()[5], "0 patrons loaded successfully.");
}

#[test]
fn test_windows_line_endings_and_padding() {
    let (mut registry, _events) = seeded_registry(3);
    let file = patron_file("  Alice , Smith , 1 Main St , 12.50 \r\nBob,Jones,2 Oak Ave,7\r\n");

    let report = registry.add_patrons_from_file(file.path()).unwrap();
    assert_eq!(report.loaded, 2);
    assert_eq!(registry.patrons()[0].address(), "1 Main St");
    assert_eq!(registry.patrons()[1].overdue_fine(), 7.0);
}

#[test]
fn test_unreadable_file_is_batch_error() {
    let (mut registry, events) = seeded_registry(4);
    let err = registry
        .add_patrons_from_file("/definitely/not/here.txt")
        .unwrap_err();

    assert!(matches!(err, RegistryError::Io(_)));
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events.events()[0],
        RegistryEvent::IngestFailed { .. }
    ));
}

#[test]
fn test_ids_unique_across_batches_and_removals() {
    let (mut registry, _events) = seeded_registry(5);
    let mut issued = HashSet::new();

    for round in 0..20 {
        let text: String = (0..25)
            .map(|i| format!("Pat,Round,{round}-{i},1\n"))
            .collect();
        registry
            .add_patrons_from_reader(text.as_bytes(), "generated")
            .unwrap();

        let ids: Vec<String> = registry
            .patrons()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        for id in &ids {
            issued.insert(id.clone());
        }
        // Remove half of the live patrons each round
        for id in ids.iter().step_by(2) {
            assert!(registry.remove_patron(id));
        }
    }

    assert_eq!(issued.len(), 500);
    for id in &issued {
        let value: u16 = id.parse().unwrap();
        assert!((MIN_PATRON_ID..=MAX_PATRON_ID).contains(&value));
        assert!(registry.is_id_used(&PatronId::new(id.clone()).unwrap()));
    }
}

#[test]
fn test_caller_built_patron_id_is_retired() {
    let (mut registry, _events) = seeded_registry(6);
    let id = PatronId::new("4321").unwrap();
    registry.add_patron(Patron::new(id.clone(), "Ann", "Lee", "", 0.0).unwrap());
    assert!(registry.remove_patron("4321"));

    for _ in 0..3000 {
        assert_ne!(registry.generate_unique_id().unwrap(), id);
    }
}

#[test]
fn test_remove_absent_id_leaves_registry_unchanged() {
    let (mut registry, events) = seeded_registry(7);
    registry
        .add_patrons_from_reader("Alice,Smith,1 Main St,1\nBob,Jones,2 Oak Ave,2\n".as_bytes(), "inline")
        .unwrap();
    let before: Vec<Patron> = registry.patrons().to_vec();
    events.clear();

    assert!(!registry.remove_patron("10000"));
    assert_eq!(registry.patrons(), before.as_slice());
    assert_eq!(events.messages(), vec!["Patron not found using ID: 10000".to_string()]);
}

#[test]
fn test_closure_sink_receives_events() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink_seen = Rc::clone(&seen);
    let mut registry = PatronRegistry::builder()
        .rng(StdRng::seed_from_u64(8))
        .sink(move |event: &RegistryEvent| sink_seen.borrow_mut().push(event.to_string()))
        .build();

    registry
        .add_patrons_from_reader("Alice,Smith,1 Main St,12.50\n".as_bytes(), "inline")
        .unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].ends_with("Name: Alice Smith, Address: 1 Main St, Overdue Fine: $12.50"));
}

#[test]
fn test_auto_load_from_config() {
    use patron_registry::config::RegistryConfig;

    let file = patron_file("Alice,Smith,1 Main St,12.50\nbad line\n");
    let mut config = RegistryConfig::default();
    config.registry.auto_load_path = Some(file.path().to_string_lossy().to_string());

    let events = EventLog::new();
    let registry = PatronRegistry::from_config(&config, events.clone());

    assert_eq!(registry.len(), 1);
    assert_eq!(
        events.messages().last().unwrap(),
        "1 patrons loaded successfully."
    );

    config.registry.auto_load_path = Some("/not/present/patrons.txt".to_string());
    let quiet = EventLog::new();
    let registry = PatronRegistry::from_config(&config, quiet.clone());
    assert!(registry.is_empty());
    assert!(quiet.is_empty());
}
