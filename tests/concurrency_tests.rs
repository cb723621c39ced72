//! Concurrency and thread safety tests for the record service

use std::sync::Arc;
use std::thread;

use cadastro::{Cpf, InMemoryStore, RecordService, RecordStore, RegistryConfig};

fn cpf(raw: &str) -> Cpf {
    Cpf::parse_strict(raw).expect("seed CPF is well formed")
}

#[test]
fn concurrent_updates_same_record() {
    let service = RecordService::in_memory(&RegistryConfig::default());
    let id = cpf("79349171988");

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            let id = id.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    service
                        .update_terms(&id, i % 2 == 0)
                        .expect("seeded CPF should exist");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Last writer wins; the record itself stays intact.
    let summary = service.lookup("79349171988").expect("lookup");
    assert_eq!(summary.full_name, "Fulano de Tal Silva");
    assert_eq!(summary.email, "fulano.silva@email.com");
    assert_eq!(service.record_count(), 3);
}

#[test]
fn concurrent_readers_and_writers() {
    let store = Arc::new(InMemoryStore::seeded());
    let ids = ["79349171988", "89540115604", "21874323518"];

    let writers: Vec<_> = ids
        .iter()
        .map(|raw| {
            let store = Arc::clone(&store);
            let id = cpf(raw);
            thread::spawn(move || {
                for n in 0..200 {
                    store.set_accepted_terms(&id, n % 3 == 0).unwrap();
                }
                store.set_accepted_terms(&id, true).unwrap();
            })
        })
        .collect();

    let readers: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            let id = cpf(ids[i % ids.len()]);
            thread::spawn(move || {
                for _ in 0..200 {
                    let record = store.get(&id).expect("seeded record");
                    assert!(!record.full_name.is_empty());
                    assert!(!record.score.is_empty());
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    for raw in ids {
        assert!(store.get(&cpf(raw)).unwrap().accepted_terms, "CPF {raw}");
    }
}

#[test]
fn concurrent_validation_is_deterministic() {
    let service = RecordService::in_memory(&RegistryConfig::default());
    let inputs = Arc::new(vec![
        ("79349171988", true),
        ("793.491.719-88", true),
        ("00000000000", false),
        ("123", false),
        ("123456789012", false),
    ]);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            let inputs = Arc::clone(&inputs);
            thread::spawn(move || {
                for (input, expected) in inputs.iter() {
                    assert_eq!(service.validate_cpf(input), *expected, "input: {input}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
