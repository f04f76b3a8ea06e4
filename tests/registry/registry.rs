use barnacle::registry::aggregator::{NO_DATA, StatsAggregator};
use barnacle::registry::index::UNGROUPED;
use barnacle::{BarnacleConfig, CommandDefinition, RegistryError, RegistryManager};
use std::collections::BTreeSet;
use std::sync::{Arc, Barrier};
use std::thread;

fn definition(name: &str, group: Option<&str>) -> CommandDefinition {
    let mut def = CommandDefinition::new(name).doc(&format!("{} command", name));
    if let Some(g) = group {
        def = def.group(g);
    }
    def
}

fn data_row_count(table: &str) -> usize {
    // top rule, header, inner rule, data rows, bottom rule
    table.lines().count().saturating_sub(4)
}

#[test]
fn tree_partitions_the_registered_set() {
    let manager = RegistryManager::default();
    for (name, group) in [
        ("build", Some("ops")),
        ("deploy", Some("ops")),
        ("checksum", Some("hash")),
        ("lint", None),
        ("about", None),
    ] {
        manager.register_command(&definition(name, group)).unwrap();
    }

    let tree = manager.command_tree();
    let mut seen = BTreeSet::new();
    for names in tree.values() {
        for name in names {
            assert!(seen.insert(name.clone()), "{} appears in two buckets", name);
        }
    }
    let registered: BTreeSet<String> = manager.command_names().into_iter().collect();
    assert_eq!(seen, registered);
    assert_eq!(tree[UNGROUPED], vec!["about", "lint"]);
}

#[test]
fn duplicate_registration_fails_and_preserves_index() {
    let manager = RegistryManager::default();
    manager.register_command(&definition("build", Some("ops"))).unwrap();

    let err = manager
        .register_command(&definition("build", Some("other")))
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateCommand(_)));

    assert_eq!(manager.command_count(), 1);
    let kept = manager.lookup_command("build").expect("original survives");
    assert_eq!(kept.group.as_deref(), Some("ops"));
}

#[test]
fn invalid_definitions_are_rejected_at_registration() {
    let manager = RegistryManager::default();

    let err = manager.register_command(&definition("", None)).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidCommand(_)));

    let bad_param = CommandDefinition::new("cmd").parameter("", "string", true);
    let err = manager.register_command(&bad_param).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidCommand(_)));

    assert_eq!(manager.command_count(), 0);
}

#[test]
fn stats_match_recorded_durations() {
    let manager = RegistryManager::default();
    manager.register_command(&definition("build", Some("ops"))).unwrap();

    let durations = [0.25, 0.5, 1.25, 2.0];
    for d in durations {
        manager.record_execution("build", d, true, None);
    }
    manager.record_execution("build", 0.1, false, Some("exit 1".to_string()));

    let stats = manager.stats_for("build").expect("stats present");
    assert_eq!(stats.call_count, 5);
    assert_eq!(stats.success_count, 4);
    assert_eq!(stats.failure_count, 1);
    assert_eq!(stats.success_count + stats.failure_count, stats.call_count);

    let mean = (durations.iter().sum::<f64>() + 0.1) / 5.0;
    assert!((stats.avg_duration_secs - mean).abs() < 1e-9);
    assert_eq!(stats.min_duration_secs, 0.1);
    assert_eq!(stats.max_duration_secs, 2.0);
}

#[test]
fn zero_execution_commands_are_no_data_not_zero() {
    let manager = RegistryManager::default();
    manager.register_command(&definition("build", Some("ops"))).unwrap();
    manager.register_command(&definition("deploy", Some("ops"))).unwrap();
    manager.record_execution("build", 1.0, true, None);

    assert!(manager.stats_for("deploy").is_none());
    assert!(!manager.all_stats().contains_key("deploy"));

    let summary = manager.dashboard_summary();
    assert!(summary.contains("build"));
    assert!(!summary.contains("deploy"));

    let grouped = manager.dashboard_by_group();
    assert!(grouped.contains("deploy"));
    assert!(grouped.contains(NO_DATA));

    let detail = manager.dashboard_detail("deploy");
    assert!(detail.contains(NO_DATA));
    assert!(detail.contains("deploy"));
}

#[test]
fn disabled_tracking_suppresses_records_until_reenabled() {
    let manager = RegistryManager::default();
    manager.register_command(&definition("build", Some("ops"))).unwrap();

    manager.disable_tracking();
    assert!(!manager.is_tracking_enabled());
    for _ in 0..5 {
        manager.record_execution("build", 1.0, true, None);
    }
    assert!(manager.stats_for("build").is_none());

    manager.enable_tracking();
    for _ in 0..3 {
        manager.record_execution("build", 1.0, true, None);
    }
    assert_eq!(manager.stats_for("build").unwrap().call_count, 3);
}

#[test]
fn concurrent_recording_loses_nothing() {
    const THREADS: usize = 8;
    const RECORDS: usize = 50;

    let manager = Arc::new(RegistryManager::default());
    manager.register_command(&definition("build", Some("ops"))).unwrap();

    let barrier = Arc::new(Barrier::new(THREADS));
    let mut handles = Vec::new();
    for t in 0..THREADS {
        let manager = Arc::clone(&manager);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..RECORDS {
                let failed = (t + i) % 7 == 0;
                manager.record_execution(
                    "build",
                    0.001 * (i + 1) as f64,
                    !failed,
                    failed.then(|| "simulated failure".to_string()),
                );
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = manager.stats_for("build").expect("stats present");
    assert_eq!(stats.call_count as usize, THREADS * RECORDS);
    assert_eq!(stats.success_count + stats.failure_count, stats.call_count);
    assert_eq!(manager.execution_history(usize::MAX).len(), THREADS * RECORDS);
}

#[test]
fn late_registration_under_concurrent_recording_stays_consistent() {
    const THREADS: usize = 4;

    let manager = Arc::new(RegistryManager::default());
    manager.register_command(&definition("seed", None)).unwrap();

    let barrier = Arc::new(Barrier::new(THREADS));
    let mut handles = Vec::new();
    for t in 0..THREADS {
        let manager = Arc::clone(&manager);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let name = format!("cmd-{}", t);
            manager
                .register_command(&definition(&name, Some("late")))
                .unwrap();
            for _ in 0..10 {
                manager.record_execution(&name, 0.01, true, None);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(manager.command_count(), THREADS + 1);
    for t in 0..THREADS {
        let stats = manager.stats_for(&format!("cmd-{}", t)).unwrap();
        assert_eq!(stats.call_count, 10);
    }
}

#[test]
fn execution_history_is_ordered_and_bounded() {
    let manager = RegistryManager::default();
    for name in ["a", "b", "c"] {
        manager.register_command(&definition(name, None)).unwrap();
        manager.record_execution(name, 0.1, true, None);
    }

    let recent = manager.execution_history(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].command_name, "b");
    assert_eq!(recent[1].command_name, "c");

    let rows = StatsAggregator::new().history_rows(&recent);
    assert_eq!(rows[1].command, "c");
    assert_eq!(rows[1].outcome, "ok");
    assert_eq!(rows[1].error, "");
}

#[test]
fn search_finds_by_name_and_summary() {
    let manager = RegistryManager::default();
    manager
        .register_command(
            &CommandDefinition::new("checksum")
                .group("hash")
                .doc("Compute the SHA-256 digest of a file."),
        )
        .unwrap();
    manager.register_command(&definition("now", Some("time"))).unwrap();

    assert_eq!(manager.search_commands("digest").len(), 1);
    assert_eq!(manager.search_commands("NOW").len(), 1);
    assert_eq!(manager.search_commands_pattern("^che").unwrap().len(), 1);
    assert!(manager.search_commands_pattern("(").is_err());
}

#[test]
fn docs_markdown_covers_every_command() {
    let manager = RegistryManager::default();
    manager.register_command(&definition("build", Some("ops"))).unwrap();
    manager.register_command(&definition("lint", None)).unwrap();

    let md = manager.command_docs_markdown();
    assert!(md.contains("## Group: ops"));
    assert!(md.contains("## Global commands"));
    assert!(md.contains("**build**"));
    assert!(md.contains("**lint**"));
}

#[test]
fn scenario_ops_group_end_to_end() {
    let manager = RegistryManager::default();
    manager.register_command(&definition("build", Some("ops"))).unwrap();
    manager.register_command(&definition("deploy", Some("ops"))).unwrap();
    manager.register_command(&definition("lint", None)).unwrap();

    let tree = manager.command_tree();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree["ops"], vec!["build", "deploy"]);
    assert_eq!(tree[UNGROUPED], vec!["lint"]);

    manager.record_execution("build", 1.0, true, None);
    manager.record_execution("build", 3.0, true, None);

    let stats = manager.stats_for("build").unwrap();
    assert_eq!(stats.call_count, 2);
    assert_eq!(stats.success_count, 2);
    assert!((stats.avg_duration_secs - 2.0).abs() < 1e-9);

    assert!(manager.stats_for("deploy").is_none());

    let summary = manager.dashboard_summary();
    assert_eq!(data_row_count(&summary), 1);
    assert!(summary.contains("build"));
}

#[test]
fn config_controls_initial_tracking_state() {
    let mut config = BarnacleConfig::default();
    config.tracking.enabled = false;
    let manager = RegistryManager::new(&config);

    assert!(!manager.is_tracking_enabled());
    manager.record_execution("build", 1.0, true, None);
    assert!(manager.all_stats().is_empty());

    manager.enable_tracking();
    manager.record_execution("build", 1.0, true, None);
    assert_eq!(manager.all_stats().len(), 1);
}
