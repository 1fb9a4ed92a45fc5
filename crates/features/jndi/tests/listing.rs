use jview_jndi::{FlatRecord, JndiService, flatten};
use jview_naming::{
    Binding, ContextFactory, EmbeddedRegistry, LoaderMode, NamingDirectory, NamingEnvironment,
    NamingError, Resolved,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn record(path: &str, name: &str, value: Option<&str>) -> FlatRecord {
    FlatRecord::new(path, name, value.map(str::to_owned))
}

fn scenario_registry() -> EmbeddedRegistry {
    let registry = EmbeddedRegistry::new();
    registry.bind("/a/x", "1").unwrap();
    registry.bind("/a/y/z", "2").unwrap();
    registry
}

/// Delegates to a registry, failing the configured paths with `NotFound`.
#[derive(Debug, Clone, Default)]
struct ScriptedDirectory {
    registry: EmbeddedRegistry,
    failing_lists: HashSet<String>,
    failing_lookups: HashSet<String>,
    closes: Arc<AtomicUsize>,
}

impl ScriptedDirectory {
    fn new(registry: EmbeddedRegistry) -> Self {
        Self { registry, ..Self::default() }
    }

    fn fail_list(mut self, path: &str) -> Self {
        self.failing_lists.insert(path.to_owned());
        self
    }

    fn fail_lookup(mut self, path: &str) -> Self {
        self.failing_lookups.insert(path.to_owned());
        self
    }

    fn missing(path: &str) -> NamingError {
        NamingError::NotFound { message: path.to_owned().into(), context: Some("scripted".into()) }
    }
}

impl NamingDirectory for ScriptedDirectory {
    fn list(&self, path: &str) -> Result<Vec<Binding>, NamingError> {
        if self.failing_lists.contains(path) {
            return Err(Self::missing(path));
        }
        self.registry.list(path)
    }

    fn lookup(&self, path: &str) -> Result<Resolved, NamingError> {
        if self.failing_lookups.contains(path) {
            return Err(Self::missing(path));
        }
        self.registry.lookup(path)
    }

    fn close(&mut self) -> Result<(), NamingError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl ContextFactory for ScriptedDirectory {
    fn open(
        &self,
        _environment: &NamingEnvironment,
    ) -> Result<Box<dyn NamingDirectory + Send>, NamingError> {
        Ok(Box::new(self.clone()))
    }
}

#[test]
fn nested_scenario_lists_leaves_depth_first() {
    let service = JndiService::open(&scenario_registry(), NamingEnvironment::default());

    assert_eq!(
        service.listing("/a"),
        [record("/a/x", "x", Some("1")), record("/a/y/z", "z", Some("2"))]
    );
}

#[test]
fn lookup_failure_after_listing_omits_only_that_subtree() {
    let directory = ScriptedDirectory::new(scenario_registry()).fail_lookup("/a/y");
    let service = JndiService::open(&directory, NamingEnvironment::default());

    let listing = service.listing_with_stats("/a");
    assert_eq!(listing.records, [record("/a/x", "x", Some("1"))]);
    assert_eq!(listing.stats.skipped_lookups, 1);
    assert_eq!(listing.stats.contexts, 0);
}

#[test]
fn unlistable_root_yields_empty_listing() {
    let directory = ScriptedDirectory::new(scenario_registry()).fail_list("/a");
    let service = JndiService::open(&directory, NamingEnvironment::default());

    let listing = service.listing_with_stats("/a");
    assert!(listing.records.is_empty());
    assert_eq!(listing.stats.skipped_lists, 1);

    assert!(service.listing("/missing").is_empty());
}

#[test]
fn unlistable_branch_does_not_affect_siblings() {
    let registry = EmbeddedRegistry::new();
    registry.bind("/r/first/leaf", "1").unwrap();
    registry.bind("/r/broken/leaf", "2").unwrap();
    registry.bind("/r/last", "3").unwrap();

    let directory = ScriptedDirectory::new(registry).fail_list("/r/broken");
    let listing = flatten(&directory, "/r");

    let paths: Vec<_> = listing.records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/r/first/leaf", "/r/last"]);
    assert_eq!(listing.stats.contexts, 2);
    assert_eq!(listing.stats.skipped_lists, 1);
}

#[test]
fn null_leaf_is_reported_with_null_value() {
    let registry = EmbeddedRegistry::new();
    registry.bind_null("/app/optional").unwrap();
    registry.bind("/app/mode", "dev").unwrap();

    let service = JndiService::open(&registry, NamingEnvironment::default());
    assert_eq!(
        service.listing("/app"),
        [record("/app/optional", "optional", None), record("/app/mode", "mode", Some("dev"))]
    );
}

#[test]
fn descendants_of_each_child_precede_the_next_child() {
    let registry = EmbeddedRegistry::new();
    registry.bind("/t/c1/a", "1").unwrap();
    registry.bind("/t/l1", "2").unwrap();
    registry.bind("/t/c1/d/b", "3").unwrap();
    registry.bind("/t/c2/c", "4").unwrap();
    registry.bind("/t/l0", "5").unwrap();

    let paths: Vec<_> = flatten(&registry, "/t").records.into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/t/c1/a", "/t/c1/d/b", "/t/l1", "/t/c2/c", "/t/l0"]);
}

#[test]
fn record_count_matches_reachable_leaves_and_excludes_contexts() {
    let registry = EmbeddedRegistry::new();
    for i in 0..5_i64 {
        registry.bind(&format!("/svc/group{i}/value"), i).unwrap();
        registry.bind(&format!("/svc/group{i}/nested/flag"), i % 2 == 0).unwrap();
    }
    registry.create_subcontext("/svc/empty").unwrap();

    let listing = flatten(&registry, "/svc");
    assert_eq!(listing.records.len(), 10);
    assert_eq!(listing.stats.leaves, 10);

    for record in &listing.records {
        assert!(!registry.lookup(&record.path).unwrap().is_sub_context(), "{}", record.path);
    }
}

#[test]
fn disabled_service_is_empty_for_every_path() {
    let registry = scenario_registry();

    let wrong_factory = JndiService::open(
        &registry,
        NamingEnvironment { factory: "com.example.RemoteFactory".into(), ..Default::default() },
    );
    let wrong_loader = JndiService::open(
        &registry,
        NamingEnvironment { loader: LoaderMode::System, ..Default::default() },
    );

    for service in [&wrong_factory, &wrong_loader] {
        assert!(!service.is_enabled());
        for path in ["", "/", "/a", "/a/x", "/nope"] {
            assert!(service.listing(path).is_empty());
        }
    }
}

#[test]
fn closing_a_never_opened_session_is_a_no_op() {
    let mut refused = JndiService::open(
        &scenario_registry(),
        NamingEnvironment { factory: "com.example.RemoteFactory".into(), ..Default::default() },
    );
    let mut disabled = JndiService::disabled();

    for service in [&mut refused, &mut disabled] {
        service.close();
        service.close();

        assert!(!service.is_enabled());
        assert!(service.listing("").is_empty());
    }
}

#[test]
fn close_is_idempotent_and_releases_once() {
    let directory = ScriptedDirectory::new(scenario_registry());
    let closes = Arc::clone(&directory.closes);

    let mut service = JndiService::open(&directory, NamingEnvironment::default());
    assert_eq!(service.listing("/a").len(), 2);
    assert_eq!(service.listing("/a").len(), 2);

    service.close();
    service.close();

    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert!(!service.is_enabled());
    assert!(service.listing("/a").is_empty());
}

#[test]
fn dropping_service_releases_handle() {
    let directory = ScriptedDirectory::new(scenario_registry());
    let closes = Arc::clone(&directory.closes);

    {
        let service = JndiService::open(&directory, NamingEnvironment::default());
        assert!(service.is_enabled());
    }

    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn sessions_on_separate_threads_do_not_interfere() {
    let registry = scenario_registry();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                let service = JndiService::open(&registry, NamingEnvironment::default());
                service.listing("/a").len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
