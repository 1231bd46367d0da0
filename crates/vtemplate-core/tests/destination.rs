use vtemplate_core::destination::DestinationConfig;
use vtemplate_core::location::LocationConfig;

fn location() -> LocationConfig {
    LocationConfig {
        vm_name: "vm1".to_string(),
        cluster: "c1".to_string(),
        folder: "f1".to_string(),
        host: "h1".to_string(),
        resource_pool: "rp1".to_string(),
    }
}

fn fully_specified() -> DestinationConfig {
    DestinationConfig {
        library: "lib1".to_string(),
        name: "golden".to_string(),
        description: "hand written".to_string(),
        cluster: "c2".to_string(),
        folder: "f2".to_string(),
        host: "h2".to_string(),
        resource_pool: "rp2".to_string(),
    }
}

#[test]
fn test_library_only_gets_defaults_from_location() {
    let mut dest = DestinationConfig {
        library: "lib1".to_string(),
        ..Default::default()
    };
    let loc = LocationConfig {
        vm_name: "vm1".to_string(),
        cluster: "c1".to_string(),
        ..Default::default()
    };

    let errs = dest.prepare(&loc);

    assert!(errs.is_empty(), "unexpected errors: {errs:?}");
    assert!(dest.name.starts_with("vm1"), "got: {}", dest.name);
    assert_eq!(dest.cluster, "c1");
    assert!(dest.description.contains("vm1"));
    assert_eq!(dest.library, "lib1");
}

#[test]
fn test_empty_library_reports_exactly_one_error() {
    let mut dest = DestinationConfig::default();

    let errs = dest.prepare(&location());

    assert_eq!(errs.len(), 1);
    assert!(errs[0].to_string().contains("library"), "got: {}", errs[0]);
}

#[test]
fn test_empty_library_still_fills_defaults() {
    let mut dest = DestinationConfig::default();

    let _ = dest.prepare_at(&location(), 1_700_000_000);

    assert_eq!(dest.name, "vm11700000000");
    assert_eq!(dest.folder, "f1");
}

#[test]
fn test_generated_name_is_vm_name_plus_timestamp() {
    let mut dest = DestinationConfig {
        library: "lib1".to_string(),
        ..Default::default()
    };

    dest.prepare_at(&location(), 1_712_345_678);

    assert_eq!(dest.name, "vm11712345678");
}

#[test]
fn test_all_placement_fields_fall_back_to_location() {
    let mut dest = DestinationConfig {
        library: "lib1".to_string(),
        ..Default::default()
    };

    dest.prepare_at(&location(), 1);

    assert_eq!(dest.cluster, "c1");
    assert_eq!(dest.folder, "f1");
    assert_eq!(dest.host, "h1");
    assert_eq!(dest.resource_pool, "rp1");
}

#[test]
fn test_explicit_fields_are_not_overridden() {
    let mut dest = fully_specified();

    let errs = dest.prepare(&location());

    assert!(errs.is_empty());
    assert_eq!(dest, fully_specified());
}

#[test]
fn test_placement_may_stay_empty() {
    let mut dest = DestinationConfig {
        library: "lib1".to_string(),
        ..Default::default()
    };
    let loc = LocationConfig {
        vm_name: "vm1".to_string(),
        ..Default::default()
    };

    let errs = dest.prepare(&loc);

    assert!(errs.is_empty());
    assert!(dest.cluster.is_empty());
    assert!(dest.folder.is_empty());
    assert!(dest.host.is_empty());
    assert!(dest.resource_pool.is_empty());
}

#[test]
fn test_default_description_mentions_vm_name() {
    let mut dest = DestinationConfig {
        library: "lib1".to_string(),
        ..Default::default()
    };

    dest.prepare_at(&location(), 1);

    assert_eq!(dest.description, "Imported vm1 VM template");
}

#[test]
fn test_prepare_twice_on_full_config_is_noop() {
    let mut dest = fully_specified();

    dest.prepare_at(&location(), 1);
    dest.prepare_at(&location(), 2);

    assert_eq!(dest, fully_specified());
}

#[test]
fn test_prepare_on_fresh_configs_in_different_seconds_gives_different_names() {
    let mut first = DestinationConfig {
        library: "lib1".to_string(),
        ..Default::default()
    };
    let mut second = first.clone();

    first.prepare_at(&location(), 1_700_000_000);
    second.prepare_at(&location(), 1_700_000_001);

    assert_ne!(first.name, second.name);
}

#[test]
fn test_prepare_with_system_clock_is_not_idempotent() {
    let mut first = DestinationConfig {
        library: "lib1".to_string(),
        ..Default::default()
    };
    let mut second = first.clone();

    first.prepare(&location());
    std::thread::sleep(std::time::Duration::from_millis(1100));
    second.prepare(&location());

    assert!(first.name.starts_with("vm1"));
    assert!(second.name.starts_with("vm1"));
    assert_ne!(first.name, second.name);
}
