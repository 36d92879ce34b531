//! List command tests
//!
//! Verifies that the `<resource> list` commands honor search, sort and
//! pagination flags end to end. Offline mode keeps the runs
//! deterministic by serving the built-in sample data.

use anyhow::Result;
use corexia_testing::{assertions, TestWorld};

#[test]
fn test_dataset_list_offline_serves_sample_data() -> Result<()> {
    // Given: A fresh environment with no API
    let world = TestWorld::new();

    // When: Listing datasets offline
    let result = world.run(&["dataset", "list", "--offline", "--format", "json"])?;

    // Then: All three sample datasets are returned, labeled as fixtures
    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assertions::assert_item_count(&json, 3)?;
    assertions::assert_origin(&json, "fixture")?;

    Ok(())
}

#[test]
fn test_dataset_search_is_case_insensitive() -> Result<()> {
    let world = TestWorld::new();

    for term in ["support", "SUPPORT", "SuPpOrT"] {
        let result = world.run(&[
            "dataset", "list", "--offline", "--format", "json", "--search", term,
        ])?;

        assert!(result.success(), "Command should succeed");
        let json = result.json()?;
        assertions::assert_item_count(&json, 1)?;
        assertions::assert_item_field(&json, 0, "name", "Customer Support")?;
    }

    Ok(())
}

#[test]
fn test_dataset_sort_by_name_splits_pages() -> Result<()> {
    let world = TestWorld::new();

    // When: Sorting by name ascending with two rows per page
    let result = world.run(&[
        "dataset",
        "list",
        "--offline",
        "--format",
        "json",
        "--sort",
        "name",
        "--order",
        "asc",
        "--page-size",
        "2",
    ])?;

    // Then: Page 1 holds the first two names in order
    let json = result.json()?;
    assertions::assert_page(&json, 1, 2, 3)?;
    assertions::assert_item_field(&json, 0, "name", "Chat QA")?;
    assertions::assert_item_field(&json, 1, "name", "Code Instruct")?;

    // And: Page 2 holds the remaining one
    let result = world.run(&[
        "dataset",
        "list",
        "--offline",
        "--format",
        "json",
        "--sort",
        "name",
        "--order",
        "asc",
        "--page-size",
        "2",
        "--page",
        "2",
    ])?;
    let json = result.json()?;
    assertions::assert_page(&json, 2, 2, 3)?;
    assertions::assert_item_field(&json, 0, "name", "Customer Support")?;

    Ok(())
}

#[test]
fn test_descending_sort_inverts_ascending() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "dataset", "list", "--offline", "--format", "json", "--sort", "samples", "--order", "desc",
    ])?;

    let json = result.json()?;
    assertions::assert_item_field(&json, 0, "name", "Chat QA")?;
    assertions::assert_item_field(&json, 2, "name", "Code Instruct")?;

    Ok(())
}

#[test]
fn test_out_of_range_page_is_clamped() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "dataset",
        "list",
        "--offline",
        "--format",
        "json",
        "--page-size",
        "2",
        "--page",
        "99",
    ])?;

    // Then: The request lands on the last real page
    let json = result.json()?;
    assertions::assert_page(&json, 2, 2, 3)?;

    Ok(())
}

#[test]
fn test_search_without_matches_yields_empty_single_page() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "dataset", "list", "--offline", "--format", "json", "--search", "zzz",
    ])?;

    assert!(result.success(), "An empty result is not an error");
    let json = result.json()?;
    assertions::assert_item_count(&json, 0)?;
    assertions::assert_page(&json, 1, 1, 0)?;

    Ok(())
}

#[test]
fn test_unknown_sort_key_is_rejected() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "dataset", "list", "--offline", "--format", "json", "--sort", "flavor",
    ])?;

    // Then: The command fails and names the bad key
    assert!(!result.success(), "Unknown sort key must be an error");
    assert!(
        result.stderr.contains("flavor"),
        "stderr should name the rejected key: {}",
        result.stderr
    );

    Ok(())
}

#[test]
fn test_every_resource_has_a_list_command() -> Result<()> {
    let world = TestWorld::new();

    for (command, expected) in [("finetune", 3), ("model", 3), ("eval", 2)] {
        let result = world.run(&[command, "list", "--offline", "--format", "json"])?;
        assert!(result.success(), "{} list should succeed", command);
        let json = result.json()?;
        assertions::assert_item_count(&json, expected)?;
        assertions::assert_origin(&json, "fixture")?;
    }

    Ok(())
}

#[test]
fn test_plain_output_renders_a_table() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["dataset", "list", "--offline"])?;

    assert!(result.success());
    assert!(result.stdout.contains("NAME"));
    assert!(result.stdout.contains("Chat QA"));
    assert!(result.stdout.contains("120,000"));
    assert!(result.stdout.contains("Page 1 of 1 (3 datasets)"));

    Ok(())
}
