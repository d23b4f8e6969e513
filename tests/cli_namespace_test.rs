//! End-to-end tests for CLI commands over a persistent namespace store.
//!
//! Each `execute_command` call opens the store afresh, as separate
//! invocations of the binary would.

#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use flowdeck::cli::{Commands, NamespaceCommands};
use flowdeck::commands::execute_command;
use flowdeck::config::FlowdeckConfig;

fn ns(command: NamespaceCommands, config: &FlowdeckConfig) -> Result<String, String> {
    execute_command(Commands::Namespace { command }, config).map_err(|e| format!("{e:#}"))
}

#[test]
fn test_namespace_preferences_persist_between_invocations() -> Result<(), String> {
    // Given: A config pointing at a fresh preferences file
    let dir = tempfile::tempdir().map_err(|e| format!("{e}"))?;
    let config = FlowdeckConfig::default().storage_path(dir.path().join("prefs.json"));

    // When: The current namespace is set in one invocation
    ns(
        NamespaceCommands::SetCurrent {
            namespace: "qa".into(),
        },
        &config,
    )?;

    // Then: A later invocation resolves to it
    assert_eq!(ns(NamespaceCommands::Resolve { namespace: None }, &config)?, "qa");

    // And: An explicit namespace beats the stored one
    assert_eq!(
        ns(
            NamespaceCommands::Resolve {
                namespace: Some("dev".into())
            },
            &config
        )?,
        "dev"
    );
    Ok(())
}

#[test]
fn test_managed_namespace_overrides_everything() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| format!("{e}"))?;
    let config = FlowdeckConfig::default().storage_path(dir.path().join("prefs.json"));

    ns(
        NamespaceCommands::SetCurrent {
            namespace: "qa".into(),
        },
        &config,
    )?;
    ns(
        NamespaceCommands::SetManaged {
            namespace: "ops".into(),
        },
        &config,
    )?;

    assert_eq!(
        ns(
            NamespaceCommands::Resolve {
                namespace: Some("dev".into())
            },
            &config
        )?,
        "ops"
    );
    assert_eq!(
        ns(NamespaceCommands::Get, &config)?,
        "managed: ops\ncurrent: ops"
    );

    // Clearing managed falls back to the stored current namespace
    ns(NamespaceCommands::ClearManaged, &config)?;
    assert_eq!(
        ns(NamespaceCommands::Get, &config)?,
        "managed: -\ncurrent: qa"
    );
    Ok(())
}

#[test]
fn test_cleared_store_resolves_to_configured_default() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| format!("{e}"))?;
    let config = FlowdeckConfig::default()
        .storage_path(dir.path().join("prefs.json"))
        .default_namespace("argo");

    ns(
        NamespaceCommands::SetCurrent {
            namespace: "qa".into(),
        },
        &config,
    )?;
    ns(NamespaceCommands::ClearCurrent, &config)?;

    assert_eq!(ns(NamespaceCommands::Resolve { namespace: None }, &config)?, "argo");
    Ok(())
}

#[test]
fn test_inspect_workflow_file() -> Result<(), String> {
    // Given: A workflow document on disk
    let dir = tempfile::tempdir().map_err(|e| format!("{e}"))?;
    let path = dir.path().join("wf.json");
    std::fs::write(
        &path,
        r#"{
            "metadata": {"name": "wf1"},
            "spec": {"suspend": true},
            "status": {
                "phase": "Running",
                "nodes": {
                    "wf1-1": {"id": "wf1-1", "name": "step-1", "type": "Pod",
                              "phase": "Pending", "templateName": "main"}
                }
            }
        }"#,
    )
    .map_err(|e| format!("{e}"))?;

    // When: It is inspected
    let out = execute_command(Commands::Inspect { path }, &FlowdeckConfig::default())
        .map_err(|e| format!("{e:#}"))?;
    let report: serde_json::Value = serde_json::from_str(&out).map_err(|e| format!("{e}"))?;

    // Then: The report carries state, icons and the derived pod name
    assert_eq!(report["suspended"], serde_json::json!(true));
    assert_eq!(report["running"], serde_json::json!(true));
    assert_eq!(report["nodes"][0]["pod"], serde_json::json!("wf1-main-2695313685"));
    assert_eq!(
        report["nodes"][0]["icon"],
        serde_json::json!("fa-clock status-icon--pending status-icon--slow-spin")
    );
    Ok(())
}

#[test]
fn test_inspect_rejects_malformed_document() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| format!("{e}"))?;
    let path = dir.path().join("wf.json");
    std::fs::write(&path, "{not json").map_err(|e| format!("{e}"))?;

    let result = execute_command(Commands::Inspect { path }, &FlowdeckConfig::default());
    assert!(result.is_err());
    Ok(())
}
