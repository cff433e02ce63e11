//! End-to-end integration tests for the animgen CLI

mod test_utils;

use anyhow::{Context, Result, ensure};
use std::fs;
use test_utils::{LOCOMOTION, arg, create_temp_dir, run_animgen, write_controller};

#[test]
fn test_generate_writes_wrapper_named_after_controller() -> Result<()> {
    let (_guard, dir) = create_temp_dir()?;
    let controller = write_controller(&dir, "Locomotion.yaml", LOCOMOTION)?;
    let out_dir = dir.join("generated");

    let output = run_animgen([
        "generate",
        "--controller",
        arg(&controller),
        "--output-dir",
        arg(&out_dir),
        "--namespace",
        "Game.Characters",
    ])?;
    ensure!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let wrapper = fs::read_to_string(out_dir.join("Locomotion.cs"))
        .context("wrapper was not written")?;
    assert!(wrapper.contains("namespace Game.Characters\n"));
    assert!(wrapper.contains("public class Locomotion : MonoBehaviour"));
    assert!(wrapper.contains("public const int SpeedProperty = 123;"));
    assert!(wrapper.contains("public float Speed\n"));
    assert!(wrapper.contains("public void Jump()\n"));
    assert!(wrapper.contains("public bool IsGrounded\n"));
    assert!(wrapper.contains("&& animator.parameterCount == 3\n"));
    Ok(())
}

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let (_guard, dir) = create_temp_dir()?;
    let controller = write_controller(&dir, "Locomotion.yaml", LOCOMOTION)?;
    let config = dir.join("animgen.yaml");
    fs::write(&config, "class_name: FromConfig\nvisibility: internal\n")?;

    let output = run_animgen([
        "generate",
        "--controller",
        arg(&controller),
        "--config",
        arg(&config),
        "--class-name",
        "FromFlag",
        "--partial",
        "--stdout",
    ])?;
    ensure!(output.status.success(), "generate failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("public partial class FromFlag\n"));
    assert!(stdout.contains("internal float Speed\n"));
    assert!(!dir.join("FromFlag.cs").exists());
    Ok(())
}

#[test]
fn test_check_detects_drift() -> Result<()> {
    let (_guard, dir) = create_temp_dir()?;
    let controller = write_controller(&dir, "Locomotion.yaml", LOCOMOTION)?;

    let generate = run_animgen([
        "generate",
        "--controller",
        arg(&controller),
        "--output-dir",
        arg(&dir),
    ])?;
    ensure!(generate.status.success(), "generate failed");
    let wrapper = dir.join("Locomotion.cs");

    let check = |controller: &std::path::Path| {
        run_animgen([
            "check",
            "--controller",
            arg(&controller),
            "--wrapper",
            arg(&wrapper),
        ])
    };
    assert!(check(&controller)?.status.success());

    let grown = format!("{LOCOMOTION}  - {{ name: crouch, type: bool, hash: 5 }}\n");
    let controller = write_controller(&dir, "Locomotion.yaml", &grown)?;
    let stale = check(&controller)?;
    assert!(!stale.status.success());
    assert!(String::from_utf8_lossy(&stale.stderr).contains("out of date"));
    Ok(())
}

#[test]
fn test_strict_names_rejects_collisions() -> Result<()> {
    let (_guard, dir) = create_temp_dir()?;
    let controller = write_controller(
        &dir,
        "Clash.json",
        r#"{"name":"Clash","parameters":[
            {"name":"speed","type":"float","hash":1},
            {"name":"Speed","type":"float","hash":2}]}"#,
    )?;
    let args = |strict: bool| {
        let mut args = vec![
            "generate".to_string(),
            "--controller".to_string(),
            controller.display().to_string(),
            "--stdout".to_string(),
        ];
        if strict {
            args.push("--strict-names".to_string());
        }
        args
    };

    assert!(run_animgen(args(false))?.status.success());
    let strict = run_animgen(args(true))?;
    assert!(!strict.status.success());
    assert!(String::from_utf8_lossy(&strict.stderr).contains("both map to identifier 'Speed'"));
    Ok(())
}

#[test]
fn test_inspect_lists_parameters_in_order() -> Result<()> {
    let (_guard, dir) = create_temp_dir()?;
    let controller = write_controller(&dir, "Locomotion.yaml", LOCOMOTION)?;

    let output = run_animgen([
        "inspect",
        "--controller",
        arg(&controller),
        "--json",
    ])?;
    ensure!(output.status.success(), "inspect failed");

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let names: Vec<_> = rows
        .as_array()
        .context("expected an array")?
        .iter()
        .filter_map(|row| row["name"].as_str())
        .collect();
    assert_eq!(names, ["speed", "Jump", "isGrounded"]);
    assert_eq!(rows[2]["kind"], "bool");
    assert_eq!(rows[2]["identifier"], "IsGrounded");
    Ok(())
}

#[test]
fn test_init_config_refuses_to_overwrite() -> Result<()> {
    let (_guard, dir) = create_temp_dir()?;
    let path = dir.join("animgen.yaml");
    let init = |force: bool| {
        let mut args = vec![
            "init-config".to_string(),
            "--path".to_string(),
            path.display().to_string(),
        ];
        if force {
            args.push("--force".to_string());
        }
        run_animgen(args)
    };

    assert!(init(false)?.status.success());
    assert!(fs::read_to_string(&path)?.contains("visibility: public"));
    assert!(!init(false)?.status.success());
    assert!(init(true)?.status.success());
    Ok(())
}
