use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/campus.csv")
        .canonicalize()
        .expect("fixture dataset present")
}

fn cli() -> Command {
    cargo_bin_cmd!("evacroute")
}

fn prepare_command() -> Command {
    let mut cmd = cli();
    cmd.env_remove("EVACROUTE_DATASET")
        .env("RUST_LOG", "error")
        .arg("--dataset")
        .arg(fixture_path());
    cmd
}

#[test]
fn route_to_named_destination() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Aula_201", "--to", "Salida_Principal"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from Aula_201 to Salida_Principal (4 hops, cost 44.70):",
        ))
        .stdout(predicate::str::contains("| Escalera_1 [stairwell, floors 1/2]"))
        .stdout(predicate::str::contains("- Salida_Principal [exit, floor 1]"));
}

#[test]
fn route_defaults_to_nearest_exit() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Aula_201"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Evacuation route from Aula_201 to Salida_Emergencia (4 hops, cost 42.70):",
        ))
        .stdout(predicate::str::contains("+ Aula_201 [classroom, floor 2]"));
}

#[test]
fn unknown_label_suggests_alternatives() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Aula_210"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown location 'Aula_210'."))
        .stderr(predicate::str::contains("Did you mean"))
        .stderr(predicate::str::contains("Aula_201"));
}

#[test]
fn unreachable_destination_fails_with_message() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Salida_Principal", "--to", "Aula_201"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "No route found between Salida_Principal and Aula_201.",
        ));
}

#[test]
fn bidirectional_flag_allows_reverse_travel() {
    let mut cmd = prepare_command();
    cmd.args([
        "--bidirectional",
        "route",
        "--from",
        "Salida_Principal",
        "--to",
        "Aula_201",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from Salida_Principal to Aula_201 (4 hops, cost 44.70):",
        ));
}

#[test]
fn isolated_room_has_no_exit() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Deposito"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No exit is reachable from Deposito."));
}

#[test]
fn json_route_output_is_structured() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "route", "--from", "Aula_101"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");

    assert_eq!(value["kind"], "evacuation");
    assert_eq!(value["hops"], 2);
    assert_eq!(value["goal"]["label"], "Salida_Principal");
    assert_eq!(value["total_cost"], 26.0);
    assert_eq!(value["steps"][1]["label"], "Pasillo_10");
}

#[test]
fn nodes_lists_groups_in_natural_order() {
    let mut cmd = prepare_command();
    cmd.arg("nodes");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "classroom (4):\n  Aula_101\n  Aula_201\n  Aula_202\n  Aula_999\n",
        ))
        .stdout(predicate::str::contains("exit (2):\n"));
}

#[test]
fn nodes_filters_by_type() {
    let mut cmd = prepare_command();
    cmd.args(["nodes", "--type", "other"]);

    cmd.assert()
        .success()
        .stdout("other (2):\n  Deposito\n  Laboratorio\n");
}

#[test]
fn nodes_rejects_unknown_type() {
    let mut cmd = prepare_command();
    cmd.args(["nodes", "--type", "lobby"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown node type 'lobby'"));
}

#[test]
fn stats_reports_counts() {
    let mut cmd = prepare_command();
    cmd.arg("stats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 13\n"))
        .stdout(predicate::str::contains("Edges: 12\n"))
        .stdout(predicate::str::contains("Exits: 2\n"))
        .stdout(predicate::str::contains("Floors: 0, 1, 2\n"))
        .stdout(predicate::str::contains("  stairwell: 2\n"));
}

#[test]
fn stats_json_doubles_edges_when_bidirectional() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "--bidirectional", "stats"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["edges"], 24);
    assert_eq!(value["nodes"], 13);
}

#[test]
fn dataset_can_come_from_environment() {
    let mut cmd = cli();
    cmd.env("EVACROUTE_DATASET", fixture_path())
        .env("RUST_LOG", "error")
        .arg("stats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 13"));
}

#[test]
fn missing_dataset_configuration_is_reported() {
    let mut cmd = cli();
    cmd.env_remove("EVACROUTE_DATASET")
        .env("RUST_LOG", "error")
        .arg("stats");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no dataset configured"));
}

#[test]
fn invalid_weight_aborts_loading() {
    let temp = tempdir().expect("create temp dir");
    let path = temp.path().join("broken.csv");
    fs::write(
        &path,
        "origin_label,dest_label,origin_floor,dest_floor,distance_m\nAula_1,Salida_1,1,1,-4\n",
    )
    .expect("write dataset");

    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .arg("--dataset")
        .arg(&path)
        .arg("stats");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to build graph"));
}
