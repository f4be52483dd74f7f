//! Integration tests for the `mesh-to-netcdf` command-line tool.
//!
//! Runs the built binary against small mesh files and checks the exit status
//! and the files it leaves behind.

#![cfg(feature = "netcdf")]

use std::fs;
use std::path::Path;
use std::process::Command;

use cvm_grid::{AxisSpec, GridEnumerator, GridShape};

const CONFIG: &str = r#"
[grid.lon]
start = -121.0
end = -113.0
steps = 3

[grid.lat]
start = 31.0
end = 36.0
steps = 2

[grid.depth]
start = 0.0
end = -1000.0
steps = 2
"#;

fn shape() -> GridShape {
    GridShape::new(
        AxisSpec::new(-121.0, -113.0, 3).unwrap(),
        AxisSpec::new(31.0, 36.0, 2).unwrap(),
        AxisSpec::new(0.0, -1000.0, 2).unwrap(),
    )
    .unwrap()
}

/// Mesh text for the first `n` grid points, 17 columns per line.
fn mesh_text(shape: &GridShape, n: usize) -> String {
    GridEnumerator::new(shape)
        .take(n)
        .map(|p| {
            format!(
                "{} 0.0 0.0 0.0 cvmh 0.0 0.0 0.0 crust 0.0 0.0 0.0 6000.0 3000.0 2700.0\n",
                p
            )
        })
        .collect()
}

fn run(mesh: &Path, config: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_mesh-to-netcdf"))
        .arg(mesh)
        .arg("--config")
        .arg(config)
        .env("RUST_LOG", "error")
        .output()
        .unwrap()
}

#[test]
fn test_short_mesh_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("grid.toml");
    let mesh_path = dir.path().join("mesh.txt");
    fs::write(&config_path, CONFIG).unwrap();

    let shape = shape();
    fs::write(&mesh_path, mesh_text(&shape, shape.len() - 1)).unwrap();

    let output = run(&mesh_path, &config_path);
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("mesh.nc").exists());

    let log = String::from_utf8_lossy(&output.stdout);
    assert!(log.contains("12 11"), "log was: {}", log);
}

#[test]
fn test_complete_mesh_writes_volume() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("grid.toml");
    let mesh_path = dir.path().join("mesh.txt");
    fs::write(&config_path, CONFIG).unwrap();

    let shape = shape();
    fs::write(&mesh_path, mesh_text(&shape, shape.len())).unwrap();

    let output = run(&mesh_path, &config_path);
    assert!(output.status.success());
    assert!(dir.path().join("mesh.nc").exists());
}
