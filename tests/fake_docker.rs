//! Detection against a stand-in `docker` script placed first on PATH.
//!
//! Kept to a single test: it rewrites PATH for the whole test binary.

#![cfg(unix)]

use docker_desktop_installer::{
    detect_docker, DockerStatusChecker, InstallStatus, InstallStatusChecker,
};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

fn write_fake_docker(dir: &Path, script: &str) {
    let path = dir.join("docker");
    std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[tokio::test]
async fn test_checker_follows_the_docker_on_path() {
    let dir = tempfile::tempdir().unwrap();
    let original = std::env::var_os("PATH").unwrap_or_default();
    let mut entries = vec![dir.path().to_path_buf()];
    entries.extend(std::env::split_paths(&original));
    std::env::set_var("PATH", std::env::join_paths(entries).unwrap());

    let checker = DockerStatusChecker::default();

    // Short version strings still mean a working install
    write_fake_docker(dir.path(), "echo 'Docker version 25.0, build abc'");
    match detect_docker().await {
        InstallStatus::Installed(meta) => {
            assert_eq!(meta.path, dir.path().join("docker"));
            assert!(meta.version.is_none());
        }
        other => panic!("expected Installed, got {other:?}"),
    }
    assert!(checker.is_installed_now().await);

    write_fake_docker(dir.path(), "echo 'Docker version 27.3.1, build ce12230'");
    let status = detect_docker().await;
    assert_eq!(status.version(), Some(&semver::Version::new(27, 3, 1)));
    assert!(checker.is_installed_now().await);

    // A failing probe is not an install
    write_fake_docker(dir.path(), "exit 1");
    assert!(matches!(detect_docker().await, InstallStatus::Unknown { .. }));
    assert!(!checker.is_installed_now().await);

    std::env::set_var("PATH", original);
}
