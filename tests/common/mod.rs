use assert_cmd::Command;
use std::path::Path;

pub fn weeklog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("weeklog").unwrap();
    cmd.env_remove("WEEKLOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized log at `root`
#[allow(dead_code)]
pub fn weeklog_in(root: &Path) -> Command {
    let mut cmd = weeklog_cmd();
    cmd.current_dir(root);
    cmd
}
