use assert_cmd::Command;

pub fn coach_cmd() -> Command {
    let mut cmd = Command::cargo_bin("coach").unwrap();
    cmd.env_remove("COACH_ROOT");
    cmd.env_remove("COACH_LOG");
    cmd
}
