use assert_cmd::Command;

/*-------------------------------------------------------------------------------------------------
  firewallsync Binary Tests
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Version
--------------------------------------------------------------------------------------*/

#[test]
fn command_version() {
    Command::cargo_bin("firewallsync")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  Help
--------------------------------------------------------------------------------------*/

#[test]
fn command_help() {
    Command::cargo_bin("firewallsync")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  Missing Configuration
--------------------------------------------------------------------------------------*/

/// Without an API token the run fails during client construction, before any network I/O.
#[test]
fn command_missing_token() {
    Command::cargo_bin("firewallsync")
        .unwrap()
        .env_clear()
        .assert()
        .failure()
        .code(1);
}

#[test]
fn command_missing_firewall_id() {
    Command::cargo_bin("firewallsync")
        .unwrap()
        .env_clear()
        .env("DIGITALOCEAN_TOKEN", "test-token")
        .assert()
        .failure()
        .code(1);
}
