use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use protoyard_testing::TestWorld;

#[test]
fn test_no_command_on_empty_workspace() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("protoyard");
    world.configure_command(&mut cmd);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Get started:"))
        .stdout(predicate::str::contains("protoyard project new"));
}

#[test]
fn test_no_command_after_aggregation() {
    let world = TestWorld::new().with_project("alpha");
    assert!(world.run(&["aggregate"]).unwrap().success());

    let result = world.run(&[]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Indexed projects: 1"));
}
