use std::collections::HashSet;

use crab_bot::commands;

#[test]
fn test_all_commands_returns_correct_count() {
    let cmds = commands::all();
    assert_eq!(
        cmds.len(),
        14,
        "Expected 14 commands (7 core + 5 info + 2 admin), got {}",
        cmds.len()
    );
}

#[test]
fn test_all_commands_contain_expected_names() {
    let cmds = commands::all();
    let names: HashSet<&str> = cmds.iter().map(|cmd| cmd.name.as_str()).collect();

    let expected = [
        // Core commands
        "setup",
        "catch",
        "profile",
        "shop",
        "buy",
        "inventory",
        "leaderboard",
        // Info commands
        "ping",
        "about",
        "stats",
        "invite",
        "help",
        // Admin commands
        "avatar",
        "shutdown",
    ];

    for name in expected {
        assert!(names.contains(name), "missing command: {name}");
    }
}

#[test]
fn test_commands_have_descriptions() {
    for cmd in commands::all() {
        assert!(
            cmd.description.is_some(),
            "command {} has no description",
            cmd.name
        );
    }
}
