use notekeep::cli::args::{Args, Command, NoteFields};
use clap::Parser;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notekeep", "1234"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_new_command_with_all_fields_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "notekeep", "new", "-t", "Groceries", "-b", "milk", "-c", "#FF5722", "-i",
        "/tmp/cat.png", "-l", "example.com",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::New { fields } => assert_eq!(
            fields,
            NoteFields {
                title: Some("Groceries".to_string()),
                body: Some("milk".to_string()),
                color: Some("#FF5722".to_string()),
                image: Some("/tmp/cat.png".to_string()),
                link: Some("example.com".to_string()),
            }
        ),
        _ => panic!("Expected New command"),
    }
    assert_eq!(parsed.database, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_new_command_without_title_when_parsing_then_title_is_none() {
    let parsed = Args::try_parse_from(vec!["notekeep", "new", "--body", "text"]).unwrap();

    match parsed.command {
        Command::New { fields } => {
            assert_eq!(fields.title, None);
            assert_eq!(fields.body.as_deref(), Some("text"));
        }
        _ => panic!("Expected New command"),
    }
}

#[test]
fn given_edit_command_with_removals_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notekeep", "edit", "7", "--title", "Renamed", "--remove-image", "--remove-link"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Edit {
            note_id,
            fields,
            remove_image,
            remove_link,
        } => {
            assert_eq!(note_id, 7);
            assert_eq!(fields.title.as_deref(), Some("Renamed"));
            assert!(remove_image);
            assert!(remove_link);
        }
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn given_image_and_remove_image_when_parsing_then_fails() {
    let args = vec!["notekeep", "edit", "7", "--image", "x.png", "--remove-image"];

    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_delete_command_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from(vec!["notekeep", "delete", "12"]).unwrap();

    match parsed.command {
        Command::Delete { note_id } => assert_eq!(note_id, 12),
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_list_command_with_search_when_parsing_then_captures_search() {
    let parsed = Args::try_parse_from(vec!["notekeep", "list", "kazan"]).unwrap();

    match parsed.command {
        Command::List { search } => assert_eq!(search.as_deref(), Some("kazan")),
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_global_database_flag_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec!["notekeep", "list", "-d", "/path/to/notes.db"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(
        parsed.database,
        Some(std::path::PathBuf::from("/path/to/notes.db"))
    );
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    let parsed = Args::try_parse_from(vec!["notekeep", "-vv", "list"]).unwrap();

    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_json_flag_when_parsing_view_command_then_json_is_true() {
    let parsed = Args::try_parse_from(vec!["notekeep", "view", "--json", "3"]).unwrap();

    match parsed.command {
        Command::View { note_id, json } => {
            assert_eq!(note_id, 3);
            assert!(json);
        }
        _ => panic!("Expected View command"),
    }
}

#[test]
fn given_language_command_without_code_when_parsing_then_code_is_none() {
    let parsed = Args::try_parse_from(vec!["notekeep", "language"]).unwrap();

    match parsed.command {
        Command::Language { code } => assert_eq!(code, None),
        _ => panic!("Expected Language command"),
    }
}
