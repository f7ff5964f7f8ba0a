//! Command handlers for CLI subcommands.

use projectboard_intake::{submit, ProjectDraft, REJECTION_MESSAGE};
use projectboard_models::Project;
use projectboard_store::ProjectStore;
use tracing::info;

use crate::cli::{Commands, OutputFormat};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
pub fn execute(command: Commands, store: &ProjectStore) -> Result<()> {
    match command {
        Commands::Add {
            title,
            description,
            people,
            format,
        } => cmd_add(store, &title, &description, &people, format),
        Commands::Board => {
            // The board is handled separately in main
            Ok(())
        }
    }
}

fn cmd_add(
    store: &ProjectStore,
    title: &str,
    description: &str,
    people: &str,
    format: OutputFormat,
) -> Result<()> {
    let draft = ProjectDraft::new(title, description, people);

    match submit(store, &draft) {
        Ok(id) => {
            info!(project_id = %id, "Added project");
            println!("Added project '{}' ({})", title, id);
            println!();
            print_board(&store.snapshot(), format)?;
            Ok(())
        }
        Err(err) => {
            println!("{}", REJECTION_MESSAGE);
            Err(err.into())
        }
    }
}

fn print_board(projects: &[Project], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if projects.is_empty() {
                println!("No projects on the board.");
                return Ok(());
            }

            println!("{:<41}  {:<20}  {:<10}  PEOPLE", "ID", "TITLE", "STATUS");
            println!("{}", "-".repeat(80));
            for project in projects {
                println!(
                    "{:<41}  {:<20}  {:<10}  {}",
                    project.id,
                    truncate(&project.title, 20),
                    format!("{:?}", project.status),
                    project.people
                );
            }
            println!("\n{} project(s)", projects.len());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(projects)?;
            println!("{}", json);
        }
        OutputFormat::Brief => {
            for project in projects {
                println!("{}\t{}", project.id, project.title);
            }
        }
    }

    Ok(())
}

/// Truncates a string to the given length in characters, adding "..."
/// if truncated.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_add_accepts_valid_input() {
        let store = ProjectStore::new();

        cmd_add(&store, "Launch", "Ship the release", "3", OutputFormat::Brief).unwrap();

        let projects = store.snapshot();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Launch");
    }

    #[test]
    fn test_cmd_add_rejects_invalid_input() {
        let store = ProjectStore::new();

        let result = cmd_add(&store, "A", "Ship the release", "3", OutputFormat::Brief);
        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_print_board_empty() {
        // Should not panic on an empty board
        print_board(&[], OutputFormat::Table).unwrap();
        print_board(&[], OutputFormat::Json).unwrap();
        print_board(&[], OutputFormat::Brief).unwrap();
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Each é is one character, two bytes.
        let long = "é".repeat(21);
        assert_eq!(truncate(&long, 20), format!("{}...", "é".repeat(17)));

        let short = "é".repeat(11);
        assert_eq!(truncate(&short, 20), short);
    }

    #[test]
    fn test_cmd_add_table_with_multibyte_title() {
        let store = ProjectStore::new();

        let title = "é".repeat(11);
        cmd_add(
            &store,
            &title,
            "Accents everywhere",
            "2",
            OutputFormat::Table,
        )
        .unwrap();

        assert_eq!(store.len(), 1);
    }
}
