//! Scripted demo of the task list.
//!
//! Plays a short session of user actions against a store and prints the list
//! after each step, the way the widget would render it.

use tasklist::{Config, TaskInput, TaskListEnvironment, TaskListStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn render(store: &TaskListStore) {
    if store.state().is_empty() {
        println!("  No tasks yet. Start adding!");
        return;
    }

    for row in store.rows() {
        let status = if row.task.completed { "✓" } else { " " };
        match row.draft {
            Some(draft) => println!("  {}. [{}] <editing: {}>", row.index, status, draft),
            None => println!("  {}. [{}] {}", row.index, status, row.task.text),
        }
    }
    println!(
        "  ({} done, {} remaining)",
        store.state().completed_count(),
        store.state().remaining_count()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level)?)
        .init();

    info!("=== Task List Demo ===");

    let mut store = TaskListStore::new(TaskListEnvironment::live());
    let mut input = TaskInput::new();

    println!("\nStarting list:");
    render(&store);

    for text in &config.seed {
        input.set(text.as_str());
        input.submit(&mut store);
    }

    println!("\nAdding tasks...");
    for text in ["Buy milk", "Write documentation", "   ", "Deploy to production"] {
        input.set(text);
        if input.submit(&mut store).is_none() {
            info!("Skipped blank input");
        }
    }
    render(&store);

    let ids: Vec<_> = store.state().ids().collect();
    let Some(&first) = ids.first() else {
        return Ok(());
    };

    println!("\nCompleting the first task...");
    store.toggle_complete(&first);
    render(&store);

    println!("\nEditing the first task...");
    store.start_edit(&first);
    store.update_draft("Buy oat milk")?;
    render(&store);
    store.commit_edit();
    render(&store);

    println!("\nDragging the first task to the bottom...");
    store.move_task(0, Some(store.state().len() - 1));
    render(&store);

    if let Some(&last) = ids.last() {
        println!("\nDeleting the last task added...");
        store.delete_task(&last);
        render(&store);
    }

    info!("=== Demo Complete ===");
    Ok(())
}
