// src/main.rs

use project_tracker::{logging, Project, Task};
use tracing::debug;

fn main() {
    if let Err(err) = run_main() {
        eprintln!("project-tracker error: {err:?}");
        std::process::exit(1);
    }
}

/// Build the sample project and print its prerequisite map.
fn run_main() -> anyhow::Result<()> {
    logging::init_logging(None)?;

    let mut project = Project::new("my test project", "testing");
    let call_barrett = Task::new("call barrett", "");
    let call_brandon = Task::new("call brandon", "");
    let research = Task::new("research", "");

    let root = project.root().clone();
    project.add_task(&root, call_barrett.clone())?;
    project.add_task(&call_barrett, call_brandon)?;
    project.add_task(&root, research)?;

    debug!(tasks = project.len(), "sample project built");
    println!("{project}");
    Ok(())
}
