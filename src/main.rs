use ptpkit::{init_logging, JsonSettingsStore, MemorySettingsStore, ProjectManager, SettingsStore};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("PTPKit {}", ptpkit::VERSION);

    let settings: Box<dyn SettingsStore> = match JsonSettingsStore::open_default() {
        Ok(store) => {
            tracing::debug!("Settings at {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!("Settings unavailable, this session will not be remembered: {}", e);
            Box::new(MemorySettingsStore::new())
        }
    };
    let mut project = ProjectManager::new(settings);

    match std::env::args_os().nth(1) {
        Some(dir) => {
            project.set_project_dir(PathBuf::from(dir));
        }
        None => {
            if !project.load_last_project() {
                tracing::info!("No project to reopen. Usage: ptpkit <project dir>");
                return Ok(());
            }
        }
    }

    let (path, name) = project.load_last_or_first_or_create();
    tracing::info!(
        "Working path {} ({} elements, {} translations)",
        name,
        path.len(),
        path.translation_count()
    );
    tracing::info!("Path files: {}", project.list_paths().join(", "));
    for dir in project.recent_projects() {
        tracing::info!("Recent project: {}", dir.display());
    }

    Ok(())
}
