use crate::cli::parser::{Commands, StateAction};
use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::store::{BlobStore, Store};
use crate::ui::messages::success;

/// Export/import the encoded state of the blob backend.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::State { action } = cmd else {
        return Ok(());
    };

    if cfg.backend != Backend::Blob {
        return Err(AppError::Unsupported {
            backend: cfg.backend.as_str(),
            operation: "state",
        });
    }
    cfg.ensure_storage_reachable()?;
    let mut store = BlobStore::open(&cfg.blob_file)?;

    match action {
        StateAction::Export => {
            println!("{}", store.export()?);
        }
        StateAction::Import { data } => {
            store.import(data)?;
            let summary = {
                let d = store.data();
                format!(
                    "{} event(s), {} blockout(s), {} note(s), {} notification(s)",
                    d.events.len(),
                    d.blockouts.len(),
                    d.love_notes.len(),
                    d.notifications.len()
                )
            };
            store.audit("import", &cfg.blob_file, &summary)?;
            success(format!("State imported: {}.", summary));
        }
    }

    Ok(())
}
