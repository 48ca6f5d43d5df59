use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::errors::{AppError, AppResult};
use crate::store::open_store;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Names { set } = cmd {
        let mut store = open_store(cfg)?;

        match set.as_deref() {
            Some([first, second]) => {
                let names = SettingsLogic::save_names(store.as_mut(), first, second)?;
                success(format!(
                    "Names updated: {} & {}",
                    names.first(),
                    names.second()
                ));
            }
            Some(_) => {
                return Err(AppError::Validation(
                    "--set takes exactly two names.".to_string(),
                ));
            }
            None => {
                let names = store.partner_names()?;
                println!("{} & {}", names.first(), names.second());
            }
        }
    }

    Ok(())
}
