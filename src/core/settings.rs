use crate::errors::AppResult;
use crate::models::settings::PartnerNames;
use crate::store::Store;

pub struct SettingsLogic;

impl SettingsLogic {
    pub fn save_names(store: &mut dyn Store, first: &str, second: &str) -> AppResult<PartnerNames> {
        let names = PartnerNames::new(first, second)?;
        store.save_partner_names(&names)?;
        store.audit(
            "names",
            "partner_names",
            &format!("{} & {}", names.first(), names.second()),
        )?;
        Ok(names)
    }
}
