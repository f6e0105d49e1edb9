use billing_service::application::BillingStore;
use billing_service::domain::errors::DomainError;

pub fn run(
    store: &mut BillingStore,
    title: &str,
    address: Option<String>,
) -> Result<(), DomainError> {
    let id = store.create_list(title, address)?;
    if let Some(list) = store.get(id) {
        println!("Created list \"{}\" ({})", list.title, id);
    }
    Ok(())
}
