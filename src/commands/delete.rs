use billing_service::application::BillingStore;
use billing_service::domain::errors::DomainError;
use uuid::Uuid;

pub fn run(store: &mut BillingStore, id: Uuid) -> Result<(), DomainError> {
    store.delete_list(id)?;
    println!("Deleted list {id}");
    Ok(())
}
