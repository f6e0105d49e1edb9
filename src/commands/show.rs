use billing_service::application::BillingStore;
use billing_service::domain::billing::live_total;
use billing_service::domain::errors::DomainError;
use uuid::Uuid;

pub fn run(store: &BillingStore, id: Uuid) -> Result<(), DomainError> {
    let list = store.get(id).ok_or(DomainError::NotFound)?;

    println!("{}", list.title);
    println!("DATE - {}", list.date_created.format("%-d %B %Y"));
    if let Some(address) = &list.address {
        println!("Address: {address}");
    }

    if list.items.is_empty() {
        println!("No items added yet.");
    } else {
        for item in &list.items {
            println!("{}", item.name);
            println!("  ₹{} × Q.{} = ₹{}", item.price, item.quantity, item.total);
        }
    }

    // Running total recomputed from price and quantity, not the stored totals.
    println!("Total: ₹{}", live_total(list));
    Ok(())
}
