use billing_service::application::BillingStore;
use billing_service::domain::billing::SortOrder;
use billing_service::domain::errors::DomainError;

pub fn run(
    store: &BillingStore,
    search: Option<&str>,
    order: SortOrder,
) -> Result<(), DomainError> {
    let hits = store.select(search, order);
    if hits.is_empty() {
        println!("No billing lists found.");
        return Ok(());
    }

    let total = store.lists().len();
    println!(
        "Showing {} of {} list{}",
        hits.len(),
        total,
        if total == 1 { "" } else { "s" }
    );
    for list in hits {
        println!(
            "{}  {}  {}  ({} item{})",
            list.id,
            list.date_created.format("%-d %B %Y"),
            list.title,
            list.items.len(),
            if list.items.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
