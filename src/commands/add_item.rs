use billing_service::application::BillingStore;
use billing_service::domain::billing::LineItemInput;
use billing_service::domain::errors::DomainError;
use uuid::Uuid;

pub fn run(
    store: &mut BillingStore,
    id: Uuid,
    name: String,
    price: String,
    quantity: String,
) -> Result<(), DomainError> {
    let input = LineItemInput {
        name,
        price,
        quantity,
    };
    store.add_item(id, &input)?;

    if let Some(list) = store.get(id) {
        if let Some(item) = list.items.last() {
            println!(
                "Added {} (₹{} × Q.{} = ₹{})",
                item.name, item.price, item.quantity, item.total
            );
        }
        println!("Grand total: ₹{}", list.grand_total);
    }
    Ok(())
}
