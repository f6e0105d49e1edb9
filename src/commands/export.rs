use std::path::Path;

use billing_service::application::BillingStore;
use billing_service::domain::errors::DomainError;
use billing_service::domain::ports::PdfRenderer;
use billing_service::infrastructure::pdf::{invoice_html, HtmlToPdfCommand};
use uuid::Uuid;

pub async fn run(
    store: &BillingStore,
    id: Uuid,
    program: &str,
    out_dir: &Path,
) -> Result<(), DomainError> {
    let list = store.get(id).ok_or(DomainError::NotFound)?;
    let html = invoice_html(list);

    let renderer = HtmlToPdfCommand::new(program, out_dir);
    let path = renderer.render(&html, &format!("Invoice-{}", list.id)).await?;
    println!("PDF written to {}", path.display());
    Ok(())
}
