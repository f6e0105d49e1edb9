//! Invoice HTML rendering and the external PDF rasterizer adapter.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::process::Command;

use crate::domain::billing::BillingList;
use crate::domain::errors::DomainError;
use crate::domain::ports::PdfRenderer;

/// Rasterizer invoked when none is configured.
pub const DEFAULT_PDF_COMMAND: &str = "wkhtmltopdf";

/// Render the invoice document for a list.
///
/// Item rows read the stored `name`, `quantity`, `price`, and `total` fields
/// verbatim; nothing is recomputed here. The output is a pure function of the
/// list value.
pub fn invoice_html(list: &BillingList) -> String {
    let rows = if list.items.is_empty() {
        "<tr><td colspan='4'>No items found</td></tr>".to_string()
    } else {
        list.items
            .iter()
            .map(|item| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&item.name),
                    item.quantity,
                    item.price,
                    item.total
                )
            })
            .collect::<Vec<_>>()
            .join("\n      ")
    };

    format!(
        r#"<html>
  <head>
    <style>
      body {{ font-family: Arial; padding: 20px; color: #333; }}
      h1 {{ text-align: center; }}
      table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
      th, td {{ border: 1px solid #999; padding: 8px; text-align: left; }}
      th {{ background-color: #f2f2f2; }}
      .total {{ text-align: right; font-weight: bold; padding-top: 10px; }}
    </style>
  </head>
  <body>
    <h1>{title}</h1>
    <p><strong>Date:</strong> {date}</p>
    <p><strong>Address:</strong> {address}</p>
    <table>
      <tr><th>Item</th><th>Qty</th><th>Price</th><th>Total</th></tr>
      {rows}
    </table>
    <p class="total">Grand Total: {grand_total}</p>
  </body>
</html>
"#,
        title = escape(&list.title),
        date = list.date_created.format("%-d %B %Y"),
        address = escape(list.address.as_deref().unwrap_or("N/A")),
        rows = rows,
        grand_total = list.grand_total,
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// `PdfRenderer` backed by an external command.
///
/// The HTML is written next to the target and the program is invoked as
/// `<program> <html> <pdf>`; the rasterizer's stderr becomes the error
/// message on failure.
pub struct HtmlToPdfCommand {
    program: String,
    out_dir: PathBuf,
}

impl HtmlToPdfCommand {
    pub fn new(program: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            out_dir: out_dir.into(),
        }
    }
}

#[async_trait]
impl PdfRenderer for HtmlToPdfCommand {
    async fn render(&self, html: &str, file_stem: &str) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.out_dir)
            .await
            .map_err(|e| DomainError::Export(e.to_string()))?;

        let html_path = self.out_dir.join(format!("{file_stem}.html"));
        fs::write(&html_path, html)
            .await
            .map_err(|e| DomainError::Export(e.to_string()))?;
        let pdf_path = self.out_dir.join(format!("{file_stem}.pdf"));

        let output = Command::new(&self.program)
            .arg(&html_path)
            .arg(&pdf_path)
            .output()
            .await
            .map_err(|err| {
                if err.kind() == ErrorKind::NotFound {
                    DomainError::Export(format!("{} is not available in PATH", self.program))
                } else {
                    DomainError::Export(err.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr
            };
            return Err(DomainError::Export(message));
        }

        Ok(pdf_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::{zero_amount, LineItemInput, DEFAULT_CURRENCY};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn groceries() -> BillingList {
        let item = LineItemInput {
            name: "Milk".to_string(),
            price: "2.50".to_string(),
            quantity: "2".to_string(),
        }
        .parse()
        .unwrap();
        BillingList {
            id: Uuid::new_v4(),
            title: "Groceries".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            timezone: "+05:30".to_string(),
            date_created: chrono::Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
            address: None,
            items: vec![item.clone()],
            grand_total: crate::domain::billing::grand_total(&[item]),
        }
    }

    #[test]
    fn invoice_contains_header_rows_and_grand_total() {
        let html = invoice_html(&groceries());
        assert!(html.contains("<h1>Groceries</h1>"));
        assert!(html.contains("<strong>Date:</strong> 5 March 2024"));
        assert!(html.contains("<strong>Address:</strong> N/A"));
        assert!(html.contains("<tr><td>Milk</td><td>2</td><td>2.50</td><td>5.00</td></tr>"));
        assert!(html.contains("Grand Total: 5.00"));
    }

    #[test]
    fn invoice_is_deterministic() {
        let list = groceries();
        assert_eq!(invoice_html(&list), invoice_html(&list));
    }

    #[test]
    fn empty_items_render_the_placeholder_row() {
        let mut list = groceries();
        list.items.clear();
        list.grand_total = zero_amount();
        let html = invoice_html(&list);
        assert!(html.contains("<tr><td colspan='4'>No items found</td></tr>"));
        assert!(html.contains("Grand Total: 0.00"));
    }

    #[test]
    fn markup_in_user_text_is_escaped() {
        let mut list = groceries();
        list.address = Some("12 Main Road <b>& Co</b>".to_string());
        list.items[0].name = "Milk <1L>".to_string();
        let html = invoice_html(&list);
        assert!(html.contains("12 Main Road &lt;b&gt;&amp; Co&lt;/b&gt;"));
        assert!(html.contains("Milk &lt;1L&gt;"));
        assert!(!html.contains("<b>& Co</b>"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn render_returns_the_pdf_path_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = HtmlToPdfCommand::new("true", dir.path());
        let path = renderer.render("<html></html>", "Invoice-test").await.unwrap();
        assert!(path.ends_with("Invoice-test.pdf"));
        assert!(dir.path().join("Invoice-test.html").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn render_surfaces_rasterizer_failure() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = HtmlToPdfCommand::new("false", dir.path());
        let err = renderer.render("<html></html>", "Invoice-test").await.unwrap_err();
        assert!(matches!(err, DomainError::Export(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn render_reports_a_missing_rasterizer() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = HtmlToPdfCommand::new("billing-no-such-rasterizer", dir.path());
        let err = renderer.render("<html></html>", "Invoice-test").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "PDF export failed: billing-no-such-rasterizer is not available in PATH"
        );
    }
}
