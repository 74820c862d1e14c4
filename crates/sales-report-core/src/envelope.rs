use html_escape::{encode_double_quoted_attribute, encode_text};
use url::Url;

use sales_report_parser::StoreRecord;

use crate::metrics::ReportMetrics;

/// A composed report ready for the mail transport.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEnvelope {
    pub recipient: String,
    pub subject: String,
    pub html: String,
}

impl NotificationEnvelope {
    pub fn compose(
        recipient: &str,
        record: &StoreRecord,
        metrics: &ReportMetrics,
        chart: &Url,
    ) -> Self {
        let shop = record.shop_name().unwrap_or("Unnamed store");
        let total_sales = record.total_sales().unwrap_or("n/a");

        let html = format!(
            r#"
<h2>Store Report: {shop}</h2>
<p><strong>Total Sales:</strong> {total_sales}</p>
<ul>
  <li><strong>Product Needing Boost:</strong> {weakest}</li>
  <li><strong>Focus Gender:</strong> {gender}</li>
  <li><strong>Discount Effective:</strong> {discount}</li>
  <li><strong>Best Product for Females:</strong> {best_female}</li>
  <li><strong>Best Product for Males:</strong> {best_male}</li>
</ul>
<img src="{chart}" alt="Product Sales Chart" />
"#,
            shop = encode_text(shop),
            total_sales = encode_text(total_sales),
            weakest = metrics.weakest_product,
            gender = metrics.focus_gender,
            discount = metrics.discount_verdict(),
            best_female = metrics.best_product_female,
            best_male = metrics.best_product_male,
            chart = encode_double_quoted_attribute(chart.as_str()),
        );

        Self {
            recipient: recipient.to_string(),
            subject: format!("Sales Report for {shop}"),
            html,
        }
    }
}
