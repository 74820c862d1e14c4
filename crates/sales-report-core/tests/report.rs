use serde_json::json;
use url::Url;

use sales_report_core::chart::ChartSpec;
use sales_report_core::envelope::NotificationEnvelope;
use sales_report_core::metrics::{derive_metrics, ProductShareSet};
use sales_report_parser::parse_store_records;

fn chart_base() -> Url {
    Url::parse("https://quickchart.io/chart").unwrap()
}

#[test]
fn chart_spec_keeps_product_order() {
    let spec = ChartSpec::from_shares(&ProductShareSet::new(20.0, 50.0, 30.0, 0.0));
    assert_eq!(spec.labels, ["Product 1", "Product 2", "Product 3", "Other"]);
    assert_eq!(spec.values, [20.0, 50.0, 30.0, 0.0]);
}

#[test]
fn chart_url_embeds_bar_config() {
    let spec = ChartSpec::from_shares(&ProductShareSet::new(20.0, 50.0, 30.0, 0.0));
    let url = spec.render_url(&chart_base());

    assert_eq!(url.host_str(), Some("quickchart.io"));
    assert_eq!(url.path(), "/chart");

    let (_, encoded) = url
        .query_pairs()
        .find(|(key, _)| key == "c")
        .expect("chart parameter present");
    let config: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(
        config,
        json!({
            "type": "bar",
            "data": {
                "labels": ["Product 1", "Product 2", "Product 3", "Other"],
                "datasets": [{
                    "label": "Product Sales (%)",
                    "data": [20.0, 50.0, 30.0, 0.0],
                }],
            },
        })
    );
    assert!(!url.as_str().contains(' '));
}

#[test]
fn chart_url_keeps_existing_query() {
    let base = Url::parse("https://charts.internal/render?width=500").unwrap();
    let url = ChartSpec::from_shares(&ProductShareSet::new(1.0, 2.0, 3.0, 4.0)).render_url(&base);
    let keys: Vec<_> = url.query_pairs().map(|(key, _)| key.into_owned()).collect();
    assert_eq!(keys, ["width", "c"]);
}

#[test]
fn envelope_carries_metrics_and_chart() {
    let content = "shopname,Total Sales,Store manager id,Product 1 Sales,Product 2 Sales,Product 3 Sales,Other Product,Female buyers,Discount offered\n\
                   Downtown,125000,downtown@example.com,35%,25%,30%,10%,62%,12%\n";
    let record = parse_store_records(content).unwrap().remove(0);
    let metrics = derive_metrics(&record).unwrap();
    let chart = ChartSpec::from_shares(&metrics.shares).render_url(&chart_base());

    let envelope = NotificationEnvelope::compose("downtown@example.com", &record, &metrics, &chart);

    assert_eq!(envelope.recipient, "downtown@example.com");
    assert_eq!(envelope.subject, "Sales Report for Downtown");
    assert!(envelope.html.contains("<h2>Store Report: Downtown</h2>"));
    assert!(envelope.html.contains("<strong>Total Sales:</strong> 125000"));
    assert!(envelope.html.contains("<strong>Product Needing Boost:</strong> Other"));
    assert!(envelope.html.contains("<strong>Focus Gender:</strong> Female"));
    assert!(envelope.html.contains("<strong>Discount Effective:</strong> Yes"));
    assert!(envelope.html.contains("<strong>Best Product for Females:</strong> Product 1"));
    assert!(envelope.html.contains("<strong>Best Product for Males:</strong> Product 1"));
    assert!(envelope.html.contains(r#"<img src="https://quickchart.io/chart?c="#));
    assert!(envelope.html.contains(r#"alt="Product Sales Chart""#));
}

#[test]
fn envelope_escapes_store_text() {
    let content = "shopname,Total Sales,Store manager id,Product 1 Sales,Product 2 Sales,Product 3 Sales,Other Product,Female buyers,Discount offered\n\
                   <b>Smith & Sons</b>,1000,s@example.com,25%,25%,25%,25%,50%,5%\n";
    let record = parse_store_records(content).unwrap().remove(0);
    let metrics = derive_metrics(&record).unwrap();
    let chart = ChartSpec::from_shares(&metrics.shares).render_url(&chart_base());

    let envelope = NotificationEnvelope::compose("s@example.com", &record, &metrics, &chart);

    assert!(envelope
        .html
        .contains("Store Report: &lt;b&gt;Smith &amp; Sons&lt;/b&gt;"));
    assert!(!envelope.html.contains("<b>Smith"));
}

#[test]
fn envelope_escapes_chart_url_attribute() {
    let content = "shopname,Total Sales,Store manager id,Product 1 Sales,Product 2 Sales,Product 3 Sales,Other Product,Female buyers,Discount offered\n\
                   Harbor,87000,harbor@example.com,20%,50%,30%,0%,60%,15%\n";
    let record = parse_store_records(content).unwrap().remove(0);
    let metrics = derive_metrics(&record).unwrap();
    let base = Url::parse("https://charts.internal/render?width=500").unwrap();
    let chart = ChartSpec::from_shares(&metrics.shares).render_url(&base);

    let envelope = NotificationEnvelope::compose("harbor@example.com", &record, &metrics, &chart);

    assert!(envelope
        .html
        .contains(r#"<img src="https://charts.internal/render?width=500&amp;c="#));
    assert!(!envelope.html.contains("width=500&c="));
}
