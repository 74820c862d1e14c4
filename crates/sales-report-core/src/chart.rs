//! Bar chart requests for the remote chart renderer. Nothing here touches the
//! network: the URL carries the whole chart description and only resolves to an
//! image when a mail client fetches it.

use serde_json::{json, Value};
use url::Url;

use crate::metrics::ProductShareSet;

pub const CHART_TYPE: &str = "bar";
pub const DATASET_LABEL: &str = "Product Sales (%)";
pub const CHART_QUERY_PARAM: &str = "c";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSpec {
    pub fn from_shares(shares: &ProductShareSet) -> Self {
        let (labels, values) = shares
            .iter()
            .map(|(product, share)| (product.label().to_string(), share))
            .unzip();
        Self { labels, values }
    }

    pub fn to_config(&self) -> Value {
        json!({
            "type": CHART_TYPE,
            "data": {
                "labels": self.labels,
                "datasets": [{
                    "label": DATASET_LABEL,
                    "data": self.values,
                }],
            },
        })
    }

    /// Renderer URL with the chart description JSON in the `c` query parameter.
    pub fn render_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut()
            .append_pair(CHART_QUERY_PARAM, &self.to_config().to_string());
        url
    }
}
