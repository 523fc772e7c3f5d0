use serde::Deserialize;

/// Raw OData system query options, exactly as received.
///
/// Every option is kept as text; interpretation happens when the plan is
/// built, so a malformed value can degrade to a no-op for its own stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryOptions {
    #[serde(rename = "$filter")]
    pub filter: Option<String>,
    #[serde(rename = "$orderby")]
    pub order_by: Option<String>,
    #[serde(rename = "$top")]
    pub top: Option<String>,
    #[serde(rename = "$skip")]
    pub skip: Option<String>,
    #[serde(rename = "$count")]
    pub count: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: &str) -> Self { self.filter = Some(filter.to_string()); self }
    pub fn with_order_by(mut self, order_by: &str) -> Self { self.order_by = Some(order_by.to_string()); self }
    pub fn with_top(mut self, top: &str) -> Self { self.top = Some(top.to_string()); self }
    pub fn with_skip(mut self, skip: &str) -> Self { self.skip = Some(skip.to_string()); self }
    pub fn with_count(mut self, count: &str) -> Self { self.count = Some(count.to_string()); self }

    /// Collect options from decoded query-string pairs.
    ///
    /// Unknown keys are skipped. When a `$` option repeats, the first value
    /// wins, so a duplicate never discards the other options.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "$filter" => &mut options.filter,
                "$orderby" => &mut options.order_by,
                "$top" => &mut options.top,
                "$skip" => &mut options.skip,
                "$count" => &mut options.count,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        options
    }

    /// `$count` is honored only for the exact value `true`.
    pub fn wants_count(&self) -> bool {
        self.count.as_deref() == Some("true")
    }
}
