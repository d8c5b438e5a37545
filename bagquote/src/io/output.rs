use crate::config::QuoteConfig;
use plano_rs::io::ext_repr::{ExtOrder, ExtQuote};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct QuoteOutput {
    #[serde(flatten)]
    pub order: ExtOrder,
    pub quote: ExtQuote,
    pub config: QuoteConfig,
}
