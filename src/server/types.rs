use serde::Deserialize;

/// Form fields Twilio posts for an inbound message. Only `Body` is relayed.
#[derive(Debug, Default, Deserialize)]
pub struct TwilioInbound {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: Option<String>,
}
