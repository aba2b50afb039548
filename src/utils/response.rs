use serde::Serialize;

/// `{message, data}` body shared by every successful response.
#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

/// List responses also echo the filter that was applied.
#[derive(Serialize, Debug)]
pub struct ListEnvelope<T> {
    pub message: String,
    pub data: Vec<T>,
    pub filter: String,
}

impl<T> Envelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Envelope {
            message: message.into(),
            data,
        }
    }
}

impl<T> ListEnvelope<T> {
    pub fn new(message: impl Into<String>, data: Vec<T>, filter: impl Into<String>) -> Self {
        ListEnvelope {
            message: message.into(),
            data,
            filter: filter.into(),
        }
    }
}
