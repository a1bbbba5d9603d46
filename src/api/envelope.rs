//! Response body shapes
//!
//! Some endpoints wrap their payload in `{ "data": ... }` (optionally with
//! pagination metadata), others return it bare. Both decode to the payload.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(data) => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn decodes_wrapped_and_bare_lists() {
        let wrapped: Envelope<Vec<Item>> =
            serde_json::from_str(r#"{"data":[{"id":"a"}],"pagination":{"page":1}}"#).unwrap();
        let bare: Envelope<Vec<Item>> = serde_json::from_str(r#"[{"id":"a"}]"#).unwrap();

        assert_eq!(wrapped.into_inner(), vec![Item { id: "a".into() }]);
        assert_eq!(bare.into_inner(), vec![Item { id: "a".into() }]);
    }

    #[test]
    fn decodes_bare_object() {
        let bare: Envelope<Item> = serde_json::from_str(r#"{"id":"b"}"#).unwrap();
        assert_eq!(bare.into_inner(), Item { id: "b".into() });
    }
}
