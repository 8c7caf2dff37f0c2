use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(CounterpartyId);

/// A fixed, named sender/recipient entity shown with an avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    pub id: CounterpartyId,
    pub display_name: String,
    pub avatar: String,
}

impl Counterparty {
    pub fn new(id: i64, display_name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: CounterpartyId(id),
            display_name: display_name.into(),
            avatar: avatar.into(),
        }
    }
}

/// The local operator shown next to the mine control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorProfile {
    pub id: CounterpartyId,
    pub display_name: String,
    pub avatar: String,
    /// Static label; never derived from chain state.
    #[serde(default)]
    pub balance_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterparty_id_serializes_as_bare_number() {
        let encoded = serde_json::to_string(&CounterpartyId(7)).expect("encode");
        assert_eq!(encoded, "7");
    }

    #[test]
    fn roster_entry_parses_from_toml() {
        let raw = r#"
            id = 2
            display_name = "Bob"
            avatar = "https://avatars.example/bob.png"
        "#;
        let parsed: Counterparty = toml::from_str(raw).expect("parse");
        assert_eq!(
            parsed,
            Counterparty::new(2, "Bob", "https://avatars.example/bob.png")
        );
    }

    #[test]
    fn operator_balance_label_is_optional() {
        let raw = r#"
            id = 0
            display_name = "Operator"
            avatar = "https://avatars.example/operator.png"
        "#;
        let parsed: OperatorProfile = toml::from_str(raw).expect("parse");
        assert!(parsed.balance_label.is_empty());
    }
}
