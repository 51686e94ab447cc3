//! Decision record returned to the game server

use serde::{Deserialize, Serialize};

use crate::attack::Attack;
use crate::board::Position;

/// The bot's decision for one evaluation call.
///
/// Absent fields serialize as `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub attack: Option<Attack>,
    pub upgrade: Option<Position>,
}

impl ActionRecord {
    pub fn with_attack(attack: Option<Attack>) -> Self {
        Self { attack, upgrade: None }
    }

    pub fn with_upgrade(upgrade: Option<Position>) -> Self {
        Self { attack: None, upgrade }
    }

    pub fn is_empty(&self) -> bool {
        self.attack.is_none() && self.upgrade.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record_serializes_nulls() {
        let json = serde_json::to_value(ActionRecord::default()).unwrap();
        assert_eq!(json, json!({"attack": null, "upgrade": null}));
    }

    #[test]
    fn test_upgrade_record_wire_format() {
        let record = ActionRecord::with_upgrade(Some(Position::new(3, 1)));
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json, json!({"attack": null, "upgrade": [3, 1]}));
        assert!(!record.is_empty());
    }

    #[test]
    fn test_parse_attack_record() {
        let record: ActionRecord =
            serde_json::from_value(json!({"attack": [[0, 1], [1, 1]], "upgrade": null})).unwrap();
        let attack = record.attack.unwrap();
        assert_eq!(attack.from, Position::new(0, 1));
        assert_eq!(attack.to, Position::new(1, 1));
    }
}
