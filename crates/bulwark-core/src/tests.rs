#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::error::PlacementError;
    use crate::events::GameEvent;
    use crate::state::{GameStateSnapshot, SaveRecord};
    use crate::types::{ColorTag, Position, SimTime};

    #[test]
    fn test_tower_kind_ids_round_trip() {
        for kind in TowerKind::ALL {
            assert_eq!(TowerKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(TowerKind::from_id("laser"), None);
    }

    #[test]
    fn test_tower_kind_display_names() {
        let names: Vec<&str> = TowerKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            ["Basic", "Sniper", "Rapid", "Heavy", "Poison", "Frost", "Tesla", "Mortar"]
        );
        for kind in TowerKind::ALL {
            assert_eq!(kind.name().to_lowercase(), kind.id());
        }
    }

    #[test]
    fn test_hotkeys_follow_catalog_order() {
        assert_eq!(TowerKind::from_hotkey(1), Some(TowerKind::Basic));
        assert_eq!(TowerKind::from_hotkey(6), Some(TowerKind::Frost));
        assert_eq!(TowerKind::from_hotkey(8), Some(TowerKind::Mortar));
        assert_eq!(TowerKind::from_hotkey(0), None);
        assert_eq!(TowerKind::from_hotkey(9), None);
    }

    #[test]
    fn test_tower_kind_serializes_as_catalog_id() {
        let json = serde_json::to_string(&TowerKind::Tesla).unwrap();
        assert_eq!(json, "\"tesla\"");
    }

    /// PlayerCommand is a tagged union; omitted `tower` falls back to `None`.
    #[test]
    fn test_place_tower_command_shape() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"PlaceTower","x":10.0,"y":20.0}"#).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::PlaceTower {
                x: 10.0,
                y: 20.0,
                tower: None
            }
        );

        let cmd: PlayerCommand = serde_json::from_str(
            r#"{"type":"PlaceTower","x":1.0,"y":2.0,"tower":"frost"}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::PlaceTower {
                x: 1.0,
                y: 2.0,
                tower: Some(TowerKind::Frost)
            }
        );
    }

    #[test]
    fn test_commands_serde() {
        let commands = vec![
            PlayerCommand::UpgradeTowerAt { x: 3.0, y: 4.0 },
            PlayerCommand::SelectTowerType {
                tower: TowerKind::Mortar,
            },
            PlayerCommand::CollectPowerUpAt { x: 0.0, y: 0.0 },
            PlayerCommand::CollectAllPowerUps,
            PlayerCommand::SpawnWave,
            PlayerCommand::SendWaves { count: 3 },
            PlayerCommand::ToggleTimeScale,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_rejection_event_carries_reason() {
        let event = GameEvent::PlacementRejected {
            reason: PlacementError::InsufficientFunds { cost: 60, gold: 10 },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "PlacementRejected");
        assert_eq!(json["reason"]["type"], "InsufficientFunds");
        assert_eq!(json["reason"]["cost"], 60);
    }

    #[test]
    fn test_placement_error_messages() {
        let err = PlacementError::InsufficientFunds { cost: 60, gold: 10 };
        assert_eq!(err.to_string(), "not enough gold: tower costs 60, have 10");
        let err = PlacementError::TooCloseToPath { distance: 12.0 };
        assert_eq!(err.to_string(), "too close to path (12.0 units from centerline)");
    }

    #[test]
    fn test_save_record_has_exactly_four_fields() {
        let record = SaveRecord {
            gold: 340,
            wave: 4,
            lives: 17,
            score: 220,
        };
        let json = serde_json::to_value(record).unwrap();
        let fields = json.as_object().unwrap();
        assert_eq!(fields.len(), 4);
        for key in ["gold", "wave", "lives", "score"] {
            assert!(fields.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert!(back.towers.is_empty());
        assert_eq!(back.selected_tower, TowerKind::Basic);
    }

    #[test]
    fn test_step_toward_moves_along_direction() {
        let mut pos = Position::new(0.0, 0.0);
        let arrived = pos.step_toward(&Position::new(10.0, 0.0), 4.0);
        assert!(!arrived);
        assert!((pos.x - 4.0).abs() < 1e-12);
        assert!(pos.y.abs() < 1e-12);

        let arrived = pos.step_toward(&Position::new(10.0, 0.0), 7.0);
        assert!(arrived, "remaining 6 < step 7");
        assert!((pos.x - 4.0).abs() < 1e-12, "arrival leaves position unchanged");
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_color_tag_hex() {
        assert_eq!(ColorTag::rgb(0x4a90e2).to_hex(), "#4a90e2");
        assert_eq!(ColorTag::rgb(0xff_4a90e2).0, 0x4a90e2);
    }
}
