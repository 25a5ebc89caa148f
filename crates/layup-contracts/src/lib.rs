//! # layup-contracts
//!
//! Shared record types and errors for the LAYUP preference card library.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod card;
pub mod directory;
pub mod error;
pub mod profile;
pub mod specialty;

#[cfg(test)]
mod tests {
    use super::*;
    use card::{Ownership, PreferenceCard, PreferenceCardItem};
    use directory::Consultant;
    use error::LayupError;
    use specialty::SpecialtyGroup;

    fn legacy_card() -> PreferenceCard {
        PreferenceCard {
            id: "PC-900".to_string(),
            consultant_name: "Jane Doe".to_string(),
            consultant_title: "Ms".to_string(),
            specialty: "General Surgery".to_string(),
            procedure_name: Some("Laparoscopic appendicectomy".to_string()),
            procedure_opcs4_codes: vec!["H011".to_string()],
            general_info: None,
            positioning_equipment: None,
            cleaning_prep: None,
            drapes_consumables: None,
            instrument_sets: None,
            equipment: None,
            sutures_closure: None,
            implants: None,
            medications_fluids: None,
            wound_dressing: None,
            miscellaneous: None,
            counts_notes: None,
            special_instructions: None,
            items: vec![PreferenceCardItem {
                inventory_id: "INV-90001".to_string(),
                quantity: 2,
                notes: None,
            }],
            last_updated: "2025-06-01".to_string(),
            notes: None,
            instructions: None,
        }
    }

    // ── PreferenceCard serde ─────────────────────────────────────────────────

    #[test]
    fn card_round_trips_through_json() {
        let original = legacy_card();
        let json = serde_json::to_string(&original).unwrap();
        let decoded: PreferenceCard = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn card_fields_serialize_camel_case() {
        let json = serde_json::to_value(legacy_card()).unwrap();
        assert!(json.get("consultantName").is_some());
        assert!(json.get("procedureOpcs4Codes").is_some());
        assert_eq!(json["items"][0]["inventoryId"], "INV-90001");
        // Absent sections are omitted, not serialized as null.
        assert!(json.get("generalInfo").is_none());
    }

    #[test]
    fn card_without_items_field_deserializes_with_empty_list() {
        let json = r#"{
            "id": "PC-901",
            "consultantName": "Jane Doe",
            "consultantTitle": "Ms",
            "specialty": "General Surgery",
            "procedureOpcs4Codes": ["H011"],
            "lastUpdated": "2025-06-01"
        }"#;
        let card: PreferenceCard = serde_json::from_str(json).unwrap();
        assert!(card.items.is_empty());
    }

    #[test]
    fn covers_code_and_belongs_to() {
        let card = legacy_card();
        assert!(card.covers_code("H011"));
        assert!(!card.covers_code("H012"));
        assert!(card.belongs_to("jane doe"));
        assert!(card.belongs_to("JANE DOE"));
        assert!(!card.belongs_to("Jane Smith"));
    }

    #[test]
    fn ownership_serializes_kebab_case() {
        let json = serde_json::to_string(&Ownership::Consignment).unwrap();
        assert_eq!(json, "\"consignment\"");
    }

    // ── Consultant helpers ───────────────────────────────────────────────────

    #[test]
    fn consultant_name_helpers() {
        let consultant = Consultant {
            id: "CON-042".to_string(),
            title: "Mr".to_string(),
            first_name: "James".to_string(),
            last_name: "Anderson".to_string(),
            specialty: "Trauma Orthopaedics".to_string(),
            subspecialty: None,
        };
        assert_eq!(consultant.full_name(), "James Anderson");
        assert_eq!(consultant.display_name(), "Mr James Anderson");
    }

    // ── SpecialtyGroup classification ────────────────────────────────────────

    #[test]
    fn classify_maps_dataset_specialty_names() {
        assert_eq!(
            SpecialtyGroup::classify("Trauma Orthopaedics"),
            SpecialtyGroup::Orthopaedics
        );
        assert_eq!(
            SpecialtyGroup::classify("Elective Orthopaedics"),
            SpecialtyGroup::Orthopaedics
        );
        assert_eq!(SpecialtyGroup::classify("Neurology"), SpecialtyGroup::Neurosurgery);
        assert_eq!(SpecialtyGroup::classify("Cardiac"), SpecialtyGroup::Cardiothoracic);
        assert_eq!(SpecialtyGroup::classify("Vascular"), SpecialtyGroup::Vascular);
        assert_eq!(SpecialtyGroup::classify("ENT"), SpecialtyGroup::Ent);
        assert_eq!(
            SpecialtyGroup::classify("Upper GI Surgery"),
            SpecialtyGroup::GeneralSurgery
        );
        assert_eq!(SpecialtyGroup::classify("Dermatology"), SpecialtyGroup::Other);
    }

    #[test]
    fn specialty_group_serializes_kebab_case() {
        let json = serde_json::to_string(&SpecialtyGroup::GeneralSurgery).unwrap();
        assert_eq!(json, "\"general-surgery\"");
        let decoded: SpecialtyGroup = serde_json::from_str("\"cardiothoracic\"").unwrap();
        assert_eq!(decoded, SpecialtyGroup::Cardiothoracic);
    }

    // ── LayupError display messages ──────────────────────────────────────────

    #[test]
    fn error_dataset_display() {
        let err = LayupError::DatasetError {
            reason: "duplicate card id 'PC-001'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("dataset error"));
        assert!(msg.contains("PC-001"));
    }

    #[test]
    fn error_profile_display() {
        let err = LayupError::ProfileError {
            reason: "missing default profile".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("profile error"));
        assert!(msg.contains("missing default profile"));
    }

    #[test]
    fn error_config_display() {
        let err = LayupError::ConfigError {
            reason: "no profile path given".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("no profile path given"));
    }
}
