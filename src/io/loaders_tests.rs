#[cfg(test)]
mod tests {
    use crate::core::domain::{VariableDefinition, VariableKind};
    use crate::io::dumpers::{dump_definitions, dump_json, dump_yaml};
    use crate::io::loaders::{load_definitions, load_variables};
    use tempfile::tempdir;

    fn sample_definitions() -> Vec<VariableDefinition> {
        vec![
            VariableDefinition::qualitative(
                "MSZoning".to_string(),
                VariableKind::Nominal,
                vec!["RL".to_string(), "RM".to_string()],
            ),
            VariableDefinition::quantitative("LotArea".to_string(), VariableKind::Continuous),
        ]
    }

    /// Test JSON round-trip through dump and load
    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("variables.json");

        let definitions = sample_definitions();
        dump_json(&definitions, &path).unwrap();

        let loaded = load_definitions(&path).unwrap();
        assert_eq!(loaded, definitions);
    }

    /// Test the JSON shape: indented, `values` omitted for quantitative
    #[test]
    fn test_json_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("variables.json");

        dump_json(&sample_definitions(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.contains("    \"name\": \"MSZoning\""));
        assert!(content.contains("\"kind\": \"Nominal\""));
        assert!(content.contains("\"values\""));
        // The quantitative entry has no values key at all.
        let lot_area = content.split("LotArea").nth(1).unwrap();
        assert!(!lot_area.contains("values"));
    }

    /// Test the YAML dump is block style
    #[test]
    fn test_yaml_block_style() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("variables.yaml");

        dump_yaml(&sample_definitions(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.contains("- name: MSZoning"));
        assert!(content.contains("kind: Nominal"));
        assert!(content.contains("- RL"));
        assert!(!content.contains('{'), "Flow style not expected: {}", content);
    }

    /// Test extension dispatch in dump_definitions
    #[test]
    fn test_dump_definitions_dispatch() {
        let dir = tempdir().unwrap();
        let definitions = sample_definitions();

        dump_definitions(&definitions, &dir.path().join("v.json")).unwrap();
        dump_definitions(&definitions, &dir.path().join("v.yml")).unwrap();

        let err = dump_definitions(&definitions, &dir.path().join("v.txt")).unwrap_err();
        assert!(err.to_string().contains("Unsupported output format"));
    }

    /// Test loading as an ordered mapping with kind classification
    #[test]
    fn test_load_variables_mapping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("variables.json");
        dump_json(&sample_definitions(), &path).unwrap();

        let variables = load_variables(&path).unwrap();
        let names: Vec<&str> = variables.names().collect();
        assert_eq!(names, vec!["MSZoning", "LotArea"]);

        let zoning = variables.get("MSZoning").unwrap();
        assert!(zoning.is_qualitative());
        assert_eq!(
            zoning.values,
            Some(vec!["RL".to_string(), "RM".to_string()])
        );

        let lot_area = variables.get("LotArea").unwrap();
        assert!(lot_area.is_quantitative());
        assert!(lot_area.values.is_none());
    }

    /// Test a malformed definitions file surfaces a parse error
    #[test]
    fn test_load_definitions_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("variables.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert!(load_definitions(&path).is_err());
    }
}
