#[cfg(test)]
mod tests {
    use crate::cmd::helpers;
    use amrelay_notifier::alert::AlertState;

    #[test]
    fn explicit_config_path_wins() {
        let path = helpers::resolve_config_path(Some("/tmp/custom.yml"));
        assert_eq!(path.to_string_lossy(), "/tmp/custom.yml");
    }

    #[test]
    fn default_config_path_not_empty() {
        let path = helpers::resolve_config_path(None);
        assert!(!path.to_string_lossy().is_empty());
    }

    #[test]
    fn load_config_missing_file() {
        let result = helpers::load_config(Some("/nonexistent/path.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_config_from_tempfile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notifiers.yml");
        std::fs::write(
            &path,
            r#"
notifiers:
  - name: am
    type: alertmanager
    settings:
      url: http://localhost:9093
"#,
        )
        .unwrap();

        let cfg = helpers::load_config(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(cfg.notifiers.len(), 1);
        assert_eq!(cfg.notifiers[0].setting_str("url"), Some("http://localhost:9093"));
    }

    #[test]
    fn load_snapshot_from_tempfile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(
            &path,
            r#"{
                "start_time": "2024-01-01T00:00:00Z",
                "end_time": "2024-01-01T00:00:01Z",
                "rule": {"name": "mem", "state": "alerting"},
                "eval_matches": [{"metric": "mem.used", "value": 99.1}]
            }"#,
        )
        .unwrap();

        let snap = helpers::load_snapshot(path.to_str().unwrap()).unwrap();
        assert_eq!(snap.rule.name, "mem");
        assert_eq!(snap.state(), AlertState::Alerting);
        assert_eq!(snap.eval_matches.len(), 1);
    }

    #[test]
    fn load_snapshot_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = helpers::load_snapshot(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("parsing snapshot"));
    }
}
