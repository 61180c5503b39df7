// Dashboard domain model
use serde::Deserialize;

/// The subset of a Grafana dashboard consumed by the snapshot flow
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardModel {
    pub uid: String,
    pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Panel {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ignores_unknown_fields() {
        let value = json!({
            "uid": "abc",
            "title": "Reef",
            "panels": [
                { "id": 2, "type": "timeseries", "gridPos": { "x": 0, "y": 0 } },
                { "id": 7, "type": "stat" }
            ]
        });

        let dashboard: DashboardModel = serde_json::from_value(value).unwrap();
        assert_eq!(dashboard.uid, "abc");
        assert_eq!(dashboard.panels, vec![Panel { id: 2 }, Panel { id: 7 }]);
    }

    #[test]
    fn test_missing_panels_is_rejected() {
        let result = serde_json::from_value::<DashboardModel>(json!({ "uid": "abc", "rows": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_empty_panels() {
        let dashboard: DashboardModel =
            serde_json::from_value(json!({ "uid": "abc", "panels": [] })).unwrap();
        assert!(dashboard.panels.is_empty());
    }

    #[test]
    fn test_panel_without_id_is_rejected() {
        let result = serde_json::from_value::<DashboardModel>(json!({
            "uid": "abc",
            "panels": [{ "type": "row" }]
        }));
        assert!(result.is_err());
    }
}
