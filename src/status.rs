//! Request Status
//!
//! The backend-owned status of a solicitação and its presentation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Aberta,
    EmAndamento,
    Resolvida,
    /// Any value this client does not know about
    #[serde(other)]
    Unknown,
}

impl Status {
    /// Known statuses in lifecycle order
    pub const ALL: [Status; 3] = [Status::Aberta, Status::EmAndamento, Status::Resolvida];

    /// Wire value used in query strings and request bodies
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Aberta => "aberta",
            Status::EmAndamento => "em_andamento",
            Status::Resolvida => "resolvida",
            Status::Unknown => "desconhecido",
        }
    }

    pub fn from_wire(value: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Aberta => "Aberta",
            Status::EmAndamento => "Em Andamento",
            Status::Resolvida => "Resolvida",
            Status::Unknown => "Desconhecido",
        }
    }

    /// Plural label for filters and stat cards
    pub fn plural_label(self) -> &'static str {
        match self {
            Status::Aberta => "Abertas",
            Status::EmAndamento => "Em Andamento",
            Status::Resolvida => "Resolvidas",
            Status::Unknown => "Outras",
        }
    }

    /// Marker fill on the map
    pub fn marker_color(self) -> &'static str {
        match self {
            Status::Aberta => "#ef4444",
            Status::EmAndamento => "#f59e0b",
            Status::Resolvida => "#22c55e",
            Status::Unknown => "#6b7280",
        }
    }

    /// CSS class for the status badge
    pub fn badge_class(self) -> &'static str {
        match self {
            Status::Aberta => "badge badge-open",
            Status::EmAndamento => "badge badge-progress",
            Status::Resolvida => "badge badge-resolved",
            Status::Unknown => "badge badge-unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let status: Status = serde_json::from_str("\"em_andamento\"").unwrap();
        assert_eq!(status, Status::EmAndamento);
        assert_eq!(serde_json::to_string(&Status::Resolvida).unwrap(), "\"resolvida\"");
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let status: Status = serde_json::from_str("\"arquivada\"").unwrap();
        assert_eq!(status, Status::Unknown);
        assert_eq!(status.marker_color(), "#6b7280");
        assert_eq!(Status::from_wire("arquivada"), None);
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(Status::Aberta.label(), "Aberta");
        assert_eq!(Status::EmAndamento.label(), "Em Andamento");
        assert_eq!(Status::Resolvida.label(), "Resolvida");
        assert_eq!(Status::Aberta.marker_color(), "#ef4444");
        assert_eq!(Status::EmAndamento.marker_color(), "#f59e0b");
        assert_eq!(Status::Resolvida.marker_color(), "#22c55e");
    }

    #[test]
    fn test_from_wire_round_trip() {
        for status in Status::ALL {
            assert_eq!(Status::from_wire(status.as_str()), Some(status));
        }
    }
}
