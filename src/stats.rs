//! Dashboard Statistics
//!
//! Counts shown on dashboards, computed from the requests already loaded.

use crate::models::{Solicitacao, StatusCounts};
use crate::status::Status;

pub fn count_by_status(solicitacoes: &[Solicitacao]) -> StatusCounts {
    solicitacoes.iter().fold(StatusCounts::default(), |mut counts, s| {
        match s.status {
            Status::Aberta => counts.aberta += 1,
            Status::EmAndamento => counts.em_andamento += 1,
            Status::Resolvida => counts.resolvida += 1,
            Status::Unknown => {}
        }
        counts
    })
}

impl StatusCounts {
    pub fn get(&self, status: Status) -> u32 {
        match status {
            Status::Aberta => self.aberta,
            Status::EmAndamento => self.em_andamento,
            Status::Resolvida => self.resolvida,
            Status::Unknown => 0,
        }
    }
}

/// Percentage of resolved requests, rounded; 0 for an empty list
pub fn resolution_rate(solicitacoes: &[Solicitacao]) -> u32 {
    if solicitacoes.is_empty() {
        return 0;
    }
    let resolved = count_by_status(solicitacoes).resolvida as f64;
    (resolved / solicitacoes.len() as f64 * 100.0).round() as u32
}

/// Bar width of `value` relative to the largest value, in percent
pub fn relative_share(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    ((value as f64 / max as f64) * 100.0).round().min(100.0) as u32
}

/// Clamp a backend percentage into a CSS width
pub fn bar_width(percent: f64) -> String {
    format!("{}%", percent.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn with_status(status: Status) -> Solicitacao {
        let mut s = mock::fallback_solicitacoes().remove(0);
        s.status = status;
        s
    }

    #[test]
    fn test_count_by_status() {
        let list = vec![
            with_status(Status::Aberta),
            with_status(Status::Resolvida),
            with_status(Status::Resolvida),
            with_status(Status::Unknown),
        ];
        let counts = count_by_status(&list);
        assert_eq!(counts, StatusCounts { aberta: 1, em_andamento: 0, resolvida: 2 });
        assert_eq!(counts.get(Status::Resolvida), 2);
    }

    #[test]
    fn test_resolution_rate() {
        assert_eq!(resolution_rate(&[]), 0);
        let list = vec![
            with_status(Status::Resolvida),
            with_status(Status::Aberta),
            with_status(Status::EmAndamento),
        ];
        assert_eq!(resolution_rate(&list), 33);
        let list = vec![with_status(Status::Resolvida), with_status(Status::Resolvida), with_status(Status::Aberta)];
        assert_eq!(resolution_rate(&list), 67);
    }

    #[test]
    fn test_relative_share() {
        assert_eq!(relative_share(5, 0), 0);
        assert_eq!(relative_share(5, 10), 50);
        assert_eq!(relative_share(10, 10), 100);
        assert_eq!(bar_width(120.0), "100%");
    }
}
