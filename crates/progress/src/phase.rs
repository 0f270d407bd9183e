//! Per-phase aggregation.

use stride_core::{Percent, PhaseDef, PhaseStats, Position, RequirementRule};

use crate::engine::ProgressionEngine;

impl<R: RequirementRule> ProgressionEngine<R> {
    /// Progress through each phase, in the order given.
    ///
    /// Levels of a phase that fall outside the ladder contribute nothing.
    pub fn phase_stats(&self, phases: &[PhaseDef], position: &Position) -> Vec<PhaseStats> {
        phases
            .iter()
            .map(|phase| self.single_phase_stats(phase, position))
            .collect()
    }

    /// Progress through the phases configured on the ladder.
    pub fn configured_phase_stats(&self, position: &Position) -> Vec<PhaseStats> {
        self.phase_stats(self.ladder().phases(), position)
    }

    fn single_phase_stats(&self, phase: &PhaseDef, position: &Position) -> PhaseStats {
        let lo = phase.lo.max(self.ladder().start_level());
        let hi = phase.hi.min(self.ladder().end_level());

        let mut completed = 0u64;
        let mut total = 0u64;
        for level in lo..=hi {
            let requirement = u64::from(self.ladder().requirement_of(level));
            total += requirement;
            if level < position.level {
                completed += requirement;
            } else if level == position.level {
                completed += u64::from(position.count);
            }
        }

        PhaseStats {
            name: phase.name.clone(),
            lo: phase.lo,
            hi: phase.hi,
            completed,
            total,
            percent: Percent::ratio(completed, total),
            status: phase.status_at(position.level),
        }
    }
}

#[cfg(test)]
mod tests {
    use stride_core::{LadderConfig, PhaseDef, PhaseStatus, Position};

    use crate::engine::ProgressionEngine;

    fn engine() -> ProgressionEngine {
        ProgressionEngine::from_config(LadderConfig {
            reference_level: 7,
            reference_count: 7,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_phases_at_reference() {
        let engine = engine();
        let stats = engine.configured_phase_stats(&Position::new(7, 7));
        let names: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["Starting Out", "Building Base", "Mid Journey", "Advanced", "Final Push"]
        );

        // Starting Out: 2..=5 fully done
        assert_eq!((stats[0].completed, stats[0].total), (14, 14));
        assert_eq!(stats[0].percent.to_string(), "100.0");
        assert_eq!(stats[0].status, PhaseStatus::Completed);

        // Building Base: 6 done, 7 of 7 at level 7, out of 6+7+8+9+10
        assert_eq!((stats[1].completed, stats[1].total), (13, 40));
        assert_eq!(stats[1].percent.to_string(), "32.5");
        assert_eq!(stats[1].status, PhaseStatus::InProgress);

        assert_eq!(stats[2].completed, 0);
        assert_eq!(stats[2].status, PhaseStatus::NotStarted);
        assert_eq!(stats[4].total, 41);
    }

    #[test]
    fn test_all_phases_full_at_top() {
        let engine = engine();
        let stats = engine.configured_phase_stats(&Position::new(21, 21));
        assert!(stats.iter().all(|s| s.completed == s.total));
        assert_eq!(stats[4].status, PhaseStatus::InProgress);
    }

    #[test]
    fn test_whole_percent_rounds_exact_ratio() {
        let engine = engine();
        let stats = engine.configured_phase_stats(&Position::new(12, 1));
        let mid = &stats[2];

        // Mid Journey: 11 done plus 1 at level 12, out of 11+12+13+14+15
        assert_eq!((mid.completed, mid.total), (12, 65));
        assert_eq!(mid.percent.to_string(), "18.5");
        assert_eq!(mid.whole_percent(), 18);
    }

    #[test]
    fn test_phase_outside_ladder_is_empty() {
        let engine = engine();
        let phases = [PhaseDef::new("Ultra", 30, 42)];
        let stats = engine.phase_stats(&phases, &Position::new(21, 21));
        assert_eq!(stats[0].total, 0);
        assert_eq!(stats[0].percent.tenths(), 0);
    }

    #[test]
    fn test_phase_partly_outside_ladder_is_clipped() {
        let engine = engine();
        let phases = [PhaseDef::new("Warmup", 0, 3)];
        let stats = engine.phase_stats(&phases, &Position::new(3, 1));
        assert_eq!((stats[0].completed, stats[0].total), (3, 5));
    }
}
