//! Speaking order for a staff meeting.
//!
//! The schedule is a pure function of the phase and the template: three
//! rounds of fixed composition, then lead roles plus filler roles cycled
//! until the phase's turn floor is met.

use super::phase::JppPhase;
use crate::staff::{MEETING_PARTICIPANTS, StaffRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTemplate {
    /// Roles allowed to speak. Anything else is skipped without error.
    pub participants: Vec<StaffRole>,
    /// Domain voices inserted after the first two leads in round two.
    pub second_round: Vec<StaffRole>,
    /// Cross-talk roles for round three.
    pub cross_talk: Vec<StaffRole>,
    /// Cycled after the leads when topping up to `min_turns`.
    pub filler: Vec<StaffRole>,
}

impl Default for ScheduleTemplate {
    fn default() -> Self {
        Self {
            participants: MEETING_PARTICIPANTS.to_vec(),
            second_round: vec![StaffRole::J4, StaffRole::Fires, StaffRole::CyberEw],
            cross_talk: vec![
                StaffRole::J2,
                StaffRole::J3,
                StaffRole::Sja,
                StaffRole::J5,
                StaffRole::Engineer,
                StaffRole::Protection,
            ],
            filler: vec![StaffRole::J4, StaffRole::Fires],
        }
    }
}

impl ScheduleTemplate {
    fn admits(&self, role: StaffRole) -> bool {
        self.participants.contains(&role)
    }

    /// Ordered speaker list for `phase`.
    pub fn schedule(&self, phase: JppPhase) -> Vec<StaffRole> {
        let config = phase.config();
        let leads = config.lead_roles;
        let mut order = Vec::with_capacity(config.min_turns.max(32));

        // Round one: every participant once, leads first.
        order.extend(leads.iter().copied());
        order.extend(
            self.participants
                .iter()
                .copied()
                .filter(|role| !leads.contains(role)),
        );

        // Round two: leads respond, key contributors weigh in.
        order.extend(leads.iter().take(2).copied());
        order.extend(self.second_round.iter().copied());
        order.extend(leads.iter().skip(2).copied());

        // Round three: cross-talk and synthesis.
        order.extend(self.cross_talk.iter().copied());

        order.retain(|role| self.admits(*role));

        let cycle: Vec<StaffRole> = leads
            .iter()
            .chain(self.filler.iter())
            .copied()
            .filter(|role| self.admits(*role))
            .collect();
        if !cycle.is_empty() {
            for role in cycle.iter().cycle() {
                if order.len() >= config.min_turns {
                    break;
                }
                order.push(*role);
            }
        }
        order
    }
}

/// Speaker list for `phase` using the standard template.
pub fn schedule(phase: JppPhase) -> Vec<StaffRole> {
    ScheduleTemplate::default().schedule(phase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jpp::phase::ALL_PHASES;

    #[test]
    fn every_schedule_meets_its_floor() {
        for phase in ALL_PHASES {
            assert!(schedule(phase).len() >= phase.config().min_turns, "{phase}");
        }
    }

    #[test]
    fn schedule_is_idempotent() {
        for phase in ALL_PHASES {
            assert_eq!(schedule(phase), schedule(phase));
        }
    }

    #[test]
    fn planning_initiation_order() {
        let order = schedule(JppPhase::PlanningInitiation);
        assert_eq!(
            &order[..11],
            &[
                StaffRole::J5,
                StaffRole::J3,
                StaffRole::J2,
                StaffRole::J4,
                StaffRole::J6,
                StaffRole::CyberEw,
                StaffRole::Fires,
                StaffRole::Engineer,
                StaffRole::Protection,
                StaffRole::Sja,
                StaffRole::Pao,
            ]
        );
        // Round two then three: 2 + 3 + 1 + 6.
        assert_eq!(order.len(), 11 + 12);
        assert_eq!(order[11], StaffRole::J5);
        assert_eq!(order[13], StaffRole::J4);
        assert_eq!(order[16], StaffRole::J2);
    }

    #[test]
    fn commander_never_speaks_in_the_meeting() {
        let order = schedule(JppPhase::CoaApproval);
        assert!(!order.contains(&StaffRole::Commander));
        assert!(order.len() >= 15);
    }

    #[test]
    fn small_templates_are_topped_up_from_leads_and_filler() {
        let template = ScheduleTemplate {
            participants: vec![StaffRole::J2, StaffRole::J3, StaffRole::J4],
            second_round: vec![],
            cross_talk: vec![],
            filler: vec![StaffRole::J4],
        };
        let order = template.schedule(JppPhase::MissionAnalysis);
        assert_eq!(order.len(), 20);
        assert_eq!(
            &order[..7],
            &[
                StaffRole::J2,
                StaffRole::J3,
                StaffRole::J4,
                StaffRole::J2,
                StaffRole::J3,
                StaffRole::J2,
                StaffRole::J3,
            ]
        );
    }

    #[test]
    fn empty_participant_list_yields_empty_schedule() {
        let template = ScheduleTemplate {
            participants: vec![],
            ..ScheduleTemplate::default()
        };
        assert!(template.schedule(JppPhase::CoaDevelopment).is_empty());
    }
}
