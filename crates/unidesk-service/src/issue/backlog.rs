//! Planning of generated complaints for class leaders with a thin backlog.

use std::collections::HashSet;

use unidesk_entity::issue::{BacklogSlot, LeaderBacklog};

/// Decide which complaints to generate so every leader has at least `minimum`.
///
/// A short leader receives the lowest template ids they have no complaint
/// for yet, until they reach `minimum` or run out of templates. Nothing is
/// planned while fewer than `minimum` templates exist.
pub fn plan_backlog(
    template_ids: &[i64],
    leaders: &[LeaderBacklog],
    minimum: usize,
) -> Vec<BacklogSlot> {
    let mut templates = template_ids.to_vec();
    templates.sort_unstable();
    templates.dedup();

    if minimum == 0 || templates.len() < minimum {
        return Vec::new();
    }

    let mut slots = Vec::new();
    for leader in leaders {
        let have = leader.complaint_count();
        if have >= minimum {
            continue;
        }

        let existing: HashSet<i64> = leader.template_ids.iter().copied().collect();
        slots.extend(
            templates
                .iter()
                .filter(|id| !existing.contains(id))
                .take(minimum - have)
                .map(|&template_id| BacklogSlot {
                    leader_id: leader.leader_id,
                    template_id,
                }),
        );
    }
    slots
}
