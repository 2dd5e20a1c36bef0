use std::collections::HashSet;

use crate::config::DedupeConfig;
use crate::model::{ChangeEvent, DedupeMeta, DedupeResult, DedupeSummary, Lead};

/// Deduplicate `leads` under the dual-uniqueness constraint: every `id`
/// and every `email` occurs at most once in the returned set.
///
/// Records are processed in input order. A record that collides with the
/// kept set either replaces one kept record (logged as a [`ChangeEvent`])
/// or is dropped without trace. Output order is kept-set order, which
/// preserves each replaced record's original position.
pub fn reconcile(leads: &[Lead]) -> (Vec<Lead>, Vec<ChangeEvent>) {
    let mut kept: Vec<Lead> = Vec::new();
    let mut changes: Vec<ChangeEvent> = Vec::new();

    // Invariant: seen_ids / seen_emails hold exactly the id / email values
    // of `kept` at every point between records.
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_emails: HashSet<String> = HashSet::new();

    for lead in leads {
        let is_id_dup = seen_ids.contains(&lead.id);
        let is_email_dup = seen_emails.contains(&lead.email);

        if !is_id_dup && !is_email_dup {
            seen_ids.insert(lead.id.clone());
            seen_emails.insert(lead.email.clone());
            kept.push(lead.clone());
            continue;
        }

        // A kept record is replaceable by `lead` only when one of:
        //   1. id and email both equal
        //   2. id equal and the incoming email collides with nothing kept
        //   3. email equal and the incoming id collides with nothing kept
        // Cases 2 and 3 keep the other uniqueness dimension intact. The
        // scan walks from the most recent kept record backward; a
        // candidate whose entry date is newer than the incoming record's
        // disqualifies itself and the scan continues toward older entries.
        // If the scan exhausts the kept set, the record is dropped.
        for i in (0..kept.len()).rev() {
            let candidate = &kept[i];
            let both_equal = candidate.id == lead.id && candidate.email == lead.email;
            let id_equal_email_free = candidate.id == lead.id && !is_email_dup;
            let email_equal_id_free = candidate.email == lead.email && !is_id_dup;

            if !(both_equal || id_equal_email_free || email_equal_id_free) {
                continue;
            }

            // Replace on equal or newer date only.
            if candidate.entry_date > lead.entry_date {
                continue;
            }

            if id_equal_email_free {
                seen_emails.remove(&candidate.email);
                seen_emails.insert(lead.email.clone());
            } else if email_equal_id_free {
                seen_ids.remove(&candidate.id);
                seen_ids.insert(lead.id.clone());
            }
            // both-equal: the same id and email are already indexed

            let from = std::mem::replace(&mut kept[i], lead.clone());
            changes.push(ChangeEvent {
                from,
                to: lead.clone(),
            });
            break;
        }
    }

    (kept, changes)
}

/// Run a full dedupe pass and package the result for the sink.
pub fn run(config: &DedupeConfig, leads: &[Lead]) -> DedupeResult {
    let input = leads.len();
    let (kept, changes) = reconcile(leads);

    // Every input record is exactly one of: appended, replacing, dropped.
    let summary = DedupeSummary {
        input,
        kept: kept.len(),
        replaced: changes.len(),
        dropped: input - kept.len() - changes.len(),
    };

    DedupeResult {
        meta: DedupeMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        leads: kept,
        changes,
    }
}
