use super::*;
use crate::gameplay::*;

/// Splits every seat's net result across the steps it took.
///
/// Returns one EV per step of the record, in fixed-point units. A hand that
/// ended with folds credits a seat's whole net to its last aggressive step,
/// else its last non-fold step, else its fold. A hand that reached showdown
/// spreads the net over the seat's steps in proportion to the chips each
/// committed, evenly if none committed anything. Forced blinds never carry EV.
pub fn attribute(record: &Record) -> Result<Vec<Units>, String> {
    record.outcome.check()?;
    let mut evs = vec![0; record.steps.len()];
    let seats = record
        .steps
        .iter()
        .map(|s| s.actor())
        .collect::<std::collections::BTreeSet<_>>();
    for seat in seats {
        let net = record.outcome.net(seat) as f64;
        let steps = record
            .steps
            .iter()
            .enumerate()
            .filter(|(_, s)| s.actor() == seat)
            .filter(|(_, s)| s.action.is_choice())
            .collect::<Vec<_>>();
        if steps.is_empty() {
            continue;
        }
        if record.outcome.showdown {
            let committed = steps
                .iter()
                .map(|(_, s)| s.action.amount() as f64)
                .sum::<f64>();
            for (i, step) in steps.iter() {
                let share = match committed {
                    c if c > 0. => step.action.amount() as f64 / c,
                    _ => 1. / steps.len() as f64,
                };
                evs[*i] = units(net * share);
            }
        } else {
            let pivot = steps
                .iter()
                .rev()
                .find(|(_, s)| s.action.is_aggro())
                .or_else(|| steps.iter().rev().find(|(_, s)| !s.action.is_fold()))
                .or_else(|| steps.last())
                .map(|(i, _)| *i);
            if let Some(i) = pivot {
                evs[i] = units(net);
            }
        }
    }
    Ok(evs)
}
