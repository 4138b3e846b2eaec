//! Wardrobe gap ranking

use crate::knowledge::occasion;
use crate::models::{Remark, Severity, WardrobeGap};

/// Gaps from critical and moderate remarks that name an item to own
///
/// Gaps for the same item merge, keeping the most severe. Ranked by the
/// number of occasions the item serves, then by severity; ties keep remark order.
pub fn rank(remarks: &[Remark]) -> Vec<WardrobeGap> {
    let mut gaps: Vec<WardrobeGap> = Vec::new();
    for remark in remarks {
        if remark.severity == Severity::Minor {
            continue;
        }
        let Some(item) = remark.acquisition.as_deref() else {
            continue;
        };
        let item = item.trim().to_lowercase();
        if item.is_empty() {
            continue;
        }
        if let Some(existing) = gaps.iter_mut().find(|g| g.item == item) {
            existing.severity = existing.severity.most_severe(remark.severity);
            continue;
        }
        gaps.push(WardrobeGap {
            occasions: occasion::occasions_served(&item),
            item,
            severity: remark.severity,
            source_rule: remark.rule_id.clone(),
        });
    }
    gaps.sort_by(|a, b| {
        b.occasions
            .len()
            .cmp(&a.occasions.len())
            .then(a.severity.cmp(&b.severity))
    });
    gaps
}
