//! Deduplication, escalation and ranking of findings

use std::collections::HashMap;

use crate::models::{Finding, Remark, RemarkGroup, Severity};

/// Condition substrings that force a remark to critical
pub const HARD_FAIL: &[&str] = &["peel", "dirty", "torn", "stain", "worn out", "hole"];

/// Collapse findings sharing a key
///
/// The survivor sits at the first occurrence's position and carries the most
/// severe occurrence's content (the earliest among equals).
pub fn dedup(findings: Vec<Finding>) -> Vec<Finding> {
    let mut slots: Vec<Finding> = Vec::with_capacity(findings.len());
    let mut index = HashMap::new();
    for finding in findings {
        let key = finding.key();
        match index.get(&key).copied() {
            Some(slot) => {
                let kept: &mut Finding = &mut slots[slot];
                if finding.severity_hint < kept.severity_hint {
                    *kept = finding;
                }
            }
            None => {
                index.insert(key, slots.len());
                slots.push(finding);
            }
        }
    }
    slots
}

pub fn is_hard_fail(condition: &str) -> bool {
    let condition = condition.to_lowercase();
    HARD_FAIL.iter().any(|k| condition.contains(k))
}

/// Severity after applying the hard-fail predicate
pub fn escalate(finding: &Finding) -> Severity {
    match finding.condition.as_deref() {
        Some(condition) if is_hard_fail(condition) => Severity::Critical,
        _ => finding.severity_hint,
    }
}

/// Escalate, stable-sort by (severity, dimension priority) and number from 1
pub fn rank(findings: Vec<Finding>) -> Vec<Remark> {
    let mut escalated: Vec<(Severity, Finding)> = findings
        .into_iter()
        .map(|f| (escalate(&f), f))
        .collect();
    escalated.sort_by_key(|(severity, f)| (*severity, f.dimension.priority()));

    escalated
        .into_iter()
        .enumerate()
        .map(|(i, (severity, f))| Remark {
            priority_order: i + 1,
            severity,
            category: f.category,
            group: RemarkGroup::of(f.dimension, f.body_zone),
            dimension: f.dimension,
            rule_id: f.rule_id.to_string(),
            body_zone: f.body_zone,
            element: f.element,
            issue: f.issue,
            fix: f.fix,
            why: f.why,
            acquisition: f.acquisition,
        })
        .collect()
}
