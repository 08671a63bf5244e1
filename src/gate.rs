//! Safety gate for exhaustive enumeration
//!
//! Sampling never consults the gate: its cost is bounded by the sample
//! count, not the size of the word space.

use num_bigint::BigUint;

/// Outcome of the enumeration safety check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Enumeration may proceed
    Allowed,
    /// Total combinations exceed the cap and no override was given.
    /// Carries both figures so the caller can report them.
    Denied { total: BigUint, cap: u64 },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Allowed => write!(f, "allowed"),
            Decision::Denied { total, cap } => {
                write!(f, "denied ({} combinations exceed cap {})", total, cap)
            }
        }
    }
}

/// Decide whether exhaustive enumeration of `total` combinations is allowed
/// under `cap`. `force` always allows, regardless of magnitude (dangerous).
pub fn authorize(total: &BigUint, cap: u64, force: bool) -> Decision {
    if total > &BigUint::from(cap) {
        if force {
            tracing::warn!(
                total = %total,
                cap = cap,
                "Cap exceeded but --force given, enumerating anyway"
            );
            return Decision::Allowed;
        }
        tracing::info!(total = %total, cap = cap, "Enumeration denied by cap");
        return Decision::Denied {
            total: total.clone(),
            cap,
        };
    }
    Decision::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_cap_denied() {
        let total = BigUint::from(1_000_001u64);
        let decision = authorize(&total, 1_000_000, false);
        assert_eq!(
            decision,
            Decision::Denied {
                total: total.clone(),
                cap: 1_000_000
            }
        );
        assert!(!decision.is_allowed());
    }

    #[test]
    fn test_force_overrides_cap() {
        let total = BigUint::from(1_000_001u64);
        assert_eq!(authorize(&total, 1_000_000, true), Decision::Allowed);
    }

    #[test]
    fn test_under_cap_allowed() {
        let total = BigUint::from(500u64);
        assert_eq!(authorize(&total, 1_000_000, false), Decision::Allowed);
    }

    #[test]
    fn test_exactly_at_cap_allowed() {
        let total = BigUint::from(1_000_000u64);
        assert_eq!(authorize(&total, 1_000_000, false), Decision::Allowed);
    }

    #[test]
    fn test_huge_total_still_denied() {
        let total = BigUint::from(62u32).pow(30);
        assert!(!authorize(&total, u64::MAX, false).is_allowed());
        assert!(authorize(&total, u64::MAX, true).is_allowed());
    }

    #[test]
    fn test_denied_display() {
        let decision = authorize(&BigUint::from(10u32), 5, false);
        assert_eq!(decision.to_string(), "denied (10 combinations exceed cap 5)");
    }
}
