/// Exclusion terms for the three filtered columns. Matching is
/// case-insensitive substring containment; a missing field never matches,
/// so the row survives that criterion.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    status_terms: Vec<String>,
    remark_by_terms: Vec<String>,
    remark_terms: Vec<String>,
}

impl ExclusionRules {
    pub fn new<I, J, K, S>(status_terms: I, remark_by_terms: J, remark_terms: K) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            status_terms: lower_terms(status_terms),
            remark_by_terms: lower_terms(remark_by_terms),
            remark_terms: lower_terms(remark_terms),
        }
    }

    /// The production rule set used for every DSU batch.
    pub fn standard() -> Self {
        Self::new(
            ["Abort", "LOCKED", "UNLOCKED"],
            ["SPMADRID", "SP MADRID"],
            [
                "Broadcast",
                "Broken Promise",
                "New files imported",
                "Updates when case reassign to another collector",
                "NDF IN ICS",
                "FOR PULL OUT (END OF HANDLING PERIOD)",
                "END OF HANDLING PERIOD",
                "New Assignment -",
                "File Unhold",
            ],
        )
    }

    pub fn excludes_status(&self, status: Option<&str>) -> bool {
        contains_any(status, &self.status_terms)
    }

    pub fn excludes_remark_by(&self, remark_by: Option<&str>) -> bool {
        contains_any(remark_by, &self.remark_by_terms)
    }

    pub fn excludes_remark(&self, remark: Option<&str>) -> bool {
        contains_any(remark, &self.remark_terms)
    }
}

/// Terms deciding which filtered rows count as outbound contact attempts.
#[derive(Debug, Clone)]
pub struct ClassificationRules {
    follow_up_terms: Vec<String>,
    system_terms: Vec<String>,
    dial_terms: Vec<String>,
}

impl ClassificationRules {
    pub fn new<I, J, K, S>(follow_up_terms: I, system_terms: J, dial_terms: K) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            follow_up_terms: lower_terms(follow_up_terms),
            system_terms: lower_terms(system_terms),
            dial_terms: lower_terms(dial_terms),
        }
    }

    pub fn standard() -> Self {
        Self::new(["Follow Up"], ["System"], ["Predictive", "Outgoing"])
    }

    /// Remark Type names a follow-up AND the remark was produced by the
    /// system actor.
    pub fn is_system_follow_up(&self, remark_type: Option<&str>, remark_by: Option<&str>) -> bool {
        contains_any(remark_type, &self.follow_up_terms)
            && contains_any(remark_by, &self.system_terms)
    }

    /// Remark Type names a predictive or outgoing dial, whoever produced it.
    pub fn is_dial(&self, remark_type: Option<&str>) -> bool {
        contains_any(remark_type, &self.dial_terms)
    }
}

fn lower_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|term| term.as_ref().to_ascii_lowercase())
        .collect()
}

fn contains_any(value: Option<&str>, terms: &[String]) -> bool {
    match value {
        Some(value) => {
            let lowered = value.to_ascii_lowercase();
            terms.iter().any(|term| lowered.contains(term.as_str()))
        }
        None => false,
    }
}
