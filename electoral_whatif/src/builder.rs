pub use crate::config::*;

/// A builder for assembling the input of a scenario by hand.
///
/// Snapshots extracted from a dataset do not need it. It is mostly useful
/// for small what-if experiments and for tests.
///
/// ```
/// pub use electoral_whatif::builder::Builder;
/// pub use electoral_whatif::Policy;
/// # use electoral_whatif::ApportionmentErrors;
///
/// let mut builder = Builder::new(&Policy::EqualPopulation)?
///     .policy(&Policy::NormalizedToState("Wyoming".to_string()))?;
///
/// builder.add_state_simple("Wyoming", 580_000, 3, "Republican")?;
/// builder.add_state(&"District of Columbia".to_string(), None, 3, Some("Democratic"))?;
///
/// let input = builder.build();
/// assert_eq!(input.total_votes, 6);
///
/// # Ok::<(), ApportionmentErrors>(())
/// ```
pub struct Builder {
    pub(crate) _policy: Policy,
    pub(crate) _states: Vec<StateYearSnapshot>,
}

impl Builder {
    pub fn new(policy: &Policy) -> Result<Builder, ApportionmentErrors> {
        Ok(Builder {
            _policy: policy.clone(),
            _states: Vec::new(),
        })
    }

    /// Replaces the policy. The states already added are kept.
    pub fn policy(self, policy: &Policy) -> Result<Builder, ApportionmentErrors> {
        Ok(Builder {
            _policy: policy.clone(),
            _states: self._states,
        })
    }

    /// Adds a state with a known population and a declared winner.
    ///
    /// It is the simplest use case for most cases.
    pub fn add_state_simple(
        &mut self,
        name: &str,
        population: u64,
        votes: u32,
        party: &str,
    ) -> Result<(), ApportionmentErrors> {
        self.add_state(&name.to_string(), Some(population), votes, Some(party))
    }

    /// Adds a state.
    ///
    /// States keep the order in which they are added. A state must have at
    /// least one electoral vote and can only be added once.
    pub fn add_state(
        &mut self,
        name: &String,
        population: Option<u64>,
        votes: u32,
        party: Option<&str>,
    ) -> Result<(), ApportionmentErrors> {
        self.add_state_2(&StateYearSnapshot {
            name: name.clone(),
            population,
            original_electoral_votes: votes,
            winning_party: party.map(|p| p.to_string()),
        })
    }

    pub fn add_state_2(&mut self, state: &StateYearSnapshot) -> Result<(), ApportionmentErrors> {
        if state.original_electoral_votes == 0 || self._states.iter().any(|s| s.name == state.name)
        {
            return Err(ApportionmentErrors::InvalidState {
                name: state.name.clone(),
            });
        }
        self._states.push(state.clone());
        Ok(())
    }

    pub fn build(&self) -> ApportionmentInput {
        ApportionmentInput {
            states: self._states.clone(),
            total_votes: self
                ._states
                .iter()
                .map(|s| s.original_electoral_votes)
                .sum(),
            policy: self._policy.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_votes() {
        let mut b = Builder::new(&Policy::EqualPopulation).unwrap();
        assert_eq!(
            b.add_state_simple("Nowhere", 1_000, 0, "X"),
            Err(ApportionmentErrors::InvalidState {
                name: "Nowhere".to_string()
            })
        );
        assert!(b.build().states.is_empty());
    }

    #[test]
    fn rejects_duplicates() {
        let mut b = Builder::new(&Policy::EqualPopulation).unwrap();
        b.add_state_simple("Ohio", 1_000, 3, "X").unwrap();
        assert!(b.add_state_simple("Ohio", 2_000, 4, "Y").is_err());
        let input = b.build();
        assert_eq!(input.states.len(), 1);
        assert_eq!(input.total_votes, 3);
    }

    #[test]
    fn policy_keeps_states() {
        let mut b = Builder::new(&Policy::EqualPopulation).unwrap();
        b.add_state_simple("Ohio", 1_000, 3, "X").unwrap();
        let b = b
            .policy(&Policy::NormalizedToState("Ohio".to_string()))
            .unwrap();
        let input = b.build();
        assert_eq!(input.policy, Policy::NormalizedToState("Ohio".to_string()));
        assert_eq!(input.states[0].winning_party.as_deref(), Some("X"));
    }
}
