//! Move and overwrite decisions
//!
//! Every rename is gated by a move confirmation, and an occupied destination
//! additionally by an overwrite confirmation. Two independent run-wide flags
//! pre-authorize the two prompt levels; authorizing moves never authorizes
//! overwrites.

use serde::{Deserialize, Serialize};

use crate::error::AttachResult;

/// Prompt shown before moving an attachment.
pub const MOVE_PROMPT: &str = "Move and rename file?";

/// Prompt shown when a different file already occupies the destination.
pub const OVERWRITE_PROMPT: &str = "Found a file at destination, overwrite?";

/// Run-wide pre-authorization flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePolicy {
    /// Answer every move prompt with yes.
    pub move_all: bool,
    /// Answer every overwrite prompt with yes.
    pub overwrite_all: bool,
}

/// Outcome of the two-level confirmation for one attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Perform the move.
    Move,
    /// The move itself was declined.
    DeclinedMove,
    /// The move was accepted, but replacing the occupied destination was not.
    DeclinedOverwrite,
}

/// A yes/no decision source.
///
/// The pipeline is agnostic to where answers come from: the CLI wires in a
/// blocking terminal prompt, tests inject closures — any
/// `FnMut(&str) -> bool` is a `Confirm`.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> AttachResult<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> AttachResult<bool> {
        Ok(self(prompt))
    }
}

/// Decide whether to move an attachment whose destination may be occupied.
pub fn resolve(
    dest_occupied: bool,
    policy: MovePolicy,
    confirm: &mut dyn Confirm,
) -> AttachResult<Resolution> {
    if !(policy.move_all || confirm.confirm(MOVE_PROMPT)?) {
        return Ok(Resolution::DeclinedMove);
    }
    if dest_occupied && !(policy.overwrite_all || confirm.confirm(OVERWRITE_PROMPT)?) {
        return Ok(Resolution::DeclinedOverwrite);
    }
    Ok(Resolution::Move)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(mut answers: Vec<bool>) -> impl FnMut(&str) -> bool {
        answers.reverse();
        move |_prompt: &str| answers.pop().expect("unexpected prompt")
    }

    #[test]
    fn test_declined_move() {
        let mut confirm = scripted(vec![false]);
        let outcome = resolve(false, MovePolicy::default(), &mut confirm).unwrap();
        assert_eq!(outcome, Resolution::DeclinedMove);
    }

    #[test]
    fn test_accepted_move_clear_destination() {
        let mut confirm = scripted(vec![true]);
        let outcome = resolve(false, MovePolicy::default(), &mut confirm).unwrap();
        assert_eq!(outcome, Resolution::Move);
    }

    #[test]
    fn test_declined_overwrite_aborts_accepted_move() {
        let mut confirm = scripted(vec![true, false]);
        let outcome = resolve(true, MovePolicy::default(), &mut confirm).unwrap();
        assert_eq!(outcome, Resolution::DeclinedOverwrite);
    }

    #[test]
    fn test_move_all_skips_move_prompt() {
        let policy = MovePolicy { move_all: true, overwrite_all: false };
        let mut confirm = |_: &str| -> bool { panic!("no prompt expected") };
        let outcome = resolve(false, policy, &mut confirm).unwrap();
        assert_eq!(outcome, Resolution::Move);
    }

    #[test]
    fn test_move_all_still_asks_before_overwriting() {
        let policy = MovePolicy { move_all: true, overwrite_all: false };
        let mut prompts = Vec::new();
        let mut confirm = |prompt: &str| {
            prompts.push(prompt.to_string());
            false
        };
        let outcome = resolve(true, policy, &mut confirm).unwrap();
        assert_eq!(outcome, Resolution::DeclinedOverwrite);
        assert_eq!(prompts, vec![OVERWRITE_PROMPT.to_string()]);
    }

    #[test]
    fn test_both_flags_bypass_all_prompts() {
        let policy = MovePolicy { move_all: true, overwrite_all: true };
        let mut confirm = |_: &str| -> bool { panic!("no prompt expected") };
        let outcome = resolve(true, policy, &mut confirm).unwrap();
        assert_eq!(outcome, Resolution::Move);
    }
}
