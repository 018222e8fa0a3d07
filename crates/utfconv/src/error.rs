use thiserror::Error;

/// Failure of a single transcoding call.
///
/// Every kind ends the call at the point it is raised. Lenient mode never
/// produces [`TranscodeError::IllegalSequence`]; it substitutes U+FFFD
/// instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeError {
    /// The source holds a code-unit sequence that does not represent a valid
    /// codepoint. `offset` is the source unit index where the sequence starts.
    #[error("illegal sequence at source unit {offset}")]
    IllegalSequence {
        /// Index of the first unit of the offending sequence.
        offset: usize,
    },

    /// The destination has no room for the units of the current codepoint.
    /// The first `written` destination units are complete and valid.
    #[error("destination exhausted after {written} units ({needed} more required)")]
    DestinationExhausted {
        /// Destination units written before the failure.
        written: usize,
        /// Units the rejected codepoint needed.
        needed: usize,
    },

    /// The worst-case destination for a source of `units` units does not fit
    /// in the address space.
    #[error("source of {units} units is too large to convert")]
    SourceTooLarge {
        /// Source units, counting a partial trailing unit as one.
        units: usize,
    },
}

impl TranscodeError {
    /// Returns `true` for [`TranscodeError::IllegalSequence`].
    #[must_use]
    pub fn is_illegal_sequence(&self) -> bool {
        matches!(self, TranscodeError::IllegalSequence { .. })
    }
}
