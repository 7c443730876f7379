/// Result of a change call that did not fail fatally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The call executed and moved the drop lifecycle forward.
    Completed,
    /// The call was rejected for an expected reason; nothing changed.
    Benign(Notice),
}

/// Expected rejections, surfaced to the caller as user notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// `drop` on a key that already claimed its drop.
    AlreadyDropped,
    /// `transfer` from a key with nothing left to move.
    NoTokens,
    /// `transfer` invoked without a receiver account id.
    ReceiverMissing,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::AlreadyDropped => "Tokens already dropped",
            Notice::NoTokens => "No tokens",
            Notice::ReceiverMissing => "set a receiver",
        }
    }
}

/// Classify a change-call failure by the contract's panic text.
///
/// The only place in the tree that inspects error text. The fragments below
/// are part of the contract surface; if its wording changes upstream,
/// previously benign rejections turn fatal.
pub fn benign_rejection(message: &str) -> Option<Notice> {
    if message.contains("Tokens already dropped") {
        Some(Notice::AlreadyDropped)
    } else if message.contains("No tokens") {
        Some(Notice::NoTokens)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_contract_panics() {
        assert_eq!(
            benign_rejection("Smart contract panicked: Tokens already dropped"),
            Some(Notice::AlreadyDropped)
        );
        assert_eq!(
            benign_rejection("Smart contract panicked: No tokens"),
            Some(Notice::NoTokens)
        );
    }

    #[test]
    fn anything_else_stays_fatal() {
        assert_eq!(benign_rejection("Exceeded the prepaid gas."), None);
        assert_eq!(benign_rejection("Smart contract panicked: tokens already dropped"), None);
        assert_eq!(benign_rejection(""), None);
    }
}
