//! SDP text filters for videoroom negotiation descriptors.
//!
//! This crate provides pure text transforms applied to session descriptions
//! before they are handed to the local transport. The main use case is forcing
//! media through a TURN relay: every ICE candidate that describes a direct
//! network path (`host`, `srflx`, `prflx`) is removed from the offer, so the
//! transport can only pair relayed candidates.
//!
//! Filters never fail. Input that does not look like SDP is returned with only
//! the matching candidate lines removed.

/// Prefix of an ICE candidate attribute line.
const CANDIDATE_PREFIX: &str = "a=candidate:";

/// Candidate type that routes media through a relay server.
const RELAY_TYPE: &str = "relay";

/// ICE candidate types as they appear after the `typ` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateType {
    /// Local interface address
    Host,
    /// Server reflexive address learned through STUN
    ServerReflexive,
    /// Peer reflexive address learned during connectivity checks
    PeerReflexive,
    /// Relayed address allocated on a TURN server
    Relay,
}

impl CandidateType {
    /// Parse a candidate type token (`host`, `srflx`, `prflx`, `relay`).
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "host" => Some(Self::Host),
            "srflx" => Some(Self::ServerReflexive),
            "prflx" => Some(Self::PeerReflexive),
            RELAY_TYPE => Some(Self::Relay),
            _ => None,
        }
    }

    /// Whether media for this candidate travels without a relay in between.
    pub fn is_direct(self) -> bool {
        !matches!(self, Self::Relay)
    }
}

/// Extract the candidate type of an `a=candidate:` line.
///
/// Returns `None` for lines that are not candidate attributes, or whose `typ`
/// token is missing or unknown.
///
/// ```rust
/// use sdp_filter::{candidate_type, CandidateType};
///
/// let line = "a=candidate:1 1 udp 2122260223 192.168.1.20 54321 typ host generation 0";
/// assert_eq!(candidate_type(line), Some(CandidateType::Host));
/// assert_eq!(candidate_type("a=mid:0"), None);
/// ```
pub fn candidate_type(line: &str) -> Option<CandidateType> {
    let attribute = line.trim_end_matches(['\r', '\n']).strip_prefix(CANDIDATE_PREFIX)?;

    let mut tokens = attribute.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == "typ" {
            return tokens.next().and_then(CandidateType::parse);
        }
    }
    None
}

/// Remove every direct-path ICE candidate from an SDP blob.
///
/// Candidate lines of type `host`, `srflx` and `prflx` are dropped; `relay`
/// candidates, candidate lines without a recognizable type, and all other lines
/// are kept untouched. The line terminator style of the input (`\r\n` or `\n`)
/// is preserved, including a trailing terminator.
///
/// ```rust
/// let sdp = "v=0\r\n\
///            a=candidate:1 1 udp 2122260223 10.0.0.2 50000 typ host\r\n\
///            a=candidate:2 1 udp 41885439 203.0.113.9 3478 typ relay raddr 0.0.0.0 rport 0\r\n";
///
/// let filtered = sdp_filter::filter_direct_candidates(sdp);
/// assert_eq!(
///     filtered,
///     "v=0\r\na=candidate:2 1 udp 41885439 203.0.113.9 3478 typ relay raddr 0.0.0.0 rport 0\r\n"
/// );
/// ```
pub fn filter_direct_candidates(sdp: &str) -> String {
    let mut filtered = String::with_capacity(sdp.len());

    // split_inclusive keeps each terminator attached to its line
    for line in sdp.split_inclusive('\n') {
        let direct = candidate_type(line).is_some_and(CandidateType::is_direct);
        if !direct {
            filtered.push_str(line);
        }
    }

    filtered
}
