//! Descriptor filter seam.

/// Pure text transform applied to an inbound offer's SDP.
///
/// Filters have no failure mode; whatever they return is used as-is.
pub trait DescriptorFilter: Send + Sync {
    /// Transform a media description text.
    fn filter(&self, sdp: &str) -> String;
}

impl<F> DescriptorFilter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn filter(&self, sdp: &str) -> String {
        self(sdp)
    }
}

/// Removes host, server reflexive and peer reflexive candidates so that media
/// can only flow through a TURN relay.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectCandidateFilter;

impl DescriptorFilter for DirectCandidateFilter {
    fn filter(&self, sdp: &str) -> String {
        sdp_filter::filter_direct_candidates(sdp)
    }
}
