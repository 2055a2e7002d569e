//! Property tests for direct-candidate filtering.

use proptest::prelude::*;
use sdp_filter::{candidate_type, filter_direct_candidates, CandidateType};

fn candidate_line() -> impl Strategy<Value = String> {
    (
        1u32..100,
        prop_oneof![Just("udp"), Just("tcp")],
        any::<u32>(),
        (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255),
        1024u16..65535,
        prop_oneof![Just("host"), Just("srflx"), Just("prflx"), Just("relay")],
    )
        .prop_map(|(foundation, proto, priority, (a, b, c, d), port, typ)| {
            format!("a=candidate:{foundation} 1 {proto} {priority} {a}.{b}.{c}.{d} {port} typ {typ}")
        })
}

fn other_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("v=0".to_string()),
        Just("s=-".to_string()),
        Just("a=end-of-candidates".to_string()),
        "a=mid:[0-9]{1,2}",
        "m=(audio|video) 9 UDP/TLS/RTP/SAVPF [0-9]{2,3}",
    ]
}

fn sdp_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop_oneof![candidate_line(), other_line()], 0..40)
}

proptest! {
    #[test]
    fn filtered_output_has_no_direct_candidates(lines in sdp_lines()) {
        let sdp = lines.join("\r\n") + "\r\n";
        let filtered = filter_direct_candidates(&sdp);

        for line in filtered.split("\r\n") {
            prop_assert!(!candidate_type(line).is_some_and(CandidateType::is_direct));
        }
    }

    #[test]
    fn non_direct_lines_survive_in_order(lines in sdp_lines()) {
        let sdp = lines.join("\r\n") + "\r\n";
        let expected: Vec<&String> = lines
            .iter()
            .filter(|line| !candidate_type(line).is_some_and(CandidateType::is_direct))
            .collect();

        let filtered = filter_direct_candidates(&sdp);
        let kept: Vec<&str> = filtered.split_terminator("\r\n").collect();

        prop_assert_eq!(kept.len(), expected.len());
        for (kept, expected) in kept.iter().zip(expected) {
            prop_assert_eq!(*kept, expected.as_str());
        }
    }

    #[test]
    fn filtering_is_idempotent(lines in sdp_lines()) {
        let sdp = lines.join("\n");
        let once = filter_direct_candidates(&sdp);
        prop_assert_eq!(filter_direct_candidates(&once), once);
    }
}
