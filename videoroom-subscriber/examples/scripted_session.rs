//! Scripted Session Example
//!
//! Walks through a full subscriber lifecycle against an in-process gateway
//! stand-in: join a feed with video off, turn video on, then mute audio.
//! The gateway and the peer connection are scripted so the example runs
//! without any network.
//!
//! Run with: `cargo run -p videoroom-subscriber --example scripted_session`

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use videoroom_subscriber::logging::{init_logging, LoggingMode};
use videoroom_subscriber::{
    AnswerOptions, ExchangeError, JoinOptions, SessionDescription, SignalingExchange,
    SubscriberBuilder, TransactionPayload, TransactionResponse, TransportError,
    TransportNegotiator,
};

const OFFER: &str = "v=0\r\n\
o=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n\
s=-\r\n\
m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n\
a=candidate:1 1 udp 2122260223 192.168.1.20 54321 typ host\r\n\
a=candidate:2 1 udp 1686052607 198.51.100.4 54321 typ srflx raddr 192.168.1.20 rport 54321\r\n\
a=candidate:3 1 udp 41885439 203.0.113.9 3478 typ relay raddr 0.0.0.0 rport 0\r\n\
m=video 9 UDP/TLS/RTP/SAVPF 96\r\n";

/// Gateway stand-in answering each request the way the VideoRoom plugin does.
#[derive(Default)]
struct ScriptedGateway {
    replies: Mutex<VecDeque<TransactionResponse>>,
}

impl ScriptedGateway {
    fn reply(self, data: Value, json: Value) -> Self {
        self.replies
            .lock()
            .push_back(TransactionResponse::new(Some(data), json));
        self
    }
}

#[async_trait]
impl SignalingExchange for ScriptedGateway {
    async fn transaction(
        &self,
        request_kind: &str,
        payload: TransactionPayload,
        expected_kind: &str,
    ) -> Result<TransactionResponse, ExchangeError> {
        println!(
            "   ➡️  {} {} (jsep: {}), waiting for {}",
            request_kind,
            payload.body,
            payload.jsep.is_some(),
            expected_kind
        );
        self.replies
            .lock()
            .pop_front()
            .ok_or(ExchangeError::Closed)
    }
}

/// Peer connection stand-in.
struct PrintingPeer;

#[async_trait]
impl TransportNegotiator for PrintingPeer {
    async fn set_remote_description(
        &self,
        description: &SessionDescription,
    ) -> Result<(), TransportError> {
        let candidates = description
            .sdp
            .lines()
            .filter(|line| line.starts_with("a=candidate:"))
            .count();
        println!("   📥 Remote {:?} applied ({} candidate(s) left)", description.sdp_type, candidates);
        Ok(())
    }

    async fn create_answer(
        &self,
        options: AnswerOptions,
    ) -> Result<SessionDescription, TransportError> {
        println!(
            "   🛠️  Creating answer (audio: {}, video: {})",
            options.offer_to_receive_audio, options.offer_to_receive_video
        );
        Ok(SessionDescription::answer("v=0\r\ns=-\r\n"))
    }

    async fn set_local_description(
        &self,
        description: &SessionDescription,
    ) -> Result<(), TransportError> {
        println!("   📤 Local {:?} applied", description.sdp_type);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingMode::Development)?;

    println!("🎥 VideoRoom Subscriber Example");
    println!("===============================\n");

    let gateway = ScriptedGateway::default()
        .reply(
            json!({ "videoroom": "attached", "room": "room-7", "id": "feed-42" }),
            json!({ "janus": "event", "jsep": { "type": "offer", "sdp": OFFER } }),
        )
        .reply(json!({ "videoroom": "event", "started": "ok" }), json!({ "janus": "event" }))
        .reply(json!({ "videoroom": "event", "configured": "ok" }), json!({ "janus": "event" }))
        .reply(json!({ "videoroom": "event", "configured": "ok" }), json!({ "janus": "event" }));

    let subscriber = SubscriberBuilder::new()
        .with_signaling(Arc::new(gateway))
        .with_negotiator(Arc::new(PrintingPeer))
        .filter_direct_candidates(true)
        .build()?;

    println!("🔗 Joining room-7 as subscriber of feed-42 (video off)");
    let started = subscriber
        .join(
            "room-7",
            "feed-42",
            JoinOptions::new().with_room_secret("1234").with_video(false),
        )
        .await?;
    println!("✅ Started: {}\n", started);

    println!("📹 Turning video on");
    subscriber.enable_video().await?;

    println!("🔇 Muting audio");
    subscriber.disable_audio().await?;

    if let Some(session) = subscriber.session() {
        println!(
            "\n📊 Final session: room {} feed {} audio={} video={}",
            session.room_id, session.feed_id, session.audio_enabled, session.video_enabled
        );
    }

    println!("\n🔁 Trying to join again");
    match subscriber.join("room-7", "feed-42", JoinOptions::new()).await {
        Ok(_) => println!("❌ Unexpected second join"),
        Err(e) => println!("✅ Rejected: {}", e),
    }

    Ok(())
}
