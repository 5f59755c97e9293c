use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tokio::sync::RwLock;

/// How long a spawned crab waits for a catch before it scuttles away.
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ClaimError {
    #[error("This crab was already caught!")]
    AlreadyClaimed,
    #[error("That crab has scuttled away.")]
    Expired,
}

/// One outstanding spawn. Lives only in memory; removed on expiry.
#[derive(Clone, Debug)]
pub struct CatchSession {
    pub session_id: String,
    pub guild_id: String,
    pub channel_id: u64,
    pub claimed: bool,
    pub created_at: Instant,
}

pub type SessionTracker = Arc<RwLock<HashMap<String, CatchSession>>>;

pub fn new_tracker() -> SessionTracker {
    Arc::new(RwLock::new(HashMap::new()))
}

/// Creates a session for a fresh spawn and returns its id.
pub async fn open(tracker: &SessionTracker, guild_id: &str, channel_id: u64) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let session_id = format!("crab_{guild_id}_{timestamp}");

    let session = CatchSession {
        session_id: session_id.clone(),
        guild_id: guild_id.to_string(),
        channel_id,
        claimed: false,
        created_at: Instant::now(),
    };
    tracker.write().await.insert(session_id.clone(), session);
    session_id
}

/// Redeems a session for one claimant.
///
/// The check-and-set happens under the tracker's write lock, so of any number
/// of concurrent claims exactly one sees `claimed == false` and wins. Later
/// claims get [`ClaimError::AlreadyClaimed`]; claims on a session past its
/// deadline (or already pruned) get [`ClaimError::Expired`].
pub async fn claim(tracker: &SessionTracker, session_id: &str) -> Result<(), ClaimError> {
    let mut sessions = tracker.write().await;
    let session = sessions.get_mut(session_id).ok_or(ClaimError::Expired)?;
    if session.created_at.elapsed() >= SESSION_TIMEOUT {
        return Err(ClaimError::Expired);
    }
    if session.claimed {
        return Err(ClaimError::AlreadyClaimed);
    }
    session.claimed = true;
    Ok(())
}

/// Drops a session at its deadline. Returns true if it was still unclaimed,
/// meaning the spawn message should be edited to show the crab got away.
pub async fn expire(tracker: &SessionTracker, session_id: &str) -> bool {
    tracker
        .write()
        .await
        .remove(session_id)
        .map(|session| !session.claimed)
        .unwrap_or(false)
}

/// Open, unexpired session for a guild, if any. Used by `/catch` to point
/// users at the right channel.
pub async fn open_in_guild(tracker: &SessionTracker, guild_id: &str) -> Option<CatchSession> {
    let sessions = tracker.read().await;
    sessions
        .values()
        .find(|s| {
            s.guild_id == guild_id && !s.claimed && s.created_at.elapsed() < SESSION_TIMEOUT
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_claim_succeeds_once() {
        let tracker = new_tracker();
        let id = open(&tracker, "guild", 1).await;

        assert_eq!(claim(&tracker, &id).await, Ok(()));
        assert_eq!(claim(&tracker, &id).await, Err(ClaimError::AlreadyClaimed));
        assert_eq!(claim(&tracker, &id).await, Err(ClaimError::AlreadyClaimed));
    }

    #[tokio::test]
    async fn test_claim_unknown_session_is_expired() {
        let tracker = new_tracker();
        assert_eq!(
            claim(&tracker, "crab_0_0").await,
            Err(ClaimError::Expired)
        );
    }

    #[tokio::test]
    async fn test_claim_past_deadline_is_expired() {
        let tracker = new_tracker();
        let id = open(&tracker, "guild", 1).await;

        // Backdate the session past its deadline.
        let Some(past) = Instant::now().checked_sub(SESSION_TIMEOUT + Duration::from_secs(1))
        else {
            return;
        };
        tracker.write().await.get_mut(&id).unwrap().created_at = past;

        assert_eq!(claim(&tracker, &id).await, Err(ClaimError::Expired));
    }

    #[tokio::test]
    async fn test_expire_reports_unclaimed_only() {
        let tracker = new_tracker();

        let unclaimed = open(&tracker, "a", 1).await;
        assert!(expire(&tracker, &unclaimed).await);

        let claimed = open(&tracker, "b", 2).await;
        claim(&tracker, &claimed).await.unwrap();
        assert!(!expire(&tracker, &claimed).await);

        // Either way the session is gone afterwards.
        assert_eq!(
            claim(&tracker, &claimed).await,
            Err(ClaimError::Expired)
        );
    }

    #[tokio::test]
    async fn test_open_in_guild_skips_claimed() {
        let tracker = new_tracker();
        let id = open(&tracker, "guild", 7).await;

        let found = open_in_guild(&tracker, "guild").await.unwrap();
        assert_eq!(found.session_id, id);
        assert_eq!(found.channel_id, 7);
        assert!(open_in_guild(&tracker, "other").await.is_none());

        claim(&tracker, &id).await.unwrap();
        assert!(open_in_guild(&tracker, "guild").await.is_none());
    }
}
