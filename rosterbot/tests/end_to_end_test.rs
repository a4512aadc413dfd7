//! End-to-end tests: gateway event → dispatcher → actor → store.

use anyhow::Result;
use async_trait::async_trait;
use rosterbot::{run_bot, BotConfig, ChatGateway, Dispatcher, RosterActor};
use rosterbot_core::{ChatEvent, User};
use storage::RosterRepository;

fn author() -> User {
    User::new("u1", "Alice", None)
}

fn bot() -> User {
    User::new("bot", "rosterbot", None)
}

fn event(text: &str) -> ChatEvent {
    ChatEvent {
        text: text.to_string(),
        author: author(),
        mentions: vec![bot()],
        channel_scope_id: Some("server-1".to_string()),
        bot_is_mentioned: true,
    }
}

/// **Test: "I want a tag" marks the author attending.**
///
/// **Setup:** File-backed DB; actor and dispatcher wired as in the live
/// bot; event mentions the bot in the configured scope.
/// **Action:** Dispatch the event, shut the actor down, reopen the store.
/// **Expected:** Exactly the author is attending.
#[tokio::test]
async fn test_i_want_a_tag_marks_author_attending() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let db_path = dir.path().join("roster.db");
    let db_url = db_path.to_str().unwrap();

    let repo = RosterRepository::new(db_url).await.unwrap();
    let actor = RosterActor::spawn(repo);
    let dispatcher = Dispatcher::new(actor.sender(), "server-1");

    dispatcher.dispatch(&event("<@bot> I want a tag"));

    actor.shutdown().await;

    let repo = RosterRepository::new(db_url).await.unwrap();
    assert_eq!(repo.attending_users().await.unwrap(), vec![author()]);
    repo.close().await;
}

/// **Test: Dropped messages leave no trace.**
///
/// **Setup:** As above.
/// **Action:** Dispatch an unmatched message, a scope-mismatched request,
/// and a spoofed mention, then shut down and reopen.
/// **Expected:** The roster has no attending users.
#[tokio::test]
async fn test_dropped_messages_change_nothing() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let db_path = dir.path().join("roster.db");
    let db_url = db_path.to_str().unwrap();

    let repo = RosterRepository::new(db_url).await.unwrap();
    let actor = RosterActor::spawn(repo);
    let dispatcher = Dispatcher::new(actor.sender(), "server-1");

    dispatcher.dispatch(&event("Let's get some poutine"));

    let mut wrong_scope = event("<@bot> I want a tag");
    wrong_scope.channel_scope_id = Some("server-2".to_string());
    dispatcher.dispatch(&wrong_scope);

    dispatcher.dispatch(&event("<@bot> make a nametag for <@456>"));

    actor.shutdown().await;

    let repo = RosterRepository::new(db_url).await.unwrap();
    assert_eq!(repo.attending_users().await.unwrap(), vec![]);
    repo.close().await;
}

/// Gateway that replays a fixed list of events and disconnects.
struct ScriptedGateway {
    events: Vec<ChatEvent>,
}

#[async_trait]
impl ChatGateway for ScriptedGateway {
    async fn run(self: Box<Self>, dispatcher: Dispatcher) -> Result<()> {
        for event in &self.events {
            dispatcher.dispatch(event);
        }
        Ok(())
    }
}

/// **Test: `run_bot` drives a gateway to completion and persists results.**
///
/// **Setup:** File-backed DB; scripted gateway delivering a self-request
/// and a request on behalf of a mentioned user.
/// **Action:** `run_bot`, then reopen the store.
/// **Expected:** Both users are attending, sorted by nick.
#[tokio::test]
async fn test_run_bot_with_scripted_gateway() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let db_path = dir.path().join("roster.db");
    let db_url = db_path.to_str().unwrap();

    let carol = User::new("456", "Carol", Some("av".to_string()));
    let mut for_carol = event("<@bot> make a nametag for <@456>");
    for_carol.mentions.push(carol.clone());

    let gateway = Box::new(ScriptedGateway {
        events: vec![event("<@bot> I want a tag"), for_carol],
    });

    let config = BotConfig::new("server-1", db_url, "logs/test.log");
    run_bot(config, gateway).await.unwrap();

    let repo = RosterRepository::new(db_url).await.unwrap();
    assert_eq!(
        repo.attending_users().await.unwrap(),
        vec![author(), carol]
    );
    repo.close().await;
}
