//! Attendance intent parsing and target resolution.
//!
//! [`parse_content`] recognizes a fixed set of English phrasings asking for
//! someone to be marked attending ("I want a nametag", "make a tag for
//! <@456>", ...) and extracts the raw target token. [`action_for_event`]
//! applies gateway context on top: the bot must be mentioned, the message
//! must be in the configured server scope, and a mention target must
//! resolve to an identity actually mentioned in the message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Action, ChatEvent, User};

/// What the message asks for. Only attendance requests are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    Attending,
}

/// A parsed request: the kind plus the raw target token (`I`, `me`, or a
/// mention token like `<@456>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub kind: IntentKind,
    pub target: String,
}

/// One alternation over every phrase template, compiled once. The template
/// order is a deliberate tie-break policy: when several phrasings start at
/// the same position, the earlier template wins.
static ATTENDING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let target = r"(\S+)";
    let nametag = r"(?:a (?:name)?tag|one)";
    let templates = [
        format!("{target} is attending"),
        format!("{target} will be attending"),
        format!("{target} will be there"),
        format!("{target} is going"),
        format!("{target} wants? {nametag}"),
        format!("{target} would like {nametag}"),
        format!("make {target} {nametag}"),
        format!("make {nametag} for {target}"),
    ];
    Regex::new(&format!("(?i){}", templates.join("|"))).expect("attendance pattern must compile")
});

/// Parses free-form chat text into an attendance intent.
///
/// Pure and case-insensitive; the first match anywhere in the text wins.
/// Exactly one capture group is non-empty on a match, and its raw text is
/// the target. Non-matching text yields `None`, which is a normal outcome,
/// not an error.
pub fn parse_content(text: &str) -> Option<Intent> {
    let caps = ATTENDING_PATTERN.captures(text)?;
    let target = caps.iter().skip(1).flatten().next()?.as_str().to_string();

    Some(Intent {
        kind: IntentKind::Attending,
        target,
    })
}

/// Turns a gateway event into at most one roster action.
///
/// Messages that do not address the bot, fall outside `server_id`, fail to
/// parse, or name a target that cannot be resolved are dropped silently: a
/// malformed chat message must never take the bot down, and unauthorized
/// messages get no response at all.
pub fn action_for_event(event: &ChatEvent, server_id: &str) -> Option<Action> {
    if !event.bot_is_mentioned {
        return None;
    }
    if let Some(scope) = &event.channel_scope_id {
        if scope != server_id {
            return None;
        }
    }

    let intent = parse_content(&event.text)?;
    let user = resolve_target(&intent.target, event)?;

    match intent.kind {
        IntentKind::Attending => Some(Action::SetAttendance(user, true)),
    }
}

/// Resolves a raw target token against the event's context. `I` and `me`
/// mean the author; a mention token resolves only through the transport's
/// resolved mention list, so spoofed mention text goes nowhere.
fn resolve_target(target: &str, event: &ChatEvent) -> Option<User> {
    if target.eq_ignore_ascii_case("i") || target.eq_ignore_ascii_case("me") {
        return Some(event.author.clone());
    }

    let id = mention_id(target)?;
    event.mentions.iter().find(|u| u.user_id == id).cloned()
}

/// Extracts the id from a `<@123>` or `<@!123>` mention token.
fn mention_id(token: &str) -> Option<&str> {
    let inner = token.strip_prefix("<@")?.strip_suffix('>')?;
    let inner = inner.strip_prefix('!').unwrap_or(inner);
    (!inner.is_empty()).then_some(inner)
}
