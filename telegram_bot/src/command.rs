pub const TIME_COMMAND: &str = "/time";

/// True when `text` is exactly the `/time` command, ignoring case and
/// surrounding whitespace. The group-chat form `/time@<bot>` is accepted only
/// when `<bot>` is this bot's username.
pub fn is_time_command(text: &str, bot_username: Option<&str>) -> bool {
    let text = text.trim();
    let (command, mention) = match text.split_once('@') {
        Some((command, mention)) => (command, Some(mention)),
        None => (text, None),
    };

    if !command.eq_ignore_ascii_case(TIME_COMMAND) {
        return false;
    }

    match (mention, bot_username) {
        (None, _) => true,
        (Some(mention), Some(username)) => mention.eq_ignore_ascii_case(username),
        (Some(_), None) => false,
    }
}
